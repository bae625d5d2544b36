pub mod board;

pub use board::BoardColumn;
