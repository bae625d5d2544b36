pub mod log;

pub use log::AttendanceLog;
