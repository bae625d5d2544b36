pub mod browser;
pub mod download;
pub mod storage;
pub mod time;
