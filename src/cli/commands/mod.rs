pub mod attend;
pub mod config;
pub mod diary;
pub mod init;
pub mod list;
pub mod report;
pub mod stats;
