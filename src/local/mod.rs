pub mod bridge;
pub mod monitor;
pub mod process_file;
