pub mod blocking_log_reader;
pub mod log_reader;
