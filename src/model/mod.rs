pub mod log_request;
