pub mod args;
pub mod podlog_configuration;
