//! Use cases (application services)

pub mod log_message;
