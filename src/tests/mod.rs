pub mod common;

mod service_errors;
