pub mod errors;
pub mod validation;
pub mod webhook_log;
