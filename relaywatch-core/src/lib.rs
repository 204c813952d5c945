pub mod access_log;
pub mod aggregate;
pub mod classify;
pub mod cli;
pub mod conf;
pub mod engine;
pub mod logging;
pub mod stream;
pub mod summary;
