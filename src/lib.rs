pub mod codecs;
pub mod config;
pub mod constants;
pub mod error;
pub mod logging;
pub mod pipeline;
pub mod server;

// Application ports/services and their infrastructure adapters
pub mod app;
pub mod infra;

pub mod observability;
