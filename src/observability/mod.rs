// Observability: metrics

pub mod metrics;

pub use metrics::init;
