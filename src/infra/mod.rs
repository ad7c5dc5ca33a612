pub mod http_classifier;
pub mod random;
