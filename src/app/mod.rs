pub mod ports;
pub mod sentiment;
