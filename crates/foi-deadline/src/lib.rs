pub mod config;
pub mod deadlines;
pub mod error;
pub mod telemetry;
pub mod tracking;
