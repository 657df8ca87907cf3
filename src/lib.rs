pub mod config;
pub mod constants;
pub mod error;
pub mod grading;
pub mod logging;
pub mod stats;

// Domain data shapes shared across layers
pub mod domain;
