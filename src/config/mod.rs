//! Configuration types, CLI options, and constants.

pub mod constants;
mod types;

pub use types::{Config, LogFormat, LogLevel};
