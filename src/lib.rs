pub mod access;
pub mod cli;
pub mod config;
pub mod error;
pub mod explain;
pub mod language;
pub mod output;
pub mod sandbox;
pub mod scan;
pub mod tools;

pub use error::{CompassError, Result};

pub const EXIT_SUCCESS: i32 = 0;
pub const EXIT_OPERATION_ERROR: i32 = 1;
pub const EXIT_CONFIG_ERROR: i32 = 2;

#[cfg(test)]
#[path = "lib_tests.rs"]
mod tests;
