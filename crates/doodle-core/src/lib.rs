//! Core types and configuration for the doodlebug/ant simulation.

pub mod config;
pub mod error;
pub mod types;

pub use config::SimConfig;
pub use error::{Error, Result};
pub use types::*;
