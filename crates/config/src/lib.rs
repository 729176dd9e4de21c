//! RFQ Configuration
//!
//! Configuration management and startup utilities for the RFQ webhook quoter.

pub mod loader;
pub mod settings;
pub mod startup;

pub use loader::{load_config, load_config_from};
pub use settings::{LogFormat, LoggingSettings, QuoterSettings, Settings};
pub use startup::{init_logging, log_startup};
