//! Config Module
//!
//! Author-set tuning for the locomotion and look controllers, loadable from
//! JSON and validated before a character is assembled.

pub mod error;
pub mod locomotion_config;

pub use error::ConfigError;
pub use locomotion_config::LocomotionConfig;
