//! Configuration Management
//!
//! This module handles loading and validating provider settings from the environment.

pub mod provider;

// Re-export
pub use provider::ProviderConfig;
