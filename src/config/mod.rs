//! Configuration module for dashboard settings and YAML loading
//!
//! This module provides:
//! - Configuration types (`AppConfig`, `FeedConfig`, `SymbolConfig`)
//! - YAML loading functionality (`load_config`, `load_config_or_default`)
//! - Application constants with environment variable overrides

pub mod constants;
mod loader;
mod types;

// Re-export types
pub use types::{
    AppConfig, FeedConfig, SymbolConfig, DEFAULT_ANCHOR_SYMBOL, DEFAULT_PRIMARY_SYMBOLS,
    DEFAULT_SECONDARY_SYMBOLS,
};

// Re-export loader functions
pub use loader::{load_config, load_config_from_str, load_config_or_default};
