//! Guest deny-list configuration.
//!
//! Defaults reproduce the engine's built-in behavior exactly; a settings
//! file can only extend the deny list, never grant guests write access.

use serde::{Deserialize, Serialize};
use std::path::Path;

use crate::error::{Error, Result};

/// Refs and substrings that classify a caller as a guest.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct GuestConfig {
    /// Exact entity refs denied write access.
    #[serde(default = "default_exact_refs")]
    pub exact_refs: Vec<String>,
    /// Case-insensitive substrings; any user ref containing one is a guest.
    #[serde(default = "default_substrings")]
    pub substrings: Vec<String>,
}

impl Default for GuestConfig {
    fn default() -> Self {
        Self {
            exact_refs: default_exact_refs(),
            substrings: default_substrings(),
        }
    }
}

fn default_exact_refs() -> Vec<String> {
    vec!["user:development/guest".to_string(), "user:default/guest".to_string()]
}

fn default_substrings() -> Vec<String> {
    vec!["/guest".to_string()]
}

impl GuestConfig {
    /// Load guest configuration from a JSON settings file.
    ///
    /// Missing fields fall back to the built-in defaults.
    pub fn load(path: &Path) -> Result<Self> {
        let content = std::fs::read_to_string(path).map_err(|e| {
            Error::Config(format!("Failed to read guest config {}: {}", path.display(), e))
        })?;
        serde_json::from_str(&content).map_err(|e| {
            Error::Config(format!("Failed to parse guest config {}: {}", path.display(), e))
        })
    }
}
