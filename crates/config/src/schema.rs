//! Config schema types (session snapshot, wizard behaviour).

use std::path::PathBuf;

use serde::{Deserialize, Serialize};

/// Snapshot file written when no path is configured.
pub const DEFAULT_SESSION_FILE: &str = "backend_assistant_session.json";

/// Root configuration.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct StackplanConfig {
    pub session: SessionConfig,
    pub wizard: WizardConfig,
}

/// Where the session snapshot lives.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct SessionConfig {
    /// Relative paths resolve against the working directory.
    pub path: PathBuf,
}

impl Default for SessionConfig {
    fn default() -> Self {
        Self {
            path: PathBuf::from(DEFAULT_SESSION_FILE),
        }
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct WizardConfig {
    /// Print the advisory blocks that follow each answer.
    pub show_advice: bool,
}

impl Default for WizardConfig {
    fn default() -> Self {
        Self { show_advice: true }
    }
}

impl StackplanConfig {
    /// Render the effective configuration as pretty TOML.
    pub fn to_toml_string(&self) -> crate::Result<String> {
        use crate::Context;
        toml::to_string_pretty(self).context("serialize config")
    }
}
