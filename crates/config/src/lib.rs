//! Configuration loading for stackplan.
//!
//! Config files: `stackplan.toml`, `stackplan.yaml`, or `stackplan.json`
//! Searched in `./` then `~/.config/stackplan/`.

pub mod error;
pub mod loader;
pub mod schema;

pub use {
    error::{Context, Error, Result},
    loader::{SESSION_FILE_ENV, apply_env_overrides, config_dir, discover_and_load, load_config},
    schema::{DEFAULT_SESSION_FILE, SessionConfig, StackplanConfig, WizardConfig},
};
