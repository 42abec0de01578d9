//! Shared error conventions used across the stackplan crates.

pub mod error;

pub use error::FromMessage;
