//! Access control and configuration for a synchronized document.
//!
//! [`SyncOptions`] controls whether node edits may be written back and how
//! strictly a node's path is checked against the live document before a save.

use crate::error::{Result, SyncError};
use serde::{Deserialize, Serialize};

/// Controls whether node edits may be committed to the document.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum AccessMode {
    /// Allow both reads and writes (default).
    #[default]
    ReadWrite,
    /// Read-only mode: saves are rejected with [`SyncError::ReadOnly`].
    ReadOnly,
}

/// Options for a synchronized document.
///
/// Use the builder pattern to configure options:
///
/// ```
/// use jsonsync_core::config::{AccessMode, SyncOptions};
///
/// let opts = SyncOptions::new()
///     .access_mode(AccessMode::ReadOnly)
///     .strict_paths(false);
/// assert!(!opts.strict_paths);
/// ```
///
/// Or load them from TOML:
///
/// ```
/// use jsonsync_core::config::SyncOptions;
///
/// let opts = SyncOptions::from_toml_str("access_mode = \"read-only\"").unwrap();
/// assert!(opts.is_read_only());
/// ```
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct SyncOptions {
    /// Whether saves are permitted.
    pub access_mode: AccessMode,
    /// Verify that a node's path still addresses a value of the shape the
    /// node was built from before merging into it.
    pub strict_paths: bool,
    /// Message sent to the notifier after a successful save.
    pub success_message: String,
}

impl SyncOptions {
    /// Create `SyncOptions` with default settings.
    pub fn new() -> Self {
        Self::default()
    }

    /// Set the access mode.
    pub fn access_mode(mut self, mode: AccessMode) -> Self {
        self.access_mode = mode;
        self
    }

    /// Enable or disable stale-path validation.
    pub fn strict_paths(mut self, strict: bool) -> Self {
        self.strict_paths = strict;
        self
    }

    /// Set the success notification text.
    pub fn success_message(mut self, message: impl Into<String>) -> Self {
        self.success_message = message.into();
        self
    }

    /// True when saves are rejected.
    pub fn is_read_only(&self) -> bool {
        self.access_mode == AccessMode::ReadOnly
    }

    /// Parse options from TOML text; missing fields take their defaults.
    pub fn from_toml_str(text: &str) -> Result<Self> {
        toml::from_str(text).map_err(|e| SyncError::Config(e.to_string()))
    }
}

impl Default for SyncOptions {
    fn default() -> Self {
        Self {
            access_mode: AccessMode::ReadWrite,
            strict_paths: true,
            success_message: "Changes saved!".to_string(),
        }
    }
}
