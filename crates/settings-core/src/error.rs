//! Error types for setting reconciliation and the persistence boundary.

use thiserror::Error;

/// Result type for setting operations.
pub type Result<T> = std::result::Result<T, SettingError>;

/// Errors that can occur while reconciling or persisting settings.
#[derive(Error, Debug)]
pub enum SettingError {
    /// Strict fetch on a key with no entry in the working map.
    ///
    /// The strict fetch path is for settings guaranteed to exist because an
    /// earlier stage declared them; it never creates entries.
    #[error("Setting not found: {key}")]
    NotFound {
        /// Key that has no entry.
        key: String,
    },

    /// A call to the host persistence boundary failed.
    ///
    /// Registration propagates this to the caller (a load-time failure is
    /// fatal to extension load). Descriptor reads recover from it by falling
    /// back to the compile-time default instead.
    #[error("Setting host call failed for '{id}': {reason}")]
    HostUnavailable {
        /// Identifier of the setting the call was for.
        id: String,
        /// Description of the host failure.
        reason: String,
        /// Underlying error reported by the host, when available.
        #[source]
        source: Option<Box<dyn std::error::Error + Send + Sync>>,
    },

    /// Persisted setting data could not be decoded.
    #[error("Invalid setting entry: {reason}")]
    InvalidEntry {
        /// Description of why the data is invalid.
        reason: String,
        /// Underlying serde error, when available.
        #[source]
        source: Option<serde_json::Error>,
    },
}

impl SettingError {
    /// Returns true if this error is a strict-fetch miss.
    #[must_use]
    pub const fn is_not_found(&self) -> bool {
        matches!(self, Self::NotFound { .. })
    }

    /// Returns true if this error came from the host persistence boundary.
    #[must_use]
    pub const fn is_host_failure(&self) -> bool {
        matches!(self, Self::HostUnavailable { .. })
    }
}
