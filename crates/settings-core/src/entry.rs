//! Persisted setting entries and registration payloads.

use crate::error::{Result, SettingError};
use crate::types::{SettingScalar, SettingValue};
use crate::ui::SettingUi;
use serde::{Deserialize, Serialize};

/// The unit persisted per setting key: a tagged value plus an optional UI
/// descriptor.
///
/// On the wire, an absent descriptor serializes as `"ui": null`; a missing
/// `ui` field also decodes to `None`.
///
/// # Examples
///
/// ```
/// use settings_core::{SettingEntry, SettingUi};
///
/// let entry = SettingEntry::from_default(
///     "par".to_string(),
///     Some(SettingUi::textbox("Source Type")),
/// );
/// assert_eq!(entry.val.current().as_str(), Some("par"));
/// ```
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct SettingEntry {
    /// The tagged setting value.
    pub val: SettingValue,
    /// Descriptor of the control editing this setting, if it has one.
    #[serde(default)]
    pub ui: Option<SettingUi>,
}

impl SettingEntry {
    /// Creates an entry from an existing value and descriptor.
    #[must_use]
    pub const fn new(val: SettingValue, ui: Option<SettingUi>) -> Self {
        Self { val, ui }
    }

    /// Creates a fresh entry from a declared default, with the current value
    /// set to that default.
    #[must_use]
    pub fn from_default<T: SettingScalar>(default: T, ui: Option<SettingUi>) -> Self {
        Self {
            val: SettingValue::from_default(default),
            ui,
        }
    }

    /// Parses an entry from its JSON wire form.
    ///
    /// # Errors
    ///
    /// Returns [`SettingError::InvalidEntry`] if the JSON is malformed or does
    /// not match the entry shape.
    pub fn from_json(json: &str) -> Result<Self> {
        serde_json::from_str(json).map_err(|e| SettingError::InvalidEntry {
            reason: "failed to parse setting entry".to_string(),
            source: Some(e),
        })
    }

    /// Serializes this entry to its JSON wire form.
    ///
    /// # Errors
    ///
    /// Returns [`SettingError::InvalidEntry`] if serialization fails.
    pub fn to_json(&self) -> Result<String> {
        serde_json::to_string(self).map_err(|e| SettingError::InvalidEntry {
            reason: "failed to serialize setting entry".to_string(),
            source: Some(e),
        })
    }
}

/// Registration type tag: where in the runtime a top-level setting applies.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum SettingScope {
    /// Applies to the extension as a whole.
    Extension,
    /// Applies to the runtime's search surface.
    Search,
}

/// Payload sent to the host when registering a top-level setting.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct SettingRegistration {
    /// Initial entry to persist if the host has none for this id.
    pub setting: SettingEntry,
    /// Registration type tag.
    #[serde(rename = "settingtype")]
    pub scope: SettingScope,
}
