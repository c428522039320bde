//! UI descriptors for setting controls.
//!
//! A descriptor is pure data: it carries everything the hosting runtime needs
//! to reconstruct a control, and nothing else. Equality is structural, which
//! is what the reconciliation session compares when deciding whether an
//! extension changed how a setting is presented.

use serde::{Deserialize, Serialize};

/// Describes the control used to edit a setting.
///
/// Serialized with the variant name as the `type` tag, for example:
///
/// ```json
/// { "type": "Slider", "label": "Volume", "min": 0.0, "max": 100.0, "step": 1.0 }
/// ```
///
/// # Examples
///
/// ```
/// use settings_core::SettingUi;
///
/// let a = SettingUi::slider(0.0, 100.0, 1.0, "Volume");
/// let b = SettingUi::slider(0.0, 100.0, 1.0, "Volume");
/// let c = SettingUi::slider(0.0, 10.0, 1.0, "Volume");
///
/// // Structural equality, not identity.
/// assert_eq!(a, b);
/// assert_ne!(a, c);
/// ```
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(tag = "type")]
pub enum SettingUi {
    /// A file or folder picker.
    PathSelection {
        /// Label shown next to the control.
        label: String,
        /// Picks a folder when true, a file otherwise.
        pickfolder: bool,
    },
    /// A numeric range control.
    Slider {
        /// Label shown next to the control.
        label: String,
        /// Lower bound of the range.
        min: f64,
        /// Upper bound of the range.
        max: f64,
        /// Step between selectable values.
        step: f64,
    },
    /// A boolean toggle.
    Checkbox {
        /// Label shown next to the control.
        label: String,
    },
    /// A free-form text input.
    Textbox {
        /// Label shown next to the control.
        label: String,
    },
    /// A single-choice selection over a fixed option list.
    Dropdown {
        /// Label shown next to the control.
        label: String,
        /// Selectable options, in display order.
        options: Vec<DropdownOption>,
    },
}

impl SettingUi {
    /// Builds a path-selection descriptor.
    #[must_use]
    pub fn path_selection(label: impl Into<String>, pickfolder: bool) -> Self {
        Self::PathSelection {
            label: label.into(),
            pickfolder,
        }
    }

    /// Builds a slider descriptor.
    #[must_use]
    pub fn slider(min: f64, max: f64, step: f64, label: impl Into<String>) -> Self {
        Self::Slider {
            label: label.into(),
            min,
            max,
            step,
        }
    }

    /// Builds a checkbox descriptor.
    #[must_use]
    pub fn checkbox(label: impl Into<String>) -> Self {
        Self::Checkbox {
            label: label.into(),
        }
    }

    /// Builds a textbox descriptor.
    #[must_use]
    pub fn textbox(label: impl Into<String>) -> Self {
        Self::Textbox {
            label: label.into(),
        }
    }

    /// Builds a dropdown descriptor.
    ///
    /// # Examples
    ///
    /// ```
    /// use settings_core::{DropdownOption, SettingUi};
    ///
    /// let ui = SettingUi::dropdown(
    ///     vec![
    ///         DropdownOption::new("par", "Paragraph list"),
    ///         DropdownOption::new("img", "Image list"),
    ///     ],
    ///     "Source Type",
    /// );
    /// ```
    #[must_use]
    pub fn dropdown(options: Vec<DropdownOption>, label: impl Into<String>) -> Self {
        Self::Dropdown {
            label: label.into(),
            options,
        }
    }

    /// Returns the label shown next to the control.
    #[must_use]
    pub fn label(&self) -> &str {
        match self {
            Self::PathSelection { label, .. }
            | Self::Slider { label, .. }
            | Self::Checkbox { label }
            | Self::Textbox { label }
            | Self::Dropdown { label, .. } => label,
        }
    }
}

/// One selectable entry of a [`SettingUi::Dropdown`].
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct DropdownOption {
    /// Stored value when this option is selected.
    pub value: String,
    /// Label shown for this option.
    pub label: String,
}

impl DropdownOption {
    /// Creates a new dropdown option.
    #[must_use]
    pub fn new(value: impl Into<String>, label: impl Into<String>) -> Self {
        Self {
            value: value.into(),
            label: label.into(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_structural_equality() {
        let a = SettingUi::checkbox("Enabled");
        let b = SettingUi::checkbox("Enabled");
        assert_eq!(a, b);

        let c = SettingUi::checkbox("Disabled");
        assert_ne!(a, c);
    }

    #[test]
    fn test_variant_mismatch_is_unequal() {
        let textbox = SettingUi::textbox("Name");
        let checkbox = SettingUi::checkbox("Name");
        assert_ne!(textbox, checkbox);
    }

    #[test]
    fn test_dropdown_option_order_matters() {
        let a = SettingUi::dropdown(
            vec![
                DropdownOption::new("x", "X"),
                DropdownOption::new("y", "Y"),
            ],
            "Pick",
        );
        let b = SettingUi::dropdown(
            vec![
                DropdownOption::new("y", "Y"),
                DropdownOption::new("x", "X"),
            ],
            "Pick",
        );
        assert_ne!(a, b);
    }

    #[test]
    fn test_label_accessor() {
        assert_eq!(SettingUi::slider(0.0, 1.0, 0.1, "Speed").label(), "Speed");
        assert_eq!(SettingUi::path_selection("Library", true).label(), "Library");
    }

    #[test]
    fn test_slider_json_shape() {
        let ui = SettingUi::slider(0.0, 100.0, 1.0, "Throw when browsing");
        let json = serde_json::to_value(&ui).unwrap();
        assert_eq!(
            json,
            serde_json::json!({
                "type": "Slider",
                "label": "Throw when browsing",
                "min": 0.0,
                "max": 100.0,
                "step": 1.0
            })
        );
    }

    #[test]
    fn test_path_selection_json_shape() {
        let ui = SettingUi::path_selection("Download folder", true);
        let json = serde_json::to_value(&ui).unwrap();
        assert_eq!(
            json,
            serde_json::json!({
                "type": "PathSelection",
                "label": "Download folder",
                "pickfolder": true
            })
        );
    }
}
