//! Tagged setting values.
//!
//! A setting value is a closed union over the three primitive kinds an
//! extension may declare: strings, numbers, and booleans. Each variant carries
//! the current value together with the declared default, and the variant tag
//! itself is the authoritative type signal used for drift detection during
//! reconciliation.
//!
//! # Examples
//!
//! ```
//! use settings_core::{SettingKind, SettingValue};
//!
//! let value = SettingValue::from_default(0.75_f64);
//! assert_eq!(value.kind(), SettingKind::Number);
//! ```

use serde::{Deserialize, Serialize};
use std::fmt;

/// The kind of a setting value.
///
/// This is the type tag compared when deciding whether a persisted entry can
/// be carried forward for a new declaration, or must be reset because the
/// extension changed the setting's declared type across versions.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum SettingKind {
    /// A UTF-8 string value.
    String,
    /// A numeric value (IEEE 754 double, matching the JSON number model).
    Number,
    /// A boolean value.
    Boolean,
}

impl fmt::Display for SettingKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::String => write!(f, "String"),
            Self::Number => write!(f, "Number"),
            Self::Boolean => write!(f, "Boolean"),
        }
    }
}

/// A tagged setting value holding the current value and its declared default.
///
/// Serialized with the variant name as the `type` tag:
///
/// ```json
/// { "type": "Number", "val": 0.5, "default_val": 0.0 }
/// ```
///
/// Invariant: `val` and `default_val` always share the variant's primitive
/// type, which the closed union enforces by construction.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(tag = "type")]
pub enum SettingValue {
    /// String-kinded value.
    String {
        /// Current value.
        val: String,
        /// Declared default.
        default_val: String,
    },
    /// Number-kinded value.
    Number {
        /// Current value.
        val: f64,
        /// Declared default.
        default_val: f64,
    },
    /// Boolean-kinded value.
    Boolean {
        /// Current value.
        val: bool,
        /// Declared default.
        default_val: bool,
    },
}

impl SettingValue {
    /// Builds a fresh value from a declared default, with `val == default_val`.
    ///
    /// # Examples
    ///
    /// ```
    /// use settings_core::{ScalarValue, SettingValue};
    ///
    /// let value = SettingValue::from_default("en".to_string());
    /// assert_eq!(value.current(), ScalarValue::String("en".to_string()));
    /// assert_eq!(value.current(), value.declared_default());
    /// ```
    #[must_use]
    pub fn from_default<T: SettingScalar>(default: T) -> Self {
        match default.into_scalar() {
            ScalarValue::String(s) => Self::String {
                val: s.clone(),
                default_val: s,
            },
            ScalarValue::Number(n) => Self::Number {
                val: n,
                default_val: n,
            },
            ScalarValue::Boolean(b) => Self::Boolean {
                val: b,
                default_val: b,
            },
        }
    }

    /// Returns the type tag of this value.
    #[must_use]
    pub const fn kind(&self) -> SettingKind {
        match self {
            Self::String { .. } => SettingKind::String,
            Self::Number { .. } => SettingKind::Number,
            Self::Boolean { .. } => SettingKind::Boolean,
        }
    }

    /// Returns the current value as an untyped scalar.
    #[must_use]
    pub fn current(&self) -> ScalarValue {
        match self {
            Self::String { val, .. } => ScalarValue::String(val.clone()),
            Self::Number { val, .. } => ScalarValue::Number(*val),
            Self::Boolean { val, .. } => ScalarValue::Boolean(*val),
        }
    }

    /// Returns the declared default as an untyped scalar.
    #[must_use]
    pub fn declared_default(&self) -> ScalarValue {
        match self {
            Self::String { default_val, .. } => ScalarValue::String(default_val.clone()),
            Self::Number { default_val, .. } => ScalarValue::Number(*default_val),
            Self::Boolean { default_val, .. } => ScalarValue::Boolean(*default_val),
        }
    }
}

/// An untyped setting scalar, for fetch paths where the caller does not pin
/// the value type at compile time.
///
/// # Examples
///
/// ```
/// use settings_core::ScalarValue;
///
/// let value = ScalarValue::from("par");
/// assert_eq!(value.as_str(), Some("par"));
/// assert_eq!(value.as_number(), None);
/// ```
#[derive(Debug, Clone, PartialEq)]
pub enum ScalarValue {
    /// A string scalar.
    String(String),
    /// A numeric scalar.
    Number(f64),
    /// A boolean scalar.
    Boolean(bool),
}

impl ScalarValue {
    /// Returns the kind of this scalar.
    #[must_use]
    pub const fn kind(&self) -> SettingKind {
        match self {
            Self::String(_) => SettingKind::String,
            Self::Number(_) => SettingKind::Number,
            Self::Boolean(_) => SettingKind::Boolean,
        }
    }

    /// Returns the string value, if this is a string scalar.
    #[must_use]
    pub fn as_str(&self) -> Option<&str> {
        match self {
            Self::String(s) => Some(s),
            _ => None,
        }
    }

    /// Returns the numeric value, if this is a number scalar.
    #[must_use]
    pub const fn as_number(&self) -> Option<f64> {
        match self {
            Self::Number(n) => Some(*n),
            _ => None,
        }
    }

    /// Returns the boolean value, if this is a boolean scalar.
    #[must_use]
    pub const fn as_bool(&self) -> Option<bool> {
        match self {
            Self::Boolean(b) => Some(*b),
            _ => None,
        }
    }
}

impl fmt::Display for ScalarValue {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::String(s) => write!(f, "{s}"),
            Self::Number(n) => write!(f, "{n}"),
            Self::Boolean(b) => write!(f, "{b}"),
        }
    }
}

impl From<String> for ScalarValue {
    fn from(s: String) -> Self {
        Self::String(s)
    }
}

impl From<&str> for ScalarValue {
    fn from(s: &str) -> Self {
        Self::String(s.to_string())
    }
}

impl From<f64> for ScalarValue {
    fn from(n: f64) -> Self {
        Self::Number(n)
    }
}

impl From<bool> for ScalarValue {
    fn from(b: bool) -> Self {
        Self::Boolean(b)
    }
}

mod sealed {
    pub trait Sealed {}

    impl Sealed for String {}
    impl Sealed for f64 {}
    impl Sealed for bool {}
}

/// The primitive types a setting may hold, with their compile-time kind tag.
///
/// Sealed over `String`, `f64`, and `bool`. Constraining declare-or-fetch
/// defaults to this trait makes an unsupported setting type unrepresentable,
/// so no "invalid type" failure path exists at runtime.
pub trait SettingScalar: sealed::Sealed + Clone + Send + Sync + 'static {
    /// The kind tag matching this primitive type.
    const KIND: SettingKind;

    /// Wraps this value into an untyped scalar.
    fn into_scalar(self) -> ScalarValue;

    /// Extracts a value of this type from an untyped scalar.
    ///
    /// Returns `None` when the scalar holds a different kind.
    fn from_scalar(value: ScalarValue) -> Option<Self>;
}

impl SettingScalar for String {
    const KIND: SettingKind = SettingKind::String;

    fn into_scalar(self) -> ScalarValue {
        ScalarValue::String(self)
    }

    fn from_scalar(value: ScalarValue) -> Option<Self> {
        match value {
            ScalarValue::String(s) => Some(s),
            _ => None,
        }
    }
}

impl SettingScalar for f64 {
    const KIND: SettingKind = SettingKind::Number;

    fn into_scalar(self) -> ScalarValue {
        ScalarValue::Number(self)
    }

    fn from_scalar(value: ScalarValue) -> Option<Self> {
        match value {
            ScalarValue::Number(n) => Some(n),
            _ => None,
        }
    }
}

impl SettingScalar for bool {
    const KIND: SettingKind = SettingKind::Boolean;

    fn into_scalar(self) -> ScalarValue {
        ScalarValue::Boolean(self)
    }

    fn from_scalar(value: ScalarValue) -> Option<Self> {
        match value {
            ScalarValue::Boolean(b) => Some(b),
            _ => None,
        }
    }
}
