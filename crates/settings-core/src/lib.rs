//! Data model and host boundary for extension setting reconciliation.
//!
//! This crate provides the foundational types shared by the settings
//! workspace:
//! - Tagged setting values (`SettingValue`, `SettingKind`, `ScalarValue`)
//!   with the closed [`SettingScalar`] union over `String`/`f64`/`bool`
//! - Pure-data UI descriptors (`SettingUi`) with structural equality
//! - The persisted unit per key (`SettingEntry`) and registration payload
//! - The asynchronous host persistence boundary (`traits::SettingHost`)
//! - The error hierarchy (`SettingError`)
//!
//! The reconciliation session itself lives in the `settings-store` crate.

#![deny(unsafe_code)]
#![warn(missing_docs, missing_debug_implementations)]

mod entry;
mod error;
mod types;
mod ui;

pub mod traits;

pub use entry::{SettingEntry, SettingRegistration, SettingScope};
pub use error::{Result, SettingError};
pub use types::{ScalarValue, SettingKind, SettingScalar, SettingValue};
pub use ui::{DropdownOption, SettingUi};
