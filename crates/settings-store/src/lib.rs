//! Setting reconciliation sessions and registration handles.
//!
//! This crate carries the reconciliation logic of the settings workspace:
//!
//! - [`SettingStore`] — a per-invocation session that reconciles the persisted
//!   settings map against what the extension declares during that call,
//!   preserving user-entered values wherever the declared type still matches.
//! - [`SettingDescriptor`] — a typed handle for a top-level setting,
//!   registered once with the host at extension load and read back fail-soft.
//!
//! The data model and the host boundary live in `settings-core`.
//!
//! # Examples
//!
//! A per-request path wraps the raw persisted map in a session, declares what
//! it needs, and exports the reconciled view at the end:
//!
//! ```
//! use settings_store::SettingStore;
//! use settings_core::{DropdownOption, SettingUi};
//! use std::collections::HashMap;
//!
//! let mut store = SettingStore::new(HashMap::new());
//!
//! let media = store.get_or_define(
//!     "media",
//!     "par".to_string(),
//!     Some(SettingUi::dropdown(
//!         vec![
//!             DropdownOption::new("par", "Paragraphlist"),
//!             DropdownOption::new("img", "Imagelist"),
//!         ],
//!         "Source Type",
//!     )),
//! );
//! assert_eq!(media, "par");
//!
//! // Hand back to the host for re-persistence.
//! let reconciled = store.into_map();
//! assert_eq!(reconciled.len(), 1);
//! ```

#![deny(unsafe_code)]
#![warn(missing_docs, missing_debug_implementations)]

mod descriptor;
mod store;

pub use descriptor::{DeclaredSetting, SettingDescriptor, register_all};
pub use store::SettingStore;
