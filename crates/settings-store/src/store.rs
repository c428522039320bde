//! Per-invocation setting reconciliation sessions.
//!
//! A [`SettingStore`] wraps the snapshot of persisted entries supplied for one
//! call, reconciles it against the settings the extension declares during that
//! call, and exports the reconciled view for re-persistence. Sessions are
//! single-owner and hold no cross-invocation state.

use settings_core::{
    Result, ScalarValue, SettingEntry, SettingError, SettingScalar, SettingUi,
};
use std::collections::HashMap;

/// An in-memory reconciliation session over one invocation's settings.
///
/// For every declared key the session decides whether to create, migrate,
/// preserve, or overwrite the persisted entry:
/// - no entry yet: create one from the declared default
/// - entry of a different kind: reset to the default (type drift is lossy
///   by design, and wins over UI drift)
/// - same kind, different UI descriptor: keep the value, swap the descriptor
/// - same kind, same descriptor: return the stored value untouched
///
/// Keys are recorded in first-declaration order; [`into_map`](Self::into_map)
/// exports only those keys, pruning entries for settings the extension
/// stopped declaring.
///
/// # Examples
///
/// ```
/// use settings_store::SettingStore;
/// use settings_core::SettingUi;
/// use std::collections::HashMap;
///
/// let mut store = SettingStore::new(HashMap::new());
///
/// let speed = store.get_or_define(
///     "speed",
///     1.0,
///     Some(SettingUi::slider(0.25, 4.0, 0.25, "Playback speed")),
/// );
/// assert_eq!(speed, 1.0);
///
/// let reconciled = store.into_map();
/// assert!(reconciled.contains_key("speed"));
/// ```
#[derive(Debug, Clone)]
pub struct SettingStore {
    settings: HashMap<String, SettingEntry>,
    /// Keys declared this session, in first-declaration order. Entries for
    /// keys never declared are dropped on export (zombie pruning).
    touched: Vec<String>,
}

impl SettingStore {
    /// Creates a session over the raw persisted map for one invocation.
    #[must_use]
    pub const fn new(settings: HashMap<String, SettingEntry>) -> Self {
        Self {
            settings,
            touched: Vec::new(),
        }
    }

    /// Creates a session from the JSON form of the raw persisted map.
    ///
    /// # Errors
    ///
    /// Returns [`SettingError::InvalidEntry`] if the JSON is malformed or an
    /// entry does not match the wire shape.
    pub fn from_json(json: &str) -> Result<Self> {
        let settings: HashMap<String, SettingEntry> =
            serde_json::from_str(json).map_err(|e| SettingError::InvalidEntry {
                reason: "failed to parse settings map".to_string(),
                source: Some(e),
            })?;
        Ok(Self::new(settings))
    }

    /// Returns the effective value for `key`, declaring it in the process.
    ///
    /// Total and deterministic: every outcome returns a value of the declared
    /// type. The default's compile-time type fixes the expected kind; a stored
    /// entry of a different kind is discarded and reset to the default. When
    /// only the UI descriptor changed, the stored value is preserved and the
    /// descriptor replaced, so presentation updates never reset user choices.
    ///
    /// Declaring the same key again within one session resolves against the
    /// already-mutated working map and keeps the key's first touched position.
    ///
    /// # Examples
    ///
    /// ```
    /// use settings_store::SettingStore;
    /// use std::collections::HashMap;
    ///
    /// let mut store = SettingStore::new(HashMap::new());
    /// let media = store.get_or_define("media", "par".to_string(), None);
    /// assert_eq!(media, "par");
    /// ```
    pub fn get_or_define<T: SettingScalar>(
        &mut self,
        key: &str,
        default: T,
        ui: Option<SettingUi>,
    ) -> T {
        if !self.touched.iter().any(|touched| touched == key) {
            self.touched.push(key.to_string());
        }

        let Some(entry) = self.settings.get_mut(key) else {
            tracing::debug!(key, "setting not found, creating from default");
            self.settings
                .insert(key.to_string(), SettingEntry::from_default(default.clone(), ui));
            return default;
        };

        if entry.val.kind() != T::KIND {
            // Type drift wins over UI drift: a changed type cannot be
            // meaningfully carried forward.
            tracing::debug!(
                key,
                stored = %entry.val.kind(),
                declared = %T::KIND,
                "setting type changed, overwriting"
            );
            *entry = SettingEntry::from_default(default.clone(), ui);
            return default;
        }

        if entry.ui != ui {
            tracing::debug!(key, "setting UI changed, replacing descriptor");
            entry.ui = ui;
        }

        // Same kind as T::KIND, so the extraction always succeeds; the
        // fallback only keeps this path total without a panic.
        T::from_scalar(entry.val.current()).unwrap_or(default)
    }

    /// Returns the current value for a key that is guaranteed to exist.
    ///
    /// Never creates an entry; this path is for settings fetched in a later
    /// stage after having been declared in an earlier one.
    ///
    /// # Errors
    ///
    /// Returns [`SettingError::NotFound`] if the key has no entry.
    pub fn get(&self, key: &str) -> Result<ScalarValue> {
        self.settings
            .get(key)
            .map(|entry| entry.val.current())
            .ok_or_else(|| SettingError::NotFound {
                key: key.to_string(),
            })
    }

    /// Returns the current value for a key, or `None` if it has no entry.
    #[must_use]
    pub fn try_get(&self, key: &str) -> Option<ScalarValue> {
        self.settings.get(key).map(|entry| entry.val.current())
    }

    /// Returns the keys declared this session, in first-declaration order.
    #[must_use]
    pub fn touched_keys(&self) -> &[String] {
        &self.touched
    }

    /// Consumes the session and returns the reconciled entries for the keys
    /// declared this session.
    ///
    /// Entries present in the input map but never declared during the session
    /// are pruned, so settings an extension stopped using do not accumulate
    /// in the persisted map.
    #[must_use]
    pub fn into_map(mut self) -> HashMap<String, SettingEntry> {
        self.touched
            .iter()
            .filter_map(|key| self.settings.remove_entry(key))
            .collect()
    }

    /// Consumes the session and returns the reconciled map in its JSON form.
    ///
    /// # Errors
    ///
    /// Returns [`SettingError::InvalidEntry`] if serialization fails.
    pub fn into_json(self) -> Result<String> {
        let map = self.into_map();
        serde_json::to_string(&map).map_err(|e| SettingError::InvalidEntry {
            reason: "failed to serialize settings map".to_string(),
            source: Some(e),
        })
    }
}
