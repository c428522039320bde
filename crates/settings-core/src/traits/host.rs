//! Host persistence boundary.
//!
//! The hosting runtime owns durable storage for top-level settings. This
//! module defines the `SettingHost` trait this crate uses to talk to it:
//! two single-shot asynchronous primitives, with no retry at this layer.

use crate::entry::{SettingEntry, SettingRegistration};
use crate::error::Result;
use async_trait::async_trait;

/// Persists top-level settings on behalf of an extension.
///
/// Implementations must be `Send + Sync`; calls are single-shot and any
/// retry or cancellation policy belongs to the host, not the caller.
/// Idempotence of registration is also the host's responsibility: this
/// crate issues one `register_setting` call per setting per extension load.
///
/// # Examples
///
/// ```
/// use settings_core::traits::SettingHost;
/// use settings_core::{Result, SettingEntry, SettingError, SettingRegistration};
/// use async_trait::async_trait;
/// use std::collections::HashMap;
/// use std::sync::Mutex;
///
/// struct MemoryHost {
///     entries: Mutex<HashMap<String, SettingEntry>>,
/// }
///
/// #[async_trait]
/// impl SettingHost for MemoryHost {
///     async fn register_setting(
///         &self,
///         id: &str,
///         registration: SettingRegistration,
///     ) -> Result<()> {
///         let mut entries = self.entries.lock().unwrap();
///         entries
///             .entry(id.to_string())
///             .or_insert(registration.setting);
///         Ok(())
///     }
///
///     async fn get_setting(&self, id: &str) -> Result<SettingEntry> {
///         let entries = self.entries.lock().unwrap();
///         entries
///             .get(id)
///             .cloned()
///             .ok_or_else(|| SettingError::NotFound { key: id.to_string() })
///     }
/// }
/// ```
#[async_trait]
pub trait SettingHost: Send + Sync {
    /// Registers a top-level setting with the host.
    ///
    /// Persists the initial entry if the host has none for `id`; the host
    /// keeps the existing entry otherwise.
    ///
    /// # Errors
    ///
    /// Returns an error if the host rejects the call. Callers on the
    /// extension-load path treat this as fatal.
    async fn register_setting(&self, id: &str, registration: SettingRegistration) -> Result<()>;

    /// Reads the persisted entry for a registered setting.
    ///
    /// # Errors
    ///
    /// Returns an error if the host call fails or the setting is unknown.
    async fn get_setting(&self, id: &str) -> Result<SettingEntry>;
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::entry::SettingScope;
    use crate::error::SettingError;
    use std::collections::HashMap;
    use std::sync::Mutex;

    struct TestHost {
        entries: Mutex<HashMap<String, SettingEntry>>,
    }

    impl TestHost {
        fn new() -> Self {
            Self {
                entries: Mutex::new(HashMap::new()),
            }
        }
    }

    #[async_trait]
    impl SettingHost for TestHost {
        async fn register_setting(
            &self,
            id: &str,
            registration: SettingRegistration,
        ) -> Result<()> {
            let mut entries = self.entries.lock().unwrap();
            entries
                .entry(id.to_string())
                .or_insert(registration.setting);
            Ok(())
        }

        async fn get_setting(&self, id: &str) -> Result<SettingEntry> {
            let entries = self.entries.lock().unwrap();
            entries
                .get(id)
                .cloned()
                .ok_or_else(|| SettingError::NotFound { key: id.to_string() })
        }
    }

    #[tokio::test]
    async fn test_register_then_get() {
        let host = TestHost::new();
        let registration = SettingRegistration {
            setting: SettingEntry::from_default("en".to_string(), None),
            scope: SettingScope::Extension,
        };

        host.register_setting("language", registration.clone())
            .await
            .unwrap();

        let entry = host.get_setting("language").await.unwrap();
        assert_eq!(entry, registration.setting);
    }

    #[tokio::test]
    async fn test_register_keeps_existing_entry() {
        let host = TestHost::new();
        let first = SettingRegistration {
            setting: SettingEntry::from_default("en".to_string(), None),
            scope: SettingScope::Extension,
        };
        let second = SettingRegistration {
            setting: SettingEntry::from_default("de".to_string(), None),
            scope: SettingScope::Extension,
        };

        host.register_setting("language", first.clone()).await.unwrap();
        host.register_setting("language", second).await.unwrap();

        let entry = host.get_setting("language").await.unwrap();
        assert_eq!(entry, first.setting);
    }

    #[tokio::test]
    async fn test_get_unknown_setting_fails() {
        let host = TestHost::new();
        let result = host.get_setting("missing").await;
        assert!(matches!(result, Err(SettingError::NotFound { .. })));
    }
}
