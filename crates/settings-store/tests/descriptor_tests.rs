//! Descriptor registration and fail-soft read tests.
//!
//! Uses hand-rolled host doubles: an in-memory host that persists entries the
//! way the runtime does (first registration wins), and a host that rejects
//! every call.

use async_trait::async_trait;
use settings_core::traits::SettingHost;
use settings_core::{
    Result, SettingEntry, SettingError, SettingRegistration, SettingScope, SettingUi,
    SettingValue,
};
use settings_store::{DeclaredSetting, SettingDescriptor, register_all};
use std::collections::HashMap;
use std::sync::Mutex;

struct MemoryHost {
    entries: Mutex<HashMap<String, SettingEntry>>,
}

impl MemoryHost {
    fn new() -> Self {
        Self {
            entries: Mutex::new(HashMap::new()),
        }
    }

    fn insert(&self, id: &str, entry: SettingEntry) {
        self.entries.lock().unwrap().insert(id.to_string(), entry);
    }
}

#[async_trait]
impl SettingHost for MemoryHost {
    async fn register_setting(&self, id: &str, registration: SettingRegistration) -> Result<()> {
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

struct UnavailableHost;

#[async_trait]
impl SettingHost for UnavailableHost {
    async fn register_setting(&self, id: &str, _registration: SettingRegistration) -> Result<()> {
        Err(SettingError::HostUnavailable {
            id: id.to_string(),
            reason: "host rejected the call".to_string(),
            source: None,
        })
    }

    async fn get_setting(&self, id: &str) -> Result<SettingEntry> {
        Err(SettingError::HostUnavailable {
            id: id.to_string(),
            reason: "host rejected the call".to_string(),
            source: None,
        })
    }
}

// ============================================================================
// Registration
// ============================================================================

#[tokio::test]
async fn test_register_persists_initial_entry() {
    let host = MemoryHost::new();
    let descriptor = SettingDescriptor::new("language", "en".to_string(), SettingScope::Extension)
        .with_ui(SettingUi::textbox("Language"));

    descriptor.register(&host).await.unwrap();

    let entry = host.get_setting("language").await.unwrap();
    assert_eq!(
        entry,
        SettingEntry::from_default("en".to_string(), Some(SettingUi::textbox("Language")))
    );
}

#[tokio::test]
async fn test_register_failure_propagates() {
    let descriptor = SettingDescriptor::new("language", "en".to_string(), SettingScope::Extension);

    let result = descriptor.register(&UnavailableHost).await;
    assert!(matches!(result, Err(e) if e.is_host_failure()));
}

#[tokio::test]
async fn test_register_all_registers_in_order() {
    let host = MemoryHost::new();
    let language = SettingDescriptor::new("language", "en".to_string(), SettingScope::Extension);
    let nsfw = SettingDescriptor::new("nsfw", false, SettingScope::Search);
    let throttle = SettingDescriptor::new("throttle", 0.0, SettingScope::Extension)
        .with_ui(SettingUi::slider(0.0, 100.0, 1.0, "Throttle"));

    register_all(&host, &[&language, &nsfw, &throttle])
        .await
        .unwrap();

    assert!(host.get_setting("language").await.is_ok());
    assert!(host.get_setting("nsfw").await.is_ok());
    assert!(host.get_setting("throttle").await.is_ok());
}

#[tokio::test]
async fn test_register_all_stops_at_first_failure() {
    let result = register_all(
        &UnavailableHost,
        &[
            &SettingDescriptor::new("a", 0.0, SettingScope::Extension) as &dyn DeclaredSetting,
            &SettingDescriptor::new("b", 0.0, SettingScope::Extension),
        ],
    )
    .await;

    assert!(matches!(result, Err(e) if e.is_host_failure()));
}

// ============================================================================
// Fail-soft reads
// ============================================================================

#[tokio::test]
async fn test_get_returns_persisted_value() {
    let host = MemoryHost::new();
    let descriptor = SettingDescriptor::new("language", "en".to_string(), SettingScope::Extension);
    descriptor.register(&host).await.unwrap();

    // User changed the value after registration.
    host.insert(
        "language",
        SettingEntry::new(
            SettingValue::String {
                val: "de".to_string(),
                default_val: "en".to_string(),
            },
            None,
        ),
    );

    assert_eq!(descriptor.get(&host).await, "de");
}

#[tokio::test]
async fn test_get_falls_back_to_default_on_host_failure() {
    let descriptor = SettingDescriptor::new("language", "en".to_string(), SettingScope::Extension);

    assert_eq!(descriptor.get(&UnavailableHost).await, "en");
}

#[tokio::test]
async fn test_get_falls_back_to_default_on_missing_setting() {
    let host = MemoryHost::new();
    let descriptor = SettingDescriptor::new("throttle", 25.0, SettingScope::Extension);

    assert_eq!(descriptor.get(&host).await, 25.0);
}

#[tokio::test]
async fn test_get_falls_back_to_default_on_kind_drift() {
    let host = MemoryHost::new();
    host.insert(
        "throttle",
        SettingEntry::from_default("not a number".to_string(), None),
    );
    let descriptor = SettingDescriptor::new("throttle", 25.0, SettingScope::Extension);

    assert_eq!(descriptor.get(&host).await, 25.0);
}
