//! Typed registration handles for top-level settings.
//!
//! A descriptor is declared once per extension-level setting and used for two
//! things: registering the setting with the host at load time, and reading it
//! back later. Reads are fail-soft: a single corrupt or missing top-level
//! setting must never abort user-facing work, so any read failure falls back
//! to the compile-time default.

use async_trait::async_trait;
use settings_core::traits::SettingHost;
use settings_core::{
    Result, SettingEntry, SettingRegistration, SettingScalar, SettingScope, SettingUi,
};

/// A named, typed declaration of one top-level setting.
///
/// Immutable once built; attach the UI descriptor with
/// [`with_ui`](Self::with_ui) during construction.
///
/// # Examples
///
/// ```
/// use settings_store::SettingDescriptor;
/// use settings_core::{SettingScope, SettingUi};
///
/// let language = SettingDescriptor::new("language", "en".to_string(), SettingScope::Extension)
///     .with_ui(SettingUi::textbox("Language"));
/// assert_eq!(language.id(), "language");
/// ```
#[derive(Debug, Clone)]
pub struct SettingDescriptor<T: SettingScalar> {
    id: String,
    default: T,
    scope: SettingScope,
    ui: Option<SettingUi>,
}

impl<T: SettingScalar> SettingDescriptor<T> {
    /// Creates a descriptor with no UI attached.
    #[must_use]
    pub fn new(id: impl Into<String>, default: T, scope: SettingScope) -> Self {
        Self {
            id: id.into(),
            default,
            scope,
            ui: None,
        }
    }

    /// Attaches the UI descriptor used to present this setting.
    #[must_use]
    pub fn with_ui(mut self, ui: SettingUi) -> Self {
        self.ui = Some(ui);
        self
    }

    /// Returns the setting's identifier.
    #[must_use]
    pub fn id(&self) -> &str {
        &self.id
    }

    /// Returns the compile-time default.
    #[must_use]
    pub const fn default_value(&self) -> &T {
        &self.default
    }

    /// Returns the registration type tag.
    #[must_use]
    pub const fn scope(&self) -> SettingScope {
        self.scope
    }

    fn registration(&self) -> SettingRegistration {
        SettingRegistration {
            setting: SettingEntry::from_default(self.default.clone(), self.ui.clone()),
            scope: self.scope,
        }
    }

    /// Registers this setting with the host.
    ///
    /// The host persists the initial entry if it has none; idempotence for
    /// repeated registrations is the host's responsibility. Called once per
    /// extension load.
    ///
    /// # Errors
    ///
    /// Propagates the host error unchanged; a failure here is fatal to
    /// extension load.
    pub async fn register<H: SettingHost + ?Sized>(&self, host: &H) -> Result<()> {
        host.register_setting(&self.id, self.registration()).await
    }

    /// Reads the current value from the host.
    ///
    /// Fail-soft by contract: on any host failure, and on a persisted entry
    /// whose kind no longer matches this descriptor, the failure is logged
    /// and the compile-time default returned instead.
    pub async fn get<H: SettingHost + ?Sized>(&self, host: &H) -> T {
        match host.get_setting(&self.id).await {
            Ok(entry) => {
                if let Some(value) = T::from_scalar(entry.val.current()) {
                    value
                } else {
                    tracing::error!(
                        id = %self.id,
                        stored = %entry.val.kind(),
                        expected = %T::KIND,
                        "stored setting kind does not match descriptor, using default"
                    );
                    self.default.clone()
                }
            }
            Err(e) => {
                tracing::error!(id = %self.id, error = %e, "failed to get setting, using default");
                self.default.clone()
            }
        }
    }
}

/// Object-safe view of a descriptor, so settings of different value types can
/// be registered together.
#[async_trait]
pub trait DeclaredSetting: Send + Sync {
    /// The setting's identifier.
    fn id(&self) -> &str;

    /// Registers the setting with the host.
    ///
    /// # Errors
    ///
    /// Propagates the host error unchanged.
    async fn register(&self, host: &dyn SettingHost) -> Result<()>;
}

#[async_trait]
impl<T: SettingScalar> DeclaredSetting for SettingDescriptor<T> {
    fn id(&self) -> &str {
        &self.id
    }

    async fn register(&self, host: &dyn SettingHost) -> Result<()> {
        host.register_setting(&self.id, self.registration()).await
    }
}

/// Registers a batch of settings in declaration order, as the extension-load
/// path does.
///
/// Stops at the first failure and propagates it; settings registered before
/// the failure stay registered.
///
/// # Errors
///
/// Propagates the first host error encountered.
pub async fn register_all(
    host: &dyn SettingHost,
    settings: &[&dyn DeclaredSetting],
) -> Result<()> {
    for setting in settings {
        setting.register(host).await?;
        tracing::debug!(id = setting.id(), "registered setting");
    }
    Ok(())
}
