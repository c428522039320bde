//! Trait abstractions for the host persistence boundary.

mod host;

pub use host::SettingHost;
