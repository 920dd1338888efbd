//! Validated access to the settings record.

use crate::{
    setting::{SettingKey, SettingValue},
    settings::GraphicsSettings,
    Error, Result,
};

/// The single owned settings instance.
///
/// Every value in the store is always within its setting's domain.
#[derive(Default, Debug, Copy, Clone, PartialEq)]
#[must_use]
pub struct SettingsStore {
    settings: GraphicsSettings,
}

impl SettingsStore {
    /// A store with every setting at its default.
    pub fn new() -> Self {
        Self::default()
    }

    /// Wrap a loaded record, sanitizing any out-of-domain values.
    pub fn from_settings(settings: GraphicsSettings) -> Self {
        let mut store = Self { settings };
        store.sanitize();
        store
    }

    #[inline]
    #[must_use]
    pub fn settings(&self) -> &GraphicsSettings {
        &self.settings
    }

    #[inline]
    pub fn get(&self, key: SettingKey) -> SettingValue {
        self.settings.value(key)
    }

    /// Look up a setting by its persisted name.
    ///
    /// # Errors
    ///
    /// If no setting has that name.
    pub fn get_by_name(&self, name: &str) -> Result<SettingValue> {
        SettingKey::from_name(name)
            .map(|key| self.get(key))
            .ok_or_else(|| Error::UnknownSetting(name.to_owned()))
    }

    /// Set a setting, leaving the store unchanged on error.
    ///
    /// # Errors
    ///
    /// If `value` has the wrong type for `key` or lies outside its domain.
    pub fn set(&mut self, key: SettingKey, value: SettingValue) -> Result<()> {
        let domain = key.domain();
        if !domain.accepts(value) {
            return Err(Error::TypeMismatch { key, value });
        }
        if !domain.contains(value) {
            return Err(Error::OutOfDomain { key, value });
        }
        if !self.settings.write(key, value) {
            return Err(Error::TypeMismatch { key, value });
        }
        tracing::debug!("{key} = {value}");
        Ok(())
    }

    /// Every setting and its value, in declaration order.
    pub fn iter(&self) -> impl Iterator<Item = (SettingKey, SettingValue)> + '_ {
        SettingKey::ALL.into_iter().map(|key| (key, self.get(key)))
    }

    /// Restore a setting to its default.
    pub fn reset(&mut self, key: SettingKey) {
        self.settings.write(key, GraphicsSettings::default_value(key));
    }

    /// Restore every setting to its default.
    pub fn reset_all(&mut self) {
        tracing::debug!("resetting graphic options to defaults");
        self.settings = GraphicsSettings::default();
    }

    /// Bring every value back into its domain, returning how many were changed.
    pub fn sanitize(&mut self) -> usize {
        let mut changed = 0;
        for key in SettingKey::ALL {
            let domain = key.domain();
            let value = self.get(key);
            if domain.contains(value) {
                continue;
            }
            let sanitized = domain.sanitize(value, GraphicsSettings::default_value(key));
            tracing::warn!("{key} = {value} is out of range, using {sanitized}");
            self.settings.write(key, sanitized);
            changed += 1;
        }
        changed
    }
}

impl From<GraphicsSettings> for SettingsStore {
    fn from(settings: GraphicsSettings) -> Self {
        Self::from_settings(settings)
    }
}
