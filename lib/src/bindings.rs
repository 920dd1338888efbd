//! Input bindings that cycle choice settings.

use crate::{
    setting::{SettingKey, SettingValue},
    store::SettingsStore,
    Error, Result,
};
use graphic_options_host::prelude::*;
use std::collections::BTreeMap;

/// Whether a binding fired on the last poll.
#[derive(Default, Debug, Copy, Clone, PartialEq, Eq, Hash)]
#[must_use]
pub enum BindingState {
    #[default]
    Idle,
    Triggered,
}

#[derive(Debug, Copy, Clone, PartialEq, Eq)]
struct BoundSetting {
    binding: Binding,
    state: BindingState,
}

/// Polls one binding per choice setting each tick.
///
/// Bindings are kept ordered by [`SettingKey`], so simultaneous presses are reported in
/// declaration order.
#[derive(Default, Debug, Clone, PartialEq, Eq)]
#[must_use]
pub struct BindingPoller {
    bound: BTreeMap<SettingKey, BoundSetting>,
}

impl BindingPoller {
    pub fn new() -> Self {
        Self::default()
    }

    /// Bind `key` to `binding`, returning the binding it replaces.
    ///
    /// # Errors
    ///
    /// If `key` is not a choice setting.
    pub fn bind(&mut self, key: SettingKey, binding: Binding) -> Result<Option<Binding>> {
        if !key.domain().is_choice() {
            return Err(Error::NotAChoice(key));
        }
        tracing::debug!("bound {key} to {binding:?}");
        let previous = self.bound.insert(
            key,
            BoundSetting {
                binding,
                state: BindingState::Idle,
            },
        );
        Ok(previous.map(|bound| bound.binding))
    }

    pub fn unbind(&mut self, key: SettingKey) -> Option<Binding> {
        self.bound.remove(&key).map(|bound| bound.binding)
    }

    #[must_use]
    pub fn binding(&self, key: SettingKey) -> Option<&Binding> {
        self.bound.get(&key).map(|bound| &bound.binding)
    }

    pub fn state(&self, key: SettingKey) -> BindingState {
        self.bound
            .get(&key)
            .map_or(BindingState::Idle, |bound| bound.state)
    }

    /// Update every binding from `source`, returning the triggered settings in declaration order.
    pub fn poll<B: BindingSource + ?Sized>(&mut self, source: &B) -> Vec<SettingKey> {
        let mut triggered = Vec::new();
        for (&key, bound) in &mut self.bound {
            bound.state = if source.pressed_since_last_tick(&bound.binding) {
                triggered.push(key);
                BindingState::Triggered
            } else {
                BindingState::Idle
            };
        }
        triggered
    }
}

/// Advance a choice setting to its next ordinal.
///
/// Advancing past the last entry yields the table's fallback, so every built-in table wraps
/// around to its first entry.
///
/// # Errors
///
/// If `key` is not a choice setting.
pub fn advance(store: &mut SettingsStore, key: SettingKey) -> Result<SettingValue> {
    let choices = key.domain().choices().ok_or(Error::NotAChoice(key))?;
    let ordinal = choices.ordinal_of(store.get(key));
    let next = choices.value_at(ordinal.saturating_add(1));
    store.set(key, next)?;
    Ok(next)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn bind_rejects_sliders() {
        let mut poller = BindingPoller::new();
        assert!(matches!(
            poller.bind(SettingKey::LodBias, Binding::key(KeyCode::F1)),
            Err(Error::NotAChoice(SettingKey::LodBias))
        ));
        assert!(matches!(
            poller.bind(SettingKey::ShadowCascade4Split, Binding::key(KeyCode::F1)),
            Err(Error::NotAChoice(_))
        ));
        assert!(poller.binding(SettingKey::LodBias).is_none());
    }

    #[test]
    fn rebind_returns_previous() -> Result<()> {
        let mut poller = BindingPoller::new();
        assert_eq!(poller.bind(SettingKey::Hdr, Binding::key(KeyCode::H))?, None);
        assert_eq!(
            poller.bind(SettingKey::Hdr, Binding::key(KeyCode::J))?,
            Some(Binding::key(KeyCode::H))
        );
        assert_eq!(poller.unbind(SettingKey::Hdr), Some(Binding::key(KeyCode::J)));
        assert_eq!(poller.unbind(SettingKey::Hdr), None);
        Ok(())
    }

    #[test]
    fn poll_in_declaration_order() -> Result<()> {
        let mut poller = BindingPoller::new();
        poller.bind(SettingKey::VSyncCount, Binding::key(KeyCode::F4))?;
        poller.bind(SettingKey::Bloom, Binding::key(KeyCode::F1))?;
        poller.bind(SettingKey::Shadows, Binding::key(KeyCode::F2))?;
        poller.bind(SettingKey::Hdr, Binding::key(KeyCode::F3))?;

        let mut input = InputTracker::new();
        input.key_input(KeyCode::F4, InputState::Pressed);
        input.key_input(KeyCode::F2, InputState::Pressed);
        input.key_input(KeyCode::F1, InputState::Pressed);

        assert_eq!(
            poller.poll(&input),
            [SettingKey::Bloom, SettingKey::Shadows, SettingKey::VSyncCount]
        );
        assert_eq!(poller.state(SettingKey::Shadows), BindingState::Triggered);
        assert_eq!(poller.state(SettingKey::Hdr), BindingState::Idle);

        input.update();
        assert!(poller.poll(&input).is_empty());
        assert_eq!(poller.state(SettingKey::Shadows), BindingState::Idle);
        Ok(())
    }

    #[test]
    fn advance_wraps_to_first_entry() -> Result<()> {
        let mut store = SettingsStore::new();
        store.set(SettingKey::ShadowResolution, ShadowResolution::VeryHigh.into())?;
        assert_eq!(
            advance(&mut store, SettingKey::ShadowResolution)?,
            ShadowResolution::Low.into()
        );
        assert_eq!(
            advance(&mut store, SettingKey::ShadowResolution)?,
            ShadowResolution::Medium.into()
        );
        assert_eq!(advance(&mut store, SettingKey::Bloom)?, false.into());
        assert_eq!(advance(&mut store, SettingKey::Bloom)?, true.into());
        assert!(matches!(
            advance(&mut store, SettingKey::PixelLightCount),
            Err(Error::NotAChoice(_))
        ));
        Ok(())
    }
}
