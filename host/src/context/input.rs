//! Key and controller state tracked across ticks.

use crate::event::{ControllerButton, Event, InputState, KeyCode, ModifierKeys};

/// A key and/or controller button that triggers an action.
#[derive(Default, Debug, Copy, Clone, PartialEq, Eq, Hash)]
#[must_use]
pub struct Binding {
    pub key: Option<KeyCode>,
    pub button: Option<ControllerButton>,
    /// Modifiers that must be held for the key to trigger. Ignored for buttons.
    pub modifiers: ModifierKeys,
}

impl Binding {
    pub fn key(key: KeyCode) -> Self {
        Self {
            key: Some(key),
            ..Self::default()
        }
    }

    pub fn button(button: ControllerButton) -> Self {
        Self {
            button: Some(button),
            ..Self::default()
        }
    }

    pub fn with_button(mut self, button: ControllerButton) -> Self {
        self.button = Some(button);
        self
    }

    pub fn with_modifiers(mut self, modifiers: ModifierKeys) -> Self {
        self.modifiers = modifiers;
        self
    }
}

/// Reports binding presses to the binding poller.
pub trait BindingSource {
    /// Whether `binding` transitioned to pressed since the last tick.
    fn pressed_since_last_tick(&self, binding: &Binding) -> bool;
}

#[derive(Debug, Copy, Clone)]
#[must_use]
pub struct InputTracker {
    keys: [InputState; Self::MAX_KEYS],
    buttons: [InputState; Self::MAX_BUTTONS],
    /// Latched on every released to pressed transition, cleared by [`InputTracker::update`].
    typed_keys: [bool; Self::MAX_KEYS],
    typed_buttons: [bool; Self::MAX_BUTTONS],
    modifiers: ModifierKeys,
}

impl Default for InputTracker {
    fn default() -> Self {
        Self {
            keys: [InputState::Released; Self::MAX_KEYS],
            buttons: [InputState::Released; Self::MAX_BUTTONS],
            typed_keys: [false; Self::MAX_KEYS],
            typed_buttons: [false; Self::MAX_BUTTONS],
            modifiers: ModifierKeys::NONE,
        }
    }
}

impl InputTracker {
    // FIXME: Replace with https://doc.rust-lang.org/std/mem/fn.variant_count.html when stable
    const MAX_KEYS: usize = 128;
    const MAX_BUTTONS: usize = 16;

    pub fn new() -> Self {
        Self::default()
    }

    #[inline]
    pub fn key_input(&mut self, keycode: KeyCode, state: InputState) {
        let index = keycode as usize;
        if state == InputState::Pressed && self.keys[index] == InputState::Released {
            self.typed_keys[index] = true;
        }
        self.keys[index] = state;
    }

    #[inline]
    pub fn button_input(&mut self, button: ControllerButton, state: InputState) {
        let index = button as usize;
        if state == InputState::Pressed && self.buttons[index] == InputState::Released {
            self.typed_buttons[index] = true;
        }
        self.buttons[index] = state;
    }

    #[inline]
    pub fn set_modifiers(&mut self, modifiers: ModifierKeys) {
        self.modifiers = modifiers;
    }

    pub fn handle_event(&mut self, event: Event) {
        match event {
            Event::KeyInput { keycode, state } => self.key_input(keycode, state),
            Event::ControllerInput { button, state } => self.button_input(button, state),
            Event::ModifiersChanged(modifiers) => self.set_modifiers(modifiers),
            Event::Unknown => (),
        }
    }

    /// Clear the presses latched this tick. Called once at the end of every tick.
    #[inline]
    pub fn update(&mut self) {
        self.typed_keys = [false; Self::MAX_KEYS];
        self.typed_buttons = [false; Self::MAX_BUTTONS];
    }

    #[inline]
    #[must_use]
    pub fn key_down(&self, keycode: KeyCode) -> bool {
        self.keys[keycode as usize] == InputState::Pressed
    }

    /// Whether a key went down this tick, even if it was released again before the tick ended.
    #[inline]
    #[must_use]
    pub fn key_typed(&self, keycode: KeyCode) -> bool {
        self.typed_keys[keycode as usize]
    }

    /// Whether a controller button went down this tick.
    #[inline]
    #[must_use]
    pub fn button_typed(&self, button: ControllerButton) -> bool {
        self.typed_buttons[button as usize]
    }

    #[inline]
    #[must_use]
    pub fn modifiers_down(&self, modifiers: ModifierKeys) -> bool {
        self.modifiers.contains(modifiers)
    }
}

impl BindingSource for InputTracker {
    fn pressed_since_last_tick(&self, binding: &Binding) -> bool {
        let key = binding
            .key
            .map_or(false, |key| self.key_typed(key) && self.modifiers_down(binding.modifiers));
        let button = binding
            .button
            .map_or(false, |button| self.button_typed(button));
        key || button
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn key_typed_only_on_transition() {
        let mut input = InputTracker::new();
        input.key_input(KeyCode::F5, InputState::Pressed);
        assert!(input.key_typed(KeyCode::F5));
        input.update();
        assert!(input.key_down(KeyCode::F5));
        assert!(!input.key_typed(KeyCode::F5));
        input.key_input(KeyCode::F5, InputState::Released);
        input.update();
        input.key_input(KeyCode::F5, InputState::Pressed);
        assert!(input.key_typed(KeyCode::F5));
    }

    #[test]
    fn tap_within_one_tick() {
        let mut input = InputTracker::new();
        let binding = Binding::key(KeyCode::F5).with_button(ControllerButton::Action1);
        input.handle_event(Event::KeyInput {
            keycode: KeyCode::F5,
            state: InputState::Pressed,
        });
        input.handle_event(Event::KeyInput {
            keycode: KeyCode::F5,
            state: InputState::Released,
        });
        assert!(!input.key_down(KeyCode::F5));
        assert!(input.key_typed(KeyCode::F5));
        assert!(input.pressed_since_last_tick(&binding));
        input.update();
        assert!(!input.pressed_since_last_tick(&binding));

        input.button_input(ControllerButton::Action1, InputState::Pressed);
        input.button_input(ControllerButton::Action1, InputState::Released);
        assert!(input.pressed_since_last_tick(&binding));
    }

    #[test]
    fn binding_requires_modifiers_for_keys() {
        let mut input = InputTracker::new();
        let binding = Binding::key(KeyCode::S).with_modifiers(ModifierKeys::CTRL);
        input.key_input(KeyCode::S, InputState::Pressed);
        assert!(!input.pressed_since_last_tick(&binding));
        input.set_modifiers(ModifierKeys::CTRL);
        assert!(input.pressed_since_last_tick(&binding));
    }

    #[test]
    fn binding_triggers_on_button() {
        let mut input = InputTracker::new();
        let binding = Binding::key(KeyCode::F6).with_button(ControllerButton::DPadUp);
        input.handle_event(Event::ControllerInput {
            button: ControllerButton::DPadUp,
            state: InputState::Pressed,
        });
        assert!(input.pressed_since_last_tick(&binding));
        input.update();
        assert!(!input.pressed_since_last_tick(&binding));
        assert!(!input.pressed_since_last_tick(&Binding::default()));
    }
}
