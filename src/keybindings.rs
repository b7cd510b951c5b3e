//! Keybindings for editor actions.

use slotmark_ui::{Key, Modifiers};

/// Editor actions that can be bound to keys.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Action {
    /// Remove every selected slot
    DeleteSelection,
}

/// Keybinding configuration for the application.
#[derive(Debug, Clone)]
pub struct KeyBindings {
    /// Hotkey for removing the selected slots
    pub delete_selection: Key,
}

impl Default for KeyBindings {
    fn default() -> Self {
        Self {
            delete_selection: Key::Delete,
        }
    }
}

impl KeyBindings {
    /// Create new keybindings with default values.
    pub fn new() -> Self {
        Self::default()
    }

    /// Get the action that corresponds to a key press, if any.
    pub fn action_for_key(&self, key: Key) -> Option<Action> {
        if key == self.delete_selection {
            Some(Action::DeleteSelection)
        } else {
            None
        }
    }
}

/// Whether the modifier gating the drag-create gesture is held. This is
/// a held modifier rather than a bindable key.
pub fn create_modifier_held(modifiers: Modifiers) -> bool {
    modifiers.ctrl
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_delete_key_maps_to_delete_selection() {
        let bindings = KeyBindings::new();
        assert_eq!(
            bindings.action_for_key(Key::Delete),
            Some(Action::DeleteSelection)
        );
    }

    #[test]
    fn test_unbound_key_has_no_action() {
        let bindings = KeyBindings::new();
        assert_eq!(bindings.action_for_key(Key::Escape), None);
    }

    #[test]
    fn test_create_modifier_is_ctrl() {
        let ctrl = Modifiers {
            ctrl: true,
            ..Modifiers::default()
        };
        assert!(create_modifier_held(ctrl));
        assert!(!create_modifier_held(Modifiers::default()));
    }
}
