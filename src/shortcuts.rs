//! Keyboard shortcuts for driving a landscape.
//!
//! Maps crossterm key events to [`Action`]s, and every action to the
//! [`Command`] it stands for.

use crate::landscape::Command;
use crossterm::event::{KeyCode, KeyEvent, KeyModifiers};
use std::collections::HashMap;

/// Context the landscape bindings are registered under.
pub const LANDSCAPE_CONTEXT: &str = "landscape";

/// Highest project slot reachable from the number keys.
pub const MAX_PROJECT_KEY: u8 = 9;

/// Every action a key press can trigger.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Action {
    /// Stop the driving loop
    Quit,
    /// Flip the debug switch
    ToggleDebug,
    /// Switch between showing all keywords and the selection
    ToggleHighlightMode,
    /// Pick a new random selection
    NewSelection,
    /// Flip the label switch
    ToggleLabels,
    /// Flip the header switch
    ToggleHeaders,
    /// Lay out with the next strategy
    ToggleLayout,
    /// Select a loaded project (1-based)
    SelectProject(u8),
}

impl Action {
    /// Stable identifier of the action.
    #[must_use]
    pub const fn id(&self) -> &'static str {
        match self {
            Self::Quit => "quit",
            Self::ToggleDebug => "toggle_debug",
            Self::ToggleHighlightMode => "toggle_highlight_mode",
            Self::NewSelection => "new_selection",
            Self::ToggleLabels => "toggle_labels",
            Self::ToggleHeaders => "toggle_headers",
            Self::ToggleLayout => "toggle_layout",
            Self::SelectProject(_) => "select_project",
        }
    }

    /// The landscape command this action issues.
    #[must_use]
    pub fn command(&self) -> Command {
        match self {
            Self::Quit => Command::Quit,
            Self::ToggleDebug => Command::ToggleDebug,
            Self::ToggleHighlightMode => Command::ToggleHighlightMode,
            Self::NewSelection => Command::RandomSelection,
            Self::ToggleLabels => Command::ToggleLabels,
            Self::ToggleHeaders => Command::ToggleHeaders,
            Self::ToggleLayout => Command::ToggleStrategy,
            Self::SelectProject(slot) => Command::SelectProject(usize::from(*slot)),
        }
    }
}

/// A key binding (key + modifiers).
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct KeyBinding {
    /// Key code
    pub code: KeyCode,
    /// Modifier keys
    pub modifiers: KeyModifiers,
}

impl KeyBinding {
    /// Create a new key binding.
    #[must_use]
    pub const fn new(code: KeyCode, modifiers: KeyModifiers) -> Self {
        Self { code, modifiers }
    }

    /// Create a key binding from a `KeyEvent`.
    #[must_use]
    pub const fn from_event(event: KeyEvent) -> Self {
        Self {
            code: event.code,
            modifiers: event.modifiers,
        }
    }
}

/// Maps (context, key binding) pairs to actions.
pub struct ShortcutRegistry {
    bindings: HashMap<(String, KeyBinding), Action>,
}

impl ShortcutRegistry {
    /// Create a new shortcut registry with default bindings.
    #[must_use]
    pub fn new() -> Self {
        let mut registry = Self {
            bindings: HashMap::new(),
        };

        registry.register_landscape_shortcuts();
        registry
    }

    fn register_landscape_shortcuts(&mut self) {
        use KeyCode as K;
        use KeyModifiers as M;

        let ctx = LANDSCAPE_CONTEXT;

        self.register(ctx, K::Char('q'), M::NONE, Action::Quit);
        self.register(ctx, K::Char('d'), M::NONE, Action::ToggleDebug);
        self.register(ctx, K::Char('p'), M::NONE, Action::ToggleHighlightMode);
        self.register(ctx, K::Char('n'), M::NONE, Action::NewSelection);
        self.register(ctx, K::Char('l'), M::NONE, Action::ToggleLabels);
        self.register(ctx, K::Char('h'), M::NONE, Action::ToggleHeaders);
        self.register(ctx, K::Char('a'), M::NONE, Action::ToggleLayout);

        for slot in 1..=MAX_PROJECT_KEY {
            let digit = char::from(b'0' + slot);
            self.register(ctx, K::Char(digit), M::NONE, Action::SelectProject(slot));
        }
    }

    fn register(&mut self, context: &str, code: KeyCode, modifiers: KeyModifiers, action: Action) {
        let binding = KeyBinding::new(code, modifiers);
        self.bindings.insert((context.to_string(), binding), action);
    }

    /// Look up an action for a given context and key event.
    #[must_use]
    pub fn lookup(&self, context: &str, event: KeyEvent) -> Option<Action> {
        let binding = KeyBinding::from_event(event);
        self.bindings.get(&(context.to_string(), binding)).copied()
    }

    /// Look up the landscape action of a plain character key.
    #[must_use]
    pub fn lookup_char(&self, key: char) -> Option<Action> {
        self.lookup(
            LANDSCAPE_CONTEXT,
            KeyEvent::new(KeyCode::Char(key), KeyModifiers::NONE),
        )
    }

    /// Check if a key event matches a specific action in the given context.
    #[must_use]
    pub fn matches(&self, context: &str, event: KeyEvent, action: Action) -> bool {
        self.lookup(context, event) == Some(action)
    }
}

impl Default for ShortcutRegistry {
    fn default() -> Self {
        Self::new()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_basic_lookup() {
        let registry = ShortcutRegistry::new();

        let event = KeyEvent::new(KeyCode::Char('q'), KeyModifiers::NONE);
        assert_eq!(registry.lookup(LANDSCAPE_CONTEXT, event), Some(Action::Quit));

        let event = KeyEvent::new(KeyCode::Char('a'), KeyModifiers::NONE);
        assert!(registry.matches(LANDSCAPE_CONTEXT, event, Action::ToggleLayout));

        // Modifiers are part of the binding
        let event = KeyEvent::new(KeyCode::Char('q'), KeyModifiers::CONTROL);
        assert_eq!(registry.lookup(LANDSCAPE_CONTEXT, event), None);
    }

    #[test]
    fn test_number_keys_select_projects() {
        let registry = ShortcutRegistry::new();
        assert_eq!(registry.lookup_char('1'), Some(Action::SelectProject(1)));
        assert_eq!(registry.lookup_char('9'), Some(Action::SelectProject(9)));
        assert_eq!(registry.lookup_char('0'), None);
    }

    #[test]
    fn test_actions_map_to_commands() {
        let registry = ShortcutRegistry::new();
        let commands: Vec<Command> = "dpnlh"
            .chars()
            .filter_map(|c| registry.lookup_char(c))
            .map(|a| a.command())
            .collect();

        assert_eq!(
            commands,
            vec![
                Command::ToggleDebug,
                Command::ToggleHighlightMode,
                Command::RandomSelection,
                Command::ToggleLabels,
                Command::ToggleHeaders,
            ]
        );
        assert_eq!(Action::SelectProject(3).command(), Command::SelectProject(3));
        assert_eq!(Action::ToggleLayout.id(), "toggle_layout");
    }

    #[test]
    fn test_unbound_keys() {
        let registry = ShortcutRegistry::new();
        assert_eq!(registry.lookup_char('x'), None);
        assert_eq!(
            registry.lookup(
                "other",
                KeyEvent::new(KeyCode::Char('q'), KeyModifiers::NONE)
            ),
            None
        );
    }
}
