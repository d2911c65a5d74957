//! Keyboard shortcut registry and documentation.

use crate::app::UiAction;
use sketchpad_core::MarkerSize;

/// A keyboard shortcut definition.
#[derive(Debug, Clone)]
pub struct Shortcut {
    pub key: &'static str,
    pub ctrl: bool,
    pub shift: bool,
    pub action: UiAction,
    pub description: &'static str,
}

impl Shortcut {
    pub fn new(
        key: &'static str,
        ctrl: bool,
        shift: bool,
        action: UiAction,
        description: &'static str,
    ) -> Self {
        Self {
            key,
            ctrl,
            shift,
            action,
            description,
        }
    }

    /// Format the shortcut for display (e.g., "Ctrl+Z").
    pub fn format(&self) -> String {
        let mut parts = Vec::new();
        if self.ctrl {
            parts.push("Ctrl");
        }
        if self.shift {
            parts.push("Shift");
        }
        parts.push(self.key);
        parts.join("+")
    }

    /// Whether a key press triggers this shortcut. Letter keys ignore case.
    pub fn matches(&self, key: &str, ctrl: bool, shift: bool) -> bool {
        self.ctrl == ctrl && self.shift == shift && self.key.eq_ignore_ascii_case(key)
    }
}

/// Registry of all keyboard shortcuts.
pub struct ShortcutRegistry;

impl ShortcutRegistry {
    /// Get all registered shortcuts.
    pub fn all() -> Vec<Shortcut> {
        vec![
            Shortcut::new("Z", true, false, UiAction::Undo, "Undo"),
            Shortcut::new("Z", true, true, UiAction::Redo, "Redo"),
            Shortcut::new("Y", true, false, UiAction::Redo, "Redo"),
            Shortcut::new(
                "1",
                false,
                false,
                UiAction::SelectMarker(MarkerSize::Thin),
                "Thin marker",
            ),
            Shortcut::new(
                "2",
                false,
                false,
                UiAction::SelectMarker(MarkerSize::Thick),
                "Thick marker",
            ),
            Shortcut::new("Delete", true, false, UiAction::Clear, "Clear canvas"),
        ]
    }

    /// Find the action bound to a key press.
    pub fn lookup(key: &str, ctrl: bool, shift: bool) -> Option<UiAction> {
        Self::all()
            .into_iter()
            .find(|shortcut| shortcut.matches(key, ctrl, shift))
            .map(|shortcut| shortcut.action)
    }

    /// Log all shortcuts.
    pub fn log_all() {
        log::info!("Keyboard shortcuts:");
        for shortcut in Self::all() {
            log::info!("  {:12} {}", shortcut.format(), shortcut.description);
        }
    }
}
