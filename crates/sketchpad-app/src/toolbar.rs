//! Tool buttons and the active-tool indicator.

use sketchpad_core::{MarkerSize, ToolManager, ToolSlot};

/// One tool-selector button.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ToolButton {
    /// Button caption.
    pub label: String,
    /// Tool the button selects.
    pub slot: ToolSlot,
}

/// Ordered tool buttons: the two markers, then one per sticker.
///
/// The selected button is derived from the active tool rather than stored,
/// so exactly one button is marked at any time.
#[derive(Debug, Clone, Default)]
pub struct Toolbar {
    buttons: Vec<ToolButton>,
}

impl Toolbar {
    /// Build buttons for every marker size and palette sticker.
    pub fn from_tools(tools: &ToolManager) -> Self {
        let mut toolbar = Self {
            buttons: [MarkerSize::Thin, MarkerSize::Thick]
                .into_iter()
                .map(|size| ToolButton {
                    label: size.name().to_string(),
                    slot: ToolSlot::Marker(size),
                })
                .collect(),
        };
        toolbar.sync(tools);
        toolbar
    }

    /// Add buttons for stickers added to the palette since the last sync.
    /// Returns the new buttons.
    pub fn sync(&mut self, tools: &ToolManager) -> &[ToolButton] {
        let known = self.sticker_count();
        let first_new = self.buttons.len();
        for (index, glyph) in tools.stickers().iter().enumerate().skip(known) {
            self.buttons.push(ToolButton {
                label: glyph.clone(),
                slot: ToolSlot::Sticker(index),
            });
        }
        &self.buttons[first_new..]
    }

    pub fn buttons(&self) -> &[ToolButton] {
        &self.buttons
    }

    /// Index of the button mirroring the active tool.
    pub fn selected_index(&self, current: ToolSlot) -> Option<usize> {
        self.buttons.iter().position(|button| button.slot == current)
    }

    fn sticker_count(&self) -> usize {
        self.buttons
            .iter()
            .filter(|button| matches!(button.slot, ToolSlot::Sticker(_)))
            .count()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_buttons() {
        let tools = ToolManager::new();
        let toolbar = Toolbar::from_tools(&tools);
        let labels: Vec<&str> = toolbar.buttons().iter().map(|b| b.label.as_str()).collect();
        assert_eq!(labels, vec!["Thin", "Thick", "⭐", "🎨", "🐸"]);
        assert_eq!(toolbar.selected_index(tools.current()), Some(0));
    }

    #[test]
    fn test_sync_adds_custom_stickers_once() {
        let mut tools = ToolManager::new();
        let mut toolbar = Toolbar::from_tools(&tools);

        tools.add_sticker("🦀").unwrap();
        let added = toolbar.sync(&tools).to_vec();
        assert_eq!(
            added,
            vec![ToolButton {
                label: "🦀".to_string(),
                slot: ToolSlot::Sticker(3),
            }]
        );
        assert!(toolbar.sync(&tools).is_empty());
        assert_eq!(toolbar.buttons().len(), 6);
    }

    #[test]
    fn test_exactly_one_selected() {
        let mut tools = ToolManager::new();
        let toolbar = Toolbar::from_tools(&tools);

        let selected_count = |tools: &ToolManager| {
            toolbar
                .buttons()
                .iter()
                .filter(|b| b.slot == tools.current())
                .count()
        };

        assert_eq!(selected_count(&tools), 1);
        tools.select_sticker("🎨").unwrap();
        assert_eq!(selected_count(&tools), 1);
        assert_eq!(toolbar.selected_index(tools.current()), Some(3));
        tools.select_marker(MarkerSize::Thick);
        assert_eq!(selected_count(&tools), 1);
        assert_eq!(toolbar.selected_index(tools.current()), Some(1));
    }
}
