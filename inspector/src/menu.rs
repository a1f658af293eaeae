//! Menu models for the widget host's popup primitive.
//!
//! The host renders popups itself; the inspector only describes the items,
//! which of them are selectable, and which one is currently active. The
//! host reports a pick back by index.

/// A single popup entry.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct MenuItem {
    /// Item text.
    pub label: String,
    /// Whether the item can be picked (unavailable modes are grayed out).
    pub enabled: bool,
    /// Whether the item is the currently active selection.
    pub selected: bool,
}

/// An ordered list of popup entries.
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub struct MenuModel {
    /// The entries, in display order.
    pub items: Vec<MenuItem>,
}

impl MenuModel {
    /// Index of the selected item, if any.
    pub fn selected_index(&self) -> Option<usize> {
        self.items.iter().position(|item| item.selected)
    }

    /// Label of the selected item, if any.
    pub fn selected_label(&self) -> Option<&str> {
        self.items
            .iter()
            .find(|item| item.selected)
            .map(|item| item.label.as_str())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn selected_lookup() {
        let menu = MenuModel {
            items: vec![
                MenuItem {
                    label: "Shaded".into(),
                    enabled: true,
                    selected: false,
                },
                MenuItem {
                    label: "Normals".into(),
                    enabled: false,
                    selected: true,
                },
            ],
        };
        assert_eq!(menu.selected_index(), Some(1));
        assert_eq!(menu.selected_label(), Some("Normals"));
    }
}
