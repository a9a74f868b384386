//! # Figure Catalog
//!
//! The catalog is the declarative half of the viewer: which figures can be
//! chosen, which sub-figures hang off the figures that have them, and what
//! the accordion panel says. It is read-only to the state machine.
//!
//! ## Structure
//!
//! ```text
//! Catalog
//! ├── title: String
//! ├── options: Vec<SelectorOption>   (document order)
//! ├── sub_buttons: Vec<SubButton>    (document order, index 0 = first)
//! └── panel: PanelContent
//! ```
//!
//! Whether selecting an option reveals the sub-button group is a property of
//! the option (`has_sub_buttons`), not a string comparison in the update
//! logic. The built-in catalog sets it on [`SUB_BUTTON_OPTION_ID`] only.
//!
//! ## Example
//!
//! ```rust
//! use fig_core::catalog::{Catalog, SUB_BUTTON_OPTION_ID};
//!
//! let catalog = Catalog::builtin();
//! assert!(catalog.validate().is_ok());
//! assert!(catalog.option(SUB_BUTTON_OPTION_ID).unwrap().has_sub_buttons);
//! ```

use std::collections::HashSet;
use std::fmt;

use once_cell::sync::Lazy;
use serde::{Deserialize, Serialize};

use crate::errors::{ViewError, ViewResult};

/// Identifier of the built-in option that reveals the sub-button group
pub const SUB_BUTTON_OPTION_ID: &str = "figure3";

static BUILTIN_CATALOG: Lazy<Catalog> = Lazy::new(|| Catalog {
    title: "Figures".to_string(),
    options: vec![
        SelectorOption::new("figure1", "Figure 1", "figures/figure1.png"),
        SelectorOption::new("figure2", "Figure 2", "figures/figure2.png"),
        SelectorOption::new(SUB_BUTTON_OPTION_ID, "Figure 3", "figures/figure3a.png")
            .with_sub_buttons(),
        SelectorOption::new("figure4", "Figure 4", "figures/figure4.png"),
    ],
    sub_buttons: vec![
        SubButton::new("Panel A", "figures/figure3a.png"),
        SubButton::new("Panel B", "figures/figure3b.png"),
    ],
    panel: PanelContent {
        title: "About these figures".to_string(),
        body: "Pick a figure from the list to show it in the display. \
               Figure 3 has two panels; use the buttons under the list to switch between them."
            .to_string(),
    },
});

/// An entry in the selection control.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct SelectorOption {
    /// Unique identifier
    pub id: String,
    /// Text shown in the selection control
    pub label: String,
    /// URL or path written to the display target when selected
    pub resource: String,
    /// Selecting this option reveals the sub-button group
    #[serde(default)]
    pub has_sub_buttons: bool,
}

impl SelectorOption {
    pub fn new(id: impl Into<String>, label: impl Into<String>, resource: impl Into<String>) -> Self {
        SelectorOption {
            id: id.into(),
            label: label.into(),
            resource: resource.into(),
            has_sub_buttons: false,
        }
    }

    /// Mark this option as one that reveals the sub-button group
    pub fn with_sub_buttons(mut self) -> Self {
        self.has_sub_buttons = true;
        self
    }
}

impl fmt::Display for SelectorOption {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.label)
    }
}

/// A button in the sub-selection group.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct SubButton {
    pub label: String,
    pub resource: String,
}

impl SubButton {
    pub fn new(label: impl Into<String>, resource: impl Into<String>) -> Self {
        SubButton {
            label: label.into(),
            resource: resource.into(),
        }
    }
}

/// Heading and text of the accordion panel.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, Default)]
pub struct PanelContent {
    pub title: String,
    pub body: String,
}

/// All options, sub-buttons and panel text the viewer can show.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Catalog {
    #[serde(default)]
    pub title: String,
    pub options: Vec<SelectorOption>,
    #[serde(default)]
    pub sub_buttons: Vec<SubButton>,
    #[serde(default)]
    pub panel: PanelContent,
}

impl Catalog {
    /// The catalog used when no catalog file is given.
    pub fn builtin() -> Self {
        BUILTIN_CATALOG.clone()
    }

    /// Look up an option by identifier.
    pub fn option(&self, id: &str) -> Option<&SelectorOption> {
        self.options.iter().find(|o| o.id == id)
    }

    /// Look up a sub-button by document-order index.
    pub fn sub_button(&self, index: usize) -> Option<&SubButton> {
        self.sub_buttons.get(index)
    }

    /// Check that the catalog can drive the state machine.
    ///
    /// Rejects catalogs with no options, empty or duplicate option ids,
    /// empty resources, or options that reveal an empty sub-button group.
    pub fn validate(&self) -> ViewResult<()> {
        if self.options.is_empty() {
            return Err(ViewError::invalid_catalog("options", "Catalog has no options"));
        }

        let mut seen = HashSet::new();
        for (i, option) in self.options.iter().enumerate() {
            let field = format!("options[{}]", i);
            if option.id.trim().is_empty() {
                return Err(ViewError::invalid_catalog(field, "Option id is empty"));
            }
            if !seen.insert(option.id.as_str()) {
                return Err(ViewError::invalid_catalog(
                    field,
                    format!("Duplicate option id '{}'", option.id),
                ));
            }
            if option.resource.trim().is_empty() {
                return Err(ViewError::invalid_catalog(
                    field,
                    format!("Option '{}' has no resource", option.id),
                ));
            }
            if option.has_sub_buttons && self.sub_buttons.is_empty() {
                return Err(ViewError::invalid_catalog(
                    field,
                    format!("Option '{}' reveals sub-buttons but none are defined", option.id),
                ));
            }
        }

        for (i, button) in self.sub_buttons.iter().enumerate() {
            if button.resource.trim().is_empty() {
                return Err(ViewError::invalid_catalog(
                    format!("sub_buttons[{}]", i),
                    "Sub-button has no resource",
                ));
            }
        }

        Ok(())
    }
}

impl Default for Catalog {
    fn default() -> Self {
        Catalog::builtin()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn two_option_catalog() -> Catalog {
        Catalog {
            title: "Test".to_string(),
            options: vec![
                SelectorOption::new("figure1", "One", "a.png"),
                SelectorOption::new("figure3", "Three", "b.png").with_sub_buttons(),
            ],
            sub_buttons: vec![SubButton::new("B1", "b1.png"), SubButton::new("B2", "b2.png")],
            panel: PanelContent::default(),
        }
    }

    #[test]
    fn test_builtin_catalog_is_valid() {
        let catalog = Catalog::builtin();
        assert!(catalog.validate().is_ok());
        assert_eq!(catalog.options.len(), 4);
        let flagged: Vec<_> = catalog
            .options
            .iter()
            .filter(|o| o.has_sub_buttons)
            .map(|o| o.id.as_str())
            .collect();
        assert_eq!(flagged, vec![SUB_BUTTON_OPTION_ID]);
    }

    #[test]
    fn test_lookups() {
        let catalog = two_option_catalog();
        assert_eq!(catalog.option("figure1").unwrap().resource, "a.png");
        assert!(catalog.option("figure9").is_none());
        assert_eq!(catalog.sub_button(1).unwrap().resource, "b2.png");
        assert!(catalog.sub_button(2).is_none());
    }

    #[test]
    fn test_validate_rejects_empty_options() {
        let mut catalog = two_option_catalog();
        catalog.options.clear();
        let err = catalog.validate().unwrap_err();
        assert_eq!(err.error_code(), "INVALID_CATALOG");
    }

    #[test]
    fn test_validate_rejects_duplicate_ids() {
        let mut catalog = two_option_catalog();
        catalog.options.push(SelectorOption::new("figure1", "Again", "c.png"));
        match catalog.validate() {
            Err(ViewError::InvalidCatalog { field, reason }) => {
                assert_eq!(field, "options[2]");
                assert!(reason.contains("Duplicate"));
            }
            other => panic!("expected InvalidCatalog, got {:?}", other),
        }
    }

    #[test]
    fn test_validate_rejects_sub_button_option_without_buttons() {
        let mut catalog = two_option_catalog();
        catalog.sub_buttons.clear();
        assert!(catalog.validate().is_err());
    }

    #[test]
    fn test_validate_rejects_empty_resource() {
        let mut catalog = two_option_catalog();
        catalog.sub_buttons[0].resource = "  ".to_string();
        assert!(catalog.validate().is_err());
    }

    #[test]
    fn test_option_display_uses_label() {
        let option = SelectorOption::new("figure1", "Figure 1", "a.png");
        assert_eq!(option.to_string(), "Figure 1");
    }

    #[test]
    fn test_has_sub_buttons_defaults_to_false() {
        let json = r#"{"options":[{"id":"f","label":"F","resource":"f.png"}]}"#;
        let catalog: Catalog = serde_json::from_str(json).unwrap();
        assert!(!catalog.options[0].has_sub_buttons);
        assert!(catalog.sub_buttons.is_empty());
        assert!(catalog.validate().is_ok());
    }
}
