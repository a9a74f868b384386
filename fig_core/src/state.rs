//! # View State
//!
//! The whole of the viewer's transient UI state in one value, and the pure
//! transitions that move it. Front ends hold a `ViewState`, hand it the
//! catalog plus the user's action, and render whatever comes back.
//!
//! ## State machines
//!
//! ```text
//! Button group:  Hidden ──select(sub-button option)──▶ VisibleWithFirstActive
//!                   ▲                                     │ select_sub(i)
//!                   └──────select(other option)───────────┤
//!                                                         ▼
//!                                       VisibleWithOtherActive(i)
//!
//! Panel:         Collapsed ◀──toggle_panel──▶ Expanded
//! ```
//!
//! ## Example
//!
//! ```rust
//! use fig_core::catalog::Catalog;
//! use fig_core::state::{ButtonGroupState, ViewState};
//!
//! let catalog = Catalog::builtin();
//! let state = ViewState::default().select(&catalog, "figure3").unwrap();
//! assert_eq!(state.button_group(), ButtonGroupState::VisibleWithFirstActive);
//!
//! let state = state.select_sub(&catalog, 1).unwrap();
//! assert_eq!(state.button_group(), ButtonGroupState::VisibleWithOtherActive(1));
//! ```

use serde::{Deserialize, Serialize};
use tracing::debug;

use crate::catalog::Catalog;
use crate::errors::{ViewError, ViewResult};

/// Observable state of the sub-button group.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum ButtonGroupState {
    Hidden,
    VisibleWithFirstActive,
    /// Visible with the sub-button at this index active
    VisibleWithOtherActive(usize),
}

/// Observable state of the accordion panel.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum PanelState {
    Collapsed,
    Expanded,
}

/// Transient UI state of the view selector.
///
/// `Default` is the initial state: nothing selected, empty display, group
/// hidden, panel collapsed with its toggle unhighlighted.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, Default)]
pub struct ViewState {
    /// Identifier of the last selected option
    pub selected_option_id: Option<String>,

    /// Source currently shown by the display target
    pub display_source: Option<String>,

    /// Whether the sub-button group is shown
    pub button_group_visible: bool,

    /// Index of the sub-button carrying the active marker. A single index
    /// means at most one sub-button is ever active.
    ///
    /// Not cleared when the group is hidden; it is simply not rendered.
    pub active_sub_button: Option<usize>,

    /// Whether the accordion panel is expanded.
    ///
    /// The toggle control's highlight always mirrors this flag.
    pub panel_expanded: bool,
}

impl ViewState {
    /// Select an option by identifier.
    ///
    /// Writes the option's resource to the display. Options flagged
    /// `has_sub_buttons` show the group and reset the active marker to the
    /// first sub-button; every other option hides the group.
    ///
    /// # Errors
    ///
    /// `ViewError::UnknownOption` if the catalog has no such option.
    pub fn select(&self, catalog: &Catalog, option_id: &str) -> ViewResult<ViewState> {
        let option = catalog
            .option(option_id)
            .ok_or_else(|| ViewError::unknown_option(option_id))?;

        let mut next = self.clone();
        next.selected_option_id = Some(option.id.clone());
        next.display_source = Some(option.resource.clone());

        if option.has_sub_buttons {
            next.button_group_visible = true;
            next.active_sub_button = Some(0);
        } else {
            next.button_group_visible = false;
        }

        debug!(
            option = %option.id,
            source = %option.resource,
            group = ?next.button_group(),
            "option selected"
        );
        Ok(next)
    }

    /// Activate the sub-button at `index` and show its resource.
    ///
    /// All other sub-buttons lose the active marker. Only defined while the
    /// button group is visible.
    ///
    /// # Errors
    ///
    /// * `ViewError::SubButtonsHidden` if the group is hidden
    /// * `ViewError::SubButtonOutOfRange` if `index` is not a sub-button
    pub fn select_sub(&self, catalog: &Catalog, index: usize) -> ViewResult<ViewState> {
        if !self.button_group_visible {
            return Err(ViewError::SubButtonsHidden);
        }

        let button = catalog
            .sub_button(index)
            .ok_or_else(|| ViewError::sub_button_out_of_range(index, catalog.sub_buttons.len()))?;

        let mut next = self.clone();
        next.active_sub_button = Some(index);
        next.display_source = Some(button.resource.clone());

        debug!(index, source = %button.resource, "sub-button selected");
        Ok(next)
    }

    /// Flip the panel between collapsed and expanded.
    pub fn toggle_panel(&self) -> ViewState {
        let mut next = self.clone();
        next.panel_expanded = !self.panel_expanded;
        debug!(panel = ?next.panel(), "panel toggled");
        next
    }

    /// Current state of the button group state machine
    pub fn button_group(&self) -> ButtonGroupState {
        match (self.button_group_visible, self.active_sub_button) {
            (false, _) => ButtonGroupState::Hidden,
            (true, None) | (true, Some(0)) => ButtonGroupState::VisibleWithFirstActive,
            (true, Some(i)) => ButtonGroupState::VisibleWithOtherActive(i),
        }
    }

    /// Current state of the panel state machine
    pub fn panel(&self) -> PanelState {
        if self.panel_expanded {
            PanelState::Expanded
        } else {
            PanelState::Collapsed
        }
    }

    /// Whether the panel's toggle control carries the highlight
    pub fn toggle_highlighted(&self) -> bool {
        self.panel_expanded
    }

    /// Whether the sub-button at `index` carries the active marker
    pub fn is_sub_button_active(&self, index: usize) -> bool {
        self.active_sub_button == Some(index)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::catalog::{PanelContent, SelectorOption, SubButton};

    fn scenario_catalog() -> Catalog {
        Catalog {
            title: "Scenario".to_string(),
            options: vec![
                SelectorOption::new("figure1", "Figure 1", "a.png"),
                SelectorOption::new("figure3", "Figure 3", "b.png").with_sub_buttons(),
            ],
            sub_buttons: vec![SubButton::new("B1", "b1.png"), SubButton::new("B2", "b2.png")],
            panel: PanelContent::default(),
        }
    }

    fn active_count(state: &ViewState, catalog: &Catalog) -> usize {
        (0..catalog.sub_buttons.len())
            .filter(|i| state.is_sub_button_active(*i))
            .count()
    }

    #[test]
    fn test_initial_state() {
        let state = ViewState::default();
        assert_eq!(state.button_group(), ButtonGroupState::Hidden);
        assert_eq!(state.panel(), PanelState::Collapsed);
        assert!(!state.toggle_highlighted());
        assert!(state.display_source.is_none());
        assert!(state.selected_option_id.is_none());
    }

    #[test]
    fn test_full_scenario() {
        let catalog = scenario_catalog();

        let state = ViewState::default().select(&catalog, "figure3").unwrap();
        assert_eq!(state.display_source.as_deref(), Some("b.png"));
        assert!(state.button_group_visible);
        assert!(state.is_sub_button_active(0));

        let state = state.select_sub(&catalog, 1).unwrap();
        assert_eq!(state.display_source.as_deref(), Some("b2.png"));
        assert!(state.is_sub_button_active(1));
        assert!(!state.is_sub_button_active(0));

        let state = state.select(&catalog, "figure1").unwrap();
        assert_eq!(state.display_source.as_deref(), Some("a.png"));
        assert!(!state.button_group_visible);
        assert_eq!(state.button_group(), ButtonGroupState::Hidden);
    }

    #[test]
    fn test_sub_button_option_resets_to_first_from_any_state() {
        let catalog = scenario_catalog();
        let starts = vec![
            ViewState::default(),
            ViewState::default().select(&catalog, "figure1").unwrap(),
            ViewState::default()
                .select(&catalog, "figure3")
                .unwrap()
                .select_sub(&catalog, 1)
                .unwrap(),
            ViewState::default().toggle_panel(),
        ];

        for start in starts {
            let state = start.select(&catalog, "figure3").unwrap();
            assert_eq!(state.button_group(), ButtonGroupState::VisibleWithFirstActive);
            assert_eq!(state.active_sub_button, Some(0));
            assert_eq!(state.panel_expanded, start.panel_expanded);
        }
    }

    #[test]
    fn test_hiding_keeps_active_marker() {
        let catalog = scenario_catalog();
        let state = ViewState::default()
            .select(&catalog, "figure3")
            .unwrap()
            .select_sub(&catalog, 1)
            .unwrap()
            .select(&catalog, "figure1")
            .unwrap();
        assert_eq!(state.button_group(), ButtonGroupState::Hidden);
        assert_eq!(state.active_sub_button, Some(1));
    }

    #[test]
    fn test_select_sub_is_mutually_exclusive() {
        let catalog = scenario_catalog();
        let mut state = ViewState::default().select(&catalog, "figure3").unwrap();
        for index in [1, 0, 1, 1, 0] {
            state = state.select_sub(&catalog, index).unwrap();
            assert_eq!(active_count(&state, &catalog), 1);
            assert!(state.is_sub_button_active(index));
            assert_eq!(
                state.display_source.as_deref(),
                Some(catalog.sub_buttons[index].resource.as_str())
            );
        }
    }

    #[test]
    fn test_select_first_sub_button_returns_to_first_active() {
        let catalog = scenario_catalog();
        let state = ViewState::default()
            .select(&catalog, "figure3")
            .unwrap()
            .select_sub(&catalog, 1)
            .unwrap()
            .select_sub(&catalog, 0)
            .unwrap();
        assert_eq!(state.button_group(), ButtonGroupState::VisibleWithFirstActive);
    }

    #[test]
    fn test_same_plain_option_twice_is_idempotent() {
        let catalog = scenario_catalog();
        let once = ViewState::default().select(&catalog, "figure1").unwrap();
        let twice = once.select(&catalog, "figure1").unwrap();
        assert_eq!(once, twice);
        assert_eq!(twice.display_source.as_deref(), Some("a.png"));
        assert!(!twice.button_group_visible);
    }

    #[test]
    fn test_toggle_panel_is_involution() {
        let start = ViewState::default();
        let once = start.toggle_panel();
        assert_eq!(once.panel(), PanelState::Expanded);
        assert!(once.toggle_highlighted());

        let twice = once.toggle_panel();
        assert_eq!(twice, start);
        assert_eq!(twice.panel(), PanelState::Collapsed);
        assert!(!twice.toggle_highlighted());
    }

    #[test]
    fn test_toggle_panel_leaves_selection_alone() {
        let catalog = scenario_catalog();
        let selected = ViewState::default().select(&catalog, "figure3").unwrap();
        let toggled = selected.toggle_panel();
        assert_eq!(toggled.display_source, selected.display_source);
        assert_eq!(toggled.button_group(), selected.button_group());
    }

    #[test]
    fn test_unknown_option_is_rejected() {
        let catalog = scenario_catalog();
        let state = ViewState::default().select(&catalog, "figure1").unwrap();
        let err = state.select(&catalog, "figure9").unwrap_err();
        assert_eq!(err, ViewError::unknown_option("figure9"));
        assert_eq!(state.display_source.as_deref(), Some("a.png"));
    }

    #[test]
    fn test_select_sub_while_hidden_is_rejected() {
        let catalog = scenario_catalog();

        let err = ViewState::default().select_sub(&catalog, 1).unwrap_err();
        assert_eq!(err, ViewError::SubButtonsHidden);

        let hidden = ViewState::default()
            .select(&catalog, "figure3")
            .unwrap()
            .select(&catalog, "figure1")
            .unwrap();
        assert_eq!(hidden.select_sub(&catalog, 0).unwrap_err(), ViewError::SubButtonsHidden);
        assert_eq!(hidden.display_source.as_deref(), Some("a.png"));
    }

    #[test]
    fn test_out_of_range_sub_button_is_rejected() {
        let catalog = scenario_catalog();
        let state = ViewState::default().select(&catalog, "figure3").unwrap();
        let err = state.select_sub(&catalog, 2).unwrap_err();
        assert_eq!(err, ViewError::sub_button_out_of_range(2, 2));
    }

    #[test]
    fn test_state_serializes_to_json() {
        let catalog = scenario_catalog();
        let state = ViewState::default().select(&catalog, "figure3").unwrap();
        let json = serde_json::to_value(&state).unwrap();
        assert_eq!(json["display_source"], "b.png");
        assert_eq!(json["button_group_visible"], true);
        assert_eq!(json["active_sub_button"], 0);
    }
}
