//! # View Events
//!
//! Typed payloads for the three user interactions. Front ends translate
//! their own input (iced messages, CLI lines) into a [`ViewEvent`] and feed
//! it to [`apply_event`]; nothing else mutates a [`ViewState`].
//!
//! Events are JSON-serializable so an interaction sequence can be stored and
//! replayed:
//!
//! ```rust
//! use fig_core::catalog::Catalog;
//! use fig_core::events::{replay, ViewEvent};
//!
//! let catalog = Catalog::builtin();
//! let events: Vec<ViewEvent> = serde_json::from_str(
//!     r#"[{"event":"select","option_id":"figure3"},{"event":"select_sub","index":1}]"#,
//! ).unwrap();
//!
//! let state = replay(&catalog, &events).unwrap();
//! assert_eq!(state.active_sub_button, Some(1));
//! ```

use serde::{Deserialize, Serialize};
use tracing::warn;

use crate::catalog::Catalog;
use crate::errors::ViewResult;
use crate::state::ViewState;

/// A user interaction with the view selector.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(tag = "event", rename_all = "snake_case")]
pub enum ViewEvent {
    /// A selector option was chosen
    Select { option_id: String },
    /// The sub-button at `index` (document order) was clicked
    SelectSub { index: usize },
    /// The accordion toggle was clicked
    TogglePanel,
}

impl ViewEvent {
    pub fn select(option_id: impl Into<String>) -> Self {
        ViewEvent::Select {
            option_id: option_id.into(),
        }
    }

    pub fn select_sub(index: usize) -> Self {
        ViewEvent::SelectSub { index }
    }
}

/// Apply one event to `state`, returning the next state.
///
/// Rejected events leave the caller's state as it was; the error says why.
pub fn apply_event(state: &ViewState, catalog: &Catalog, event: &ViewEvent) -> ViewResult<ViewState> {
    let result = match event {
        ViewEvent::Select { option_id } => state.select(catalog, option_id),
        ViewEvent::SelectSub { index } => state.select_sub(catalog, *index),
        ViewEvent::TogglePanel => Ok(state.toggle_panel()),
    };

    if let Err(ref e) = result {
        warn!(code = e.error_code(), ?event, "event rejected: {}", e);
    }
    result
}

/// Apply a sequence of events to the initial state.
///
/// Stops at the first rejected event.
pub fn replay(catalog: &Catalog, events: &[ViewEvent]) -> ViewResult<ViewState> {
    events
        .iter()
        .try_fold(ViewState::default(), |state, event| apply_event(&state, catalog, event))
}
