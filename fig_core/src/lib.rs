//! # fig_core - Figure View Selector Engine
//!
//! `fig_core` holds the logic of Figsel's figure viewer with no UI attached:
//! a catalog of selectable figures, an explicit [`ViewState`], and pure
//! transitions driven by typed [`ViewEvent`]s. The GUI and CLI are thin
//! adapters around it.
//!
//! ## Design Philosophy
//!
//! - **Explicit state**: one struct, one `Default` initial state
//! - **Pure transitions**: `&ViewState -> ViewResult<ViewState>`
//! - **JSON-First**: catalog, state, events and errors all serialize
//! - **Rich Errors**: rejected events say what they referenced
//!
//! ## Quick Start
//!
//! ```rust
//! use fig_core::{apply_event, Catalog, ViewEvent, ViewState};
//!
//! let catalog = Catalog::builtin();
//! let state = ViewState::default();
//! let state = apply_event(&state, &catalog, &ViewEvent::select("figure1")).unwrap();
//! assert_eq!(state.display_source.as_deref(), Some("figures/figure1.png"));
//! assert!(!state.button_group_visible);
//! ```
//!
//! ## Modules
//!
//! - [`catalog`] - Selector options, sub-buttons, panel text
//! - [`state`] - View state and its transitions
//! - [`events`] - Typed interaction events and replay
//! - [`errors`] - Structured error types
//! - [`file_io`] - Catalog files with atomic saves
//! - [`logging`] - tracing subscriber setup for the binaries

pub mod catalog;
pub mod errors;
pub mod events;
pub mod file_io;
pub mod logging;
pub mod state;

// Re-export commonly used types at crate root for convenience
pub use catalog::{Catalog, PanelContent, SelectorOption, SubButton, SUB_BUTTON_OPTION_ID};
pub use errors::{ViewError, ViewResult};
pub use events::{apply_event, replay, ViewEvent};
pub use file_io::{load_catalog, save_catalog};
pub use state::{ButtonGroupState, PanelState, ViewState};
