//! UI module for Figsel GUI
//!
//! # Panel Structure
//! - `toolbar` - Header, figure selection control, Open Catalog, theme toggle
//! - `sub_buttons` - Sub-figure button group (only while visible)
//! - `figure_display` - The display target
//! - `accordion` - Collapsible description panel
//! - `status_bar` - Bottom status messages

pub mod accordion;
pub mod figure_display;
pub mod status_bar;
pub mod sub_buttons;
pub mod toolbar;
