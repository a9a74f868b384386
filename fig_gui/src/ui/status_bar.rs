//! Status Bar (Bottom)
//!
//! Displays:
//! - Catalog file path (or "Built-in catalog")
//! - Current display source
//! - Last rejected action or load error

use std::path::Path;

use iced::widget::{row, text, Space};
use iced::{Element, Length, Padding};

use crate::Message;

/// Render the status bar
pub fn view_status_bar<'a>(
    catalog_path: Option<&'a Path>,
    display_source: Option<&'a str>,
    error_message: Option<&'a str>,
) -> Element<'a, Message> {
    let catalog_info = match catalog_path {
        Some(path) => path.display().to_string(),
        None => "Built-in catalog".to_string(),
    };

    let source_info = display_source.unwrap_or("(nothing shown)");

    row![
        text(catalog_info).size(10),
        Space::new().width(12),
        text(source_info).size(10).color([0.5, 0.5, 0.5]),
        Space::new().width(Length::Fill),
        text(error_message.unwrap_or_default()).size(10).color([0.8, 0.2, 0.2]),
    ]
    .padding(Padding::from([4, 0]))
    .into()
}
