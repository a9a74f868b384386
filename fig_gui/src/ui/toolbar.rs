//! Toolbar component
//!
//! Contains the figure selection control, catalog loading and the theme toggle.

use iced::widget::{button, pick_list, row, text, Space};
use iced::{Alignment, Element, Length, Padding};

use fig_core::catalog::{Catalog, SelectorOption};

use crate::Message;

/// Render the application header with the catalog title
pub fn view_header(title: &str) -> Element<'_, Message> {
    row![
        text("Figsel").size(28),
        Space::new().width(Length::Fill),
        text(title).size(14),
    ]
    .align_y(Alignment::Center)
    .into()
}

/// Render the toolbar: figure picker on the left, file and theme actions on the right
pub fn view_toolbar<'a>(
    catalog: &'a Catalog,
    selected_option_id: Option<&str>,
    dark_mode: bool,
) -> Element<'a, Message> {
    let selected: Option<&SelectorOption> =
        selected_option_id.and_then(|id| catalog.option(id));

    let figure_picker = pick_list(
        catalog.options.as_slice(),
        selected,
        |option: SelectorOption| Message::FigureSelected(option.id),
    )
    .placeholder("Select a figure")
    .width(Length::Fixed(220.0))
    .text_size(12);

    let theme_label = if dark_mode { "Light Mode" } else { "Dark Mode" };

    row![
        text("Figure:").size(12),
        Space::new().width(8),
        figure_picker,
        Space::new().width(Length::Fill),
        button(text("Open Catalog").size(11))
            .on_press(Message::OpenCatalog)
            .padding(Padding::from([4, 8]))
            .style(button::secondary),
        Space::new().width(4),
        button(text(theme_label).size(11))
            .on_press(Message::ToggleDarkMode)
            .padding(Padding::from([4, 8]))
            .style(button::secondary),
    ]
    .padding(Padding::from([4, 0]))
    .align_y(Alignment::Center)
    .into()
}
