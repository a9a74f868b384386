//! Accordion panel
//!
//! A header button that expands/collapses a single body of text. The
//! header uses the primary style while the panel is expanded.

use iced::widget::{button, column, container, row, text, Column, Space};
use iced::{Alignment, Element, Length, Padding};

use fig_core::catalog::PanelContent;

use crate::Message;

/// Render the accordion toggle and, when expanded, its body
pub fn view_accordion(panel: &PanelContent, expanded: bool) -> Element<'_, Message> {
    let indicator = if expanded { "▼" } else { "▶" };

    let toggle = button(
        row![
            text(indicator).size(10),
            Space::new().width(6),
            text(&panel.title).size(12),
        ]
        .align_y(Alignment::Center),
    )
    .on_press(Message::TogglePanel)
    .padding(Padding::from([6, 8]))
    .width(Length::Fill)
    .style(if expanded { button::primary } else { button::secondary });

    let mut content: Column<'_, Message> = column![toggle];

    if expanded {
        content = content.push(
            container(text(&panel.body).size(11))
                .padding(8)
                .width(Length::Fill)
                .style(container::bordered_box),
        );
    }

    content.into()
}
