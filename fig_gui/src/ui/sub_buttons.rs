//! Sub-button group
//!
//! A row of buttons, one per sub-figure. Rendered only while the selected
//! figure has sub-buttons; the active one uses the primary style.

use iced::widget::{button, row, text, Row};
use iced::{Element, Padding};

use fig_core::catalog::SubButton;
use fig_core::state::ViewState;

use crate::Message;

/// Render the button group, or nothing when it is hidden
pub fn view_sub_buttons<'a>(
    sub_buttons: &'a [SubButton],
    view: &ViewState,
) -> Option<Element<'a, Message>> {
    if !view.button_group_visible {
        return None;
    }

    let mut group: Row<'_, Message> = row![].spacing(4);
    for (index, sub_button) in sub_buttons.iter().enumerate() {
        let style = if view.is_sub_button_active(index) {
            button::primary
        } else {
            button::secondary
        };
        group = group.push(
            button(text(&sub_button.label).size(11))
                .on_press(Message::SubButtonPressed(index))
                .padding(Padding::from([4, 10]))
                .style(style),
        );
    }

    Some(group.padding(Padding::from([4, 0])).into())
}

#[cfg(test)]
mod tests {
    use super::*;
    use fig_core::catalog::{Catalog, PanelContent, SelectorOption};

    fn catalog() -> Catalog {
        Catalog {
            title: "Test".to_string(),
            options: vec![
                SelectorOption::new("figure1", "Figure 1", "a.png"),
                SelectorOption::new("figure3", "Figure 3", "b.png").with_sub_buttons(),
            ],
            sub_buttons: vec![SubButton::new("B1", "b1.png"), SubButton::new("B2", "b2.png")],
            panel: PanelContent::default(),
        }
    }

    #[test]
    fn test_group_rendered_only_while_visible() {
        let catalog = catalog();

        let initial = ViewState::default();
        assert!(view_sub_buttons(&catalog.sub_buttons, &initial).is_none());

        let shown = initial.select(&catalog, "figure3").unwrap();
        assert!(view_sub_buttons(&catalog.sub_buttons, &shown).is_some());

        let hidden = shown.select(&catalog, "figure1").unwrap();
        assert!(view_sub_buttons(&catalog.sub_buttons, &hidden).is_none());
    }
}
