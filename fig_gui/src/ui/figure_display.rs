//! Figure Display (Center)
//!
//! Shows the display source chosen by the view state:
//! - Raster images (png, jpg, gif, bmp, webp) -> image widget
//! - SVG files -> svg widget
//! - URLs, other documents, missing files -> locator card with an
//!   "Open externally" button

use std::path::{Path, PathBuf};

use iced::widget::{button, column, container, image, svg, text, Column, Space};
use iced::{ContentFit, Element, Length, Padding};

use crate::Message;

const RASTER_EXTENSIONS: &[&str] = &["png", "jpg", "jpeg", "gif", "bmp", "webp"];

/// How a display source can be shown
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum FigureSource {
    Raster(PathBuf),
    Vector(PathBuf),
    /// Shown as a locator the user can open in another program
    External(String),
    /// Local path that does not exist
    Missing(PathBuf),
}

/// Classify a display source, resolving relative paths against `base_dir`.
///
/// Touches the filesystem; call when the source changes, not per frame.
pub fn classify_source(source: &str, base_dir: Option<&Path>) -> FigureSource {
    if source.contains("://") {
        return FigureSource::External(source.to_string());
    }

    let path = Path::new(source);
    let resolved = match base_dir {
        Some(base) if path.is_relative() => base.join(path),
        _ => path.to_path_buf(),
    };

    if !resolved.exists() {
        return FigureSource::Missing(resolved);
    }

    let extension = resolved
        .extension()
        .map(|e| e.to_string_lossy().to_lowercase())
        .unwrap_or_default();

    if extension == "svg" {
        FigureSource::Vector(resolved)
    } else if RASTER_EXTENSIONS.contains(&extension.as_str()) {
        FigureSource::Raster(resolved)
    } else {
        FigureSource::External(resolved.display().to_string())
    }
}

/// Render the figure display pane from an already classified source
pub fn view_figure_display(figure: Option<&FigureSource>) -> Element<'static, Message> {
    let content: Element<'static, Message> = match figure {
        None => text("Select a figure from the list above")
            .size(14)
            .color([0.5, 0.5, 0.5])
            .into(),
        Some(FigureSource::Raster(path)) => image(image::Handle::from_path(path))
            .content_fit(ContentFit::Contain)
            .width(Length::Fill)
            .height(Length::Fill)
            .into(),
        Some(FigureSource::Vector(path)) => svg(svg::Handle::from_path(path))
            .content_fit(ContentFit::Contain)
            .width(Length::Fill)
            .height(Length::Fill)
            .into(),
        Some(FigureSource::External(locator)) => view_locator_card(locator.clone(), None),
        Some(FigureSource::Missing(path)) => {
            view_locator_card(path.display().to_string(), Some("File not found"))
        }
    };

    container(content)
        .width(Length::Fill)
        .height(Length::Fill)
        .center_x(Length::Fill)
        .center_y(Length::Fill)
        .style(container::bordered_box)
        .padding(8)
        .into()
}

/// Card for sources that cannot be drawn in place
fn view_locator_card(locator: String, note: Option<&'static str>) -> Element<'static, Message> {
    let mut card: Column<'static, Message> = column![text(locator.clone()).size(12)].spacing(4);

    if let Some(note) = note {
        card = card.push(text(note).size(10).color([0.8, 0.2, 0.2]));
    } else {
        card = card.push(Space::new().height(4)).push(
            button(text("Open externally").size(11))
                .on_press(Message::OpenExternally(locator))
                .padding(Padding::from([4, 8]))
                .style(button::primary),
        );
    }

    card.into()
}
