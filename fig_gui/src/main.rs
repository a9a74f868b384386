//! # Figsel GUI Application
//!
//! Figure viewer built with Iced. The window holds a figure selection
//! control, an optional row of sub-figure buttons, the figure display, and a
//! collapsible description panel.
//!
//! All view logic lives in `fig_core`: every interaction becomes a
//! `ViewEvent`, `apply_event` returns the next `ViewState`, and the `ui`
//! modules render that state. Nothing here decides what is visible.

mod launcher;
mod ui;

use std::path::{Path, PathBuf};

use clap::Parser;
use iced::widget::{column, container, rule, Column};
use iced::{window, Element, Length, Size, Task, Theme};
use tracing::{error, info, warn};

use fig_core::catalog::Catalog;
use fig_core::errors::ViewError;
use fig_core::events::{apply_event, ViewEvent};
use fig_core::file_io::load_catalog;
use fig_core::state::ViewState;

use ui::figure_display::{classify_source, FigureSource};

#[derive(Parser, Debug)]
#[command(author, version, about = "Figure viewer with a selectable figure list", long_about = None)]
struct Cli {
    /// Catalog JSON file (defaults to the built-in catalog)
    #[arg(value_name = "CATALOG")]
    catalog: Option<PathBuf>,

    /// Increase log verbosity (-v, -vv)
    #[arg(short, long, action = clap::ArgAction::Count)]
    verbose: u8,
}

/// Messages produced by the window
#[derive(Debug, Clone)]
pub enum Message {
    /// Option chosen in the figure picker (option id)
    FigureSelected(String),
    /// Sub-button clicked (document-order index)
    SubButtonPressed(usize),
    /// Accordion header clicked
    TogglePanel,
    /// "Open Catalog" clicked
    OpenCatalog,
    /// File dialog finished; `None` when the user cancelled
    CatalogLoaded(Option<Result<(Catalog, PathBuf), ViewError>>),
    ToggleDarkMode,
    /// Hand a source the display cannot draw to the default browser
    OpenExternally(String),
}

pub struct App {
    pub catalog: Catalog,
    /// Where the catalog was loaded from; relative resources resolve against its directory
    pub catalog_path: Option<PathBuf>,
    pub view: ViewState,
    /// `view.display_source` classified for drawing; refreshed when the source changes
    pub figure: Option<FigureSource>,
    pub dark_mode: bool,
    pub error_message: Option<String>,
}

impl App {
    pub fn new(catalog: Catalog, catalog_path: Option<PathBuf>) -> Self {
        App {
            catalog,
            catalog_path,
            view: ViewState::default(),
            figure: None,
            dark_mode: false,
            error_message: None,
        }
    }

    fn title(&self) -> String {
        if self.catalog.title.is_empty() {
            "Figsel".to_string()
        } else {
            format!("Figsel - {}", self.catalog.title)
        }
    }

    fn theme(&self) -> Theme {
        if self.dark_mode {
            Theme::Dark
        } else {
            Theme::Light
        }
    }

    fn update(&mut self, message: Message) -> Task<Message> {
        match message {
            Message::FigureSelected(option_id) => {
                self.dispatch(ViewEvent::Select { option_id });
            }
            Message::SubButtonPressed(index) => {
                self.dispatch(ViewEvent::SelectSub { index });
            }
            Message::TogglePanel => {
                self.dispatch(ViewEvent::TogglePanel);
            }
            Message::OpenCatalog => {
                return Task::perform(pick_catalog_file(), Message::CatalogLoaded);
            }
            Message::CatalogLoaded(None) => {}
            Message::CatalogLoaded(Some(Ok((catalog, path)))) => {
                self.replace_catalog(catalog, Some(path));
            }
            Message::CatalogLoaded(Some(Err(e))) => {
                error!("Failed to load catalog: {}", e);
                self.error_message = Some(e.to_string());
            }
            Message::ToggleDarkMode => {
                self.dark_mode = !self.dark_mode;
            }
            Message::OpenExternally(locator) => {
                if let Err(e) = launcher::open_external(&locator) {
                    warn!(%locator, "Failed to open externally: {}", e);
                    self.error_message = Some(format!("Could not open {}: {}", locator, e));
                }
            }
        }
        Task::none()
    }

    /// Run one event through the core state machine
    fn dispatch(&mut self, event: ViewEvent) {
        match apply_event(&self.view, &self.catalog, &event) {
            Ok(next) => {
                let source_changed = next.display_source != self.view.display_source;
                self.view = next;
                self.error_message = None;
                if source_changed {
                    self.refresh_figure();
                }
            }
            Err(e) if e.is_rejected_event() => {
                self.error_message = Some(format!("Ignored: {}", e));
            }
            Err(e) => {
                error!("Event failed: {}", e);
                self.error_message = Some(e.to_string());
            }
        }
    }

    /// Re-classify the display source against the catalog's directory
    fn refresh_figure(&mut self) {
        self.figure = self
            .view
            .display_source
            .as_deref()
            .map(|source| classify_source(source, self.base_dir()));
    }

    /// Swap in a new catalog. The view starts over from its initial state.
    fn replace_catalog(&mut self, catalog: Catalog, path: Option<PathBuf>) {
        info!(title = %catalog.title, "catalog replaced");
        self.catalog = catalog;
        self.catalog_path = path;
        self.view = ViewState::default();
        self.figure = None;
        self.error_message = None;
    }

    fn base_dir(&self) -> Option<&Path> {
        self.catalog_path.as_deref().and_then(Path::parent)
    }

    fn view(&self) -> Element<'_, Message> {
        let mut content: Column<'_, Message> = column![
            ui::toolbar::view_header(&self.catalog.title),
            ui::toolbar::view_toolbar(
                &self.catalog,
                self.view.selected_option_id.as_deref(),
                self.dark_mode,
            ),
        ]
        .spacing(6);

        if let Some(group) = ui::sub_buttons::view_sub_buttons(&self.catalog.sub_buttons, &self.view) {
            content = content.push(group);
        }

        content = content
            .push(ui::figure_display::view_figure_display(self.figure.as_ref()))
            .push(ui::accordion::view_accordion(&self.catalog.panel, self.view.panel_expanded))
            .push(rule::horizontal(1))
            .push(ui::status_bar::view_status_bar(
                self.catalog_path.as_deref(),
                self.view.display_source.as_deref(),
                self.error_message.as_deref(),
            ));

        container(content)
            .width(Length::Fill)
            .height(Length::Fill)
            .padding(10)
            .into()
    }
}

/// Ask for a catalog file and load it
async fn pick_catalog_file() -> Option<Result<(Catalog, PathBuf), ViewError>> {
    let handle = rfd::AsyncFileDialog::new()
        .set_title("Open Catalog")
        .add_filter("Figsel catalog", &["json"])
        .pick_file()
        .await?;

    let path = handle.path().to_path_buf();
    Some(load_catalog(&path).map(|catalog| (catalog, path)))
}

fn main() -> iced::Result {
    let cli = Cli::parse();
    fig_core::logging::init(cli.verbose);

    let (catalog, catalog_path, startup_error) = match cli.catalog {
        Some(path) => match load_catalog(&path) {
            Ok(catalog) => (catalog, Some(path), None),
            Err(e) => {
                error!("Failed to load catalog, using built-in: {}", e);
                (Catalog::builtin(), None, Some(e.to_string()))
            }
        },
        None => (Catalog::builtin(), None, None),
    };

    let boot = move || {
        let mut app = App::new(catalog.clone(), catalog_path.clone());
        app.error_message = startup_error.clone();
        (app, Task::none())
    };

    iced::application(boot, App::update, App::view)
        .title(App::title)
        .theme(App::theme)
        .window(window::Settings {
            size: Size::new(960.0, 720.0),
            min_size: Some(Size::new(640.0, 480.0)),
            ..window::Settings::default()
        })
        .run()
}
