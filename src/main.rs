use iced::{Element, Task, Theme};

// Declare the application modules
mod catalogue;
mod format;
mod ui;

use catalogue::data::{self, TreeRecord};
use catalogue::filter::{self, Filter};
use catalogue::loader::{self, LoadError};

/// Site name, used as the window title base
pub const SITE_NAME: &str = "Rod Linton Bonsai";

/// Fallback image for records with no photos
pub const PLACEHOLDER_PHOTO: &str = "assets/placeholder-bonsai.jpg";

/// Main application state
struct BonsaiBrowser {
    /// Whichever screen is currently shown; the two are mutually
    /// exclusive and each owns its own loaded copy of the catalogue
    screen: Screen,
}

enum Screen {
    Collection(CollectionState),
    Detail(DetailState),
}

/// The collection grid: loading, then ready or failed.
/// Failure is terminal; the grid renders a fixed message and stops.
pub enum CollectionState {
    Loading,
    Failed,
    Ready {
        catalogue: Vec<TreeRecord>,
        species_options: Vec<String>,
        style_options: Vec<String>,
        filter: Filter,
    },
}

/// One record's detail page
pub enum DetailState {
    Loading { id: String },
    Failed,
    NotFound,
    Ready { record: TreeRecord },
}

/// Application messages (events)
#[derive(Debug, Clone)]
pub enum Message {
    /// Collection catalogue load finished
    CollectionLoaded(Result<Vec<TreeRecord>, LoadError>),
    /// User typed in the search field
    QueryChanged(String),
    /// User picked a species (or the "All species" sentinel)
    SpeciesPicked(String),
    /// User picked a style (or the "All styles" sentinel)
    StylePicked(String),
    /// User clicked a grid item
    OpenDetail(String),
    /// Detail catalogue load finished
    DetailLoaded(Result<Vec<TreeRecord>, LoadError>),
    /// User clicked back on the detail screen
    BackToCollection,
}

impl BonsaiBrowser {
    /// Create a new instance of the application, loading the catalogue
    fn new() -> (Self, Task<Message>) {
        println!("🌳 {} catalogue browser starting", SITE_NAME);

        (
            BonsaiBrowser {
                screen: Screen::Collection(CollectionState::Loading),
            },
            load_task(Message::CollectionLoaded),
        )
    }

    /// Window title: the record name on a loaded detail screen,
    /// otherwise the site name
    fn title(&self) -> String {
        match &self.screen {
            Screen::Detail(DetailState::Ready { record }) => {
                format!("{} — {}", record.name, SITE_NAME)
            }
            _ => SITE_NAME.to_string(),
        }
    }

    /// Handle application messages and update state
    fn update(&mut self, message: Message) -> Task<Message> {
        match message {
            Message::CollectionLoaded(result) => {
                // Ignore a load that finished after navigating away
                if !matches!(self.screen, Screen::Collection(CollectionState::Loading)) {
                    return Task::none();
                }

                self.screen = Screen::Collection(match result {
                    Ok(catalogue) => {
                        let species_options = filter::distinct_species(&catalogue);
                        let style_options = filter::distinct_styles(&catalogue);

                        CollectionState::Ready {
                            catalogue,
                            species_options,
                            style_options,
                            filter: Filter::default(),
                        }
                    }
                    Err(_) => CollectionState::Failed,
                });

                Task::none()
            }
            Message::QueryChanged(query) => {
                if let Some(filter) = self.active_filter() {
                    filter.query = query;
                }
                Task::none()
            }
            Message::SpeciesPicked(choice) => {
                if let Some(filter) = self.active_filter() {
                    filter.species = (choice != ui::collection::ALL_SPECIES).then_some(choice);
                }
                Task::none()
            }
            Message::StylePicked(choice) => {
                if let Some(filter) = self.active_filter() {
                    filter.style = (choice != ui::collection::ALL_STYLES).then_some(choice);
                }
                Task::none()
            }
            Message::OpenDetail(id) => {
                // The detail screen reloads the catalogue itself; the
                // collection's copy is dropped with its screen
                self.screen = Screen::Detail(DetailState::Loading { id });
                load_task(Message::DetailLoaded)
            }
            Message::DetailLoaded(result) => {
                let requested = match &self.screen {
                    Screen::Detail(DetailState::Loading { id }) => id.clone(),
                    _ => return Task::none(),
                };

                self.screen = Screen::Detail(match result {
                    Err(_) => DetailState::Failed,
                    Ok(catalogue) => match data::find_by_id(&catalogue, &requested) {
                        Some(record) => DetailState::Ready {
                            record: record.clone(),
                        },
                        None => {
                            eprintln!("⚠️  No record with id {}", requested);
                            DetailState::NotFound
                        }
                    },
                });

                Task::none()
            }
            Message::BackToCollection => {
                self.screen = Screen::Collection(CollectionState::Loading);
                load_task(Message::CollectionLoaded)
            }
        }
    }

    /// Build the user interface for the current screen
    fn view(&self) -> Element<Message> {
        match &self.screen {
            Screen::Collection(state) => ui::collection::view(state),
            Screen::Detail(state) => ui::detail::view(state),
        }
    }

    /// Set the application theme
    fn theme(&self) -> Theme {
        Theme::Light
    }

    /// The filter controls, when the collection grid is ready
    fn active_filter(&mut self) -> Option<&mut Filter> {
        match &mut self.screen {
            Screen::Collection(CollectionState::Ready { filter, .. }) => Some(filter),
            _ => None,
        }
    }
}

/// Kick off a fresh catalogue load and wrap the result in a message
fn load_task(message: fn(Result<Vec<TreeRecord>, LoadError>) -> Message) -> Task<Message> {
    Task::perform(
        loader::load_catalogue(loader::DATA_PATH.to_string()),
        message,
    )
}

fn main() -> iced::Result {
    iced::application(
        BonsaiBrowser::title,
        BonsaiBrowser::update,
        BonsaiBrowser::view,
    )
    .theme(BonsaiBrowser::theme)
    .window_size((1100.0, 760.0))
    .centered()
    .run_with(BonsaiBrowser::new)
}
