use iced::widget::{column, horizontal_rule, text_editor};
use iced::{keyboard, Element, Subscription, Task, Theme};
use tracing::{info, warn};
use tracing_subscriber::EnvFilter;

mod about;
mod config;
mod state;
mod ui;

use config::{Settings, ThemeChoice};
use state::data::{AnimalId, City, ClinicId};
use state::forms::DraftField;
use state::navigation::{Navigator, Service};
use state::registry::Registry;

/// Main application state
struct VetClinic {
    /// Animals and clinics, read-only after startup
    registry: Registry,
    /// Screen stack with all screen-local state
    navigator: Navigator,
    /// Editor buffer behind the multi-line story field of the add-animal form
    story: text_editor::Content,
    theme: ThemeChoice,
}

/// Application messages (events)
#[derive(Debug, Clone)]
pub enum Message {
    UsernameChanged(String),
    PasswordChanged(String),
    /// User pressed "Войти"
    Login,
    OpenService(Service),
    OpenAnimal(AnimalId),
    DraftChanged(DraftField, String),
    StoryEdited(text_editor::Action),
    SubmitDraft,
    ReturnToServices,
    CitySelected(City),
    OpenClinic(ClinicId),
    DismissClinic,
    /// Back button or Escape
    Back,
}

impl VetClinic {
    /// Create a new instance of the application
    fn new(settings: Settings) -> (Self, Task<Message>) {
        let registry = Registry::builtin();

        info!(
            animals = registry.animal_count(),
            clinics = registry.clinics().len(),
            "vet clinic initialized"
        );

        (
            VetClinic {
                registry,
                navigator: Navigator::new(),
                story: text_editor::Content::new(),
                theme: settings.theme,
            },
            Task::none(),
        )
    }

    /// Handle application messages and update state
    fn update(&mut self, message: Message) -> Task<Message> {
        let result = match message {
            Message::UsernameChanged(value) => {
                if let Some(credentials) = self.navigator.credentials_mut() {
                    credentials.username = value;
                }
                Ok(())
            }
            Message::PasswordChanged(value) => {
                if let Some(credentials) = self.navigator.credentials_mut() {
                    credentials.password = value;
                }
                Ok(())
            }
            Message::Login => self.navigator.login(),
            Message::OpenService(service) => {
                let result = self.navigator.open_service(service);
                if result.is_ok() && service == Service::AddAnimal {
                    self.story = text_editor::Content::new();
                }
                result
            }
            Message::OpenAnimal(id) => self
                .navigator
                .open_animal(&self.registry, id)
                .map(|_| ()),
            Message::DraftChanged(field, value) => {
                if let Some(draft) = self.navigator.draft_mut() {
                    draft.set(field, value);
                }
                Ok(())
            }
            Message::StoryEdited(action) => {
                self.story.perform(action);
                if let Some(draft) = self.navigator.draft_mut() {
                    draft.set(DraftField::Story, self.story.text());
                }
                Ok(())
            }
            Message::SubmitDraft => {
                let result = self.navigator.submit_draft();
                if result.is_ok() {
                    self.story = text_editor::Content::new();
                }
                result
            }
            Message::ReturnToServices => self.navigator.return_to_services(),
            Message::CitySelected(city) => self.navigator.select_city(city),
            Message::OpenClinic(id) => self
                .navigator
                .open_clinic(&self.registry, id)
                .map(|_| ()),
            Message::DismissClinic => {
                self.navigator.dismiss_clinic();
                Ok(())
            }
            Message::Back => {
                self.navigator.back();
                Ok(())
            }
        };

        // Stale messages (e.g. a double click racing a transition) land here
        if let Err(err) = result {
            warn!(%err, "action rejected");
        }

        Task::none()
    }

    /// Build the user interface
    fn view(&self) -> Element<Message> {
        let screen = self.navigator.current();

        column![
            ui::screens::header(screen.title(), self.navigator.can_go_back()),
            horizontal_rule(1),
            ui::screens::view(&self.registry, screen, &self.story),
        ]
        .into()
    }

    /// Escape navigates back
    fn subscription(&self) -> Subscription<Message> {
        keyboard::on_key_press(|key, _modifiers| match key {
            keyboard::Key::Named(keyboard::key::Named::Escape) => Some(Message::Back),
            _ => None,
        })
    }

    /// Set the application theme
    fn theme(&self) -> Theme {
        self.theme.into()
    }
}

fn main() -> iced::Result {
    let (settings, config_error) = match Settings::load() {
        Ok(settings) => (settings, None),
        Err(err) => (Settings::default(), Some(err)),
    };

    init_tracing(&settings.log_filter);

    if let Some(err) = config_error {
        warn!(%err, "falling back to default settings");
    }

    let window_size = iced::Size::new(settings.window_width, settings.window_height);

    iced::application("Ветклиника", VetClinic::update, VetClinic::view)
        .subscription(VetClinic::subscription)
        .theme(VetClinic::theme)
        .window_size(window_size)
        .centered()
        .run_with(move || VetClinic::new(settings))
}

/// RUST_LOG wins over the configured filter; an unparsable filter falls back to "info"
fn init_tracing(default_filter: &str) {
    let filter = EnvFilter::try_from_default_env()
        .or_else(|_| EnvFilter::try_new(default_filter))
        .unwrap_or_else(|_| EnvFilter::new("info"));

    tracing_subscriber::fmt().with_env_filter(filter).init();
}
