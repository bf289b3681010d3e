//! Screen stack for the whole app.
//!
//! Every user action is one synchronous transition on [`Navigator`]. A
//! transition either applies completely or returns an error and leaves
//! the stack untouched. Screen-local state (form contents, the selected
//! city, the open clinic) lives inside the [`Screen`] frame itself, so it
//! disappears when the frame is popped.

use std::mem;

use thiserror::Error;
use tracing::{debug, info};

use super::data::{AnimalId, AnimalRecord, City, ClinicId, ClinicRecord};
use super::forms::{Credentials, SubmissionDraft};
use super::registry::{Registry, RegistryError};

/// Failures of navigation actions
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum NavigationError {
    #[error(transparent)]
    NotFound(#[from] RegistryError),

    #[error("{action} is not available on the {screen} screen")]
    Unavailable {
        action: &'static str,
        screen: &'static str,
    },
}

/// Entries of the service menu
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Service {
    AnimalRegistry,
    AddAnimal,
    Clinics,
    About,
    Statistics,
}

impl Service {
    /// Menu order
    pub const ALL: [Service; 5] = [
        Service::AnimalRegistry,
        Service::AddAnimal,
        Service::Clinics,
        Service::About,
        Service::Statistics,
    ];

    /// Button caption in the service menu
    pub fn title(self) -> &'static str {
        match self {
            Service::AnimalRegistry => "Посмотреть реестр животных",
            Service::AddAnimal => "Отдать собаку",
            Service::Clinics => "Найти клинику",
            Service::About => "О приложении",
            Service::Statistics => "Статистика",
        }
    }
}

/// Explicit "nothing selected / selected(id)" state
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Selection<T> {
    Nothing,
    Selected(T),
}

impl<T> Selection<T> {
    pub fn is_selected(&self) -> bool {
        matches!(self, Selection::Selected(_))
    }
}

impl<T> Default for Selection<T> {
    fn default() -> Self {
        Selection::Nothing
    }
}

/// Local state of the clinic directory screen
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct ClinicDirectory {
    pub city: City,
    /// Clinic shown in the detail modal
    pub detail: Selection<ClinicId>,
}

impl ClinicDirectory {
    /// Clinics to list for the selected city
    pub fn listing<'r>(&self, registry: &'r Registry) -> Vec<&'r ClinicRecord> {
        registry.clinics_in(self.city)
    }
}

/// One frame of the navigation stack
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Screen {
    Login(Credentials),
    ServiceMenu,
    AnimalRegistry,
    AnimalDetail(AnimalId),
    AddAnimal(SubmissionDraft),
    Completed,
    Clinics(ClinicDirectory),
    About,
    Statistics,
}

impl Screen {
    /// Stable name used in logs and errors
    pub fn name(&self) -> &'static str {
        match self {
            Screen::Login(_) => "login",
            Screen::ServiceMenu => "service_menu",
            Screen::AnimalRegistry => "animal_registry",
            Screen::AnimalDetail(_) => "animal_detail",
            Screen::AddAnimal(_) => "add_animal",
            Screen::Completed => "completed",
            Screen::Clinics(_) => "clinics",
            Screen::About => "about",
            Screen::Statistics => "statistics",
        }
    }

    /// Navigation bar title
    pub fn title(&self) -> &'static str {
        match self {
            Screen::Login(_) => "Вход",
            Screen::ServiceMenu => "Услуги",
            Screen::AnimalRegistry => "Реестр животных",
            Screen::AnimalDetail(_) => "О питомце",
            Screen::AddAnimal(_) => "Отдать собаку",
            Screen::Completed => "Успешно",
            Screen::Clinics(_) => "Клиники",
            Screen::About => "О приложении",
            Screen::Statistics => "Статистика",
        }
    }
}

/// Stack-based navigation starting at the login screen.
///
/// The stack is never empty: `current` is the top frame and `history`
/// holds everything beneath it.
#[derive(Debug, Clone)]
pub struct Navigator {
    current: Screen,
    history: Vec<Screen>,
}

impl Navigator {
    pub fn new() -> Self {
        Navigator {
            current: Screen::Login(Credentials::default()),
            history: Vec::new(),
        }
    }

    /// Screen on top of the stack
    pub fn current(&self) -> &Screen {
        &self.current
    }

    /// Number of frames on the stack (at least 1)
    pub fn depth(&self) -> usize {
        self.history.len() + 1
    }

    pub fn can_go_back(&self) -> bool {
        !self.history.is_empty()
    }

    /// Login form contents, if the login screen is showing
    pub fn credentials_mut(&mut self) -> Option<&mut Credentials> {
        match &mut self.current {
            Screen::Login(credentials) => Some(credentials),
            _ => None,
        }
    }

    /// Add-animal draft, if the form is showing
    pub fn draft_mut(&mut self) -> Option<&mut SubmissionDraft> {
        match &mut self.current {
            Screen::AddAnimal(draft) => Some(draft),
            _ => None,
        }
    }

    /// Pass the login gate. Every username/password pair is accepted.
    pub fn login(&mut self) -> Result<(), NavigationError> {
        match &self.current {
            Screen::Login(credentials) => {
                info!(username = %credentials.username, "login accepted");
            }
            other => return Err(unavailable("login", other)),
        }
        self.push(Screen::ServiceMenu);
        Ok(())
    }

    /// Open one of the services from the menu
    pub fn open_service(&mut self, service: Service) -> Result<(), NavigationError> {
        if !matches!(self.current, Screen::ServiceMenu) {
            return Err(unavailable("open_service", &self.current));
        }

        let screen = match service {
            Service::AnimalRegistry => Screen::AnimalRegistry,
            Service::AddAnimal => Screen::AddAnimal(SubmissionDraft::new()),
            Service::Clinics => Screen::Clinics(ClinicDirectory::default()),
            Service::About => Screen::About,
            Service::Statistics => Screen::Statistics,
        };
        self.push(screen);
        Ok(())
    }

    /// Open the detail page of an animal from the registry list
    pub fn open_animal<'r>(
        &mut self,
        registry: &'r Registry,
        id: AnimalId,
    ) -> Result<&'r AnimalRecord, NavigationError> {
        if !matches!(self.current, Screen::AnimalRegistry) {
            return Err(unavailable("open_animal", &self.current));
        }

        let record = registry.animal(id)?;
        self.push(Screen::AnimalDetail(id));
        Ok(record)
    }

    /// Submit the add-animal form.
    ///
    /// The draft is discarded; the registry is not touched.
    pub fn submit_draft(&mut self) -> Result<(), NavigationError> {
        match &mut self.current {
            Screen::AddAnimal(draft) => {
                debug!(blank = draft.is_blank(), "discarding submitted draft");
                draft.reset();
            }
            other => return Err(unavailable("submit_draft", other)),
        }
        self.push(Screen::Completed);
        Ok(())
    }

    /// Leave the confirmation screen for the service menu
    pub fn return_to_services(&mut self) -> Result<(), NavigationError> {
        if !matches!(self.current, Screen::Completed) {
            return Err(unavailable("return_to_services", &self.current));
        }

        let menu = self
            .history
            .iter()
            .rposition(|screen| matches!(screen, Screen::ServiceMenu));

        match menu {
            Some(index) => {
                self.history.truncate(index + 1);
                if let Some(screen) = self.history.pop() {
                    self.current = screen;
                }
                info!(depth = self.depth(), "returned to service menu");
            }
            None => self.push(Screen::ServiceMenu),
        }
        Ok(())
    }

    /// Change the city of the clinic directory (closes any open detail)
    pub fn select_city(&mut self, city: City) -> Result<(), NavigationError> {
        match &mut self.current {
            Screen::Clinics(directory) => {
                directory.city = city;
                directory.detail = Selection::Nothing;
                info!(%city, "city selected");
                Ok(())
            }
            other => Err(unavailable("select_city", other)),
        }
    }

    /// Show the detail modal of a clinic
    pub fn open_clinic<'r>(
        &mut self,
        registry: &'r Registry,
        id: ClinicId,
    ) -> Result<&'r ClinicRecord, NavigationError> {
        match &mut self.current {
            Screen::Clinics(directory) => {
                let record = registry.clinic(id)?;
                directory.detail = Selection::Selected(id);
                info!(clinic = %id, name = %record.name, "clinic detail opened");
                Ok(record)
            }
            other => Err(unavailable("open_clinic", other)),
        }
    }

    /// Close the clinic modal. Returns false if none was open.
    pub fn dismiss_clinic(&mut self) -> bool {
        match &mut self.current {
            Screen::Clinics(directory) if directory.detail.is_selected() => {
                directory.detail = Selection::Nothing;
                debug!("clinic detail dismissed");
                true
            }
            _ => false,
        }
    }

    /// Go back one step: close an open modal, otherwise pop a frame.
    /// Returns false at the root.
    pub fn back(&mut self) -> bool {
        if self.dismiss_clinic() {
            return true;
        }

        match self.history.pop() {
            Some(previous) => {
                let left = mem::replace(&mut self.current, previous);
                info!(from = left.name(), to = self.current.name(), "back");
                true
            }
            None => false,
        }
    }

    fn push(&mut self, screen: Screen) {
        info!(
            from = self.current.name(),
            to = screen.name(),
            depth = self.depth() + 1,
            "navigate"
        );
        let previous = mem::replace(&mut self.current, screen);
        self.history.push(previous);
    }
}

impl Default for Navigator {
    fn default() -> Self {
        Self::new()
    }
}

fn unavailable(action: &'static str, screen: &Screen) -> NavigationError {
    NavigationError::Unavailable {
        action,
        screen: screen.name(),
    }
}
