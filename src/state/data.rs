/// Record types shared between the registry, navigation and the UI
///
/// Records are immutable value types. They are created once when the
/// registry is built and only ever handed out by reference or clone.

use std::fmt;

/// Identifier of an animal in the registry
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct AnimalId(pub u32);

/// Identifier of a clinic in the directory
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct ClinicId(pub u32);

impl fmt::Display for AnimalId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "#{}", self.0)
    }
}

impl fmt::Display for ClinicId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "#{}", self.0)
    }
}

/// Cities served by the clinic directory
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub enum City {
    #[default]
    Moscow,
    SaintPetersburg,
    Novosibirsk,
}

impl City {
    /// All supported cities, in picker order (the first one is the default)
    pub const ALL: [City; 3] = [City::Moscow, City::SaintPetersburg, City::Novosibirsk];

    /// Russian display name
    pub fn name(self) -> &'static str {
        match self {
            City::Moscow => "Москва",
            City::SaintPetersburg => "Санкт-Петербург",
            City::Novosibirsk => "Новосибирск",
        }
    }
}

impl fmt::Display for City {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

/// An animal looking for a home
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct AnimalRecord {
    pub id: AnimalId,
    pub name: String,
    /// Display string, e.g. "35 кг"
    pub weight: String,
    /// Display string, e.g. "50 см"
    pub size: String,
    /// Opaque key of the photo asset
    pub image_ref: String,
    pub story: String,
    pub origin: String,
}

impl AnimalRecord {
    /// One-line subtitle shown in the registry list
    pub fn summary(&self) -> String {
        format!("Вес: {}, Размер: {}", self.weight, self.size)
    }
}

/// A veterinary clinic
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ClinicRecord {
    pub id: ClinicId,
    pub name: String,
    pub address: String,
    pub city: City,
    /// Services in display order (duplicates are kept)
    pub services: Vec<String>,
}
