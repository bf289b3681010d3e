/// State management module
///
/// This module handles all application state, including:
/// - Record types for animals and clinics (data.rs)
/// - The read-only record registry (registry.rs)
/// - Form contents for login and add-animal (forms.rs)
/// - The screen stack and its transitions (navigation.rs)
/// - Literal shelter statistics (statistics.rs)

pub mod data;
pub mod forms;
pub mod navigation;
pub mod registry;
pub mod statistics;
