/// Transient form state
///
/// Forms hold free text exactly as typed. Nothing here is validated and
/// nothing is ever persisted: the login form is accepted as-is and the
/// add-animal draft is thrown away on submit.

/// Login form contents
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Credentials {
    pub username: String,
    pub password: String,
}

/// Fields of the add-animal form
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum DraftField {
    Name,
    Weight,
    Size,
    Story,
}

impl DraftField {
    /// Placeholder / label shown next to the input
    pub fn label(self) -> &'static str {
        match self {
            DraftField::Name => "Имя",
            DraftField::Weight => "Вес",
            DraftField::Size => "Размер",
            DraftField::Story => "История питомца",
        }
    }
}

/// An animal the user wants to give away
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct SubmissionDraft {
    pub name: String,
    pub weight: String,
    pub size: String,
    pub story: String,
}

impl SubmissionDraft {
    /// Create an empty draft
    pub fn new() -> Self {
        Self::default()
    }

    pub fn get(&self, field: DraftField) -> &str {
        match field {
            DraftField::Name => &self.name,
            DraftField::Weight => &self.weight,
            DraftField::Size => &self.size,
            DraftField::Story => &self.story,
        }
    }

    /// Replace one field with whatever the user typed
    pub fn set(&mut self, field: DraftField, value: String) {
        let slot = match field {
            DraftField::Name => &mut self.name,
            DraftField::Weight => &mut self.weight,
            DraftField::Size => &mut self.size,
            DraftField::Story => &mut self.story,
        };
        *slot = value;
    }

    /// Check if nothing has been typed yet
    pub fn is_blank(&self) -> bool {
        *self == Self::default()
    }

    /// Clear every field
    pub fn reset(&mut self) {
        *self = Self::default();
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_new_draft_is_blank() {
        assert!(SubmissionDraft::new().is_blank());
    }

    #[test]
    fn test_set_and_get() {
        let mut draft = SubmissionDraft::new();
        draft.set(DraftField::Name, "Тузик".into());
        draft.set(DraftField::Weight, "много".into());

        assert_eq!(draft.get(DraftField::Name), "Тузик");
        assert_eq!(draft.get(DraftField::Weight), "много");
        assert_eq!(draft.get(DraftField::Size), "");
        assert!(!draft.is_blank());
    }

    #[test]
    fn test_reset() {
        let mut draft = SubmissionDraft::new();
        draft.set(DraftField::Story, "Нашли во дворе".into());
        draft.reset();
        assert!(draft.is_blank());
    }
}
