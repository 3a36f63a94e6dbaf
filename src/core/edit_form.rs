use crate::domain::model::{EditFields, Pet};
use std::fmt;

/// The edit form: hidden and empty, or visible with populated fields.
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub enum EditForm {
    #[default]
    Hidden,
    Visible(EditFields),
}

impl EditForm {
    pub fn begin_edit(&mut self, pet: &Pet) {
        *self = EditForm::Visible(EditFields::from(pet));
    }

    /// Reveals the form with fields typed by the user.
    pub fn fill(&mut self, fields: EditFields) {
        *self = EditForm::Visible(fields);
    }

    pub fn cancel(&mut self) {
        *self = EditForm::Hidden;
    }

    pub fn is_visible(&self) -> bool {
        matches!(self, EditForm::Visible(_))
    }

    /// Current field values; a hidden form reads as empty inputs.
    pub fn fields(&self) -> EditFields {
        match self {
            EditForm::Hidden => EditFields::default(),
            EditForm::Visible(fields) => fields.clone(),
        }
    }
}

impl fmt::Display for EditForm {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            EditForm::Hidden => Ok(()),
            EditForm::Visible(fields) => {
                writeln!(f, "== Update Pet ==")?;
                writeln!(f, "  ID:     {}", fields.id)?;
                writeln!(f, "  Name:   {}", fields.name)?;
                writeln!(f, "  Status: {}", fields.status)
            }
        }
    }
}
