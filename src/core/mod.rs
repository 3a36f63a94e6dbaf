pub mod console;
pub mod edit_form;
pub mod render;

pub use crate::domain::model::{AdoptInput, EditFields, LookupInput, NewPetInput, Pet, PetStatus};
pub use crate::domain::ports::{ConfigProvider, Notifier, PetStore};
pub use crate::utils::error::Result;
