use crate::domain::model::Pet;
use std::fmt;

/// The named output regions of the console.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum ContainerId {
    Available,
    RecentlyAdopted,
    Detail,
}

impl ContainerId {
    pub fn title(&self) -> &'static str {
        match self {
            ContainerId::Available => "Available Pets",
            ContainerId::RecentlyAdopted => "Recently Adopted Pets",
            ContainerId::Detail => "Pet Details",
        }
    }
}

/// Inline triggers attached to every rendered entry.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum EntryAction {
    BeginEdit(Pet),
    Delete(i64),
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PetEntry {
    pub pet: Pet,
}

impl PetEntry {
    pub fn actions(&self) -> [EntryAction; 2] {
        [
            EntryAction::BeginEdit(self.pet.clone()),
            EntryAction::Delete(self.pet.id),
        ]
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub enum View {
    /// Nothing rendered yet.
    #[default]
    Blank,
    Placeholder(String),
    Entries(Vec<PetEntry>),
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Container {
    title: String,
    view: View,
}

impl Container {
    pub fn new(id: ContainerId) -> Self {
        Self {
            title: id.title().to_string(),
            view: View::Blank,
        }
    }

    pub fn title(&self) -> &str {
        &self.title
    }

    pub fn view(&self) -> &View {
        &self.view
    }

    pub fn entries(&self) -> &[PetEntry] {
        match &self.view {
            View::Entries(entries) => entries,
            _ => &[],
        }
    }

    pub fn placeholder(&self) -> Option<&str> {
        match &self.view {
            View::Placeholder(text) => Some(text),
            _ => None,
        }
    }

    pub fn find(&self, id: i64) -> Option<&Pet> {
        self.entries().iter().map(|e| &e.pet).find(|p| p.id == id)
    }

    /// Clears the container and renders `pets` under `title`.
    pub fn render_list(&mut self, pets: &[Pet], title: &str) {
        self.title = title.to_string();
        self.view = if pets.is_empty() {
            View::Placeholder(empty_placeholder(title))
        } else {
            View::Entries(
                pets.iter()
                    .cloned()
                    .map(|pet| PetEntry { pet })
                    .collect(),
            )
        };
    }

    pub fn render_single(&mut self, pet: Option<&Pet>, title: &str) {
        self.title = title.to_string();
        self.view = match pet {
            Some(pet) => View::Entries(vec![PetEntry { pet: pet.clone() }]),
            None => View::Placeholder(NOT_FOUND_PLACEHOLDER.to_string()),
        };
    }
}

pub const NOT_FOUND_PLACEHOLDER: &str = "No pet found.";

pub fn empty_placeholder(title: &str) -> String {
    format!("No {} found.", title.to_lowercase())
}

impl fmt::Display for Container {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        writeln!(f, "== {} ==", self.title)?;
        match &self.view {
            View::Blank => writeln!(f, "(not loaded)"),
            View::Placeholder(text) => writeln!(f, "{}", text),
            View::Entries(entries) => {
                for entry in entries {
                    writeln!(f, "{}", entry)?;
                }
                Ok(())
            }
        }
    }
}

impl fmt::Display for PetEntry {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "  Pet ID: {:<6} Name: {:<20} Status: {:<10} [edit {id}] [delete {id}]",
            self.pet.id,
            self.pet.name_or_blank(),
            self.pet.status_or_blank(),
            id = self.pet.id
        )
    }
}
