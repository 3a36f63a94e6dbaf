use crate::core::edit_form::EditForm;
use crate::core::render::{Container, ContainerId, EntryAction};
use crate::domain::model::{AdoptInput, EditFields, LookupInput, NewPetInput, Pet, PetStatus};
use crate::domain::ports::{Notifier, PetStore};
use crate::utils::error::{PetConsoleError, Result};
use crate::utils::validation::parse_pet_id;
use std::fmt;
use std::ops::Range;
use tokio::sync::Mutex;

/// Range of the ids the console assigns to new pets. Ids are not checked for
/// uniqueness; two creates may collide.
pub const CLIENT_ID_RANGE: Range<i64> = 0..1000;

/// The user-facing name of each operation, used in failure notifications.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Operation {
    ListAvailable,
    ListRecentlyAdopted,
    Get,
    Create,
    Edit,
    Update,
    Delete,
    Adopt,
}

impl Operation {
    pub fn label(&self) -> &'static str {
        match self {
            Operation::ListAvailable => "GET Pets",
            Operation::ListRecentlyAdopted => "GET Recently Adopted Pets",
            Operation::Get => "GET Pet",
            Operation::Create => "POST Pet",
            Operation::Edit => "EDIT Pet",
            Operation::Update => "PUT Pet",
            Operation::Delete => "DELETE Pet",
            Operation::Adopt => "ADOPT Pet",
        }
    }
}

/// Everything the console renders: the three containers and the edit form.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ConsoleView {
    pub available: Container,
    pub recently_adopted: Container,
    pub detail: Container,
    pub edit_form: EditForm,
}

impl Default for ConsoleView {
    fn default() -> Self {
        Self {
            available: Container::new(ContainerId::Available),
            recently_adopted: Container::new(ContainerId::RecentlyAdopted),
            detail: Container::new(ContainerId::Detail),
            edit_form: EditForm::Hidden,
        }
    }
}

impl ConsoleView {
    pub fn container(&self, id: ContainerId) -> &Container {
        match id {
            ContainerId::Available => &self.available,
            ContainerId::RecentlyAdopted => &self.recently_adopted,
            ContainerId::Detail => &self.detail,
        }
    }

    fn container_mut(&mut self, id: ContainerId) -> &mut Container {
        match id {
            ContainerId::Available => &mut self.available,
            ContainerId::RecentlyAdopted => &mut self.recently_adopted,
            ContainerId::Detail => &mut self.detail,
        }
    }
}

impl fmt::Display for ConsoleView {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        writeln!(f, "{}", self.available)?;
        writeln!(f, "{}", self.recently_adopted)?;
        write!(f, "{}", self.detail)?;
        if self.edit_form.is_visible() {
            write!(f, "\n{}", self.edit_form)?;
        }
        Ok(())
    }
}

/// Maps each user action to one call on the pet service and re-renders the
/// affected containers from the response.
///
/// Operations take `&self` and may overlap. The view lock is only held while
/// a finished render is swapped in, so whichever response resolves last
/// wins.
pub struct PetConsole<S: PetStore, N: Notifier> {
    store: S,
    notifier: N,
    default_status: String,
    view: Mutex<ConsoleView>,
}

impl<S: PetStore, N: Notifier> PetConsole<S, N> {
    pub fn new(store: S, notifier: N) -> Self {
        Self::with_default_status(store, notifier, PetStatus::Available.as_str())
    }

    /// `default_status` is used by create when the status input is blank.
    pub fn with_default_status(store: S, notifier: N, default_status: &str) -> Self {
        Self {
            store,
            notifier,
            default_status: default_status.to_string(),
            view: Mutex::new(ConsoleView::default()),
        }
    }

    pub fn store(&self) -> &S {
        &self.store
    }

    pub fn notifier(&self) -> &N {
        &self.notifier
    }

    pub async fn view(&self) -> ConsoleView {
        self.view.lock().await.clone()
    }

    pub async fn container(&self, id: ContainerId) -> Container {
        self.view.lock().await.container(id).clone()
    }

    pub async fn edit_form(&self) -> EditForm {
        self.view.lock().await.edit_form.clone()
    }

    fn fail<T>(&self, operation: Operation, err: PetConsoleError) -> Result<T> {
        tracing::warn!("{} failed: {}", operation.label(), err);
        self.notifier
            .notify(&format!("{} Error: {}", operation.label(), err));
        Err(err)
    }

    /// Fetches both default lists.
    pub async fn load(&self) -> Result<()> {
        let (available, adopted) =
            tokio::join!(self.list_available(), self.list_recently_adopted());
        available.and(adopted)
    }

    pub async fn list_available(&self) -> Result<()> {
        self.refresh_list(ContainerId::Available, PetStatus::Available, Operation::ListAvailable)
            .await
    }

    pub async fn list_recently_adopted(&self) -> Result<()> {
        self.refresh_list(
            ContainerId::RecentlyAdopted,
            PetStatus::Sold,
            Operation::ListRecentlyAdopted,
        )
        .await
    }

    async fn refresh_list(
        &self,
        container: ContainerId,
        status: PetStatus,
        operation: Operation,
    ) -> Result<()> {
        match self.store.find_by_status(status).await {
            Ok(pets) => {
                tracing::debug!("Rendering {} pets into {:?}", pets.len(), container);
                self.view
                    .lock()
                    .await
                    .container_mut(container)
                    .render_list(&pets, container.title());
                Ok(())
            }
            Err(e) => self.fail(operation, e),
        }
    }

    async fn refresh_both(&self) {
        // Failures are notified by each refresh.
        let _ = self.load().await;
    }

    /// Renders the pet with the typed id into the detail container.
    pub async fn get_by_id(&self, input: &LookupInput) -> Result<Option<Pet>> {
        let id = match parse_pet_id("id", &input.id) {
            Ok(id) => id,
            Err(e) => return self.fail(Operation::Get, e),
        };

        match self.store.get_by_id(id).await {
            Ok(pet) => {
                if pet.is_none() {
                    tracing::debug!("Pet {} not found in response", id);
                }
                self.view
                    .lock()
                    .await
                    .detail
                    .render_single(pet.as_ref(), ContainerId::Detail.title());
                Ok(pet)
            }
            Err(e) => self.fail(Operation::Get, e),
        }
    }

    /// Submits a new pet under a client-generated id in [`CLIENT_ID_RANGE`].
    pub async fn create(&self, input: &NewPetInput) -> Result<Pet> {
        let status = if input.status.trim().is_empty() {
            self.default_status.clone()
        } else {
            input.status.clone()
        };
        let pet = Pet::new(
            fastrand::i64(CLIENT_ID_RANGE),
            input.name.clone(),
            status,
        );
        tracing::info!("Creating pet {} ({})", pet.id, pet.name_or_blank());

        match self.store.create(&pet).await {
            Ok(response) => {
                self.notifier
                    .notify(&format!("Pet Added: {}", pretty(&response)));
                let _ = self.list_available().await;
                Ok(pet)
            }
            Err(e) => self.fail(Operation::Create, e),
        }
    }

    pub async fn begin_edit(&self, pet: &Pet) {
        self.view.lock().await.edit_form.begin_edit(pet);
    }

    /// Opens the edit form on a pet shown in one of the containers, as if its
    /// entry's edit action had been clicked.
    pub async fn begin_edit_listed(&self, input: &LookupInput) -> Result<Pet> {
        let id = match parse_pet_id("id", &input.id) {
            Ok(id) => id,
            Err(e) => return self.fail(Operation::Edit, e),
        };

        let mut view = self.view.lock().await;
        let listed = [&view.available, &view.recently_adopted, &view.detail]
            .into_iter()
            .find_map(|container| container.find(id).cloned());
        match listed {
            Some(pet) => {
                view.edit_form.begin_edit(&pet);
                Ok(pet)
            }
            None => {
                drop(view);
                self.fail(
                    Operation::Edit,
                    PetConsoleError::invalid_input("id", &input.id, "no listed pet has this id"),
                )
            }
        }
    }

    /// Types `fields` into the edit form and reveals it.
    pub async fn fill_edit_form(&self, fields: EditFields) {
        self.view.lock().await.edit_form.fill(fields);
    }

    pub async fn cancel_edit(&self) {
        self.view.lock().await.edit_form.cancel();
    }

    /// Submits the edit form as a full replace. The form closes only when the
    /// service accepts the update.
    pub async fn update(&self) -> Result<Pet> {
        let fields = self.view.lock().await.edit_form.fields();
        let id = match parse_pet_id("id", &fields.id) {
            Ok(id) => id,
            Err(e) => return self.fail(Operation::Update, e),
        };
        let pet = Pet::new(id, fields.name, fields.status);
        tracing::info!("Updating pet {}", pet.id);

        match self.store.update(&pet).await {
            Ok(response) => {
                self.notifier
                    .notify(&format!("Pet Updated: {}", pretty(&response)));
                self.view.lock().await.edit_form.cancel();
                self.refresh_both().await;
                Ok(pet)
            }
            Err(e) => self.fail(Operation::Update, e),
        }
    }

    pub async fn delete(&self, id: i64) -> Result<()> {
        tracing::info!("Deleting pet {}", id);

        match self.store.delete(id).await {
            Ok(()) => {
                self.notifier
                    .notify(&format!("Pet with ID {} has been deleted.", id));
                let _ = self.list_available().await;
                Ok(())
            }
            Err(e) => self.fail(Operation::Delete, e),
        }
    }

    /// Delete with the id typed into a form field.
    pub async fn delete_typed(&self, input: &LookupInput) -> Result<()> {
        match parse_pet_id("id", &input.id) {
            Ok(id) => self.delete(id).await,
            Err(e) => self.fail(Operation::Delete, e),
        }
    }

    /// Marks the pet as sold with a partial update.
    pub async fn adopt(&self, input: &AdoptInput) -> Result<()> {
        let id = match parse_pet_id("id", &input.id) {
            Ok(id) => id,
            Err(e) => return self.fail(Operation::Adopt, e),
        };
        tracing::info!("Adopting pet {}", id);

        match self.store.update(&Pet::adoption(id)).await {
            Ok(_) => {
                self.notifier
                    .notify(&format!("Pet with ID \"{}\" has been adopted!", id));
                self.refresh_both().await;
                Ok(())
            }
            Err(e) => self.fail(Operation::Adopt, e),
        }
    }

    /// Runs an entry's inline action.
    pub async fn trigger(&self, action: EntryAction) -> Result<()> {
        match action {
            EntryAction::BeginEdit(pet) => {
                self.begin_edit(&pet).await;
                Ok(())
            }
            EntryAction::Delete(id) => self.delete(id).await,
        }
    }
}

fn pretty(value: &serde_json::Value) -> String {
    serde_json::to_string_pretty(value).unwrap_or_else(|_| value.to_string())
}
