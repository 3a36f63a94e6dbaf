use crate::domain::model::{Pet, PetStatus};
use crate::utils::error::Result;
use async_trait::async_trait;

/// The remote pet collection.
#[async_trait]
pub trait PetStore: Send + Sync {
    async fn find_by_status(&self, status: PetStatus) -> Result<Vec<Pet>>;

    /// `Ok(None)` when the service answers with an object lacking `id`.
    async fn get_by_id(&self, id: i64) -> Result<Option<Pet>>;

    /// Returns the service's response body.
    async fn create(&self, pet: &Pet) -> Result<serde_json::Value>;

    /// Full or partial replace; `pet.id` selects the record.
    async fn update(&self, pet: &Pet) -> Result<serde_json::Value>;

    async fn delete(&self, id: i64) -> Result<()>;
}

/// Blocking, user-facing notifications.
pub trait Notifier: Send + Sync {
    fn notify(&self, message: &str);
}

pub trait ConfigProvider: Send + Sync {
    fn base_url(&self) -> &str;
    fn timeout_seconds(&self) -> Option<u64>;
    fn headers(&self) -> &[(String, String)];
    fn default_status(&self) -> &str;
}
