use crate::domain::error::DomainError;
use async_trait::async_trait;
use std::collections::HashMap;

/// The backing store's primitive surface: a hash map per key, plus key
/// enumeration by glob pattern. Adapters translate transport failures into
/// `StoreUnavailable`; everything above this trait is storage-agnostic.
#[async_trait]
pub trait HashStore: Send + Sync {
    /// Write field/value pairs under `key`, creating the hash if absent and
    /// overwriting fields that already exist.
    async fn set_fields(&self, key: &str, fields: &[(String, String)]) -> Result<(), DomainError>;

    /// All fields of `key`; an empty map when the key does not exist.
    async fn fields(&self, key: &str) -> Result<HashMap<String, String>, DomainError>;

    /// One field of `key`; `None` when the key or the field is absent.
    async fn field(&self, key: &str, field: &str) -> Result<Option<String>, DomainError>;

    /// Remove `key` entirely. Removing an absent key is not an error.
    async fn delete(&self, key: &str) -> Result<(), DomainError>;

    /// Keys matching a glob pattern. Order is backing-store-defined.
    async fn keys(&self, pattern: &str) -> Result<Vec<String>, DomainError>;
}
