use async_trait::async_trait;
use sqlx::Database;
use uuid::Uuid;

use crate::models::identifiable::Identifiable;

/// Generic repository trait for loading a record by its ID
/// 
/// This trait provides a standard interface for loading records from the record store.
/// Any record that implements the Identifiable trait can be loaded using this trait.
/// 
/// # Type Parameters
/// * `DB` - The database type (must implement sqlx::Database)
/// * `T` - The record type that must implement Identifiable trait
///
/// # Example
/// ```ignore
/// impl Load<Postgres, DriverModel> for DriverRepositoryImpl {
///     async fn load(&self, id: Uuid) -> Result<Option<DriverModel>, Box<dyn Error + Send + Sync>> {
///         // Implementation
///     }
/// }
/// ```
#[async_trait]
pub trait Load<DB: Database, T: Identifiable>: Send + Sync {
    /// Load a record by its unique identifier
    /// 
    /// # Arguments
    /// * `id` - The UUID of the record to load
    /// 
    /// # Returns
    /// * `Ok(Some(T))` - The loaded record
    /// * `Ok(None)` - If the record does not exist
    /// * `Err` - An error if the query could not be executed
    async fn load(&self, id: Uuid) -> Result<Option<T>, Box<dyn std::error::Error + Send + Sync>>;
}
