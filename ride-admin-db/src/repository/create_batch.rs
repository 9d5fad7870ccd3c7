use async_trait::async_trait;
use sqlx::Database;

use crate::models::identifiable::Identifiable;

/// Generic repository trait for creating multiple records in a batch
/// 
/// Used for imports and fixtures; the admin console itself never creates drivers.
/// All creates are performed within a single transaction for atomicity.
/// 
/// # Type Parameters
/// * `DB` - The database type (must implement sqlx::Database)
/// * `T` - The record type that must implement Identifiable trait
///
/// # Example
/// ```ignore
/// impl CreateBatch<Postgres, BookingModel> for BookingRepositoryImpl {
///     async fn create_batch(&self, items: Vec<BookingModel>) -> Result<Vec<BookingModel>, Box<dyn Error + Send + Sync>> {
///         // Implementation
///     }
/// }
/// ```
#[async_trait]
pub trait CreateBatch<DB: Database, T: Identifiable>: Send + Sync {
    /// Save multiple items in a single transaction
    /// 
    /// # Arguments
    /// * `items` - A vector of records to create
    ///
    /// # Returns
    /// * `Ok(Vec<T>)` - The created records
    /// * `Err` - An error if the transaction could not be executed
    async fn create_batch(
        &self,
        items: Vec<T>,
    ) -> Result<Vec<T>, Box<dyn std::error::Error + Send + Sync>>;
}
