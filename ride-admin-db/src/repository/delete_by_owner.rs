use async_trait::async_trait;
use sqlx::Database;
use uuid::Uuid;

/// Generic repository trait for deleting a record's whole sub-collection
/// 
/// Used to purge a driver's KYC documents when a rejection allows resubmission.
/// All deletes are performed within a single transaction.
/// 
/// # Type Parameters
/// * `DB` - The database type (must implement sqlx::Database)
///
/// # Example
/// ```ignore
/// impl DeleteByOwner<Postgres> for KycDocumentRepositoryImpl {
///     async fn delete_by_owner(&self, owner_id: Uuid) -> Result<usize, Box<dyn Error + Send + Sync>> {
///         // Implementation
///     }
/// }
/// ```
#[async_trait]
pub trait DeleteByOwner<DB: Database>: Send + Sync {
    /// Delete every entry owned by the given record
    /// 
    /// # Arguments
    /// * `owner_id` - The UUID of the owning record
    ///
    /// # Returns
    /// * `Ok(usize)` - The number of entries deleted (0 is not an error)
    /// * `Err` - An error if the transaction could not be executed
    async fn delete_by_owner(
        &self,
        owner_id: Uuid,
    ) -> Result<usize, Box<dyn std::error::Error + Send + Sync>>;
}
