use async_trait::async_trait;
use sqlx::Database;
use uuid::Uuid;

/// Generic repository trait for writing a partial field set to one record
/// 
/// The patch type decides which columns are touched. Each call is atomic:
/// either every touched column is written or none is.
/// 
/// # Type Parameters
/// * `DB` - The database type (must implement sqlx::Database)
/// * `P` - The patch type describing the columns to write
///
/// # Example
/// ```ignore
/// impl UpdateFields<Postgres, UserFieldPatch> for UserRepositoryImpl {
///     async fn update_fields(&self, id: Uuid, patch: &UserFieldPatch) -> Result<bool, Box<dyn Error + Send + Sync>> {
///         // Implementation
///     }
/// }
/// ```
#[async_trait]
pub trait UpdateFields<DB: Database, P: Send + Sync>: Send + Sync {
    /// Write the patch to the record with the given ID
    /// 
    /// # Arguments
    /// * `id` - The UUID of the record to update
    /// * `patch` - The columns to write
    /// 
    /// # Returns
    /// * `Ok(true)` - The record was updated
    /// * `Ok(false)` - No record with that ID exists
    /// * `Err` - An error if the update could not be executed
    async fn update_fields(
        &self,
        id: Uuid,
        patch: &P,
    ) -> Result<bool, Box<dyn std::error::Error + Send + Sync>>;
}
