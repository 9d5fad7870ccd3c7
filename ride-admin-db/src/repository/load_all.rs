use async_trait::async_trait;
use sqlx::Database;

use crate::models::identifiable::Identifiable;

/// Generic repository trait for loading every record of one kind
/// 
/// Admin lists filter, sort and paginate in memory, so they read the whole
/// collection. Order is the store's responsibility; callers re-sort as needed.
/// 
/// # Type Parameters
/// * `DB` - The database type (must implement sqlx::Database)
/// * `T` - The record type that must implement Identifiable trait
///
/// # Example
/// ```ignore
/// impl LoadAll<Postgres, BookingModel> for BookingRepositoryImpl {
///     async fn load_all(&self) -> Result<Vec<BookingModel>, Box<dyn Error + Send + Sync>> {
///         // Implementation
///     }
/// }
/// ```
#[async_trait]
pub trait LoadAll<DB: Database, T: Identifiable>: Send + Sync {
    /// Load all records
    /// 
    /// # Returns
    /// * `Ok(Vec<T>)` - Every record, possibly empty
    /// * `Err` - An error if the query could not be executed
    async fn load_all(&self) -> Result<Vec<T>, Box<dyn std::error::Error + Send + Sync>>;
}
