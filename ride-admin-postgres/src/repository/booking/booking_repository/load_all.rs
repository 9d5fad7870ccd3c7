use async_trait::async_trait;
use ride_admin_db::models::booking::BookingModel;
use ride_admin_db::repository::load_all::LoadAll;
use crate::utils::TryFromRow;
use sqlx::Postgres;
use std::error::Error;

use super::repo_impl::BookingRepositoryImpl;

impl BookingRepositoryImpl {
    pub(super) async fn load_all_impl(
        repo: &BookingRepositoryImpl,
    ) -> Result<Vec<BookingModel>, Box<dyn Error + Send + Sync>> {
        let query = sqlx::query(r#"SELECT * FROM booking ORDER BY created_at DESC NULLS LAST, id"#);
        let rows = repo.executor.fetch_all(query).await?;
        let bookings = rows
            .iter()
            .map(BookingModel::try_from_row)
            .collect::<Result<Vec<_>, _>>()?;
        tracing::debug!(count = bookings.len(), "Loaded bookings");
        Ok(bookings)
    }
}

#[async_trait]
impl LoadAll<Postgres, BookingModel> for BookingRepositoryImpl {
    async fn load_all(&self) -> Result<Vec<BookingModel>, Box<dyn Error + Send + Sync>> {
        Self::load_all_impl(self).await
    }
}
