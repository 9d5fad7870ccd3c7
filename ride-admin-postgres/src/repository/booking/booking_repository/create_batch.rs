use async_trait::async_trait;
use ride_admin_db::models::booking::BookingModel;
use ride_admin_db::repository::create_batch::CreateBatch;
use sqlx::Postgres;
use std::error::Error;

use super::repo_impl::BookingRepositoryImpl;

impl BookingRepositoryImpl {
    pub(super) async fn create_batch_impl(
        repo: &BookingRepositoryImpl,
        items: Vec<BookingModel>,
    ) -> Result<Vec<BookingModel>, Box<dyn Error + Send + Sync>> {
        for booking in &items {
            let query = sqlx::query(
                r#"
                INSERT INTO booking
                (id, status, fare, amount, pickup_location, dropoff_location, driver_id, client_id, created_at)
                VALUES ($1, $2, $3, $4, $5, $6, $7, $8, $9)
                "#,
            )
            .bind(booking.id)
            .bind(booking.status.as_str())
            .bind(booking.fare)
            .bind(booking.amount)
            .bind(booking.pickup_location.as_deref())
            .bind(booking.dropoff_location.as_deref())
            .bind(booking.driver_id)
            .bind(booking.client_id)
            .bind(booking.created_at);
            repo.executor.execute(query).await?;
        }
        Ok(items)
    }
}

#[async_trait]
impl CreateBatch<Postgres, BookingModel> for BookingRepositoryImpl {
    async fn create_batch(
        &self,
        items: Vec<BookingModel>,
    ) -> Result<Vec<BookingModel>, Box<dyn Error + Send + Sync>> {
        Self::create_batch_impl(self, items).await
    }
}
