use async_trait::async_trait;
use ride_admin_db::models::user::VehicleModel;
use ride_admin_db::repository::create_batch::CreateBatch;
use sqlx::Postgres;
use std::error::Error;

use super::repo_impl::VehicleRepositoryImpl;

impl VehicleRepositoryImpl {
    pub(super) async fn create_batch_impl(
        repo: &VehicleRepositoryImpl,
        items: Vec<VehicleModel>,
    ) -> Result<Vec<VehicleModel>, Box<dyn Error + Send + Sync>> {
        for vehicle in &items {
            let query = sqlx::query(
                r#"
                INSERT INTO user_vehicle (id, user_id, brand, model, number, created_at)
                VALUES ($1, $2, $3, $4, $5, $6)
                "#,
            )
            .bind(vehicle.id)
            .bind(vehicle.user_id)
            .bind(vehicle.brand.as_deref())
            .bind(vehicle.model.as_deref())
            .bind(vehicle.number.as_deref())
            .bind(vehicle.created_at);
            repo.executor.execute(query).await?;
        }
        Ok(items)
    }
}

#[async_trait]
impl CreateBatch<Postgres, VehicleModel> for VehicleRepositoryImpl {
    async fn create_batch(
        &self,
        items: Vec<VehicleModel>,
    ) -> Result<Vec<VehicleModel>, Box<dyn Error + Send + Sync>> {
        Self::create_batch_impl(self, items).await
    }
}
