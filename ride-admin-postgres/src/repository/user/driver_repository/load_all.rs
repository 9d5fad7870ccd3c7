use async_trait::async_trait;
use ride_admin_db::models::user::{DriverModel, UserModel};
use ride_admin_db::repository::load_all::LoadAll;
use crate::utils::TryFromRow;
use sqlx::Postgres;
use std::error::Error;

use super::repo_impl::DriverRepositoryImpl;

impl DriverRepositoryImpl {
    pub(super) async fn load_all_impl(
        repo: &DriverRepositoryImpl,
    ) -> Result<Vec<DriverModel>, Box<dyn Error + Send + Sync>> {
        let query = sqlx::query(
            r#"SELECT * FROM app_user WHERE role = $1 ORDER BY created_at DESC NULLS LAST, id"#,
        )
        .bind(Self::driver_role());
        let rows = repo.executor.fetch_all(query).await?;
        let users = rows
            .iter()
            .map(UserModel::try_from_row)
            .collect::<Result<Vec<_>, _>>()?;

        let drivers = repo.assemble(users).await?;
        tracing::info!(count = drivers.len(), "Loaded drivers with KYC documents and vehicles");
        Ok(drivers)
    }
}

#[async_trait]
impl LoadAll<Postgres, DriverModel> for DriverRepositoryImpl {
    async fn load_all(&self) -> Result<Vec<DriverModel>, Box<dyn Error + Send + Sync>> {
        Self::load_all_impl(self).await
    }
}
