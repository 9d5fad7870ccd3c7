use async_trait::async_trait;
use ride_admin_db::models::user::{DriverModel, UserModel};
use ride_admin_db::repository::load::Load;
use crate::utils::TryFromRow;
use sqlx::Postgres;
use std::error::Error;
use uuid::Uuid;

use super::repo_impl::DriverRepositoryImpl;

impl DriverRepositoryImpl {
    pub(super) async fn load_impl(
        repo: &DriverRepositoryImpl,
        id: Uuid,
    ) -> Result<Option<DriverModel>, Box<dyn Error + Send + Sync>> {
        let query = sqlx::query(r#"SELECT * FROM app_user WHERE id = $1 AND role = $2"#)
            .bind(id)
            .bind(Self::driver_role());
        let Some(row) = repo.executor.fetch_optional(query).await? else {
            return Ok(None);
        };
        let user = UserModel::try_from_row(&row)?;
        Ok(repo.assemble(vec![user]).await?.pop())
    }
}

#[async_trait]
impl Load<Postgres, DriverModel> for DriverRepositoryImpl {
    async fn load(&self, id: Uuid) -> Result<Option<DriverModel>, Box<dyn Error + Send + Sync>> {
        Self::load_impl(self, id).await
    }
}
