use async_trait::async_trait;
use ride_admin_db::models::user::UserModel;
use ride_admin_db::repository::load_all::LoadAll;
use crate::utils::TryFromRow;
use sqlx::Postgres;
use std::error::Error;

use super::repo_impl::UserRepositoryImpl;

impl UserRepositoryImpl {
    pub(super) async fn load_all_impl(
        repo: &UserRepositoryImpl,
    ) -> Result<Vec<UserModel>, Box<dyn Error + Send + Sync>> {
        let query = sqlx::query(r#"SELECT * FROM app_user ORDER BY created_at DESC NULLS LAST, id"#);
        let rows = repo.executor.fetch_all(query).await?;
        let users = rows
            .iter()
            .map(UserModel::try_from_row)
            .collect::<Result<Vec<_>, _>>()?;
        tracing::debug!(count = users.len(), "Loaded users");
        Ok(users)
    }
}

#[async_trait]
impl LoadAll<Postgres, UserModel> for UserRepositoryImpl {
    async fn load_all(&self) -> Result<Vec<UserModel>, Box<dyn Error + Send + Sync>> {
        Self::load_all_impl(self).await
    }
}
