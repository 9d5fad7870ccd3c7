use async_trait::async_trait;
use ride_admin_db::models::user::UserModel;
use ride_admin_db::repository::load::Load;
use crate::utils::TryFromRow;
use sqlx::Postgres;
use std::error::Error;
use uuid::Uuid;

use super::repo_impl::UserRepositoryImpl;

impl UserRepositoryImpl {
    pub(super) async fn load_impl(
        repo: &UserRepositoryImpl,
        id: Uuid,
    ) -> Result<Option<UserModel>, Box<dyn Error + Send + Sync>> {
        let query = sqlx::query(r#"SELECT * FROM app_user WHERE id = $1"#).bind(id);
        let row = repo.executor.fetch_optional(query).await?;
        row.as_ref().map(UserModel::try_from_row).transpose()
    }
}

#[async_trait]
impl Load<Postgres, UserModel> for UserRepositoryImpl {
    async fn load(&self, id: Uuid) -> Result<Option<UserModel>, Box<dyn Error + Send + Sync>> {
        Self::load_impl(self, id).await
    }
}
