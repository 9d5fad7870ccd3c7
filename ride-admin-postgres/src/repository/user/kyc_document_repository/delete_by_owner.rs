use async_trait::async_trait;
use ride_admin_db::repository::delete_by_owner::DeleteByOwner;
use sqlx::Postgres;
use std::error::Error;
use uuid::Uuid;

use super::repo_impl::KycDocumentRepositoryImpl;

impl KycDocumentRepositoryImpl {
    pub(super) async fn delete_by_owner_impl(
        repo: &KycDocumentRepositoryImpl,
        owner_id: Uuid,
    ) -> Result<usize, Box<dyn Error + Send + Sync>> {
        let query = sqlx::query(r#"DELETE FROM user_kyc_document WHERE user_id = $1"#).bind(owner_id);
        let deleted = repo.executor.execute(query).await?.rows_affected() as usize;
        tracing::info!(user_id = %owner_id, deleted, "Deleted KYC documents");
        Ok(deleted)
    }
}

#[async_trait]
impl DeleteByOwner<Postgres> for KycDocumentRepositoryImpl {
    async fn delete_by_owner(&self, owner_id: Uuid) -> Result<usize, Box<dyn Error + Send + Sync>> {
        Self::delete_by_owner_impl(self, owner_id).await
    }
}
