use async_trait::async_trait;
use ride_admin_db::models::user::KycDocumentModel;
use ride_admin_db::repository::create_batch::CreateBatch;
use sqlx::Postgres;
use std::error::Error;

use super::repo_impl::KycDocumentRepositoryImpl;

impl KycDocumentRepositoryImpl {
    pub(super) async fn create_batch_impl(
        repo: &KycDocumentRepositoryImpl,
        items: Vec<KycDocumentModel>,
    ) -> Result<Vec<KycDocumentModel>, Box<dyn Error + Send + Sync>> {
        for document in &items {
            let query = sqlx::query(
                r#"
                INSERT INTO user_kyc_document
                (id, user_id, document_key, url, uploaded_at, document_type)
                VALUES ($1, $2, $3, $4, $5, $6)
                "#,
            )
            .bind(document.id)
            .bind(document.user_id)
            .bind(document.document_key.as_str())
            .bind(document.url.as_deref())
            .bind(document.uploaded_at)
            .bind(document.document_type.as_str());
            repo.executor.execute(query).await?;
        }
        Ok(items)
    }
}

#[async_trait]
impl CreateBatch<Postgres, KycDocumentModel> for KycDocumentRepositoryImpl {
    async fn create_batch(
        &self,
        items: Vec<KycDocumentModel>,
    ) -> Result<Vec<KycDocumentModel>, Box<dyn Error + Send + Sync>> {
        Self::create_batch_impl(self, items).await
    }
}
