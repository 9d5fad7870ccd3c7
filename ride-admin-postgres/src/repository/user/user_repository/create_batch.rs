use async_trait::async_trait;
use ride_admin_db::models::user::UserModel;
use ride_admin_db::repository::create_batch::CreateBatch;
use sqlx::Postgres;
use std::error::Error;

use super::repo_impl::UserRepositoryImpl;

impl UserRepositoryImpl {
    pub(super) async fn create_batch_impl(
        repo: &UserRepositoryImpl,
        items: Vec<UserModel>,
    ) -> Result<Vec<UserModel>, Box<dyn Error + Send + Sync>> {
        for user in &items {
            let query = sqlx::query(
                r#"
                INSERT INTO app_user
                (id, role, name, username, display_name, email, phone,
                 kyc_approved, kyc_status, kyc_rejection_reason, kyc_verified_at, kyc_rejected_at,
                 vehicle_active, is_active, created_at, updated_at)
                VALUES ($1, $2, $3, $4, $5, $6, $7, $8, $9, $10, $11, $12, $13, $14, $15, $16)
                "#,
            )
            .bind(user.id)
            .bind(user.role.as_deref())
            .bind(user.name.as_deref())
            .bind(user.username.as_deref())
            .bind(user.display_name.as_deref())
            .bind(user.email.as_deref())
            .bind(user.phone.as_deref())
            .bind(user.kyc_approved)
            .bind(user.kyc_status.as_deref())
            .bind(user.kyc_rejection_reason.as_deref())
            .bind(user.kyc_verified_at)
            .bind(user.kyc_rejected_at)
            .bind(user.vehicle_active)
            .bind(user.is_active)
            .bind(user.created_at)
            .bind(user.updated_at);
            repo.executor.execute(query).await?;
        }
        Ok(items)
    }
}

#[async_trait]
impl CreateBatch<Postgres, UserModel> for UserRepositoryImpl {
    async fn create_batch(
        &self,
        items: Vec<UserModel>,
    ) -> Result<Vec<UserModel>, Box<dyn Error + Send + Sync>> {
        Self::create_batch_impl(self, items).await
    }
}
