use async_trait::async_trait;
use ride_admin_db::models::user::UserFieldPatch;
use ride_admin_db::repository::update_fields::UpdateFields;
use sqlx::{Postgres, QueryBuilder};
use std::error::Error;
use uuid::Uuid;

use super::repo_impl::UserRepositoryImpl;

impl UserRepositoryImpl {
    pub(super) async fn update_fields_impl(
        repo: &UserRepositoryImpl,
        id: Uuid,
        patch: &UserFieldPatch,
    ) -> Result<bool, Box<dyn Error + Send + Sync>> {
        if patch.is_empty() {
            let query = sqlx::query(r#"SELECT 1 FROM app_user WHERE id = $1"#).bind(id);
            return Ok(repo.executor.fetch_optional(query).await?.is_some());
        }

        let mut builder = QueryBuilder::<Postgres>::new("UPDATE app_user SET ");
        {
            let mut columns = builder.separated(", ");
            if let Some(value) = patch.kyc_approved {
                columns.push("kyc_approved = ").push_bind_unseparated(value);
            }
            if let Some(value) = &patch.kyc_status {
                columns.push("kyc_status = ").push_bind_unseparated(value.clone());
            }
            if let Some(value) = &patch.kyc_rejection_reason {
                columns
                    .push("kyc_rejection_reason = ")
                    .push_bind_unseparated(value.clone());
            }
            if let Some(value) = patch.kyc_verified_at {
                columns.push("kyc_verified_at = ").push_bind_unseparated(value);
            }
            if let Some(value) = patch.kyc_rejected_at {
                columns.push("kyc_rejected_at = ").push_bind_unseparated(value);
            }
            if let Some(value) = patch.vehicle_active {
                columns.push("vehicle_active = ").push_bind_unseparated(value);
            }
            if let Some(value) = patch.is_active {
                columns.push("is_active = ").push_bind_unseparated(value);
            }
            if let Some(value) = patch.updated_at {
                columns.push("updated_at = ").push_bind_unseparated(value);
            }
        }
        builder.push(" WHERE id = ").push_bind(id);

        let rows_affected = repo.executor.execute(builder.build()).await?.rows_affected();
        tracing::debug!(
            user_id = %id,
            rows_affected,
            patch = %serde_json::to_value(patch).unwrap_or_default(),
            "Applied user field patch"
        );
        Ok(rows_affected > 0)
    }
}

#[async_trait]
impl UpdateFields<Postgres, UserFieldPatch> for UserRepositoryImpl {
    async fn update_fields(
        &self,
        id: Uuid,
        patch: &UserFieldPatch,
    ) -> Result<bool, Box<dyn Error + Send + Sync>> {
        Self::update_fields_impl(self, id, patch).await
    }
}

#[cfg(test)]
mod tests {
    use crate::test_helper::setup_test_context;
    use chrono::{Timelike, Utc};
    use ride_admin_api::domain::driver::{approve, reject, DriverVerificationRecord};
    use ride_admin_db::models::user::UserFieldPatch;
    use ride_admin_db::repository::create_batch::CreateBatch;
    use ride_admin_db::repository::load::Load;
    use ride_admin_db::repository::update_fields::UpdateFields;
    use serial_test::serial;
    use uuid::Uuid;
    use super::super::test_utils::create_test_user;

    #[tokio::test]
    #[ignore = "requires DATABASE_URL"]
    #[serial]
    async fn test_update_fields_writes_only_touched_columns() -> Result<(), Box<dyn std::error::Error + Send + Sync>> {
        let ctx = setup_test_context().await?;
        let user_repo = &ctx.user_repos().user_repository;

        let mut user = create_test_user(Some("driver"), "Kofi");
        user.vehicle_active = Some(false);
        user_repo.create_batch(vec![user.clone()]).await?;

        let now = Utc::now().with_nanosecond(0).ok_or("invalid timestamp")?;
        let record = approve(DriverVerificationRecord::new(user.id), now);
        let updated = user_repo
            .update_fields(user.id, &UserFieldPatch::kyc_review(&record))
            .await?;
        assert!(updated);

        let loaded = user_repo.load(user.id).await?.ok_or("user missing")?;
        assert_eq!(loaded.kyc_approved, Some(true));
        assert_eq!(loaded.kyc_status.as_deref(), Some("verified"));
        assert_eq!(loaded.kyc_verified_at, Some(now));
        assert_eq!(loaded.vehicle_active, Some(false));
        assert_eq!(loaded.name, user.name);

        Ok(())
    }

    #[tokio::test]
    #[ignore = "requires DATABASE_URL"]
    #[serial]
    async fn test_update_fields_writes_nulls() -> Result<(), Box<dyn std::error::Error + Send + Sync>> {
        let ctx = setup_test_context().await?;
        let user_repo = &ctx.user_repos().user_repository;

        let mut user = create_test_user(Some("driver"), "Ama");
        user.kyc_approved = Some(false);
        user.kyc_status = Some("rejected".to_string());
        user_repo.create_batch(vec![user.clone()]).await?;

        let (record, _) = reject(DriverVerificationRecord::new(user.id), None, true, Utc::now());
        user_repo
            .update_fields(user.id, &UserFieldPatch::kyc_review(&record))
            .await?;

        let loaded = user_repo.load(user.id).await?.ok_or("user missing")?;
        assert_eq!(loaded.kyc_approved, None);
        assert_eq!(loaded.kyc_status.as_deref(), Some("not-submitted"));

        Ok(())
    }

    #[tokio::test]
    #[ignore = "requires DATABASE_URL"]
    #[serial]
    async fn test_update_fields_unknown_user() -> Result<(), Box<dyn std::error::Error + Send + Sync>> {
        let ctx = setup_test_context().await?;
        let user_repo = &ctx.user_repos().user_repository;

        let patch = UserFieldPatch {
            is_active: Some(Some(false)),
            ..UserFieldPatch::default()
        };
        assert!(!user_repo.update_fields(Uuid::new_v4(), &patch).await?);
        assert!(!user_repo.update_fields(Uuid::new_v4(), &UserFieldPatch::default()).await?);

        Ok(())
    }
}
