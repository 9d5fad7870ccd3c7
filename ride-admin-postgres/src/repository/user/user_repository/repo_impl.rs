use ride_admin_db::models::user::UserModel;
use crate::executor::Executor;
use crate::utils::{get_optional_nonblank_heapless_string, TryFromRow};
use sqlx::{postgres::PgRow, Row};
use std::error::Error;

pub struct UserRepositoryImpl {
    pub executor: Executor,
}

impl UserRepositoryImpl {
    pub fn new(executor: Executor) -> Self {
        Self { executor }
    }
}

impl TryFromRow<PgRow> for UserModel {
    fn try_from_row(row: &PgRow) -> Result<Self, Box<dyn Error + Send + Sync>> {
        Ok(UserModel {
            id: row.try_get("id")?,
            role: get_optional_nonblank_heapless_string(row, "role")?,
            name: row.try_get("name")?,
            username: row.try_get("username")?,
            display_name: row.try_get("display_name")?,
            email: row.try_get("email")?,
            phone: row.try_get("phone")?,
            kyc_approved: row.try_get("kyc_approved")?,
            kyc_status: row.try_get("kyc_status")?,
            kyc_rejection_reason: row.try_get("kyc_rejection_reason")?,
            kyc_verified_at: row.try_get("kyc_verified_at")?,
            kyc_rejected_at: row.try_get("kyc_rejected_at")?,
            vehicle_active: row.try_get("vehicle_active")?,
            is_active: row.try_get("is_active")?,
            created_at: row.try_get("created_at")?,
            updated_at: row.try_get("updated_at")?,
        })
    }
}
