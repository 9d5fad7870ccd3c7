use ride_admin_db::models::user::VehicleModel;
use crate::executor::Executor;
use crate::utils::{get_optional_nonblank_heapless_string, TryFromRow};
use sqlx::{postgres::PgRow, Row};
use std::error::Error;

pub struct VehicleRepositoryImpl {
    pub executor: Executor,
}

impl VehicleRepositoryImpl {
    pub fn new(executor: Executor) -> Self {
        Self { executor }
    }
}

impl TryFromRow<PgRow> for VehicleModel {
    fn try_from_row(row: &PgRow) -> Result<Self, Box<dyn Error + Send + Sync>> {
        Ok(VehicleModel {
            id: row.try_get("id")?,
            user_id: row.try_get("user_id")?,
            brand: get_optional_nonblank_heapless_string(row, "brand")?,
            model: get_optional_nonblank_heapless_string(row, "model")?,
            number: get_optional_nonblank_heapless_string(row, "number")?,
            created_at: row.try_get("created_at")?,
        })
    }
}
