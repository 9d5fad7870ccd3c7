use ride_admin_db::models::booking::BookingModel;
use crate::executor::Executor;
use crate::utils::{get_heapless_string, TryFromRow};
use sqlx::{postgres::PgRow, Row};
use std::error::Error;

pub struct BookingRepositoryImpl {
    pub executor: Executor,
}

impl BookingRepositoryImpl {
    pub fn new(executor: Executor) -> Self {
        Self { executor }
    }
}

impl TryFromRow<PgRow> for BookingModel {
    fn try_from_row(row: &PgRow) -> Result<Self, Box<dyn Error + Send + Sync>> {
        Ok(BookingModel {
            id: row.try_get("id")?,
            status: get_heapless_string(row, "status")?,
            fare: row.try_get("fare")?,
            amount: row.try_get("amount")?,
            pickup_location: row.try_get("pickup_location")?,
            dropoff_location: row.try_get("dropoff_location")?,
            driver_id: row.try_get("driver_id")?,
            client_id: row.try_get("client_id")?,
            created_at: row.try_get("created_at")?,
        })
    }
}
