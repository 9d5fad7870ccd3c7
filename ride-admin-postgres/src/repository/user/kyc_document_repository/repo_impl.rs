use ride_admin_db::models::user::KycDocumentModel;
use crate::executor::Executor;
use crate::utils::{get_heapless_string, TryFromRow};
use sqlx::{postgres::PgRow, Row};
use std::error::Error;

pub struct KycDocumentRepositoryImpl {
    pub executor: Executor,
}

impl KycDocumentRepositoryImpl {
    pub fn new(executor: Executor) -> Self {
        Self { executor }
    }
}

impl TryFromRow<PgRow> for KycDocumentModel {
    fn try_from_row(row: &PgRow) -> Result<Self, Box<dyn Error + Send + Sync>> {
        Ok(KycDocumentModel {
            id: row.try_get("id")?,
            user_id: row.try_get("user_id")?,
            document_key: get_heapless_string(row, "document_key")?,
            url: row.try_get("url")?,
            uploaded_at: row.try_get("uploaded_at")?,
            document_type: get_heapless_string(row, "document_type")?,
        })
    }
}
