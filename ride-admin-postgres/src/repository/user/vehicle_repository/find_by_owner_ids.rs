use ride_admin_db::models::user::VehicleModel;
use crate::utils::TryFromRow;
use std::collections::HashMap;
use std::error::Error;
use uuid::Uuid;

use super::repo_impl::VehicleRepositoryImpl;

impl VehicleRepositoryImpl {
    /// The first registered vehicle of each owner that has one
    pub async fn find_by_owner_ids(
        &self,
        owner_ids: &[Uuid],
    ) -> Result<HashMap<Uuid, VehicleModel>, Box<dyn Error + Send + Sync>> {
        if owner_ids.is_empty() {
            return Ok(HashMap::new());
        }

        let query = sqlx::query(
            r#"
            SELECT DISTINCT ON (user_id) *
            FROM user_vehicle
            WHERE user_id = ANY($1)
            ORDER BY user_id, created_at ASC NULLS LAST, id
            "#,
        )
        .bind(owner_ids);
        let rows = self.executor.fetch_all(query).await?;

        rows.iter()
            .map(|row| VehicleModel::try_from_row(row).map(|vehicle| (vehicle.user_id, vehicle)))
            .collect()
    }
}
