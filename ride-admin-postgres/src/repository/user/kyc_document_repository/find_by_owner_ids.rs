use ride_admin_db::models::user::KycDocumentModel;
use crate::utils::TryFromRow;
use std::collections::HashMap;
use std::error::Error;
use uuid::Uuid;

use super::repo_impl::KycDocumentRepositoryImpl;

impl KycDocumentRepositoryImpl {
    /// Documents of the given owners grouped by owner, each group ordered by key
    pub async fn find_by_owner_ids(
        &self,
        owner_ids: &[Uuid],
    ) -> Result<HashMap<Uuid, Vec<KycDocumentModel>>, Box<dyn Error + Send + Sync>> {
        if owner_ids.is_empty() {
            return Ok(HashMap::new());
        }

        let query = sqlx::query(
            r#"SELECT * FROM user_kyc_document WHERE user_id = ANY($1) ORDER BY user_id, document_key"#,
        )
        .bind(owner_ids);
        let rows = self.executor.fetch_all(query).await?;

        let mut grouped: HashMap<Uuid, Vec<KycDocumentModel>> = HashMap::new();
        for row in &rows {
            let document = KycDocumentModel::try_from_row(row)?;
            grouped.entry(document.user_id).or_default().push(document);
        }
        Ok(grouped)
    }
}
