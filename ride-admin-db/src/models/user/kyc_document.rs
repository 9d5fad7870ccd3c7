use chrono::{DateTime, Utc};
use heapless::String as HeaplessString;
use ride_admin_api::domain::kyc_document::KycDocument;
use serde::{Deserialize, Serialize};
use uuid::Uuid;

use crate::models::identifiable::Identifiable;

/// # Documentation
/// Database model for one uploaded KYC document of a user
///
/// `document_key` is the slot the driver app uploaded into (`license`,
/// `id_front`, ...) and is unique per user.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct KycDocumentModel {
    pub id: Uuid,

    /// Owner of the document
    pub user_id: Uuid,

    pub document_key: HeaplessString<50>,

    /// Storage URL; `None` or empty while the upload has not finished
    pub url: Option<String>,

    #[serde(rename = "uploadedAt")]
    pub uploaded_at: Option<DateTime<Utc>>,

    /// Defaults to the document key when the app did not send a type
    #[serde(rename = "type")]
    pub document_type: HeaplessString<50>,
}

impl KycDocumentModel {
    pub fn to_document(&self) -> KycDocument {
        KycDocument {
            url: self.url.clone(),
            uploaded_at: self.uploaded_at,
            document_type: self.document_type.clone(),
        }
    }
}

impl Identifiable for KycDocumentModel {
    fn get_id(&self) -> Uuid {
        self.id
    }
}
