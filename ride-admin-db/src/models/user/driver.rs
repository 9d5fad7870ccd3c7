use ride_admin_api::domain::activity::is_flag_active;
use ride_admin_api::domain::driver::DriverVerificationRecord;
use ride_admin_api::domain::kyc_document::{is_submission_complete, KycDocuments};
use ride_admin_api::domain::kyc_status::KycStatus;
use serde::{Deserialize, Serialize};
use uuid::Uuid;

use crate::models::identifiable::Identifiable;

use super::kyc_document::KycDocumentModel;
use super::user::UserModel;
use super::vehicle::VehicleModel;

/// A driver's user record joined with its KYC documents and vehicle.
///
/// This is the unit the driver list works on. Conversion to and from
/// [`DriverVerificationRecord`] is where the legacy KYC columns are
/// translated for the review logic.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct DriverModel {
    pub user: UserModel,
    #[serde(rename = "kycDocuments")]
    pub kyc_documents: Vec<KycDocumentModel>,
    pub vehicle: Option<VehicleModel>,
}

impl DriverModel {
    pub fn new(user: UserModel) -> Self {
        Self {
            user,
            kyc_documents: Vec::new(),
            vehicle: None,
        }
    }

    pub fn id(&self) -> Uuid {
        self.user.id
    }

    pub fn document_count(&self) -> usize {
        self.kyc_documents.len()
    }

    pub fn documents(&self) -> KycDocuments {
        self.kyc_documents
            .iter()
            .map(|doc| (doc.document_key.to_string(), doc.to_document()))
            .collect()
    }

    pub fn kyc_status(&self) -> KycStatus {
        self.user.verification().derive_status(self.document_count())
    }

    pub fn is_submission_complete(&self) -> bool {
        is_submission_complete(&self.documents())
    }

    pub fn has_vehicle(&self) -> bool {
        self.vehicle.is_some()
    }

    /// Active vehicle; `false` when no vehicle is registered
    pub fn has_active_vehicle(&self) -> bool {
        self.has_vehicle() && is_flag_active(self.user.vehicle_active)
    }

    /// Inactive vehicle; `false` when no vehicle is registered
    pub fn has_inactive_vehicle(&self) -> bool {
        self.has_vehicle() && !is_flag_active(self.user.vehicle_active)
    }

    pub fn to_record(&self) -> DriverVerificationRecord {
        DriverVerificationRecord {
            driver_id: self.user.id,
            verification: self.user.verification(),
            documents: self.documents(),
            rejection_reason: self.user.kyc_rejection_reason.clone(),
            verified_at: self.user.kyc_verified_at,
            rejected_at: self.user.kyc_rejected_at,
            vehicle_active: self.user.vehicle_active,
            is_active: self.user.is_active,
            updated_at: self.user.updated_at,
        }
    }

    /// Copy a reviewed record back onto this driver.
    ///
    /// Documents absent from the record are dropped, which is how a
    /// resubmission purge shows up locally.
    pub fn apply_record(&mut self, record: &DriverVerificationRecord) {
        let legacy = record.verification.to_legacy();
        self.user.kyc_approved = legacy.kyc_approved;
        self.user.kyc_status = legacy.kyc_status;
        self.user.kyc_rejection_reason = record.rejection_reason.clone();
        self.user.kyc_verified_at = record.verified_at;
        self.user.kyc_rejected_at = record.rejected_at;
        self.user.vehicle_active = record.vehicle_active;
        self.user.is_active = record.is_active;
        self.user.updated_at = record.updated_at;
        self.kyc_documents
            .retain(|doc| record.documents.contains_key(doc.document_key.as_str()));
    }
}

impl Identifiable for DriverModel {
    fn get_id(&self) -> Uuid {
        self.user.id
    }
}
