use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use tracing::debug;
use uuid::Uuid;

use super::activity::is_flag_active;
use super::kyc_document::{is_submission_complete, KycDocuments};
use super::kyc_status::{KycStatus, STATUS_NOT_SUBMITTED};
use super::verification::Verification;

/// The slice of a driver's user record that KYC review and activation touch
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct DriverVerificationRecord {
    pub driver_id: Uuid,
    pub verification: Verification,
    pub documents: KycDocuments,
    pub rejection_reason: Option<String>,
    pub verified_at: Option<DateTime<Utc>>,
    pub rejected_at: Option<DateTime<Utc>>,
    /// Missing means active; see [`is_flag_active`]
    pub vehicle_active: Option<bool>,
    /// Missing means active; see [`is_flag_active`]
    pub is_active: Option<bool>,
    pub updated_at: Option<DateTime<Utc>>,
}

/// Store-side work a review decision requires before it can be committed
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SideEffect {
    /// Remove every entry of the driver's KYC document sub-collection
    DeleteKycDocuments { driver_id: Uuid },
}

impl DriverVerificationRecord {
    /// A driver who has never touched KYC
    pub fn new(driver_id: Uuid) -> Self {
        Self {
            driver_id,
            verification: Verification::default(),
            documents: KycDocuments::new(),
            rejection_reason: None,
            verified_at: None,
            rejected_at: None,
            vehicle_active: None,
            is_active: None,
            updated_at: None,
        }
    }

    pub fn document_count(&self) -> usize {
        self.documents.len()
    }

    pub fn kyc_status(&self) -> KycStatus {
        self.verification.derive_status(self.document_count())
    }

    pub fn is_submission_complete(&self) -> bool {
        is_submission_complete(&self.documents)
    }

    pub fn is_vehicle_active(&self) -> bool {
        is_flag_active(self.vehicle_active)
    }

    pub fn is_driver_active(&self) -> bool {
        is_flag_active(self.is_active)
    }

    /// Documents are on file but no approval has happened yet
    pub fn has_pending_review(&self) -> bool {
        self.document_count() > 0 && self.kyc_status() != KycStatus::Verified
    }
}

/// Mark the submission verified.
///
/// Completeness is not checked here; callers gate on [`is_submission_complete`].
pub fn approve(
    mut record: DriverVerificationRecord,
    now: DateTime<Utc>,
) -> DriverVerificationRecord {
    record.verification = Verification::approved();
    record.verified_at = Some(now);
    record.rejected_at = None;
    record.rejection_reason = None;
    record.updated_at = Some(now);
    record
}

/// Mark the submission rejected.
///
/// With `allow_resubmission` the record is returned to its initial
/// `not-submitted` state with no documents, and the caller must purge the
/// stored documents (the returned side effect) before writing the record.
pub fn reject(
    mut record: DriverVerificationRecord,
    reason: Option<String>,
    allow_resubmission: bool,
    now: DateTime<Utc>,
) -> (DriverVerificationRecord, Option<SideEffect>) {
    record.verification = Verification::Rejected;
    record.rejected_at = Some(now);
    record.verified_at = None;
    if reason.is_some() {
        record.rejection_reason = reason;
    }
    record.updated_at = Some(now);

    if !allow_resubmission {
        return (record, None);
    }

    debug!(
        driver_id = %record.driver_id,
        documents = record.documents.len(),
        "Rejection reopens KYC for resubmission"
    );
    record.verification = Verification::Unadjudicated {
        status_text: Some(STATUS_NOT_SUBMITTED.to_string()),
    };
    record.documents.clear();
    let effect = SideEffect::DeleteKycDocuments {
        driver_id: record.driver_id,
    };
    (record, Some(effect))
}

pub fn set_vehicle_active(
    mut record: DriverVerificationRecord,
    active: bool,
    now: DateTime<Utc>,
) -> DriverVerificationRecord {
    record.vehicle_active = Some(active);
    record.updated_at = Some(now);
    record
}

pub fn set_driver_active(
    mut record: DriverVerificationRecord,
    active: bool,
    now: DateTime<Utc>,
) -> DriverVerificationRecord {
    record.is_active = Some(active);
    record.updated_at = Some(now);
    record
}
