use chrono::{DateTime, Utc};
use ride_admin_api::domain::driver::DriverVerificationRecord;
use serde::Serialize;

use super::user::UserModel;

/// Partial update of a user record.
///
/// Outer `None` leaves a column untouched; `Some(None)` writes `NULL`.
/// Serialises with the storage field names, skipping untouched columns.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
pub struct UserFieldPatch {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub kyc_approved: Option<Option<bool>>,
    #[serde(rename = "kycStatus", skip_serializing_if = "Option::is_none")]
    pub kyc_status: Option<Option<String>>,
    #[serde(rename = "kycRejectionReason", skip_serializing_if = "Option::is_none")]
    pub kyc_rejection_reason: Option<Option<String>>,
    #[serde(rename = "kycVerifiedAt", skip_serializing_if = "Option::is_none")]
    pub kyc_verified_at: Option<Option<DateTime<Utc>>>,
    #[serde(rename = "kycRejectedAt", skip_serializing_if = "Option::is_none")]
    pub kyc_rejected_at: Option<Option<DateTime<Utc>>>,
    #[serde(rename = "vehicleActive", skip_serializing_if = "Option::is_none")]
    pub vehicle_active: Option<Option<bool>>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub is_active: Option<Option<bool>>,
    #[serde(rename = "updatedAt", skip_serializing_if = "Option::is_none")]
    pub updated_at: Option<DateTime<Utc>>,
}

impl UserFieldPatch {
    /// Columns written by an approve or reject decision
    pub fn kyc_review(record: &DriverVerificationRecord) -> Self {
        let legacy = record.verification.to_legacy();
        Self {
            kyc_approved: Some(legacy.kyc_approved),
            kyc_status: Some(legacy.kyc_status),
            kyc_rejection_reason: Some(record.rejection_reason.clone()),
            kyc_verified_at: Some(record.verified_at),
            kyc_rejected_at: Some(record.rejected_at),
            updated_at: record.updated_at,
            ..Self::default()
        }
    }

    pub fn vehicle_status(record: &DriverVerificationRecord) -> Self {
        Self {
            vehicle_active: Some(record.vehicle_active),
            updated_at: record.updated_at,
            ..Self::default()
        }
    }

    pub fn driver_status(record: &DriverVerificationRecord) -> Self {
        Self {
            is_active: Some(record.is_active),
            updated_at: record.updated_at,
            ..Self::default()
        }
    }

    pub fn is_empty(&self) -> bool {
        *self == Self::default()
    }

    /// Apply the touched columns to an in-memory user
    pub fn apply_to(&self, user: &mut UserModel) {
        if let Some(value) = self.kyc_approved {
            user.kyc_approved = value;
        }
        if let Some(value) = &self.kyc_status {
            user.kyc_status = value.clone();
        }
        if let Some(value) = &self.kyc_rejection_reason {
            user.kyc_rejection_reason = value.clone();
        }
        if let Some(value) = self.kyc_verified_at {
            user.kyc_verified_at = value;
        }
        if let Some(value) = self.kyc_rejected_at {
            user.kyc_rejected_at = value;
        }
        if let Some(value) = self.vehicle_active {
            user.vehicle_active = value;
        }
        if let Some(value) = self.is_active {
            user.is_active = value;
        }
        if let Some(value) = self.updated_at {
            user.updated_at = Some(value);
        }
    }
}
