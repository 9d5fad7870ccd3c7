use serde::{Deserialize, Serialize};

use super::kyc_status::{derive_status, KycStatus, STATUS_REJECTED, STATUS_VERIFIED};

/// Adjudication state of a driver's KYC submission.
///
/// Storage keeps two overlapping fields (a tri-state approval flag and a free
/// status string). Inside the crate they are one variant; [`Verification::from_legacy`]
/// and [`Verification::to_legacy`] are the only places the two-field form exists.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(tag = "state", rename_all = "snake_case")]
pub enum Verification {
    /// No admin decision on record. The status text is whatever the driver app wrote.
    Unadjudicated { status_text: Option<String> },
    /// Flag is `true`. The stored text is kept so that a record with no
    /// documents still derives from it.
    Verified { status_text: Option<String> },
    Rejected,
    /// Flag is `false` but the status text moved past `rejected`
    Reopened { status_text: Option<String> },
}

/// The two legacy storage fields, in storage form
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub struct LegacyKycFields {
    pub kyc_approved: Option<bool>,
    pub kyc_status: Option<String>,
}

impl Verification {
    pub fn from_legacy(kyc_approved: Option<bool>, kyc_status: Option<&str>) -> Self {
        let status_text = kyc_status.filter(|s| !s.is_empty()).map(str::to_string);
        match kyc_approved {
            None => Verification::Unadjudicated { status_text },
            Some(true) => Verification::Verified { status_text },
            Some(false) if status_text.as_deref() == Some(STATUS_REJECTED) => Verification::Rejected,
            Some(false) => Verification::Reopened { status_text },
        }
    }

    pub fn to_legacy(&self) -> LegacyKycFields {
        match self {
            Verification::Unadjudicated { status_text } => LegacyKycFields {
                kyc_approved: None,
                kyc_status: status_text.clone(),
            },
            Verification::Verified { status_text } => LegacyKycFields {
                kyc_approved: Some(true),
                kyc_status: status_text.clone(),
            },
            Verification::Rejected => LegacyKycFields {
                kyc_approved: Some(false),
                kyc_status: Some(STATUS_REJECTED.to_string()),
            },
            Verification::Reopened { status_text } => LegacyKycFields {
                kyc_approved: Some(false),
                kyc_status: status_text.clone(),
            },
        }
    }

    /// Display status for this state given how many documents are on file
    pub fn derive_status(&self, document_count: usize) -> KycStatus {
        let legacy = self.to_legacy();
        derive_status(legacy.kyc_approved, legacy.kyc_status.as_deref(), document_count)
    }

    pub fn is_adjudicated(&self) -> bool {
        !matches!(self, Verification::Unadjudicated { .. })
    }
}

impl Verification {
    /// The state written by an approval
    pub fn approved() -> Self {
        Verification::Verified {
            status_text: Some(STATUS_VERIFIED.to_string()),
        }
    }
}

impl Default for Verification {
    fn default() -> Self {
        Verification::Unadjudicated { status_text: None }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_from_legacy_maps_every_flag_state() {
        assert_eq!(
            Verification::from_legacy(None, Some("pending")),
            Verification::Unadjudicated { status_text: Some("pending".to_string()) }
        );
        assert_eq!(
            Verification::from_legacy(Some(true), Some("whatever")),
            Verification::Verified { status_text: Some("whatever".to_string()) }
        );
        assert_eq!(Verification::from_legacy(Some(false), Some("rejected")), Verification::Rejected);
        assert_eq!(
            Verification::from_legacy(Some(false), Some("submitted")),
            Verification::Reopened { status_text: Some("submitted".to_string()) }
        );
        assert_eq!(
            Verification::from_legacy(None, Some("")),
            Verification::Unadjudicated { status_text: None }
        );
    }

    #[test]
    fn test_to_legacy_normalises_decided_states() {
        let legacy = Verification::approved().to_legacy();
        assert_eq!(legacy.kyc_approved, Some(true));
        assert_eq!(legacy.kyc_status.as_deref(), Some("verified"));

        let legacy = Verification::Rejected.to_legacy();
        assert_eq!(legacy.kyc_approved, Some(false));
        assert_eq!(legacy.kyc_status.as_deref(), Some("rejected"));
    }

    #[test]
    fn test_derive_status_matches_legacy_rules() {
        assert_eq!(Verification::approved().derive_status(2), KycStatus::Verified);
        assert_eq!(Verification::Rejected.derive_status(0), KycStatus::Rejected);
        assert_eq!(
            Verification::Reopened { status_text: None }.derive_status(3),
            KycStatus::Pending
        );
        assert_eq!(Verification::default().derive_status(0), KycStatus::NotSubmitted);
        assert_eq!(Verification::default().derive_status(1), KycStatus::Submitted);
    }

    #[test]
    fn test_approved_flag_keeps_stored_text() {
        let verification = Verification::from_legacy(Some(true), Some("rejected"));
        assert_eq!(verification.derive_status(0), KycStatus::Rejected);
        assert_eq!(verification.derive_status(2), KycStatus::Verified);

        let legacy = verification.to_legacy();
        assert_eq!(legacy.kyc_approved, Some(true));
        assert_eq!(legacy.kyc_status.as_deref(), Some("rejected"));

        let bare = Verification::from_legacy(Some(true), None);
        assert_eq!(bare.derive_status(0), KycStatus::NotSubmitted);
        assert_eq!(bare.to_legacy().kyc_status, None);
    }

    #[test]
    fn test_serde_tagging() {
        let json = serde_json::to_value(Verification::Rejected).unwrap();
        assert_eq!(json["state"], "rejected");
    }
}
