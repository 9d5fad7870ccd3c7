use serde::{Deserialize, Serialize};
use validator::Validate;

use crate::error::{AdminError, AdminResult};

/// Admin input for a KYC rejection
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize, Validate)]
pub struct RejectKycRequest {
    /// Shown to the driver; omitted when blank
    #[validate(length(max = 500))]
    pub reason: Option<String>,
    /// Purge the uploaded documents so the driver can submit again
    #[serde(default)]
    pub allow_resubmission: bool,
}

impl RejectKycRequest {
    pub fn new(reason: Option<&str>, allow_resubmission: bool) -> Self {
        Self {
            reason: reason.map(str::to_string),
            allow_resubmission,
        }
    }

    /// Validate and return the reason with whitespace-only input dropped
    pub fn checked_reason(&self) -> AdminResult<Option<String>> {
        self.validate()
            .map_err(|e| AdminError::ValidationError(e.to_string()))?;
        Ok(self
            .reason
            .as_deref()
            .map(str::trim)
            .filter(|reason| !reason.is_empty())
            .map(str::to_string))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_blank_reason_is_dropped() {
        let request = RejectKycRequest::new(Some("   "), false);
        assert_eq!(request.checked_reason().unwrap(), None);
    }

    #[test]
    fn test_reason_is_trimmed() {
        let request = RejectKycRequest::new(Some("  blurry photo "), true);
        assert_eq!(request.checked_reason().unwrap().as_deref(), Some("blurry photo"));
    }

    #[test]
    fn test_overlong_reason_is_rejected() {
        let long = "x".repeat(501);
        let request = RejectKycRequest::new(Some(&long), false);
        assert!(matches!(
            request.checked_reason(),
            Err(AdminError::ValidationError(_))
        ));
    }
}
