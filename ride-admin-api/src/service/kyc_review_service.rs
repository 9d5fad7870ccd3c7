use async_trait::async_trait;

use crate::domain::driver::DriverVerificationRecord;
use crate::domain::request::RejectKycRequest;
use crate::error::AdminResult;

/// Admin actions on a single driver record.
///
/// Every method persists the change before returning the updated record, and
/// reports the outcome through a notification. On error nothing returned
/// should be applied to cached state.
///
/// # Example
/// ```ignore
/// let updated = service.approve_kyc(&record).await?;
/// directory.apply(&updated);
/// ```
#[async_trait]
pub trait KycReviewService: Send + Sync {
    /// Approve a complete KYC submission
    async fn approve_kyc(
        &self,
        record: &DriverVerificationRecord,
    ) -> AdminResult<DriverVerificationRecord>;

    /// Reject a submission, optionally purging documents so the driver can resubmit
    async fn reject_kyc(
        &self,
        record: &DriverVerificationRecord,
        request: &RejectKycRequest,
    ) -> AdminResult<DriverVerificationRecord>;

    async fn set_vehicle_active(
        &self,
        record: &DriverVerificationRecord,
        active: bool,
    ) -> AdminResult<DriverVerificationRecord>;

    async fn set_driver_active(
        &self,
        record: &DriverVerificationRecord,
        active: bool,
    ) -> AdminResult<DriverVerificationRecord>;
}
