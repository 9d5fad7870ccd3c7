use std::sync::Arc;
use std::time::Duration;

use async_trait::async_trait;
use chrono::Utc;
use ride_admin_api::config::ReviewConfig;
use ride_admin_api::domain::driver::{self, DriverVerificationRecord, SideEffect};
use ride_admin_api::domain::notification::Notification;
use ride_admin_api::domain::request::RejectKycRequest;
use ride_admin_api::error::{AdminError, AdminResult};
use ride_admin_api::service::{KycReviewService, NotificationSink};
use ride_admin_db::models::user::UserFieldPatch;
use ride_admin_db::repository::delete_by_owner::DeleteByOwner;
use ride_admin_db::repository::update_fields::UpdateFields;
use sqlx::Postgres;
use tracing::{error, info, warn};
use uuid::Uuid;

const MSG_KYC_APPROVED: &str = "KYC approved successfully!";
const MSG_KYC_REJECTED: &str = "KYC rejected successfully!";
const MSG_KYC_REJECTED_RESUBMIT: &str = "KYC rejected (resubmission allowed) successfully!";
const MSG_KYC_INCOMPLETE: &str =
    "KYC submission is incomplete. All documents must be uploaded before approval.";
const MSG_KYC_UPDATE_FAILED: &str = "Error updating KYC status. Please try again.";
const MSG_KYC_REJECT_FAILED: &str = "Failed to reject KYC. Please try again.";
const MSG_VEHICLE_FAILED: &str = "Error updating vehicle status. Please try again.";
const MSG_DRIVER_FAILED: &str = "Error updating driver status. Please try again.";

/// Runs admin actions against the record store.
///
/// `U` writes user columns, `D` purges KYC documents. A reject with
/// resubmission deletes the documents first and then writes the status,
/// retrying the write up to `status_write_retries` extra times. If the write
/// still fails the documents are gone but the status is stale, which is
/// reported as [`AdminError::PartialFailure`].
pub struct KycReviewServiceImpl<U, D, N> {
    users: Arc<U>,
    documents: Arc<D>,
    notifications: Arc<N>,
    config: ReviewConfig,
}

impl<U, D, N> KycReviewServiceImpl<U, D, N>
where
    U: UpdateFields<Postgres, UserFieldPatch>,
    D: DeleteByOwner<Postgres>,
    N: NotificationSink,
{
    pub fn new(users: Arc<U>, documents: Arc<D>, notifications: Arc<N>, config: ReviewConfig) -> Self {
        Self {
            users,
            documents,
            notifications,
            config,
        }
    }

    async fn fail(&self, message: &str, err: AdminError) -> AdminError {
        self.notifications.notify(Notification::error(message)).await;
        err
    }

    /// Single attempt; a missing row is `NotFound`
    async fn write_patch(
        &self,
        driver_id: Uuid,
        patch: &UserFieldPatch,
        failure_message: &str,
    ) -> AdminResult<()> {
        match self.users.update_fields(driver_id, patch).await {
            Ok(true) => Ok(()),
            Ok(false) => Err(self
                .fail(failure_message, AdminError::NotFound(format!("Driver {driver_id}")))
                .await),
            Err(e) => {
                error!(driver_id = %driver_id, error = %e, "User record write failed");
                Err(self
                    .fail(failure_message, AdminError::CollaboratorFailure(e.to_string()))
                    .await)
            }
        }
    }

    /// Status write after a document purge, retried with linear backoff
    async fn write_patch_after_purge(&self, driver_id: Uuid, patch: &UserFieldPatch) -> AdminResult<()> {
        let mut attempt: u32 = 0;
        loop {
            attempt += 1;
            match self.users.update_fields(driver_id, patch).await {
                Ok(true) => return Ok(()),
                Ok(false) => {
                    return Err(self
                        .fail(MSG_KYC_REJECT_FAILED, AdminError::NotFound(format!("Driver {driver_id}")))
                        .await)
                }
                Err(e) if attempt <= self.config.status_write_retries => {
                    warn!(driver_id = %driver_id, attempt, error = %e, "Status write failed after document purge, retrying");
                    let backoff = self.config.retry_backoff_ms.saturating_mul(u64::from(attempt));
                    tokio::time::sleep(Duration::from_millis(backoff)).await;
                }
                Err(e) => {
                    error!(driver_id = %driver_id, attempt, error = %e, "KYC documents deleted but status write failed");
                    return Err(self
                        .fail(
                            MSG_KYC_REJECT_FAILED,
                            AdminError::PartialFailure(format!(
                                "KYC documents of driver {driver_id} were deleted but the status was not updated: {e}"
                            )),
                        )
                        .await);
                }
            }
        }
    }
}

#[async_trait]
impl<U, D, N> KycReviewService for KycReviewServiceImpl<U, D, N>
where
    U: UpdateFields<Postgres, UserFieldPatch>,
    D: DeleteByOwner<Postgres>,
    N: NotificationSink,
{
    async fn approve_kyc(&self, record: &DriverVerificationRecord) -> AdminResult<DriverVerificationRecord> {
        if self.config.require_complete_submission && !record.is_submission_complete() {
            warn!(driver_id = %record.driver_id, "Approval refused for incomplete KYC submission");
            return Err(self
                .fail(MSG_KYC_INCOMPLETE, AdminError::ValidationError(MSG_KYC_INCOMPLETE.to_string()))
                .await);
        }

        let updated = driver::approve(record.clone(), Utc::now());
        self.write_patch(record.driver_id, &UserFieldPatch::kyc_review(&updated), MSG_KYC_UPDATE_FAILED)
            .await?;

        info!(driver_id = %record.driver_id, "KYC approved");
        self.notifications.notify(Notification::success(MSG_KYC_APPROVED)).await;
        Ok(updated)
    }

    async fn reject_kyc(
        &self,
        record: &DriverVerificationRecord,
        request: &RejectKycRequest,
    ) -> AdminResult<DriverVerificationRecord> {
        let reason = match request.checked_reason() {
            Ok(reason) => reason,
            Err(e) => return Err(self.fail(MSG_KYC_REJECT_FAILED, e).await),
        };

        let (updated, effect) = driver::reject(
            record.clone(),
            reason,
            request.allow_resubmission,
            Utc::now(),
        );
        let patch = UserFieldPatch::kyc_review(&updated);

        match effect {
            Some(SideEffect::DeleteKycDocuments { driver_id }) => {
                match self.documents.delete_by_owner(driver_id).await {
                    Ok(deleted) => {
                        info!(driver_id = %driver_id, deleted, "KYC documents purged for resubmission")
                    }
                    Err(e) => {
                        error!(driver_id = %driver_id, error = %e, "KYC document purge failed");
                        return Err(self
                            .fail(MSG_KYC_REJECT_FAILED, AdminError::CollaboratorFailure(e.to_string()))
                            .await);
                    }
                }
                self.write_patch_after_purge(driver_id, &patch).await?;
            }
            None => {
                self.write_patch(record.driver_id, &patch, MSG_KYC_REJECT_FAILED)
                    .await?;
            }
        }

        info!(
            driver_id = %record.driver_id,
            allow_resubmission = request.allow_resubmission,
            "KYC rejected"
        );
        let message = if request.allow_resubmission {
            MSG_KYC_REJECTED_RESUBMIT
        } else {
            MSG_KYC_REJECTED
        };
        self.notifications.notify(Notification::success(message)).await;
        Ok(updated)
    }

    async fn set_vehicle_active(
        &self,
        record: &DriverVerificationRecord,
        active: bool,
    ) -> AdminResult<DriverVerificationRecord> {
        let updated = driver::set_vehicle_active(record.clone(), active, Utc::now());
        self.write_patch(record.driver_id, &UserFieldPatch::vehicle_status(&updated), MSG_VEHICLE_FAILED)
            .await?;

        info!(driver_id = %record.driver_id, active, "Vehicle status updated");
        let message = format!(
            "Vehicle {} successfully!",
            if active { "activated" } else { "deactivated" }
        );
        self.notifications.notify(Notification::success(message)).await;
        Ok(updated)
    }

    async fn set_driver_active(
        &self,
        record: &DriverVerificationRecord,
        active: bool,
    ) -> AdminResult<DriverVerificationRecord> {
        let updated = driver::set_driver_active(record.clone(), active, Utc::now());
        self.write_patch(record.driver_id, &UserFieldPatch::driver_status(&updated), MSG_DRIVER_FAILED)
            .await?;

        info!(driver_id = %record.driver_id, active, "Driver status updated");
        let message = format!(
            "Driver {} successfully!",
            if active { "activated" } else { "deactivated" }
        );
        self.notifications.notify(Notification::success(message)).await;
        Ok(updated)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use parking_lot::Mutex;
    use ride_admin_api::domain::kyc_document::KycDocument;
    use ride_admin_api::domain::kyc_status::KycStatus;
    use ride_admin_api::domain::notification::NotificationKind;
    use ride_admin_db::models::user::UserModel;
    use std::collections::HashMap;
    use std::error::Error;
    use tokio_test::{assert_err, assert_ok};

    /// In-memory record store with injectable failures
    #[derive(Default)]
    struct FakeStore {
        users: Mutex<HashMap<Uuid, UserModel>>,
        documents: Mutex<HashMap<Uuid, usize>>,
        failing_updates: Mutex<u32>,
        update_calls: Mutex<u32>,
        fail_delete: Mutex<bool>,
    }

    impl FakeStore {
        fn with_driver(id: Uuid, documents: usize) -> Arc<Self> {
            let store = FakeStore::default();
            store.users.lock().insert(id, UserModel::new(id, Some("driver")));
            store.documents.lock().insert(id, documents);
            Arc::new(store)
        }

        fn user(&self, id: Uuid) -> UserModel {
            self.users.lock().get(&id).cloned().unwrap()
        }

        fn documents(&self, id: Uuid) -> usize {
            self.documents.lock().get(&id).copied().unwrap_or(0)
        }
    }

    #[async_trait]
    impl UpdateFields<Postgres, UserFieldPatch> for FakeStore {
        async fn update_fields(&self, id: Uuid, patch: &UserFieldPatch) -> Result<bool, Box<dyn Error + Send + Sync>> {
            *self.update_calls.lock() += 1;
            {
                let mut failing = self.failing_updates.lock();
                if *failing > 0 {
                    *failing -= 1;
                    return Err("connection reset".into());
                }
            }
            match self.users.lock().get_mut(&id) {
                Some(user) => {
                    patch.apply_to(user);
                    Ok(true)
                }
                None => Ok(false),
            }
        }
    }

    #[async_trait]
    impl DeleteByOwner<Postgres> for FakeStore {
        async fn delete_by_owner(&self, owner_id: Uuid) -> Result<usize, Box<dyn Error + Send + Sync>> {
            if *self.fail_delete.lock() {
                return Err("storage unavailable".into());
            }
            Ok(self.documents.lock().remove(&owner_id).unwrap_or(0))
        }
    }

    #[derive(Default)]
    struct RecordingSink {
        received: Mutex<Vec<Notification>>,
    }

    impl RecordingSink {
        fn last(&self) -> Notification {
            self.received.lock().last().cloned().unwrap()
        }
    }

    #[async_trait]
    impl NotificationSink for RecordingSink {
        async fn notify(&self, notification: Notification) {
            self.received.lock().push(notification);
        }
    }

    fn config() -> ReviewConfig {
        ReviewConfig {
            retry_backoff_ms: 0,
            ..ReviewConfig::default()
        }
    }

    fn service(store: &Arc<FakeStore>, sink: &Arc<RecordingSink>) -> KycReviewServiceImpl<FakeStore, FakeStore, RecordingSink> {
        KycReviewServiceImpl::new(store.clone(), store.clone(), sink.clone(), config())
    }

    fn record_with_documents(id: Uuid, keys: &[&str]) -> DriverVerificationRecord {
        let mut record = DriverVerificationRecord::new(id);
        for key in keys {
            record.documents.insert(
                key.to_string(),
                KycDocument {
                    url: Some(format!("https://files.example.com/{key}.jpg")),
                    uploaded_at: None,
                    document_type: heapless::String::try_from(*key).unwrap(),
                },
            );
        }
        record
    }

    #[tokio::test]
    async fn test_approve_writes_status_and_notifies() {
        let id = Uuid::new_v4();
        let store = FakeStore::with_driver(id, 2);
        let sink = Arc::new(RecordingSink::default());

        let record = record_with_documents(id, &["license", "id_front"]);
        let updated = assert_ok!(service(&store, &sink).approve_kyc(&record).await);

        assert_eq!(updated.kyc_status(), KycStatus::Verified);
        let stored = store.user(id);
        assert_eq!(stored.kyc_approved, Some(true));
        assert_eq!(stored.kyc_status.as_deref(), Some("verified"));
        assert!(stored.kyc_verified_at.is_some());
        assert_eq!(sink.last(), Notification::success("KYC approved successfully!"));
    }

    #[tokio::test]
    async fn test_approve_refuses_incomplete_submission() {
        let id = Uuid::new_v4();
        let store = FakeStore::with_driver(id, 1);
        let sink = Arc::new(RecordingSink::default());

        let mut record = record_with_documents(id, &["license"]);
        if let Some(doc) = record.documents.get_mut("license") {
            doc.url = Some(String::new());
        }
        let err = assert_err!(service(&store, &sink).approve_kyc(&record).await);

        assert!(matches!(err, AdminError::ValidationError(_)));
        assert_eq!(*store.update_calls.lock(), 0);
        assert_eq!(sink.last().kind, NotificationKind::Error);
    }

    #[tokio::test]
    async fn test_approve_unknown_driver_is_not_found() {
        let store = Arc::new(FakeStore::default());
        let sink = Arc::new(RecordingSink::default());

        let record = record_with_documents(Uuid::new_v4(), &["license"]);
        let err = assert_err!(service(&store, &sink).approve_kyc(&record).await);

        assert!(matches!(err, AdminError::NotFound(_)));
        assert_eq!(sink.last(), Notification::error("Error updating KYC status. Please try again."));
    }

    #[tokio::test]
    async fn test_reject_keeps_documents_without_resubmission() {
        let id = Uuid::new_v4();
        let store = FakeStore::with_driver(id, 2);
        let sink = Arc::new(RecordingSink::default());

        let record = record_with_documents(id, &["license", "id_front"]);
        let request = RejectKycRequest::new(Some("  Blurry licence photo "), false);
        let updated = assert_ok!(service(&store, &sink).reject_kyc(&record, &request).await);

        assert_eq!(updated.kyc_status(), KycStatus::Rejected);
        assert_eq!(updated.document_count(), 2);
        assert_eq!(store.documents(id), 2);
        let stored = store.user(id);
        assert_eq!(stored.kyc_approved, Some(false));
        assert_eq!(stored.kyc_status.as_deref(), Some("rejected"));
        assert_eq!(stored.kyc_rejection_reason.as_deref(), Some("Blurry licence photo"));
        assert_eq!(sink.last(), Notification::success("KYC rejected successfully!"));
    }

    #[tokio::test]
    async fn test_reject_with_resubmission_purges_then_writes() {
        let id = Uuid::new_v4();
        let store = FakeStore::with_driver(id, 2);
        let sink = Arc::new(RecordingSink::default());

        let record = record_with_documents(id, &["license", "id_front"]);
        let request = RejectKycRequest::new(None, true);
        let updated = assert_ok!(service(&store, &sink).reject_kyc(&record, &request).await);

        assert_eq!(updated.kyc_status(), KycStatus::NotSubmitted);
        assert_eq!(updated.document_count(), 0);
        assert_eq!(store.documents(id), 0);
        let stored = store.user(id);
        assert_eq!(stored.kyc_approved, None);
        assert_eq!(stored.kyc_status.as_deref(), Some("not-submitted"));
        assert!(stored.kyc_rejected_at.is_some());
        assert_eq!(
            sink.last(),
            Notification::success("KYC rejected (resubmission allowed) successfully!")
        );
    }

    #[tokio::test]
    async fn test_reject_purge_failure_skips_status_write() {
        let id = Uuid::new_v4();
        let store = FakeStore::with_driver(id, 2);
        *store.fail_delete.lock() = true;
        let sink = Arc::new(RecordingSink::default());

        let record = record_with_documents(id, &["license", "id_front"]);
        let request = RejectKycRequest::new(None, true);
        let err = assert_err!(service(&store, &sink).reject_kyc(&record, &request).await);

        assert!(matches!(err, AdminError::CollaboratorFailure(_)));
        assert_eq!(*store.update_calls.lock(), 0);
        assert_eq!(store.user(id).kyc_status, None);
        assert_eq!(sink.last(), Notification::error("Failed to reject KYC. Please try again."));
    }

    #[tokio::test]
    async fn test_reject_status_write_is_retried_after_purge() {
        let id = Uuid::new_v4();
        let store = FakeStore::with_driver(id, 1);
        *store.failing_updates.lock() = 2;
        let sink = Arc::new(RecordingSink::default());

        let record = record_with_documents(id, &["license"]);
        let request = RejectKycRequest::new(None, true);
        assert_ok!(service(&store, &sink).reject_kyc(&record, &request).await);

        assert_eq!(*store.update_calls.lock(), 3);
        assert_eq!(store.user(id).kyc_status.as_deref(), Some("not-submitted"));
    }

    #[tokio::test]
    async fn test_reject_reports_partial_failure_when_retries_run_out() {
        let id = Uuid::new_v4();
        let store = FakeStore::with_driver(id, 1);
        *store.failing_updates.lock() = 10;
        let sink = Arc::new(RecordingSink::default());

        let record = record_with_documents(id, &["license"]);
        let request = RejectKycRequest::new(None, true);
        let err = assert_err!(service(&store, &sink).reject_kyc(&record, &request).await);

        assert!(matches!(err, AdminError::PartialFailure(_)));
        assert_eq!(*store.update_calls.lock(), 1 + config().status_write_retries);
        assert_eq!(store.documents(id), 0);
        assert_eq!(sink.last().kind, NotificationKind::Error);
    }

    #[tokio::test]
    async fn test_reject_without_purge_is_not_retried() {
        let id = Uuid::new_v4();
        let store = FakeStore::with_driver(id, 1);
        *store.failing_updates.lock() = 1;
        let sink = Arc::new(RecordingSink::default());

        let record = record_with_documents(id, &["license"]);
        let request = RejectKycRequest::new(Some("Expired"), false);
        let err = assert_err!(service(&store, &sink).reject_kyc(&record, &request).await);

        assert!(matches!(err, AdminError::CollaboratorFailure(_)));
        assert_eq!(*store.update_calls.lock(), 1);
        assert_eq!(store.documents(id), 1);
    }

    #[tokio::test]
    async fn test_reject_overlong_reason_touches_nothing() {
        let id = Uuid::new_v4();
        let store = FakeStore::with_driver(id, 1);
        let sink = Arc::new(RecordingSink::default());

        let record = record_with_documents(id, &["license"]);
        let request = RejectKycRequest::new(Some(&"x".repeat(501)), true);
        let err = assert_err!(service(&store, &sink).reject_kyc(&record, &request).await);

        assert!(matches!(err, AdminError::ValidationError(_)));
        assert_eq!(store.documents(id), 1);
        assert_eq!(*store.update_calls.lock(), 0);
    }

    #[tokio::test]
    async fn test_activation_toggles_and_messages() {
        let id = Uuid::new_v4();
        let store = FakeStore::with_driver(id, 0);
        let sink = Arc::new(RecordingSink::default());
        let service = service(&store, &sink);
        let record = DriverVerificationRecord::new(id);

        let updated = assert_ok!(service.set_vehicle_active(&record, false).await);
        assert!(!updated.is_vehicle_active());
        assert_eq!(store.user(id).vehicle_active, Some(false));
        assert_eq!(sink.last(), Notification::success("Vehicle deactivated successfully!"));

        let updated = assert_ok!(service.set_driver_active(&updated, false).await);
        assert!(!updated.is_driver_active());
        assert_eq!(sink.last(), Notification::success("Driver deactivated successfully!"));

        assert_ok!(service.set_driver_active(&updated, true).await);
        assert_eq!(store.user(id).is_active, Some(true));
        assert_eq!(store.user(id).vehicle_active, Some(false));
        assert_eq!(sink.last(), Notification::success("Driver activated successfully!"));
    }

    #[tokio::test]
    async fn test_activation_failure_notifies_error() {
        let id = Uuid::new_v4();
        let store = FakeStore::with_driver(id, 0);
        *store.failing_updates.lock() = 1;
        let sink = Arc::new(RecordingSink::default());

        let record = DriverVerificationRecord::new(id);
        let err = assert_err!(service(&store, &sink).set_vehicle_active(&record, true).await);

        assert!(matches!(err, AdminError::CollaboratorFailure(_)));
        assert_eq!(store.user(id).vehicle_active, None);
        assert_eq!(sink.last(), Notification::error("Error updating vehicle status. Please try again."));
    }

    #[tokio::test]
    #[ignore = "requires DATABASE_URL"]
    #[serial_test::serial]
    async fn test_reject_with_resubmission_against_postgres() -> Result<(), Box<dyn Error + Send + Sync>> {
        use crate::repository::user::kyc_document_repository::test_utils::create_test_document;
        use crate::repository::user::user_repository::test_utils::create_test_user;
        use crate::test_helper::setup_test_context;
        use ride_admin_db::repository::create_batch::CreateBatch;
        use ride_admin_db::repository::load::Load;

        let ctx = setup_test_context().await?;
        let repos = ctx.user_repos();

        let user = create_test_user(Some("driver"), "Kofi");
        repos.user_repository.create_batch(vec![user.clone()]).await?;
        repos
            .kyc_document_repository
            .create_batch(vec![
                create_test_document(user.id, "license"),
                create_test_document(user.id, "id_front"),
            ])
            .await?;

        let sink = Arc::new(RecordingSink::default());
        let service = KycReviewServiceImpl::new(
            repos.user_repository.clone(),
            repos.kyc_document_repository.clone(),
            sink.clone(),
            config(),
        );

        let driver = repos.driver_repository.load(user.id).await?.ok_or("driver missing")?;
        assert_eq!(driver.kyc_status(), KycStatus::Submitted);

        let request = RejectKycRequest::new(Some("Photo unreadable"), true);
        service.reject_kyc(&driver.to_record(), &request).await?;

        let reloaded = repos.driver_repository.load(user.id).await?.ok_or("driver missing")?;
        assert_eq!(reloaded.document_count(), 0);
        assert_eq!(reloaded.kyc_status(), KycStatus::NotSubmitted);
        assert_eq!(reloaded.user.kyc_rejection_reason.as_deref(), Some("Photo unreadable"));
        assert!(!sink.last().is_error());

        Ok(())
    }
}
