use std::sync::Arc;
use crate::executor::Executor;
use super::{DriverRepositoryImpl, KycDocumentRepositoryImpl, UserRepositoryImpl, VehicleRepositoryImpl};

/// Factory for creating user module repositories
///
/// Every repository built from the same executor shares its pool or
/// transaction.
#[derive(Debug, Default, Clone, Copy)]
pub struct UserRepoFactory;

impl UserRepoFactory {
    pub fn new() -> Arc<Self> {
        Arc::new(Self)
    }

    /// Build a UserRepository with the given executor
    pub fn build_user_repo(&self, executor: &Executor) -> Arc<UserRepositoryImpl> {
        Arc::new(UserRepositoryImpl::new(executor.clone()))
    }

    /// Build a DriverRepository with the given executor
    pub fn build_driver_repo(&self, executor: &Executor) -> Arc<DriverRepositoryImpl> {
        Arc::new(DriverRepositoryImpl::new(executor.clone()))
    }

    /// Build a KycDocumentRepository with the given executor
    pub fn build_kyc_document_repo(&self, executor: &Executor) -> Arc<KycDocumentRepositoryImpl> {
        Arc::new(KycDocumentRepositoryImpl::new(executor.clone()))
    }

    /// Build a VehicleRepository with the given executor
    pub fn build_vehicle_repo(&self, executor: &Executor) -> Arc<VehicleRepositoryImpl> {
        Arc::new(VehicleRepositoryImpl::new(executor.clone()))
    }

    /// Build all user repositories with the given executor
    pub fn build_all_repos(&self, executor: &Executor) -> UserRepositories {
        UserRepositories {
            user_repository: self.build_user_repo(executor),
            driver_repository: self.build_driver_repo(executor),
            kyc_document_repository: self.build_kyc_document_repo(executor),
            vehicle_repository: self.build_vehicle_repo(executor),
        }
    }
}

/// Container for all user module repositories
#[derive(Clone)]
pub struct UserRepositories {
    pub user_repository: Arc<UserRepositoryImpl>,
    pub driver_repository: Arc<DriverRepositoryImpl>,
    pub kyc_document_repository: Arc<KycDocumentRepositoryImpl>,
    pub vehicle_repository: Arc<VehicleRepositoryImpl>,
}
