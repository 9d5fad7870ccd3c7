use ride_admin_db::models::user::{DriverModel, UserModel, ROLE_DRIVER};
use crate::executor::Executor;
use crate::repository::user::kyc_document_repository::KycDocumentRepositoryImpl;
use crate::repository::user::vehicle_repository::VehicleRepositoryImpl;
use std::error::Error;
use uuid::Uuid;

/// Read side of the driver list: driver users joined with their KYC
/// documents and vehicle.
pub struct DriverRepositoryImpl {
    pub executor: Executor,
    kyc_documents: KycDocumentRepositoryImpl,
    vehicles: VehicleRepositoryImpl,
}

impl DriverRepositoryImpl {
    pub fn new(executor: Executor) -> Self {
        Self {
            kyc_documents: KycDocumentRepositoryImpl::new(executor.clone()),
            vehicles: VehicleRepositoryImpl::new(executor.clone()),
            executor,
        }
    }

    pub(super) fn driver_role() -> &'static str {
        ROLE_DRIVER
    }

    /// Attach documents and vehicles to already loaded driver users, keeping their order
    pub(super) async fn assemble(
        &self,
        users: Vec<UserModel>,
    ) -> Result<Vec<DriverModel>, Box<dyn Error + Send + Sync>> {
        let ids: Vec<Uuid> = users.iter().map(|user| user.id).collect();
        let mut documents = self.kyc_documents.find_by_owner_ids(&ids).await?;
        let mut vehicles = self.vehicles.find_by_owner_ids(&ids).await?;

        Ok(users
            .into_iter()
            .map(|user| {
                let id = user.id;
                let mut driver = DriverModel::new(user);
                driver.kyc_documents = documents.remove(&id).unwrap_or_default();
                driver.vehicle = vehicles.remove(&id);
                driver
            })
            .collect())
    }
}
