pub mod driver_repository;
pub mod factory;
pub mod kyc_document_repository;
pub mod user_repository;
pub mod vehicle_repository;

pub use driver_repository::DriverRepositoryImpl;
pub use factory::{UserRepoFactory, UserRepositories};
pub use kyc_document_repository::KycDocumentRepositoryImpl;
pub use user_repository::UserRepositoryImpl;
pub use vehicle_repository::VehicleRepositoryImpl;
