pub mod booking_repository;
pub mod factory;

pub use booking_repository::BookingRepositoryImpl;
pub use factory::{BookingRepoFactory, BookingRepositories};
