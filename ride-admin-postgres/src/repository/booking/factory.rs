use std::sync::Arc;
use crate::executor::Executor;
use super::BookingRepositoryImpl;

/// Factory for creating booking module repositories
#[derive(Debug, Default, Clone, Copy)]
pub struct BookingRepoFactory;

impl BookingRepoFactory {
    pub fn new() -> Arc<Self> {
        Arc::new(Self)
    }

    /// Build a BookingRepository with the given executor
    pub fn build_booking_repo(&self, executor: &Executor) -> Arc<BookingRepositoryImpl> {
        Arc::new(BookingRepositoryImpl::new(executor.clone()))
    }

    pub fn build_all_repos(&self, executor: &Executor) -> BookingRepositories {
        BookingRepositories {
            booking_repository: self.build_booking_repo(executor),
        }
    }
}

/// Container for all booking module repositories
#[derive(Clone)]
pub struct BookingRepositories {
    pub booking_repository: Arc<BookingRepositoryImpl>,
}
