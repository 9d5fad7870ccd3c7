use ride_admin_api::config::ReviewConfig;
use ride_admin_api::service::NotificationSink;
use sqlx::PgPool;
use std::sync::Arc;

use crate::executor::Executor;
use crate::repository::booking::{BookingRepoFactory, BookingRepositories};
use crate::repository::user::{
    KycDocumentRepositoryImpl, UserRepoFactory, UserRepositories, UserRepositoryImpl,
};
use crate::service::KycReviewServiceImpl;

pub type PostgresKycReviewService<N> =
    KycReviewServiceImpl<UserRepositoryImpl, KycDocumentRepositoryImpl, N>;

pub struct PostgresRepositories {
    pool: Arc<PgPool>,
    user_factory: Arc<UserRepoFactory>,
    booking_factory: Arc<BookingRepoFactory>,
}

impl PostgresRepositories {
    pub fn new(pool: Arc<PgPool>) -> Self {
        Self {
            pool,
            user_factory: UserRepoFactory::new(),
            booking_factory: BookingRepoFactory::new(),
        }
    }

    /// Executor that commits each statement on its own
    pub fn autocommit(&self) -> Executor {
        Executor::pool(self.pool.clone())
    }

    /// Executor over a new transaction; commit it with [`Executor::commit`]
    pub async fn begin(&self) -> Result<Executor, sqlx::Error> {
        Executor::begin(&self.pool).await
    }

    pub fn create_user_repositories(&self, executor: &Executor) -> UserRepositories {
        self.user_factory.build_all_repos(executor)
    }

    pub fn create_booking_repositories(&self, executor: &Executor) -> BookingRepositories {
        self.booking_factory.build_all_repos(executor)
    }

    /// Create all repositories sharing a single executor
    pub fn create_all_repositories(&self, executor: &Executor) -> (UserRepositories, BookingRepositories) {
        (
            self.create_user_repositories(executor),
            self.create_booking_repositories(executor),
        )
    }

    /// Review service writing through the given executor
    pub fn create_review_service<N: NotificationSink>(
        &self,
        executor: &Executor,
        notifications: Arc<N>,
        config: ReviewConfig,
    ) -> PostgresKycReviewService<N> {
        KycReviewServiceImpl::new(
            self.user_factory.build_user_repo(executor),
            self.user_factory.build_kyc_document_repo(executor),
            notifications,
            config,
        )
    }
}
