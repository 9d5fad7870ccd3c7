pub mod repo_impl;
pub mod create_batch;
pub mod load_all;

#[cfg(test)]
pub mod test_utils;

pub use repo_impl::BookingRepositoryImpl;
