pub mod repo_impl;
pub mod create_batch;
pub mod delete_by_owner;
pub mod find_by_owner_ids;

#[cfg(test)]
pub mod test_utils;

pub use repo_impl::KycDocumentRepositoryImpl;
