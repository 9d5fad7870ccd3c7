pub mod repo_impl;
pub mod create_batch;
pub mod load;
pub mod load_all;
pub mod update_fields;

#[cfg(test)]
pub mod test_utils;

pub use repo_impl::UserRepositoryImpl;
