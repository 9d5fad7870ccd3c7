pub mod repo_impl;
pub mod load;
pub mod load_all;

pub use repo_impl::DriverRepositoryImpl;
