pub mod kyc_review_service_impl;

pub use kyc_review_service_impl::*;
