pub mod kyc_review_service;
pub mod notification_sink;

pub use kyc_review_service::*;
pub use notification_sink::*;
