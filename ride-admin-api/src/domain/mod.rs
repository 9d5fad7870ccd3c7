pub mod activity;
pub mod driver;
pub mod kyc_document;
pub mod kyc_status;
pub mod notification;
pub mod request;
pub mod verification;

pub use activity::*;
pub use driver::*;
pub use kyc_document::*;
pub use kyc_status::*;
pub use notification::*;
pub use request::*;
pub use verification::*;
