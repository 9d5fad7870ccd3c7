pub mod driver;
pub mod kyc_document;
pub mod patch;
#[allow(clippy::module_inception)]
pub mod user;
pub mod vehicle;

pub use driver::*;
pub use kyc_document::*;
pub use patch::*;
pub use user::*;
pub use vehicle::*;
