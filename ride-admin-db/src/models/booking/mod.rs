#[allow(clippy::module_inception)]
pub mod booking;

pub use booking::*;
