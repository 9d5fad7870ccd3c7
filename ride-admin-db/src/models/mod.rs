pub mod booking;
pub mod identifiable;
pub mod user;

// Re-exports
pub use booking::*;
pub use identifiable::*;
pub use user::*;
