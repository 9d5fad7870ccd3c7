pub mod booking_view;
pub mod directory;
pub mod driver_view;
pub mod series;
pub mod stats;
pub mod user_view;

pub use booking_view::*;
pub use directory::*;
pub use driver_view::*;
pub use series::*;
pub use stats::*;
pub use user_view::*;
