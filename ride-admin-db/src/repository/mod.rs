pub mod create_batch;
pub mod delete_by_owner;
pub mod load;
pub mod load_all;
pub mod pagination;
pub mod update_fields;

// Re-exports
pub use create_batch::*;
pub use delete_by_owner::*;
pub use load::*;
pub use load_all::*;
pub use pagination::*;
pub use update_fields::*;
