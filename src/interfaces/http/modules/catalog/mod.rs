//! Public service catalog (read-only)

pub mod dto;
pub mod handlers;

pub use dto::*;
pub use handlers::*;
