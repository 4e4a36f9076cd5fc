//! Server health check

pub mod handlers;

pub use handlers::*;
