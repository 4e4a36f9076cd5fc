//! Shared HTTP plumbing: wire shapes, error shaping, JSON extraction

pub mod api_json;
pub mod dto;
pub mod error;

pub use api_json::ApiJson;
pub use dto::{ErrorBody, OkResponse};
pub use error::ApiError;
