//! Service catalog aggregate
//!
//! Contains the Service entity, its create/patch input shapes, and the
//! repository interface.

pub mod model;
pub mod repository;

pub use model::{NewService, Service, ServicePatch};
pub use repository::ServiceRepository;
