//! Core business entities, types and traits

pub mod booking;
pub mod error;
pub mod service;

pub use booking::{stub_slots, AppointmentRequest, Species, TimeSlot};
pub use error::{DomainError, DomainResult};
pub use service::{NewService, Service, ServicePatch, ServiceRepository};
