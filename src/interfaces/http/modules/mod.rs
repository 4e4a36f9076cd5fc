//! Request handlers per resource

use std::sync::Arc;

use crate::domain::ServiceRepository;

pub mod admin_services;
pub mod appointments;
pub mod availability;
pub mod catalog;
pub mod health;

/// Shared state for catalog handlers (public and admin)
#[derive(Clone)]
pub struct AppState {
    pub services: Arc<dyn ServiceRepository>,
}
