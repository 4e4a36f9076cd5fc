//! # Pet Appointments Service
//!
//! Booking backend for a veterinary/pet-care practice: a public catalog of
//! bookable services, admin-gated catalog management behind a shared key,
//! and stubbed booking-intake/availability endpoints.
//!
//! ## Architecture
//!
//! - **domain**: Core business entities, types and traits
//! - **infrastructure**: External concerns (database, migrations)
//! - **interfaces**: HTTP REST API with Swagger documentation
//! - **config**: Startup configuration

pub mod config;
pub mod domain;
pub mod infrastructure;
pub mod interfaces;

pub use config::{default_config_path, AppConfig};

// Re-export database types for easy access
pub use infrastructure::{init_database, DatabaseConfig, SeaOrmServiceRepository};

// Re-export API router
pub use interfaces::http::create_api_router;
