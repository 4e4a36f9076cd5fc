//! SeaORM repository implementations

pub mod service_repository;

pub use service_repository::SeaOrmServiceRepository;
