//! SeaORM entities

pub mod service;
