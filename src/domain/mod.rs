//! Domain layer: aggregates, value objects and domain services.

pub mod catalog;
pub mod enrollment;
pub mod foundation;
pub mod payment;
