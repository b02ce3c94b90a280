//! Business logic services

pub mod crops;
pub mod irrigation;
pub mod locations;
pub mod weather;
