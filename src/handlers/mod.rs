//! HTTP handlers

mod advisory;
mod crops;
mod system;

pub use advisory::weather_advisory;
pub use crops::list_crops;
pub use system::{health, home};
