pub mod client;
pub mod readings;

pub use client::{ApiClient, ApiError};
