//! Typed client for the utsav marketplace REST API.

pub mod client;
pub mod error;
pub mod ratings;

pub use client::MarketClient;
pub use error::ApiError;
pub use ratings::fetch_ratings_map;
