//! Pure domain logic for the utsav event-services marketplace client.
//!
//! No I/O lives here: prices, budgets, distances, and the catalog
//! filter/sort pipeline all operate on in-memory snapshots fetched by the
//! API crate.

use thiserror::Error;

pub mod app_config;
pub mod budget;
pub mod catalog;
pub mod config;
pub mod geo;
pub mod price;
pub mod types;

pub use app_config::{AppConfig, Environment};
pub use budget::{is_within_budget, BudgetBand, BudgetFilter};
pub use catalog::{
    business_distance_km, business_matches_category, run_query, sort_businesses_by_distance,
    CatalogItem, CatalogQuery, Category, SortOrder,
};
pub use config::{load_app_config, load_app_config_from_env};
pub use geo::{distance_km, Coordinate, LocationFilter, NEARBY_RADIUS_KM};
pub use price::{
    average_price, format_inr, max_price, min_price, parse_price_range, PriceRange,
};
pub use types::{
    Availability, Business, Dish, Inventory, ItemKind, NewOrder, Notification, Order, Plate,
    RatingSummary, Theme,
};

#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("missing required environment variable: {0}")]
    MissingEnvVar(String),
    #[error("invalid value for environment variable {var}: {reason}")]
    InvalidEnvVar { var: String, reason: String },
}
