//! Marketplace domain types.
//!
//! All types model the JSON shapes served by the marketplace REST API.
//! Entities are read-only snapshots: the client fetches them wholesale per
//! view and never mutates them locally. Optional fields the API omits or
//! nulls are `#[serde(default)]`.

use chrono::{DateTime, NaiveDate, Utc};
use serde::{Deserialize, Serialize};

use crate::geo::Coordinate;

// ---------------------------------------------------------------------------
// Businesses
// ---------------------------------------------------------------------------

/// A vendor owning themes, inventory, plates, and dishes.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Business {
    pub id: i64,
    pub name: String,
    /// Free-text vendor category ("Tent House", "Caterers", ...).
    #[serde(default)]
    pub category: String,
    #[serde(default)]
    pub address: Option<String>,
    #[serde(default)]
    pub phone: Option<String>,
    #[serde(default)]
    pub latitude: Option<f64>,
    #[serde(default)]
    pub longitude: Option<f64>,
}

impl Business {
    /// The business location, present only when both coordinates are set.
    #[must_use]
    pub fn coordinate(&self) -> Option<Coordinate> {
        match (self.latitude, self.longitude) {
            (Some(lat), Some(lon)) => Some(Coordinate { lat, lon }),
            _ => None,
        }
    }
}

// ---------------------------------------------------------------------------
// Catalog items
// ---------------------------------------------------------------------------

/// A bundled service offering priced as a free-text range.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Theme {
    pub id: i64,
    pub business_id: i64,
    pub name: String,
    #[serde(default)]
    pub description: Option<String>,
    /// Free text such as `"₹5,000 - ₹25,000"` or `"Contact for Quote"`.
    #[serde(default)]
    pub price_range: Option<String>,
    #[serde(default)]
    pub image_url: Option<String>,
}

/// A single rentable or sellable item with a unit price and stock count.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Inventory {
    pub id: i64,
    pub business_id: i64,
    pub name: String,
    pub price: f64,
    #[serde(default)]
    pub quantity: i64,
    #[serde(default)]
    pub description: Option<String>,
    #[serde(default)]
    pub image_url: Option<String>,
}

/// A catering plate offering with a unit price.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Plate {
    pub id: i64,
    pub business_id: i64,
    pub name: String,
    pub price: f64,
    #[serde(default)]
    pub description: Option<String>,
    #[serde(default)]
    pub dishes: Vec<Dish>,
    #[serde(default)]
    pub image_url: Option<String>,
}

/// A dish served on a plate.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Dish {
    pub id: i64,
    pub name: String,
    /// "veg" / "non-veg" per the API; free text, not validated client-side.
    #[serde(default)]
    pub dish_type: Option<String>,
}

/// Which catalog collection an item belongs to. Used to build API paths
/// and to key rating lookups.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum ItemKind {
    Theme,
    Inventory,
    Plate,
}

impl ItemKind {
    /// The API path segment for this collection.
    #[must_use]
    pub fn path_segment(self) -> &'static str {
        match self {
            ItemKind::Theme => "themes",
            ItemKind::Inventory => "inventory",
            ItemKind::Plate => "plates",
        }
    }
}

impl std::fmt::Display for ItemKind {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            ItemKind::Theme => write!(f, "theme"),
            ItemKind::Inventory => write!(f, "inventory"),
            ItemKind::Plate => write!(f, "plate"),
        }
    }
}

// ---------------------------------------------------------------------------
// Ratings
// ---------------------------------------------------------------------------

/// Aggregate rating for one catalog item.
#[derive(Debug, Clone, Copy, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct RatingSummary {
    pub average: f64,
    pub count: i64,
}

// ---------------------------------------------------------------------------
// Orders
// ---------------------------------------------------------------------------

/// An order placed by a client against a vendor's catalog item.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Order {
    pub id: i64,
    pub business_id: i64,
    pub item_id: i64,
    /// Collection the ordered item belongs to ("theme" / "inventory" / "plate").
    pub item_type: String,
    pub status: String,
    #[serde(default)]
    pub total_amount: Option<f64>,
    pub event_date: NaiveDate,
    pub created_at: DateTime<Utc>,
}

/// Payload for placing a new order.
#[derive(Debug, Clone, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct NewOrder {
    pub business_id: i64,
    pub item_id: i64,
    pub item_type: String,
    pub event_date: NaiveDate,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub notes: Option<String>,
}

// ---------------------------------------------------------------------------
// Notifications and availability
// ---------------------------------------------------------------------------

/// A user-facing notification.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Notification {
    pub id: i64,
    pub message: String,
    #[serde(default)]
    pub read: bool,
    pub created_at: DateTime<Utc>,
}

/// A vendor's availability on a given date.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Availability {
    pub business_id: i64,
    pub date: NaiveDate,
    pub available: bool,
    #[serde(default)]
    pub note: Option<String>,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn coordinate_requires_both_components() {
        let mut business: Business = serde_json::from_value(serde_json::json!({
            "id": 1,
            "name": "Sharma Tent House",
            "category": "Tent House",
            "latitude": 19.07,
            "longitude": 72.87
        }))
        .unwrap();
        assert!(business.coordinate().is_some());

        business.longitude = None;
        assert!(business.coordinate().is_none());

        business.latitude = None;
        assert!(business.coordinate().is_none());
    }

    #[test]
    fn theme_deserializes_with_missing_optionals() {
        let theme: Theme = serde_json::from_value(serde_json::json!({
            "id": 7,
            "businessId": 1,
            "name": "Royal Wedding"
        }))
        .unwrap();
        assert_eq!(theme.business_id, 1);
        assert!(theme.price_range.is_none());
    }

    #[test]
    fn item_kind_path_segments() {
        assert_eq!(ItemKind::Theme.path_segment(), "themes");
        assert_eq!(ItemKind::Inventory.path_segment(), "inventory");
        assert_eq!(ItemKind::Plate.path_segment(), "plates");
    }
}
