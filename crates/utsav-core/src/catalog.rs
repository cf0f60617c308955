//! Composite catalog filter/sort pipeline.
//!
//! Each explore tab applies the same fixed sequence over wholesale-fetched
//! snapshots: business-category keyword filter, then location filter, then
//! budget filter, then sort. All stages are pure; the caller supplies the
//! businesses, items, and a ratings map and renders whatever comes back.

use std::collections::HashMap;

use crate::budget::{is_within_budget, BudgetFilter};
use crate::geo::{distance_km, Coordinate, LocationFilter};
use crate::price::average_price;
use crate::types::{Business, Inventory, Plate, Theme};

/// An explore tab. Each carries a keyword list matched against vendor
/// names and free-text categories.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Category {
    Themes,
    Inventory,
    Plates,
}

impl Category {
    /// Keywords identifying vendors relevant to this tab.
    #[must_use]
    pub fn keywords(self) -> &'static [&'static str] {
        match self {
            Category::Themes => &["tent", "theme", "event", "wedding", "party", "decoration"],
            Category::Inventory => &["rental", "furniture", "light", "sound", "tent", "event"],
            Category::Plates => &["cater", "food", "kitchen", "restaurant", "plate"],
        }
    }
}

/// Whether a vendor's name or free-text category mentions any of the
/// tab's keywords (case-insensitive substring match).
#[must_use]
pub fn business_matches_category(business: &Business, category: Category) -> bool {
    let name = business.name.to_lowercase();
    let cat = business.category.to_lowercase();
    category
        .keywords()
        .iter()
        .any(|kw| name.contains(kw) || cat.contains(kw))
}

/// Sort order selected in the explore view. `Default` preserves fetch
/// order; all other orders break ties by fetch order (stable sort).
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SortOrder {
    Default,
    PriceLowToHigh,
    PriceHighToLow,
    RatingHighToLow,
    RatingLowToHigh,
}

/// The full set of active explore selections.
#[derive(Debug, Clone)]
pub struct CatalogQuery {
    pub category: Category,
    pub budget: BudgetFilter,
    pub location: LocationFilter,
    pub sort: SortOrder,
    /// The viewer's position. When absent, location filtering degrades to
    /// [`LocationFilter::All`].
    pub viewer: Option<Coordinate>,
}

/// A catalog item that can flow through the pipeline: it belongs to a
/// business and carries exactly one price signal (unit price or textual
/// range), possibly neither.
pub trait CatalogItem {
    fn id(&self) -> i64;
    fn business_id(&self) -> i64;
    fn unit_price(&self) -> Option<f64>;
    fn price_range(&self) -> Option<&str>;
}

impl CatalogItem for Theme {
    fn id(&self) -> i64 {
        self.id
    }
    fn business_id(&self) -> i64 {
        self.business_id
    }
    fn unit_price(&self) -> Option<f64> {
        None
    }
    fn price_range(&self) -> Option<&str> {
        self.price_range.as_deref()
    }
}

impl CatalogItem for Inventory {
    fn id(&self) -> i64 {
        self.id
    }
    fn business_id(&self) -> i64 {
        self.business_id
    }
    fn unit_price(&self) -> Option<f64> {
        Some(self.price)
    }
    fn price_range(&self) -> Option<&str> {
        None
    }
}

impl CatalogItem for Plate {
    fn id(&self) -> i64 {
        self.id
    }
    fn business_id(&self) -> i64 {
        self.business_id
    }
    fn unit_price(&self) -> Option<f64> {
        Some(self.price)
    }
    fn price_range(&self) -> Option<&str> {
        None
    }
}

/// Runs the filter/sort pipeline over one tab's items.
///
/// Stages, in fixed order:
/// 1. keep items whose owning business matches the tab's keywords
///    (items with an unknown `business_id` are dropped);
/// 2. under an active radius filter with a known viewer position, keep
///    items whose business lies within the radius — businesses without
///    coordinates are excluded entirely at this stage;
/// 3. keep items inside the budget window (see
///    [`is_within_budget`] for the inclusion-by-default rules);
/// 4. sort. Price keys use the unit price, or the midpoint of the textual
///    range; rating keys come from `ratings` with missing entries scoring
///    `0.0`. Sorting is stable, so ties keep fetch order.
#[must_use]
pub fn run_query<T>(
    items: &[T],
    businesses: &[Business],
    ratings: &HashMap<i64, f64>,
    query: &CatalogQuery,
) -> Vec<T>
where
    T: CatalogItem + Clone,
{
    let by_id: HashMap<i64, &Business> = businesses.iter().map(|b| (b.id, b)).collect();
    let (min_budget, max_budget) = query.budget.window();
    let radius = query.location.radius_km();

    let mut out: Vec<T> = items
        .iter()
        .filter(|item| {
            let Some(business) = by_id.get(&item.business_id()) else {
                return false;
            };
            if !business_matches_category(business, query.category) {
                return false;
            }
            if let (Some(radius), Some(viewer)) = (radius, query.viewer) {
                match business.coordinate() {
                    Some(c) => {
                        if distance_km(viewer, c) > radius {
                            return false;
                        }
                    }
                    None => return false,
                }
            }
            is_within_budget(
                item.unit_price(),
                item.price_range(),
                min_budget,
                max_budget,
            )
        })
        .cloned()
        .collect();

    match query.sort {
        SortOrder::Default => {}
        SortOrder::PriceLowToHigh => {
            out.sort_by(|a, b| price_sort_key(a).total_cmp(&price_sort_key(b)));
        }
        SortOrder::PriceHighToLow => {
            out.sort_by(|a, b| price_sort_key(b).total_cmp(&price_sort_key(a)));
        }
        SortOrder::RatingHighToLow => {
            out.sort_by(|a, b| rating_sort_key(b, ratings).total_cmp(&rating_sort_key(a, ratings)));
        }
        SortOrder::RatingLowToHigh => {
            out.sort_by(|a, b| rating_sort_key(a, ratings).total_cmp(&rating_sort_key(b, ratings)));
        }
    }

    out
}

/// Distance from the viewer to a business, when both positions are known.
#[must_use]
pub fn business_distance_km(business: &Business, viewer: Coordinate) -> Option<f64> {
    business.coordinate().map(|c| distance_km(viewer, c))
}

/// Sorts businesses by distance from the viewer, nearest first.
///
/// Businesses without coordinates sort last (`+inf` key) but are NOT
/// removed — exclusion only happens under an active radius filter inside
/// [`run_query`].
pub fn sort_businesses_by_distance(businesses: &mut [Business], viewer: Coordinate) {
    businesses.sort_by(|a, b| {
        let da = business_distance_km(a, viewer).unwrap_or(f64::INFINITY);
        let db = business_distance_km(b, viewer).unwrap_or(f64::INFINITY);
        da.total_cmp(&db)
    });
}

fn price_sort_key<T: CatalogItem>(item: &T) -> f64 {
    if let Some(p) = item.unit_price() {
        return p;
    }
    item.price_range().map_or(0.0, average_price)
}

fn rating_sort_key<T: CatalogItem>(item: &T, ratings: &HashMap<i64, f64>) -> f64 {
    ratings.get(&item.id()).copied().unwrap_or(0.0)
}
