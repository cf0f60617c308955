//! Budget-window filtering over unit prices and textual price ranges.

use crate::price::parse_price_range;

/// Tests whether an item's price signal falls inside a budget window.
///
/// - A unit `price` matches iff `min_budget <= price <= max_budget`.
/// - A textual `price_range` matches iff the parsed range overlaps the
///   window. An unparsable range matches unconditionally
///   (inclusion-by-default: a vendor who writes "Contact for Quote" is
///   never filtered out by budget).
/// - With neither signal present the item matches unconditionally.
///
/// When both signals are present the unit price wins.
#[must_use]
pub fn is_within_budget(
    price: Option<f64>,
    price_range: Option<&str>,
    min_budget: f64,
    max_budget: f64,
) -> bool {
    if let Some(p) = price {
        return p >= min_budget && p <= max_budget;
    }

    if let Some(raw) = price_range {
        return match parse_price_range(raw) {
            Some(range) => range.max >= min_budget && range.min <= max_budget,
            None => true,
        };
    }

    true
}

/// A predefined budget bucket offered as a quick filter.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum BudgetBand {
    Under10K,
    From10KTo25K,
    From25KTo50K,
    From50KTo1L,
    Above1L,
}

impl BudgetBand {
    /// The `[min, max]` window this band covers, in rupees.
    #[must_use]
    pub fn bounds(self) -> (f64, f64) {
        match self {
            BudgetBand::Under10K => (0.0, 10_000.0),
            BudgetBand::From10KTo25K => (10_000.0, 25_000.0),
            BudgetBand::From25KTo50K => (25_000.0, 50_000.0),
            BudgetBand::From50KTo1L => (50_000.0, 100_000.0),
            BudgetBand::Above1L => (100_000.0, f64::INFINITY),
        }
    }
}

impl std::fmt::Display for BudgetBand {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            BudgetBand::Under10K => write!(f, "Under ₹10,000"),
            BudgetBand::From10KTo25K => write!(f, "₹10,000 – ₹25,000"),
            BudgetBand::From25KTo50K => write!(f, "₹25,000 – ₹50,000"),
            BudgetBand::From50KTo1L => write!(f, "₹50,000 – ₹1,00,000"),
            BudgetBand::Above1L => write!(f, "Above ₹1,00,000"),
        }
    }
}

/// The budget selection active in the explore view.
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum BudgetFilter {
    All,
    Band(BudgetBand),
    Custom { min: f64, max: f64 },
}

impl BudgetFilter {
    /// Resolves the selection to a concrete `[min, max]` window.
    /// `All` is the unbounded window `[0, +inf]`.
    #[must_use]
    pub fn window(&self) -> (f64, f64) {
        match self {
            BudgetFilter::All => (0.0, f64::INFINITY),
            BudgetFilter::Band(band) => band.bounds(),
            BudgetFilter::Custom { min, max } => (*min, *max),
        }
    }
}
