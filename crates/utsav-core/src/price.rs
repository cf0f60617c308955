//! Price-range parsing and rupee formatting.
//!
//! Vendor themes are priced as free-text ranges (`"₹5,000 - ₹25,000"`,
//! `"5000 to 25000"`, or a bare number). These helpers use manual string
//! scanning rather than `regex` to stay dependency-light. Failure is a
//! sentinel (`None`), never an error: an unparsable price means "no
//! constraint" downstream.

/// A numeric price window parsed from free text.
///
/// Invariant: `min <= max`. [`parse_price_range`] rejects inverted input
/// rather than constructing a violating value.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct PriceRange {
    pub min: f64,
    pub max: f64,
}

/// Attempts to parse a price range from free text.
///
/// Matching rules, tried in order after stripping currency markers
/// (`₹`, `Rs.`, `Rs`), commas, and surrounding whitespace:
/// 1. `"<num>-<num>"` or `"<num> to <num>"` — both bounds must parse and
///    satisfy `min <= max`.
/// 2. A single bare number → `{min: p, max: p}`.
///
/// Returns `None` for anything else (`"Contact for Quote"`, inverted
/// ranges, empty input).
#[must_use]
pub fn parse_price_range(raw: &str) -> Option<PriceRange> {
    let cleaned = strip_currency_markers(raw);

    if let Some((low, high)) = split_range(&cleaned) {
        if let (Some(min), Some(max)) = (parse_amount(low), parse_amount(high)) {
            if min <= max {
                return Some(PriceRange { min, max });
            }
            return None;
        }
    }

    parse_amount(&cleaned).map(|p| PriceRange { min: p, max: p })
}

/// Lower bound of a textual range, or `0.0` when unparsable.
///
/// The permissive default means an unparsable price never excludes an
/// item from a budget window.
#[must_use]
pub fn min_price(raw: &str) -> f64 {
    parse_price_range(raw).map_or(0.0, |r| r.min)
}

/// Upper bound of a textual range, or `+inf` when unparsable.
#[must_use]
pub fn max_price(raw: &str) -> f64 {
    parse_price_range(raw).map_or(f64::INFINITY, |r| r.max)
}

/// Midpoint of a textual range, used as a price sort key.
///
/// Unparsable input yields `0.0`, so "Contact for Quote" items sort as
/// cheapest under an ascending price sort.
#[must_use]
pub fn average_price(raw: &str) -> f64 {
    parse_price_range(raw).map_or(0.0, |r| (r.min + r.max) / 2.0)
}

/// Renders an amount as `"₹"` plus Indian-locale digit grouping.
///
/// The last three digits form one group, every preceding pair another:
/// `format_inr(100_000.0)` → `"₹1,00,000"`. The amount is rounded to the
/// nearest rupee for display.
#[must_use]
pub fn format_inr(amount: f64) -> String {
    let negative = amount < 0.0;
    #[allow(clippy::cast_possible_truncation, clippy::cast_sign_loss)]
    let units = amount.abs().round() as u64;
    let digits = units.to_string();

    let grouped = if digits.len() <= 3 {
        digits
    } else {
        let (head, tail) = digits.split_at(digits.len() - 3);
        let mut pairs: Vec<String> = Vec::new();
        let head_bytes = head.as_bytes();
        let mut end = head_bytes.len();
        while end > 0 {
            let start = end.saturating_sub(2);
            pairs.push(head[start..end].to_string());
            end = start;
        }
        pairs.reverse();
        format!("{},{tail}", pairs.join(","))
    };

    if negative {
        format!("-₹{grouped}")
    } else {
        format!("₹{grouped}")
    }
}

/// Removes currency markers, commas, and normalises case for parsing.
fn strip_currency_markers(raw: &str) -> String {
    raw.to_lowercase()
        .replace('₹', " ")
        .replace("rs.", " ")
        .replace("rs", " ")
        .replace(',', "")
}

/// Splits a cleaned string on `"-"` or `"to"` into two candidate bounds.
fn split_range(cleaned: &str) -> Option<(&str, &str)> {
    if let Some(pair) = cleaned.split_once('-') {
        return Some(pair);
    }
    cleaned.split_once("to")
}

/// Parses a single non-negative amount, tolerating surrounding whitespace.
fn parse_amount(s: &str) -> Option<f64> {
    let trimmed = s.trim();
    if trimmed.is_empty() {
        return None;
    }
    match trimmed.parse::<f64>() {
        Ok(v) if v.is_finite() && v >= 0.0 => Some(v),
        _ => None,
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    // -----------------------------------------------------------------------
    // parse_price_range
    // -----------------------------------------------------------------------

    #[test]
    fn parses_rupee_range_with_commas() {
        assert_eq!(
            parse_price_range("₹5,000 - ₹25,000"),
            Some(PriceRange {
                min: 5000.0,
                max: 25000.0
            })
        );
    }

    #[test]
    fn parses_plain_dash_range() {
        assert_eq!(
            parse_price_range("5000-25000"),
            Some(PriceRange {
                min: 5000.0,
                max: 25000.0
            })
        );
    }

    #[test]
    fn parses_to_separated_range() {
        assert_eq!(
            parse_price_range("5000 to 25000"),
            Some(PriceRange {
                min: 5000.0,
                max: 25000.0
            })
        );
    }

    #[test]
    fn parses_rs_prefixed_range() {
        assert_eq!(
            parse_price_range("Rs. 10,000 - Rs. 50,000"),
            Some(PriceRange {
                min: 10000.0,
                max: 50000.0
            })
        );
    }

    #[test]
    fn parses_bare_number_as_degenerate_range() {
        assert_eq!(
            parse_price_range("5000"),
            Some(PriceRange {
                min: 5000.0,
                max: 5000.0
            })
        );
    }

    #[test]
    fn parses_bare_number_with_currency_symbol() {
        assert_eq!(
            parse_price_range("₹7,500"),
            Some(PriceRange {
                min: 7500.0,
                max: 7500.0
            })
        );
    }

    #[test]
    fn rejects_free_text() {
        assert_eq!(parse_price_range("Contact for Quote"), None);
    }

    #[test]
    fn rejects_empty_input() {
        assert_eq!(parse_price_range(""), None);
        assert_eq!(parse_price_range("   "), None);
    }

    #[test]
    fn rejects_inverted_range() {
        assert_eq!(parse_price_range("25000-5000"), None);
    }

    #[test]
    fn rejects_half_parsed_range() {
        assert_eq!(parse_price_range("5000 - lots"), None);
    }

    #[test]
    fn equal_bounds_are_accepted() {
        assert_eq!(
            parse_price_range("5000-5000"),
            Some(PriceRange {
                min: 5000.0,
                max: 5000.0
            })
        );
    }

    // -----------------------------------------------------------------------
    // derived accessors
    // -----------------------------------------------------------------------

    #[test]
    fn min_price_defaults_to_zero() {
        assert_eq!(min_price("Contact for Quote"), 0.0);
        assert_eq!(min_price("5000-25000"), 5000.0);
    }

    #[test]
    fn max_price_defaults_to_infinity() {
        assert_eq!(max_price("Contact for Quote"), f64::INFINITY);
        assert_eq!(max_price("5000-25000"), 25000.0);
    }

    #[test]
    fn average_price_is_midpoint() {
        assert_eq!(average_price("5000-25000"), 15000.0);
    }

    #[test]
    fn average_price_defaults_to_zero() {
        assert_eq!(average_price("Contact for Quote"), 0.0);
    }

    // -----------------------------------------------------------------------
    // format_inr
    // -----------------------------------------------------------------------

    #[test]
    fn formats_small_amount_without_separator() {
        assert_eq!(format_inr(500.0), "₹500");
    }

    #[test]
    fn formats_thousands() {
        assert_eq!(format_inr(5000.0), "₹5,000");
    }

    #[test]
    fn formats_lakh_with_indian_grouping() {
        assert_eq!(format_inr(100_000.0), "₹1,00,000");
    }

    #[test]
    fn formats_crore_with_indian_grouping() {
        assert_eq!(format_inr(12_345_678.0), "₹1,23,45,678");
    }

    #[test]
    fn rounds_fractional_rupees() {
        assert_eq!(format_inr(999.6), "₹1,000");
    }
}
