//! Great-circle distance and location filtering.

use serde::{Deserialize, Serialize};

/// Mean Earth radius in kilometres.
const EARTH_RADIUS_KM: f64 = 6371.0;

/// Radius applied by the "nearby" quick filter.
pub const NEARBY_RADIUS_KM: f64 = 5.0;

/// A point in decimal degrees.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct Coordinate {
    pub lat: f64,
    pub lon: f64,
}

/// Haversine distance between two coordinates, in kilometres.
#[must_use]
pub fn distance_km(a: Coordinate, b: Coordinate) -> f64 {
    let d_lat = (b.lat - a.lat).to_radians();
    let d_lon = (b.lon - a.lon).to_radians();
    let lat_a = a.lat.to_radians();
    let lat_b = b.lat.to_radians();

    let h = (d_lat / 2.0).sin().powi(2) + lat_a.cos() * lat_b.cos() * (d_lon / 2.0).sin().powi(2);
    2.0 * EARTH_RADIUS_KM * h.sqrt().asin()
}

/// Location mode selected in the explore view.
///
/// `All` applies no distance cut; businesses with unknown coordinates stay
/// in the result set (distance sorts push them last). Under `Nearby` or
/// `Custom`, a business without coordinates is excluded entirely rather
/// than sorted last.
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum LocationFilter {
    All,
    Nearby,
    Custom { radius_km: f64 },
}

impl LocationFilter {
    /// The active radius cut in kilometres, or `None` for `All`.
    #[must_use]
    pub fn radius_km(&self) -> Option<f64> {
        match self {
            LocationFilter::All => None,
            LocationFilter::Nearby => Some(NEARBY_RADIUS_KM),
            LocationFilter::Custom { radius_km } => Some(*radius_km),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    const MUMBAI: Coordinate = Coordinate {
        lat: 19.0760,
        lon: 72.8777,
    };
    const PUNE: Coordinate = Coordinate {
        lat: 18.5204,
        lon: 73.8567,
    };

    #[test]
    fn distance_to_self_is_zero() {
        assert!(distance_km(MUMBAI, MUMBAI).abs() < 1e-9);
    }

    #[test]
    fn distance_is_symmetric() {
        let there = distance_km(MUMBAI, PUNE);
        let back = distance_km(PUNE, MUMBAI);
        assert!((there - back).abs() < 1e-9);
    }

    #[test]
    fn mumbai_to_pune_is_roughly_120_km() {
        let d = distance_km(MUMBAI, PUNE);
        assert!(
            (115.0..=125.0).contains(&d),
            "expected ~120 km, got {d:.1}"
        );
    }

    #[test]
    fn small_offsets_give_small_distances() {
        let near = Coordinate {
            lat: MUMBAI.lat + 0.01,
            lon: MUMBAI.lon,
        };
        let d = distance_km(MUMBAI, near);
        assert!((1.0..=1.3).contains(&d), "expected ~1.1 km, got {d:.2}");
    }

    #[test]
    fn radius_for_all_is_none() {
        assert_eq!(LocationFilter::All.radius_km(), None);
    }

    #[test]
    fn radius_for_nearby_is_five_km() {
        assert_eq!(LocationFilter::Nearby.radius_km(), Some(5.0));
    }

    #[test]
    fn radius_for_custom_passes_through() {
        let f = LocationFilter::Custom { radius_km: 12.5 };
        assert_eq!(f.radius_km(), Some(12.5));
    }
}
