//! Retrograde and combustion classification.
//!
//! Simple per-planet flags derived from ephemeris speed and distance
//! to the Sun. Combustion thresholds vary by planet and retrograde
//! status per BPHS; Mercury and Venus tighten when retrograde.

use nadi_base::{Graha, angular_distance};

/// Retrograde check from ecliptic speed.
///
/// The mean nodes travel backwards permanently, so Rahu and Ketu are
/// always flagged regardless of the reported speed.
pub fn is_retrograde(graha: Graha, speed: f64) -> bool {
    graha.is_node() || speed < 0.0
}

/// BPHS combustion threshold (degrees from Sun) for a graha.
///
/// `None` for Sun and the nodes (not applicable).
pub fn combustion_threshold(graha: Graha, retrograde: bool) -> Option<f64> {
    match graha {
        Graha::Surya | Graha::Rahu | Graha::Ketu => None,
        Graha::Chandra => Some(12.0),
        Graha::Mangal => Some(17.0),
        Graha::Buddh => {
            if retrograde {
                Some(12.0)
            } else {
                Some(14.0)
            }
        }
        Graha::Guru => Some(11.0),
        Graha::Shukra => {
            if retrograde {
                Some(8.0)
            } else {
                Some(10.0)
            }
        }
        Graha::Shani => Some(15.0),
    }
}

/// Combustion check against the Sun's longitude.
///
/// A graha exactly at the threshold distance is not combust (strict
/// less-than). Always false for Sun, Rahu, and Ketu.
pub fn is_combust(graha: Graha, graha_lon: f64, sun_lon: f64, retrograde: bool) -> bool {
    match combustion_threshold(graha, retrograde) {
        Some(threshold) => angular_distance(graha_lon, sun_lon) < threshold,
        None => false,
    }
}
