//! Birth balance: the governing lord's unused period at birth.
//!
//! The Moon's fractional position within its nakshatra at birth
//! determines how much of the governing lord's period was "used"
//! before birth, and how much remains.

use serde::Serialize;

use crate::graha::Graha;
use crate::nakshatra::{NAKSHATRA_SPAN, nakshatra_from_longitude};
use crate::partition::{DASHA_LORDS, lord_years};
use crate::util::normalize_360;

use super::types::DAYS_PER_YEAR;

/// Birth balance for the Vimshottari cycle.
#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
pub struct BirthBalance {
    /// 0-based index of the Moon's nakshatra (0 = Ashwini).
    pub nakshatra_index: u8,
    /// Governing lord at birth.
    pub graha: Graha,
    /// Fraction of the nakshatra already traversed, [0, 1).
    pub elapsed_fraction: f64,
    /// Remaining days in the governing lord's period.
    pub balance_days: f64,
}

/// Compute the birth balance from the Moon's sidereal longitude.
pub fn birth_balance(moon_sidereal_lon: f64) -> BirthBalance {
    let lon = normalize_360(moon_sidereal_lon);
    let nak = nakshatra_from_longitude(lon);
    let graha = DASHA_LORDS[(nak.nakshatra_index % 9) as usize];
    let elapsed_fraction = nak.degrees_in_nakshatra / NAKSHATRA_SPAN;
    let balance_days = lord_years(graha) * DAYS_PER_YEAR * (1.0 - elapsed_fraction);
    BirthBalance {
        nakshatra_index: nak.nakshatra_index,
        graha,
        elapsed_fraction,
        balance_days,
    }
}

/// Decompose a balance in days into (years, months, days) using the
/// conventional 30-day month for the month/day split.
pub fn balance_ymd(balance_days: f64) -> (u32, u8, u8) {
    let years_f = balance_days / DAYS_PER_YEAR;
    let years = years_f.floor();
    let months_f = (years_f - years) * 12.0;
    let months = months_f.floor();
    let days = ((months_f - months) * 30.0).floor();
    (years as u32, months as u8, days as u8)
}
