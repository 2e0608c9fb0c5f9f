//! KP (Krishnamurti Paddhati) base calculations.
//!
//! This crate provides:
//! - Symbolic tables: grahas, rashis, nakshatras, and rashi lordship
//! - The cyclic proportional partitioner shared by sub-lord and
//!   dasha subdivision
//! - The KP lordship resolver (sign/star/sub/sub-sub lord chain)
//! - Vimshottari dasha tree generation and active-period resolution
//!
//! All computations are pure functions of their inputs; nothing here
//! touches ephemeris data or process-wide state.

pub mod dasha;
pub mod error;
pub mod graha;
pub mod lords;
pub mod nakshatra;
pub mod partition;
pub mod rashi;
pub mod time;
pub mod util;

pub use dasha::{
    BirthBalance, CYCLE_DAYS, DAYS_PER_YEAR, DashaHierarchy, DashaLevel, DashaPeriod,
    DashaSnapshot, balance_ymd, birth_balance,
};
pub use error::NadiError;
pub use graha::{ALL_GRAHAS, Graha, SAPTA_GRAHAS, nth_rashi_from, rashi_lord, rashi_lord_by_index};
pub use lords::{KpLords, NadiType, kp_lords};
pub use nakshatra::{
    ALL_NAKSHATRAS, NAKSHATRA_SPAN, Nakshatra, NakshatraInfo, PADA_SPAN, nakshatra_from_longitude,
};
pub use partition::{
    CYCLE_YEARS, DASHA_LORDS, DASHA_YEARS, Segment, locate, lord_years, proportional_segments,
    rotate_from,
};
pub use rashi::{ALL_RASHIS, RASHI_SPAN, Rashi, RashiInfo, rashi_from_longitude};
pub use time::{J2000_JD, calendar_to_jd, jd_to_calendar, jd_to_date_string};
pub use util::{angular_distance, dms_in_sign, normalize_360};
