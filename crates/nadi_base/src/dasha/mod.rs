//! Vimshottari dasha (planetary period) calculations.
//!
//! The 120-year cycle is anchored to the Moon's nakshatra position at
//! birth and subdivided three levels deep (Mahadasha -> Antardasha ->
//! Pratyantardasha) through the same proportional partitioner that
//! drives the spatial sub-lord subdivision.

pub mod balance;
pub mod types;
pub mod vimshottari;

pub use balance::{BirthBalance, balance_ymd, birth_balance};
pub use types::{
    CYCLE_DAYS, DAYS_PER_YEAR, DashaHierarchy, DashaLevel, DashaPeriod, DashaSnapshot,
    MAX_DASHA_LEVEL,
};
pub use vimshottari::{anchor_jd, children, hierarchy, mahadashas, snapshot};
