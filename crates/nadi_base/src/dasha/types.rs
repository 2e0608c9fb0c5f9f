//! Core types for dasha period calculations.

use serde::Serialize;

use crate::graha::Graha;
use crate::partition::CYCLE_YEARS;

/// Fixed year length for dasha period arithmetic.
pub const DAYS_PER_YEAR: f64 = 365.2425;

/// Length of one full Vimshottari cycle in days.
pub const CYCLE_DAYS: f64 = CYCLE_YEARS * DAYS_PER_YEAR;

/// Deepest supported level (0 = Mahadasha .. 2 = Pratyantardasha).
pub const MAX_DASHA_LEVEL: u8 = 2;

/// The 3 hierarchical dasha levels.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize)]
#[repr(u8)]
pub enum DashaLevel {
    Mahadasha = 0,
    Antardasha = 1,
    Pratyantardasha = 2,
}

impl DashaLevel {
    /// Create from raw u8 value.
    pub fn from_u8(v: u8) -> Option<Self> {
        match v {
            0 => Some(Self::Mahadasha),
            1 => Some(Self::Antardasha),
            2 => Some(Self::Pratyantardasha),
            _ => None,
        }
    }

    /// Human-readable name.
    pub const fn name(self) -> &'static str {
        match self {
            Self::Mahadasha => "Mahadasha",
            Self::Antardasha => "Antardasha",
            Self::Pratyantardasha => "Pratyantardasha",
        }
    }

    /// Next deeper level, if any.
    pub const fn child_level(self) -> Option<Self> {
        match self {
            Self::Mahadasha => Some(Self::Antardasha),
            Self::Antardasha => Some(Self::Pratyantardasha),
            Self::Pratyantardasha => None,
        }
    }
}

/// A single dasha period.
#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
pub struct DashaPeriod {
    /// The graha ruling this period.
    pub graha: Graha,
    /// JD UT, inclusive.
    pub start_jd: f64,
    /// JD UT, exclusive.
    pub end_jd: f64,
    /// Hierarchical level.
    pub level: DashaLevel,
    /// 1-indexed position among siblings.
    pub order: u16,
    /// Index into the parent level's array (0 for level 0).
    pub parent_idx: u32,
}

impl DashaPeriod {
    /// Duration of the period in days.
    pub fn duration_days(&self) -> f64 {
        self.end_jd - self.start_jd
    }

    /// Half-open containment check.
    pub fn contains(&self, query_jd: f64) -> bool {
        self.start_jd <= query_jd && query_jd < self.end_jd
    }
}

/// Complete 3-level hierarchy for one birth.
#[derive(Debug, Clone, Serialize)]
pub struct DashaHierarchy {
    /// Birth JD UT.
    pub birth_jd: f64,
    /// Virtual cycle start (predates birth by the elapsed fraction of
    /// the governing lord's period).
    pub anchor_jd: f64,
    /// Levels: levels[0] = mahadashas (9), [1] = antardashas (81),
    /// [2] = pratyantardashas (729).
    pub levels: Vec<Vec<DashaPeriod>>,
}

/// Active periods at a specific instant, one per level.
#[derive(Debug, Clone, Serialize)]
pub struct DashaSnapshot {
    /// The queried JD UT.
    pub query_jd: f64,
    /// Active periods: periods[0] = mahadasha, [1] = antardasha,
    /// [2] = pratyantardasha.
    pub periods: Vec<DashaPeriod>,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn level_from_u8() {
        assert_eq!(DashaLevel::from_u8(0), Some(DashaLevel::Mahadasha));
        assert_eq!(DashaLevel::from_u8(2), Some(DashaLevel::Pratyantardasha));
        assert_eq!(DashaLevel::from_u8(3), None);
    }

    #[test]
    fn level_children() {
        assert_eq!(
            DashaLevel::Mahadasha.child_level(),
            Some(DashaLevel::Antardasha)
        );
        assert_eq!(DashaLevel::Pratyantardasha.child_level(), None);
    }

    #[test]
    fn cycle_days_value() {
        assert!((CYCLE_DAYS - 120.0 * 365.2425).abs() < 1e-9);
    }

    #[test]
    fn containment_half_open() {
        let p = DashaPeriod {
            graha: Graha::Ketu,
            start_jd: 100.0,
            end_jd: 200.0,
            level: DashaLevel::Mahadasha,
            order: 1,
            parent_idx: 0,
        };
        assert!(p.contains(100.0));
        assert!(p.contains(199.999));
        assert!(!p.contains(200.0));
        assert!(!p.contains(99.999));
        assert!((p.duration_days() - 100.0).abs() < 1e-12);
    }
}
