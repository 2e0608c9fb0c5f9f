//! The 9 grahas (7 classical planets + lunar nodes) and rashi lordship.
//!
//! Rahu and Ketu are the lunar nodes: always 180 degrees apart, never
//! owning a rashi of their own. The rashi -> lord table is the universal
//! Vedic convention and is shared by every house-ownership mode.

use serde::{Deserialize, Serialize};

use crate::rashi::Rashi;

/// The 9 grahas.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
pub enum Graha {
    Surya,
    Chandra,
    Mangal,
    Buddh,
    Guru,
    Shukra,
    Shani,
    Rahu,
    Ketu,
}

/// All 9 grahas in traditional order.
pub const ALL_GRAHAS: [Graha; 9] = [
    Graha::Surya,
    Graha::Chandra,
    Graha::Mangal,
    Graha::Buddh,
    Graha::Guru,
    Graha::Shukra,
    Graha::Shani,
    Graha::Rahu,
    Graha::Ketu,
];

/// The 7 classical grahas, excluding the nodes.
pub const SAPTA_GRAHAS: [Graha; 7] = [
    Graha::Surya,
    Graha::Chandra,
    Graha::Mangal,
    Graha::Buddh,
    Graha::Guru,
    Graha::Shukra,
    Graha::Shani,
];

impl Graha {
    /// Sanskrit name of the graha.
    pub const fn name(self) -> &'static str {
        match self {
            Self::Surya => "Surya",
            Self::Chandra => "Chandra",
            Self::Mangal => "Mangal",
            Self::Buddh => "Buddh",
            Self::Guru => "Guru",
            Self::Shukra => "Shukra",
            Self::Shani => "Shani",
            Self::Rahu => "Rahu",
            Self::Ketu => "Ketu",
        }
    }

    /// English name of the graha.
    pub const fn english_name(self) -> &'static str {
        match self {
            Self::Surya => "Sun",
            Self::Chandra => "Moon",
            Self::Mangal => "Mars",
            Self::Buddh => "Mercury",
            Self::Guru => "Jupiter",
            Self::Shukra => "Venus",
            Self::Shani => "Saturn",
            Self::Rahu => "Rahu",
            Self::Ketu => "Ketu",
        }
    }

    /// 0-based index into ALL_GRAHAS.
    pub const fn index(self) -> u8 {
        match self {
            Self::Surya => 0,
            Self::Chandra => 1,
            Self::Mangal => 2,
            Self::Buddh => 3,
            Self::Guru => 4,
            Self::Shukra => 5,
            Self::Shani => 6,
            Self::Rahu => 7,
            Self::Ketu => 8,
        }
    }

    /// True for the lunar nodes (Rahu/Ketu).
    pub const fn is_node(self) -> bool {
        matches!(self, Self::Rahu | Self::Ketu)
    }

    /// The other lunar node, for Rahu/Ketu only.
    pub const fn counterpart_node(self) -> Option<Graha> {
        match self {
            Self::Rahu => Some(Self::Ketu),
            Self::Ketu => Some(Self::Rahu),
            _ => None,
        }
    }
}

/// Get the planetary lord of a rashi.
///
/// Standard Vedic lordship assignment (universal convention):
/// - Mesha/Vrischika -> Mangal
/// - Vrishabha/Tula -> Shukra
/// - Mithuna/Kanya -> Buddh
/// - Karka -> Chandra
/// - Simha -> Surya
/// - Dhanu/Meena -> Guru
/// - Makara/Kumbha -> Shani
///
/// The nodes own no rashi, so this never returns Rahu or Ketu.
pub const fn rashi_lord(rashi: Rashi) -> Graha {
    match rashi {
        Rashi::Mesha => Graha::Mangal,
        Rashi::Vrishabha => Graha::Shukra,
        Rashi::Mithuna => Graha::Buddh,
        Rashi::Karka => Graha::Chandra,
        Rashi::Simha => Graha::Surya,
        Rashi::Kanya => Graha::Buddh,
        Rashi::Tula => Graha::Shukra,
        Rashi::Vrischika => Graha::Mangal,
        Rashi::Dhanu => Graha::Guru,
        Rashi::Makara => Graha::Shani,
        Rashi::Kumbha => Graha::Shani,
        Rashi::Meena => Graha::Guru,
    }
}

/// Get the lord of a rashi by 0-based index. None if index >= 12.
pub fn rashi_lord_by_index(rashi_index: u8) -> Option<Graha> {
    if rashi_index >= 12 {
        return None;
    }
    Some(rashi_lord(crate::rashi::ALL_RASHIS[rashi_index as usize]))
}

/// Compute the n-th rashi from a given rashi (0-based index, 1-based offset).
///
/// `nth_rashi_from(0, 1)` = 0 (same rashi), `nth_rashi_from(0, 2)` = 1.
pub fn nth_rashi_from(rashi_index: u8, offset: u8) -> u8 {
    ((rashi_index as u16 + offset as u16 - 1) % 12) as u8
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn all_grahas_count() {
        assert_eq!(ALL_GRAHAS.len(), 9);
        assert_eq!(SAPTA_GRAHAS.len(), 7);
    }

    #[test]
    fn graha_indices_sequential() {
        for (i, g) in ALL_GRAHAS.iter().enumerate() {
            assert_eq!(g.index() as usize, i);
        }
    }

    #[test]
    fn nodes_flagged() {
        assert!(Graha::Rahu.is_node());
        assert!(Graha::Ketu.is_node());
        for g in SAPTA_GRAHAS {
            assert!(!g.is_node());
        }
    }

    #[test]
    fn counterpart_nodes() {
        assert_eq!(Graha::Rahu.counterpart_node(), Some(Graha::Ketu));
        assert_eq!(Graha::Ketu.counterpart_node(), Some(Graha::Rahu));
        assert_eq!(Graha::Surya.counterpart_node(), None);
    }

    #[test]
    fn lordship_dual_ruled() {
        assert_eq!(rashi_lord(Rashi::Mesha), Graha::Mangal);
        assert_eq!(rashi_lord(Rashi::Vrischika), Graha::Mangal);
        assert_eq!(rashi_lord(Rashi::Vrishabha), Graha::Shukra);
        assert_eq!(rashi_lord(Rashi::Tula), Graha::Shukra);
        assert_eq!(rashi_lord(Rashi::Makara), Graha::Shani);
        assert_eq!(rashi_lord(Rashi::Kumbha), Graha::Shani);
    }

    #[test]
    fn lordship_single_ruled() {
        assert_eq!(rashi_lord(Rashi::Karka), Graha::Chandra);
        assert_eq!(rashi_lord(Rashi::Simha), Graha::Surya);
    }

    #[test]
    fn nodes_never_lords() {
        for r in crate::rashi::ALL_RASHIS {
            assert!(!rashi_lord(r).is_node());
        }
    }

    #[test]
    fn lord_by_index_bounds() {
        assert_eq!(rashi_lord_by_index(0), Some(Graha::Mangal));
        assert_eq!(rashi_lord_by_index(11), Some(Graha::Guru));
        assert_eq!(rashi_lord_by_index(12), None);
    }

    #[test]
    fn nth_rashi_wrap() {
        assert_eq!(nth_rashi_from(11, 2), 0);
        assert_eq!(nth_rashi_from(0, 12), 11);
        assert_eq!(nth_rashi_from(2, 1), 2);
    }
}
