//! Career reading from the 6th and 10th cuspal sub-lords.
//!
//! KP judges job and business through the sub-lords of the 6th cusp
//! (service) and the 10th cusp (status): the houses those planets
//! signify are graded by a fixed 12x12 hit matrix, and the 10th-side
//! houses name the working fields. Everything here is table lookup;
//! the narrative text generated from these numbers lives outside this
//! engine.

use serde::Serialize;

use nadi_base::Graha;

use crate::significator::SignificationSet;

/// Houses that support professional success in the hit theory.
pub const SUPPORT_HOUSES: [u8; 5] = [2, 6, 7, 10, 11];

/// Houses that obstruct it.
pub const OBSTACLE_HOUSES: [u8; 3] = [5, 8, 12];

/// Success grade of a house pair, worst to best.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Serialize)]
pub enum HitGrade {
    VeryBad,
    Bad,
    Low,
    Medium,
    High,
    Excellent,
}

impl HitGrade {
    /// Display label.
    pub const fn label(self) -> &'static str {
        match self {
            Self::VeryBad => "Very Bad",
            Self::Bad => "Bad",
            Self::Low => "Low",
            Self::Medium => "Medium",
            Self::High => "High",
            Self::Excellent => "Excellent",
        }
    }
}

use HitGrade::{Bad as B, Excellent as E, High as H, Low as L, Medium as M, VeryBad as V};

/// Hit matrix: `HIT_MATRIX[a-1][b-1]` grades the pairing of houses
/// `a` and `b` in a signification combination.
const HIT_MATRIX: [[HitGrade; 12]; 12] = [
    [M, M, M, M, M, M, M, L, M, H, H, B],
    [H, H, M, H, H, E, H, M, H, H, E, M],
    [L, M, M, M, M, M, M, L, M, H, H, B],
    [M, H, M, M, M, H, H, M, M, H, H, B],
    [M, M, M, M, M, M, M, B, M, M, M, V],
    [H, E, H, H, H, E, E, M, H, E, E, M],
    [H, H, H, H, H, E, H, M, H, H, E, M],
    [L, M, L, L, B, M, M, B, L, M, M, V],
    [M, H, M, M, M, H, H, L, H, H, H, B],
    [H, E, H, H, H, E, H, H, E, H, E, M],
    [H, E, H, H, H, E, E, H, E, E, E, M],
    [V, B, V, V, V, B, B, V, B, B, B, V],
];

/// Grade a pair of signified houses. `None` outside 1-12.
pub fn hit_grade(house_a: u8, house_b: u8) -> Option<HitGrade> {
    if !(1..=12).contains(&house_a) || !(1..=12).contains(&house_b) {
        return None;
    }
    Some(HIT_MATRIX[(house_a - 1) as usize][(house_b - 1) as usize])
}

/// Working fields traditionally read from a house.
pub fn job_areas(house: u8) -> Option<&'static str> {
    let areas = match house {
        1 => "Self-employment, Design, Personal Branding, Leadership",
        2 => "Finance, Banking, Asset Management, Family Business, Oratory",
        3 => "Media, Communication, Sales, Marketing, Writing, Short Travels",
        4 => "Real Estate, Vehicles, Agriculture, Education, Interior Design",
        5 => "Entertainment, Arts, Sports, Cinema, Speculation",
        6 => "Service Industry, Healthcare, Law, Competitive Roles, Auditing",
        7 => "Business, Partnerships, Retail, Public Relations, Stock Market",
        8 => "Research, Investigations, Legacy, Technical Work, Mystery, Deep Tech",
        9 => "Consulting, Teaching, Law Courts, Publication, Tourism, Foreign Travel",
        10 => "Government, Civil Services, Administration, Management, Corporate Leadership",
        11 => "Innovation, Social Impact, Gains, Large Groups, Success",
        12 => "Foreign Ties, Investments, Social Service, Isolation Science",
        _ => return None,
    };
    Some(areas)
}

/// One cusp's sub-lord with the houses it signifies per level.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct CuspalSubLord {
    /// The cusp this sub-lord belongs to (6 or 10 here).
    pub house: u8,
    pub graha: Graha,
    /// Houses of the star-lord level.
    pub star_level: Vec<u8>,
    /// Houses of the planet's own level.
    pub planet_level: Vec<u8>,
    /// Houses of the sub-lord level.
    pub sub_level: Vec<u8>,
}

impl CuspalSubLord {
    /// Build from the sub-lord graha's signification set.
    pub fn new(house: u8, set: &SignificationSet) -> Self {
        Self {
            house,
            graha: set.graha,
            star_level: set.level1.iter().map(|l| l.house).collect(),
            planet_level: set.level2.iter().map(|l| l.house).collect(),
            sub_level: set.level3.iter().map(|l| l.house).collect(),
        }
    }

    /// All signified houses across the three levels, sorted, deduplicated.
    pub fn houses(&self) -> Vec<u8> {
        let mut all: Vec<u8> = self
            .star_level
            .iter()
            .chain(self.planet_level.iter())
            .chain(self.sub_level.iter())
            .copied()
            .collect();
        all.sort_unstable();
        all.dedup();
        all
    }
}

/// Career reading assembled from the 6th and 10th cuspal sub-lords.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct CareerProfile {
    /// 6th cusp sub-lord (service, employment).
    pub service: CuspalSubLord,
    /// 10th cusp sub-lord (status, profession).
    pub status: CuspalSubLord,
    /// Best matrix grade across all (service house, status house)
    /// pairs. `None` only if either side signifies nothing.
    pub grade: Option<HitGrade>,
    /// Working fields of the status-side houses, in house order.
    pub areas: Vec<&'static str>,
}

/// Combine the two cuspal sub-lords into a career profile.
pub fn career_profile(service: CuspalSubLord, status: CuspalSubLord) -> CareerProfile {
    let mut grade = None;
    for &a in &service.houses() {
        for &b in &status.houses() {
            let g = hit_grade(a, b);
            if g > grade {
                grade = g;
            }
        }
    }

    let areas = status
        .houses()
        .iter()
        .filter_map(|&h| job_areas(h))
        .collect();

    CareerProfile {
        service,
        status,
        grade,
        areas,
    }
}
