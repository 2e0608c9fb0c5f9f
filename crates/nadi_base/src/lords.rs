//! KP lordship resolution for a single sidereal longitude.
//!
//! Every longitude resolves to a fixed chain: rashi and rashi lord,
//! nakshatra (star) lord, sub-lord, and sub-sub-lord. The star lord is
//! `DASHA_LORDS[nakshatra_index mod 9]`; the sub-lord divides the
//! nakshatra arc proportionally to the Vimshottari weights starting
//! from the star lord, and the sub-sub-lord divides the chosen sub-arc
//! the same way starting from the sub-lord.
//!
//! Resolution is total: any longitude in [0, 360) yields a chain, with
//! no error path.

use serde::Serialize;

use crate::graha::{Graha, rashi_lord};
use crate::nakshatra::{NAKSHATRA_SPAN, Nakshatra, nakshatra_from_longitude};
use crate::partition::{DASHA_LORDS, locate, proportional_segments, rotate_from};
use crate::rashi::{Rashi, rashi_from_longitude};
use crate::util::normalize_360;

/// Tertiary nadi classification from the sub-division index.
///
/// Descriptive metadata only; signification logic never consults it.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize)]
pub enum NadiType {
    Vata,
    Pitta,
    Kapha,
}

impl NadiType {
    /// Name of the nadi type.
    pub const fn name(self) -> &'static str {
        match self {
            Self::Vata => "Vata",
            Self::Pitta => "Pitta",
            Self::Kapha => "Kapha",
        }
    }

    /// Classification from a 1-based sub-division index (1-9):
    /// 1/4/7 -> Vata, 2/5/8 -> Pitta, 3/6/9 -> Kapha.
    ///
    /// Total over all of u8 (residue cycling), so no index value can
    /// panic.
    pub const fn from_sub_index(sub_index: u8) -> Self {
        match sub_index % 3 {
            1 => Self::Vata,
            2 => Self::Pitta,
            _ => Self::Kapha,
        }
    }
}

/// Full KP lordship chain for one longitude.
#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
pub struct KpLords {
    /// Zodiac sign.
    pub rashi: Rashi,
    /// Ruler of the sign.
    pub rashi_lord: Graha,
    /// Lunar mansion.
    pub nakshatra: Nakshatra,
    /// Quarter of the mansion, 1-4.
    pub pada: u8,
    /// Ruler of the mansion (star lord).
    pub star_lord: Graha,
    /// Sub-lord within the mansion.
    pub sub_lord: Graha,
    /// Sub-sub-lord within the sub-arc.
    pub sub_sub_lord: Graha,
    /// 1-based index of the sub-arc within the mansion (1-9).
    pub sub_index: u8,
    /// Nadi classification derived from `sub_index`.
    pub nadi: NadiType,
}

/// Resolve the KP lordship chain for a sidereal ecliptic longitude.
pub fn kp_lords(sidereal_lon_deg: f64) -> KpLords {
    let lon = normalize_360(sidereal_lon_deg);
    let rashi_info = rashi_from_longitude(lon);
    let nak_info = nakshatra_from_longitude(lon);

    let star_lord = DASHA_LORDS[(nak_info.nakshatra_index % 9) as usize];

    // Sub-lord: partition the mansion arc, rotated to start at the
    // star lord, and locate the position within it.
    let sub_seq = rotate_from(star_lord);
    let sub_segs = proportional_segments(NAKSHATRA_SPAN, &sub_seq);
    let sub_idx = locate(NAKSHATRA_SPAN, &sub_segs, nak_info.degrees_in_nakshatra);
    let sub = sub_segs[sub_idx];

    // Sub-sub-lord: same routine one level down, inside the sub-arc.
    let pos_in_sub = (nak_info.degrees_in_nakshatra - sub.start).max(0.0);
    let ssl_seq = rotate_from(sub.lord);
    let ssl_segs = proportional_segments(sub.width, &ssl_seq);
    let ssl_idx = locate(sub.width, &ssl_segs, pos_in_sub);

    let sub_index = (sub_idx as u8) + 1;
    KpLords {
        rashi: rashi_info.rashi,
        rashi_lord: rashi_lord(rashi_info.rashi),
        nakshatra: nak_info.nakshatra,
        pada: nak_info.pada,
        star_lord,
        sub_lord: sub.lord,
        sub_sub_lord: ssl_segs[ssl_idx].lord,
        sub_index,
        nadi: NadiType::from_sub_index(sub_index),
    }
}
