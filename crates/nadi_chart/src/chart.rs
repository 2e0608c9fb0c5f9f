//! Full chart assembly.
//!
//! `compute_chart` turns one ephemeris snapshot (sidereal longitudes,
//! speeds, cusps, ascendant) into the complete KP result: lordship
//! chains for the ascendant, cusps, and planets, signification sets,
//! the career profile, and the dasha report. Pure function of its
//! inputs; the configuration travels as an explicit value.

use serde::{Deserialize, Serialize};
use tracing::debug;

use nadi_base::{
    ALL_GRAHAS, BirthBalance, DashaHierarchy, DashaSnapshot, Graha, KpLords, NadiError,
    balance_ymd, birth_balance, dasha, dms_in_sign, kp_lords, nakshatra_from_longitude,
    normalize_360,
};

use crate::bhava::{house_of_longitude, house_owners, validate_cusps};
use crate::career::{CareerProfile, CuspalSubLord, career_profile};
use crate::config::ChartConfig;
use crate::flags::{is_combust, is_retrograde};
use crate::significator::{PlanetPosition, SignificationSet, signification_set};

/// One ephemeris snapshot, as delivered by the external ephemeris
/// collaborator. Longitudes are sidereal, already ayanamsa-adjusted.
///
/// `longitudes` and `speeds` are indexed by `Graha::index()` for the
/// first 8 grahas (Surya through Rahu); Ketu is derived as
/// Rahu + 180 degrees and needs no entry of its own.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ChartInput {
    /// Birth instant, JD UT.
    pub birth_jd: f64,
    /// Reference instant for current-dasha resolution, JD UT.
    pub query_jd: f64,
    /// Sidereal longitudes: Surya, Chandra, Mangal, Buddh, Guru,
    /// Shukra, Shani, Rahu.
    pub longitudes: [f64; 8],
    /// Ecliptic speeds in degrees/day, same order.
    pub speeds: [f64; 8],
    /// 12 house cusp longitudes.
    pub cusps: [f64; 12],
    /// Ascendant longitude.
    pub ascendant: f64,
}

/// Ascendant lordship chain.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct AscendantInfo {
    pub longitude: f64,
    pub degree_dms: String,
    pub lords: KpLords,
}

/// One house with its cusp's lordship chain.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct HouseInfo {
    /// House number, 1-12.
    pub number: u8,
    pub cusp_longitude: f64,
    pub degree_dms: String,
    /// Owner under the configured ownership mode.
    pub owner: Graha,
    pub lords: KpLords,
}

/// One planet's placement, chain, and flags.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct PlanetInfo {
    pub graha: Graha,
    pub longitude: f64,
    pub degree_dms: String,
    /// House placement, 1-based.
    pub house: u8,
    pub lords: KpLords,
    pub retrograde: bool,
    pub combust: bool,
}

/// Dasha output: balance at birth, the full tree, and the active
/// periods at the query instant.
#[derive(Debug, Clone, Serialize)]
pub struct DashaReport {
    pub balance: BirthBalance,
    /// Balance decomposed as (years, months, days), 30-day months.
    pub balance_ymd: (u32, u8, u8),
    pub hierarchy: DashaHierarchy,
    pub current: DashaSnapshot,
}

/// Computation metadata echoed back with the chart.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct ChartMeta {
    pub config: ChartConfig,
    /// Moon's nakshatra at birth.
    pub janma_nakshatra: &'static str,
    pub pada: u8,
}

/// Complete chart result.
#[derive(Debug, Clone, Serialize)]
pub struct ChartResult {
    pub ascendant: AscendantInfo,
    pub houses: Vec<HouseInfo>,
    pub planets: Vec<PlanetInfo>,
    pub significations: Vec<SignificationSet>,
    pub career: CareerProfile,
    pub dasha: DashaReport,
    pub meta: ChartMeta,
}

fn validate_input(input: &ChartInput) -> Result<(), NadiError> {
    if !input.birth_jd.is_finite() || !input.query_jd.is_finite() {
        return Err(NadiError::InvalidInput("non-finite instant".to_string()));
    }
    if !input.ascendant.is_finite() {
        return Err(NadiError::InvalidInput("non-finite ascendant".to_string()));
    }
    for (i, &lon) in input.longitudes.iter().enumerate() {
        if !lon.is_finite() {
            return Err(NadiError::InvalidInput(format!(
                "non-finite longitude for {}",
                ALL_GRAHAS[i].name()
            )));
        }
    }
    for &s in &input.speeds {
        if !s.is_finite() {
            return Err(NadiError::InvalidInput("non-finite speed".to_string()));
        }
    }
    validate_cusps(&input.cusps)
}

/// Compute the full KP chart from one ephemeris snapshot.
pub fn compute_chart(input: &ChartInput, config: &ChartConfig) -> Result<ChartResult, NadiError> {
    validate_input(input)?;

    // 9-planet longitude/speed tables; Ketu mirrors Rahu.
    let rahu_lon = input.longitudes[Graha::Rahu.index() as usize];
    let mut lons = [0.0_f64; 9];
    let mut speeds = [0.0_f64; 9];
    for g in ALL_GRAHAS {
        let i = g.index() as usize;
        if g == Graha::Ketu {
            lons[i] = normalize_360(rahu_lon + 180.0);
            speeds[i] = input.speeds[Graha::Rahu.index() as usize];
        } else {
            lons[i] = normalize_360(input.longitudes[i]);
            speeds[i] = input.speeds[i];
        }
    }

    let owners = house_owners(&input.cusps, input.ascendant, config.ownership)?;
    let sun_lon = lons[Graha::Surya.index() as usize];

    let mut planets = Vec::with_capacity(9);
    let mut positions = Vec::with_capacity(9);
    for g in ALL_GRAHAS {
        let i = g.index() as usize;
        let house = house_of_longitude(lons[i], &input.cusps)?;
        let retrograde = is_retrograde(g, speeds[i]);
        planets.push(PlanetInfo {
            graha: g,
            longitude: lons[i],
            degree_dms: dms_in_sign(lons[i]),
            house,
            lords: kp_lords(lons[i]),
            retrograde,
            combust: is_combust(g, lons[i], sun_lon, retrograde),
        });
        positions.push(PlanetPosition {
            graha: g,
            longitude: lons[i],
            house,
        });
    }

    let significations: Vec<SignificationSet> = planets
        .iter()
        .map(|p| {
            signification_set(
                p.graha,
                p.lords.star_lord,
                p.lords.sub_lord,
                &positions,
                &owners,
            )
        })
        .collect();

    let mut houses = Vec::with_capacity(12);
    for (i, &cusp) in input.cusps.iter().enumerate() {
        houses.push(HouseInfo {
            number: (i as u8) + 1,
            cusp_longitude: normalize_360(cusp),
            degree_dms: dms_in_sign(cusp),
            owner: owners[i],
            lords: kp_lords(cusp),
        });
    }

    let career = career_reading(&houses, &positions, &owners)?;

    let moon_lon = lons[Graha::Chandra.index() as usize];
    let balance = birth_balance(moon_lon);
    let dasha_report = DashaReport {
        balance,
        balance_ymd: balance_ymd(balance.balance_days),
        hierarchy: dasha::hierarchy(input.birth_jd, moon_lon),
        current: dasha::snapshot(input.birth_jd, moon_lon, input.query_jd),
    };
    debug!(
        governing_lord = balance.graha.name(),
        balance_days = balance.balance_days,
        "dasha balance resolved"
    );

    let moon_nak = nakshatra_from_longitude(moon_lon);
    let ascendant = AscendantInfo {
        longitude: normalize_360(input.ascendant),
        degree_dms: dms_in_sign(input.ascendant),
        lords: kp_lords(input.ascendant),
    };
    debug!(
        ascendant_sign = ascendant.lords.rashi.name(),
        janma_nakshatra = moon_nak.nakshatra.name(),
        "chart assembled"
    );

    Ok(ChartResult {
        ascendant,
        houses,
        planets,
        significations,
        career,
        dasha: dasha_report,
        meta: ChartMeta {
            config: *config,
            janma_nakshatra: moon_nak.nakshatra.name(),
            pada: moon_nak.pada,
        },
    })
}

/// Career profile from the 6th and 10th cusp sub-lords.
fn career_reading(
    houses: &[HouseInfo],
    positions: &[PlanetPosition],
    owners: &[Graha; 12],
) -> Result<CareerProfile, NadiError> {
    let csl_of = |number: u8| -> Result<CuspalSubLord, NadiError> {
        let house = houses
            .iter()
            .find(|h| h.number == number)
            .ok_or(NadiError::Inconsistency("house record missing"))?;
        let sub_lord = house.lords.sub_lord;
        let lords = positions
            .iter()
            .find(|p| p.graha == sub_lord)
            .map(|p| kp_lords(p.longitude))
            .ok_or(NadiError::Inconsistency("cusp sub-lord has no position"))?;
        let set = signification_set(sub_lord, lords.star_lord, lords.sub_lord, positions, owners);
        Ok(CuspalSubLord::new(number, &set))
    };

    Ok(career_profile(csl_of(6)?, csl_of(10)?))
}
