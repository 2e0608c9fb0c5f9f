//! House (bhava) placement and ownership.
//!
//! House `i` spans `[cusp_i, cusp_{i+1})` on the ecliptic circle, with
//! house 12 wrapping through 360/0. Placement is half-open cyclic
//! containment; exactly one house matches any longitude once the cusp
//! set has passed validation, so a no-match afterwards is a fatal
//! internal inconsistency, not a recoverable condition.

use nadi_base::{
    Graha, NadiError, nth_rashi_from, normalize_360, rashi_from_longitude, rashi_lord,
    rashi_lord_by_index,
};

use crate::config::OwnershipMode;

/// Validate a 12-cusp set.
///
/// Cusps must be finite, distinct modulo 360, and monotonically
/// increasing modulo 360 (exactly one descent across the whole cycle,
/// the wrap through 0). Anything else is `InvalidInput`.
pub fn validate_cusps(cusps: &[f64; 12]) -> Result<(), NadiError> {
    for (i, &c) in cusps.iter().enumerate() {
        if !c.is_finite() {
            return Err(NadiError::InvalidInput(format!(
                "cusp {} is not finite",
                i + 1
            )));
        }
    }

    let mut descents = 0;
    for i in 0..12 {
        let cur = normalize_360(cusps[i]);
        let next = normalize_360(cusps[(i + 1) % 12]);
        if cur == next {
            return Err(NadiError::InvalidInput(format!(
                "duplicate cusp at house {}",
                i + 1
            )));
        }
        if next < cur {
            descents += 1;
        }
    }
    if descents != 1 {
        return Err(NadiError::InvalidInput(
            "cusps are not monotonically increasing modulo 360".to_string(),
        ));
    }
    Ok(())
}

/// House containing a longitude, 1-based.
///
/// Callers must have validated the cusp set; with valid cusps exactly
/// one house matches, and a no-match is reported as `Inconsistency`.
pub fn house_of_longitude(lon: f64, cusps: &[f64; 12]) -> Result<u8, NadiError> {
    let p = normalize_360(lon);
    for i in 0..12 {
        let cur = normalize_360(cusps[i]);
        let next = normalize_360(cusps[(i + 1) % 12]);
        let contained = if next < cur {
            // Wraparound span, e.g. [340, 10).
            p >= cur || p < next
        } else {
            p >= cur && p < next
        };
        if contained {
            return Ok((i as u8) + 1);
        }
    }
    Err(NadiError::Inconsistency(
        "no house interval contains the longitude",
    ))
}

/// Owner of each house, indexed by house number - 1.
///
/// `CuspSign` mode: each house is owned by the lord of the sign its
/// cusp falls in. `WholeSign` mode: house k is owned by the lord of
/// the k-th sign counted from the ascendant sign, cusps ignored.
pub fn house_owners(
    cusps: &[f64; 12],
    ascendant: f64,
    mode: OwnershipMode,
) -> Result<[Graha; 12], NadiError> {
    let mut owners = [Graha::Surya; 12];
    match mode {
        OwnershipMode::CuspSign => {
            for (i, &c) in cusps.iter().enumerate() {
                owners[i] = rashi_lord(rashi_from_longitude(c).rashi);
            }
        }
        OwnershipMode::WholeSign => {
            let asc_sign = rashi_from_longitude(ascendant).rashi_index;
            for (i, owner) in owners.iter_mut().enumerate() {
                let sign_idx = nth_rashi_from(asc_sign, (i as u8) + 1);
                *owner = rashi_lord_by_index(sign_idx)
                    .ok_or(NadiError::Inconsistency("rashi index out of range"))?;
            }
        }
    }
    Ok(owners)
}

/// Houses owned by a graha, sorted ascending. Empty for the nodes.
pub fn houses_owned_by(owners: &[Graha; 12], graha: Graha) -> Vec<u8> {
    owners
        .iter()
        .enumerate()
        .filter(|&(_, &o)| o == graha)
        .map(|(i, _)| (i as u8) + 1)
        .collect()
}
