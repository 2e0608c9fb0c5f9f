//! Vimshottari dasha tree generation and active-period resolution.
//!
//! The cycle is anchored at a virtual start predating birth: the
//! governing lord's period began `elapsed_fraction x weight` years
//! before the birth instant, so the first mahadasha is generated at
//! full length from that anchor rather than truncated at birth. All
//! subdivision goes through `partition::proportional_segments`, the
//! same routine that carves sub-lord arcs out of a nakshatra.

use crate::graha::Graha;
use crate::partition::{lord_years, proportional_segments, rotate_from};

use super::balance::birth_balance;
use super::types::{
    CYCLE_DAYS, DAYS_PER_YEAR, DashaHierarchy, DashaLevel, DashaPeriod, DashaSnapshot,
    MAX_DASHA_LEVEL,
};

/// Virtual start of the cycle containing birth.
///
/// `anchor = birth - elapsed_fraction * weight[lord]` years.
pub fn anchor_jd(birth_jd: f64, moon_sidereal_lon: f64) -> f64 {
    let b = birth_balance(moon_sidereal_lon);
    birth_jd - b.elapsed_fraction * lord_years(b.graha) * DAYS_PER_YEAR
}

/// Generate the 9 mahadashas of one cycle from an anchor instant.
///
/// The full 120-year span is partitioned proportionally to the weight
/// table rotated to start at the governing lord, so mahadasha
/// durations and the dasha/sub-lord arcs come from one routine.
pub fn mahadashas(anchor_jd: f64, governing_lord: Graha) -> Vec<DashaPeriod> {
    let seq = rotate_from(governing_lord);
    let segs = proportional_segments(CYCLE_DAYS, &seq);
    segs.iter()
        .enumerate()
        .map(|(i, seg)| DashaPeriod {
            graha: seg.lord,
            start_jd: anchor_jd + seg.start,
            end_jd: anchor_jd + seg.end(),
            level: DashaLevel::Mahadasha,
            order: (i as u16) + 1,
            parent_idx: 0,
        })
        .collect()
}

/// Generate the 9 children of a parent period.
///
/// The parent's duration is partitioned proportionally to the weight
/// table rotated to start at the parent's own lord.
pub fn children(parent: &DashaPeriod, parent_idx: u32) -> Vec<DashaPeriod> {
    let child_level = match parent.level.child_level() {
        Some(l) => l,
        None => return Vec::new(),
    };
    let seq = rotate_from(parent.graha);
    let segs = proportional_segments(parent.duration_days(), &seq);
    segs.iter()
        .enumerate()
        .map(|(i, seg)| DashaPeriod {
            graha: seg.lord,
            start_jd: parent.start_jd + seg.start,
            end_jd: parent.start_jd + seg.end(),
            level: child_level,
            order: (i as u16) + 1,
            parent_idx,
        })
        .collect()
}

/// Build the complete 3-level hierarchy for one cycle.
pub fn hierarchy(birth_jd: f64, moon_sidereal_lon: f64) -> DashaHierarchy {
    let b = birth_balance(moon_sidereal_lon);
    let anchor = anchor_jd(birth_jd, moon_sidereal_lon);
    let level0 = mahadashas(anchor, b.graha);

    let mut levels: Vec<Vec<DashaPeriod>> = vec![level0];
    for _ in 1..=MAX_DASHA_LEVEL {
        let parents = levels.last().map(Vec::as_slice).unwrap_or_default();
        let mut next = Vec::with_capacity(parents.len() * 9);
        for (pidx, parent) in parents.iter().enumerate() {
            next.extend(children(parent, pidx as u32));
        }
        levels.push(next);
    }

    DashaHierarchy {
        birth_jd,
        anchor_jd: anchor,
        levels,
    }
}

/// Index of the period containing `query_jd`, by half-open containment.
fn find_active(periods: &[DashaPeriod], query_jd: f64) -> Option<usize> {
    periods.iter().position(|p| p.contains(query_jd))
}

/// Resolve the active mahadasha/antardasha/pratyantardasha at an instant.
///
/// An instant outside the anchored cycle is handled by shifting the
/// anchor by whole 120-year cycles until the instant falls inside;
/// the walk never silently returns an empty result.
pub fn snapshot(birth_jd: f64, moon_sidereal_lon: f64, query_jd: f64) -> DashaSnapshot {
    let b = birth_balance(moon_sidereal_lon);
    let anchor = anchor_jd(birth_jd, moon_sidereal_lon);

    // Whole-cycle shift places the query inside [anchor', anchor' + 120y).
    let shift = ((query_jd - anchor) / CYCLE_DAYS).floor();
    let shifted_anchor = anchor + shift * CYCLE_DAYS;

    let level0 = mahadashas(shifted_anchor, b.graha);
    let mut periods = Vec::with_capacity((MAX_DASHA_LEVEL + 1) as usize);

    let (mut current, mut current_idx) = match find_active(&level0, query_jd) {
        Some(idx) => (level0[idx], idx as u32),
        // Query equals the far cycle boundary after round-off; clamp
        // into the last period.
        None => match level0.last() {
            Some(&p) => (p, (level0.len() - 1) as u32),
            None => return DashaSnapshot { query_jd, periods },
        },
    };
    periods.push(current);

    for depth in 1..=MAX_DASHA_LEVEL {
        // current_idx is the parent's index within its own level, so
        // the children carry the same parent_idx they would have in
        // the full hierarchy.
        let kids = children(&current, current_idx);
        let idx = find_active(&kids, query_jd).unwrap_or(kids.len() - 1);
        current = kids[idx];
        current_idx = current_idx * 9 + idx as u32;
        periods.push(current);
        debug_assert_eq!(current.level as u8, depth);
    }

    DashaSnapshot { query_jd, periods }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::nakshatra::NAKSHATRA_SPAN;

    const BIRTH: f64 = 2_451_545.0; // J2000

    #[test]
    fn anchor_equals_birth_at_nakshatra_start() {
        assert!((anchor_jd(BIRTH, 0.0) - BIRTH).abs() < 1e-9);
    }

    #[test]
    fn anchor_precedes_birth_mid_nakshatra() {
        // Mid-Ashwini: half of Ketu's 7 years already elapsed.
        let anchor = anchor_jd(BIRTH, NAKSHATRA_SPAN / 2.0);
        let expected = BIRTH - 3.5 * DAYS_PER_YEAR;
        assert!((anchor - expected).abs() < 1e-6);
    }

    #[test]
    fn mahadashas_full_lengths_from_anchor() {
        // Governing lord Ketu with 0 elapsed: Ketu spans exactly 7y
        // from the anchor, then Shukra exactly 20y, no gap.
        let periods = mahadashas(BIRTH, Graha::Ketu);
        assert_eq!(periods.len(), 9);
        assert_eq!(periods[0].graha, Graha::Ketu);
        assert!((periods[0].duration_days() - 7.0 * DAYS_PER_YEAR).abs() < 1e-6);
        assert_eq!(periods[1].graha, Graha::Shukra);
        assert!((periods[1].duration_days() - 20.0 * DAYS_PER_YEAR).abs() < 1e-6);
        assert!((periods[1].start_jd - periods[0].end_jd).abs() < 1e-9);
    }

    #[test]
    fn mahadashas_cover_full_cycle() {
        let periods = mahadashas(BIRTH, Graha::Guru);
        let total: f64 = periods.iter().map(|p| p.duration_days()).sum();
        assert!((total - CYCLE_DAYS).abs() < 1e-6);
        assert!((periods[8].end_jd - (BIRTH + CYCLE_DAYS)).abs() < 1e-6);
    }

    #[test]
    fn children_sum_to_parent() {
        let periods = mahadashas(BIRTH, Graha::Ketu);
        for (pidx, parent) in periods.iter().enumerate() {
            let kids = children(parent, pidx as u32);
            assert_eq!(kids.len(), 9);
            assert_eq!(kids[0].graha, parent.graha);
            assert!((kids[0].start_jd - parent.start_jd).abs() < 1e-9);
            assert!((kids[8].end_jd - parent.end_jd).abs() < 1e-9);
            let total: f64 = kids.iter().map(|k| k.duration_days()).sum();
            assert!((total - parent.duration_days()).abs() < 1e-6);
        }
    }

    #[test]
    fn grandchildren_sum_to_parent() {
        let periods = mahadashas(BIRTH, Graha::Shani);
        let kids = children(&periods[0], 0);
        for kid in &kids {
            let grand = children(kid, 0);
            let total: f64 = grand.iter().map(|g| g.duration_days()).sum();
            assert!((total - kid.duration_days()).abs() < 1e-6);
        }
    }

    #[test]
    fn pratyantardasha_has_no_children() {
        let md = mahadashas(BIRTH, Graha::Ketu);
        let ad = children(&md[0], 0);
        let pd = children(&ad[0], 0);
        assert!(children(&pd[0], 0).is_empty());
    }

    #[test]
    fn hierarchy_level_counts() {
        let h = hierarchy(BIRTH, 0.0);
        assert_eq!(h.levels.len(), 3);
        assert_eq!(h.levels[0].len(), 9);
        assert_eq!(h.levels[1].len(), 81);
        assert_eq!(h.levels[2].len(), 729);
    }

    #[test]
    fn snapshot_at_birth() {
        let snap = snapshot(BIRTH, 0.0, BIRTH);
        assert_eq!(snap.periods.len(), 3);
        assert_eq!(snap.periods[0].graha, Graha::Ketu);
        assert_eq!(snap.periods[1].graha, Graha::Ketu);
        assert_eq!(snap.periods[2].graha, Graha::Ketu);
    }

    #[test]
    fn snapshot_mid_life() {
        // 10 years after birth at Ashwini start: Ketu (7y) done,
        // inside Shukra mahadasha.
        let query = BIRTH + 10.0 * DAYS_PER_YEAR;
        let snap = snapshot(BIRTH, 0.0, query);
        assert_eq!(snap.periods[0].graha, Graha::Shukra);
    }

    #[test]
    fn snapshot_matches_hierarchy() {
        let moon = 100.0;
        let query = BIRTH + 1000.0;
        let h = hierarchy(BIRTH, moon);
        let snap = snapshot(BIRTH, moon, query);
        for (level, snap_period) in snap.periods.iter().enumerate() {
            let in_h = h.levels[level]
                .iter()
                .find(|p| p.contains(query))
                .expect("active period in hierarchy");
            assert_eq!(snap_period.graha, in_h.graha);
            assert!((snap_period.start_jd - in_h.start_jd).abs() < 1e-6);
        }
    }

    #[test]
    fn snapshot_parent_indices_chain() {
        // Each deeper period's parent_idx points at the located parent
        // within its level, exactly as in the full hierarchy.
        let moon = 100.0;
        let query = BIRTH + 40.0 * DAYS_PER_YEAR;
        let snap = snapshot(BIRTH, moon, query);

        let md_idx = (snap.periods[0].order - 1) as u32;
        assert_eq!(snap.periods[1].parent_idx, md_idx);
        let ad_idx = md_idx * 9 + (snap.periods[1].order - 1) as u32;
        assert_eq!(snap.periods[2].parent_idx, ad_idx);

        let h = hierarchy(BIRTH, moon);
        let in_h = h.levels[2]
            .iter()
            .find(|p| p.contains(query))
            .expect("active pratyantardasha in hierarchy");
        assert_eq!(snap.periods[2].parent_idx, in_h.parent_idx);
    }

    #[test]
    fn snapshot_extends_past_cycle_end() {
        // 130 years after birth: past the first cycle, resolved in the
        // next one rather than returning nothing.
        let query = BIRTH + 130.0 * DAYS_PER_YEAR;
        let snap = snapshot(BIRTH, 0.0, query);
        assert_eq!(snap.periods.len(), 3);
        assert!(snap.periods[0].contains(query));
    }

    #[test]
    fn snapshot_extends_before_anchor() {
        let query = BIRTH - 50.0 * DAYS_PER_YEAR;
        let snap = snapshot(BIRTH, 0.0, query);
        assert_eq!(snap.periods.len(), 3);
        assert!(snap.periods[0].contains(query));
    }
}
