//! Cyclic proportional partitioning of a bounded span.
//!
//! KP ties spatial and temporal lordship to one weight table: the same
//! 9-lord Vimshottari sequence that divides a nakshatra into sub-lord
//! arcs also divides a dasha period into sub-periods. This module is
//! that single shared routine; both `lords` and `dasha` call into it
//! rather than carrying near-identical subdivision loops of their own.

use serde::Serialize;

use crate::graha::Graha;

/// The 9-lord Vimshottari sequence: Ketu, Shukra, Surya, Chandra,
/// Mangal, Rahu, Guru, Shani, Buddh.
pub const DASHA_LORDS: [Graha; 9] = [
    Graha::Ketu,
    Graha::Shukra,
    Graha::Surya,
    Graha::Chandra,
    Graha::Mangal,
    Graha::Rahu,
    Graha::Guru,
    Graha::Shani,
    Graha::Buddh,
];

/// Vimshottari weights in years, aligned with DASHA_LORDS. Sum = 120.
pub const DASHA_YEARS: [f64; 9] = [7.0, 20.0, 6.0, 10.0, 7.0, 18.0, 16.0, 19.0, 17.0];

/// Total of the weight table in years.
pub const CYCLE_YEARS: f64 = 120.0;

/// Weight (years) of a single lord in the Vimshottari table.
pub fn lord_years(graha: Graha) -> f64 {
    let pos = DASHA_LORDS
        .iter()
        .position(|&g| g == graha)
        .unwrap_or_default();
    DASHA_YEARS[pos]
}

/// The weight sequence rotated cyclically so it begins at `start`.
///
/// If `start` is not in the table (cannot happen for the 9 grahas),
/// the unrotated sequence is returned.
pub fn rotate_from(start: Graha) -> [(Graha, f64); 9] {
    let offset = DASHA_LORDS
        .iter()
        .position(|&g| g == start)
        .unwrap_or_default();
    let mut seq = [(Graha::Ketu, 0.0); 9];
    for (i, slot) in seq.iter_mut().enumerate() {
        let idx = (offset + i) % 9;
        *slot = (DASHA_LORDS[idx], DASHA_YEARS[idx]);
    }
    seq
}

/// One proportional sub-interval of a partitioned span.
#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
pub struct Segment {
    /// Ruling lord of this sub-interval.
    pub lord: Graha,
    /// Offset of the segment start from the span start.
    pub start: f64,
    /// Segment width; `width = span * weight / total_weight`.
    pub width: f64,
}

impl Segment {
    /// Offset of the segment end from the span start.
    pub fn end(&self) -> f64 {
        self.start + self.width
    }
}

/// Partition `span` into 9 contiguous segments proportional to the
/// weight sequence.
///
/// Boundaries are monotonically increasing and exactly cover the span:
/// the last segment end is snapped to `span` to absorb floating-point
/// drift, so there is never a gap or overlap at the far boundary.
pub fn proportional_segments(span: f64, sequence: &[(Graha, f64); 9]) -> [Segment; 9] {
    let total: f64 = sequence.iter().map(|&(_, w)| w).sum();
    let mut segments = [Segment {
        lord: Graha::Ketu,
        start: 0.0,
        width: 0.0,
    }; 9];

    let mut cursor = 0.0;
    for (i, &(lord, weight)) in sequence.iter().enumerate() {
        let width = span * weight / total;
        segments[i] = Segment {
            lord,
            start: cursor,
            width,
        };
        cursor += width;
    }

    // Snap the last boundary onto the span end.
    let last = &mut segments[8];
    last.width = span - last.start;
    segments
}

/// Find the segment containing position `pos` within a span of the
/// given length.
///
/// Containment is half-open `[start, end)` with an epsilon of
/// 1e-10 x span absorbing boundary round-off. Positions at or beyond
/// the far boundary clamp to the last segment; callers normalize
/// `pos` into `[0, span)` first, so the clamp only ever absorbs
/// floating-point noise.
pub fn locate(span: f64, segments: &[Segment; 9], pos: f64) -> usize {
    let eps = 1e-10 * span;
    for (i, seg) in segments.iter().enumerate() {
        if pos < seg.end() + eps {
            return i;
        }
    }
    segments.len() - 1
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::nakshatra::NAKSHATRA_SPAN;

    #[test]
    fn weight_table_sums_to_120() {
        let total: f64 = DASHA_YEARS.iter().sum();
        assert!((total - CYCLE_YEARS).abs() < 1e-12);
    }

    #[test]
    fn lord_years_lookup() {
        assert!((lord_years(Graha::Ketu) - 7.0).abs() < 1e-12);
        assert!((lord_years(Graha::Shukra) - 20.0).abs() < 1e-12);
        assert!((lord_years(Graha::Buddh) - 17.0).abs() < 1e-12);
    }

    #[test]
    fn rotation_starts_at_requested_lord() {
        let seq = rotate_from(Graha::Rahu);
        assert_eq!(seq[0].0, Graha::Rahu);
        assert_eq!(seq[1].0, Graha::Guru);
        assert_eq!(seq[8].0, Graha::Mangal);
    }

    #[test]
    fn rotation_identity_for_first_lord() {
        let seq = rotate_from(Graha::Ketu);
        for (i, &(g, w)) in seq.iter().enumerate() {
            assert_eq!(g, DASHA_LORDS[i]);
            assert!((w - DASHA_YEARS[i]).abs() < 1e-12);
        }
    }

    #[test]
    fn segments_cover_span_exactly() {
        let seq = rotate_from(Graha::Surya);
        let segs = proportional_segments(NAKSHATRA_SPAN, &seq);
        assert!(segs[0].start.abs() < 1e-15);
        assert!((segs[8].end() - NAKSHATRA_SPAN).abs() < 1e-12);
        for i in 1..9 {
            assert!(
                (segs[i].start - segs[i - 1].end()).abs() < 1e-12,
                "gap between segments {} and {i}",
                i - 1
            );
        }
    }

    #[test]
    fn segment_widths_proportional() {
        let seq = rotate_from(Graha::Ketu);
        let segs = proportional_segments(120.0, &seq);
        // With span = total weight, each width equals its weight.
        for (seg, &years) in segs.iter().zip(DASHA_YEARS.iter()) {
            assert!((seg.width - years).abs() < 1e-9);
        }
    }

    #[test]
    fn widths_sum_to_span() {
        for span in [NAKSHATRA_SPAN, 43829.1, 0.001] {
            let seq = rotate_from(Graha::Shani);
            let segs = proportional_segments(span, &seq);
            let sum: f64 = segs.iter().map(|s| s.width).sum();
            assert!((sum - span).abs() < 1e-9 * span.max(1.0));
        }
    }

    #[test]
    fn locate_start_is_first_segment() {
        let seq = rotate_from(Graha::Ketu);
        let segs = proportional_segments(NAKSHATRA_SPAN, &seq);
        assert_eq!(locate(NAKSHATRA_SPAN, &segs, 0.0), 0);
    }

    #[test]
    fn locate_every_position_exactly_once() {
        let seq = rotate_from(Graha::Chandra);
        let segs = proportional_segments(NAKSHATRA_SPAN, &seq);
        let mut pos = 0.0;
        while pos < NAKSHATRA_SPAN {
            let i = locate(NAKSHATRA_SPAN, &segs, pos);
            assert!(pos >= segs[i].start - 1e-9);
            assert!(pos < segs[i].end() + 1e-9);
            pos += 0.01;
        }
    }

    #[test]
    fn locate_clamps_at_far_boundary() {
        let seq = rotate_from(Graha::Ketu);
        let segs = proportional_segments(10.0, &seq);
        assert_eq!(locate(10.0, &segs, 10.0), 8);
    }
}
