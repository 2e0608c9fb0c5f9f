//! Shared angle utilities for KP calculations.

/// Normalize an angle to [0, 360) degrees.
pub fn normalize_360(deg: f64) -> f64 {
    let r = deg % 360.0;
    if r < 0.0 { r + 360.0 } else { r }
}

/// Shortest-arc angular distance between two longitudes, in [0, 180].
pub fn angular_distance(lon_a: f64, lon_b: f64) -> f64 {
    let diff = (normalize_360(lon_a) - normalize_360(lon_b)).abs();
    if diff > 180.0 { 360.0 - diff } else { diff }
}

/// Format a longitude as degrees-minutes-seconds within its sign,
/// e.g. 95.5 -> "05°30′00.00″".
///
/// Rounding happens at the displayed precision before the split, so
/// 59.9999 seconds carries into the minute rather than printing as
/// "60.00"; a carry past 29°59′59.995″ wraps to the next sign's zero.
pub fn dms_in_sign(lon_deg: f64) -> String {
    let deg_in_sign = normalize_360(lon_deg) % 30.0;
    let total_centisec = (deg_in_sign * 3600.0 * 100.0).round() as u64;
    let s = (total_centisec % 6000) as f64 / 100.0;
    let total_min = total_centisec / 6000;
    let m = total_min % 60;
    let d = (total_min / 60) % 30;
    format!("{d:02}\u{00b0}{m:02}\u{2032}{s:05.2}\u{2033}")
}
