//! Civil date <-> Julian Date conversion (proleptic Gregorian).
//!
//! Chart inputs and dasha periods are carried as JD in UT. The dasha
//! engine additionally uses a fixed 365.2425-day year, so period
//! arithmetic is pure interval arithmetic with no calendar lookups.

/// JD of the J2000.0 epoch (2000-01-01 12:00 UT).
pub const J2000_JD: f64 = 2_451_545.0;

/// Convert a Gregorian calendar date + UT time of day to Julian Date.
///
/// Meeus, *Astronomical Algorithms*, Chapter 7. Valid for all dates on
/// the Gregorian calendar.
pub fn calendar_to_jd(year: i32, month: u32, day: u32, hour: u32, minute: u32, second: f64) -> f64 {
    let (y, m) = if month <= 2 {
        (year - 1, month + 12)
    } else {
        (year, month)
    };
    let a = (y as f64 / 100.0).floor();
    let b = 2.0 - a + (a / 4.0).floor();
    let day_frac =
        day as f64 + (hour as f64 + minute as f64 / 60.0 + second / 3600.0) / 24.0;
    (365.25 * (y as f64 + 4716.0)).floor() + (30.6001 * (m as f64 + 1.0)).floor() + day_frac + b
        - 1524.5
}

/// Convert a Julian Date back to a Gregorian calendar date + UT time.
///
/// Returns `(year, month, day, hour, minute, second)`.
pub fn jd_to_calendar(jd: f64) -> (i32, u32, u32, u32, u32, f64) {
    let z = (jd + 0.5).floor();
    let f = jd + 0.5 - z;
    let alpha = ((z - 1_867_216.25) / 36_524.25).floor();
    let a = z + 1.0 + alpha - (alpha / 4.0).floor();
    let b = a + 1524.0;
    let c = ((b - 122.1) / 365.25).floor();
    let d = (365.25 * c).floor();
    let e = ((b - d) / 30.6001).floor();

    let day_frac = b - d - (30.6001 * e).floor() + f;
    let day = day_frac.floor();
    let month = if e < 14.0 { e - 1.0 } else { e - 13.0 };
    let year = if month > 2.0 { c - 4716.0 } else { c - 4715.0 };

    let mut rem_h = (day_frac - day) * 24.0;
    // Guard against -0.0000001 style round-off at midnight
    if rem_h < 0.0 {
        rem_h = 0.0;
    }
    let hour = rem_h.floor();
    let rem_m = (rem_h - hour) * 60.0;
    let minute = rem_m.floor();
    let second = (rem_m - minute) * 60.0;

    (
        year as i32,
        month as u32,
        day as u32,
        hour as u32,
        minute as u32,
        second,
    )
}

/// Format the date part of a JD as "YYYY-MM-DD" (for dasha tables).
pub fn jd_to_date_string(jd: f64) -> String {
    let (y, m, d, _, _, _) = jd_to_calendar(jd);
    format!("{y:04}-{m:02}-{d:02}")
}
