//! UTC calendar date/time and Julian Date conversion.
//!
//! `UtcTime` is the canonical instant representation at the API surface;
//! internally everything runs on Julian Dates (f64 days).

/// Julian Date of the J2000.0 epoch (2000-01-01 12:00 TT; the TT/UTC
/// distinction is irrelevant at this engine's accuracy).
pub const J2000_JD: f64 = 2_451_545.0;

/// Advance a Julian Date by a number of (possibly fractional) days.
pub fn advance_jd(jd: f64, delta_days: f64) -> f64 {
    jd + delta_days
}

/// UTC calendar date with sub-second precision.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct UtcTime {
    pub year: i32,
    pub month: u32,
    pub day: u32,
    pub hour: u32,
    pub minute: u32,
    pub second: f64,
}

impl UtcTime {
    pub fn new(year: i32, month: u32, day: u32, hour: u32, minute: u32, second: f64) -> Self {
        Self {
            year,
            month,
            day,
            hour,
            minute,
            second,
        }
    }

    /// Julian Date of this calendar instant (Meeus algorithm, valid for
    /// Gregorian dates).
    pub fn to_jd(&self) -> f64 {
        let y = self.year as f64;
        let m = self.month as f64;
        let d = self.day as f64
            + self.hour as f64 / 24.0
            + self.minute as f64 / 1440.0
            + self.second / 86_400.0;

        let (y2, m2) = if m <= 2.0 { (y - 1.0, m + 12.0) } else { (y, m) };
        let a = (y2 / 100.0).floor();
        let b = 2.0 - a + (a / 4.0).floor();

        (365.25 * (y2 + 4716.0)).floor() + (30.6001 * (m2 + 1.0)).floor() + d + b - 1524.5
    }

    /// Calendar instant of a Julian Date (inverse of [`Self::to_jd`]).
    pub fn from_jd(jd: f64) -> Self {
        let z = (jd + 0.5).floor();
        let f = jd + 0.5 - z;

        let a = if z < 2_299_161.0 {
            z
        } else {
            let alpha = ((z - 1_867_216.25) / 36_524.25).floor();
            z + 1.0 + alpha - (alpha / 4.0).floor()
        };
        let b = a + 1524.0;
        let c = ((b - 122.1) / 365.25).floor();
        let d = (365.25 * c).floor();
        let e = ((b - d) / 30.6001).floor();

        let day_frac = b - d - (30.6001 * e).floor() + f;
        let day = day_frac.floor();
        let month = if e < 14.0 { e - 1.0 } else { e - 13.0 };
        let year = if month > 2.0 { c - 4716.0 } else { c - 4715.0 };

        let frac = day_frac - day;
        let total_seconds = frac * 86_400.0;
        let hour = (total_seconds / 3600.0).floor() as u32;
        let minute = ((total_seconds % 3600.0) / 60.0).floor() as u32;
        let second = total_seconds % 60.0;

        Self {
            year: year as i32,
            month: month as u32,
            day: day as u32,
            hour,
            minute,
            second,
        }
    }
}

impl std::fmt::Display for UtcTime {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        let whole = self.second as u32;
        let frac = self.second - whole as f64;
        if frac.abs() < 1e-9 {
            write!(
                f,
                "{:04}-{:02}-{:02}T{:02}:{:02}:{:02}Z",
                self.year, self.month, self.day, self.hour, self.minute, whole
            )
        } else {
            write!(
                f,
                "{:04}-{:02}-{:02}T{:02}:{:02}:{:09.6}Z",
                self.year, self.month, self.day, self.hour, self.minute, self.second
            )
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn j2000_noon() {
        let t = UtcTime::new(2000, 1, 1, 12, 0, 0.0);
        assert!((t.to_jd() - J2000_JD).abs() < 1e-9);
    }

    #[test]
    fn known_epoch_1990() {
        // Meeus example-adjacent: 1990-01-15 06:30 UT
        let t = UtcTime::new(1990, 1, 15, 6, 30, 0.0);
        let jd = t.to_jd();
        assert!((jd - 2_447_906.770_833_333).abs() < 1e-6, "jd = {jd}");
    }

    #[test]
    fn roundtrip_through_jd() {
        let t = UtcTime::new(2024, 6, 1, 18, 45, 30.0);
        let back = UtcTime::from_jd(t.to_jd());
        assert_eq!(back.year, 2024);
        assert_eq!(back.month, 6);
        assert_eq!(back.day, 1);
        assert_eq!(back.hour, 18);
        assert_eq!(back.minute, 45);
        assert!((back.second - 30.0).abs() < 1e-4);
    }

    #[test]
    fn advance_whole_and_fractional() {
        let jd = J2000_JD;
        assert!((advance_jd(jd, 1.0) - (jd + 1.0)).abs() < 1e-12);
        assert!((advance_jd(jd, 1.0 / 1440.0) - (jd + 1.0 / 1440.0)).abs() < 1e-12);
    }

    #[test]
    fn display_whole_seconds() {
        let t = UtcTime::new(2024, 1, 15, 0, 0, 0.0);
        assert_eq!(t.to_string(), "2024-01-15T00:00:00Z");
    }
}
