//! Birth details as submitted by the caller, and their conversion to a
//! calendar instant.
//!
//! Date and time arrive as strings from a form-like surface. They are
//! validated here in full: a string that does not parse is rejected
//! with [`ChartError::InvalidInstant`] before any astronomy runs.

use jatak_eph::UtcTime;

use crate::error::ChartError;

/// Gender of the subject. Carried through to consumers unchanged; no
/// computation in this engine reads it.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Gender {
    Male,
    Female,
    Other,
}

/// Immutable birth details for one chart request.
#[derive(Debug, Clone, PartialEq)]
pub struct BirthInput {
    /// Birth date, `YYYY-MM-DD`.
    pub date: String,
    /// Local clock time, `HH:MM` with an optional `AM`/`PM` suffix.
    pub time: String,
    pub gender: Gender,
    /// Place name, display only.
    pub place: String,
    /// Geographic latitude, degrees, north positive.
    pub latitude_deg: f64,
    /// Geographic longitude, degrees, east positive.
    pub longitude_deg: f64,
}

impl BirthInput {
    /// Parse the date and time strings into a calendar instant.
    pub fn birth_instant(&self) -> Result<UtcTime, ChartError> {
        let (year, month, day) = parse_date(&self.date)?;
        let (hour, minute) = parse_time(&self.time)?;
        Ok(UtcTime::new(year, month, day, hour, minute, 0.0))
    }
}

/// Parse `YYYY-MM-DD`.
fn parse_date(s: &str) -> Result<(i32, u32, u32), ChartError> {
    let mut parts = s.trim().splitn(3, '-');
    let year: i32 = parts
        .next()
        .and_then(|p| p.parse().ok())
        .ok_or(ChartError::InvalidInstant("unparseable year"))?;
    let month: u32 = parts
        .next()
        .and_then(|p| p.parse().ok())
        .ok_or(ChartError::InvalidInstant("unparseable month"))?;
    let day: u32 = parts
        .next()
        .and_then(|p| p.parse().ok())
        .ok_or(ChartError::InvalidInstant("unparseable day"))?;
    if !(1..=12).contains(&month) {
        return Err(ChartError::InvalidInstant("month out of range"));
    }
    if !(1..=31).contains(&day) {
        return Err(ChartError::InvalidInstant("day out of range"));
    }
    Ok((year, month, day))
}

/// Parse `HH:MM`, tolerating a trailing `AM`/`PM` marker (with or
/// without a separating space) and a 1-digit hour.
fn parse_time(s: &str) -> Result<(u32, u32), ChartError> {
    let s = s.trim();
    let upper = s.to_ascii_uppercase();
    let (clock, meridiem) = if let Some(rest) = upper.strip_suffix("AM") {
        (rest.trim_end().to_owned(), Some(Meridiem::Am))
    } else if let Some(rest) = upper.strip_suffix("PM") {
        (rest.trim_end().to_owned(), Some(Meridiem::Pm))
    } else {
        (upper, None)
    };

    let (h, m) = clock
        .split_once(':')
        .ok_or(ChartError::InvalidInstant("time missing ':' separator"))?;
    let hour: u32 = h
        .trim()
        .parse()
        .map_err(|_| ChartError::InvalidInstant("unparseable hour"))?;
    let minute: u32 = m
        .trim()
        .parse()
        .map_err(|_| ChartError::InvalidInstant("unparseable minute"))?;
    if minute >= 60 {
        return Err(ChartError::InvalidInstant("minute out of range"));
    }

    let hour = match meridiem {
        Some(mer) => {
            if !(1..=12).contains(&hour) {
                return Err(ChartError::InvalidInstant("12-hour clock hour out of range"));
            }
            match mer {
                Meridiem::Pm if hour < 12 => hour + 12,
                Meridiem::Am if hour == 12 => 0,
                _ => hour,
            }
        }
        None => {
            if hour >= 24 {
                return Err(ChartError::InvalidInstant("hour out of range"));
            }
            hour
        }
    };
    Ok((hour, minute))
}

#[derive(Clone, Copy)]
enum Meridiem {
    Am,
    Pm,
}

#[cfg(test)]
mod tests {
    use super::*;

    fn input(date: &str, time: &str) -> BirthInput {
        BirthInput {
            date: date.to_owned(),
            time: time.to_owned(),
            gender: Gender::Other,
            place: String::from("London"),
            latitude_deg: 51.5074,
            longitude_deg: -0.1278,
        }
    }

    #[test]
    fn twenty_four_hour_clock() {
        let t = input("2000-01-01", "12:00").birth_instant().unwrap();
        assert_eq!((t.year, t.month, t.day), (2000, 1, 1));
        assert_eq!((t.hour, t.minute), (12, 0));
    }

    #[test]
    fn pm_suffix_shifts_afternoon_hours() {
        let t = input("1990-06-15", "6:30 PM").birth_instant().unwrap();
        assert_eq!((t.hour, t.minute), (18, 30));
    }

    #[test]
    fn noon_and_midnight_markers() {
        let noon = input("1990-06-15", "12:00PM").birth_instant().unwrap();
        assert_eq!(noon.hour, 12);
        let midnight = input("1990-06-15", "12:00 am").birth_instant().unwrap();
        assert_eq!(midnight.hour, 0);
    }

    #[test]
    fn am_before_noon_is_unchanged() {
        let t = input("1990-06-15", "9:05 AM").birth_instant().unwrap();
        assert_eq!((t.hour, t.minute), (9, 5));
    }

    #[test]
    fn garbage_time_is_rejected() {
        for bad in ["banana", "25:00", "12:60", "1200", "13:00 PM", ""] {
            let err = input("2000-01-01", bad).birth_instant();
            assert!(
                matches!(err, Err(ChartError::InvalidInstant(_))),
                "time {bad:?} should be rejected"
            );
        }
    }

    #[test]
    fn garbage_date_is_rejected() {
        for bad in ["yesterday", "2000-13-01", "2000-01-32", "2000-01", ""] {
            let err = input(bad, "12:00").birth_instant();
            assert!(
                matches!(err, Err(ChartError::InvalidInstant(_))),
                "date {bad:?} should be rejected"
            );
        }
    }
}
