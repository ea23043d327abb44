// crates/xtce-rs/src/builder/format.rs

//! Text renderings of numbers and durations used in attributes.

use core::fmt::Write;

/// Renders a float the way attribute values expect it (`1.0`, `0.25`).
pub fn format_float(value: f64) -> String {
    format!("{:?}", value)
}

/// Renders a number of seconds as an ISO 8601 duration.
///
/// Days are split off, hours wrap at 24 and minutes at 60. Seconds keep up
/// to six decimals and are written as an integer when whole. Zero becomes
/// `PT0S`.
pub fn iso_duration(seconds: f64) -> String {
    let days = (seconds / 86400.0).floor() as i64;
    let hours = ((seconds / 3600.0).floor() as i64).rem_euclid(24);
    let minutes = ((seconds / 60.0).floor() as i64).rem_euclid(60);
    let secs = (seconds.rem_euclid(60.0) * 1e6).round() / 1e6;

    let mut out = String::from("P");
    if days != 0 {
        let _ = write!(out, "{}D", days);
    }
    if hours != 0 || minutes != 0 || secs != 0.0 {
        out.push('T');
    }
    if seconds == 0.0 {
        out.push_str("T0S");
        return out;
    }
    if hours != 0 {
        let _ = write!(out, "{}H", hours);
    }
    if minutes != 0 {
        let _ = write!(out, "{}M", minutes);
    }
    if secs != 0.0 {
        if secs.fract() == 0.0 {
            let _ = write!(out, "{}S", secs as i64);
        } else {
            let _ = write!(out, "{}S", secs);
        }
    }
    out
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_zero_duration() {
        assert_eq!(iso_duration(0.0), "PT0S");
    }

    #[test]
    fn test_seconds_only() {
        assert_eq!(iso_duration(10.0), "PT10S");
        assert_eq!(iso_duration(1.5), "PT1.5S");
    }

    #[test]
    fn test_mixed_units() {
        assert_eq!(iso_duration(90.0), "PT1M30S");
        assert_eq!(iso_duration(3600.0), "PT1H");
        assert_eq!(iso_duration(3661.0), "PT1H1M1S");
        assert_eq!(iso_duration(86400.0), "P1D");
        assert_eq!(iso_duration(86401.0), "P1DT1S");
        assert_eq!(iso_duration(86461.0), "P1DT1M1S");
    }

    #[test]
    fn test_fraction_is_rounded_to_microseconds() {
        assert_eq!(iso_duration(0.1234567), "PT0.123457S");
    }

    #[test]
    fn test_float_format() {
        assert_eq!(format_float(1.0), "1.0");
        assert_eq!(format_float(-0.5), "-0.5");
    }
}
