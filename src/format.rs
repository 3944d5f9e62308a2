//! Display formatting for Colombian pesos and timestamps. No state.

use chrono::{DateTime, NaiveDateTime, TimeZone, Utc};

/// Whole-peso display with `.` thousands grouping, e.g. `$ 1.234.567`.
pub fn format_cop(amount: f64) -> String {
    let whole = amount.abs().round() as i64;
    let grouped = group_thousands(&whole.to_string());
    if amount < 0.0 {
        format!("-$ {}", grouped)
    } else {
        format!("$ {}", grouped)
    }
}

pub fn format_cop_i64(amount: i64) -> String {
    let grouped = group_thousands(&amount.abs().to_string());
    if amount < 0 {
        format!("-$ {}", grouped)
    } else {
        format!("$ {}", grouped)
    }
}

fn group_thousands(digits: &str) -> String {
    let len = digits.len();
    let mut out = String::new();
    for (i, c) in digits.chars().enumerate() {
        if i > 0 && (len - i) % 3 == 0 {
            out.push('.');
        }
        out.push(c);
    }
    out
}

pub fn format_date(dt: &DateTime<Utc>) -> String {
    dt.format("%d/%m/%Y").to_string()
}

pub fn format_datetime(dt: &DateTime<Utc>) -> String {
    dt.format("%d/%m/%Y %H:%M").to_string()
}

/// Value for an `<input type="datetime-local">`.
pub fn datetime_local_value(dt: &DateTime<Utc>) -> String {
    dt.format("%Y-%m-%dT%H:%M").to_string()
}

/// Parse a `datetime-local` input back to an absolute timestamp.
/// Accepts values with or without seconds.
pub fn parse_datetime_local(s: &str) -> Option<DateTime<Utc>> {
    let s = s.trim();
    if s.is_empty() {
        return None;
    }
    let naive = NaiveDateTime::parse_from_str(s, "%Y-%m-%dT%H:%M:%S")
        .or_else(|_| NaiveDateTime::parse_from_str(s, "%Y-%m-%dT%H:%M"))
        .ok()?;
    Some(Utc.from_utc_datetime(&naive))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn cop_grouping() {
        assert_eq!(format_cop(0.0), "$ 0");
        assert_eq!(format_cop(256_000.0), "$ 256.000");
        assert_eq!(format_cop(1_234_567.0), "$ 1.234.567");
        assert_eq!(format_cop(-1_234.0), "-$ 1.234");
        assert_eq!(format_cop(999.6), "$ 1.000");
        assert_eq!(format_cop_i64(50), "$ 50");
    }

    #[test]
    fn datetime_local_roundtrip() {
        let dt = Utc.with_ymd_and_hms(2026, 8, 25, 10, 30, 0).unwrap();
        let value = datetime_local_value(&dt);
        assert_eq!(value, "2026-08-25T10:30");
        assert_eq!(parse_datetime_local(&value), Some(dt));
        assert_eq!(parse_datetime_local("2026-08-25T10:30:00"), Some(dt));
        assert_eq!(parse_datetime_local(""), None);
        assert_eq!(parse_datetime_local("not a date"), None);
    }
}
