//! Footer date computation. The current time is always passed in.

use chrono::{DateTime, Datelike, TimeZone};

/// Calendar year of `now` in its own time zone.
pub fn copyright_year<Tz: TimeZone>(now: &DateTime<Tz>) -> i32 {
    now.year()
}

/// `© {year} {holder}. {rights}`
pub fn copyright_line(year: i32, holder: &str, rights: &str) -> String {
    format!("© {year} {holder}. {rights}")
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::{FixedOffset, Utc};

    #[test]
    fn year_follows_the_supplied_zone() {
        // 02:30 UTC on Jan 1st is still Dec 31st in São Paulo (UTC-3).
        let utc = Utc.with_ymd_and_hms(2026, 1, 1, 2, 30, 0).unwrap();
        let sao_paulo = utc.with_timezone(&FixedOffset::west_opt(3 * 3600).unwrap());

        assert_eq!(copyright_year(&utc), 2026);
        assert_eq!(copyright_year(&sao_paulo), 2025);
    }

    #[test]
    fn formats_copyright_line() {
        assert_eq!(
            copyright_line(2025, "A ARTE DOS INCENSOS ARTESANAIS", "TODOS OS DIREITOS RESERVADOS."),
            "© 2025 A ARTE DOS INCENSOS ARTESANAIS. TODOS OS DIREITOS RESERVADOS."
        );
    }
}
