//! Footer copyright year.

use chrono::Datelike;

/// Year shown in the footer's `#year` span.
pub fn copyright_year(now: &impl Datelike) -> String {
    now.year().to_string()
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::NaiveDate;

    #[test]
    fn renders_calendar_year() {
        let date = NaiveDate::from_ymd_opt(2026, 10, 19).unwrap();
        assert_eq!(copyright_year(&date), "2026");
    }
}
