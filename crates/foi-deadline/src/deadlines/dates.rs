use super::calculator::DeadlineError;
use chrono::{DateTime, NaiveDate};

pub const CALENDAR_DATE_FORMAT: &str = "%Y-%m-%d";

/// Parse caller-supplied text into a calendar date.
///
/// Accepts `YYYY-MM-DD` or an RFC 3339 timestamp, in which case the date is taken
/// as written and the offset is ignored.
pub fn parse_calendar_date(raw: &str) -> Result<NaiveDate, DeadlineError> {
    let trimmed = raw.trim();
    if trimmed.is_empty() {
        return Err(invalid(raw, "value is empty"));
    }

    match NaiveDate::parse_from_str(trimmed, CALENDAR_DATE_FORMAT) {
        Ok(date) => Ok(date),
        Err(date_err) => DateTime::parse_from_rfc3339(trimmed)
            .map(|timestamp| timestamp.date_naive())
            .map_err(|_| invalid(raw, &format!("expected YYYY-MM-DD ({date_err})"))),
    }
}

pub fn format_calendar_date(date: NaiveDate) -> String {
    date.format(CALENDAR_DATE_FORMAT).to_string()
}

fn invalid(raw: &str, reason: &str) -> DeadlineError {
    DeadlineError::InvalidDate {
        value: raw.to_string(),
        reason: reason.to_string(),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn parses_plain_dates_with_whitespace() {
        let date = parse_calendar_date(" 2024-02-29 ").expect("leap day parses");
        assert_eq!(date, NaiveDate::from_ymd_opt(2024, 2, 29).expect("valid date"));
    }

    #[test]
    fn timestamps_keep_the_written_date() {
        let date = parse_calendar_date("2024-03-04T23:30:00-05:00").expect("timestamp parses");
        assert_eq!(date, NaiveDate::from_ymd_opt(2024, 3, 4).expect("valid date"));
    }

    #[test]
    fn rejects_impossible_and_malformed_dates() {
        for raw in ["2023-02-29", "2024-13-01", "04/03/2024", "tomorrow", "   "] {
            let err = parse_calendar_date(raw).expect_err("input should be rejected");
            assert!(
                matches!(&err, DeadlineError::InvalidDate { value, .. } if value == raw),
                "unexpected error for {raw}: {err}"
            );
        }
    }

    #[test]
    fn formats_canonically() {
        let date = NaiveDate::from_ymd_opt(2024, 4, 5).expect("valid date");
        assert_eq!(format_calendar_date(date), "2024-04-05");
    }
}
