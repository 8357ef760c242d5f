use chrono::{Local, NaiveDate};
use foi_deadline::deadlines::{parse_calendar_date, Jurisdiction};
use foi_deadline::error::AppError;
use foi_deadline::tracking::RequestStatus;
use serde::Serialize;

pub(crate) fn parse_date(raw: &str) -> Result<NaiveDate, String> {
    parse_calendar_date(raw).map_err(|err| err.to_string())
}

pub(crate) fn parse_jurisdiction(raw: &str) -> Result<Jurisdiction, String> {
    raw.parse::<Jurisdiction>().map_err(|err| {
        let known: Vec<_> = Jurisdiction::ordered()
            .into_iter()
            .map(Jurisdiction::code)
            .collect();
        format!("{err} (expected one of: {})", known.join(", "))
    })
}

pub(crate) fn parse_status(raw: &str) -> Result<RequestStatus, String> {
    raw.parse::<RequestStatus>().map_err(|err| err.to_string())
}

pub(crate) fn today_or_local(today: Option<NaiveDate>) -> NaiveDate {
    today.unwrap_or_else(|| Local::now().date_naive())
}

pub(crate) fn to_pretty_json<T: Serialize>(value: &T) -> Result<String, AppError> {
    serde_json::to_string_pretty(value).map_err(|err| AppError::Output(err.to_string()))
}
