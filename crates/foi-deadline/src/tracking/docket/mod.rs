//! Batch view over a requester's docket of FOI requests.
//!
//! Rows are imported from a CSV export, deadlines are filled in by the engine when the
//! export does not carry them, and the report groups requests by urgency.

mod parser;
mod report;

use super::request::{
    FoiRequest, NewFoiRequest, RequestError, RequestId, RequestStatus, RequestUpdate,
};
use crate::deadlines::{parse_calendar_date, Jurisdiction};
use std::collections::HashSet;
use std::io::Read;
use std::path::Path;

use parser::DocketRow;

pub use report::{
    DocketEntryView, DocketFilter, DocketReport, DueReminderView, JurisdictionLoadEntry,
    UrgencyCountEntry,
};

#[derive(Debug, thiserror::Error)]
pub enum DocketImportError {
    #[error("failed to read docket export: {0}")]
    Io(#[from] std::io::Error),
    #[error("invalid docket CSV data: {0}")]
    Csv(#[from] csv::Error),
    #[error("docket row {row}: {source}")]
    Row { row: usize, source: RequestError },
    #[error("docket row {row}: duplicate request id '{id}'")]
    DuplicateId { row: usize, id: String },
}

pub struct DocketImporter;

impl DocketImporter {
    pub fn from_path<P: AsRef<Path>>(path: P) -> Result<Vec<FoiRequest>, DocketImportError> {
        let file = std::fs::File::open(path)?;
        Self::from_reader(file)
    }

    pub fn from_reader<R: Read>(reader: R) -> Result<Vec<FoiRequest>, DocketImportError> {
        let rows = parser::parse_rows(reader)?;
        let mut seen = HashSet::new();
        let mut requests = Vec::with_capacity(rows.len());

        for (index, row) in rows.into_iter().enumerate() {
            let row_number = index + 1;
            let request = request_from_row(row).map_err(|source| DocketImportError::Row {
                row: row_number,
                source,
            })?;

            if !seen.insert(request.id.clone()) {
                return Err(DocketImportError::DuplicateId {
                    row: row_number,
                    id: request.id.0,
                });
            }
            requests.push(request);
        }

        Ok(requests)
    }
}

fn request_from_row(row: DocketRow) -> Result<FoiRequest, RequestError> {
    if row.id.trim().is_empty() {
        return Err(RequestError::MissingField("id"));
    }

    let jurisdiction = Jurisdiction::from_code(&row.jurisdiction)?;
    let submitted_date = parse_calendar_date(&row.submitted_date)?;
    let mut request = FoiRequest::create(
        RequestId(row.id.trim().to_string()),
        NewFoiRequest {
            title: row.title,
            agency: row.agency,
            jurisdiction,
            submitted_date,
        },
    )?;

    if let Some(raw) = row.deadline_date.as_deref() {
        let stored = parse_calendar_date(raw)?;
        if stored < submitted_date {
            return Err(RequestError::DeadlineBeforeSubmission {
                deadline_date: stored,
                submitted_date,
            });
        }
        request.deadline_date = stored;
    }

    let status = row.status.as_deref().map(str::parse::<RequestStatus>).transpose()?;
    let response_date = row
        .response_date
        .as_deref()
        .map(parse_calendar_date)
        .transpose()?;
    request.apply(RequestUpdate {
        status,
        response_date,
    })?;

    Ok(request)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::deadlines::DeadlineError;
    use chrono::NaiveDate;

    const HEADER: &str =
        "id,title,agency,jurisdiction,status,submitted_date,deadline_date,response_date\n";

    fn date(year: i32, month: u32, day: u32) -> NaiveDate {
        NaiveDate::from_ymd_opt(year, month, day).expect("valid test date")
    }

    fn import(body: &str) -> Result<Vec<FoiRequest>, DocketImportError> {
        DocketImporter::from_reader(format!("{HEADER}{body}").as_bytes())
    }

    #[test]
    fn computes_missing_deadlines_and_keeps_stored_ones() {
        let requests = import(
            "foi-1,Transit memo,Metrolinx,ontario,received,2024-03-04,,\n\
             foi-2,Audit file,CRA,federal,,2024-03-04,2024-04-10,\n",
        )
        .expect("docket imports");

        assert_eq!(requests[0].deadline_date, date(2024, 4, 15));
        assert_eq!(requests[0].status, RequestStatus::Received);
        assert_eq!(requests[1].deadline_date, date(2024, 4, 10));
        assert_eq!(requests[1].status, RequestStatus::Submitted);
    }

    #[test]
    fn response_dates_are_applied() {
        let requests = import("foi-1,Transit memo,Metrolinx,ontario,fulfilled,2024-03-04,,2024-04-02\n")
            .expect("docket imports");
        assert_eq!(requests[0].response_date, Some(date(2024, 4, 2)));
    }

    #[test]
    fn unknown_jurisdiction_reports_its_row() {
        let err = import(
            "foi-1,Transit memo,Metrolinx,ontario,,2024-03-04,,\n\
             foi-2,Harbour study,Port Authority,atlantis,,2024-03-04,,\n",
        )
        .expect_err("unknown jurisdiction rejected");

        match err {
            DocketImportError::Row { row, source } => {
                assert_eq!(row, 2);
                assert_eq!(
                    source,
                    RequestError::Deadline(DeadlineError::UnknownJurisdiction("atlantis".into()))
                );
            }
            other => panic!("unexpected error: {other}"),
        }
    }

    #[test]
    fn malformed_submission_date_is_invalid_date() {
        let err = import("foi-1,Transit memo,Metrolinx,ontario,,March 4,,\n")
            .expect_err("bad date rejected");
        assert!(matches!(
            err,
            DocketImportError::Row {
                row: 1,
                source: RequestError::Deadline(DeadlineError::InvalidDate { .. })
            }
        ));
    }

    #[test]
    fn stored_deadline_before_submission_is_rejected() {
        let err = import("foi-1,Transit memo,Metrolinx,ontario,,2024-03-04,2024-03-01,\n")
            .expect_err("inverted deadline rejected");
        assert!(matches!(
            err,
            DocketImportError::Row {
                source: RequestError::DeadlineBeforeSubmission { .. },
                ..
            }
        ));
    }

    #[test]
    fn duplicate_ids_are_rejected() {
        let err = import(
            "foi-1,Transit memo,Metrolinx,ontario,,2024-03-04,,\n\
             foi-1,Audit file,CRA,federal,,2024-03-04,,\n",
        )
        .expect_err("duplicate rejected");
        assert!(matches!(err, DocketImportError::DuplicateId { row: 2, .. }));
    }
}
