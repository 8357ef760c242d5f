use crate::deadlines::{DeadlineError, DeadlineStanding, Jurisdiction};
use chrono::NaiveDate;
use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

/// Identifier wrapper for tracked requests.
#[derive(Debug, Clone, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
pub struct RequestId(pub String);

impl fmt::Display for RequestId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum RequestStatus {
    Submitted,
    Received,
    Appealed,
    Fulfilled,
    Denied,
}

impl RequestStatus {
    pub const fn ordered() -> [Self; 5] {
        [
            Self::Submitted,
            Self::Received,
            Self::Appealed,
            Self::Fulfilled,
            Self::Denied,
        ]
    }

    pub const fn code(self) -> &'static str {
        match self {
            Self::Submitted => "submitted",
            Self::Received => "received",
            Self::Appealed => "appealed",
            Self::Fulfilled => "fulfilled",
            Self::Denied => "denied",
        }
    }

    pub const fn label(self) -> &'static str {
        match self {
            Self::Submitted => "Submitted",
            Self::Received => "Received",
            Self::Appealed => "Appealed",
            Self::Fulfilled => "Fulfilled",
            Self::Denied => "Denied",
        }
    }

    /// Fulfilled and denied requests no longer run against their deadline.
    pub const fn is_open(self) -> bool {
        !matches!(self, Self::Fulfilled | Self::Denied)
    }
}

impl FromStr for RequestStatus {
    type Err = RequestError;

    fn from_str(value: &str) -> Result<Self, Self::Err> {
        let normalized = value.trim().to_ascii_lowercase();
        Self::ordered()
            .into_iter()
            .find(|status| status.code() == normalized)
            .ok_or_else(|| RequestError::UnknownStatus(value.trim().to_string()))
    }
}

/// Fields a requester supplies when logging a new FOI request.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct NewFoiRequest {
    pub title: String,
    pub agency: String,
    pub jurisdiction: Jurisdiction,
    pub submitted_date: NaiveDate,
}

/// Partial update applied when an agency responds or the requester appeals.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct RequestUpdate {
    #[serde(default)]
    pub status: Option<RequestStatus>,
    #[serde(default)]
    pub response_date: Option<NaiveDate>,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct FoiRequest {
    pub id: RequestId,
    pub title: String,
    pub agency: String,
    pub jurisdiction: Jurisdiction,
    pub status: RequestStatus,
    pub submitted_date: NaiveDate,
    pub deadline_date: NaiveDate,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub response_date: Option<NaiveDate>,
}

impl FoiRequest {
    /// Validate a new submission and stamp it with its statutory deadline.
    pub fn create(id: RequestId, draft: NewFoiRequest) -> Result<Self, RequestError> {
        let title = required(draft.title, "title")?;
        let agency = required(draft.agency, "agency")?;
        let deadline_date = draft.jurisdiction.deadline_from(draft.submitted_date)?;

        Ok(Self {
            id,
            title,
            agency,
            jurisdiction: draft.jurisdiction,
            status: RequestStatus::Submitted,
            submitted_date: draft.submitted_date,
            deadline_date,
            response_date: None,
        })
    }

    pub fn apply(&mut self, update: RequestUpdate) -> Result<(), RequestError> {
        if let Some(response_date) = update.response_date {
            if response_date < self.submitted_date {
                return Err(RequestError::ResponseBeforeSubmission {
                    response_date,
                    submitted_date: self.submitted_date,
                });
            }
            self.response_date = Some(response_date);
        }

        if let Some(status) = update.status {
            self.status = status;
        }

        Ok(())
    }

    pub fn standing(&self, today: NaiveDate) -> DeadlineStanding {
        DeadlineStanding::evaluate(self.deadline_date, today)
    }
}

fn required(value: String, field: &'static str) -> Result<String, RequestError> {
    let trimmed = value.trim();
    if trimmed.is_empty() {
        return Err(RequestError::MissingField(field));
    }
    Ok(trimmed.to_string())
}

#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum RequestError {
    #[error("{0} is required")]
    MissingField(&'static str),
    #[error("unknown request status '{0}'")]
    UnknownStatus(String),
    #[error("response date {response_date} precedes submission date {submitted_date}")]
    ResponseBeforeSubmission {
        response_date: NaiveDate,
        submitted_date: NaiveDate,
    },
    #[error("deadline {deadline_date} precedes submission date {submitted_date}")]
    DeadlineBeforeSubmission {
        deadline_date: NaiveDate,
        submitted_date: NaiveDate,
    },
    #[error(transparent)]
    Deadline(#[from] DeadlineError),
}
