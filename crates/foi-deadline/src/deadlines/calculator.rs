use super::jurisdiction::{Jurisdiction, JurisdictionPolicy, JurisdictionRegistry, PeriodUnit};
use chrono::{Datelike, Days, NaiveDate, Weekday};

/// Input validation failures surfaced to callers of the deadline engine.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum DeadlineError {
    #[error("unknown jurisdiction '{0}'")]
    UnknownJurisdiction(String),
    #[error("invalid date '{value}': {reason}")]
    InvalidDate { value: String, reason: String },
    #[error("deadline for {submitted} falls outside the supported calendar range")]
    DateOutOfRange { submitted: NaiveDate },
}

/// Resolve the response deadline for a request submitted on `submitted` under `jurisdiction_code`.
pub fn compute_deadline(
    submitted: NaiveDate,
    jurisdiction_code: &str,
) -> Result<NaiveDate, DeadlineError> {
    let policy = JurisdictionRegistry::lookup(jurisdiction_code)?;
    deadline_for_policy(submitted, policy)
}

impl Jurisdiction {
    pub fn deadline_from(self, submitted: NaiveDate) -> Result<NaiveDate, DeadlineError> {
        deadline_for_policy(submitted, self.policy())
    }
}

pub(crate) fn deadline_for_policy(
    submitted: NaiveDate,
    policy: &JurisdictionPolicy,
) -> Result<NaiveDate, DeadlineError> {
    let deadline = match policy.period_unit {
        PeriodUnit::BusinessDays => add_business_days(submitted, policy.period_length),
        PeriodUnit::CalendarDays => {
            submitted.checked_add_days(Days::new(u64::from(policy.period_length)))
        }
    };

    deadline.ok_or(DeadlineError::DateOutOfRange { submitted })
}

pub fn is_business_day(date: NaiveDate) -> bool {
    !matches!(date.weekday(), Weekday::Sat | Weekday::Sun)
}

/// Walks forward from `start`, counting only weekdays after it; `start` itself never counts.
pub fn add_business_days(start: NaiveDate, business_days: u32) -> Option<NaiveDate> {
    let mut current = start;
    let mut counted = 0;

    while counted < business_days {
        current = current.succ_opt()?;
        if is_business_day(current) {
            counted += 1;
        }
    }

    Some(current)
}
