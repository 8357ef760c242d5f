use chrono::NaiveDate;
use serde::{Deserialize, Serialize};

/// Deadlines this many days out (inclusive) or fewer are due soon.
pub const DUE_SOON_WINDOW_DAYS: i64 = 7;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum UrgencyStatus {
    Overdue,
    DueSoon,
    OnTrack,
}

impl UrgencyStatus {
    pub const fn ordered() -> [Self; 3] {
        [Self::Overdue, Self::DueSoon, Self::OnTrack]
    }

    pub const fn label(self) -> &'static str {
        match self {
            Self::Overdue => "Overdue",
            Self::DueSoon => "Due Soon",
            Self::OnTrack => "On Track",
        }
    }
}

/// Whole calendar days from `today` to `deadline`; negative once the deadline has passed.
pub fn days_until(deadline: NaiveDate, today: NaiveDate) -> i64 {
    deadline.signed_duration_since(today).num_days()
}

pub fn classify(deadline: NaiveDate, today: NaiveDate) -> UrgencyStatus {
    match days_until(deadline, today) {
        days if days < 0 => UrgencyStatus::Overdue,
        days if days <= DUE_SOON_WINDOW_DAYS => UrgencyStatus::DueSoon,
        _ => UrgencyStatus::OnTrack,
    }
}

pub fn is_overdue(deadline: NaiveDate, today: NaiveDate) -> bool {
    classify(deadline, today) == UrgencyStatus::Overdue
}

/// Display-ready snapshot of where a deadline sits relative to `today`.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct DeadlineStanding {
    pub deadline: NaiveDate,
    pub days_until: i64,
    pub status: UrgencyStatus,
    pub status_label: &'static str,
    pub summary: String,
}

impl DeadlineStanding {
    pub fn evaluate(deadline: NaiveDate, today: NaiveDate) -> Self {
        let days_until = days_until(deadline, today);
        let status = classify(deadline, today);

        Self {
            deadline,
            days_until,
            status,
            status_label: status.label(),
            summary: describe_gap(days_until),
        }
    }
}

fn describe_gap(days_until: i64) -> String {
    let plural = |count: i64| if count == 1 { "day" } else { "days" };

    match days_until {
        0 => "due today".to_string(),
        days if days < 0 => format!("{} {} overdue", -days, plural(-days)),
        days => format!("{} {} remaining", days, plural(days)),
    }
}
