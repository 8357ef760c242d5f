//! Jurisdiction-aware response deadline engine.
//!
//! Everything in this module is pure: callers supply "today" and persist results.

mod calculator;
mod dates;
pub mod jurisdiction;
mod urgency;

pub use calculator::{add_business_days, compute_deadline, is_business_day, DeadlineError};
pub use dates::{format_calendar_date, parse_calendar_date, CALENDAR_DATE_FORMAT};
pub use jurisdiction::{Jurisdiction, JurisdictionPolicy, JurisdictionRegistry, PeriodUnit};
pub use urgency::{
    classify, days_until, is_overdue, DeadlineStanding, UrgencyStatus, DUE_SOON_WINDOW_DAYS,
};
