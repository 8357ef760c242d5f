//! Caller-side bookkeeping layered on the deadline engine: request records, reminder
//! schedules, and docket reporting.

pub mod docket;
pub mod reminders;
pub mod request;

pub use docket::{DocketFilter, DocketImportError, DocketImporter, DocketReport};
pub use reminders::{ReminderKind, ReminderSchedule, ScheduledReminder};
pub use request::{
    FoiRequest, NewFoiRequest, RequestError, RequestId, RequestStatus, RequestUpdate,
};
