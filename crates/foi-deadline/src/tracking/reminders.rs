use super::request::FoiRequest;
use crate::config::ReminderConfig;
use chrono::{Days, NaiveDate, NaiveDateTime};
use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum ReminderKind {
    FollowUp,
    Deadline,
}

impl ReminderKind {
    pub const fn label(self) -> &'static str {
        match self {
            Self::FollowUp => "Follow-up",
            Self::Deadline => "Deadline approaching",
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ScheduledReminder {
    pub kind: ReminderKind,
    pub remind_at: NaiveDateTime,
}

impl ScheduledReminder {
    pub fn remind_on(&self) -> NaiveDate {
        self.remind_at.date()
    }
}

/// Reminders derived for one request, in chronological order.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
pub struct ReminderSchedule {
    pub reminders: Vec<ScheduledReminder>,
}

impl ReminderSchedule {
    pub fn derive(submitted: NaiveDate, deadline: NaiveDate, config: &ReminderConfig) -> Self {
        let follow_up = submitted
            .checked_add_days(Days::new(u64::from(config.follow_up_after_days)))
            .map(|date| (ReminderKind::FollowUp, date));
        let pre_deadline = deadline
            .checked_sub_days(Days::new(u64::from(config.deadline_lead_days)))
            .map(|date| (ReminderKind::Deadline, date));

        let mut reminders: Vec<ScheduledReminder> = [follow_up, pre_deadline]
            .into_iter()
            .flatten()
            .filter_map(|(kind, date)| {
                date.and_hms_opt(0, 0, 0)
                    .map(|remind_at| ScheduledReminder { kind, remind_at })
            })
            .collect();
        reminders.sort_by_key(|reminder| reminder.remind_at);

        Self { reminders }
    }

    pub fn for_request(request: &FoiRequest, config: &ReminderConfig) -> Self {
        Self::derive(request.submitted_date, request.deadline_date, config)
    }

    pub fn due_on(&self, today: NaiveDate) -> impl Iterator<Item = &ScheduledReminder> + '_ {
        self.reminders
            .iter()
            .filter(move |reminder| reminder.remind_on() <= today)
    }
}
