use crate::config::ReminderConfig;
use crate::deadlines::{DeadlineStanding, Jurisdiction, UrgencyStatus};
use crate::tracking::reminders::{ReminderKind, ReminderSchedule};
use crate::tracking::request::{FoiRequest, RequestStatus};
use chrono::NaiveDate;
use serde::Serialize;

/// Narrows a docket the way the request list screen does.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct DocketFilter {
    pub status: Option<RequestStatus>,
    pub jurisdiction: Option<Jurisdiction>,
    /// Case-insensitive substring match on the agency name.
    pub agency: Option<String>,
}

impl DocketFilter {
    pub fn matches(&self, request: &FoiRequest) -> bool {
        if self.status.is_some_and(|status| status != request.status) {
            return false;
        }
        if self
            .jurisdiction
            .is_some_and(|jurisdiction| jurisdiction != request.jurisdiction)
        {
            return false;
        }
        match self.agency.as_deref().map(str::trim) {
            Some(needle) if !needle.is_empty() => request
                .agency
                .to_lowercase()
                .contains(&needle.to_lowercase()),
            _ => true,
        }
    }
}

#[derive(Debug, Clone, Serialize)]
pub struct DocketEntryView {
    pub id: String,
    pub title: String,
    pub agency: String,
    pub jurisdiction: Jurisdiction,
    pub jurisdiction_label: &'static str,
    pub status: RequestStatus,
    pub status_label: &'static str,
    pub submitted_date: NaiveDate,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub response_date: Option<NaiveDate>,
    pub standing: DeadlineStanding,
}

#[derive(Debug, Clone, Serialize)]
pub struct UrgencyCountEntry {
    pub status: UrgencyStatus,
    pub status_label: &'static str,
    pub count: usize,
}

#[derive(Debug, Clone, Serialize)]
pub struct JurisdictionLoadEntry {
    pub jurisdiction: Jurisdiction,
    pub jurisdiction_label: &'static str,
    pub open: usize,
    pub overdue: usize,
}

#[derive(Debug, Clone, Serialize)]
pub struct DueReminderView {
    pub request_id: String,
    pub title: String,
    pub kind: ReminderKind,
    pub kind_label: &'static str,
    pub remind_on: NaiveDate,
}

#[derive(Debug, Clone, Serialize)]
pub struct DocketReport {
    pub today: NaiveDate,
    pub entries: Vec<DocketEntryView>,
    pub urgency_counts: Vec<UrgencyCountEntry>,
    pub jurisdiction_load: Vec<JurisdictionLoadEntry>,
    pub overdue: Vec<DocketEntryView>,
    pub due_reminders: Vec<DueReminderView>,
}

impl DocketReport {
    pub fn build(
        requests: &[FoiRequest],
        filter: &DocketFilter,
        reminders: &ReminderConfig,
        today: NaiveDate,
    ) -> Self {
        let mut selected: Vec<&FoiRequest> = requests
            .iter()
            .filter(|request| filter.matches(request))
            .collect();
        selected.sort_by(|a, b| {
            a.deadline_date
                .cmp(&b.deadline_date)
                .then_with(|| a.id.cmp(&b.id))
        });

        let entries: Vec<DocketEntryView> = selected
            .iter()
            .map(|request| entry_view(request, today))
            .collect();

        let open_entries = || entries.iter().filter(|entry| entry.status.is_open());

        let urgency_counts = UrgencyStatus::ordered()
            .into_iter()
            .map(|status| UrgencyCountEntry {
                status,
                status_label: status.label(),
                count: open_entries()
                    .filter(|entry| entry.standing.status == status)
                    .count(),
            })
            .collect();

        let jurisdiction_load = Jurisdiction::ordered()
            .into_iter()
            .filter_map(|jurisdiction| {
                let open = open_entries()
                    .filter(|entry| entry.jurisdiction == jurisdiction)
                    .count();
                if open == 0 {
                    return None;
                }
                let overdue = open_entries()
                    .filter(|entry| {
                        entry.jurisdiction == jurisdiction
                            && entry.standing.status == UrgencyStatus::Overdue
                    })
                    .count();
                Some(JurisdictionLoadEntry {
                    jurisdiction,
                    jurisdiction_label: jurisdiction.policy().display_name,
                    open,
                    overdue,
                })
            })
            .collect();

        let overdue = open_entries()
            .filter(|entry| entry.standing.status == UrgencyStatus::Overdue)
            .cloned()
            .collect();

        let mut due_reminders: Vec<DueReminderView> = selected
            .iter()
            .filter(|request| request.status.is_open())
            .flat_map(|request| {
                let schedule = ReminderSchedule::for_request(request, reminders);
                schedule
                    .due_on(today)
                    .map(|reminder| DueReminderView {
                        request_id: request.id.0.clone(),
                        title: request.title.clone(),
                        kind: reminder.kind,
                        kind_label: reminder.kind.label(),
                        remind_on: reminder.remind_on(),
                    })
                    .collect::<Vec<_>>()
            })
            .collect();
        due_reminders.sort_by(|a, b| {
            a.remind_on
                .cmp(&b.remind_on)
                .then_with(|| a.request_id.cmp(&b.request_id))
        });

        Self {
            today,
            entries,
            urgency_counts,
            jurisdiction_load,
            overdue,
            due_reminders,
        }
    }

    pub fn count_for(&self, status: UrgencyStatus) -> usize {
        self.urgency_counts
            .iter()
            .find(|entry| entry.status == status)
            .map_or(0, |entry| entry.count)
    }
}

fn entry_view(request: &FoiRequest, today: NaiveDate) -> DocketEntryView {
    DocketEntryView {
        id: request.id.0.clone(),
        title: request.title.clone(),
        agency: request.agency.clone(),
        jurisdiction: request.jurisdiction,
        jurisdiction_label: request.jurisdiction.policy().display_name,
        status: request.status,
        status_label: request.status.label(),
        submitted_date: request.submitted_date,
        response_date: request.response_date,
        standing: request.standing(today),
    }
}
