use crate::infra::{to_pretty_json, today_or_local};
use chrono::NaiveDate;
use clap::Args;
use foi_deadline::config::ReminderConfig;
use foi_deadline::deadlines::{
    compute_deadline, DeadlineStanding, Jurisdiction, JurisdictionPolicy, JurisdictionRegistry,
    PeriodUnit,
};
use foi_deadline::error::AppError;
use foi_deadline::tracking::{
    DocketFilter, DocketImporter, DocketReport, ReminderSchedule, RequestStatus,
    ScheduledReminder,
};
use serde::Serialize;
use std::fmt::Write as _;
use std::path::PathBuf;
use tracing::{debug, info};

#[derive(Args, Debug, Default)]
pub(crate) struct JurisdictionsArgs {
    /// Emit JSON instead of a text table
    #[arg(long)]
    pub(crate) json: bool,
}

#[derive(Args, Debug)]
pub(crate) struct DeadlineArgs {
    /// Jurisdiction code (e.g. ontario, federal, british_columbia)
    #[arg(long)]
    pub(crate) jurisdiction: String,
    /// Date the request was submitted (YYYY-MM-DD)
    #[arg(long, value_parser = crate::infra::parse_date)]
    pub(crate) submitted: NaiveDate,
    /// Emit JSON instead of text
    #[arg(long)]
    pub(crate) json: bool,
}

#[derive(Args, Debug)]
pub(crate) struct StatusArgs {
    /// Response deadline to classify (YYYY-MM-DD)
    #[arg(long, value_parser = crate::infra::parse_date)]
    pub(crate) deadline: NaiveDate,
    /// Evaluation date (defaults to today)
    #[arg(long, value_parser = crate::infra::parse_date)]
    pub(crate) today: Option<NaiveDate>,
    /// Emit JSON instead of text
    #[arg(long)]
    pub(crate) json: bool,
}

#[derive(Args, Debug)]
pub(crate) struct DocketArgs {
    /// CSV export of tracked requests
    #[arg(long)]
    pub(crate) csv: PathBuf,
    /// Evaluation date (defaults to today)
    #[arg(long, value_parser = crate::infra::parse_date)]
    pub(crate) today: Option<NaiveDate>,
    /// Only include requests with this status
    #[arg(long, value_parser = crate::infra::parse_status)]
    pub(crate) status: Option<RequestStatus>,
    /// Only include requests under this jurisdiction code
    #[arg(long, value_parser = crate::infra::parse_jurisdiction)]
    pub(crate) jurisdiction: Option<Jurisdiction>,
    /// Only include agencies whose name contains this text (case-insensitive)
    #[arg(long)]
    pub(crate) agency: Option<String>,
    /// Emit JSON instead of text
    #[arg(long)]
    pub(crate) json: bool,
}

#[derive(Debug, Serialize)]
pub(crate) struct DeadlineOutput {
    pub(crate) jurisdiction: &'static str,
    pub(crate) display_name: &'static str,
    pub(crate) rule: &'static str,
    pub(crate) period_length: u32,
    pub(crate) period_unit: PeriodUnit,
    pub(crate) submitted_date: NaiveDate,
    pub(crate) deadline_date: NaiveDate,
    pub(crate) reminders: Vec<ScheduledReminder>,
}

pub(crate) fn run_jurisdictions(args: JurisdictionsArgs) -> Result<(), AppError> {
    let policies = JurisdictionRegistry::policies();
    if args.json {
        println!("{}", to_pretty_json(&policies)?);
    } else {
        print!("{}", render_jurisdictions(policies));
    }
    Ok(())
}

pub(crate) fn run_deadline(args: DeadlineArgs, reminders: &ReminderConfig) -> Result<(), AppError> {
    let output = deadline_output(&args.jurisdiction, args.submitted, reminders)?;
    info!(
        jurisdiction = output.jurisdiction,
        submitted = %output.submitted_date,
        deadline = %output.deadline_date,
        "deadline computed"
    );

    if args.json {
        println!("{}", to_pretty_json(&output)?);
    } else {
        print!("{}", render_deadline(&output));
    }
    Ok(())
}

pub(crate) fn run_status(args: StatusArgs) -> Result<(), AppError> {
    let today = today_or_local(args.today);
    let standing = DeadlineStanding::evaluate(args.deadline, today);
    debug!(deadline = %args.deadline, %today, status = standing.status_label, "deadline classified");

    if args.json {
        println!("{}", to_pretty_json(&standing)?);
    } else {
        println!(
            "Deadline {}: {} ({}, evaluated {})",
            standing.deadline, standing.status_label, standing.summary, today
        );
    }
    Ok(())
}

pub(crate) fn run_docket(args: DocketArgs, reminders: &ReminderConfig) -> Result<(), AppError> {
    let DocketArgs {
        csv,
        today,
        status,
        jurisdiction,
        agency,
        json,
    } = args;

    let today = today_or_local(today);
    let requests = DocketImporter::from_path(&csv)?;
    info!(path = %csv.display(), requests = requests.len(), "docket imported");

    let filter = DocketFilter {
        status,
        jurisdiction,
        agency,
    };
    let report = DocketReport::build(&requests, &filter, reminders, today);

    if json {
        println!("{}", to_pretty_json(&report)?);
    } else {
        print!("{}", render_docket(&report));
    }
    Ok(())
}

pub(crate) fn deadline_output(
    jurisdiction_code: &str,
    submitted: NaiveDate,
    reminders: &ReminderConfig,
) -> Result<DeadlineOutput, AppError> {
    let policy = JurisdictionRegistry::lookup(jurisdiction_code)?;
    let deadline = compute_deadline(submitted, jurisdiction_code)?;
    let schedule = ReminderSchedule::derive(submitted, deadline, reminders);

    Ok(DeadlineOutput {
        jurisdiction: policy.code(),
        display_name: policy.display_name,
        rule: policy.description,
        period_length: policy.period_length,
        period_unit: policy.period_unit,
        submitted_date: submitted,
        deadline_date: deadline,
        reminders: schedule.reminders,
    })
}

pub(crate) fn render_jurisdictions(policies: &[JurisdictionPolicy]) -> String {
    let mut out = String::new();
    for policy in policies {
        let _ = writeln!(
            out,
            "{:<24} {:<28} {}",
            policy.code(),
            policy.display_name,
            policy.description
        );
    }
    out
}

pub(crate) fn render_deadline(output: &DeadlineOutput) -> String {
    let mut out = String::new();
    let _ = writeln!(out, "Jurisdiction: {} ({})", output.display_name, output.rule);
    let _ = writeln!(out, "Submitted:    {}", output.submitted_date);
    let _ = writeln!(out, "Deadline:     {}", output.deadline_date);

    if !output.reminders.is_empty() {
        let _ = writeln!(out, "\nReminders");
        for reminder in &output.reminders {
            let _ = writeln!(out, "- {}: {}", reminder.kind.label(), reminder.remind_at);
        }
    }
    out
}

pub(crate) fn render_docket(report: &DocketReport) -> String {
    let mut out = String::new();
    let _ = writeln!(out, "FOI docket (evaluated {})", report.today);

    let _ = writeln!(out, "\nOpen requests by urgency");
    for entry in &report.urgency_counts {
        let _ = writeln!(out, "- {}: {}", entry.status_label, entry.count);
    }

    if !report.jurisdiction_load.is_empty() {
        let _ = writeln!(out, "\nJurisdiction load");
        for load in &report.jurisdiction_load {
            let _ = writeln!(
                out,
                "- {}: {} open, {} overdue",
                load.jurisdiction_label, load.open, load.overdue
            );
        }
    }

    if report.overdue.is_empty() {
        let _ = writeln!(out, "\nOverdue requests: none");
    } else {
        let _ = writeln!(out, "\nOverdue requests");
        for entry in &report.overdue {
            let _ = writeln!(
                out,
                "- {} {} ({}), due {}, {}",
                entry.id, entry.title, entry.agency, entry.standing.deadline, entry.standing.summary
            );
        }
    }

    if report.due_reminders.is_empty() {
        let _ = writeln!(out, "\nReminders due: none");
    } else {
        let _ = writeln!(out, "\nReminders due");
        for reminder in &report.due_reminders {
            let _ = writeln!(
                out,
                "- {} {}: {} (since {})",
                reminder.request_id, reminder.title, reminder.kind_label, reminder.remind_on
            );
        }
    }

    let _ = writeln!(out, "\nAll requests by deadline");
    for entry in &report.entries {
        let _ = writeln!(
            out,
            "- {} | {} | {} | {} | due {} | {}",
            entry.id,
            entry.title,
            entry.jurisdiction_label,
            entry.status_label,
            entry.standing.deadline,
            entry.standing.summary
        );
    }
    out
}
