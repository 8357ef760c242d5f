use crate::commands::{
    run_deadline, run_docket, run_jurisdictions, run_status, DeadlineArgs, DocketArgs,
    JurisdictionsArgs, StatusArgs,
};
use clap::{Parser, Subcommand};
use foi_deadline::config::AppConfig;
use foi_deadline::error::AppError;
use foi_deadline::telemetry;
use tracing::{debug, warn};

#[derive(Parser, Debug)]
#[command(
    name = "foi-deadline",
    about = "Compute statutory response deadlines for Freedom-of-Information requests",
    version
)]
struct Cli {
    #[command(subcommand)]
    command: Command,
}

#[derive(Subcommand, Debug)]
enum Command {
    /// List supported jurisdictions and their response windows
    Jurisdictions(JurisdictionsArgs),
    /// Compute the response deadline and reminder schedule for a submission
    Deadline(DeadlineArgs),
    /// Classify how urgent a stored deadline is
    Status(StatusArgs),
    /// Report deadline urgency across a CSV export of tracked requests
    Docket(DocketArgs),
}

pub(crate) fn run() -> Result<(), AppError> {
    let cli = Cli::parse();
    let config = AppConfig::load()?;
    telemetry::init(&config.telemetry)?;
    debug!(?config.environment, "configuration loaded");

    let result = match cli.command {
        Command::Jurisdictions(args) => run_jurisdictions(args),
        Command::Deadline(args) => run_deadline(args, &config.reminders),
        Command::Status(args) => run_status(args),
        Command::Docket(args) => run_docket(args, &config.reminders),
    };

    if let Err(err) = &result {
        if err.is_input_error() {
            warn!(error = %err, "rejected input");
        }
    }
    result
}

#[cfg(test)]
mod tests {
    use super::*;
    use clap::CommandFactory;
    use foi_deadline::deadlines::Jurisdiction;
    use foi_deadline::tracking::RequestStatus;

    #[test]
    fn cli_definition_is_consistent() {
        Cli::command().debug_assert();
    }

    #[test]
    fn deadline_command_parses_dates_up_front() {
        let cli = Cli::try_parse_from([
            "foi-deadline",
            "deadline",
            "--jurisdiction",
            "ontario",
            "--submitted",
            "2024-03-04",
        ])
        .expect("arguments parse");

        match cli.command {
            Command::Deadline(args) => {
                assert_eq!(args.jurisdiction, "ontario");
                assert_eq!(args.submitted.to_string(), "2024-03-04");
                assert!(!args.json);
            }
            other => panic!("unexpected command: {other:?}"),
        }
    }

    #[test]
    fn malformed_dates_are_rejected_by_the_parser() {
        let err = Cli::try_parse_from(["foi-deadline", "status", "--deadline", "next week"])
            .expect_err("invalid date rejected");
        assert!(err.to_string().contains("next week"));
    }

    #[test]
    fn docket_filters_parse_into_typed_values() {
        let cli = Cli::try_parse_from([
            "foi-deadline",
            "docket",
            "--csv",
            "requests.csv",
            "--status",
            "Received",
            "--jurisdiction",
            "british_columbia",
            "--agency",
            "forests",
            "--json",
        ])
        .expect("arguments parse");

        match cli.command {
            Command::Docket(args) => {
                assert_eq!(args.status, Some(RequestStatus::Received));
                assert_eq!(args.jurisdiction, Some(Jurisdiction::BritishColumbia));
                assert_eq!(args.agency.as_deref(), Some("forests"));
                assert!(args.json);
            }
            other => panic!("unexpected command: {other:?}"),
        }
    }

    #[test]
    fn unknown_docket_jurisdiction_is_rejected() {
        let err = Cli::try_parse_from([
            "foi-deadline",
            "docket",
            "--csv",
            "requests.csv",
            "--jurisdiction",
            "atlantis",
        ])
        .expect_err("unknown jurisdiction rejected");
        assert!(err.to_string().contains("atlantis"));
    }
}
