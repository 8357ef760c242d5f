mod cli;
mod commands;
mod infra;

use foi_deadline::error::AppError;

pub fn run() -> Result<(), AppError> {
    cli::run()
}
