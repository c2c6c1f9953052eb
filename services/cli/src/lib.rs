mod cli;
mod infra;
mod report;

use lead_incentives::error::AppError;

pub fn run() -> Result<(), AppError> {
    cli::run()
}
