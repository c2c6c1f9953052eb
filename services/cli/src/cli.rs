use crate::infra::{parse_instant, parse_month, parse_zone};
use crate::report::{render_calendar, render_dashboard, render_incentive};
use chrono::{DateTime, NaiveDate, Utc};
use clap::{Args, Parser, Subcommand};
use lead_incentives::config::AppConfig;
use lead_incentives::error::AppError;
use lead_incentives::telemetry;
use lead_incentives::workflows::incentives::{EmployeeDashboard, IncentiveEngine, TargetZone};
use lead_incentives::workflows::leads::{
    EmployeeTarget, LeadImport, LeadImporter, SessionContext,
};
use std::path::{Path, PathBuf};
use tracing::{info, warn};

#[derive(Parser, Debug)]
#[command(
    name = "Lead Incentives",
    about = "Evaluate lead incentives, target progress and the working calendar from the command line",
    version
)]
struct Cli {
    #[command(subcommand)]
    command: Command,
}

#[derive(Subcommand, Debug)]
enum Command {
    /// Build the full employee dashboard from a lead export
    Dashboard(DashboardArgs),
    /// Evaluate today's incentive tiers only
    Incentive(IncentiveArgs),
    /// Show working days and holidays for a month
    Calendar(CalendarArgs),
}

#[derive(Args, Debug)]
pub(crate) struct SnapshotArgs {
    /// Lead export to evaluate (.json REST payload or CSV)
    #[arg(long)]
    pub(crate) leads: PathBuf,
    /// Evaluation instant (RFC 3339 or YYYY-MM-DD). Defaults to now.
    #[arg(long, value_parser = parse_instant)]
    pub(crate) now: Option<DateTime<Utc>>,
    /// Override the configured target zone (central or eastern)
    #[arg(long, value_parser = parse_zone)]
    pub(crate) zone: Option<TargetZone>,
    /// Print the result as JSON instead of a text report
    #[arg(long)]
    pub(crate) json: bool,
}

#[derive(Args, Debug)]
pub(crate) struct DashboardArgs {
    #[command(flatten)]
    pub(crate) snapshot: SnapshotArgs,
    /// Monthly lead target (0 means no target)
    #[arg(long, default_value_t = 0)]
    pub(crate) target: u32,
    /// Employee identifier recorded on the dashboard
    #[arg(long, default_value = "employee")]
    pub(crate) employee_id: String,
    /// Display name; its first word personalizes the motivation copy
    #[arg(long, default_value = "")]
    pub(crate) employee_name: String,
}

#[derive(Args, Debug)]
pub(crate) struct IncentiveArgs {
    #[command(flatten)]
    pub(crate) snapshot: SnapshotArgs,
    /// Monthly lead target, used for the double-target check
    #[arg(long, default_value_t = 0)]
    pub(crate) target: u32,
}

#[derive(Args, Debug)]
pub(crate) struct CalendarArgs {
    /// Month to show (YYYY-MM). Defaults to the current month in the target zone.
    #[arg(long, value_parser = parse_month)]
    pub(crate) month: Option<NaiveDate>,
    /// List every day of the month with its working-day status
    #[arg(long)]
    pub(crate) list_days: bool,
}

pub(crate) fn run() -> Result<(), AppError> {
    let cli = Cli::parse();
    let config = AppConfig::load()?;
    telemetry::init(&config.telemetry)?;
    info!(
        ?config.environment,
        zone = config.incentives.target_zone.label(),
        "lead incentives cli ready"
    );

    match cli.command {
        Command::Dashboard(args) => run_dashboard(&config, args),
        Command::Incentive(args) => run_incentive(&config, args),
        Command::Calendar(args) => run_calendar(&config, args),
    }
}

fn run_dashboard(config: &AppConfig, args: DashboardArgs) -> Result<(), AppError> {
    let DashboardArgs {
        snapshot,
        target,
        employee_id,
        employee_name,
    } = args;
    let zone = snapshot.zone.unwrap_or(config.incentives.target_zone);
    let now = snapshot.now.unwrap_or_else(Utc::now);
    let import = load_leads(&snapshot.leads)?;

    let dashboard = EmployeeDashboard::new(config.incentives.tiers.clone(), zone);
    let session = SessionContext::employee(employee_id, employee_name);
    let view = dashboard.build(&session, &import.leads, EmployeeTarget(target), now);

    if snapshot.json {
        println!("{}", serde_json::to_string_pretty(&view)?);
    } else {
        render_dashboard(&view, import.rejected.len());
    }
    Ok(())
}

fn run_incentive(config: &AppConfig, args: IncentiveArgs) -> Result<(), AppError> {
    let IncentiveArgs { snapshot, target } = args;
    let zone = snapshot.zone.unwrap_or(config.incentives.target_zone);
    let now = snapshot.now.unwrap_or_else(Utc::now);
    let import = load_leads(&snapshot.leads)?;

    let engine = IncentiveEngine::new(config.incentives.tiers.clone(), zone);
    let result = engine.evaluate(&import.leads, EmployeeTarget(target), now);

    if snapshot.json {
        println!("{}", serde_json::to_string_pretty(&result)?);
    } else {
        render_incentive(&result, engine.tiers(), zone, now);
    }
    Ok(())
}

fn run_calendar(config: &AppConfig, args: CalendarArgs) -> Result<(), AppError> {
    let zone = config.incentives.target_zone;
    let month = args.month.unwrap_or_else(|| zone.local_date(Utc::now()));
    render_calendar(month, zone, args.list_days);
    Ok(())
}

fn load_leads(path: &Path) -> Result<LeadImport, AppError> {
    let import = LeadImporter::from_path(path)?;
    if !import.rejected.is_empty() {
        warn!(
            rejected = import.rejected.len(),
            path = %path.display(),
            "some lead rows were skipped"
        );
    }
    info!(leads = import.leads.len(), path = %path.display(), "loaded lead snapshot");
    Ok(import)
}
