use std::io::{self, IsTerminal, Write};
use std::path::PathBuf;

use anyhow::{Context, Result};
use clap::{Args, Parser, Subcommand};
use pricing_core::CompetitorId;
use pricing_core::calculations::SurveyPricingEngine;
use pricing_data::CompetitorLoader;
use rust_decimal::Decimal;
use tracing::{debug, info};

use pricing_ui::logging::{self, LogSettings};
use pricing_ui::views::Style;
use pricing_ui::views::dashboard::render_dashboard;
use pricing_ui::views::results::render_results;
use pricing_ui::{DashboardConfig, DashboardState, PricingReport, Session, Tab, load_survey_answers};

// ─── CLI definition ──────────────────────────────────────────────────────────

/// PriceWise: pricing strategies from a short survey, plus a pricing
/// dashboard with competitors, charts and what-if scenarios.
#[derive(Debug, Parser)]
#[command(name = "pricewise", version)]
struct Cli {
    /// Log level or filter directive (e.g. `debug`, `pricing_core=trace`).
    #[arg(long, global = true)]
    log_level: Option<String>,

    /// Append log output to this file.
    #[arg(long, global = true)]
    log_file: Option<PathBuf>,

    /// Hide log output on the terminal.
    #[arg(long, short, global = true)]
    quiet: bool,

    #[command(subcommand)]
    command: Option<Command>,
}

#[derive(Debug, Subcommand)]
enum Command {
    /// Answer the survey and see the three pricing strategies (default).
    Survey(SurveyArgs),
    /// Show the pricing dashboard.
    Dashboard(DashboardArgs),
}

#[derive(Debug, Default, Args)]
struct SurveyArgs {
    /// Read answers from a TOML file instead of asking.
    #[arg(long)]
    answers: Option<PathBuf>,

    /// Write the text report to this file.
    #[arg(long)]
    report: Option<PathBuf>,

    /// Print the analysis as JSON.
    #[arg(long)]
    json: bool,
}

#[derive(Debug, Args)]
struct DashboardArgs {
    /// TOML file with product, operating costs, scenario and competitors.
    #[arg(long)]
    config: Option<PathBuf>,

    /// Show a single tab instead of all four.
    #[arg(long, value_enum)]
    tab: Option<Tab>,

    /// Add competitors from a CSV file (name, price, features).
    #[arg(long)]
    competitors_csv: Option<PathBuf>,

    /// Remove the competitor with this id (repeatable).
    #[arg(long = "remove-competitor", value_name = "ID")]
    remove_competitors: Vec<CompetitorId>,

    #[arg(long)]
    cost_multiplier: Option<Decimal>,

    #[arg(long)]
    margin_multiplier: Option<Decimal>,

    #[arg(long)]
    rent_multiplier: Option<Decimal>,

    /// Monthly sales volume for the scenario.
    #[arg(long)]
    volume: Option<Decimal>,

    /// Print every derived value as JSON.
    #[arg(long)]
    json: bool,
}

// ─── commands ────────────────────────────────────────────────────────────────

fn output_style() -> Style {
    Style {
        ansi: io::stdout().is_terminal() && std::env::var_os("NO_COLOR").is_none(),
    }
}

fn run_survey(args: SurveyArgs) -> Result<()> {
    let style = output_style();

    let Some(path) = &args.answers else {
        let report_dir = std::env::current_dir().context("Failed to read current directory")?;
        let mut session = Session::new(style, report_dir);
        return session
            .run(&mut io::stdin().lock(), &mut io::stdout().lock())
            .context("Survey session failed");
    };

    let survey = load_survey_answers(path)
        .with_context(|| format!("Failed to load answers: {}", path.display()))?;
    let analysis = SurveyPricingEngine::default()
        .analyze(&survey)
        .with_context(|| format!("Cannot price answers in {}", path.display()))?;
    let report = PricingReport::new(&survey, &analysis);

    if let Some(report_path) = &args.report {
        report.write(report_path)?;
        eprintln!("Report saved to {}", report_path.display());
    }

    let mut stdout = io::stdout().lock();
    if args.json {
        let json = serde_json::to_string_pretty(&report).context("Failed to serialize analysis")?;
        writeln!(stdout, "{json}")?;
    } else {
        write!(stdout, "{}", render_results(&survey, &analysis, style))?;
    }
    Ok(())
}

fn run_dashboard(args: DashboardArgs) -> Result<()> {
    let mut state = match &args.config {
        Some(path) => DashboardConfig::load(path)
            .with_context(|| format!("Failed to load dashboard config: {}", path.display()))?
            .into_state(),
        None => DashboardState::default(),
    };

    if let Some(path) = &args.competitors_csv {
        let rows = CompetitorLoader::parse_file(path)
            .with_context(|| format!("Failed to load competitors: {}", path.display()))?;
        let added = CompetitorLoader::import(&mut state.competitors, rows);
        eprintln!("Added {added} competitors from {}", path.display());
    }

    for id in &args.remove_competitors {
        if !state.competitors.remove(*id) {
            eprintln!("No competitor with id {id}");
        }
    }

    if let Some(value) = args.cost_multiplier {
        state.scenario.set_cost_multiplier(value);
    }
    if let Some(value) = args.margin_multiplier {
        state.scenario.set_margin_multiplier(value);
    }
    if let Some(value) = args.rent_multiplier {
        state.scenario.set_rent_multiplier(value);
    }
    if let Some(value) = args.volume {
        state.scenario.set_volume_estimate(value);
    }
    debug!(scenario = ?state.scenario, "scenario inputs applied");

    let mut stdout = io::stdout().lock();
    if args.json {
        let json = serde_json::to_string_pretty(&state.snapshot())
            .context("Failed to serialize dashboard")?;
        writeln!(stdout, "{json}")?;
    } else {
        write!(stdout, "{}", render_dashboard(&state, args.tab, output_style()))?;
    }
    Ok(())
}

// ─── entry point ─────────────────────────────────────────────────────────────

fn main() -> Result<()> {
    let cli = Cli::parse();

    logging::init(&LogSettings {
        level: cli.log_level.clone(),
        file: cli.log_file.clone(),
        quiet: cli.quiet,
    })
    .context("Failed to initialize logging")?;

    info!(version = env!("CARGO_PKG_VERSION"), "pricewise starting");

    match cli.command {
        Some(Command::Dashboard(args)) => run_dashboard(args),
        Some(Command::Survey(args)) => run_survey(args),
        None => run_survey(SurveyArgs::default()),
    }
}
