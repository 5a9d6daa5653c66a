//! Savings Planner CLI
//!
//! Command-line interface for running savings projections, IRR and insurance need

use anyhow::{Context, Result};
use clap::{Args, Parser, Subcommand, ValueEnum};
use serde::Serialize;
use std::path::{Path, PathBuf};

use savings_planner::{
    compare_instruments, compare_plans, compute_insurance_need,
    irr::{self, IrrResult},
    report, simulate, CurveInputs, InstrumentType, InsuranceConfig, PlannerConfig,
    ProjectionConfig, ProjectionResult, RawNumber, RetirementPlan, YearSnapshot,
};
use savings_planner::projection::ProjectionSummary;

/// JSON body for the `project` command
#[derive(Serialize)]
struct ProjectionReport<'a> {
    projection: &'a ProjectionResult,
    summary: ProjectionSummary,
    irr: Option<IrrResult>,
}

/// Savings Planner - SIP / RD / FD projections, IRR and insurance need
#[derive(Parser)]
#[command(name = "savings-planner")]
#[command(author, version, about, long_about = None)]
struct Cli {
    /// Output format
    #[arg(short, long, value_enum, default_value = "table", global = true)]
    format: OutputFormat,

    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Simulate one instrument over a horizon
    Project(ProjectArgs),
    /// Evaluate the retirement plan (and comparison plan) from a config file
    Plan(PlanArgs),
    /// Compare SIP, RD and FD growth curves for the same inputs
    Curves(CurveArgs),
    /// Solve the IRR of a monthly cashflow list
    Irr(IrrArgs),
    /// Size recommended life-insurance cover
    Insure(InsureArgs),
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, ValueEnum)]
enum OutputFormat {
    /// Human-readable table format
    #[default]
    Table,
    /// JSON format
    Json,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, ValueEnum)]
enum CliInstrument {
    Sip,
    Rd,
    Fd,
}

impl From<CliInstrument> for InstrumentType {
    fn from(value: CliInstrument) -> Self {
        match value {
            CliInstrument::Sip => InstrumentType::Sip,
            CliInstrument::Rd => InstrumentType::Rd,
            CliInstrument::Fd => InstrumentType::Fd,
        }
    }
}

#[derive(Args)]
struct ProjectArgs {
    /// Horizon in years
    #[arg(long, default_value_t = 20)]
    years: u32,
    /// Contribution per month
    #[arg(long, default_value_t = 10_000.0)]
    monthly: f64,
    /// Nominal annual return, percent
    #[arg(long = "return", default_value_t = 12.0)]
    expected_return: f64,
    /// Annual inflation, percent
    #[arg(long, default_value_t = 6.0)]
    inflation: f64,
    #[arg(long, value_enum, default_value = "sip")]
    instrument: CliInstrument,
    /// Age at projection start
    #[arg(long)]
    start_age: Option<u32>,
    /// Also write yearly snapshots to this CSV file
    #[arg(long)]
    csv: Option<PathBuf>,
}

#[derive(Args)]
struct PlanArgs {
    /// JSON config file; defaults are used when omitted
    #[arg(long)]
    config: Option<PathBuf>,
    /// Also write the primary plan's snapshots to this CSV file
    #[arg(long)]
    csv: Option<PathBuf>,
}

#[derive(Args)]
struct CurveArgs {
    /// Horizon in years, clamped to 1-60
    #[arg(long, default_value = "20")]
    years: String,
    /// Current age; with --goal-age the horizon becomes the years between them
    #[arg(long)]
    age: Option<String>,
    /// Target age, replaces --years when given
    #[arg(long)]
    goal_age: Option<String>,
    /// Contribution per month, clamped to 0-10,000,000
    #[arg(long, default_value = "10000")]
    monthly: String,
    /// Nominal annual return percent, clamped to 0-30
    #[arg(long = "return", default_value = "12")]
    expected_return: String,
    /// Annual inflation percent, clamped to 0-20
    #[arg(long, default_value = "6")]
    inflation: String,
    /// Take the inputs from the `curve` section of a JSON config file instead
    #[arg(long)]
    config: Option<PathBuf>,
}

#[derive(Args)]
struct IrrArgs {
    /// Monthly cashflows, comma separated (e.g. "-1000,0,0,1100")
    #[arg(allow_hyphen_values = true)]
    cashflows: String,
    /// Annual inflation percent for the real rate
    #[arg(long, default_value_t = 6.0)]
    inflation: f64,
}

#[derive(Args)]
struct InsureArgs {
    #[arg(long, default_value_t = 30.0)]
    age: f64,
    #[arg(long, default_value_t = 0.0)]
    income: f64,
    #[arg(long, default_value_t = 0.0)]
    expenses: f64,
    #[arg(long, default_value_t = 0.0)]
    dependents: f64,
    #[arg(long, default_value_t = 0.0)]
    liabilities: f64,
    /// Existing life cover
    #[arg(long, default_value_t = 0.0)]
    cover: f64,
    /// Years of expenses to replace, clamped to 5-40
    #[arg(long, default_value_t = 20.0)]
    replacement_years: f64,
    /// Take the inputs from the `insurance` section of a JSON config file instead
    #[arg(long)]
    config: Option<PathBuf>,
}

fn main() -> Result<()> {
    env_logger::init();

    let cli = Cli::parse();
    match cli.command {
        Commands::Project(args) => run_project(args, cli.format),
        Commands::Plan(args) => run_plan(args, cli.format),
        Commands::Curves(args) => run_curves(args, cli.format),
        Commands::Irr(args) => run_irr(args, cli.format),
        Commands::Insure(args) => run_insure(args, cli.format),
    }
}

fn run_project(args: ProjectArgs, format: OutputFormat) -> Result<()> {
    let config = ProjectionConfig {
        horizon_years: args.years,
        monthly_contribution: args.monthly,
        annual_nominal_return_percent: args.expected_return,
        annual_inflation_percent: args.inflation,
        instrument: args.instrument.into(),
        start_age: args.start_age,
    };

    let result = simulate(&config);
    let irr = irr::calculate_irr(&result.cashflows, result.config.inflation_rate());

    if let Some(path) = &args.csv {
        export_snapshots(path, &result.snapshots)?;
    }

    match format {
        OutputFormat::Json => {
            let body = ProjectionReport {
                projection: &result,
                summary: result.summary(),
                irr,
            };
            println!("{}", report::to_json(&body)?);
        }
        OutputFormat::Table => {
            println!("{} projection ({} years)", result.config.instrument, result.config.horizon_years);
            print_snapshot_table(&result);
            print_summary(&result, irr.as_ref());
        }
    }
    Ok(())
}

fn run_plan(args: PlanArgs, format: OutputFormat) -> Result<()> {
    let config = match &args.config {
        Some(path) => load_config(path)?,
        None => PlannerConfig::default(),
    };

    match &config.comparison {
        Some(comparison) => {
            let result = compare_plans(&config.plan, comparison);
            if let Some(path) = &args.csv {
                export_snapshots(path, &result.primary.projection.snapshots)?;
            }

            match format {
                OutputFormat::Json => println!("{}", report::to_json(&result)?),
                OutputFormat::Table => {
                    print_plan_heading("Scenario A", &config.plan);
                    print_summary(&result.primary.projection, result.primary.irr.as_ref());
                    println!();
                    print_plan_heading("Scenario B", comparison);
                    print_summary(&result.comparison.projection, result.comparison.irr.as_ref());
                    println!();
                    println!("B - A:");
                    println!("  Corpus:             {:>18.2}", result.corpus_difference);
                    println!("  Invested:           {:>18.2}", result.invested_difference);
                    println!("  Inflation adjusted: {:>18.2}", result.inflation_adjusted_difference);
                    println!("  Real IRR (pp):      {:>18}", format_optional(result.real_irr_difference));
                }
            }
        }
        None => {
            let outcome = config.plan.evaluate();
            if let Some(path) = &args.csv {
                export_snapshots(path, &outcome.projection.snapshots)?;
            }

            match format {
                OutputFormat::Json => println!("{}", report::to_json(&outcome)?),
                OutputFormat::Table => {
                    print_plan_heading("Plan", &config.plan);
                    print_snapshot_table(&outcome.projection);
                    print_summary(&outcome.projection, outcome.irr.as_ref());
                }
            }
        }
    }
    Ok(())
}

fn run_curves(args: CurveArgs, format: OutputFormat) -> Result<()> {
    let inputs = match &args.config {
        Some(path) => load_config(path)?.curve,
        None => CurveInputs {
            years: RawNumber::Text(args.years),
            age: args.age.map(RawNumber::Text),
            goal_age: args.goal_age.map(RawNumber::Text),
            monthly_contribution: RawNumber::Text(args.monthly),
            expected_return_percent: RawNumber::Text(args.expected_return),
            inflation_percent: RawNumber::Text(args.inflation),
        },
    };
    let comparison = compare_instruments(&inputs);

    match format {
        OutputFormat::Json => println!("{}", report::to_json(&comparison.curve)?),
        OutputFormat::Table => {
            println!("{:>5} {:>18} {:>18} {:>18}", "Year", "SIP", "RD", "FD");
            println!("{}", "-".repeat(62));
            for point in &comparison.curve {
                println!("{:>5} {:>18.2} {:>18.2} {:>18.2}", point.year, point.sip, point.rd, point.fd);
            }
        }
    }
    Ok(())
}

fn run_irr(args: IrrArgs, format: OutputFormat) -> Result<()> {
    let cashflows = irr::parse_cashflows(&args.cashflows).context("parsing cashflows")?;
    let result = irr::calculate_irr(&cashflows, args.inflation / 100.0);

    match format {
        OutputFormat::Json => println!("{}", report::to_json(&result)?),
        OutputFormat::Table => print_irr(result.as_ref()),
    }
    Ok(())
}

fn run_insure(args: InsureArgs, format: OutputFormat) -> Result<()> {
    let config = match &args.config {
        Some(path) => load_config(path)?.insurance,
        None => InsuranceConfig {
            age: args.age,
            annual_income: args.income,
            annual_expenses: args.expenses,
            dependents_count: args.dependents,
            liabilities: args.liabilities,
            current_cover: args.cover,
            replacement_years: args.replacement_years,
        },
    };
    let result = compute_insurance_need(&config);

    match format {
        OutputFormat::Json => println!("{}", report::to_json(&result)?),
        OutputFormat::Table => {
            println!("Insurance need:");
            println!("  Income replacement: {:>18.2}", result.income_replacement);
            println!("  Dependent buffer:   {:>18.2}", result.dependent_buffer);
            println!("  Age buffer:         {:>18.2}", result.age_buffer);
            println!("  Gross need:         {:>18.2}", result.gross_need);
            println!("  Recommended cover:  {:>18.2}", result.recommended_cover);
            println!("  Coverage multiple:  {:>18.2}x", result.coverage_multiple);
            println!("  Recommendation:     {}", result.recommendation_tier.description());
        }
    }
    Ok(())
}

fn load_config(path: &Path) -> Result<PlannerConfig> {
    PlannerConfig::from_path(path).with_context(|| format!("loading config {}", path.display()))
}

fn print_snapshot_table(result: &ProjectionResult) {
    println!("{:>5} {:>4} {:>18} {:>18} {:>18} {:>18}",
        "Year", "Age", "Corpus", "Invested", "Returns", "Real corpus");
    println!("{}", "-".repeat(86));

    for snap in &result.snapshots {
        let age = snap.age.map_or_else(|| "-".to_string(), |a| a.to_string());
        println!("{:>5} {:>4} {:>18.2} {:>18.2} {:>18.2} {:>18.2}",
            snap.year_index,
            age,
            snap.total_corpus,
            snap.total_invested,
            snap.returns_earned,
            snap.inflation_adjusted_corpus,
        );
    }
}

fn export_snapshots(path: &Path, snapshots: &[YearSnapshot]) -> Result<()> {
    report::write_snapshots_csv_file(path, snapshots)
        .with_context(|| format!("writing snapshots to {}", path.display()))
}

fn print_plan_heading(label: &str, plan: &RetirementPlan) {
    let (current, retirement) = plan.ages();
    println!("{}: age {} -> {} ({})", label, current, retirement, plan.instrument);
}

fn print_summary(result: &ProjectionResult, irr: Option<&IrrResult>) {
    let summary = result.summary();
    println!("\nSummary:");
    println!("  Total Corpus:       {:>18.2}", summary.total_corpus);
    println!("  Total Invested:     {:>18.2}", summary.total_invested);
    println!("  Returns Earned:     {:>18.2}", summary.returns_earned);
    println!("  Inflation Adjusted: {:>18.2}", summary.inflation_adjusted_corpus);
    println!("  Return:             {:>17.2}%", summary.return_percentage);
    println!("  Wealth Multiplier:  {:>17.2}x", summary.wealth_multiplier);
    println!("  Real Return Assumed:{:>17.2}%", summary.real_return_assumption_percent);
    print_irr(irr);
}

fn print_irr(irr: Option<&IrrResult>) {
    println!("  Nominal IRR:        {:>18}", format_optional(irr.map(|r| r.annual_nominal_rate_percent)));
    println!("  Real IRR:           {:>18}", format_optional(irr.map(|r| r.annual_real_rate_percent)));
}

/// `-` for values that could not be computed
fn format_optional(value: Option<f64>) -> String {
    value.map_or_else(|| "-".to_string(), |v| format!("{:.2}", v))
}
