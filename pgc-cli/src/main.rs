use std::path::PathBuf;

use chrono::NaiveDate;
use clap::{Args, Parser, Subcommand};
use rust_decimal::Decimal;
use tracing_subscriber::EnvFilter;

use pgc_analysis::GeminiModel;
use pgc_cli::app::{self, RecordForm};
use pgc_cli::format::{ParseDecimalError, parse_decimal};
use pgc_core::{Employee, NewEmployee};
use pgc_store_json::JsonStore;

// ─── CLI definition ──────────────────────────────────────────────────────────

/// Financial dashboard for PGC balance sheets, Angolan payroll, and
/// AI-assisted analysis.
#[derive(Debug, Parser)]
#[command(name = "pgc-dash")]
struct Cli {
    /// Directory holding the two stored JSON documents.
    #[arg(long, default_value = "data")]
    data_dir: PathBuf,

    #[command(subcommand)]
    command: Command,
}

#[derive(Debug, Subcommand)]
enum Command {
    /// Manage the period history.
    Record {
        #[command(subcommand)]
        command: RecordCommand,
    },
    /// Manage the employee roster.
    Employee {
        #[command(subcommand)]
        command: EmployeeCommand,
    },
    /// Show the ten financial indicators for a period.
    Indicators {
        /// Period to analyse; defaults to the latest.
        #[arg(long)]
        period: Option<NaiveDate>,
    },
    /// Show the payroll breakdown for every employee.
    Payroll,
    /// Show the AGT obligation estimate for a period.
    Fiscal {
        /// Period to estimate; defaults to the latest.
        #[arg(long)]
        period: Option<NaiveDate>,
    },
    /// Request a narrative analysis from the generative service.
    Analyze {
        /// Period to analyse; defaults to the latest.
        #[arg(long)]
        period: Option<NaiveDate>,

        /// Gemini API key; falls back to $GEMINI_API_KEY.
        #[arg(long, env = "GEMINI_API_KEY", hide_env_values = true)]
        api_key: String,

        /// Override the model name.
        #[arg(long)]
        model: Option<String>,
    },
}

#[derive(Debug, Subcommand)]
enum RecordCommand {
    /// Add a new period (fails if the period already exists).
    Add(RecordArgs),
    /// Replace the record for an existing period.
    Edit(RecordArgs),
    /// Delete a period from the history.
    Rm {
        #[arg(long)]
        period: NaiveDate,
    },
    /// List every recorded period.
    List,
}

/// Entry form for one reporting period. Net revenue is derived from the
/// five channel figures. Amounts accept both pt-AO (`1 234,56`) and
/// English (`1,234.56`) separators.
#[derive(Debug, Args)]
struct RecordArgs {
    #[arg(long)]
    period: NaiveDate,
    #[arg(long, default_value = "0", value_parser = parse_decimal_arg)]
    current_assets: Decimal,
    #[arg(long, default_value = "0", value_parser = parse_decimal_arg)]
    non_current_assets: Decimal,
    #[arg(long, default_value = "0", value_parser = parse_decimal_arg)]
    inventory: Decimal,
    #[arg(long, default_value = "0", value_parser = parse_decimal_arg)]
    cash_equivalents: Decimal,
    #[arg(long, default_value = "0", value_parser = parse_decimal_arg)]
    current_liabilities: Decimal,
    #[arg(long, default_value = "0", value_parser = parse_decimal_arg)]
    non_current_liabilities: Decimal,
    #[arg(long, default_value = "0", value_parser = parse_decimal_arg)]
    equity: Decimal,
    #[arg(long, default_value = "0", value_parser = parse_decimal_arg)]
    gross_profit: Decimal,
    #[arg(long, default_value = "0", value_parser = parse_decimal_arg)]
    operating_profit: Decimal,
    #[arg(long, default_value = "0", value_parser = parse_decimal_arg)]
    net_profit: Decimal,
    #[arg(long, default_value = "0", value_parser = parse_decimal_arg)]
    sales: Decimal,
    #[arg(long, default_value = "0", value_parser = parse_decimal_arg)]
    costs: Decimal,
    #[arg(long, default_value = "0", value_parser = parse_decimal_arg)]
    revenue_services: Decimal,
    #[arg(long, default_value = "0", value_parser = parse_decimal_arg)]
    revenue_transport: Decimal,
    #[arg(long, default_value = "0", value_parser = parse_decimal_arg)]
    revenue_tuition: Decimal,
    #[arg(long, default_value = "0", value_parser = parse_decimal_arg)]
    revenue_exam_sheets: Decimal,
    #[arg(long, default_value = "0", value_parser = parse_decimal_arg)]
    revenue_uniforms: Decimal,
}

impl From<RecordArgs> for RecordForm {
    fn from(args: RecordArgs) -> Self {
        RecordForm {
            period: args.period,
            current_assets: args.current_assets,
            non_current_assets: args.non_current_assets,
            inventory: args.inventory,
            cash_equivalents: args.cash_equivalents,
            current_liabilities: args.current_liabilities,
            non_current_liabilities: args.non_current_liabilities,
            equity: args.equity,
            gross_profit: args.gross_profit,
            operating_profit: args.operating_profit,
            net_profit: args.net_profit,
            sales: args.sales,
            costs: args.costs,
            revenue_services: args.revenue_services,
            revenue_transport: args.revenue_transport,
            revenue_tuition: args.revenue_tuition,
            revenue_exam_sheets: args.revenue_exam_sheets,
            revenue_uniforms: args.revenue_uniforms,
        }
    }
}

#[derive(Debug, Subcommand)]
enum EmployeeCommand {
    /// Add an employee to the roster.
    Add {
        #[arg(long)]
        name: String,
        #[arg(long, value_parser = parse_decimal_arg)]
        base_salary: Decimal,
        #[arg(long, default_value = "0", value_parser = parse_decimal_arg)]
        allowances: Decimal,
        #[arg(long, default_value = "0", value_parser = parse_decimal_arg)]
        bonus: Decimal,
    },
    /// Replace an existing employee's fields (the id never changes).
    Edit {
        #[arg(long)]
        id: String,
        #[arg(long)]
        name: String,
        #[arg(long, value_parser = parse_decimal_arg)]
        base_salary: Decimal,
        #[arg(long, default_value = "0", value_parser = parse_decimal_arg)]
        allowances: Decimal,
        #[arg(long, default_value = "0", value_parser = parse_decimal_arg)]
        bonus: Decimal,
    },
    /// Remove an employee from the roster.
    Rm {
        #[arg(long)]
        id: String,
    },
    /// List the roster.
    List,
}

fn parse_decimal_arg(s: &str) -> Result<Decimal, ParseDecimalError> {
    parse_decimal(s)
}

// ─── tracing ─────────────────────────────────────────────────────────────────

/// Initialise the tracing subscriber.
///
/// * Honours `RUST_LOG` when set.
/// * Falls back to `info` so normal runs are quiet.
/// * Strips timestamps and target names to keep CLI output clean.
fn init_tracing() {
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::from("info"));

    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .without_time()
        .with_target(false)
        .init();
}

// ─── entry point ─────────────────────────────────────────────────────────────

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    init_tracing();

    let cli = Cli::parse();
    let store = JsonStore::open(&cli.data_dir).await?;

    match cli.command {
        Command::Record { command } => match command {
            RecordCommand::Add(args) => app::add_record(&store, args.into()).await?,
            RecordCommand::Edit(args) => app::edit_record(&store, args.into()).await?,
            RecordCommand::Rm { period } => app::delete_record(&store, period).await?,
            RecordCommand::List => app::list_records(&store).await?,
        },
        Command::Employee { command } => match command {
            EmployeeCommand::Add {
                name,
                base_salary,
                allowances,
                bonus,
            } => {
                app::add_employee(
                    &store,
                    NewEmployee {
                        name,
                        base_salary,
                        allowances,
                        bonus,
                    },
                )
                .await?
            }
            EmployeeCommand::Edit {
                id,
                name,
                base_salary,
                allowances,
                bonus,
            } => {
                app::edit_employee(
                    &store,
                    Employee {
                        id,
                        name,
                        base_salary,
                        allowances,
                        bonus,
                    },
                )
                .await?
            }
            EmployeeCommand::Rm { id } => app::delete_employee(&store, &id).await?,
            EmployeeCommand::List => app::list_employees(&store).await?,
        },
        Command::Indicators { period } => app::show_indicators(&store, period).await?,
        Command::Payroll => app::show_payroll(&store).await?,
        Command::Fiscal { period } => app::show_fiscal(&store, period).await?,
        Command::Analyze {
            period,
            api_key,
            model,
        } => {
            let mut gemini = GeminiModel::new(api_key);
            if let Some(model) = model {
                gemini = gemini.with_model(model);
            }
            app::run_analysis(&store, &gemini, period).await?;
        }
    }

    Ok(())
}
