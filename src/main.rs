use anyhow::Result;
use clap::{CommandFactory, Parser, Subcommand};
use finpulse::cli::OutputFormat;
use finpulse::core::SafeToSpendMode;
use finpulse::core::log::init_logging;

#[derive(Parser)]
#[command(version, about)]
struct Cli {
    /// Enable verbose logging
    #[arg(short, long, global = true)]
    verbose: bool,

    /// Path to optional ledger file
    #[arg(short, long, global = true)]
    config_path: Option<String>,

    /// Print reports as JSON
    #[arg(long, global = true)]
    json: bool,

    #[command(subcommand)]
    command: Option<Commands>,
}

impl From<Commands> for finpulse::AppCommand {
    fn from(cmd: Commands) -> finpulse::AppCommand {
        match cmd {
            Commands::Summary => finpulse::AppCommand::Summary,
            Commands::Health => finpulse::AppCommand::Health,
            Commands::Spend { mode } => finpulse::AppCommand::Spend {
                mode: mode.as_deref().map(SafeToSpendMode::from),
            },
            Commands::Advice { limit } => finpulse::AppCommand::Advice { limit },
            Commands::Calendar { days } => finpulse::AppCommand::Calendar { days },
            Commands::Setup => unreachable!("Setup command should be handled separately"),
        }
    }
}

#[derive(Subcommand)]
enum Commands {
    /// Create an example ledger
    Setup,
    /// Display net worth and balance sheet summary
    Summary,
    /// Display financial health score
    Health,
    /// Display how much can be spent safely
    Spend {
        /// conservative, balanced or aggressive
        #[arg(short, long)]
        mode: Option<String>,
    },
    /// Display recommendations
    Advice {
        /// Maximum number of recommendations to show
        #[arg(short, long)]
        limit: Option<usize>,
    },
    /// Display upcoming receivables, debts and installments
    Calendar {
        /// Number of days to look ahead
        #[arg(short, long, default_value_t = 30)]
        days: u32,
    },
}

fn main() -> Result<()> {
    let cli = Cli::parse();

    init_logging(cli.verbose);

    let format = if cli.json {
        OutputFormat::Json
    } else {
        OutputFormat::Table
    };

    let result = match cli.command {
        Some(Commands::Setup) => finpulse::cli::setup::setup(),
        Some(cmd) => finpulse::run_command(cmd.into(), cli.config_path.as_deref(), format),
        None => {
            Cli::command().print_help()?;
            Ok(())
        }
    };

    if let Err(e) = &result {
        tracing::error!(error = %e, "Application failed");
    }
    result
}
