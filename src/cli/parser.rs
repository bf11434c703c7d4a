use crate::export::{ExportFormat, ExportKind};
use crate::models::Timeframe;
use clap::{Args, Parser, Subcommand};

/// Command-line interface definition for rAvailability
/// CLI application to compute employee availability and utilization
#[derive(Parser)]
#[command(
    name = "ravailability",
    version = env!("CARGO_PKG_VERSION"),
    about = "Employee availability & utilization from job-assignment spreadsheets",
    long_about = None
)]
pub struct Cli {
    /// Override configuration file path
    #[arg(global = true, long = "config", value_name = "FILE")]
    pub config: Option<String>,

    /// Increase log verbosity (-v, -vv, -vvv)
    #[arg(global = true, short = 'v', long = "verbose", action = clap::ArgAction::Count)]
    pub verbose: u8,

    /// Only log errors
    #[arg(global = true, short = 'q', long = "quiet", action = clap::ArgAction::Count)]
    pub quiet: u8,

    /// Pin "today" (YYYY-MM-DD) used to resolve preset windows
    #[arg(global = true, long = "today", value_name = "DATE")]
    pub today: Option<String>,

    #[command(subcommand)]
    pub command: Commands,
}

/// Timeline window selection shared by the reporting commands.
#[derive(Args, Clone, Debug, Default)]
pub struct WindowArgs {
    /// Window preset, or `custom` together with --from/--to
    #[arg(long, short = 't', value_enum)]
    pub timeframe: Option<Timeframe>,

    /// Custom window start (implies --timeframe custom)
    #[arg(long, value_name = "DATE")]
    pub from: Option<String>,

    /// Custom window end (implies --timeframe custom)
    #[arg(long, value_name = "DATE")]
    pub to: Option<String>,
}

#[derive(Subcommand)]
pub enum Commands {
    /// Write a default configuration file
    Init {
        #[arg(long, short = 'f', help = "Overwrite an existing configuration file")]
        force: bool,
    },

    /// Manage the configuration file (view, check or edit)
    Config {
        #[arg(long = "print", help = "Print the current configuration")]
        print_config: bool,

        #[arg(long = "check", help = "Validate the configuration file")]
        check: bool,

        #[arg(
            long = "edit",
            help = "Edit the configuration file (default editor: $EDITOR, or nano/notepad)"
        )]
        edit_config: bool,

        #[arg(
            long = "editor",
            help = "Specify the editor to use (vim, nano, or custom path)"
        )]
        editor: Option<String>,
    },

    /// Team-wide statistics
    Team {
        /// Assignment file (.csv, .xlsx, .xls)
        file: String,
    },

    /// List employees sorted by summary utilization
    List {
        /// Assignment file (.csv, .xlsx, .xls)
        file: String,
    },

    /// Utilization over a timeline window
    Timeline {
        /// Assignment file (.csv, .xlsx, .xls)
        file: String,

        #[arg(long = "emp", help = "Only this employee id")]
        emp: Option<String>,

        #[arg(long = "days", help = "Show the day-by-day series")]
        days: bool,

        #[command(flatten)]
        window: WindowArgs,
    },

    /// Consolidated job periods
    Periods {
        /// Assignment file (.csv, .xlsx, .xls)
        file: String,

        #[arg(long = "emp", help = "Only this employee id")]
        emp: Option<String>,
    },

    /// Export computed data
    Export {
        /// Assignment file (.csv, .xlsx, .xls)
        file: String,

        #[arg(long, value_enum, default_value = "csv")]
        format: ExportFormat,

        #[arg(long, value_enum, default_value = "employees")]
        kind: ExportKind,

        #[arg(long, value_name = "FILE")]
        out: String,

        #[arg(long, short = 'f')]
        force: bool,

        #[command(flatten)]
        window: WindowArgs,
    },
}
