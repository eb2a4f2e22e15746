use clap::{Parser, Subcommand, ValueEnum};
use std::path::PathBuf;

use crate::inputs::{Currency, Recurrence};

#[derive(Parser, Debug)]
#[command(name = "meetiq")]
#[command(about = "Estimate the cost, waste and risk of recurring meetings", long_about = None)]
#[command(version)]
pub struct Cli {
    /// Increase verbosity level (can be repeated: -v, -vv, -vvv)
    #[arg(short = 'v', long = "verbose", action = clap::ArgAction::Count, global = true)]
    pub verbosity: u8,

    /// Configuration file (defaults to the nearest .meetiq.toml)
    #[arg(long, global = true, env = "MEETIQ_CONFIG")]
    pub config: Option<PathBuf>,

    /// Disable colored output
    #[arg(long, global = true)]
    pub plain: bool,

    #[command(subcommand)]
    pub command: Commands,
}

#[derive(Subcommand, Debug)]
pub enum Commands {
    /// Compute cost, waste, risk and a verdict for one meeting
    Evaluate {
        /// Number of attendees
        #[arg(short, long, default_value = "6")]
        attendees: u32,

        /// Average annual salary of attendees
        #[arg(short, long, default_value = "100000")]
        salary: f64,

        /// Meeting length in minutes
        #[arg(short, long, default_value = "60")]
        duration: f64,

        /// one-time, weekly or monthly (defaults to config)
        #[arg(short, long)]
        recurrence: Option<Recurrence>,

        /// USD or EUR (defaults to config)
        #[arg(short, long)]
        currency: Option<Currency>,

        /// The meeting had a defined goal
        #[arg(long)]
        goal: bool,

        /// Someone owned the meeting
        #[arg(long)]
        owner: bool,

        /// A pre-read was sent
        #[arg(long)]
        preread: bool,

        /// A decision was made
        #[arg(long)]
        decision: bool,

        /// Next actions were clear
        #[arg(long = "next-actions")]
        next_actions: bool,

        /// Use this quality score instead of the checklist
        #[arg(long)]
        score: Option<f64>,

        /// Clamp inputs outside the configured limits instead of rejecting them
        #[arg(long)]
        clamp: bool,

        /// Save the result under this name to the tracked-meetings file
        #[arg(long, requires = "store")]
        save_as: Option<String>,

        /// Tracked-meetings JSON file used with --save-as
        #[arg(long)]
        store: Option<PathBuf>,

        /// Output format
        #[arg(short, long, value_enum, default_value = "terminal")]
        format: OutputFormat,

        /// Output file (defaults to stdout)
        #[arg(short, long)]
        output: Option<PathBuf>,
    },

    /// Summarize tracked meetings from a JSON file
    Summary {
        /// JSON array of saved meetings
        file: PathBuf,

        /// Output format
        #[arg(short, long, value_enum, default_value = "terminal")]
        format: OutputFormat,

        /// Output file (defaults to stdout)
        #[arg(short, long)]
        output: Option<PathBuf>,
    },

    /// Write a default .meetiq.toml in the current directory
    Init {
        /// Overwrite an existing file
        #[arg(long)]
        force: bool,
    },
}

#[derive(Copy, Clone, Debug, PartialEq, Eq, ValueEnum)]
pub enum OutputFormat {
    Json,
    Markdown,
    Terminal,
}

impl From<OutputFormat> for crate::io::OutputFormat {
    fn from(format: OutputFormat) -> Self {
        match format {
            OutputFormat::Json => crate::io::OutputFormat::Json,
            OutputFormat::Markdown => crate::io::OutputFormat::Markdown,
            OutputFormat::Terminal => crate::io::OutputFormat::Terminal,
        }
    }
}

/// Log filter for a `-v` count
pub fn log_level(verbosity: u8) -> log::LevelFilter {
    match verbosity {
        0 => log::LevelFilter::Warn,
        1 => log::LevelFilter::Info,
        2 => log::LevelFilter::Debug,
        _ => log::LevelFilter::Trace,
    }
}
