use anyhow::Result;
use clap::Parser;
use meetiq::cli::{log_level, Cli, Commands};
use meetiq::commands::evaluate::{handle_evaluate, EvaluateConfig};
use meetiq::commands::summary::{handle_summary, SummaryConfig};
use meetiq::config::{load_config, load_config_from, MeetiqConfig};
use meetiq::inputs::MeetingInputs;
use meetiq::quality::QualityAnswers;
use std::path::Path;

fn main() -> Result<()> {
    let cli = Cli::parse();
    init_logging(cli.verbosity);

    match cli.command {
        Commands::Init { force } => {
            let cwd = std::env::current_dir()?;
            let path = meetiq::commands::init::init_config(&cwd, force)?;
            println!("Created {}", path.display());
            Ok(())
        }
        Commands::Summary {
            file,
            format,
            output,
        } => handle_summary(SummaryConfig {
            file,
            format: format.into(),
            output,
            plain: cli.plain,
        }),
        Commands::Evaluate {
            attendees,
            salary,
            duration,
            recurrence,
            currency,
            goal,
            owner,
            preread,
            decision,
            next_actions,
            score,
            clamp,
            save_as,
            store,
            format,
            output,
        } => {
            let config = resolve_config(cli.config.as_deref())?;
            let inputs = MeetingInputs {
                attendees,
                avg_salary: salary,
                duration_minutes: duration,
                recurrence: recurrence.unwrap_or(config.defaults.recurrence),
                currency: currency.unwrap_or(config.defaults.currency),
            };
            let answers = QualityAnswers {
                goal_defined: goal,
                owner_assigned: owner,
                preread_sent: preread,
                decision_made: decision,
                next_actions_clear: next_actions,
            };
            let options = EvaluateConfig {
                inputs,
                answers,
                score,
                clamp,
                save_as,
                store,
                format: format.into(),
                output,
                plain: cli.plain,
            };
            handle_evaluate(options, &config)
        }
    }
}

// RUST_LOG wins over -v when set
fn init_logging(verbosity: u8) {
    env_logger::Builder::new()
        .filter_level(log_level(verbosity))
        .parse_default_env()
        .format_timestamp(None)
        .init();
}

fn resolve_config(path: Option<&Path>) -> Result<MeetiqConfig> {
    match path {
        Some(path) => Ok(load_config_from(path)?),
        None => Ok(load_config()),
    }
}
