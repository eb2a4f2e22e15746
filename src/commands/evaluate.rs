use super::open_writer;
use crate::config::MeetiqConfig;
use crate::errors::Error;
use crate::evaluation::MeetingEvaluation;
use crate::inputs::MeetingInputs;
use crate::io::{self, OutputFormat};
use crate::portfolio::{parse_saved_meetings, SavedMeeting};
use crate::quality::QualityAnswers;
use anyhow::{Context, Result};
use std::path::{Path, PathBuf};

pub struct EvaluateConfig {
    pub inputs: MeetingInputs,
    pub answers: QualityAnswers,
    pub score: Option<f64>,
    pub clamp: bool,
    pub save_as: Option<String>,
    pub store: Option<PathBuf>,
    pub format: OutputFormat,
    pub output: Option<PathBuf>,
    pub plain: bool,
}

/// Apply configured limits: reject out-of-range inputs unless `clamp` is set.
pub fn prepare_inputs(
    inputs: &MeetingInputs,
    clamp: bool,
    config: &MeetiqConfig,
) -> Result<MeetingInputs> {
    let issues = config.limits.validate(inputs);
    if issues.is_empty() {
        return Ok(*inputs);
    }

    let joined = issues
        .iter()
        .map(|issue| issue.to_string())
        .collect::<Vec<_>>()
        .join(" ");

    if !clamp {
        return Err(Error::validation(format!(
            "{joined} Pass --clamp to use the nearest accepted values."
        ))
        .into());
    }

    let clamped = config.limits.clamp(inputs);
    log::warn!(
        "{joined} Using {} attendees, salary {:.0}, {:.0} minutes.",
        clamped.attendees,
        clamped.avg_salary,
        clamped.duration_minutes
    );
    Ok(clamped)
}

pub fn handle_evaluate(options: EvaluateConfig, config: &MeetiqConfig) -> Result<()> {
    let inputs = prepare_inputs(&options.inputs, options.clamp, config)?;
    let evaluation =
        MeetingEvaluation::evaluate_with_score(&inputs, &options.answers, options.score, config);

    if let (Some(name), Some(store)) = (options.save_as.as_deref(), options.store.as_deref()) {
        let record = SavedMeeting::from_evaluation(name, &evaluation)?;
        save_meeting(store, record)?;
    }

    let mut writer = open_writer(options.format, options.output.as_deref(), options.plain)?;
    writer.write_evaluation(&evaluation)
}

/// Insert or replace (by name) a meeting in the tracked-meetings file.
pub fn save_meeting(store: &Path, record: SavedMeeting) -> Result<()> {
    let mut meetings = if store.exists() {
        let contents = io::read_file(store)?;
        parse_saved_meetings(&contents).with_context(|| format!("parsing {}", store.display()))?
    } else {
        Vec::new()
    };

    match meetings.iter_mut().find(|m| m.name == record.name) {
        Some(existing) => {
            log::info!("Updating tracked meeting '{}'", record.name);
            *existing = record;
        }
        None => {
            log::info!("Tracking new meeting '{}'", record.name);
            meetings.push(record);
        }
    }

    io::write_file(store, &serde_json::to_string_pretty(&meetings)?)
}
