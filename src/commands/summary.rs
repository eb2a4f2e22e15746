use super::open_writer;
use crate::io::{self, OutputFormat};
use crate::portfolio::{parse_saved_meetings, PortfolioSummary};
use anyhow::{Context, Result};
use std::path::PathBuf;

pub struct SummaryConfig {
    pub file: PathBuf,
    pub format: OutputFormat,
    pub output: Option<PathBuf>,
    pub plain: bool,
}

pub fn handle_summary(config: SummaryConfig) -> Result<()> {
    let contents = io::read_file(&config.file)
        .with_context(|| format!("reading {}", config.file.display()))?;
    let meetings = parse_saved_meetings(&contents)
        .with_context(|| format!("parsing {}", config.file.display()))?;
    log::debug!("loaded {} tracked meetings", meetings.len());

    let summary = PortfolioSummary::from_meetings(&meetings);
    let mut writer = open_writer(config.format, config.output.as_deref(), config.plain)?;
    writer.write_summary(&summary)
}
