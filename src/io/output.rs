use crate::evaluation::MeetingEvaluation;
use crate::formatting::{format_money, Painter, PlainPainter, Tone};
use crate::messaging::MessageSeverity;
use crate::portfolio::PortfolioSummary;
use crate::risk::{RiskResult, Severity};
use comfy_table::{presets::UTF8_FULL, Table};
use std::io::Write;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum OutputFormat {
    Json,
    Markdown,
    Terminal,
}

pub trait OutputWriter {
    fn write_evaluation(&mut self, evaluation: &MeetingEvaluation) -> anyhow::Result<()>;
    fn write_summary(&mut self, summary: &PortfolioSummary) -> anyhow::Result<()>;
}

pub fn create_writer<'a>(
    format: OutputFormat,
    writer: Box<dyn Write + 'a>,
    painter: Box<dyn Painter>,
) -> Box<dyn OutputWriter + 'a> {
    match format {
        OutputFormat::Json => Box::new(JsonWriter::new(writer)),
        OutputFormat::Markdown => Box::new(MarkdownWriter::new(writer)),
        OutputFormat::Terminal => Box::new(TerminalWriter::new(writer, painter)),
    }
}

fn severity_tone(severity: Severity) -> Tone {
    match severity {
        Severity::Good => Tone::Positive,
        Severity::Mid => Tone::Caution,
        Severity::Severe => Tone::Negative,
    }
}

const RISK_BAR_WIDTH: usize = 30;

/// One-line risk gauge with a marker at the risk position.
fn risk_bar(risk: &RiskResult, width: usize) -> String {
    let width = width.max(1);
    let centre = risk.marker_position(width as f64, 0.5);
    let marker = ((centre - 0.5).round() as usize).min(width - 1);
    (0..width)
        .map(|i| if i == marker { '●' } else { '─' })
        .collect()
}

fn message_tone(severity: MessageSeverity) -> Tone {
    match severity {
        MessageSeverity::Good => Tone::Positive,
        MessageSeverity::Mid => Tone::Caution,
        MessageSeverity::Bad | MessageSeverity::Severe => Tone::Negative,
    }
}

pub struct JsonWriter<W: Write> {
    writer: W,
}

impl<W: Write> JsonWriter<W> {
    pub fn new(writer: W) -> Self {
        Self { writer }
    }
}

impl<W: Write> OutputWriter for JsonWriter<W> {
    fn write_evaluation(&mut self, evaluation: &MeetingEvaluation) -> anyhow::Result<()> {
        let json = serde_json::to_string_pretty(evaluation)?;
        writeln!(self.writer, "{json}")?;
        Ok(())
    }

    fn write_summary(&mut self, summary: &PortfolioSummary) -> anyhow::Result<()> {
        let json = serde_json::to_string_pretty(summary)?;
        writeln!(self.writer, "{json}")?;
        Ok(())
    }
}

pub struct MarkdownWriter<W: Write> {
    writer: W,
}

impl<W: Write> MarkdownWriter<W> {
    pub fn new(writer: W) -> Self {
        Self { writer }
    }

    fn write_row(&mut self, metric: &str, value: &str) -> anyhow::Result<()> {
        writeln!(self.writer, "| {metric} | {value} |")?;
        Ok(())
    }
}

impl<W: Write> OutputWriter for MarkdownWriter<W> {
    fn write_evaluation(&mut self, evaluation: &MeetingEvaluation) -> anyhow::Result<()> {
        let currency = evaluation.inputs.currency;
        writeln!(self.writer, "# {}", evaluation.message.headline)?;
        writeln!(self.writer)?;
        writeln!(self.writer, "{}", evaluation.message.body)?;
        writeln!(self.writer)?;
        writeln!(self.writer, "| Metric | Value |")?;
        writeln!(self.writer, "|--------|-------|")?;
        self.write_row("Quality score", &format!("{:.0}/100", evaluation.score))?;
        self.write_row(
            "Cost per meeting",
            &format_money(evaluation.cost.cost_per_meeting, currency),
        )?;
        self.write_row(
            "Cost per person",
            &format_money(evaluation.cost.cost_per_person, currency),
        )?;
        self.write_row(
            "Annualized cost",
            &format_money(evaluation.cost.annualized_cost, currency),
        )?;
        self.write_row(
            "Annualized waste",
            &format_money(evaluation.risk.annualized_waste, currency),
        )?;
        self.write_row(
            "Risk",
            &format!(
                "{:.2} ({})",
                evaluation.risk.risk,
                evaluation.risk.severity.label()
            ),
        )?;
        self.write_row("Heat map", evaluation.heatmap.quadrant.label())?;
        Ok(())
    }

    fn write_summary(&mut self, summary: &PortfolioSummary) -> anyhow::Result<()> {
        let currency = summary.display_currency;
        writeln!(self.writer, "# Your Meeting Tax")?;
        writeln!(self.writer)?;
        writeln!(self.writer, "| Metric | Value |")?;
        writeln!(self.writer, "|--------|-------|")?;
        self.write_row("Annual tax", &format_money(summary.total_annual_cost, currency))?;
        self.write_row(
            "Annual waste",
            &format_money(summary.total_annual_waste, currency),
        )?;
        self.write_row("Meetings", &summary.meeting_count.to_string())?;
        writeln!(self.writer)?;

        if summary.is_empty() {
            writeln!(self.writer, "No meetings saved yet.")?;
            return Ok(());
        }

        writeln!(self.writer, "| Meeting | Annualized cost | Score | Risk |")?;
        writeln!(self.writer, "|---------|-----------------|-------|------|")?;
        for meeting in &summary.meetings {
            writeln!(
                self.writer,
                "| {} | {} | {:.0}/100 | {} |",
                meeting.name,
                format_money(meeting.annualized_cost, meeting.currency),
                meeting.score,
                meeting.severity.label()
            )?;
        }
        Ok(())
    }
}

pub struct TerminalWriter<W: Write> {
    writer: W,
    painter: Box<dyn Painter>,
}

impl<W: Write> TerminalWriter<W> {
    pub fn new(writer: W, painter: Box<dyn Painter>) -> Self {
        Self { writer, painter }
    }

    pub fn plain(writer: W) -> Self {
        Self::new(writer, Box::new(PlainPainter))
    }

    fn line(&mut self, label: &str, value: &str) -> anyhow::Result<()> {
        writeln!(self.writer, "  {:<20} {}", self.painter.dim(label), value)?;
        Ok(())
    }
}

impl<W: Write> OutputWriter for TerminalWriter<W> {
    fn write_evaluation(&mut self, evaluation: &MeetingEvaluation) -> anyhow::Result<()> {
        let currency = evaluation.inputs.currency;
        let message = &evaluation.message;
        let risk = &evaluation.risk;

        writeln!(
            self.writer,
            "{}",
            self.painter
                .tone(&self.painter.header(&message.headline), message_tone(message.severity))
        )?;
        writeln!(self.writer, "{}", message.body)?;
        writeln!(self.writer)?;

        let cost = evaluation.cost;
        self.line("Quality score", &format!("{:.0}/100", evaluation.score))?;
        self.line("Cost per meeting", &format_money(cost.cost_per_meeting, currency))?;
        self.line("Cost per person", &format_money(cost.cost_per_person, currency))?;
        self.line(
            "Annualized cost",
            &self.painter.bold(&format_money(cost.annualized_cost, currency)),
        )?;
        let waste = format_money(risk.annualized_waste, currency);
        let waste = self.painter.tone(&waste, severity_tone(risk.severity));
        self.line("Annualized waste", &waste)?;
        let risk_text = format!("{:.2} {}", risk.risk, risk.severity.label());
        let risk_text = self.painter.tone(&risk_text, severity_tone(risk.severity));
        self.line("Meeting waste risk", &risk_text)?;
        let bar = risk_bar(risk, RISK_BAR_WIDTH);
        self.line("", &self.painter.tone(&bar, severity_tone(risk.severity)))?;
        self.line("Heat map", evaluation.heatmap.quadrant.label())?;
        Ok(())
    }

    fn write_summary(&mut self, summary: &PortfolioSummary) -> anyhow::Result<()> {
        let currency = summary.display_currency;
        writeln!(self.writer, "{}", self.painter.header("Your Meeting Tax"))?;
        self.line("Annual tax", &format_money(summary.total_annual_cost, currency))?;
        let waste = format_money(summary.total_annual_waste, currency);
        self.line("Annual waste", &self.painter.tone(&waste, Tone::Negative))?;
        self.line("Meetings", &summary.meeting_count.to_string())?;

        match summary.highest_cost() {
            Some(top) => {
                let value = format!(
                    "{} ({})",
                    format_money(top.annualized_cost, top.currency),
                    top.name
                );
                self.line("Highest cost", &value)?;
            }
            None => {
                writeln!(self.writer)?;
                writeln!(self.writer, "No meetings saved yet.")?;
                return Ok(());
            }
        }

        let mut table = Table::new();
        table
            .load_preset(UTF8_FULL)
            .set_header(vec!["Meeting", "Recurrence", "Annualized cost", "Score", "Risk"]);
        for meeting in &summary.meetings {
            table.add_row(vec![
                meeting.name.clone(),
                crate::inputs::Recurrence::from(meeting.recurrence).to_string(),
                format_money(meeting.annualized_cost, meeting.currency),
                format!("{:.0}/100", meeting.score),
                meeting.severity.label().to_string(),
            ]);
        }
        writeln!(self.writer)?;
        writeln!(self.writer, "{table}")?;
        Ok(())
    }
}
