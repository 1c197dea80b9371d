use comfy_table::modifiers::UTF8_ROUND_CORNERS;
use comfy_table::presets::UTF8_FULL_CONDENSED;
use comfy_table::{Attribute, Cell, CellAlignment, Color, ContentArrangement, Table};
use serde_json::json;

use pps_model::{ContentCatalog, EvaluationResult};

use crate::cli::OutputFormatArg;

/// Outcome of `pps evaluate`, tied to the step it was scored against.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct EvaluationReport {
    pub step_id: String,
    pub step_title: String,
    /// Nominal reachable maximum for the step.
    pub max_score: u32,
    pub result: EvaluationResult,
}

/// Feedback line category, in display order.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum FeedbackKind {
    Strength,
    Weakness,
    Suggestion,
}

impl FeedbackKind {
    pub fn label(self) -> &'static str {
        match self {
            Self::Strength => "잘한 점",
            Self::Weakness => "개선이 필요한 점",
            Self::Suggestion => "제안사항",
        }
    }

    fn color(self) -> Color {
        match self {
            Self::Strength => Color::Green,
            Self::Weakness => Color::Red,
            Self::Suggestion => Color::Yellow,
        }
    }
}

pub fn steps_table(catalog: &ContentCatalog) -> Table {
    let mut table = Table::new();
    table.set_header(vec![
        header_cell("#"),
        header_cell("Step"),
        header_cell("Title"),
        header_cell("Requirements"),
    ]);
    apply_table_style(&mut table);
    for (index, step) in catalog.steps.iter().enumerate() {
        table.add_row(vec![
            dim_cell(index + 1),
            Cell::new(&step.id).add_attribute(Attribute::Bold),
            Cell::new(&step.title),
            Cell::new(step.requirements.join("\n")),
        ]);
    }
    align_column(&mut table, 0, CellAlignment::Right);
    table
}

pub fn evaluation_table(result: &EvaluationResult) -> Table {
    let mut table = Table::new();
    table.set_header(vec![header_cell("Kind"), header_cell("Feedback")]);
    apply_table_style(&mut table);
    for (kind, lines) in feedback_sections(result) {
        for line in lines {
            table.add_row(vec![
                Cell::new(kind.label()).fg(kind.color()),
                Cell::new(line),
            ]);
        }
    }
    table
}

/// Render a report in the requested output format.
///
/// # Errors
///
/// Returns an error if JSON serialization fails.
pub fn render_evaluation(
    report: &EvaluationReport,
    format: OutputFormatArg,
) -> serde_json::Result<String> {
    match format {
        OutputFormatArg::Table => Ok(render_evaluation_text(report)),
        OutputFormatArg::Json => serde_json::to_string_pretty(&evaluation_json(report)),
    }
}

pub fn evaluation_json(report: &EvaluationReport) -> serde_json::Value {
    json!({
        "step": report.step_id,
        "title": report.step_title,
        "max_score": report.max_score,
        "evaluation": report.result,
    })
}

fn render_evaluation_text(report: &EvaluationReport) -> String {
    let mut out = format!(
        "{} ({})\nScore: {}",
        report.step_title,
        report.step_id,
        report.result.score_label()
    );
    if report.result.exceeds_nominal_max() {
        out.push_str(&format!(" (step maximum {})", report.max_score));
    }
    if !report.result.is_empty() {
        out.push('\n');
        out.push_str(&evaluation_table(&report.result).to_string());
    }
    out
}

fn feedback_sections(result: &EvaluationResult) -> [(FeedbackKind, &[String]); 3] {
    [
        (FeedbackKind::Strength, result.strengths.as_slice()),
        (FeedbackKind::Weakness, result.weaknesses.as_slice()),
        (FeedbackKind::Suggestion, result.suggestions.as_slice()),
    ]
}

pub fn apply_table_style(table: &mut Table) {
    table
        .load_preset(UTF8_FULL_CONDENSED)
        .apply_modifier(UTF8_ROUND_CORNERS)
        .set_content_arrangement(ContentArrangement::Dynamic)
        .set_width(120);
}

fn align_column(table: &mut Table, index: usize, alignment: CellAlignment) {
    if let Some(column) = table.column_mut(index) {
        column.set_cell_alignment(alignment);
    }
}

fn header_cell(label: &str) -> Cell {
    Cell::new(label)
        .fg(Color::Cyan)
        .add_attribute(Attribute::Bold)
}

fn dim_cell<T: ToString>(value: T) -> Cell {
    Cell::new(value).fg(Color::DarkGrey)
}
