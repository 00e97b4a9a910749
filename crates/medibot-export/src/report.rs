//! The data a report shows, and where reports are written.

use std::path::{Path, PathBuf};

use jiff::Timestamp;
use medibot_core::models::prediction::Prediction;
use medibot_knowledge::confidence::recommendation;
use medibot_knowledge::KnowledgeBase;
use serde::Serialize;

use crate::docx::generate_docx;
use crate::error::ExportError;
use crate::render::{render_docx_source, render_text_report};
use crate::styles::DocumentStyles;

/// One "Label: score" line of the detailed analysis.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct ProbabilityLine {
    pub label: String,
    pub score: String,
}

/// Template context for both report formats. Numbers are pre-formatted
/// so the two layouts print them identically.
#[derive(Debug, Clone, Serialize)]
pub struct ReportContext {
    pub generated_at: String,
    pub disease: String,
    pub confidence: String,
    pub probabilities: Vec<ProbabilityLine>,
    pub warning: String,
    pub precautions: Vec<String>,
    pub recommendation: String,
    #[serde(skip)]
    generated: Timestamp,
}

impl ReportContext {
    /// Assemble the report for `prediction`. Labels outside the knowledge
    /// base get the `Normal` precautions.
    pub fn new(prediction: &Prediction, kb: &KnowledgeBase, generated: Timestamp) -> Self {
        let precautions = kb.precautions(&prediction.predicted_class);

        Self {
            generated_at: generated.strftime("%Y-%m-%d %H:%M:%S UTC").to_string(),
            disease: prediction.predicted_class.to_string(),
            confidence: percent(prediction.confidence),
            probabilities: prediction
                .ranked_probabilities()
                .into_iter()
                .map(|(id, score)| ProbabilityLine {
                    label: id.to_string(),
                    score: percent(score),
                })
                .collect(),
            warning: precautions.warning.to_string(),
            precautions: precautions.items.iter().map(|s| s.to_string()).collect(),
            recommendation: recommendation(prediction.confidence, &prediction.predicted_class),
            generated,
        }
    }

    pub fn generated(&self) -> Timestamp {
        self.generated
    }

    pub fn text_file_name(&self) -> String {
        text_report_file_name(self.generated)
    }

    pub fn docx_file_name(&self) -> String {
        docx_report_file_name(self.generated)
    }
}

fn percent(value: f64) -> String {
    format!("{value}%")
}

pub fn text_report_file_name(at: Timestamp) -> String {
    format!("disease_prediction_{}.txt", at.as_millisecond())
}

pub fn docx_report_file_name(at: Timestamp) -> String {
    format!("Disease_Prediction_Report_{}.docx", at.as_millisecond())
}

/// Render the text report into `dir` and return the written path.
pub fn write_text_report(report: &ReportContext, dir: &Path) -> Result<PathBuf, ExportError> {
    let rendered = render_text_report(report)?;
    let path = dir.join(report.text_file_name());
    std::fs::write(&path, rendered)?;
    tracing::info!(path = %path.display(), disease = %report.disease, "wrote text report");
    Ok(path)
}

/// Build the DOCX report into `dir` and return the written path.
pub fn write_docx_report(
    report: &ReportContext,
    styles: &DocumentStyles,
    dir: &Path,
) -> Result<PathBuf, ExportError> {
    let source = render_docx_source(report)?;
    let bytes = generate_docx(&source, styles)?;
    let path = dir.join(report.docx_file_name());
    std::fs::write(&path, bytes)?;
    tracing::info!(path = %path.display(), disease = %report.disease, "wrote DOCX report");
    Ok(path)
}
