use serde::Serialize;
use tera::{Context, Tera};

use crate::error::ExportError;
use crate::report::ReportContext;

/// Plain-text report layout.
pub const TEXT_REPORT_TEMPLATE: &str = include_str!("../templates/report.txt.tera");

/// Markdown-ish layout fed to [`crate::docx::generate_docx`].
pub const DOCX_REPORT_TEMPLATE: &str = include_str!("../templates/report.docx.tera");

/// Render a Tera template against any serializable context.
///
/// The context's fields become the template variables.
pub fn render_template<T: Serialize>(
    template_name: &str,
    template_content: &str,
    context: &T,
) -> Result<String, ExportError> {
    let mut tera = Tera::default();
    tera.add_raw_template(template_name, template_content)
        .map_err(|e| ExportError::TemplateParse(e.to_string()))?;

    let value = serde_json::to_value(context)?;
    let context =
        Context::from_value(value).map_err(|e| ExportError::TemplateRender(e.to_string()))?;

    let rendered = tera.render(template_name, &context)?;
    Ok(rendered)
}

pub fn render_text_report(report: &ReportContext) -> Result<String, ExportError> {
    render_template("report.txt", TEXT_REPORT_TEMPLATE, report)
}

pub fn render_docx_source(report: &ReportContext) -> Result<String, ExportError> {
    render_template("report.docx.md", DOCX_REPORT_TEMPLATE, report)
}
