use jiff::Timestamp;
use medibot_core::models::disease::DiseaseId;
use medibot_core::models::prediction::Prediction;
use medibot_export::docx::generate_docx;
use medibot_export::render::render_docx_source;
use medibot_export::report::{docx_report_file_name, write_docx_report, ReportContext};
use medibot_export::styles::DocumentStyles;
use medibot_knowledge::KnowledgeBase;

fn report() -> ReportContext {
    let prediction = Prediction::new(DiseaseId::Chickenpox, 64.0)
        .with_probabilities([(DiseaseId::Chickenpox, 64.0), (DiseaseId::Measles, 36.0)]);
    ReportContext::new(&prediction, &KnowledgeBase::new(), "2026-03-01T09:30:00Z".parse().unwrap())
}

#[test]
fn source_has_sections_and_page_break_before_disclaimer() {
    let source = render_docx_source(&report()).unwrap();

    assert!(source.starts_with("# SKIN DISEASE PREDICTION REPORT\n> AI-Powered Medical Image Analysis\n"));
    assert!(source.contains("**Predicted Disease:** Chickenpox\n"));
    assert!(source.contains("- Chickenpox: 64%\n- Measles: 36%\n"));
    assert!(source.contains("## PRECAUTIONS & HEALTH GUIDELINES\n**Warning:** "));

    let page_break = source.find("\n---\n").unwrap();
    let disclaimer = source.find("## IMPORTANT DISCLAIMER").unwrap();
    assert!(page_break < disclaimer);
}

#[test]
fn generates_a_zip_package() {
    let source = render_docx_source(&report()).unwrap();
    let bytes = generate_docx(&source, &DocumentStyles::default()).unwrap();

    assert!(bytes.len() > 1000);
    assert_eq!(&bytes[..2], b"PK");
}

#[test]
fn unclosed_bold_marker_still_builds() {
    let bytes =
        generate_docx("**half bold\n- item\n> note\n---\n", &DocumentStyles::default()).unwrap();
    assert_eq!(&bytes[..2], b"PK");
}

#[test]
fn writes_docx_with_conventional_name() {
    let dir = tempfile::tempdir().unwrap();
    let report = report();

    let path = write_docx_report(&report, &DocumentStyles::default(), dir.path()).unwrap();

    assert_eq!(
        path.file_name().unwrap().to_str().unwrap(),
        docx_report_file_name(report.generated())
    );
    assert!(path.to_str().unwrap().ends_with(".docx"));
    assert!(std::fs::metadata(&path).unwrap().len() > 0);
    assert_eq!(
        docx_report_file_name(Timestamp::UNIX_EPOCH),
        "Disease_Prediction_Report_0.docx"
    );
}
