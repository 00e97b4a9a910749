use jiff::Timestamp;
use medibot_core::models::disease::DiseaseId;
use medibot_core::models::prediction::Prediction;
use medibot_export::error::ExportError;
use medibot_export::render::{render_template, render_text_report};
use medibot_export::report::{text_report_file_name, write_text_report, ReportContext};
use medibot_knowledge::KnowledgeBase;

fn at() -> Timestamp {
    "2026-03-01T09:30:00Z".parse().unwrap()
}

fn measles() -> Prediction {
    Prediction::new(DiseaseId::Measles, 82.5).with_probabilities([
        (DiseaseId::Normal, 3.5),
        (DiseaseId::Measles, 82.5),
        (DiseaseId::Chickenpox, 10.0),
        (DiseaseId::Monkeypox, 4.0),
    ])
}

#[test]
fn header_and_result_section() {
    let report = ReportContext::new(&measles(), &KnowledgeBase::new(), at());
    let text = render_text_report(&report).unwrap();

    assert!(text.contains("SKIN DISEASE PREDICTION REPORT\n=====================================\n"));
    assert!(text.contains("Generated: 2026-03-01 09:30:00 UTC\n"));
    assert!(text.contains("Disease: Measles\nConfidence: 82.5%\n"));
    assert!(text.ends_with("Date: 2026-03-01 09:30:00 UTC\n"));
}

#[test]
fn probabilities_are_listed_highest_first() {
    let report = ReportContext::new(&measles(), &KnowledgeBase::new(), at());
    let text = render_text_report(&report).unwrap();

    assert!(text.contains(
        "DETAILED ANALYSIS:\nMeasles: 82.5%\nChickenpox: 10%\nMonkeypox: 4%\nNormal: 3.5%\n"
    ));
}

#[test]
fn precautions_are_numbered() {
    let kb = KnowledgeBase::new();
    let report = ReportContext::new(&measles(), &kb, at());
    let text = render_text_report(&report).unwrap();

    let expected = kb.precautions(&DiseaseId::Measles);
    assert!(text.contains(expected.warning));
    for (i, item) in expected.items.iter().enumerate() {
        assert!(text.contains(&format!("{}. {item}\n", i + 1)), "missing item {}", i + 1);
    }
    assert!(text.contains("Assessment: Since the model is very confident about Measles (82.5%)"));
}

#[test]
fn unknown_label_gets_normal_precautions() {
    let prediction = Prediction::new(DiseaseId::Other("Eczema".to_string()), 30.0);
    let report = ReportContext::new(&prediction, &KnowledgeBase::new(), at());
    let text = render_text_report(&report).unwrap();

    assert!(text.contains("Disease: Eczema\n"));
    assert!(text.contains("Your skin appears to be in normal, healthy condition."));
    assert!(text.contains("1. Continue maintaining good personal hygiene practices\n"));
    assert!(text.contains("Assessment: The model has low confidence about this prediction (30%)."));
}

#[test]
fn file_name_uses_epoch_millis() {
    assert_eq!(
        text_report_file_name(at()),
        format!("disease_prediction_{}.txt", at().as_millisecond())
    );
    assert_eq!(text_report_file_name(Timestamp::UNIX_EPOCH), "disease_prediction_0.txt");
}

#[test]
fn writes_report_into_directory() {
    let dir = tempfile::tempdir().unwrap();
    let report = ReportContext::new(&measles(), &KnowledgeBase::new(), at());

    let path = write_text_report(&report, dir.path()).unwrap();

    assert_eq!(path.file_name().unwrap().to_str().unwrap(), report.text_file_name());
    let written = std::fs::read_to_string(&path).unwrap();
    assert_eq!(written, render_text_report(&report).unwrap());
}

#[test]
fn broken_template_is_a_parse_error() {
    let report = ReportContext::new(&measles(), &KnowledgeBase::new(), at());
    let result = render_template("bad", "{% for x in %}", &report);
    assert!(matches!(result, Err(ExportError::TemplateParse(_))));
}

#[test]
fn missing_variable_is_a_render_error() {
    let report = ReportContext::new(&measles(), &KnowledgeBase::new(), at());
    let result = render_template("bad", "{{ patient_name }}", &report);
    assert!(matches!(result, Err(ExportError::TemplateRender(_))));
}
