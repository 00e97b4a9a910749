use medibot_core::models::disease::DiseaseId;
use medibot_knowledge::{all_conditions, get_condition, KnowledgeBase};

#[test]
fn registry_follows_classifier_order() {
    let ids: Vec<DiseaseId> = all_conditions().iter().map(|c| c.id()).collect();
    assert_eq!(ids, DiseaseId::KNOWN.to_vec());
}

#[test]
fn every_known_class_has_guidance_and_precautions() {
    let kb = KnowledgeBase::new();
    for id in DiseaseId::KNOWN {
        let condition = kb.get(&id).expect("known class must be registered");
        assert!(!condition.guidance().is_empty());
        assert!(condition.precautions().items.len() >= 10);
        assert!(condition.summary().starts_with(id.as_str()));
    }
}

#[test]
fn unknown_id_falls_back_to_normal_entry() {
    let kb = KnowledgeBase::new();
    let unknown = DiseaseId::Other("Unicornitis".to_string());

    assert!(kb.get(&unknown).is_none());
    assert!(get_condition(&unknown).is_none());
    assert_eq!(kb.entry(&unknown).id(), DiseaseId::Normal);
    assert_eq!(
        kb.precautions(&unknown).warning,
        "Your skin appears to be in normal, healthy condition."
    );
}

#[test]
fn unknown_guidance_is_the_unfilled_referral_template() {
    let kb = KnowledgeBase::new();
    let text = kb.guidance(&DiseaseId::Other("Unicornitis".to_string()));
    assert_eq!(
        text,
        "I don't have specific guidance for {disease}. Please consult a healthcare professional."
    );
    assert!(!text.contains("Unicornitis"));
}

#[test]
fn measles_guidance_urges_immediate_care() {
    let kb = KnowledgeBase::new();
    let text = kb.guidance(&DiseaseId::Measles);
    assert!(text.starts_with("Based on the prediction of Measles:\n• Seek immediate medical attention"));
    assert_eq!(kb.entry(&DiseaseId::Measles).profile().severity, "moderate to high");
}

#[test]
fn chickenpox_has_eleven_precautions() {
    let kb = KnowledgeBase::new();
    assert_eq!(kb.precautions(&DiseaseId::Chickenpox).items.len(), 11);
}
