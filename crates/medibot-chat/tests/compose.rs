mod common;

use common::Scripted;
use medibot_chat::compose::{ChatSettings, ResponseComposer};
use medibot_chat::session::ConversationSession;
use medibot_core::models::chat_history::Sender;
use medibot_core::models::disease::DiseaseId;
use medibot_core::models::intent::Intent;
use medibot_core::models::prediction::Prediction;
use medibot_knowledge::templates;
use medibot_knowledge::KnowledgeBase;

fn measles_82() -> Prediction {
    Prediction::new(DiseaseId::Measles, 82.0)
}

#[test]
fn meaning_fills_disease_confidence_and_label() {
    let kb = KnowledgeBase::new();
    let settings = ChatSettings::default();
    let composer = ResponseComposer::new(&kb, &settings);

    let text = composer.answer(Intent::Meaning, &measles_82(), &mut Scripted::new());
    assert_eq!(
        text,
        "The predicted class 'Measles' indicates that the model has identified visual characteristics consistent with Measles. With a confidence score of 82%, the system is very confident in this assessment."
    );
}

#[test]
fn accuracy_uses_configured_range_not_prediction() {
    let kb = KnowledgeBase::new();
    let settings = ChatSettings {
        accuracy_range: "70-80".to_string(),
        ..ChatSettings::default()
    };
    let composer = ResponseComposer::new(&kb, &settings);

    let text = composer.answer(Intent::Accuracy, &measles_82(), &mut Scripted::new());
    assert!(text.ends_with("Our model typically achieves 70-80% accuracy on properly captured images."));
    assert!(!text.contains("82"));
}

#[test]
fn fixed_templates_are_returned_verbatim() {
    let kb = KnowledgeBase::new();
    let settings = ChatSettings::default();
    let composer = ResponseComposer::new(&kb, &settings);
    let mut rng = Scripted::new();

    assert_eq!(composer.answer(Intent::Trust, &measles_82(), &mut rng), templates::TRUST);
    assert_eq!(
        composer.answer(Intent::Improvement, &measles_82(), &mut rng),
        templates::IMPROVEMENT
    );
    assert_eq!(
        composer.answer(Intent::Disclaimer, &measles_82(), &mut rng),
        templates::DISCLAIMER
    );
}

#[test]
fn disease_info_for_known_and_unknown_ids() {
    let kb = KnowledgeBase::new();
    let settings = ChatSettings::default();
    let composer = ResponseComposer::new(&kb, &settings);
    let mut rng = Scripted::new();

    let known = composer.answer(
        Intent::DiseaseInfo,
        &Prediction::new(DiseaseId::Monkeypox, 70.0),
        &mut rng,
    );
    assert!(known.starts_with("Based on the prediction of Monkeypox:"));

    let unknown = Prediction::new(DiseaseId::Other("Unicornitis".to_string()), 80.0);
    let mut session = ConversationSession::new();
    let text = composer.compose(Intent::DiseaseInfo, &unknown, &mut session, &mut rng);
    assert_eq!(
        text,
        "I don't have specific guidance for Unicornitis. Please consult a healthcare professional."
    );
}

#[test]
fn default_answer_follows_the_random_source() {
    let kb = KnowledgeBase::new();
    let settings = ChatSettings::default();
    let composer = ResponseComposer::new(&kb, &settings);

    let first = composer.answer(Intent::Default, &measles_82(), &mut Scripted::new().pick(0));
    assert!(first.starts_with("I'm here to help! I can explain the prediction of Measles"));

    let second = composer.answer(Intent::Default, &measles_82(), &mut Scripted::new().pick(1));
    assert!(second.contains("✓ Explain what Measles means"));

    let third = composer.answer(Intent::Default, &measles_82(), &mut Scripted::new().pick(2));
    assert!(third.starts_with("I understand!"));
}

#[test]
fn compose_appends_reply_before_follow_up() {
    let kb = KnowledgeBase::new();
    let settings = ChatSettings::default();
    let composer = ResponseComposer::new(&kb, &settings);
    let mut session = ConversationSession::new();
    let mut rng = Scripted::new().chance(true).pick(3);

    let composed = composer.compose_turn(Intent::Trust, &measles_82(), &mut session, &mut rng);

    assert_eq!(
        composed.follow_up.as_deref(),
        Some("Can I help explain anything else about your prediction?")
    );
    let texts: Vec<&str> = session.history().iter().map(|t| t.text.as_str()).collect();
    assert_eq!(texts, vec![templates::TRUST, templates::FOLLOW_UP_PROMPTS[3]]);
    assert!(session.history().iter().all(|t| t.sender == Sender::Bot));
}

#[test]
fn no_follow_up_when_the_coin_says_no() {
    let kb = KnowledgeBase::new();
    let settings = ChatSettings::default();
    let composer = ResponseComposer::new(&kb, &settings);
    let mut session = ConversationSession::new();

    let reply = composer.compose(
        Intent::Improvement,
        &measles_82(),
        &mut session,
        &mut Scripted::new().chance(false),
    );

    assert_eq!(reply, templates::IMPROVEMENT);
    assert_eq!(session.history().len(), 1);
}

#[test]
fn low_confidence_explanation_carries_the_caveat_block() {
    let kb = KnowledgeBase::new();
    let settings = ChatSettings::default();
    let composer = ResponseComposer::new(&kb, &settings);

    let text = composer.explain(&Prediction::new(DiseaseId::Chickenpox, 40.0));

    assert!(text.contains("🔍 **Predicted Disease:** Chickenpox\n"));
    assert!(text.contains("📊 **Confidence Score:** 40%\n"));
    assert!(text.contains("💡 **Confidence Level:** not very confident\n"));
    assert!(text.contains("The model has low confidence in this classification with 40% confidence."));
    assert!(text.contains(
        "⚠️ Because confidence is low, I strongly recommend:\n\
         • Retaking the image with better lighting\n\
         • Consulting a healthcare professional\n\
         • Not relying solely on this result\n"
    ));
    assert!(!text.contains("strongly match"));
    assert!(!text.contains("somewhat consistent"));
    assert!(text.ends_with(templates::EXPLANATION_CLOSING));
}

#[test]
fn high_confidence_explanation_has_no_caveat() {
    let kb = KnowledgeBase::new();
    let settings = ChatSettings::default();
    let composer = ResponseComposer::new(&kb, &settings);

    let text = composer.explain(&Prediction::new(DiseaseId::Monkeypox, 91.5));

    assert!(text.starts_with("Great! I've analyzed the prediction:\n\n"));
    assert!(text.contains("strongly match Monkeypox"));
    assert!(text.contains("91.5%"));
    assert!(!text.contains("Because confidence is low"));
    assert!(!text.contains('{'));
}

#[test]
fn medium_confidence_explanation() {
    let kb = KnowledgeBase::new();
    let settings = ChatSettings::default();
    let composer = ResponseComposer::new(&kb, &settings);

    let text = composer.explain(&Prediction::new(DiseaseId::Normal, 50.0));
    assert!(text.contains("moderately confident"));
    assert!(text.contains("somewhat consistent with Normal"));
    assert!(!text.contains("Because confidence is low"));
}
