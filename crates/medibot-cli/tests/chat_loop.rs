use medibot_chat::session::ConversationSession;
use medibot_cli::commands::{handle_line, write_transcript, Context, LineOutcome};
use medibot_cli::config::MediBotConfig;
use medibot_core::models::chat_history::Sender;

fn context(classifier_url: &str) -> Context {
    Context {
        config: MediBotConfig {
            classifier_url: classifier_url.to_string(),
            ..MediBotConfig::default()
        },
        seed: Some(7),
        no_delay: true,
    }
}

#[tokio::test]
async fn rejected_classifier_url_keeps_the_session_going() {
    for url in ["ftp://x", "http://user:pw@localhost:5000"] {
        let ctx = context(url);
        let mut engine = ctx.engine();
        let mut session = ConversationSession::new();
        engine.open(&mut session);
        let before = session.history().len();

        let outcome = handle_line(&ctx, &mut engine, &mut session, "/predict a.png").await;
        assert_eq!(outcome, LineOutcome::Continue);
        assert_eq!(session.history().len(), before);
        assert!(session.prediction().is_none());

        let outcome = handle_line(&ctx, &mut engine, &mut session, "how accurate is this").await;
        assert_eq!(outcome, LineOutcome::Continue);
        assert!(session.history().len() >= before + 2);
        assert_eq!(session.history()[before].sender, Sender::User);
    }
}

#[tokio::test]
async fn quit_commands_end_the_loop() {
    let ctx = context("http://localhost:5000");
    let mut engine = ctx.engine();
    let mut session = ConversationSession::new();

    for line in ["/quit", "  /exit  "] {
        assert_eq!(handle_line(&ctx, &mut engine, &mut session, line).await, LineOutcome::Quit);
    }
    assert!(session.is_empty());
}

#[tokio::test]
async fn transcript_keeps_turns_after_a_failed_upload() {
    let ctx = context("ftp://x");
    let mut engine = ctx.engine();
    let mut session = ConversationSession::new();
    engine.open(&mut session);
    handle_line(&ctx, &mut engine, &mut session, "/predict missing.png").await;
    handle_line(&ctx, &mut engine, &mut session, "hello").await;

    let dir = tempfile::tempdir().unwrap();
    let path = dir.path().join("transcript.json");
    write_transcript(&path, &session).unwrap();

    let saved: serde_json::Value =
        serde_json::from_str(&std::fs::read_to_string(&path).unwrap()).unwrap();
    assert_eq!(saved["turns"].as_array().unwrap().len(), session.history().len());
    assert_eq!(saved["id"], session.id().to_string());
}
