use std::io::Write;
use std::path::{Path, PathBuf};

use medibot_chat::engine::{ChatEngine, Reply};
use medibot_chat::random::SeededRandom;
use medibot_chat::session::ConversationSession;
use medibot_classifier::client::ClassifierClient;
use medibot_classifier::response::decode_response;
use medibot_core::models::disease::DiseaseId;
use medibot_core::models::prediction::Prediction;
use medibot_export::report::{write_docx_report, write_text_report, ReportContext};
use medibot_export::styles::DocumentStyles;
use medibot_knowledge::KnowledgeBase;
use owo_colors::OwoColorize;
use tokio::io::{AsyncBufReadExt, BufReader};

use crate::cli::{ConfigAction, ExportFormat};
use crate::config::{self, MediBotConfig};
use crate::terminal;

/// Settings shared by every subcommand.
#[derive(Debug, Clone)]
pub struct Context {
    pub config: MediBotConfig,
    pub seed: Option<u64>,
    pub no_delay: bool,
}

impl Context {
    pub fn engine(&self) -> ChatEngine {
        let settings = self.config.chat_settings();
        match self.seed {
            Some(seed) => ChatEngine::new(settings, Box::new(SeededRandom::new(seed))),
            None => ChatEngine::with_thread_rng(settings),
        }
    }

    pub fn client(&self) -> eyre::Result<ClassifierClient> {
        Ok(ClassifierClient::new(&self.config.classifier_url)?)
    }
}

/// Read a saved prediction. Accepts a bare prediction object or the
/// service's `{success, prediction}` envelope.
pub fn read_prediction(path: &Path) -> eyre::Result<Prediction> {
    let body = std::fs::read_to_string(path)
        .map_err(|e| eyre::eyre!("failed to read prediction at {}: {e}", path.display()))?;

    let value: serde_json::Value = serde_json::from_str(&body)?;
    if value.get("success").is_some() {
        Ok(decode_response(&body)?)
    } else {
        Ok(Prediction::from_json(&body)?)
    }
}

pub async fn predict(
    ctx: &Context,
    image: &Path,
    json: bool,
    save: Option<&Path>,
    chat: bool,
) -> eyre::Result<()> {
    let prediction = ctx.client()?.predict_file(image).await?;

    if json {
        println!("{}", serde_json::to_string_pretty(&prediction)?);
    } else {
        print!("{}", terminal::prediction_card(&prediction, &KnowledgeBase::new()));
    }

    if let Some(path) = save {
        std::fs::write(path, serde_json::to_string_pretty(&prediction)?)?;
        tracing::info!(path = %path.display(), "saved prediction");
    }

    if chat {
        let mut engine = ctx.engine();
        let mut session = ConversationSession::new();
        open_and_present(ctx, &mut engine, &mut session, Some(prediction)).await;
        chat_loop(ctx, &mut engine, &mut session).await?;
    }
    Ok(())
}

pub async fn chat(
    ctx: &Context,
    prediction: Option<&Path>,
    transcript: Option<&Path>,
) -> eyre::Result<()> {
    let prediction = prediction.map(read_prediction).transpose()?;

    let mut engine = ctx.engine();
    let mut session = ConversationSession::new();
    open_and_present(ctx, &mut engine, &mut session, prediction).await;
    let closed = chat_loop(ctx, &mut engine, &mut session).await;

    if let Some(path) = transcript {
        write_transcript(path, &session)?;
        println!("Transcript written to {}", path.display());
    }
    closed
}

pub fn write_transcript(path: &Path, session: &ConversationSession) -> eyre::Result<()> {
    std::fs::write(path, serde_json::to_string_pretty(session)?)
        .map_err(|e| eyre::eyre!("failed to write transcript to {}: {e}", path.display()))
}

async fn open_and_present(
    ctx: &Context,
    engine: &mut ChatEngine,
    session: &mut ConversationSession,
    prediction: Option<Prediction>,
) {
    if let Some(greeting) = engine.open(session) {
        terminal::print_bot(&greeting);
    }
    if let Some(prediction) = prediction {
        let explanation = engine.present(session, prediction);
        pace(ctx, engine.settings().reply_delay_ms).await;
        terminal::print_bot(&explanation);
    }
}

async fn chat_loop(
    ctx: &Context,
    engine: &mut ChatEngine,
    session: &mut ConversationSession,
) -> eyre::Result<()> {
    println!("{}", "Type a question, /predict <image> to classify, or /quit.".dimmed());

    let mut lines = BufReader::new(tokio::io::stdin()).lines();
    loop {
        print!("{} ", "you>".bold());
        std::io::stdout().flush()?;

        let Some(line) = lines.next_line().await? else {
            break;
        };
        if handle_line(ctx, engine, session, &line).await == LineOutcome::Quit {
            break;
        }
    }

    tracing::info!(session = %session.id(), turns = session.history().len(), "chat closed");
    Ok(())
}

/// What the chat loop does after a line.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum LineOutcome {
    Continue,
    Quit,
}

/// Handle one line of chat input. Classifier failures are printed and the
/// session carries on.
pub async fn handle_line(
    ctx: &Context,
    engine: &mut ChatEngine,
    session: &mut ConversationSession,
    line: &str,
) -> LineOutcome {
    let input = line.trim();

    if matches!(input, "/quit" | "/exit") {
        return LineOutcome::Quit;
    }
    if let Some(path) = input.strip_prefix("/predict ") {
        match classify_image(ctx, Path::new(path.trim())).await {
            Ok(prediction) => {
                let explanation = engine.present(session, prediction);
                pace(ctx, engine.settings().reply_delay_ms).await;
                terminal::print_bot(&explanation);
            }
            Err(e) => {
                tracing::warn!(error = %e, "classification failed");
                eprintln!("{} {e}", "error:".red().bold());
            }
        }
        return LineOutcome::Continue;
    }

    let reply = engine.respond(session, input);
    show_reply(ctx, &reply).await;
    LineOutcome::Continue
}

async fn classify_image(ctx: &Context, path: &Path) -> eyre::Result<Prediction> {
    Ok(ctx.client()?.predict_file(path).await?)
}

async fn show_reply(ctx: &Context, reply: &Reply) {
    for message in &reply.messages {
        if !ctx.no_delay {
            tokio::time::sleep(message.delay).await;
        }
        terminal::print_bot(&message.text);
    }
}

async fn pace(ctx: &Context, millis: u64) {
    if !ctx.no_delay {
        tokio::time::sleep(std::time::Duration::from_millis(millis)).await;
    }
}

/// Write the requested report(s) and return their paths.
pub fn export(prediction: &Path, format: ExportFormat, out: &Path) -> eyre::Result<Vec<PathBuf>> {
    let prediction = read_prediction(prediction)?;
    let report = ReportContext::new(&prediction, &KnowledgeBase::new(), jiff::Timestamp::now());

    let mut written = Vec::new();
    if matches!(format, ExportFormat::Text | ExportFormat::Both) {
        written.push(write_text_report(&report, out)?);
    }
    if matches!(format, ExportFormat::Docx | ExportFormat::Both) {
        written.push(write_docx_report(&report, &DocumentStyles::default(), out)?);
    }
    Ok(written)
}

pub async fn classes(ctx: &Context) -> eyre::Result<()> {
    let kb = KnowledgeBase::new();
    for class in ctx.client()?.classes().await? {
        match kb.get(&DiseaseId::from(class.as_str())) {
            Some(condition) => println!("{} {}", class.bold(), condition.summary().dimmed()),
            None => println!("{} {}", class.bold(), "(no guidance available)".dimmed()),
        }
    }
    Ok(())
}

pub async fn info(ctx: &Context) -> eyre::Result<()> {
    let info = ctx.client()?.model_info().await?;
    println!("{}\n\n{}\n\n{}", info.title.bold(), info.description, info.instructions.dimmed());
    Ok(())
}

pub fn config(ctx: &Context, action: &ConfigAction) -> eyre::Result<()> {
    match action {
        ConfigAction::Show => println!("{}", serde_json::to_string_pretty(&ctx.config)?),
        ConfigAction::Path => println!("{}", config::config_path()?.display()),
        ConfigAction::Init { force } => {
            let path = config::config_path()?;
            if path.exists() && !force {
                return Err(eyre::eyre!(
                    "config already exists at {} (use --force to replace it)",
                    path.display()
                ));
            }
            let written = config::save_config(&MediBotConfig::default())?;
            println!("Wrote {}", written.display());
        }
        ConfigAction::Delete => {
            if config::delete_config()? {
                println!("Config deleted");
            } else {
                println!("No config file to delete");
            }
        }
    }
    Ok(())
}
