//! Terminal output. Bot text carries `**bold**` and `\n` markers; here
//! they become ANSI bold and real line breaks.

use medibot_chat::markup::segments;
use medibot_core::models::prediction::Prediction;
use medibot_knowledge::confidence::classify;
use medibot_knowledge::templates::{BOT_NAME, RESULT_NOTE};
use medibot_knowledge::KnowledgeBase;
use owo_colors::OwoColorize;

/// Replace `**bold**` spans with ANSI bold.
pub fn styled(message: &str) -> String {
    message
        .split('\n')
        .map(|line| {
            segments(line)
                .into_iter()
                .map(|s| {
                    if s.bold {
                        s.text.bold().to_string()
                    } else {
                        s.text.to_string()
                    }
                })
                .collect::<String>()
        })
        .collect::<Vec<_>>()
        .join("\n")
}

pub fn bot_line(message: &str) -> String {
    format!("{} {}", format!("{BOT_NAME}:").cyan().bold(), styled(message))
}

pub fn print_bot(message: &str) {
    println!("{}\n", bot_line(message));
}

/// Result card: top class, confidence with tier, the ranked breakdown,
/// warning and numbered precautions.
pub fn prediction_card(prediction: &Prediction, kb: &KnowledgeBase) -> String {
    let confidence = classify(prediction.confidence);
    let precautions = kb.precautions(&prediction.predicted_class);

    let mut out = String::new();
    out.push_str(&format!(
        "{} {}\n",
        "Predicted:".bold(),
        prediction.predicted_class.green().bold()
    ));
    out.push_str(&format!(
        "{} {}% ({})\n",
        "Confidence:".bold(),
        prediction.confidence,
        confidence.label
    ));

    let ranked = prediction.ranked_probabilities();
    if !ranked.is_empty() {
        out.push_str(&format!("\n{}\n", "Detailed analysis".bold()));
        for (id, score) in ranked {
            out.push_str(&format!("  {id:<12} {score:>6}%  {}\n", bar(score)));
        }
    }

    out.push_str(&format!("\n{} {}\n", "Warning:".yellow().bold(), precautions.warning));
    for (i, item) in precautions.items.iter().enumerate() {
        out.push_str(&format!("  {}. {item}\n", i + 1));
    }
    out.push_str(&format!("\n{}\n", RESULT_NOTE.dimmed()));
    out
}

/// Twenty-cell bar for a 0–100 score. Out-of-range scores are clamped.
fn bar(score: f64) -> String {
    let filled = (score.clamp(0.0, 100.0) / 5.0).round() as usize;
    format!("{}{}", "█".repeat(filled), "·".repeat(20 - filled))
}
