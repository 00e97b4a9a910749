use std::path::PathBuf;

use clap::{Parser, Subcommand, ValueEnum};

/// MediBot: classify a skin image and talk through the result.
#[derive(Debug, Parser)]
#[command(name = "medibot", version, about, long_about = None)]
pub struct Cli {
    /// Emit logs as JSON lines on stderr.
    #[arg(long, global = true)]
    pub log_json: bool,

    /// Seed the chat's random choices for a reproducible transcript.
    #[arg(long, global = true)]
    pub seed: Option<u64>,

    /// Classifier base URL (overrides config and $MEDIBOT_CLASSIFIER_URL).
    #[arg(long, global = true)]
    pub classifier_url: Option<String>,

    /// Print bot replies immediately instead of pacing them.
    #[arg(long, global = true)]
    pub no_delay: bool,

    #[command(subcommand)]
    pub command: Command,
}

#[derive(Debug, Subcommand)]
pub enum Command {
    /// Upload an image and show the prediction.
    Predict {
        image: PathBuf,

        /// Print the raw prediction as JSON.
        #[arg(long)]
        json: bool,

        /// Save the prediction JSON for later `chat` or `export`.
        #[arg(long)]
        save: Option<PathBuf>,

        /// Start a chat about the result afterwards.
        #[arg(long)]
        chat: bool,
    },

    /// Chat with MediBot. Type `/predict <image>` to classify mid-chat and
    /// `/quit` to leave.
    Chat {
        /// A saved prediction to discuss from the start.
        #[arg(long)]
        prediction: Option<PathBuf>,

        /// Write the session as JSON here on exit.
        #[arg(long)]
        transcript: Option<PathBuf>,
    },

    /// Write a downloadable report for a saved prediction.
    Export {
        prediction: PathBuf,

        #[arg(long, value_enum, default_value = "text")]
        format: ExportFormat,

        /// Output directory.
        #[arg(long, default_value = ".")]
        out: PathBuf,
    },

    /// List the classes the classifier can report.
    Classes,

    /// Show the classifier's model description.
    Info,

    /// Inspect or reset the config file.
    Config {
        #[command(subcommand)]
        action: ConfigAction,
    },
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, ValueEnum)]
pub enum ExportFormat {
    Text,
    Docx,
    Both,
}

#[derive(Debug, Subcommand)]
pub enum ConfigAction {
    /// Print the effective config.
    Show,
    /// Print the config file location.
    Path,
    /// Write a default config file.
    Init {
        /// Replace an existing file.
        #[arg(long)]
        force: bool,
    },
    /// Remove the config file.
    Delete,
}
