use clap::Parser;
use eyre::Result;
use medibot_cli::cli::{Cli, Command};
use medibot_cli::commands::{self, Context};
use medibot_cli::config;
use tracing_subscriber::EnvFilter;

#[tokio::main]
async fn main() -> Result<()> {
    color_eyre::install()?;

    let cli = Cli::parse();
    init_tracing(cli.log_json);

    let config = config::load_or_default()?
        .with_env_overrides()
        .with_classifier_url(cli.classifier_url.clone());
    let ctx = Context {
        config,
        seed: cli.seed,
        no_delay: cli.no_delay,
    };

    match &cli.command {
        Command::Predict {
            image,
            json,
            save,
            chat,
        } => commands::predict(&ctx, image, *json, save.as_deref(), *chat).await?,
        Command::Chat {
            prediction,
            transcript,
        } => commands::chat(&ctx, prediction.as_deref(), transcript.as_deref()).await?,
        Command::Export {
            prediction,
            format,
            out,
        } => {
            for path in commands::export(prediction, *format, out)? {
                println!("Wrote {}", path.display());
            }
        }
        Command::Classes => commands::classes(&ctx).await?,
        Command::Info => commands::info(&ctx).await?,
        Command::Config { action } => commands::config(&ctx, action)?,
    }

    Ok(())
}

/// Logs go to stderr so they never interleave with chat output.
fn init_tracing(json: bool) {
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("warn"));
    let builder = tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(std::io::stderr);

    if json {
        builder.json().init();
    } else {
        builder.init();
    }
}
