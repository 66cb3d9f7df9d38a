use std::io::Read;
use std::path::PathBuf;
use std::process::ExitCode;
use std::sync::Arc;

use anyhow::Context;
use clap::{Parser, Subcommand, ValueEnum};
use tokio::sync::oneshot;
use tokio::task::JoinSet;
use tracing_subscriber::EnvFilter;
use verity_config::Config;
use verity_config::source::SourceKind;
use verity_detector::{Classifier, DetectorClient};
use verity_notify::{ResultPresenter, notifier_from_config};
use verity_types::AppEvent;

pub mod controller;
pub mod events;
pub mod io;
pub mod profile;
pub mod relay;
pub mod state;

#[cfg(test)]
mod tests;

use self::controller::AppController;
use self::state::AppState;

#[derive(Parser)]
#[command(name = "verity", version, about = "Scores document text for AI authorship")]
struct Cli {
    /// JSON config file; the environment is used when omitted
    #[arg(long, global = true)]
    config: Option<PathBuf>,

    #[command(subcommand)]
    command: Option<Command>,
}

#[derive(Subcommand)]
enum Command {
    /// Watch a document and notify on every settled change
    Watch {
        #[arg(long, value_enum)]
        source: Option<SourceArg>,
        /// Document file for the `file` source
        #[arg(long)]
        document: Option<PathBuf>,
    },
    /// Scan a file (or stdin) once and print the result as JSON
    Scan {
        #[arg(long)]
        file: Option<PathBuf>,
    },
    /// Write the current configuration to a JSON file
    InitConfig { path: PathBuf },
}

#[derive(Clone, Copy, ValueEnum)]
enum SourceArg {
    File,
    Clipboard,
    Websocket,
}

impl From<SourceArg> for SourceKind {
    fn from(arg: SourceArg) -> Self {
        match arg {
            SourceArg::File => SourceKind::File,
            SourceArg::Clipboard => SourceKind::Clipboard,
            SourceArg::Websocket => SourceKind::Websocket,
        }
    }
}

fn init_tracing() {
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info"));
    let builder = tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(std::io::stderr);

    if std::env::var("LOG_FORMAT").is_ok_and(|v| v.eq_ignore_ascii_case("json")) {
        builder.json().init();
    } else {
        builder.init();
    }
}

#[tokio::main]
async fn main() -> anyhow::Result<ExitCode> {
    dotenvy::dotenv().ok();
    init_tracing();

    let cli = Cli::parse();
    let config = profile::load_config(cli.config.as_deref())?;

    match cli.command.unwrap_or(Command::Watch {
        source: None,
        document: None,
    }) {
        Command::Watch { source, document } => {
            let mut config = config;
            if let Some(source) = source {
                config.source.kind = source.into();
            }
            if let Some(document) = document {
                config.source.document_path = document;
            }
            watch(config).await?;
            Ok(ExitCode::SUCCESS)
        }
        Command::Scan { file } => {
            let text = match file {
                Some(path) => std::fs::read_to_string(&path)
                    .with_context(|| format!("Failed to read {}", path.display()))?,
                None => {
                    let mut text = String::new();
                    std::io::stdin().read_to_string(&mut text)?;
                    text
                }
            };
            scan_once(config, text).await
        }
        Command::InitConfig { path } => {
            profile::init_config(&path)?;
            Ok(ExitCode::SUCCESS)
        }
    }
}

fn build_pipeline(config: &Config) -> (Arc<dyn Classifier>, ResultPresenter) {
    let classifier: Arc<dyn Classifier> =
        Arc::new(DetectorClient::new(config.network.endpoint_url.clone()));
    let presenter = ResultPresenter::new(
        notifier_from_config(&config.notification),
        &config.notification,
    );
    (classifier, presenter)
}

/// Real-time pipeline until Ctrl+C or a task exits
async fn watch(config: Config) -> anyhow::Result<()> {
    let (classifier, presenter) = build_pipeline(&config);
    let state = Arc::new(AppState::new(config));
    let controller = AppController::new(state);
    let mut tasks = controller.spawn_tasks(classifier, presenter);

    tokio::select! {
        result = tokio::signal::ctrl_c() => {
            result.context("Failed to listen for Ctrl+C")?;
            tracing::info!("Shutdown requested");
        }
        Some(result) = tasks.join_next() => {
            match result {
                Ok(Ok(())) => tracing::warn!("Task exited"),
                Ok(Err(e)) => tracing::error!("Task failed: {e:#}"),
                Err(e) => tracing::error!("Task panicked: {e}"),
            }
        }
    }

    controller.shutdown();
    drain(&mut tasks).await;
    Ok(())
}

/// One manual scan through the event loop; non-zero exit on scan error
async fn scan_once(config: Config, text: String) -> anyhow::Result<ExitCode> {
    let (classifier, presenter) = build_pipeline(&config);
    let controller = AppController::new(Arc::new(AppState::new(config)));
    let mut tasks = JoinSet::new();
    controller.spawn_event_loop(&mut tasks, classifier, presenter);

    let (reply, outcome) = oneshot::channel();
    controller
        .event_sender()
        .send(AppEvent::ScanText { text, reply })
        .await?;
    let outcome = outcome.await.context("Event loop dropped the scan request")?;

    controller.shutdown();
    drain(&mut tasks).await;

    match outcome {
        Ok(result) => {
            println!("{}", serde_json::to_string_pretty(&result)?);
            Ok(ExitCode::SUCCESS)
        }
        Err(error) => {
            println!("{}", serde_json::to_string_pretty(&error)?);
            Ok(ExitCode::FAILURE)
        }
    }
}

async fn drain(tasks: &mut JoinSet<anyhow::Result<()>>) {
    while let Some(result) = tasks.join_next().await {
        if let Ok(Err(e)) = result {
            tracing::error!("Task failed during shutdown: {e:#}");
        }
    }
}
