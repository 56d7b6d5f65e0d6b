use clap::Parser;
use juros::insight::{InsightClient, InsightConfig};
use juros::{App, init_logging};
use std::path::PathBuf;

#[derive(Parser, Debug)]
#[command(name = "juros")]
#[command(about = "A terminal-based compound interest simulator")]
struct Args {
    /// Path to the data directory (default: ~/.juros/)
    #[arg(short, long)]
    data_dir: Option<PathBuf>,

    /// Log level (debug, info, warn, error)
    #[arg(short, long, default_value = "info")]
    log_level: String,

    /// Base URL of the Ollama server that generates the financial tip
    #[arg(long, default_value = "http://localhost:11434")]
    ollama_host: String,

    /// Ollama model used for the financial tip
    #[arg(long, default_value = "llama3.2")]
    ollama_model: String,
}

fn default_data_dir() -> PathBuf {
    dirs::home_dir()
        .unwrap_or_else(|| PathBuf::from("."))
        .join(".juros")
}

fn main() -> color_eyre::Result<()> {
    color_eyre::install()?;

    let args = Args::parse();
    let data_dir = args.data_dir.unwrap_or_else(default_data_dir);

    let _guard = init_logging(&data_dir, &args.log_level)?;

    let insight_config = InsightConfig::resolve(args.ollama_host, args.ollama_model);
    let client = InsightClient::new(insight_config)?;

    let mut app = App::new(client);

    ratatui::run(|terminal| app.run(terminal))?;

    tracing::info!("Application shutting down");

    if let Err(err) = ratatui::try_restore() {
        tracing::error!("Failed to restore terminal: {err}");
    }

    Ok(())
}
