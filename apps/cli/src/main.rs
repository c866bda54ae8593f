use std::sync::Arc;
use std::time::{Duration, Instant};

use anyhow::Result;
use clap::Parser;
use console::style;
use indicatif::{ProgressBar, ProgressStyle};
use tokio::fs;
use tokio::io::AsyncReadExt;

use introscore_core::providers::{
    DEFAULT_EMBEDDING_MODEL, DEFAULT_EMBEDDINGS_URL, DEFAULT_LANGUAGETOOL_URL,
};
use introscore_core::{
    format_report_readable, HttpEmbedder, LanguageToolClient, LexiconSentiment, ScoringEngine,
};

fn format_duration(d: Duration) -> String {
    let secs = d.as_secs_f64();
    if secs < 60.0 {
        format!("{:.1}s", secs)
    } else {
        format!("{:.0}m {:.0}s", secs / 60.0, secs % 60.0)
    }
}

#[derive(Parser)]
#[command(name = "introscore")]
#[command(about = "Score a spoken self-introduction transcript against a fixed rubric")]
struct Cli {
    /// Transcript file to score, or "-" to read from stdin
    transcript: String,

    /// Duration of the original audio in seconds
    #[arg(short, long)]
    duration: f64,

    /// Print the raw JSON report instead of the readable rendering
    #[arg(long)]
    json: bool,

    /// OpenAI-compatible embeddings endpoint (key from OPENAI_API_KEY)
    #[arg(long, default_value = DEFAULT_EMBEDDINGS_URL)]
    embeddings_url: String,

    /// Embedding model name
    #[arg(long, default_value = DEFAULT_EMBEDDING_MODEL)]
    embedding_model: String,

    /// LanguageTool server base URL
    #[arg(long, default_value = DEFAULT_LANGUAGETOOL_URL)]
    languagetool_url: String,

    /// Per-provider timeout in seconds
    #[arg(long, default_value_t = 30)]
    timeout: u64,
}

fn create_spinner(msg: &str) -> ProgressBar {
    let pb = ProgressBar::new_spinner();
    pb.set_style(
        ProgressStyle::default_spinner()
            .tick_chars("⠁⠂⠄⡀⢀⠠⠐⠈ ")
            .template("{spinner:.cyan} {msg}")
            .unwrap(),
    );
    pb.set_message(msg.to_string());
    pb.enable_steady_tick(Duration::from_millis(80));
    pb
}

#[tokio::main]
async fn main() -> Result<()> {
    tracing_subscriber::fmt()
        .with_env_filter(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| tracing_subscriber::EnvFilter::new("introscore_core=warn")),
        )
        .with_writer(std::io::stderr)
        .compact()
        .init();

    let cli = Cli::parse();

    // Validate API key early
    let api_key = match std::env::var("OPENAI_API_KEY") {
        Ok(key) => key,
        Err(_) => {
            eprintln!(
                "{} OPENAI_API_KEY is not set (needed for the keywords criterion)",
                style("Error:").red().bold()
            );
            std::process::exit(1);
        }
    };

    let engine = ScoringEngine::new(
        Arc::new(HttpEmbedder::new(
            cli.embeddings_url,
            cli.embedding_model,
            api_key,
        )),
        Arc::new(LanguageToolClient::new(cli.languagetool_url)),
        Arc::new(LexiconSentiment::new()),
    )
    .with_provider_timeout(Duration::from_secs(cli.timeout));

    let text = if cli.transcript == "-" {
        let mut buf = String::new();
        tokio::io::stdin().read_to_string(&mut buf).await?;
        buf
    } else {
        fs::read_to_string(&cli.transcript).await?
    };

    if cli.json {
        // Keep stdout clean for piping
        let report = engine.evaluate(&text, cli.duration).await?;
        println!("{}", serde_json::to_string_pretty(&report)?);
        return Ok(());
    }

    println!(
        "\n{}  {}\n",
        style("introscore").cyan().bold(),
        style("Self-Introduction Scorer").dim()
    );
    println!("{}", style("─".repeat(60)).dim());

    let start = Instant::now();
    let spinner = create_spinner("Scoring transcript...");
    let report = engine.evaluate(&text, cli.duration).await?;
    spinner.finish_with_message(format!(
        "{} Scored {}",
        style("✓").green().bold(),
        style(format!("[{}]", format_duration(start.elapsed()))).dim()
    ));

    println!("{}", style("─".repeat(60)).dim());
    println!("{}", format_report_readable(&report));

    Ok(())
}
