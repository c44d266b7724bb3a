mod cli;

use std::io::Read;

use anyhow::Context;
use clap::Parser;
use tracing_subscriber::{filter::EnvFilter, fmt, prelude::*};

use cli::{Cli, Commands};

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    let cli = Cli::parse();

    init_logging(cli.verbose);

    match cli.command {
        Commands::Serve { bind, config } => {
            let mut config = gist_server::config::load(config.as_deref())?;
            if let Some(bind) = bind {
                config.bind = bind;
            }
            gist_server::serve(config).await
        }
        Commands::Summarize { url, text, json } => summarize_cmd(&url, text, json).await,
    }
}

async fn summarize_cmd(url: &str, text: Option<String>, as_json: bool) -> anyhow::Result<()> {
    let text = match text {
        Some(t) => t,
        None => {
            let mut buf = String::new();
            std::io::stdin()
                .read_to_string(&mut buf)
                .context("reading stdin")?;
            buf
        }
    };

    let client = gist_client::SummaryClient::new(url)?;
    let summary = client.create_summary(&text).await?;

    if as_json {
        println!(
            "{}",
            serde_json::to_string_pretty(&serde_json::json!({
                "summary": summary.summary,
                "timestamp": summary.timestamp,
                "word_count": summary.word_count,
            }))?
        );
    } else {
        println!("{}", summary.summary);
        eprintln!("({} words, generated {})", summary.word_count, summary.timestamp);
    }
    Ok(())
}

fn init_logging(verbosity: u8) {
    let level = match verbosity {
        0 => "info",
        1 => "debug",
        _ => "trace",
    };
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(level));

    tracing_subscriber::registry()
        .with(fmt::layer().with_target(false).with_writer(std::io::stderr))
        .with(filter)
        .init();
}
