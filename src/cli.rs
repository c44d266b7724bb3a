// Copyright (c) 2024-2026 Martin Schröder <info@swedishembedded.com>
//
// SPDX-License-Identifier: Apache-2.0
use clap::{Parser, Subcommand};
use std::path::PathBuf;

#[derive(Parser, Debug)]
#[command(
    name = "gist",
    about = "Ten-word text summary service and client",
    version,
    long_about = None,
)]
pub struct Cli {
    #[command(subcommand)]
    pub command: Commands,

    /// Increase verbosity (-v = debug, -vv = trace)
    #[arg(long, short = 'v', action = clap::ArgAction::Count, global = true)]
    pub verbose: u8,
}

#[derive(Subcommand, Debug)]
pub enum Commands {
    /// Run the summary HTTP server
    Serve {
        /// `host:port` to listen on (overrides config)
        #[arg(long, env = "GIST_BIND")]
        bind: Option<String>,

        /// Path to config file (overrides auto-discovery)
        #[arg(long, short = 'c')]
        config: Option<PathBuf>,
    },
    /// Summarize text via a running server
    Summarize {
        /// Base URL of the server
        #[arg(long, env = "GIST_URL", default_value = "http://127.0.0.1:8787")]
        url: String,

        /// Text to summarize; read from stdin when omitted
        text: Option<String>,

        /// Print the full response as JSON instead of plain text
        #[arg(long)]
        json: bool,
    },
}
