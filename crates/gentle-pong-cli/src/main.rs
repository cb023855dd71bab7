//! Gentle Pong CLI - builds the gentle_pong notification sound pack
//!
//! This binary renders every sound, installs the pack with its manifest, and
//! can play the results back.

use clap::{Parser, Subcommand};
use std::process::ExitCode;

use gentle_pong_cli::commands;
use gentle_pong_cli::commands::preview::DEFAULT_PLAYER;

/// Gentle Pong - soft notification sounds for peon-ping
#[derive(Parser)]
#[command(name = "gentle-pong")]
#[command(author, version, about, long_about = None)]
#[command(propagate_version = true)]
struct Cli {
    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Render every sound and install the pack
    Generate {
        /// Install root (default: ~/.claude/hooks/peon-ping)
        #[arg(long)]
        root: Option<String>,

        /// Play each sound individually after generating
        #[arg(long)]
        preview: bool,

        /// Write preview_all.wav to the working directory and play it
        #[arg(long)]
        preview_all: bool,

        /// Audio player command, invoked as `<player> -v 1.0 <file>`
        #[arg(long, default_value = DEFAULT_PLAYER)]
        player: String,

        /// Output a machine-readable JSON summary (no colored output)
        #[arg(long)]
        json: bool,
    },

    /// Print the sound table without rendering
    List {
        /// Output machine-readable JSON
        #[arg(long)]
        json: bool,
    },
}

fn main() -> ExitCode {
    let cli = Cli::parse();

    let result = match cli.command {
        Commands::Generate {
            root,
            preview,
            preview_all,
            player,
            json,
        } => commands::generate::run(root.as_deref(), preview, preview_all, &player, json),
        Commands::List { json } => commands::list::run(json),
    };

    match result {
        Ok(code) => code,
        Err(e) => {
            eprintln!("{}: {:#}", colored::Colorize::red("error"), e);
            ExitCode::from(1)
        }
    }
}
