// SPDX-FileCopyrightText: 2026 Mattia Egloff <mattia.egloff@pm.me>
//
// SPDX-License-Identifier: GPL-3.0-or-later

//! Rolodex CLI
//!
//! Finds duplicate contacts in a JSON snapshot and helps resolve them.

mod commands;
mod config;
mod display;

use std::io;
use std::path::PathBuf;

use anyhow::Result;
use clap::{CommandFactory, Parser, Subcommand};
use clap_complete::{generate, Shell};
use tracing_subscriber::EnvFilter;

use config::CliConfig;

#[derive(Parser)]
#[command(name = "rolodex")]
#[command(version, about = "Find and resolve duplicate contacts")]
struct Cli {
    #[command(subcommand)]
    command: Commands,

    /// Data directory for dismissed pairs (default: <data dir>/rolodex)
    #[arg(long, global = true, env = "ROLODEX_DATA_DIR")]
    data_dir: Option<PathBuf>,

    /// User whose dismissed pairs are used
    #[arg(long, global = true, env = "ROLODEX_USER", default_value = "default")]
    user: String,
}

#[derive(Subcommand)]
enum Commands {
    /// List duplicate groups
    Scan {
        /// JSON array of contacts
        contacts: PathBuf,

        /// Print groups as JSON
        #[arg(long)]
        json: bool,
    },

    /// Compare two contacts field by field
    Compare {
        /// JSON array of contacts
        contacts: PathBuf,
        /// First contact ID
        a: String,
        /// Second contact ID
        b: String,

        /// Print the comparison as JSON
        #[arg(long)]
        json: bool,
    },

    /// Mark a group as "not duplicates" so it is not reported again
    Dismiss {
        /// JSON array of contacts
        contacts: PathBuf,
        /// Group number as shown by scan
        group: usize,
    },

    /// Print the merge plan for a group
    Merge {
        /// JSON array of contacts
        contacts: PathBuf,
        /// Group number as shown by scan
        group: usize,

        /// Take a field from a specific contact (e.g. name=42)
        #[arg(long = "pick", value_name = "FIELD=ID")]
        picks: Vec<String>,
    },

    /// Generate shell completions
    Completions {
        /// Shell type
        #[arg(value_enum)]
        shell: Shell,
    },
}

fn main() -> Result<()> {
    // Logs go to stderr so stdout stays parseable
    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("rolodex=warn")),
        )
        .with_writer(io::stderr)
        .init();

    let cli = Cli::parse();

    let data_dir = cli.data_dir.unwrap_or_else(|| {
        dirs::data_dir()
            .unwrap_or_else(|| PathBuf::from("."))
            .join("rolodex")
    });

    let config = CliConfig {
        data_dir,
        user: cli.user,
    };

    match cli.command {
        Commands::Scan { contacts, json } => commands::scan::run(&config, &contacts, json)?,
        Commands::Compare {
            contacts,
            a,
            b,
            json,
        } => commands::compare::run(&config, &contacts, &a, &b, json)?,
        Commands::Dismiss { contacts, group } => {
            commands::dismiss::run(&config, &contacts, group)?;
        }
        Commands::Merge {
            contacts,
            group,
            picks,
        } => commands::merge::run(&config, &contacts, group, &picks)?,
        Commands::Completions { shell } => {
            let mut cmd = Cli::command();
            generate(shell, &mut cmd, "rolodex", &mut io::stdout());
        }
    }

    Ok(())
}
