// Copyright (C) 2026 Fred Clausen
// Use of this source code is governed by an MIT-style
// license that can be found in the LICENSE file or at
// https://opensource.org/licenses/MIT.

#![deny(
    clippy::pedantic,
    clippy::cargo,
    clippy::nursery,
    clippy::style,
    clippy::correctness,
    clippy::all,
    clippy::unwrap_used,
    clippy::expect_used
)]
#![allow(clippy::multiple_crate_versions)]

mod commands;
mod error;
mod snapshot;

use clap::{Args as ClapArgs, Parser, Subcommand};
use commands::{ApplyReport, PreviewReport, run_apply, run_preview};
use error::CliError;
use serde::Serialize;
use snapshot::{RegistrySnapshot, load_settings, read_json, read_text, write_snapshot};
use staffsync::{SyncPreview, SyncSettings};
use staffsync_hr::{Directory, token};
use std::path::{Path, PathBuf};
use time::OffsetDateTime;
use tracing::info;

/// staffsync - reconcile the staff registry with the external HR directory
#[derive(Parser, Debug)]
#[command(author, version, about, long_about = None)]
struct Args {
    #[command(subcommand)]
    command: Command,
}

#[derive(Subcommand, Debug)]
enum Command {
    /// Print the changes a sync would make, without writing anything
    Preview(SyncArgs),
    /// Sync the registry and write the result to `--output`
    Apply {
        #[command(flatten)]
        sync: SyncArgs,

        /// Where to write the updated registry snapshot
        #[arg(short, long)]
        output: PathBuf,
    },
    /// Encode or decode a stored directory access token
    #[command(subcommand)]
    Token(TokenCommand),
}

#[derive(ClapArgs, Debug)]
struct SyncArgs {
    /// Registry snapshot JSON (staff, offices, masters, mappings)
    #[arg(short, long)]
    snapshot: PathBuf,

    /// Employee list exported from the directory
    #[arg(long)]
    crews: PathBuf,

    /// Department list exported from the directory
    #[arg(long)]
    departments: Option<PathBuf>,

    /// Custom-field template list exported from the directory
    #[arg(long)]
    templates: Option<PathBuf>,

    /// Sync settings JSON; defaults apply when omitted
    #[arg(short, long)]
    config: Option<PathBuf>,
}

#[derive(Subcommand, Debug)]
enum TokenCommand {
    /// Obfuscate a plaintext token for storage
    Encode { token: String },
    /// Recover a plaintext token from its stored form
    Decode { stored: String },
}

/// Everything a sync reads from disk.
struct SyncInputs {
    directory: Directory,
    snapshot: RegistrySnapshot,
    settings: SyncSettings,
}

fn load_inputs(args: &SyncArgs) -> Result<SyncInputs, CliError> {
    let settings: SyncSettings = load_settings(args.config.as_deref())?;
    let snapshot: RegistrySnapshot = read_json(&args.snapshot)?;
    let crews: String = read_text(&args.crews)?;
    let departments: Option<String> = read_optional(args.departments.as_deref())?;
    let templates: Option<String> = read_optional(args.templates.as_deref())?;
    let directory: Directory =
        Directory::from_documents(&crews, departments.as_deref(), templates.as_deref())?;

    info!(
        employees = directory.employees.len(),
        departments = directory.departments.len(),
        staff = snapshot.staff.len(),
        "Loaded sync inputs"
    );

    Ok(SyncInputs {
        directory,
        snapshot,
        settings,
    })
}

fn read_optional(path: Option<&Path>) -> Result<Option<String>, CliError> {
    path.map(read_text).transpose()
}

fn print_json<T: Serialize>(value: &T) -> Result<(), Box<dyn std::error::Error>> {
    println!("{}", serde_json::to_string_pretty(value)?);
    Ok(())
}

fn main() -> Result<(), Box<dyn std::error::Error>> {
    let args: Args = Args::parse();

    // Logs go to stderr; stdout carries JSON only
    tracing_subscriber::fmt()
        .with_env_filter(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| tracing_subscriber::EnvFilter::new("info")),
        )
        .with_writer(std::io::stderr)
        .init();

    match args.command {
        Command::Preview(sync) => {
            let inputs: SyncInputs = load_inputs(&sync)?;
            let preview: SyncPreview =
                run_preview(&inputs.directory, &inputs.snapshot, &inputs.settings);
            print_json(&PreviewReport {
                summary: preview.summary(),
                preview,
            })?;
        }
        Command::Apply { sync, output } => {
            let inputs: SyncInputs = load_inputs(&sync)?;
            let (updated, report): (RegistrySnapshot, ApplyReport) = run_apply(
                &inputs.directory,
                &inputs.snapshot,
                &inputs.settings,
                OffsetDateTime::now_utc(),
            )?;
            write_snapshot(&output, &updated)?;
            print_json(&report)?;
        }
        Command::Token(TokenCommand::Encode { token: plaintext }) => {
            println!("{}", token::obfuscate(&plaintext));
        }
        Command::Token(TokenCommand::Decode { stored }) => {
            let plaintext: String = token::deobfuscate(&stored);
            if plaintext.is_empty() {
                return Err("stored token is empty or not a valid encoding".into());
            }
            println!("{plaintext}");
        }
    }

    Ok(())
}
