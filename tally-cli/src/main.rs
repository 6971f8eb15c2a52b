use anyhow::{bail, Context, Result};
use clap::{Parser, Subcommand};
use std::path::{Path, PathBuf};
use std::process::ExitCode;
use tracing::{info, warn};
use tracing_subscriber::{fmt, prelude::*, EnvFilter};

use tally_finance::{categorize_all, render_text, summarize, write_html_report};
use tally_ingest::load_transactions;

mod config;
mod state;

#[derive(Parser, Debug)]
#[command(
    name = "tally",
    version,
    about = "Categorize a bank statement export and report where the money went"
)]
struct Cli {
    #[command(subcommand)]
    command: Option<Command>,

    /// Statement CSV (Date, Description, Amount, Type); defaults to the configured sample file
    input: Option<PathBuf>,

    /// Skip writing the HTML report
    #[arg(long)]
    no_html: bool,

    /// Open the HTML report in the default viewer once written
    #[arg(long, conflicts_with = "no_html")]
    open: bool,

    /// Print the summary as JSON instead of the text report
    #[arg(long)]
    json: bool,

    /// Directory for the HTML report (default: next to the executable)
    #[arg(long)]
    output_dir: Option<PathBuf>,

    /// Enable debug logging
    #[arg(short, long, global = true)]
    verbose: bool,
}

#[derive(Subcommand, Debug)]
enum Command {
    /// Manage ~/.tally/config.toml
    Config {
        #[command(subcommand)]
        command: ConfigCommand,
    },
}

#[derive(Subcommand, Debug)]
enum ConfigCommand {
    /// Write the default config if none exists
    Init,
    /// Print the effective config
    Show,
}

fn main() -> ExitCode {
    let cli = Cli::parse();
    init_logging(cli.verbose);

    match run(cli) {
        Ok(()) => ExitCode::SUCCESS,
        Err(err) => {
            eprintln!("Error: {}", error_message(&err));
            ExitCode::from(exit_code(&err))
        }
    }
}

/// 1 for a missing input file, 2 for malformed input, 1 for anything else
fn exit_code(err: &anyhow::Error) -> u8 {
    match err.downcast_ref::<tally_core::Error>() {
        Some(tally_core::Error::FileNotFound(_)) => 1,
        Some(e) if e.is_parse() => 2,
        _ => 1,
    }
}

/// The error chain joined with ": ", skipping causes already in the message
fn error_message(err: &anyhow::Error) -> String {
    let mut msg = String::new();
    for cause in err.chain() {
        let text = cause.to_string();
        if msg.contains(&text) {
            continue;
        }
        if !msg.is_empty() {
            msg.push_str(": ");
        }
        msg.push_str(&text);
    }
    msg
}

/// Priority: RUST_LOG env var > --verbose flag > default (warn).
/// Logs go to stderr so stdout carries only the report.
fn init_logging(verbose: bool) {
    let filter = if std::env::var("RUST_LOG").is_ok() {
        EnvFilter::from_default_env()
    } else if verbose {
        EnvFilter::new("debug")
    } else {
        EnvFilter::new("warn")
    };

    tracing_subscriber::registry()
        .with(filter)
        .with(
            fmt::layer()
                .with_writer(std::io::stderr)
                .with_target(false)
                .compact(),
        )
        .init();
}

fn run(cli: Cli) -> Result<()> {
    if let Some(Command::Config { command }) = cli.command {
        if let Some(input) = &cli.input {
            bail!(
                "unexpected input {} for the config command",
                input.display()
            );
        }
        return match command {
            ConfigCommand::Init => config::init_config(),
            ConfigCommand::Show => {
                let cfg = config::load_config()?;
                print!("{}", toml::to_string_pretty(&cfg).context("serialize config")?);
                Ok(())
            }
        };
    }

    let cfg = config::load_config()?;
    let input = cli.input.unwrap_or_else(|| cfg.input.default_path.clone());

    let mut txns = load_transactions(&input)?;
    categorize_all(&mut txns);
    let summary = summarize(&txns);
    info!(count = txns.len(), input = %input.display(), "processed statement");

    if cli.json {
        println!("{}", serde_json::to_string_pretty(&summary)?);
    } else {
        print!("{}", render_text(&summary));
    }

    if cli.no_html {
        return Ok(());
    }

    let dir = match cli.output_dir.or(cfg.report.output_dir) {
        Some(dir) => dir,
        None => state::program_dir()?,
    };
    let path = write_html_report(&summary, &txns, &dir, &cfg.report.html_filename)
        .with_context(|| format!("writing HTML report to {}", dir.display()))?;

    if cli.json {
        eprintln!("HTML report: {}", path.display());
    } else {
        println!("\nHTML report: {}", path.display());
    }

    if cli.open || cfg.report.open_browser {
        if let Err(e) = open_in_viewer(&path) {
            warn!("could not open {}: {e:#}", path.display());
        }
    }

    Ok(())
}

fn open_in_viewer(path: &Path) -> Result<()> {
    let (bin, args): (&str, Vec<&str>) = if cfg!(target_os = "macos") {
        ("open", vec![])
    } else if cfg!(target_os = "windows") {
        ("cmd", vec!["/C", "start", ""])
    } else {
        ("xdg-open", vec![])
    };

    let status = std::process::Command::new(bin)
        .args(args)
        .arg(path)
        .status()
        .with_context(|| format!("running {}", bin))?;

    if !status.success() {
        bail!("{} exited with status: {}", bin, status);
    }

    Ok(())
}
