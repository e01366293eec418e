// Only compile UI module when TUI feature is enabled
#[cfg(feature = "tui")]
mod ui;

use anyhow::{bail, Context, Result};
use clap::{Parser, Subcommand};
use std::fs::OpenOptions;
use std::io::{self, Write};
use std::path::{Path, PathBuf};
use std::sync::Mutex;
use tracing_subscriber::EnvFilter;

use weekly_ledger::config::{DEFAULT_DB_PATH, DEFAULT_LOG_FILE};
use weekly_ledger::{Clock, Config, KeyValueStore, Ledger};

#[derive(Parser)]
#[command(name = "weekly-ledger", version, about = "Record weekly contributions and keep a running total")]
struct Cli {
    /// SQLite file holding the entries
    #[arg(long, default_value = DEFAULT_DB_PATH)]
    db: PathBuf,

    /// Diagnostics log (filter with RUST_LOG)
    #[arg(long, default_value = DEFAULT_LOG_FILE)]
    log_file: PathBuf,

    #[command(subcommand)]
    command: Option<Command>,
}

#[derive(Subcommand)]
enum Command {
    /// Record a weekly value (use a point for decimals)
    Add { value: String },
    /// List all entries
    List,
    /// Delete an entry by id
    Remove { id: String },
    /// Print the running total
    Total,
}

fn main() -> Result<()> {
    let cli = Cli::parse();
    let config = Config::new(cli.db, cli.log_file);

    init_logging(&config.log_file)?;
    tracing::info!(version = weekly_ledger::VERSION, db = %config.db_path.display(), "starting");

    let ledger = config.open_ledger()?;

    match cli.command {
        None => run_ui_mode(ledger),
        Some(command) => run_command(ledger, command, &mut io::stdout()),
    }
}

/// Headless counterpart of the screen: one action against the stored list.
fn run_command<S: KeyValueStore, C: Clock, W: Write>(
    mut ledger: Ledger<S, C>,
    command: Command,
    out: &mut W,
) -> Result<()> {
    // never write over a list that could not be read
    fail_on_error(&ledger)?;

    match command {
        Command::Add { value } => {
            ledger.set_input(value);
            ledger.submit();
            fail_on_error(&ledger)?;
            if let Some(entry) = ledger.state().entries.last() {
                writeln!(
                    out,
                    "✓ {}: {} registrado em {} (id {})",
                    ledger.locale().currency_symbol, entry.value, entry.date, entry.id
                )?;
            }
        }
        Command::List => print_entries(&ledger, out)?,
        Command::Remove { id } => {
            if !ledger.state().entries.iter().any(|e| e.id == id) {
                bail!("no entry with id {}", id);
            }
            ledger.delete(&id);
            fail_on_error(&ledger)?;
            writeln!(out, "✓ Removido {}", id)?;
        }
        Command::Total => {
            writeln!(out, "TOTAL: {} {}", ledger.locale().currency_symbol, ledger.total_display())?;
        }
    }

    Ok(())
}

fn init_logging(path: &Path) -> Result<()> {
    let file = OpenOptions::new()
        .create(true)
        .append(true)
        .open(path)
        .with_context(|| format!("Failed to open log file {}", path.display()))?;

    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info"));

    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(Mutex::new(file))
        .with_ansi(false)
        .init();

    Ok(())
}

fn fail_on_error<S: KeyValueStore, C: Clock>(ledger: &Ledger<S, C>) -> Result<()> {
    match &ledger.state().error {
        Some(message) => bail!("{}", message),
        None => Ok(()),
    }
}

fn print_entries<S: KeyValueStore, C: Clock, W: Write>(ledger: &Ledger<S, C>, out: &mut W) -> Result<()> {
    let symbol = &ledger.locale().currency_symbol;

    writeln!(out, "{:<4} {:<14} {:<12} {}", "Id", "Data", "Valor", "Ref")?;
    writeln!(out, "━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━")?;
    for (i, entry) in ledger.state().entries.iter().enumerate() {
        writeln!(
            out,
            "{:<4} {:<14} {:<12} {}",
            i + 1,
            entry.date,
            format!("{}: {}", symbol, entry.value),
            entry.id
        )?;
    }
    writeln!(out, "━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━")?;
    writeln!(out, "TOTAL: {} {}", symbol, ledger.total_display())?;
    Ok(())
}

#[cfg(feature = "tui")]
fn run_ui_mode<S: KeyValueStore>(ledger: Ledger<S>) -> Result<()> {
    let mut app = ui::App::new(ledger);
    ui::run_ui(&mut app)?;
    tracing::info!("ui closed");
    Ok(())
}

#[cfg(not(feature = "tui"))]
fn run_ui_mode<S: KeyValueStore>(_ledger: Ledger<S>) -> Result<()> {
    eprintln!("❌ TUI mode not available!");
    eprintln!("   Rebuild with: cargo build --features tui");
    eprintln!("   Or use the headless commands: add, list, remove, total");
    std::process::exit(1);
}
