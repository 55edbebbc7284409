//! pwtables - check passwords against a word list and compare the lookup
//! cost of four hash-table configurations.

use std::io::{self, BufRead, Write};

use anyhow::{Context, Result};
use clap::{Parser, Subcommand};
use tracing::info;
use tracing_subscriber::EnvFilter;

use pwtables::{CheckerConfig, Dictionary, DictionarySource, PasswordChecker};

/// Passwords checked by `batch` when none are given.
const SAMPLE_PASSWORDS: [&str; 5] = [
    "account8",
    "accountability",
    "9a$D#qW7!uX&Lv3zT",
    "B@k45*W!c$Y7#zR9P",
    "X$8vQ!mW#3Dz&Yr4K5",
];

/// Input that ends an interactive session.
const QUIT: &str = "quit";

#[derive(Parser, Debug)]
#[command(name = "pwtables", version)]
#[command(about = "Dictionary password checker with hash-table comparison counts", long_about = None)]
struct Cli {
    /// Word list: a file path or an http(s) URL, one word per line
    #[arg(
        short,
        long,
        env = "PWTABLES_DICTIONARY",
        default_value = pwtables::dictionary::DEFAULT_SOURCE_URL
    )]
    dictionary: DictionarySource,

    /// Bucket count of the chained tables
    #[arg(long, env = "PWTABLES_CHAIN_CAPACITY", default_value_t = pwtables::chained::CHAIN_CAPACITY)]
    chain_capacity: usize,

    /// Slot count of the probing tables
    #[arg(long, env = "PWTABLES_PROBE_CAPACITY", default_value_t = pwtables::probing::PROBE_CAPACITY)]
    probe_capacity: usize,

    /// Minimum password length, in characters
    #[arg(long, default_value_t = pwtables::config::MIN_PASSWORD_LENGTH)]
    min_length: usize,

    #[command(subcommand)]
    command: Command,
}

#[derive(Subcommand, Debug)]
enum Command {
    /// Check a list of passwords (a built-in sample if none are given)
    Batch {
        /// Passwords to check
        passwords: Vec<String>,
    },
    /// Read passwords from stdin until EOF or `quit`
    Interactive,
    /// Print occupancy statistics for every table
    Stats,
}

impl Cli {
    fn config(&self) -> Result<CheckerConfig> {
        anyhow::ensure!(self.chain_capacity > 0, "--chain-capacity must be at least 1");
        anyhow::ensure!(self.probe_capacity > 0, "--probe-capacity must be at least 1");
        Ok(CheckerConfig::new()
            .with_chain_capacity(self.chain_capacity)
            .with_probe_capacity(self.probe_capacity)
            .with_min_length(self.min_length))
    }
}

fn main() -> Result<()> {
    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("warn")),
        )
        .with_writer(io::stderr)
        .init();

    let cli = Cli::parse();
    let config = cli.config()?;

    let dictionary = Dictionary::load(&cli.dictionary);
    info!(source = %cli.dictionary, words = dictionary.len(), "dictionary ready");
    let checker = PasswordChecker::new(config, &dictionary);

    let stdout = io::stdout();
    let mut out = stdout.lock();
    match cli.command {
        Command::Batch { passwords } => {
            if passwords.is_empty() {
                for password in SAMPLE_PASSWORDS {
                    print_report(&mut out, &checker, password)?;
                }
            } else {
                for password in &passwords {
                    print_report(&mut out, &checker, password)?;
                }
            }
        }
        Command::Interactive => interactive(&mut out, &checker)?,
        Command::Stats => {
            for (kind, stats) in checker.stats() {
                writeln!(out, "{kind}: {stats}")?;
            }
        }
    }
    Ok(())
}

fn print_report(out: &mut impl Write, checker: &PasswordChecker, password: &str) -> Result<()> {
    writeln!(out)?;
    write!(out, "{}", checker.report(password))?;
    Ok(())
}

fn interactive(out: &mut impl Write, checker: &PasswordChecker) -> Result<()> {
    writeln!(out, "enter password '{QUIT}' to stop")?;
    let mut lines = io::stdin().lock().lines();
    loop {
        write!(out, "\npassword: ")?;
        out.flush()?;
        let Some(line) = lines.next() else {
            break;
        };
        let password = line.context("failed to read password")?;
        if password.eq_ignore_ascii_case(QUIT) {
            break;
        }
        print_report(out, checker, &password)?;
    }
    Ok(())
}
