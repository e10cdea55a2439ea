//! Command-line access to the ws-utils utility functions.
//!
//! Runs the same library code as the HTTP service, without a server.
//!
//! # Usage
//!
//! ```bash
//! # Draw 6 numbers from 1..=45
//! cargo run --bin wsctl -- lotto
//!
//! # Reproducible draw from a custom range
//! cargo run --bin wsctl -- lotto --count 3 --min 1 --max 10 --seed 42
//!
//! # Derive a password (prompts when the website is omitted)
//! cargo run --bin wsctl -- password http://www.google.com.test
//!
//! # Count non-overlapping occurrences
//! cargo run --bin wsctl -- count "robot robot robot" robot
//! ```

use anyhow::Result;
use clap::{Parser, Subcommand};
use colored::*;
use dialoguer::Input;
use ws_utils::utils::lotto::{DEFAULT_COUNT, DEFAULT_MAX, DEFAULT_MIN};
use ws_utils::utils::random::{NumberSource, SeededSource, ThreadRngSource};
use ws_utils::utils::{UtilError, count_word, generate_lotto, generate_password};

/// CLI tool for the ws-utils utilities.
#[derive(Parser)]
#[command(name = "wsctl")]
#[command(author, version, about, long_about = None)]
struct Cli {
    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Draw unique lotto numbers
    Lotto {
        /// How many numbers to draw
        #[arg(short, long, default_value_t = DEFAULT_COUNT)]
        count: i64,

        /// Smallest number in the range
        #[arg(long, default_value_t = DEFAULT_MIN, allow_negative_numbers = true)]
        min: i64,

        /// Largest number in the range
        #[arg(long, default_value_t = DEFAULT_MAX, allow_negative_numbers = true)]
        max: i64,

        /// Seed for a reproducible draw
        #[arg(short, long)]
        seed: Option<u64>,

        /// Print the numbers in ascending order
        #[arg(long)]
        sorted: bool,
    },

    /// Derive a password from a website address
    Password {
        /// Website, e.g. "https://www.example.org" (prompted if omitted)
        website: Option<String>,
    },

    /// Count non-overlapping occurrences of a word in a text
    Count {
        /// Text to search
        text: String,

        /// Word to count
        word: String,
    },
}

fn main() -> Result<()> {
    let cli = Cli::parse();

    let outcome = match cli.command {
        Commands::Lotto {
            count,
            min,
            max,
            seed,
            sorted,
        } => handle_lotto(count, min, max, seed, sorted),
        Commands::Password { website } => handle_password(website),
        Commands::Count { text, word } => {
            handle_count(&text, &word);
            Ok(())
        }
    };

    match outcome {
        Ok(()) => Ok(()),
        Err(CliError::Invalid(e)) => {
            eprintln!("{} {}", "❌ Invalid input:".red().bold(), e);
            std::process::exit(2);
        }
        Err(CliError::Other(e)) => Err(e),
    }
}

/// Failures split by exit behaviour: bad input exits with code 2.
enum CliError {
    Invalid(UtilError),
    Other(anyhow::Error),
}

impl From<UtilError> for CliError {
    fn from(e: UtilError) -> Self {
        CliError::Invalid(e)
    }
}

impl From<dialoguer::Error> for CliError {
    fn from(e: dialoguer::Error) -> Self {
        CliError::Other(e.into())
    }
}

fn handle_lotto(
    count: i64,
    min: i64,
    max: i64,
    seed: Option<u64>,
    sorted: bool,
) -> Result<(), CliError> {
    let source: Box<dyn NumberSource> = match seed {
        Some(seed) => Box::new(SeededSource::new(seed)),
        None => Box::new(ThreadRngSource),
    };

    let mut numbers = generate_lotto(source.as_ref(), count, min, max)?;
    if sorted {
        numbers.sort_unstable();
    }

    println!("{}", "🎲 Lotto".bright_blue().bold());
    println!("  Range: {}", format!("{}..={}", min, max).cyan());
    if let Some(seed) = seed {
        println!("  Seed:  {}", seed.to_string().cyan());
    }

    let rendered: Vec<String> = numbers.iter().map(|n| n.to_string()).collect();
    println!("  {}", rendered.join(" ").bright_yellow().bold());

    Ok(())
}

fn handle_password(website: Option<String>) -> Result<(), CliError> {
    let website = match website {
        Some(w) => w,
        None => Input::new()
            .with_prompt("Website")
            .with_initial_text("https://www.")
            .interact_text()?,
    };

    let password = generate_password(&website)?;

    println!("{}", "🔑 Password".bright_blue().bold());
    println!("  Website:  {}", website.cyan());
    println!("  Password: {}", password.bright_yellow().bold());

    Ok(())
}

fn handle_count(text: &str, word: &str) {
    let count = count_word(text, word);

    println!("{}", "🔎 Count".bright_blue().bold());
    println!("  Word:  {}", format!("{:?}", word).cyan());
    println!("  Count: {}", count.to_string().bright_yellow().bold());
}
