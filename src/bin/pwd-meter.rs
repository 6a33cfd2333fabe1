//! CLI tool for checking password strength and exporting the browser meter

use clap::{Parser, Subcommand};
use colored::*;
use pwd_meter::{
    BONUS_LENGTH, PasswordEvaluation, PasswordScore, PasswordStrength,
    evaluate_password_strength, write_meter,
};
use secrecy::SecretString;
use std::path::PathBuf;
use std::process;
use tracing_subscriber::{EnvFilter, layer::SubscriberExt, util::SubscriberInitExt};

#[derive(Parser)]
#[command(name = "pwd-meter")]
#[command(about = "Check password strength against common rules", long_about = None)]
#[command(version)]
struct Cli {
    /// Enable verbose logging
    #[arg(short = 'v', long)]
    verbose: bool,

    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Evaluate a password and print a strength report
    Check {
        /// Password to evaluate (omit to be prompted without echo)
        #[arg(short = 'p', long)]
        password: Option<String>,

        /// Output format
        #[arg(short = 'f', long, default_value = "text")]
        format: OutputFormat,

        /// Exit non-zero if the score falls below this value (0-6)
        #[arg(long)]
        min_score: Option<u8>,
    },

    /// Generate the self-contained browser meter page
    Meter {
        /// Output file (default: stdout)
        #[arg(short = 'o', long)]
        output: Option<PathBuf>,
    },
}

#[derive(Clone, Debug)]
enum OutputFormat {
    Text,
    Json,
}

impl std::str::FromStr for OutputFormat {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_lowercase().as_str() {
            "text" => Ok(OutputFormat::Text),
            "json" => Ok(OutputFormat::Json),
            _ => Err(format!("Unknown format: {}", s)),
        }
    }
}

fn main() {
    let cli = Cli::parse();

    init_logging(cli.verbose);

    match cli.command {
        Commands::Check {
            password,
            format,
            min_score,
        } => {
            let password = match password {
                Some(p) => SecretString::new(p.into()),
                None => match prompt_password() {
                    Ok(p) => p,
                    Err(e) => {
                        eprintln!("{} {}", "Error:".red().bold(), e);
                        process::exit(2);
                    }
                },
            };

            let evaluation = evaluate_password_strength(&password);

            match format {
                OutputFormat::Text => display_report(&evaluation),
                OutputFormat::Json => println!("{}", generate_json_report(&evaluation)),
            }

            if let Some(min) = min_score {
                if evaluation.score.value() < min {
                    eprintln!(
                        "{} score {} is below the required minimum {}",
                        "Failed:".red().bold(),
                        evaluation.score.value(),
                        min
                    );
                    process::exit(1);
                }
            }
        }

        Commands::Meter { output } => match output {
            Some(path) => match write_meter(&path) {
                Ok(()) => println!("Meter page written to: {}", path.display()),
                Err(e) => {
                    eprintln!("{} {}", "Error:".red().bold(), e);
                    process::exit(1);
                }
            },
            None => print!("{}", pwd_meter::render_meter_html()),
        },
    }
}

fn init_logging(verbose: bool) {
    let filter = if verbose {
        EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("debug"))
    } else {
        EnvFilter::new("warn")
    };

    tracing_subscriber::registry()
        .with(filter)
        .with(tracing_subscriber::fmt::layer())
        .init();
}

/// Prompts for a password without echoing it.
///
/// An empty entry is a usage error, so scripts piping nothing in fail
/// loudly instead of getting a score for the empty string.
fn prompt_password() -> Result<SecretString, Box<dyn std::error::Error>> {
    println!("No password provided. You will be prompted (input hidden).");
    let entered = rpassword::prompt_password("Enter password: ")?;
    if entered.is_empty() {
        return Err("no password entered".into());
    }
    Ok(SecretString::new(entered.into()))
}

fn display_report(evaluation: &PasswordEvaluation) {
    println!("\n{}", "=== Password Strength Report ===".bold());
    println!("Length   : {}", evaluation.length);
    println!(
        "Score    : {} / {}",
        evaluation.score.value(),
        PasswordScore::MAX.value()
    );

    let strength = evaluation.strength();
    let strength_str = match strength {
        PasswordStrength::Weak => strength.to_string().red(),
        PasswordStrength::Medium => strength.to_string().yellow(),
        PasswordStrength::Strong => strength.to_string().green(),
    };
    println!("Strength : {}", strength_str.bold());

    println!("\nRule checks:");
    for check in &evaluation.checks {
        let mark = if check.passed {
            "✓".green()
        } else {
            "✗".red()
        };
        println!("  {} {}", mark, check.name);
    }
    let bonus_mark = if evaluation.bonus {
        "✓".green()
    } else {
        "✗".red()
    };
    println!("  {} length bonus ({}+ characters)", bonus_mark, BONUS_LENGTH);

    if evaluation.suggestions.is_empty() {
        println!("\n{} Nothing to improve.", "Great job!".green().bold());
    } else {
        println!("\nSuggestions:");
        for suggestion in &evaluation.suggestions {
            println!("  - {}", suggestion);
        }
    }
}

fn generate_json_report(evaluation: &PasswordEvaluation) -> String {
    let report = serde_json::json!({
        "length": evaluation.length,
        "score": evaluation.score,
        "max_score": PasswordScore::MAX,
        "strength": evaluation.strength(),
        "bonus": evaluation.bonus,
        "checks": evaluation.checks,
        "suggestions": evaluation.suggestions,
    });

    serde_json::to_string_pretty(&report).unwrap_or_else(|e| {
        eprintln!("Failed to serialize report: {}", e);
        process::exit(1);
    })
}
