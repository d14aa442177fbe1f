//! CLI Adapter.

mod compose;
mod interactive;
mod labels;

use std::io::Read;
use std::path::PathBuf;

use clap::{Parser, Subcommand};

use crate::app::api::{self, ProfileOptions};
use crate::domain::AppError;

/// Environment variable holding the log filter.
pub const LOG_ENV: &str = "COMMENTSMITH_LOG";

#[derive(Parser)]
#[command(name = "commentsmith")]
#[command(version)]
#[command(about = "Compose end-of-term student comments with Gemini", long_about = None)]
struct Cli {
    /// Config file (defaults to <data dir>/config.toml)
    #[arg(long, global = true)]
    config: Option<PathBuf>,
    /// Data directory (defaults to $COMMENTSMITH_HOME or ~/.commentsmith)
    #[arg(long, global = true)]
    data_dir: Option<PathBuf>,
    /// Keep all state in memory for this run
    #[arg(long, global = true)]
    ephemeral: bool,
    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Show or replace the student list
    #[clap(visible_alias = "r")]
    Roster {
        #[command(subcommand)]
        command: RosterCommands,
    },
    /// List, add or remove traits
    #[clap(visible_alias = "t")]
    Traits {
        #[command(subcommand)]
        command: labels::LabelCommands,
    },
    /// List, add or remove writing styles
    #[clap(visible_alias = "st")]
    Styles {
        #[command(subcommand)]
        command: labels::LabelCommands,
    },
    /// Manage the stored Gemini API key
    #[clap(visible_alias = "k")]
    Key {
        #[command(subcommand)]
        command: KeyCommands,
    },
    /// Print the prompt that would be sent for a student
    #[clap(visible_alias = "p")]
    Prompt(compose::ComposeArgs),
    /// Generate a comment for a student
    #[clap(visible_alias = "g")]
    Generate(compose::ComposeArgs),
    /// Start an interactive session
    #[clap(visible_alias = "s")]
    Session,
}

#[derive(Subcommand)]
enum RosterCommands {
    /// Print the numbered roster
    #[clap(visible_alias = "ls")]
    Show,
    /// Replace the student list with the contents of FILE ('-' for stdin)
    Set {
        file: PathBuf,
    },
}

#[derive(Subcommand)]
enum KeyCommands {
    /// Store an API key
    Set {
        key: String,
    },
    /// Remove the stored API key
    Clear,
    /// Show whether a key is stored (masked)
    Status,
}

/// Entry point for the CLI.
pub fn run() {
    init_tracing();
    let cli = Cli::parse();
    let profile = ProfileOptions {
        config_path: cli.config,
        data_dir: cli.data_dir,
        ephemeral: cli.ephemeral,
    };

    let result: Result<(), AppError> = match cli.command {
        Commands::Roster { command } => run_roster(&profile, command),
        Commands::Traits { command } => labels::run_labels(&profile, api::LabelKind::Trait, command),
        Commands::Styles { command } => labels::run_labels(&profile, api::LabelKind::Style, command),
        Commands::Key { command } => run_key(&profile, command),
        Commands::Prompt(args) => compose::run_prompt(&profile, args),
        Commands::Generate(args) => compose::run_generate(&profile, args),
        Commands::Session => interactive::run_session(&profile),
    };

    if let Err(e) = result {
        eprintln!("Error: {}", e);
        std::process::exit(1);
    }
}

fn init_tracing() {
    let filter = tracing_subscriber::EnvFilter::try_from_env(LOG_ENV)
        .unwrap_or_else(|_| tracing_subscriber::EnvFilter::new("warn"));
    let _ = tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(std::io::stderr)
        .try_init();
}

fn run_roster(profile: &ProfileOptions, command: RosterCommands) -> Result<(), AppError> {
    match command {
        RosterCommands::Show => {
            let roster = api::roster_show(profile)?;
            if roster.is_empty() {
                println!("No students. Use 'commentsmith roster set <FILE>' to add some.");
            }
            for entry in roster {
                println!("{}", entry.label());
            }
        }
        RosterCommands::Set { file } => {
            let raw = read_source(&file)?;
            let roster = api::roster_set(profile, &raw)?;
            println!("✅ Saved roster with {} student(s)", roster.len());
            for entry in roster {
                println!("  {}", entry.label());
            }
        }
    }
    Ok(())
}

fn run_key(profile: &ProfileOptions, command: KeyCommands) -> Result<(), AppError> {
    match command {
        KeyCommands::Set { key } => {
            let status = api::key_set(profile, &key)?;
            match status.masked {
                Some(masked) => {
                    println!("✅ Saved API key {}", masked);
                    if !status.well_formed {
                        eprintln!("⚠️  The key does not look like a Gemini API key (AIza…)");
                    }
                }
                None => println!("✅ Cleared API key"),
            }
        }
        KeyCommands::Clear => {
            api::key_clear(profile)?;
            println!("✅ Cleared API key");
        }
        KeyCommands::Status => {
            let status = api::key_status(profile)?;
            match status.masked {
                Some(masked) => println!("API key: {}", masked),
                None => println!("API key: not set"),
            }
        }
    }
    Ok(())
}

/// Read a path, or stdin for `-`.
pub(crate) fn read_source(path: &std::path::Path) -> Result<String, AppError> {
    if path.as_os_str() == "-" {
        let mut raw = String::new();
        std::io::stdin().read_to_string(&mut raw)?;
        Ok(raw)
    } else {
        Ok(std::fs::read_to_string(path)?)
    }
}
