//! One-shot prompt and generate commands.

use clap::Args;

use crate::app::api::{self, ComposeOptions, ProfileOptions};
use crate::domain::{AppError, WordLimit};

#[derive(Args)]
pub struct ComposeArgs {
    /// Student: roster position, display label (03.Name) or name
    student: String,
    /// Trait to include (repeatable)
    #[arg(short = 't', long = "trait")]
    traits: Vec<String>,
    /// Writing style (repeatable)
    #[arg(short = 's', long = "style")]
    styles: Vec<String>,
    /// Target length
    #[arg(short = 'l', long = "limit")]
    limit: Option<WordLimit>,
}

impl From<ComposeArgs> for ComposeOptions {
    fn from(args: ComposeArgs) -> Self {
        ComposeOptions {
            student: args.student,
            traits: args.traits,
            styles: args.styles,
            word_limit: args.limit,
        }
    }
}

pub fn run_prompt(profile: &ProfileOptions, args: ComposeArgs) -> Result<(), AppError> {
    let composed = api::prompt(profile, &args.into())?;
    println!("{}", composed.text);
    Ok(())
}

pub fn run_generate(profile: &ProfileOptions, args: ComposeArgs) -> Result<(), AppError> {
    let composed = api::generate(profile, &args.into())?;
    eprintln!("✅ Generated comment for {}", composed.label);
    println!("{}", composed.text);
    Ok(())
}
