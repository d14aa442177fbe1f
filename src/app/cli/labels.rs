//! Trait and style list commands.

use clap::Subcommand;

use crate::app::api::{self, AddOutcome, LabelKind, ProfileOptions};
use crate::domain::AppError;

#[derive(Subcommand)]
pub enum LabelCommands {
    /// List built-in and custom labels
    #[clap(visible_alias = "ls")]
    List,
    /// Add a custom label
    Add {
        label: String,
    },
    /// Remove a custom label
    #[clap(visible_alias = "rm")]
    Remove {
        label: String,
    },
}

pub fn run_labels(
    profile: &ProfileOptions,
    kind: LabelKind,
    command: LabelCommands,
) -> Result<(), AppError> {
    match command {
        LabelCommands::List => {
            let listing = api::labels_list(profile, kind)?;
            for (group, items) in &listing.builtin {
                match kind {
                    LabelKind::Trait => println!("{}: {}", group, items.join("、")),
                    LabelKind::Style => {
                        println!("{}", group);
                        for line in items {
                            println!("    {}", line);
                        }
                    }
                }
            }
            if listing.custom.is_empty() {
                println!("Custom: (none)");
            } else {
                println!("Custom: {}", listing.custom.join("、"));
            }
        }
        LabelCommands::Add { label } => match api::labels_add(profile, kind, &label)? {
            AddOutcome::Added => println!("✅ Added custom {} '{}'", kind.noun(), label.trim()),
            AddOutcome::AddedWithEviction { evicted } => println!(
                "✅ Added custom {} '{}' (removed oldest '{}')",
                kind.noun(),
                label.trim(),
                evicted
            ),
            AddOutcome::Duplicate => println!("'{}' is already in the list", label.trim()),
            AddOutcome::Empty => {
                return Err(AppError::config_error(format!("Custom {} cannot be empty", kind.noun())));
            }
        },
        LabelCommands::Remove { label } => {
            api::labels_remove(profile, kind, &label)?;
            println!("✅ Removed custom {} '{}'", kind.noun(), label.trim());
        }
    }
    Ok(())
}
