//! Interactive session loop.

use std::io::{self, Write};
use std::path::PathBuf;

use dialoguer::Input;

use crate::app::api::{self, ProfileOptions};
use crate::app::session::{DisplayText, EditTarget, GenerationOutcome, Session};
use crate::domain::catalog::WORD_LIMIT_PRESETS;
use crate::domain::{AddOutcome, AppError, WordLimit};
use crate::ports::{GenerationClient, KeyValueStore};

/// One line typed at the session prompt.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum SessionCommand {
    List,
    Select(String),
    Deselect,
    Trait(String),
    ClearTraits,
    Style(String),
    Limit(WordLimit),
    AddTrait(String),
    DeleteTrait(String),
    AddStyle(String),
    DeleteStyle(String),
    Key(String),
    ClearKey,
    Load(PathBuf),
    Prompt,
    Generate,
    Show,
    Edit(String),
    Help,
    Quit,
}

/// Whether the loop keeps reading after a command.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Flow {
    Continue,
    Exit,
}

const HELP: &str = "\
Commands:
  list                 show the roster (* marks students with a comment)
  select N|NAME        make a student active
  deselect             clear the active student
  trait LABEL          toggle a trait for the active student
  clear                clear the active student's traits
  style LABEL          toggle a writing style
  limit N              set the target length
  add-trait LABEL      add a custom trait      del-trait LABEL   delete it everywhere
  add-style LABEL      add a custom style      del-style LABEL   delete it
  key KEY              store the API key       key-clear         remove it
  load PATH            replace the student list from a file
  prompt               preview the prompt
  generate             generate a comment for the active student
  show                 print the current selection and text
  edit TEXT            replace the shown prompt or comment
  help | quit";

/// Parse one input line. Blank lines yield `None`.
pub fn parse_command(line: &str) -> Result<Option<SessionCommand>, AppError> {
    let line = line.trim();
    if line.is_empty() {
        return Ok(None);
    }
    let (word, rest) = match line.split_once(char::is_whitespace) {
        Some((word, rest)) => (word, rest.trim()),
        None => (line, ""),
    };
    let arg = |name: &str| -> Result<String, AppError> {
        if rest.is_empty() {
            Err(AppError::config_error(format!("'{}' needs an argument", name)))
        } else {
            Ok(rest.to_string())
        }
    };

    let command = match word {
        "list" | "ls" => SessionCommand::List,
        "select" | "sel" => SessionCommand::Select(arg(word)?),
        "deselect" => SessionCommand::Deselect,
        "trait" => SessionCommand::Trait(arg(word)?),
        "clear" => SessionCommand::ClearTraits,
        "style" => SessionCommand::Style(arg(word)?),
        "limit" => SessionCommand::Limit(arg(word)?.parse()?),
        "add-trait" => SessionCommand::AddTrait(arg(word)?),
        "del-trait" => SessionCommand::DeleteTrait(arg(word)?),
        "add-style" => SessionCommand::AddStyle(arg(word)?),
        "del-style" => SessionCommand::DeleteStyle(arg(word)?),
        "key" => SessionCommand::Key(arg(word)?),
        "key-clear" => SessionCommand::ClearKey,
        "load" => SessionCommand::Load(PathBuf::from(arg(word)?)),
        "prompt" => SessionCommand::Prompt,
        "generate" | "gen" => SessionCommand::Generate,
        "show" => SessionCommand::Show,
        "edit" => SessionCommand::Edit(rest.to_string()),
        "help" | "?" => SessionCommand::Help,
        "quit" | "exit" | "q" => SessionCommand::Quit,
        other => {
            return Err(AppError::config_error(format!(
                "Unknown command '{}'. Type 'help' for a list.",
                other
            )));
        }
    };
    Ok(Some(command))
}

/// Apply one command to the session, writing user-facing output to `out`.
pub fn execute<S, G, W>(
    session: &mut Session<S>,
    client: &G,
    command: SessionCommand,
    out: &mut W,
) -> Result<Flow, AppError>
where
    S: KeyValueStore,
    G: GenerationClient,
    W: Write,
{
    match command {
        SessionCommand::List => {
            if session.roster().is_empty() {
                writeln!(out, "No students. Use 'load PATH' to add some.")?;
            }
            for entry in session.roster().entries() {
                let active = if session.active() == Some(entry.id) { ">" } else { " " };
                let done = if session.has_comment(entry.id) { "*" } else { " " };
                writeln!(out, "{}{} {}", active, done, entry.label())?;
            }
        }
        SessionCommand::Select(query) => {
            let id = session.select(&query)?;
            if let Some(entry) = session.roster().get(id) {
                writeln!(out, "Selected {}", entry.label())?;
            }
            write_display(session, out)?;
        }
        SessionCommand::Deselect => {
            session.deselect();
            writeln!(out, "No student selected")?;
        }
        SessionCommand::Trait(label) => {
            let on = session.toggle_trait(&label)?;
            writeln!(out, "{} trait '{}'", if on { "+" } else { "-" }, label)?;
        }
        SessionCommand::ClearTraits => {
            session.clear_traits()?;
            writeln!(out, "Cleared traits")?;
        }
        SessionCommand::Style(label) => {
            let on = session.toggle_style(&label);
            writeln!(out, "{} style '{}'", if on { "+" } else { "-" }, label)?;
        }
        SessionCommand::Limit(limit) => {
            session.set_word_limit(limit);
            writeln!(out, "Word limit: {}", limit)?;
        }
        SessionCommand::AddTrait(label) => {
            let outcome = session.add_custom_trait(&label)?;
            write_add_outcome(out, "trait", &label, &outcome)?;
        }
        SessionCommand::DeleteTrait(label) => {
            let updated = session.delete_custom_trait(&label)?;
            writeln!(out, "Deleted trait '{}' ({} student record(s) updated)", label, updated)?;
        }
        SessionCommand::AddStyle(label) => {
            let outcome = session.add_custom_style(&label)?;
            write_add_outcome(out, "style", &label, &outcome)?;
        }
        SessionCommand::DeleteStyle(label) => {
            session.delete_custom_style(&label)?;
            writeln!(out, "Deleted style '{}'", label)?;
        }
        SessionCommand::Key(raw) => match session.set_credential(&raw)? {
            Some(credential) => {
                writeln!(out, "Saved API key {}", credential.masked())?;
                if !credential.has_expected_format() {
                    writeln!(out, "Warning: the key does not look like a Gemini API key")?;
                }
            }
            None => writeln!(out, "Cleared API key")?,
        },
        SessionCommand::ClearKey => {
            session.set_credential("")?;
            writeln!(out, "Cleared API key")?;
        }
        SessionCommand::Load(path) => {
            let raw = super::read_source(&path)?;
            session.set_student_list(&raw)?;
            writeln!(out, "Loaded {} student(s)", session.roster().len())?;
        }
        SessionCommand::Prompt => {
            let prompt = session.preview_prompt()?;
            writeln!(out, "{}", prompt)?;
        }
        SessionCommand::Generate => {
            writeln!(out, "Generating...")?;
            out.flush()?;
            match session.generate(client)? {
                GenerationOutcome::Committed { student, text } => {
                    let label = session.roster().get(student).map(|e| e.label()).unwrap_or("?");
                    writeln!(out, "[{}]\n{}", label, text)?;
                }
                GenerationOutcome::Discarded { .. } => {
                    writeln!(out, "Student left the roster; result discarded")?;
                }
            }
        }
        SessionCommand::Show => {
            match session.active_entry() {
                Some(entry) => writeln!(out, "Student: {}", entry.label())?,
                None => writeln!(out, "Student: (none)")?,
            }
            let selection = session.selection();
            writeln!(out, "Traits: {}", selection.traits.iter().collect::<Vec<_>>().join("、"))?;
            writeln!(out, "Styles: {}", selection.styles.iter().collect::<Vec<_>>().join("、"))?;
            let presets: Vec<String> = WORD_LIMIT_PRESETS.iter().map(u32::to_string).collect();
            writeln!(out, "Word limit: {} (presets: {})", selection.word_limit, presets.join("/"))?;
            write_display(session, out)?;
        }
        SessionCommand::Edit(text) => match session.edit_display(&text)? {
            EditTarget::Preview => writeln!(out, "Prompt updated")?,
            EditTarget::Comment(_) => writeln!(out, "Comment updated")?,
        },
        SessionCommand::Help => writeln!(out, "{}", HELP)?,
        SessionCommand::Quit => return Ok(Flow::Exit),
    }
    Ok(Flow::Continue)
}

fn write_display<S: KeyValueStore, W: Write>(
    session: &Session<S>,
    out: &mut W,
) -> Result<(), AppError> {
    match session.display() {
        DisplayText::Preview(text) => writeln!(out, "--- prompt ---\n{}", text)?,
        DisplayText::Comment(text) => writeln!(out, "--- comment ---\n{}", text)?,
        DisplayText::Empty { .. } => {}
    }
    Ok(())
}

fn write_add_outcome<W: Write>(
    out: &mut W,
    noun: &str,
    label: &str,
    outcome: &AddOutcome,
) -> Result<(), AppError> {
    match outcome {
        AddOutcome::Added => writeln!(out, "Added {} '{}'", noun, label.trim())?,
        AddOutcome::AddedWithEviction { evicted } => {
            writeln!(out, "Added {} '{}' (removed oldest '{}')", noun, label.trim(), evicted)?
        }
        AddOutcome::Duplicate => writeln!(out, "'{}' is already in the list", label.trim())?,
        AddOutcome::Empty => writeln!(out, "Nothing to add")?,
    }
    Ok(())
}

fn prompt_label<S: KeyValueStore>(session: &Session<S>) -> String {
    match session.active_entry() {
        Some(entry) if session.is_generating() => format!("{} (generating)", entry.label()),
        Some(entry) => entry.label().to_string(),
        None => "commentsmith".to_string(),
    }
}

pub fn run_session(profile: &ProfileOptions) -> Result<(), AppError> {
    let (mut session, client) = api::open_session(profile)?;
    let mut stdout = io::stdout();
    println!("Type 'help' for commands, 'quit' to leave.");

    loop {
        let line: String = Input::new()
            .with_prompt(prompt_label(&session))
            .allow_empty(true)
            .interact_text()
            .map_err(|e| AppError::Interaction(e.to_string()))?;

        let command = match parse_command(&line) {
            Ok(Some(command)) => command,
            Ok(None) => continue,
            Err(e) => {
                eprintln!("Error: {}", e);
                continue;
            }
        };

        match execute(&mut session, &client, command, &mut stdout) {
            Ok(Flow::Exit) => break,
            Ok(Flow::Continue) => {}
            Err(e) if e.is_validation() => eprintln!("⚠️  {}", e),
            Err(e) => eprintln!("Error: {}", e),
        }
    }
    Ok(())
}
