//! Player input collaborators.
//!
//! Exploration and accusation only need "give me the next line". The
//! [`PlayerInput`] trait provides that; [`InputManager`] reads from the
//! terminal (rustyline when interactive) and [`ScriptedInput`] replays a fixed
//! list of lines for tests and demos.

use std::collections::VecDeque;
use std::fs;
use std::io::{self, IsTerminal, Write};
use std::path::{Path, PathBuf};

use log::{info, warn};
use rustyline::completion::{Completer, Pair};
use rustyline::error::ReadlineError;
use rustyline::highlight::Highlighter;
use rustyline::hint::Hinter;
use rustyline::history::DefaultHistory;
use rustyline::validate::Validator;
use rustyline::{Context, Helper};

/// Outcome of reading a line of player input.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum InputEvent {
    Line(String),
    Eof,
    Interrupted,
}

/// Source of player input lines.
pub trait PlayerInput {
    /// Show `prompt` and wait for the next line, without its line terminator.
    ///
    /// # Errors
    /// Returns an error if the underlying source fails.
    fn read_line(&mut self, prompt: &str) -> io::Result<InputEvent>;

    /// Words offered for tab completion on subsequent reads.
    fn set_completions(&mut self, _terms: &[String]) {}
}

type SleuthEditor = rustyline::Editor<SleuthHelper, DefaultHistory>;

#[derive(Default)]
struct SleuthHelper {
    terms: Vec<String>,
}

impl Helper for SleuthHelper {}

impl Completer for SleuthHelper {
    type Candidate = Pair;

    fn complete(&self, line: &str, pos: usize, _ctx: &Context<'_>) -> rustyline::Result<(usize, Vec<Self::Candidate>)> {
        let prefix = line[..pos].trim_start();
        let start = pos - prefix.len();
        if prefix.is_empty() {
            return Ok((start, Vec::new()));
        }
        let pairs = matching_terms(&self.terms, prefix)
            .into_iter()
            .map(|term| Pair {
                display: term.clone(),
                replacement: term,
            })
            .collect();
        Ok((start, pairs))
    }
}

fn matching_terms(terms: &[String], prefix: &str) -> Vec<String> {
    let lower = prefix.to_lowercase();
    terms
        .iter()
        .filter(|term| term.to_lowercase().starts_with(&lower))
        .cloned()
        .collect()
}

impl Hinter for SleuthHelper {
    type Hint = String;
}

impl Highlighter for SleuthHelper {}

impl Validator for SleuthHelper {}

/// Terminal input for a real game.
///
/// Uses a rustyline editor with persistent history and suspect completion when
/// stdin is a terminal. Otherwise, or once the editor fails, lines come from
/// plain stdin for the rest of the run.
#[derive(Default)]
pub struct InputManager {
    editor: Option<SleuthEditor>,
    history: Option<PathBuf>,
    buffer: String,
}

impl InputManager {
    pub fn new() -> Self {
        if !io::stdin().is_terminal() {
            info!("stdin is not a terminal; reading plain lines");
            return Self::default();
        }
        let history = history_path();
        match open_editor(history.as_deref()) {
            Ok(editor) => Self {
                editor: Some(editor),
                history,
                buffer: String::new(),
            },
            Err(err) => {
                warn!("line editor unavailable ({err}); reading plain lines");
                Self::default()
            },
        }
    }

    fn read_plain(&mut self, prompt: &str) -> io::Result<InputEvent> {
        print!("{prompt}");
        io::stdout().flush()?;
        self.buffer.clear();
        if io::stdin().read_line(&mut self.buffer)? == 0 {
            return Ok(InputEvent::Eof);
        }
        Ok(InputEvent::Line(strip_line_terminator(&self.buffer).to_string()))
    }
}

impl PlayerInput for InputManager {
    fn read_line(&mut self, prompt: &str) -> io::Result<InputEvent> {
        let Some(editor) = self.editor.as_mut() else {
            return self.read_plain(prompt);
        };
        match editor.readline(prompt) {
            Ok(line) => {
                if !line.trim().is_empty() {
                    remember(editor, self.history.as_deref(), &line);
                }
                Ok(InputEvent::Line(line))
            },
            Err(err) => match editor_event(&err) {
                Some(event) => Ok(event),
                None => {
                    warn!("line editor failed ({err}); switching to plain stdin");
                    self.editor = None;
                    self.read_plain(prompt)
                },
            },
        }
    }

    fn set_completions(&mut self, terms: &[String]) {
        if let Some(helper) = self.editor.as_mut().and_then(|editor| editor.helper_mut()) {
            helper.terms = terms.to_vec();
        }
    }
}

fn open_editor(history: Option<&Path>) -> rustyline::Result<SleuthEditor> {
    let mut editor = SleuthEditor::new()?;
    editor.set_helper(Some(SleuthHelper::default()));
    let Some(path) = history else {
        return Ok(editor);
    };
    if let Some(dir) = path.parent()
        && let Err(err) = fs::create_dir_all(dir)
    {
        warn!("cannot create history directory {}: {err}", dir.display());
    }
    match editor.load_history(path) {
        Ok(()) => info!("history loaded from {}", path.display()),
        Err(ReadlineError::Io(err)) if err.kind() == io::ErrorKind::NotFound => {},
        Err(err) => warn!("cannot load history from {}: {err}", path.display()),
    }
    Ok(editor)
}

fn remember(editor: &mut SleuthEditor, history: Option<&Path>, line: &str) {
    if let Err(err) = editor.add_history_entry(line) {
        warn!("cannot record history entry: {err}");
    }
    if let Some(path) = history
        && let Err(err) = editor.save_history(path)
    {
        warn!("cannot save history to {}: {err}", path.display());
    }
}

/// Ctrl-C and Ctrl-D are player input; anything else means the editor is broken.
fn editor_event(err: &ReadlineError) -> Option<InputEvent> {
    match err {
        ReadlineError::Interrupted => Some(InputEvent::Interrupted),
        ReadlineError::Eof => Some(InputEvent::Eof),
        _ => None,
    }
}

fn history_path() -> Option<PathBuf> {
    dirs::data_dir()
        .or_else(dirs::data_local_dir)
        .map(|base| base.join("sleuth").join("history.txt"))
}

/// Remove one trailing `\n` or `\r\n`.
pub fn strip_line_terminator(line: &str) -> &str {
    line.strip_suffix('\n')
        .map_or(line, |rest| rest.strip_suffix('\r').unwrap_or(rest))
}

/// Replays a fixed sequence of lines, then reports end of input.
#[derive(Debug, Clone, Default)]
pub struct ScriptedInput {
    lines: VecDeque<String>,
    /// Every prompt shown so far, in order.
    pub prompts: Vec<String>,
}

impl ScriptedInput {
    pub fn new<I, S>(lines: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        Self {
            lines: lines.into_iter().map(Into::into).collect(),
            prompts: Vec::new(),
        }
    }

    /// Lines not yet consumed.
    pub fn remaining(&self) -> usize {
        self.lines.len()
    }
}

impl PlayerInput for ScriptedInput {
    fn read_line(&mut self, prompt: &str) -> io::Result<InputEvent> {
        self.prompts.push(prompt.to_string());
        Ok(self.lines.pop_front().map_or(InputEvent::Eof, |line| {
            InputEvent::Line(strip_line_terminator(&line).to_string())
        }))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn editor_keys_become_events() {
        assert_eq!(editor_event(&ReadlineError::Interrupted), Some(InputEvent::Interrupted));
        assert_eq!(editor_event(&ReadlineError::Eof), Some(InputEvent::Eof));
        let broken = ReadlineError::Io(io::Error::other("tty gone"));
        assert_eq!(editor_event(&broken), None);
    }

    #[test]
    fn history_lives_under_sleuth_dir() {
        if let Some(path) = history_path() {
            assert!(path.ends_with(Path::new("sleuth/history.txt")));
        }
    }

    #[test]
    fn manager_without_editor_accepts_completions() {
        let mut input = InputManager::default();
        input.set_completions(&["Mr. Black".to_string()]);
        assert!(input.editor.is_none());
    }

    #[test]
    fn strips_one_terminator() {
        assert_eq!(strip_line_terminator("Mr. Black\n"), "Mr. Black");
        assert_eq!(strip_line_terminator("Mr. Black\r\n"), "Mr. Black");
        assert_eq!(strip_line_terminator("Mr. Black"), "Mr. Black");
        assert_eq!(strip_line_terminator("\n"), "");
        assert_eq!(strip_line_terminator("a\n\n"), "a\n");
    }

    #[test]
    fn scripted_input_replays_then_hits_eof() {
        let mut input = ScriptedInput::new(["l", "Mrs. White\n"]);
        assert_eq!(input.read_line("> ").unwrap(), InputEvent::Line("l".into()));
        assert_eq!(input.remaining(), 1);
        assert_eq!(input.read_line("? ").unwrap(), InputEvent::Line("Mrs. White".into()));
        assert_eq!(input.read_line("> ").unwrap(), InputEvent::Eof);
        assert_eq!(input.prompts, vec!["> ", "? ", "> "]);
    }

    #[test]
    fn completion_matches_prefix_ignoring_case() {
        let terms = vec!["Mr. Black".to_string(), "Mrs. White".to_string(), "Mr. Green".to_string()];
        assert_eq!(matching_terms(&terms, "mr. b"), vec!["Mr. Black"]);
        assert_eq!(matching_terms(&terms, "MRS"), vec!["Mrs. White"]);
        assert!(matching_terms(&terms, "Col").is_empty());
    }
}
