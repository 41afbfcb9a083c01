//! Interactive line editor with station name completion.

use std::io::{self, Stdout, Write};

use rustyline::completion::{Completer, Pair};
use rustyline::config::CompletionType;
use rustyline::error::ReadlineError;
use rustyline::highlight::Highlighter;
use rustyline::hint::Hinter;
use rustyline::history::DefaultHistory;
use rustyline::validate::Validator;
use rustyline::{
    Cmd, ConditionalEventHandler, Config, Editor, Event, EventContext, EventHandler, Helper,
    KeyEvent, RepeatCount,
};

use super::console::{Console, Tone};
use crate::types::normalize_name;

/// rustyline helper completing known station names.
#[derive(Default)]
pub struct StationHelper {
    names: Vec<String>,
}

impl StationHelper {
    pub fn new() -> Self {
        Self::default()
    }

    fn matching<'a>(&'a self, input: &str) -> impl Iterator<Item = &'a String> + 'a {
        let prefix = normalize_name(input);
        self.names
            .iter()
            .filter(move |name| name.starts_with(&prefix))
    }
}

impl Completer for StationHelper {
    type Candidate = Pair;

    fn complete(
        &self,
        line: &str,
        pos: usize,
        _ctx: &rustyline::Context<'_>,
    ) -> rustyline::Result<(usize, Vec<Pair>)> {
        let matches = self
            .matching(&line[..pos])
            .map(|name| Pair {
                display: name.clone(),
                replacement: name.clone(),
            })
            .collect();
        Ok((0, matches))
    }
}

impl Hinter for StationHelper {
    type Hint = String;

    fn hint(&self, line: &str, pos: usize, _ctx: &rustyline::Context<'_>) -> Option<String> {
        if pos < line.len() || line.is_empty() || line.chars().any(char::is_whitespace) {
            return None;
        }
        let typed = line.to_lowercase();
        self.names
            .iter()
            .find(|name| name.starts_with(&typed) && name.len() > typed.len())
            .map(|name| name[typed.len()..].to_string())
    }
}

impl Highlighter for StationHelper {}
impl Validator for StationHelper {}
impl Helper for StationHelper {}

/// Tab accepts hint if present, else triggers completion.
pub struct TabCompleteOrAcceptHint;

impl ConditionalEventHandler for TabCompleteOrAcceptHint {
    fn handle(
        &self,
        _evt: &Event,
        _n: RepeatCount,
        _positive: bool,
        ctx: &EventContext<'_>,
    ) -> Option<Cmd> {
        if ctx.has_hint() {
            Some(Cmd::CompleteHint)
        } else {
            Some(Cmd::Complete)
        }
    }
}

/// Console backed by a rustyline editor on the terminal.
pub struct LineEditor {
    editor: Editor<StationHelper, DefaultHistory>,
    stdout: Stdout,
    color: bool,
}

impl LineEditor {
    /// Create an editor attached to the current terminal.
    pub fn new(color: bool) -> io::Result<Self> {
        let config = Config::builder()
            .history_ignore_space(true)
            .auto_add_history(true)
            .completion_type(CompletionType::List)
            .build();

        let mut editor: Editor<StationHelper, DefaultHistory> =
            Editor::with_config(config).map_err(into_io)?;
        editor.set_helper(Some(StationHelper::new()));
        editor.bind_sequence(
            KeyEvent::from('\t'),
            EventHandler::Conditional(Box::new(TabCompleteOrAcceptHint)),
        );

        Ok(Self {
            editor,
            stdout: io::stdout(),
            color,
        })
    }
}

impl Console for LineEditor {
    fn read_line(&mut self, prompt: &str) -> io::Result<Option<String>> {
        match self.editor.readline(prompt) {
            Ok(line) => Ok(Some(line)),
            Err(ReadlineError::Interrupted) => {
                eprintln!("  (Ctrl+C) Choose 0 from the menu to quit.");
                Ok(Some(String::new()))
            }
            Err(ReadlineError::Eof) => Ok(None),
            Err(err) => Err(into_io(err)),
        }
    }

    fn write_line(&mut self, tone: Tone, text: &str) -> io::Result<()> {
        writeln!(self.stdout, "{}", tone.paint(text, self.color))
    }

    fn set_completions(&mut self, names: Vec<String>) {
        if let Some(helper) = self.editor.helper_mut() {
            helper.names = names;
        }
    }
}

fn into_io(err: ReadlineError) -> io::Error {
    match err {
        ReadlineError::Io(e) => e,
        other => io::Error::other(other.to_string()),
    }
}
