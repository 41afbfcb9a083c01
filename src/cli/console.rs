//! Line-oriented console abstraction used by the menu.

use std::io::{self, BufRead, Write};

/// Color of a console message.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Tone {
    /// Default terminal color.
    Plain,
    /// Green: something was created.
    Success,
    /// Red: rejected input or a removal caused by a cascade.
    Error,
    /// Cyan: informational, input needs to be retried.
    Notice,
    /// Yellow: something was deleted.
    Warning,
}

impl Tone {
    fn ansi_code(self) -> Option<&'static str> {
        match self {
            Self::Plain => None,
            Self::Success => Some("32"),
            Self::Error => Some("31"),
            Self::Notice => Some("36"),
            Self::Warning => Some("33"),
        }
    }

    /// Wrap `text` in this tone's escape codes, resetting afterwards.
    pub fn paint(self, text: &str, color: bool) -> String {
        match self.ansi_code() {
            Some(code) if color => format!("\x1b[{code}m{text}\x1b[0m"),
            _ => text.to_string(),
        }
    }
}

/// Where the menu reads answers from and writes messages to.
pub trait Console {
    /// Show `prompt` and read one line without its line terminator.
    /// Returns `Ok(None)` once input is exhausted.
    fn read_line(&mut self, prompt: &str) -> io::Result<Option<String>>;

    /// Write one line of output in the given tone.
    fn write_line(&mut self, tone: Tone, text: &str) -> io::Result<()>;

    /// Replace the names offered for completion at name prompts.
    fn set_completions(&mut self, _names: Vec<String>) {}
}

/// Console over any buffered reader and writer.
///
/// Used for piped stdin and for driving the menu from tests.
pub struct StreamConsole<R, W> {
    input: R,
    output: W,
    color: bool,
}

impl<R: BufRead, W: Write> StreamConsole<R, W> {
    /// Create a console; `color` enables ANSI escape codes.
    pub fn new(input: R, output: W, color: bool) -> Self {
        Self {
            input,
            output,
            color,
        }
    }

    /// Consume the console and return the output sink.
    pub fn into_output(self) -> W {
        self.output
    }
}

impl<R: BufRead, W: Write> Console for StreamConsole<R, W> {
    fn read_line(&mut self, prompt: &str) -> io::Result<Option<String>> {
        write!(self.output, "{prompt}")?;
        self.output.flush()?;

        let mut buf = Vec::new();
        if self.input.read_until(b'\n', &mut buf)? == 0 {
            return Ok(None);
        }
        // Undecodable lines count as a blank answer so the prompt repeats.
        let mut line = match String::from_utf8(buf) {
            Ok(line) => line,
            Err(e) => {
                log::warn!("ignoring input line that is not valid UTF-8: {e}");
                String::new()
            }
        };
        let trimmed = line.trim_end_matches(['\n', '\r']).len();
        line.truncate(trimmed);
        Ok(Some(line))
    }

    fn write_line(&mut self, tone: Tone, text: &str) -> io::Result<()> {
        writeln!(self.output, "{}", tone.paint(text, self.color))
    }
}
