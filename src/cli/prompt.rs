//! Line-oriented input acquisition
//!
//! A [`Prompt`] shows a message and hands back whatever line the user typed.
//! It never validates; parsing is up to the caller.

use std::io::{self, BufRead, Write};

use thiserror::Error;

#[derive(Debug, Error)]
pub enum PromptError {
    #[error("Input closed")]
    Closed,

    #[error("Failed to read input: {0}")]
    Io(#[from] io::Error),
}

/// Source of raw text answers
pub trait Prompt {
    /// Shows `message` and returns the next line without its terminator
    fn ask(&mut self, message: &str) -> Result<String, PromptError>;

    /// Prints a line of interface text (menus, headings)
    fn say(&mut self, line: &str) -> Result<(), PromptError>;
}

/// [`Prompt`] over any buffered reader and writer
pub struct LinePrompt<R, W> {
    reader: R,
    writer: W,
}

impl<R: BufRead, W: Write> LinePrompt<R, W> {
    pub fn new(reader: R, writer: W) -> Self {
        Self { reader, writer }
    }

    /// Returns the writer, consuming the prompt
    pub fn into_writer(self) -> W {
        self.writer
    }
}

impl LinePrompt<io::StdinLock<'static>, io::Stdout> {
    /// Prompt bound to the process terminal
    pub fn stdio() -> Self {
        Self::new(io::stdin().lock(), io::stdout())
    }
}

impl<R: BufRead, W: Write> Prompt for LinePrompt<R, W> {
    fn ask(&mut self, message: &str) -> Result<String, PromptError> {
        write!(self.writer, "{}", message)?;
        self.writer.flush()?;

        let mut line = String::new();
        if self.reader.read_line(&mut line)? == 0 {
            // Keep the transcript readable when input ends mid-prompt
            writeln!(self.writer)?;
            return Err(PromptError::Closed);
        }

        let trimmed_len = line.trim_end_matches(['\n', '\r']).len();
        line.truncate(trimmed_len);
        Ok(line)
    }

    fn say(&mut self, line: &str) -> Result<(), PromptError> {
        writeln!(self.writer, "{}", line)?;
        Ok(())
    }
}
