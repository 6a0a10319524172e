//! Validated console input
//!
//! `Console` wraps a line reader and a writer and keeps prompting until the
//! user enters a value of the requested kind inside the requested bounds.
//! Malformed lines are reported and re-prompted; a closed or failing input
//! stream ends the prompt with `PlannerError::InputStreamUnavailable`.

use std::fmt;
use std::io::{self, BufRead, Write};

use tracing::{debug, warn};

use crate::error::{PlannerError, PlannerResult};
use crate::models::Money;

/// A type that can be read from one line of console input
pub trait PromptValue: Sized + PartialOrd + fmt::Display {
    /// Name used in "please enter a valid ..." messages
    const KIND: &'static str;

    fn parse_input(raw: &str) -> Option<Self>;
}

impl PromptValue for i64 {
    const KIND: &'static str = "whole number";

    fn parse_input(raw: &str) -> Option<Self> {
        raw.trim().parse().ok()
    }
}

impl PromptValue for Money {
    const KIND: &'static str = "decimal number";

    fn parse_input(raw: &str) -> Option<Self> {
        Money::parse(raw).ok()
    }
}

/// Why a line was rejected; `Display` is the message shown before re-prompting
#[derive(Debug, Clone, PartialEq)]
pub enum InputError<T> {
    Parse { kind: &'static str },
    BelowMin(T),
    AboveMax(T),
}

impl<T: fmt::Display> fmt::Display for InputError<T> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Parse { kind } => write!(f, "Invalid input. Please enter a valid {}.", kind),
            Self::BelowMin(min) => write!(f, "Input must be at least {}.", min),
            Self::AboveMax(max) => write!(f, "Input must not exceed {}.", max),
        }
    }
}

/// Parse `raw` as `T` and check it against the optional bounds
pub fn validate<T: PromptValue + Clone>(
    raw: &str,
    min: Option<&T>,
    max: Option<&T>,
) -> Result<T, InputError<T>> {
    let value = T::parse_input(raw).ok_or(InputError::Parse { kind: T::KIND })?;

    if let Some(min) = min.filter(|min| value < **min) {
        return Err(InputError::BelowMin(min.clone()));
    }
    if let Some(max) = max.filter(|max| value > **max) {
        return Err(InputError::AboveMax(max.clone()));
    }
    Ok(value)
}

/// One read from the input stream
enum Line {
    Text(String),
    /// Bytes were consumed but were not valid UTF-8
    Malformed,
}

/// Interactive console over any line source and sink
pub struct Console<R, W> {
    reader: R,
    writer: W,
}

impl<R: BufRead, W: Write> Console<R, W> {
    pub fn new(reader: R, writer: W) -> Self {
        Self { reader, writer }
    }

    /// Print one line of output
    pub fn say(&mut self, text: impl fmt::Display) -> PlannerResult<()> {
        writeln!(self.writer, "{}", text)?;
        Ok(())
    }

    /// Print an empty line
    pub fn blank(&mut self) -> PlannerResult<()> {
        writeln!(self.writer)?;
        Ok(())
    }

    /// Prompt until a `T` within `min..=max` is entered
    ///
    /// Either bound may be omitted.
    pub fn prompt<T: PromptValue + Clone>(
        &mut self,
        text: &str,
        min: Option<T>,
        max: Option<T>,
    ) -> PlannerResult<T> {
        loop {
            let line = match self.read_line(text)? {
                Line::Text(line) => line,
                Line::Malformed => String::new(),
            };

            match validate(&line, min.as_ref(), max.as_ref()) {
                Ok(value) => return Ok(value),
                Err(e) => {
                    debug!(input = %line.trim(), kind = T::KIND, "rejected input");
                    self.say(&e)?;
                }
            }
        }
    }

    /// Prompt for a line of free text, returned trimmed
    pub fn prompt_text(&mut self, text: &str) -> PlannerResult<String> {
        loop {
            match self.read_line(text)? {
                Line::Text(line) => return Ok(line.trim().to_string()),
                Line::Malformed => self.say("Invalid input. Please enter plain text.")?,
            }
        }
    }

    /// Show `text` and read one line without its line terminator
    fn read_line(&mut self, text: &str) -> PlannerResult<Line> {
        write!(self.writer, "{}", text)?;
        self.writer.flush()?;

        loop {
            let mut buf = String::new();
            match self.reader.read_line(&mut buf) {
                Ok(0) => {
                    // Finish the prompt line before whatever comes next
                    self.blank()?;
                    return Err(PlannerError::InputStreamUnavailable);
                }
                Ok(_) => return Ok(Line::Text(buf.trim_end_matches(['\r', '\n']).to_string())),
                Err(e) if e.kind() == io::ErrorKind::Interrupted => continue,
                Err(e) if e.kind() == io::ErrorKind::InvalidData => return Ok(Line::Malformed),
                Err(e) => {
                    warn!(error = %e, "failed to read from input");
                    return Err(PlannerError::InputStreamUnavailable);
                }
            }
        }
    }

    /// Consume the console, returning reader and writer
    pub fn into_parts(self) -> (R, W) {
        (self.reader, self.writer)
    }
}
