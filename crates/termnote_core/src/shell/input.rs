//! Line input sources for the shell.
//!
//! The shell never touches stdin directly; it pulls answers from an
//! [`InputSource`] so scripted sessions run without a terminal.

use std::collections::VecDeque;
use std::io::{self, BufRead};

/// Blocking source of user answers, one line at a time.
pub trait InputSource {
    /// Returns the next line without its line terminator, or `None` at end
    /// of input.
    fn read_line(&mut self) -> io::Result<Option<String>>;
}

/// Reads answers from any buffered reader, typically locked stdin.
pub struct LineInput<R: BufRead> {
    reader: R,
}

impl<R: BufRead> LineInput<R> {
    pub fn new(reader: R) -> Self {
        Self { reader }
    }
}

impl<R: BufRead> InputSource for LineInput<R> {
    fn read_line(&mut self) -> io::Result<Option<String>> {
        let mut line = String::new();
        if self.reader.read_line(&mut line)? == 0 {
            return Ok(None);
        }
        let trimmed_len = line.trim_end_matches(['\n', '\r']).len();
        line.truncate(trimmed_len);
        Ok(Some(line))
    }
}

/// Pre-recorded answers, consumed front to back.
#[derive(Debug, Clone, Default)]
pub struct ScriptedInput {
    lines: VecDeque<String>,
}

impl ScriptedInput {
    pub fn new<I, T>(lines: I) -> Self
    where
        I: IntoIterator<Item = T>,
        T: Into<String>,
    {
        Self {
            lines: lines.into_iter().map(Into::into).collect(),
        }
    }

    /// Answers not yet consumed.
    pub fn remaining(&self) -> usize {
        self.lines.len()
    }
}

impl InputSource for ScriptedInput {
    fn read_line(&mut self) -> io::Result<Option<String>> {
        Ok(self.lines.pop_front())
    }
}
