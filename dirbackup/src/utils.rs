// src/utils.rs
use anyhow::{Context as _, Result, anyhow};
use std::collections::VecDeque;
use std::io::{BufRead, Write};

/// Splits a line-oriented reader into whitespace-separated tokens, reading
/// further lines only when the buffered tokens run out.
#[derive(Debug)]
pub struct TokenReader<R> {
    reader: R,
    pending: VecDeque<String>,
}

impl<R: BufRead> TokenReader<R> {
    #[must_use]
    pub const fn new(reader: R) -> Self {
        Self {
            reader,
            pending: VecDeque::new(),
        }
    }

    /// Returns the next token, or `None` at end of input.
    ///
    /// # Errors
    ///
    /// Returns an error if the underlying reader fails or yields invalid UTF-8.
    pub fn next_token(&mut self) -> Result<Option<String>> {
        while self.pending.is_empty() {
            let mut line = String::new();
            if self.reader.read_line(&mut line)? == 0 {
                return Ok(None);
            }
            self.pending
                .extend(line.split_whitespace().map(str::to_owned));
        }
        Ok(self.pending.pop_front())
    }
}

/// Writes `message` to `out` and reads one token from `tokens`.
///
/// # Errors
///
/// Returns an error if the prompt cannot be written or input ends first.
pub fn prompt<R: BufRead, W: Write>(
    tokens: &mut TokenReader<R>,
    out: &mut W,
    message: &str,
) -> Result<String> {
    write!(out, "{message}")?;
    out.flush()?;
    tokens
        .next_token()?
        .ok_or_else(|| anyhow!("unexpected end of input after prompt '{}'", message.trim()))
}

/// Parses a file count typed by the operator.
///
/// # Errors
///
/// Returns an error if `token` is not a non-negative integer.
pub fn parse_file_count(token: &str) -> Result<u64> {
    token
        .parse::<u64>()
        .with_context(|| format!("invalid number of files: '{token}'"))
}
