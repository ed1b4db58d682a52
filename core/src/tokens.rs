//! Streaming whitespace tokenizer.
//!
//! Input is pulled one line at a time, so only the current line is held in
//! memory no matter how many readings follow. Any Unicode whitespace
//! (spaces, tabs, CR, LF) separates tokens; bytes that are not valid UTF-8
//! are decoded lossily and surface later as unparseable tokens.

use std::fmt;
use std::io::{self, BufRead};

/// Where a token sits in the input. All fields are 1-based.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Position {
    /// Index of the token in the whole stream.
    pub ordinal: usize,
    pub line: usize,
    /// Column in characters, not bytes.
    pub column: usize,
}

impl fmt::Display for Position {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "token #{} (line {}, column {})",
            self.ordinal, self.line, self.column
        )
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Token {
    pub text: String,
    pub position: Position,
}

pub struct TokenReader<R> {
    reader: R,
    buf: Vec<u8>,
    line: String,
    cursor: usize,
    /// Characters of `line` before `cursor`.
    column: usize,
    line_number: usize,
    consumed: usize,
}

impl<R: BufRead> TokenReader<R> {
    pub fn new(reader: R) -> Self {
        Self {
            reader,
            buf: Vec::new(),
            line: String::new(),
            cursor: 0,
            column: 0,
            line_number: 0,
            consumed: 0,
        }
    }

    /// Number of tokens handed out so far.
    pub fn consumed(&self) -> usize {
        self.consumed
    }

    /// Returns the next token, or `None` once the input is exhausted.
    pub fn next_token(&mut self) -> io::Result<Option<Token>> {
        loop {
            let skipped = self.line[self.cursor..].find(|c: char| !c.is_whitespace());
            if let Some(offset) = skipped {
                let start = self.cursor + offset;
                let len = self.line[start..]
                    .find(char::is_whitespace)
                    .unwrap_or(self.line.len() - start);
                let end = start + len;
                let text = self.line[start..end].to_string();
                let column = self.column + self.line[self.cursor..start].chars().count();
                self.column = column + text.chars().count();
                self.cursor = end;
                self.consumed += 1;
                return Ok(Some(Token {
                    text,
                    position: Position {
                        ordinal: self.consumed,
                        line: self.line_number,
                        column: column + 1,
                    },
                }));
            }

            if !self.fill_line()? {
                return Ok(None);
            }
        }
    }

    /// Loads the next line into the buffer. Returns `false` at end of input.
    fn fill_line(&mut self) -> io::Result<bool> {
        self.buf.clear();
        if self.reader.read_until(b'\n', &mut self.buf)? == 0 {
            self.line.clear();
            self.cursor = 0;
            self.column = 0;
            return Ok(false);
        }
        self.line = String::from_utf8_lossy(&self.buf).into_owned();
        self.cursor = 0;
        self.column = 0;
        self.line_number += 1;
        Ok(true)
    }
}
