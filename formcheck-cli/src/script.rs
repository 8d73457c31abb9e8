//! Event scripts: one JSON-encoded event per line.

use std::io::{BufRead, Lines};

use formcheck::event::FormEvent;

use crate::error::CliError;

/// Decode one script line. Blank lines and `#` comments yield `None`.
pub fn parse_line(line: &str) -> Option<Result<FormEvent, serde_json::Error>> {
    let line = line.trim();
    if line.is_empty() || line.starts_with('#') {
        return None;
    }
    Some(serde_json::from_str(line))
}

/// Iterator over the events of a script.
pub struct Events<R> {
    lines: Lines<R>,
    line: usize,
}

impl<R: BufRead> Events<R> {
    pub fn new(reader: R) -> Self {
        Self {
            lines: reader.lines(),
            line: 0,
        }
    }
}

impl<R: BufRead> Iterator for Events<R> {
    type Item = Result<FormEvent, CliError>;

    fn next(&mut self) -> Option<Self::Item> {
        loop {
            let text = match self.lines.next()? {
                Ok(text) => text,
                Err(e) => return Some(Err(e.into())),
            };
            self.line += 1;

            if let Some(parsed) = parse_line(&text) {
                let line = self.line;
                return Some(parsed.map_err(|source| CliError::Event { line, source }));
            }
        }
    }
}
