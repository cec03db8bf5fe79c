use std::io::BufRead;

use crate::entry::Entry;
use crate::error::EdictError;
use crate::line::parse_line;

/// Lazily parses lines, skipping blank ones. Line numbers in errors are 1-based.
pub struct Entries<I> {
    lines: I,
    number: usize,
}

impl<I, S> Iterator for Entries<I>
where
    I: Iterator<Item = S>,
    S: AsRef<str>,
{
    type Item = Result<Entry, EdictError>;

    fn next(&mut self) -> Option<Self::Item> {
        loop {
            let line = self.lines.next()?;
            self.number += 1;
            if let Some(parsed) = parse_numbered(self.number, line.as_ref()) {
                return Some(parsed);
            }
        }
    }
}

impl<I> Entries<I> {
    /// Numbers the first line `first_line` instead of 1.
    pub fn starting_at(mut self, first_line: usize) -> Self {
        self.number = first_line.saturating_sub(1);
        self
    }
}

pub fn entries<I>(lines: I) -> Entries<I::IntoIter>
where
    I: IntoIterator,
    I::Item: AsRef<str>,
{
    Entries {
        lines: lines.into_iter(),
        number: 0,
    }
}

/// Parses every non-blank line. The first malformed line aborts the whole parse.
pub fn parse_lines<I>(lines: I) -> Result<Vec<Entry>, EdictError>
where
    I: IntoIterator,
    I::Item: AsRef<str>,
{
    let parsed = entries(lines).collect::<Result<Vec<_>, _>>()?;
    tracing::debug!(entries = parsed.len(), "parsed dictionary lines");
    Ok(parsed)
}

/// Parses every non-blank line on its own, one result per line.
pub fn parse_lines_isolated<I>(lines: I) -> Vec<Result<Entry, EdictError>>
where
    I: IntoIterator,
    I::Item: AsRef<str>,
{
    entries(lines)
        .inspect(|parsed| {
            if let Err(err) = parsed {
                tracing::warn!("{}", err);
            }
        })
        .collect()
}

/// Reads lines from `reader` and parses them with the same policy as [`parse_lines`].
pub fn parse_reader<R: BufRead>(reader: R) -> Result<Vec<Entry>, EdictError> {
    let mut parsed = Vec::new();
    for (index, line) in reader.lines().enumerate() {
        let line = line?;
        if let Some(entry) = parse_numbered(index + 1, &line) {
            parsed.push(entry?);
        }
    }
    tracing::debug!(entries = parsed.len(), "parsed dictionary reader");
    Ok(parsed)
}

fn parse_numbered(number: usize, line: &str) -> Option<Result<Entry, EdictError>> {
    if line.trim().is_empty() {
        return None;
    }
    tracing::trace!(number, line, "parsing line");
    Some(parse_line(line).map_err(|error| EdictError::LineParseFailure { number, error }))
}
