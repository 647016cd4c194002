//! Cursor-based readers for section bodies and single records.
//!
//! MSH 4.1 records are self-describing: counts are read in-line and tell
//! the reader how far to advance. `LineCursor` walks the lines of one
//! section, `Record` walks the tokens of one line. Both share the same
//! "read count, then count-many items" primitive.

use std::str::FromStr;

use super::error::GmshError;
use super::section::{Section, SectionSpan};

/// Position within the body of one section.
///
/// The cursor is a plain value: each section decoder receives one and
/// advances it as records are consumed.
#[derive(Clone, Copy, Debug)]
pub(crate) struct LineCursor<'a> {
    lines: &'a [&'a str],
    section: Section,
    pos: usize,
    end: usize,
}

impl<'a> LineCursor<'a> {
    /// Cursor positioned on the first line after the start marker.
    pub fn new(lines: &'a [&'a str], span: SectionSpan) -> Self {
        Self {
            lines,
            section: span.section,
            pos: span.start + 1,
            end: span.end,
        }
    }

    /// Current 0-based line offset in the file.
    pub fn position(&self) -> usize {
        self.pos
    }

    /// Lines left before the end marker.
    pub fn remaining(&self) -> usize {
        self.end - self.pos
    }

    /// Check whether the end marker has been reached.
    pub fn is_exhausted(&self) -> bool {
        self.pos >= self.end
    }

    /// Read the next line as a record.
    pub fn record(&mut self, what: &str) -> Result<Record<'a>, GmshError> {
        if self.is_exhausted() {
            return Err(GmshError::MalformedRecord {
                section: self.section,
                line: self.pos,
                message: format!("expected {what}, reached $End{}", self.section),
            });
        }
        let record = Record::new(self.lines[self.pos], self.section, self.pos);
        self.pos += 1;
        Ok(record)
    }

    /// Consume exactly `declared` lines and yield them as records.
    ///
    /// Fails with `SectionCountMismatch` if fewer lines remain.
    pub fn take(
        &mut self,
        declared: usize,
    ) -> Result<impl Iterator<Item = Record<'a>> + 'a, GmshError> {
        let available = self.remaining();
        if declared > available {
            return Err(self.mismatch(declared, available));
        }
        let start = self.pos;
        self.pos += declared;

        let section = self.section;
        let lines: &'a [&'a str] = self.lines;
        Ok(lines[start..start + declared]
            .iter()
            .enumerate()
            .map(move |(i, line)| Record::new(*line, section, start + i)))
    }

    /// Advance past `declared` lines without decoding them.
    pub fn skip(&mut self, declared: usize) -> Result<(), GmshError> {
        let available = self.remaining();
        if declared > available {
            return Err(self.mismatch(declared, available));
        }
        self.pos += declared;
        Ok(())
    }

    /// Build a count mismatch error at the current position.
    pub fn mismatch(&self, declared: usize, found: usize) -> GmshError {
        GmshError::SectionCountMismatch {
            section: self.section,
            line: self.pos,
            declared,
            found,
        }
    }

    /// Check that nothing but blank lines is left before the end marker.
    ///
    /// `declared` is the section's total record count; leftover lines are
    /// reported as extra records on top of it.
    pub fn finish(self, declared: usize) -> Result<(), GmshError> {
        let leftover = self.lines[self.pos..self.end]
            .iter()
            .filter(|l| !l.trim().is_empty())
            .count();
        if leftover > 0 {
            return Err(self.mismatch(declared, declared + leftover));
        }
        Ok(())
    }
}

/// Whitespace-separated tokens of one line.
#[derive(Clone, Debug)]
pub(crate) struct Record<'a> {
    rest: &'a str,
    section: Section,
    line: usize,
}

impl<'a> Record<'a> {
    fn new(text: &'a str, section: Section, line: usize) -> Self {
        Self {
            rest: text,
            section,
            line,
        }
    }

    /// 0-based line offset in the file.
    pub fn line(&self) -> usize {
        self.line
    }

    /// Build a `MalformedRecord` error for this line.
    pub fn malformed(&self, message: impl Into<String>) -> GmshError {
        GmshError::MalformedRecord {
            section: self.section,
            line: self.line,
            message: message.into(),
        }
    }

    /// Check whether all tokens have been consumed.
    pub fn is_empty(&self) -> bool {
        self.rest.trim().is_empty()
    }

    fn token(&mut self, what: &str) -> Result<&'a str, GmshError> {
        let trimmed = self.rest.trim_start();
        if trimmed.is_empty() {
            return Err(self.malformed(format!("missing {what}")));
        }
        let split = trimmed
            .find(char::is_whitespace)
            .unwrap_or(trimmed.len());
        let (token, rest) = trimmed.split_at(split);
        self.rest = rest;
        Ok(token)
    }

    /// Parse the next token.
    pub fn parse<T: FromStr>(&mut self, what: &str) -> Result<T, GmshError> {
        let token = self.token(what)?;
        token
            .parse()
            .map_err(|_| self.malformed(format!("invalid {what}: {token:?}")))
    }

    /// Parse the next `N` tokens as floats.
    pub fn floats<const N: usize>(&mut self, what: &str) -> Result<[f64; N], GmshError> {
        let mut values = [0.0; N];
        for value in values.iter_mut() {
            *value = self.parse(what)?;
        }
        Ok(values)
    }

    /// Read a count, then that many items.
    ///
    /// The count and its items are consumed together so the next field
    /// always starts right after the last item.
    pub fn counted<T, F>(&mut self, what: &str, mut item: F) -> Result<Vec<T>, GmshError>
    where
        F: FnMut(&mut Self) -> Result<T, GmshError>,
    {
        let count: usize = self.parse(&format!("{what} count"))?;
        // Every item is at least one token.
        let mut items = Vec::with_capacity(count.min(self.rest.split_whitespace().count()));
        for _ in 0..count {
            items.push(item(self)?);
        }
        Ok(items)
    }

    /// Take everything left on the line, trimmed.
    pub fn remainder(&mut self) -> &'a str {
        let rest = self.rest.trim();
        self.rest = "";
        rest
    }

    /// Check that no tokens are left over.
    pub fn finish(self) -> Result<(), GmshError> {
        if self.is_empty() {
            Ok(())
        } else {
            Err(self.malformed(format!("unexpected trailing tokens: {:?}", self.rest.trim())))
        }
    }
}
