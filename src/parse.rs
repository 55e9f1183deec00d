//! Byte-level parser for `MAJOR.MINOR.PATCH[-PRERELEASE]`.

use crate::error::ParseError;

/// The pieces of a version recognized at the start of an input string.
#[derive(Debug, PartialEq, Eq)]
pub(crate) struct ParsedPrefix {
    pub(crate) major: u32,
    pub(crate) minor: u32,
    pub(crate) patch: u32,
    pub(crate) prerelease: Vec<String>,
    /// Number of bytes of the input that were consumed.
    pub(crate) consumed: usize,
}

struct Cursor<'a> {
    bytes: &'a [u8],
    pos: usize,
}

impl<'a> Cursor<'a> {
    fn new(input: &'a str) -> Self {
        Self {
            bytes: input.as_bytes(),
            pos: 0,
        }
    }

    fn peek(&self) -> Option<u8> {
        self.bytes.get(self.pos).copied()
    }

    fn take_while(&mut self, pred: impl Fn(u8) -> bool) -> &'a str {
        let start = self.pos;
        while self.peek().is_some_and(&pred) {
            self.pos += 1;
        }
        // only ascii bytes are ever matched, so the slice stays on char boundaries
        core::str::from_utf8(&self.bytes[start..self.pos]).unwrap_or_default()
    }

    fn number(&mut self, field: &'static str) -> Result<u32, ParseError> {
        let offset = self.pos;
        let digits = self.take_while(|b| b.is_ascii_digit());
        if digits.is_empty() {
            return Err(ParseError::MissingNumber { field, offset });
        }
        digits
            .parse()
            .map_err(|source| ParseError::InvalidNumber { field, source })
    }

    fn separator(&mut self, expected: u8) -> Result<(), ParseError> {
        match self.peek() {
            Some(found) if found == expected => {
                self.pos += 1;
                Ok(())
            }
            found => Err(ParseError::UnexpectedCharacter {
                expected: expected as char,
                found: self.describe(found),
                offset: self.pos,
            }),
        }
    }

    fn describe(&self, found: Option<u8>) -> String {
        match found {
            None => "end of input".to_owned(),
            Some(b) if b.is_ascii() => format!("`{}`", b as char),
            Some(_) => {
                // non-ascii: report the whole char rather than one of its bytes
                let rest = core::str::from_utf8(&self.bytes[self.pos..]).unwrap_or_default();
                rest.chars()
                    .next()
                    .map(|c| format!("`{c}`"))
                    .unwrap_or_else(|| "invalid utf-8".to_owned())
            }
        }
    }

    /// Reads dot-separated alphanumeric identifiers until a byte that is neither. The leading `-`
    /// has already been consumed.
    fn prerelease(&mut self) -> Result<Vec<String>, ParseError> {
        let mut identifiers = Vec::new();
        loop {
            let identifier = self.take_while(|b| b.is_ascii_alphanumeric());
            if identifier.is_empty() {
                return Err(ParseError::EmptyPrerelease { offset: self.pos });
            }
            identifiers.push(identifier.to_owned());

            if self.peek() == Some(b'.') {
                self.pos += 1;
            } else {
                return Ok(identifiers);
            }
        }
    }
}

/// Parses a version from the start of `input`, stopping at the first byte that can't continue it.
pub(crate) fn parse_prefix(input: &str) -> Result<ParsedPrefix, ParseError> {
    let mut cursor = Cursor::new(input);

    let major = cursor.number("major")?;
    cursor.separator(b'.')?;
    let minor = cursor.number("minor")?;
    cursor.separator(b'.')?;
    let patch = cursor.number("patch")?;

    let prerelease = if cursor.peek() == Some(b'-') {
        cursor.pos += 1;
        cursor.prerelease()?
    } else {
        Vec::new()
    };

    Ok(ParsedPrefix {
        major,
        minor,
        patch,
        prerelease,
        consumed: cursor.pos,
    })
}
