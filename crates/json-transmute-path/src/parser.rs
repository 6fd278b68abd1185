//! Path query parser.

use crate::types::{PathQuery, Segment};
use thiserror::Error;

#[derive(Debug, Error, Clone, PartialEq)]
pub enum ParseError {
    #[error("Expected root identifier '$' at start")]
    ExpectedRoot,
    #[error("Unexpected character: {0}")]
    UnexpectedChar(char),
    #[error("Unexpected end of input")]
    UnexpectedEnd,
    #[error("Invalid index")]
    InvalidIndex,
    #[error("Unclosed string")]
    UnclosedString,
    #[error("Empty selector")]
    EmptySelector,
}

/// Path query parser.
pub struct PathParser<'a> {
    input: &'a str,
    pos: usize,
}

impl<'a> PathParser<'a> {
    /// Parse a path query string.
    pub fn parse(input: &'a str) -> Result<PathQuery, ParseError> {
        let mut parser = Self { input, pos: 0 };
        parser.parse_query()
    }

    fn parse_query(&mut self) -> Result<PathQuery, ParseError> {
        // Must start with $
        if self.peek() != Some('$') {
            return Err(ParseError::ExpectedRoot);
        }
        self.advance();

        let mut segments = Vec::new();

        while !self.is_at_end() {
            if self.peek() == Some('.') {
                self.advance();
                let name = self.parse_identifier()?;
                segments.push(Segment::Name(name));
            } else if self.peek() == Some('[') {
                segments.push(self.parse_bracket_segment()?);
            } else {
                return Err(ParseError::UnexpectedChar(self.peek().unwrap_or('\0')));
            }
        }

        Ok(PathQuery::new(segments))
    }

    fn parse_bracket_segment(&mut self) -> Result<Segment, ParseError> {
        self.expect('[')?;
        self.skip_whitespace();

        let segment = match self.peek() {
            Some('\'') | Some('"') => Segment::Name(self.parse_string()?),
            Some('-') | Some('0'..='9') => Segment::Index(self.parse_index()?),
            Some(']') => return Err(ParseError::EmptySelector),
            Some(c) => return Err(ParseError::UnexpectedChar(c)),
            None => return Err(ParseError::UnexpectedEnd),
        };

        self.skip_whitespace();
        self.expect(']')?;
        Ok(segment)
    }

    fn parse_identifier(&mut self) -> Result<String, ParseError> {
        let start = self.pos;
        while let Some(c) = self.peek() {
            if c.is_alphanumeric() || c == '_' || c == '-' {
                self.advance();
            } else {
                break;
            }
        }
        if self.pos == start {
            return match self.peek() {
                Some(c) => Err(ParseError::UnexpectedChar(c)),
                None => Err(ParseError::UnexpectedEnd),
            };
        }
        Ok(self.input[start..self.pos].to_string())
    }

    fn parse_index(&mut self) -> Result<isize, ParseError> {
        let start = self.pos;
        if self.peek() == Some('-') {
            self.advance();
        }
        while matches!(self.peek(), Some('0'..='9')) {
            self.advance();
        }
        self.input[start..self.pos]
            .parse()
            .map_err(|_| ParseError::InvalidIndex)
    }

    fn parse_string(&mut self) -> Result<String, ParseError> {
        let quote = match self.peek() {
            Some(c) => c,
            None => return Err(ParseError::UnexpectedEnd),
        };
        self.advance();

        let mut result = String::new();
        loop {
            match self.peek() {
                None => return Err(ParseError::UnclosedString),
                Some('\\') => {
                    self.advance();
                    match self.peek() {
                        Some(c) => {
                            result.push(c);
                            self.advance();
                        }
                        None => return Err(ParseError::UnclosedString),
                    }
                }
                Some(c) if c == quote => {
                    self.advance();
                    return Ok(result);
                }
                Some(c) => {
                    result.push(c);
                    self.advance();
                }
            }
        }
    }

    fn peek(&self) -> Option<char> {
        self.input[self.pos..].chars().next()
    }

    fn advance(&mut self) {
        if let Some(c) = self.peek() {
            self.pos += c.len_utf8();
        }
    }

    fn expect(&mut self, expected: char) -> Result<(), ParseError> {
        match self.peek() {
            Some(c) if c == expected => {
                self.advance();
                Ok(())
            }
            Some(c) => Err(ParseError::UnexpectedChar(c)),
            None => Err(ParseError::UnexpectedEnd),
        }
    }

    fn skip_whitespace(&mut self) {
        while matches!(self.peek(), Some(c) if c.is_whitespace()) {
            self.advance();
        }
    }

    fn is_at_end(&self) -> bool {
        self.pos >= self.input.len()
    }
}
