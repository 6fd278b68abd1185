//! Template parser.

use crate::types::{Action, Arg, Node};
use crate::RenderError;
use serde_json::Value;

/// Template parser. Splits the input into literal text and `{{ ... }}`
/// actions.
pub struct TemplateParser<'a> {
    input: &'a str,
    pos: usize,
}

impl<'a> TemplateParser<'a> {
    /// Parse a template string.
    pub fn parse(input: &'a str) -> Result<Vec<Node>, RenderError> {
        let mut parser = Self { input, pos: 0 };
        parser.parse_nodes()
    }

    fn parse_nodes(&mut self) -> Result<Vec<Node>, RenderError> {
        let mut nodes = Vec::new();
        let mut text = String::new();

        while let Some(c) = self.peek() {
            if self.rest().starts_with("{{") {
                if !text.is_empty() {
                    nodes.push(Node::Text(std::mem::take(&mut text)));
                }
                self.pos += 2;
                nodes.push(Node::Action(self.parse_action()?));
            } else {
                text.push(c);
                self.advance();
            }
        }

        if !text.is_empty() {
            nodes.push(Node::Text(text));
        }
        Ok(nodes)
    }

    fn parse_action(&mut self) -> Result<Action, RenderError> {
        self.skip_whitespace();
        if self.at_close() {
            return Err(RenderError::EmptyAction);
        }

        let action = match self.peek() {
            Some('.') => Action::Field(self.parse_field_chain()?),
            Some(c) if c.is_alphabetic() || c == '_' => self.parse_helper()?,
            Some(c) => return Err(RenderError::InvalidArgument(c.to_string())),
            None => return Err(RenderError::UnclosedAction),
        };

        self.skip_whitespace();
        self.expect_close()?;
        Ok(action)
    }

    fn parse_helper(&mut self) -> Result<Action, RenderError> {
        let name = self.parse_ident();
        let mut args = Vec::new();
        loop {
            self.skip_whitespace();
            if self.at_close() || self.is_at_end() {
                break;
            }
            args.push(self.parse_arg()?);
        }
        Ok(Action::Helper { name, args })
    }

    fn parse_arg(&mut self) -> Result<Arg, RenderError> {
        match self.peek() {
            Some('\'') | Some('"') => Ok(Arg::Literal(Value::String(self.parse_string()?))),
            Some('.') => Ok(Arg::Field(self.parse_field_chain()?)),
            Some(c) if c == '-' || c.is_ascii_digit() => self.parse_number(),
            Some(c) => Err(RenderError::InvalidArgument(c.to_string())),
            None => Err(RenderError::UnclosedAction),
        }
    }

    fn parse_field_chain(&mut self) -> Result<Vec<String>, RenderError> {
        let mut chain = Vec::new();
        while self.peek() == Some('.') {
            self.advance();
            let name = self.parse_ident();
            if name.is_empty() {
                if chain.is_empty() && self.peek() != Some('.') {
                    // bare `.` selects the whole data value
                    return Ok(chain);
                }
                return Err(RenderError::InvalidArgument("malformed field chain".into()));
            }
            chain.push(name);
        }
        Ok(chain)
    }

    fn parse_number(&mut self) -> Result<Arg, RenderError> {
        let start = self.pos;
        while matches!(
            self.peek(),
            Some(c) if c == '-' || c == '+' || c == '.' || c == 'e' || c == 'E' || c.is_ascii_digit()
        ) {
            self.advance();
        }
        let text = &self.input[start..self.pos];
        if let Ok(n) = text.parse::<i64>() {
            return Ok(Arg::Literal(Value::from(n)));
        }
        let n = text
            .parse::<f64>()
            .map_err(|_| RenderError::InvalidArgument(text.to_string()))?;
        serde_json::Number::from_f64(n)
            .map(|n| Arg::Literal(Value::Number(n)))
            .ok_or_else(|| RenderError::InvalidArgument(text.to_string()))
    }

    fn parse_string(&mut self) -> Result<String, RenderError> {
        let quote = match self.peek() {
            Some(c) => c,
            None => return Err(RenderError::UnclosedAction),
        };
        self.advance();

        let mut result = String::new();
        loop {
            match self.peek() {
                None => return Err(RenderError::UnclosedAction),
                Some('\\') => {
                    self.advance();
                    match self.peek() {
                        Some(c) => {
                            result.push(c);
                            self.advance();
                        }
                        None => return Err(RenderError::UnclosedAction),
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

    fn parse_ident(&mut self) -> String {
        let start = self.pos;
        while let Some(c) = self.peek() {
            if c.is_alphanumeric() || c == '_' || c == '-' {
                self.advance();
            } else {
                break;
            }
        }
        self.input[start..self.pos].to_string()
    }

    fn at_close(&self) -> bool {
        self.rest().starts_with("}}")
    }

    fn expect_close(&mut self) -> Result<(), RenderError> {
        if self.at_close() {
            self.pos += 2;
            return Ok(());
        }
        match self.peek() {
            Some(c) => Err(RenderError::InvalidArgument(c.to_string())),
            None => Err(RenderError::UnclosedAction),
        }
    }

    fn rest(&self) -> &str {
        &self.input[self.pos..]
    }

    fn peek(&self) -> Option<char> {
        self.rest().chars().next()
    }

    fn advance(&mut self) {
        if let Some(c) = self.peek() {
            self.pos += c.len_utf8();
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
