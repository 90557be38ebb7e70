//! Typed tokenization of textual read specifications.
//!
//! Classification is purely lexical: a run of ASCII digits is an integer,
//! anything else is an identifier. No quoting or escaping is supported. The
//! leading address token is captured raw, before classification, so address
//! forms like `2:5` or `192.168.1.10` pass through untouched.

use crate::error::{ReadError, ReadResult};

/// One whitespace-delimited token of a read specification.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Token<'a> {
    /// Unsigned integer literal: numeric type code, object instance or
    /// array index.
    Integer(u32),
    /// Bare identifier: object-type name or property identifier.
    Ident(&'a str),
}

impl<'a> Token<'a> {
    fn classify(raw: &'a str) -> ReadResult<Self> {
        if raw.bytes().all(|b| b.is_ascii_digit()) {
            raw.parse::<u32>()
                .map(Token::Integer)
                .map_err(|_| ReadError::MalformedSpec(format!("integer out of range: `{}`", raw)))
        } else {
            Ok(Token::Ident(raw))
        }
    }
}

/// Cursor over a tokenized specification: the raw leading address plus the
/// classified tail.
#[derive(Debug)]
pub struct SpecTokens<'a> {
    address: &'a str,
    tokens: Vec<Token<'a>>,
    cursor: usize,
}

impl<'a> SpecTokens<'a> {
    /// Split `spec` on whitespace and classify everything after the address.
    pub fn parse(spec: &'a str) -> ReadResult<Self> {
        let mut parts = spec.split_whitespace();
        let address = parts
            .next()
            .ok_or_else(|| ReadError::MalformedSpec("empty specification".to_string()))?;
        let tokens = parts.map(Token::classify).collect::<ReadResult<Vec<_>>>()?;
        Ok(Self {
            address,
            tokens,
            cursor: 0,
        })
    }

    /// The raw destination address token.
    pub fn address(&self) -> &'a str {
        self.address
    }

    /// Next token without consuming it.
    pub fn peek(&self) -> Option<Token<'a>> {
        self.tokens.get(self.cursor).copied()
    }

    /// Consume and return the next token.
    pub fn advance(&mut self) -> Option<Token<'a>> {
        let token = self.peek();
        if token.is_some() {
            self.cursor += 1;
        }
        token
    }

    /// Tokens left after the cursor.
    pub fn remaining(&self) -> usize {
        self.tokens.len() - self.cursor
    }

    pub fn is_empty(&self) -> bool {
        self.remaining() == 0
    }

    /// Consume the next token, requiring an integer.
    pub fn expect_integer(&mut self, what: &str) -> ReadResult<u32> {
        match self.advance() {
            Some(Token::Integer(value)) => Ok(value),
            Some(Token::Ident(raw)) => Err(ReadError::MalformedSpec(format!(
                "expected {}, found `{}`",
                what, raw
            ))),
            None => Err(ReadError::MalformedSpec(format!(
                "expected {}, found end of input",
                what
            ))),
        }
    }

    /// Consume the next token, requiring an identifier.
    pub fn expect_ident(&mut self, what: &str) -> ReadResult<&'a str> {
        match self.advance() {
            Some(Token::Ident(raw)) => Ok(raw),
            Some(Token::Integer(value)) => Err(ReadError::MalformedSpec(format!(
                "expected {}, found `{}`",
                what, value
            ))),
            None => Err(ReadError::MalformedSpec(format!(
                "expected {}, found end of input",
                what
            ))),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_classification() {
        let mut tokens = SpecTokens::parse("2:5 analogInput 1 presentValue 3").unwrap();
        assert_eq!(tokens.address(), "2:5");
        let mut collected = Vec::new();
        while let Some(token) = tokens.advance() {
            collected.push(token);
        }
        assert_eq!(
            collected,
            vec![
                Token::Ident("analogInput"),
                Token::Integer(1),
                Token::Ident("presentValue"),
                Token::Integer(3),
            ]
        );
    }

    #[test]
    fn test_mixed_digits_are_identifiers() {
        let mut tokens = SpecTokens::parse("addr 12a 007").unwrap();
        assert_eq!(tokens.advance(), Some(Token::Ident("12a")));
        // leading zeros still read as an integer
        assert_eq!(tokens.advance(), Some(Token::Integer(7)));
        assert!(tokens.is_empty());
    }

    #[test]
    fn test_empty_spec_is_malformed() {
        assert!(matches!(
            SpecTokens::parse("   "),
            Err(ReadError::MalformedSpec(_))
        ));
    }

    #[test]
    fn test_integer_overflow_is_malformed() {
        assert!(matches!(
            SpecTokens::parse("2:5 99999999999999999999"),
            Err(ReadError::MalformedSpec(_))
        ));
    }

    #[test]
    fn test_expect_helpers() {
        let mut tokens = SpecTokens::parse("2:5 analogInput 1").unwrap();
        assert_eq!(tokens.expect_ident("object type").unwrap(), "analogInput");
        assert_eq!(tokens.expect_integer("object instance").unwrap(), 1);
        let err = tokens.expect_integer("array index").unwrap_err();
        assert!(matches!(err, ReadError::MalformedSpec(_)));
    }
}
