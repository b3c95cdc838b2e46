use super::token::{Token, TokenKind};
use crate::diag::Pos;
use crate::error::{Error, Located};
use std::iter::Peekable;

pub struct Parser<I: Iterator<Item = Token>> {
    tokens: Peekable<I>,
    last: Pos,
}

impl<I: Iterator<Item = Token>> Parser<I> {
    pub fn new(tokens: I) -> Self {
        Parser {
            tokens: tokens.peekable(),
            last: Pos::new("", 0),
        }
    }
}

impl<I: Iterator<Item = Token>> Parser<I> {
    /// Skip comments
    fn skip(&mut self) {
        while self
            .tokens
            .next_if(|token| matches!(token.kind, TokenKind::Comment(_)))
            .is_some()
        {}
    }

    /// Peek : Watch next token without consuming it
    pub fn peek(&mut self) -> Option<&Token> {
        self.skip();
        self.tokens.peek()
    }

    /// Next : Consume next token and return it
    pub fn next(&mut self) -> Option<Token> {
        self.skip();
        let token = self.tokens.next();
        if let Some(token) = &token {
            self.last = token.pos.clone();
        }
        token
    }

    /// Peek and check next token is match with condition
    pub fn check_if<F: Fn(&Token) -> bool>(&mut self, cond: F) -> bool {
        self.peek().map(|token| cond(token)).unwrap_or(false)
    }

    /// Consume if next token is match with condition
    pub fn consume_if<F: Fn(&Token) -> bool>(&mut self, cond: F) -> Option<Token> {
        if self.check_if(cond) {
            self.next()
        } else {
            None
        }
    }

    /// Next token must be match with condition (skipping comments)
    pub fn expect_tobe<F: Fn(&Token) -> bool>(&mut self, cond: F) -> Result<Token, Located> {
        match self.next() {
            Some(token) if cond(&token) => Ok(token),
            Some(token) => Err(self.unexpected(&token)),
            None => Err(Located::new(&self.last, Error::UnexpectedEol)),
        }
    }

    /// Error for a token that does not fit the grammar here
    pub fn unexpected(&self, token: &Token) -> Located {
        let error = match &token.kind {
            TokenKind::Newline => Error::UnexpectedEol,
            TokenKind::Unterminated(_) => Error::UnterminatedString,
            TokenKind::Error(s) => match s.chars().next() {
                Some(ch) => Error::InvalidChar(ch),
                None => Error::UnexpectedToken(s.clone()),
            },
            kind => Error::UnexpectedToken(kind.lexeme()),
        };
        Located::new(&token.pos, error)
    }
}

#[macro_export]
macro_rules! check {
    ($parser:expr, $kind:pat) => {
        $parser.check_if(|token| matches!(&token.kind, $kind))
    };
}

#[macro_export]
macro_rules! expect {
    ($parser:expr, $kind:pat) => {
        $parser.expect_tobe(|token| matches!(&token.kind, $kind))
    };
}

#[macro_export]
macro_rules! optional {
    ($parser:expr, $kind:pat) => {
        $parser.consume_if(|token| matches!(&token.kind, $kind))
    };
}
