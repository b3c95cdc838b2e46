use super::token::{Token, TokenKind};
use crate::diag::Pos;
use std::iter::Peekable;
use std::str::CharIndices;

pub struct Lexer<'a> {
    file: &'a str,
    code: &'a str,
}

impl<'a> Lexer<'a> {
    pub fn new(file: &'a str, code: &'a str) -> Self {
        Self { file, code }
    }

    /// Tokenize every line. Each line ends with a `Newline` token.
    pub fn parse(self) -> Vec<Token> {
        let mut tokens = Vec::new();
        for (idx, line) in self.code.lines().enumerate() {
            let lexer = LineLexer::new(line, self.file, idx);
            tokens.extend(lexer.parse());
        }
        tokens
    }
}

pub struct LineLexer<'a> {
    iter: Peekable<CharIndices<'a>>,
    line: &'a str,
    pos: Pos,
}

impl<'a> LineLexer<'a> {
    pub fn new(line: &'a str, file: &str, line_idx: usize) -> Self {
        Self {
            iter: line.char_indices().peekable(),
            line,
            pos: Pos::new(file, line_idx + 1),
        }
    }
}

// ----------------------------------------------------------------------------
// Helpers
// ----------------------------------------------------------------------------

impl<'a> LineLexer<'a> {
    fn peek(&mut self) -> Option<(usize, char)> {
        self.iter.peek().copied()
    }
    fn consume(&mut self) -> Option<(usize, char)> {
        self.iter.next()
    }
    fn token(&self, kind: TokenKind) -> Token {
        Token::new(kind, self.pos.clone())
    }
}

// ----------------------------------------------------------------------------
// Lexer
// ----------------------------------------------------------------------------

impl<'a> LineLexer<'a> {
    pub fn parse(mut self) -> Vec<Token> {
        let mut tokens = Vec::new();
        while let Some((idx, ch0)) = self.peek() {
            // 0. Skip whitespaces
            if ch0.is_whitespace() {
                self.consume();
                continue;
            }

            // 1. Comment
            if ch0 == '#' {
                let comment = self.line[idx + 1..].trim().to_string();
                tokens.push(self.token(TokenKind::Comment(comment)));
                break;
            }

            // 2. Single character token
            if let Some(kind) = single_char_token(ch0) {
                self.consume();
                tokens.push(self.token(kind));
                continue;
            }

            // 3. Number literal
            if ch0.is_ascii_digit() {
                let kind = TokenKind::Number(self.parse_word());
                tokens.push(self.token(kind));
                continue;
            }

            // 4. String literal
            if ch0 == '"' || ch0 == '\'' {
                let kind = self.parse_text(ch0);
                tokens.push(self.token(kind));
                continue;
            }

            // 5. Identifier
            if ch0.is_ascii_alphabetic() || ch0 == '_' {
                let kind = TokenKind::Ident(self.parse_word());
                tokens.push(self.token(kind));
                continue;
            }

            // Error
            self.consume();
            tokens.push(self.token(TokenKind::Error(format!("{ch0}"))));
        }
        tokens.push(self.token(TokenKind::Newline));
        tokens
    }

    fn parse_word(&mut self) -> String {
        let mut lexeme = String::new();
        while let Some((_, ch)) = self
            .iter
            .next_if(|(_, ch)| matches!(ch, '_' | '0'..='9' | 'a'..='z' | 'A'..='Z'))
        {
            lexeme.push(ch);
        }
        lexeme
    }

    // Text: "start" or 'start'
    fn parse_text(&mut self, quote: char) -> TokenKind {
        self.consume();
        let mut lexeme = String::new();
        while let Some((_, ch)) = self.consume() {
            if ch == quote {
                return TokenKind::Text(lexeme);
            }
            lexeme.push(ch);
        }
        TokenKind::Unterminated(format!("{quote}{lexeme}"))
    }
}

fn single_char_token(ch: char) -> Option<TokenKind> {
    match ch {
        '(' => Some(TokenKind::LParen),
        ')' => Some(TokenKind::RParen),
        ',' => Some(TokenKind::Comma),
        ';' => Some(TokenKind::Semicolon),
        _ => None,
    }
}

/// Parse an integer literal with an optional `0x`, `0b` or `0o` prefix.
pub fn parse_with_prefix(s: &str) -> Option<u128> {
    let s = s.replace('_', "");
    let (radix, num) = match s.get(0..2) {
        Some("0x") | Some("0X") => (16, &s[2..]),
        Some("0b") | Some("0B") => (2, &s[2..]),
        Some("0o") | Some("0O") => (8, &s[2..]),
        _ => (10, s.as_str()),
    };
    u128::from_str_radix(num, radix).ok()
}
