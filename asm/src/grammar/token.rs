use crate::diag::Pos;

#[derive(Debug, Clone)]
pub struct Token {
    pub kind: TokenKind,
    pub pos: Pos,
}

impl Token {
    pub fn new(kind: TokenKind, pos: Pos) -> Self {
        Token { kind, pos }
    }
}

#[derive(Debug, Clone, PartialEq)]
pub enum TokenKind {
    LParen,    // '('
    RParen,    // ')'
    Comma,     // ','
    Semicolon, // ';'
    Newline,   // end of line

    Ident(String),
    Number(String),
    Text(String),

    // Special
    Comment(String),
    Unterminated(String),
    Error(String),
}

impl TokenKind {
    /// Source text of the token, for error messages.
    pub fn lexeme(&self) -> String {
        match self {
            TokenKind::LParen => "(".to_string(),
            TokenKind::RParen => ")".to_string(),
            TokenKind::Comma => ",".to_string(),
            TokenKind::Semicolon => ";".to_string(),
            TokenKind::Newline => "\\n".to_string(),
            TokenKind::Ident(s) | TokenKind::Number(s) | TokenKind::Error(s) => s.clone(),
            TokenKind::Text(s) => format!("\"{}\"", s),
            TokenKind::Unterminated(s) => s.clone(),
            TokenKind::Comment(s) => format!("#{}", s),
        }
    }
}
