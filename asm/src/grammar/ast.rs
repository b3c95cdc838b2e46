use crate::diag::Pos;
use std::fmt;

/// One call statement: `name(arg, ...)`.
#[derive(Debug, Clone, PartialEq)]
pub struct Stmt {
    pub pos: Pos,
    pub name: String,
    pub args: Vec<Expr>,
}

#[derive(Debug, Clone, PartialEq)]
pub enum Expr {
    Number(u128),
    Ident(String),
    Text(String),
}

impl fmt::Display for Expr {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Expr::Number(value) => write!(f, "{}", value),
            Expr::Ident(name) => write!(f, "{}", name),
            Expr::Text(text) => write!(f, "\"{}\"", text),
        }
    }
}
