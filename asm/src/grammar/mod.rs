pub mod ast;
pub mod lexer;
pub mod parser;
pub mod parsercore;
pub mod token;

use crate::error::Located;
use ast::Stmt;

/// Lex and parse a whole source file.
pub fn parse(file: &str, code: &str) -> Result<Vec<Stmt>, Located> {
    let tokens = lexer::Lexer::new(file, code).parse();
    parsercore::Parser::new(tokens.into_iter()).parse()
}
