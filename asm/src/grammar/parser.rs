use super::ast::{Expr, Stmt};
use super::lexer::parse_with_prefix;
use super::parsercore::Parser;
use super::token::{Token, TokenKind};
use crate::error::{Error, Located};
use crate::{check, expect, optional};

impl<I: Iterator<Item = Token>> Parser<I> {
    /// program := { [ stmt ] ( ";" | NEWLINE ) }
    ///
    /// Stops at the first syntax error.
    pub fn parse(mut self) -> Result<Vec<Stmt>, Located> {
        let mut stmts = vec![];
        while self.peek().is_some() {
            if optional!(self, TokenKind::Newline | TokenKind::Semicolon).is_some() {
                continue;
            }
            stmts.push(self.parse_stmt()?);
            if self.peek().is_some() {
                expect!(self, TokenKind::Newline | TokenKind::Semicolon)?;
            }
        }
        Ok(stmts)
    }

    /// stmt := IDENT "(" [ arg { "," arg } [ "," ] ] ")"
    fn parse_stmt(&mut self) -> Result<Stmt, Located> {
        let head = expect!(self, TokenKind::Ident(_))?;
        let name = match head.kind {
            TokenKind::Ident(name) => name,
            _ => unreachable!(),
        };
        expect!(self, TokenKind::LParen)?;
        let mut args = vec![];
        while !check!(self, TokenKind::RParen) {
            args.push(self.parse_expr()?);
            if optional!(self, TokenKind::Comma).is_none() {
                break;
            }
        }
        expect!(self, TokenKind::RParen)?;
        Ok(Stmt {
            pos: head.pos,
            name,
            args,
        })
    }

    /// arg := NUMBER | IDENT | STRING
    fn parse_expr(&mut self) -> Result<Expr, Located> {
        let token = expect!(
            self,
            TokenKind::Number(_) | TokenKind::Ident(_) | TokenKind::Text(_)
        )?;
        match token.kind {
            TokenKind::Number(lit) => match parse_with_prefix(&lit) {
                Some(value) => Ok(Expr::Number(value)),
                None => Err(Located::new(&token.pos, Error::ParseInt(lit))),
            },
            TokenKind::Ident(name) => Ok(Expr::Ident(name)),
            TokenKind::Text(text) => Ok(Expr::Text(text)),
            _ => unreachable!(),
        }
    }
}
