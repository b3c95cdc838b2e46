use arch::{Arg, Inst, OpKind, Operand, Reg};

use crate::diag::{Diagnostics, Pos};
use crate::error::{Error, Located};
use crate::grammar::ast::{Expr, Stmt};
use crate::ident::{Ident, Idents};
use crate::program::Program;

/// One assembly: the program being built and the names visible to it.
///
/// Statements run strictly in source order. A label is bound to the
/// current address when its `label(...)` statement runs, so only labels
/// declared above a statement are visible to it.
#[derive(Debug, Default)]
pub struct Session {
    program: Program,
    idents: Idents,
}

impl Session {
    pub fn new() -> Self {
        Session::default()
    }

    pub fn program(&self) -> &Program {
        &self.program
    }

    pub fn idents(&self) -> &Idents {
        &self.idents
    }

    /// Start a new program. Builtins and existing labels stay bound.
    pub fn reset(&mut self) {
        self.program.clear();
    }

    pub fn run(&mut self, stmts: &[Stmt], diags: &mut Diagnostics) -> Result<(), Located> {
        for stmt in stmts {
            self.exec(stmt, diags)?;
        }
        Ok(())
    }

    pub fn exec(&mut self, stmt: &Stmt, diags: &mut Diagnostics) -> Result<(), Located> {
        let pos = &stmt.pos;
        match self.idents.get(&stmt.name) {
            Some(Ident::Op(kind)) => self.emit(pos, kind, &stmt.args, diags).map(|_| ()),
            Some(Ident::LabelFn) => match stmt.args.as_slice() {
                [Expr::Text(name)] => self.define_label(pos, name).map(|_| ()),
                [other] => Err(Located::new(pos, Error::ExpectedLabelName(other.to_string()))),
                args => Err(Located::new(
                    pos,
                    Error::ArgumentCount("label".to_string(), 1, args.len()),
                )),
            },
            Some(_) => Err(Located::new(pos, Error::NotCallable(stmt.name.clone()))),
            None => Err(Located::new(pos, Error::Undefined(stmt.name.clone()))),
        }
    }

    /// Bind `name` to the current address and return that address.
    pub fn define_label(&mut self, pos: &Pos, name: &str) -> Result<u32, Located> {
        let pc = self.program.pc();
        match self.idents.define_label(name, pc) {
            Ok(Some(prev)) => log::debug!("{pos}: label `{name}` rebound 0x{prev:04X} -> 0x{pc:04X}"),
            Ok(None) => log::debug!("{pos}: label `{name}` = 0x{pc:04X}"),
            Err(error) => return Err(Located::new(pos, error)),
        }
        Ok(pc)
    }

    /// Build one instruction from its operands and append it to the program.
    ///
    /// Fields that overflow are reported as warnings and masked.
    pub fn emit(
        &mut self,
        pos: &Pos,
        kind: OpKind,
        args: &[Expr],
        diags: &mut Diagnostics,
    ) -> Result<u32, Located> {
        let params = kind.args();
        if args.len() != params.len() {
            return Err(Located::new(
                pos,
                Error::ArgumentCount(kind.format().to_string(), params.len(), args.len()),
            ));
        }

        let ops = params
            .iter()
            .zip(args)
            .map(|(param, arg)| match param {
                Arg::Reg => self.reg(pos, arg).map(Operand::Reg),
                Arg::Imm | Arg::Addr => self.int(pos, arg).map(Operand::Int),
            })
            .collect::<Result<Vec<_>, _>>()?;

        let (inst, warn) = Inst::build(kind, &ops).ok_or_else(|| {
            Located::new(
                pos,
                Error::ArgumentCount(kind.format().to_string(), params.len(), ops.len()),
            )
        })?;
        if let Some(warn) = warn {
            diags.warn(pos, warn.to_string());
        }

        let addr = self.program.append(pos.clone(), inst);
        log::debug!("{pos}: [{addr:04X}] {:04X} {inst}", inst.encode());
        Ok(addr)
    }

    fn reg(&self, pos: &Pos, expr: &Expr) -> Result<Reg, Located> {
        let error = match expr {
            Expr::Ident(name) => match self.idents.get(name) {
                Some(Ident::Reg(reg)) => return Ok(reg),
                Some(_) => Error::ExpectedRegister(name.clone()),
                None => Error::Undefined(name.clone()),
            },
            other => Error::ExpectedRegister(other.to_string()),
        };
        Err(Located::new(pos, error))
    }

    fn int(&self, pos: &Pos, expr: &Expr) -> Result<u128, Located> {
        let error = match expr {
            Expr::Number(value) => return Ok(*value),
            Expr::Ident(name) => match self.idents.get(name) {
                Some(Ident::Label(addr)) => return Ok(addr as u128),
                Some(_) => Error::ExpectedInteger(name.clone()),
                None => Error::Undefined(name.clone()),
            },
            other => Error::ExpectedInteger(other.to_string()),
        };
        Err(Located::new(pos, error))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::grammar;

    fn run(code: &str) -> (Session, Diagnostics, Result<(), Located>) {
        let mut session = Session::new();
        let mut diags = Diagnostics::quiet();
        let stmts = grammar::parse("t.s", code).unwrap();
        let result = session.run(&stmts, &mut diags);
        (session, diags, result)
    }

    #[test]
    fn label_captures_pc() {
        let (session, _, result) = run("lri(r1, 1)\nlri(r2, 2)\nlabel(\"L\")\nadd(r1, r2, r3)");
        result.unwrap();
        assert_eq!(session.idents().get_label("L"), Some(2));
        assert_eq!(session.program().len(), 3);
    }

    #[test]
    fn label_as_operand() {
        let (session, _, result) = run("label('top')\nlri(r0, 0)\njmp(top)");
        result.unwrap();
        assert_eq!(session.program().lines()[1].inst, Inst::Jmp { dest: 0 });
    }

    #[test]
    fn forward_reference_is_undefined() {
        let (session, _, result) = run("jmp(end)\nlabel(\"end\")");
        let err = result.unwrap_err();
        assert!(matches!(err.error, Error::Undefined(ref name) if name == "end"));
        assert_eq!(err.pos.line, 1);
        assert!(session.program().is_empty());
    }

    #[test]
    fn warning_carries_position() {
        let (session, diags, result) = run("lri(r0, 1)\n\nlri(r4, 0x1FF)");
        result.unwrap();
        let warns: Vec<_> = diags.warnings().map(|d| d.to_string()).collect();
        assert_eq!(warns, vec!["t.s:3: warning: 0x1FF too big, will truncate"]);
        assert_eq!(session.program().lines()[1].inst.encode(), 0x1FF4);
    }

    #[test]
    fn wide_literal_warns_once() {
        let (session, diags, result) = run("lri(r1, 0x100000005)\njmp(0x12345)");
        result.unwrap();
        let warns: Vec<_> = diags.warnings().map(|d| d.to_string()).collect();
        assert_eq!(
            warns,
            vec![
                "t.s:1: warning: 0x100000005 too big, will truncate",
                "t.s:2: warning: 0x12345 too big, will truncate",
            ]
        );
        assert_eq!(session.program().lines()[0].inst.encode(), 0x1051);
        assert_eq!(session.program().lines()[1].inst.encode(), 0x5345);
    }

    #[test]
    fn operand_errors() {
        let cases = [
            ("add(r1, r2)", "add() takes 3 arguments (2 given)"),
            ("add(r1, r2, 3)", "expected register, found `3`"),
            ("lri(r1, r2)", "expected integer, found `r2`"),
            ("lri(1, 2)", "expected register, found `1`"),
            ("lri(r1, nowhere)", "name `nowhere` is not defined"),
            ("store(r1, 2)", "name `store` is not defined"),
            ("r1(2)", "`r1` is not callable"),
            ("label(start)", "label name must be a string, found `start`"),
            ("label(\"a\", \"b\")", "label() takes 1 arguments (2 given)"),
            ("label(\"r3\")", "cannot redefine builtin `r3`"),
        ];
        for (code, msg) in cases {
            let (_, _, result) = run(code);
            assert_eq!(result.unwrap_err().error.to_string(), msg, "{code}");
        }
    }

    #[test]
    fn reset_keeps_labels() {
        let (mut session, mut diags, result) = run("lri(r1, 1)\nlabel(\"L\")");
        result.unwrap();
        session.reset();
        assert!(session.program().is_empty());
        assert_eq!(session.idents().get_label("L"), Some(1));

        let stmts = grammar::parse("t.s", "jmp(L)\nlabel(\"L\")").unwrap();
        session.run(&stmts, &mut diags).unwrap();
        assert_eq!(session.program().lines()[0].inst, Inst::Jmp { dest: 1 });
        assert_eq!(session.idents().get_label("L"), Some(1));
    }
}
