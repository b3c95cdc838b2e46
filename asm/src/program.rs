use arch::Inst;

use crate::diag::Pos;

/// An emitted instruction and the source line that produced it.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Line {
    pub pos: Pos,
    pub inst: Inst,
}

/// Instructions in emission order. Index = address.
#[derive(Debug, Default)]
pub struct Program(Vec<Line>);

impl Program {
    pub fn new() -> Self {
        Program(vec![])
    }

    /// Append and return the address of the new instruction.
    pub fn append(&mut self, pos: Pos, inst: Inst) -> u32 {
        let addr = self.pc();
        self.0.push(Line { pos, inst });
        addr
    }

    /// Current address: the number of instructions emitted so far.
    pub fn pc(&self) -> u32 {
        self.0.len() as u32
    }

    pub fn len(&self) -> usize {
        self.0.len()
    }

    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }

    pub fn lines(&self) -> &[Line] {
        &self.0
    }

    pub fn clear(&mut self) {
        self.0.clear();
    }
}
