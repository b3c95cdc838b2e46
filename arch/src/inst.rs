use crate::{op::OpKind, reg::Reg};

use color_print::cformat;
use std::fmt;

pub const OP_SHIFT: u32 = 12;
pub const SLOT1_SHIFT: u32 = OP_SHIFT - 4;
pub const SLOT2_SHIFT: u32 = SLOT1_SHIFT - 4;

pub const IMM_BITS: u32 = 8;
/// Address fields. Both are narrower than the 16-bit address space, so
/// one check against the field also covers the address range.
pub const LOAD_ADDR_BITS: u32 = 8;
pub const JMP_ADDR_BITS: u32 = 12;

/// A value that did not fit its field and was masked.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Truncated {
    pub value: u128,
    pub bits: u32,
}

impl fmt::Display for Truncated {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "0x{:X} too big, will truncate", self.value)
    }
}

/// Mask `value` to `bits`, returning the [`Truncated`] record when bits are lost.
fn fit(value: u128, bits: u32) -> (u16, Option<Truncated>) {
    let mask = (1u128 << bits) - 1;
    let warn = (value > mask).then_some(Truncated { value, bits });
    ((value & mask) as u16, warn)
}

/// Operand value handed to [`Inst::build`].
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Operand {
    Reg(Reg),
    Int(u128),
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Inst {
    Lri { dest: Reg, imm: u8 },
    Move { src: Reg, dest: Reg },
    Load { reg: Reg, addr: u8 },
    Add { src1: Reg, src2: Reg, dest: Reg },
    Jmp { dest: u16 },
}

// ----------------------------------------------------------------------------
// Construction

impl Inst {
    pub fn lri(dest: Reg, imm: u128) -> (Inst, Option<Truncated>) {
        let (imm, warn) = fit(imm, IMM_BITS);
        (Inst::Lri { dest, imm: imm as u8 }, warn)
    }

    pub fn mov(src: Reg, dest: Reg) -> Inst {
        Inst::Move { src, dest }
    }

    pub fn load(reg: Reg, addr: u128) -> (Inst, Option<Truncated>) {
        let (addr, warn) = fit(addr, LOAD_ADDR_BITS);
        (Inst::Load { reg, addr: addr as u8 }, warn)
    }

    pub fn add(src1: Reg, src2: Reg, dest: Reg) -> Inst {
        Inst::Add { src1, src2, dest }
    }

    pub fn jmp(dest: u128) -> (Inst, Option<Truncated>) {
        let (dest, warn) = fit(dest, JMP_ADDR_BITS);
        (Inst::Jmp { dest }, warn)
    }

    /// Build `kind` from operands laid out as [`OpKind::args`] describes.
    /// Returns `None` when the operands do not match that layout.
    pub fn build(kind: OpKind, ops: &[Operand]) -> Option<(Inst, Option<Truncated>)> {
        use Operand as O;
        match (kind, ops) {
            (OpKind::Lri, &[O::Reg(dest), O::Int(imm)]) => Some(Inst::lri(dest, imm)),
            (OpKind::Move, &[O::Reg(src), O::Reg(dest)]) => Some((Inst::mov(src, dest), None)),
            (OpKind::Load, &[O::Reg(reg), O::Int(addr)]) => Some(Inst::load(reg, addr)),
            (OpKind::Add, &[O::Reg(src1), O::Reg(src2), O::Reg(dest)]) => {
                Some((Inst::add(src1, src2, dest), None))
            }
            (OpKind::Jmp, &[O::Int(dest)]) => Some(Inst::jmp(dest)),
            _ => None,
        }
    }

    pub fn kind(&self) -> OpKind {
        match self {
            Inst::Lri { .. } => OpKind::Lri,
            Inst::Move { .. } => OpKind::Move,
            Inst::Load { .. } => OpKind::Load,
            Inst::Add { .. } => OpKind::Add,
            Inst::Jmp { .. } => OpKind::Jmp,
        }
    }
}

// ----------------------------------------------------------------------------
// Binary

impl Inst {
    pub fn encode(&self) -> u16 {
        let op = self.kind().opcode() << OP_SHIFT;
        match *self {
            Inst::Lri { dest, imm } => op | ((imm as u16) << SLOT2_SHIFT) | dest.index(),
            Inst::Move { src, dest } => {
                op | (src.index() << SLOT1_SHIFT) | (dest.index() << SLOT2_SHIFT)
            }
            Inst::Load { reg, addr } => op | (reg.index() << SLOT1_SHIFT) | addr as u16,
            Inst::Add { src1, src2, dest } => {
                op | (src1.index() << SLOT1_SHIFT) | (src2.index() << SLOT2_SHIFT) | dest.index()
            }
            Inst::Jmp { dest } => op | dest,
        }
    }

    /// Inverse of [`Inst::encode`]. Words with an unassigned opcode yield `None`.
    pub fn decode(word: u16) -> Option<Inst> {
        let kind = OpKind::try_from((word >> OP_SHIFT) as u8).ok()?;
        let slot1 = Reg::from_nibble(word >> SLOT1_SHIFT);
        let slot2 = Reg::from_nibble(word >> SLOT2_SHIFT);
        let low = Reg::from_nibble(word);
        Some(match kind {
            OpKind::Lri => Inst::Lri {
                dest: low,
                imm: (word >> SLOT2_SHIFT) as u8,
            },
            OpKind::Move => Inst::Move {
                src: slot1,
                dest: slot2,
            },
            OpKind::Load => Inst::Load {
                reg: slot1,
                addr: word as u8,
            },
            OpKind::Add => Inst::Add {
                src1: slot1,
                src2: slot2,
                dest: low,
            },
            OpKind::Jmp => Inst::Jmp {
                dest: word & ((1 << JMP_ADDR_BITS) - 1),
            },
        })
    }
}

// ----------------------------------------------------------------------------
// Format

impl Inst {
    pub fn cformat(&self) -> String {
        macro_rules! opfmt {
            ($name:expr, $a:expr, $b:expr, $c:expr) => {
                cformat!("<red>{:<6}</><blue>{:<4} {:<4} {:<6}</>", $name, $a, $b, $c)
            };
        }
        let name = self.kind().format();
        match self {
            Inst::Lri { dest, imm } => opfmt!(name, dest, cformat!("<y>0x{:02X}</>", imm), ""),
            Inst::Move { src, dest } => opfmt!(name, src, dest, ""),
            Inst::Load { reg, addr } => opfmt!(name, reg, cformat!("<y>0x{:02X}</>", addr), ""),
            Inst::Add { src1, src2, dest } => opfmt!(name, src1, src2, dest),
            Inst::Jmp { dest } => opfmt!(name, cformat!("<y>0x{:03X}</>", dest), "", ""),
        }
    }
}

impl fmt::Display for Inst {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let name = self.kind().format();
        match self {
            Inst::Lri { dest, imm } => write!(f, "{name}({dest}, 0x{imm:02X})"),
            Inst::Move { src, dest } => write!(f, "{name}({src}, {dest})"),
            Inst::Load { reg, addr } => write!(f, "{name}({reg}, 0x{addr:02X})"),
            Inst::Add { src1, src2, dest } => write!(f, "{name}({src1}, {src2}, {dest})"),
            Inst::Jmp { dest } => write!(f, "{name}(0x{dest:03X})"),
        }
    }
}
