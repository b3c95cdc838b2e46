use bimap::BiMap;
use num_enum::{IntoPrimitive, TryFromPrimitive};
use once_cell::sync::Lazy;

/// Instruction kinds. The discriminant is the 4-bit opcode.
#[derive(Debug, PartialEq, Eq, Hash, Clone, Copy, TryFromPrimitive, IntoPrimitive)]
#[repr(u8)]
pub enum OpKind {
    Lri = 1,
    Move = 2,
    Load = 3,
    Add = 4,
    Jmp = 5,
}

static OP_STR: Lazy<BiMap<OpKind, &'static str>> = Lazy::new(|| {
    let mut map: BiMap<OpKind, &'static str> = BiMap::new();
    map.insert(OpKind::Lri, "lri");
    map.insert(OpKind::Move, "move");
    map.insert(OpKind::Load, "load");
    map.insert(OpKind::Add, "add");
    map.insert(OpKind::Jmp, "jmp");
    map
});

impl OpKind {
    pub const ALL: [OpKind; 5] = [
        OpKind::Lri,
        OpKind::Move,
        OpKind::Load,
        OpKind::Add,
        OpKind::Jmp,
    ];

    pub fn parse(s: &str) -> Result<OpKind, String> {
        match OP_STR.get_by_right(s) {
            Some(kind) => Ok(*kind),
            None => Err(format!("Unknown Operation Name: `{}`", s)),
        }
    }

    pub fn format(&self) -> &'static str {
        OP_STR.get_by_left(self).copied().unwrap_or("???")
    }

    pub fn opcode(&self) -> u16 {
        u8::from(*self) as u16
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Arg {
    Reg,
    Imm,
    Addr,
}

impl OpKind {
    /// Operand kinds in source order.
    pub fn args(&self) -> &'static [Arg] {
        match self {
            OpKind::Lri => &[Arg::Reg, Arg::Imm],
            OpKind::Move => &[Arg::Reg, Arg::Reg],
            OpKind::Load => &[Arg::Reg, Arg::Addr],
            OpKind::Add => &[Arg::Reg, Arg::Reg, Arg::Reg],
            OpKind::Jmp => &[Arg::Addr],
        }
    }
}
