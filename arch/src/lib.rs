pub mod inst;
pub mod op;
pub mod reg;

pub use inst::{Inst, Operand, Truncated};
pub use op::{Arg, OpKind};
pub use reg::Reg;
