use arch::{OpKind, Reg};
use indexmap::IndexMap;
use strum::IntoEnumIterator;

use crate::error::Error;

/// Value bound to a name in the assembler environment.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Ident {
    Reg(Reg),
    Op(OpKind),
    /// The `label(name)` builtin
    LabelFn,
    /// Program address captured by `label(name)`
    Label(u32),
}

impl Ident {
    pub fn is_builtin(&self) -> bool {
        !matches!(self, Ident::Label(_))
    }
}

/// Name table: predeclared registers and mnemonics plus user labels.
#[derive(Debug)]
pub struct Idents(IndexMap<String, Ident>);

impl Idents {
    pub fn new() -> Self {
        let mut map = IndexMap::new();
        for reg in Reg::iter() {
            map.insert(reg.to_string(), Ident::Reg(reg));
        }
        for op in OpKind::ALL {
            map.insert(op.format().to_string(), Ident::Op(op));
        }
        map.insert("label".to_string(), Ident::LabelFn);
        Idents(map)
    }

    pub fn get(&self, name: &str) -> Option<Ident> {
        self.0.get(name).copied()
    }

    /// Bind `name` to `addr`. Returns the previous address when the label is re-declared.
    pub fn define_label(&mut self, name: &str, addr: u32) -> Result<Option<u32>, Error> {
        match self.0.get(name) {
            Some(ident) if ident.is_builtin() => Err(Error::Builtin(name.to_string())),
            _ => Ok(
                match self.0.insert(name.to_string(), Ident::Label(addr)) {
                    Some(Ident::Label(prev)) => Some(prev),
                    _ => None,
                },
            ),
        }
    }

    pub fn get_label(&self, name: &str) -> Option<u32> {
        match self.0.get(name) {
            Some(Ident::Label(addr)) => Some(*addr),
            _ => None,
        }
    }

    /// User labels in declaration order.
    pub fn labels(&self) -> impl Iterator<Item = (&str, u32)> {
        self.0.iter().filter_map(|(name, ident)| match ident {
            Ident::Label(addr) => Some((name.as_str(), *addr)),
            _ => None,
        })
    }
}

impl Default for Idents {
    fn default() -> Self {
        Idents::new()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn predeclared() {
        let idents = Idents::new();
        assert_eq!(idents.get("r0"), Some(Ident::Reg(Reg::R0)));
        assert_eq!(idents.get("r15"), Some(Ident::Reg(Reg::R15)));
        assert_eq!(idents.get("r16"), None);
        assert_eq!(idents.get("lri"), Some(Ident::Op(OpKind::Lri)));
        assert_eq!(idents.get("add"), Some(Ident::Op(OpKind::Add)));
        assert_eq!(idents.get("label"), Some(Ident::LabelFn));
        assert_eq!(idents.labels().count(), 0);
    }

    #[test]
    fn last_definition_wins() {
        let mut idents = Idents::new();
        assert_eq!(idents.define_label("loop", 3).unwrap(), None);
        assert_eq!(idents.define_label("loop", 7).unwrap(), Some(3));
        assert_eq!(idents.get_label("loop"), Some(7));
        assert_eq!(idents.labels().collect::<Vec<_>>(), vec![("loop", 7)]);
    }

    #[test]
    fn builtins_are_not_labels() {
        let mut idents = Idents::new();
        assert!(matches!(idents.define_label("r1", 0), Err(Error::Builtin(_))));
        assert!(matches!(idents.define_label("add", 0), Err(Error::Builtin(_))));
        assert!(matches!(idents.define_label("label", 0), Err(Error::Builtin(_))));
        assert_eq!(idents.get("r1"), Some(Ident::Reg(Reg::R1)));
    }
}
