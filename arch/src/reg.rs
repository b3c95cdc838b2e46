use num_enum::{IntoPrimitive, TryFromPrimitive};
use strum::{Display, EnumIter, EnumString};

#[derive(
    Debug,
    Clone,
    Copy,
    PartialEq,
    Eq,
    Hash,
    Default,
    TryFromPrimitive,
    IntoPrimitive,
    EnumString,
    EnumIter,
    Display,
)]
#[repr(u8)]
#[strum(serialize_all = "lowercase")]
pub enum Reg {
    #[default]
    R0,
    R1,
    R2,
    R3,
    R4,
    R5,
    R6,
    R7,
    R8,
    R9,
    R10,
    R11,
    R12,
    R13,
    R14,
    R15,
}

impl Reg {
    pub fn parse(s: &str) -> Result<Self, String> {
        match s.parse::<Self>() {
            Ok(a) => Ok(a),
            Err(_) => Err(format!("Unknown reg name: {s}")),
        }
    }

    /// Register selected by the low nibble of `bits`.
    pub fn from_nibble(bits: u16) -> Self {
        Reg::try_from((bits & 0xF) as u8).unwrap_or_default()
    }

    pub fn index(self) -> u16 {
        u8::from(self) as u16
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use strum::IntoEnumIterator;

    #[test]
    fn parse_names() {
        assert_eq!(Reg::parse("r0"), Ok(Reg::R0));
        assert_eq!(Reg::parse("r15"), Ok(Reg::R15));
        assert!(Reg::parse("R1").is_err());
        assert!(Reg::parse("r16").is_err());
        assert!(Reg::parse("hoge").is_err());
    }

    #[test]
    fn sixteen_registers() {
        let regs: Vec<Reg> = Reg::iter().collect();
        assert_eq!(regs.len(), 16);
        for (idx, reg) in regs.iter().enumerate() {
            assert_eq!(reg.index(), idx as u16);
            assert_eq!(reg.to_string(), format!("r{idx}"));
            assert_eq!(Reg::from_nibble(idx as u16), *reg);
        }
    }
}
