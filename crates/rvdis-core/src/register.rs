//! Register name tables.

/// Register file an operand index refers to.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum RegisterClass {
    /// x0-x31
    Integer,
    /// f0-f31
    Float,
    /// v0-v31
    Vector,
}

impl RegisterClass {
    /// Returns the ABI name of register `index` in this file.
    pub fn name(self, index: u8) -> &'static str {
        match self {
            Self::Integer => ireg_name(index),
            Self::Float => freg_name(index),
            Self::Vector => vreg_name(index),
        }
    }
}

// Well-known integer register indices.
pub mod x {
    pub const ZERO: u8 = 0;
    pub const RA: u8 = 1;
    pub const SP: u8 = 2;
    pub const S0: u8 = 8;
    pub const A0: u8 = 10;
}

const IREG: [&str; 32] = [
    "zero", "ra", "sp", "gp", "tp", "t0", "t1", "t2", "s0", "s1", "a0", "a1", "a2", "a3", "a4",
    "a5", "a6", "a7", "s2", "s3", "s4", "s5", "s6", "s7", "s8", "s9", "s10", "s11", "t3", "t4",
    "t5", "t6",
];

const FREG: [&str; 32] = [
    "ft0", "ft1", "ft2", "ft3", "ft4", "ft5", "ft6", "ft7", "fs0", "fs1", "fa0", "fa1", "fa2",
    "fa3", "fa4", "fa5", "fa6", "fa7", "fs2", "fs3", "fs4", "fs5", "fs6", "fs7", "fs8", "fs9",
    "fs10", "fs11", "ft8", "ft9", "ft10", "ft11",
];

const VREG: [&str; 32] = [
    "v0", "v1", "v2", "v3", "v4", "v5", "v6", "v7", "v8", "v9", "v10", "v11", "v12", "v13", "v14",
    "v15", "v16", "v17", "v18", "v19", "v20", "v21", "v22", "v23", "v24", "v25", "v26", "v27",
    "v28", "v29", "v30", "v31",
];

/// Integer register ABI name. Only the low five bits are significant.
pub fn ireg_name(index: u8) -> &'static str {
    IREG[usize::from(index & 0x1f)]
}

/// Float register ABI name. Only the low five bits are significant.
pub fn freg_name(index: u8) -> &'static str {
    FREG[usize::from(index & 0x1f)]
}

/// Vector register name. Only the low five bits are significant.
pub fn vreg_name(index: u8) -> &'static str {
    VREG[usize::from(index & 0x1f)]
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_abi_names() {
        assert_eq!(ireg_name(x::ZERO), "zero");
        assert_eq!(ireg_name(x::RA), "ra");
        assert_eq!(ireg_name(x::S0), "s0");
        assert_eq!(ireg_name(31), "t6");
        assert_eq!(freg_name(10), "fa0");
        assert_eq!(freg_name(31), "ft11");
        assert_eq!(vreg_name(17), "v17");
    }

    #[test]
    fn test_index_is_masked() {
        assert_eq!(ireg_name(32 + x::A0), "a0");
        assert_eq!(RegisterClass::Vector.name(0xff), "v31");
    }
}
