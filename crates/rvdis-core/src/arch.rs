//! Base ISA width.

use std::fmt;
use std::str::FromStr;

use crate::Error;

/// Base integer register width.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(feature = "serde", serde(rename_all = "lowercase"))]
pub enum Xlen {
    /// RV32
    Rv32,
    /// RV64
    #[default]
    Rv64,
    /// RV128
    Rv128,
}

impl Xlen {
    /// All widths, in the order decompression targets are stored.
    pub const ALL: [Xlen; 3] = [Xlen::Rv32, Xlen::Rv64, Xlen::Rv128];

    /// Returns the register width in bits.
    pub fn bits(self) -> u32 {
        match self {
            Self::Rv32 => 32,
            Self::Rv64 => 64,
            Self::Rv128 => 128,
        }
    }

    /// Returns the register width in bytes.
    pub fn bytes(self) -> u32 {
        self.bits() / 8
    }

    /// Index into per-width tables (0 = rv32, 1 = rv64, 2 = rv128).
    pub fn index(self) -> usize {
        match self {
            Self::Rv32 => 0,
            Self::Rv64 => 1,
            Self::Rv128 => 2,
        }
    }

    /// Returns the conventional name of this width.
    pub fn name(self) -> &'static str {
        match self {
            Self::Rv32 => "rv32",
            Self::Rv64 => "rv64",
            Self::Rv128 => "rv128",
        }
    }
}

impl fmt::Display for Xlen {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

impl FromStr for Xlen {
    type Err = Error;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_ascii_lowercase().as_str() {
            "rv32" | "32" => Ok(Self::Rv32),
            "rv64" | "64" => Ok(Self::Rv64),
            "rv128" | "128" => Ok(Self::Rv128),
            _ => Err(Error::invalid_xlen(s)),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_xlen() {
        assert_eq!("rv32".parse::<Xlen>().unwrap(), Xlen::Rv32);
        assert_eq!("RV128".parse::<Xlen>().unwrap(), Xlen::Rv128);
        assert_eq!("64".parse::<Xlen>().unwrap(), Xlen::Rv64);
        assert!("rv16".parse::<Xlen>().is_err());
    }

    #[test]
    fn test_xlen_sizes() {
        assert_eq!(Xlen::Rv32.bytes(), 4);
        assert_eq!(Xlen::Rv64.bytes(), 8);
        assert_eq!(Xlen::Rv128.bytes(), 16);
        assert_eq!(Xlen::default(), Xlen::Rv64);
    }

    #[test]
    fn test_xlen_index_order() {
        for (i, xlen) in Xlen::ALL.iter().enumerate() {
            assert_eq!(xlen.index(), i);
        }
    }
}
