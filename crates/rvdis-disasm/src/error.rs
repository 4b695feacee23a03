//! Disassembly error types.

use thiserror::Error;

/// Error type for reading instructions out of a byte slice.
///
/// Decoding itself never fails: unrecognized encodings render as
/// `illegal`. These errors only describe input that cannot be split
/// into an instruction.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum DecodeError {
    /// Instruction was truncated (not enough bytes).
    #[error("truncated instruction at {address:#x}: need {needed} bytes, have {available}")]
    Truncated {
        address: u64,
        needed: usize,
        available: usize,
    },

    /// First code unit selects no supported instruction length.
    #[error("unsupported instruction length at {address:#x}: first unit {unit:#06x}")]
    UnsupportedLength { address: u64, unit: u16 },
}

impl DecodeError {
    /// Creates a new Truncated error.
    pub fn truncated(address: u64, needed: usize, available: usize) -> Self {
        Self::Truncated {
            address,
            needed,
            available,
        }
    }

    /// Creates a new UnsupportedLength error.
    pub fn unsupported_length(address: u64, unit: u16) -> Self {
        Self::UnsupportedLength { address, unit }
    }

    /// Address of the instruction that could not be read.
    pub fn address(&self) -> u64 {
        match *self {
            Self::Truncated { address, .. } | Self::UnsupportedLength { address, .. } => address,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_messages() {
        assert_eq!(
            DecodeError::truncated(0x1000, 4, 2).to_string(),
            "truncated instruction at 0x1000: need 4 bytes, have 2"
        );
        assert_eq!(
            DecodeError::unsupported_length(0x20, 0x7f).to_string(),
            "unsupported instruction length at 0x20: first unit 0x007f"
        );
        assert_eq!(DecodeError::unsupported_length(0x20, 0x7f).address(), 0x20);
    }
}
