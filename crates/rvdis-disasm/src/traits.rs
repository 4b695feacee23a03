//! Disassembler traits.

use crate::riscv::DecodedInstruction;
use crate::DecodeError;

/// Result of decoding one instruction from a byte slice.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct DecodedLine {
    /// Address of the first byte.
    pub address: u64,
    /// Number of bytes consumed.
    pub size: usize,
    /// The decoded and lifted instruction record.
    pub instruction: DecodedInstruction,
    /// Rendered instruction text.
    pub text: String,
}

/// Trait for byte-stream instruction decoders.
pub trait Disassembler {
    /// Decode a single instruction starting at the given address.
    ///
    /// # Arguments
    /// * `bytes` - The raw bytes to decode
    /// * `address` - The virtual address of the first byte
    ///
    /// # Returns
    /// The decoded instruction and the number of bytes consumed.
    fn decode_instruction(&self, bytes: &[u8], address: u64) -> Result<DecodedLine, DecodeError>;

    /// Returns the minimum instruction size for this architecture.
    fn min_instruction_size(&self) -> usize;

    /// Returns the maximum instruction size for this architecture.
    fn max_instruction_size(&self) -> usize;

    /// Returns whether instructions are fixed-width.
    fn is_fixed_width(&self) -> bool;

    /// Disassemble a block of code into instructions.
    ///
    /// Stops after the first error: without a length there is no next
    /// instruction boundary to resume at.
    fn disassemble_block(&self, bytes: &[u8], start_address: u64) -> Vec<Result<DecodedLine, DecodeError>> {
        let mut lines = Vec::new();
        let mut offset = 0;

        while offset < bytes.len() {
            let address = start_address.wrapping_add(offset as u64);
            match self.decode_instruction(&bytes[offset..], address) {
                Ok(decoded) => {
                    offset += decoded.size;
                    lines.push(Ok(decoded));
                }
                Err(e) => {
                    lines.push(Err(e));
                    break;
                }
            }
        }

        lines
    }
}
