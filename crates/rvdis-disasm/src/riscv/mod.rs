//! RISC-V instruction decoder.
//!
//! Decoding runs in fixed stages over one [`DecodedInstruction`]:
//! - [`dispatch`] asks each enabled decode tree, in priority order, for an opcode
//! - [`operands`] extracts register and immediate fields by the opcode's codec
//! - compressed opcodes are rewritten to their canonical form for the width
//! - the first matching pseudo-instruction form replaces the opcode
//! - [`render`] expands the opcode's format template into text
//!
//! Instructions whose low two bits are not `11` are 16-bit compressed
//! encodings; everything else is at least 32 bits wide.

#[macro_use]
mod macros;

pub mod catalog;
pub mod codec;
pub mod dispatch;
pub mod fields;
pub mod format;
pub mod opcodes;
pub mod operands;
pub mod render;
pub mod vendor;

mod base;
mod compressed;
mod decoder;
mod expand;
mod float;
mod pattern;
mod pseudo;
mod vector;

pub use catalog::Opcode;
pub use decoder::{instruction_length, Insn, RiscVDisassembler};
pub use operands::DecodedInstruction;
pub use render::{LineBuffer, RenderOptions};
