//! # rvdis-disasm
//!
//! RISC-V instruction decoder and disassembler.
//!
//! Decodes 16, 32, 48 and 64-bit instruction words for RV32, RV64 and
//! RV128 and renders them as assembly text:
//! - Base integer ISA with M, A, F, D, Q and the privileged set
//! - C extension with Zcb, Zcmp and Zcmt
//! - Bit manipulation, scalar crypto, Zfh, Zfa and Zicond
//! - V extension (RVV 1.0) with Zvbb
//! - Vendor extensions: XThead* and XVentanaCondOps
//!
//! ```
//! use rvdis_disasm::RiscVDisassembler;
//!
//! let disasm = RiscVDisassembler::new();
//! assert_eq!(disasm.disassemble(0, 0x0000_0013), "nop");
//! ```

pub mod error;
pub mod riscv;
pub mod traits;

pub use error::DecodeError;
pub use riscv::{instruction_length, DecodedInstruction, Insn, RenderOptions, RiscVDisassembler};
pub use traits::{DecodedLine, Disassembler};
