//! Compressed-instruction expander.

use rvdis_core::Xlen;
use tracing::debug;

use super::catalog::{Opcode, OpcodeTable};
use super::codec::Codec;
use super::operands::DecodedInstruction;

/// Rewrites a compressed opcode into its canonical form for `xlen`.
///
/// Operands are not re-extracted: the compressed and canonical shapes
/// agree on register and immediate meaning. An `Illegal` target keeps
/// the compressed opcode. A zero immediate where the expansion requires
/// a nonzero one demotes the instruction to illegal.
pub fn expand(dec: &mut DecodedInstruction, xlen: Xlen) {
    let Opcode::Base(op) = dec.op else {
        return;
    };
    let Some(decomp) = op.descriptor().decomp else {
        return;
    };
    let target = decomp.target(xlen);
    if target.is_illegal() {
        return;
    }
    if decomp.imm_nonzero && dec.imm == 0 {
        debug!(opcode = %dec.op, pc = format_args!("{:#x}", dec.pc), "reserved zero immediate");
        dec.op = Opcode::ILLEGAL;
        dec.codec = Codec::Illegal;
        dec.clear_operands();
        return;
    }
    dec.op = Opcode::Base(target);
    dec.codec = target.descriptor().codec;
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::riscv::opcodes::BaseOp;
    use crate::riscv::operands::materialize;

    fn expanded(op: BaseOp, inst: u32, xlen: Xlen) -> DecodedInstruction {
        let mut dec = DecodedInstruction::new(0, u64::from(inst));
        dec.op = Opcode::Base(op);
        dec.codec = dec.op.codec();
        materialize(&mut dec, xlen);
        expand(&mut dec, xlen);
        dec
    }

    #[test]
    fn test_expands_to_canonical() {
        // c.addi sp, -16 -> addi sp, sp, -16
        let dec = expanded(BaseOp::CAddi, 0x1141, Xlen::Rv64);
        assert_eq!(dec.op, Opcode::Base(BaseOp::Addi));
        assert_eq!(dec.codec, Codec::I);
        assert_eq!((dec.rd, dec.rs1, dec.imm), (2, 2, -16));
    }

    #[test]
    fn test_zero_immediate_is_reserved() {
        let dec = expanded(BaseOp::CAddi4spn, 0x0000, Xlen::Rv64);
        assert_eq!(dec.op, Opcode::ILLEGAL);
        assert_eq!(dec.codec, Codec::Illegal);
        assert_eq!(dec.rd, 0);
    }

    #[test]
    fn test_illegal_target_keeps_compressed_form() {
        // c.fld has no canonical form under RV128
        let dec = expanded(BaseOp::CFld, 0x2108, Xlen::Rv128);
        assert_eq!(dec.op, Opcode::Base(BaseOp::CFld));
        let dec = expanded(BaseOp::CFld, 0x2108, Xlen::Rv64);
        assert_eq!(dec.op, Opcode::Base(BaseOp::Fld));
    }

    #[test]
    fn test_opcodes_without_expansion_are_untouched() {
        let dec = expanded(BaseOp::Add, 0x00a58533, Xlen::Rv64);
        assert_eq!(dec.op, Opcode::Base(BaseOp::Add));
        let dec = expanded(BaseOp::CZextB, 0x9c61, Xlen::Rv64);
        assert_eq!(dec.op, Opcode::Base(BaseOp::CZextB));
    }
}
