//! Pseudo-instruction lifter.

use super::catalog::{Constraint, Opcode, OpcodeTable, PseudoRule};
use super::operands::DecodedInstruction;

impl Constraint {
    /// Tests this constraint against materialized operands.
    pub fn holds(self, dec: &DecodedInstruction) -> bool {
        match self {
            Constraint::RdEqX0 => dec.rd == 0,
            Constraint::RdEqRa => dec.rd == 1,
            Constraint::Rs1EqX0 => dec.rs1 == 0,
            Constraint::Rs1EqRa => dec.rs1 == 1,
            Constraint::Rs2EqX0 => dec.rs2 == 0,
            Constraint::Rs2EqRs1 => dec.rs2 == dec.rs1,
            Constraint::RdEqRs1 => dec.rd == dec.rs1,
            Constraint::ImmEqZero => dec.imm == 0,
            Constraint::ImmEqP1 => dec.imm == 1,
            Constraint::ImmEqN1 => dec.imm == -1,
            Constraint::CsrEq(csr) => dec.csr == csr,
            Constraint::Unmasked => dec.vm,
        }
    }
}

fn first_match<Op: OpcodeTable>(op: Op, dec: &DecodedInstruction) -> Option<Op> {
    op.descriptor()
        .pseudo
        .iter()
        .find(|rule: &&PseudoRule<Op>| rule.constraints.iter().all(|c| c.holds(dec)))
        .map(|rule| rule.op)
}

/// Replaces the opcode with the first pseudo form whose constraints hold.
///
/// Operand values are never touched. Pseudo opcodes carry no rules, so
/// lifting an already lifted record is a no-op.
pub fn lift(dec: &mut DecodedInstruction) {
    let lifted = match dec.op {
        Opcode::Base(op) => first_match(op, dec).map(Opcode::Base),
        Opcode::Thead(op) => first_match(op, dec).map(Opcode::Thead),
        Opcode::Ventana(op) => first_match(op, dec).map(Opcode::Ventana),
    };
    if let Some(op) = lifted {
        dec.op = op;
        dec.codec = op.codec();
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::riscv::opcodes::BaseOp;
    use crate::riscv::operands::materialize;
    use rvdis_core::Xlen;

    fn lifted(op: BaseOp, inst: u32) -> DecodedInstruction {
        let mut dec = DecodedInstruction::new(0, u64::from(inst));
        dec.op = Opcode::Base(op);
        dec.codec = dec.op.codec();
        materialize(&mut dec, Xlen::Rv64);
        lift(&mut dec);
        dec
    }

    #[test]
    fn test_nop_and_li() {
        assert_eq!(lifted(BaseOp::Addi, 0x00000013).op, Opcode::Base(BaseOp::Nop));
        // addi a0, x0, 5
        assert_eq!(lifted(BaseOp::Addi, 0x00500513).op, Opcode::Base(BaseOp::Li));
        // addi a0, a1, 0
        assert_eq!(lifted(BaseOp::Addi, 0x00058513).op, Opcode::Base(BaseOp::Mv));
        // addi a0, a1, 1 has no pseudo form
        assert_eq!(lifted(BaseOp::Addi, 0x00158513).op, Opcode::Base(BaseOp::Addi));
    }

    #[test]
    fn test_first_rule_wins() {
        // jalr x0, 0(ra) satisfies both ret and jr
        let dec = lifted(BaseOp::Jalr, 0x00008067);
        assert_eq!(dec.op, Opcode::Base(BaseOp::Ret));
        // jalr x0, 0(a0) is only jr
        assert_eq!(lifted(BaseOp::Jalr, 0x00050067).op, Opcode::Base(BaseOp::Jr));
    }

    #[test]
    fn test_lift_keeps_operands_and_is_idempotent() {
        let dec = lifted(BaseOp::Csrrs, 0xc0002573);
        assert_eq!(dec.op, Opcode::Base(BaseOp::Rdcycle));
        assert_eq!((dec.rd, dec.csr), (10, 0xc00));
        let mut again = dec;
        lift(&mut again);
        assert_eq!(again, dec);
    }

    #[test]
    fn test_csr_access_aliases() {
        // csrrs a0, mstatus, zero
        let dec = lifted(BaseOp::Csrrs, 0x30002573);
        assert_eq!(dec.op, Opcode::Base(BaseOp::Csrr));
        assert_eq!((dec.rd, dec.csr), (10, 0x300));
        // csrrw zero, mstatus, a0
        assert_eq!(lifted(BaseOp::Csrrw, 0x30051073).op, Opcode::Base(BaseOp::Csrw));
        // csrrsi zero, mstatus, 8
        assert_eq!(lifted(BaseOp::Csrrsi, 0x30046073).op, Opcode::Base(BaseOp::Csrsi));
        // csrrw a0, mstatus, a1 writes and reads, so it keeps its name
        assert_eq!(lifted(BaseOp::Csrrw, 0x30059573).op, Opcode::Base(BaseOp::Csrrw));
    }

    #[test]
    fn test_constraints() {
        let mut dec = DecodedInstruction::new(0, 0);
        dec.rs1 = 5;
        dec.rs2 = 5;
        dec.imm = -1;
        dec.vm = true;
        assert!(Constraint::Rs2EqRs1.holds(&dec));
        assert!(Constraint::ImmEqN1.holds(&dec));
        assert!(Constraint::Unmasked.holds(&dec));
        assert!(!Constraint::Rs1EqX0.holds(&dec));
        assert!(!Constraint::CsrEq(0xc00).holds(&dec));
    }
}
