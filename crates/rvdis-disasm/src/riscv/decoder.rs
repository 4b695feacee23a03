//! RISC-V disassembler front end.
//!
//! Runs the decode pipeline for one instruction:
//! dispatch -> operands -> decompress -> pseudo lift -> render.

use rvdis_core::{IsaConfig, Xlen};

use crate::{DecodeError, DecodedLine, Disassembler};

use super::dispatch;
use super::expand;
use super::fields::RawInst;
use super::operands::{self, DecodedInstruction};
use super::pseudo;
use super::render::{self, RenderOptions};

/// Mnemonic column of listing lines.
const LISTING_COLUMN: usize = 18;

/// Length in bytes of the instruction whose first 16-bit unit is `first_unit`.
///
/// Returns 0 for the reserved prefixes longer than 64 bits.
pub fn instruction_length(first_unit: u16) -> usize {
    if first_unit & 0b11 != 0b11 {
        2
    } else if first_unit & 0b11100 != 0b11100 {
        4
    } else if first_unit & 0b111111 == 0b011111 {
        6
    } else if first_unit & 0b1111111 == 0b0111111 {
        8
    } else {
        0
    }
}

/// A rendered listing line and the number of bytes it consumed.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Insn {
    pub text: String,
    /// 0 when the prefix is unsupported or the input is too short.
    pub len: usize,
}

/// Reads one instruction's code units, low unit first.
fn read_inst(bytes: &[u8]) -> Option<(RawInst, usize)> {
    let first = u16::from_le_bytes([*bytes.first()?, *bytes.get(1)?]);
    let len = instruction_length(first);
    if len == 0 || bytes.len() < len {
        return None;
    }
    let inst = bytes[..len]
        .chunks_exact(2)
        .enumerate()
        .fold(0u64, |acc, (i, unit)| {
            acc | u64::from(u16::from_le_bytes([unit[0], unit[1]])) << (16 * i)
        });
    Some((inst, len))
}

/// RISC-V disassembler.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct RiscVDisassembler {
    xlen: Xlen,
    config: IsaConfig,
    options: RenderOptions,
}

impl RiscVDisassembler {
    /// Creates a new RISC-V disassembler for RV64 with base extensions only.
    pub fn new() -> Self {
        Self::with_config(Xlen::Rv64, IsaConfig::default())
    }

    /// Creates a new RISC-V disassembler for RV32.
    pub fn new_rv32() -> Self {
        Self::with_config(Xlen::Rv32, IsaConfig::default())
    }

    pub fn with_config(xlen: Xlen, config: IsaConfig) -> Self {
        Self {
            xlen,
            config,
            options: RenderOptions::default(),
        }
    }

    pub fn with_options(mut self, options: RenderOptions) -> Self {
        self.options = options;
        self
    }

    pub fn xlen(&self) -> Xlen {
        self.xlen
    }

    pub fn config(&self) -> &IsaConfig {
        &self.config
    }

    pub fn options(&self) -> &RenderOptions {
        &self.options
    }

    /// Decodes `inst` at `pc` into a fully lifted record.
    pub fn decode(&self, pc: u64, inst: RawInst) -> DecodedInstruction {
        let mut dec = DecodedInstruction::new(pc, inst);
        dec.op = dispatch::dispatch(inst, self.xlen, &self.config);
        dec.codec = dec.op.codec();
        operands::materialize(&mut dec, self.xlen);
        expand::expand(&mut dec, self.xlen);
        pseudo::lift(&mut dec);
        dec
    }

    /// Decodes and renders `inst` without the listing prefix.
    pub fn disassemble(&self, pc: u64, inst: RawInst) -> String {
        render::render(&self.decode(pc, inst), &self.config, &self.options)
    }

    /// Renders one listing line: raw bits in hex, then the instruction.
    pub fn print_insn(&self, bytes: &[u8], pc: u64) -> Insn {
        let Some((inst, len)) = read_inst(bytes) else {
            return Insn {
                text: String::new(),
                len: 0,
            };
        };
        let digits = len * 2;
        let mut text = format!("{inst:0digits$x}");
        let pad = LISTING_COLUMN.saturating_sub(digits).max(2);
        text.extend(std::iter::repeat(' ').take(pad));
        text.push_str(&self.disassemble(pc, inst));
        Insn { text, len }
    }
}

impl Default for RiscVDisassembler {
    fn default() -> Self {
        Self::new()
    }
}

impl Disassembler for RiscVDisassembler {
    fn decode_instruction(&self, bytes: &[u8], address: u64) -> Result<DecodedLine, DecodeError> {
        if bytes.len() < 2 {
            return Err(DecodeError::truncated(address, 2, bytes.len()));
        }
        let first = u16::from_le_bytes([bytes[0], bytes[1]]);
        let size = instruction_length(first);
        if size == 0 {
            return Err(DecodeError::unsupported_length(address, first));
        }
        let Some((inst, size)) = read_inst(bytes) else {
            return Err(DecodeError::truncated(address, size, bytes.len()));
        };
        let instruction = self.decode(address, inst);
        let text = render::render(&instruction, &self.config, &self.options);
        Ok(DecodedLine {
            address,
            size,
            instruction,
            text,
        })
    }

    fn min_instruction_size(&self) -> usize {
        2 // Compressed instructions are 16-bit
    }

    fn max_instruction_size(&self) -> usize {
        8
    }

    fn is_fixed_width(&self) -> bool {
        false
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::riscv::catalog::Opcode;
    use crate::riscv::opcodes::BaseOp;
    use crate::riscv::vendor::TheadOp;
    use rvdis_core::Extension;

    fn rv64(inst: u32) -> String {
        RiscVDisassembler::new().disassemble(0x1000, u64::from(inst))
    }

    #[test]
    fn test_nop() {
        assert_eq!(rv64(0x00000013), "nop");
    }

    #[test]
    fn test_li() {
        // addi x1, x0, 42
        let insn: u32 = (42 << 20) | (1 << 7) | 0b0010011;
        assert_eq!(rv64(insn), format!("{:<24}ra,42", "li"));
    }

    #[test]
    fn test_add() {
        // add a0, a1, a2
        let insn: u32 = (12 << 20) | (11 << 15) | (10 << 7) | 0b0110011;
        assert_eq!(rv64(insn), format!("{:<24}a0,a1,a2", "add"));
    }

    #[test]
    fn test_ret() {
        assert_eq!(rv64(0x00008067), "ret");
        // jalr ra, 0(ra) links, so it is not a return
        assert_eq!(rv64(0x000080e7), format!("{:<24}ra", "jalr"));
    }

    #[test]
    fn test_beq_target() {
        // beq a0, a1, +8
        let insn: u32 = (11 << 20) | (10 << 15) | (4 << 8) | 0b1100011;
        assert_eq!(
            rv64(insn),
            format!("{:<24}{:<24}# 0x1008", "beq", "a0,a1,8")
        );
    }

    #[test]
    fn test_lw() {
        // lw a0, 16(sp)
        let insn: u32 = (16 << 20) | (2 << 15) | (2 << 12) | (10 << 7) | 0b0000011;
        assert_eq!(rv64(insn), format!("{:<24}a0,16(sp)", "lw"));
    }

    #[test]
    fn test_ecall() {
        assert_eq!(rv64(0x00000073), "ecall");
    }

    #[test]
    fn test_custom0_follows_xtheadba() {
        let addsl: u32 = (1 << 25) | (12 << 20) | (11 << 15) | (1 << 12) | (10 << 7) | 0x0b;
        let base = RiscVDisassembler::new();
        assert_eq!(base.disassemble(0, u64::from(addsl)), "illegal");
        let thead = RiscVDisassembler::with_config(
            Xlen::Rv64,
            IsaConfig::default().with(Extension::XTheadBa),
        );
        assert_eq!(
            thead.disassemble(0, u64::from(addsl)),
            format!("{:<24}a0,a1,a2,1", "th.addsl")
        );
        assert_eq!(
            thead.decode(0, u64::from(addsl)).op,
            Opcode::Thead(TheadOp::Addsl)
        );
    }

    #[test]
    fn test_zero_addi4spn_is_illegal() {
        let disasm = RiscVDisassembler::new();
        assert_eq!(disasm.decode(0, 0x0000).op, Opcode::ILLEGAL);
        assert_eq!(disasm.disassemble(0, 0x0000), "illegal");
        // c.addi4spn a0, sp, 16
        assert_eq!(disasm.decode(0, 0x0808).op, Opcode::Base(BaseOp::Addi));
        assert_eq!(disasm.disassemble(0, 0x0808), format!("{:<24}a0,sp,16", "addi"));
    }

    #[test]
    fn test_compressed_expansion_and_lift() {
        // c.mv a0, a1 -> addi a0, a1, 0 -> mv
        assert_eq!(rv64(0x852e), format!("{:<24}a0,a1", "mv"));
        // c.jr ra -> jalr x0, 0(ra) -> ret
        assert_eq!(rv64(0x8082), "ret");
        // c.addi sp, -16
        assert_eq!(rv64(0x1141), format!("{:<24}sp,sp,-16", "addi"));
        // c.li a0, 0 -> li
        assert_eq!(rv64(0x4501), format!("{:<24}a0,0", "li"));
    }

    #[test]
    fn test_width_dependent_compressed() {
        let rv32 = RiscVDisassembler::new_rv32();
        let rv64 = RiscVDisassembler::new();
        let rv128 = RiscVDisassembler::with_config(Xlen::Rv128, IsaConfig::default());
        assert_eq!(rv64.decode(0, 0x2108).op, Opcode::Base(BaseOp::Fld));
        assert_eq!(rv128.decode(0, 0x2108).op, Opcode::Base(BaseOp::Lq));
        assert_eq!(rv32.decode(0, 0x6108).op, Opcode::Base(BaseOp::Flw));
        assert_eq!(rv64.decode(0, 0x6108).op, Opcode::Base(BaseOp::Ld));
    }

    #[test]
    fn test_every_first_unit_decodes() {
        for xlen in Xlen::ALL {
            for config in [IsaConfig::default(), IsaConfig::all_vendor()] {
                let disasm = RiscVDisassembler::with_config(xlen, config);
                for unit in 0..=u16::MAX {
                    let inst = u64::from(unit);
                    let dec = disasm.decode(0, inst);
                    assert_eq!(dec.codec, dec.op.codec(), "{inst:#06x} on {xlen}");
                    if dec.op.is_illegal() {
                        assert_eq!(dec, DecodedInstruction {
                            op: dec.op,
                            codec: dec.codec,
                            ..DecodedInstruction::new(0, inst)
                        });
                    }
                    assert!(!disasm.disassemble(0, inst).is_empty());
                }
            }
        }
    }

    #[test]
    fn test_instruction_length() {
        assert_eq!(instruction_length(0x0001), 2);
        assert_eq!(instruction_length(0x0013), 4);
        assert_eq!(instruction_length(0x001f), 6);
        assert_eq!(instruction_length(0x003f), 8);
        // [1:0]=11, [4:2]=111, [5]=1, [6]=1
        assert_eq!(instruction_length(0x007f), 0);
    }

    #[test]
    fn test_print_insn_listing() {
        let disasm = RiscVDisassembler::new();
        let insn = disasm.print_insn(&[0x13, 0x00, 0x00, 0x00], 0);
        assert_eq!(insn.len, 4);
        assert_eq!(insn.text, format!("{:<18}nop", "00000013"));
        let insn = disasm.print_insn(&[0x01, 0x00], 0);
        assert_eq!(insn.len, 2);
        assert_eq!(insn.text, format!("{:<18}nop", "0001"));
        // 48-bit encodings are not defined and decode as illegal
        let insn = disasm.print_insn(&[0x1f, 0, 0, 0, 0, 0], 0);
        assert_eq!(insn.len, 6);
        assert_eq!(insn.text, format!("{:<18}illegal", "00000000001f"));
    }

    #[test]
    fn test_print_insn_rejects_bad_prefix_and_short_input() {
        let disasm = RiscVDisassembler::new();
        assert_eq!(disasm.print_insn(&[0x7f, 0x00, 0x00, 0x00], 0).len, 0);
        assert_eq!(disasm.print_insn(&[0x13, 0x00], 0).len, 0);
        assert_eq!(disasm.print_insn(&[0x13], 0).len, 0);
    }

    #[test]
    fn test_decode_instruction_errors() {
        let disasm = RiscVDisassembler::new();
        assert!(matches!(
            disasm.decode_instruction(&[0x13, 0x00], 0x40),
            Err(DecodeError::Truncated {
                address: 0x40,
                needed: 4,
                available: 2
            })
        ));
        assert!(matches!(
            disasm.decode_instruction(&[0x7f, 0x00], 0x40),
            Err(DecodeError::UnsupportedLength {
                address: 0x40,
                unit: 0x007f
            })
        ));
        let line = disasm
            .decode_instruction(&[0x13, 0x05, 0x50, 0x00], 0x40)
            .unwrap();
        assert_eq!(line.size, 4);
        assert_eq!(line.text, format!("{:<24}a0,5", "li"));
    }

    #[test]
    fn test_disassemble_block_stops_at_bad_prefix() {
        let disasm = RiscVDisassembler::new();
        let bytes = [0x01, 0x00, 0x13, 0x00, 0x00, 0x00, 0x7f, 0x00, 0x01, 0x00];
        let lines = disasm.disassemble_block(&bytes, 0x100);
        assert_eq!(lines.len(), 3);
        assert_eq!(lines[0].as_ref().unwrap().address, 0x100);
        assert_eq!(lines[1].as_ref().unwrap().address, 0x102);
        assert!(lines[2].is_err());
    }
}
