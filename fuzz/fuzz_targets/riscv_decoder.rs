#![no_main]

use libfuzzer_sys::fuzz_target;
use rvdis_core::{IsaConfig, Xlen};
use rvdis_disasm::{instruction_length, Disassembler, RiscVDisassembler};

fuzz_target!(|data: &[u8]| {
    if data.len() < 2 {
        return;
    }

    // First byte picks the width and whether vendor trees are enabled
    let xlen = Xlen::ALL[usize::from(data[0] & 0b11) % 3];
    let config = if data[0] & 0b100 != 0 {
        IsaConfig::all_vendor()
    } else {
        IsaConfig::default()
    };
    let disasm = RiscVDisassembler::with_config(xlen, config);
    let code = &data[1..];

    let _ = disasm.decode_instruction(code, 0x1000);

    let mut offset = 0;
    let mut count = 0;
    while offset < code.len() && count < 100 {
        let insn = disasm.print_insn(&code[offset..], 0x1000 + offset as u64);
        if insn.len == 0 {
            break;
        }
        let first = u16::from_le_bytes([code[offset], code[offset + 1]]);
        assert_eq!(insn.len, instruction_length(first));
        assert!(insn.text.len() <= 18 + disasm.options().max_len);
        offset += insn.len;
        count += 1;
    }
});
