//! RISC-V C (Compressed) decode tree.
//!
//! Walks quadrant, funct3 and the per-quadrant sub-fields of a 16-bit
//! instruction. Besides C itself this covers Zcb and, when enabled, the
//! Zcmp push/pop/move and Zcmt table-jump encodings that share quadrant 2
//! funct3=5 with `c.fsdsp`.
//!
//! Immediate validity is not checked here: forms whose immediate must be
//! nonzero are accepted and left to the expander.

use rvdis_core::{IsaConfig, Xlen};

use super::fields;
use super::opcodes::BaseOp as Op;

/// Decodes the low 16 bits of `inst`.
pub fn decode(inst: u32, xlen: Xlen, config: &IsaConfig) -> Op {
    let funct3 = (inst >> 13) & 0x7;
    match inst & 0x3 {
        0b00 => decode_quadrant0(inst, funct3, xlen),
        0b01 => decode_quadrant1(inst, funct3, xlen),
        0b10 => decode_quadrant2(inst, funct3, xlen, config),
        _ => Op::Illegal,
    }
}

fn decode_quadrant0(inst: u32, funct3: u32, xlen: Xlen) -> Op {
    match funct3 {
        0 => Op::CAddi4spn,
        1 if xlen == Xlen::Rv128 => Op::CLq,
        1 => Op::CFld,
        2 => Op::CLw,
        3 if xlen == Xlen::Rv32 => Op::CFlw,
        3 => Op::CLd,
        4 => decode_zcb_memory(inst),
        5 if xlen == Xlen::Rv128 => Op::CSq,
        5 => Op::CFsd,
        6 => Op::CSw,
        7 if xlen == Xlen::Rv32 => Op::CFsw,
        _ => Op::CSd,
    }
}

/// Zcb byte/halfword loads and stores (funct6 = 1000xx).
fn decode_zcb_memory(inst: u32) -> Op {
    let bit6 = (inst >> 6) & 1;
    match (inst >> 10) & 0x7 {
        0b000 => Op::CLbu,
        0b001 if bit6 == 0 => Op::CLhu,
        0b001 => Op::CLh,
        0b010 => Op::CSb,
        0b011 if bit6 == 0 => Op::CSh,
        _ => Op::Illegal,
    }
}

fn decode_quadrant1(inst: u32, funct3: u32, xlen: Xlen) -> Op {
    let rd = (inst >> 7) & 0x1f;
    let bit12 = (inst >> 12) & 1;
    match funct3 {
        0 if (inst >> 2) & 0x7ff == 0 => Op::CNop,
        0 => Op::CAddi,
        1 if xlen == Xlen::Rv32 => Op::CJal,
        1 if rd != 0 => Op::CAddiw,
        1 => Op::Illegal,
        2 => Op::CLi,
        3 if rd == 2 => Op::CAddi16sp,
        3 => Op::CLui,
        4 => match (inst >> 10) & 0x3 {
            // RV32 shift amounts are five bits
            0 if xlen == Xlen::Rv32 && bit12 != 0 => Op::Illegal,
            0 => Op::CSrli,
            1 if xlen == Xlen::Rv32 && bit12 != 0 => Op::Illegal,
            1 => Op::CSrai,
            2 => Op::CAndi,
            _ => decode_arith(inst, xlen),
        },
        5 => Op::CJ,
        6 => Op::CBeqz,
        _ => Op::CBnez,
    }
}

/// Register-register forms selected by bit 12 and bits 6:5.
fn decode_arith(inst: u32, xlen: Xlen) -> Op {
    let sel = ((inst >> 10) & 0b100) | ((inst >> 5) & 0b011);
    match sel {
        0 => Op::CSub,
        1 => Op::CXor,
        2 => Op::COr,
        3 => Op::CAnd,
        4 if xlen != Xlen::Rv32 => Op::CSubw,
        5 if xlen != Xlen::Rv32 => Op::CAddw,
        6 => Op::CMul,
        7 => match (inst >> 2) & 0x7 {
            0b000 => Op::CZextB,
            0b001 => Op::CSextB,
            0b010 => Op::CZextH,
            0b011 => Op::CSextH,
            0b100 if xlen != Xlen::Rv32 => Op::CZextW,
            0b101 => Op::CNot,
            _ => Op::Illegal,
        },
        _ => Op::Illegal,
    }
}

fn decode_quadrant2(inst: u32, funct3: u32, xlen: Xlen, config: &IsaConfig) -> Op {
    let rd = (inst >> 7) & 0x1f;
    let rs2 = (inst >> 2) & 0x1f;
    let bit12 = (inst >> 12) & 1;
    match funct3 {
        0 if xlen == Xlen::Rv32 && bit12 != 0 => Op::Illegal,
        0 => Op::CSlli,
        1 if xlen == Xlen::Rv128 => Op::CLqsp,
        1 => Op::CFldsp,
        2 => Op::CLwsp,
        3 if xlen == Xlen::Rv32 => Op::CFlwsp,
        3 => Op::CLdsp,
        4 => match (bit12, rs2, rd) {
            (0, 0, _) => Op::CJr,
            (0, _, _) => Op::CMv,
            (_, 0, 0) => Op::CEbreak,
            (_, 0, _) => Op::CJalr,
            _ => Op::CAdd,
        },
        5 if xlen == Xlen::Rv128 => Op::CSqsp,
        // Words no enabled Zcmp/Zcmt form claims stay c.fsdsp
        5 => match decode_zcm(inst, config) {
            Op::Illegal => Op::CFsdsp,
            op => op,
        },
        6 => Op::CSwsp,
        7 if xlen == Xlen::Rv32 => Op::CFswsp,
        _ => Op::CSdsp,
    }
}

/// Zcmp and Zcmt, each gated by its own flag.
///
/// Returns `Illegal` for words neither enabled extension defines.
fn decode_zcm(inst: u32, config: &IsaConfig) -> Op {
    let raw = u64::from(inst);
    match (inst >> 10) & 0x7 {
        0b000 if config.zcmt => {
            if fields::zcmt_index(raw) < 32 {
                Op::CmJt
            } else {
                Op::CmJalt
            }
        }
        0b011 if config.zcmp => match (inst >> 5) & 0x3 {
            0b01 if fields::zcmp_r1s(raw) != fields::zcmp_r2s(raw) => Op::CmMvsa01,
            0b11 => Op::CmMva01s,
            _ => Op::Illegal,
        },
        0b110 | 0b111 if config.zcmp && fields::zcmp_rlist(raw) >= 4 => {
            match (inst >> 8) & 0x1f {
                0b11000 => Op::CmPush,
                0b11010 => Op::CmPop,
                0b11100 => Op::CmPopretz,
                0b11110 => Op::CmPopret,
                _ => Op::Illegal,
            }
        }
        _ => Op::Illegal,
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use rvdis_core::Extension;

    fn rv(inst: u32, xlen: Xlen) -> Op {
        decode(inst, xlen, &IsaConfig::default())
    }

    #[test]
    fn test_decode_common_forms() {
        assert_eq!(rv(0x0001, Xlen::Rv64), Op::CNop);
        assert_eq!(rv(0x4501, Xlen::Rv64), Op::CLi); // c.li a0, 0
        assert_eq!(rv(0x8082, Xlen::Rv64), Op::CJr); // c.jr ra
        assert_eq!(rv(0x852e, Xlen::Rv64), Op::CMv); // c.mv a0, a1
        assert_eq!(rv(0x9002, Xlen::Rv64), Op::CEbreak);
        assert_eq!(rv(0x9582, Xlen::Rv64), Op::CJalr); // c.jalr a1
        assert_eq!(rv(0x1141, Xlen::Rv64), Op::CAddi); // c.addi sp, -16
        assert_eq!(rv(0x7179, Xlen::Rv64), Op::CAddi16sp); // c.addi16sp sp, -48
        assert_eq!(rv(0x0000, Xlen::Rv64), Op::CAddi4spn);
    }

    #[test]
    fn test_width_dependent_leaves() {
        // funct3=3 in quadrant 0: c.flw on rv32, c.ld elsewhere
        assert_eq!(rv(0x6108, Xlen::Rv32), Op::CFlw);
        assert_eq!(rv(0x6108, Xlen::Rv64), Op::CLd);
        assert_eq!(rv(0x6108, Xlen::Rv128), Op::CLd);
        // funct3=1 in quadrant 0: c.lq on rv128, c.fld elsewhere
        assert_eq!(rv(0x2108, Xlen::Rv64), Op::CFld);
        assert_eq!(rv(0x2108, Xlen::Rv128), Op::CLq);
        // c.jal on rv32, c.addiw elsewhere (rd = x0 reserved)
        assert_eq!(rv(0x2085, Xlen::Rv32), Op::CJal);
        assert_eq!(rv(0x2085, Xlen::Rv64), Op::CAddiw);
        assert_eq!(rv(0x2005, Xlen::Rv64), Op::Illegal);
        // shift amount bit 5 is reserved on rv32
        assert_eq!(rv(0x1502, Xlen::Rv32), Op::Illegal);
        assert_eq!(rv(0x1502, Xlen::Rv64), Op::CSlli);
    }

    #[test]
    fn test_decode_zcb() {
        assert_eq!(rv(0x8000, Xlen::Rv64), Op::CLbu);
        assert_eq!(rv(0x8400, Xlen::Rv64), Op::CLhu);
        assert_eq!(rv(0x8440, Xlen::Rv64), Op::CLh);
        assert_eq!(rv(0x8c40, Xlen::Rv64), Op::Illegal);
        // c.zext.w is RV64-only
        assert_eq!(rv(0x9c71, Xlen::Rv64), Op::CZextW);
        assert_eq!(rv(0x9c71, Xlen::Rv32), Op::Illegal);
        assert_eq!(rv(0x9c75, Xlen::Rv32), Op::CNot);
        assert_eq!(rv(0x9c4d, Xlen::Rv32), Op::CMul);
    }

    #[test]
    fn test_zcmp_and_zcmt_share_fsdsp_space() {
        let base = IsaConfig::default();
        let zcmp = base.with(Extension::Zcmp);
        let zcmt = base.with(Extension::Zcmt);

        // cm.push {ra}, -16
        assert_eq!(decode(0xb842, Xlen::Rv32, &base), Op::CFsdsp);
        assert_eq!(decode(0xb842, Xlen::Rv32, &zcmp), Op::CmPush);
        assert_eq!(decode(0xb842, Xlen::Rv32, &zcmt), Op::CFsdsp);
        assert_eq!(decode(0xb842, Xlen::Rv128, &zcmp), Op::CSqsp);

        // rlist below 4 is not a push
        assert_eq!(decode(0xb832, Xlen::Rv32, &zcmp), Op::CFsdsp);

        // cm.mvsa01 s0, s1; the s0, s0 form is not a move
        assert_eq!(decode(0xac26, Xlen::Rv64, &zcmp), Op::CmMvsa01);
        assert_eq!(decode(0xac22, Xlen::Rv64, &zcmp), Op::CFsdsp);
        assert_eq!(decode(0xac66, Xlen::Rv64, &zcmp), Op::CmMva01s);

        // cm.jt 0 / cm.jalt 32
        assert_eq!(decode(0xa002, Xlen::Rv32, &zcmt), Op::CmJt);
        assert_eq!(decode(0xa082, Xlen::Rv32, &zcmt), Op::CmJalt);
        assert_eq!(decode(0xa002, Xlen::Rv32, &zcmp), Op::CFsdsp);
    }

    #[test]
    fn test_unclaimed_zcm_words_stay_fsdsp() {
        let both = IsaConfig::default()
            .with(Extension::Zcmp)
            .with(Extension::Zcmt);
        // funct3=5 quadrant 2 with inst[12:10] = 0b001, owned by neither extension
        let word = 0xa402;
        assert_eq!(decode(word, Xlen::Rv64, &both), Op::CFsdsp);
        assert_eq!(decode(word, Xlen::Rv64, &IsaConfig::default()), Op::CFsdsp);
        // cm.popret {ra}, 16 is still claimed
        assert_eq!(decode(0xbe42, Xlen::Rv64, &both), Op::CmPopret);
    }
}
