//! RISC-V floating-point decode tree.
//!
//! Handles F, D, Q, Zfh and Zfa: loads and stores, the fused multiply-add
//! family, and the OP-FP opcode space. Every operation is chosen by its
//! `fmt` field (bits 26:25) from a four-entry row ordered S, D, H, Q.

use rvdis_core::Xlen;

use super::opcodes::BaseOp as Op;

// Floating-point opcodes (F/D/Q/Zfh)
pub const OP_LOAD_FP: u32 = 0b0000111; // 0x07 - FLH, FLW, FLD, FLQ
pub const OP_STORE_FP: u32 = 0b0100111; // 0x27 - FSH, FSW, FSD, FSQ
pub const OP_MADD: u32 = 0b1000011; // 0x43
pub const OP_MSUB: u32 = 0b1000111; // 0x47
pub const OP_NMSUB: u32 = 0b1001011; // 0x4B
pub const OP_NMADD: u32 = 0b1001111; // 0x4F
pub const OP_FP: u32 = 0b1010011; // 0x53

// fmt field values
const FMT_S: u32 = 0b00;
const FMT_D: u32 = 0b01;
const FMT_H: u32 = 0b10;
const FMT_Q: u32 = 0b11;

// rs2 selector of the integer conversions
const CVT_W: u32 = 0;
const CVT_WU: u32 = 1;
const CVT_L: u32 = 2;
const CVT_LU: u32 = 3;

/// Picks the opcode for `fmt` from a row ordered S, D, H, Q.
#[inline]
fn by_fmt(fmt: u32, row: [Op; 4]) -> Op {
    row[(fmt & 0x3) as usize]
}

/// FLH/FLW/FLD/FLQ, selected by the width code in funct3.
pub fn decode_load(inst: u32) -> Op {
    match (inst >> 12) & 0x7 {
        1 => Op::Flh,
        2 => Op::Flw,
        3 => Op::Fld,
        4 => Op::Flq,
        _ => Op::Illegal,
    }
}

/// FSH/FSW/FSD/FSQ.
pub fn decode_store(inst: u32) -> Op {
    match (inst >> 12) & 0x7 {
        1 => Op::Fsh,
        2 => Op::Fsw,
        3 => Op::Fsd,
        4 => Op::Fsq,
        _ => Op::Illegal,
    }
}

/// The R4-type fused multiply-add family.
pub fn decode_fused(inst: u32) -> Op {
    let fmt = (inst >> 25) & 0x3;
    match inst & 0x7f {
        OP_MADD => by_fmt(fmt, [Op::FmaddS, Op::FmaddD, Op::FmaddH, Op::FmaddQ]),
        OP_MSUB => by_fmt(fmt, [Op::FmsubS, Op::FmsubD, Op::FmsubH, Op::FmsubQ]),
        OP_NMSUB => by_fmt(fmt, [Op::FnmsubS, Op::FnmsubD, Op::FnmsubH, Op::FnmsubQ]),
        OP_NMADD => by_fmt(fmt, [Op::FnmaddS, Op::FnmaddD, Op::FnmaddH, Op::FnmaddQ]),
        _ => Op::Illegal,
    }
}

/// Decodes the OP-FP major opcode.
pub fn decode_op_fp(inst: u32, xlen: Xlen) -> Op {
    let fmt = (inst >> 25) & 0x3;
    let funct5 = inst >> 27;
    let rm = (inst >> 12) & 0x7;
    let rs2 = (inst >> 20) & 0x1f;

    match funct5 {
        0b00000 => by_fmt(fmt, [Op::FaddS, Op::FaddD, Op::FaddH, Op::FaddQ]),
        0b00001 => by_fmt(fmt, [Op::FsubS, Op::FsubD, Op::FsubH, Op::FsubQ]),
        0b00010 => by_fmt(fmt, [Op::FmulS, Op::FmulD, Op::FmulH, Op::FmulQ]),
        0b00011 => by_fmt(fmt, [Op::FdivS, Op::FdivD, Op::FdivH, Op::FdivQ]),
        0b01011 if rs2 == 0 => by_fmt(fmt, [Op::FsqrtS, Op::FsqrtD, Op::FsqrtH, Op::FsqrtQ]),
        0b00100 => match rm {
            0 => by_fmt(fmt, [Op::FsgnjS, Op::FsgnjD, Op::FsgnjH, Op::FsgnjQ]),
            1 => by_fmt(fmt, [Op::FsgnjnS, Op::FsgnjnD, Op::FsgnjnH, Op::FsgnjnQ]),
            2 => by_fmt(fmt, [Op::FsgnjxS, Op::FsgnjxD, Op::FsgnjxH, Op::FsgnjxQ]),
            _ => Op::Illegal,
        },
        0b00101 => match rm {
            0 => by_fmt(fmt, [Op::FminS, Op::FminD, Op::FminH, Op::FminQ]),
            1 => by_fmt(fmt, [Op::FmaxS, Op::FmaxD, Op::FmaxH, Op::FmaxQ]),
            2 => by_fmt(fmt, [Op::FminmS, Op::FminmD, Op::FminmH, Op::FminmQ]),
            3 => by_fmt(fmt, [Op::FmaxmS, Op::FmaxmD, Op::FmaxmH, Op::FmaxmQ]),
            _ => Op::Illegal,
        },
        0b01000 => decode_fp_convert(fmt, rs2),
        0b10100 => match rm {
            0 => by_fmt(fmt, [Op::FleS, Op::FleD, Op::FleH, Op::FleQ]),
            1 => by_fmt(fmt, [Op::FltS, Op::FltD, Op::FltH, Op::FltQ]),
            2 => by_fmt(fmt, [Op::FeqS, Op::FeqD, Op::FeqH, Op::FeqQ]),
            4 => by_fmt(fmt, [Op::FleqS, Op::FleqD, Op::FleqH, Op::FleqQ]),
            5 => by_fmt(fmt, [Op::FltqS, Op::FltqD, Op::FltqH, Op::FltqQ]),
            _ => Op::Illegal,
        },
        0b11000 => decode_to_int(fmt, rs2, rm, xlen),
        0b11010 => decode_from_int(fmt, rs2, xlen),
        0b11100 => match (rs2, rm) {
            (0, 0) => decode_move_to_int(fmt, xlen),
            (0, 1) => by_fmt(fmt, [Op::FclassS, Op::FclassD, Op::FclassH, Op::FclassQ]),
            (1, 0) => match (fmt, xlen) {
                (FMT_D, Xlen::Rv32) => Op::FmvhXD,
                (FMT_Q, Xlen::Rv64) => Op::FmvhXQ,
                _ => Op::Illegal,
            },
            _ => Op::Illegal,
        },
        0b11110 if rm == 0 => match rs2 {
            0 => decode_move_from_int(fmt, xlen),
            1 => by_fmt(fmt, [Op::FliS, Op::FliD, Op::FliH, Op::FliQ]),
            _ => Op::Illegal,
        },
        0b10110 if rm == 0 => match (fmt, xlen) {
            (FMT_D, Xlen::Rv32) => Op::FmvpDX,
            (FMT_Q, Xlen::Rv64) => Op::FmvpQX,
            _ => Op::Illegal,
        },
        _ => Op::Illegal,
    }
}

/// Float-to-float conversion (`fcvt.<fmt>.<rs2>`) and the Zfa rounding ops.
fn decode_fp_convert(fmt: u32, rs2: u32) -> Op {
    match (fmt, rs2) {
        (_, 4) => by_fmt(fmt, [Op::FroundS, Op::FroundD, Op::FroundH, Op::FroundQ]),
        (_, 5) => by_fmt(fmt, [Op::FroundnxS, Op::FroundnxD, Op::FroundnxH, Op::FroundnxQ]),
        (FMT_S, FMT_D) => Op::FcvtSD,
        (FMT_S, FMT_H) => Op::FcvtSH,
        (FMT_S, FMT_Q) => Op::FcvtSQ,
        (FMT_D, FMT_S) => Op::FcvtDS,
        (FMT_D, FMT_H) => Op::FcvtDH,
        (FMT_D, FMT_Q) => Op::FcvtDQ,
        (FMT_H, FMT_S) => Op::FcvtHS,
        (FMT_H, FMT_D) => Op::FcvtHD,
        (FMT_H, FMT_Q) => Op::FcvtHQ,
        (FMT_Q, FMT_S) => Op::FcvtQS,
        (FMT_Q, FMT_D) => Op::FcvtQD,
        (FMT_Q, FMT_H) => Op::FcvtQH,
        _ => Op::Illegal,
    }
}

fn decode_to_int(fmt: u32, rs2: u32, rm: u32, xlen: Xlen) -> Op {
    match rs2 {
        CVT_W => by_fmt(fmt, [Op::FcvtWS, Op::FcvtWD, Op::FcvtWH, Op::FcvtWQ]),
        CVT_WU => by_fmt(fmt, [Op::FcvtWuS, Op::FcvtWuD, Op::FcvtWuH, Op::FcvtWuQ]),
        CVT_L if xlen != Xlen::Rv32 => {
            by_fmt(fmt, [Op::FcvtLS, Op::FcvtLD, Op::FcvtLH, Op::FcvtLQ])
        }
        CVT_LU if xlen != Xlen::Rv32 => {
            by_fmt(fmt, [Op::FcvtLuS, Op::FcvtLuD, Op::FcvtLuH, Op::FcvtLuQ])
        }
        // fcvtmod.w.d always rounds towards zero
        8 if fmt == FMT_D && rm == 1 => Op::FcvtmodWD,
        _ => Op::Illegal,
    }
}

fn decode_from_int(fmt: u32, rs2: u32, xlen: Xlen) -> Op {
    match rs2 {
        CVT_W => by_fmt(fmt, [Op::FcvtSW, Op::FcvtDW, Op::FcvtHW, Op::FcvtQW]),
        CVT_WU => by_fmt(fmt, [Op::FcvtSWu, Op::FcvtDWu, Op::FcvtHWu, Op::FcvtQWu]),
        CVT_L if xlen != Xlen::Rv32 => {
            by_fmt(fmt, [Op::FcvtSL, Op::FcvtDL, Op::FcvtHL, Op::FcvtQL])
        }
        CVT_LU if xlen != Xlen::Rv32 => {
            by_fmt(fmt, [Op::FcvtSLu, Op::FcvtDLu, Op::FcvtHLu, Op::FcvtQLu])
        }
        _ => Op::Illegal,
    }
}

/// Bit moves are only defined when the integer register is wide enough.
fn decode_move_to_int(fmt: u32, xlen: Xlen) -> Op {
    match (fmt, xlen) {
        (FMT_S, _) => Op::FmvXW,
        (FMT_H, _) => Op::FmvXH,
        (FMT_D, Xlen::Rv64 | Xlen::Rv128) => Op::FmvXD,
        (FMT_Q, Xlen::Rv128) => Op::FmvXQ,
        _ => Op::Illegal,
    }
}

fn decode_move_from_int(fmt: u32, xlen: Xlen) -> Op {
    match (fmt, xlen) {
        (FMT_S, _) => Op::FmvWX,
        (FMT_H, _) => Op::FmvHX,
        (FMT_D, Xlen::Rv64 | Xlen::Rv128) => Op::FmvDX,
        (FMT_Q, Xlen::Rv128) => Op::FmvQX,
        _ => Op::Illegal,
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn op_fp(funct5: u32, fmt: u32, rs2: u32, rm: u32) -> u32 {
        (funct5 << 27) | (fmt << 25) | (rs2 << 20) | (3 << 15) | (rm << 12) | (1 << 7) | OP_FP
    }

    #[test]
    fn test_decode_arithmetic_by_fmt() {
        assert_eq!(decode_op_fp(op_fp(0, FMT_S, 2, 7), Xlen::Rv64), Op::FaddS);
        assert_eq!(decode_op_fp(op_fp(0, FMT_D, 2, 7), Xlen::Rv64), Op::FaddD);
        assert_eq!(decode_op_fp(op_fp(0, FMT_H, 2, 7), Xlen::Rv64), Op::FaddH);
        assert_eq!(decode_op_fp(op_fp(0, FMT_Q, 2, 7), Xlen::Rv64), Op::FaddQ);
        // fsqrt needs rs2 = 0
        assert_eq!(decode_op_fp(op_fp(0b01011, FMT_D, 0, 0), Xlen::Rv64), Op::FsqrtD);
        assert_eq!(decode_op_fp(op_fp(0b01011, FMT_D, 1, 0), Xlen::Rv64), Op::Illegal);
    }

    #[test]
    fn test_decode_conversions() {
        assert_eq!(decode_op_fp(op_fp(0b01000, FMT_S, FMT_D, 7), Xlen::Rv64), Op::FcvtSD);
        assert_eq!(decode_op_fp(op_fp(0b01000, FMT_S, FMT_S, 7), Xlen::Rv64), Op::Illegal);
        assert_eq!(decode_op_fp(op_fp(0b01000, FMT_H, 4, 7), Xlen::Rv64), Op::FroundH);
        assert_eq!(decode_op_fp(op_fp(0b11000, FMT_D, CVT_L, 1), Xlen::Rv64), Op::FcvtLD);
        assert_eq!(decode_op_fp(op_fp(0b11000, FMT_D, CVT_L, 1), Xlen::Rv32), Op::Illegal);
        assert_eq!(decode_op_fp(op_fp(0b11010, FMT_S, CVT_WU, 7), Xlen::Rv32), Op::FcvtSWu);
        assert_eq!(decode_op_fp(op_fp(0b11000, FMT_D, 8, 1), Xlen::Rv32), Op::FcvtmodWD);
    }

    #[test]
    fn test_moves_depend_on_width() {
        let fmv_x_d = op_fp(0b11100, FMT_D, 0, 0);
        assert_eq!(decode_op_fp(fmv_x_d, Xlen::Rv64), Op::FmvXD);
        assert_eq!(decode_op_fp(fmv_x_d, Xlen::Rv32), Op::Illegal);
        let fmvh_x_d = op_fp(0b11100, FMT_D, 1, 0);
        assert_eq!(decode_op_fp(fmvh_x_d, Xlen::Rv32), Op::FmvhXD);
        assert_eq!(decode_op_fp(fmvh_x_d, Xlen::Rv64), Op::Illegal);
        assert_eq!(decode_op_fp(op_fp(0b11110, FMT_Q, 0, 0), Xlen::Rv128), Op::FmvQX);
        assert_eq!(decode_op_fp(op_fp(0b11110, FMT_S, 1, 0), Xlen::Rv32), Op::FliS);
        assert_eq!(decode_op_fp(op_fp(0b10110, FMT_Q, 2, 0), Xlen::Rv64), Op::FmvpQX);
    }

    #[test]
    fn test_decode_memory_and_fused() {
        // fld fa0, 8(sp)
        assert_eq!(decode_load(0x00813507), Op::Fld);
        // fsw fa0, 0(sp)
        assert_eq!(decode_store(0x00a12027), Op::Fsw);
        assert_eq!(decode_load(0x00017507), Op::Illegal);
        // fmadd.s fa0, fa1, fa2, fa3, dyn
        assert_eq!(decode_fused(0x68c5f543), Op::FmaddS);
        assert_eq!(decode_fused(0x6ac5f54f), Op::FnmaddD);
    }
}
