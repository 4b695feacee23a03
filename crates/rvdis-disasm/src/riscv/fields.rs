//! Bitfield extractors.
//!
//! Every extractor is total: any word yields a defined value. Legality is
//! decided by the decode trees, not here. Shapes follow the base and
//! compressed encoding figures of the unprivileged ISA manual.

use rvdis_core::Xlen;

/// Raw instruction bits, low code unit first.
pub type RawInst = u64;

#[inline]
const fn bits(inst: RawInst, hi: u32, lo: u32) -> u32 {
    ((inst >> lo) & ((1u64 << (hi - lo + 1)) - 1)) as u32
}

#[inline]
const fn bit(inst: RawInst, n: u32) -> u32 {
    ((inst >> n) & 1) as u32
}

/// Sign-extends the low `width` bits of `value`.
#[inline]
const fn sext(value: u32, width: u32) -> i32 {
    ((value << (32 - width)) as i32) >> (32 - width)
}

// ==================== Plain fields ====================

pub fn opcode(inst: RawInst) -> u32 {
    bits(inst, 6, 0)
}

pub fn funct3(inst: RawInst) -> u32 {
    bits(inst, 14, 12)
}

pub fn funct7(inst: RawInst) -> u32 {
    bits(inst, 31, 25)
}

pub fn rd(inst: RawInst) -> u8 {
    bits(inst, 11, 7) as u8
}

pub fn rs1(inst: RawInst) -> u8 {
    bits(inst, 19, 15) as u8
}

pub fn rs2(inst: RawInst) -> u8 {
    bits(inst, 24, 20) as u8
}

pub fn rs3(inst: RawInst) -> u8 {
    bits(inst, 31, 27) as u8
}

pub fn aq(inst: RawInst) -> bool {
    bit(inst, 26) != 0
}

pub fn rl(inst: RawInst) -> bool {
    bit(inst, 25) != 0
}

pub fn pred(inst: RawInst) -> u8 {
    bits(inst, 27, 24) as u8
}

pub fn succ(inst: RawInst) -> u8 {
    bits(inst, 23, 20) as u8
}

pub fn rm(inst: RawInst) -> u8 {
    bits(inst, 14, 12) as u8
}

pub fn shamt5(inst: RawInst) -> i32 {
    bits(inst, 24, 20) as i32
}

pub fn shamt6(inst: RawInst) -> i32 {
    bits(inst, 25, 20) as i32
}

pub fn shamt7(inst: RawInst) -> i32 {
    bits(inst, 26, 20) as i32
}

pub fn csr12(inst: RawInst) -> u16 {
    bits(inst, 31, 20) as u16
}

// ==================== Base immediates ====================

pub fn imm12(inst: RawInst) -> i32 {
    sext(bits(inst, 31, 20), 12)
}

/// U-type immediate, already shifted into place.
pub fn imm20(inst: RawInst) -> i32 {
    (bits(inst, 31, 12) << 12) as i32
}

pub fn jimm20(inst: RawInst) -> i32 {
    let imm = bit(inst, 31) << 20
        | bits(inst, 30, 21) << 1
        | bit(inst, 20) << 11
        | bits(inst, 19, 12) << 12;
    sext(imm, 21)
}

pub fn simm12(inst: RawInst) -> i32 {
    sext(bits(inst, 31, 25) << 5 | bits(inst, 11, 7), 12)
}

pub fn sbimm12(inst: RawInst) -> i32 {
    let imm = bit(inst, 31) << 12
        | bits(inst, 30, 25) << 5
        | bits(inst, 11, 8) << 1
        | bit(inst, 7) << 11;
    sext(imm, 13)
}

// ==================== Compressed registers ====================

/// rd' in bits [4:2], mapped onto x8-x15.
pub fn crdq(inst: RawInst) -> u8 {
    bits(inst, 4, 2) as u8 + 8
}

/// rs1' in bits [9:7], mapped onto x8-x15.
pub fn crs1q(inst: RawInst) -> u8 {
    bits(inst, 9, 7) as u8 + 8
}

/// rs2' in bits [4:2], mapped onto x8-x15.
pub fn crs2q(inst: RawInst) -> u8 {
    bits(inst, 4, 2) as u8 + 8
}

pub fn crd(inst: RawInst) -> u8 {
    bits(inst, 11, 7) as u8
}

pub fn crs2(inst: RawInst) -> u8 {
    bits(inst, 6, 2) as u8
}

// ==================== Compressed immediates ====================

/// Left shift amount; rv128 encodes 64 as zero.
pub fn cimmshl6(inst: RawInst, xlen: Xlen) -> i32 {
    let imm = (bit(inst, 12) << 5 | bits(inst, 6, 2)) as i32;
    match (xlen, imm) {
        (Xlen::Rv128, 0) => 64,
        _ => imm,
    }
}

/// Right shift amount; on rv128 bit 5 is sign-extended into bit 6.
pub fn cimmshr6(inst: RawInst, xlen: Xlen) -> i32 {
    let mut imm = (bit(inst, 12) << 5 | bits(inst, 6, 2)) as i32;
    if xlen == Xlen::Rv128 {
        imm |= (imm & 32) << 1;
        if imm == 0 {
            imm = 64;
        }
    }
    imm
}

pub fn cimmi(inst: RawInst) -> i32 {
    sext(bit(inst, 12) << 5 | bits(inst, 6, 2), 6)
}

/// c.lui immediate, already shifted into place.
pub fn cimmui(inst: RawInst) -> i32 {
    sext(bit(inst, 12) << 17 | bits(inst, 6, 2) << 12, 18)
}

pub fn cimmlwsp(inst: RawInst) -> i32 {
    (bit(inst, 12) << 5 | bits(inst, 6, 4) << 2 | bits(inst, 3, 2) << 6) as i32
}

pub fn cimmldsp(inst: RawInst) -> i32 {
    (bit(inst, 12) << 5 | bits(inst, 6, 5) << 3 | bits(inst, 4, 2) << 6) as i32
}

pub fn cimmlqsp(inst: RawInst) -> i32 {
    (bit(inst, 12) << 5 | bit(inst, 6) << 4 | bits(inst, 5, 2) << 6) as i32
}

pub fn cimm16sp(inst: RawInst) -> i32 {
    let imm = bit(inst, 12) << 9
        | bit(inst, 6) << 4
        | bit(inst, 5) << 6
        | bits(inst, 4, 3) << 7
        | bit(inst, 2) << 5;
    sext(imm, 10)
}

pub fn cimmj(inst: RawInst) -> i32 {
    let imm = bit(inst, 12) << 11
        | bit(inst, 11) << 4
        | bits(inst, 10, 9) << 8
        | bit(inst, 8) << 10
        | bit(inst, 7) << 6
        | bit(inst, 6) << 7
        | bits(inst, 5, 3) << 1
        | bit(inst, 2) << 5;
    sext(imm, 12)
}

pub fn cimmb(inst: RawInst) -> i32 {
    let imm = bit(inst, 12) << 8
        | bits(inst, 11, 10) << 3
        | bits(inst, 6, 5) << 6
        | bits(inst, 4, 3) << 1
        | bit(inst, 2) << 5;
    sext(imm, 9)
}

pub fn cimmswsp(inst: RawInst) -> i32 {
    (bits(inst, 12, 9) << 2 | bits(inst, 8, 7) << 6) as i32
}

pub fn cimmsdsp(inst: RawInst) -> i32 {
    (bits(inst, 12, 10) << 3 | bits(inst, 9, 7) << 6) as i32
}

pub fn cimmsqsp(inst: RawInst) -> i32 {
    (bits(inst, 12, 11) << 4 | bits(inst, 10, 7) << 6) as i32
}

pub fn cimm4spn(inst: RawInst) -> i32 {
    (bits(inst, 12, 11) << 4 | bits(inst, 10, 7) << 6 | bit(inst, 6) << 2 | bit(inst, 5) << 3)
        as i32
}

pub fn cimmw(inst: RawInst) -> i32 {
    (bits(inst, 12, 10) << 3 | bit(inst, 6) << 2 | bit(inst, 5) << 6) as i32
}

pub fn cimmd(inst: RawInst) -> i32 {
    (bits(inst, 12, 10) << 3 | bits(inst, 6, 5) << 6) as i32
}

pub fn cimmq(inst: RawInst) -> i32 {
    (bits(inst, 12, 11) << 4 | bit(inst, 10) << 8 | bits(inst, 6, 5) << 6) as i32
}

// ==================== Zcb / Zcmp / Zcmt ====================

/// c.lbu / c.sb byte offset.
pub fn zcb_uimm_b(inst: RawInst) -> i32 {
    (bit(inst, 5) << 1 | bit(inst, 6)) as i32
}

/// c.lhu / c.lh / c.sh halfword offset.
pub fn zcb_uimm_h(inst: RawInst) -> i32 {
    (bit(inst, 5) << 1) as i32
}

pub fn zcmp_rlist(inst: RawInst) -> u8 {
    bits(inst, 7, 4) as u8
}

fn zcmp_spimm(inst: RawInst) -> i32 {
    (bits(inst, 3, 2) << 4) as i32
}

/// Bytes a push/pop moves the stack pointer by.
///
/// The saved-register area is rounded up to 16 bytes before the extra
/// `spimm` adjustment is added.
pub fn zcmp_stack_adj(inst: RawInst, xlen: Xlen) -> i32 {
    let rlist = zcmp_rlist(inst);
    let reg_num = if rlist == 15 {
        13
    } else {
        i32::from(rlist.saturating_sub(3))
    };
    let area = reg_num * xlen.bytes() as i32;
    ((area + 15) & !15) + zcmp_spimm(inst)
}

/// Maps a 3-bit Zcmp s-register index onto s0-s7.
fn zcmp_sreg(r: u32) -> u8 {
    if r < 2 {
        (r + 8) as u8
    } else {
        (r + 16) as u8
    }
}

pub fn zcmp_r1s(inst: RawInst) -> u8 {
    zcmp_sreg(bits(inst, 9, 7))
}

pub fn zcmp_r2s(inst: RawInst) -> u8 {
    zcmp_sreg(bits(inst, 4, 2))
}

pub fn zcmt_index(inst: RawInst) -> i32 {
    bits(inst, 9, 2) as i32
}

// ==================== Vector ====================

/// `true` when the instruction is unmasked.
pub fn vm(inst: RawInst) -> bool {
    bit(inst, 25) != 0
}

pub fn nf(inst: RawInst) -> u32 {
    bits(inst, 31, 29)
}

/// Signed 5-bit immediate in the vs1 slot.
pub fn vimm(inst: RawInst) -> i32 {
    sext(bits(inst, 19, 15), 5)
}

/// Unsigned 6-bit rotate amount split across bit 26 and the vs1 slot.
pub fn vimm6(inst: RawInst) -> i32 {
    (bit(inst, 26) << 5 | bits(inst, 19, 15)) as i32
}

pub fn vzimm11(inst: RawInst) -> u16 {
    bits(inst, 30, 20) as u16
}

pub fn vzimm10(inst: RawInst) -> u16 {
    bits(inst, 29, 20) as u16
}

// ==================== Scalar crypto ====================

pub fn bs(inst: RawInst) -> u8 {
    bits(inst, 31, 30) as u8
}

pub fn rnum(inst: RawInst) -> u8 {
    bits(inst, 23, 20) as u8
}

// ==================== Vendor fields ====================

pub fn imm2(inst: RawInst) -> i32 {
    bits(inst, 26, 25) as i32
}

pub fn imm5(inst: RawInst) -> i32 {
    bits(inst, 24, 20) as i32
}

pub fn simm5(inst: RawInst) -> i32 {
    sext(bits(inst, 24, 20), 5)
}

pub fn imm6(inst: RawInst) -> i32 {
    bits(inst, 25, 20) as i32
}

pub fn immh(inst: RawInst) -> i32 {
    bits(inst, 31, 26) as i32
}

pub fn imml(inst: RawInst) -> i32 {
    bits(inst, 25, 20) as i32
}

/// Scale of a T-Head paired access: 3 for words, 4 for doublewords.
pub fn pair_shift(inst: RawInst) -> i32 {
    3 + bit(inst, 27) as i32
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_base_fields() {
        // add a0, a1, a2
        let inst = 0x00c58533;
        assert_eq!(rd(inst), 10);
        assert_eq!(rs1(inst), 11);
        assert_eq!(rs2(inst), 12);
        assert_eq!(opcode(inst), 0x33);
    }

    #[test]
    fn test_imm12_sign() {
        // addi a0, a0, -1
        assert_eq!(imm12(0xfff50513), -1);
        // addi a0, a0, 2047
        assert_eq!(imm12(0x7ff50513), 2047);
    }

    #[test]
    fn test_store_and_branch_immediates() {
        // sw a0, -4(sp)
        assert_eq!(simm12(0xfea12e23), -4);
        // beq a0, a1, -8
        assert_eq!(sbimm12(0xfeb50ce3), -8);
        // bne a0, zero, 2048
        assert_eq!(sbimm12(0x00051063 | 1 << 7), 2048);
    }

    #[test]
    fn test_jal_immediate() {
        // jal ra, 2048
        assert_eq!(jimm20(0x001000ef), 2048);
        // jal zero, -2
        assert_eq!(jimm20(0xfffff06f), -2);
    }

    #[test]
    fn test_upper_immediate() {
        // lui a0, 0x12345
        assert_eq!(imm20(0x12345537), 0x12345000);
        assert_eq!(imm20(0xfffff537), -4096);
    }

    #[test]
    fn test_compressed_immediates() {
        // c.addi16sp sp, -16
        assert_eq!(cimm16sp(0x717d), -16);
        // c.j -2
        assert_eq!(cimmj(0xbffd), -2);
        // c.beqz a0, -4
        assert_eq!(cimmb(0xdd75), -4);
        // c.addi4spn a0, sp, 1020
        assert_eq!(cimm4spn(0x1fe8), 1020);
        // c.lui a0, 0xfffff (imm = -4096)
        assert_eq!(cimmui(0x757d), -4096);
    }

    #[test]
    fn test_compressed_register_quads() {
        // c.lw a0, 0(a1): rs1' = a1, rd' = a0
        assert_eq!(crs1q(0x4188), 11);
        assert_eq!(crdq(0x4188), 10);
    }

    #[test]
    fn test_rv128_shift_widening() {
        // c.srli shamt field 0 means 64 on rv128
        let zero = 0x8001;
        assert_eq!(cimmshr6(zero, Xlen::Rv64), 0);
        assert_eq!(cimmshr6(zero, Xlen::Rv128), 64);
        // shamt field 0b100000 sign-extends to 96 on rv128
        let top = 0x9001;
        assert_eq!(cimmshr6(top, Xlen::Rv64), 32);
        assert_eq!(cimmshr6(top, Xlen::Rv128), 96);
        assert_eq!(cimmshl6(top, Xlen::Rv128), 32);
    }

    #[test]
    fn test_zcmp_stack_adjust() {
        // cm.push {ra}, -16 on rv32 and rv64
        let push_ra = 0xb842;
        assert_eq!(zcmp_rlist(push_ra), 4);
        assert_eq!(zcmp_stack_adj(push_ra, Xlen::Rv32), 16);
        assert_eq!(zcmp_stack_adj(push_ra, Xlen::Rv64), 16);
        // {ra, s0-s11} with spimm 3: rv64 = 112 + 48
        let push_all = 0xb8fe;
        assert_eq!(zcmp_rlist(push_all), 15);
        assert_eq!(zcmp_stack_adj(push_all, Xlen::Rv64), 160);
        assert_eq!(zcmp_stack_adj(push_all, Xlen::Rv32), 64 + 48);
    }

    #[test]
    fn test_zcmp_sregs() {
        // cm.mvsa01 s0, s1 and s2, s7
        assert_eq!(zcmp_r1s(0b000 << 7), 8);
        assert_eq!(zcmp_r1s(0b001 << 7), 9);
        assert_eq!(zcmp_r2s(0b010 << 2), 18);
        assert_eq!(zcmp_r2s(0b111 << 2), 23);
    }

    #[test]
    fn test_vector_immediates() {
        // vadd.vi v1, v2, -16
        let inst = 0x022831d7u64 | 0b10000 << 15;
        assert_eq!(vimm(inst), -16);
        assert!(vm(inst));
        // vsetvli zimm11 e32,m1,ta,ma = 0b00011010000
        assert_eq!(vzimm11(0x0d0572d7), 0b000_1101_0000);
    }
}
