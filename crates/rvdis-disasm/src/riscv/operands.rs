//! Decoded instruction record and the operand materializer.

use rvdis_core::register::x::{RA, SP};
use rvdis_core::Xlen;

use super::catalog::Opcode;
use super::codec::Codec;
use super::fields::{self, RawInst};

/// One instruction as it moves through the pipeline.
///
/// Register fields hold raw 5-bit indices; whether they name integer,
/// float or vector registers is decided by the format template.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct DecodedInstruction {
    pub pc: u64,
    pub inst: RawInst,
    pub op: Opcode,
    pub codec: Codec,
    pub rd: u8,
    pub rs1: u8,
    pub rs2: u8,
    pub rs3: u8,
    pub imm: i32,
    /// Second immediate of two-part vendor encodings.
    pub imm1: i32,
    pub csr: u16,
    pub rm: u8,
    pub pred: u8,
    pub succ: u8,
    pub aq: bool,
    pub rl: bool,
    /// `true` for unmasked vector operations.
    pub vm: bool,
    /// vtype immediate of `vsetvli`/`vsetivli`.
    pub vzimm: u16,
    pub bs: u8,
    pub rnum: u8,
    pub rlist: u8,
}

impl DecodedInstruction {
    pub fn new(pc: u64, inst: RawInst) -> Self {
        Self {
            pc,
            inst,
            ..Self::default()
        }
    }

    /// Resets every operand field, keeping pc, raw bits, opcode and codec.
    pub fn clear_operands(&mut self) {
        *self = Self {
            pc: self.pc,
            inst: self.inst,
            op: self.op,
            codec: self.codec,
            ..Self::default()
        };
    }
}

/// Fills the operand fields of `dec` according to its codec.
///
/// Fields a codec does not name are left at zero.
pub fn materialize(dec: &mut DecodedInstruction, xlen: Xlen) {
    dec.clear_operands();
    let inst = dec.inst;
    match dec.codec {
        Codec::Illegal | Codec::None | Codec::CiNone => {}

        Codec::U => {
            dec.rd = fields::rd(inst);
            dec.imm = fields::imm20(inst);
        }
        Codec::Uj => {
            dec.rd = fields::rd(inst);
            dec.imm = fields::jimm20(inst);
        }
        Codec::I => {
            dec.rd = fields::rd(inst);
            dec.rs1 = fields::rs1(inst);
            dec.imm = fields::imm12(inst);
        }
        Codec::ISh5 => {
            dec.rd = fields::rd(inst);
            dec.rs1 = fields::rs1(inst);
            dec.imm = fields::shamt5(inst);
        }
        Codec::ISh6 => {
            dec.rd = fields::rd(inst);
            dec.rs1 = fields::rs1(inst);
            dec.imm = fields::shamt6(inst);
        }
        Codec::ISh7 => {
            dec.rd = fields::rd(inst);
            dec.rs1 = fields::rs1(inst);
            dec.imm = fields::shamt7(inst);
        }
        Codec::ICsr => {
            dec.rd = fields::rd(inst);
            dec.rs1 = fields::rs1(inst);
            dec.csr = fields::csr12(inst);
        }
        Codec::S => {
            dec.rs1 = fields::rs1(inst);
            dec.rs2 = fields::rs2(inst);
            dec.imm = fields::simm12(inst);
        }
        Codec::Sb => {
            dec.rs1 = fields::rs1(inst);
            dec.rs2 = fields::rs2(inst);
            dec.imm = fields::sbimm12(inst);
        }
        Codec::R => read_r(dec),
        Codec::RM => {
            read_r(dec);
            dec.rm = fields::rm(inst);
        }
        Codec::R4M => {
            read_r(dec);
            dec.rs3 = fields::rs3(inst);
            dec.rm = fields::rm(inst);
        }
        Codec::RA => {
            read_r(dec);
            dec.aq = fields::aq(inst);
            dec.rl = fields::rl(inst);
        }
        Codec::RL => {
            dec.rd = fields::rd(inst);
            dec.rs1 = fields::rs1(inst);
            dec.aq = fields::aq(inst);
            dec.rl = fields::rl(inst);
        }
        Codec::RF => {
            dec.pred = fields::pred(inst);
            dec.succ = fields::succ(inst);
        }
        Codec::Prefetch => {
            dec.rs1 = fields::rs1(inst);
            dec.imm = fields::imm12(inst) & !0x1f;
        }

        Codec::Cb => {
            dec.rs1 = fields::crs1q(inst);
            dec.imm = fields::cimmb(inst);
        }
        Codec::CbImm => {
            dec.rd = fields::crs1q(inst);
            dec.rs1 = dec.rd;
            dec.imm = fields::cimmi(inst);
        }
        Codec::CbSh6 => {
            dec.rd = fields::crs1q(inst);
            dec.rs1 = dec.rd;
            dec.imm = fields::cimmshr6(inst, xlen);
        }
        Codec::Ci => {
            dec.rd = fields::crd(inst);
            dec.rs1 = dec.rd;
            dec.imm = fields::cimmi(inst);
        }
        Codec::CiSh6 => {
            dec.rd = fields::crd(inst);
            dec.rs1 = dec.rd;
            dec.imm = fields::cimmshl6(inst, xlen);
        }
        Codec::Ci16sp => {
            dec.rd = SP;
            dec.rs1 = SP;
            dec.imm = fields::cimm16sp(inst);
        }
        Codec::CiLwsp => {
            dec.rd = fields::crd(inst);
            dec.rs1 = SP;
            dec.imm = fields::cimmlwsp(inst);
        }
        Codec::CiLdsp => {
            dec.rd = fields::crd(inst);
            dec.rs1 = SP;
            dec.imm = fields::cimmldsp(inst);
        }
        Codec::CiLqsp => {
            dec.rd = fields::crd(inst);
            dec.rs1 = SP;
            dec.imm = fields::cimmlqsp(inst);
        }
        Codec::CiLi => {
            dec.rd = fields::crd(inst);
            dec.imm = fields::cimmi(inst);
        }
        Codec::CiLui => {
            dec.rd = fields::crd(inst);
            dec.imm = fields::cimmui(inst);
        }
        Codec::Ciw4spn => {
            dec.rd = fields::crdq(inst);
            dec.rs1 = SP;
            dec.imm = fields::cimm4spn(inst);
        }
        Codec::Cj => dec.imm = fields::cimmj(inst),
        Codec::CjJal => {
            dec.rd = RA;
            dec.imm = fields::cimmj(inst);
        }
        Codec::ClLw => read_cl(dec, fields::cimmw(inst)),
        Codec::ClLd => read_cl(dec, fields::cimmd(inst)),
        Codec::ClLq => read_cl(dec, fields::cimmq(inst)),
        Codec::Cr => {
            dec.rd = fields::crd(inst);
            dec.rs1 = dec.rd;
            dec.rs2 = fields::crs2(inst);
        }
        Codec::CrMv => {
            dec.rd = fields::crd(inst);
            dec.rs1 = fields::crs2(inst);
        }
        Codec::CrJalr => {
            dec.rd = RA;
            dec.rs1 = fields::crd(inst);
        }
        Codec::CrJr => dec.rs1 = fields::crd(inst),
        Codec::Cs => {
            dec.rd = fields::crs1q(inst);
            dec.rs1 = dec.rd;
            dec.rs2 = fields::crs2q(inst);
        }
        Codec::CsSw => read_cs(dec, fields::cimmw(inst)),
        Codec::CsSd => read_cs(dec, fields::cimmd(inst)),
        Codec::CsSq => read_cs(dec, fields::cimmq(inst)),
        Codec::CssSwsp => read_css(dec, fields::cimmswsp(inst)),
        Codec::CssSdsp => read_css(dec, fields::cimmsdsp(inst)),
        Codec::CssSqsp => read_css(dec, fields::cimmsqsp(inst)),

        Codec::KBs => {
            read_r(dec);
            dec.bs = fields::bs(inst);
        }
        Codec::KRnum => {
            dec.rd = fields::rd(inst);
            dec.rs1 = fields::rs1(inst);
            dec.rnum = fields::rnum(inst);
        }
        Codec::Fli => {
            // rs1 holds the constant table index
            dec.rd = fields::rd(inst);
            dec.rs1 = fields::rs1(inst);
        }

        Codec::VR | Codec::VLdst => {
            read_r(dec);
            dec.vm = fields::vm(inst);
        }
        Codec::VI => {
            dec.rd = fields::rd(inst);
            dec.rs2 = fields::rs2(inst);
            dec.imm = fields::vimm(inst);
            dec.vm = fields::vm(inst);
        }
        Codec::VrorVi => {
            dec.rd = fields::rd(inst);
            dec.rs2 = fields::rs2(inst);
            dec.imm = fields::vimm6(inst);
            dec.vm = fields::vm(inst);
        }
        Codec::Vsetvli => {
            dec.rd = fields::rd(inst);
            dec.rs1 = fields::rs1(inst);
            dec.vzimm = fields::vzimm11(inst);
        }
        Codec::Vsetivli => {
            dec.rd = fields::rd(inst);
            dec.imm = i32::from(fields::rs1(inst));
            dec.vzimm = fields::vzimm10(inst);
        }

        Codec::ZcbExt => {
            dec.rd = fields::crs1q(inst);
            dec.rs1 = dec.rd;
        }
        Codec::ZcbMul => {
            dec.rd = fields::crs1q(inst);
            dec.rs1 = dec.rd;
            dec.rs2 = fields::crs2q(inst);
        }
        Codec::ZcbLb => read_zcb_mem(dec, fields::zcb_uimm_b(inst)),
        Codec::ZcbLh => read_zcb_mem(dec, fields::zcb_uimm_h(inst)),
        Codec::ZcmpPushPop => {
            dec.rlist = fields::zcmp_rlist(inst);
            dec.imm = fields::zcmp_stack_adj(inst, xlen);
        }
        Codec::ZcmpMv => {
            dec.rs1 = fields::zcmp_r1s(inst);
            dec.rs2 = fields::zcmp_r2s(inst);
        }
        Codec::ZcmtJt => dec.imm = fields::zcmt_index(inst),

        Codec::R2 => {
            dec.rd = fields::rd(inst);
            dec.rs1 = fields::rs1(inst);
        }
        Codec::R2Imm5 => {
            dec.rd = fields::rd(inst);
            dec.rs1 = fields::rs1(inst);
            dec.imm = fields::imm5(inst);
        }
        Codec::R2Imm6 => {
            dec.rd = fields::rd(inst);
            dec.rs1 = fields::rs1(inst);
            dec.imm = fields::imm6(inst);
        }
        Codec::RImm2 => {
            read_r(dec);
            dec.imm = fields::imm2(inst);
        }
        Codec::R2Immhl => {
            dec.rd = fields::rd(inst);
            dec.rs1 = fields::rs1(inst);
            dec.imm = fields::immh(inst);
            dec.imm1 = fields::imml(inst);
        }
        Codec::R2Imm2Imm5 => {
            dec.rd = fields::rd(inst);
            dec.rs1 = fields::rs1(inst);
            dec.imm = fields::simm5(inst);
            dec.imm1 = fields::imm2(inst);
        }
        Codec::RegPair => {
            read_r(dec);
            dec.imm = fields::imm2(inst);
            dec.imm1 = fields::pair_shift(inst);
        }
    }
}

fn read_r(dec: &mut DecodedInstruction) {
    dec.rd = fields::rd(dec.inst);
    dec.rs1 = fields::rs1(dec.inst);
    dec.rs2 = fields::rs2(dec.inst);
}

fn read_cl(dec: &mut DecodedInstruction, imm: i32) {
    dec.rd = fields::crdq(dec.inst);
    dec.rs1 = fields::crs1q(dec.inst);
    dec.imm = imm;
}

fn read_cs(dec: &mut DecodedInstruction, imm: i32) {
    dec.rs1 = fields::crs1q(dec.inst);
    dec.rs2 = fields::crs2q(dec.inst);
    dec.imm = imm;
}

fn read_css(dec: &mut DecodedInstruction, imm: i32) {
    dec.rs1 = SP;
    dec.rs2 = fields::crs2(dec.inst);
    dec.imm = imm;
}

/// Zcb byte/halfword accesses: rd for loads and rs2 for stores share bits 4:2.
fn read_zcb_mem(dec: &mut DecodedInstruction, imm: i32) {
    dec.rd = fields::crdq(dec.inst);
    dec.rs2 = dec.rd;
    dec.rs1 = fields::crs1q(dec.inst);
    dec.imm = imm;
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::riscv::opcodes::BaseOp;

    fn decoded(op: BaseOp, inst: u32, xlen: Xlen) -> DecodedInstruction {
        let mut dec = DecodedInstruction::new(0x1000, u64::from(inst));
        dec.op = Opcode::Base(op);
        dec.codec = dec.op.codec();
        materialize(&mut dec, xlen);
        dec
    }

    #[test]
    fn test_every_codec_materializes() {
        for &codec in Codec::ALL {
            for inst in [0u64, 0xffff_ffff, 0x1234_5678] {
                let mut dec = DecodedInstruction::new(0, inst);
                dec.codec = codec;
                for xlen in Xlen::ALL {
                    materialize(&mut dec, xlen);
                    assert!(dec.rd < 32 && dec.rs1 < 32 && dec.rs2 < 32 && dec.rs3 < 32, "{codec:?}");
                    assert_eq!(dec.codec, codec);
                }
            }
        }
    }

    #[test]
    fn test_operandless_codecs_clear_fields() {
        let mut dec = DecodedInstruction::new(0, 0xffff_ffff);
        dec.codec = Codec::I;
        materialize(&mut dec, Xlen::Rv64);
        assert_ne!(dec.rd, 0);
        dec.codec = Codec::Illegal;
        materialize(&mut dec, Xlen::Rv64);
        assert_eq!(dec, DecodedInstruction::new(0, 0xffff_ffff));
    }

    #[test]
    fn test_base_shapes() {
        // addi a0, a1, -1
        let dec = decoded(BaseOp::Addi, 0xfff58513, Xlen::Rv64);
        assert_eq!((dec.rd, dec.rs1, dec.imm), (10, 11, -1));
        // sw a1, 8(a0)
        let dec = decoded(BaseOp::Sw, 0x00b52423, Xlen::Rv64);
        assert_eq!((dec.rs1, dec.rs2, dec.imm, dec.rd), (10, 11, 8, 0));
        // csrrs a0, cycle, x0
        let dec = decoded(BaseOp::Csrrs, 0xc0002573, Xlen::Rv64);
        assert_eq!((dec.rd, dec.rs1, dec.csr), (10, 0, 0xc00));
        // fence iorw, iorw
        let dec = decoded(BaseOp::Fence, 0x0ff0000f, Xlen::Rv64);
        assert_eq!((dec.pred, dec.succ), (0xf, 0xf));
        // prefetch.w 64(a0) drops the low offset bits
        let dec = decoded(BaseOp::PrefetchW, 0x04356013, Xlen::Rv64);
        assert_eq!((dec.rs1, dec.imm), (10, 64));
    }

    #[test]
    fn test_compressed_shapes() {
        // c.addi16sp sp, -48
        let dec = decoded(BaseOp::CAddi16sp, 0x7179, Xlen::Rv64);
        assert_eq!((dec.rd, dec.rs1, dec.imm), (2, 2, -48));
        // c.jr ra
        let dec = decoded(BaseOp::CJr, 0x8082, Xlen::Rv64);
        assert_eq!((dec.rd, dec.rs1, dec.imm), (0, 1, 0));
        // c.mv a0, a1
        let dec = decoded(BaseOp::CMv, 0x852e, Xlen::Rv64);
        assert_eq!((dec.rd, dec.rs1, dec.rs2), (10, 11, 0));
        // c.jalr a1 links through ra
        let dec = decoded(BaseOp::CJalr, 0x9582, Xlen::Rv64);
        assert_eq!((dec.rd, dec.rs1), (1, 11));
    }

    #[test]
    fn test_push_pop_shapes() {
        // cm.push {ra}, -16
        let dec = decoded(BaseOp::CmPush, 0xb842, Xlen::Rv32);
        assert_eq!((dec.rlist, dec.imm), (4, 16));
        // cm.mvsa01 s0, s1
        let dec = decoded(BaseOp::CmMvsa01, 0xac26, Xlen::Rv64);
        assert_eq!((dec.rs1, dec.rs2), (8, 9));
    }

    #[test]
    fn test_vector_shapes() {
        // vsetvli a0, a1, e32, m1, ta, ma
        let dec = decoded(BaseOp::Vsetvli, 0x0d05f557, Xlen::Rv64);
        assert_eq!((dec.rd, dec.rs1, dec.vzimm), (10, 11, 0xd0));
        // vadd.vi v1, v2, -1
        let dec = decoded(BaseOp::VaddVi, 0x022fb0d7, Xlen::Rv64);
        assert_eq!((dec.rd, dec.rs2, dec.imm, dec.vm), (1, 2, -1, true));
    }
}
