//! Instruction bit-layout shapes.
//!
//! A codec names which extractors populate which operand fields. The
//! mapping itself lives in [`super::operands`].

/// Encoding shape of an opcode.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub enum Codec {
    #[default]
    Illegal,
    None,

    // Base 32-bit shapes
    U,
    Uj,
    I,
    ISh5,
    ISh6,
    ISh7,
    ICsr,
    S,
    Sb,
    R,
    RM,
    R4M,
    RA,
    RL,
    RF,
    /// Zicbop: offset(rs1) with the low five immediate bits folded away.
    Prefetch,

    // Compressed shapes
    Cb,
    CbImm,
    CbSh6,
    Ci,
    CiSh6,
    Ci16sp,
    CiLwsp,
    CiLdsp,
    CiLqsp,
    CiLi,
    CiLui,
    CiNone,
    Ciw4spn,
    Cj,
    CjJal,
    ClLw,
    ClLd,
    ClLq,
    Cr,
    CrMv,
    CrJalr,
    CrJr,
    Cs,
    CsSw,
    CsSd,
    CsSq,
    CssSwsp,
    CssSdsp,
    CssSqsp,

    // Scalar crypto
    KBs,
    KRnum,

    // Zfa
    Fli,

    // Vector
    VR,
    VLdst,
    VI,
    VrorVi,
    Vsetvli,
    Vsetivli,

    // Zcb / Zcmp / Zcmt
    ZcbExt,
    ZcbMul,
    ZcbLb,
    ZcbLh,
    ZcmpPushPop,
    ZcmpMv,
    ZcmtJt,

    // Vendor shapes
    R2,
    R2Imm5,
    R2Imm6,
    RImm2,
    R2Immhl,
    R2Imm2Imm5,
    RegPair,
}

impl Codec {
    /// Every codec, in declaration order.
    pub const ALL: &'static [Codec] = &[
        Codec::Illegal,
        Codec::None,
        Codec::U,
        Codec::Uj,
        Codec::I,
        Codec::ISh5,
        Codec::ISh6,
        Codec::ISh7,
        Codec::ICsr,
        Codec::S,
        Codec::Sb,
        Codec::R,
        Codec::RM,
        Codec::R4M,
        Codec::RA,
        Codec::RL,
        Codec::RF,
        Codec::Prefetch,
        Codec::Cb,
        Codec::CbImm,
        Codec::CbSh6,
        Codec::Ci,
        Codec::CiSh6,
        Codec::Ci16sp,
        Codec::CiLwsp,
        Codec::CiLdsp,
        Codec::CiLqsp,
        Codec::CiLi,
        Codec::CiLui,
        Codec::CiNone,
        Codec::Ciw4spn,
        Codec::Cj,
        Codec::CjJal,
        Codec::ClLw,
        Codec::ClLd,
        Codec::ClLq,
        Codec::Cr,
        Codec::CrMv,
        Codec::CrJalr,
        Codec::CrJr,
        Codec::Cs,
        Codec::CsSw,
        Codec::CsSd,
        Codec::CsSq,
        Codec::CssSwsp,
        Codec::CssSdsp,
        Codec::CssSqsp,
        Codec::KBs,
        Codec::KRnum,
        Codec::Fli,
        Codec::VR,
        Codec::VLdst,
        Codec::VI,
        Codec::VrorVi,
        Codec::Vsetvli,
        Codec::Vsetivli,
        Codec::ZcbExt,
        Codec::ZcbMul,
        Codec::ZcbLb,
        Codec::ZcbLh,
        Codec::ZcmpPushPop,
        Codec::ZcmpMv,
        Codec::ZcmtJt,
        Codec::R2,
        Codec::R2Imm5,
        Codec::R2Imm6,
        Codec::RImm2,
        Codec::R2Immhl,
        Codec::R2Imm2Imm5,
        Codec::RegPair,
    ];

    /// Returns true for 16-bit shapes.
    pub fn is_compressed(self) -> bool {
        matches!(
            self,
            Codec::Cb
                | Codec::CbImm
                | Codec::CbSh6
                | Codec::Ci
                | Codec::CiSh6
                | Codec::Ci16sp
                | Codec::CiLwsp
                | Codec::CiLdsp
                | Codec::CiLqsp
                | Codec::CiLi
                | Codec::CiLui
                | Codec::CiNone
                | Codec::Ciw4spn
                | Codec::Cj
                | Codec::CjJal
                | Codec::ClLw
                | Codec::ClLd
                | Codec::ClLq
                | Codec::Cr
                | Codec::CrMv
                | Codec::CrJalr
                | Codec::CrJr
                | Codec::Cs
                | Codec::CsSw
                | Codec::CsSd
                | Codec::CsSq
                | Codec::CssSwsp
                | Codec::CssSdsp
                | Codec::CssSqsp
                | Codec::ZcbExt
                | Codec::ZcbMul
                | Codec::ZcbLb
                | Codec::ZcbLh
                | Codec::ZcmpPushPop
                | Codec::ZcmpMv
                | Codec::ZcmtJt
        )
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::collections::HashSet;

    #[test]
    fn test_all_is_unique() {
        let set: HashSet<Codec> = Codec::ALL.iter().copied().collect();
        assert_eq!(set.len(), Codec::ALL.len());
    }

    #[test]
    fn test_all_is_complete() {
        // Adding a variant without listing it in ALL trips this match.
        for &codec in Codec::ALL {
            let listed = match codec {
                Codec::Illegal | Codec::None => true,
                Codec::U | Codec::Uj | Codec::I | Codec::ISh5 | Codec::ISh6 | Codec::ISh7 => true,
                Codec::ICsr | Codec::S | Codec::Sb | Codec::R | Codec::RM | Codec::R4M => true,
                Codec::RA | Codec::RL | Codec::RF | Codec::Prefetch => true,
                Codec::KBs | Codec::KRnum | Codec::Fli => true,
                Codec::VR | Codec::VLdst | Codec::VI | Codec::VrorVi => true,
                Codec::Vsetvli | Codec::Vsetivli => true,
                Codec::R2 | Codec::R2Imm5 | Codec::R2Imm6 | Codec::RImm2 => true,
                Codec::R2Immhl | Codec::R2Imm2Imm5 | Codec::RegPair => true,
                c => c.is_compressed(),
            };
            assert!(listed, "{codec:?}");
        }
        assert_eq!(Codec::ALL.len(), 70);
    }
}
