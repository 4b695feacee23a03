//! Extension dispatcher.
//!
//! Tries the base tree first and then every enabled vendor tree in a
//! fixed order. The first decoder that returns anything but its catalog's
//! illegal opcode wins.

use rvdis_core::{IsaConfig, Xlen};
use tracing::trace;

use super::base;
use super::catalog::Opcode;
use super::fields::RawInst;
use super::vendor::{ventana, xthead};

/// One decode tree and the catalog it returns into.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum DecoderKind {
    Base,
    XTheadBa,
    XTheadBb,
    XTheadBs,
    XTheadCmo,
    XTheadCondMov,
    XTheadFMemIdx,
    XTheadFmv,
    XTheadMac,
    XTheadMemIdx,
    XTheadMemPair,
    XTheadSync,
    XVentanaCondOps,
}

impl DecoderKind {
    /// Decoders in priority order.
    pub const ORDER: [DecoderKind; 13] = [
        DecoderKind::Base,
        DecoderKind::XTheadBa,
        DecoderKind::XTheadBb,
        DecoderKind::XTheadBs,
        DecoderKind::XTheadCmo,
        DecoderKind::XTheadCondMov,
        DecoderKind::XTheadFMemIdx,
        DecoderKind::XTheadFmv,
        DecoderKind::XTheadMac,
        DecoderKind::XTheadMemIdx,
        DecoderKind::XTheadMemPair,
        DecoderKind::XTheadSync,
        DecoderKind::XVentanaCondOps,
    ];

    /// Guard predicate. T-Head trees also require the umbrella flag.
    pub fn enabled(self, config: &IsaConfig) -> bool {
        let thead = config.has_xthead();
        match self {
            DecoderKind::Base => true,
            DecoderKind::XTheadBa => thead && config.xtheadba,
            DecoderKind::XTheadBb => thead && config.xtheadbb,
            DecoderKind::XTheadBs => thead && config.xtheadbs,
            DecoderKind::XTheadCmo => thead && config.xtheadcmo,
            DecoderKind::XTheadCondMov => thead && config.xtheadcondmov,
            DecoderKind::XTheadFMemIdx => thead && config.xtheadfmemidx,
            DecoderKind::XTheadFmv => thead && config.xtheadfmv,
            DecoderKind::XTheadMac => thead && config.xtheadmac,
            DecoderKind::XTheadMemIdx => thead && config.xtheadmemidx,
            DecoderKind::XTheadMemPair => thead && config.xtheadmempair,
            DecoderKind::XTheadSync => thead && config.xtheadsync,
            DecoderKind::XVentanaCondOps => config.xventanacondops,
        }
    }

    /// Runs this decoder's tree without consulting its guard.
    pub fn decode(self, inst: RawInst, xlen: Xlen, config: &IsaConfig) -> Opcode {
        // Vendor encodings are all 32 bits wide.
        let word = inst as u32;
        match self {
            DecoderKind::Base => base::decode(inst, xlen, config).into(),
            DecoderKind::XTheadBa => xthead::decode_ba(word, xlen).into(),
            DecoderKind::XTheadBb => xthead::decode_bb(word, xlen).into(),
            DecoderKind::XTheadBs => xthead::decode_bs(word, xlen).into(),
            DecoderKind::XTheadCmo => xthead::decode_cmo(word, xlen).into(),
            DecoderKind::XTheadCondMov => xthead::decode_condmov(word, xlen).into(),
            DecoderKind::XTheadFMemIdx => xthead::decode_fmemidx(word, xlen).into(),
            DecoderKind::XTheadFmv => xthead::decode_fmv(word, xlen).into(),
            DecoderKind::XTheadMac => xthead::decode_mac(word, xlen).into(),
            DecoderKind::XTheadMemIdx => xthead::decode_memidx(word, xlen).into(),
            DecoderKind::XTheadMemPair => xthead::decode_mempair(word, xlen).into(),
            DecoderKind::XTheadSync => xthead::decode_sync(word, xlen).into(),
            DecoderKind::XVentanaCondOps => ventana::decode_condops(word, xlen).into(),
        }
    }
}

/// Selects the opcode for `inst` under `config`.
///
/// Returns the base catalog's illegal opcode when no enabled decoder
/// claims the word.
pub fn dispatch(inst: RawInst, xlen: Xlen, config: &IsaConfig) -> Opcode {
    for kind in DecoderKind::ORDER {
        if !kind.enabled(config) {
            continue;
        }
        let op = kind.decode(inst, xlen, config);
        if !op.is_illegal() {
            trace!(decoder = ?kind, opcode = %op, inst = format_args!("{inst:#x}"), "decoder accepted");
            return op;
        }
    }
    Opcode::ILLEGAL
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::riscv::opcodes::BaseOp;
    use crate::riscv::vendor::{TheadOp, VentanaOp};
    use rvdis_core::Extension;

    const OP_CUSTOM_0: u32 = 0x0b;
    const OP_CUSTOM_3: u32 = 0x7b;

    #[test]
    fn test_base_comes_first() {
        assert_eq!(DecoderKind::ORDER[0], DecoderKind::Base);
        let config = IsaConfig::default();
        for kind in DecoderKind::ORDER {
            assert_eq!(kind.enabled(&config), kind == DecoderKind::Base, "{kind:?}");
        }
    }

    #[test]
    fn test_guard_follows_config() {
        let ba = (12 << 20) | (11 << 15) | (1 << 12) | (10 << 7) | OP_CUSTOM_0;
        let base = IsaConfig::default();
        assert_eq!(dispatch(u64::from(ba), Xlen::Rv64, &base), Opcode::ILLEGAL);
        let with_ba = base.with(Extension::XTheadBa);
        assert_eq!(
            dispatch(u64::from(ba), Xlen::Rv64, &with_ba),
            Opcode::Thead(TheadOp::Addsl)
        );
        // enabling unrelated T-Head trees leaves the word unclaimed
        let others = IsaConfig::all_vendor().without(Extension::XTheadBa);
        assert_eq!(dispatch(u64::from(ba), Xlen::Rv64, &others), Opcode::ILLEGAL);
    }

    #[test]
    fn test_base_wins_over_vendor() {
        let config = IsaConfig::default().with(Extension::XVentanaCondOps);
        // remd a0, a1, a2 on RV128 shares custom-3 with vt.maskc
        let remd = (1 << 25) | (12 << 20) | (11 << 15) | (6 << 12) | (10 << 7) | OP_CUSTOM_3;
        assert_eq!(
            dispatch(u64::from(remd), Xlen::Rv128, &config),
            Opcode::Base(BaseOp::Remd)
        );
        let maskc = (12 << 20) | (11 << 15) | (6 << 12) | (10 << 7) | OP_CUSTOM_3;
        assert_eq!(
            dispatch(u64::from(maskc), Xlen::Rv128, &config),
            Opcode::Ventana(VentanaOp::Maskc)
        );
        assert_eq!(
            dispatch(u64::from(maskc), Xlen::Rv128, &IsaConfig::default()),
            Opcode::ILLEGAL
        );
    }

    #[test]
    fn test_vendor_trees_tried_in_order() {
        let config = IsaConfig::all_vendor();
        // th.mula a0, a1, a2 (XTheadMac) is not claimed by earlier trees
        let mula = (0b0010000 << 25) | (12 << 20) | (11 << 15) | (1 << 12) | (10 << 7) | OP_CUSTOM_0;
        assert_eq!(
            dispatch(u64::from(mula), Xlen::Rv64, &config),
            Opcode::Thead(TheadOp::Mula)
        );
        for kind in DecoderKind::ORDER {
            let op = kind.decode(u64::from(mula), Xlen::Rv64, &config);
            let claims = !op.is_illegal();
            assert_eq!(claims, kind == DecoderKind::XTheadMac, "{kind:?}");
        }
        let without = config.without(Extension::XTheadMac);
        assert_eq!(dispatch(u64::from(mula), Xlen::Rv64, &without), Opcode::ILLEGAL);
    }
}
