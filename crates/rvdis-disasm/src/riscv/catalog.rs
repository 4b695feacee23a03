//! Opcode catalogs and their descriptors.
//!
//! There are three independent numbering spaces. Each starts at
//! `Illegal` and an [`Opcode`] always carries which one it belongs to.

use std::fmt;

use rvdis_core::Xlen;

use super::codec::Codec;
use super::opcodes::BaseOp;
use super::vendor::{TheadOp, VentanaOp};

/// Which catalog an opcode was drawn from.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Catalog {
    Base,
    Thead,
    Ventana,
}

/// Static facts about one opcode.
#[derive(Debug)]
pub struct OpcodeDescriptor<Op: 'static> {
    pub name: &'static str,
    pub codec: Codec,
    pub format: &'static str,
    /// Rewrites tried in order; empty for opcodes without pseudo forms.
    pub pseudo: &'static [PseudoRule<Op>],
    /// Canonical forms of a compressed opcode, one per width.
    pub decomp: Option<Decompress<Op>>,
}

/// Expansion targets of a compressed opcode.
#[derive(Debug, Clone, Copy)]
pub struct Decompress<Op> {
    /// Indexed by [`Xlen::index`]; `Illegal` means "keep the compressed form".
    pub targets: [Op; 3],
    /// The expansion is reserved when the immediate is zero.
    pub imm_nonzero: bool,
}

impl<Op: Copy> Decompress<Op> {
    pub fn target(&self, xlen: Xlen) -> Op {
        self.targets[xlen.index()]
    }
}

/// One candidate rewrite of a canonical opcode.
#[derive(Debug)]
pub struct PseudoRule<Op: 'static> {
    pub op: Op,
    pub constraints: &'static [Constraint],
}

/// Operand test used by pseudo rules.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Constraint {
    RdEqX0,
    RdEqRa,
    Rs1EqX0,
    Rs1EqRa,
    Rs2EqX0,
    Rs2EqRs1,
    RdEqRs1,
    ImmEqZero,
    ImmEqP1,
    ImmEqN1,
    CsrEq(u16),
    /// Vector operation without a v0 mask.
    Unmasked,
}

/// Behaviour shared by every catalog enum.
pub trait OpcodeTable: Copy + Eq + fmt::Debug + 'static {
    const CATALOG: Catalog;
    const ILLEGAL: Self;

    fn descriptor(self) -> &'static OpcodeDescriptor<Self>;

    fn all() -> &'static [Self];

    fn is_illegal(self) -> bool {
        self == Self::ILLEGAL
    }
}

/// An opcode tagged with its catalog.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Opcode {
    Base(BaseOp),
    Thead(TheadOp),
    Ventana(VentanaOp),
}

impl Opcode {
    pub const ILLEGAL: Opcode = Opcode::Base(BaseOp::Illegal);

    pub fn catalog(self) -> Catalog {
        match self {
            Opcode::Base(_) => Catalog::Base,
            Opcode::Thead(_) => Catalog::Thead,
            Opcode::Ventana(_) => Catalog::Ventana,
        }
    }

    pub fn name(self) -> &'static str {
        match self {
            Opcode::Base(op) => op.descriptor().name,
            Opcode::Thead(op) => op.descriptor().name,
            Opcode::Ventana(op) => op.descriptor().name,
        }
    }

    pub fn codec(self) -> Codec {
        match self {
            Opcode::Base(op) => op.descriptor().codec,
            Opcode::Thead(op) => op.descriptor().codec,
            Opcode::Ventana(op) => op.descriptor().codec,
        }
    }

    pub fn format(self) -> &'static str {
        match self {
            Opcode::Base(op) => op.descriptor().format,
            Opcode::Thead(op) => op.descriptor().format,
            Opcode::Ventana(op) => op.descriptor().format,
        }
    }

    pub fn is_illegal(self) -> bool {
        match self {
            Opcode::Base(op) => op.is_illegal(),
            Opcode::Thead(op) => op.is_illegal(),
            Opcode::Ventana(op) => op.is_illegal(),
        }
    }
}

impl Default for Opcode {
    fn default() -> Self {
        Opcode::ILLEGAL
    }
}

impl From<BaseOp> for Opcode {
    fn from(op: BaseOp) -> Self {
        Opcode::Base(op)
    }
}

impl From<TheadOp> for Opcode {
    fn from(op: TheadOp) -> Self {
        Opcode::Thead(op)
    }
}

impl From<VentanaOp> for Opcode {
    fn from(op: VentanaOp) -> Self {
        Opcode::Ventana(op)
    }
}

impl fmt::Display for Opcode {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::collections::HashSet;

    fn check_catalog<Op: OpcodeTable + std::hash::Hash>() {
        let all = Op::all();
        assert_eq!(all[0], Op::ILLEGAL);
        for &op in all {
            let desc = op.descriptor();
            assert!(!desc.name.is_empty());
            assert!(desc.format.starts_with('O'), "{op:?}: {}", desc.format);
            // Pseudo forms never carry pseudo tables of their own.
            for rule in desc.pseudo {
                assert!(rule.op.descriptor().pseudo.is_empty(), "{op:?} -> {:?}", rule.op);
                assert!(rule.op.descriptor().decomp.is_none());
            }
        }
    }

    #[test]
    fn test_base_catalog_shape() {
        check_catalog::<BaseOp>();
        assert!(BaseOp::ALL.len() > 700, "{}", BaseOp::ALL.len());
    }

    #[test]
    fn test_vendor_catalog_shape() {
        check_catalog::<TheadOp>();
        check_catalog::<VentanaOp>();
        assert_eq!(Opcode::Thead(TheadOp::Illegal).name(), "th.illegal");
        assert_eq!(Opcode::Ventana(VentanaOp::Illegal).name(), "vt.illegal");
    }

    #[test]
    fn test_illegal_descriptor() {
        let op = Opcode::default();
        assert!(op.is_illegal());
        assert_eq!(op.name(), "illegal");
        assert_eq!(op.codec(), Codec::Illegal);
        assert_eq!(op.catalog(), Catalog::Base);
    }

    #[test]
    fn test_decompression_targets_are_canonical() {
        for &op in BaseOp::ALL {
            if let Some(decomp) = op.descriptor().decomp {
                assert!(op.descriptor().codec.is_compressed(), "{op:?}");
                for target in decomp.targets {
                    let desc = target.descriptor();
                    assert!(desc.decomp.is_none(), "{op:?} -> {target:?}");
                    assert!(!desc.codec.is_compressed(), "{op:?} -> {target:?}");
                }
            }
        }
    }

    #[test]
    fn test_every_codec_is_used() {
        let mut used: HashSet<Codec> = BaseOp::ALL.iter().map(|op| op.descriptor().codec).collect();
        used.extend(TheadOp::ALL.iter().map(|op| op.descriptor().codec));
        used.extend(VentanaOp::ALL.iter().map(|op| op.descriptor().codec));
        for codec in Codec::ALL {
            assert!(used.contains(codec), "{codec:?} has no opcode");
        }
    }
}
