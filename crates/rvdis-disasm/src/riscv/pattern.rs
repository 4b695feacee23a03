//! Mask/value patterns for flat decode tables.
//!
//! Where a decode tree branches flat over a handful of subfields it is
//! written as a table of `(Pattern, opcode)` entries scanned in order.
//! Patterns optionally restrict the base widths they apply to, so that
//! encodings which alias between RV32, RV64 and RV128 can share a table.

use rvdis_core::Xlen;

const RV32: u8 = 1 << 0;
const RV64: u8 = 1 << 1;
const RV128: u8 = 1 << 2;
const ANY_WIDTH: u8 = RV32 | RV64 | RV128;

/// A set of fixed bits plus the widths the encoding exists under.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Pattern {
    mask: u32,
    bits: u32,
    widths: u8,
}

#[inline]
const fn field_mask(hi: u32, lo: u32) -> u32 {
    (((1u64 << (hi - lo + 1)) - 1) << lo) as u32
}

impl Pattern {
    /// A pattern with an explicit mask and value, valid under every width.
    pub const fn new(mask: u32, bits: u32) -> Self {
        Self {
            mask,
            bits: bits & mask,
            widths: ANY_WIDTH,
        }
    }

    /// Matches exactly one instruction word.
    pub const fn word(bits: u32) -> Self {
        Self::new(u32::MAX, bits)
    }

    /// A pattern fixing only the 7-bit major opcode.
    pub const fn opcode(op: u32) -> Self {
        Self::new(0x7f, op)
    }

    /// Fixes bits `hi..=lo` to `value`, replacing any earlier constraint on them.
    pub const fn field(self, hi: u32, lo: u32, value: u32) -> Self {
        let m = field_mask(hi, lo);
        Self {
            mask: self.mask | m,
            bits: (self.bits & !m) | ((value << lo) & m),
            widths: self.widths,
        }
    }

    pub const fn rd(self, value: u32) -> Self {
        self.field(11, 7, value)
    }

    pub const fn funct3(self, value: u32) -> Self {
        self.field(14, 12, value)
    }

    pub const fn rs1(self, value: u32) -> Self {
        self.field(19, 15, value)
    }

    pub const fn rs2(self, value: u32) -> Self {
        self.field(24, 20, value)
    }

    pub const fn funct7(self, value: u32) -> Self {
        self.field(31, 25, value)
    }

    pub const fn funct6(self, value: u32) -> Self {
        self.field(31, 26, value)
    }

    pub const fn funct5(self, value: u32) -> Self {
        self.field(31, 27, value)
    }

    /// Vector mask bit (25).
    pub const fn vm(self, value: u32) -> Self {
        self.field(25, 25, value)
    }

    pub const fn imm12(self, value: u32) -> Self {
        self.field(31, 20, value)
    }

    pub const fn rv32(self) -> Self {
        self.only(RV32)
    }

    /// RV64 exactly; use [`Pattern::rv64_up`] for RV64 and RV128.
    pub const fn rv64(self) -> Self {
        self.only(RV64)
    }

    pub const fn rv128(self) -> Self {
        self.only(RV128)
    }

    pub const fn rv64_up(self) -> Self {
        self.only(RV64 | RV128)
    }

    pub const fn below_rv128(self) -> Self {
        self.only(RV32 | RV64)
    }

    const fn only(self, widths: u8) -> Self {
        Self {
            mask: self.mask,
            bits: self.bits,
            widths,
        }
    }

    #[inline]
    pub fn matches(self, inst: u32, xlen: Xlen) -> bool {
        inst & self.mask == self.bits && self.widths & (1 << xlen.index()) != 0
    }

    /// Some word under some width matches both patterns.
    pub fn overlaps(self, other: Pattern) -> bool {
        let common = self.mask & other.mask;
        self.bits & common == other.bits & common && self.widths & other.widths != 0
    }

    /// Every word `self` matches is also matched by `other`, and `self`
    /// is strictly narrower.
    pub fn refines(self, other: Pattern) -> bool {
        let wider = self.mask & other.mask == other.mask
            && self.bits & other.mask == other.bits
            && self.widths & other.widths == self.widths;
        wider && self != other
    }
}

/// Returns the first entry of `table` matching `inst` under `xlen`.
#[inline]
pub fn lookup<Op: Copy>(table: &[(Pattern, Op)], inst: u32, xlen: Xlen) -> Option<Op> {
    table
        .iter()
        .find(|(pattern, _)| pattern.matches(inst, xlen))
        .map(|&(_, op)| op)
}

/// Panics when two entries of a table claim the same word.
///
/// Overlap is tolerated only when the earlier entry is a strict refinement
/// of the later one (`zext.h` carved out of `pack`, `prefetch.*` out of
/// `ori`); the earlier entry then shadows part of the later one on purpose.
#[cfg(test)]
pub fn assert_partition<Op: std::fmt::Debug>(table: &[(Pattern, Op)]) {
    for (i, (first, first_op)) in table.iter().enumerate() {
        for (second, second_op) in &table[i + 1..] {
            assert!(
                !second.refines(*first) && first != second,
                "{second_op:?} is shadowed by {first_op:?}"
            );
            if first.overlaps(*second) {
                assert!(
                    first.refines(*second),
                    "{first_op:?} {first:x?} overlaps {second_op:?} {second:x?}"
                );
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_field_replaces_previous_value() {
        let p = Pattern::opcode(0x13).funct3(7).funct3(1);
        assert!(p.matches(0x0000_1013, Xlen::Rv64));
        assert!(!p.matches(0x0000_7013, Xlen::Rv64));
    }

    #[test]
    fn test_width_restriction() {
        let p = Pattern::opcode(0x3b).rv64_up();
        assert!(!p.matches(0x3b, Xlen::Rv32));
        assert!(p.matches(0x3b, Xlen::Rv64));
        assert!(p.matches(0x3b, Xlen::Rv128));
        assert!(!Pattern::opcode(0x3b).rv64().matches(0x3b, Xlen::Rv128));
    }

    #[test]
    fn test_overlap_and_refinement() {
        let pack = Pattern::opcode(0x33).funct3(4).funct7(4);
        let zext_h = pack.rs2(0).rv32();
        let xor = Pattern::opcode(0x33).funct3(4).funct7(0);
        assert!(zext_h.overlaps(pack));
        assert!(zext_h.refines(pack));
        assert!(!pack.refines(zext_h));
        assert!(!xor.overlaps(pack));
        // Same bits under disjoint widths never collide.
        assert!(!zext_h.overlaps(pack.rv64()));
    }

    #[test]
    fn test_lookup_takes_first_match() {
        let table = [
            (Pattern::word(0x13), "nop"),
            (Pattern::opcode(0x13).funct3(0), "addi"),
        ];
        assert_partition(&table);
        assert_eq!(lookup(&table, 0x13, Xlen::Rv32), Some("nop"));
        assert_eq!(lookup(&table, 0x0010_0093, Xlen::Rv32), Some("addi"));
        assert_eq!(lookup(&table, 0x33, Xlen::Rv32), None);
    }

    #[test]
    #[should_panic(expected = "shadowed")]
    fn test_partition_rejects_shadowed_entry() {
        let table = [(Pattern::opcode(0x13), "a"), (Pattern::word(0x13), "b")];
        assert_partition(&table);
    }
}
