//! RISC-V V (Vector) extension decode tables.
//!
//! Covers RVV 1.0 configuration, loads and stores, and the integer,
//! fixed-point, float, mask, reduction and permutation arithmetic under
//! OP-V, plus the Zvbb bit-manipulation subset. Segment loads and stores
//! (`nf != 0` outside the whole-register forms) are not decoded.

use rvdis_core::Xlen;

use super::float::{OP_LOAD_FP, OP_STORE_FP};
use super::opcodes::BaseOp;
use super::pattern::{lookup, Pattern};

pub const OP_V: u32 = 0b1010111; // 0x57 - Vector arithmetic and configuration

// OP-V funct3 categories
const OPIVV: u32 = 0b000;
const OPFVV: u32 = 0b001;
const OPMVV: u32 = 0b010;
const OPIVI: u32 = 0b011;
const OPIVX: u32 = 0b100;
const OPFVF: u32 = 0b101;
const OPMVX: u32 = 0b110;
const OPCFG: u32 = 0b111;

// Memory addressing modes (mop, bits 27:26)
const MOP_UNIT: u32 = 0b00;
const MOP_UNORDERED: u32 = 0b01;
const MOP_STRIDED: u32 = 0b10;
const MOP_ORDERED: u32 = 0b11;

// lumop / sumop values in the rs2 field
const LUMOP_WHOLE: u32 = 0b01000;

type Table = &'static [(Pattern, BaseOp)];

/// nf, mew and mop (bits 31:26) with the given addressing mode.
const fn mem(op: u32, f3: u32, nf: u32, mop: u32) -> Pattern {
    Pattern::opcode(op).funct3(f3).field(31, 26, (nf << 3) | mop)
}

const fn unit_load(f3: u32) -> Pattern {
    mem(OP_LOAD_FP, f3, 0, MOP_UNIT).rs2(0)
}

const fn strided_load(f3: u32) -> Pattern {
    mem(OP_LOAD_FP, f3, 0, MOP_STRIDED)
}

const fn indexed_load(f3: u32, mop: u32) -> Pattern {
    mem(OP_LOAD_FP, f3, 0, mop)
}

const fn whole_load(f3: u32, nf: u32) -> Pattern {
    mem(OP_LOAD_FP, f3, nf, MOP_UNIT).rs2(LUMOP_WHOLE).vm(1)
}

const fn unit_store(f3: u32) -> Pattern {
    mem(OP_STORE_FP, f3, 0, MOP_UNIT).rs2(0)
}

const fn strided_store(f3: u32) -> Pattern {
    mem(OP_STORE_FP, f3, 0, MOP_STRIDED)
}

const fn indexed_store(f3: u32, mop: u32) -> Pattern {
    mem(OP_STORE_FP, f3, 0, mop)
}

const fn whole_store(nf: u32) -> Pattern {
    mem(OP_STORE_FP, 0, nf, MOP_UNIT).rs2(LUMOP_WHOLE).vm(1)
}

const fn arith(f3: u32, funct6: u32) -> Pattern {
    Pattern::opcode(OP_V).funct3(f3).funct6(funct6)
}

const fn opivv(funct6: u32) -> Pattern {
    arith(OPIVV, funct6)
}

const fn opfvv(funct6: u32) -> Pattern {
    arith(OPFVV, funct6)
}

const fn opmvv(funct6: u32) -> Pattern {
    arith(OPMVV, funct6)
}

const fn opivi(funct6: u32) -> Pattern {
    arith(OPIVI, funct6)
}

const fn opivx(funct6: u32) -> Pattern {
    arith(OPIVX, funct6)
}

const fn opfvf(funct6: u32) -> Pattern {
    arith(OPFVF, funct6)
}

const fn opmvx(funct6: u32) -> Pattern {
    arith(OPMVX, funct6)
}

/// `vror.vi` takes the sixth immediate bit from funct6[0].
const fn vror_vi() -> Pattern {
    Pattern::opcode(OP_V).funct3(OPIVI).field(31, 27, 0b01010)
}

const VSETVLI: Pattern = Pattern::opcode(OP_V).funct3(OPCFG).field(31, 31, 0);
const VSETIVLI: Pattern = Pattern::opcode(OP_V).funct3(OPCFG).field(31, 30, 0b11);
const VSETVL: Pattern = Pattern::opcode(OP_V).funct3(OPCFG).funct7(0b1000000);

/// Returns true if a LOAD-FP/STORE-FP width code selects a vector element width.
pub fn is_vector_width(funct3: u32) -> bool {
    matches!(funct3, 0 | 5 | 6 | 7)
}

/// Decodes an OP-V instruction.
pub fn decode_op_v(inst: u32, xlen: Xlen) -> BaseOp {
    let table = match (inst >> 12) & 0x7 {
        OPIVV => OPIVV_TABLE,
        OPFVV => OPFVV_TABLE,
        OPMVV => OPMVV_TABLE,
        OPIVI => OPIVI_TABLE,
        OPIVX => OPIVX_TABLE,
        OPFVF => OPFVF_TABLE,
        OPMVX => OPMVX_TABLE,
        _ => CONFIG,
    };
    lookup(table, inst, xlen).unwrap_or(BaseOp::Illegal)
}

/// Decodes a vector load (LOAD-FP with a vector width code).
pub fn decode_load(inst: u32, xlen: Xlen) -> BaseOp {
    lookup(LOADS, inst, xlen).unwrap_or(BaseOp::Illegal)
}

/// Decodes a vector store (STORE-FP with a vector width code).
pub fn decode_store(inst: u32, xlen: Xlen) -> BaseOp {
    lookup(STORES, inst, xlen).unwrap_or(BaseOp::Illegal)
}

/// OPCFG (funct3 = 7).
static CONFIG: Table = &[
    (VSETVLI, BaseOp::Vsetvli),
    (VSETIVLI, BaseOp::Vsetivli),
    (VSETVL, BaseOp::Vsetvl),
];

/// Vector loads under LOAD-FP.
static LOADS: Table = &[
    (unit_load(0), BaseOp::Vle8V),
    (unit_load(5), BaseOp::Vle16V),
    (unit_load(6), BaseOp::Vle32V),
    (unit_load(7), BaseOp::Vle64V),
    (unit_load(0).rs2(0b10000), BaseOp::Vle8ffV),
    (unit_load(5).rs2(0b10000), BaseOp::Vle16ffV),
    (unit_load(6).rs2(0b10000), BaseOp::Vle32ffV),
    (unit_load(7).rs2(0b10000), BaseOp::Vle64ffV),
    (unit_load(0).vm(1).rs2(0b01011), BaseOp::VlmV),
    (strided_load(0), BaseOp::Vlse8V),
    (strided_load(5), BaseOp::Vlse16V),
    (strided_load(6), BaseOp::Vlse32V),
    (strided_load(7), BaseOp::Vlse64V),
    (indexed_load(0, MOP_UNORDERED), BaseOp::Vluxei8V),
    (indexed_load(5, MOP_UNORDERED), BaseOp::Vluxei16V),
    (indexed_load(6, MOP_UNORDERED), BaseOp::Vluxei32V),
    (indexed_load(7, MOP_UNORDERED), BaseOp::Vluxei64V),
    (indexed_load(0, MOP_ORDERED), BaseOp::Vloxei8V),
    (indexed_load(5, MOP_ORDERED), BaseOp::Vloxei16V),
    (indexed_load(6, MOP_ORDERED), BaseOp::Vloxei32V),
    (indexed_load(7, MOP_ORDERED), BaseOp::Vloxei64V),
    (whole_load(0, 0), BaseOp::Vl1re8V),
    (whole_load(5, 0), BaseOp::Vl1re16V),
    (whole_load(6, 0), BaseOp::Vl1re32V),
    (whole_load(7, 0), BaseOp::Vl1re64V),
    (whole_load(0, 1), BaseOp::Vl2re8V),
    (whole_load(5, 1), BaseOp::Vl2re16V),
    (whole_load(6, 1), BaseOp::Vl2re32V),
    (whole_load(7, 1), BaseOp::Vl2re64V),
    (whole_load(0, 3), BaseOp::Vl4re8V),
    (whole_load(5, 3), BaseOp::Vl4re16V),
    (whole_load(6, 3), BaseOp::Vl4re32V),
    (whole_load(7, 3), BaseOp::Vl4re64V),
    (whole_load(0, 7), BaseOp::Vl8re8V),
    (whole_load(5, 7), BaseOp::Vl8re16V),
    (whole_load(6, 7), BaseOp::Vl8re32V),
    (whole_load(7, 7), BaseOp::Vl8re64V),
];

/// Vector stores under STORE-FP.
static STORES: Table = &[
    (unit_store(0), BaseOp::Vse8V),
    (unit_store(5), BaseOp::Vse16V),
    (unit_store(6), BaseOp::Vse32V),
    (unit_store(7), BaseOp::Vse64V),
    (unit_store(0).vm(1).rs2(0b01011), BaseOp::VsmV),
    (strided_store(0), BaseOp::Vsse8V),
    (strided_store(5), BaseOp::Vsse16V),
    (strided_store(6), BaseOp::Vsse32V),
    (strided_store(7), BaseOp::Vsse64V),
    (indexed_store(0, MOP_UNORDERED), BaseOp::Vsuxei8V),
    (indexed_store(5, MOP_UNORDERED), BaseOp::Vsuxei16V),
    (indexed_store(6, MOP_UNORDERED), BaseOp::Vsuxei32V),
    (indexed_store(7, MOP_UNORDERED), BaseOp::Vsuxei64V),
    (indexed_store(0, MOP_ORDERED), BaseOp::Vsoxei8V),
    (indexed_store(5, MOP_ORDERED), BaseOp::Vsoxei16V),
    (indexed_store(6, MOP_ORDERED), BaseOp::Vsoxei32V),
    (indexed_store(7, MOP_ORDERED), BaseOp::Vsoxei64V),
    (whole_store(0), BaseOp::Vs1rV),
    (whole_store(1), BaseOp::Vs2rV),
    (whole_store(3), BaseOp::Vs4rV),
    (whole_store(7), BaseOp::Vs8rV),
];

static OPIVV_TABLE: Table = &[
    (opivv(0b000000), BaseOp::VaddVv),
    (opivv(0b000001), BaseOp::VandnVv),
    (opivv(0b000010), BaseOp::VsubVv),
    (opivv(0b000100), BaseOp::VminuVv),
    (opivv(0b000101), BaseOp::VminVv),
    (opivv(0b000110), BaseOp::VmaxuVv),
    (opivv(0b000111), BaseOp::VmaxVv),
    (opivv(0b001001), BaseOp::VandVv),
    (opivv(0b001010), BaseOp::VorVv),
    (opivv(0b001011), BaseOp::VxorVv),
    (opivv(0b001100), BaseOp::VrgatherVv),
    (opivv(0b001110), BaseOp::Vrgatherei16Vv),
    (opivv(0b010000).vm(0), BaseOp::VadcVvm),
    (opivv(0b010001).vm(0), BaseOp::VmadcVvm),
    (opivv(0b010001).vm(1), BaseOp::VmadcVv),
    (opivv(0b010010).vm(0), BaseOp::VsbcVvm),
    (opivv(0b010011).vm(0), BaseOp::VmsbcVvm),
    (opivv(0b010011).vm(1), BaseOp::VmsbcVv),
    (opivv(0b010100), BaseOp::VrorVv),
    (opivv(0b010101), BaseOp::VrolVv),
    (opivv(0b010111).vm(0), BaseOp::VmergeVvm),
    (opivv(0b010111).vm(1).rs2(0), BaseOp::VmvVV),
    (opivv(0b011000), BaseOp::VmseqVv),
    (opivv(0b011001), BaseOp::VmsneVv),
    (opivv(0b011010), BaseOp::VmsltuVv),
    (opivv(0b011011), BaseOp::VmsltVv),
    (opivv(0b011100), BaseOp::VmsleuVv),
    (opivv(0b011101), BaseOp::VmsleVv),
    (opivv(0b100000), BaseOp::VsadduVv),
    (opivv(0b100001), BaseOp::VsaddVv),
    (opivv(0b100010), BaseOp::VssubuVv),
    (opivv(0b100011), BaseOp::VssubVv),
    (opivv(0b100101), BaseOp::VsllVv),
    (opivv(0b100111), BaseOp::VsmulVv),
    (opivv(0b101000), BaseOp::VsrlVv),
    (opivv(0b101001), BaseOp::VsraVv),
    (opivv(0b101010), BaseOp::VssrlVv),
    (opivv(0b101011), BaseOp::VssraVv),
    (opivv(0b101100), BaseOp::VnsrlWv),
    (opivv(0b101101), BaseOp::VnsraWv),
    (opivv(0b101110), BaseOp::VnclipuWv),
    (opivv(0b101111), BaseOp::VnclipWv),
    (opivv(0b110000), BaseOp::VwredsumuVs),
    (opivv(0b110001), BaseOp::VwredsumVs),
    (opivv(0b110101), BaseOp::VwsllVv),
];

static OPFVV_TABLE: Table = &[
    (opfvv(0b000000), BaseOp::VfaddVv),
    (opfvv(0b000001), BaseOp::VfredusumVs),
    (opfvv(0b000010), BaseOp::VfsubVv),
    (opfvv(0b000011), BaseOp::VfredosumVs),
    (opfvv(0b000100), BaseOp::VfminVv),
    (opfvv(0b000101), BaseOp::VfredminVs),
    (opfvv(0b000110), BaseOp::VfmaxVv),
    (opfvv(0b000111), BaseOp::VfredmaxVs),
    (opfvv(0b001000), BaseOp::VfsgnjVv),
    (opfvv(0b001001), BaseOp::VfsgnjnVv),
    (opfvv(0b001010), BaseOp::VfsgnjxVv),
    (opfvv(0b010000).vm(1).rs1(0), BaseOp::VfmvFS),
    (opfvv(0b010010).rs1(0b00000), BaseOp::VfcvtXuFV),
    (opfvv(0b010010).rs1(0b00001), BaseOp::VfcvtXFV),
    (opfvv(0b010010).rs1(0b00010), BaseOp::VfcvtFXuV),
    (opfvv(0b010010).rs1(0b00011), BaseOp::VfcvtFXV),
    (opfvv(0b010010).rs1(0b00110), BaseOp::VfcvtRtzXuFV),
    (opfvv(0b010010).rs1(0b00111), BaseOp::VfcvtRtzXFV),
    (opfvv(0b010010).rs1(0b01000), BaseOp::VfwcvtXuFV),
    (opfvv(0b010010).rs1(0b01001), BaseOp::VfwcvtXFV),
    (opfvv(0b010010).rs1(0b01010), BaseOp::VfwcvtFXuV),
    (opfvv(0b010010).rs1(0b01011), BaseOp::VfwcvtFXV),
    (opfvv(0b010010).rs1(0b01100), BaseOp::VfwcvtFFV),
    (opfvv(0b010010).rs1(0b01110), BaseOp::VfwcvtRtzXuFV),
    (opfvv(0b010010).rs1(0b01111), BaseOp::VfwcvtRtzXFV),
    (opfvv(0b010010).rs1(0b10000), BaseOp::VfncvtXuFW),
    (opfvv(0b010010).rs1(0b10001), BaseOp::VfncvtXFW),
    (opfvv(0b010010).rs1(0b10010), BaseOp::VfncvtFXuW),
    (opfvv(0b010010).rs1(0b10011), BaseOp::VfncvtFXW),
    (opfvv(0b010010).rs1(0b10100), BaseOp::VfncvtFFW),
    (opfvv(0b010010).rs1(0b10101), BaseOp::VfncvtRodFFW),
    (opfvv(0b010010).rs1(0b10110), BaseOp::VfncvtRtzXuFW),
    (opfvv(0b010010).rs1(0b10111), BaseOp::VfncvtRtzXFW),
    (opfvv(0b010011).rs1(0b00000), BaseOp::VfsqrtV),
    (opfvv(0b010011).rs1(0b00100), BaseOp::Vfrsqrt7V),
    (opfvv(0b010011).rs1(0b00101), BaseOp::Vfrec7V),
    (opfvv(0b010011).rs1(0b10000), BaseOp::VfclassV),
    (opfvv(0b011000), BaseOp::VmfeqVv),
    (opfvv(0b011001), BaseOp::VmfleVv),
    (opfvv(0b011011), BaseOp::VmfltVv),
    (opfvv(0b011100), BaseOp::VmfneVv),
    (opfvv(0b100000), BaseOp::VfdivVv),
    (opfvv(0b100100), BaseOp::VfmulVv),
    (opfvv(0b101000), BaseOp::VfmaddVv),
    (opfvv(0b101001), BaseOp::VfnmaddVv),
    (opfvv(0b101010), BaseOp::VfmsubVv),
    (opfvv(0b101011), BaseOp::VfnmsubVv),
    (opfvv(0b101100), BaseOp::VfmaccVv),
    (opfvv(0b101101), BaseOp::VfnmaccVv),
    (opfvv(0b101110), BaseOp::VfmsacVv),
    (opfvv(0b101111), BaseOp::VfnmsacVv),
    (opfvv(0b110000), BaseOp::VfwaddVv),
    (opfvv(0b110001), BaseOp::VfwredusumVs),
    (opfvv(0b110010), BaseOp::VfwsubVv),
    (opfvv(0b110011), BaseOp::VfwredosumVs),
    (opfvv(0b110100), BaseOp::VfwaddWv),
    (opfvv(0b110110), BaseOp::VfwsubWv),
    (opfvv(0b111000), BaseOp::VfwmulVv),
    (opfvv(0b111100), BaseOp::VfwmaccVv),
    (opfvv(0b111101), BaseOp::VfwnmaccVv),
    (opfvv(0b111110), BaseOp::VfwmsacVv),
    (opfvv(0b111111), BaseOp::VfwnmsacVv),
];

static OPMVV_TABLE: Table = &[
    (opmvv(0b000000), BaseOp::VredsumVs),
    (opmvv(0b000001), BaseOp::VredandVs),
    (opmvv(0b000010), BaseOp::VredorVs),
    (opmvv(0b000011), BaseOp::VredxorVs),
    (opmvv(0b000100), BaseOp::VredminuVs),
    (opmvv(0b000101), BaseOp::VredminVs),
    (opmvv(0b000110), BaseOp::VredmaxuVs),
    (opmvv(0b000111), BaseOp::VredmaxVs),
    (opmvv(0b001000), BaseOp::VaadduVv),
    (opmvv(0b001001), BaseOp::VaaddVv),
    (opmvv(0b001010), BaseOp::VasubuVv),
    (opmvv(0b001011), BaseOp::VasubVv),
    (opmvv(0b010000).vm(1).rs1(0), BaseOp::VmvXS),
    (opmvv(0b010000).rs1(0b10000), BaseOp::VcpopM),
    (opmvv(0b010000).rs1(0b10001), BaseOp::VfirstM),
    (opmvv(0b010010).rs1(0b00010), BaseOp::VzextVf8),
    (opmvv(0b010010).rs1(0b00011), BaseOp::VsextVf8),
    (opmvv(0b010010).rs1(0b00100), BaseOp::VzextVf4),
    (opmvv(0b010010).rs1(0b00101), BaseOp::VsextVf4),
    (opmvv(0b010010).rs1(0b00110), BaseOp::VzextVf2),
    (opmvv(0b010010).rs1(0b00111), BaseOp::VsextVf2),
    (opmvv(0b010010).rs1(0b01000), BaseOp::Vbrev8V),
    (opmvv(0b010010).rs1(0b01001), BaseOp::Vrev8V),
    (opmvv(0b010010).rs1(0b01010), BaseOp::VbrevV),
    (opmvv(0b010010).rs1(0b01100), BaseOp::VclzV),
    (opmvv(0b010010).rs1(0b01101), BaseOp::VctzV),
    (opmvv(0b010010).rs1(0b01110), BaseOp::VcpopV),
    (opmvv(0b010100).rs1(0b00001), BaseOp::VmsbfM),
    (opmvv(0b010100).rs1(0b00010), BaseOp::VmsofM),
    (opmvv(0b010100).rs1(0b00011), BaseOp::VmsifM),
    (opmvv(0b010100).rs1(0b10000), BaseOp::ViotaM),
    (opmvv(0b010100).rs1(0b10001).rs2(0), BaseOp::VidV),
    (opmvv(0b010111).vm(1), BaseOp::VcompressVm),
    (opmvv(0b011000).vm(1), BaseOp::VmandnMm),
    (opmvv(0b011001).vm(1), BaseOp::VmandMm),
    (opmvv(0b011010).vm(1), BaseOp::VmorMm),
    (opmvv(0b011011).vm(1), BaseOp::VmxorMm),
    (opmvv(0b011100).vm(1), BaseOp::VmornMm),
    (opmvv(0b011101).vm(1), BaseOp::VmnandMm),
    (opmvv(0b011110).vm(1), BaseOp::VmnorMm),
    (opmvv(0b011111).vm(1), BaseOp::VmxnorMm),
    (opmvv(0b100000), BaseOp::VdivuVv),
    (opmvv(0b100001), BaseOp::VdivVv),
    (opmvv(0b100010), BaseOp::VremuVv),
    (opmvv(0b100011), BaseOp::VremVv),
    (opmvv(0b100100), BaseOp::VmulhuVv),
    (opmvv(0b100101), BaseOp::VmulVv),
    (opmvv(0b100110), BaseOp::VmulhsuVv),
    (opmvv(0b100111), BaseOp::VmulhVv),
    (opmvv(0b101001), BaseOp::VmaddVv),
    (opmvv(0b101011), BaseOp::VnmsubVv),
    (opmvv(0b101101), BaseOp::VmaccVv),
    (opmvv(0b101111), BaseOp::VnmsacVv),
    (opmvv(0b110000), BaseOp::VwadduVv),
    (opmvv(0b110001), BaseOp::VwaddVv),
    (opmvv(0b110010), BaseOp::VwsubuVv),
    (opmvv(0b110011), BaseOp::VwsubVv),
    (opmvv(0b110100), BaseOp::VwadduWv),
    (opmvv(0b110101), BaseOp::VwaddWv),
    (opmvv(0b110110), BaseOp::VwsubuWv),
    (opmvv(0b110111), BaseOp::VwsubWv),
    (opmvv(0b111000), BaseOp::VwmuluVv),
    (opmvv(0b111010), BaseOp::VwmulsuVv),
    (opmvv(0b111011), BaseOp::VwmulVv),
    (opmvv(0b111100), BaseOp::VwmaccuVv),
    (opmvv(0b111101), BaseOp::VwmaccVv),
    (opmvv(0b111111), BaseOp::VwmaccsuVv),
];

static OPIVI_TABLE: Table = &[
    (opivi(0b000000), BaseOp::VaddVi),
    (opivi(0b000011), BaseOp::VrsubVi),
    (opivi(0b001001), BaseOp::VandVi),
    (opivi(0b001010), BaseOp::VorVi),
    (opivi(0b001011), BaseOp::VxorVi),
    (opivi(0b001100), BaseOp::VrgatherVi),
    (opivi(0b001110), BaseOp::VslideupVi),
    (opivi(0b001111), BaseOp::VslidedownVi),
    (opivi(0b010000).vm(0), BaseOp::VadcVim),
    (opivi(0b010001).vm(0), BaseOp::VmadcVim),
    (opivi(0b010001).vm(1), BaseOp::VmadcVi),
    (vror_vi(), BaseOp::VrorVi),
    (opivi(0b010111).vm(0), BaseOp::VmergeVim),
    (opivi(0b010111).vm(1).rs2(0), BaseOp::VmvVI),
    (opivi(0b011000), BaseOp::VmseqVi),
    (opivi(0b011001), BaseOp::VmsneVi),
    (opivi(0b011100), BaseOp::VmsleuVi),
    (opivi(0b011101), BaseOp::VmsleVi),
    (opivi(0b011110), BaseOp::VmsgtuVi),
    (opivi(0b011111), BaseOp::VmsgtVi),
    (opivi(0b100000), BaseOp::VsadduVi),
    (opivi(0b100001), BaseOp::VsaddVi),
    (opivi(0b100101), BaseOp::VsllVi),
    (opivi(0b100111).vm(1).rs1(0), BaseOp::Vmv1rV),
    (opivi(0b100111).vm(1).rs1(1), BaseOp::Vmv2rV),
    (opivi(0b100111).vm(1).rs1(3), BaseOp::Vmv4rV),
    (opivi(0b100111).vm(1).rs1(7), BaseOp::Vmv8rV),
    (opivi(0b101000), BaseOp::VsrlVi),
    (opivi(0b101001), BaseOp::VsraVi),
    (opivi(0b101010), BaseOp::VssrlVi),
    (opivi(0b101011), BaseOp::VssraVi),
    (opivi(0b101100), BaseOp::VnsrlWi),
    (opivi(0b101101), BaseOp::VnsraWi),
    (opivi(0b101110), BaseOp::VnclipuWi),
    (opivi(0b101111), BaseOp::VnclipWi),
    (opivi(0b110101), BaseOp::VwsllVi),
];

static OPIVX_TABLE: Table = &[
    (opivx(0b000000), BaseOp::VaddVx),
    (opivx(0b000001), BaseOp::VandnVx),
    (opivx(0b000010), BaseOp::VsubVx),
    (opivx(0b000011), BaseOp::VrsubVx),
    (opivx(0b000100), BaseOp::VminuVx),
    (opivx(0b000101), BaseOp::VminVx),
    (opivx(0b000110), BaseOp::VmaxuVx),
    (opivx(0b000111), BaseOp::VmaxVx),
    (opivx(0b001001), BaseOp::VandVx),
    (opivx(0b001010), BaseOp::VorVx),
    (opivx(0b001011), BaseOp::VxorVx),
    (opivx(0b001100), BaseOp::VrgatherVx),
    (opivx(0b001110), BaseOp::VslideupVx),
    (opivx(0b001111), BaseOp::VslidedownVx),
    (opivx(0b010000).vm(0), BaseOp::VadcVxm),
    (opivx(0b010001).vm(0), BaseOp::VmadcVxm),
    (opivx(0b010001).vm(1), BaseOp::VmadcVx),
    (opivx(0b010010).vm(0), BaseOp::VsbcVxm),
    (opivx(0b010011).vm(0), BaseOp::VmsbcVxm),
    (opivx(0b010011).vm(1), BaseOp::VmsbcVx),
    (opivx(0b010100), BaseOp::VrorVx),
    (opivx(0b010101), BaseOp::VrolVx),
    (opivx(0b010111).vm(0), BaseOp::VmergeVxm),
    (opivx(0b010111).vm(1).rs2(0), BaseOp::VmvVX),
    (opivx(0b011000), BaseOp::VmseqVx),
    (opivx(0b011001), BaseOp::VmsneVx),
    (opivx(0b011010), BaseOp::VmsltuVx),
    (opivx(0b011011), BaseOp::VmsltVx),
    (opivx(0b011100), BaseOp::VmsleuVx),
    (opivx(0b011101), BaseOp::VmsleVx),
    (opivx(0b011110), BaseOp::VmsgtuVx),
    (opivx(0b011111), BaseOp::VmsgtVx),
    (opivx(0b100000), BaseOp::VsadduVx),
    (opivx(0b100001), BaseOp::VsaddVx),
    (opivx(0b100010), BaseOp::VssubuVx),
    (opivx(0b100011), BaseOp::VssubVx),
    (opivx(0b100101), BaseOp::VsllVx),
    (opivx(0b100111), BaseOp::VsmulVx),
    (opivx(0b101000), BaseOp::VsrlVx),
    (opivx(0b101001), BaseOp::VsraVx),
    (opivx(0b101010), BaseOp::VssrlVx),
    (opivx(0b101011), BaseOp::VssraVx),
    (opivx(0b101100), BaseOp::VnsrlWx),
    (opivx(0b101101), BaseOp::VnsraWx),
    (opivx(0b101110), BaseOp::VnclipuWx),
    (opivx(0b101111), BaseOp::VnclipWx),
    (opivx(0b110101), BaseOp::VwsllVx),
];

static OPFVF_TABLE: Table = &[
    (opfvf(0b000000), BaseOp::VfaddVf),
    (opfvf(0b000010), BaseOp::VfsubVf),
    (opfvf(0b000100), BaseOp::VfminVf),
    (opfvf(0b000110), BaseOp::VfmaxVf),
    (opfvf(0b001000), BaseOp::VfsgnjVf),
    (opfvf(0b001001), BaseOp::VfsgnjnVf),
    (opfvf(0b001010), BaseOp::VfsgnjxVf),
    (opfvf(0b001110), BaseOp::Vfslide1upVf),
    (opfvf(0b001111), BaseOp::Vfslide1downVf),
    (opfvf(0b010000).vm(1).rs2(0), BaseOp::VfmvSF),
    (opfvf(0b010111).vm(0), BaseOp::VfmergeVfm),
    (opfvf(0b010111).vm(1).rs2(0), BaseOp::VfmvVF),
    (opfvf(0b011000), BaseOp::VmfeqVf),
    (opfvf(0b011001), BaseOp::VmfleVf),
    (opfvf(0b011011), BaseOp::VmfltVf),
    (opfvf(0b011100), BaseOp::VmfneVf),
    (opfvf(0b011101), BaseOp::VmfgtVf),
    (opfvf(0b011111), BaseOp::VmfgeVf),
    (opfvf(0b100000), BaseOp::VfdivVf),
    (opfvf(0b100001), BaseOp::VfrdivVf),
    (opfvf(0b100100), BaseOp::VfmulVf),
    (opfvf(0b100111), BaseOp::VfrsubVf),
    (opfvf(0b101000), BaseOp::VfmaddVf),
    (opfvf(0b101001), BaseOp::VfnmaddVf),
    (opfvf(0b101010), BaseOp::VfmsubVf),
    (opfvf(0b101011), BaseOp::VfnmsubVf),
    (opfvf(0b101100), BaseOp::VfmaccVf),
    (opfvf(0b101101), BaseOp::VfnmaccVf),
    (opfvf(0b101110), BaseOp::VfmsacVf),
    (opfvf(0b101111), BaseOp::VfnmsacVf),
    (opfvf(0b110000), BaseOp::VfwaddVf),
    (opfvf(0b110010), BaseOp::VfwsubVf),
    (opfvf(0b110100), BaseOp::VfwaddWf),
    (opfvf(0b110110), BaseOp::VfwsubWf),
    (opfvf(0b111000), BaseOp::VfwmulVf),
    (opfvf(0b111100), BaseOp::VfwmaccVf),
    (opfvf(0b111101), BaseOp::VfwnmaccVf),
    (opfvf(0b111110), BaseOp::VfwmsacVf),
    (opfvf(0b111111), BaseOp::VfwnmsacVf),
];

static OPMVX_TABLE: Table = &[
    (opmvx(0b001000), BaseOp::VaadduVx),
    (opmvx(0b001001), BaseOp::VaaddVx),
    (opmvx(0b001010), BaseOp::VasubuVx),
    (opmvx(0b001011), BaseOp::VasubVx),
    (opmvx(0b001110), BaseOp::Vslide1upVx),
    (opmvx(0b001111), BaseOp::Vslide1downVx),
    (opmvx(0b010000).vm(1).rs2(0), BaseOp::VmvSX),
    (opmvx(0b100000), BaseOp::VdivuVx),
    (opmvx(0b100001), BaseOp::VdivVx),
    (opmvx(0b100010), BaseOp::VremuVx),
    (opmvx(0b100011), BaseOp::VremVx),
    (opmvx(0b100100), BaseOp::VmulhuVx),
    (opmvx(0b100101), BaseOp::VmulVx),
    (opmvx(0b100110), BaseOp::VmulhsuVx),
    (opmvx(0b100111), BaseOp::VmulhVx),
    (opmvx(0b101001), BaseOp::VmaddVx),
    (opmvx(0b101011), BaseOp::VnmsubVx),
    (opmvx(0b101101), BaseOp::VmaccVx),
    (opmvx(0b101111), BaseOp::VnmsacVx),
    (opmvx(0b110000), BaseOp::VwadduVx),
    (opmvx(0b110001), BaseOp::VwaddVx),
    (opmvx(0b110010), BaseOp::VwsubuVx),
    (opmvx(0b110011), BaseOp::VwsubVx),
    (opmvx(0b110100), BaseOp::VwadduWx),
    (opmvx(0b110101), BaseOp::VwaddWx),
    (opmvx(0b110110), BaseOp::VwsubuWx),
    (opmvx(0b110111), BaseOp::VwsubWx),
    (opmvx(0b111000), BaseOp::VwmuluVx),
    (opmvx(0b111010), BaseOp::VwmulsuVx),
    (opmvx(0b111011), BaseOp::VwmulVx),
    (opmvx(0b111100), BaseOp::VwmaccuVx),
    (opmvx(0b111101), BaseOp::VwmaccVx),
    (opmvx(0b111110), BaseOp::VwmaccusVx),
    (opmvx(0b111111), BaseOp::VwmaccsuVx),
];
