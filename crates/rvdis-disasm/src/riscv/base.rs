//! Base decode tree.
//!
//! Separates compressed from 32-bit encodings on the low two bits, then
//! dispatches 32-bit words on the major opcode. Groups that branch flat
//! over funct3/funct7 and reserved-zero fields are pattern tables; the
//! float, vector and compressed trees live in their own modules.

use rvdis_core::{IsaConfig, Xlen};

use super::fields::RawInst;
use super::float::{self, OP_FP, OP_LOAD_FP, OP_MADD, OP_MSUB, OP_NMADD, OP_NMSUB, OP_STORE_FP};
use super::opcodes::BaseOp as Op;
use super::pattern::{lookup, Pattern};
use super::{compressed, vector};

// Standard 32-bit opcodes (bits 6:0)
const OP_LOAD: u32 = 0b0000011; // 0x03
const OP_FENCE: u32 = 0b0001111; // 0x0F - MISC-MEM
const OP_IMM: u32 = 0b0010011; // 0x13
const OP_AUIPC: u32 = 0b0010111; // 0x17
const OP_IMM32: u32 = 0b0011011; // 0x1B (RV64+)
const OP_STORE: u32 = 0b0100011; // 0x23
const OP_AMO: u32 = 0b0101111; // 0x2F (A extension)
const OP_REG: u32 = 0b0110011; // 0x33
const OP_LUI: u32 = 0b0110111; // 0x37
const OP_REG32: u32 = 0b0111011; // 0x3B (RV64+)
const OP_IMM64: u32 = 0b1011011; // 0x5B - custom-2, RV128 *id forms
const OP_BRANCH: u32 = 0b1100011; // 0x63
const OP_JALR: u32 = 0b1100111; // 0x67
const OP_JAL: u32 = 0b1101111; // 0x6F
const OP_SYSTEM: u32 = 0b1110011; // 0x73
const OP_REG64: u32 = 0b1111011; // 0x7B - custom-3, RV128 *d forms

type Table = &'static [(Pattern, Op)];

/// Decodes one instruction from the base catalog.
pub fn decode(inst: RawInst, xlen: Xlen, config: &IsaConfig) -> Op {
    let word = inst as u32;
    if word & 0x3 != 0x3 {
        return compressed::decode(word & 0xffff, xlen, config);
    }
    decode_wide(word, xlen)
}

#[inline]
fn find(table: Table, inst: u32, xlen: Xlen) -> Op {
    lookup(table, inst, xlen).unwrap_or(Op::Illegal)
}

fn decode_wide(inst: u32, xlen: Xlen) -> Op {
    let funct3 = (inst >> 12) & 0x7;
    match inst & 0x7f {
        OP_LUI => Op::Lui,
        OP_AUIPC => Op::Auipc,
        OP_JAL => Op::Jal,
        OP_JALR if funct3 == 0 => Op::Jalr,
        OP_BRANCH => decode_branch(funct3),
        OP_LOAD => find(LOAD, inst, xlen),
        OP_STORE => find(STORE, inst, xlen),
        OP_FENCE => find(MISC_MEM, inst, xlen),
        OP_IMM => find(IMM, inst, xlen),
        OP_IMM32 => find(IMM32, inst, xlen),
        OP_IMM64 => find(IMM64, inst, xlen),
        OP_REG => find(REG, inst, xlen),
        OP_REG32 => find(REG32, inst, xlen),
        OP_REG64 => find(REG64, inst, xlen),
        OP_AMO => find(AMO, inst, xlen),
        OP_SYSTEM => find(SYSTEM, inst, xlen),
        // Vector loads/stores share the FP memory opcodes
        OP_LOAD_FP if vector::is_vector_width(funct3) => vector::decode_load(inst, xlen),
        OP_LOAD_FP => float::decode_load(inst),
        OP_STORE_FP if vector::is_vector_width(funct3) => vector::decode_store(inst, xlen),
        OP_STORE_FP => float::decode_store(inst),
        OP_MADD | OP_MSUB | OP_NMSUB | OP_NMADD => float::decode_fused(inst),
        OP_FP => float::decode_op_fp(inst, xlen),
        vector::OP_V => vector::decode_op_v(inst, xlen),
        _ => Op::Illegal,
    }
}

fn decode_branch(funct3: u32) -> Op {
    match funct3 {
        0 => Op::Beq,
        1 => Op::Bne,
        4 => Op::Blt,
        5 => Op::Bge,
        6 => Op::Bltu,
        7 => Op::Bgeu,
        _ => Op::Illegal,
    }
}

const fn load(f3: u32) -> Pattern {
    Pattern::opcode(OP_LOAD).funct3(f3)
}

const fn store(f3: u32) -> Pattern {
    Pattern::opcode(OP_STORE).funct3(f3)
}

const fn fence(f3: u32) -> Pattern {
    Pattern::opcode(OP_FENCE).funct3(f3)
}

const fn imm(f3: u32) -> Pattern {
    Pattern::opcode(OP_IMM).funct3(f3)
}

const fn imm32(f3: u32) -> Pattern {
    Pattern::opcode(OP_IMM32).funct3(f3).rv64_up()
}

const fn imm64(f3: u32) -> Pattern {
    Pattern::opcode(OP_IMM64).funct3(f3).rv128()
}

const fn reg(funct7: u32, f3: u32) -> Pattern {
    Pattern::opcode(OP_REG).funct7(funct7).funct3(f3)
}

const fn reg32(funct7: u32, f3: u32) -> Pattern {
    Pattern::opcode(OP_REG32).funct7(funct7).funct3(f3).rv64_up()
}

const fn reg64(funct7: u32, f3: u32) -> Pattern {
    Pattern::opcode(OP_REG64).funct7(funct7).funct3(f3).rv128()
}

/// Scalar crypto forms with a byte select in bits 31:30.
const fn reg_bs(funct5: u32) -> Pattern {
    Pattern::opcode(OP_REG).funct3(0).field(29, 25, funct5)
}

const fn amo(funct5: u32, f3: u32) -> Pattern {
    Pattern::opcode(OP_AMO).funct5(funct5).funct3(f3)
}

const fn system(f3: u32) -> Pattern {
    Pattern::opcode(OP_SYSTEM).funct3(f3)
}

/// Fences and invalidations with rd = x0 and rs1/rs2 operands.
const fn system_fence(funct7: u32) -> Pattern {
    system(0).rd(0).funct7(funct7)
}

/// Hypervisor virtual-machine loads (f3 = 4), selected by rs2.
const fn hlv(funct7: u32, rs2: u32) -> Pattern {
    system(4).funct7(funct7).rs2(rs2)
}

const fn hsv(funct7: u32) -> Pattern {
    system(4).funct7(funct7).rd(0)
}

static LOAD: Table = &[
    (load(0), Op::Lb),
    (load(1), Op::Lh),
    (load(2), Op::Lw),
    (load(3).rv64_up(), Op::Ld),
    (load(4), Op::Lbu),
    (load(5), Op::Lhu),
    (load(6).rv64_up(), Op::Lwu),
    (load(7).rv128(), Op::Ldu),
];

static STORE: Table = &[
    (store(0), Op::Sb),
    (store(1), Op::Sh),
    (store(2), Op::Sw),
    (store(3).rv64_up(), Op::Sd),
    (store(4).rv128(), Op::Sq),
];

/// MISC-MEM. funct3=2 is `lq` on RV128 and the Zicbom/Zicboz group below.
static MISC_MEM: Table = &[
    (Pattern::word(0x8330_000f), Op::FenceTso),
    (Pattern::word(0x0100_000f), Op::Pause),
    (fence(0), Op::Fence),
    (fence(1), Op::FenceI),
    (fence(2).rv128(), Op::Lq),
    (fence(2).rd(0).imm12(0).below_rv128(), Op::CboInval),
    (fence(2).rd(0).imm12(1).below_rv128(), Op::CboClean),
    (fence(2).rd(0).imm12(2).below_rv128(), Op::CboFlush),
    (fence(2).rd(0).imm12(4).below_rv128(), Op::CboZero),
];

static IMM: Table = &[
    (imm(0), Op::Addi),
    (imm(2), Op::Slti),
    (imm(3), Op::Sltiu),
    (imm(4), Op::Xori),
    (imm(6).rd(0).rs2(0), Op::PrefetchI),
    (imm(6).rd(0).rs2(1), Op::PrefetchR),
    (imm(6).rd(0).rs2(3), Op::PrefetchW),
    (imm(6), Op::Ori),
    (imm(7), Op::Andi),
    // funct3 = 1: left shifts, single-bit ops and unary Zbb/Zkn forms
    (imm(1).funct7(0).rv32(), Op::Slli),
    (imm(1).funct6(0).rv64(), Op::Slli),
    (imm(1).funct5(0).rv128(), Op::Slli),
    (imm(1).funct7(0b0010100).rv32(), Op::Bseti),
    (imm(1).funct6(0b001010).rv64_up(), Op::Bseti),
    (imm(1).funct7(0b0100100).rv32(), Op::Bclri),
    (imm(1).funct6(0b010010).rv64_up(), Op::Bclri),
    (imm(1).funct7(0b0110100).rv32(), Op::Binvi),
    (imm(1).funct6(0b011010).rv64_up(), Op::Binvi),
    (imm(1).imm12(0x600), Op::Clz),
    (imm(1).imm12(0x601), Op::Ctz),
    (imm(1).imm12(0x602), Op::Cpop),
    (imm(1).imm12(0x604), Op::SextB),
    (imm(1).imm12(0x605), Op::SextH),
    (imm(1).imm12(0x08f).rv32(), Op::Zip),
    (imm(1).imm12(0x100), Op::Sha256sum0),
    (imm(1).imm12(0x101), Op::Sha256sum1),
    (imm(1).imm12(0x102), Op::Sha256sig0),
    (imm(1).imm12(0x103), Op::Sha256sig1),
    (imm(1).imm12(0x104).rv64_up(), Op::Sha512sum0),
    (imm(1).imm12(0x105).rv64_up(), Op::Sha512sum1),
    (imm(1).imm12(0x106).rv64_up(), Op::Sha512sig0),
    (imm(1).imm12(0x107).rv64_up(), Op::Sha512sig1),
    (imm(1).imm12(0x108), Op::Sm3p0),
    (imm(1).imm12(0x109), Op::Sm3p1),
    (imm(1).imm12(0x300).rv64_up(), Op::Aes64im),
    (imm(1).field(31, 24, 0x31).rv64_up(), Op::Aes64ks1i),
    // funct3 = 5: right shifts, rotates and byte permutes
    (imm(5).funct7(0).rv32(), Op::Srli),
    (imm(5).funct6(0).rv64(), Op::Srli),
    (imm(5).funct5(0).rv128(), Op::Srli),
    (imm(5).funct7(0b0100000).rv32(), Op::Srai),
    (imm(5).funct6(0b010000).rv64(), Op::Srai),
    (imm(5).funct5(0b01000).rv128(), Op::Srai),
    (imm(5).funct7(0b0110000).rv32(), Op::Rori),
    (imm(5).funct6(0b011000).rv64_up(), Op::Rori),
    (imm(5).funct7(0b0100100).rv32(), Op::Bexti),
    (imm(5).funct6(0b010010).rv64_up(), Op::Bexti),
    (imm(5).imm12(0x287), Op::OrcB),
    (imm(5).imm12(0x687), Op::Brev8),
    (imm(5).imm12(0x698).rv32(), Op::Rev8),
    (imm(5).imm12(0x6b8).rv64_up(), Op::Rev8),
    (imm(5).imm12(0x08f).rv32(), Op::Unzip),
];

static IMM32: Table = &[
    (imm32(0), Op::Addiw),
    (imm32(1).funct7(0), Op::Slliw),
    (imm32(1).funct6(0b000010), Op::SlliUw),
    (imm32(1).imm12(0x600), Op::Clzw),
    (imm32(1).imm12(0x601), Op::Ctzw),
    (imm32(1).imm12(0x602), Op::Cpopw),
    (imm32(5).funct7(0), Op::Srliw),
    (imm32(5).funct7(0b0100000), Op::Sraiw),
    (imm32(5).funct7(0b0110000), Op::Roriw),
];

static IMM64: Table = &[
    (imm64(0), Op::Addid),
    (imm64(1).funct6(0), Op::Sllid),
    (imm64(5).funct6(0), Op::Srlid),
    (imm64(5).funct6(0b010000), Op::Sraid),
];

static REG: Table = &[
    (reg(0b0000000, 0), Op::Add),
    (reg(0b0100000, 0), Op::Sub),
    (reg(0b0000000, 1), Op::Sll),
    (reg(0b0000000, 2), Op::Slt),
    (reg(0b0000000, 3), Op::Sltu),
    (reg(0b0000000, 4), Op::Xor),
    (reg(0b0000000, 5), Op::Srl),
    (reg(0b0100000, 5), Op::Sra),
    (reg(0b0000000, 6), Op::Or),
    (reg(0b0000000, 7), Op::And),
    // M
    (reg(0b0000001, 0), Op::Mul),
    (reg(0b0000001, 1), Op::Mulh),
    (reg(0b0000001, 2), Op::Mulhsu),
    (reg(0b0000001, 3), Op::Mulhu),
    (reg(0b0000001, 4), Op::Div),
    (reg(0b0000001, 5), Op::Divu),
    (reg(0b0000001, 6), Op::Rem),
    (reg(0b0000001, 7), Op::Remu),
    // Zba / Zbb / Zbc / Zbs
    (reg(0b0010000, 2), Op::Sh1add),
    (reg(0b0010000, 4), Op::Sh2add),
    (reg(0b0010000, 6), Op::Sh3add),
    (reg(0b0100000, 7), Op::Andn),
    (reg(0b0100000, 6), Op::Orn),
    (reg(0b0100000, 4), Op::Xnor),
    (reg(0b0000101, 4), Op::Min),
    (reg(0b0000101, 5), Op::Minu),
    (reg(0b0000101, 6), Op::Max),
    (reg(0b0000101, 7), Op::Maxu),
    (reg(0b0000101, 1), Op::Clmul),
    (reg(0b0000101, 2), Op::Clmulr),
    (reg(0b0000101, 3), Op::Clmulh),
    (reg(0b0110000, 1), Op::Rol),
    (reg(0b0110000, 5), Op::Ror),
    (reg(0b0100100, 1), Op::Bclr),
    (reg(0b0100100, 5), Op::Bext),
    (reg(0b0110100, 1), Op::Binv),
    (reg(0b0010100, 1), Op::Bset),
    // Zbkb / Zbkx; zext.h on RV32 is pack with rs2 = x0
    (reg(0b0000100, 4).rs2(0).rv32(), Op::ZextH),
    (reg(0b0000100, 4), Op::Pack),
    (reg(0b0000100, 7), Op::Packh),
    (reg(0b0010100, 2), Op::Xperm4),
    (reg(0b0010100, 4), Op::Xperm8),
    // Zicond
    (reg(0b0000111, 5), Op::CzeroEqz),
    (reg(0b0000111, 7), Op::CzeroNez),
    // Zkne / Zknd / Zksed
    (reg_bs(0b10001).rv32(), Op::Aes32esi),
    (reg_bs(0b10011).rv32(), Op::Aes32esmi),
    (reg_bs(0b10101).rv32(), Op::Aes32dsi),
    (reg_bs(0b10111).rv32(), Op::Aes32dsmi),
    (reg_bs(0b11000), Op::Sm4ed),
    (reg_bs(0b11010), Op::Sm4ks),
    (reg(0b0011001, 0).rv64_up(), Op::Aes64es),
    (reg(0b0011011, 0).rv64_up(), Op::Aes64esm),
    (reg(0b0011101, 0).rv64_up(), Op::Aes64ds),
    (reg(0b0011111, 0).rv64_up(), Op::Aes64dsm),
    (reg(0b0111111, 0).rv64_up(), Op::Aes64ks2),
    // Zknh on RV32 splits the SHA-512 functions over register halves
    (reg(0b0101000, 0).rv32(), Op::Sha512sum0r),
    (reg(0b0101001, 0).rv32(), Op::Sha512sum1r),
    (reg(0b0101010, 0).rv32(), Op::Sha512sig0l),
    (reg(0b0101011, 0).rv32(), Op::Sha512sig1l),
    (reg(0b0101110, 0).rv32(), Op::Sha512sig0h),
    (reg(0b0101111, 0).rv32(), Op::Sha512sig1h),
];

static REG32: Table = &[
    (reg32(0b0000000, 0), Op::Addw),
    (reg32(0b0100000, 0), Op::Subw),
    (reg32(0b0000000, 1), Op::Sllw),
    (reg32(0b0000000, 5), Op::Srlw),
    (reg32(0b0100000, 5), Op::Sraw),
    (reg32(0b0000001, 0), Op::Mulw),
    (reg32(0b0000001, 4), Op::Divw),
    (reg32(0b0000001, 5), Op::Divuw),
    (reg32(0b0000001, 6), Op::Remw),
    (reg32(0b0000001, 7), Op::Remuw),
    (reg32(0b0000100, 0), Op::AddUw),
    (reg32(0b0010000, 2), Op::Sh1addUw),
    (reg32(0b0010000, 4), Op::Sh2addUw),
    (reg32(0b0010000, 6), Op::Sh3addUw),
    (reg32(0b0110000, 1), Op::Rolw),
    (reg32(0b0110000, 5), Op::Rorw),
    (reg32(0b0000100, 4).rs2(0), Op::ZextH),
    (reg32(0b0000100, 4), Op::Packw),
];

static REG64: Table = &[
    (reg64(0b0000000, 0), Op::Addd),
    (reg64(0b0100000, 0), Op::Subd),
    (reg64(0b0000000, 1), Op::Slld),
    (reg64(0b0000000, 5), Op::Srld),
    (reg64(0b0100000, 5), Op::Srad),
    (reg64(0b0000001, 0), Op::Muld),
    (reg64(0b0000001, 4), Op::Divd),
    (reg64(0b0000001, 5), Op::Divud),
    (reg64(0b0000001, 6), Op::Remd),
    (reg64(0b0000001, 7), Op::Remud),
];

/// A and Zacas. Width lives in funct3: 2 = W, 3 = D, 4 = Q.
static AMO: Table = &[
    (amo(0b00010, 2).rs2(0), Op::LrW),
    (amo(0b00011, 2), Op::ScW),
    (amo(0b00001, 2), Op::AmoswapW),
    (amo(0b00000, 2), Op::AmoaddW),
    (amo(0b00100, 2), Op::AmoxorW),
    (amo(0b01000, 2), Op::AmoorW),
    (amo(0b01100, 2), Op::AmoandW),
    (amo(0b10000, 2), Op::AmominW),
    (amo(0b10100, 2), Op::AmomaxW),
    (amo(0b11000, 2), Op::AmominuW),
    (amo(0b11100, 2), Op::AmomaxuW),
    (amo(0b00101, 2), Op::AmocasW),
    (amo(0b00010, 3).rs2(0).rv64_up(), Op::LrD),
    (amo(0b00011, 3).rv64_up(), Op::ScD),
    (amo(0b00001, 3).rv64_up(), Op::AmoswapD),
    (amo(0b00000, 3).rv64_up(), Op::AmoaddD),
    (amo(0b00100, 3).rv64_up(), Op::AmoxorD),
    (amo(0b01000, 3).rv64_up(), Op::AmoorD),
    (amo(0b01100, 3).rv64_up(), Op::AmoandD),
    (amo(0b10000, 3).rv64_up(), Op::AmominD),
    (amo(0b10100, 3).rv64_up(), Op::AmomaxD),
    (amo(0b11000, 3).rv64_up(), Op::AmominuD),
    (amo(0b11100, 3).rv64_up(), Op::AmomaxuD),
    // amocas.d on RV32 operates on register pairs
    (amo(0b00101, 3), Op::AmocasD),
    (amo(0b00010, 4).rs2(0).rv128(), Op::LrQ),
    (amo(0b00011, 4).rv128(), Op::ScQ),
    (amo(0b00001, 4).rv128(), Op::AmoswapQ),
    (amo(0b00000, 4).rv128(), Op::AmoaddQ),
    (amo(0b00100, 4).rv128(), Op::AmoxorQ),
    (amo(0b01000, 4).rv128(), Op::AmoorQ),
    (amo(0b01100, 4).rv128(), Op::AmoandQ),
    (amo(0b10000, 4).rv128(), Op::AmominQ),
    (amo(0b10100, 4).rv128(), Op::AmomaxQ),
    (amo(0b11000, 4).rv128(), Op::AmominuQ),
    (amo(0b11100, 4).rv128(), Op::AmomaxuQ),
    (amo(0b00101, 4).rv64_up(), Op::AmocasQ),
];

static SYSTEM: Table = &[
    (Pattern::word(0x0000_0073), Op::Ecall),
    (Pattern::word(0x0010_0073), Op::Ebreak),
    (Pattern::word(0x0020_0073), Op::Uret),
    (Pattern::word(0x1020_0073), Op::Sret),
    (Pattern::word(0x3020_0073), Op::Mret),
    (Pattern::word(0x7b20_0073), Op::Dret),
    (Pattern::word(0x1050_0073), Op::Wfi),
    (Pattern::word(0x00d0_0073), Op::WrsNto),
    (Pattern::word(0x01d0_0073), Op::WrsSto),
    (Pattern::word(0x1800_0073), Op::SfenceWInval),
    (Pattern::word(0x1810_0073), Op::SfenceInvalIr),
    (system_fence(0b0001001), Op::SfenceVma),
    (system_fence(0b0001011), Op::SinvalVma),
    (system_fence(0b0010001), Op::HfenceVvma),
    (system_fence(0b0110001), Op::HfenceGvma),
    (system_fence(0b0010011), Op::HinvalVvma),
    (system_fence(0b0110011), Op::HinvalGvma),
    (hlv(0b0110000, 0), Op::HlvB),
    (hlv(0b0110000, 1), Op::HlvBu),
    (hlv(0b0110010, 0), Op::HlvH),
    (hlv(0b0110010, 1), Op::HlvHu),
    (hlv(0b0110010, 3), Op::HlvxHu),
    (hlv(0b0110100, 0), Op::HlvW),
    (hlv(0b0110100, 3), Op::HlvxWu),
    (hlv(0b0110100, 1).rv64_up(), Op::HlvWu),
    (hlv(0b0110110, 0).rv64_up(), Op::HlvD),
    (hsv(0b0110001), Op::HsvB),
    (hsv(0b0110011), Op::HsvH),
    (hsv(0b0110101), Op::HsvW),
    (hsv(0b0110111).rv64_up(), Op::HsvD),
    (system(1), Op::Csrrw),
    (system(2), Op::Csrrs),
    (system(3), Op::Csrrc),
    (system(5), Op::Csrrwi),
    (system(6), Op::Csrrsi),
    (system(7), Op::Csrrci),
];
