//! The base opcode catalog.
//!
//! Holds every canonical opcode of the standard extensions, the compressed
//! forms with their per-width expansion targets, and the pseudo opcodes the
//! lifter rewrites into. Pseudo rule tables follow the catalog.

use super::catalog::Constraint::{self, *};
use super::catalog::PseudoRule;

opcode_catalog! {
    /// Opcodes of the base catalog.
    pub enum BaseOp in Base {
        Illegal = "illegal", Illegal, NONE;

        // RV32I / RV64I / RV128I
        Lui = "lui", U, RD_UIMM;
        Auipc = "auipc", U, RD_OFFSET;
        Jal = "jal", Uj, RD_OFFSET => JAL;
        Jalr = "jalr", I, RD_OFFSET_RS1 => JALR;
        Beq = "beq", Sb, RS1_RS2_OFFSET => BEQ;
        Bne = "bne", Sb, RS1_RS2_OFFSET => BNE;
        Blt = "blt", Sb, RS1_RS2_OFFSET => BLT;
        Bge = "bge", Sb, RS1_RS2_OFFSET => BGE;
        Bltu = "bltu", Sb, RS1_RS2_OFFSET => BLTU;
        Bgeu = "bgeu", Sb, RS1_RS2_OFFSET => BGEU;
        Lb = "lb", I, RD_OFFSET_RS1;
        Lh = "lh", I, RD_OFFSET_RS1;
        Lw = "lw", I, RD_OFFSET_RS1;
        Lbu = "lbu", I, RD_OFFSET_RS1;
        Lhu = "lhu", I, RD_OFFSET_RS1;
        Sb = "sb", S, RS2_OFFSET_RS1;
        Sh = "sh", S, RS2_OFFSET_RS1;
        Sw = "sw", S, RS2_OFFSET_RS1;
        Addi = "addi", I, RD_RS1_IMM => ADDI;
        Slti = "slti", I, RD_RS1_IMM;
        Sltiu = "sltiu", I, RD_RS1_IMM => SLTIU;
        Xori = "xori", I, RD_RS1_IMM => XORI;
        Ori = "ori", I, RD_RS1_IMM;
        Andi = "andi", I, RD_RS1_IMM;
        Slli = "slli", ISh7, RD_RS1_IMM;
        Srli = "srli", ISh7, RD_RS1_IMM;
        Srai = "srai", ISh7, RD_RS1_IMM;
        Add = "add", R, RD_RS1_RS2;
        Sub = "sub", R, RD_RS1_RS2 => SUB;
        Sll = "sll", R, RD_RS1_RS2;
        Slt = "slt", R, RD_RS1_RS2 => SLT;
        Sltu = "sltu", R, RD_RS1_RS2 => SLTU;
        Xor = "xor", R, RD_RS1_RS2;
        Srl = "srl", R, RD_RS1_RS2;
        Sra = "sra", R, RD_RS1_RS2;
        Or = "or", R, RD_RS1_RS2;
        And = "and", R, RD_RS1_RS2;
        Fence = "fence", RF, PRED_SUCC;
        FenceI = "fence.i", None, NONE;
        FenceTso = "fence.tso", None, NONE;
        Pause = "pause", None, NONE;
        Ecall = "ecall", None, NONE;
        Ebreak = "ebreak", None, NONE;
        Lwu = "lwu", I, RD_OFFSET_RS1;
        Ld = "ld", I, RD_OFFSET_RS1;
        Sd = "sd", S, RS2_OFFSET_RS1;
        Addiw = "addiw", I, RD_RS1_IMM => ADDIW;
        Slliw = "slliw", ISh5, RD_RS1_IMM;
        Srliw = "srliw", ISh5, RD_RS1_IMM;
        Sraiw = "sraiw", ISh5, RD_RS1_IMM;
        Addw = "addw", R, RD_RS1_RS2;
        Subw = "subw", R, RD_RS1_RS2 => SUBW;
        Sllw = "sllw", R, RD_RS1_RS2;
        Srlw = "srlw", R, RD_RS1_RS2;
        Sraw = "sraw", R, RD_RS1_RS2;
        Ldu = "ldu", I, RD_OFFSET_RS1;
        Lq = "lq", I, RD_OFFSET_RS1;
        Sq = "sq", S, RS2_OFFSET_RS1;
        Addid = "addid", I, RD_RS1_IMM;
        Sllid = "sllid", ISh6, RD_RS1_IMM;
        Srlid = "srlid", ISh6, RD_RS1_IMM;
        Sraid = "sraid", ISh6, RD_RS1_IMM;
        Addd = "addd", R, RD_RS1_RS2;
        Subd = "subd", R, RD_RS1_RS2;
        Slld = "slld", R, RD_RS1_RS2;
        Srld = "srld", R, RD_RS1_RS2;
        Srad = "srad", R, RD_RS1_RS2;

        // M
        Mul = "mul", R, RD_RS1_RS2;
        Mulh = "mulh", R, RD_RS1_RS2;
        Mulhsu = "mulhsu", R, RD_RS1_RS2;
        Mulhu = "mulhu", R, RD_RS1_RS2;
        Div = "div", R, RD_RS1_RS2;
        Divu = "divu", R, RD_RS1_RS2;
        Rem = "rem", R, RD_RS1_RS2;
        Remu = "remu", R, RD_RS1_RS2;
        Mulw = "mulw", R, RD_RS1_RS2;
        Divw = "divw", R, RD_RS1_RS2;
        Divuw = "divuw", R, RD_RS1_RS2;
        Remw = "remw", R, RD_RS1_RS2;
        Remuw = "remuw", R, RD_RS1_RS2;
        Muld = "muld", R, RD_RS1_RS2;
        Divd = "divd", R, RD_RS1_RS2;
        Divud = "divud", R, RD_RS1_RS2;
        Remd = "remd", R, RD_RS1_RS2;
        Remud = "remud", R, RD_RS1_RS2;

        // A / Zacas
        LrW = "lr.w", RL, AQRL_RD_RS1;
        ScW = "sc.w", RA, AQRL_RD_RS2_RS1;
        AmoswapW = "amoswap.w", RA, AQRL_RD_RS2_RS1;
        AmoaddW = "amoadd.w", RA, AQRL_RD_RS2_RS1;
        AmoxorW = "amoxor.w", RA, AQRL_RD_RS2_RS1;
        AmoorW = "amoor.w", RA, AQRL_RD_RS2_RS1;
        AmoandW = "amoand.w", RA, AQRL_RD_RS2_RS1;
        AmominW = "amomin.w", RA, AQRL_RD_RS2_RS1;
        AmomaxW = "amomax.w", RA, AQRL_RD_RS2_RS1;
        AmominuW = "amominu.w", RA, AQRL_RD_RS2_RS1;
        AmomaxuW = "amomaxu.w", RA, AQRL_RD_RS2_RS1;
        AmocasW = "amocas.w", RA, AQRL_RD_RS2_RS1;
        LrD = "lr.d", RL, AQRL_RD_RS1;
        ScD = "sc.d", RA, AQRL_RD_RS2_RS1;
        AmoswapD = "amoswap.d", RA, AQRL_RD_RS2_RS1;
        AmoaddD = "amoadd.d", RA, AQRL_RD_RS2_RS1;
        AmoxorD = "amoxor.d", RA, AQRL_RD_RS2_RS1;
        AmoorD = "amoor.d", RA, AQRL_RD_RS2_RS1;
        AmoandD = "amoand.d", RA, AQRL_RD_RS2_RS1;
        AmominD = "amomin.d", RA, AQRL_RD_RS2_RS1;
        AmomaxD = "amomax.d", RA, AQRL_RD_RS2_RS1;
        AmominuD = "amominu.d", RA, AQRL_RD_RS2_RS1;
        AmomaxuD = "amomaxu.d", RA, AQRL_RD_RS2_RS1;
        AmocasD = "amocas.d", RA, AQRL_RD_RS2_RS1;
        LrQ = "lr.q", RL, AQRL_RD_RS1;
        ScQ = "sc.q", RA, AQRL_RD_RS2_RS1;
        AmoswapQ = "amoswap.q", RA, AQRL_RD_RS2_RS1;
        AmoaddQ = "amoadd.q", RA, AQRL_RD_RS2_RS1;
        AmoxorQ = "amoxor.q", RA, AQRL_RD_RS2_RS1;
        AmoorQ = "amoor.q", RA, AQRL_RD_RS2_RS1;
        AmoandQ = "amoand.q", RA, AQRL_RD_RS2_RS1;
        AmominQ = "amomin.q", RA, AQRL_RD_RS2_RS1;
        AmomaxQ = "amomax.q", RA, AQRL_RD_RS2_RS1;
        AmominuQ = "amominu.q", RA, AQRL_RD_RS2_RS1;
        AmomaxuQ = "amomaxu.q", RA, AQRL_RD_RS2_RS1;
        AmocasQ = "amocas.q", RA, AQRL_RD_RS2_RS1;

        // Privileged
        Uret = "uret", None, NONE;
        Sret = "sret", None, NONE;
        Mret = "mret", None, NONE;
        Dret = "dret", None, NONE;
        Wfi = "wfi", None, NONE;
        SfenceVma = "sfence.vma", R, RS1_RS2;
        SinvalVma = "sinval.vma", R, RS1_RS2;
        SfenceWInval = "sfence.w.inval", None, NONE;
        SfenceInvalIr = "sfence.inval.ir", None, NONE;
        HfenceVvma = "hfence.vvma", R, RS1_RS2;
        HfenceGvma = "hfence.gvma", R, RS1_RS2;
        HinvalVvma = "hinval.vvma", R, RS1_RS2;
        HinvalGvma = "hinval.gvma", R, RS1_RS2;
        HlvB = "hlv.b", R, RD_ADDR;
        HlvBu = "hlv.bu", R, RD_ADDR;
        HlvH = "hlv.h", R, RD_ADDR;
        HlvHu = "hlv.hu", R, RD_ADDR;
        HlvxHu = "hlvx.hu", R, RD_ADDR;
        HlvW = "hlv.w", R, RD_ADDR;
        HlvxWu = "hlvx.wu", R, RD_ADDR;
        HlvWu = "hlv.wu", R, RD_ADDR;
        HlvD = "hlv.d", R, RD_ADDR;
        HsvB = "hsv.b", R, RS2_ADDR;
        HsvH = "hsv.h", R, RS2_ADDR;
        HsvW = "hsv.w", R, RS2_ADDR;
        HsvD = "hsv.d", R, RS2_ADDR;
        WrsNto = "wrs.nto", None, NONE;
        WrsSto = "wrs.sto", None, NONE;

        // Zicsr
        Csrrw = "csrrw", ICsr, RD_CSR_RS1 => CSRRW;
        Csrrs = "csrrs", ICsr, RD_CSR_RS1 => CSRRS;
        Csrrc = "csrrc", ICsr, RD_CSR_RS1 => CSRRC;
        Csrrwi = "csrrwi", ICsr, RD_CSR_ZIMM => CSRRWI;
        Csrrsi = "csrrsi", ICsr, RD_CSR_ZIMM => CSRRSI;
        Csrrci = "csrrci", ICsr, RD_CSR_ZIMM => CSRRCI;

        // F
        Flw = "flw", I, FRD_OFFSET_RS1;
        Fsw = "fsw", S, FRS2_OFFSET_RS1;
        FmaddS = "fmadd.s", R4M, FRD_FRS1_FRS2_FRS3_RM;
        FmsubS = "fmsub.s", R4M, FRD_FRS1_FRS2_FRS3_RM;
        FnmsubS = "fnmsub.s", R4M, FRD_FRS1_FRS2_FRS3_RM;
        FnmaddS = "fnmadd.s", R4M, FRD_FRS1_FRS2_FRS3_RM;
        FaddS = "fadd.s", RM, FRD_FRS1_FRS2_RM;
        FsubS = "fsub.s", RM, FRD_FRS1_FRS2_RM;
        FmulS = "fmul.s", RM, FRD_FRS1_FRS2_RM;
        FdivS = "fdiv.s", RM, FRD_FRS1_FRS2_RM;
        FsgnjS = "fsgnj.s", R, FRD_FRS1_FRS2 => FSGNJ_S;
        FsgnjnS = "fsgnjn.s", R, FRD_FRS1_FRS2 => FSGNJN_S;
        FsgnjxS = "fsgnjx.s", R, FRD_FRS1_FRS2 => FSGNJX_S;
        FminS = "fmin.s", R, FRD_FRS1_FRS2;
        FmaxS = "fmax.s", R, FRD_FRS1_FRS2;
        FsqrtS = "fsqrt.s", RM, FRD_FRS1_RM;
        FleS = "fle.s", R, RD_FRS1_FRS2;
        FltS = "flt.s", R, RD_FRS1_FRS2;
        FeqS = "feq.s", R, RD_FRS1_FRS2;
        FcvtWS = "fcvt.w.s", RM, RD_FRS1_RM;
        FcvtWuS = "fcvt.wu.s", RM, RD_FRS1_RM;
        FcvtLS = "fcvt.l.s", RM, RD_FRS1_RM;
        FcvtLuS = "fcvt.lu.s", RM, RD_FRS1_RM;
        FcvtSW = "fcvt.s.w", RM, FRD_RS1_RM;
        FcvtSWu = "fcvt.s.wu", RM, FRD_RS1_RM;
        FcvtSL = "fcvt.s.l", RM, FRD_RS1_RM;
        FcvtSLu = "fcvt.s.lu", RM, FRD_RS1_RM;
        FmvXW = "fmv.x.w", R, RD_FRS1;
        FclassS = "fclass.s", R, RD_FRS1;
        FmvWX = "fmv.w.x", R, FRD_RS1;

        // D
        Fld = "fld", I, FRD_OFFSET_RS1;
        Fsd = "fsd", S, FRS2_OFFSET_RS1;
        FmaddD = "fmadd.d", R4M, FRD_FRS1_FRS2_FRS3_RM;
        FmsubD = "fmsub.d", R4M, FRD_FRS1_FRS2_FRS3_RM;
        FnmsubD = "fnmsub.d", R4M, FRD_FRS1_FRS2_FRS3_RM;
        FnmaddD = "fnmadd.d", R4M, FRD_FRS1_FRS2_FRS3_RM;
        FaddD = "fadd.d", RM, FRD_FRS1_FRS2_RM;
        FsubD = "fsub.d", RM, FRD_FRS1_FRS2_RM;
        FmulD = "fmul.d", RM, FRD_FRS1_FRS2_RM;
        FdivD = "fdiv.d", RM, FRD_FRS1_FRS2_RM;
        FsgnjD = "fsgnj.d", R, FRD_FRS1_FRS2 => FSGNJ_D;
        FsgnjnD = "fsgnjn.d", R, FRD_FRS1_FRS2 => FSGNJN_D;
        FsgnjxD = "fsgnjx.d", R, FRD_FRS1_FRS2 => FSGNJX_D;
        FminD = "fmin.d", R, FRD_FRS1_FRS2;
        FmaxD = "fmax.d", R, FRD_FRS1_FRS2;
        FsqrtD = "fsqrt.d", RM, FRD_FRS1_RM;
        FleD = "fle.d", R, RD_FRS1_FRS2;
        FltD = "flt.d", R, RD_FRS1_FRS2;
        FeqD = "feq.d", R, RD_FRS1_FRS2;
        FcvtWD = "fcvt.w.d", RM, RD_FRS1_RM;
        FcvtWuD = "fcvt.wu.d", RM, RD_FRS1_RM;
        FcvtLD = "fcvt.l.d", RM, RD_FRS1_RM;
        FcvtLuD = "fcvt.lu.d", RM, RD_FRS1_RM;
        FcvtDW = "fcvt.d.w", RM, FRD_RS1_RM;
        FcvtDWu = "fcvt.d.wu", RM, FRD_RS1_RM;
        FcvtDL = "fcvt.d.l", RM, FRD_RS1_RM;
        FcvtDLu = "fcvt.d.lu", RM, FRD_RS1_RM;
        FmvXD = "fmv.x.d", R, RD_FRS1;
        FclassD = "fclass.d", R, RD_FRS1;
        FmvDX = "fmv.d.x", R, FRD_RS1;
        FcvtSD = "fcvt.s.d", RM, FRD_FRS1_RM;
        FcvtDS = "fcvt.d.s", RM, FRD_FRS1_RM;

        // Q
        Flq = "flq", I, FRD_OFFSET_RS1;
        Fsq = "fsq", S, FRS2_OFFSET_RS1;
        FmaddQ = "fmadd.q", R4M, FRD_FRS1_FRS2_FRS3_RM;
        FmsubQ = "fmsub.q", R4M, FRD_FRS1_FRS2_FRS3_RM;
        FnmsubQ = "fnmsub.q", R4M, FRD_FRS1_FRS2_FRS3_RM;
        FnmaddQ = "fnmadd.q", R4M, FRD_FRS1_FRS2_FRS3_RM;
        FaddQ = "fadd.q", RM, FRD_FRS1_FRS2_RM;
        FsubQ = "fsub.q", RM, FRD_FRS1_FRS2_RM;
        FmulQ = "fmul.q", RM, FRD_FRS1_FRS2_RM;
        FdivQ = "fdiv.q", RM, FRD_FRS1_FRS2_RM;
        FsgnjQ = "fsgnj.q", R, FRD_FRS1_FRS2 => FSGNJ_Q;
        FsgnjnQ = "fsgnjn.q", R, FRD_FRS1_FRS2 => FSGNJN_Q;
        FsgnjxQ = "fsgnjx.q", R, FRD_FRS1_FRS2 => FSGNJX_Q;
        FminQ = "fmin.q", R, FRD_FRS1_FRS2;
        FmaxQ = "fmax.q", R, FRD_FRS1_FRS2;
        FsqrtQ = "fsqrt.q", RM, FRD_FRS1_RM;
        FleQ = "fle.q", R, RD_FRS1_FRS2;
        FltQ = "flt.q", R, RD_FRS1_FRS2;
        FeqQ = "feq.q", R, RD_FRS1_FRS2;
        FcvtWQ = "fcvt.w.q", RM, RD_FRS1_RM;
        FcvtWuQ = "fcvt.wu.q", RM, RD_FRS1_RM;
        FcvtLQ = "fcvt.l.q", RM, RD_FRS1_RM;
        FcvtLuQ = "fcvt.lu.q", RM, RD_FRS1_RM;
        FcvtQW = "fcvt.q.w", RM, FRD_RS1_RM;
        FcvtQWu = "fcvt.q.wu", RM, FRD_RS1_RM;
        FcvtQL = "fcvt.q.l", RM, FRD_RS1_RM;
        FcvtQLu = "fcvt.q.lu", RM, FRD_RS1_RM;
        FmvXQ = "fmv.x.q", R, RD_FRS1;
        FclassQ = "fclass.q", R, RD_FRS1;
        FmvQX = "fmv.q.x", R, FRD_RS1;
        FcvtSQ = "fcvt.s.q", RM, FRD_FRS1_RM;
        FcvtQS = "fcvt.q.s", RM, FRD_FRS1_RM;
        FcvtDQ = "fcvt.d.q", RM, FRD_FRS1_RM;
        FcvtQD = "fcvt.q.d", RM, FRD_FRS1_RM;

        // Zfh
        Flh = "flh", I, FRD_OFFSET_RS1;
        Fsh = "fsh", S, FRS2_OFFSET_RS1;
        FmaddH = "fmadd.h", R4M, FRD_FRS1_FRS2_FRS3_RM;
        FmsubH = "fmsub.h", R4M, FRD_FRS1_FRS2_FRS3_RM;
        FnmsubH = "fnmsub.h", R4M, FRD_FRS1_FRS2_FRS3_RM;
        FnmaddH = "fnmadd.h", R4M, FRD_FRS1_FRS2_FRS3_RM;
        FaddH = "fadd.h", RM, FRD_FRS1_FRS2_RM;
        FsubH = "fsub.h", RM, FRD_FRS1_FRS2_RM;
        FmulH = "fmul.h", RM, FRD_FRS1_FRS2_RM;
        FdivH = "fdiv.h", RM, FRD_FRS1_FRS2_RM;
        FsgnjH = "fsgnj.h", R, FRD_FRS1_FRS2 => FSGNJ_H;
        FsgnjnH = "fsgnjn.h", R, FRD_FRS1_FRS2 => FSGNJN_H;
        FsgnjxH = "fsgnjx.h", R, FRD_FRS1_FRS2 => FSGNJX_H;
        FminH = "fmin.h", R, FRD_FRS1_FRS2;
        FmaxH = "fmax.h", R, FRD_FRS1_FRS2;
        FsqrtH = "fsqrt.h", RM, FRD_FRS1_RM;
        FleH = "fle.h", R, RD_FRS1_FRS2;
        FltH = "flt.h", R, RD_FRS1_FRS2;
        FeqH = "feq.h", R, RD_FRS1_FRS2;
        FcvtWH = "fcvt.w.h", RM, RD_FRS1_RM;
        FcvtWuH = "fcvt.wu.h", RM, RD_FRS1_RM;
        FcvtLH = "fcvt.l.h", RM, RD_FRS1_RM;
        FcvtLuH = "fcvt.lu.h", RM, RD_FRS1_RM;
        FcvtHW = "fcvt.h.w", RM, FRD_RS1_RM;
        FcvtHWu = "fcvt.h.wu", RM, FRD_RS1_RM;
        FcvtHL = "fcvt.h.l", RM, FRD_RS1_RM;
        FcvtHLu = "fcvt.h.lu", RM, FRD_RS1_RM;
        FmvXH = "fmv.x.h", R, RD_FRS1;
        FclassH = "fclass.h", R, RD_FRS1;
        FmvHX = "fmv.h.x", R, FRD_RS1;
        FcvtSH = "fcvt.s.h", RM, FRD_FRS1_RM;
        FcvtHS = "fcvt.h.s", RM, FRD_FRS1_RM;
        FcvtDH = "fcvt.d.h", RM, FRD_FRS1_RM;
        FcvtHD = "fcvt.h.d", RM, FRD_FRS1_RM;
        FcvtQH = "fcvt.q.h", RM, FRD_FRS1_RM;
        FcvtHQ = "fcvt.h.q", RM, FRD_FRS1_RM;

        // Zfa
        FliS = "fli.s", Fli, FRD_FLI;
        FminmS = "fminm.s", R, FRD_FRS1_FRS2;
        FmaxmS = "fmaxm.s", R, FRD_FRS1_FRS2;
        FroundS = "fround.s", RM, FRD_FRS1_RM;
        FroundnxS = "froundnx.s", RM, FRD_FRS1_RM;
        FleqS = "fleq.s", R, RD_FRS1_FRS2;
        FltqS = "fltq.s", R, RD_FRS1_FRS2;
        FliD = "fli.d", Fli, FRD_FLI;
        FminmD = "fminm.d", R, FRD_FRS1_FRS2;
        FmaxmD = "fmaxm.d", R, FRD_FRS1_FRS2;
        FroundD = "fround.d", RM, FRD_FRS1_RM;
        FroundnxD = "froundnx.d", RM, FRD_FRS1_RM;
        FleqD = "fleq.d", R, RD_FRS1_FRS2;
        FltqD = "fltq.d", R, RD_FRS1_FRS2;
        FliQ = "fli.q", Fli, FRD_FLI;
        FminmQ = "fminm.q", R, FRD_FRS1_FRS2;
        FmaxmQ = "fmaxm.q", R, FRD_FRS1_FRS2;
        FroundQ = "fround.q", RM, FRD_FRS1_RM;
        FroundnxQ = "froundnx.q", RM, FRD_FRS1_RM;
        FleqQ = "fleq.q", R, RD_FRS1_FRS2;
        FltqQ = "fltq.q", R, RD_FRS1_FRS2;
        FliH = "fli.h", Fli, FRD_FLI;
        FminmH = "fminm.h", R, FRD_FRS1_FRS2;
        FmaxmH = "fmaxm.h", R, FRD_FRS1_FRS2;
        FroundH = "fround.h", RM, FRD_FRS1_RM;
        FroundnxH = "froundnx.h", RM, FRD_FRS1_RM;
        FleqH = "fleq.h", R, RD_FRS1_FRS2;
        FltqH = "fltq.h", R, RD_FRS1_FRS2;
        FcvtmodWD = "fcvtmod.w.d", RM, RD_FRS1_RM;
        FmvhXD = "fmvh.x.d", R, RD_FRS1;
        FmvpDX = "fmvp.d.x", R, FRD_RS1_RS2;
        FmvhXQ = "fmvh.x.q", R, RD_FRS1;
        FmvpQX = "fmvp.q.x", R, FRD_RS1_RS2;

        // C
        CAddi4spn = "c.addi4spn", Ciw4spn, RD_RS1_IMM <= [Addi, Addi, Addi] nz;
        CFld = "c.fld", ClLd, FRD_OFFSET_RS1 <= [Fld, Fld, Illegal];
        CLw = "c.lw", ClLw, RD_OFFSET_RS1 <= [Lw, Lw, Lw];
        CFlw = "c.flw", ClLw, FRD_OFFSET_RS1 <= [Flw, Illegal, Illegal];
        CFsd = "c.fsd", CsSd, FRS2_OFFSET_RS1 <= [Fsd, Fsd, Illegal];
        CSw = "c.sw", CsSw, RS2_OFFSET_RS1 <= [Sw, Sw, Sw];
        CFsw = "c.fsw", CsSw, FRS2_OFFSET_RS1 <= [Fsw, Illegal, Illegal];
        CNop = "c.nop", CiNone, NONE <= [Addi, Addi, Addi];
        CAddi = "c.addi", Ci, RD_RS1_IMM <= [Addi, Addi, Addi] nz;
        CJal = "c.jal", CjJal, OFFSET <= [Jal, Illegal, Illegal];
        CLi = "c.li", CiLi, RD_IMM <= [Addi, Addi, Addi];
        CAddi16sp = "c.addi16sp", Ci16sp, RD_RS1_IMM <= [Addi, Addi, Addi] nz;
        CLui = "c.lui", CiLui, RD_UIMM <= [Lui, Lui, Lui] nz;
        CSrli = "c.srli", CbSh6, RD_RS1_IMM <= [Srli, Srli, Srli] nz;
        CSrai = "c.srai", CbSh6, RD_RS1_IMM <= [Srai, Srai, Srai] nz;
        CAndi = "c.andi", CbImm, RD_RS1_IMM <= [Andi, Andi, Andi];
        CSub = "c.sub", Cs, RD_RS1_RS2 <= [Sub, Sub, Sub];
        CXor = "c.xor", Cs, RD_RS1_RS2 <= [Xor, Xor, Xor];
        COr = "c.or", Cs, RD_RS1_RS2 <= [Or, Or, Or];
        CAnd = "c.and", Cs, RD_RS1_RS2 <= [And, And, And];
        CSubw = "c.subw", Cs, RD_RS1_RS2 <= [Illegal, Subw, Subw];
        CAddw = "c.addw", Cs, RD_RS1_RS2 <= [Illegal, Addw, Addw];
        CJ = "c.j", Cj, OFFSET <= [Jal, Jal, Jal];
        CBeqz = "c.beqz", Cb, RS1_OFFSET <= [Beq, Beq, Beq];
        CBnez = "c.bnez", Cb, RS1_OFFSET <= [Bne, Bne, Bne];
        CSlli = "c.slli", CiSh6, RD_RS1_IMM <= [Slli, Slli, Slli] nz;
        CFldsp = "c.fldsp", CiLdsp, FRD_OFFSET_RS1 <= [Fld, Fld, Illegal];
        CLwsp = "c.lwsp", CiLwsp, RD_OFFSET_RS1 <= [Lw, Lw, Lw];
        CFlwsp = "c.flwsp", CiLwsp, FRD_OFFSET_RS1 <= [Flw, Illegal, Illegal];
        CJr = "c.jr", CrJr, RS1 <= [Jalr, Jalr, Jalr];
        CMv = "c.mv", CrMv, RD_RS1 <= [Addi, Addi, Addi];
        CEbreak = "c.ebreak", CiNone, NONE <= [Ebreak, Ebreak, Ebreak];
        CJalr = "c.jalr", CrJalr, RS1 <= [Jalr, Jalr, Jalr];
        CAdd = "c.add", Cr, RD_RS1_RS2 <= [Add, Add, Add];
        CFsdsp = "c.fsdsp", CssSdsp, FRS2_OFFSET_RS1 <= [Fsd, Fsd, Illegal];
        CSwsp = "c.swsp", CssSwsp, RS2_OFFSET_RS1 <= [Sw, Sw, Sw];
        CFswsp = "c.fswsp", CssSwsp, FRS2_OFFSET_RS1 <= [Fsw, Illegal, Illegal];
        CLd = "c.ld", ClLd, RD_OFFSET_RS1 <= [Illegal, Ld, Ld];
        CSd = "c.sd", CsSd, RS2_OFFSET_RS1 <= [Illegal, Sd, Sd];
        CAddiw = "c.addiw", Ci, RD_RS1_IMM <= [Illegal, Addiw, Addiw];
        CLdsp = "c.ldsp", CiLdsp, RD_OFFSET_RS1 <= [Illegal, Ld, Ld];
        CSdsp = "c.sdsp", CssSdsp, RS2_OFFSET_RS1 <= [Illegal, Sd, Sd];
        CLq = "c.lq", ClLq, RD_OFFSET_RS1 <= [Illegal, Illegal, Lq];
        CSq = "c.sq", CsSq, RS2_OFFSET_RS1 <= [Illegal, Illegal, Sq];
        CLqsp = "c.lqsp", CiLqsp, RD_OFFSET_RS1 <= [Illegal, Illegal, Lq];
        CSqsp = "c.sqsp", CssSqsp, RS2_OFFSET_RS1 <= [Illegal, Illegal, Sq];

        // Zcb
        CLbu = "c.lbu", ZcbLb, RD_OFFSET_RS1 <= [Lbu, Lbu, Lbu];
        CLhu = "c.lhu", ZcbLh, RD_OFFSET_RS1 <= [Lhu, Lhu, Lhu];
        CLh = "c.lh", ZcbLh, RD_OFFSET_RS1 <= [Lh, Lh, Lh];
        CSb = "c.sb", ZcbLb, RS2_OFFSET_RS1 <= [Sb, Sb, Sb];
        CSh = "c.sh", ZcbLh, RS2_OFFSET_RS1 <= [Sh, Sh, Sh];
        CZextB = "c.zext.b", ZcbExt, RD;
        CSextB = "c.sext.b", ZcbExt, RD;
        CZextH = "c.zext.h", ZcbExt, RD;
        CSextH = "c.sext.h", ZcbExt, RD;
        CZextW = "c.zext.w", ZcbExt, RD;
        CNot = "c.not", ZcbExt, RD;
        CMul = "c.mul", ZcbMul, RD_RS2;

        // Zcmp / Zcmt
        CmPush = "cm.push", ZcmpPushPop, PUSH;
        CmPop = "cm.pop", ZcmpPushPop, POP;
        CmPopret = "cm.popret", ZcmpPushPop, POP;
        CmPopretz = "cm.popretz", ZcmpPushPop, POP;
        CmMva01s = "cm.mva01s", ZcmpMv, RS1_RS2;
        CmMvsa01 = "cm.mvsa01", ZcmpMv, RS1_RS2;
        CmJt = "cm.jt", ZcmtJt, IMM;
        CmJalt = "cm.jalt", ZcmtJt, IMM;

        // Zba / Zbb / Zbc / Zbs
        Sh1add = "sh1add", R, RD_RS1_RS2;
        Sh2add = "sh2add", R, RD_RS1_RS2;
        Sh3add = "sh3add", R, RD_RS1_RS2;
        AddUw = "add.uw", R, RD_RS1_RS2 => ADD_UW;
        Sh1addUw = "sh1add.uw", R, RD_RS1_RS2;
        Sh2addUw = "sh2add.uw", R, RD_RS1_RS2;
        Sh3addUw = "sh3add.uw", R, RD_RS1_RS2;
        SlliUw = "slli.uw", ISh6, RD_RS1_IMM;
        Andn = "andn", R, RD_RS1_RS2;
        Orn = "orn", R, RD_RS1_RS2;
        Xnor = "xnor", R, RD_RS1_RS2;
        Clz = "clz", R, RD_RS1;
        Ctz = "ctz", R, RD_RS1;
        Cpop = "cpop", R, RD_RS1;
        Clzw = "clzw", R, RD_RS1;
        Ctzw = "ctzw", R, RD_RS1;
        Cpopw = "cpopw", R, RD_RS1;
        Max = "max", R, RD_RS1_RS2;
        Maxu = "maxu", R, RD_RS1_RS2;
        Min = "min", R, RD_RS1_RS2;
        Minu = "minu", R, RD_RS1_RS2;
        SextB = "sext.b", R, RD_RS1;
        SextH = "sext.h", R, RD_RS1;
        ZextH = "zext.h", R, RD_RS1;
        Rol = "rol", R, RD_RS1_RS2;
        Ror = "ror", R, RD_RS1_RS2;
        Rori = "rori", ISh7, RD_RS1_IMM;
        Rolw = "rolw", R, RD_RS1_RS2;
        Rorw = "rorw", R, RD_RS1_RS2;
        Roriw = "roriw", ISh5, RD_RS1_IMM;
        OrcB = "orc.b", R, RD_RS1;
        Rev8 = "rev8", R, RD_RS1;
        Clmul = "clmul", R, RD_RS1_RS2;
        Clmulh = "clmulh", R, RD_RS1_RS2;
        Clmulr = "clmulr", R, RD_RS1_RS2;
        Bclr = "bclr", R, RD_RS1_RS2;
        Bclri = "bclri", ISh7, RD_RS1_IMM;
        Bext = "bext", R, RD_RS1_RS2;
        Bexti = "bexti", ISh7, RD_RS1_IMM;
        Binv = "binv", R, RD_RS1_RS2;
        Binvi = "binvi", ISh7, RD_RS1_IMM;
        Bset = "bset", R, RD_RS1_RS2;
        Bseti = "bseti", ISh7, RD_RS1_IMM;

        // Zbkb / Zbkx
        Pack = "pack", R, RD_RS1_RS2;
        Packh = "packh", R, RD_RS1_RS2;
        Packw = "packw", R, RD_RS1_RS2;
        Brev8 = "brev8", R, RD_RS1;
        Zip = "zip", R, RD_RS1;
        Unzip = "unzip", R, RD_RS1;
        Xperm4 = "xperm4", R, RD_RS1_RS2;
        Xperm8 = "xperm8", R, RD_RS1_RS2;

        // Scalar crypto
        Aes32esi = "aes32esi", KBs, RD_RS1_RS2_BS;
        Aes32esmi = "aes32esmi", KBs, RD_RS1_RS2_BS;
        Aes32dsi = "aes32dsi", KBs, RD_RS1_RS2_BS;
        Aes32dsmi = "aes32dsmi", KBs, RD_RS1_RS2_BS;
        Aes64es = "aes64es", R, RD_RS1_RS2;
        Aes64esm = "aes64esm", R, RD_RS1_RS2;
        Aes64ds = "aes64ds", R, RD_RS1_RS2;
        Aes64dsm = "aes64dsm", R, RD_RS1_RS2;
        Aes64im = "aes64im", R, RD_RS1;
        Aes64ks1i = "aes64ks1i", KRnum, RD_RS1_RNUM;
        Aes64ks2 = "aes64ks2", R, RD_RS1_RS2;
        Sha256sig0 = "sha256sig0", R, RD_RS1;
        Sha256sig1 = "sha256sig1", R, RD_RS1;
        Sha256sum0 = "sha256sum0", R, RD_RS1;
        Sha256sum1 = "sha256sum1", R, RD_RS1;
        Sha512sig0 = "sha512sig0", R, RD_RS1;
        Sha512sig1 = "sha512sig1", R, RD_RS1;
        Sha512sum0 = "sha512sum0", R, RD_RS1;
        Sha512sum1 = "sha512sum1", R, RD_RS1;
        Sha512sig0h = "sha512sig0h", R, RD_RS1_RS2;
        Sha512sig0l = "sha512sig0l", R, RD_RS1_RS2;
        Sha512sig1h = "sha512sig1h", R, RD_RS1_RS2;
        Sha512sig1l = "sha512sig1l", R, RD_RS1_RS2;
        Sha512sum0r = "sha512sum0r", R, RD_RS1_RS2;
        Sha512sum1r = "sha512sum1r", R, RD_RS1_RS2;
        Sm3p0 = "sm3p0", R, RD_RS1;
        Sm3p1 = "sm3p1", R, RD_RS1;
        Sm4ed = "sm4ed", KBs, RD_RS1_RS2_BS;
        Sm4ks = "sm4ks", KBs, RD_RS1_RS2_BS;

        // Zicond / Zicbom / Zicboz / Zicbop
        CzeroEqz = "czero.eqz", R, RD_RS1_RS2;
        CzeroNez = "czero.nez", R, RD_RS1_RS2;
        CboClean = "cbo.clean", R, RS1_ADDR;
        CboFlush = "cbo.flush", R, RS1_ADDR;
        CboInval = "cbo.inval", R, RS1_ADDR;
        CboZero = "cbo.zero", R, RS1_ADDR;
        PrefetchI = "prefetch.i", Prefetch, OFFSET_RS1;
        PrefetchR = "prefetch.r", Prefetch, OFFSET_RS1;
        PrefetchW = "prefetch.w", Prefetch, OFFSET_RS1;

        // RVV 1.0 and Zvbb
        Vsetvli = "vsetvli", Vsetvli, VSETVLI;
        Vsetivli = "vsetivli", Vsetivli, VSETIVLI;
        Vsetvl = "vsetvl", R, RD_RS1_RS2;
        Vle8V = "vle8.v", VLdst, VD_ADDR_VM;
        Vle16V = "vle16.v", VLdst, VD_ADDR_VM;
        Vle32V = "vle32.v", VLdst, VD_ADDR_VM;
        Vle64V = "vle64.v", VLdst, VD_ADDR_VM;
        Vle8ffV = "vle8ff.v", VLdst, VD_ADDR_VM;
        Vle16ffV = "vle16ff.v", VLdst, VD_ADDR_VM;
        Vle32ffV = "vle32ff.v", VLdst, VD_ADDR_VM;
        Vle64ffV = "vle64ff.v", VLdst, VD_ADDR_VM;
        VlmV = "vlm.v", VLdst, VD_ADDR;
        Vlse8V = "vlse8.v", VLdst, VD_ADDR_RS2_VM;
        Vlse16V = "vlse16.v", VLdst, VD_ADDR_RS2_VM;
        Vlse32V = "vlse32.v", VLdst, VD_ADDR_RS2_VM;
        Vlse64V = "vlse64.v", VLdst, VD_ADDR_RS2_VM;
        Vluxei8V = "vluxei8.v", VLdst, VD_ADDR_VS2_VM;
        Vluxei16V = "vluxei16.v", VLdst, VD_ADDR_VS2_VM;
        Vluxei32V = "vluxei32.v", VLdst, VD_ADDR_VS2_VM;
        Vluxei64V = "vluxei64.v", VLdst, VD_ADDR_VS2_VM;
        Vloxei8V = "vloxei8.v", VLdst, VD_ADDR_VS2_VM;
        Vloxei16V = "vloxei16.v", VLdst, VD_ADDR_VS2_VM;
        Vloxei32V = "vloxei32.v", VLdst, VD_ADDR_VS2_VM;
        Vloxei64V = "vloxei64.v", VLdst, VD_ADDR_VS2_VM;
        Vl1re8V = "vl1re8.v", VLdst, VD_ADDR;
        Vl1re16V = "vl1re16.v", VLdst, VD_ADDR;
        Vl1re32V = "vl1re32.v", VLdst, VD_ADDR;
        Vl1re64V = "vl1re64.v", VLdst, VD_ADDR;
        Vl2re8V = "vl2re8.v", VLdst, VD_ADDR;
        Vl2re16V = "vl2re16.v", VLdst, VD_ADDR;
        Vl2re32V = "vl2re32.v", VLdst, VD_ADDR;
        Vl2re64V = "vl2re64.v", VLdst, VD_ADDR;
        Vl4re8V = "vl4re8.v", VLdst, VD_ADDR;
        Vl4re16V = "vl4re16.v", VLdst, VD_ADDR;
        Vl4re32V = "vl4re32.v", VLdst, VD_ADDR;
        Vl4re64V = "vl4re64.v", VLdst, VD_ADDR;
        Vl8re8V = "vl8re8.v", VLdst, VD_ADDR;
        Vl8re16V = "vl8re16.v", VLdst, VD_ADDR;
        Vl8re32V = "vl8re32.v", VLdst, VD_ADDR;
        Vl8re64V = "vl8re64.v", VLdst, VD_ADDR;
        Vse8V = "vse8.v", VLdst, VD_ADDR_VM;
        Vse16V = "vse16.v", VLdst, VD_ADDR_VM;
        Vse32V = "vse32.v", VLdst, VD_ADDR_VM;
        Vse64V = "vse64.v", VLdst, VD_ADDR_VM;
        VsmV = "vsm.v", VLdst, VD_ADDR;
        Vsse8V = "vsse8.v", VLdst, VD_ADDR_RS2_VM;
        Vsse16V = "vsse16.v", VLdst, VD_ADDR_RS2_VM;
        Vsse32V = "vsse32.v", VLdst, VD_ADDR_RS2_VM;
        Vsse64V = "vsse64.v", VLdst, VD_ADDR_RS2_VM;
        Vsuxei8V = "vsuxei8.v", VLdst, VD_ADDR_VS2_VM;
        Vsuxei16V = "vsuxei16.v", VLdst, VD_ADDR_VS2_VM;
        Vsuxei32V = "vsuxei32.v", VLdst, VD_ADDR_VS2_VM;
        Vsuxei64V = "vsuxei64.v", VLdst, VD_ADDR_VS2_VM;
        Vsoxei8V = "vsoxei8.v", VLdst, VD_ADDR_VS2_VM;
        Vsoxei16V = "vsoxei16.v", VLdst, VD_ADDR_VS2_VM;
        Vsoxei32V = "vsoxei32.v", VLdst, VD_ADDR_VS2_VM;
        Vsoxei64V = "vsoxei64.v", VLdst, VD_ADDR_VS2_VM;
        Vs1rV = "vs1r.v", VLdst, VD_ADDR;
        Vs2rV = "vs2r.v", VLdst, VD_ADDR;
        Vs4rV = "vs4r.v", VLdst, VD_ADDR;
        Vs8rV = "vs8r.v", VLdst, VD_ADDR;
        VaddVv = "vadd.vv", VR, VD_VS2_VS1_VM;
        VaddVx = "vadd.vx", VR, VD_VS2_RS1_VM;
        VaddVi = "vadd.vi", VI, VD_VS2_IMM_VM;
        VandnVv = "vandn.vv", VR, VD_VS2_VS1_VM;
        VandnVx = "vandn.vx", VR, VD_VS2_RS1_VM;
        VsubVv = "vsub.vv", VR, VD_VS2_VS1_VM;
        VsubVx = "vsub.vx", VR, VD_VS2_RS1_VM;
        VrsubVx = "vrsub.vx", VR, VD_VS2_RS1_VM => VRSUB_VX;
        VrsubVi = "vrsub.vi", VI, VD_VS2_IMM_VM;
        VminuVv = "vminu.vv", VR, VD_VS2_VS1_VM;
        VminuVx = "vminu.vx", VR, VD_VS2_RS1_VM;
        VminVv = "vmin.vv", VR, VD_VS2_VS1_VM;
        VminVx = "vmin.vx", VR, VD_VS2_RS1_VM;
        VmaxuVv = "vmaxu.vv", VR, VD_VS2_VS1_VM;
        VmaxuVx = "vmaxu.vx", VR, VD_VS2_RS1_VM;
        VmaxVv = "vmax.vv", VR, VD_VS2_VS1_VM;
        VmaxVx = "vmax.vx", VR, VD_VS2_RS1_VM;
        VandVv = "vand.vv", VR, VD_VS2_VS1_VM;
        VandVx = "vand.vx", VR, VD_VS2_RS1_VM;
        VandVi = "vand.vi", VI, VD_VS2_IMM_VM;
        VorVv = "vor.vv", VR, VD_VS2_VS1_VM;
        VorVx = "vor.vx", VR, VD_VS2_RS1_VM;
        VorVi = "vor.vi", VI, VD_VS2_IMM_VM;
        VxorVv = "vxor.vv", VR, VD_VS2_VS1_VM;
        VxorVx = "vxor.vx", VR, VD_VS2_RS1_VM;
        VxorVi = "vxor.vi", VI, VD_VS2_IMM_VM => VXOR_VI;
        VrgatherVv = "vrgather.vv", VR, VD_VS2_VS1_VM;
        VrgatherVx = "vrgather.vx", VR, VD_VS2_RS1_VM;
        VrgatherVi = "vrgather.vi", VI, VD_VS2_UIMM_VM;
        Vrgatherei16Vv = "vrgatherei16.vv", VR, VD_VS2_VS1_VM;
        VslideupVx = "vslideup.vx", VR, VD_VS2_RS1_VM;
        VslideupVi = "vslideup.vi", VI, VD_VS2_UIMM_VM;
        VslidedownVx = "vslidedown.vx", VR, VD_VS2_RS1_VM;
        VslidedownVi = "vslidedown.vi", VI, VD_VS2_UIMM_VM;
        VadcVvm = "vadc.vvm", VR, VD_VS2_VS1_VL;
        VadcVxm = "vadc.vxm", VR, VD_VS2_RS1_VL;
        VadcVim = "vadc.vim", VI, VD_VS2_IMM_VL;
        VmadcVvm = "vmadc.vvm", VR, VD_VS2_VS1_VL;
        VmadcVxm = "vmadc.vxm", VR, VD_VS2_RS1_VL;
        VmadcVim = "vmadc.vim", VI, VD_VS2_IMM_VL;
        VmadcVv = "vmadc.vv", VR, VD_VS2_VS1;
        VmadcVx = "vmadc.vx", VR, VD_VS2_RS1;
        VmadcVi = "vmadc.vi", VI, VD_VS2_IMM;
        VsbcVvm = "vsbc.vvm", VR, VD_VS2_VS1_VL;
        VsbcVxm = "vsbc.vxm", VR, VD_VS2_RS1_VL;
        VmsbcVvm = "vmsbc.vvm", VR, VD_VS2_VS1_VL;
        VmsbcVxm = "vmsbc.vxm", VR, VD_VS2_RS1_VL;
        VmsbcVv = "vmsbc.vv", VR, VD_VS2_VS1;
        VmsbcVx = "vmsbc.vx", VR, VD_VS2_RS1;
        VrorVv = "vror.vv", VR, VD_VS2_VS1_VM;
        VrorVx = "vror.vx", VR, VD_VS2_RS1_VM;
        VrorVi = "vror.vi", VrorVi, VD_VS2_IMM_VM;
        VrolVv = "vrol.vv", VR, VD_VS2_VS1_VM;
        VrolVx = "vrol.vx", VR, VD_VS2_RS1_VM;
        VmergeVvm = "vmerge.vvm", VR, VD_VS2_VS1_VL;
        VmergeVxm = "vmerge.vxm", VR, VD_VS2_RS1_VL;
        VmergeVim = "vmerge.vim", VI, VD_VS2_IMM_VL;
        VmvVV = "vmv.v.v", VR, VD_VS1;
        VmvVX = "vmv.v.x", VR, VD_RS1;
        VmvVI = "vmv.v.i", VI, VD_IMM;
        VmseqVv = "vmseq.vv", VR, VD_VS2_VS1_VM;
        VmseqVx = "vmseq.vx", VR, VD_VS2_RS1_VM;
        VmseqVi = "vmseq.vi", VI, VD_VS2_IMM_VM;
        VmsneVv = "vmsne.vv", VR, VD_VS2_VS1_VM;
        VmsneVx = "vmsne.vx", VR, VD_VS2_RS1_VM;
        VmsneVi = "vmsne.vi", VI, VD_VS2_IMM_VM;
        VmsltuVv = "vmsltu.vv", VR, VD_VS2_VS1_VM;
        VmsltuVx = "vmsltu.vx", VR, VD_VS2_RS1_VM;
        VmsltVv = "vmslt.vv", VR, VD_VS2_VS1_VM;
        VmsltVx = "vmslt.vx", VR, VD_VS2_RS1_VM;
        VmsleuVv = "vmsleu.vv", VR, VD_VS2_VS1_VM;
        VmsleuVx = "vmsleu.vx", VR, VD_VS2_RS1_VM;
        VmsleuVi = "vmsleu.vi", VI, VD_VS2_IMM_VM;
        VmsleVv = "vmsle.vv", VR, VD_VS2_VS1_VM;
        VmsleVx = "vmsle.vx", VR, VD_VS2_RS1_VM;
        VmsleVi = "vmsle.vi", VI, VD_VS2_IMM_VM;
        VmsgtuVx = "vmsgtu.vx", VR, VD_VS2_RS1_VM;
        VmsgtuVi = "vmsgtu.vi", VI, VD_VS2_IMM_VM;
        VmsgtVx = "vmsgt.vx", VR, VD_VS2_RS1_VM;
        VmsgtVi = "vmsgt.vi", VI, VD_VS2_IMM_VM;
        VsadduVv = "vsaddu.vv", VR, VD_VS2_VS1_VM;
        VsadduVx = "vsaddu.vx", VR, VD_VS2_RS1_VM;
        VsadduVi = "vsaddu.vi", VI, VD_VS2_IMM_VM;
        VsaddVv = "vsadd.vv", VR, VD_VS2_VS1_VM;
        VsaddVx = "vsadd.vx", VR, VD_VS2_RS1_VM;
        VsaddVi = "vsadd.vi", VI, VD_VS2_IMM_VM;
        VssubuVv = "vssubu.vv", VR, VD_VS2_VS1_VM;
        VssubuVx = "vssubu.vx", VR, VD_VS2_RS1_VM;
        VssubVv = "vssub.vv", VR, VD_VS2_VS1_VM;
        VssubVx = "vssub.vx", VR, VD_VS2_RS1_VM;
        VsllVv = "vsll.vv", VR, VD_VS2_VS1_VM;
        VsllVx = "vsll.vx", VR, VD_VS2_RS1_VM;
        VsllVi = "vsll.vi", VI, VD_VS2_UIMM_VM;
        VsmulVv = "vsmul.vv", VR, VD_VS2_VS1_VM;
        VsmulVx = "vsmul.vx", VR, VD_VS2_RS1_VM;
        Vmv1rV = "vmv1r.v", VR, VD_VS2;
        Vmv2rV = "vmv2r.v", VR, VD_VS2;
        Vmv4rV = "vmv4r.v", VR, VD_VS2;
        Vmv8rV = "vmv8r.v", VR, VD_VS2;
        VsrlVv = "vsrl.vv", VR, VD_VS2_VS1_VM;
        VsrlVx = "vsrl.vx", VR, VD_VS2_RS1_VM;
        VsrlVi = "vsrl.vi", VI, VD_VS2_UIMM_VM;
        VsraVv = "vsra.vv", VR, VD_VS2_VS1_VM;
        VsraVx = "vsra.vx", VR, VD_VS2_RS1_VM;
        VsraVi = "vsra.vi", VI, VD_VS2_UIMM_VM;
        VssrlVv = "vssrl.vv", VR, VD_VS2_VS1_VM;
        VssrlVx = "vssrl.vx", VR, VD_VS2_RS1_VM;
        VssrlVi = "vssrl.vi", VI, VD_VS2_UIMM_VM;
        VssraVv = "vssra.vv", VR, VD_VS2_VS1_VM;
        VssraVx = "vssra.vx", VR, VD_VS2_RS1_VM;
        VssraVi = "vssra.vi", VI, VD_VS2_UIMM_VM;
        VnsrlWv = "vnsrl.wv", VR, VD_VS2_VS1_VM;
        VnsrlWx = "vnsrl.wx", VR, VD_VS2_RS1_VM => VNSRL_WX;
        VnsrlWi = "vnsrl.wi", VI, VD_VS2_UIMM_VM;
        VnsraWv = "vnsra.wv", VR, VD_VS2_VS1_VM;
        VnsraWx = "vnsra.wx", VR, VD_VS2_RS1_VM;
        VnsraWi = "vnsra.wi", VI, VD_VS2_UIMM_VM;
        VnclipuWv = "vnclipu.wv", VR, VD_VS2_VS1_VM;
        VnclipuWx = "vnclipu.wx", VR, VD_VS2_RS1_VM;
        VnclipuWi = "vnclipu.wi", VI, VD_VS2_UIMM_VM;
        VnclipWv = "vnclip.wv", VR, VD_VS2_VS1_VM;
        VnclipWx = "vnclip.wx", VR, VD_VS2_RS1_VM;
        VnclipWi = "vnclip.wi", VI, VD_VS2_UIMM_VM;
        VwredsumuVs = "vwredsumu.vs", VR, VD_VS2_VS1_VM;
        VwredsumVs = "vwredsum.vs", VR, VD_VS2_VS1_VM;
        VwsllVv = "vwsll.vv", VR, VD_VS2_VS1_VM;
        VwsllVx = "vwsll.vx", VR, VD_VS2_RS1_VM;
        VwsllVi = "vwsll.vi", VI, VD_VS2_UIMM_VM;
        VredsumVs = "vredsum.vs", VR, VD_VS2_VS1_VM;
        VredandVs = "vredand.vs", VR, VD_VS2_VS1_VM;
        VredorVs = "vredor.vs", VR, VD_VS2_VS1_VM;
        VredxorVs = "vredxor.vs", VR, VD_VS2_VS1_VM;
        VredminuVs = "vredminu.vs", VR, VD_VS2_VS1_VM;
        VredminVs = "vredmin.vs", VR, VD_VS2_VS1_VM;
        VredmaxuVs = "vredmaxu.vs", VR, VD_VS2_VS1_VM;
        VredmaxVs = "vredmax.vs", VR, VD_VS2_VS1_VM;
        VaadduVv = "vaaddu.vv", VR, VD_VS2_VS1_VM;
        VaadduVx = "vaaddu.vx", VR, VD_VS2_RS1_VM;
        VaaddVv = "vaadd.vv", VR, VD_VS2_VS1_VM;
        VaaddVx = "vaadd.vx", VR, VD_VS2_RS1_VM;
        VasubuVv = "vasubu.vv", VR, VD_VS2_VS1_VM;
        VasubuVx = "vasubu.vx", VR, VD_VS2_RS1_VM;
        VasubVv = "vasub.vv", VR, VD_VS2_VS1_VM;
        VasubVx = "vasub.vx", VR, VD_VS2_RS1_VM;
        Vslide1upVx = "vslide1up.vx", VR, VD_VS2_RS1_VM;
        Vslide1downVx = "vslide1down.vx", VR, VD_VS2_RS1_VM;
        VmvXS = "vmv.x.s", VR, RD_VS2;
        VcpopM = "vcpop.m", VR, RD_VS2_VM;
        VfirstM = "vfirst.m", VR, RD_VS2_VM;
        VmvSX = "vmv.s.x", VR, VD_RS1;
        VzextVf8 = "vzext.vf8", VR, VD_VS2_VM;
        VsextVf8 = "vsext.vf8", VR, VD_VS2_VM;
        VzextVf4 = "vzext.vf4", VR, VD_VS2_VM;
        VsextVf4 = "vsext.vf4", VR, VD_VS2_VM;
        VzextVf2 = "vzext.vf2", VR, VD_VS2_VM;
        VsextVf2 = "vsext.vf2", VR, VD_VS2_VM;
        Vbrev8V = "vbrev8.v", VR, VD_VS2_VM;
        Vrev8V = "vrev8.v", VR, VD_VS2_VM;
        VbrevV = "vbrev.v", VR, VD_VS2_VM;
        VclzV = "vclz.v", VR, VD_VS2_VM;
        VctzV = "vctz.v", VR, VD_VS2_VM;
        VcpopV = "vcpop.v", VR, VD_VS2_VM;
        VmsbfM = "vmsbf.m", VR, VD_VS2_VM;
        VmsofM = "vmsof.m", VR, VD_VS2_VM;
        VmsifM = "vmsif.m", VR, VD_VS2_VM;
        ViotaM = "viota.m", VR, VD_VS2_VM;
        VidV = "vid.v", VR, VD_VM;
        VcompressVm = "vcompress.vm", VR, VD_VS2_VS1;
        VmandnMm = "vmandn.mm", VR, VD_VS2_VS1;
        VmandMm = "vmand.mm", VR, VD_VS2_VS1 => VMAND_MM;
        VmorMm = "vmor.mm", VR, VD_VS2_VS1;
        VmxorMm = "vmxor.mm", VR, VD_VS2_VS1 => VMXOR_MM;
        VmornMm = "vmorn.mm", VR, VD_VS2_VS1;
        VmnandMm = "vmnand.mm", VR, VD_VS2_VS1 => VMNAND_MM;
        VmnorMm = "vmnor.mm", VR, VD_VS2_VS1;
        VmxnorMm = "vmxnor.mm", VR, VD_VS2_VS1 => VMXNOR_MM;
        VdivuVv = "vdivu.vv", VR, VD_VS2_VS1_VM;
        VdivuVx = "vdivu.vx", VR, VD_VS2_RS1_VM;
        VdivVv = "vdiv.vv", VR, VD_VS2_VS1_VM;
        VdivVx = "vdiv.vx", VR, VD_VS2_RS1_VM;
        VremuVv = "vremu.vv", VR, VD_VS2_VS1_VM;
        VremuVx = "vremu.vx", VR, VD_VS2_RS1_VM;
        VremVv = "vrem.vv", VR, VD_VS2_VS1_VM;
        VremVx = "vrem.vx", VR, VD_VS2_RS1_VM;
        VmulhuVv = "vmulhu.vv", VR, VD_VS2_VS1_VM;
        VmulhuVx = "vmulhu.vx", VR, VD_VS2_RS1_VM;
        VmulVv = "vmul.vv", VR, VD_VS2_VS1_VM;
        VmulVx = "vmul.vx", VR, VD_VS2_RS1_VM;
        VmulhsuVv = "vmulhsu.vv", VR, VD_VS2_VS1_VM;
        VmulhsuVx = "vmulhsu.vx", VR, VD_VS2_RS1_VM;
        VmulhVv = "vmulh.vv", VR, VD_VS2_VS1_VM;
        VmulhVx = "vmulh.vx", VR, VD_VS2_RS1_VM;
        VmaddVv = "vmadd.vv", VR, VD_VS1_VS2_VM;
        VmaddVx = "vmadd.vx", VR, VD_RS1_VS2_VM;
        VnmsubVv = "vnmsub.vv", VR, VD_VS1_VS2_VM;
        VnmsubVx = "vnmsub.vx", VR, VD_RS1_VS2_VM;
        VmaccVv = "vmacc.vv", VR, VD_VS1_VS2_VM;
        VmaccVx = "vmacc.vx", VR, VD_RS1_VS2_VM;
        VnmsacVv = "vnmsac.vv", VR, VD_VS1_VS2_VM;
        VnmsacVx = "vnmsac.vx", VR, VD_RS1_VS2_VM;
        VwadduVv = "vwaddu.vv", VR, VD_VS2_VS1_VM;
        VwadduVx = "vwaddu.vx", VR, VD_VS2_RS1_VM => VWADDU_VX;
        VwaddVv = "vwadd.vv", VR, VD_VS2_VS1_VM;
        VwaddVx = "vwadd.vx", VR, VD_VS2_RS1_VM => VWADD_VX;
        VwsubuVv = "vwsubu.vv", VR, VD_VS2_VS1_VM;
        VwsubuVx = "vwsubu.vx", VR, VD_VS2_RS1_VM;
        VwsubVv = "vwsub.vv", VR, VD_VS2_VS1_VM;
        VwsubVx = "vwsub.vx", VR, VD_VS2_RS1_VM;
        VwadduWv = "vwaddu.wv", VR, VD_VS2_VS1_VM;
        VwadduWx = "vwaddu.wx", VR, VD_VS2_RS1_VM;
        VwaddWv = "vwadd.wv", VR, VD_VS2_VS1_VM;
        VwaddWx = "vwadd.wx", VR, VD_VS2_RS1_VM;
        VwsubuWv = "vwsubu.wv", VR, VD_VS2_VS1_VM;
        VwsubuWx = "vwsubu.wx", VR, VD_VS2_RS1_VM;
        VwsubWv = "vwsub.wv", VR, VD_VS2_VS1_VM;
        VwsubWx = "vwsub.wx", VR, VD_VS2_RS1_VM;
        VwmuluVv = "vwmulu.vv", VR, VD_VS2_VS1_VM;
        VwmuluVx = "vwmulu.vx", VR, VD_VS2_RS1_VM;
        VwmulsuVv = "vwmulsu.vv", VR, VD_VS2_VS1_VM;
        VwmulsuVx = "vwmulsu.vx", VR, VD_VS2_RS1_VM;
        VwmulVv = "vwmul.vv", VR, VD_VS2_VS1_VM;
        VwmulVx = "vwmul.vx", VR, VD_VS2_RS1_VM;
        VwmaccuVv = "vwmaccu.vv", VR, VD_VS1_VS2_VM;
        VwmaccuVx = "vwmaccu.vx", VR, VD_RS1_VS2_VM;
        VwmaccVv = "vwmacc.vv", VR, VD_VS1_VS2_VM;
        VwmaccVx = "vwmacc.vx", VR, VD_RS1_VS2_VM;
        VwmaccusVx = "vwmaccus.vx", VR, VD_RS1_VS2_VM;
        VwmaccsuVv = "vwmaccsu.vv", VR, VD_VS1_VS2_VM;
        VwmaccsuVx = "vwmaccsu.vx", VR, VD_RS1_VS2_VM;
        VfaddVv = "vfadd.vv", VR, VD_VS2_VS1_VM;
        VfaddVf = "vfadd.vf", VR, VD_VS2_FS1_VM;
        VfredusumVs = "vfredusum.vs", VR, VD_VS2_VS1_VM;
        VfsubVv = "vfsub.vv", VR, VD_VS2_VS1_VM;
        VfsubVf = "vfsub.vf", VR, VD_VS2_FS1_VM;
        VfredosumVs = "vfredosum.vs", VR, VD_VS2_VS1_VM;
        VfminVv = "vfmin.vv", VR, VD_VS2_VS1_VM;
        VfminVf = "vfmin.vf", VR, VD_VS2_FS1_VM;
        VfredminVs = "vfredmin.vs", VR, VD_VS2_VS1_VM;
        VfmaxVv = "vfmax.vv", VR, VD_VS2_VS1_VM;
        VfmaxVf = "vfmax.vf", VR, VD_VS2_FS1_VM;
        VfredmaxVs = "vfredmax.vs", VR, VD_VS2_VS1_VM;
        VfsgnjVv = "vfsgnj.vv", VR, VD_VS2_VS1_VM;
        VfsgnjVf = "vfsgnj.vf", VR, VD_VS2_FS1_VM;
        VfsgnjnVv = "vfsgnjn.vv", VR, VD_VS2_VS1_VM => VFSGNJN_VV;
        VfsgnjnVf = "vfsgnjn.vf", VR, VD_VS2_FS1_VM;
        VfsgnjxVv = "vfsgnjx.vv", VR, VD_VS2_VS1_VM => VFSGNJX_VV;
        VfsgnjxVf = "vfsgnjx.vf", VR, VD_VS2_FS1_VM;
        Vfslide1upVf = "vfslide1up.vf", VR, VD_VS2_FS1_VM;
        Vfslide1downVf = "vfslide1down.vf", VR, VD_VS2_FS1_VM;
        VfmvFS = "vfmv.f.s", VR, FRD_VS2;
        VfmvSF = "vfmv.s.f", VR, VD_FS1;
        VfcvtXuFV = "vfcvt.xu.f.v", VR, VD_VS2_VM;
        VfcvtXFV = "vfcvt.x.f.v", VR, VD_VS2_VM;
        VfcvtFXuV = "vfcvt.f.xu.v", VR, VD_VS2_VM;
        VfcvtFXV = "vfcvt.f.x.v", VR, VD_VS2_VM;
        VfcvtRtzXuFV = "vfcvt.rtz.xu.f.v", VR, VD_VS2_VM;
        VfcvtRtzXFV = "vfcvt.rtz.x.f.v", VR, VD_VS2_VM;
        VfwcvtXuFV = "vfwcvt.xu.f.v", VR, VD_VS2_VM;
        VfwcvtXFV = "vfwcvt.x.f.v", VR, VD_VS2_VM;
        VfwcvtFXuV = "vfwcvt.f.xu.v", VR, VD_VS2_VM;
        VfwcvtFXV = "vfwcvt.f.x.v", VR, VD_VS2_VM;
        VfwcvtFFV = "vfwcvt.f.f.v", VR, VD_VS2_VM;
        VfwcvtRtzXuFV = "vfwcvt.rtz.xu.f.v", VR, VD_VS2_VM;
        VfwcvtRtzXFV = "vfwcvt.rtz.x.f.v", VR, VD_VS2_VM;
        VfncvtXuFW = "vfncvt.xu.f.w", VR, VD_VS2_VM;
        VfncvtXFW = "vfncvt.x.f.w", VR, VD_VS2_VM;
        VfncvtFXuW = "vfncvt.f.xu.w", VR, VD_VS2_VM;
        VfncvtFXW = "vfncvt.f.x.w", VR, VD_VS2_VM;
        VfncvtFFW = "vfncvt.f.f.w", VR, VD_VS2_VM;
        VfncvtRodFFW = "vfncvt.rod.f.f.w", VR, VD_VS2_VM;
        VfncvtRtzXuFW = "vfncvt.rtz.xu.f.w", VR, VD_VS2_VM;
        VfncvtRtzXFW = "vfncvt.rtz.x.f.w", VR, VD_VS2_VM;
        VfsqrtV = "vfsqrt.v", VR, VD_VS2_VM;
        Vfrsqrt7V = "vfrsqrt7.v", VR, VD_VS2_VM;
        Vfrec7V = "vfrec7.v", VR, VD_VS2_VM;
        VfclassV = "vfclass.v", VR, VD_VS2_VM;
        VfmergeVfm = "vfmerge.vfm", VR, VD_VS2_FS1_VL;
        VfmvVF = "vfmv.v.f", VR, VD_FS1;
        VmfeqVv = "vmfeq.vv", VR, VD_VS2_VS1_VM;
        VmfeqVf = "vmfeq.vf", VR, VD_VS2_FS1_VM;
        VmfleVv = "vmfle.vv", VR, VD_VS2_VS1_VM;
        VmfleVf = "vmfle.vf", VR, VD_VS2_FS1_VM;
        VmfltVv = "vmflt.vv", VR, VD_VS2_VS1_VM;
        VmfltVf = "vmflt.vf", VR, VD_VS2_FS1_VM;
        VmfneVv = "vmfne.vv", VR, VD_VS2_VS1_VM;
        VmfneVf = "vmfne.vf", VR, VD_VS2_FS1_VM;
        VmfgtVf = "vmfgt.vf", VR, VD_VS2_FS1_VM;
        VmfgeVf = "vmfge.vf", VR, VD_VS2_FS1_VM;
        VfdivVv = "vfdiv.vv", VR, VD_VS2_VS1_VM;
        VfdivVf = "vfdiv.vf", VR, VD_VS2_FS1_VM;
        VfrdivVf = "vfrdiv.vf", VR, VD_VS2_FS1_VM;
        VfmulVv = "vfmul.vv", VR, VD_VS2_VS1_VM;
        VfmulVf = "vfmul.vf", VR, VD_VS2_FS1_VM;
        VfrsubVf = "vfrsub.vf", VR, VD_VS2_FS1_VM;
        VfmaddVv = "vfmadd.vv", VR, VD_VS1_VS2_VM;
        VfmaddVf = "vfmadd.vf", VR, VD_FS1_VS2_VM;
        VfnmaddVv = "vfnmadd.vv", VR, VD_VS1_VS2_VM;
        VfnmaddVf = "vfnmadd.vf", VR, VD_FS1_VS2_VM;
        VfmsubVv = "vfmsub.vv", VR, VD_VS1_VS2_VM;
        VfmsubVf = "vfmsub.vf", VR, VD_FS1_VS2_VM;
        VfnmsubVv = "vfnmsub.vv", VR, VD_VS1_VS2_VM;
        VfnmsubVf = "vfnmsub.vf", VR, VD_FS1_VS2_VM;
        VfmaccVv = "vfmacc.vv", VR, VD_VS1_VS2_VM;
        VfmaccVf = "vfmacc.vf", VR, VD_FS1_VS2_VM;
        VfnmaccVv = "vfnmacc.vv", VR, VD_VS1_VS2_VM;
        VfnmaccVf = "vfnmacc.vf", VR, VD_FS1_VS2_VM;
        VfmsacVv = "vfmsac.vv", VR, VD_VS1_VS2_VM;
        VfmsacVf = "vfmsac.vf", VR, VD_FS1_VS2_VM;
        VfnmsacVv = "vfnmsac.vv", VR, VD_VS1_VS2_VM;
        VfnmsacVf = "vfnmsac.vf", VR, VD_FS1_VS2_VM;
        VfwaddVv = "vfwadd.vv", VR, VD_VS2_VS1_VM;
        VfwaddVf = "vfwadd.vf", VR, VD_VS2_FS1_VM;
        VfwredusumVs = "vfwredusum.vs", VR, VD_VS2_VS1_VM;
        VfwsubVv = "vfwsub.vv", VR, VD_VS2_VS1_VM;
        VfwsubVf = "vfwsub.vf", VR, VD_VS2_FS1_VM;
        VfwredosumVs = "vfwredosum.vs", VR, VD_VS2_VS1_VM;
        VfwaddWv = "vfwadd.wv", VR, VD_VS2_VS1_VM;
        VfwaddWf = "vfwadd.wf", VR, VD_VS2_FS1_VM;
        VfwsubWv = "vfwsub.wv", VR, VD_VS2_VS1_VM;
        VfwsubWf = "vfwsub.wf", VR, VD_VS2_FS1_VM;
        VfwmulVv = "vfwmul.vv", VR, VD_VS2_VS1_VM;
        VfwmulVf = "vfwmul.vf", VR, VD_VS2_FS1_VM;
        VfwmaccVv = "vfwmacc.vv", VR, VD_VS1_VS2_VM;
        VfwmaccVf = "vfwmacc.vf", VR, VD_FS1_VS2_VM;
        VfwnmaccVv = "vfwnmacc.vv", VR, VD_VS1_VS2_VM;
        VfwnmaccVf = "vfwnmacc.vf", VR, VD_FS1_VS2_VM;
        VfwmsacVv = "vfwmsac.vv", VR, VD_VS1_VS2_VM;
        VfwmsacVf = "vfwmsac.vf", VR, VD_FS1_VS2_VM;
        VfwnmsacVv = "vfwnmsac.vv", VR, VD_VS1_VS2_VM;
        VfwnmsacVf = "vfwnmsac.vf", VR, VD_FS1_VS2_VM;

        // Pseudo-instructions
        Nop = "nop", I, NONE;
        Mv = "mv", I, RD_RS1;
        Li = "li", I, RD_IMM;
        Not = "not", I, RD_RS1;
        Neg = "neg", R, RD_RS2;
        Negw = "negw", R, RD_RS2;
        SextW = "sext.w", I, RD_RS1;
        Seqz = "seqz", I, RD_RS1;
        Snez = "snez", R, RD_RS2;
        Sltz = "sltz", R, RD_RS1;
        Sgtz = "sgtz", R, RD_RS2;
        ZextW = "zext.w", R, RD_RS1;
        Beqz = "beqz", Sb, RS1_OFFSET;
        Bnez = "bnez", Sb, RS1_OFFSET;
        Blez = "blez", Sb, RS2_OFFSET;
        Bgez = "bgez", Sb, RS1_OFFSET;
        Bltz = "bltz", Sb, RS1_OFFSET;
        Bgtz = "bgtz", Sb, RS2_OFFSET;
        Ble = "ble", Sb, RS2_RS1_OFFSET;
        Bleu = "bleu", Sb, RS2_RS1_OFFSET;
        Bgt = "bgt", Sb, RS2_RS1_OFFSET;
        Bgtu = "bgtu", Sb, RS2_RS1_OFFSET;
        J = "j", Uj, OFFSET;
        JalPseudo = "jal", Uj, OFFSET;
        Ret = "ret", I, NONE;
        Jr = "jr", I, RS1;
        JalrPseudo = "jalr", I, RS1;
        Rdcycle = "rdcycle", ICsr, RD;
        Rdtime = "rdtime", ICsr, RD;
        Rdinstret = "rdinstret", ICsr, RD;
        Rdcycleh = "rdcycleh", ICsr, RD;
        Rdtimeh = "rdtimeh", ICsr, RD;
        Rdinstreth = "rdinstreth", ICsr, RD;
        Frcsr = "frcsr", ICsr, RD;
        Frrm = "frrm", ICsr, RD;
        Frflags = "frflags", ICsr, RD;
        Fscsr = "fscsr", ICsr, RD_RS1;
        Fsrm = "fsrm", ICsr, RD_RS1;
        Fsflags = "fsflags", ICsr, RD_RS1;
        Fsrmi = "fsrmi", ICsr, RD_ZIMM;
        Fsflagsi = "fsflagsi", ICsr, RD_ZIMM;
        Csrr = "csrr", ICsr, RD_CSR;
        Csrw = "csrw", ICsr, CSR_RS1;
        Csrs = "csrs", ICsr, CSR_RS1;
        Csrc = "csrc", ICsr, CSR_RS1;
        Csrwi = "csrwi", ICsr, CSR_ZIMM;
        Csrsi = "csrsi", ICsr, CSR_ZIMM;
        Csrci = "csrci", ICsr, CSR_ZIMM;
        FmvS = "fmv.s", R, FRD_FRS1;
        FnegS = "fneg.s", R, FRD_FRS1;
        FabsS = "fabs.s", R, FRD_FRS1;
        FmvD = "fmv.d", R, FRD_FRS1;
        FnegD = "fneg.d", R, FRD_FRS1;
        FabsD = "fabs.d", R, FRD_FRS1;
        FmvQ = "fmv.q", R, FRD_FRS1;
        FnegQ = "fneg.q", R, FRD_FRS1;
        FabsQ = "fabs.q", R, FRD_FRS1;
        FmvH = "fmv.h", R, FRD_FRS1;
        FnegH = "fneg.h", R, FRD_FRS1;
        FabsH = "fabs.h", R, FRD_FRS1;
        VnegV = "vneg.v", VR, VD_VS2_VM;
        VnotV = "vnot.v", VI, VD_VS2_VM;
        VwcvtXXV = "vwcvt.x.x.v", VR, VD_VS2_VM;
        VwcvtuXXV = "vwcvtu.x.x.v", VR, VD_VS2_VM;
        VncvtXXW = "vncvt.x.x.w", VR, VD_VS2_VM;
        VfnegV = "vfneg.v", VR, VD_VS2_VM;
        VfabsV = "vfabs.v", VR, VD_VS2_VM;
        VmmvM = "vmmv.m", VR, VD_VS2;
        VmnotM = "vmnot.m", VR, VD_VS2;
        VmclrM = "vmclr.m", VR, VD;
        VmsetM = "vmset.m", VR, VD;
    }
}

const fn rule(op: BaseOp, constraints: &'static [Constraint]) -> PseudoRule<BaseOp> {
    PseudoRule { op, constraints }
}

type Rules = &'static [PseudoRule<BaseOp>];

// ==================== Control transfer ====================

const JAL: Rules = &[
    rule(BaseOp::J, &[RdEqX0]),
    rule(BaseOp::JalPseudo, &[RdEqRa]),
];

const JALR: Rules = &[
    rule(BaseOp::Ret, &[RdEqX0, Rs1EqRa, ImmEqZero]),
    rule(BaseOp::Jr, &[RdEqX0, ImmEqZero]),
    rule(BaseOp::JalrPseudo, &[RdEqRa, ImmEqZero]),
];

const BEQ: Rules = &[rule(BaseOp::Beqz, &[Rs2EqX0])];

const BNE: Rules = &[rule(BaseOp::Bnez, &[Rs2EqX0])];

// The swapped-operand forms carry no constraints and always apply.
const BLT: Rules = &[
    rule(BaseOp::Bltz, &[Rs2EqX0]),
    rule(BaseOp::Bgtz, &[Rs1EqX0]),
    rule(BaseOp::Bgt, &[]),
];

const BGE: Rules = &[
    rule(BaseOp::Blez, &[Rs1EqX0]),
    rule(BaseOp::Bgez, &[Rs2EqX0]),
    rule(BaseOp::Ble, &[]),
];

const BLTU: Rules = &[rule(BaseOp::Bgtu, &[])];

const BGEU: Rules = &[rule(BaseOp::Bleu, &[])];

// ==================== Integer ====================

// `li` and `zext.w` are lifted here; the QEMU disassembler prints them
// as `addi rd,zero,imm` and `add.uw rd,rs1,zero`.
const ADDI: Rules = &[
    rule(BaseOp::Nop, &[RdEqX0, Rs1EqX0, ImmEqZero]),
    rule(BaseOp::Li, &[Rs1EqX0]),
    rule(BaseOp::Mv, &[ImmEqZero]),
];

const SLTIU: Rules = &[rule(BaseOp::Seqz, &[ImmEqP1])];

const XORI: Rules = &[rule(BaseOp::Not, &[ImmEqN1])];

const SUB: Rules = &[rule(BaseOp::Neg, &[Rs1EqX0])];

const SLT: Rules = &[
    rule(BaseOp::Sltz, &[Rs2EqX0]),
    rule(BaseOp::Sgtz, &[Rs1EqX0]),
];

const SLTU: Rules = &[rule(BaseOp::Snez, &[Rs1EqX0])];

const ADDIW: Rules = &[rule(BaseOp::SextW, &[ImmEqZero])];

const SUBW: Rules = &[rule(BaseOp::Negw, &[Rs1EqX0])];

const ADD_UW: Rules = &[rule(BaseOp::ZextW, &[Rs2EqX0])];

// ==================== CSR access ====================

// The trailing `csrr`/`csrw`/`csrs`/`csrc` and `csr*i` rules have no
// counterpart in the QEMU disassembler, which keeps the `csrr*` form.

const CSRRW: Rules = &[
    rule(BaseOp::Fscsr, &[CsrEq(0x003)]),
    rule(BaseOp::Fsrm, &[CsrEq(0x002)]),
    rule(BaseOp::Fsflags, &[CsrEq(0x001)]),
    rule(BaseOp::Csrw, &[RdEqX0]),
];

const CSRRS: Rules = &[
    rule(BaseOp::Rdcycle, &[Rs1EqX0, CsrEq(0xc00)]),
    rule(BaseOp::Rdtime, &[Rs1EqX0, CsrEq(0xc01)]),
    rule(BaseOp::Rdinstret, &[Rs1EqX0, CsrEq(0xc02)]),
    rule(BaseOp::Rdcycleh, &[Rs1EqX0, CsrEq(0xc80)]),
    rule(BaseOp::Rdtimeh, &[Rs1EqX0, CsrEq(0xc81)]),
    rule(BaseOp::Rdinstreth, &[Rs1EqX0, CsrEq(0xc82)]),
    rule(BaseOp::Frcsr, &[Rs1EqX0, CsrEq(0x003)]),
    rule(BaseOp::Frrm, &[Rs1EqX0, CsrEq(0x002)]),
    rule(BaseOp::Frflags, &[Rs1EqX0, CsrEq(0x001)]),
    rule(BaseOp::Csrr, &[Rs1EqX0]),
    rule(BaseOp::Csrs, &[RdEqX0]),
];

const CSRRC: Rules = &[rule(BaseOp::Csrc, &[RdEqX0])];

const CSRRWI: Rules = &[
    rule(BaseOp::Fsrmi, &[CsrEq(0x002)]),
    rule(BaseOp::Fsflagsi, &[CsrEq(0x001)]),
    rule(BaseOp::Csrwi, &[RdEqX0]),
];

const CSRRSI: Rules = &[rule(BaseOp::Csrsi, &[RdEqX0])];

const CSRRCI: Rules = &[rule(BaseOp::Csrci, &[RdEqX0])];

// ==================== Floating point ====================

const FSGNJ_S: Rules = &[rule(BaseOp::FmvS, &[Rs2EqRs1])];
const FSGNJN_S: Rules = &[rule(BaseOp::FnegS, &[Rs2EqRs1])];
const FSGNJX_S: Rules = &[rule(BaseOp::FabsS, &[Rs2EqRs1])];

const FSGNJ_D: Rules = &[rule(BaseOp::FmvD, &[Rs2EqRs1])];
const FSGNJN_D: Rules = &[rule(BaseOp::FnegD, &[Rs2EqRs1])];
const FSGNJX_D: Rules = &[rule(BaseOp::FabsD, &[Rs2EqRs1])];

const FSGNJ_Q: Rules = &[rule(BaseOp::FmvQ, &[Rs2EqRs1])];
const FSGNJN_Q: Rules = &[rule(BaseOp::FnegQ, &[Rs2EqRs1])];
const FSGNJX_Q: Rules = &[rule(BaseOp::FabsQ, &[Rs2EqRs1])];

const FSGNJ_H: Rules = &[rule(BaseOp::FmvH, &[Rs2EqRs1])];
const FSGNJN_H: Rules = &[rule(BaseOp::FnegH, &[Rs2EqRs1])];
const FSGNJX_H: Rules = &[rule(BaseOp::FabsH, &[Rs2EqRs1])];

// ==================== Vector ====================

const VRSUB_VX: Rules = &[rule(BaseOp::VnegV, &[Rs1EqX0])];

const VXOR_VI: Rules = &[rule(BaseOp::VnotV, &[ImmEqN1])];

const VWADD_VX: Rules = &[rule(BaseOp::VwcvtXXV, &[Rs1EqX0])];

const VWADDU_VX: Rules = &[rule(BaseOp::VwcvtuXXV, &[Rs1EqX0])];

const VNSRL_WX: Rules = &[rule(BaseOp::VncvtXXW, &[Rs1EqX0])];

const VFSGNJN_VV: Rules = &[rule(BaseOp::VfnegV, &[Rs2EqRs1])];

const VFSGNJX_VV: Rules = &[rule(BaseOp::VfabsV, &[Rs2EqRs1])];

const VMAND_MM: Rules = &[rule(BaseOp::VmmvM, &[Rs2EqRs1])];

const VMNAND_MM: Rules = &[rule(BaseOp::VmnotM, &[Rs2EqRs1])];

const VMXOR_MM: Rules = &[rule(BaseOp::VmclrM, &[RdEqRs1, Rs2EqRs1])];

const VMXNOR_MM: Rules = &[rule(BaseOp::VmsetM, &[RdEqRs1, Rs2EqRs1])];

#[cfg(test)]
mod tests {
    use super::*;
    use crate::riscv::catalog::OpcodeTable;
    use crate::riscv::codec::Codec;

    #[test]
    fn test_names_round_trip_through_descriptors() {
        assert_eq!(BaseOp::Addi.descriptor().name, "addi");
        assert_eq!(BaseOp::CAddi4spn.descriptor().name, "c.addi4spn");
        assert_eq!(BaseOp::JalPseudo.descriptor().name, "jal");
        assert_eq!(BaseOp::Vle8V.descriptor().name, "vle8.v");
        assert_eq!(BaseOp::VmsetM.descriptor().name, "vmset.m");
    }

    #[test]
    fn test_pseudo_tables_attach_to_canonical_opcodes() {
        let addi = BaseOp::Addi.descriptor();
        assert_eq!(addi.pseudo.len(), 3);
        assert_eq!(addi.pseudo[0].op, BaseOp::Nop);
        assert_eq!(BaseOp::Jalr.descriptor().pseudo[0].op, BaseOp::Ret);
        assert!(BaseOp::Nop.descriptor().pseudo.is_empty());
    }

    #[test]
    fn test_pseudo_codecs_match_their_source() {
        for &op in BaseOp::ALL {
            for rule in op.descriptor().pseudo {
                assert_eq!(
                    rule.op.descriptor().codec,
                    op.descriptor().codec,
                    "{op:?} -> {:?}",
                    rule.op
                );
            }
        }
    }

    #[test]
    fn test_width_specific_expansions() {
        let decomp = BaseOp::CFld.descriptor().decomp.unwrap();
        assert_eq!(decomp.targets, [BaseOp::Fld, BaseOp::Fld, BaseOp::Illegal]);
        let decomp = BaseOp::CLq.descriptor().decomp.unwrap();
        assert_eq!(decomp.targets, [BaseOp::Illegal, BaseOp::Illegal, BaseOp::Lq]);
        assert!(BaseOp::CAddi4spn.descriptor().decomp.unwrap().imm_nonzero);
        assert!(!BaseOp::CLi.descriptor().decomp.unwrap().imm_nonzero);
        assert!(BaseOp::CZextB.descriptor().decomp.is_none());
        assert_eq!(BaseOp::CMul.descriptor().codec, Codec::ZcbMul);
    }
}
