//! Format templates.
//!
//! A template is a string of one-character directives interpreted by
//! [`super::render`]. `O` is the mnemonic and `\t` pads to the operand
//! column; the rest select operands (see the renderer for the full set).

// ==================== Scalar ====================

pub const NONE: &str = "O";
pub const IMM: &str = "O\ti";
pub const RS1: &str = "O\t1";
pub const RS1_ADDR: &str = "O\t(1)";
pub const OFFSET: &str = "O\to";
pub const PRED_SUCC: &str = "O\tp,s";
pub const RS1_RS2: &str = "O\t1,2";
pub const RD: &str = "O\t0";
pub const RD_IMM: &str = "O\t0,i";
pub const RD_UIMM: &str = "O\t0,U";
pub const RD_OFFSET: &str = "O\t0,o";
pub const RD_RS1: &str = "O\t0,1";
pub const RD_RS2: &str = "O\t0,2";
pub const RD_ZIMM: &str = "O\t0,7";
pub const RD_RS1_RS2: &str = "O\t0,1,2";
pub const RD_RS1_IMM: &str = "O\t0,1,i";
pub const RD_OFFSET_RS1: &str = "O\t0,i(1)";
pub const RD_ADDR: &str = "O\t0,(1)";
pub const RS2_ADDR: &str = "O\t2,(1)";
pub const RS2_OFFSET_RS1: &str = "O\t2,i(1)";
pub const OFFSET_RS1: &str = "O\ti(1)";
pub const RS1_OFFSET: &str = "O\t1,o";
pub const RS2_OFFSET: &str = "O\t2,o";
pub const RS1_RS2_OFFSET: &str = "O\t1,2,o";
pub const RS2_RS1_OFFSET: &str = "O\t2,1,o";
pub const RD_CSR: &str = "O\t0,c";
pub const RD_CSR_RS1: &str = "O\t0,c,1";
pub const RD_CSR_ZIMM: &str = "O\t0,c,7";
pub const CSR_RS1: &str = "O\tc,1";
pub const CSR_ZIMM: &str = "O\tc,7";
pub const AQRL_RD_RS2_RS1: &str = "OAR\t0,2,(1)";
pub const AQRL_RD_RS1: &str = "OAR\t0,(1)";
pub const RD_RS1_RS2_BS: &str = "O\t0,1,2,b";
pub const RD_RS1_RNUM: &str = "O\t0,1,n";

// ==================== Float ====================

pub const FRD_OFFSET_RS1: &str = "O\t3,i(1)";
pub const FRS2_OFFSET_RS1: &str = "O\t5,i(1)";
pub const FRD_RS1: &str = "O\t3,1";
pub const FRD_RS1_RS2: &str = "O\t3,1,2";
pub const RD_FRS1: &str = "O\t0,4";
pub const FRD_FRS1: &str = "O\t3,4";
pub const RD_FRS1_FRS2: &str = "O\t0,4,5";
pub const FRD_FRS1_FRS2: &str = "O\t3,4,5";
pub const FRD_FRS1_RM: &str = "O\t3,4,r";
pub const FRD_RS1_RM: &str = "O\t3,1,r";
pub const RD_FRS1_RM: &str = "O\t0,4,r";
pub const FRD_FRS1_FRS2_RM: &str = "O\t3,4,5,r";
pub const FRD_FRS1_FRS2_FRS3_RM: &str = "O\t3,4,5,6,r";
pub const FRD_FLI: &str = "O\t3,h";

// ==================== Compressed push/pop ====================

pub const PUSH: &str = "O\tx,-i";
pub const POP: &str = "O\tx,i";

// ==================== Vector ====================

pub const VSETVLI: &str = "O\t0,1,v";
pub const VSETIVLI: &str = "O\t0,u,v";
pub const VD_ADDR: &str = "O\tD,(1)";
pub const VD_ADDR_VM: &str = "O\tD,(1)m";
pub const VD_ADDR_RS2_VM: &str = "O\tD,(1),2m";
pub const VD_ADDR_VS2_VM: &str = "O\tD,(1),Fm";
pub const VD_VS2_VS1: &str = "O\tD,F,E";
pub const VD_VS2_VS1_VL: &str = "O\tD,F,El";
pub const VD_VS2_VS1_VM: &str = "O\tD,F,Em";
pub const VD_VS2_RS1: &str = "O\tD,F,1";
pub const VD_VS2_RS1_VL: &str = "O\tD,F,1l";
pub const VD_VS2_RS1_VM: &str = "O\tD,F,1m";
pub const VD_VS2_FS1_VL: &str = "O\tD,F,4l";
pub const VD_VS2_FS1_VM: &str = "O\tD,F,4m";
pub const VD_VS2_IMM: &str = "O\tD,F,i";
pub const VD_VS2_IMM_VL: &str = "O\tD,F,il";
pub const VD_VS2_IMM_VM: &str = "O\tD,F,im";
pub const VD_VS2_UIMM_VM: &str = "O\tD,F,um";
pub const VD_VS1_VS2_VM: &str = "O\tD,E,Fm";
pub const VD_RS1_VS2_VM: &str = "O\tD,1,Fm";
pub const VD_FS1_VS2_VM: &str = "O\tD,4,Fm";
pub const VD_VS1: &str = "O\tD,E";
pub const VD_RS1: &str = "O\tD,1";
pub const VD_FS1: &str = "O\tD,4";
pub const VD_IMM: &str = "O\tD,i";
pub const VD_VS2: &str = "O\tD,F";
pub const VD_VS2_VM: &str = "O\tD,Fm";
pub const VD: &str = "O\tD";
pub const VD_VM: &str = "O\tDm";
pub const RD_VS2: &str = "O\t0,F";
pub const RD_VS2_VM: &str = "O\t0,Fm";
pub const FRD_VS2: &str = "O\t3,F";

// ==================== Vendor ====================

pub const RD_RS1_RS2_IMM: &str = "O\t0,1,2,i";
pub const RD_RS1_IMM_IMM1: &str = "O\t0,1,i,j";
pub const RD_ADDR_IMM_IMM1: &str = "O\t0,(1),i,j";
pub const FRD_RS1_RS2_IMM: &str = "O\t3,1,2,i";
pub const RD_RS2_ADDR_IMM_IMM1: &str = "O\t0,2,(1),i,j";
