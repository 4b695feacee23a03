//! # rvdis-core
//!
//! Shared data for the rvdis RISC-V disassembler: the configured base
//! width, the set of enabled extensions, and the static name tables the
//! renderer consults for integer, float, vector and control registers.

pub mod arch;
pub mod config;
pub mod csr;
pub mod error;
pub mod register;

pub use arch::Xlen;
pub use config::{Extension, IsaConfig};
pub use csr::csr_name;
pub use error::Error;
pub use register::{freg_name, ireg_name, vreg_name, RegisterClass};
