//! Control and status register names.

macro_rules! numbered {
    ($prefix:literal, $suffix:literal; $($n:literal)*) => {
        [$(concat!($prefix, $n, $suffix)),*]
    };
}

static HPMCOUNTER: [&str; 29] = numbered!("hpmcounter", "";
    3 4 5 6 7 8 9 10 11 12 13 14 15 16 17 18 19 20 21 22 23 24 25 26 27 28 29 30 31);
static HPMCOUNTERH: [&str; 29] = numbered!("hpmcounter", "h";
    3 4 5 6 7 8 9 10 11 12 13 14 15 16 17 18 19 20 21 22 23 24 25 26 27 28 29 30 31);
static MHPMCOUNTER: [&str; 29] = numbered!("mhpmcounter", "";
    3 4 5 6 7 8 9 10 11 12 13 14 15 16 17 18 19 20 21 22 23 24 25 26 27 28 29 30 31);
static MHPMCOUNTERH: [&str; 29] = numbered!("mhpmcounter", "h";
    3 4 5 6 7 8 9 10 11 12 13 14 15 16 17 18 19 20 21 22 23 24 25 26 27 28 29 30 31);
static MHPMEVENT: [&str; 29] = numbered!("mhpmevent", "";
    3 4 5 6 7 8 9 10 11 12 13 14 15 16 17 18 19 20 21 22 23 24 25 26 27 28 29 30 31);
static PMPCFG: [&str; 16] = numbered!("pmpcfg", "";
    0 1 2 3 4 5 6 7 8 9 10 11 12 13 14 15);
static PMPADDR: [&str; 64] = numbered!("pmpaddr", "";
    0 1 2 3 4 5 6 7 8 9 10 11 12 13 14 15 16 17 18 19 20 21 22 23 24 25 26 27 28 29 30 31
    32 33 34 35 36 37 38 39 40 41 42 43 44 45 46 47 48 49 50 51 52 53 54 55 56 57 58 59 60 61 62 63);

/// Returns the architected name of CSR `csr`, if it has one.
///
/// Only the low twelve bits are significant.
pub fn csr_name(csr: u16) -> Option<&'static str> {
    let csr = csr & 0xfff;
    let name = match csr {
        // Unprivileged float, vector and entropy
        0x001 => "fflags",
        0x002 => "frm",
        0x003 => "fcsr",
        0x008 => "vstart",
        0x009 => "vxsat",
        0x00a => "vxrm",
        0x00f => "vcsr",
        0x015 => "seed",
        0x017 => "jvt",

        // Unprivileged counters
        0xc00 => "cycle",
        0xc01 => "time",
        0xc02 => "instret",
        0xc03..=0xc1f => HPMCOUNTER[usize::from(csr - 0xc03)],
        0xc20 => "vl",
        0xc21 => "vtype",
        0xc22 => "vlenb",
        0xc80 => "cycleh",
        0xc81 => "timeh",
        0xc82 => "instreth",
        0xc83..=0xc9f => HPMCOUNTERH[usize::from(csr - 0xc83)],

        // Supervisor
        0x100 => "sstatus",
        0x104 => "sie",
        0x105 => "stvec",
        0x106 => "scounteren",
        0x10a => "senvcfg",
        0x120 => "scountinhibit",
        0x140 => "sscratch",
        0x141 => "sepc",
        0x142 => "scause",
        0x143 => "stval",
        0x144 => "sip",
        0x14d => "stimecmp",
        0x15d => "stimecmph",
        0x180 => "satp",
        0x5a8 => "scontext",

        // Hypervisor
        0x600 => "hstatus",
        0x602 => "hedeleg",
        0x603 => "hideleg",
        0x604 => "hie",
        0x605 => "htimedelta",
        0x606 => "hcounteren",
        0x607 => "hgeie",
        0x60a => "henvcfg",
        0x615 => "htimedeltah",
        0x61a => "henvcfgh",
        0x643 => "htval",
        0x644 => "hip",
        0x645 => "hvip",
        0x64a => "htinst",
        0x680 => "hgatp",
        0x6a8 => "hcontext",
        0xe12 => "hgeip",
        0x200 => "vsstatus",
        0x204 => "vsie",
        0x205 => "vstvec",
        0x240 => "vsscratch",
        0x241 => "vsepc",
        0x242 => "vscause",
        0x243 => "vstval",
        0x244 => "vsip",
        0x24d => "vstimecmp",
        0x25d => "vstimecmph",
        0x280 => "vsatp",

        // Machine information and trap setup
        0xf11 => "mvendorid",
        0xf12 => "marchid",
        0xf13 => "mimpid",
        0xf14 => "mhartid",
        0xf15 => "mconfigptr",
        0x300 => "mstatus",
        0x301 => "misa",
        0x302 => "medeleg",
        0x303 => "mideleg",
        0x304 => "mie",
        0x305 => "mtvec",
        0x306 => "mcounteren",
        0x30a => "menvcfg",
        0x310 => "mstatush",
        0x31a => "menvcfgh",
        0x320 => "mcountinhibit",
        0x323..=0x33f => MHPMEVENT[usize::from(csr - 0x323)],
        0x340 => "mscratch",
        0x341 => "mepc",
        0x342 => "mcause",
        0x343 => "mtval",
        0x344 => "mip",
        0x34a => "mtinst",
        0x34b => "mtval2",

        // Memory protection
        0x3a0..=0x3af => PMPCFG[usize::from(csr - 0x3a0)],
        0x3b0..=0x3ef => PMPADDR[usize::from(csr - 0x3b0)],
        0x747 => "mseccfg",
        0x757 => "mseccfgh",

        // Machine counters
        0xb00 => "mcycle",
        0xb02 => "minstret",
        0xb03..=0xb1f => MHPMCOUNTER[usize::from(csr - 0xb03)],
        0xb80 => "mcycleh",
        0xb82 => "minstreth",
        0xb83..=0xb9f => MHPMCOUNTERH[usize::from(csr - 0xb83)],

        // Debug and trace
        0x7a0 => "tselect",
        0x7a1 => "tdata1",
        0x7a2 => "tdata2",
        0x7a3 => "tdata3",
        0x7a8 => "mcontext",
        0x7b0 => "dcsr",
        0x7b1 => "dpc",
        0x7b2 => "dscratch0",
        0x7b3 => "dscratch1",

        _ => return None,
    };
    Some(name)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_float_csrs() {
        assert_eq!(csr_name(0x001), Some("fflags"));
        assert_eq!(csr_name(0x003), Some("fcsr"));
    }

    #[test]
    fn test_counter_ranges() {
        assert_eq!(csr_name(0xc03), Some("hpmcounter3"));
        assert_eq!(csr_name(0xc9f), Some("hpmcounter31h"));
        assert_eq!(csr_name(0xb1f), Some("mhpmcounter31"));
        assert_eq!(csr_name(0x33f), Some("mhpmevent31"));
    }

    #[test]
    fn test_pmp_ranges_are_in_order() {
        assert_eq!(csr_name(0x3a3), Some("pmpcfg3"));
        assert_eq!(csr_name(0x3bd), Some("pmpaddr13"));
        assert_eq!(csr_name(0x3be), Some("pmpaddr14"));
        assert_eq!(csr_name(0x3ef), Some("pmpaddr63"));
    }

    #[test]
    fn test_unknown_csr() {
        assert_eq!(csr_name(0x7ff), None);
        assert_eq!(csr_name(0x000), None);
    }

    #[test]
    fn test_high_bits_ignored() {
        assert_eq!(csr_name(0xf000 | 0x300), Some("mstatus"));
    }
}
