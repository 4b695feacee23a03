//! Text renderer.
//!
//! Interprets a format template one directive character at a time. Every
//! directive reads the decoded record and, for CSR names, the static name
//! table; nothing here can fail. Output goes through a [`LineBuffer`] so
//! overlong operands are cut at the configured limit.

use std::fmt::{self, Write as _};

use rvdis_core::{csr_name, freg_name, ireg_name, vreg_name, IsaConfig};

use super::operands::DecodedInstruction;

/// Layout knobs for rendered lines.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct RenderOptions {
    /// Column the first operand starts at; the `o` comment starts at twice this.
    pub tab_width: usize,
    /// Hard limit on the rendered line, in bytes.
    pub max_len: usize,
}

impl Default for RenderOptions {
    fn default() -> Self {
        Self {
            tab_width: 24,
            max_len: 128,
        }
    }
}

/// A string that silently stops growing at `max_len` bytes.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct LineBuffer {
    buf: String,
    max_len: usize,
}

impl LineBuffer {
    pub fn new(max_len: usize) -> Self {
        Self {
            buf: String::with_capacity(max_len.min(256)),
            max_len,
        }
    }

    pub fn push_str(&mut self, s: &str) {
        let room = self.max_len.saturating_sub(self.buf.len());
        if s.len() <= room {
            self.buf.push_str(s);
            return;
        }
        let mut cut = room;
        while !s.is_char_boundary(cut) {
            cut -= 1;
        }
        self.buf.push_str(&s[..cut]);
    }

    pub fn push(&mut self, c: char) {
        if self.buf.len() + c.len_utf8() <= self.max_len {
            self.buf.push(c);
        }
    }

    /// Appends spaces until the line is `column` bytes long.
    pub fn pad_to(&mut self, column: usize) {
        let target = column.min(self.max_len);
        while self.buf.len() < target {
            self.buf.push(' ');
        }
    }

    pub fn len(&self) -> usize {
        self.buf.len()
    }

    pub fn is_empty(&self) -> bool {
        self.buf.is_empty()
    }

    pub fn is_full(&self) -> bool {
        self.buf.len() >= self.max_len
    }

    pub fn as_str(&self) -> &str {
        &self.buf
    }

    pub fn into_string(self) -> String {
        self.buf
    }
}

impl fmt::Write for LineBuffer {
    fn write_str(&mut self, s: &str) -> fmt::Result {
        self.push_str(s);
        Ok(())
    }
}

impl fmt::Display for LineBuffer {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.buf)
    }
}

/// Zfa `fli` constants by table index.
const FLI_CONSTANTS: [&str; 32] = [
    "-1.0",
    "min",
    "1.52587890625e-05",
    "3.0517578125e-05",
    "0.00390625",
    "0.0078125",
    "0.0625",
    "0.125",
    "0.25",
    "0.3125",
    "0.375",
    "0.4375",
    "0.5",
    "0.625",
    "0.75",
    "0.875",
    "1.0",
    "1.25",
    "1.5",
    "1.75",
    "2.0",
    "2.5",
    "3.0",
    "4.0",
    "8.0",
    "16.0",
    "128.0",
    "256.0",
    "32768.0",
    "65536.0",
    "inf",
    "nan",
];

const FENCE_I: u8 = 0b1000;
const FENCE_O: u8 = 0b0100;
const FENCE_R: u8 = 0b0010;
const FENCE_W: u8 = 0b0001;

fn rounding_mode(rm: u8) -> &'static str {
    match rm {
        0 => "rne",
        1 => "rtz",
        2 => "rdn",
        3 => "rup",
        4 => "rmm",
        7 => "dyn",
        _ => "inv",
    }
}

fn push_fence_set(out: &mut LineBuffer, set: u8) {
    for (bit, letter) in [(FENCE_I, 'i'), (FENCE_O, 'o'), (FENCE_R, 'r'), (FENCE_W, 'w')] {
        if set & bit != 0 {
            out.push(letter);
        }
    }
}

/// vtype as `e<sew>,m<lmul>,t?,m?`; reserved encodings print as a number.
fn push_vtype(out: &mut LineBuffer, vzimm: u16) {
    let vlmul = vzimm & 0x7;
    let vsew = (vzimm >> 3) & 0x7;
    if vlmul == 4 || vsew >= 4 || vzimm >> 8 != 0 {
        let _ = write!(out, "{vzimm}");
        return;
    }
    let _ = write!(out, "e{}", 8u32 << vsew);
    match vlmul {
        5 => out.push_str(",mf8"),
        6 => out.push_str(",mf4"),
        7 => out.push_str(",mf2"),
        _ => {
            let _ = write!(out, ",m{}", 1u32 << vlmul);
        }
    }
    out.push_str(if vzimm & 0x40 != 0 { ",ta" } else { ",tu" });
    out.push_str(if vzimm & 0x80 != 0 { ",ma" } else { ",mu" });
}

/// Zcmp register list: `{ra}`, `{ra, s0}`, `{ra, s0-sN}`.
fn push_rlist(out: &mut LineBuffer, rlist: u8) {
    match rlist {
        4 => out.push_str("{ra}"),
        5 => out.push_str("{ra, s0}"),
        15 => out.push_str("{ra, s0-s11}"),
        _ => {
            let _ = write!(out, "{{ra, s0-s{}}}", rlist.saturating_sub(5));
        }
    }
}

/// Renders `dec` as one line of assembly text.
pub fn render(dec: &DecodedInstruction, config: &IsaConfig, options: &RenderOptions) -> String {
    let mut out = LineBuffer::new(options.max_len);
    render_into(&mut out, dec, config, options);
    out.into_string()
}

/// Appends the rendering of `dec` to `out`.
pub fn render_into(
    out: &mut LineBuffer,
    dec: &DecodedInstruction,
    config: &IsaConfig,
    options: &RenderOptions,
) {
    let freg = |index: u8| {
        if config.zfinx {
            ireg_name(index)
        } else {
            freg_name(index)
        }
    };
    for directive in dec.op.format().chars() {
        if out.is_full() {
            break;
        }
        match directive {
            'O' => out.push_str(dec.op.name()),
            '(' | ')' | ',' | '-' => out.push(directive),
            '\t' => out.pad_to(options.tab_width),
            '0' => out.push_str(ireg_name(dec.rd)),
            '1' => out.push_str(ireg_name(dec.rs1)),
            '2' => out.push_str(ireg_name(dec.rs2)),
            '3' => out.push_str(freg(dec.rd)),
            '4' => out.push_str(freg(dec.rs1)),
            '5' => out.push_str(freg(dec.rs2)),
            '6' => out.push_str(freg(dec.rs3)),
            '7' => {
                let _ = write!(out, "{}", dec.rs1);
            }
            'i' => {
                let _ = write!(out, "{}", dec.imm);
            }
            'u' => {
                let _ = write!(out, "{}", dec.imm & 0x1f);
            }
            'j' => {
                let _ = write!(out, "{}", dec.imm1);
            }
            'o' => {
                let _ = write!(out, "{}", dec.imm);
                out.pad_to(options.tab_width * 2);
                let target = dec.pc.wrapping_add(i64::from(dec.imm) as u64);
                let _ = write!(out, "# 0x{target:x}");
            }
            'U' => {
                let _ = write!(out, "0x{:x}", (dec.imm as u32) >> 12);
            }
            'c' => match csr_name(dec.csr) {
                Some(name) => out.push_str(name),
                None => {
                    let _ = write!(out, "0x{:03x}", dec.csr);
                }
            },
            'r' => out.push_str(rounding_mode(dec.rm)),
            'p' => push_fence_set(out, dec.pred),
            's' => push_fence_set(out, dec.succ),
            'A' if dec.aq => out.push_str(".aq"),
            'R' if dec.rl => out.push_str(".rl"),
            'D' => out.push_str(vreg_name(dec.rd)),
            'E' => out.push_str(vreg_name(dec.rs1)),
            'F' => out.push_str(vreg_name(dec.rs2)),
            'm' if !dec.vm => out.push_str(",v0.t"),
            'l' => out.push_str(",v0"),
            'v' => push_vtype(out, dec.vzimm),
            'x' => push_rlist(out, dec.rlist),
            'h' => out.push_str(FLI_CONSTANTS[usize::from(dec.rs1 & 0x1f)]),
            'b' => {
                let _ = write!(out, "{}", dec.bs);
            }
            'n' => {
                let _ = write!(out, "{}", dec.rnum);
            }
            _ => {}
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::riscv::catalog::Opcode;
    use crate::riscv::opcodes::BaseOp;

    fn line(dec: &DecodedInstruction) -> String {
        render(dec, &IsaConfig::default(), &RenderOptions::default())
    }

    fn with_op(op: BaseOp) -> DecodedInstruction {
        let mut dec = DecodedInstruction::new(0x1000, 0);
        dec.op = Opcode::Base(op);
        dec.codec = dec.op.codec();
        dec
    }

    #[test]
    fn test_line_buffer_truncates() {
        let mut buf = LineBuffer::new(8);
        buf.push_str("addi");
        buf.pad_to(24);
        assert_eq!(buf.as_str(), "addi    ");
        buf.push_str("a0");
        buf.push(',');
        assert_eq!(buf.len(), 8);
        assert!(buf.is_full());
    }

    #[test]
    fn test_register_and_immediate_directives() {
        let mut dec = with_op(BaseOp::Addi);
        dec.rd = 10;
        dec.rs1 = 11;
        dec.imm = -3;
        assert_eq!(line(&dec), format!("{:<24}a0,a1,-3", "addi"));
    }

    #[test]
    fn test_pc_relative_comment() {
        let mut dec = with_op(BaseOp::Jal);
        dec.rd = 1;
        dec.imm = -8;
        let text = line(&dec);
        assert_eq!(text, format!("{:<24}{:<24}# 0xff8", "jal", "ra,-8"));
    }

    #[test]
    fn test_upper_immediate() {
        let mut dec = with_op(BaseOp::Lui);
        dec.rd = 10;
        dec.imm = 0xfffff000u32 as i32;
        assert_eq!(line(&dec), format!("{:<24}a0,0xfffff", "lui"));
    }

    #[test]
    fn test_csr_names_and_fallback() {
        let mut dec = with_op(BaseOp::Csrrs);
        dec.rd = 10;
        dec.csr = 0x300;
        assert_eq!(line(&dec), format!("{:<24}a0,mstatus,zero", "csrrs"));
        dec.csr = 0x7ff;
        assert_eq!(line(&dec), format!("{:<24}a0,0x7ff,zero", "csrrs"));
    }

    #[test]
    fn test_fence_and_rounding() {
        let mut dec = with_op(BaseOp::Fence);
        dec.pred = 0b1010;
        dec.succ = 0b0101;
        assert_eq!(line(&dec), format!("{:<24}ir,ow", "fence"));
        assert_eq!(rounding_mode(7), "dyn");
        assert_eq!(rounding_mode(5), "inv");
    }

    #[test]
    fn test_float_registers_follow_zfinx() {
        let mut dec = with_op(BaseOp::FaddS);
        dec.rd = 10;
        dec.rs1 = 11;
        dec.rs2 = 12;
        dec.rm = 7;
        assert_eq!(line(&dec), format!("{:<24}fa0,fa1,fa2,dyn", "fadd.s"));
        let zfinx = IsaConfig::default().with(rvdis_core::Extension::Zfinx);
        let text = render(&dec, &zfinx, &RenderOptions::default());
        assert_eq!(text, format!("{:<24}a0,a1,a2,dyn", "fadd.s"));
    }

    #[test]
    fn test_vtype_strings() {
        let mut buf = LineBuffer::new(64);
        push_vtype(&mut buf, 0xd0);
        assert_eq!(buf.as_str(), "e32,m1,ta,ma");
        let mut buf = LineBuffer::new(64);
        push_vtype(&mut buf, 0x07);
        assert_eq!(buf.as_str(), "e8,mf2,tu,mu");
        let mut buf = LineBuffer::new(64);
        push_vtype(&mut buf, 0x04);
        assert_eq!(buf.as_str(), "4");
    }

    #[test]
    fn test_register_lists() {
        for (rlist, text) in [
            (4, "{ra}"),
            (5, "{ra, s0}"),
            (6, "{ra, s0-s1}"),
            (14, "{ra, s0-s9}"),
            (15, "{ra, s0-s11}"),
        ] {
            let mut buf = LineBuffer::new(64);
            push_rlist(&mut buf, rlist);
            assert_eq!(buf.as_str(), text);
        }
    }

    #[test]
    fn test_vector_mask_suffix() {
        let mut dec = with_op(BaseOp::VaddVv);
        dec.rd = 1;
        dec.rs1 = 3;
        dec.rs2 = 2;
        dec.vm = false;
        assert_eq!(line(&dec), format!("{:<24}v1,v2,v3,v0.t", "vadd.vv"));
        dec.vm = true;
        assert_eq!(line(&dec), format!("{:<24}v1,v2,v3", "vadd.vv"));
    }

    #[test]
    fn test_long_lines_are_cut() {
        let mut dec = with_op(BaseOp::Jal);
        dec.imm = 4;
        let options = RenderOptions {
            tab_width: 24,
            max_len: 30,
        };
        let text = render(&dec, &IsaConfig::default(), &options);
        assert_eq!(text.len(), 30);
        assert!(text.starts_with("jal"));
    }
}
