//! rvdis - A RISC-V disassembler
//!
//! Usage:
//!   rvdis <file>                     Disassemble a raw little-endian image
//!   rvdis --hex "13 05 a0 02"        Disassemble bytes given on the command line
//!   rvdis --word 0x02a00513          Disassemble a single instruction word
//!   rvdis --xlen rv32 --ext xtheadba <file>

mod input;

use std::fs;
use std::io::{self, BufWriter, Write};
use std::path::PathBuf;

use anyhow::{bail, Context, Result};
use clap::{ArgAction, ArgGroup, Parser};
use rvdis_core::{IsaConfig, Xlen};
use rvdis_disasm::{RenderOptions, RiscVDisassembler};
use tracing::{debug, warn};
use tracing_subscriber::EnvFilter;

use input::{parse_hex_bytes, parse_number, word_bytes, FileConfig};

#[derive(Parser)]
#[command(name = "rvdis")]
#[command(about = "A RISC-V disassembler", long_about = None)]
#[command(group(ArgGroup::new("source").required(true).args(["file", "hex", "word"])))]
struct Cli {
    /// Raw binary image to disassemble
    file: Option<PathBuf>,

    /// Hex bytes in memory order
    #[arg(long)]
    hex: Option<String>,

    /// A single instruction word
    #[arg(long, value_parser = parse_number)]
    word: Option<u64>,

    /// Base integer width (rv32, rv64, rv128)
    #[arg(long)]
    xlen: Option<Xlen>,

    /// Comma separated extensions to enable
    #[arg(short, long)]
    ext: Option<IsaConfig>,

    /// JSON configuration file
    #[arg(long)]
    config: Option<PathBuf>,

    /// Address of the first byte
    #[arg(short, long, value_parser = parse_number, default_value = "0")]
    address: u64,

    /// Operand column
    #[arg(long)]
    tab: Option<usize>,

    /// Maximum number of instructions to print
    #[arg(short, long)]
    count: Option<usize>,

    /// Increase log verbosity
    #[arg(short, long, action = ArgAction::Count)]
    verbose: u8,
}

fn init_logging(verbose: u8) {
    let default = match verbose {
        0 => "warn",
        1 => "debug",
        _ => "trace",
    };
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(default));
    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(io::stderr)
        .init();
}

fn build_disassembler(cli: &Cli) -> Result<RiscVDisassembler> {
    let file = match &cli.config {
        Some(path) => FileConfig::load(path)?,
        None => FileConfig::default(),
    };
    let xlen = cli.xlen.or(file.xlen).unwrap_or_default();
    let config = match cli.ext {
        Some(ext) => merge(file.isa, ext),
        None => file.isa,
    };
    let mut options = RenderOptions::default();
    if let Some(tab) = cli.tab.or(file.tab_width) {
        options.tab_width = tab;
    }
    debug!(%xlen, isa = %config, tab_width = options.tab_width, "configured");
    Ok(RiscVDisassembler::with_config(xlen, config).with_options(options))
}

/// Enables every extension set in either configuration.
fn merge(mut base: IsaConfig, extra: IsaConfig) -> IsaConfig {
    for ext in extra.enabled() {
        base.set(ext, true);
    }
    base
}

fn main() -> Result<()> {
    let cli = Cli::parse();
    init_logging(cli.verbose);

    let disasm = build_disassembler(&cli)?;

    let (bytes, limit) = match (&cli.file, &cli.hex, cli.word) {
        (_, _, Some(word)) => (word_bytes(word), Some(1)),
        (_, Some(hex), None) => (parse_hex_bytes(hex)?, cli.count),
        (Some(path), None, None) => {
            let data = fs::read(path)
                .with_context(|| format!("Failed to read input: {}", path.display()))?;
            (data, cli.count)
        }
        (None, None, None) => bail!("no input given"),
    };

    let stdout = io::stdout();
    let mut out = BufWriter::new(stdout.lock());
    let mut offset = 0;
    let mut printed = 0;
    while offset < bytes.len() && limit.map_or(true, |n| printed < n) {
        let pc = cli.address.wrapping_add(offset as u64);
        let insn = disasm.print_insn(&bytes[offset..], pc);
        if insn.len == 0 {
            warn!(
                address = format_args!("{pc:#x}"),
                remaining = bytes.len() - offset,
                "cannot read instruction, stopping"
            );
            break;
        }
        writeln!(out, "{pc:8x}:\t{}", insn.text)?;
        offset += insn.len;
        printed += 1;
    }
    out.flush()?;

    Ok(())
}
