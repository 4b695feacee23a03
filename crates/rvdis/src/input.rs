//! Input sources and configuration files.

use std::fs;
use std::path::Path;

use anyhow::{bail, Context, Result};
use rvdis_core::{IsaConfig, Xlen};
use rvdis_disasm::instruction_length;
use serde::Deserialize;

/// Settings loaded from a JSON configuration file.
///
/// ```json
/// { "xlen": "rv64", "isa": { "xtheadba": true, "zcmp": true }, "tab_width": 16 }
/// ```
#[derive(Debug, Default, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct FileConfig {
    pub xlen: Option<Xlen>,
    pub isa: IsaConfig,
    pub tab_width: Option<usize>,
}

impl FileConfig {
    pub fn load(path: &Path) -> Result<Self> {
        let text = fs::read_to_string(path)
            .with_context(|| format!("Failed to read config: {}", path.display()))?;
        serde_json::from_str(&text)
            .with_context(|| format!("Failed to parse config: {}", path.display()))
    }
}

/// Parses hex bytes in memory order, e.g. `"13 05 a0 02"` or `"1305a002"`.
pub fn parse_hex_bytes(s: &str) -> Result<Vec<u8>> {
    let digits: Vec<char> = s
        .chars()
        .filter(|c| !c.is_whitespace() && *c != ',')
        .collect();
    if digits.len() % 2 != 0 {
        bail!("odd number of hex digits in {s:?}");
    }
    digits
        .chunks(2)
        .map(|pair| {
            let byte: String = pair.iter().collect();
            u8::from_str_radix(&byte, 16).with_context(|| format!("invalid hex byte {byte:?}"))
        })
        .collect()
}

/// Little-endian bytes of a single instruction word, trimmed to its length.
pub fn word_bytes(word: u64) -> Vec<u8> {
    let len = match instruction_length(word as u16) {
        0 => 8,
        len => len,
    };
    word.to_le_bytes()[..len].to_vec()
}

/// Parses an address or word, hex with `0x` or decimal.
pub fn parse_number(s: &str) -> Result<u64, String> {
    let s = s.trim().replace('_', "");
    match s.strip_prefix("0x").or_else(|| s.strip_prefix("0X")) {
        Some(hex) => u64::from_str_radix(hex, 16),
        None => s.parse(),
    }
    .map_err(|e| e.to_string())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_hex_bytes() {
        assert_eq!(parse_hex_bytes("13 05 a0 02").unwrap(), [0x13, 0x05, 0xa0, 0x02]);
        assert_eq!(parse_hex_bytes("4111").unwrap(), [0x41, 0x11]);
        assert!(parse_hex_bytes("131").is_err());
        assert!(parse_hex_bytes("zz").is_err());
    }

    #[test]
    fn test_word_bytes() {
        assert_eq!(word_bytes(0x1141), [0x41, 0x11]);
        assert_eq!(word_bytes(0x02a00513), [0x13, 0x05, 0xa0, 0x02]);
        assert_eq!(word_bytes(0x001f).len(), 6);
    }

    #[test]
    fn test_parse_number() {
        assert_eq!(parse_number("0x1000"), Ok(0x1000));
        assert_eq!(parse_number("4096"), Ok(4096));
        assert_eq!(parse_number("0x8000_0000"), Ok(0x8000_0000));
        assert!(parse_number("0xzz").is_err());
    }

    #[test]
    fn test_file_config() {
        let cfg: FileConfig =
            serde_json::from_str(r#"{"xlen":"rv32","isa":{"xtheadba":true}}"#).unwrap();
        assert_eq!(cfg.xlen, Some(Xlen::Rv32));
        assert!(cfg.isa.xtheadba);
        assert!(!cfg.isa.zcmp);
        assert!(serde_json::from_str::<FileConfig>(r#"{"width":32}"#).is_err());
    }
}
