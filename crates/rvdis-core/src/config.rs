//! Extension configuration.
//!
//! The decoder only ever reads an [`IsaConfig`]; the same value can be
//! shared by any number of concurrent disassemblers.

use std::fmt;
use std::str::FromStr;

use crate::Error;

/// An optional extension that changes what the decoder accepts.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Extension {
    XTheadBa,
    XTheadBb,
    XTheadBs,
    XTheadCmo,
    XTheadCondMov,
    XTheadFMemIdx,
    XTheadFmv,
    XTheadMac,
    XTheadMemIdx,
    XTheadMemPair,
    XTheadSync,
    XVentanaCondOps,
    /// Compressed push/pop and register moves.
    Zcmp,
    /// Compressed table jumps.
    Zcmt,
    /// Float operands live in integer registers.
    Zfinx,
}

impl Extension {
    pub const ALL: [Extension; 15] = [
        Extension::XTheadBa,
        Extension::XTheadBb,
        Extension::XTheadBs,
        Extension::XTheadCmo,
        Extension::XTheadCondMov,
        Extension::XTheadFMemIdx,
        Extension::XTheadFmv,
        Extension::XTheadMac,
        Extension::XTheadMemIdx,
        Extension::XTheadMemPair,
        Extension::XTheadSync,
        Extension::XVentanaCondOps,
        Extension::Zcmp,
        Extension::Zcmt,
        Extension::Zfinx,
    ];

    /// Lower-case extension name as written in an ISA string.
    pub fn name(self) -> &'static str {
        match self {
            Self::XTheadBa => "xtheadba",
            Self::XTheadBb => "xtheadbb",
            Self::XTheadBs => "xtheadbs",
            Self::XTheadCmo => "xtheadcmo",
            Self::XTheadCondMov => "xtheadcondmov",
            Self::XTheadFMemIdx => "xtheadfmemidx",
            Self::XTheadFmv => "xtheadfmv",
            Self::XTheadMac => "xtheadmac",
            Self::XTheadMemIdx => "xtheadmemidx",
            Self::XTheadMemPair => "xtheadmempair",
            Self::XTheadSync => "xtheadsync",
            Self::XVentanaCondOps => "xventanacondops",
            Self::Zcmp => "zcmp",
            Self::Zcmt => "zcmt",
            Self::Zfinx => "zfinx",
        }
    }

    /// Returns true for the T-Head vendor family.
    pub fn is_xthead(self) -> bool {
        self.name().starts_with("xthead")
    }
}

impl fmt::Display for Extension {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

impl FromStr for Extension {
    type Err = Error;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let wanted = s.trim().to_ascii_lowercase();
        Self::ALL
            .iter()
            .copied()
            .find(|ext| ext.name() == wanted)
            .ok_or_else(|| Error::unknown_extension(s.trim()))
    }
}

/// Enabled optional extensions.
///
/// Everything in the ratified base catalog is always decoded; these flags
/// only cover vendor opcode space, compressed encodings that conflict with
/// `c.fsdsp`, and the float-in-integer-register naming.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(feature = "serde", serde(default))]
pub struct IsaConfig {
    pub xtheadba: bool,
    pub xtheadbb: bool,
    pub xtheadbs: bool,
    pub xtheadcmo: bool,
    pub xtheadcondmov: bool,
    pub xtheadfmemidx: bool,
    pub xtheadfmv: bool,
    pub xtheadmac: bool,
    pub xtheadmemidx: bool,
    pub xtheadmempair: bool,
    pub xtheadsync: bool,
    pub xventanacondops: bool,
    pub zcmp: bool,
    pub zcmt: bool,
    pub zfinx: bool,
}

impl IsaConfig {
    /// Base ISA only.
    pub fn new() -> Self {
        Self::default()
    }

    /// Every vendor extension enabled.
    pub fn all_vendor() -> Self {
        Extension::ALL
            .iter()
            .filter(|ext| ext.name().starts_with('x'))
            .fold(Self::default(), |cfg, &ext| cfg.with(ext))
    }

    /// Returns a copy with `ext` enabled.
    pub fn with(mut self, ext: Extension) -> Self {
        self.set(ext, true);
        self
    }

    /// Returns a copy with `ext` disabled.
    pub fn without(mut self, ext: Extension) -> Self {
        self.set(ext, false);
        self
    }

    pub fn set(&mut self, ext: Extension, enabled: bool) {
        *self.flag_mut(ext) = enabled;
    }

    pub fn has(&self, ext: Extension) -> bool {
        match ext {
            Extension::XTheadBa => self.xtheadba,
            Extension::XTheadBb => self.xtheadbb,
            Extension::XTheadBs => self.xtheadbs,
            Extension::XTheadCmo => self.xtheadcmo,
            Extension::XTheadCondMov => self.xtheadcondmov,
            Extension::XTheadFMemIdx => self.xtheadfmemidx,
            Extension::XTheadFmv => self.xtheadfmv,
            Extension::XTheadMac => self.xtheadmac,
            Extension::XTheadMemIdx => self.xtheadmemidx,
            Extension::XTheadMemPair => self.xtheadmempair,
            Extension::XTheadSync => self.xtheadsync,
            Extension::XVentanaCondOps => self.xventanacondops,
            Extension::Zcmp => self.zcmp,
            Extension::Zcmt => self.zcmt,
            Extension::Zfinx => self.zfinx,
        }
    }

    /// Umbrella predicate for the T-Head family.
    pub fn has_xthead(&self) -> bool {
        Extension::ALL
            .iter()
            .any(|&ext| ext.is_xthead() && self.has(ext))
    }

    /// Iterates the enabled extensions in canonical order.
    pub fn enabled(&self) -> impl Iterator<Item = Extension> + '_ {
        Extension::ALL.iter().copied().filter(|&ext| self.has(ext))
    }

    fn flag_mut(&mut self, ext: Extension) -> &mut bool {
        match ext {
            Extension::XTheadBa => &mut self.xtheadba,
            Extension::XTheadBb => &mut self.xtheadbb,
            Extension::XTheadBs => &mut self.xtheadbs,
            Extension::XTheadCmo => &mut self.xtheadcmo,
            Extension::XTheadCondMov => &mut self.xtheadcondmov,
            Extension::XTheadFMemIdx => &mut self.xtheadfmemidx,
            Extension::XTheadFmv => &mut self.xtheadfmv,
            Extension::XTheadMac => &mut self.xtheadmac,
            Extension::XTheadMemIdx => &mut self.xtheadmemidx,
            Extension::XTheadMemPair => &mut self.xtheadmempair,
            Extension::XTheadSync => &mut self.xtheadsync,
            Extension::XVentanaCondOps => &mut self.xventanacondops,
            Extension::Zcmp => &mut self.zcmp,
            Extension::Zcmt => &mut self.zcmt,
            Extension::Zfinx => &mut self.zfinx,
        }
    }
}

impl FromStr for IsaConfig {
    type Err = Error;

    /// Parses a comma or underscore separated extension list.
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        s.split([',', '_'])
            .map(str::trim)
            .filter(|part| !part.is_empty())
            .try_fold(Self::default(), |cfg, part| Ok(cfg.with(part.parse()?)))
    }
}

impl fmt::Display for IsaConfig {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let names: Vec<&str> = self.enabled().map(Extension::name).collect();
        f.write_str(&names.join(","))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_is_base_only() {
        let cfg = IsaConfig::default();
        assert_eq!(cfg.enabled().count(), 0);
        assert!(!cfg.has_xthead());
    }

    #[test]
    fn test_umbrella_predicate() {
        let cfg = IsaConfig::new().with(Extension::XTheadMemPair);
        assert!(cfg.has_xthead());
        let cfg = IsaConfig::new().with(Extension::XVentanaCondOps);
        assert!(!cfg.has_xthead());
    }

    #[test]
    fn test_parse_list() {
        let cfg: IsaConfig = "xtheadba, zcmp,XVentanaCondOps".parse().unwrap();
        assert!(cfg.xtheadba);
        assert!(cfg.zcmp);
        assert!(cfg.xventanacondops);
        assert!(!cfg.zcmt);
        assert_eq!(cfg.to_string(), "xtheadba,xventanacondops,zcmp");
    }

    #[test]
    fn test_parse_unknown() {
        let err = "xtheadba,zzz".parse::<IsaConfig>().unwrap_err();
        assert_eq!(err, Error::UnknownExtension("zzz".into()));
    }

    #[test]
    fn test_all_vendor() {
        let cfg = IsaConfig::all_vendor();
        assert!(cfg.xtheadsync && cfg.xventanacondops);
        assert!(!cfg.zcmp && !cfg.zcmt && !cfg.zfinx);
    }

    #[test]
    fn test_with_without() {
        let cfg = IsaConfig::new().with(Extension::Zcmt).without(Extension::Zcmt);
        assert_eq!(cfg, IsaConfig::new());
    }

    #[cfg(feature = "serde")]
    #[test]
    fn test_serde_defaults_missing_flags() {
        let cfg: IsaConfig = serde_json::from_str(r#"{"xtheadbb": true}"#).unwrap();
        assert!(cfg.xtheadbb);
        assert!(!cfg.xtheadba);
    }
}
