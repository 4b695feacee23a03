//! Catalog definition macro.
//!
//! ```text
//! opcode_catalog! {
//!     pub enum BaseOp in Base {
//!         Illegal = "illegal", Illegal, NONE;
//!         Addi = "addi", I, RD_RS1_IMM => ADDI_PSEUDO;
//!         CNop = "c.nop", CiNone, NONE <= [Addi, Addi, Addi];
//!         CAddi = "c.addi", Ci, RD_RS1_IMM <= [Addi, Addi, Addi] nz;
//!     }
//! }
//! ```
//!
//! Each entry is `Variant = name, codec, format`, optionally followed by
//! `=> PSEUDO_RULES` and `<= [rv32, rv64, rv128]` expansion targets with an
//! optional `nz` marker for the nonzero-immediate requirement. The first
//! entry must be `Illegal`; descriptor order is variant order.

macro_rules! opcode_catalog {
    (@pseudo) => { &[] };
    (@pseudo $rules:ident) => { $rules };

    (@decomp $enum:ident) => { None };
    (@decomp $enum:ident [$a:ident, $b:ident, $c:ident]) => {
        Some($crate::riscv::catalog::Decompress {
            targets: [$enum::$a, $enum::$b, $enum::$c],
            imm_nonzero: false,
        })
    };
    (@decomp $enum:ident [$a:ident, $b:ident, $c:ident] nz) => {
        Some($crate::riscv::catalog::Decompress {
            targets: [$enum::$a, $enum::$b, $enum::$c],
            imm_nonzero: true,
        })
    };

    (
        $(#[$meta:meta])*
        $vis:vis enum $enum:ident in $catalog:ident {
            $(
                $variant:ident = $name:literal, $codec:ident, $fmt:ident
                $(=> $pseudo:ident)?
                $(<= [$a:ident, $b:ident, $c:ident] $($nz:ident)?)?
            ;)*
        }
    ) => {
        $(#[$meta])*
        #[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
        #[repr(u16)]
        $vis enum $enum {
            $($variant),*
        }

        impl $enum {
            /// Every opcode in this catalog, in numbering order.
            pub const ALL: &'static [$enum] = &[$($enum::$variant),*];
        }

        impl $crate::riscv::catalog::OpcodeTable for $enum {
            const CATALOG: $crate::riscv::catalog::Catalog =
                $crate::riscv::catalog::Catalog::$catalog;
            const ILLEGAL: Self = $enum::Illegal;

            fn descriptor(self) -> &'static $crate::riscv::catalog::OpcodeDescriptor<Self> {
                &DESCRIPTORS[self as usize]
            }

            fn all() -> &'static [Self] {
                Self::ALL
            }
        }

        static DESCRIPTORS: &[$crate::riscv::catalog::OpcodeDescriptor<$enum>] = &[
            $(
                $crate::riscv::catalog::OpcodeDescriptor {
                    name: $name,
                    codec: $crate::riscv::codec::Codec::$codec,
                    format: $crate::riscv::format::$fmt,
                    pseudo: opcode_catalog!(@pseudo $($pseudo)?),
                    decomp: opcode_catalog!(@decomp $enum $([$a, $b, $c] $($nz)?)?),
                }
            ),*
        ];
    };
}
