//! Coarse structural categories for runtime values.

use serde::{Deserialize, Serialize};
use std::fmt;

/// The structural category of a [`Value`](crate::Value).
///
/// One case per taxonomy entry, with `Invalid` as the explicit fallback
/// for absent/typeless nodes. The kind is deliberately coarser than the
/// type label: two different record types both classify as `Struct`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Kind {
    Invalid,
    Bool,
    I8,
    I16,
    I32,
    I64,
    U8,
    U16,
    U32,
    U64,
    F32,
    F64,
    C32,
    C64,
    Str,
    Channel,
    Func,
    RawPtr,
    Seq,
    Struct,
    Map,
    Ptr,
    Any,
}

impl Kind {
    /// Lowercase label used in diagnostics and trace output.
    pub fn label(self) -> &'static str {
        match self {
            Kind::Invalid => "invalid",
            Kind::Bool => "bool",
            Kind::I8 => "i8",
            Kind::I16 => "i16",
            Kind::I32 => "i32",
            Kind::I64 => "i64",
            Kind::U8 => "u8",
            Kind::U16 => "u16",
            Kind::U32 => "u32",
            Kind::U64 => "u64",
            Kind::F32 => "f32",
            Kind::F64 => "f64",
            Kind::C32 => "complex32",
            Kind::C64 => "complex64",
            Kind::Str => "string",
            Kind::Channel => "channel",
            Kind::Func => "func",
            Kind::RawPtr => "rawptr",
            Kind::Seq => "seq",
            Kind::Struct => "struct",
            Kind::Map => "map",
            Kind::Ptr => "ptr",
            Kind::Any => "any",
        }
    }

    /// True for terminal kinds: the walk never descends below them.
    pub fn is_terminal(self) -> bool {
        !matches!(
            self,
            Kind::Seq | Kind::Struct | Kind::Map | Kind::Ptr | Kind::Any
        )
    }
}

impl fmt::Display for Kind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.label())
    }
}
