//! The closed runtime value taxonomy.
//!
//! `Value` is an owned tree: pointers and polymorphic containers box
//! their referent, so reference cycles are unrepresentable and a walk
//! over any `Value` is guaranteed to terminate (subject to the engine's
//! depth ceiling for pathologically deep trees).

use crate::Kind;
use serde::{Deserialize, Serialize};

/// A complex number over `f32` parts.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct Complex32 {
    pub re: f32,
    pub im: f32,
}

impl Complex32 {
    pub fn new(re: f32, im: f32) -> Self {
        Self { re, im }
    }
}

/// A complex number over `f64` parts.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct Complex64 {
    pub re: f64,
    pub im: f64,
}

impl Complex64 {
    pub fn new(re: f64, im: f64) -> Self {
        Self { re, im }
    }
}

/// A record field: local name, optional opaque annotation tag, a
/// readability flag, and the field value.
///
/// The tag is threaded through to observers uninterpreted. Fields with
/// `exported` unset still appear in walks, but renderers degrade them
/// to a placeholder instead of showing their value.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Field {
    pub name: String,
    pub tag: Option<String>,
    pub exported: bool,
    pub value: Value,
}

impl Field {
    /// A readable, untagged field.
    pub fn new(name: impl Into<String>, value: Value) -> Self {
        Self {
            name: name.into(),
            tag: None,
            exported: true,
            value,
        }
    }

    /// A readable field carrying an annotation tag.
    pub fn tagged(name: impl Into<String>, tag: impl Into<String>, value: Value) -> Self {
        Self {
            name: name.into(),
            tag: Some(tag.into()),
            exported: true,
            value,
        }
    }

    /// An unreadable (visibility-restricted) field.
    pub fn unexported(name: impl Into<String>, value: Value) -> Self {
        Self {
            name: name.into(),
            tag: None,
            exported: false,
            value,
        }
    }
}

/// A record value: type name plus fields in declaration order.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct StructValue {
    pub type_name: String,
    pub fields: Vec<Field>,
}

impl StructValue {
    pub fn new(type_name: impl Into<String>, fields: Vec<Field>) -> Self {
        Self {
            type_name: type_name.into(),
            fields,
        }
    }
}

/// A keyed map: key/value type labels plus entries in insertion order.
///
/// Entry order is whatever the builder produced; the walk reports it
/// as-is, unsorted.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct MapValue {
    pub key_type: String,
    pub value_type: String,
    pub entries: Vec<(Value, Value)>,
}

impl MapValue {
    pub fn new(
        key_type: impl Into<String>,
        value_type: impl Into<String>,
        entries: Vec<(Value, Value)>,
    ) -> Self {
        Self {
            key_type: key_type.into(),
            value_type: value_type.into(),
            entries,
        }
    }
}

/// A runtime value of unknown shape: one variant per structural kind.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub enum Value {
    /// Absent/typeless node (e.g., an empty slot with no concrete value).
    Invalid,
    Bool(bool),
    I8(i8),
    I16(i16),
    I32(i32),
    I64(i64),
    U8(u8),
    U16(u16),
    U32(u32),
    U64(u64),
    F32(f32),
    F64(f64),
    C32(Complex32),
    C64(Complex64),
    Str(String),
    /// Opaque channel handle: element type label + buffered length.
    Channel { elem_type: String, len: usize },
    /// Opaque callable: static signature only.
    Func { signature: String },
    /// Raw memory handle.
    RawPtr(usize),
    /// Indexable sequence (fixed-size or growable).
    Seq(Vec<Value>),
    Struct(StructValue),
    Map(MapValue),
    /// Pointer/reference. A nil pointer still knows its pointee type.
    Ptr {
        target_type: String,
        referent: Option<Box<Value>>,
    },
    /// Polymorphic container: an open type holding a concrete payload,
    /// or nothing.
    Any(Option<Box<Value>>),
}

impl Value {
    /// Classify this value. Total over every variant.
    pub fn kind(&self) -> Kind {
        match self {
            Value::Invalid => Kind::Invalid,
            Value::Bool(_) => Kind::Bool,
            Value::I8(_) => Kind::I8,
            Value::I16(_) => Kind::I16,
            Value::I32(_) => Kind::I32,
            Value::I64(_) => Kind::I64,
            Value::U8(_) => Kind::U8,
            Value::U16(_) => Kind::U16,
            Value::U32(_) => Kind::U32,
            Value::U64(_) => Kind::U64,
            Value::F32(_) => Kind::F32,
            Value::F64(_) => Kind::F64,
            Value::C32(_) => Kind::C32,
            Value::C64(_) => Kind::C64,
            Value::Str(_) => Kind::Str,
            Value::Channel { .. } => Kind::Channel,
            Value::Func { .. } => Kind::Func,
            Value::RawPtr(_) => Kind::RawPtr,
            Value::Seq(_) => Kind::Seq,
            Value::Struct(_) => Kind::Struct,
            Value::Map(_) => Kind::Map,
            Value::Ptr { .. } => Kind::Ptr,
            Value::Any(_) => Kind::Any,
        }
    }

    /// Static type label for this value.
    ///
    /// Distinct from [`kind`](Self::kind): records carry their declared
    /// type name, pointers/maps/channels compose labels from their
    /// element types, scalars use their primitive name.
    pub fn type_name(&self) -> String {
        match self {
            Value::Struct(sv) => sv.type_name.clone(),
            Value::Map(mv) => format!("map[{}]{}", mv.key_type, mv.value_type),
            Value::Ptr { target_type, .. } => format!("*{target_type}"),
            Value::Channel { elem_type, .. } => format!("chan {elem_type}"),
            Value::Func { signature } => signature.clone(),
            Value::Seq(items) => format!("[{}]{}", items.len(), seq_elem_type(items)),
            _ => self.kind().label().to_string(),
        }
    }

    /// Shorthand for a non-nil pointer.
    pub fn ptr_to(target_type: impl Into<String>, referent: Value) -> Self {
        Value::Ptr {
            target_type: target_type.into(),
            referent: Some(Box::new(referent)),
        }
    }

    /// Shorthand for a nil pointer with a known pointee type.
    pub fn nil_ptr(target_type: impl Into<String>) -> Self {
        Value::Ptr {
            target_type: target_type.into(),
            referent: None,
        }
    }

    /// Shorthand for a non-empty polymorphic container.
    pub fn any(payload: Value) -> Self {
        Value::Any(Some(Box::new(payload)))
    }

    /// Shorthand for an empty polymorphic container.
    pub fn nil_any() -> Self {
        Value::Any(None)
    }
}

/// Element type label for a sequence: the common element label, or
/// `any` when the sequence is empty or heterogeneous.
fn seq_elem_type(items: &[Value]) -> String {
    let mut labels = items.iter().map(Value::type_name);
    match labels.next() {
        Some(first) if labels.all(|l| l == first) => first,
        _ => "any".to_string(),
    }
}

impl From<bool> for Value {
    fn from(b: bool) -> Self {
        Value::Bool(b)
    }
}

impl From<i64> for Value {
    fn from(n: i64) -> Self {
        Value::I64(n)
    }
}

impl From<u64> for Value {
    fn from(n: u64) -> Self {
        Value::U64(n)
    }
}

impl From<f64> for Value {
    fn from(x: f64) -> Self {
        Value::F64(x)
    }
}

impl From<&str> for Value {
    fn from(s: &str) -> Self {
        Value::Str(s.to_string())
    }
}

impl From<String> for Value {
    fn from(s: String) -> Self {
        Value::Str(s)
    }
}
