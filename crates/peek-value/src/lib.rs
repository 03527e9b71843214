//! Value model for the peek structural visitor.
//!
//! This crate defines the closed `Value` taxonomy that the traversal
//! engine walks, the `Kind` classifier over it, the canonical scalar
//! formatter, and the path-chaining helper used for node addressing.

mod format;
mod kind;
mod path;
mod value;

pub use format::format_scalar;
pub use kind::Kind;
pub use path::chain;
pub use value::{Complex32, Complex64, Field, MapValue, StructValue, Value};
