//! Recursive structural traversal over [`peek_value::Value`] trees.
//!
//! The [`Walker`] decomposes a value into its constituent nodes in a
//! deterministic depth-first order and notifies an [`Observer`] at every
//! node, threading path/name context through the descent. Renderers
//! ([`PrettyPrinter`], [`TraceWriter`]) implement the observer contract;
//! [`display`] is a one-shot dumper that bypasses it entirely.

mod display;
mod error;
mod observer;
mod render;
mod walker;

pub use display::{display, display_to};
pub use error::{WalkError, WalkResult};
pub use observer::{Node, Observer};
pub use render::{PrettyPrinter, TraceWriter};
pub use walker::{Walker, DEFAULT_MAX_DEPTH};
