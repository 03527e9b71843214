//! The observer contract: the sole programmatic boundary of the engine.

use peek_value::{Kind, Value};

/// Per-node descriptor handed to every observer callback.
///
/// Borrowed from the walker's current stack frame; never retained past
/// the callback that receives it.
#[derive(Debug)]
pub struct Node<'a> {
    /// Structural category.
    pub kind: Kind,
    /// Static type label (distinct from the kind).
    pub type_name: String,
    /// The value itself.
    pub value: &'a Value,
    /// False when the node is a visibility-restricted record field;
    /// renderers must not show its value.
    pub exported: bool,
    /// Opaque annotation tag, present only for record fields that
    /// declare one.
    pub tag: Option<&'a str>,
}

impl<'a> Node<'a> {
    pub(crate) fn new(value: &'a Value, exported: bool, tag: Option<&'a str>) -> Self {
        Self {
            kind: value.kind(),
            type_name: value.type_name(),
            value,
            exported,
            tag,
        }
    }
}

/// Callback surface invoked by the walker at every node.
///
/// All methods default to no-ops, so implementations override only the
/// callbacks they care about. For every `start: true` call on a given
/// path+name the walker guarantees exactly one matching `start: false`
/// call, after all of that node's descendants have been reported.
///
/// Observers own all mutable rendering state (indentation counters,
/// output buffers); the walker keeps nothing between calls beyond its
/// own stack.
pub trait Observer {
    /// A nil pointer referent or empty polymorphic container.
    fn on_nil(&mut self, _path: &str, _name: &str, _target_type: &str) {}

    /// A terminal scalar node, or an invalid node (name `"?"`).
    fn on_value(&mut self, _path: &str, _name: &str, _node: &Node<'_>) {}

    /// Brackets a pointer's referent.
    fn on_pointer(&mut self, _path: &str, _name: &str, _start: bool, _node: &Node<'_>) {}

    /// Brackets a sequence's elements; `len` is the element count.
    fn on_list(&mut self, _path: &str, _name: &str, _start: bool, _node: &Node<'_>, _len: usize) {}

    /// Brackets a record's fields.
    fn on_struct(&mut self, _path: &str, _name: &str, _start: bool, _node: &Node<'_>) {}

    /// Brackets a map's entries.
    fn on_map(&mut self, _path: &str, _name: &str, _start: bool, _node: &Node<'_>) {}

    /// Brackets a polymorphic container's payload.
    fn on_interface(&mut self, _path: &str, _name: &str, _start: bool, _node: &Node<'_>) {}

    /// A terminal channel handle.
    fn on_channel(&mut self, _path: &str, _name: &str, _node: &Node<'_>) {}

    /// A terminal callable.
    fn on_function(&mut self, _path: &str, _name: &str, _node: &Node<'_>) {}

    /// A terminal raw memory handle.
    fn on_unsafe_pointer(&mut self, _path: &str, _name: &str, _node: &Node<'_>) {}
}
