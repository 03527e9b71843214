//! Renderer implementations of the observer contract.
//!
//! Two variants, selected at construction time: [`PrettyPrinter`]
//! accumulates an indented textual rendering in an owned buffer;
//! [`TraceWriter`] forwards every callback to the `log` facade as a
//! debug line and keeps no state.

use crate::observer::{Node, Observer};
use peek_value::{format_scalar, Kind, Value};

/// Buffered-string renderer.
///
/// Owns the indentation counter and the destination buffer, per the
/// contract that observers hold all mutable rendering state.
#[derive(Debug, Default)]
pub struct PrettyPrinter {
    buffer: String,
    indent: usize,
}

impl PrettyPrinter {
    pub fn new() -> Self {
        Self::default()
    }

    /// The rendering accumulated so far.
    pub fn as_str(&self) -> &str {
        &self.buffer
    }

    /// Consume the printer and take its buffer.
    pub fn into_string(self) -> String {
        self.buffer
    }

    fn line(&mut self, text: &str) {
        for _ in 0..self.indent {
            self.buffer.push_str("  ");
        }
        self.buffer.push_str(text);
        self.buffer.push('\n');
    }

    fn open(&mut self, name: &str, header: &str) {
        let text = format!("{name}: {header}");
        self.line(&text);
        self.indent += 1;
    }

    fn close(&mut self, closer: &str) {
        self.indent = self.indent.saturating_sub(1);
        self.line(closer);
    }
}

impl Observer for PrettyPrinter {
    fn on_nil(&mut self, _path: &str, name: &str, _target_type: &str) {
        self.line(&format!("{name}: <nil>,"));
    }

    fn on_value(&mut self, _path: &str, name: &str, node: &Node<'_>) {
        if node.kind == Kind::Invalid {
            self.line(&format!("{name}: <invalid> \"<invalid>\","));
        } else if !node.exported {
            self.line(&format!("{name}: <unexported>,"));
        } else {
            let mut text = format!("{name}: {} {},", node.type_name, format_scalar(node.value));
            if let Some(tag) = node.tag {
                text.push_str(&format!(" // `{tag}`"));
            }
            self.line(&text);
        }
    }

    fn on_pointer(&mut self, _path: &str, name: &str, start: bool, node: &Node<'_>) {
        if start {
            self.open(name, &format!("{} -> {{", node.type_name));
        } else {
            self.close("},");
        }
    }

    fn on_list(&mut self, _path: &str, name: &str, start: bool, node: &Node<'_>, _len: usize) {
        if start {
            self.open(name, &format!("{} [", node.type_name));
        } else {
            self.close("],");
        }
    }

    fn on_struct(&mut self, _path: &str, name: &str, start: bool, node: &Node<'_>) {
        if start {
            self.open(name, &format!("{} {{", node.type_name));
        } else {
            self.close("},");
        }
    }

    fn on_map(&mut self, _path: &str, name: &str, start: bool, node: &Node<'_>) {
        if start {
            self.open(name, &format!("{} {{", node.type_name));
        } else {
            self.close("},");
        }
    }

    fn on_interface(&mut self, _path: &str, name: &str, start: bool, node: &Node<'_>) {
        if start {
            self.open(name, &format!("{} {{", node.type_name));
        } else {
            self.close("},");
        }
    }

    fn on_channel(&mut self, _path: &str, name: &str, node: &Node<'_>) {
        let len = match node.value {
            Value::Channel { len, .. } => *len,
            _ => 0,
        };
        self.line(&format!("{name}: [{len}]{},", node.type_name));
    }

    fn on_function(&mut self, _path: &str, name: &str, node: &Node<'_>) {
        self.line(&format!("{name}: {},", node.type_name));
    }

    fn on_unsafe_pointer(&mut self, _path: &str, name: &str, node: &Node<'_>) {
        self.line(&format!("{name}: {},", format_scalar(node.value)));
    }
}

/// Direct-log renderer: one `debug` line per callback, no buffer.
#[derive(Debug, Default)]
pub struct TraceWriter;

impl TraceWriter {
    pub fn new() -> Self {
        Self
    }

    fn trace(event: &str, path: &str, name: &str, node: &Node<'_>) {
        log::debug!(
            "{event:<10} kind: {:<10} type: {:<20} path: {path:?} name: {name:?}",
            node.kind,
            node.type_name,
        );
    }
}

impl Observer for TraceWriter {
    fn on_nil(&mut self, path: &str, name: &str, target_type: &str) {
        log::debug!("nil        type: {target_type:<20} path: {path:?} name: {name:?}");
    }

    fn on_value(&mut self, path: &str, name: &str, node: &Node<'_>) {
        Self::trace("value", path, name, node);
    }

    fn on_pointer(&mut self, path: &str, name: &str, start: bool, node: &Node<'_>) {
        Self::trace(if start { "ptr+" } else { "ptr-" }, path, name, node);
    }

    fn on_list(&mut self, path: &str, name: &str, start: bool, node: &Node<'_>, len: usize) {
        let event = if start { "list+" } else { "list-" };
        log::debug!(
            "{event:<10} kind: {:<10} type: {:<20} len: {len} path: {path:?} name: {name:?}",
            node.kind,
            node.type_name,
        );
    }

    fn on_struct(&mut self, path: &str, name: &str, start: bool, node: &Node<'_>) {
        Self::trace(if start { "struct+" } else { "struct-" }, path, name, node);
    }

    fn on_map(&mut self, path: &str, name: &str, start: bool, node: &Node<'_>) {
        Self::trace(if start { "map+" } else { "map-" }, path, name, node);
    }

    fn on_interface(&mut self, path: &str, name: &str, start: bool, node: &Node<'_>) {
        Self::trace(if start { "any+" } else { "any-" }, path, name, node);
    }

    fn on_channel(&mut self, path: &str, name: &str, node: &Node<'_>) {
        Self::trace("channel", path, name, node);
    }

    fn on_function(&mut self, path: &str, name: &str, node: &Node<'_>) {
        Self::trace("func", path, name, node);
    }

    fn on_unsafe_pointer(&mut self, path: &str, name: &str, node: &Node<'_>) {
        Self::trace("rawptr", path, name, node);
    }
}
