//! The traversal engine.

use crate::error::{WalkError, WalkResult};
use crate::observer::{Node, Observer};
use peek_value::{chain, format_scalar, Value};

/// Default recursion ceiling.
pub const DEFAULT_MAX_DEPTH: usize = 128;

/// Recursive depth-first walker over a [`Value`] tree.
///
/// Stateless between calls apart from its configuration; all rendering
/// state lives in the observer. Each call to [`walk`](Self::walk)
/// completes its entire subtree before returning, emitting callbacks in
/// strict pre-order.
#[derive(Debug, Clone)]
pub struct Walker {
    max_depth: usize,
}

impl Walker {
    /// A walker with the default depth ceiling.
    pub fn new() -> Self {
        Self {
            max_depth: DEFAULT_MAX_DEPTH,
        }
    }

    /// A walker with a custom depth ceiling.
    pub fn with_max_depth(max_depth: usize) -> Self {
        Self { max_depth }
    }

    /// Walk `value` from the root, reporting every node to `observer`.
    ///
    /// Fails only with [`WalkError::DepthExceeded`]; callbacks already
    /// emitted before the failure stand, and start/end balance is then
    /// not guaranteed for the nodes still open.
    pub fn walk(&self, name: &str, value: &Value, observer: &mut dyn Observer) -> WalkResult<()> {
        log::debug!("starting visit of {} (type: {})", name, value.type_name());
        self.visit("", name, value, observer)
    }

    /// Walk `value` as if it sat at `path`, for resuming a descent from
    /// a known position.
    pub fn visit(
        &self,
        path: &str,
        name: &str,
        value: &Value,
        observer: &mut dyn Observer,
    ) -> WalkResult<()> {
        self.visit_node(path, name, value, true, None, 0, observer)
    }

    #[allow(clippy::too_many_arguments)]
    fn visit_node(
        &self,
        path: &str,
        name: &str,
        value: &Value,
        exported: bool,
        tag: Option<&str>,
        depth: usize,
        observer: &mut dyn Observer,
    ) -> WalkResult<()> {
        if depth > self.max_depth {
            return Err(WalkError::DepthExceeded {
                path: chain(path, name),
                limit: self.max_depth,
            });
        }
        let node = Node::new(value, exported, tag);
        match value {
            Value::Invalid => {
                observer.on_value(path, "?", &node);
            }

            Value::Bool(_)
            | Value::I8(_)
            | Value::I16(_)
            | Value::I32(_)
            | Value::I64(_)
            | Value::U8(_)
            | Value::U16(_)
            | Value::U32(_)
            | Value::U64(_)
            | Value::F32(_)
            | Value::F64(_)
            | Value::C32(_)
            | Value::C64(_)
            | Value::Str(_) => {
                observer.on_value(path, name, &node);
            }

            Value::Channel { .. } => observer.on_channel(path, name, &node),
            Value::Func { .. } => observer.on_function(path, name, &node),
            Value::RawPtr(_) => observer.on_unsafe_pointer(path, name, &node),

            Value::Seq(items) => {
                observer.on_list(path, name, true, &node, items.len());
                let child_path = chain(path, name);
                for (i, item) in items.iter().enumerate() {
                    let idx = format!("[{i}]");
                    self.visit_node(&child_path, &idx, item, exported, None, depth + 1, observer)?;
                }
                observer.on_list(path, name, false, &node, items.len());
            }

            Value::Struct(sv) => {
                observer.on_struct(path, name, true, &node);
                let child_path = chain(path, name);
                for field in &sv.fields {
                    // Readability does not come back below an unreadable parent.
                    self.visit_node(
                        &child_path,
                        &field.name,
                        &field.value,
                        exported && field.exported,
                        field.tag.as_deref(),
                        depth + 1,
                        observer,
                    )?;
                }
                observer.on_struct(path, name, false, &node);
            }

            Value::Map(mv) => {
                observer.on_map(path, name, true, &node);
                let child_path = chain(path, name);
                for (key, entry) in &mv.entries {
                    let key_name = format_scalar(key);
                    self.visit_node(
                        &child_path,
                        &key_name,
                        entry,
                        exported,
                        None,
                        depth + 1,
                        observer,
                    )?;
                }
                observer.on_map(path, name, false, &node);
            }

            Value::Ptr {
                target_type,
                referent,
            } => {
                observer.on_pointer(path, name, true, &node);
                let child_path = chain(path, name);
                match referent {
                    None => observer.on_nil(&child_path, "value", target_type),
                    Some(inner) => {
                        self.visit_node(
                            &child_path,
                            "value",
                            inner,
                            exported,
                            None,
                            depth + 1,
                            observer,
                        )?;
                    }
                }
                observer.on_pointer(path, name, false, &node);
            }

            Value::Any(payload) => {
                observer.on_interface(path, name, true, &node);
                let child_path = chain(path, name);
                match payload {
                    None => observer.on_nil(&child_path, "value", "any"),
                    Some(inner) => {
                        self.visit_node(
                            &child_path,
                            "value",
                            inner,
                            exported,
                            None,
                            depth + 1,
                            observer,
                        )?;
                    }
                }
                observer.on_interface(path, name, false, &node);
            }
        }
        Ok(())
    }
}

impl Default for Walker {
    fn default() -> Self {
        Self::new()
    }
}
