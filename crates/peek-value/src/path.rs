//! Node addressing: dotted path composition.

/// Join a parent path and a local name into a child path.
///
/// Identity-preserving when either side is empty; otherwise dot-joined.
/// Index markers (`[i]`) and the synthetic dereference name (`value`)
/// are chosen by the traversal engine, not here.
pub fn chain(path: &str, name: &str) -> String {
    if path.is_empty() {
        name.to_string()
    } else if name.is_empty() {
        path.to_string()
    } else {
        format!("{path}.{name}")
    }
}
