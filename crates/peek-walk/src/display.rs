//! One-shot display facility.
//!
//! Walks a value and writes `path = rendering` lines straight to an
//! output stream, with no observer indirection. Intended for ad-hoc
//! inspection; the observer contract is the tested boundary.

use peek_value::{format_scalar, Value};
use std::io::{self, Write};

/// Dump `value` to standard output.
pub fn display(name: &str, value: &Value) {
    let stdout = io::stdout();
    let mut out = stdout.lock();
    // Stdout write failures are not actionable here.
    let _ = display_to(&mut out, name, value);
}

/// Dump `value` to an arbitrary writer.
pub fn display_to<W: Write>(out: &mut W, name: &str, value: &Value) -> io::Result<()> {
    writeln!(out, "Display {} ({}):", name, value.type_name())?;
    visit(out, name, value)
}

fn visit<W: Write>(out: &mut W, path: &str, value: &Value) -> io::Result<()> {
    match value {
        Value::Invalid => writeln!(out, "{path} = invalid"),
        Value::Seq(items) => {
            for (i, item) in items.iter().enumerate() {
                visit(out, &format!("{path}[{i}]"), item)?;
            }
            Ok(())
        }
        Value::Struct(sv) => {
            for field in &sv.fields {
                let field_path = format!("{path}.{}", field.name);
                if field.exported {
                    visit(out, &field_path, &field.value)?;
                } else {
                    writeln!(out, "{field_path} = <unexported>")?;
                }
            }
            Ok(())
        }
        Value::Map(mv) => {
            for (key, entry) in &mv.entries {
                visit(out, &format!("{path}[{}]", format_scalar(key)), entry)?;
            }
            Ok(())
        }
        Value::Ptr { referent: None, .. } => writeln!(out, "{path} = nil"),
        Value::Ptr {
            referent: Some(inner),
            ..
        } => visit(out, &format!("(*{path})"), inner),
        Value::Any(None) => writeln!(out, "{path} = nil"),
        Value::Any(Some(inner)) => {
            writeln!(out, "{path}.type = {}", inner.type_name())?;
            visit(out, &format!("{path}.value"), inner)
        }
        // Scalars, channels, funcs, raw pointers.
        _ => writeln!(out, "{path} = {}", format_scalar(value)),
    }
}
