//! Markdown output renderer

use serde_json::Value;

use super::value::{is_nested, leaf_text, sorted_entries};
use super::Renderer;

/// Renderer for nested Markdown bullet lists
///
/// A top-level array of records gets one `### Item N` section per record.
pub struct MarkdownRenderer;

impl Renderer for MarkdownRenderer {
    fn render(&self, value: &Value) -> String {
        let mut out = String::new();
        match value {
            Value::Array(items) if matches!(items.first(), Some(Value::Object(_))) => {
                for (i, item) in items.iter().enumerate() {
                    out.push_str(&format!("### Item {}\n\n", i + 1));
                    if is_nested(item) {
                        write_item(&mut out, item, 0);
                    } else {
                        out.push_str(&format!("- {}\n", leaf_text(item)));
                    }
                    out.push('\n');
                }
            }
            other => write_item(&mut out, other, 0),
        }
        out
    }
}

fn write_item(out: &mut String, value: &Value, depth: usize) {
    let indent = "  ".repeat(depth);
    match value {
        Value::Object(map) if !map.is_empty() => {
            for (key, child) in sorted_entries(map) {
                out.push_str(&format!("{}- **{}**: ", indent, key));
                write_child(out, child, depth);
            }
        }
        Value::Array(items) if !items.is_empty() => {
            for child in items {
                out.push_str(&format!("{}- ", indent));
                write_child(out, child, depth);
            }
        }
        leaf => out.push_str(&format!("{}{}\n", indent, leaf_text(leaf))),
    }
}

/// Finish an entry line: inline for leaves, nested one level deeper otherwise
fn write_child(out: &mut String, child: &Value, depth: usize) {
    if is_nested(child) {
        out.push('\n');
        write_item(out, child, depth + 1);
    } else {
        out.push_str(&leaf_text(child));
        out.push('\n');
    }
}
