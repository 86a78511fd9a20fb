//! Plain text output renderer

use serde_json::Value;

use super::value::{is_nested, leaf_text, sorted_entries};
use super::Renderer;

const INDENT: &str = "  ";

/// Renderer for an indented `key: value` / `- item` dump
pub struct TextRenderer;

impl Renderer for TextRenderer {
    fn render(&self, value: &Value) -> String {
        let mut lines = Vec::new();
        if is_nested(value) {
            push_lines(&mut lines, value, 0);
        } else {
            lines.push(leaf_text(value));
        }
        lines.join("\n")
    }
}

fn push_lines(lines: &mut Vec<String>, value: &Value, depth: usize) {
    let indent = INDENT.repeat(depth);
    match value {
        Value::Object(map) => {
            for (key, child) in sorted_entries(map) {
                if is_nested(child) {
                    lines.push(format!("{}{}:", indent, key));
                    push_lines(lines, child, depth + 1);
                } else {
                    lines.push(format!("{}{}: {}", indent, key, leaf_text(child)));
                }
            }
        }
        Value::Array(items) => {
            for child in items {
                if is_nested(child) {
                    lines.push(format!("{}-", indent));
                    push_lines(lines, child, depth + 1);
                } else {
                    lines.push(format!("{}- {}", indent, leaf_text(child)));
                }
            }
        }
        leaf => lines.push(format!("{}{}", indent, leaf_text(leaf))),
    }
}
