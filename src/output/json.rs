//! JSON output renderer

use serde_json::Value;

use super::value::normalize;
use super::Renderer;

/// Renderer for pretty-printed JSON (the raw format)
pub struct JsonRenderer;

impl Renderer for JsonRenderer {
    fn render(&self, value: &Value) -> String {
        // Alternate Display on Value is the 2-space pretty printer
        format!("{:#}", normalize(value))
    }
}
