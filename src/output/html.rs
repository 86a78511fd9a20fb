//! HTML output renderer

use serde_json::{Map, Value};

use super::value::{compact_json, sorted_keys};
use super::Renderer;

const STYLE: &str = "body { font-family: Arial, sans-serif; background-color: #f0f0f0; margin: 0; padding: 20px; }\
table { border-collapse: separate; border-spacing: 0; width: 100%; background-color: white; box-shadow: 0 1px 3px rgba(0,0,0,0.2); border-radius: 6px; overflow: hidden; }\
th, td { padding: 15px; text-align: left; }\
th { background-color: #4CAF50; color: white; text-transform: uppercase; font-weight: bold; }\
td { border-top: 1px solid #ddd; }\
tr:nth-child(even) { background-color: #f8f8f8; }\
.null { color: #999; font-style: italic; }\
.empty { color: #999; font-style: italic; }";

const NULL_PLACEHOLDER: &str = "<span class=\"null\">null</span>";
const EMPTY_PLACEHOLDER: &str = "<span class=\"empty\">empty</span>";

/// Renderer for a standalone HTML page
///
/// An array whose first element is an object becomes a table; anything else
/// is written as a single paragraph.
pub struct HtmlRenderer;

impl Renderer for HtmlRenderer {
    fn render(&self, value: &Value) -> String {
        let mut out = String::from("<html><head><style>");
        out.push_str(STYLE);
        out.push_str("</style></head><body>");

        match value {
            Value::Array(items) => match items.first() {
                Some(Value::Object(first)) => write_table(&mut out, first, items),
                _ => write_paragraph(&mut out, value),
            },
            other => write_paragraph(&mut out, other),
        }

        out.push_str("</body></html>");
        out
    }
}

fn write_table(out: &mut String, first: &Map<String, Value>, rows: &[Value]) {
    let columns = sorted_keys(first);

    out.push_str("<table><tr>");
    for column in &columns {
        out.push_str(&format!("<th>{}</th>", escape_html(column)));
    }
    out.push_str("</tr>");

    for row in rows {
        out.push_str("<tr>");
        match row {
            Value::Object(map) => {
                for column in &columns {
                    out.push_str("<td>");
                    if let Some(cell) = map.get(column.as_str()) {
                        out.push_str(&render_cell(cell));
                    }
                    out.push_str("</td>");
                }
            }
            other => out.push_str(&format!(
                "<td colspan=\"{}\">{}</td>",
                columns.len(),
                render_cell(other)
            )),
        }
        out.push_str("</tr>");
    }

    out.push_str("</table>");
}

fn write_paragraph(out: &mut String, value: &Value) {
    out.push_str("<p>");
    out.push_str(&inline(value));
    out.push_str("</p>");
}

fn render_cell(value: &Value) -> String {
    match value {
        Value::Array(items) if !items.is_empty() => {
            let mut list = String::from("<ul>");
            for item in items {
                list.push_str(&format!("<li>{}</li>", render_cell(item)));
            }
            list.push_str("</ul>");
            list
        }
        other => inline(other),
    }
}

/// Escaped single-line form, with placeholders for null and empty containers
fn inline(value: &Value) -> String {
    match value {
        Value::Null => NULL_PLACEHOLDER.to_string(),
        Value::Bool(b) => b.to_string(),
        Value::Number(n) => n.to_string(),
        Value::String(s) => escape_html(s),
        Value::Array(items) if items.is_empty() => EMPTY_PLACEHOLDER.to_string(),
        Value::Object(map) if map.is_empty() => EMPTY_PLACEHOLDER.to_string(),
        nested => escape_html(&compact_json(nested)),
    }
}

/// Escape text for use in HTML element content and attribute values
pub fn escape_html(value: &str) -> String {
    let mut escaped = String::with_capacity(value.len());
    for c in value.chars() {
        match c {
            '&' => escaped.push_str("&amp;"),
            '<' => escaped.push_str("&lt;"),
            '>' => escaped.push_str("&gt;"),
            '"' => escaped.push_str("&#34;"),
            '\'' => escaped.push_str("&#39;"),
            _ => escaped.push(c),
        }
    }
    escaped
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    fn body(rendered: &str) -> &str {
        let start = rendered.find("<body>").unwrap() + "<body>".len();
        let end = rendered.rfind("</body>").unwrap();
        &rendered[start..end]
    }

    #[test]
    fn test_escape_html() {
        assert_eq!(escape_html("plain"), "plain");
        assert_eq!(
            escape_html("<a href=\"x\">Tom & Jerry's</a>"),
            "&lt;a href=&#34;x&#34;&gt;Tom &amp; Jerry&#39;s&lt;/a&gt;"
        );
    }

    #[test]
    fn test_document_wrapper() {
        let rendered = HtmlRenderer.render(&json!("x"));
        assert!(rendered.starts_with("<html><head><style>"));
        assert!(rendered.ends_with("</body></html>"));
    }

    #[test]
    fn test_table_from_records() {
        let rendered = HtmlRenderer.render(&json!([
            {"name": "web-01", "id": 1},
            {"id": 2, "name": "<db>"}
        ]));
        assert_eq!(
            body(&rendered),
            "<table><tr><th>id</th><th>name</th></tr>\
             <tr><td>1</td><td>web-01</td></tr>\
             <tr><td>2</td><td>&lt;db&gt;</td></tr></table>"
        );
    }

    #[test]
    fn test_missing_key_renders_empty_cell() {
        let rendered = HtmlRenderer.render(&json!([{"a": 1, "b": 2}, {"a": 3}]));
        assert!(body(&rendered).contains("<tr><td>3</td><td></td></tr>"));
    }

    #[test]
    fn test_placeholders_in_cells() {
        let rendered = HtmlRenderer.render(&json!([
            {"owner": null, "tags": [], "ips": ["10.0.0.1", null]}
        ]));
        assert!(body(&rendered).contains(
            "<tr><td><ul><li>10.0.0.1</li><li><span class=\"null\">null</span></li></ul></td>\
             <td><span class=\"null\">null</span></td>\
             <td><span class=\"empty\">empty</span></td></tr>"
        ));
    }

    #[test]
    fn test_nested_object_cell_is_escaped_json() {
        let rendered = HtmlRenderer.render(&json!([{"meta": {"b": "<", "a": 1}}]));
        assert!(body(&rendered).contains("<td>{&#34;a&#34;:1,&#34;b&#34;:&#34;&lt;&#34;}</td>"));
    }

    #[test]
    fn test_non_object_row_spans_columns() {
        let rendered = HtmlRenderer.render(&json!([{"a": 1, "b": 2}, "stray"]));
        assert!(body(&rendered).contains("<tr><td colspan=\"2\">stray</td></tr>"));
    }

    #[test]
    fn test_scalar_fallback() {
        assert_eq!(body(&HtmlRenderer.render(&json!("a < b"))), "<p>a &lt; b</p>");
        assert_eq!(
            body(&HtmlRenderer.render(&Value::Null)),
            "<p><span class=\"null\">null</span></p>"
        );
    }

    #[test]
    fn test_array_of_scalars_fallback() {
        assert_eq!(body(&HtmlRenderer.render(&json!([1, "x"]))), "<p>[1,&#34;x&#34;]</p>");
        assert_eq!(
            body(&HtmlRenderer.render(&json!([]))),
            "<p><span class=\"empty\">empty</span></p>"
        );
    }
}
