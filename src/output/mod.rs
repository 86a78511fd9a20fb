//! Output rendering module
//!
//! Turns any decoded JSON value into one of the supported textual formats
//! without knowing the shape of the data: raw JSON, plain text, HTML, and
//! Markdown. Rendering is pure and deterministic.

mod html;
mod json;
mod markdown;
mod text;
pub mod value;

use std::str::FromStr;

use clap::ValueEnum;
use serde::{Deserialize, Serialize};
use serde_json::Value;

use crate::error::{Result, RtmsError};

pub use self::html::HtmlRenderer;
pub use self::json::JsonRenderer;
pub use self::markdown::MarkdownRenderer;
pub use self::text::TextRenderer;

/// Trait for output renderers
pub trait Renderer {
    /// Render a value to a string
    fn render(&self, value: &Value) -> String;
}

/// Output format options
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, ValueEnum, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum OutputFormat {
    /// Pretty-printed JSON (default)
    #[default]
    #[value(alias = "raw")]
    #[serde(alias = "raw")]
    Json,
    /// Indented plain text
    Text,
    /// Standalone HTML page
    Html,
    /// Markdown lists
    #[value(alias = "md")]
    #[serde(alias = "md")]
    Markdown,
}

impl OutputFormat {
    fn renderer(self) -> &'static dyn Renderer {
        match self {
            OutputFormat::Json => &JsonRenderer,
            OutputFormat::Text => &TextRenderer,
            OutputFormat::Html => &HtmlRenderer,
            OutputFormat::Markdown => &MarkdownRenderer,
        }
    }
}

impl std::fmt::Display for OutputFormat {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            OutputFormat::Json => write!(f, "json"),
            OutputFormat::Text => write!(f, "text"),
            OutputFormat::Html => write!(f, "html"),
            OutputFormat::Markdown => write!(f, "markdown"),
        }
    }
}

impl FromStr for OutputFormat {
    type Err = RtmsError;

    fn from_str(s: &str) -> Result<Self> {
        match s.trim().to_lowercase().as_str() {
            "json" | "raw" => Ok(OutputFormat::Json),
            "text" => Ok(OutputFormat::Text),
            "html" => Ok(OutputFormat::Html),
            "markdown" | "md" => Ok(OutputFormat::Markdown),
            other => Err(RtmsError::Config(format!("unsupported format: {}", other))),
        }
    }
}

/// Render a value in the given format
pub fn render(value: &Value, format: OutputFormat) -> String {
    format.renderer().render(value)
}

/// Render a value in the format named by `format`
///
/// Unknown names are rejected before anything is rendered.
pub fn render_named(value: &Value, format: &str) -> Result<String> {
    let format: OutputFormat = format.parse()?;
    Ok(render(value, format))
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    const ALL_FORMATS: [OutputFormat; 4] = [
        OutputFormat::Json,
        OutputFormat::Text,
        OutputFormat::Html,
        OutputFormat::Markdown,
    ];

    #[test]
    fn test_output_format_display() {
        assert_eq!(OutputFormat::Json.to_string(), "json");
        assert_eq!(OutputFormat::Text.to_string(), "text");
        assert_eq!(OutputFormat::Html.to_string(), "html");
        assert_eq!(OutputFormat::Markdown.to_string(), "markdown");
    }

    #[test]
    fn test_output_format_from_str() {
        assert_eq!("raw".parse::<OutputFormat>().unwrap(), OutputFormat::Json);
        assert_eq!("JSON".parse::<OutputFormat>().unwrap(), OutputFormat::Json);
        assert_eq!("md".parse::<OutputFormat>().unwrap(), OutputFormat::Markdown);
        assert_eq!("html".parse::<OutputFormat>().unwrap(), OutputFormat::Html);
    }

    #[test]
    fn test_render_named_rejects_unknown_format() {
        let err = render_named(&json!({"a": 1}), "xml").unwrap_err();
        match err {
            RtmsError::Config(msg) => assert!(msg.contains("xml")),
            _ => panic!("Expected RtmsError::Config"),
        }
    }

    #[test]
    fn test_render_named_text() {
        assert_eq!(render_named(&Value::Null, "text").unwrap(), "nil");
    }

    #[test]
    fn test_key_order_does_not_change_output() {
        let a: Value = serde_json::from_str(
            r#"[{"zeta": 1, "alpha": {"y": [1, {"q": null, "p": 2}], "x": "s"}}]"#,
        )
        .unwrap();
        let b: Value = serde_json::from_str(
            r#"[{"alpha": {"x": "s", "y": [1, {"p": 2, "q": null}]}, "zeta": 1}]"#,
        )
        .unwrap();
        for format in ALL_FORMATS {
            assert_eq!(render(&a, format), render(&b, format), "format {}", format);
        }
    }

    #[test]
    fn test_repeated_renders_identical() {
        let value = json!({"b": [1, 2, {"d": 4, "c": 3}], "a": null});
        for format in ALL_FORMATS {
            assert_eq!(render(&value, format), render(&value, format));
        }
    }

    #[test]
    fn test_every_format_handles_empty_and_null() {
        for format in ALL_FORMATS {
            assert!(!render(&json!([]), format).is_empty());
            assert!(!render(&Value::Null, format).is_empty());
        }
    }

    #[test]
    fn test_output_format_serde() {
        let format: OutputFormat = serde_json::from_value(json!("md")).unwrap();
        assert_eq!(format, OutputFormat::Markdown);
        assert_eq!(
            serde_json::to_value(OutputFormat::Html).unwrap(),
            json!("html")
        );
    }
}
