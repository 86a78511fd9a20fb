//! Pagination scheme and page envelope decoding
//!
//! RTMS endpoints have not been consistent about how pages are requested
//! (`page`/`itemsPerPage` vs. `offset`/`limit`) or where the items and the
//! total live in the response body, so both sides of the mapping are carried
//! by a [`PaginationScheme`] instead of being hard-coded.

use clap::ValueEnum;
use log::debug;
use serde::{Deserialize, Serialize};
use serde_json::Value;

use crate::error::{Result, RtmsError};

/// How the position of a page is expressed in the query string
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize, ValueEnum)]
#[serde(rename_all = "kebab-case")]
pub enum PaginationStyle {
    /// 1-based page number plus page size (default)
    #[default]
    PageNumber,
    /// Item offset plus limit
    Offset,
}

impl std::fmt::Display for PaginationStyle {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            PaginationStyle::PageNumber => write!(f, "page-number"),
            PaginationStyle::Offset => write!(f, "offset"),
        }
    }
}

/// Mapping between the streamer and a server's pagination conventions
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default, rename_all = "kebab-case")]
pub struct PaginationScheme {
    pub style: PaginationStyle,
    /// Page number parameter (page-number style)
    pub page_param: String,
    /// Page size parameter (page-number style)
    pub size_param: String,
    /// Offset parameter (offset style)
    pub offset_param: String,
    /// Limit parameter (offset style)
    pub limit_param: String,
    /// Dotted path to the items array in the response body
    pub items_field: String,
    /// Dotted path to the total item count in the response body
    pub total_field: String,
}

impl Default for PaginationScheme {
    fn default() -> Self {
        Self {
            style: PaginationStyle::PageNumber,
            page_param: "page".to_string(),
            size_param: "itemsPerPage".to_string(),
            offset_param: "offset".to_string(),
            limit_param: "limit".to_string(),
            items_field: "data".to_string(),
            total_field: "pagination.total".to_string(),
        }
    }
}

impl PaginationScheme {
    /// Offset/limit scheme with the default envelope field names
    pub fn offset() -> Self {
        Self {
            style: PaginationStyle::Offset,
            ..Self::default()
        }
    }

    /// Query parameters selecting the page that starts at `offset`
    pub fn query_pairs(&self, offset: usize, page_size: usize) -> Vec<(String, String)> {
        match self.style {
            PaginationStyle::PageNumber => vec![
                (self.page_param.clone(), (offset / page_size + 1).to_string()),
                (self.size_param.clone(), page_size.to_string()),
            ],
            PaginationStyle::Offset => vec![
                (self.offset_param.clone(), offset.to_string()),
                (self.limit_param.clone(), page_size.to_string()),
            ],
        }
    }

    /// Decode one response body into a page envelope
    ///
    /// A body without a total is treated as a single, final page.
    pub fn decode_page(&self, body: &[u8], offset: usize, page_size: usize) -> Result<PageEnvelope> {
        let root: Value = serde_json::from_slice(body)?;

        let items = match lookup(&root, &self.items_field) {
            Some(Value::Array(items)) => items.clone(),
            Some(other) => {
                return Err(RtmsError::Decode(format!(
                    "field '{}' is not an array (found {})",
                    self.items_field,
                    kind_name(other)
                )))
            }
            None => {
                return Err(RtmsError::Decode(format!(
                    "missing field '{}' in page envelope",
                    self.items_field
                )))
            }
        };

        let total_count = match lookup(&root, &self.total_field) {
            Some(Value::Number(n)) => match n.as_u64() {
                Some(total) => total as usize,
                None => {
                    return Err(RtmsError::Decode(format!(
                        "field '{}' is not a non-negative integer: {}",
                        self.total_field, n
                    )))
                }
            },
            Some(Value::Null) | None => {
                debug!(
                    "No '{}' in page envelope, treating page as final",
                    self.total_field
                );
                offset + items.len()
            }
            Some(other) => {
                return Err(RtmsError::Decode(format!(
                    "field '{}' is not a number (found {})",
                    self.total_field,
                    kind_name(other)
                )))
            }
        };

        Ok(PageEnvelope {
            items,
            total_count,
            page_offset: offset,
            page_size,
        })
    }
}

/// One page of a paged collection
#[derive(Debug, Clone, PartialEq)]
pub struct PageEnvelope {
    pub items: Vec<Value>,
    pub total_count: usize,
    pub page_offset: usize,
    pub page_size: usize,
}

impl PageEnvelope {
    /// True when no page follows this one
    pub fn is_last(&self) -> bool {
        self.page_offset + self.items.len() >= self.total_count
    }
}

fn lookup<'a>(root: &'a Value, path: &str) -> Option<&'a Value> {
    path.split('.')
        .filter(|segment| !segment.is_empty())
        .try_fold(root, |node, segment| node.get(segment))
}

fn kind_name(value: &Value) -> &'static str {
    match value {
        Value::Null => "null",
        Value::Bool(_) => "boolean",
        Value::Number(_) => "number",
        Value::String(_) => "string",
        Value::Array(_) => "array",
        Value::Object(_) => "object",
    }
}
