//! UI utilities for terminal output
//!
//! Progress spinners drawn on stderr so rendered output on stdout stays clean.

mod spinner;

pub use spinner::{create_spinner, finish_spinner, set_spinner_message};
