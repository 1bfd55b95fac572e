//! Rendering module for presenting a chosen quote.

mod json;
mod text;

pub use json::{to_json, JsonFormat};
pub use text::{status_text, to_text};
