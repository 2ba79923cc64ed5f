//! Indented, bulleted list items for plain text and Markdown.
//!
//! A [`ListItemFormatter`] is built once from [`ListItemOptions`] and then
//! formats one item per call, choosing the bullet by nesting level and
//! repeating the indent unit once per level.

pub mod config;
pub mod errors;
pub mod formatter;
pub mod numeric;
pub mod range;
pub mod types;

pub use errors::{ListItemError, Result};
pub use formatter::{listitem, resolve_bullets, ListItemFormatter, TransformFn};
pub use numeric::{is_numeric, parse_number, IntoLevel};
pub use range::{split_range, BulletFn, DefaultRangeExpander, RangeExpander};
pub use types::{BulletSpec, ListItemOptions, Resolution, MAX_INDENT_BYTES};
