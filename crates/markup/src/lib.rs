//! Cloze marker grammar: scanning, stripping, and field application.
//!
//! A cloze marker wraps fill-in-the-blank content together with an ordinal
//! and an optional hint: `{{c1::Paris}}`, `{{c2::Paris::capital}}`. Markers
//! nest, and the hint separator only counts at the marker's own depth.
//! Anything that fails to form a complete marker is plain text.

pub mod field;
pub mod scanner;

pub use field::FieldBuffer;
pub use scanner::{ClozeSpan, cloze_at, find_cloze, strip_clozes};
