//! Line segmentation.
//!
//! Splits the decoded payload into an ordered, lazy sequence of record
//! lines. Only the separator is stripped (`\n`, tolerating a trailing
//! `\r`); line content is otherwise untouched. Empty lines between
//! separators are records too.

/// Segment a text blob into lines, preserving original order.
///
/// The iterator borrows the blob so the payload is never re-materialized
/// as an owned line list.
pub fn segment_lines(text: &str) -> impl Iterator<Item = &str> {
    text.lines()
}
