//! Chat export line model: splitting, attachment markers, timestamps and word counts.

pub mod attachment;
pub mod timestamp;

/// Split file content into lines, keeping each line's terminator.
///
/// Only `\n` ends a line; a lone `\r` stays inside the line.
/// Concatenating the result gives back `content` unchanged. A final line
/// without a trailing newline is kept as-is.
pub fn split_lines(content: &str) -> Vec<&str> {
    content.split_inclusive('\n').collect()
}

/// Number of whitespace-delimited tokens in `text`.
pub fn word_count(text: &str) -> usize {
    text.split_whitespace().count()
}
