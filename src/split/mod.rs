//! Splits the merged chat into numbered parts under a word budget.

use std::path::Path;

use chrono::NaiveDateTime;
use serde::Serialize;

use crate::chat::{split_lines, timestamp, word_count};
use crate::error::{StageError, StageResult};
use crate::layout::{part_file_name, Layout};

/// Maximum number of words in one part.
pub const MAX_WORDS_PER_PART: usize = 400_000;

/// A contiguous run of chat lines written to one part file.
#[derive(Debug, Clone, PartialEq)]
pub struct ChatPart<'a> {
    /// 1-based.
    pub number: usize,
    pub lines: Vec<&'a str>,
    pub words: usize,
    pub first_timestamp: Option<NaiveDateTime>,
    pub last_timestamp: Option<NaiveDateTime>,
}

impl ChatPart<'_> {
    pub fn file_name(&self) -> String {
        part_file_name(self.number)
    }

    pub fn content(&self) -> String {
        self.lines.concat()
    }
}

/// Greedy accumulator carried through the fold over input lines.
///
/// A part is closed as soon as the next line would push it over `max_words`.
/// A part always holds at least one line, even if that line alone is over budget.
#[derive(Debug)]
pub struct Partitioner<'a> {
    max_words: usize,
    number: usize,
    lines: Vec<&'a str>,
    words: usize,
    first_timestamp: Option<NaiveDateTime>,
    last_timestamp: Option<NaiveDateTime>,
}

impl<'a> Partitioner<'a> {
    pub fn new(max_words: usize) -> Self {
        Partitioner {
            max_words,
            number: 1,
            lines: Vec::new(),
            words: 0,
            first_timestamp: None,
            last_timestamp: None,
        }
    }

    /// Add a line, returning the part it closed, if any.
    pub fn push(&mut self, line: &'a str) -> Option<ChatPart<'a>> {
        let line_words = word_count(line);

        let closed = if !self.lines.is_empty() && self.words + line_words > self.max_words {
            Some(self.take_part())
        } else {
            None
        };

        if let Some(ts) = timestamp::parse_leading(line) {
            self.first_timestamp.get_or_insert(ts);
            self.last_timestamp = Some(ts);
        }
        self.lines.push(line);
        self.words += line_words;

        closed
    }

    /// Close the trailing part, if it has any lines.
    pub fn finish(mut self) -> Option<ChatPart<'a>> {
        if self.lines.is_empty() {
            None
        } else {
            Some(self.take_part())
        }
    }

    fn take_part(&mut self) -> ChatPart<'a> {
        let part = ChatPart {
            number: self.number,
            lines: std::mem::take(&mut self.lines),
            words: self.words,
            first_timestamp: self.first_timestamp.take(),
            last_timestamp: self.last_timestamp.take(),
        };
        log::debug!(
            "closing part {} ({} lines, {} words)",
            part.number,
            part.lines.len(),
            part.words
        );
        self.number += 1;
        self.words = 0;
        part
    }
}

/// Partition `lines` in order. Concatenating the parts gives back the input.
pub fn partition<'a>(lines: &[&'a str], max_words: usize) -> Vec<ChatPart<'a>> {
    let (acc, mut parts) = lines.iter().fold(
        (Partitioner::new(max_words), Vec::<ChatPart<'a>>::new()),
        |(mut acc, mut parts), line| {
            parts.extend(acc.push(*line));
            (acc, parts)
        },
    );
    parts.extend(acc.finish());
    parts
}

/// What was written for one part.
#[derive(Debug, Clone, Serialize)]
pub struct PartSummary {
    pub number: usize,
    pub file: String,
    pub lines: usize,
    pub words: usize,
    pub first_timestamp: Option<NaiveDateTime>,
    pub last_timestamp: Option<NaiveDateTime>,
}

impl From<&ChatPart<'_>> for PartSummary {
    fn from(part: &ChatPart<'_>) -> Self {
        PartSummary {
            number: part.number,
            file: part.file_name(),
            lines: part.lines.len(),
            words: part.words,
            first_timestamp: part.first_timestamp,
            last_timestamp: part.last_timestamp,
        }
    }
}

/// Read the merged chat. Fails on a missing or empty input.
pub fn load(path: &Path) -> StageResult<String> {
    let content = crate::error::read_source(path)?;
    if content.is_empty() {
        return Err(StageError::EmptySource {
            path: path.to_path_buf(),
        });
    }
    Ok(content)
}

pub fn split_content(content: &str, max_words: usize) -> Vec<ChatPart<'_>> {
    partition(&split_lines(content), max_words)
}

/// Create the parts directory if needed.
pub fn prepare_output(layout: &Layout) -> StageResult<()> {
    let dir = layout.parts_dir();
    std::fs::create_dir_all(&dir).map_err(|e| StageError::write(&dir, e))
}

/// Write one part file, replacing any previous file of the same name.
pub fn write_part(layout: &Layout, part: &ChatPart<'_>) -> StageResult<PartSummary> {
    let path = layout.part(part.number);
    std::fs::write(&path, part.content()).map_err(|e| StageError::write(&path, e))?;
    Ok(PartSummary::from(part))
}
