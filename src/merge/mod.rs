//! Replaces voice-note attachment lines with their transcripts.

pub mod source;

use std::path::Path;

use serde::Serialize;

use crate::chat::attachment::AttachmentRef;
use crate::error::{StageError, StageResult};
use source::TranscriptSource;

/// What a single source line becomes in the merged output.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum MergedLine<'a> {
    /// Emitted verbatim, terminator included.
    Unchanged(&'a str),
    /// One newline-terminated line per non-empty transcript line.
    /// Empty when the transcript had no text at all.
    Expanded(Vec<String>),
}

impl MergedLine<'_> {
    pub fn write_to(&self, out: &mut String) {
        match self {
            MergedLine::Unchanged(line) => out.push_str(line),
            MergedLine::Expanded(lines) => lines.iter().for_each(|l| out.push_str(l)),
        }
    }

    pub fn output_lines(&self) -> usize {
        match self {
            MergedLine::Unchanged(_) => 1,
            MergedLine::Expanded(lines) => lines.len(),
        }
    }
}

/// Counters gathered while merging one chat export.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
pub struct MergeReport {
    pub lines_read: usize,
    pub lines_written: usize,
    pub attachments: usize,
    pub expanded: usize,
    pub missing_transcripts: usize,
    /// Transcripts that existed but held only whitespace; their lines were dropped.
    pub blank_transcripts: usize,
}

/// Line-by-line merger over a transcript source.
pub struct Merger<'s, S: TranscriptSource + ?Sized> {
    source: &'s S,
    report: MergeReport,
}

impl<'s, S: TranscriptSource + ?Sized> Merger<'s, S> {
    pub fn new(source: &'s S) -> Self {
        Merger {
            source,
            report: MergeReport::default(),
        }
    }

    /// Classify one raw line and produce its replacement.
    pub fn merge_line<'l>(&mut self, line: &'l str) -> StageResult<MergedLine<'l>> {
        self.report.lines_read += 1;

        let merged = match AttachmentRef::find(line) {
            None => MergedLine::Unchanged(line),
            Some(attachment) => {
                self.report.attachments += 1;
                match self.source.transcript(&attachment)? {
                    None => {
                        self.report.missing_transcripts += 1;
                        MergedLine::Unchanged(line)
                    }
                    Some(text) => {
                        let lines = restamp(attachment.header, &text);
                        if lines.is_empty() {
                            log::warn!(
                                "transcript for {} is blank; dropping the attachment line",
                                attachment.filename
                            );
                            self.report.blank_transcripts += 1;
                        } else {
                            self.report.expanded += 1;
                        }
                        MergedLine::Expanded(lines)
                    }
                }
            }
        };

        self.report.lines_written += merged.output_lines();
        Ok(merged)
    }

    pub fn finish(self) -> MergeReport {
        self.report
    }
}

/// Prefix every non-empty transcript line with the original line's header.
fn restamp(header: &str, transcript: &str) -> Vec<String> {
    transcript
        .lines()
        .map(str::trim)
        .filter(|l| !l.is_empty())
        .map(|l| format!("{header} {l}\n"))
        .collect()
}

/// Merge chat lines in order, calling `on_line` after each one.
pub fn merge_lines<S, F>(lines: &[&str], source: &S, mut on_line: F) -> StageResult<(String, MergeReport)>
where
    S: TranscriptSource + ?Sized,
    F: FnMut(),
{
    let mut merger = Merger::new(source);
    let mut out = String::with_capacity(lines.iter().map(|l| l.len()).sum());
    for line in lines {
        merger.merge_line(line)?.write_to(&mut out);
        on_line();
    }
    Ok((out, merger.finish()))
}

/// Merge a whole chat export held in memory.
#[cfg(test)]
pub fn merge_content<S: TranscriptSource + ?Sized>(
    content: &str,
    source: &S,
) -> StageResult<(String, MergeReport)> {
    merge_lines(&crate::chat::split_lines(content), source, || {})
}

/// Write the merged output, replacing any previous file.
pub fn write_output(path: &Path, merged: &str) -> StageResult<()> {
    std::fs::write(path, merged).map_err(|e| StageError::write(path, e))
}
