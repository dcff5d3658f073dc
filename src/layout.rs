//! Fixed file layout of a chat export working directory.

use std::path::PathBuf;

pub const SOURCE_FILE: &str = "_chat.txt";
pub const TRANSCRIPTS_DIR: &str = "transcriptions";
pub const MERGED_FILE: &str = "chat_2.txt";
pub const PARTS_DIR: &str = "chats_divided";

/// Paths used by the merge and split stages, all relative to one root.
#[derive(Debug, Clone)]
pub struct Layout {
    root: PathBuf,
}

impl Layout {
    pub fn new(root: impl Into<PathBuf>) -> Self {
        Layout { root: root.into() }
    }

    /// Raw chat export read by the merger.
    pub fn source(&self) -> PathBuf {
        self.root.join(SOURCE_FILE)
    }

    pub fn transcripts_dir(&self) -> PathBuf {
        self.root.join(TRANSCRIPTS_DIR)
    }

    /// Merger output, partitioner input.
    pub fn merged(&self) -> PathBuf {
        self.root.join(MERGED_FILE)
    }

    pub fn parts_dir(&self) -> PathBuf {
        self.root.join(PARTS_DIR)
    }

    /// `chats_divided/chat_partNNN.txt` for a 1-based part number.
    pub fn part(&self, number: usize) -> PathBuf {
        self.parts_dir().join(part_file_name(number))
    }
}

pub fn part_file_name(number: usize) -> String {
    format!("chat_part{:03}.txt", number)
}
