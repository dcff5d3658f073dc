#[cfg(test)]
use std::collections::HashMap;
use std::io::ErrorKind;
use std::path::PathBuf;

use crate::chat::attachment::AttachmentRef;
use crate::error::{StageError, StageResult};

/// Looks up the transcript text for an audio attachment.
pub trait TranscriptSource {
    /// Returns `Ok(None)` when no transcript exists for the attachment.
    fn transcript(&self, attachment: &AttachmentRef<'_>) -> StageResult<Option<String>>;
}

/// Transcripts stored as `<name>.txt` files in one directory.
#[derive(Debug, Clone)]
pub struct DirTranscripts {
    dir: PathBuf,
}

impl DirTranscripts {
    pub fn new(dir: impl Into<PathBuf>) -> Self {
        DirTranscripts { dir: dir.into() }
    }
}

impl TranscriptSource for DirTranscripts {
    fn transcript(&self, attachment: &AttachmentRef<'_>) -> StageResult<Option<String>> {
        let path = attachment.transcript_path(&self.dir);
        match std::fs::read_to_string(&path) {
            Ok(content) => {
                log::debug!("transcript found: {}", path.display());
                Ok(Some(content))
            }
            Err(e) if e.kind() == ErrorKind::NotFound => {
                log::debug!("no transcript at {}", path.display());
                Ok(None)
            }
            Err(e) => Err(StageError::Read { path, source: e }),
        }
    }
}

/// In-memory transcripts keyed by attachment file name (`*.opus`).
#[cfg(test)]
#[derive(Debug, Clone, Default)]
pub struct MapTranscripts {
    entries: HashMap<String, String>,
}

#[cfg(test)]
impl MapTranscripts {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with(mut self, attachment: &str, content: &str) -> Self {
        self.entries.insert(attachment.to_string(), content.to_string());
        self
    }
}

#[cfg(test)]
impl TranscriptSource for MapTranscripts {
    fn transcript(&self, attachment: &AttachmentRef<'_>) -> StageResult<Option<String>> {
        Ok(self.entries.get(attachment.filename).cloned())
    }
}
