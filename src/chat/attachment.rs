use std::path::{Path, PathBuf};
use std::sync::OnceLock;

use regex::Regex;

/// Extension of voice-note attachments in the export.
pub const AUDIO_EXTENSION: &str = ".opus";

/// Extension of the transcript stored next to each voice note's name.
pub const TRANSCRIPT_EXTENSION: &str = ".txt";

const MARKER_PREFIX: &str = "<attached:";

fn marker_re() -> &'static Regex {
    static MARKER_RE: OnceLock<Regex> = OnceLock::new();
    MARKER_RE.get_or_init(|| {
        Regex::new(r"<attached: ([^>]*)>").expect("valid attachment marker regex")
    })
}

/// An audio attachment reference found in a chat line.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct AttachmentRef<'a> {
    /// File name exactly as written inside the marker.
    pub filename: &'a str,
    /// Text before the marker, trimmed. Carries the timestamp and sender.
    pub header: &'a str,
}

impl<'a> AttachmentRef<'a> {
    /// Look at the first `<attached: NAME>` marker in `line`.
    ///
    /// Only an audio marker counts; when the first marker is a photo or other
    /// file the line has no audio attachment, even if a later marker is audio.
    /// The header ends at the first `<attached:` in the line.
    pub fn find(line: &'a str) -> Option<Self> {
        let header_end = line.find(MARKER_PREFIX)?;
        let filename = marker_re().captures(line)?.get(1)?.as_str();
        if !filename.ends_with(AUDIO_EXTENSION) {
            return None;
        }

        Some(AttachmentRef {
            filename,
            header: line[..header_end].trim(),
        })
    }

    /// File name of the matching transcript: the audio extension swapped for `.txt`.
    ///
    /// Only the trailing extension is replaced; the rest of the name is kept verbatim.
    pub fn transcript_name(&self) -> String {
        let stem = self
            .filename
            .strip_suffix(AUDIO_EXTENSION)
            .unwrap_or(self.filename);
        format!("{stem}{TRANSCRIPT_EXTENSION}")
    }

    /// Location of the transcript inside `transcripts_dir`.
    pub fn transcript_path(&self, transcripts_dir: &Path) -> PathBuf {
        transcripts_dir.join(self.transcript_name())
    }
}
