use std::path::{Path, PathBuf};

use thiserror::Error;

#[derive(Error, Debug)]
pub enum StageError {
    #[error("{} not found", path.display())]
    SourceMissing { path: PathBuf },

    #[error("{} is empty", path.display())]
    EmptySource { path: PathBuf },

    #[error("Failed to read {}: {source}", path.display())]
    Read {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("Failed to write {}: {source}", path.display())]
    Write {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },
}

pub type StageResult<T> = Result<T, StageError>;

impl StageError {
    pub fn write(path: &Path, source: std::io::Error) -> Self {
        StageError::Write {
            path: path.to_path_buf(),
            source,
        }
    }
}

/// Read a whole UTF-8 input file, mapping a missing file to `SourceMissing`.
pub fn read_source(path: &Path) -> StageResult<String> {
    std::fs::read_to_string(path).map_err(|e| match e.kind() {
        std::io::ErrorKind::NotFound => StageError::SourceMissing {
            path: path.to_path_buf(),
        },
        _ => StageError::Read {
            path: path.to_path_buf(),
            source: e,
        },
    })
}
