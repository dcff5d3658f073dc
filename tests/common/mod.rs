#![allow(dead_code)]

use std::path::PathBuf;

use assert_cmd::Command;
use tempfile::TempDir;

pub const VOICE_NOTE: &str = "00000638-AUDIO-2024-06-26-12-04-46";
pub const VOICE_LINE: &str =
    "[23.08.24, 11:18:58] Alice: <attached: 00000638-AUDIO-2024-06-26-12-04-46.opus>\n";

/// A throwaway export directory that the binary runs against via `--dir`.
pub struct TestEnv {
    pub dir: TempDir,
}

impl TestEnv {
    pub fn new() -> Self {
        TestEnv {
            dir: TempDir::new().unwrap(),
        }
    }

    /// Create an environment whose `_chat.txt` holds `chat`.
    pub fn with_chat(chat: &str) -> Self {
        let env = Self::new();
        env.write("_chat.txt", chat);
        env
    }

    pub fn path(&self, rel: &str) -> PathBuf {
        self.dir.path().join(rel)
    }

    pub fn write(&self, rel: &str, content: &str) {
        let path = self.path(rel);
        if let Some(parent) = path.parent() {
            std::fs::create_dir_all(parent).unwrap();
        }
        std::fs::write(path, content).unwrap();
    }

    /// Store a transcript for the attachment `name` (without extension).
    pub fn transcript(&self, name: &str, content: &str) {
        self.write(&format!("transcriptions/{name}.txt"), content);
    }

    pub fn read(&self, rel: &str) -> String {
        std::fs::read_to_string(self.path(rel)).unwrap()
    }

    pub fn exists(&self, rel: &str) -> bool {
        self.path(rel).exists()
    }

    /// Sorted file names in `chats_divided/`.
    pub fn part_files(&self) -> Vec<String> {
        let dir = self.path("chats_divided");
        if !dir.exists() {
            return Vec::new();
        }
        let mut names: Vec<String> = std::fs::read_dir(dir)
            .unwrap()
            .map(|e| e.unwrap().file_name().to_string_lossy().into_owned())
            .collect();
        names.sort();
        names
    }

    /// Concatenation of every part, in part order.
    pub fn joined_parts(&self) -> String {
        self.part_files()
            .iter()
            .map(|name| self.read(&format!("chats_divided/{name}")))
            .collect()
    }

    /// Get a Command configured to run chatfold in this environment.
    pub fn cmd(&self) -> Command {
        let mut cmd = assert_cmd::cargo_bin_cmd!("chatfold");
        cmd.arg("--dir").arg(self.dir.path());
        cmd.env("NO_COLOR", "1");
        cmd.env_remove("CHATFOLD_LOG");
        cmd
    }

    /// Get a Command with --json flag.
    pub fn cmd_json(&self) -> Command {
        let mut cmd = self.cmd();
        cmd.arg("--json");
        cmd
    }
}

/// A newline-terminated line of `n` words.
pub fn words_line(n: usize) -> String {
    let mut line = "word ".repeat(n);
    line.push('\n');
    line
}
