use std::path::PathBuf;

use crate::layout::Layout;
use crate::output::format::{detect_output_mode, OutputMode};

pub struct RunContext {
    pub output_mode: OutputMode,
    pub layout: Layout,
}

impl RunContext {
    /// Create context from CLI arguments
    pub fn from_args(dir: PathBuf, json: bool, no_color: bool) -> Self {
        if no_color {
            colored::control::set_override(false);
        }

        RunContext {
            output_mode: detect_output_mode(json),
            layout: Layout::new(dir),
        }
    }
}
