use indicatif::{ProgressBar, ProgressStyle};
use std::io::{self, IsTerminal, Write};

/// Item-count progress for a stage (lines merged, parts written).
/// Draws a bar on stderr when it is a TTY, and stays silent otherwise.
pub struct StageProgress {
    bar: Option<ProgressBar>,
}

impl StageProgress {
    pub fn new(stage: &str, total: u64) -> Self {
        let bar = if io::stderr().is_terminal() {
            Some(styled_bar(stage, total))
        } else {
            None
        };
        Self { bar }
    }

    /// A reporter that never draws.
    #[cfg(test)]
    pub fn hidden() -> Self {
        Self { bar: None }
    }

    /// Print a message on stdout. The bar lives on stderr and is hidden while writing.
    pub fn println(&self, msg: &str) -> io::Result<()> {
        self.println_to(&mut io::stdout().lock(), msg)
    }

    fn println_to<W: Write>(&self, out: &mut W, msg: &str) -> io::Result<()> {
        match self.bar {
            Some(ref pb) => pb.suspend(|| writeln!(out, "{}", msg)),
            None => writeln!(out, "{}", msg),
        }
    }

    pub fn inc(&self) {
        if let Some(ref pb) = self.bar {
            pb.inc(1);
        }
    }

    /// Finish and clear the progress bar.
    pub fn finish(&self) {
        if let Some(ref pb) = self.bar {
            pb.finish_and_clear();
        }
    }
}

fn styled_bar(stage: &str, total: u64) -> ProgressBar {
    let pb = ProgressBar::new(total);
    pb.set_style(
        ProgressStyle::default_bar()
            .template("[chatfold] {msg} {pos}/{len} [{bar:30}] {elapsed}")
            .unwrap_or_else(|_| ProgressStyle::default_bar())
            .progress_chars("=> "),
    );
    pb.set_message(stage.to_string());
    pb
}
