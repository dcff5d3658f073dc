use anyhow::Result;

use crate::chat::split_lines;
use crate::cli::context::RunContext;
use crate::error::read_source;
use crate::layout::Layout;
use crate::merge::source::DirTranscripts;
use crate::merge::{merge_lines, write_output, MergeReport};
use crate::output::format::OutputMode;
use crate::output::json::{merge_json, to_json};
use crate::output::progress::StageProgress;
use crate::output::table::format_merge_summary;

/// Run the merge command
pub fn run(ctx: &RunContext) -> Result<()> {
    let report = execute(&ctx.layout)?;

    match ctx.output_mode {
        OutputMode::Json => println!("{}", to_json(&merge_json(&report, &ctx.layout.merged()))),
        OutputMode::Tty => println!("{}", format_merge_summary(&report, &ctx.layout.merged())),
    }

    Ok(())
}

/// Read `_chat.txt`, splice in transcripts and write `chat_2.txt`.
///
/// Nothing is written when the source can't be read.
pub fn execute(layout: &Layout) -> Result<MergeReport> {
    let source_path = layout.source();
    let content = read_source(&source_path)?;
    let lines = split_lines(&content);
    log::debug!("read {} lines from {}", lines.len(), source_path.display());

    let transcripts = DirTranscripts::new(layout.transcripts_dir());
    let progress = StageProgress::new("merge", lines.len() as u64);
    let (merged, report) = merge_lines(&lines, &transcripts, || progress.inc())?;
    progress.finish();

    write_output(&layout.merged(), &merged)?;

    log::debug!(
        "{} attachments, {} expanded, {} without transcript",
        report.attachments,
        report.expanded,
        report.missing_transcripts
    );
    Ok(report)
}
