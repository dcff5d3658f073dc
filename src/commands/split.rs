use anyhow::Result;

use crate::cli::context::RunContext;
use crate::layout::Layout;
use crate::output::format::OutputMode;
use crate::output::json::{split_json, to_json};
use crate::output::progress::StageProgress;
use crate::output::table::format_part_row;
use crate::split::{load, prepare_output, split_content, write_part, PartSummary, MAX_WORDS_PER_PART};

/// Run the split command
pub fn run(ctx: &RunContext) -> Result<()> {
    let parts = execute(&ctx.layout, ctx.output_mode)?;

    if ctx.output_mode == OutputMode::Json {
        println!("{}", to_json(&split_json(&parts, &ctx.layout.parts_dir())));
    }

    Ok(())
}

/// Partition `chat_2.txt` into `chats_divided/chat_partNNN.txt`.
///
/// In TTY mode a notice is printed as each part is written. The output
/// directory is only created once the input is known to be non-empty.
pub fn execute(layout: &Layout, mode: OutputMode) -> Result<Vec<PartSummary>> {
    let content = load(&layout.merged())?;
    let parts = split_content(&content, MAX_WORDS_PER_PART);
    prepare_output(layout)?;

    let progress = StageProgress::new("split", parts.len() as u64);
    let mut summaries = Vec::with_capacity(parts.len());
    for part in &parts {
        let summary = write_part(layout, part)?;
        if mode == OutputMode::Tty {
            progress.println(&format_part_row(&summary))?;
        }
        summaries.push(summary);
        progress.inc();
    }
    progress.finish();

    Ok(summaries)
}
