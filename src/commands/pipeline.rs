use anyhow::Result;

use crate::cli::context::RunContext;
use crate::output::format::OutputMode;
use crate::output::json::{merge_json, split_json, to_json, RunJson};
use crate::output::table::format_merge_summary;

use super::{merge, split};

/// Merge transcripts, then split the merged file from disk.
///
/// The split stage is not started when the merge fails. In JSON mode the
/// merge result is still printed when the split fails, with `split: null`.
pub fn run(ctx: &RunContext) -> Result<()> {
    let layout = &ctx.layout;
    let report = merge::execute(layout)?;

    if ctx.output_mode == OutputMode::Tty {
        println!("{}", format_merge_summary(&report, &layout.merged()));
    }

    let split_result = split::execute(layout, ctx.output_mode);

    if ctx.output_mode == OutputMode::Json {
        let out = RunJson {
            merge: merge_json(&report, &layout.merged()),
            split: split_result
                .as_ref()
                .ok()
                .map(|parts| split_json(parts, &layout.parts_dir())),
        };
        println!("{}", to_json(&out));
    }

    split_result?;
    Ok(())
}
