use std::path::Path;

use chrono::NaiveDateTime;
use colored::Colorize;

use crate::merge::MergeReport;
use crate::output::format::format_number;
use crate::split::PartSummary;

/// Format the merge summary for TTY display.
pub fn format_merge_summary(report: &MergeReport, output: &Path) -> String {
    let mut lines = vec![format!(
        "{} {} ({} lines from {} read)",
        "Wrote".green().bold(),
        output.display(),
        format_number(report.lines_written),
        format_number(report.lines_read)
    )];

    if report.attachments > 0 {
        lines.push(format!(
            "  {} {} of {} voice notes transcribed",
            "Attachments:".dimmed(),
            format_number(report.expanded),
            format_number(report.attachments)
        ));
        if report.missing_transcripts > 0 {
            lines.push(format!(
                "  {} {} kept as-is (no transcript)",
                "Missing:".dimmed(),
                format_number(report.missing_transcripts)
            ));
        }
        if report.blank_transcripts > 0 {
            lines.push(format!(
                "  {} {} removed (transcript was blank)",
                "Blank:".yellow(),
                format_number(report.blank_transcripts)
            ));
        }
    }

    lines.join("\n")
}

/// Format the completion notice for one written part.
pub fn format_part_row(part: &PartSummary) -> String {
    let range = match (part.first_timestamp, part.last_timestamp) {
        (Some(first), Some(last)) => format!("  {}", format_range(first, last)).dimmed().to_string(),
        _ => String::new(),
    };

    format!(
        "Created {} with {} words{}",
        part.file.bold(),
        part.words,
        range
    )
}

fn format_range(first: NaiveDateTime, last: NaiveDateTime) -> String {
    let fmt = "%Y-%m-%d %H:%M";
    if first == last {
        first.format(fmt).to_string()
    } else {
        format!("{} to {}", first.format(fmt), last.format(fmt))
    }
}
