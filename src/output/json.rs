use std::path::Path;

use serde::Serialize;

use crate::merge::MergeReport;
use crate::split::PartSummary;

/// Serialize any serializable value to pretty JSON string.
pub fn to_json<T: Serialize>(value: &T) -> String {
    serde_json::to_string_pretty(value).unwrap_or_else(|_| "{}".to_string())
}

#[derive(Debug, Serialize)]
pub struct MergeJson<'a> {
    pub output: String,
    #[serde(flatten)]
    pub report: &'a MergeReport,
}

#[derive(Debug, Serialize)]
pub struct SplitJson<'a> {
    pub output_dir: String,
    pub parts: &'a [PartSummary],
}

#[derive(Debug, Serialize)]
pub struct RunJson<'a> {
    pub merge: MergeJson<'a>,
    /// `None` when the split stage failed after a successful merge.
    pub split: Option<SplitJson<'a>>,
}

pub fn merge_json<'a>(report: &'a MergeReport, output: &Path) -> MergeJson<'a> {
    MergeJson {
        output: output.display().to_string(),
        report,
    }
}

pub fn split_json<'a>(parts: &'a [PartSummary], output_dir: &Path) -> SplitJson<'a> {
    SplitJson {
        output_dir: output_dir.display().to_string(),
        parts,
    }
}
