use std::sync::OnceLock;

use chrono::{NaiveDate, NaiveDateTime};
use regex::Regex;

/// Matches the `[DD.MM.YY, HH:MM:SS]` prefix written by the chat exporter.
fn timestamp_re() -> &'static Regex {
    static TIMESTAMP_RE: OnceLock<Regex> = OnceLock::new();
    TIMESTAMP_RE.get_or_init(|| {
        Regex::new(r"^\[(\d{2})\.(\d{2})\.(\d{2}), (\d{2}):(\d{2}):(\d{2})\]")
            .expect("valid chat timestamp regex")
    })
}

/// Parse the leading timestamp of a chat line.
///
/// Two-digit years are taken as 20YY. Returns `None` when the line has no
/// timestamp prefix or when the fields don't form a real date and time
/// (e.g. `[31.02.24, 10:00:00]`).
pub fn parse_leading(line: &str) -> Option<NaiveDateTime> {
    let caps = timestamp_re().captures(line)?;
    let field = |i: usize| caps.get(i).and_then(|m| m.as_str().parse::<u32>().ok());

    let day = field(1)?;
    let month = field(2)?;
    let year = 2000 + field(3)? as i32;

    let parsed = NaiveDate::from_ymd_opt(year, month, day)
        .and_then(|date| date.and_hms_opt(field(4)?, field(5)?, field(6)?));

    if parsed.is_none() {
        log::trace!("ignoring invalid timestamp prefix in line: {}", line.trim_end());
    }
    parsed
}
