/// Output mode determines how stage results are printed.
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum OutputMode {
    Tty,
    Json,
}

/// Detect the appropriate output mode.
pub fn detect_output_mode(json_flag: bool) -> OutputMode {
    if json_flag {
        return OutputMode::Json;
    }
    OutputMode::Tty
}

/// Format a count with thousands separators (e.g. `400,000`).
pub fn format_number(n: usize) -> String {
    let digits = n.to_string();
    let mut out = String::with_capacity(digits.len() + digits.len() / 3);
    for (i, c) in digits.chars().enumerate() {
        if i > 0 && (digits.len() - i) % 3 == 0 {
            out.push(',');
        }
        out.push(c);
    }
    out
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_json_flag_gives_json() {
        assert_eq!(detect_output_mode(true), OutputMode::Json);
    }

    #[test]
    fn test_no_json_flag_gives_tty() {
        assert_eq!(detect_output_mode(false), OutputMode::Tty);
    }

    #[test]
    fn test_format_number_groups_thousands() {
        assert_eq!(format_number(0), "0");
        assert_eq!(format_number(999), "999");
        assert_eq!(format_number(1_000), "1,000");
        assert_eq!(format_number(400_000), "400,000");
        assert_eq!(format_number(1_234_567), "1,234,567");
    }
}
