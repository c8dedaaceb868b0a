use super::model::SizeValue;

// ---------------------------------------------------------------------------
// Human-readable byte size codec
// ---------------------------------------------------------------------------

const UNITS: [&str; 5] = ["B", "KB", "MB", "GB", "TB"];

/// Resolve an ingested size value to bytes. Numeric values pass through
/// unchanged; strings go through [`parse_str`].
pub fn parse(value: &SizeValue) -> u64 {
    match value {
        SizeValue::Bytes(n) => *n,
        SizeValue::Text(s) => parse_str(s),
    }
}

/// Parse a human-readable size string (`<number>[<unit>]`, unit one of
/// B/KB/MB/GB/TB, case-insensitive, defaults to bytes) into a byte count.
///
/// Unrecognized input fails softly to 0; upstream reports are not trusted to
/// be well-formed and a bad size must not take down the pipeline.
pub fn parse_str(input: &str) -> u64 {
    let s = input.trim();

    // Split the numeric prefix from the unit suffix.
    let split = s
        .char_indices()
        .find(|(_, c)| !c.is_ascii_digit() && *c != '.')
        .map(|(i, _)| i)
        .unwrap_or(s.len());
    let (number, unit) = s.split_at(split);

    let value = match number.parse::<f64>() {
        Ok(v) if v.is_finite() => v,
        _ => return 0,
    };

    let exponent = match unit.trim().to_ascii_uppercase().as_str() {
        "" | "B" => 0,
        "KB" => 1,
        "MB" => 2,
        "GB" => 3,
        "TB" => 4,
        _ => return 0,
    };

    (value * 1024f64.powi(exponent)).round() as u64
}

/// Format a byte count as a human-readable string with one decimal place,
/// e.g. `1536` → `"1.5 KB"`. Zero is special-cased to `"0 B"`.
///
/// Lossy round-trip: `format(parse_str(s))` need not reproduce `s`, and
/// `parse_str(format(b))` need not reproduce `b`.
pub fn format(bytes: u64) -> String {
    if bytes == 0 {
        return "0 B".to_string();
    }
    // floor(log1024) by repeated division; a float log drifts at exact
    // powers of 1024.
    let mut exponent = 0usize;
    let mut shifted = bytes;
    while shifted >= 1024 && exponent < UNITS.len() - 1 {
        shifted /= 1024;
        exponent += 1;
    }
    let scaled = bytes as f64 / 1024f64.powi(exponent as i32);
    format!("{scaled:.1} {}", UNITS[exponent])
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn parses_fractional_gigabytes() {
        assert_eq!(parse_str("1.5 GB"), 1_610_612_736);
    }

    #[test]
    fn parses_without_separating_space() {
        assert_eq!(parse_str("2TB"), 2 * 1024u64.pow(4));
        assert_eq!(parse_str("512kb"), 512 * 1024);
    }

    #[test]
    fn bare_number_is_bytes() {
        assert_eq!(parse_str("2048"), 2048);
        assert_eq!(parse_str("  100 "), 100);
    }

    #[test]
    fn unrecognized_input_is_zero() {
        assert_eq!(parse_str("bogus"), 0);
        assert_eq!(parse_str(""), 0);
        assert_eq!(parse_str("1.5 PB"), 0);
        assert_eq!(parse_str("-5 GB"), 0);
        assert_eq!(parse_str("1..5 GB"), 0);
    }

    #[test]
    fn numeric_values_pass_through() {
        assert_eq!(parse(&SizeValue::Bytes(12345)), 12345);
        assert_eq!(parse(&SizeValue::Text("1 KB".into())), 1024);
    }

    #[test]
    fn formats_zero_and_scaled_values() {
        assert_eq!(format(0), "0 B");
        assert_eq!(format(1536), "1.5 KB");
        assert_eq!(format(1023), "1023.0 B");
        assert_eq!(format(1024), "1.0 KB");
        assert_eq!(format(1_610_612_736), "1.5 GB");
    }

    #[test]
    fn format_caps_at_terabytes() {
        let huge = 3000 * 1024u64.pow(4);
        assert_eq!(format(huge), "3000.0 TB");
    }
}
