/// Format a number with a fixed number of decimals, e.g. `1.00`
pub fn format_fixed(value: f64, places: usize) -> String {
    format!("{:.*}", places, value)
}

/// Split a `NAME=GRAMS` argument at the last `=`.
///
/// Compound names may contain commas and spaces but never `=`.
pub fn split_entry_arg(arg: &str) -> Option<(&str, &str)> {
    let (name, grams) = arg.rsplit_once('=')?;
    let name = name.trim();
    if name.is_empty() {
        return None;
    }
    Some((name, grams.trim()))
}

/// Parse `#rrggbb` into its channels
pub fn parse_hex_color(hex: &str) -> Option<(u8, u8, u8)> {
    let digits = hex.strip_prefix('#')?;
    if digits.len() != 6 || !digits.is_ascii() {
        return None;
    }
    let channel = |i: usize| u8::from_str_radix(&digits[i..i + 2], 16).ok();
    Some((channel(0)?, channel(2)?, channel(4)?))
}

/// Length of a bar for `value` when `max` fills `width` cells
pub fn bar_length(value: f64, max: f64, width: usize) -> usize {
    if !(max > 0.0) || !(value > 0.0) {
        return 0;
    }
    let cells = (value / max * width as f64).round() as usize;
    cells.clamp(1, width)
}

pub fn truncate_string(s: &str, max_len: usize) -> String {
    if s.chars().count() <= max_len {
        s.to_string()
    } else {
        let kept: String = s.chars().take(max_len.saturating_sub(3)).collect();
        format!("{}...", kept)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_format_fixed() {
        assert_eq!(format_fixed(1.0, 2), "1.00");
        assert_eq!(format_fixed(0.091633, 4), "0.0916");
    }

    #[test]
    fn test_split_entry_arg_uses_last_equals() {
        assert_eq!(
            split_entry_arg("2,4-Diaminophenoxyethanol HCl=3.5"),
            Some(("2,4-Diaminophenoxyethanol HCl", "3.5"))
        );
        assert_eq!(split_entry_arg(" Resorcinol = 10 "), Some(("Resorcinol", "10")));
        assert_eq!(split_entry_arg("Resorcinol="), Some(("Resorcinol", "")));
        assert_eq!(split_entry_arg("Resorcinol"), None);
        assert_eq!(split_entry_arg("=10"), None);
    }

    #[test]
    fn test_parse_hex_color() {
        assert_eq!(parse_hex_color("#4b3621"), Some((0x4b, 0x36, 0x21)));
        assert_eq!(parse_hex_color("#C8AD7F"), Some((0xc8, 0xad, 0x7f)));
        assert_eq!(parse_hex_color("4b3621"), None);
        assert_eq!(parse_hex_color("#4b36"), None);
        assert_eq!(parse_hex_color("#zz3621"), None);
    }

    #[test]
    fn test_bar_length() {
        assert_eq!(bar_length(1.0, 1.0, 40), 40);
        assert_eq!(bar_length(0.5, 1.0, 40), 20);
        assert_eq!(bar_length(0.0001, 1.0, 40), 1);
        assert_eq!(bar_length(0.0, 1.0, 40), 0);
        assert_eq!(bar_length(0.0, 0.0, 40), 0);
    }

    #[test]
    fn test_truncate_string() {
        assert_eq!(truncate_string("Resorcinol", 20), "Resorcinol");
        assert_eq!(truncate_string("N,N-BIS(2-HYDROXYETHYL)", 10), "N,N-BIS...");
    }
}
