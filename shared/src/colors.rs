/// Parse a `#RRGGBB` color. Returns (r, g, b).
pub fn parse_hex(hex: &str) -> Option<(u8, u8, u8)> {
    let digits = hex.strip_prefix('#')?;
    if digits.len() != 6 || !digits.is_ascii() {
        return None;
    }
    let channel = |i: usize| u8::from_str_radix(&digits[i..i + 2], 16).ok();
    Some((channel(0)?, channel(2)?, channel(4)?))
}

/// Format RGBA as a CSS color string.
pub fn rgba_css(r: u8, g: u8, b: u8, a: f64) -> String {
    format!("rgba({r},{g},{b},{a})")
}

/// Same color as `hex` at the given alpha. Unparseable input falls back to
/// transparent.
pub fn translucent(hex: &str, alpha: f64) -> String {
    match parse_hex(hex) {
        Some((r, g, b)) => rgba_css(r, g, b, alpha.clamp(0.0, 1.0)),
        None => "rgba(0,0,0,0)".to_owned(),
    }
}

#[cfg(test)]
mod tests {
    use super::{parse_hex, rgba_css, translucent};

    #[test]
    fn parses_upper_and_lower_case() {
        assert_eq!(parse_hex("#1f77b4"), Some((31, 119, 180)));
        assert_eq!(parse_hex("#FF9800"), Some((255, 152, 0)));
    }

    #[test]
    fn rejects_malformed_hex() {
        assert_eq!(parse_hex("1f77b4"), None);
        assert_eq!(parse_hex("#1f77b"), None);
        assert_eq!(parse_hex("#zz77b4"), None);
        assert_eq!(parse_hex("#排名排"), None);
    }

    #[test]
    fn formats_rgba() {
        assert_eq!(rgba_css(31, 119, 180, 0.06), "rgba(31,119,180,0.06)");
    }

    #[test]
    fn translucent_chart_fills() {
        assert_eq!(translucent("#ff7f0e", 0.06), "rgba(255,127,14,0.06)");
        assert_eq!(translucent("#2ca02c", 0.06), "rgba(44,160,44,0.06)");
        assert_eq!(translucent("nope", 0.5), "rgba(0,0,0,0)");
    }
}
