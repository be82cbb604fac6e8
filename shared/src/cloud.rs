use serde::Serialize;

use crate::domains::{Keyword, RankedDomain};

/// Height of the keyword cloud container in CSS pixels.
pub const KEYWORD_CLOUD_HEIGHT: f64 = 300.0;
/// Width used when the keyword container has not been laid out yet.
pub const KEYWORD_CLOUD_FALLBACK_WIDTH: f64 = 420.0;

/// WordCloud2 layout options. Field names serialize to the library's option
/// names; callbacks (`color`, `hover`, `click`) and `list` are attached by
/// the client.
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct CloudOptions {
    pub grid_size: u32,
    pub weight_factor: f64,
    pub font_family: &'static str,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub font_weight: Option<&'static str>,
    pub rotate_ratio: f64,
    pub rotation_steps: u32,
    pub background_color: &'static str,
    pub draw_out_of_bound: bool,
    pub min_size: u32,
}

impl CloudOptions {
    /// Dense header cloud drawn straight onto a DPR-sized canvas, so every
    /// pixel quantity scales with `dpr`.
    pub fn header(dpr: f64) -> Self {
        Self {
            grid_size: round_px(6.0 * dpr),
            weight_factor: 1.2 * dpr,
            font_family: "Arial, Microsoft YaHei, sans-serif",
            font_weight: Some("600"),
            rotate_ratio: 0.3,
            rotation_steps: 2,
            background_color: "transparent",
            draw_out_of_bound: false,
            min_size: round_px(5.0 * dpr),
        }
    }

    /// Keyword cloud inside the interactive area; grid follows the
    /// container width.
    pub fn keywords(container_width: f64) -> Self {
        Self {
            grid_size: round_px(container_width / 25.0).max(8),
            weight_factor: 0.5,
            font_family: "Impact",
            font_weight: None,
            rotate_ratio: 0.3,
            rotation_steps: 2,
            background_color: "transparent",
            draw_out_of_bound: false,
            min_size: 0,
        }
    }
}

/// Keyword container width, falling back when layout reports nothing.
pub fn keyword_cloud_width(client_width: i32) -> f64 {
    if client_width > 0 {
        f64::from(client_width)
    } else {
        KEYWORD_CLOUD_FALLBACK_WIDTH
    }
}

/// `[label, weight]` entries in the shape WordCloud2 expects for `list`.
pub fn domain_list(domains: &[RankedDomain]) -> Vec<(String, f64)> {
    domains
        .iter()
        .map(|d| (d.text.to_owned(), f64::from(d.size)))
        .collect()
}

pub fn keyword_list(keywords: &[Keyword]) -> Vec<(String, f64)> {
    keywords
        .iter()
        .map(|k| (k.text.to_owned(), f64::from(k.size)))
        .collect()
}

fn round_px(value: f64) -> u32 {
    if value.is_finite() && value > 0.0 {
        value.round() as u32
    } else {
        0
    }
}

#[cfg(test)]
mod tests {
    use super::{CloudOptions, domain_list, keyword_cloud_width, keyword_list};
    use crate::domains::{HEADER_DOMAINS, KEYWORDS};

    #[test]
    fn header_options_scale_with_dpr() {
        let one = CloudOptions::header(1.0);
        assert_eq!(one.grid_size, 6);
        assert_eq!(one.min_size, 5);
        assert!((one.weight_factor - 1.2).abs() < 1e-12);

        let two = CloudOptions::header(2.0);
        assert_eq!(two.grid_size, 12);
        assert_eq!(two.min_size, 10);
        assert!((two.weight_factor - 2.4).abs() < 1e-12);

        let odd = CloudOptions::header(1.25);
        assert_eq!(odd.grid_size, 8); // 7.5 rounds up
        assert_eq!(odd.min_size, 6); // 6.25
    }

    #[test]
    fn keyword_grid_has_floor() {
        assert_eq!(CloudOptions::keywords(100.0).grid_size, 8);
        assert_eq!(CloudOptions::keywords(420.0).grid_size, 17); // 16.8
        assert_eq!(CloudOptions::keywords(1000.0).grid_size, 40);
    }

    #[test]
    fn keyword_width_falls_back() {
        assert_eq!(keyword_cloud_width(0), 420.0);
        assert_eq!(keyword_cloud_width(-3), 420.0);
        assert_eq!(keyword_cloud_width(640), 640.0);
    }

    #[test]
    fn serializes_with_library_option_names() {
        let json = serde_json::to_value(CloudOptions::header(2.0)).unwrap();
        assert_eq!(json["gridSize"], 12);
        assert_eq!(json["fontWeight"], "600");
        assert_eq!(json["drawOutOfBound"], false);
        assert_eq!(json["backgroundColor"], "transparent");
        assert_eq!(json["rotationSteps"], 2);

        let json = serde_json::to_value(CloudOptions::keywords(420.0)).unwrap();
        assert!(json.get("fontWeight").is_none());
        assert_eq!(json["fontFamily"], "Impact");
    }

    #[test]
    fn lists_keep_table_order() {
        let list = domain_list(HEADER_DOMAINS);
        assert_eq!(list.len(), HEADER_DOMAINS.len());
        assert_eq!(list[0], ("microsoft.com".to_owned(), 50.0));

        let list = keyword_list(KEYWORDS);
        assert_eq!(list[0], ("m.baidu.com".to_owned(), 60.0));
        assert_eq!(list.last().map(|(t, _)| t.as_str()), Some("Spearman"));
    }
}
