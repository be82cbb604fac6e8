use crate::error::ConfigError;
use crate::hash::{label_hash, palette_index};

/// Header cloud palette: purples, blues, cyans, oranges, pinks.
pub const HEADER_PALETTE: &[&str] = &[
    "#7B5FBF", "#9B7FD5", "#6A4C9C", // purples
    "#4A90E2", "#5DA5E8", "#7BB8F0", // blues
    "#4ECDC4", "#5DDAD2", "#6FE8E0", // cyan/greens
    "#FFB74D", "#FFA726", "#FF9800", // oranges
    "#E57373", "#EF9A9A", "#F48FB1", // pinks/reds
    "#AB47BC", "#BA68C8", "#CE93D8", // more purples
];

/// Keyword cloud palette (chart category colors).
pub const KEYWORD_PALETTE: &[&str] = &["#1f77b4", "#ff7f0e", "#2ca02c", "#d62728", "#9467bd"];

/// Stable color for `label` out of `palette`.
pub fn color_of<'a>(label: &str, palette: &[&'a str]) -> Result<&'a str, ConfigError> {
    let idx = palette_index(label_hash(label), palette.len()).ok_or_else(|| {
        ConfigError::InvalidConfiguration("color palette must not be empty".into())
    })?;
    Ok(palette[idx])
}

/// A palette that is known to be non-empty.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Palette {
    colors: Vec<String>,
}

impl Palette {
    pub fn new<I, S>(colors: I) -> Result<Self, ConfigError>
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        let colors: Vec<String> = colors.into_iter().map(Into::into).collect();
        if colors.is_empty() {
            return Err(ConfigError::InvalidConfiguration(
                "color palette must not be empty".into(),
            ));
        }
        Ok(Self { colors })
    }

    pub fn header() -> Self {
        Self {
            colors: HEADER_PALETTE.iter().map(|c| (*c).to_owned()).collect(),
        }
    }

    pub fn keywords() -> Self {
        Self {
            colors: KEYWORD_PALETTE.iter().map(|c| (*c).to_owned()).collect(),
        }
    }

    pub fn len(&self) -> usize {
        self.colors.len()
    }

    pub fn is_empty(&self) -> bool {
        self.colors.is_empty()
    }

    pub fn color_for(&self, label: &str) -> &str {
        // Non-empty by construction.
        let idx = label_hash(label).unsigned_abs() as usize % self.colors.len();
        &self.colors[idx]
    }
}

#[cfg(test)]
mod tests {
    use super::{HEADER_PALETTE, KEYWORD_PALETTE, Palette, color_of};
    use crate::error::ConfigError;

    #[test]
    fn color_is_stable_across_calls() {
        let palette = ["#7B5FBF", "#4A90E2"];
        let first = color_of("microsoft.com", &palette).unwrap();
        for _ in 0..10 {
            assert_eq!(color_of("microsoft.com", &palette).unwrap(), first);
        }
        assert_eq!(first, "#4A90E2");
    }

    #[test]
    fn empty_label_takes_first_color() {
        assert_eq!(color_of("", HEADER_PALETTE).unwrap(), "#7B5FBF");
        assert_eq!(color_of("", KEYWORD_PALETTE).unwrap(), "#1f77b4");
    }

    #[test]
    fn every_label_maps_inside_the_palette() {
        for label in ["", "a", "qq.com", "dns.weixin.qq.com.cn", "排名", "DGA"] {
            let color = color_of(label, KEYWORD_PALETTE).unwrap();
            assert!(KEYWORD_PALETTE.contains(&color));
        }
    }

    #[test]
    fn empty_palette_is_invalid_configuration() {
        let err = color_of("microsoft.com", &[]).unwrap_err();
        assert!(matches!(err, ConfigError::InvalidConfiguration(_)));
    }

    #[test]
    fn palette_new_rejects_empty() {
        let err = Palette::new(Vec::<String>::new()).unwrap_err();
        assert!(matches!(err, ConfigError::InvalidConfiguration(_)));
    }

    #[test]
    fn palette_agrees_with_color_of() {
        let palette = Palette::header();
        assert_eq!(palette.len(), HEADER_PALETTE.len());
        for label in ["microsoft.com", "baidu.com", "tsinghua.edu.cn"] {
            assert_eq!(palette.color_for(label), color_of(label, HEADER_PALETTE).unwrap());
        }
        assert_eq!(palette.color_for("microsoft.com"), "#FF9800");
    }

    #[test]
    fn custom_palette_single_color() {
        let palette = Palette::new(["#000000"]).unwrap();
        assert!(!palette.is_empty());
        assert_eq!(palette.color_for("anything"), "#000000");
    }
}
