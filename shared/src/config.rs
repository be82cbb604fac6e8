use crate::toggle::PanelView;

pub const DEFAULT_LOG_FILTER: &str = "info";
/// Window resize events are coalesced for this long before re-measuring.
pub const RESIZE_DEBOUNCE_MS: u32 = 150;

/// Page settings, read from `key=value` pairs (the page URL query string).
#[derive(Debug, Clone, PartialEq)]
pub struct ViewerConfig {
    /// Overrides the display's device pixel ratio.
    pub dpr_override: Option<f64>,
    pub initial_view: PanelView,
    /// `tracing` filter directive.
    pub log_filter: String,
}

impl Default for ViewerConfig {
    fn default() -> Self {
        Self {
            dpr_override: None,
            initial_view: PanelView::Figure,
            log_filter: DEFAULT_LOG_FILTER.to_owned(),
        }
    }
}

impl ViewerConfig {
    /// Later pairs win; unknown keys and unparseable values are ignored.
    pub fn from_pairs<I, K, V>(pairs: I) -> Self
    where
        I: IntoIterator<Item = (K, V)>,
        K: AsRef<str>,
        V: AsRef<str>,
    {
        let mut config = Self::default();
        for (key, value) in pairs {
            let value = value.as_ref().trim();
            match key.as_ref() {
                "dpr" => {
                    if let Some(dpr) = value
                        .parse::<f64>()
                        .ok()
                        .filter(|v| v.is_finite() && *v > 0.0)
                    {
                        config.dpr_override = Some(dpr);
                    }
                }
                "view" => {
                    if let Some(view) = PanelView::parse(value) {
                        config.initial_view = view;
                    }
                }
                "log" => {
                    if !value.is_empty() {
                        config.log_filter = value.to_owned();
                    }
                }
                _ => {}
            }
        }
        config
    }
}

#[cfg(test)]
mod tests {
    use super::ViewerConfig;
    use crate::toggle::PanelView;

    #[test]
    fn defaults_without_pairs() {
        let config = ViewerConfig::from_pairs(Vec::<(String, String)>::new());
        assert_eq!(config, ViewerConfig::default());
        assert_eq!(config.log_filter, "info");
    }

    #[test]
    fn reads_known_keys() {
        let config =
            ViewerConfig::from_pairs([("dpr", "2"), ("view", "charts"), ("log", "debug")]);
        assert_eq!(config.dpr_override, Some(2.0));
        assert_eq!(config.initial_view, PanelView::Charts);
        assert_eq!(config.log_filter, "debug");
    }

    #[test]
    fn ignores_invalid_values() {
        let config = ViewerConfig::from_pairs([
            ("dpr", "0"),
            ("dpr", "-1"),
            ("dpr", "abc"),
            ("view", "table"),
            ("log", "  "),
            ("theme", "dark"),
        ]);
        assert_eq!(config, ViewerConfig::default());
    }

    #[test]
    fn later_pairs_override_earlier() {
        let config = ViewerConfig::from_pairs([("dpr", "1.5"), ("dpr", "3")]);
        assert_eq!(config.dpr_override, Some(3.0));
    }
}
