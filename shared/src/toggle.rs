/// Which of the two panels below the header is visible. Exactly one is.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum PanelView {
    #[default]
    Figure,
    Charts,
}

impl PanelView {
    pub fn toggled(self) -> Self {
        match self {
            Self::Figure => Self::Charts,
            Self::Charts => Self::Figure,
        }
    }

    /// Toggle button text; it names the view a click switches to.
    pub fn button_label(self) -> &'static str {
        match self {
            Self::Figure => "显示交互图表",
            Self::Charts => "显示图片预览",
        }
    }

    pub fn shows_charts(self) -> bool {
        self == Self::Charts
    }

    pub fn parse(value: &str) -> Option<Self> {
        match value.trim().to_ascii_lowercase().as_str() {
            "figure" | "image" => Some(Self::Figure),
            "charts" | "interactive" => Some(Self::Charts),
            _ => None,
        }
    }
}

/// Opacity fade applied to an element after it becomes visible.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct FadeIn {
    pub delay_ms: u32,
    pub transition: &'static str,
}

pub const HEADER_CLOUD_FADE: FadeIn = FadeIn {
    delay_ms: 200,
    transition: "opacity 2s ease",
};

pub const KEYWORD_CLOUD_FADE: FadeIn = FadeIn {
    delay_ms: 100,
    transition: "opacity 1s ease",
};

pub const PANEL_FADE: FadeIn = FadeIn {
    delay_ms: 50,
    transition: "opacity 0.5s",
};

/// Time the outgoing panel gets to fade out before display is swapped.
pub const PANEL_FADE_OUT_MS: u32 = 300;

/// Cross-fade from the current panel to the other one.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Transition {
    pub hide: PanelView,
    pub show: PanelView,
    pub fade_out_ms: u32,
    pub fade_in: FadeIn,
}

impl Transition {
    pub fn leaving(current: PanelView) -> Self {
        Self {
            hide: current,
            show: current.toggled(),
            fade_out_ms: PANEL_FADE_OUT_MS,
            fade_in: PANEL_FADE,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::{PANEL_FADE, PanelView, Transition};

    #[test]
    fn toggling_twice_is_identity() {
        for view in [PanelView::Figure, PanelView::Charts] {
            assert_ne!(view.toggled(), view);
            assert_eq!(view.toggled().toggled(), view);
        }
    }

    #[test]
    fn button_names_the_other_view() {
        assert_eq!(PanelView::Figure.button_label(), "显示交互图表");
        assert_eq!(PanelView::Charts.button_label(), "显示图片预览");
    }

    #[test]
    fn transition_hides_current_and_shows_other() {
        let plan = Transition::leaving(PanelView::Figure);
        assert_eq!(plan.hide, PanelView::Figure);
        assert_eq!(plan.show, PanelView::Charts);
        assert_eq!(plan.fade_out_ms, 300);
        assert_eq!(plan.fade_in, PANEL_FADE);
    }

    #[test]
    fn parses_view_names() {
        assert_eq!(PanelView::parse("charts"), Some(PanelView::Charts));
        assert_eq!(PanelView::parse(" Figure "), Some(PanelView::Figure));
        assert_eq!(PanelView::parse("table"), None);
        assert_eq!(PanelView::default(), PanelView::Figure);
    }
}
