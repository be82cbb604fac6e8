use crate::domains::{RankedDomain, dataset_source_label};

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum Cursor {
    #[default]
    Default,
    Pointer,
}

impl Cursor {
    pub fn as_css(self) -> &'static str {
        match self {
            Self::Default => "default",
            Self::Pointer => "pointer",
        }
    }
}

/// What a cloud surface should look like after a hover event. The UI layer
/// applies it; deciding it touches nothing.
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub struct VisualState {
    pub cursor: Cursor,
    pub tooltip: String,
    /// Slight brightness boost while a word is under the pointer.
    pub highlight: bool,
}

impl VisualState {
    pub fn idle() -> Self {
        Self::default()
    }

    /// CSS `filter` value for the surface.
    pub fn filter_css(&self) -> &'static str {
        if self.highlight { "brightness(1.1)" } else { "none" }
    }
}

/// A word the user clicked.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Selection {
    pub label: String,
    pub rank: Option<u32>,
}

impl Selection {
    /// Multi-line description shown for a ranked selection.
    pub fn details(&self) -> String {
        match self.rank {
            Some(rank) => format!(
                "✨ 域名: {}\n📊 排名: #{}\n📅 来源: {}",
                self.label,
                rank,
                dataset_source_label()
            ),
            None => self.label.clone(),
        }
    }
}

/// Hover/select decisions for a word cloud.
///
/// Called synchronously from renderer callbacks, so implementations must
/// stay cheap and free of side effects.
pub trait CloudInteraction {
    fn on_hover(&self, label: Option<&str>, is_active: bool) -> VisualState;
    fn on_select(&self, label: &str) -> Option<Selection>;
}

/// Header cloud: tooltips and details come from the ranked domain table.
pub struct RankedInteraction {
    domains: &'static [RankedDomain],
}

impl RankedInteraction {
    pub fn new(domains: &'static [RankedDomain]) -> Self {
        Self { domains }
    }

    fn lookup(&self, label: &str) -> Option<&'static RankedDomain> {
        self.domains.iter().find(|d| d.text == label)
    }
}

impl CloudInteraction for RankedInteraction {
    fn on_hover(&self, label: Option<&str>, is_active: bool) -> VisualState {
        let Some(label) = label.filter(|_| is_active) else {
            return VisualState::idle();
        };
        let tooltip = self
            .lookup(label)
            .map(|d| format!("{} (排名 #{})", d.text, d.rank))
            .unwrap_or_default();
        VisualState {
            cursor: Cursor::Pointer,
            tooltip,
            highlight: true,
        }
    }

    fn on_select(&self, label: &str) -> Option<Selection> {
        self.lookup(label).map(|d| Selection {
            label: d.text.to_owned(),
            rank: Some(d.rank),
        })
    }
}

/// Keyword cloud: pointer feedback only.
#[derive(Debug, Default)]
pub struct PlainInteraction;

impl CloudInteraction for PlainInteraction {
    fn on_hover(&self, label: Option<&str>, is_active: bool) -> VisualState {
        if is_active && label.is_some() {
            VisualState {
                cursor: Cursor::Pointer,
                ..VisualState::idle()
            }
        } else {
            VisualState::idle()
        }
    }

    fn on_select(&self, label: &str) -> Option<Selection> {
        Some(Selection {
            label: label.to_owned(),
            rank: None,
        })
    }
}

#[cfg(test)]
mod tests {
    use super::{CloudInteraction, Cursor, PlainInteraction, RankedInteraction, VisualState};
    use crate::domains::HEADER_DOMAINS;

    #[test]
    fn hover_on_known_domain_shows_rank() {
        let interaction = RankedInteraction::new(HEADER_DOMAINS);
        let state = interaction.on_hover(Some("qq.com"), true);
        assert_eq!(state.cursor, Cursor::Pointer);
        assert_eq!(state.tooltip, "qq.com (排名 #2)");
        assert!(state.highlight);
        assert_eq!(state.filter_css(), "brightness(1.1)");
    }

    #[test]
    fn hover_on_unknown_label_has_no_tooltip() {
        let interaction = RankedInteraction::new(HEADER_DOMAINS);
        let state = interaction.on_hover(Some("example.org"), true);
        assert_eq!(state.cursor, Cursor::Pointer);
        assert!(state.tooltip.is_empty());
    }

    #[test]
    fn leaving_a_word_resets_state() {
        let interaction = RankedInteraction::new(HEADER_DOMAINS);
        assert_eq!(interaction.on_hover(Some("qq.com"), false), VisualState::idle());
        assert_eq!(interaction.on_hover(None, true), VisualState::idle());
        assert_eq!(VisualState::idle().cursor.as_css(), "default");
        assert_eq!(VisualState::idle().filter_css(), "none");
    }

    #[test]
    fn select_known_domain_yields_details() {
        let interaction = RankedInteraction::new(HEADER_DOMAINS);
        let selection = interaction.on_select("microsoft.com").unwrap();
        assert_eq!(selection.rank, Some(1));
        assert_eq!(
            selection.details(),
            "✨ 域名: microsoft.com\n📊 排名: #1\n📅 来源: TrusList 2025-08-15 实验数据"
        );
        assert!(interaction.on_select("example.org").is_none());
    }

    #[test]
    fn plain_interaction_only_changes_cursor() {
        let interaction = PlainInteraction;
        let state = interaction.on_hover(Some("DGA"), true);
        assert_eq!(state.cursor, Cursor::Pointer);
        assert!(state.tooltip.is_empty());
        assert!(!state.highlight);
        assert_eq!(interaction.on_hover(None, false).cursor, Cursor::Default);

        let selection = interaction.on_select("DGA").unwrap();
        assert_eq!(selection.rank, None);
        assert_eq!(selection.details(), "DGA");
    }
}
