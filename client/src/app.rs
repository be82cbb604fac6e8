use leptos::prelude::*;
use wasm_bindgen::JsCast;
use web_sys::HtmlElement;

use truslist_shared::toggle::Transition;
use truslist_shared::{PanelView, ViewerConfig};

use crate::animation::cross_fade;
use crate::charts::ChartPanel;
use crate::config::device_pixel_ratio;
use crate::header_cloud::HeaderCloud;
use crate::keyword_cloud::KeywordCloud;
use crate::renderer::Renderers;

fn display_for(visible: bool) -> &'static str {
    if visible { "block" } else { "none" }
}

#[component]
pub fn App(config: ViewerConfig) -> impl IntoView {
    let renderers = Renderers::detect();
    let dpr = device_pixel_ratio(&config);
    tracing::info!(
        dpr,
        initial_view = ?config.initial_view,
        word_cloud = renderers.cloud.is_some(),
        charts = renderers.chart.is_some(),
        "TrusList page starting"
    );

    let view_mode = RwSignal::new(config.initial_view);
    // Latches true once the interactive area has been displayed.
    let charts_revealed = RwSignal::new(config.initial_view.shows_charts());

    let figure_ref = NodeRef::<leptos::html::Div>::new();
    let interactive_ref = NodeRef::<leptos::html::Div>::new();

    let on_toggle = move |_: web_sys::MouseEvent| {
        let (Some(figure), Some(interactive)) =
            (figure_ref.get_untracked(), interactive_ref.get_untracked())
        else {
            return;
        };
        let figure: HtmlElement = figure.unchecked_into();
        let interactive: HtmlElement = interactive.unchecked_into();

        let plan = Transition::leaving(view_mode.get_untracked());
        let (hide, show) = match plan.hide {
            PanelView::Figure => (figure, interactive),
            PanelView::Charts => (interactive, figure),
        };
        view_mode.set(plan.show);
        tracing::debug!(from = ?plan.hide, to = ?plan.show, "toggling panels");

        cross_fade(hide, show, plan, move || {
            if plan.show.shows_charts() {
                charts_revealed.set(true);
            }
        });
    };

    let initial = config.initial_view;

    view! {
        <header class="hero">
            <div class="wordcloud-wrap">
                <HeaderCloud renderer=renderers.cloud.clone() dpr=dpr />
            </div>
            <h1>"TrusList"</h1>
        </header>
        <main class="results">
            <button id="toggleCharts" class="toggle" on:click=on_toggle>
                {move || view_mode.get().button_label()}
            </button>
            <div
                id="figureArea"
                node_ref=figure_ref
                style:display=display_for(!initial.shows_charts())
            >
                <img src="figures/overview.png" alt="TrusList evaluation figures" />
            </div>
            <div
                id="interactiveArea"
                node_ref=interactive_ref
                style:display=display_for(initial.shows_charts())
            >
                <ChartPanel renderer=renderers.chart.clone() revealed=charts_revealed />
                <KeywordCloud renderer=renderers.cloud.clone() revealed=charts_revealed />
            </div>
        </main>
    }
}

#[cfg(test)]
mod tests {
    use super::display_for;

    #[test]
    fn exactly_one_panel_is_displayed() {
        for charts in [false, true] {
            let figure = display_for(!charts);
            let interactive = display_for(charts);
            assert_ne!(figure, interactive);
        }
    }
}
