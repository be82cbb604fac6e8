use std::cell::{Cell, RefCell};
use std::rc::Rc;

use leptos::prelude::*;
use web_sys::HtmlCanvasElement;

use truslist_shared::charts::{LineChart, cdf_chart, top_n_overlap_chart};

use crate::renderer::{ChartHandle, ChartRenderer};

thread_local! {
    static CHART_HANDLES: RefCell<Vec<ChartHandle>> = const { RefCell::new(Vec::new()) };
}

fn draw_chart(
    renderer: &dyn ChartRenderer,
    canvas: &HtmlCanvasElement,
    name: &str,
    config: &LineChart,
) {
    match renderer.draw(canvas, config) {
        Ok(handle) => CHART_HANDLES.with(|handles| handles.borrow_mut().push(handle)),
        Err(e) => tracing::warn!(chart = name, error = %e, "chart draw failed"),
    }
}

fn destroy_charts() {
    CHART_HANDLES.with(|handles| {
        for handle in handles.borrow_mut().drain(..) {
            handle.destroy();
        }
    });
}

/// Top-N overlap and rank CDF line charts. Created on first reveal so the
/// entry animation is visible.
#[component]
pub fn ChartPanel(
    renderer: Option<Rc<dyn ChartRenderer>>,
    revealed: RwSignal<bool>,
) -> impl IntoView {
    let top_n_ref = NodeRef::<leptos::html::Canvas>::new();
    let cdf_ref = NodeRef::<leptos::html::Canvas>::new();
    let available = renderer.is_some();
    let drawn = Rc::new(Cell::new(false));

    Effect::new(move || {
        if !revealed.get() || drawn.get() {
            return;
        }
        let (Some(top_n), Some(cdf)) = (top_n_ref.get(), cdf_ref.get()) else {
            return;
        };
        let Some(renderer) = renderer.as_ref() else {
            return;
        };
        drawn.set(true);
        destroy_charts();
        draw_chart(renderer.as_ref(), &top_n, "top_n_overlap", &top_n_overlap_chart());
        draw_chart(renderer.as_ref(), &cdf, "rank_cdf", &cdf_chart());
    });

    view! {
        <div class="chart-grid">
            <figure class="chart-card">
                <canvas id="chartTopN" node_ref=top_n_ref></canvas>
                <figcaption>"Top-N Overlap"</figcaption>
            </figure>
            <figure class="chart-card">
                <canvas id="chartCDF" node_ref=cdf_ref></canvas>
                <figcaption>"Rank CDF"</figcaption>
            </figure>
            {(!available).then(|| view! {
                <p class="small">"图表库未加载，交互图表不可用。"</p>
            })}
        </div>
    }
}
