use std::cell::{Cell, RefCell};
use std::rc::Rc;

use leptos::prelude::*;
use web_sys::HtmlElement;

use truslist_shared::cloud::{CloudOptions, KEYWORD_CLOUD_HEIGHT, keyword_cloud_width, keyword_list};
use truslist_shared::domains::KEYWORDS;
use truslist_shared::interaction::PlainInteraction;
use truslist_shared::toggle::KEYWORD_CLOUD_FADE;
use truslist_shared::{Palette, Selection, VisualState};

use crate::animation::fade_in;
use crate::canvas::apply_visual_state;
use crate::renderer::{CloudBinding, CloudJob, WordCloudRenderer};

thread_local! {
    static KEYWORD_CLOUD_BINDING: RefCell<Option<CloudBinding>> = const { RefCell::new(None) };
}

fn draw(renderer: &dyn WordCloudRenderer, container: &HtmlElement) {
    // WordCloud2 renders into a div by appending spans; clear earlier runs.
    container.set_inner_html("");
    let width = keyword_cloud_width(container.client_width());

    let hover_target = container.clone();
    let job = CloudJob {
        list: keyword_list(KEYWORDS),
        options: CloudOptions::keywords(width),
        palette: Palette::keywords(),
        interaction: Rc::new(PlainInteraction),
        apply: Rc::new(move |state: VisualState| apply_visual_state(&hover_target, &state)),
        select: Rc::new(|selection: Selection| {
            tracing::info!(keyword = %selection.details(), "keyword clicked");
        }),
    };

    match renderer.draw(container, job) {
        Ok(binding) => {
            KEYWORD_CLOUD_BINDING.with(|slot| *slot.borrow_mut() = Some(binding));
            fade_in(container, KEYWORD_CLOUD_FADE);
        }
        Err(e) => tracing::warn!(error = %e, "keyword cloud draw failed"),
    }
}

/// Auxiliary keyword cloud. Drawn the first time `revealed` turns true, so
/// the container has a real width to lay out against.
#[component]
pub fn KeywordCloud(
    renderer: Option<Rc<dyn WordCloudRenderer>>,
    revealed: RwSignal<bool>,
) -> impl IntoView {
    let container_ref = NodeRef::<leptos::html::Div>::new();
    let available = renderer.is_some();
    let drawn = Rc::new(Cell::new(false));

    Effect::new(move || {
        if !revealed.get() || drawn.get() {
            return;
        }
        let Some(container) = container_ref.get() else {
            return;
        };
        let Some(renderer) = renderer.as_ref() else {
            return;
        };
        drawn.set(true);
        draw(renderer.as_ref(), &container);
    });

    view! {
        <div
            id="wordCloud"
            node_ref=container_ref
            style=format!("position: relative; width: 100%; height: {KEYWORD_CLOUD_HEIGHT}px;")
        >
            {(!available).then(|| view! {
                <p class="small">
                    "词云需要浏览器访问外部脚本或使用本地服务器以加载依赖（见 README 中的预览说明）。"
                </p>
            })}
        </div>
    }
}
