//! Bindings to the page's JavaScript visualization libraries.
//!
//! Each library is looked up once, when its renderer is constructed; a
//! missing library is a configuration error reported then, not a probe on
//! every draw.

use std::rc::Rc;

use js_sys::{Array, Function, Reflect};
use wasm_bindgen::JsCast;
use wasm_bindgen::prelude::*;
use web_sys::{HtmlCanvasElement, HtmlElement};

use truslist_shared::charts::LineChart;
use truslist_shared::cloud::CloudOptions;
use truslist_shared::{CloudInteraction, Palette, RendererError, Selection, VisualState};

const WORDCLOUD_LIBRARY: &str = "WordCloud";
const CHART_LIBRARY: &str = "Chart";

/// Everything a word cloud draw needs. `apply` and `select` are the UI
/// layer's side of the interaction: they receive the decisions made by
/// `interaction`.
pub struct CloudJob {
    pub list: Vec<(String, f64)>,
    pub options: CloudOptions,
    pub palette: Palette,
    pub interaction: Rc<dyn CloudInteraction>,
    pub apply: Rc<dyn Fn(VisualState)>,
    pub select: Rc<dyn Fn(Selection)>,
}

/// Keeps the JS callbacks of a drawn cloud alive. Dropping it detaches them,
/// so hold it for as long as the cloud is on screen.
pub struct CloudBinding {
    _color: Closure<dyn Fn(JsValue) -> JsValue>,
    _hover: Closure<dyn Fn(JsValue, JsValue)>,
    _click: Closure<dyn Fn(JsValue)>,
}

pub trait WordCloudRenderer {
    fn draw(&self, target: &HtmlElement, job: CloudJob) -> Result<CloudBinding, RendererError>;
}

/// A live chart instance.
pub struct ChartHandle(JsValue);

impl ChartHandle {
    pub fn destroy(&self) {
        let destroy = Reflect::get(&self.0, &JsValue::from_str("destroy"))
            .ok()
            .and_then(|f| f.dyn_into::<Function>().ok());
        if let Some(destroy) = destroy {
            let _ = destroy.call0(&self.0);
        }
    }
}

pub trait ChartRenderer {
    fn draw(&self, canvas: &HtmlCanvasElement, config: &LineChart)
    -> Result<ChartHandle, RendererError>;
}

/// Renderers available on this page, detected once at startup.
#[derive(Clone, Default)]
pub struct Renderers {
    pub cloud: Option<Rc<dyn WordCloudRenderer>>,
    pub chart: Option<Rc<dyn ChartRenderer>>,
}

impl Renderers {
    pub fn detect() -> Self {
        let cloud = match WordCloud2::detect() {
            Ok(renderer) => Some(Rc::new(renderer) as Rc<dyn WordCloudRenderer>),
            Err(e) => {
                tracing::warn!(error = %e, "word clouds disabled");
                None
            }
        };
        let chart = match ChartJs::detect() {
            Ok(renderer) => Some(Rc::new(renderer) as Rc<dyn ChartRenderer>),
            Err(e) => {
                tracing::warn!(error = %e, "charts disabled");
                None
            }
        };
        Self { cloud, chart }
    }
}

fn global_function(name: &str) -> Option<Function> {
    let window = web_sys::window()?;
    Reflect::get(&window, &JsValue::from_str(name))
        .ok()?
        .dyn_into::<Function>()
        .ok()
}

fn js_error(library: &'static str, err: impl std::fmt::Debug) -> RendererError {
    RendererError::Js {
        library,
        message: format!("{err:?}"),
    }
}

/// WordCloud2.js `[word, weight]` item -> word.
fn item_label(item: &JsValue) -> Option<String> {
    item.dyn_ref::<Array>()?.get(0).as_string()
}

pub struct WordCloud2 {
    entry: Function,
}

impl WordCloud2 {
    pub fn detect() -> Result<Self, RendererError> {
        global_function(WORDCLOUD_LIBRARY)
            .map(|entry| Self { entry })
            .ok_or(RendererError::Unavailable {
                library: WORDCLOUD_LIBRARY,
            })
    }
}

impl WordCloudRenderer for WordCloud2 {
    fn draw(&self, target: &HtmlElement, job: CloudJob) -> Result<CloudBinding, RendererError> {
        let CloudJob {
            list,
            options,
            palette,
            interaction,
            apply,
            select,
        } = job;

        let opts = serde_wasm_bindgen::to_value(&options)
            .map_err(|e| js_error(WORDCLOUD_LIBRARY, e))?;
        let list = serde_wasm_bindgen::to_value(&list)
            .map_err(|e| js_error(WORDCLOUD_LIBRARY, e))?;

        // Called once per word during layout.
        let color = Closure::<dyn Fn(JsValue) -> JsValue>::new(move |word: JsValue| {
            let word = word.as_string().unwrap_or_default();
            JsValue::from_str(palette.color_for(&word))
        });

        let hover_interaction = Rc::clone(&interaction);
        let hover = Closure::<dyn Fn(JsValue, JsValue)>::new(
            move |item: JsValue, dimension: JsValue| {
                let label = item_label(&item);
                let state = hover_interaction.on_hover(label.as_deref(), dimension.is_truthy());
                apply(state);
            },
        );

        let click = Closure::<dyn Fn(JsValue)>::new(move |item: JsValue| {
            let Some(label) = item_label(&item) else {
                return;
            };
            if let Some(selection) = interaction.on_select(&label) {
                select(selection);
            }
        });

        for (key, value) in [
            ("list", &list),
            ("color", color.as_ref()),
            ("hover", hover.as_ref()),
            ("click", click.as_ref()),
        ] {
            Reflect::set(&opts, &JsValue::from_str(key), value)
                .map_err(|e| js_error(WORDCLOUD_LIBRARY, e))?;
        }

        self.entry
            .call2(&JsValue::NULL, target, &opts)
            .map_err(|e| js_error(WORDCLOUD_LIBRARY, e))?;

        Ok(CloudBinding {
            _color: color,
            _hover: hover,
            _click: click,
        })
    }
}

pub struct ChartJs {
    constructor: Function,
}

impl ChartJs {
    pub fn detect() -> Result<Self, RendererError> {
        global_function(CHART_LIBRARY)
            .map(|constructor| Self { constructor })
            .ok_or(RendererError::Unavailable {
                library: CHART_LIBRARY,
            })
    }
}

impl ChartRenderer for ChartJs {
    fn draw(
        &self,
        canvas: &HtmlCanvasElement,
        config: &LineChart,
    ) -> Result<ChartHandle, RendererError> {
        let ctx = canvas
            .get_context("2d")
            .map_err(|e| js_error(CHART_LIBRARY, e))?
            .ok_or_else(|| js_error(CHART_LIBRARY, "2d context unavailable"))?;
        let config =
            serde_wasm_bindgen::to_value(config).map_err(|e| js_error(CHART_LIBRARY, e))?;
        let chart = Reflect::construct(&self.constructor, &Array::of2(&ctx, &config))
            .map_err(|e| js_error(CHART_LIBRARY, e))?;
        Ok(ChartHandle(chart))
    }
}
