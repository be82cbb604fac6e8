use std::cell::RefCell;
use std::rc::Rc;

use gloo_timers::callback::Timeout;
use leptos::prelude::*;
use wasm_bindgen::JsCast;
use wasm_bindgen::closure::Closure;
use web_sys::HtmlCanvasElement;

use truslist_shared::cloud::{CloudOptions, domain_list};
use truslist_shared::config::RESIZE_DEBOUNCE_MS;
use truslist_shared::domains::HEADER_DOMAINS;
use truslist_shared::interaction::RankedInteraction;
use truslist_shared::toggle::HEADER_CLOUD_FADE;
use truslist_shared::{Palette, Selection, VisualState};

use crate::animation::fade_in;
use crate::canvas::{apply_visual_state, fit_to_container};
use crate::renderer::{CloudBinding, CloudJob, WordCloudRenderer};

struct ResizeBinding {
    window: web_sys::Window,
    _handler: Closure<dyn Fn(web_sys::Event)>,
}

thread_local! {
    static HEADER_CLOUD_BINDING: RefCell<Option<CloudBinding>> = const { RefCell::new(None) };
    static RESIZE_BINDING: RefCell<Option<ResizeBinding>> = const { RefCell::new(None) };
}

/// Size the header canvas to its wrapper and draw the ranked-domain cloud.
fn draw(renderer: &dyn WordCloudRenderer, canvas: &HtmlCanvasElement, dpr: f64) {
    let Some(size) = fit_to_container(canvas, dpr) else {
        return;
    };
    if !size.is_drawable() {
        tracing::debug!(
            css_width = size.css_width,
            css_height = size.css_height,
            "header cloud container not laid out; deferring draw"
        );
        return;
    }

    let hover_target = canvas.clone();
    let job = CloudJob {
        list: domain_list(HEADER_DOMAINS),
        options: CloudOptions::header(dpr),
        palette: Palette::header(),
        interaction: Rc::new(RankedInteraction::new(HEADER_DOMAINS)),
        apply: Rc::new(move |state: VisualState| apply_visual_state(&hover_target, &state)),
        select: Rc::new(show_selection),
    };

    match renderer.draw(canvas, job) {
        Ok(binding) => {
            HEADER_CLOUD_BINDING.with(|slot| *slot.borrow_mut() = Some(binding));
            fade_in(canvas, HEADER_CLOUD_FADE);
            tracing::debug!(
                width = size.backing_width,
                height = size.backing_height,
                dpr,
                "header cloud drawn"
            );
        }
        Err(e) => tracing::warn!(error = %e, "header cloud draw failed"),
    }
}

fn show_selection(selection: Selection) {
    tracing::info!(domain = %selection.label, rank = ?selection.rank, "domain selected");
    if let Some(window) = web_sys::window() {
        let _ = window.alert_with_message(&selection.details());
    }
}

/// Re-measure and redraw on window resize, coalescing bursts of events.
fn bind_resize(redraw: Rc<dyn Fn()>) {
    let Some(window) = web_sys::window() else {
        return;
    };
    RESIZE_BINDING.with(|slot| {
        if let Some(old) = slot.borrow_mut().take() {
            let _ = old.window.remove_event_listener_with_callback(
                "resize",
                old._handler.as_ref().unchecked_ref(),
            );
        }
    });

    let pending = Rc::new(RefCell::new(None::<Timeout>));
    let handler = Closure::<dyn Fn(web_sys::Event)>::new(move |_: web_sys::Event| {
        if let Some(timeout) = pending.borrow_mut().take() {
            timeout.cancel();
        }
        let redraw = Rc::clone(&redraw);
        *pending.borrow_mut() = Some(Timeout::new(RESIZE_DEBOUNCE_MS, move || redraw()));
    });
    if window
        .add_event_listener_with_callback("resize", handler.as_ref().unchecked_ref())
        .is_ok()
    {
        RESIZE_BINDING.with(|slot| {
            *slot.borrow_mut() = Some(ResizeBinding {
                window: window.clone(),
                _handler: handler,
            });
        });
    }
}

/// Header word cloud of top-ranked domains. Renders nothing but the empty
/// canvas when no word cloud renderer is available.
#[component]
pub fn HeaderCloud(renderer: Option<Rc<dyn WordCloudRenderer>>, dpr: f64) -> impl IntoView {
    let canvas_ref = NodeRef::<leptos::html::Canvas>::new();

    Effect::new(move || {
        let Some(canvas) = canvas_ref.get() else {
            return;
        };
        let Some(renderer) = renderer.clone() else {
            return;
        };
        draw(renderer.as_ref(), &canvas, dpr);

        bind_resize(Rc::new(move || {
            if let Some(canvas) = canvas_ref.get_untracked() {
                draw(renderer.as_ref(), &canvas, dpr);
            }
        }));
    });

    view! {
        <canvas id="wordcloudCanvas" node_ref=canvas_ref style="display: block;"></canvas>
    }
}
