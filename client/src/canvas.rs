use truslist_shared::{SurfaceSize, VisualState};
use web_sys::{HtmlCanvasElement, HtmlElement};

/// Size `canvas` to its parent's on-screen box: backing store in device
/// pixels, CSS size in CSS pixels. Does not draw.
///
/// Returns `None` when the canvas is detached. A zero-sized result means the
/// parent is not laid out yet; the caller skips drawing until the next
/// resize.
pub fn fit_to_container(canvas: &HtmlCanvasElement, dpr: f64) -> Option<SurfaceSize> {
    let container = canvas.parent_element()?;
    let rect = container.get_bounding_client_rect();
    let size = SurfaceSize::compute(rect.width(), rect.height(), dpr);

    canvas.set_width(size.backing_width);
    canvas.set_height(size.backing_height);
    let style = canvas.style();
    style.set_property("width", &size.css_width_px()).ok();
    style.set_property("height", &size.css_height_px()).ok();
    Some(size)
}

/// Apply a hover decision to the element the cloud is drawn on.
pub fn apply_visual_state(el: &HtmlElement, state: &VisualState) {
    let style = el.style();
    style.set_property("cursor", state.cursor.as_css()).ok();
    style.set_property("filter", state.filter_css()).ok();
    el.set_title(&state.tooltip);
}
