use gloo_timers::callback::Timeout;
use truslist_shared::toggle::{FadeIn, Transition};
use web_sys::HtmlElement;

/// Start `el` transparent and fade it in after `fade.delay_ms`.
pub fn fade_in(el: &HtmlElement, fade: FadeIn) {
    el.style().set_property("opacity", "0").ok();
    let el = el.clone();
    Timeout::new(fade.delay_ms, move || {
        let style = el.style();
        style.set_property("transition", fade.transition).ok();
        style.set_property("opacity", "1").ok();
    })
    .forget();
}

/// Fade `hide` out, swap which panel is displayed, then fade `show` in.
/// `on_swapped` runs once `show` is displayed (and measurable).
pub fn cross_fade(
    hide: HtmlElement,
    show: HtmlElement,
    plan: Transition,
    on_swapped: impl FnOnce() + 'static,
) {
    hide.style().set_property("opacity", "0").ok();
    Timeout::new(plan.fade_out_ms, move || {
        hide.style().set_property("display", "none").ok();
        show.style().set_property("display", "block").ok();
        on_swapped();
        fade_in(&show, plan.fade_in);
    })
    .forget();
}
