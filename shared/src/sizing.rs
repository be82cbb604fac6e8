/// Device pixel ratio to size against: the reported one when usable, else 1.
pub fn effective_dpr(reported: Option<f64>) -> f64 {
    reported
        .filter(|dpr| dpr.is_finite() && *dpr > 0.0)
        .unwrap_or(1.0)
}

/// Backing-store and CSS display size of a drawing surface.
///
/// The backing store is the CSS size scaled by the device pixel ratio and
/// rounded, so one backing pixel maps to one physical pixel.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct SurfaceSize {
    pub backing_width: u32,
    pub backing_height: u32,
    pub css_width: f64,
    pub css_height: f64,
}

impl SurfaceSize {
    pub fn compute(css_width: f64, css_height: f64, dpr: f64) -> Self {
        let css_width = sanitize(css_width);
        let css_height = sanitize(css_height);
        let dpr = effective_dpr(Some(dpr));
        Self {
            backing_width: scaled(css_width, dpr),
            backing_height: scaled(css_height, dpr),
            css_width,
            css_height,
        }
    }

    /// False while the container has no layout yet; callers defer drawing.
    pub fn is_drawable(&self) -> bool {
        self.backing_width > 0 && self.backing_height > 0
    }

    pub fn css_width_px(&self) -> String {
        format!("{}px", self.css_width)
    }

    pub fn css_height_px(&self) -> String {
        format!("{}px", self.css_height)
    }
}

fn sanitize(css: f64) -> f64 {
    if css.is_finite() { css.max(0.0) } else { 0.0 }
}

fn scaled(css: f64, dpr: f64) -> u32 {
    // f64::round is half-away-from-zero; inputs are already >= 0.
    let px = (css * dpr).round();
    if px >= u32::MAX as f64 { u32::MAX } else { px as u32 }
}
