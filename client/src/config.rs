use truslist_shared::{ViewerConfig, effective_dpr};
use web_sys::UrlSearchParams;

const QUERY_KEYS: [&str; 3] = ["dpr", "view", "log"];

/// Read page settings from the URL query string (`?view=charts&log=debug`).
pub fn load() -> ViewerConfig {
    let search = web_sys::window()
        .and_then(|w| w.location().search().ok())
        .unwrap_or_default();
    let Ok(params) = UrlSearchParams::new_with_str(&search) else {
        return ViewerConfig::default();
    };
    ViewerConfig::from_pairs(
        QUERY_KEYS
            .iter()
            .filter_map(|key| params.get(key).map(|value| (*key, value))),
    )
}

/// Ratio used to size canvases: the configured override, else the display's.
pub fn device_pixel_ratio(config: &ViewerConfig) -> f64 {
    effective_dpr(
        config
            .dpr_override
            .or_else(|| web_sys::window().map(|w| w.device_pixel_ratio())),
    )
}
