pub mod charts;
pub mod cloud;
pub mod colors;
pub mod config;
pub mod domains;
pub mod error;
pub mod hash;
pub mod interaction;
pub mod palette;
pub mod sizing;
pub mod toggle;

pub use config::ViewerConfig;
pub use error::{ConfigError, RendererError};
pub use hash::label_hash;
pub use interaction::{CloudInteraction, Cursor, Selection, VisualState};
pub use palette::{Palette, color_of};
pub use sizing::{SurfaceSize, effective_dpr};
pub use toggle::PanelView;
