//! Scroll-linked animation progress and sound helpers for the web front-end.
//!
//! The pure pieces (`progress`, `style`, `sound`) build on any target. The
//! browser bindings (`tracker`, `audio`) exist only on `wasm32`.

pub mod constants;
pub mod error;
pub mod progress;
pub mod sound;
pub mod style;

#[cfg(target_arch = "wasm32")]
pub mod audio;
#[cfg(target_arch = "wasm32")]
mod dom;
#[cfg(target_arch = "wasm32")]
pub mod tracker;

pub use error::SoundError;
pub use progress::ScrollProgress;
pub use sound::{AudioResource, PlayOutcome, PlaybackState, SoundHandle};
pub use style::LayerStyle;

#[cfg(target_arch = "wasm32")]
#[wasm_bindgen::prelude::wasm_bindgen(start)]
pub fn start() -> Result<(), wasm_bindgen::JsValue> {
    console_error_panic_hook::set_once();
    console_log::init_with_level(log::Level::Info).ok();
    log::info!("scroll-stage ready");
    Ok(())
}
