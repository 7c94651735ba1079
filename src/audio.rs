use crate::error::SoundError;
use crate::sound::{AudioResource, SoundHandle};
use std::future::Future;
use std::pin::Pin;
use std::rc::Rc;
use wasm_bindgen::prelude::*;
use wasm_bindgen::JsCast;
use wasm_bindgen_futures::{future_to_promise, JsFuture};
use web_sys as web;

/// `<audio>` element backing a [`SoundHandle`].
pub struct HtmlAudio {
    element: web::HtmlAudioElement,
}

impl HtmlAudio {
    pub fn new(src: &str) -> Result<Self, SoundError> {
        web::HtmlAudioElement::new_with_src(src)
            .map(|element| HtmlAudio { element })
            .map_err(|e| SoundError::Unsupported(format!("{:?}", e)))
    }
}

fn rejection(err: JsValue) -> SoundError {
    let message = err
        .dyn_ref::<js_sys::Error>()
        .map(|e| String::from(e.message()))
        .unwrap_or_else(|| format!("{:?}", err));
    SoundError::Rejected(message)
}

impl AudioResource for HtmlAudio {
    type Playback = Pin<Box<dyn Future<Output = Result<(), SoundError>>>>;

    fn rewind(&self) {
        self.element.set_current_time(0.0);
    }

    fn start(&self) -> Self::Playback {
        let promise = self.element.play();
        Box::pin(async move {
            let promise = promise.map_err(rejection)?;
            JsFuture::from(promise).await.map(|_| ()).map_err(rejection)
        })
    }

    fn pause(&self) {
        _ = self.element.pause();
    }

    fn set_volume(&self, volume: f64) {
        self.element.set_volume(volume);
    }

    fn has_ended(&self) -> bool {
        self.element.ended()
    }

    fn release(&self) {
        _ = self.element.remove_attribute("src");
        self.element.load();
    }
}

/// Build a handle for `src`, degrading to an unloaded handle outside a
/// browser window or when the element cannot be created.
pub fn open(src: &str) -> SoundHandle<HtmlAudio> {
    if web::window().is_none() {
        log::info!("[sound] no window, {} stays silent", src);
        return SoundHandle::unloaded(src);
    }
    match HtmlAudio::new(src) {
        Ok(res) => SoundHandle::new(src, Some(res)),
        Err(e) => {
            log::warn!("[sound] {}: {}", src, e);
            SoundHandle::unloaded(src)
        }
    }
}

#[wasm_bindgen]
pub struct Sound {
    inner: Rc<SoundHandle<HtmlAudio>>,
}

#[wasm_bindgen]
impl Sound {
    #[wasm_bindgen(constructor)]
    pub fn new(src: &str) -> Sound {
        Sound {
            inner: Rc::new(open(src)),
        }
    }

    /// Resolves to `true` once playback started, `false` otherwise. Never rejects.
    pub fn play(&self) -> js_sys::Promise {
        let inner = self.inner.clone();
        future_to_promise(async move {
            let outcome = inner.play().await;
            Ok(JsValue::from_bool(outcome.is_started()))
        })
    }

    pub fn stop(&self) {
        self.inner.stop();
    }

    #[wasm_bindgen(js_name = setVolume)]
    pub fn set_volume(&self, volume: f64) {
        self.inner.set_volume(volume);
    }

    #[wasm_bindgen(getter)]
    pub fn volume(&self) -> f64 {
        self.inner.volume()
    }

    #[wasm_bindgen(getter)]
    pub fn available(&self) -> bool {
        self.inner.is_available()
    }

    pub fn dispose(&self) {
        self.inner.dispose();
    }
}
