use crate::constants::{DEFAULT_END_Y, DEFAULT_MAX_SCALE, DEFAULT_MIN_SCALE, DEFAULT_START_Y};
use crate::dom;
use crate::progress::ScrollProgress;
use crate::style::{self, LayerStyle};
use std::cell::RefCell;
use std::rc::Rc;
use wasm_bindgen::prelude::*;
use web_sys as web;

/// Live scroll progress bound to the window's `scroll` and `resize` events.
///
/// Subscriptions are held by the tracker and removed by [`release`] or on
/// drop, including when `attach` fails halfway.
///
/// [`release`]: ScrollTracker::release
pub struct ScrollTracker {
    state: Rc<RefCell<ScrollProgress>>,
    listeners: Vec<dom::Listener>,
}

impl ScrollTracker {
    pub fn attach() -> anyhow::Result<Self> {
        Self::attach_with(ScrollProgress::new())
    }

    pub fn attach_with(progress: ScrollProgress) -> anyhow::Result<Self> {
        let window = dom::window()?;
        let state = Rc::new(RefCell::new(progress));
        state
            .borrow_mut()
            .sync(dom::viewport_height(&window), dom::scroll_offset(&window));

        let mut listeners = Vec::with_capacity(2);
        let target: &web::EventTarget = window.as_ref();

        let scroll_state = state.clone();
        let scroll_window = window.clone();
        listeners.push(dom::Listener::add(target, "scroll", true, move |_| {
            scroll_state
                .borrow_mut()
                .on_scroll(dom::scroll_offset(&scroll_window));
        })?);

        let resize_state = state.clone();
        let resize_window = window.clone();
        listeners.push(dom::Listener::add(target, "resize", false, move |_| {
            let height = dom::viewport_height(&resize_window);
            resize_state.borrow_mut().on_resize(height);
            log::debug!("[scroll] resize viewport={:.0}", height);
        })?);

        {
            let s = state.borrow();
            log::info!(
                "[scroll] attached viewport={:.0} total={:.0} progress={:.1}",
                s.viewport_height(),
                s.total_scroll_height(),
                s.scroll_progress()
            );
        }
        Ok(Self { state, listeners })
    }

    pub fn is_attached(&self) -> bool {
        !self.listeners.is_empty()
    }

    pub fn snapshot(&self) -> ScrollProgress {
        self.state.borrow().clone()
    }

    pub fn with_progress<T>(&self, f: impl FnOnce(&ScrollProgress) -> T) -> T {
        f(&self.state.borrow())
    }

    pub fn release(&mut self) {
        if self.listeners.is_empty() {
            return;
        }
        self.listeners.clear();
        log::info!("[scroll] released");
    }
}

impl Drop for ScrollTracker {
    fn drop(&mut self) {
        self.release();
    }
}

#[wasm_bindgen]
pub struct ScrollProgressTracker {
    inner: ScrollTracker,
}

#[wasm_bindgen]
impl ScrollProgressTracker {
    #[wasm_bindgen(constructor)]
    pub fn new(multiplier: Option<f64>) -> Result<ScrollProgressTracker, JsValue> {
        let progress = multiplier
            .map(ScrollProgress::with_multiplier)
            .unwrap_or_default();
        ScrollTracker::attach_with(progress)
            .map(|inner| ScrollProgressTracker { inner })
            .map_err(|e| JsValue::from_str(&e.to_string()))
    }

    #[wasm_bindgen(getter, js_name = scrollProgress)]
    pub fn scroll_progress(&self) -> f64 {
        self.inner.with_progress(|p| p.scroll_progress())
    }

    #[wasm_bindgen(getter)]
    pub fn progress(&self) -> f64 {
        self.inner.with_progress(|p| p.progress())
    }

    #[wasm_bindgen(getter, js_name = scrollY)]
    pub fn scroll_y(&self) -> u32 {
        self.inner.with_progress(|p| p.scroll_y())
    }

    #[wasm_bindgen(getter, js_name = totalScrollHeight)]
    pub fn total_scroll_height(&self) -> f64 {
        self.inner.with_progress(|p| p.total_scroll_height())
    }

    /// CSS height for the spacer that makes the virtual range scrollable.
    #[wasm_bindgen(getter, js_name = virtualHeight)]
    pub fn virtual_height(&self) -> String {
        self.inner
            .with_progress(|p| style::virtual_height_css(p.total_scroll_height()))
    }

    #[wasm_bindgen(js_name = getOpacity)]
    pub fn get_opacity(&self, start: f64, peak: f64, end: f64) -> f64 {
        self.inner.with_progress(|p| p.opacity(start, peak, end))
    }

    #[wasm_bindgen(js_name = isVisible)]
    pub fn is_visible(&self, start: f64, end: f64) -> bool {
        self.inner.with_progress(|p| p.is_visible(start, end))
    }

    #[wasm_bindgen(js_name = getScale)]
    pub fn get_scale(
        &self,
        start: f64,
        end: f64,
        min_scale: Option<f64>,
        max_scale: Option<f64>,
    ) -> f64 {
        self.inner.with_progress(|p| {
            p.scale_with(
                start,
                end,
                min_scale.unwrap_or(DEFAULT_MIN_SCALE),
                max_scale.unwrap_or(DEFAULT_MAX_SCALE),
            )
        })
    }

    #[wasm_bindgen(js_name = getTranslateY)]
    pub fn get_translate_y(
        &self,
        start: f64,
        end: f64,
        start_y: Option<f64>,
        end_y: Option<f64>,
    ) -> f64 {
        self.inner.with_progress(|p| {
            p.translate_y_with(
                start,
                end,
                start_y.unwrap_or(DEFAULT_START_Y),
                end_y.unwrap_or(DEFAULT_END_Y),
            )
        })
    }

    /// Write `opacity` and `transform` for a layer fading over `[start, end]`.
    #[wasm_bindgen(js_name = applyStyle)]
    pub fn apply_style(
        &self,
        element: &web::HtmlElement,
        start: f64,
        peak: f64,
        end: f64,
    ) -> Result<(), JsValue> {
        let layer = self
            .inner
            .with_progress(|p| LayerStyle::at(p, start, peak, end));
        let style = element.style();
        style.set_property("opacity", &layer.opacity_css())?;
        style.set_property("transform", &layer.transform_css())?;
        Ok(())
    }

    pub fn release(&mut self) {
        self.inner.release();
    }
}
