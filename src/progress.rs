//! Scroll progress state and the envelope helpers derived from it.
//!
//! `ScrollProgress` holds no browser handles. The live tracker feeds it
//! viewport readings, and view code asks it for opacity, scale and offset
//! values on every frame. Every output is finite and clamped, whatever the
//! inputs look like.

use crate::constants::{
    DEFAULT_END_Y, DEFAULT_MAX_SCALE, DEFAULT_MIN_SCALE, DEFAULT_START_Y, PROGRESS_MAX,
    SCROLL_MULTIPLIER,
};

/// Normalized position inside a virtual scroll range.
///
/// The virtual range is `viewport_height * multiplier` pixels tall; progress
/// runs from 0 at the top to 100 once the last viewport is reached.
#[derive(Clone, Debug, PartialEq)]
pub struct ScrollProgress {
    multiplier: f64,
    viewport_height: f64,
    total_scroll_height: f64,
    scroll_y: u32,
    scroll_progress: f64,
}

impl Default for ScrollProgress {
    fn default() -> Self {
        Self::with_multiplier(SCROLL_MULTIPLIER)
    }
}

impl ScrollProgress {
    pub fn new() -> Self {
        Self::default()
    }

    /// Use a custom virtual height multiplier. Non-positive or non-finite
    /// values fall back to [`SCROLL_MULTIPLIER`].
    pub fn with_multiplier(multiplier: f64) -> Self {
        let multiplier = if multiplier.is_finite() && multiplier > 0.0 {
            multiplier
        } else {
            SCROLL_MULTIPLIER
        };
        Self {
            multiplier,
            viewport_height: 0.0,
            total_scroll_height: 0.0,
            scroll_y: 0,
            scroll_progress: 0.0,
        }
    }

    /// Initial reading taken when the tracker attaches to a live view.
    pub fn sync(&mut self, viewport_height: f64, scroll_offset: f64) {
        self.on_resize(viewport_height);
        self.on_scroll(scroll_offset);
    }

    pub fn on_resize(&mut self, viewport_height: f64) {
        self.viewport_height = if viewport_height.is_finite() && viewport_height > 0.0 {
            viewport_height
        } else {
            0.0
        };
        self.total_scroll_height = self.viewport_height * self.multiplier;
        self.recompute();
    }

    pub fn on_scroll(&mut self, scroll_offset: f64) {
        // Overscroll can report negative offsets on touch devices.
        self.scroll_y = if scroll_offset.is_finite() && scroll_offset > 0.0 {
            scroll_offset.round() as u32
        } else {
            0
        };
        self.recompute();
    }

    fn recompute(&mut self) {
        self.scroll_progress = progress_for(
            f64::from(self.scroll_y),
            self.total_scroll_height,
            self.viewport_height,
        );
    }

    pub fn multiplier(&self) -> f64 {
        self.multiplier
    }

    pub fn viewport_height(&self) -> f64 {
        self.viewport_height
    }

    pub fn total_scroll_height(&self) -> f64 {
        self.total_scroll_height
    }

    pub fn scroll_y(&self) -> u32 {
        self.scroll_y
    }

    /// Progress on the 0..=100 scale.
    pub fn scroll_progress(&self) -> f64 {
        self.scroll_progress
    }

    /// Progress on the 0..=1 scale.
    pub fn progress(&self) -> f64 {
        self.scroll_progress / PROGRESS_MAX
    }

    pub fn opacity(&self, start: f64, peak: f64, end: f64) -> f64 {
        opacity(self.scroll_progress, start, peak, end)
    }

    pub fn is_visible(&self, start: f64, end: f64) -> bool {
        is_visible(self.scroll_progress, start, end)
    }

    /// Scale ramp from 0.8 to 1.0 across `[start, end]`.
    pub fn scale(&self, start: f64, end: f64) -> f64 {
        self.scale_with(start, end, DEFAULT_MIN_SCALE, DEFAULT_MAX_SCALE)
    }

    pub fn scale_with(&self, start: f64, end: f64, min_scale: f64, max_scale: f64) -> f64 {
        scale(self.scroll_progress, start, end, min_scale, max_scale)
    }

    /// Vertical slide from 50px to 0px across `[start, end]`.
    pub fn translate_y(&self, start: f64, end: f64) -> f64 {
        self.translate_y_with(start, end, DEFAULT_START_Y, DEFAULT_END_Y)
    }

    pub fn translate_y_with(&self, start: f64, end: f64, start_y: f64, end_y: f64) -> f64 {
        translate_y(self.scroll_progress, start, end, start_y, end_y)
    }
}

/// Map a scroll offset to progress in 0..=100.
///
/// A virtual range no taller than the viewport has nothing to scroll through
/// and reports 0.
pub fn progress_for(scroll_offset: f64, total_scroll_height: f64, viewport_height: f64) -> f64 {
    let max_scroll = total_scroll_height - viewport_height;
    if !(max_scroll > 0.0) || !scroll_offset.is_finite() {
        return 0.0;
    }
    (scroll_offset / max_scroll * PROGRESS_MAX).clamp(0.0, PROGRESS_MAX)
}

/// Fade envelope: 0 before `start`, rising to 1 at `peak`, back to 0 at `end`.
pub fn opacity(current: f64, start: f64, peak: f64, end: f64) -> f64 {
    let value = if current < start {
        0.0
    } else if current <= peak {
        fraction(current - start, peak - start)
    } else if current <= end {
        1.0 - fraction(current - peak, end - peak)
    } else {
        0.0
    };
    value.clamp(0.0, 1.0)
}

#[inline]
pub fn is_visible(current: f64, start: f64, end: f64) -> bool {
    current >= start && current <= end
}

#[inline]
pub fn scale(current: f64, start: f64, end: f64, min_scale: f64, max_scale: f64) -> f64 {
    ramp(current, start, end, min_scale, max_scale)
}

#[inline]
pub fn translate_y(current: f64, start: f64, end: f64, start_y: f64, end_y: f64) -> f64 {
    ramp(current, start, end, start_y, end_y)
}

/// Linear interpolation of `current` inside `[start, end]` onto `[from, to]`,
/// held at `from` before the range and at `to` after it.
pub fn ramp(current: f64, start: f64, end: f64, from: f64, to: f64) -> f64 {
    if current < start {
        from
    } else if current <= end {
        from + (to - from) * fraction(current - start, end - start)
    } else {
        to
    }
}

// A zero-width (or inverted) span is a step that has already happened.
#[inline]
fn fraction(offset: f64, span: f64) -> f64 {
    if span > 0.0 {
        offset / span
    } else {
        1.0
    }
}
