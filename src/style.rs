use crate::progress::ScrollProgress;

/// Inline style values for one scroll-driven layer.
///
/// The layer fades over `[start, end]` peaking at `peak`, and slides up and
/// grows to full size during the fade-in half (`[start, peak]`).
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct LayerStyle {
    pub opacity: f64,
    pub translate_y: f64,
    pub scale: f64,
}

impl LayerStyle {
    pub fn at(progress: &ScrollProgress, start: f64, peak: f64, end: f64) -> Self {
        Self {
            opacity: progress.opacity(start, peak, end),
            translate_y: progress.translate_y(start, peak),
            scale: progress.scale(start, peak),
        }
    }

    pub fn opacity_css(&self) -> String {
        opacity_css(self.opacity)
    }

    pub fn transform_css(&self) -> String {
        transform_css(self.translate_y, self.scale)
    }
}

pub fn opacity_css(opacity: f64) -> String {
    css_number(opacity.clamp(0.0, 1.0))
}

pub fn transform_css(translate_y: f64, scale: f64) -> String {
    format!(
        "translateY({}px) scale({})",
        css_number(translate_y),
        css_number(scale)
    )
}

/// Height for the spacer element that makes the virtual range scrollable.
pub fn virtual_height_css(total_scroll_height: f64) -> String {
    format!("{}px", css_number(total_scroll_height.max(0.0)))
}

// Three decimals without trailing zeros; NaN and infinities become 0.
fn css_number(value: f64) -> String {
    if !value.is_finite() {
        return "0".to_string();
    }
    let text = format!("{:.3}", value);
    let text = text.trim_end_matches('0').trim_end_matches('.');
    match text {
        "-0" | "" => "0".to_string(),
        t => t.to_string(),
    }
}
