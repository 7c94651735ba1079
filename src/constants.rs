// Shared tuning constants for the scroll stage and sound helpers.

// Virtual scroll range
pub const SCROLL_MULTIPLIER: f64 = 5.0; // virtual height = viewport height * multiplier
pub const PROGRESS_MAX: f64 = 100.0; // progress is reported on a 0..=100 scale

// Scale ramp defaults
pub const DEFAULT_MIN_SCALE: f64 = 0.8; // size before the ramp starts
pub const DEFAULT_MAX_SCALE: f64 = 1.0; // size once the ramp is done

// Vertical slide defaults (pixels)
pub const DEFAULT_START_Y: f64 = 50.0;
pub const DEFAULT_END_Y: f64 = 0.0;

// Sound
pub const DEFAULT_VOLUME: f64 = 0.5;
pub const MIN_VOLUME: f64 = 0.0;
pub const MAX_VOLUME: f64 = 1.0;
