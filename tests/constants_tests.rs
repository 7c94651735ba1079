// Host-side tests for constants and their relationships.

use scroll_stage::constants::*;

#[test]
#[allow(clippy::assertions_on_constants)]
fn scroll_constants_are_sane() {
    assert!(SCROLL_MULTIPLIER > 1.0);
    assert_eq!(PROGRESS_MAX, 100.0);
}

#[test]
#[allow(clippy::assertions_on_constants)]
fn ramp_defaults_have_logical_relationships() {
    assert!(DEFAULT_MIN_SCALE > 0.0);
    assert!(DEFAULT_MIN_SCALE < DEFAULT_MAX_SCALE);
    // Layers slide up into place.
    assert!(DEFAULT_START_Y > DEFAULT_END_Y);
}

#[test]
#[allow(clippy::assertions_on_constants)]
fn default_volume_is_within_bounds() {
    assert!(MIN_VOLUME < MAX_VOLUME);
    assert!(DEFAULT_VOLUME >= MIN_VOLUME && DEFAULT_VOLUME <= MAX_VOLUME);
}
