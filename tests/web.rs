// Browser tests for the live bindings (wasm-pack test --headless --firefox).
#![cfg(target_arch = "wasm32")]

use scroll_stage::audio;
use scroll_stage::sound::{PlayOutcome, PlaybackState};
use scroll_stage::tracker::{ScrollProgressTracker, ScrollTracker};
use wasm_bindgen_test::*;
use web_sys as web;

wasm_bindgen_test_configure!(run_in_browser);

#[wasm_bindgen_test]
fn tracker_reads_viewport_on_attach() {
    let tracker = ScrollTracker::attach().expect("attach");
    assert!(tracker.is_attached());
    let snap = tracker.snapshot();
    assert_eq!(snap.total_scroll_height(), snap.viewport_height() * 5.0);
    assert!((0.0..=100.0).contains(&snap.scroll_progress()));
}

#[wasm_bindgen_test]
fn tracker_release_is_idempotent() {
    let mut tracker = ScrollTracker::attach().expect("attach");
    tracker.release();
    assert!(!tracker.is_attached());
    tracker.release();
    assert!(!tracker.is_attached());
}

fn window() -> web::Window {
    web::window().expect("window")
}

fn dispatch(event: &str) {
    let ev = web::Event::new(event).expect("event");
    window().dispatch_event(&ev).expect("dispatch");
}

// Make the page tall enough to scroll through the whole virtual range.
fn tall_page(height_px: f64) {
    let body = window()
        .document()
        .and_then(|d| d.body())
        .expect("body");
    body.style()
        .set_property("height", &format!("{}px", height_px))
        .expect("height");
}

#[wasm_bindgen_test]
fn resize_event_recomputes_virtual_height() {
    let tracker = ScrollTracker::attach().expect("attach");
    dispatch("resize");
    let snap = tracker.snapshot();
    assert!(snap.viewport_height() > 0.0);
    assert_eq!(snap.total_scroll_height(), snap.viewport_height() * 5.0);
}

#[wasm_bindgen_test]
fn scroll_event_updates_progress() {
    let w = window();
    w.scroll_to_with_x_and_y(0.0, 0.0);
    let tracker = ScrollTracker::attach().expect("attach");
    let before = tracker.snapshot();
    assert_eq!(before.scroll_progress(), 0.0);

    let viewport = before.viewport_height();
    tall_page(viewport * 6.0);
    w.scroll_to_with_x_and_y(0.0, viewport);
    dispatch("scroll");

    let after = tracker.snapshot();
    assert!(after.scroll_y() > 0);
    let expected = f64::from(after.scroll_y()) / (viewport * 4.0) * 100.0;
    assert!((after.scroll_progress() - expected).abs() < 1e-6);
    assert!(after.scroll_progress() > before.scroll_progress());

    w.scroll_to_with_x_and_y(0.0, 0.0);
}

#[wasm_bindgen_test]
fn released_tracker_ignores_events() {
    let w = window();
    w.scroll_to_with_x_and_y(0.0, 0.0);
    let mut tracker = ScrollTracker::attach().expect("attach");
    tracker.release();
    let before = tracker.snapshot();

    let viewport = before.viewport_height();
    tall_page(viewport * 6.0);
    w.scroll_to_with_x_and_y(0.0, viewport);
    dispatch("scroll");
    dispatch("resize");

    assert_eq!(tracker.snapshot(), before);
    w.scroll_to_with_x_and_y(0.0, 0.0);
}

#[wasm_bindgen_test]
fn exported_tracker_reports_virtual_height() {
    let tracker = ScrollProgressTracker::new(None).expect("attach");
    let total = tracker.total_scroll_height();
    assert_eq!(
        tracker.virtual_height(),
        scroll_stage::style::virtual_height_css(total)
    );
    assert!(tracker.virtual_height().ends_with("px"));
}

#[wasm_bindgen_test]
async fn play_never_raises() {
    let sound = audio::open("missing-file.mp3");
    assert!(sound.is_available());
    let outcome = sound.play().await;
    assert_ne!(outcome, PlayOutcome::Unavailable);
    sound.set_volume(2.0);
    assert_eq!(sound.volume(), 1.0);
    sound.dispose();
    assert_eq!(sound.state(), PlaybackState::Unloaded);
}
