//! Single-sound playback handle.
//!
//! `SoundHandle` owns at most one playable resource and never fails towards
//! its caller: a missing resource turns every call into a no-op, and a
//! rejected `play()` is logged and reported through [`PlayOutcome`].

use crate::constants::{DEFAULT_VOLUME, MAX_VOLUME, MIN_VOLUME};
use crate::error::SoundError;
use std::cell::{Cell, RefCell};
use std::future::Future;

/// A playable audio asset as seen by [`SoundHandle`].
///
/// Implemented by `audio::HtmlAudio` in the browser.
pub trait AudioResource {
    type Playback: Future<Output = Result<(), SoundError>>;

    /// Move the playback position back to the start.
    fn rewind(&self);
    /// Begin playback; resolves once the runtime accepted or refused it.
    fn start(&self) -> Self::Playback;
    fn pause(&self);
    fn set_volume(&self, volume: f64);
    fn has_ended(&self) -> bool;
    /// Let go of the underlying media data.
    fn release(&self);
}

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum PlaybackState {
    Unloaded,
    Idle,
    Playing,
}

#[derive(Clone, Debug, PartialEq, Eq)]
pub enum PlayOutcome {
    Started,
    /// No resource: nothing was attempted.
    Unavailable,
    Rejected(SoundError),
}

impl PlayOutcome {
    pub fn is_started(&self) -> bool {
        matches!(self, PlayOutcome::Started)
    }
}

pub struct SoundHandle<R: AudioResource> {
    source: String,
    resource: RefCell<Option<R>>,
    volume: Cell<f64>,
    playing: Cell<bool>,
}

impl<R: AudioResource> SoundHandle<R> {
    pub fn new(source: impl Into<String>, resource: Option<R>) -> Self {
        if let Some(res) = &resource {
            res.set_volume(DEFAULT_VOLUME);
        }
        Self {
            source: source.into(),
            resource: RefCell::new(resource),
            volume: Cell::new(DEFAULT_VOLUME),
            playing: Cell::new(false),
        }
    }

    pub fn unloaded(source: impl Into<String>) -> Self {
        Self::new(source, None)
    }

    pub fn source(&self) -> &str {
        &self.source
    }

    pub fn volume(&self) -> f64 {
        self.volume.get()
    }

    pub fn is_available(&self) -> bool {
        self.resource.borrow().is_some()
    }

    pub fn state(&self) -> PlaybackState {
        match self.resource.borrow().as_ref() {
            None => PlaybackState::Unloaded,
            Some(res) if self.playing.get() && !res.has_ended() => PlaybackState::Playing,
            Some(_) => PlaybackState::Idle,
        }
    }

    /// Restart the sound from the beginning.
    ///
    /// Calling this while already playing (or while a previous `play()` is
    /// still pending) rewinds and starts over.
    pub async fn play(&self) -> PlayOutcome {
        let pending = {
            let slot = self.resource.borrow();
            let Some(res) = slot.as_ref() else {
                return PlayOutcome::Unavailable;
            };
            res.rewind();
            res.start()
        };
        match pending.await {
            Ok(()) => {
                self.playing.set(true);
                PlayOutcome::Started
            }
            Err(err) => {
                log::warn!("[sound] could not play {}: {}", self.source, err);
                self.playing.set(false);
                PlayOutcome::Rejected(err)
            }
        }
    }

    pub fn stop(&self) {
        if let Some(res) = self.resource.borrow().as_ref() {
            res.pause();
            res.rewind();
        }
        self.playing.set(false);
    }

    /// Clamp to 0..=1 and apply. NaN is ignored.
    pub fn set_volume(&self, volume: f64) {
        if volume.is_nan() {
            return;
        }
        if let Some(res) = self.resource.borrow().as_ref() {
            let volume = volume.clamp(MIN_VOLUME, MAX_VOLUME);
            res.set_volume(volume);
            self.volume.set(volume);
        }
    }

    /// Stop and release the resource. Later calls become no-ops.
    pub fn dispose(&self) {
        let taken = self.resource.borrow_mut().take();
        if let Some(res) = taken {
            res.pause();
            res.release();
            log::info!("[sound] released {}", self.source);
        }
        self.playing.set(false);
    }
}

impl<R: AudioResource> Drop for SoundHandle<R> {
    fn drop(&mut self) {
        self.dispose();
    }
}
