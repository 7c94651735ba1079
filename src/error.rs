use thiserror::Error;

#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum SoundError {
    /// The runtime refused to start playback (autoplay policy, decode failure).
    #[error("playback rejected: {0}")]
    Rejected(String),
    #[error("audio unsupported: {0}")]
    Unsupported(String),
}
