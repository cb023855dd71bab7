//! Error types for the audio core.

use thiserror::Error;

/// Result type for audio operations.
pub type AudioResult<T> = Result<T, AudioError>;

/// Errors that can occur during synthesis and processing.
///
/// Every variant is a local precondition violation. No operation has side
/// effects, so a failed call leaves nothing to unwind.
#[derive(Debug, Error)]
pub enum AudioError {
    /// Invalid sample rate.
    #[error("invalid sample rate: {rate}")]
    InvalidSampleRate {
        /// The invalid sample rate.
        rate: u32,
    },

    /// Invalid duration.
    #[error("invalid duration: {duration_ms} ms")]
    InvalidDuration {
        /// The invalid duration.
        duration_ms: f64,
    },

    /// Invalid frequency.
    #[error("invalid frequency: {freq} Hz")]
    InvalidFrequency {
        /// The invalid frequency.
        freq: f64,
    },

    /// Invalid parameter value.
    #[error("invalid parameter '{name}': {message}")]
    InvalidParameter {
        /// Parameter name.
        name: String,
        /// Error message.
        message: String,
    },

    /// A zero-length buffer was passed to an operation that needs samples.
    #[error("{operation} requires a non-empty buffer")]
    EmptyBuffer {
        /// Name of the rejecting operation.
        operation: &'static str,
    },

    /// Instrument name not in the oscillator bank.
    #[error("unknown instrument '{name}' (expected one of: glockenspiel, sine, marimba, ambient, bowl)")]
    UnknownInstrument {
        /// The unrecognized name.
        name: String,
    },

    /// I/O error.
    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),
}

impl AudioError {
    /// Creates an invalid parameter error.
    pub fn invalid_param(name: impl Into<String>, message: impl Into<String>) -> Self {
        Self::InvalidParameter {
            name: name.into(),
            message: message.into(),
        }
    }

    /// Creates an empty buffer error.
    pub fn empty_buffer(operation: &'static str) -> Self {
        Self::EmptyBuffer { operation }
    }
}

/// Rejects a zero or otherwise unusable sample rate.
pub(crate) fn check_sample_rate(sample_rate: u32) -> AudioResult<()> {
    if sample_rate == 0 {
        return Err(AudioError::InvalidSampleRate { rate: sample_rate });
    }
    Ok(())
}

/// Converts a duration in seconds to a frame count at `sample_rate`.
pub(crate) fn frames_for(sample_rate: u32, seconds: f64) -> usize {
    (sample_rate as f64 * seconds).round().max(0.0) as usize
}
