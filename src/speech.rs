//! # Transcription Collaborator Interface
//!
//! The matching core never talks to a speech model directly. It consumes a
//! narrow capability interface: an audio source reference and an optional
//! forced-language hint go in, recognized text and the detected (or forced)
//! language come out. Recognition quality, model loading, and audio capture
//! all live behind the [`Transcriber`] implementation.
//!
//! Transcription blocks for as long as the model needs; the surrounding
//! application must not run it on a UI thread. [`transcribe_in_background`]
//! is the explicit task boundary for that: it moves the blocking call onto
//! tokio's blocking pool and hands back a future.

use log::info;
use std::path::PathBuf;
use std::sync::Arc;
use unic_langid::LanguageIdentifier;

/// Where the audio to transcribe comes from
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum AudioSource {
    /// A recorded utterance captured from the default input device
    Microphone,
    /// An audio file on disk
    File(PathBuf),
}

/// A single transcription job
#[derive(Debug, Clone)]
pub struct TranscriptionRequest {
    pub source: AudioSource,
    /// Skip language detection and force this language instead
    pub forced_language: Option<LanguageIdentifier>,
}

impl TranscriptionRequest {
    pub fn from_file(path: impl Into<PathBuf>) -> Self {
        Self {
            source: AudioSource::File(path.into()),
            forced_language: None,
        }
    }

    pub fn from_microphone() -> Self {
        Self {
            source: AudioSource::Microphone,
            forced_language: None,
        }
    }

    pub fn with_forced_language(mut self, language: LanguageIdentifier) -> Self {
        self.forced_language = Some(language);
        self
    }
}

/// Recognized text together with its detected-or-forced language
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Transcript {
    pub text: String,
    pub language: LanguageIdentifier,
}

/// Errors raised by transcription collaborators
#[derive(Debug, Clone)]
pub enum SpeechError {
    /// The audio source could not be opened or contained no usable audio
    AudioSource(String),
    /// The speech model failed to produce a transcript
    Recognition(String),
    /// The collaborator was cancelled or its worker died
    Worker(String),
}

impl std::fmt::Display for SpeechError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            SpeechError::AudioSource(msg) => write!(f, "Audio source error: {msg}"),
            SpeechError::Recognition(msg) => write!(f, "Recognition error: {msg}"),
            SpeechError::Worker(msg) => write!(f, "Worker error: {msg}"),
        }
    }
}

impl std::error::Error for SpeechError {}

/// Capability interface for a speech-to-text collaborator.
///
/// Implementations are expected to block; callers offload them via
/// [`transcribe_in_background`].
pub trait Transcriber: Send + Sync {
    fn transcribe(&self, request: &TranscriptionRequest) -> Result<Transcript, SpeechError>;
}

/// Run a blocking transcriber off the async caller's thread.
///
/// The returned future resolves once the blocking pool task completes. A
/// worker that panics or is torn down surfaces as [`SpeechError::Worker`],
/// never as a panic of the caller.
pub async fn transcribe_in_background(
    transcriber: Arc<dyn Transcriber>,
    request: TranscriptionRequest,
) -> Result<Transcript, SpeechError> {
    info!("Dispatching transcription of {:?} to the blocking pool", request.source);

    tokio::task::spawn_blocking(move || transcriber.transcribe(&request))
        .await
        .map_err(|e| SpeechError::Worker(format!("transcription task failed: {e}")))?
}
