//! Speech capture and synthesis integration surface.
//!
//! The crate never talks to microphones or speakers itself. Hosts plug
//! their engines in through [`SpeechCapture`] and [`SpeechSynthesis`],
//! and [`translate_capture_stream`] drives finalized transcripts through
//! translation and playback. Translation failures never surface here
//! (the service falls back internally); capture failures do, as the one
//! caller-visible error channel.

use std::fmt;
use std::future::Future;

use anyhow::Result;
use log::warn;
use tokio::sync::mpsc;

use crate::translation::{TranslateOptions, TranslationBackend, TranslationService};

/// A piece of recognized speech.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Transcript {
    pub text: String,
    /// Interim transcripts may still be revised by the recognizer; only
    /// final ones are translated.
    pub is_final: bool,
}

/// Events delivered by a speech capture engine.
#[derive(Debug)]
pub enum CaptureEvent {
    /// A recognized utterance, interim or final.
    Transcript(Transcript),
    /// The engine failed; capture stops after this.
    Error(CaptureError),
    /// Capture ended normally (stopped or end of speech).
    Ended,
}

/// A capture engine failure (e.g., microphone access denied).
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CaptureError {
    /// Engine-specific error code (e.g., "not-allowed", "no-speech").
    pub code: String,
}

impl CaptureError {
    pub fn new(code: impl Into<String>) -> Self {
        Self { code: code.into() }
    }
}

impl fmt::Display for CaptureError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "speech capture failed: {}", self.code)
    }
}

impl std::error::Error for CaptureError {}

/// Source of transcripts, typically a microphone plus a recognizer.
pub trait SpeechCapture {
    /// Begins capturing and returns the event stream.
    fn start(&mut self) -> Result<mpsc::Receiver<CaptureEvent>>;

    /// Stops capturing; the stream then yields [`CaptureEvent::Ended`].
    fn stop(&mut self);
}

/// Plays translated text aloud.
pub trait SpeechSynthesis {
    fn speak(&self, text: &str, lang: &str) -> impl Future<Output = Result<()>> + Send;
}

/// One spoken phrase and its translation.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CapturedTranslation {
    pub original: String,
    pub translated: String,
}

/// Drives capture events through translation and playback.
///
/// Interim transcripts are ignored. Each final transcript is translated
/// with `context` and handed to `synthesis`; playback failures are
/// logged and skipped. Returns the collected exchanges once the stream
/// ends (or the channel closes), or the capture error that stopped it.
pub async fn translate_capture_stream<B, S>(
    service: &TranslationService<B>,
    mut events: mpsc::Receiver<CaptureEvent>,
    synthesis: &S,
    source_lang: &str,
    target_lang: &str,
    context: Option<String>,
) -> std::result::Result<Vec<CapturedTranslation>, CaptureError>
where
    B: TranslationBackend,
    S: SpeechSynthesis,
{
    let mut collected = Vec::new();

    while let Some(event) = events.recv().await {
        match event {
            CaptureEvent::Transcript(transcript) if transcript.is_final => {
                let options = TranslateOptions {
                    context: context.clone(),
                    cancel: None,
                };
                let Some(translated) = service
                    .translate_with_context(&transcript.text, source_lang, target_lang, options)
                    .await
                else {
                    // Blank transcript, nothing to do
                    continue;
                };

                if let Err(err) = synthesis.speak(&translated, target_lang).await {
                    warn!("speech synthesis failed: {err}");
                }

                collected.push(CapturedTranslation {
                    original: transcript.text,
                    translated,
                });
            }
            CaptureEvent::Transcript(_) => {}
            CaptureEvent::Error(err) => return Err(err),
            CaptureEvent::Ended => break,
        }
    }

    Ok(collected)
}
