//! Speech output port.
//!
//! The platform text-to-speech call is an external collaborator; the
//! controller only needs "cancel whatever is queued, then speak this text
//! with a fixed accent tag".

/// Language/accent tag used for all utterances.
pub const SPEECH_LANG: &str = "en-GB";

/// Speech synthesis boundary.
pub trait SpeechPort {
    /// Cancel any previously queued utterance.
    fn cancel(&mut self);

    /// Queue `text` for playback with the given language tag.
    fn speak(&mut self, text: &str, lang: &str);
}

/// Logging stand-in for the platform speech engine.
#[derive(Debug, Default)]
pub struct NullSpeech;

impl SpeechPort for NullSpeech {
    fn cancel(&mut self) {
        tracing::debug!("speech queue cancelled");
    }

    fn speak(&mut self, text: &str, lang: &str) {
        tracing::info!(%text, %lang, "speak");
    }
}
