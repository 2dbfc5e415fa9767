//! Mock speech output for testing
//!
//! Records every command the controller issues.

use colorflash::tts::SpeechOutput;
use std::sync::{Arc, Mutex};

#[derive(Debug, Clone, PartialEq)]
pub enum SpeechEvent {
    Speak { text: String, locale: String },
    Cancel,
}

#[derive(Debug, Default)]
pub struct MockSpeech {
    pub events: Arc<Mutex<Vec<SpeechEvent>>>,
}

impl MockSpeech {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn events(&self) -> Vec<SpeechEvent> {
        self.events.lock().unwrap().clone()
    }

    /// Texts spoken so far, in order
    pub fn spoken(&self) -> Vec<String> {
        self.events()
            .into_iter()
            .filter_map(|event| match event {
                SpeechEvent::Speak { text, .. } => Some(text),
                SpeechEvent::Cancel => None,
            })
            .collect()
    }

    pub fn cancel_count(&self) -> usize {
        self.events()
            .iter()
            .filter(|event| **event == SpeechEvent::Cancel)
            .count()
    }
}

impl SpeechOutput for MockSpeech {
    fn speak(&self, text: &str, locale: &str) {
        self.events.lock().unwrap().push(SpeechEvent::Speak {
            text: text.to_string(),
            locale: locale.to_string(),
        });
    }

    fn cancel(&self) {
        self.events.lock().unwrap().push(SpeechEvent::Cancel);
    }
}
