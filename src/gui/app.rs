//! Main application state for the ColorFlash GUI

use iced::Task;
use std::sync::Arc;
use tracing::info;

use crate::controller::FlashcardController;
use crate::tts::SpeechOutput;

use super::messages::Message;

/// Main application state
pub struct FlashcardApp {
    /// Owns the session and the cycle timer
    pub(crate) controller: FlashcardController,
}

impl FlashcardApp {
    /// Create a new FlashcardApp instance
    pub fn new(speech: Arc<dyn SpeechOutput>) -> (Self, Task<Message>) {
        info!("🚀 ColorFlash app initialized");
        let app = Self {
            controller: FlashcardController::new(speech),
        };
        (app, Task::none())
    }

    pub fn controller(&self) -> &FlashcardController {
        &self.controller
    }

    /// Window title follows the card
    pub fn title(&self) -> String {
        format!("ColorFlash - {}", self.controller.state().current_name())
    }

    /// Application theme
    pub fn theme(&self) -> iced::Theme {
        iced::Theme::Dark
    }
}
