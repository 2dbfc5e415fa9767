//! Message types for the ColorFlash GUI
//!
//! All messages that can be sent to update the application state.

use crate::catalog::{ColorId, LanguageId};

/// Messages that drive the application
#[derive(Debug, Clone)]
pub enum Message {
    // User intents
    LanguageSelected(LanguageId),
    ColorToggled(ColorId),
    FrequencyChanged(f64),
    ToggleRun,

    // Cycle timer, tagged with the schedule generation
    Tick(u64),

    // Window
    CloseRequested(iced::window::Id),
}
