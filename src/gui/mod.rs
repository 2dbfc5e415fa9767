//! GUI module using iced
//!
//! Single flashcard screen: the window is painted with the current color and
//! a panel holds the language, color, frequency and run controls.

use futures::StreamExt;
use iced::widget::{column, container};
use iced::{window, Background, Element, Length, Subscription, Task};
use tracing::info;

use crate::scheduler;

// Sub-modules
pub mod app;
pub mod messages;
pub mod panels;

// Re-exports for convenience
pub use app::FlashcardApp;
pub use messages::Message;

impl FlashcardApp {
    pub fn update(&mut self, message: Message) -> Task<Message> {
        match message {
            Message::LanguageSelected(language) => {
                self.controller.select_language(language);
            }
            Message::ColorToggled(color) => {
                self.controller.toggle_color_active(color);
            }
            Message::FrequencyChanged(seconds) => {
                self.controller.set_frequency(seconds);
            }
            Message::ToggleRun => {
                self.controller.toggle_run();
            }
            Message::Tick(generation) => {
                self.controller.on_tick(generation);
            }
            Message::CloseRequested(id) => {
                info!("👋 Closing");
                self.controller.shutdown();
                return window::close(id);
            }
        }
        Task::none()
    }

    pub fn subscription(&self) -> Subscription<Message> {
        let mut subscriptions = vec![window::close_requests().map(Message::CloseRequested)];

        // Keyed by generation: a re-armed schedule replaces the old stream
        if let Some(schedule) = self.controller.schedule() {
            subscriptions.push(Subscription::run_with_id(
                schedule.generation,
                scheduler::ticks(schedule).map(Message::Tick),
            ));
        }

        Subscription::batch(subscriptions)
    }

    pub fn view(&self) -> Element<'_, Message> {
        let state = self.controller.state();
        let background = panels::to_color(state.current_color().code());

        let panel = column![
            panels::card::view(state),
            panels::languages::view(state),
            panels::colors::view(state),
            panels::controls::view(state),
        ]
        .spacing(24);

        let panel = container(panel)
            .padding(32)
            .max_width(448.0)
            .style(panels::glass);

        container(panel)
            .width(Length::Fill)
            .height(Length::Fill)
            .padding(16)
            .center_x(Length::Fill)
            .center_y(Length::Fill)
            .style(move |_theme: &iced::Theme| container::Style {
                background: Some(Background::Color(background)),
                ..container::Style::default()
            })
            .into()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::catalog::{ColorId, LanguageId};
    use crate::tts::SpeechOutput;
    use std::sync::Arc;

    #[derive(Debug)]
    struct SilentSpeech;

    impl SpeechOutput for SilentSpeech {
        fn speak(&self, _text: &str, _locale: &str) {}
        fn cancel(&self) {}
    }

    fn app() -> FlashcardApp {
        FlashcardApp::new(Arc::new(SilentSpeech)).0
    }

    #[test]
    fn test_run_toggles_through_messages() {
        let mut app = app();
        let _ = app.update(Message::ToggleRun);
        assert!(app.controller().state().is_running());
        assert!(app.controller().schedule().is_some());

        let _ = app.update(Message::ToggleRun);
        assert!(!app.controller().state().is_running());
        assert!(app.controller().schedule().is_none());
    }

    #[test]
    fn test_controls_locked_while_running() {
        let mut app = app();
        let _ = app.update(Message::ToggleRun);
        let _ = app.update(Message::ColorToggled(ColorId::Blue));
        let _ = app.update(Message::FrequencyChanged(4.0));

        let state = app.controller().state();
        assert!(state.is_active(ColorId::Blue));
        assert_eq!(state.frequency_secs(), 2.0);
    }

    #[test]
    fn test_title_tracks_language() {
        let mut app = app();
        assert_eq!(app.title(), "ColorFlash - rouge");
        let _ = app.update(Message::LanguageSelected(LanguageId::Spanish));
        assert_eq!(app.title(), "ColorFlash - rojo");
    }
}
