use iced::widget::{button, column, container, slider, text};
use iced::{font, Color, Element, Font, Length};

use crate::gui::panels::choice;
use crate::gui::Message;
use crate::session::{SessionState, MAX_FREQUENCY_SECS, MIN_FREQUENCY_SECS};

pub fn view(state: &SessionState) -> Element<'static, Message> {
    let label = text(format!("Fréquence : {:.1}s", state.frequency_secs())).color(Color::WHITE);

    // The controller drops changes while running
    let frequency = slider(
        MIN_FREQUENCY_SECS..=MAX_FREQUENCY_SECS,
        state.frequency_secs(),
        Message::FrequencyChanged,
    )
    .step(0.1);

    let caption = if state.is_running() {
        "Arrêter"
    } else {
        "Démarrer"
    };
    let run = button(
        container(text(caption).font(Font {
            weight: font::Weight::Bold,
            ..Font::DEFAULT
        }))
        .center_x(Length::Fill),
    )
    .width(Length::Fill)
    .padding(12)
    .style(choice(true))
    .on_press_maybe(state.any_active().then_some(Message::ToggleRun));

    column![label, frequency, run].spacing(12).into()
}
