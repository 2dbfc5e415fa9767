use iced::widget::{container, text};
use iced::{font, Color, Element, Font, Length};

use crate::gui::Message;
use crate::session::SessionState;

pub fn view(state: &SessionState) -> Element<'static, Message> {
    let title = text(state.current_name().to_uppercase())
        .size(40)
        .color(Color::WHITE)
        .font(Font {
            weight: font::Weight::Bold,
            ..Font::DEFAULT
        });

    container(title).center_x(Length::Fill).into()
}
