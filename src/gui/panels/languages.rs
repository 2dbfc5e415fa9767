use iced::widget::{button, container, text, Row};
use iced::{Element, Length};

use crate::catalog::LanguageId;
use crate::gui::panels::choice;
use crate::gui::Message;
use crate::session::SessionState;

pub fn view(state: &SessionState) -> Element<'static, Message> {
    let buttons = LanguageId::ALL.into_iter().map(|language| -> Element<'static, Message> {
        let selected = state.selected_language() == language;
        button(container(text(language.label())).center_x(Length::Fill))
            .width(Length::Fill)
            .padding(8)
            .style(choice(selected))
            .on_press(Message::LanguageSelected(language))
            .into()
    });

    Row::with_children(buttons).spacing(8).into()
}
