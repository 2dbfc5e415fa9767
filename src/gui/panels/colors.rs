use iced::alignment::Vertical;
use iced::widget::{button, column, container, row, text, Column, Row, Space};
use iced::{font, Color, Element, Font, Length};

use crate::catalog::ColorId;
use crate::gui::panels::{choice, swatch, to_color};
use crate::gui::Message;
use crate::session::SessionState;

pub fn view(state: &SessionState) -> Element<'static, Message> {
    let heading = text("Couleurs actives :").color(Color::WHITE).font(Font {
        weight: font::Weight::Bold,
        ..Font::DEFAULT
    });

    // Two per row
    let colors = ColorId::ALL;
    let grid = colors.chunks(2).map(|pair| -> Element<'static, Message> {
        let mut line = Row::new().spacing(8);
        for color in pair {
            line = line.push(color_button(state, *color));
        }
        if pair.len() < 2 {
            line = line.push(Space::with_width(Length::Fill));
        }
        line.into()
    });

    column![heading, Column::with_children(grid).spacing(8)]
        .spacing(8)
        .into()
}

fn color_button(state: &SessionState, color: ColorId) -> Element<'static, Message> {
    let stripe = container(Space::new(Length::Fixed(4.0), Length::Fixed(20.0)))
        .style(swatch(to_color(color.code())));
    let label = row![stripe, text(color.name(state.selected_language()))]
        .spacing(8)
        .align_y(Vertical::Center);

    // Locked while a run is in progress
    let toggle = (!state.is_running()).then_some(Message::ColorToggled(color));

    button(label)
        .width(Length::Fill)
        .padding(8)
        .style(choice(state.is_active(color)))
        .on_press_maybe(toggle)
        .into()
}
