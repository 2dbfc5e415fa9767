//! Sections of the flashcard panel, plus the shared styles

use iced::widget::{button, container};
use iced::{Background, Border, Color, Theme};

use crate::catalog::Rgb;

pub mod card;
pub mod colors;
pub mod controls;
pub mod languages;

const TRANSLUCENT: Color = Color {
    r: 1.0,
    g: 1.0,
    b: 1.0,
    a: 0.2,
};

pub fn to_color(rgb: Rgb) -> Color {
    Color::from_rgb8(rgb.r, rgb.g, rgb.b)
}

/// Frosted panel over the color swatch
pub fn glass(_theme: &Theme) -> container::Style {
    container::Style {
        background: Some(Background::Color(Color::from_rgba(1.0, 1.0, 1.0, 0.4))),
        border: Border {
            radius: 12.0.into(),
            ..Border::default()
        },
        ..container::Style::default()
    }
}

/// Solid color block, used for the stripe on each color toggle
pub fn swatch(color: Color) -> impl Fn(&Theme) -> container::Style {
    move |_theme: &Theme| container::Style {
        background: Some(Background::Color(color)),
        ..container::Style::default()
    }
}

/// White when selected, translucent otherwise
pub fn choice(selected: bool) -> impl Fn(&Theme, button::Status) -> button::Style {
    move |_theme: &Theme, status: button::Status| {
        let (background, text_color) = if selected {
            (Color::WHITE, Color::BLACK)
        } else {
            (TRANSLUCENT, Color::WHITE)
        };

        let background = match status {
            button::Status::Hovered if !selected => Color::from_rgba(1.0, 1.0, 1.0, 0.3),
            button::Status::Disabled => Color {
                a: background.a * 0.6,
                ..background
            },
            _ => background,
        };

        button::Style {
            background: Some(Background::Color(background)),
            text_color,
            border: Border {
                radius: 6.0.into(),
                ..Border::default()
            },
            ..button::Style::default()
        }
    }
}
