//! Color and language catalogs
//!
//! Fixed lookup tables established at startup and borrowed for the whole
//! process lifetime.

use std::fmt;

/// An opaque RGB display color.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Rgb {
    pub r: u8,
    pub g: u8,
    pub b: u8,
}

impl Rgb {
    pub const fn new(r: u8, g: u8, b: u8) -> Self {
        Self { r, g, b }
    }
}

impl fmt::Display for Rgb {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "#{:02X}{:02X}{:02X}", self.r, self.g, self.b)
    }
}

/// Languages a color can be named and spoken in.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub enum LanguageId {
    #[default]
    French,
    English,
    Spanish,
}

#[derive(Debug)]
pub struct LanguageEntry {
    pub id: LanguageId,
    pub label: &'static str,
    /// BCP-47 locale tag handed to the speech engine
    pub locale: &'static str,
}

static LANGUAGES: [LanguageEntry; 3] = [
    LanguageEntry {
        id: LanguageId::French,
        label: "Français",
        locale: "fr-FR",
    },
    LanguageEntry {
        id: LanguageId::English,
        label: "English",
        locale: "en-US",
    },
    LanguageEntry {
        id: LanguageId::Spanish,
        label: "Español",
        locale: "es-ES",
    },
];

impl LanguageId {
    pub const ALL: [LanguageId; 3] = [LanguageId::French, LanguageId::English, LanguageId::Spanish];

    pub fn entry(self) -> &'static LanguageEntry {
        &LANGUAGES[self as usize]
    }

    pub fn label(self) -> &'static str {
        self.entry().label
    }

    pub fn locale(self) -> &'static str {
        self.entry().locale
    }

    /// Language part of the locale tag (`fr` for `fr-FR`)
    pub fn primary_subtag(self) -> &'static str {
        let locale = self.locale();
        locale.split('-').next().unwrap_or(locale)
    }
}

/// The five colors of the deck, in catalog order.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub enum ColorId {
    Red,
    Purple,
    Blue,
    Green,
    Black,
}

#[derive(Debug)]
pub struct ColorEntry {
    pub id: ColorId,
    /// Display names indexed by `LanguageId`
    names: [&'static str; 3],
    pub code: Rgb,
}

impl ColorEntry {
    pub fn name(&self, language: LanguageId) -> &'static str {
        self.names[language as usize]
    }
}

static COLORS: [ColorEntry; 5] = [
    ColorEntry {
        id: ColorId::Red,
        names: ["rouge", "red", "rojo"],
        code: Rgb::new(0xFF, 0x00, 0x00),
    },
    ColorEntry {
        id: ColorId::Purple,
        names: ["mauve", "purple", "morado"],
        code: Rgb::new(0x8A, 0x4F, 0xFF),
    },
    ColorEntry {
        id: ColorId::Blue,
        names: ["bleu", "blue", "azul"],
        code: Rgb::new(0x00, 0x00, 0xFF),
    },
    ColorEntry {
        id: ColorId::Green,
        names: ["vert", "green", "verde"],
        code: Rgb::new(0x00, 0xFF, 0x00),
    },
    ColorEntry {
        id: ColorId::Black,
        names: ["noir", "black", "negro"],
        code: Rgb::new(0x00, 0x00, 0x00),
    },
];

impl ColorId {
    pub const COUNT: usize = 5;

    pub const ALL: [ColorId; ColorId::COUNT] = [
        ColorId::Red,
        ColorId::Purple,
        ColorId::Blue,
        ColorId::Green,
        ColorId::Black,
    ];

    pub fn index(self) -> usize {
        self as usize
    }

    pub fn entry(self) -> &'static ColorEntry {
        &COLORS[self.index()]
    }

    pub fn name(self, language: LanguageId) -> &'static str {
        self.entry().name(language)
    }

    pub fn code(self) -> Rgb {
        self.entry().code
    }
}
