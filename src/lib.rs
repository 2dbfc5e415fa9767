//! ColorFlash Library
//!
//! Spoken color flashcards: a color swatch, its name read aloud in the chosen
//! language, and a new random color at a configurable interval.

pub mod catalog;
pub mod config;
pub mod controller;
pub mod error;
pub mod gui;
pub mod scheduler;
pub mod session;
pub mod tts;
