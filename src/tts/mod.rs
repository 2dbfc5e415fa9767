//! TTS (Text-to-Speech) Module
//!
//! Provides a unified interface for multiple TTS backends, and the
//! fire-and-forget service the controller talks to.

use crate::config::Config;
use crate::error::{FlashError, FlashResult};
use anyhow::Result;
use async_trait::async_trait;
use std::sync::Arc;
use tracing::{info, warn};

pub mod service;
pub mod system;

pub use service::SpeechService;

/// Trait for TTS engines
#[async_trait]
pub trait TtsEngine: Send + Sync + std::fmt::Debug {
    /// Speak the given text with the voice best matching `locale`
    async fn speak(&self, text: &str, locale: &str) -> Result<()>;

    /// Stop the current utterance, if any
    async fn cancel(&self) -> Result<()>;

    /// Get the engine name
    fn name(&self) -> &str;
}

/// One-way speech commands. Implementations must never fail or block.
pub trait SpeechOutput: Send + Sync + std::fmt::Debug {
    /// Cancel whatever is being spoken, then speak `text`
    fn speak(&self, text: &str, locale: &str);

    fn cancel(&self);
}

/// Factory to create the configured TTS engine
pub async fn create_engine(config: &Config) -> FlashResult<Arc<dyn TtsEngine>> {
    info!("🛠️ Creating TTS engine: {}", config.tts_engine);
    let engine: Arc<dyn TtsEngine> = match config.tts_engine.as_str() {
        "system" => {
            info!("  - Using System TTS");
            Arc::new(system::SystemEngine::new())
        }
        "speechd" | "speechd_ng" => {
            // spd-say talks to speech-dispatcher and honours the locale
            info!("  - Using speech-dispatcher through System TTS");
            Arc::new(system::SystemEngine::new())
        }
        "none" => {
            return Err(FlashError::Tts("speech output disabled".to_string()));
        }
        _ => {
            warn!(
                "  - Unknown engine '{}', falling back to System",
                config.tts_engine
            );
            Arc::new(system::SystemEngine::new())
        }
    };
    info!("✅ TTS engine '{}' initialized", engine.name());
    Ok(engine)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_unknown_engine_falls_back_to_system() {
        let config = Config {
            tts_engine: "festival".to_string(),
            ..Config::default()
        };
        let engine = tokio_test::block_on(create_engine(&config)).unwrap();
        assert_eq!(engine.name(), "system");
    }

    #[test]
    fn test_speechd_maps_to_system() {
        for name in ["speechd", "speechd_ng"] {
            let config = Config {
                tts_engine: name.to_string(),
                ..Config::default()
            };
            let engine = tokio_test::block_on(create_engine(&config)).unwrap();
            assert_eq!(engine.name(), "system");
        }
    }

    #[test]
    fn test_none_engine_is_an_error() {
        let config = Config {
            tts_engine: "none".to_string(),
            ..Config::default()
        };
        let result = tokio_test::block_on(create_engine(&config));
        assert!(matches!(result, Err(FlashError::Tts(_))));
    }
}
