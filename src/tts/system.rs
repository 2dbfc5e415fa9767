//! System TTS engine driving speech-dispatcher or espeak-ng

use super::TtsEngine;
use anyhow::Result;
use async_trait::async_trait;
use std::sync::atomic::{AtomicBool, Ordering};
use std::sync::Mutex;
use tokio::process::{Child, Command};
use tracing::debug;

#[derive(Debug)]
pub struct SystemEngine {
    /// speech-dispatcher client, takes `-l <lang>`
    dispatcher_cmd: String,
    /// espeak-ng compatible fallback, takes `-v <lang>`
    fallback_cmd: String,
    /// Process of the last utterance
    child: Mutex<Option<Child>>,
    /// Last utterance went through speech-dispatcher
    dispatcher: AtomicBool,
}

impl Default for SystemEngine {
    fn default() -> Self {
        Self::new()
    }
}

impl SystemEngine {
    pub fn new() -> Self {
        Self::with_commands("spd-say", "espeak-ng")
    }

    pub fn with_commands(dispatcher_cmd: &str, fallback_cmd: &str) -> Self {
        Self {
            dispatcher_cmd: dispatcher_cmd.to_string(),
            fallback_cmd: fallback_cmd.to_string(),
            child: Mutex::new(None),
            dispatcher: AtomicBool::new(false),
        }
    }

    /// Spawn and record the child with no await in between, so an aborted
    /// speak task can never leave an untracked process behind.
    fn launch(&self, program: &str, lang_flag: &str, lang: &str, text: &str) -> bool {
        let spawned = Command::new(program)
            .arg(lang_flag)
            .arg(lang)
            .arg(text)
            .kill_on_drop(true)
            .spawn();

        match spawned {
            Ok(child) => {
                if let Ok(mut slot) = self.child.lock() {
                    *slot = Some(child);
                }
                true
            }
            Err(e) => {
                debug!("{} unavailable: {}", program, e);
                false
            }
        }
    }

    fn has_child(&self) -> bool {
        self.child.lock().map(|slot| slot.is_some()).unwrap_or(false)
    }
}

/// `fr-FR` -> `fr`
fn language_code(locale: &str) -> &str {
    locale.split('-').next().unwrap_or(locale)
}

#[async_trait]
impl TtsEngine for SystemEngine {
    async fn speak(&self, text: &str, locale: &str) -> Result<()> {
        let lang = language_code(locale);
        debug!("System speaking: {} ({})", text, lang);

        if self.launch(&self.dispatcher_cmd, "-l", lang, text) {
            self.dispatcher.store(true, Ordering::SeqCst);
            return Ok(());
        }

        if self.launch(&self.fallback_cmd, "-v", lang, text) {
            self.dispatcher.store(false, Ordering::SeqCst);
            return Ok(());
        }

        Err(anyhow::anyhow!(
            "No system TTS command found (tried {}, {})",
            self.dispatcher_cmd,
            self.fallback_cmd
        ))
    }

    async fn cancel(&self) -> Result<()> {
        let child = self.child.lock().ok().and_then(|mut slot| slot.take());
        if let Some(mut child) = child {
            // Already exited is fine
            let _ = child.start_kill();
            let _ = child.wait().await;
        }

        if self.dispatcher.swap(false, Ordering::SeqCst) {
            Command::new(&self.dispatcher_cmd).arg("-C").status().await?;
        }
        Ok(())
    }

    fn name(&self) -> &str {
        "system"
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_language_code() {
        assert_eq!(language_code("fr-FR"), "fr");
        assert_eq!(language_code("es"), "es");
    }

    #[tokio::test]
    async fn test_cancel_without_utterance() {
        let engine = SystemEngine::new();
        assert!(engine.cancel().await.is_ok());
    }

    #[tokio::test]
    async fn test_child_recorded_when_speak_returns() {
        // `sh -v fr rouge` starts and exits on its own
        let engine = SystemEngine::with_commands("colorflash-no-such-tts", "sh");
        engine.speak("rouge", "fr-FR").await.unwrap();
        assert!(engine.has_child());

        engine.cancel().await.unwrap();
        assert!(!engine.has_child());
    }

    #[tokio::test]
    async fn test_no_backend_is_an_error() {
        let engine =
            SystemEngine::with_commands("colorflash-no-such-tts", "colorflash-no-such-espeak");
        assert!(engine.speak("vert", "fr-FR").await.is_err());
        assert!(!engine.has_child());
    }
}
