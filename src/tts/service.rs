//! Fire-and-forget speech service
//!
//! Commands are queued to a dedicated worker thread with its own tokio
//! runtime, so callers never block and never need a runtime of their own.
//! If the engine cannot be created, every command is silently dropped.

use super::{create_engine, SpeechOutput, TtsEngine};
use crate::config::Config;
use crate::error::FlashResult;
use std::future::Future;
use std::sync::Arc;
use tokio::sync::mpsc;
use tokio::task::JoinHandle;
use tracing::{debug, info, warn};

#[derive(Debug)]
enum SpeechCommand {
    Speak { text: String, locale: String },
    Cancel,
}

#[derive(Debug, Clone)]
pub struct SpeechService {
    tx: Option<mpsc::UnboundedSender<SpeechCommand>>,
}

impl SpeechService {
    /// Start the engine named in `config` on a background worker
    pub fn start(config: &Config) -> Self {
        if config.tts_engine == "none" {
            info!("🔇 Speech output disabled");
            return Self::muted();
        }
        let config = config.clone();
        Self::spawn_worker(move || async move { create_engine(&config).await })
    }

    /// Drive an already constructed engine
    pub fn with_engine(engine: Arc<dyn TtsEngine>) -> Self {
        Self::spawn_worker(move || async move { Ok(engine) })
    }

    /// A service that never speaks
    pub fn muted() -> Self {
        Self { tx: None }
    }

    pub fn is_muted(&self) -> bool {
        self.tx.is_none()
    }

    fn spawn_worker<F, Fut>(make_engine: F) -> Self
    where
        F: FnOnce() -> Fut + Send + 'static,
        Fut: Future<Output = FlashResult<Arc<dyn TtsEngine>>> + 'static,
    {
        let (tx, rx) = mpsc::unbounded_channel();
        let spawned = std::thread::Builder::new()
            .name("colorflash-speech".to_string())
            .spawn(move || run_worker(make_engine, rx));

        match spawned {
            Ok(_) => Self { tx: Some(tx) },
            Err(e) => {
                warn!("⚠️ Could not start speech worker: {}", e);
                Self::muted()
            }
        }
    }

    fn send(&self, command: SpeechCommand) {
        if let Some(tx) = &self.tx {
            if tx.send(command).is_err() {
                debug!("Speech worker gone, dropping command");
            }
        }
    }
}

impl SpeechOutput for SpeechService {
    fn speak(&self, text: &str, locale: &str) {
        self.send(SpeechCommand::Speak {
            text: text.to_string(),
            locale: locale.to_string(),
        });
    }

    fn cancel(&self) {
        self.send(SpeechCommand::Cancel);
    }
}

fn run_worker<F, Fut>(make_engine: F, mut rx: mpsc::UnboundedReceiver<SpeechCommand>)
where
    F: FnOnce() -> Fut,
    Fut: Future<Output = FlashResult<Arc<dyn TtsEngine>>>,
{
    let runtime = match tokio::runtime::Builder::new_current_thread()
        .enable_all()
        .build()
    {
        Ok(runtime) => runtime,
        Err(e) => {
            warn!("⚠️ Speech worker runtime failed: {}", e);
            return;
        }
    };

    runtime.block_on(async move {
        let engine = match make_engine().await {
            Ok(engine) => engine,
            Err(e) => {
                warn!("⚠️ Speech unavailable, continuing silently: {}", e);
                // Drain so senders never notice
                while rx.recv().await.is_some() {}
                return;
            }
        };

        let mut in_flight: Option<JoinHandle<()>> = None;
        while let Some(command) = rx.recv().await {
            if let Some(handle) = in_flight.take() {
                handle.abort();
            }
            if let Err(e) = engine.cancel().await {
                debug!("TTS cancel failed: {}", e);
            }

            if let SpeechCommand::Speak { text, locale } = command {
                let engine = engine.clone();
                in_flight = Some(tokio::spawn(async move {
                    if let Err(e) = engine.speak(&text, &locale).await {
                        warn!("⚠️ TTS failed for '{}': {}", text, e);
                    }
                }));
            }
        }
        debug!("Speech worker stopped");
    });
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::error::FlashError;
    use anyhow::Result;
    use async_trait::async_trait;
    use std::sync::mpsc as std_mpsc;
    use std::sync::Mutex;
    use std::time::Duration;

    #[derive(Debug, PartialEq)]
    enum Event {
        Speak(String, String),
        Cancel,
    }

    #[derive(Debug)]
    struct RecordingEngine {
        events: Mutex<std_mpsc::Sender<Event>>,
    }

    #[async_trait]
    impl TtsEngine for RecordingEngine {
        async fn speak(&self, text: &str, locale: &str) -> Result<()> {
            let _ = self
                .events
                .lock()
                .unwrap()
                .send(Event::Speak(text.to_string(), locale.to_string()));
            Ok(())
        }

        async fn cancel(&self) -> Result<()> {
            let _ = self.events.lock().unwrap().send(Event::Cancel);
            Ok(())
        }

        fn name(&self) -> &str {
            "recording"
        }
    }

    fn recording_service() -> (SpeechService, std_mpsc::Receiver<Event>) {
        let (tx, rx) = std_mpsc::channel();
        let engine = Arc::new(RecordingEngine {
            events: Mutex::new(tx),
        });
        (SpeechService::with_engine(engine), rx)
    }

    #[test]
    fn test_speak_cancels_first() {
        let (service, events) = recording_service();
        service.speak("rouge", "fr-FR");

        let timeout = Duration::from_secs(2);
        assert_eq!(events.recv_timeout(timeout).unwrap(), Event::Cancel);
        assert_eq!(
            events.recv_timeout(timeout).unwrap(),
            Event::Speak("rouge".to_string(), "fr-FR".to_string())
        );
    }

    #[test]
    fn test_cancel_reaches_engine() {
        let (service, events) = recording_service();
        service.cancel();
        assert_eq!(
            events.recv_timeout(Duration::from_secs(2)).unwrap(),
            Event::Cancel
        );
    }

    #[test]
    fn test_muted_service_is_silent() {
        let service = SpeechService::muted();
        assert!(service.is_muted());
        service.speak("azul", "es-ES");
        service.cancel();
    }

    #[test]
    fn test_failed_engine_degrades_to_noop() {
        let service = SpeechService::spawn_worker(|| async {
            Err::<Arc<dyn TtsEngine>, _>(FlashError::Tts("no voice".to_string()))
        });
        assert!(!service.is_muted());

        // Let engine creation fail before sending anything
        std::thread::sleep(Duration::from_millis(100));
        for _ in 0..10 {
            service.speak("vert", "fr-FR");
            service.cancel();
        }
        std::thread::sleep(Duration::from_millis(100));

        // Worker is still draining, so the channel stays open
        let tx = service.tx.as_ref().unwrap();
        assert!(!tx.is_closed());
        service.speak("noir", "fr-FR");
        assert!(!tx.is_closed());
    }
}
