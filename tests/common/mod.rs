pub mod mock_speech;

use colorflash::controller::FlashcardController;
use rand::rngs::StdRng;
use rand::SeedableRng;
use std::sync::Arc;

pub use mock_speech::{MockSpeech, SpeechEvent};

/// Controller with a recording speech output and a fixed seed
pub fn controller(seed: u64) -> (FlashcardController, Arc<MockSpeech>) {
    let speech = Arc::new(MockSpeech::new());
    let controller = FlashcardController::with_rng(speech.clone(), StdRng::seed_from_u64(seed));
    (controller, speech)
}
