use rand::Rng;
use rand::SeedableRng;
use rand::rngs::SmallRng;
use rand::seq::IndexedRandom;
use serde::{Deserialize, Serialize};
use std::path::PathBuf;

/// Chance that a popup timer tick actually shows something.
const SHOW_CHANCE: f64 = 0.3;
/// Chance that a shown popup is a meme instead of a text line.
const MEME_CHANCE: f64 = 0.3;

#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub enum PopupContent {
    Text(String),
    Meme(PathBuf),
}

/// Decides, per popup timer tick, whether the pet pipes up and with what.
#[derive(Clone, Debug)]
pub struct PopupPicker {
    rng: SmallRng,
    messages: Vec<String>,
    show_chance: f64,
    meme_chance: f64,
}

impl PopupPicker {
    pub fn new(messages: Vec<String>) -> Self {
        Self::with_rng(messages, SmallRng::from_os_rng())
    }

    pub fn with_seed(messages: Vec<String>, seed: u64) -> Self {
        Self::with_rng(messages, SmallRng::seed_from_u64(seed))
    }

    fn with_rng(messages: Vec<String>, rng: SmallRng) -> Self {
        let messages = if messages.is_empty() {
            log::debug!("empty popup pool, using the built-in lines");
            default_messages()
        } else {
            messages
        };
        Self {
            rng,
            messages,
            show_chance: SHOW_CHANCE,
            meme_chance: MEME_CHANCE,
        }
    }

    pub fn chances(mut self, show: f64, meme: f64) -> Self {
        self.show_chance = show.clamp(0.0, 1.0);
        self.meme_chance = meme.clamp(0.0, 1.0);
        self
    }

    /// One popup timer tick. Nothing is shown while the pet is being
    /// dragged or otherwise paused.
    pub fn should_show(&mut self, paused: bool) -> bool {
        !paused && self.rng.random_bool(self.show_chance)
    }

    /// Picks what to display; memes only when some are available.
    pub fn pick(&mut self, memes: &[PathBuf]) -> PopupContent {
        if self.rng.random_bool(self.meme_chance) {
            if let Some(meme) = memes.choose(&mut self.rng) {
                return PopupContent::Meme(meme.clone());
            }
        }

        let line = self
            .messages
            .choose(&mut self.rng)
            .cloned()
            .unwrap_or_default();
        PopupContent::Text(line)
    }
}

/// Built-in popup lines shipped with the pet.
pub fn default_messages() -> Vec<String> {
    [
        "Hi! How are you doing?",
        "Mrrp! I'm right here!",
        "Want to play with me?",
        "I know a secret...",
        "You're the best!",
        "Purr... I'm bored!",
        "What are we doing today?",
        "I could use some attention!",
    ]
    .map(String::from)
    .to_vec()
}
