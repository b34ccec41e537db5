use rand::SeedableRng;
use rand::rngs::SmallRng;
use rand::seq::IndexedRandom;
use rand::Rng;
use serde::{Deserialize, Serialize};
use std::path::PathBuf;

/// Chance that the pet answers with a picture instead of words.
const EMOJI_CHANCE: f64 = 0.3;

/// What the pet says back.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub enum Reply {
    Text(String),
    /// Path of an emoji image from the asset catalog.
    Emoji(PathBuf),
    /// Reaction to a discouraged word.
    Scold(String),
}

struct Category {
    keywords: &'static [&'static str],
    replies: &'static [&'static str],
}

const CATEGORIES: [Category; 5] = [
    Category {
        keywords: &["hello", "hi", "hey", "good morning"],
        replies: &[
            "Hello! I missed you!",
            "Mrrp! There you are!",
            "Oh, you're here! Best part of my day!",
        ],
    },
    Category {
        keywords: &["how are you", "feeling", "you ok", "how's it going"],
        replies: &[
            "I'm purring, so pretty great!",
            "All good here, especially now that you're around!",
            "Feeling playful. Want a round of the jewel game?",
        ],
    },
    Category {
        keywords: &["cute", "pretty", "love", "sweet"],
        replies: &[
            "Oh stop it, you're making me blush!",
            "You're the sweet one!",
            "Purr... compliments accepted, always.",
        ],
    },
    Category {
        keywords: &["bye", "goodbye", "good night", "see you"],
        replies: &[
            "Bye-bye! Come back soon!",
            "I'll be right here on your desktop!",
            "Good night, sweet dreams!",
        ],
    },
    Category {
        keywords: &["food", "hungry", "eat", "snack", "treat"],
        replies: &[
            "I could always go for a fish snack!",
            "Cookies! Do we have cookies?",
            "Already ate, but I'll keep you company!",
        ],
    },
];

const FALLBACK: &[&str] = &[
    "Interesting! Tell me more!",
    "Mrrp! I'm listening!",
    "Really? That's fascinating!",
    "I'm thinking about what you said...",
    "You always have the best stories!",
];

const SCOLDINGS: &[&str] = &[
    "Hey, that's not a nice thing to say!",
    "Mrrp! No grumpy words, please!",
    "I'll pretend I didn't hear that...",
    "Say that again and I'm hiding behind the taskbar!",
];

/// Words the pet grumbles about.
const DISCOURAGED: &[&str] = &["stupid", "dumb", "ugly", "shut up", "hate you"];

/// Words the host application reacts to on its own (the pet itself only
/// ever talks back).
const FORBIDDEN: &[&str] = &["idiot", "moron", "trash", "worthless", "loser"];

/// Canned-response chat partner. Keyword lookup plus a bit of randomness;
/// there is no model behind it.
#[derive(Clone, Debug)]
pub struct Responder {
    rng: SmallRng,
    emoji_chance: f64,
}

impl Responder {
    pub fn new() -> Self {
        Self {
            rng: SmallRng::from_os_rng(),
            emoji_chance: EMOJI_CHANCE,
        }
    }

    pub fn with_seed(seed: u64) -> Self {
        Self {
            rng: SmallRng::seed_from_u64(seed),
            emoji_chance: EMOJI_CHANCE,
        }
    }

    pub fn emoji_chance(mut self, chance: f64) -> Self {
        self.emoji_chance = chance.clamp(0.0, 1.0);
        self
    }

    /// Picks a reply for `message`. `emojis` is whatever the asset catalog
    /// currently offers; with none available the pet always answers in text.
    pub fn respond(&mut self, message: &str, emojis: &[PathBuf]) -> Reply {
        let lowered = message.to_lowercase();

        if contains_any(&lowered, DISCOURAGED) {
            return Reply::Scold(self.pick(SCOLDINGS));
        }

        if self.rng.random_bool(self.emoji_chance) {
            if let Some(emoji) = emojis.choose(&mut self.rng) {
                return Reply::Emoji(emoji.clone());
            }
        }

        for category in &CATEGORIES {
            if contains_any(&lowered, category.keywords) {
                return Reply::Text(self.pick(category.replies));
            }
        }

        Reply::Text(self.pick(FALLBACK))
    }

    fn pick(&mut self, pool: &[&str]) -> String {
        pool.choose(&mut self.rng)
            .map(|reply| (*reply).to_owned())
            .unwrap_or_default()
    }
}

impl Default for Responder {
    fn default() -> Self {
        Self::new()
    }
}

/// Whether the host should step in over this message. Separate from the
/// scolding path: the responder itself never blocks anyone.
pub fn is_forbidden(message: &str) -> bool {
    contains_any(&message.to_lowercase(), FORBIDDEN)
}

fn contains_any(lowered: &str, words: &[&str]) -> bool {
    words.iter().any(|word| lowered.contains(word))
}
