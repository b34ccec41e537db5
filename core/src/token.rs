use rand::Rng;
use serde::{Deserialize, Serialize};

/// A token occupying one grid cell. Tokens carry no identity beyond their
/// kind, an index into the palette `[0, kinds)`.
#[derive(Copy, Clone, Debug, PartialEq, Eq, PartialOrd, Ord, Serialize, Deserialize)]
pub struct Token(u8);

impl Token {
    pub const fn new(kind: u8) -> Self {
        Self(kind)
    }

    pub const fn kind(self) -> u8 {
        self.0
    }

    /// Uniform draw from the palette.
    pub(crate) fn random<R: Rng + ?Sized>(kinds: u8, rng: &mut R) -> Self {
        Self(rng.random_range(0..kinds))
    }
}
