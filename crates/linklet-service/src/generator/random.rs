use crate::generator::CodeGenerator;
use linklet_core::shortcode::{ALPHABET, MAX_LENGTH};
use linklet_core::ShortCode;
use rand::Rng;

/// Default length of generated codes. 62^7 candidate codes keeps the
/// collision rate negligible at billions of stored links.
pub const DEFAULT_CODE_LENGTH: usize = 7;

/// Generates fixed-length base62 codes from the thread-local CSPRNG.
///
/// Codes are random draws rather than a counter so that existing links
/// cannot be enumerated by walking the code space.
#[derive(Debug, Clone)]
pub struct RandomGenerator {
    length: usize,
}

impl RandomGenerator {
    /// Creates a generator producing codes of the default length.
    pub fn new() -> Self {
        Self::with_length(DEFAULT_CODE_LENGTH)
    }

    /// Creates a generator producing codes of a custom length.
    ///
    /// The length is clamped to the bounds `ShortCode::parse` accepts;
    /// an out-of-range length would emit codes no lookup can ever match.
    pub fn with_length(length: usize) -> Self {
        Self {
            length: length.clamp(1, MAX_LENGTH),
        }
    }
}

impl Default for RandomGenerator {
    fn default() -> Self {
        Self::new()
    }
}

impl CodeGenerator for RandomGenerator {
    fn generate(&self) -> ShortCode {
        let mut rng = rand::rng();
        let code: String = (0..self.length)
            .map(|_| ALPHABET[rng.random_range(0..ALPHABET.len())] as char)
            .collect();
        ShortCode::new_unchecked(code)
    }
}
