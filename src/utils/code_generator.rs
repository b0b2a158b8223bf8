//! Short code generation.
//!
//! Random codes are 6 bytes of OS entropy encoded as URL-safe base64 without
//! padding, which yields exactly 8 characters (48 bits). At that size
//! collisions are rare but real, so callers must check every candidate against
//! the store and retry.

use base64::Engine as _;

/// Length of random bytes before base64 encoding.
const CODE_LENGTH_BYTES: usize = 6;

/// Length of a generated code in characters.
pub const CODE_LENGTH: usize = 8;

/// Source of candidate short codes.
pub trait CodeGenerator: Send + Sync {
    /// Produces a fresh candidate. Uniqueness is not guaranteed.
    fn generate(&self) -> String;
}

/// Generator backed by the system CSPRNG.
#[derive(Debug, Clone, Copy, Default)]
pub struct RandomCodeGenerator;

impl CodeGenerator for RandomCodeGenerator {
    fn generate(&self) -> String {
        generate_code()
    }
}

/// Generates a random 8-character URL-safe short code.
///
/// # Panics
///
/// Panics if the system random number generator fails (extremely rare).
pub fn generate_code() -> String {
    let mut buffer = [0u8; CODE_LENGTH_BYTES];

    getrandom::fill(&mut buffer).expect("Failed to generate random bytes");

    base64::engine::general_purpose::URL_SAFE_NO_PAD.encode(buffer)
}
