//! Opaque daily-token generation.
//!
//! Tokens are random identifiers, not signed credentials: validity comes
//! entirely from the row they are stored against, never from the string
//! itself. Nothing about the user or the date is recoverable from a token.

use rand::distr::Alphanumeric;
use rand::Rng;

/// Length of a generated token in characters.
///
/// 32 alphanumeric characters is ~190 bits of entropy, far beyond what
/// online guessing could enumerate within a token's one-day lifetime.
pub const TOKEN_LEN: usize = 32;

/// Generate a fresh opaque token for a daily QR code.
pub fn generate() -> String {
    rand::rng()
        .sample_iter(&Alphanumeric)
        .take(TOKEN_LEN)
        .map(char::from)
        .collect()
}
