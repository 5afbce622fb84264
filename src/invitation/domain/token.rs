//! Opaque invitation token.

use rand::RngCore;
use rand::rngs::OsRng;
use serde::{Deserialize, Serialize};

/// Number of random bytes backing a generated token (256 bits of entropy).
const TOKEN_BYTES: usize = 32;

/// Unguessable, unique credential authorising one invitation acceptance.
///
/// Generated tokens are 64 lowercase hex characters drawn from the
/// operating-system RNG. Uniqueness across all invitations is an invariant:
/// the repository rejects a colliding insert rather than overwrite, and a
/// collision in practice indicates a broken entropy source.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(transparent)]
pub struct InvitationToken(String);

impl InvitationToken {
    /// Generates a fresh random token.
    #[must_use]
    pub fn generate() -> Self {
        let mut bytes = [0_u8; TOKEN_BYTES];
        OsRng.fill_bytes(&mut bytes);
        let encoded = bytes.iter().map(|byte| format!("{byte:02x}")).collect();
        Self(encoded)
    }

    /// Wraps a token value loaded from storage or a redemption request.
    #[must_use]
    pub fn from_value(value: impl Into<String>) -> Self {
        Self(value.into())
    }

    /// Returns the token as `str`.
    #[must_use]
    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl AsRef<str> for InvitationToken {
    fn as_ref(&self) -> &str {
        self.as_str()
    }
}
