use anyhow::Result;
use rand::Rng;
use std::fmt;

use super::store::SessionStore;

const PREFIX: &str = "sess_";
const SUFFIX_LEN: usize = 9;
const ALPHABET: &[u8] = b"0123456789abcdefghijklmnopqrstuvwxyz";

/// Opaque token correlating this client's messages and feedback with one
/// conversation on the backend.
///
/// Always non-empty.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct SessionId(String);

impl SessionId {
    /// Wraps a stored value, rejecting blank input.
    pub fn parse(value: &str) -> Option<Self> {
        let value = value.trim();
        if value.is_empty() {
            None
        } else {
            Some(Self(value.to_string()))
        }
    }

    /// Synthesizes a fresh identifier: `sess_` plus nine base-36 characters.
    ///
    /// Unique enough per client; not suitable as a secret.
    pub fn generate() -> Self {
        let mut rng = rand::thread_rng();
        let suffix: String = (0..SUFFIX_LEN)
            .map(|_| char::from(ALPHABET[rng.gen_range(0..ALPHABET.len())]))
            .collect();
        Self(format!("{PREFIX}{suffix}"))
    }

    /// Returns the stored identifier, or generates and persists a new one.
    ///
    /// The store is read exactly once. A new identifier is written before
    /// this returns, so no request can go out with an unsaved id.
    pub fn load_or_create(store: &dyn SessionStore) -> Result<Self> {
        if let Some(existing) = store.load()?.as_deref().and_then(Self::parse) {
            tracing::debug!(session_id = %existing, "reusing stored session");
            return Ok(existing);
        }

        let fresh = Self::generate();
        store.save(fresh.as_str())?;
        tracing::info!(session_id = %fresh, "created new session");
        Ok(fresh)
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl fmt::Display for SessionId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

impl AsRef<str> for SessionId {
    fn as_ref(&self) -> &str {
        &self.0
    }
}
