//! Session token storage shared by the API and routing layers.
//!
//! Two slots mirror the two browser storage locations the console uses:
//! a persistent one that survives restarts of the UI and a
//! session-scoped one that does not. All readers go through [`token`],
//! which prefers the persistent slot.
//!
//! [`token`]: SessionTokens::token

use parking_lot::RwLock;

/// Shared authentication state for one console session.
///
/// Holding a token means "treat as authenticated"; no validity or expiry
/// check happens on the client, the backend rejects unauthorized
/// requests independently.
#[derive(Debug, Default)]
pub struct SessionTokens {
    persistent: RwLock<Option<String>>,
    session: RwLock<Option<String>>,
}

impl SessionTokens {
    pub fn new() -> Self {
        Self::default()
    }

    /// The current token, persistent slot preferred.
    pub fn token(&self) -> Option<String> {
        self.persistent
            .read()
            .clone()
            .or_else(|| self.session.read().clone())
    }

    pub fn is_authenticated(&self) -> bool {
        self.token().is_some()
    }

    /// Store a token that should survive console restarts.
    pub fn store_persistent(&self, token: String) {
        *self.persistent.write() = Some(token);
    }

    /// Store a token for this session only.
    pub fn store_session(&self, token: String) {
        *self.session.write() = Some(token);
    }

    /// Clear both slots (logout).
    pub fn clear(&self) {
        *self.persistent.write() = None;
        *self.session.write() = None;
    }
}
