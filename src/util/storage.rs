#[cfg(test)]
#[path = "storage_test.rs"]
mod storage_test;

use std::collections::HashMap;

const TOKEN_KEY: &str = "token";
const USERNAME_KEY: &str = "username";
const USER_ID_KEY: &str = "userId";

/// Persisted session fields. Exists only as a complete set — a partial
/// store reads back as nothing at all.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct StoredSession {
    pub token: String,
    pub username: String,
    pub user_id: u32,
}

/// Durable key/value persistence for session credentials.
///
/// Implementations do no validation and make no network calls. The session
/// controller is the only writer.
pub trait SessionStore {
    fn save(&mut self, session: &StoredSession);
    fn load(&self) -> Option<StoredSession>;
    fn clear(&mut self);
}

/// Assemble a [`StoredSession`] from raw key values. Yields `None` unless
/// all three fields are present and the user id parses as an integer.
fn assemble(
    token: Option<String>,
    username: Option<String>,
    user_id: Option<String>,
) -> Option<StoredSession> {
    let token = token?;
    let username = username?;
    let user_id = user_id?.parse().ok()?;
    Some(StoredSession {
        token,
        username,
        user_id,
    })
}

/// [`SessionStore`] backed by browser localStorage, surviving page reloads.
/// Inert outside a browser environment: writes are dropped, reads are empty.
#[derive(Clone, Copy, Debug, Default)]
pub struct LocalSessionStore;

#[cfg(feature = "hydrate")]
fn local_storage() -> Option<web_sys::Storage> {
    web_sys::window().and_then(|w| w.local_storage().ok().flatten())
}

impl SessionStore for LocalSessionStore {
    fn save(&mut self, session: &StoredSession) {
        #[cfg(feature = "hydrate")]
        if let Some(storage) = local_storage() {
            let _ = storage.set_item(TOKEN_KEY, &session.token);
            let _ = storage.set_item(USERNAME_KEY, &session.username);
            let _ = storage.set_item(USER_ID_KEY, &session.user_id.to_string());
        }
        #[cfg(not(feature = "hydrate"))]
        {
            let _ = session;
        }
    }

    fn load(&self) -> Option<StoredSession> {
        #[cfg(feature = "hydrate")]
        {
            let storage = local_storage()?;
            let get = |key| storage.get_item(key).ok().flatten();
            assemble(get(TOKEN_KEY), get(USERNAME_KEY), get(USER_ID_KEY))
        }
        #[cfg(not(feature = "hydrate"))]
        {
            None
        }
    }

    fn clear(&mut self) {
        #[cfg(feature = "hydrate")]
        if let Some(storage) = local_storage() {
            let _ = storage.remove_item(TOKEN_KEY);
            let _ = storage.remove_item(USERNAME_KEY);
            let _ = storage.remove_item(USER_ID_KEY);
        }
    }
}

/// In-memory [`SessionStore`] for tests and non-browser builds. Keeps the
/// same three raw string entries localStorage would.
#[derive(Clone, Debug, Default)]
pub struct MemorySessionStore {
    entries: HashMap<String, String>,
}

impl MemorySessionStore {
    /// Seed a single raw entry, mimicking a value written out-of-band.
    pub fn set_raw(&mut self, key: &str, value: &str) {
        self.entries.insert(key.to_owned(), value.to_owned());
    }
}

impl SessionStore for MemorySessionStore {
    fn save(&mut self, session: &StoredSession) {
        self.entries
            .insert(TOKEN_KEY.to_owned(), session.token.clone());
        self.entries
            .insert(USERNAME_KEY.to_owned(), session.username.clone());
        self.entries
            .insert(USER_ID_KEY.to_owned(), session.user_id.to_string());
    }

    fn load(&self) -> Option<StoredSession> {
        let get = |key: &str| self.entries.get(key).cloned();
        assemble(get(TOKEN_KEY), get(USERNAME_KEY), get(USER_ID_KEY))
    }

    fn clear(&mut self) {
        self.entries.remove(TOKEN_KEY);
        self.entries.remove(USERNAME_KEY);
        self.entries.remove(USER_ID_KEY);
    }
}
