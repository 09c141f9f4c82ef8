#[cfg(test)]
#[path = "session_test.rs"]
mod session_test;

use crate::net::auth::{AuthApi, HttpAuthApi};
use crate::net::error::AuthError;
use crate::util::storage::{LocalSessionStore, SessionStore, StoredSession};

/// In-memory session for the current client instance.
///
/// Either every identity field is present (`authenticated == true`) or none
/// of them is — there is no partial session. `loading` is true only while
/// the startup validation sequence is still in flight.
///
/// Provided to components via context as `RwSignal<Session>`.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Session {
    pub token: Option<String>,
    pub username: Option<String>,
    pub user_id: Option<u32>,
    pub authenticated: bool,
    pub loading: bool,
}

impl Default for Session {
    /// Process start: identity unknown until the startup validation resolves.
    fn default() -> Self {
        Self {
            token: None,
            username: None,
            user_id: None,
            authenticated: false,
            loading: true,
        }
    }
}

impl Session {
    fn authenticated_from(stored: StoredSession) -> Self {
        Self {
            token: Some(stored.token),
            username: Some(stored.username),
            user_id: Some(stored.user_id),
            authenticated: true,
            loading: false,
        }
    }

    fn anonymous() -> Self {
        Self {
            token: None,
            username: None,
            user_id: None,
            authenticated: false,
            loading: false,
        }
    }
}

/// Owns the in-memory [`Session`] and drives every state change through the
/// injected auth API and session store.
///
/// The store is written through on login and cleared on logout or failed
/// validation; it is read exactly once, during [`initialize`].
///
/// [`initialize`]: SessionController::initialize
#[derive(Clone, Debug)]
pub struct SessionController<A, S> {
    api: A,
    store: S,
    session: Session,
}

impl<A: AuthApi, S: SessionStore> SessionController<A, S> {
    pub fn new(api: A, store: S) -> Self {
        Self {
            api,
            store,
            session: Session::default(),
        }
    }

    /// Pick up an existing in-memory session, e.g. between page operations.
    pub fn resume(api: A, store: S, session: Session) -> Self {
        Self {
            api,
            store,
            session,
        }
    }

    pub fn session(&self) -> &Session {
        &self.session
    }

    pub fn into_session(self) -> Session {
        self.session
    }

    /// Startup sequence: read the store once and, if a complete session is
    /// persisted, validate its token against the API.
    ///
    /// Any validation failure — including transport errors — clears the
    /// store and lands on anonymous (fail-closed). An incomplete store skips
    /// the network entirely. `loading` stays true until the whole sequence
    /// has resolved.
    pub async fn initialize(&mut self) {
        let Some(stored) = self.store.load() else {
            self.session = Session::anonymous();
            return;
        };
        match self.api.validate(&stored.token).await {
            Ok(()) => self.session = Session::authenticated_from(stored),
            Err(err) => {
                leptos::logging::warn!("stored token rejected: {err}");
                self.store.clear();
                self.session = Session::anonymous();
            }
        }
    }

    /// Authenticate against the remote API.
    ///
    /// On success the store is written through before the in-memory state
    /// flips. On failure the state is left untouched and the error is the
    /// caller's to surface.
    pub async fn login(&mut self, username: &str, password: &str) -> Result<(), AuthError> {
        let resp = self.api.login(username, password).await?;
        let stored = StoredSession {
            token: resp.access_token,
            username: resp.username,
            user_id: resp.user_id,
        };
        self.store.save(&stored);
        self.session = Session::authenticated_from(stored);
        Ok(())
    }

    /// Create an account. Never touches session state regardless of outcome;
    /// the caller routes the user to the login form on success.
    pub async fn register(&self, username: &str, password: &str) -> Result<(), AuthError> {
        self.api.register(username, password).await
    }

    /// Unconditional local logout: clear the store and drop to anonymous.
    /// Synchronous, no network call, cannot fail, idempotent.
    pub fn logout(&mut self) {
        self.store.clear();
        self.session = Session::anonymous();
    }
}

/// Controller wired to the browser environment: remote HTTP auth API and
/// localStorage persistence. Outside the browser both collaborators are
/// inert stubs.
pub fn browser_controller(session: Session) -> SessionController<HttpAuthApi, LocalSessionStore> {
    SessionController::resume(HttpAuthApi, LocalSessionStore, session)
}

/// What the route guard should render for a given session state.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum GateDecision {
    /// Startup validation still in flight; render a placeholder only.
    Loading,
    /// No session; send the user to the login page.
    RedirectToLogin,
    /// Session established; render the guarded content.
    Allow,
}

/// Pure access-control decision consumed by `ProtectedRoute`.
pub fn gate(session: &Session) -> GateDecision {
    if session.loading {
        GateDecision::Loading
    } else if session.authenticated {
        GateDecision::Allow
    } else {
        GateDecision::RedirectToLogin
    }
}
