use super::*;

use std::cell::{Cell, RefCell};
use std::rc::Rc;

use futures::executor::block_on;

use crate::net::types::LoginResponse;
use crate::util::storage::MemorySessionStore;

// =============================================================
// Test doubles
// =============================================================

#[derive(Default)]
struct StubInner {
    login_result: RefCell<Option<Result<LoginResponse, AuthError>>>,
    register_result: RefCell<Option<Result<(), AuthError>>>,
    validate_ok: Cell<bool>,
    validate_calls: Cell<u32>,
    register_calls: Cell<u32>,
}

/// Scripted auth API that records how it was called.
#[derive(Clone, Default)]
struct StubApi {
    inner: Rc<StubInner>,
}

impl StubApi {
    fn with_login(self, result: Result<LoginResponse, AuthError>) -> Self {
        *self.inner.login_result.borrow_mut() = Some(result);
        self
    }

    fn with_register(self, result: Result<(), AuthError>) -> Self {
        *self.inner.register_result.borrow_mut() = Some(result);
        self
    }

    fn with_validate_ok(self) -> Self {
        self.inner.validate_ok.set(true);
        self
    }
}

impl AuthApi for StubApi {
    async fn register(&self, _username: &str, _password: &str) -> Result<(), AuthError> {
        self.inner.register_calls.set(self.inner.register_calls.get() + 1);
        self.inner
            .register_result
            .borrow()
            .clone()
            .unwrap_or(Ok(()))
    }

    async fn login(&self, _username: &str, _password: &str) -> Result<LoginResponse, AuthError> {
        self.inner
            .login_result
            .borrow()
            .clone()
            .unwrap_or_else(|| Err(AuthError::Authentication("no login scripted".to_owned())))
    }

    async fn validate(&self, _token: &str) -> Result<(), AuthError> {
        self.inner.validate_calls.set(self.inner.validate_calls.get() + 1);
        if self.inner.validate_ok.get() {
            Ok(())
        } else {
            Err(AuthError::Validation("status 401".to_owned()))
        }
    }
}

/// Store handle the test can keep inspecting after the controller takes it.
#[derive(Clone, Default)]
struct SharedStore(Rc<RefCell<MemorySessionStore>>);

impl SessionStore for SharedStore {
    fn save(&mut self, session: &StoredSession) {
        self.0.borrow_mut().save(session);
    }

    fn load(&self) -> Option<StoredSession> {
        self.0.borrow().load()
    }

    fn clear(&mut self) {
        self.0.borrow_mut().clear();
    }
}

fn alice_login() -> LoginResponse {
    LoginResponse {
        access_token: "tok1".to_owned(),
        username: "alice".to_owned(),
        user_id: 7,
    }
}

fn alice_stored() -> StoredSession {
    StoredSession {
        token: "tok1".to_owned(),
        username: "alice".to_owned(),
        user_id: 7,
    }
}

// =============================================================
// Initial state
// =============================================================

#[test]
fn default_session_is_loading_and_anonymous() {
    let session = Session::default();
    assert!(session.loading);
    assert!(!session.authenticated);
    assert!(session.token.is_none());
    assert!(session.username.is_none());
    assert!(session.user_id.is_none());
}

#[test]
fn new_controller_starts_in_the_unknown_state() {
    let ctl = SessionController::new(StubApi::default(), SharedStore::default());
    assert!(ctl.session().loading);
    assert!(!ctl.session().authenticated);
}

// =============================================================
// Startup validation
// =============================================================

#[test]
fn startup_without_stored_session_goes_anonymous_without_validate() {
    let api = StubApi::default();
    let mut ctl = SessionController::new(api.clone(), SharedStore::default());

    block_on(ctl.initialize());

    assert!(!ctl.session().loading);
    assert!(!ctl.session().authenticated);
    assert_eq!(api.inner.validate_calls.get(), 0);
}

#[test]
fn startup_with_partial_store_skips_validate() {
    let api = StubApi::default().with_validate_ok();
    let store = SharedStore::default();
    store.0.borrow_mut().set_raw("token", "tok1");

    let mut ctl = SessionController::new(api.clone(), store);
    block_on(ctl.initialize());

    assert!(!ctl.session().authenticated);
    assert!(!ctl.session().loading);
    assert_eq!(api.inner.validate_calls.get(), 0);
}

#[test]
fn startup_with_valid_token_restores_identity() {
    let api = StubApi::default().with_validate_ok();
    let store = SharedStore::default();
    store.save_seed(alice_stored());

    let mut ctl = SessionController::new(api.clone(), store.clone());
    block_on(ctl.initialize());

    let session = ctl.session();
    assert!(session.authenticated);
    assert!(!session.loading);
    assert_eq!(session.token.as_deref(), Some("tok1"));
    assert_eq!(session.username.as_deref(), Some("alice"));
    assert_eq!(session.user_id, Some(7));
    assert_eq!(api.inner.validate_calls.get(), 1);
    // No new token issued: the store still holds the persisted one.
    assert_eq!(store.load(), Some(alice_stored()));
}

#[test]
fn startup_with_rejected_token_clears_store_and_goes_anonymous() {
    let api = StubApi::default(); // validate fails
    let store = SharedStore::default();
    store.save_seed(alice_stored());

    let mut ctl = SessionController::new(api.clone(), store.clone());
    block_on(ctl.initialize());

    assert!(!ctl.session().authenticated);
    assert!(!ctl.session().loading);
    assert!(ctl.session().token.is_none());
    assert_eq!(store.load(), None);
    assert_eq!(api.inner.validate_calls.get(), 1);
}

// =============================================================
// Login
// =============================================================

#[test]
fn login_success_populates_all_fields() {
    let api = StubApi::default().with_login(Ok(alice_login()));
    let mut ctl = SessionController::new(api, SharedStore::default());

    block_on(ctl.initialize());
    block_on(ctl.login("alice", "correct")).expect("login");

    let session = ctl.session();
    assert!(session.authenticated);
    assert_eq!(session.token.as_deref(), Some("tok1"));
    assert_eq!(session.username.as_deref(), Some("alice"));
    assert_eq!(session.user_id, Some(7));
}

#[test]
fn login_writes_through_to_store() {
    let api = StubApi::default().with_login(Ok(alice_login()));
    let store = SharedStore::default();
    let mut ctl = SessionController::new(api, store.clone());

    block_on(ctl.login("alice", "correct")).expect("login");

    // Round-trip: the stored token equals the token the login returned.
    assert_eq!(store.load(), Some(alice_stored()));
}

#[test]
fn login_failure_leaves_state_and_store_unchanged() {
    let api = StubApi::default()
        .with_login(Err(AuthError::Authentication("status 401".to_owned())));
    let store = SharedStore::default();
    let mut ctl = SessionController::new(api, store.clone());
    block_on(ctl.initialize());

    let err = block_on(ctl.login("alice", "wrong")).expect_err("login should fail");

    assert!(matches!(err, AuthError::Authentication(_)));
    assert!(!ctl.session().authenticated);
    assert!(ctl.session().token.is_none());
    assert_eq!(store.load(), None);
}

// =============================================================
// Logout
// =============================================================

#[test]
fn logout_clears_state_and_store() {
    let api = StubApi::default().with_login(Ok(alice_login()));
    let store = SharedStore::default();
    let mut ctl = SessionController::new(api, store.clone());
    block_on(ctl.login("alice", "correct")).expect("login");

    ctl.logout();

    assert!(!ctl.session().authenticated);
    assert!(ctl.session().token.is_none());
    assert!(ctl.session().username.is_none());
    assert!(ctl.session().user_id.is_none());
    assert_eq!(store.load(), None);
}

#[test]
fn logout_is_idempotent() {
    let api = StubApi::default().with_login(Ok(alice_login()));
    let mut ctl = SessionController::new(api, SharedStore::default());
    block_on(ctl.login("alice", "correct")).expect("login");

    ctl.logout();
    let after_one = ctl.session().clone();
    ctl.logout();

    assert_eq!(ctl.session(), &after_one);
}

#[test]
fn logout_from_anonymous_is_harmless() {
    let mut ctl = SessionController::new(StubApi::default(), SharedStore::default());
    block_on(ctl.initialize());

    ctl.logout();

    assert!(!ctl.session().authenticated);
    assert!(!ctl.session().loading);
}

// =============================================================
// Register
// =============================================================

#[test]
fn register_success_never_establishes_a_session() {
    let api = StubApi::default().with_register(Ok(()));
    let store = SharedStore::default();
    let mut ctl = SessionController::new(api.clone(), store.clone());
    block_on(ctl.initialize());

    block_on(ctl.register("alice", "secret")).expect("register");

    assert!(!ctl.session().authenticated);
    assert_eq!(store.load(), None);
    assert_eq!(api.inner.register_calls.get(), 1);
}

#[test]
fn register_failure_surfaces_error_without_touching_state() {
    let api = StubApi::default()
        .with_register(Err(AuthError::Registration("status 409".to_owned())))
        .with_login(Ok(alice_login()));
    let mut ctl = SessionController::new(api, SharedStore::default());
    block_on(ctl.login("alice", "correct")).expect("login");
    let before = ctl.session().clone();

    let err = block_on(ctl.register("bob", "secret")).expect_err("register should fail");

    assert!(matches!(err, AuthError::Registration(_)));
    assert_eq!(ctl.session(), &before);
}

// =============================================================
// Access gate
// =============================================================

#[test]
fn gate_renders_placeholder_while_loading() {
    assert_eq!(gate(&Session::default()), GateDecision::Loading);
}

#[test]
fn gate_redirects_anonymous_sessions() {
    let mut ctl = SessionController::new(StubApi::default(), SharedStore::default());
    block_on(ctl.initialize());
    assert_eq!(gate(ctl.session()), GateDecision::RedirectToLogin);
}

#[test]
fn gate_allows_authenticated_sessions() {
    let api = StubApi::default().with_login(Ok(alice_login()));
    let mut ctl = SessionController::new(api, SharedStore::default());
    block_on(ctl.login("alice", "correct")).expect("login");
    assert_eq!(gate(ctl.session()), GateDecision::Allow);
}

// =============================================================
// Helpers
// =============================================================

impl SharedStore {
    fn save_seed(&self, session: StoredSession) {
        self.0.borrow_mut().save(&session);
    }
}
