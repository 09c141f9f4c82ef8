//! Route guard for authenticated content.

use leptos::prelude::*;
use leptos_router::components::Redirect;
use leptos_router::hooks::use_location;

use crate::state::session::{GateDecision, Session, gate};

/// Gates its children on the session state.
///
/// While the startup validation is in flight it renders a placeholder and
/// nothing else. Once resolved it either renders the guarded content or
/// redirects to the login page, carrying the originally requested location
/// so the login form can return there (best effort).
#[component]
pub fn ProtectedRoute(children: ChildrenFn) -> impl IntoView {
    let session = expect_context::<RwSignal<Session>>();
    let location = use_location();

    move || match gate(&session.get()) {
        GateDecision::Loading => view! {
            <div class="page-loading">"Loading..."</div>
        }
        .into_any(),
        GateDecision::RedirectToLogin => {
            let from = location.pathname.get();
            view! { <Redirect path=format!("/login?from={from}")/> }.into_any()
        }
        GateDecision::Allow => children().into_any(),
    }
}
