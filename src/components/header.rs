//! Top bar with the app title and a logout button.

use leptos::prelude::*;
use leptos_router::NavigateOptions;
use leptos_router::hooks::use_navigate;

use crate::components::toaster::show_toast;
use crate::state::session::{Session, browser_controller};
use crate::state::toast::{ToastKind, ToastState};

/// Application header. The logout button only appears for an authenticated
/// session; logout is local and synchronous, so no pending state is needed.
#[component]
pub fn Header() -> impl IntoView {
    let session = expect_context::<RwSignal<Session>>();
    let toasts = expect_context::<RwSignal<ToastState>>();
    let navigate = use_navigate();

    let on_logout = move |_| {
        let mut ctl = browser_controller(session.get_untracked());
        ctl.logout();
        session.set(ctl.into_session());
        show_toast(toasts, ToastKind::Success, "Logged out");
        navigate("/login", NavigateOptions::default());
    };

    view! {
        <header class="header">
            <h1 class="header__title">"Taskdeck"</h1>
            <span class="header__user">
                {move || session.get().username.unwrap_or_default()}
            </span>
            <Show when=move || session.get().authenticated>
                <button class="btn header__logout" on:click=on_logout.clone()>
                    "Logout"
                </button>
            </Show>
        </header>
    }
}
