//! Login page with a username/password form.

use leptos::prelude::*;
use leptos_router::components::A;

use crate::state::session::Session;
use crate::state::toast::ToastState;

/// Login form. On success, navigates back to the location the user
/// originally requested (the `from` query parameter) or `/todos`; on failure
/// the form stays open for another attempt.
#[component]
pub fn LoginPage() -> impl IntoView {
    let session = expect_context::<RwSignal<Session>>();
    let toasts = expect_context::<RwSignal<ToastState>>();
    let username = RwSignal::new(String::new());
    let password = RwSignal::new(String::new());
    let pending = RwSignal::new(false);

    #[cfg(feature = "hydrate")]
    let navigate = leptos_router::hooks::use_navigate();
    #[cfg(feature = "hydrate")]
    let query = leptos_router::hooks::use_query_map();

    let on_submit = move |ev: leptos::ev::SubmitEvent| {
        ev.prevent_default();
        let user = username.get_untracked();
        let pass = password.get_untracked();
        // One login call at a time; the button is also disabled while pending.
        if user.trim().is_empty() || pass.is_empty() || pending.get_untracked() {
            return;
        }

        #[cfg(feature = "hydrate")]
        {
            let navigate = navigate.clone();
            let target = query
                .get_untracked()
                .get("from")
                .unwrap_or_else(|| "/todos".to_owned());
            pending.set(true);
            leptos::task::spawn_local(async move {
                let mut ctl = crate::state::session::browser_controller(session.get_untracked());
                match ctl.login(&user, &pass).await {
                    Ok(()) => {
                        session.set(ctl.into_session());
                        crate::components::toaster::show_toast(
                            toasts,
                            crate::state::toast::ToastKind::Success,
                            "Login successful!",
                        );
                        navigate(&target, leptos_router::NavigateOptions::default());
                    }
                    Err(err) => {
                        leptos::logging::warn!("login failed: {err}");
                        crate::components::toaster::show_toast(
                            toasts,
                            crate::state::toast::ToastKind::Error,
                            "Invalid credentials",
                        );
                    }
                }
                pending.set(false);
            });
        }
        #[cfg(not(feature = "hydrate"))]
        {
            let _ = (user, pass, session, toasts);
        }
    };

    view! {
        <div class="auth-page">
            <div class="auth-card">
                <h3 class="auth-card__title">"Login to your account"</h3>
                <form on:submit=on_submit>
                    <label class="form__label">
                        "Username"
                        <input
                            class="form__input"
                            type="text"
                            placeholder="Username"
                            prop:value=move || username.get()
                            on:input=move |ev| username.set(event_target_value(&ev))
                            required
                        />
                    </label>
                    <label class="form__label">
                        "Password"
                        <input
                            class="form__input"
                            type="password"
                            placeholder="Password"
                            prop:value=move || password.get()
                            on:input=move |ev| password.set(event_target_value(&ev))
                            required
                        />
                    </label>
                    <button
                        class="btn btn--primary"
                        type="submit"
                        disabled=move || pending.get()
                    >
                        "Login"
                    </button>
                </form>
                <p class="auth-card__switch">
                    "Don't have an account? "
                    <A href="/register">"Register"</A>
                </p>
            </div>
        </div>
    }
}
