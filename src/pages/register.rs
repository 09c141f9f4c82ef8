//! Registration page. A successful registration does not log the user in;
//! it routes them to the login form.

use leptos::prelude::*;
use leptos_router::components::A;

use crate::state::session::Session;
use crate::state::toast::ToastState;

/// Account creation form.
#[component]
pub fn RegisterPage() -> impl IntoView {
    let session = expect_context::<RwSignal<Session>>();
    let toasts = expect_context::<RwSignal<ToastState>>();
    let username = RwSignal::new(String::new());
    let password = RwSignal::new(String::new());
    let pending = RwSignal::new(false);

    #[cfg(feature = "hydrate")]
    let navigate = leptos_router::hooks::use_navigate();

    let on_submit = move |ev: leptos::ev::SubmitEvent| {
        ev.prevent_default();
        let user = username.get_untracked();
        let pass = password.get_untracked();
        if user.trim().is_empty() || pass.is_empty() || pending.get_untracked() {
            return;
        }

        #[cfg(feature = "hydrate")]
        {
            let navigate = navigate.clone();
            pending.set(true);
            leptos::task::spawn_local(async move {
                let ctl = crate::state::session::browser_controller(session.get_untracked());
                match ctl.register(&user, &pass).await {
                    Ok(()) => {
                        crate::components::toaster::show_toast(
                            toasts,
                            crate::state::toast::ToastKind::Success,
                            "Registration successful! Please log in.",
                        );
                        navigate("/login", leptos_router::NavigateOptions::default());
                    }
                    Err(err) => {
                        leptos::logging::warn!("registration failed: {err}");
                        crate::components::toaster::show_toast(
                            toasts,
                            crate::state::toast::ToastKind::Error,
                            "Registration failed",
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
                <h3 class="auth-card__title">"Create an account"</h3>
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
                        "Register"
                    </button>
                </form>
                <p class="auth-card__switch">
                    "Already have an account? "
                    <A href="/login">"Login"</A>
                </p>
            </div>
        </div>
    }
}
