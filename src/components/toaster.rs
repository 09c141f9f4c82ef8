//! Transient notifications, stacked in a fixed corner overlay.

use leptos::prelude::*;

use crate::state::toast::{Toast, ToastKind, ToastState};

/// Push a notification and schedule its dismissal after a few seconds.
/// Auto-dismiss only runs in the browser; elsewhere the toast stays queued.
pub fn show_toast(toasts: RwSignal<ToastState>, kind: ToastKind, message: &str) {
    let message = message.to_owned();
    let mut id = 0;
    toasts.update(|t| id = t.push(kind, message));

    #[cfg(feature = "hydrate")]
    leptos::task::spawn_local(async move {
        gloo_timers::future::sleep(std::time::Duration::from_millis(3500)).await;
        toasts.update(|t| t.dismiss(id));
    });
    #[cfg(not(feature = "hydrate"))]
    {
        let _ = id;
    }
}

/// Overlay rendering the current toast queue.
#[component]
pub fn Toaster() -> impl IntoView {
    let toasts = expect_context::<RwSignal<ToastState>>();

    view! {
        <div class="toaster">
            {move || {
                toasts
                    .get()
                    .toasts
                    .into_iter()
                    .map(|toast| view! { <ToastCard toast=toast/> })
                    .collect::<Vec<_>>()
            }}
        </div>
    }
}

#[component]
fn ToastCard(toast: Toast) -> impl IntoView {
    let toasts = expect_context::<RwSignal<ToastState>>();
    let class = match toast.kind {
        ToastKind::Success => "toast toast--success",
        ToastKind::Error => "toast toast--error",
    };
    let id = toast.id;

    view! {
        <div class=class on:click=move |_| toasts.update(|t| t.dismiss(id))>
            {toast.message.clone()}
        </div>
    }
}
