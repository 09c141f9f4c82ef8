//! Root application component with routing and context providers.

use leptos::prelude::*;
use leptos_meta::{MetaTags, Stylesheet, Title, provide_meta_context};
use leptos_router::{
    StaticSegment,
    components::{Redirect, Route, Router, Routes},
};

use crate::components::protected_route::ProtectedRoute;
use crate::components::toaster::Toaster;
use crate::pages::{login::LoginPage, register::RegisterPage, todos::TodosPage};
use crate::state::session::Session;
use crate::state::toast::ToastState;

/// HTML shell rendered on the server for SSR + hydration.
pub fn shell(options: LeptosOptions) -> impl IntoView {
    view! {
        <!DOCTYPE html>
        <html lang="en">
            <head>
                <meta charset="utf-8"/>
                <meta name="viewport" content="width=device-width, initial-scale=1"/>
                <AutoReload options=options.clone()/>
                <HydrationScripts options/>
                <MetaTags/>
            </head>
            <body>
                <App/>
            </body>
        </html>
    }
}

/// Root application component.
///
/// Provides the session and toast contexts, kicks off the startup token
/// validation, and sets up client-side routing.
#[component]
pub fn App() -> impl IntoView {
    provide_meta_context();

    let session = RwSignal::new(Session::default());
    let toasts = RwSignal::new(ToastState::default());
    provide_context(session);
    provide_context(toasts);

    // Resolve the persisted session before the route guard makes its first
    // authenticated/anonymous decision; `loading` flips only when done.
    #[cfg(feature = "hydrate")]
    leptos::task::spawn_local(async move {
        let mut ctl = crate::state::session::browser_controller(session.get_untracked());
        ctl.initialize().await;
        session.set(ctl.into_session());
    });

    view! {
        <Stylesheet id="leptos" href="/pkg/taskdeck.css"/>
        <Title text="Taskdeck"/>

        <Router>
            <Routes fallback=|| "Page not found.".into_view()>
                <Route path=StaticSegment("login") view=LoginPage/>
                <Route path=StaticSegment("register") view=RegisterPage/>
                <Route path=StaticSegment("todos") view=GuardedTodos/>
                <Route path=StaticSegment("") view=|| view! { <Redirect path="/todos"/> }/>
            </Routes>
        </Router>
        <Toaster/>
    }
}

/// `/todos` behind the access gate.
#[component]
fn GuardedTodos() -> impl IntoView {
    view! {
        <ProtectedRoute>
            <TodosPage/>
        </ProtectedRoute>
    }
}
