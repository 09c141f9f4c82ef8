//! To-do list page: fetch on entry, then add, edit, toggle, and delete.
//!
//! Token expiry is detected reactively: a 401 from any todos call forces a
//! local logout, and the route guard redirects to the login page.

use leptos::prelude::*;

use crate::components::header::Header;
use crate::components::todo_item::TodoItem;
use crate::net::types::Todo;
use crate::state::session::Session;
use crate::state::toast::ToastState;
use crate::state::todos::TodosState;

/// Drop the session after the API rejected the bearer token. The route
/// guard reacts to the state change and redirects to the login page.
#[cfg(feature = "hydrate")]
fn expire_session(session: RwSignal<Session>, toasts: RwSignal<ToastState>) {
    let mut ctl = crate::state::session::browser_controller(session.get_untracked());
    ctl.logout();
    session.set(ctl.into_session());
    crate::components::toaster::show_toast(
        toasts,
        crate::state::toast::ToastKind::Error,
        "Session expired. Please log in again.",
    );
}

/// The guarded to-do list.
#[component]
pub fn TodosPage() -> impl IntoView {
    let session = expect_context::<RwSignal<Session>>();
    let toasts = expect_context::<RwSignal<ToastState>>();
    let todos = RwSignal::new(TodosState::default());

    let new_title = RwSignal::new(String::new());
    let new_description = RwSignal::new(String::new());

    let editing = RwSignal::new(None::<Todo>);
    let edit_title = RwSignal::new(String::new());
    let edit_description = RwSignal::new(String::new());

    // Initial fetch on mount. The gate guarantees a token is present.
    #[cfg(feature = "hydrate")]
    leptos::task::spawn_local(async move {
        let Some(token) = session.get_untracked().token else {
            return;
        };
        match crate::net::todos::fetch_todos(&token).await {
            Ok(items) => todos.update(|t| t.replace(items)),
            Err(crate::net::error::TodoError::Unauthorized) => expire_session(session, toasts),
            Err(err) => {
                leptos::logging::warn!("todo fetch failed: {err}");
                crate::components::toaster::show_toast(
                    toasts,
                    crate::state::toast::ToastKind::Error,
                    "Error fetching todos. Please try again.",
                );
            }
        }
    });
    #[cfg(not(feature = "hydrate"))]
    {
        let _ = (session, toasts);
    }

    let on_add = move |ev: leptos::ev::SubmitEvent| {
        ev.prevent_default();
        let title = new_title.get_untracked();
        let description = new_description.get_untracked();
        if title.trim().is_empty() {
            return;
        }

        #[cfg(feature = "hydrate")]
        leptos::task::spawn_local(async move {
            let Some(token) = session.get_untracked().token else {
                return;
            };
            match crate::net::todos::create_todo(&token, title.trim(), &description).await {
                Ok(todo) => {
                    todos.update(|t| t.push(todo));
                    new_title.set(String::new());
                    new_description.set(String::new());
                    crate::components::toaster::show_toast(
                        toasts,
                        crate::state::toast::ToastKind::Success,
                        "Todo added successfully!",
                    );
                }
                Err(crate::net::error::TodoError::Unauthorized) => expire_session(session, toasts),
                Err(err) => {
                    leptos::logging::warn!("todo create failed: {err}");
                    crate::components::toaster::show_toast(
                        toasts,
                        crate::state::toast::ToastKind::Error,
                        "Error adding todo. Please try again.",
                    );
                }
            }
        });
        #[cfg(not(feature = "hydrate"))]
        {
            let _ = (title, description);
        }
    };

    let on_toggle = Callback::new(move |todo: Todo| {
        #[cfg(feature = "hydrate")]
        leptos::task::spawn_local(async move {
            let Some(token) = session.get_untracked().token else {
                return;
            };
            let patch = crate::net::types::TodoPatch {
                is_completed: Some(!todo.is_completed),
                ..Default::default()
            };
            match crate::net::todos::update_todo(&token, todo.id, &patch).await {
                Ok(updated) => todos.update(|t| t.apply(updated)),
                Err(crate::net::error::TodoError::Unauthorized) => expire_session(session, toasts),
                Err(err) => {
                    leptos::logging::warn!("todo update failed: {err}");
                    crate::components::toaster::show_toast(
                        toasts,
                        crate::state::toast::ToastKind::Error,
                        "Error updating todo. Please try again.",
                    );
                }
            }
        });
        #[cfg(not(feature = "hydrate"))]
        {
            let _ = todo;
        }
    });

    let on_edit = Callback::new(move |todo: Todo| {
        edit_title.set(todo.title.clone());
        edit_description.set(todo.description.clone());
        editing.set(Some(todo));
    });

    let on_save_edit = move |ev: leptos::ev::SubmitEvent| {
        ev.prevent_default();
        let Some(todo) = editing.get_untracked() else {
            return;
        };
        let title = edit_title.get_untracked();
        let description = edit_description.get_untracked();
        if title.trim().is_empty() {
            return;
        }

        #[cfg(feature = "hydrate")]
        leptos::task::spawn_local(async move {
            let Some(token) = session.get_untracked().token else {
                return;
            };
            let patch = crate::net::types::TodoPatch {
                title: Some(title.trim().to_owned()),
                description: Some(description),
                ..Default::default()
            };
            match crate::net::todos::update_todo(&token, todo.id, &patch).await {
                Ok(updated) => {
                    todos.update(|t| t.apply(updated));
                    editing.set(None);
                    crate::components::toaster::show_toast(
                        toasts,
                        crate::state::toast::ToastKind::Success,
                        "Todo updated successfully!",
                    );
                }
                Err(crate::net::error::TodoError::Unauthorized) => expire_session(session, toasts),
                Err(err) => {
                    leptos::logging::warn!("todo update failed: {err}");
                    crate::components::toaster::show_toast(
                        toasts,
                        crate::state::toast::ToastKind::Error,
                        "Error updating todo. Please try again.",
                    );
                }
            }
        });
        #[cfg(not(feature = "hydrate"))]
        {
            let _ = (todo, title, description);
        }
    };

    let on_cancel_edit = move |_| editing.set(None);

    let on_delete = Callback::new(move |id: u32| {
        #[cfg(feature = "hydrate")]
        leptos::task::spawn_local(async move {
            let Some(token) = session.get_untracked().token else {
                return;
            };
            match crate::net::todos::delete_todo(&token, id).await {
                Ok(()) => {
                    todos.update(|t| t.remove(id));
                    crate::components::toaster::show_toast(
                        toasts,
                        crate::state::toast::ToastKind::Success,
                        "Todo deleted successfully!",
                    );
                }
                Err(crate::net::error::TodoError::Unauthorized) => expire_session(session, toasts),
                Err(err) => {
                    leptos::logging::warn!("todo delete failed: {err}");
                    crate::components::toaster::show_toast(
                        toasts,
                        crate::state::toast::ToastKind::Error,
                        "Error deleting todo. Please try again.",
                    );
                }
            }
        });
        #[cfg(not(feature = "hydrate"))]
        {
            let _ = id;
        }
    });

    view! {
        <div class="todos-page">
            <Header/>
            <main class="todos">
                <form class="todos__add" on:submit=on_add>
                    <input
                        class="form__input"
                        type="text"
                        placeholder="Todo title"
                        prop:value=move || new_title.get()
                        on:input=move |ev| new_title.set(event_target_value(&ev))
                    />
                    <input
                        class="form__input"
                        type="text"
                        placeholder="Description"
                        prop:value=move || new_description.get()
                        on:input=move |ev| new_description.set(event_target_value(&ev))
                    />
                    <button class="btn btn--primary" type="submit">"Add"</button>
                </form>

                <Show when=move || editing.get().is_some()>
                    <form class="todos__edit" on:submit=on_save_edit.clone()>
                        <input
                            class="form__input"
                            type="text"
                            placeholder="Title"
                            prop:value=move || edit_title.get()
                            on:input=move |ev| edit_title.set(event_target_value(&ev))
                        />
                        <input
                            class="form__input"
                            type="text"
                            placeholder="Description"
                            prop:value=move || edit_description.get()
                            on:input=move |ev| edit_description.set(event_target_value(&ev))
                        />
                        <button class="btn btn--primary" type="submit">"Save"</button>
                        <button class="btn" type="button" on:click=on_cancel_edit.clone()>
                            "Cancel"
                        </button>
                    </form>
                </Show>

                {move || {
                    let state = todos.get();
                    if !state.loaded {
                        view! { <p class="todos__empty">"Loading todos..."</p> }.into_any()
                    } else if state.items.is_empty() {
                        view! { <p class="todos__empty">"Nothing to do yet."</p> }.into_any()
                    } else {
                        view! {
                            <ul class="todos__list">
                                {state
                                    .items
                                    .into_iter()
                                    .map(|todo| {
                                        view! {
                                            <TodoItem
                                                todo=todo
                                                on_toggle=on_toggle
                                                on_edit=on_edit
                                                on_delete=on_delete
                                            />
                                        }
                                    })
                                    .collect::<Vec<_>>()}
                            </ul>
                        }
                        .into_any()
                    }
                }}
            </main>
        </div>
    }
}
