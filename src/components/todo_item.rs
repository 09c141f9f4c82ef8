//! A single row in the to-do list.

use leptos::prelude::*;

use crate::net::types::Todo;

/// One to-do row: completion toggle, title/description, edit and delete.
#[component]
pub fn TodoItem(
    todo: Todo,
    #[prop(into)] on_toggle: Callback<Todo>,
    #[prop(into)] on_edit: Callback<Todo>,
    #[prop(into)] on_delete: Callback<u32>,
) -> impl IntoView {
    let id = todo.id;
    let completed = todo.is_completed;
    let title = todo.title.clone();
    let description = todo.description.clone();
    let toggled = todo.clone();
    let edited = todo;

    let title_class = if completed {
        "todo-item__title todo-item__title--done"
    } else {
        "todo-item__title"
    };

    view! {
        <li class="todo-item">
            <button
                class="todo-item__toggle"
                title="Toggle complete"
                on:click=move |_| on_toggle.run(toggled.clone())
            >
                {if completed { "\u{2713}" } else { "" }}
            </button>
            <div class="todo-item__body">
                <span class=title_class>{title}</span>
                <span class="todo-item__description">{description}</span>
            </div>
            <button
                class="btn todo-item__action"
                title="Edit"
                on:click=move |_| on_edit.run(edited.clone())
            >
                "Edit"
            </button>
            <button
                class="btn todo-item__action todo-item__action--danger"
                title="Delete"
                on:click=move |_| on_delete.run(id)
            >
                "Delete"
            </button>
        </li>
    }
}
