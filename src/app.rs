//! Goal List Frontend App
//!
//! Root container: owns the goal list and the form visibility flag and hands
//! callbacks down to its children.

use leptos::prelude::*;

use crate::components::{Divider, GoalInput, GoalItem};
use crate::config::UiConfig;
use crate::models::GoalId;
use crate::store::{
    new_app_store, store_add_goal, store_close_form, store_open_form, store_remove_goal,
    AppStateStoreFields,
};

#[component]
pub fn App() -> impl IntoView {
    let config = UiConfig::load();
    let store = new_app_store();

    let visible = Signal::derive(move || store.form_visible().get());
    let goals = Memo::new(move |_| store.goals().with(|list| list.goals().to_vec()));
    let is_empty = move || store.goals().with(|list| list.is_empty());

    let on_add = Callback::new(move |text: String| {
        store_add_goal(&store, text);
    });
    let on_cancel = Callback::new(move |_: ()| store_close_form(&store));
    let on_delete = Callback::new(move |id: GoalId| {
        store_remove_goal(&store, id);
    });

    let title = config.title.clone();
    let header_icon = config.header_icon.clone();
    let add_goal_label = config.add_goal_label.clone();
    let empty_message = config.empty_message.clone();

    view! {
        <div class="screen">
            <header class="app-header">
                <img src=header_icon class="app-icon" alt="" />
                <h1>{title}</h1>
            </header>

            <button class="add-goal-btn" on:click=move |_| store_open_form(&store)>
                {add_goal_label}
            </button>

            <GoalInput
                visible=visible
                on_add=on_add
                on_cancel=on_cancel
                config=config
            />

            <Divider />

            <div class="goals-container">
                <Show
                    when=move || !is_empty()
                    fallback=move || view! { <p class="empty-message">{empty_message.clone()}</p> }
                >
                    <ul class="goal-list">
                        <For
                            each=move || goals.get()
                            key=|goal| goal.id
                            children=move |goal| view! { <GoalItem goal=goal on_delete=on_delete /> }
                        />
                    </ul>
                </Show>
            </div>

            <p class="goal-count">{move || goal_count_label(goals.with(|g| g.len()))}</p>
        </div>
    }
}

/// Footer text for the number of goals
fn goal_count_label(count: usize) -> String {
    if count == 1 {
        "1 goal".to_string()
    } else {
        format!("{} goals", count)
    }
}
