//! Goal Item Component
//!
//! Individual goal in the list.

use leptos::prelude::*;

use crate::models::{Goal, GoalId};

/// A single goal row
#[component]
pub fn GoalItem(
    goal: Goal,
    #[prop(into)] on_delete: Callback<GoalId>,
) -> impl IntoView {
    let id = goal.id;

    view! {
        <li class="goal-item">
            <span class="goal-text">{goal.text}</span>

            // Delete button
            <button class="delete-btn" on:click=move |_| on_delete.run(id)>"×"</button>
        </li>
    }
}
