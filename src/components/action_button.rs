//! Action Button Component
//!
//! Reusable labeled button used by the goal form.

use leptos::prelude::*;

/// Labeled button that forwards every click to `on_press`
///
/// # Arguments
/// * `label` - Text shown on the button
/// * `class` - CSS class (e.g., "action-btn submit" or "action-btn cancel")
/// * `on_press` - Callback run on each activation
#[component]
pub fn ActionButton(
    #[prop(into)] label: String,
    #[prop(into)] class: String,
    #[prop(into)] on_press: Callback<()>,
) -> impl IntoView {
    view! {
        <button
            type="button"
            class=class
            on:click=move |_| on_press.run(())
        >
            {label}
        </button>
    }
}
