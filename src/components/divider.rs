use leptos::prelude::*;

/// Horizontal rule between the form trigger and the list
#[component]
pub fn Divider() -> impl IntoView {
    view! { <hr class="divider" /> }
}
