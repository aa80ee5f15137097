//! Goal Input Component
//!
//! Sliding overlay form for entering a new goal.

use leptos::prelude::*;

use crate::components::ActionButton;
use crate::config::UiConfig;

/// Text typed into the form but not yet committed
#[derive(Debug, Clone, Default, PartialEq)]
pub struct GoalDraft {
    text: String,
}

impl GoalDraft {
    pub fn text(&self) -> &str {
        &self.text
    }

    /// Replace the draft verbatim (no trimming)
    pub fn edit(&mut self, text: String) {
        self.text = text;
    }

    /// Hand out the committed text, leaving the draft empty
    pub fn take(&mut self) -> String {
        std::mem::take(&mut self.text)
    }
}

/// Submit and cancel actions shared by the buttons and the Enter key
#[derive(Clone, Copy)]
struct GoalFormActions {
    draft: RwSignal<GoalDraft>,
    on_add: Callback<String>,
    on_cancel: Callback<()>,
}

impl GoalFormActions {
    fn submit(&self) {
        let text = self.draft.try_update(GoalDraft::take).unwrap_or_default();
        self.on_add.run(text);
    }

    /// Close without touching the draft
    fn cancel(&self) {
        self.on_cancel.run(());
    }
}

/// Only the `open` class slides the overlay in and makes it visible
fn modal_class(visible: bool) -> &'static str {
    if visible { "goal-modal open" } else { "goal-modal" }
}

/// Overlay form for new goals
///
/// Visibility is owned by the caller; the draft text is owned here.
/// Submitting hands the draft to `on_add` and clears it. Cancelling only
/// calls `on_cancel`, so the draft survives until the next submit.
#[component]
pub fn GoalInput(
    #[prop(into)] visible: Signal<bool>,
    #[prop(into)] on_add: Callback<String>,
    #[prop(into)] on_cancel: Callback<()>,
    config: UiConfig,
) -> impl IntoView {
    let draft = RwSignal::new(GoalDraft::default());
    let actions = GoalFormActions { draft, on_add, on_cancel };

    let on_form_submit = move |ev: web_sys::SubmitEvent| {
        ev.prevent_default();
        actions.submit();
    };

    view! {
        <div class=move || modal_class(visible.get()) inert=move || !visible.get()>
            <form class="goal-input-form" on:submit=on_form_submit>
                <img src=config.form_icon class="goal-image" alt="" />
                <input
                    type="text"
                    class="goal-text-input"
                    placeholder=config.placeholder
                    prop:value=move || draft.with(|d| d.text().to_string())
                    on:input=move |ev| draft.update(|d| d.edit(event_target_value(&ev)))
                />
                <div class="goal-form-actions">
                    <ActionButton
                        label=config.cancel_label
                        class="action-btn cancel"
                        on_press=move |_| actions.cancel()
                    />
                    <ActionButton
                        label=config.submit_label
                        class="action-btn submit"
                        on_press=move |_| actions.submit()
                    />
                </div>
            </form>
        </div>
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::store::{
        new_app_store, store_add_goal, store_close_form, store_open_form, AppStateStoreFields,
    };

    fn store_actions() -> (crate::store::AppStore, GoalFormActions) {
        let store = new_app_store();
        let actions = GoalFormActions {
            draft: RwSignal::new(GoalDraft::default()),
            on_add: Callback::new(move |text: String| {
                store_add_goal(&store, text);
            }),
            on_cancel: Callback::new(move |_: ()| store_close_form(&store)),
        };
        (store, actions)
    }

    fn goal_texts(store: &crate::store::AppStore) -> Vec<String> {
        store
            .goals()
            .with_untracked(|list| list.goals().iter().map(|g| g.text.clone()).collect())
    }

    #[test]
    fn test_modal_class_follows_visibility() {
        assert_eq!(modal_class(true), "goal-modal open");
        assert_eq!(modal_class(false), "goal-modal");
    }

    #[test]
    fn test_edit_is_verbatim() {
        let mut draft = GoalDraft::default();
        draft.edit("  spaced out  ".to_string());
        assert_eq!(draft.text(), "  spaced out  ");
    }

    #[test]
    fn test_take_returns_text_and_empties_draft() {
        let mut draft = GoalDraft::default();
        draft.edit("Learn Rust".to_string());

        assert_eq!(draft.take(), "Learn Rust");
        assert_eq!(draft.text(), "");
    }

    #[test]
    fn test_submit_adds_draft_text_and_clears_it() {
        let (store, actions) = store_actions();
        store_open_form(&store);
        actions.draft.update(|d| d.edit("Learn Rust".to_string()));

        actions.submit();

        assert_eq!(goal_texts(&store), vec!["Learn Rust".to_string()]);
        assert_eq!(actions.draft.with_untracked(|d| d.text().to_string()), "");
        assert!(!store.form_visible().get_untracked());
    }

    #[test]
    fn test_submit_empty_draft_adds_empty_goal() {
        let (store, actions) = store_actions();
        store_open_form(&store);

        actions.submit();

        assert_eq!(goal_texts(&store), vec![String::new()]);
        assert!(!store.form_visible().get_untracked());
    }

    #[test]
    fn test_add_callback_receives_pre_submit_text() {
        let received = RwSignal::new(Vec::<String>::new());
        let draft = RwSignal::new(GoalDraft::default());
        let actions = GoalFormActions {
            draft,
            on_add: Callback::new(move |text: String| {
                let draft_now = draft.with_untracked(|d| d.text().to_string());
                received.update(|r| r.push(format!("{text}|{draft_now}")));
            }),
            on_cancel: Callback::new(|_: ()| {}),
        };
        draft.update(|d| d.edit("first".to_string()));

        actions.submit();

        assert_eq!(received.get_untracked(), vec!["first|".to_string()]);
    }

    #[test]
    fn test_cancel_hides_form_and_keeps_draft() {
        let (store, actions) = store_actions();
        store_open_form(&store);
        actions.draft.update(|d| d.edit("half typed".to_string()));

        actions.cancel();

        assert_eq!(actions.draft.with_untracked(|d| d.text().to_string()), "half typed");
        assert!(!store.form_visible().get_untracked());
        assert!(goal_texts(&store).is_empty());
    }
}
