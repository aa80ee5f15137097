//! UI Components
//!
//! Reusable Leptos components.

mod action_button;
mod divider;
mod goal_input;
mod goal_item;

pub use action_button::ActionButton;
pub use divider::Divider;
pub use goal_input::GoalInput;
pub use goal_item::GoalItem;
