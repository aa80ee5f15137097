//! Goal List
//!
//! Insertion-ordered goal collection with per-session id allocation.

use crate::models::{Goal, GoalId};

/// Ordered goals plus the counter used to mint their ids.
///
/// Ids only ever grow, so an id freed by a delete is never handed out again
/// during the same session.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct GoalList {
    goals: Vec<Goal>,
    next_id: u32,
}

impl GoalList {
    /// Mint the next id without storing anything
    fn fresh_id(&mut self) -> GoalId {
        let id = GoalId(self.next_id);
        self.next_id += 1;
        id
    }

    /// Append a goal at the tail. Any text is accepted, including "".
    pub fn push(&mut self, text: impl Into<String>) -> GoalId {
        let id = self.fresh_id();
        self.goals.push(Goal::new(id, text));
        id
    }

    /// Remove the goal with `id`, keeping the order of the rest.
    /// Unknown ids leave the list untouched.
    pub fn remove(&mut self, id: GoalId) -> Option<Goal> {
        let index = self.goals.iter().position(|goal| goal.id == id)?;
        Some(self.goals.remove(index))
    }

    #[cfg(test)]
    pub fn get(&self, id: GoalId) -> Option<&Goal> {
        self.goals.iter().find(|goal| goal.id == id)
    }

    pub fn goals(&self) -> &[Goal] {
        &self.goals
    }

    pub fn len(&self) -> usize {
        self.goals.len()
    }

    pub fn is_empty(&self) -> bool {
        self.goals.is_empty()
    }
}
