//! Frontend Models
//!
//! Data structures for goals held in memory.

use std::fmt;

/// Session-scoped goal identifier, handed out by [`GoalList`](crate::goals::GoalList)
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct GoalId(pub u32);

impl fmt::Display for GoalId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "#{}", self.0)
    }
}

/// Goal data structure
#[derive(Debug, Clone, PartialEq)]
pub struct Goal {
    pub id: GoalId,
    pub text: String,
}

impl Goal {
    pub fn new(id: GoalId, text: impl Into<String>) -> Self {
        Self { id, text: text.into() }
    }
}
