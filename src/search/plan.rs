//! A plan is the sequence of actions leading from the start state to a goal.
//! This module provides the [`Plan`] struct, which represents a plan.

use itertools::Itertools;
use std::fmt::{self, Display, Formatter};
use std::ops::Deref;

#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct Plan<A> {
    steps: Vec<A>,
}

impl<A> Plan<A> {
    pub fn empty() -> Self {
        Self { steps: vec![] }
    }

    pub fn new(steps: Vec<A>) -> Self {
        Self { steps }
    }

    pub fn steps(&self) -> &[A] {
        &self.steps
    }

    pub fn len(&self) -> usize {
        self.steps.len()
    }

    pub fn is_empty(&self) -> bool {
        self.steps.is_empty()
    }
}

impl<A: Display> Display for Plan<A> {
    /// One step per line.
    fn fmt(&self, f: &mut Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.steps.iter().join("\n"))
    }
}

impl<A> IntoIterator for Plan<A> {
    type Item = A;
    type IntoIter = std::vec::IntoIter<A>;

    fn into_iter(self) -> Self::IntoIter {
        self.steps.into_iter()
    }
}

impl<A> FromIterator<A> for Plan<A> {
    fn from_iter<I: IntoIterator<Item = A>>(iter: I) -> Self {
        Self::new(iter.into_iter().collect())
    }
}

impl<A> Deref for Plan<A> {
    type Target = [A];

    fn deref(&self) -> &Self::Target {
        &self.steps
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn display_puts_one_step_per_line() {
        let plan: Plan<&str> = vec!["E", "E", "S"].into_iter().collect();
        assert_eq!(plan.to_string(), "E\nE\nS");
        assert_eq!(plan.len(), 3);
    }

    #[test]
    fn empty_plan_displays_as_nothing() {
        let plan: Plan<char> = Plan::empty();
        assert!(plan.is_empty());
        assert_eq!(plan.to_string(), "");
    }
}
