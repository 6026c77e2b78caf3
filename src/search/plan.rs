//! A plan is a sequence of actions that leads from the start state of a
//! problem to a goal state. This module provides the [`Plan`] struct, which
//! represents a plan.

use crate::search::{Cost, SearchProblem};
use itertools::Itertools;
use std::{
    fmt::{self, Display},
    ops::Deref,
};

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

    /// The cost of this plan as computed by the problem.
    pub fn cost<P>(&self, problem: &P) -> Cost
    where
        P: SearchProblem<Action = A>,
    {
        problem.cost_of_actions(&self.steps)
    }
}

impl<A> Default for Plan<A> {
    fn default() -> Self {
        Self::empty()
    }
}

impl<A> From<Vec<A>> for Plan<A> {
    fn from(steps: Vec<A>) -> Self {
        Self::new(steps)
    }
}

impl<A> IntoIterator for Plan<A> {
    type Item = A;
    type IntoIter = std::vec::IntoIter<A>;

    fn into_iter(self) -> Self::IntoIter {
        self.steps.into_iter()
    }
}

impl<A> Deref for Plan<A> {
    type Target = [A];

    fn deref(&self) -> &Self::Target {
        &self.steps
    }
}

/// One action per line.
impl<A: Display> Display for Plan<A> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.steps.iter().join("\n"))
    }
}
