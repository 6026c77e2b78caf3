//! The contract every search engine consumes. A [`SearchProblem`] is a pure
//! query interface: engines only ever ask it for the start state, whether a
//! state is a goal, the successors of a state and the cost of an action
//! sequence. The engines never mutate the problem.

use ordered_float::OrderedFloat;
use std::{fmt::Debug, hash::Hash};
use thiserror::Error;

/// Cumulative cost of an action sequence.
pub type Cost = OrderedFloat<f64>;

#[derive(Debug, Clone, Copy, PartialEq, Error)]
pub enum CostError {
    #[error("step cost must be non-negative, got {0}")]
    Negative(f64),
    #[error("step cost must be finite, got {0}")]
    NotFinite(f64),
}

/// The incremental cost of a single transition. Can only hold a finite,
/// non-negative value, which is what the optimality of uniform-cost search and
/// A* relies on.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct StepCost(Cost);

impl StepCost {
    pub fn try_new(cost: f64) -> Result<Self, CostError> {
        if cost.is_nan() || cost.is_infinite() {
            return Err(CostError::NotFinite(cost));
        }
        if cost < 0. {
            return Err(CostError::Negative(cost));
        }
        // Normalise -0.0 so that costs compare and print the same.
        Ok(Self(OrderedFloat(cost + 0.)))
    }

    pub fn unit() -> Self {
        Self(OrderedFloat(1.))
    }

    pub fn zero() -> Self {
        Self(OrderedFloat(0.))
    }

    #[inline(always)]
    pub fn value(&self) -> Cost {
        self.0
    }
}

impl From<u32> for StepCost {
    fn from(value: u32) -> Self {
        Self(OrderedFloat(f64::from(value)))
    }
}

impl TryFrom<f64> for StepCost {
    type Error = CostError;

    fn try_from(value: f64) -> Result<Self, Self::Error> {
        Self::try_new(value)
    }
}

/// One outgoing transition of a state: the state reached, the action taken to
/// reach it, and what that action costs.
#[derive(Debug, Clone, PartialEq)]
pub struct Successor<S, A> {
    pub state: S,
    pub action: A,
    pub step_cost: StepCost,
}

impl<S, A> Successor<S, A> {
    pub fn new(state: S, action: A, step_cost: StepCost) -> Self {
        Self {
            state,
            action,
            step_cost,
        }
    }
}

pub trait SearchProblem {
    /// States only need value equality and hashing, the engines never look
    /// inside them.
    type State: Clone + Eq + Hash + Debug;
    /// Actions are appended to plans in the order they are taken.
    type Action: Clone + Debug;

    /// The state the search starts from.
    fn start_state(&self) -> Self::State;

    /// Whether the given state satisfies the goal.
    fn is_goal_state(&self, state: &Self::State) -> bool;

    /// The successors of the given state, in the order the problem wants them
    /// considered.
    fn successors(&self, state: &Self::State) -> Vec<Successor<Self::State, Self::Action>>;

    /// The total cost of executing the action sequence from the start state.
    /// For any sequence produced by a search engine this must equal the sum of
    /// the step costs reported by [`SearchProblem::successors`] along the way.
    /// What happens for sequences that are not executable is up to the
    /// implementation.
    fn cost_of_actions(&self, actions: &[Self::Action]) -> Cost;
}
