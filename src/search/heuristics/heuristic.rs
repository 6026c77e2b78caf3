use crate::search::SearchProblem;
use ordered_float::OrderedFloat;
use std::fmt::{self, Debug};

pub type HeuristicValue = OrderedFloat<f64>;

/// A heuristic estimates the remaining cost from a state to the nearest goal.
/// Values must be non-negative. A* only returns optimal plans when the
/// heuristic is admissible, i.e. never overestimates; this is not checked.
pub trait Heuristic<P: SearchProblem>: Debug {
    /// Evaluate the given state with respect to the given problem.
    fn evaluate(&mut self, state: &P::State, problem: &P) -> HeuristicValue;
}

impl<P: SearchProblem> Heuristic<P> for Box<dyn Heuristic<P>> {
    fn evaluate(&mut self, state: &P::State, problem: &P) -> HeuristicValue {
        (**self).evaluate(state, problem)
    }
}

/// A heuristic backed by a plain function or closure, see [`from_fn`].
#[derive(Clone)]
pub struct FnHeuristic<F> {
    f: F,
}

impl<F> Debug for FnHeuristic<F> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("FnHeuristic").finish_non_exhaustive()
    }
}

impl<P, F> Heuristic<P> for FnHeuristic<F>
where
    P: SearchProblem,
    F: FnMut(&P::State, &P) -> f64,
{
    fn evaluate(&mut self, state: &P::State, problem: &P) -> HeuristicValue {
        OrderedFloat((self.f)(state, problem))
    }
}

/// Wrap a function of `(state, problem)` into a [`Heuristic`].
pub fn from_fn<F>(f: F) -> FnHeuristic<F> {
    FnHeuristic { f }
}
