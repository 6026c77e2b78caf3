use crate::search::{Plan, SearchProblem};
use itertools::Itertools;
use std::fmt::Debug;
use thiserror::Error;

#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum ValidationError {
    #[error("action {action} at step {step} is not applicable in any of the states {states}")]
    NotApplicable {
        step: usize,
        action: String,
        states: String,
    },
    #[error("plan does not reach a goal state, final states are: {final_states}")]
    GoalNotReached { final_states: String },
}

fn describe<S: Debug>(states: &[S]) -> String {
    states.iter().map(|state| format!("{:?}", state)).join(", ")
}

/// Replay a plan from the start state of the problem. Each action must be the
/// action of a successor of a state the plan can be in. Successors may share
/// an action, so every matching successor is followed. Returns the first goal
/// state the plan can end in.
pub fn validate<P>(plan: &Plan<P::Action>, problem: &P) -> Result<P::State, ValidationError>
where
    P: SearchProblem,
    P::Action: PartialEq,
{
    let mut cur_states = vec![problem.start_state()];
    for (step, action) in plan.iter().enumerate() {
        let mut next_states: Vec<P::State> = vec![];
        for state in &cur_states {
            for successor in problem.successors(state) {
                if successor.action == *action && !next_states.contains(&successor.state) {
                    next_states.push(successor.state);
                }
            }
        }

        if next_states.is_empty() {
            return Err(ValidationError::NotApplicable {
                step,
                action: format!("{:?}", action),
                states: describe(&cur_states),
            });
        }
        cur_states = next_states;
    }

    match cur_states
        .iter()
        .position(|state| problem.is_goal_state(state))
    {
        Some(index) => Ok(cur_states.swap_remove(index)),
        None => Err(ValidationError::GoalNotReached {
            final_states: describe(&cur_states),
        }),
    }
}
