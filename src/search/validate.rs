use crate::search::{Cost, Plan, SearchProblem};
use thiserror::Error;

#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum ValidationError {
    #[error("step {step}: action {action} is not applicable in state {state}")]
    NotApplicable {
        step: usize,
        action: String,
        state: String,
    },
    #[error("plan does not reach a goal state, final state is {state}")]
    GoalNotReached { state: String },
}

/// Replay `plan` from the start state of `problem` and return its total cost.
/// Every step must be one of the transitions offered by
/// [`SearchProblem::expand`] and the final state must be a goal.
pub fn validate<P>(plan: &Plan<P::Action>, problem: &P) -> Result<Cost, ValidationError>
where
    P: SearchProblem,
    P::Action: PartialEq,
{
    let mut cur_state = problem.start_state();
    let mut total_cost: Cost = (0.).into();
    for (step, action) in plan.steps().iter().enumerate() {
        let transition = problem
            .expand(&cur_state)
            .into_iter()
            .find(|(_, candidate, _)| candidate == action);

        match transition {
            Some((successor, _, cost)) => {
                total_cost += cost;
                cur_state = successor;
            }
            None => {
                return Err(ValidationError::NotApplicable {
                    step,
                    action: format!("{:?}", action),
                    state: format!("{:?}", cur_state),
                })
            }
        }
    }

    if !problem.is_goal(&cur_state) {
        return Err(ValidationError::GoalNotReached {
            state: format!("{:?}", cur_state),
        });
    }

    Ok(total_cost)
}
