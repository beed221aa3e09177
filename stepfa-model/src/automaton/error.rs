use super::TransitionId;
use crate::StateId;

/// Misuse of the [`Automaton`](super::Automaton) editing operations, such as
/// referring to a state that was deleted.
#[derive(Debug, Clone, Copy, PartialEq, Eq, thiserror::Error)]
pub enum ModelError {
    #[error("state {0} does not exist in the automaton")]
    UnknownState(StateId),
    #[error("transition {0} does not exist in the automaton")]
    UnknownTransition(TransitionId),
}
