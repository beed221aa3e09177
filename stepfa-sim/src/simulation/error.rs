use stepfa_model::{LexError, ModelError};

use crate::ValidationError;

pub type SimulationResult<T> = Result<T, SimulationError>;

/// Reasons a simulation can not be started or advanced.
///
/// None of these are fatal: the simulation is left as it was before the call.
#[derive(Debug, Clone, Copy, PartialEq, Eq, thiserror::Error)]
pub enum SimulationError {
    /// The automaton breaks a structural rule.
    #[error(transparent)]
    Structural(#[from] ValidationError),
    /// The word can not be written with the alphabet.
    #[error(transparent)]
    Word(#[from] LexError),
    #[error(transparent)]
    Model(#[from] ModelError),
    #[error("precondition violated: the automaton has no initial state")]
    NoInitialState,
    #[error("precondition violated: the simulation was not initialized")]
    NotInitialized,
}
