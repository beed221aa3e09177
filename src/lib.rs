//! Step-by-step simulator for deterministic and nondeterministic finite
//! automata.
//!
//! The automaton model lives in [`stepfa_model`], validation and simulation in
//! [`stepfa_sim`]. Both are re-exported here.

pub use stepfa_model::{
    longest_match, tokenize, Alphabet, AlphabetSymbol, Automaton, LexError, ModelError, State,
    StateId, StateKind, Transition, TransitionId,
};
pub use stepfa_sim::{
    validate, validate_word, ActiveElement, ManualScheduler, Scheduler, Simulation,
    SimulationConfig, SimulationError, SimulationEvent, Status, Step, TimerHandle, ValidationError,
    ValidationErrorKind, Verdict, DEFAULT_SPEED, MAX_SPEED,
};
