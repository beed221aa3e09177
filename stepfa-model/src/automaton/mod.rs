pub use self::{
    error::ModelError,
    model::{Automaton, State, StateKind, Transition, TransitionId},
};

mod dot;
mod error;
mod model;
