//! Structural validation of automata and a steppable, depth-first simulation
//! of an automaton on an input word.
//!
//! The simulation never owns a clock. Automatic stepping goes through a
//! [`Scheduler`] supplied by the host, which reports fired timers back through
//! [`Simulation::on_timer`].

pub use config::{SimulationConfig, DEFAULT_SPEED, MAX_SPEED};
pub use scheduler::{ManualScheduler, Scheduler, TimerHandle};
pub use simulation::{
    ActiveElement, Simulation, SimulationError, SimulationEvent, SimulationResult, Status, Step,
    TraversalItem, Verdict,
};
pub use validator::{validate, validate_word, ValidationError, ValidationErrorKind};

mod config;
mod scheduler;
mod simulation;
mod validator;
