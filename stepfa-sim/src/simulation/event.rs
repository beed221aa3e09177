use stepfa_model::{StateId, TransitionId};

/// Element of the automaton the simulation is currently at.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum ActiveElement {
    State(StateId),
    Transition(TransitionId),
}

/// Outcome of a simulation run.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Verdict {
    Accepted,
    Rejected,
}

/// Notification for whoever presents the simulation.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SimulationEvent {
    /// The highlighted element changed. `None` clears the highlight.
    ActiveElementChanged(Option<ActiveElement>),
    Accepted,
    Rejected,
}

impl Verdict {
    pub fn is_accepted(self) -> bool {
        self == Self::Accepted
    }
}

impl From<Verdict> for SimulationEvent {
    fn from(value: Verdict) -> Self {
        match value {
            Verdict::Accepted => Self::Accepted,
            Verdict::Rejected => Self::Rejected,
        }
    }
}

impl std::fmt::Display for Verdict {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Verdict::Accepted => write!(f, "The word is valid"),
            Verdict::Rejected => write!(f, "The word is invalid"),
        }
    }
}
