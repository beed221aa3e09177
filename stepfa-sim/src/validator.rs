use std::collections::HashSet;

use stepfa_model::{is_expressible, Automaton, StateId};

/// The automaton does not satisfy the structural rules required for a
/// simulation.
///
/// The `culprit` is the state to point the user at, if there is one.
#[derive(Debug, Clone, Copy, PartialEq, Eq, thiserror::Error)]
#[error("{kind}")]
pub struct ValidationError {
    pub kind: ValidationErrorKind,
    pub culprit: Option<StateId>,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ValidationErrorKind {
    MultipleInitialStates,
    /// A deterministic automaton with an epsilon transition.
    KleeneClosure,
    /// A state of a deterministic automaton without a transition for some
    /// symbol.
    MissingSymbol,
    /// A state of a deterministic automaton with more than one transition for
    /// the same symbol.
    RepeatedSymbol,
    NoFinalState,
}

impl ValidationError {
    fn new(kind: ValidationErrorKind, culprit: Option<StateId>) -> Self {
        Self { kind, culprit }
    }

    /// Human readable description of the error.
    pub fn message(&self) -> &'static str {
        self.kind.message()
    }
}

impl ValidationErrorKind {
    pub fn message(self) -> &'static str {
        use ValidationErrorKind::*;
        match self {
            MultipleInitialStates => "An automaton can only have one initial state",
            KleeneClosure => "A DFA can't have Kleene Closures",
            MissingSymbol => "A DFA state must have a transition for each symbol in the alphabet.",
            RepeatedSymbol => "A DFA can only have one transition for each symbol in the alphabet.",
            NoFinalState => "There must be at least one final state",
        }
    }
}

impl std::fmt::Display for ValidationErrorKind {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.message())
    }
}

/// Checks whether the automaton can be simulated. Returns the first error
/// found, scanning the states in order.
pub fn validate(automaton: &Automaton) -> Option<ValidationError> {
    let error = find_error(automaton);

    if let Some(error) = error {
        tracing::warn!(culprit = ?error.culprit, "{}", error);
    }

    error
}

/// Whether the word can be written with the alphabet of the automaton.
pub fn validate_word(automaton: &Automaton, word: &str) -> bool {
    is_expressible(automaton.alphabet(), word)
}

fn find_error(automaton: &Automaton) -> Option<ValidationError> {
    use ValidationErrorKind::*;

    let alphabet_len = automaton.alphabet().len();
    let mut initial_states = 0;
    let mut final_states = 0;

    for state in automaton.states() {
        if state.kind().is_initial() {
            initial_states += 1;
            if initial_states > 1 {
                return Some(ValidationError::new(MultipleInitialStates, Some(state.id())));
            }
        }

        if state.kind().is_final() {
            final_states += 1;
        }

        if !automaton.is_deterministic() {
            continue;
        }

        if state.transitions().iter().any(|t| t.is_epsilon()) {
            return Some(ValidationError::new(KleeneClosure, Some(state.id())));
        }

        // Conditions of different transitions are concatenated, a symbol used
        // by two transitions counts twice.
        let conditions = state
            .transitions()
            .iter()
            .flat_map(|t| t.conditions())
            .collect::<Vec<_>>();

        if conditions.len() < alphabet_len {
            return Some(ValidationError::new(MissingSymbol, Some(state.id())));
        }

        let mut seen = HashSet::with_capacity(conditions.len());
        if !conditions.into_iter().all(|symbol| seen.insert(symbol)) {
            return Some(ValidationError::new(RepeatedSymbol, Some(state.id())));
        }
    }

    if final_states == 0 {
        return Some(ValidationError::new(NoFinalState, None));
    }

    None
}
