use super::ModelError;
use crate::{Alphabet, AlphabetSymbol, StateId};

#[cfg(test)]
use proptest_derive::Arbitrary;

/// Finite automaton as edited by the user.
///
/// States live in an arena ordered by creation. Transitions are owned by their
/// origin state and point to their destination using its [`StateId`], so the
/// graph never holds references to itself.
#[derive(Debug, Clone, Default)]
pub struct Automaton {
    alphabet: Alphabet,
    states: Vec<State>,
    /// Set by the user, never derived from the transitions.
    deterministic: bool,
    /// Next id handed out by [`Automaton::create_state`]. Ids are never reused.
    state_auto_increment: StateId,
}

/// Role of a state in the automaton.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash)]
#[cfg_attr(test, derive(Arbitrary))]
pub enum StateKind {
    Initial,
    Final,
    #[default]
    Normal,
    /// Both initial and final.
    Ambivalent,
}

/// A state in the [`Automaton`].
///
/// Note (state equality): states are compared by their id only. The id is
/// unique within one [`Automaton`], comparing states of different automata
/// gives meaningless results.
#[derive(Debug, Clone)]
pub struct State {
    /// Id of the state used by transitions as a pointer.
    id: StateId,
    /// Display name, `q<id>` unless renamed.
    name: String,
    kind: StateKind,
    /// Outgoing transitions in declaration order.
    transitions: Vec<Transition>,
}

/// Identifies a [`Transition`] by its endpoints. There is at most one
/// transition per ordered pair of states.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct TransitionId {
    pub origin: StateId,
    pub destination: StateId,
}

/// Directed edge between two states.
///
/// An empty condition set makes this an epsilon move: it can always be taken
/// and does not consume input.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Transition {
    origin: StateId,
    destination: StateId,
    /// Sorted, without duplicates.
    conditions: Vec<AlphabetSymbol>,
}

impl Automaton {
    /// Creates an empty automaton.
    pub fn new(deterministic: bool) -> Self {
        Self {
            deterministic,
            ..Default::default()
        }
    }

    pub fn is_deterministic(&self) -> bool {
        self.deterministic
    }

    pub fn set_deterministic(&mut self, deterministic: bool) {
        self.deterministic = deterministic;
    }

    pub fn alphabet(&self) -> &Alphabet {
        &self.alphabet
    }

    /// Adds a symbol to the alphabet. Returns `false` if it was already there.
    pub fn add_symbol(&mut self, symbol: impl Into<AlphabetSymbol>) -> bool {
        self.alphabet.add(symbol)
    }

    /// Adds a comma separated list of symbols to the alphabet.
    pub fn add_symbols(&mut self, input: &str) -> usize {
        self.alphabet.add_list(input)
    }

    /// Removes a symbol from the alphabet and strips it from the conditions of
    /// every transition. Returns whether the symbol was part of the alphabet.
    pub fn remove_symbol(&mut self, symbol: &str) -> bool {
        let removed = self.alphabet.remove(symbol);

        let stripped = self
            .states
            .iter_mut()
            .flat_map(|state| state.transitions.iter_mut())
            .map(|transition| transition.remove_condition(symbol))
            .filter(|stripped| *stripped)
            .count();

        tracing::debug!(symbol, removed, stripped, "removed symbol from alphabet");
        removed
    }

    /// Creates a new state and returns its id.
    ///
    /// The first state ever created is the initial state, all following states
    /// are normal states.
    pub fn create_state(&mut self) -> StateId {
        let id = self.state_auto_increment;
        self.state_auto_increment += 1;

        let kind = if id == 0 {
            StateKind::Initial
        } else {
            StateKind::Normal
        };

        self.states.push(State::new(id, kind));
        id
    }

    /// Deletes a state along with all transitions pointing to it.
    pub fn delete_state(&mut self, state_id: StateId) -> Option<State> {
        let index = self.state_index(state_id)?;
        let state = self.states.remove(index);

        for other in self.states.iter_mut() {
            other
                .transitions
                .retain(|transition| transition.destination != state_id);
        }

        tracing::debug!(state = state_id, "deleted state");
        Some(state)
    }

    /// Sets the kind of a state.
    pub fn set_kind(&mut self, state_id: StateId, kind: StateKind) -> Result<(), ModelError> {
        self.state_mut(state_id)?.kind = kind;
        Ok(())
    }

    /// Flips whether the state is initial, keeping whether it is final.
    pub fn toggle_initial(&mut self, state_id: StateId) -> Result<StateKind, ModelError> {
        let state = self.state_mut(state_id)?;
        state.kind = state.kind.toggle_initial();
        Ok(state.kind)
    }

    /// Flips whether the state is final, keeping whether it is initial.
    pub fn toggle_final(&mut self, state_id: StateId) -> Result<StateKind, ModelError> {
        let state = self.state_mut(state_id)?;
        state.kind = state.kind.toggle_final();
        Ok(state.kind)
    }

    pub fn rename_state(
        &mut self,
        state_id: StateId,
        name: impl Into<String>,
    ) -> Result<(), ModelError> {
        self.state_mut(state_id)?.name = name.into();
        Ok(())
    }

    /// Creates a transition between two states. When a transition between the
    /// two states already exists, no new transition is created and the id of
    /// the existing one is returned.
    pub fn add_transition(
        &mut self,
        origin: StateId,
        destination: StateId,
    ) -> Result<TransitionId, ModelError> {
        if self.state_index(destination).is_none() {
            return Err(ModelError::UnknownState(destination));
        }

        let state = self.state_mut(origin)?;
        if state.transition_to(destination).is_none() {
            state
                .transitions
                .push(Transition::new(origin, destination));
        }

        Ok(TransitionId {
            origin,
            destination,
        })
    }

    /// Deletes the transition from its origin state.
    pub fn delete_transition(&mut self, id: TransitionId) -> Option<Transition> {
        let state = self.state_mut(id.origin).ok()?;
        let index = state
            .transitions
            .iter()
            .position(|transition| transition.destination == id.destination)?;

        Some(state.transitions.remove(index))
    }

    /// Adds a condition to the transition.
    ///
    /// Symbols that are not part of the alphabet are ignored. Returns whether
    /// the condition set changed.
    pub fn add_condition(&mut self, id: TransitionId, symbol: &str) -> Result<bool, ModelError> {
        let Some(symbol) = self.alphabet.get(symbol).cloned() else {
            self.transition(id).ok_or(ModelError::UnknownTransition(id))?;
            return Ok(false);
        };

        Ok(self.transition_mut(id)?.add_condition(symbol))
    }

    /// Adds every symbol of a comma separated list as a condition. Returns the
    /// amount of conditions that were added.
    pub fn add_conditions(&mut self, id: TransitionId, input: &str) -> Result<usize, ModelError> {
        let mut added = 0;
        for symbol in input.split(',').map(str::trim).filter(|s| !s.is_empty()) {
            if self.add_condition(id, symbol)? {
                added += 1;
            }
        }

        Ok(added)
    }

    /// Removes a condition from the transition. Returns whether it was present.
    pub fn remove_condition(&mut self, id: TransitionId, symbol: &str) -> Result<bool, ModelError> {
        Ok(self.transition_mut(id)?.remove_condition(symbol))
    }

    /// Returns all states in creation order.
    pub fn states(&self) -> &[State] {
        &self.states
    }

    /// Returns the state with the given id, if it exists.
    pub fn state(&self, state_id: StateId) -> Option<&State> {
        self.states.iter().find(|State { id, .. }| *id == state_id)
    }

    /// Returns the first state that is initial (or ambivalent).
    pub fn initial_state(&self) -> Option<&State> {
        self.states.iter().find(|state| state.kind.is_initial())
    }

    /// Returns an iterator over all states that are final (or ambivalent).
    pub fn final_states(&self) -> impl Iterator<Item = &State> + '_ {
        self.states.iter().filter(|state| state.kind.is_final())
    }

    pub fn transition(&self, id: TransitionId) -> Option<&Transition> {
        self.state(id.origin)?.transition_to(id.destination)
    }

    /// Returns an iterator over every transition, grouped by origin state.
    pub fn transitions(&self) -> impl Iterator<Item = &Transition> + '_ {
        self.states.iter().flat_map(|state| state.transitions.iter())
    }

    fn state_index(&self, state_id: StateId) -> Option<usize> {
        self.states.iter().position(|State { id, .. }| *id == state_id)
    }

    fn state_mut(&mut self, state_id: StateId) -> Result<&mut State, ModelError> {
        self.states
            .iter_mut()
            .find(|State { id, .. }| *id == state_id)
            .ok_or(ModelError::UnknownState(state_id))
    }

    fn transition_mut(&mut self, id: TransitionId) -> Result<&mut Transition, ModelError> {
        self.states
            .iter_mut()
            .find(|State { id: state_id, .. }| *state_id == id.origin)
            .and_then(|state| {
                state
                    .transitions
                    .iter_mut()
                    .find(|transition| transition.destination == id.destination)
            })
            .ok_or(ModelError::UnknownTransition(id))
    }
}

impl StateKind {
    fn from_flags(initial: bool, fin: bool) -> Self {
        match (initial, fin) {
            (true, true) => Self::Ambivalent,
            (true, false) => Self::Initial,
            (false, true) => Self::Final,
            (false, false) => Self::Normal,
        }
    }

    /// Whether a word can start in this state.
    pub fn is_initial(self) -> bool {
        matches!(self, Self::Initial | Self::Ambivalent)
    }

    /// Whether a word ending in this state is accepted.
    pub fn is_final(self) -> bool {
        matches!(self, Self::Final | Self::Ambivalent)
    }

    pub fn toggle_initial(self) -> Self {
        Self::from_flags(!self.is_initial(), self.is_final())
    }

    pub fn toggle_final(self) -> Self {
        Self::from_flags(self.is_initial(), !self.is_final())
    }
}

impl State {
    fn new(id: StateId, kind: StateKind) -> Self {
        Self {
            id,
            name: format!("q{}", id),
            kind,
            transitions: Vec::new(),
        }
    }

    pub fn id(&self) -> StateId {
        self.id
    }

    pub fn name(&self) -> &str {
        &self.name
    }

    pub fn kind(&self) -> StateKind {
        self.kind
    }

    /// Outgoing transitions in declaration order.
    pub fn transitions(&self) -> &[Transition] {
        &self.transitions
    }

    /// Returns the transition from this state to `destination`, if any.
    pub fn transition_to(&self, destination: StateId) -> Option<&Transition> {
        self.transitions
            .iter()
            .find(|transition| transition.destination == destination)
    }
}

impl PartialEq for State {
    fn eq(&self, other: &Self) -> bool {
        self.id == other.id
    }
}

impl Eq for State {}

impl Transition {
    fn new(origin: StateId, destination: StateId) -> Self {
        Self {
            origin,
            destination,
            conditions: Vec::new(),
        }
    }

    pub fn id(&self) -> TransitionId {
        TransitionId {
            origin: self.origin,
            destination: self.destination,
        }
    }

    pub fn origin(&self) -> StateId {
        self.origin
    }

    pub fn destination(&self) -> StateId {
        self.destination
    }

    /// Conditions of the transition in lexicographic order.
    pub fn conditions(&self) -> &[AlphabetSymbol] {
        &self.conditions
    }

    /// Whether the transition can be taken without consuming input.
    pub fn is_epsilon(&self) -> bool {
        self.conditions.is_empty()
    }

    pub fn has_condition(&self, symbol: &str) -> bool {
        self.conditions.iter().any(|c| c.as_str() == symbol)
    }

    /// Whether the transition can be taken when `symbol` is the next input.
    pub fn accepts(&self, symbol: &str) -> bool {
        self.is_epsilon() || self.has_condition(symbol)
    }

    fn add_condition(&mut self, symbol: AlphabetSymbol) -> bool {
        match self.conditions.binary_search(&symbol) {
            Ok(_) => false,
            Err(index) => {
                self.conditions.insert(index, symbol);
                true
            }
        }
    }

    fn remove_condition(&mut self, symbol: &str) -> bool {
        match self.conditions.iter().position(|c| c.as_str() == symbol) {
            Some(index) => {
                self.conditions.remove(index);
                true
            }
            None => false,
        }
    }
}

/// Comma separated conditions, or `∅` for an epsilon transition.
impl std::fmt::Display for Transition {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        if self.is_epsilon() {
            return write!(f, "\u{2205}");
        }

        write!(
            f,
            "{}",
            self.conditions
                .iter()
                .map(AlphabetSymbol::as_str)
                .collect::<Vec<_>>()
                .join(", ")
        )
    }
}

impl std::fmt::Display for TransitionId {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{} -> {}", self.origin, self.destination)
    }
}
