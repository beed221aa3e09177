//! Editable model of a finite automaton: its alphabet, the graph of states and
//! transitions, and the longest-match tokenizer used to read input words.

pub use alphabet::{Alphabet, AlphabetSymbol};
pub use automaton::{Automaton, ModelError, State, StateKind, Transition, TransitionId};
pub use tokenizer::{
    error::{LexError, LexResult},
    is_expressible, longest_match, tokenize, Token, Tokenizer,
};

/// Stable id of a state. Ids are handed out in creation order and never reused.
pub type StateId = usize;

mod alphabet;
mod automaton;
mod tokenizer;
