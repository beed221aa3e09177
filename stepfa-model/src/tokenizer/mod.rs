use self::error::{LexError, LexResult};
use crate::{Alphabet, AlphabetSymbol};

pub(crate) mod error;

/// Longest-match tokenizer splitting a word into symbols of an [`Alphabet`].
///
/// At every position the longest symbol matching the remaining input is
/// consumed. The match is greedy: a shorter match that would allow the rest of
/// the word to be tokenized is never tried.
pub struct Tokenizer<'a> {
    /// Input to be tokenized.
    pub input: &'a str,
    alphabet: &'a Alphabet,
    /// Byte offset of the next token.
    pos: usize,
    /// Set once a position could not be matched. The iterator is fused after
    /// returning the error.
    failed: bool,
}

/// Symbol of the alphabet found in the input.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Token<'a> {
    pub symbol: &'a AlphabetSymbol,
    /// Start and end byte offset of the token in the input. The end points one
    /// position beyond the end of the token.
    pub pos: (usize, usize),
}

impl<'a> Tokenizer<'a> {
    /// Creates a new [`Tokenizer`].
    pub fn new(alphabet: &'a Alphabet, input: &'a str) -> Self {
        Self {
            input,
            alphabet,
            pos: 0,
            failed: false,
        }
    }
}

impl<'a> Iterator for Tokenizer<'a> {
    type Item = LexResult<Token<'a>>;

    fn next(&mut self) -> Option<Self::Item> {
        if self.failed || self.pos >= self.input.len() {
            return None;
        }

        match longest_match(self.alphabet, self.input, self.pos) {
            Some((symbol, len)) => {
                let start = self.pos;
                self.pos += len;
                Some(Ok(Token {
                    symbol,
                    pos: (start, self.pos),
                }))
            }
            None => {
                self.failed = true;
                Some(Err(LexError { pos: self.pos }))
            }
        }
    }
}

impl std::iter::FusedIterator for Tokenizer<'_> {}

/// Returns the longest symbol of the alphabet that `word` starts with at byte
/// offset `at`, along with its length in bytes.
///
/// Returns `None` when nothing matches, including when `at` is at (or past) the
/// end of the word or not on a `char` boundary.
pub fn longest_match<'a>(
    alphabet: &'a Alphabet,
    word: &str,
    at: usize,
) -> Option<(&'a AlphabetSymbol, usize)> {
    let rest = word.get(at..)?;

    rest.char_indices()
        .map(|(start, ch)| start + ch.len_utf8())
        .rev()
        .find_map(|end| alphabet.get(&rest[..end]).map(|symbol| (symbol, end)))
}

/// Tokenizes the complete word.
pub fn tokenize<'a>(alphabet: &'a Alphabet, word: &'a str) -> LexResult<Vec<Token<'a>>> {
    Tokenizer::new(alphabet, word).collect()
}

/// Whether the word can be written using the symbols of the alphabet.
pub fn is_expressible(alphabet: &Alphabet, word: &str) -> bool {
    Tokenizer::new(alphabet, word).all(|token| token.is_ok())
}
