/// A single symbol of an [`Alphabet`].
///
/// Symbols are compared by exact string equality and may be longer than one
/// character (e.g., `ab` is a single symbol when it is part of the alphabet).
#[derive(Debug, Clone, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct AlphabetSymbol(String);

impl AlphabetSymbol {
    /// Creates a new [`AlphabetSymbol`].
    pub fn new(symbol: impl Into<String>) -> Self {
        Self(symbol.into())
    }

    /// Returns the source string of the symbol.
    pub fn as_str(&self) -> &str {
        &self.0
    }

    /// Length of the symbol in bytes.
    pub fn len(&self) -> usize {
        self.0.len()
    }

    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }
}

impl From<&str> for AlphabetSymbol {
    fn from(value: &str) -> Self {
        Self::new(value)
    }
}

impl From<String> for AlphabetSymbol {
    fn from(value: String) -> Self {
        Self(value)
    }
}

impl AsRef<str> for AlphabetSymbol {
    fn as_ref(&self) -> &str {
        &self.0
    }
}

impl std::fmt::Display for AlphabetSymbol {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.0)
    }
}

/// Ordered set of [`AlphabetSymbol`]s.
///
/// The symbols are kept sorted lexicographically and never contain duplicates.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Alphabet {
    symbols: Vec<AlphabetSymbol>,
}

impl Alphabet {
    /// Creates a new empty [`Alphabet`].
    pub fn new() -> Self {
        Self::default()
    }

    /// Adds a symbol to the alphabet. Returns `false` when an equal symbol is
    /// already present, in which case nothing changes.
    pub fn add(&mut self, symbol: impl Into<AlphabetSymbol>) -> bool {
        let symbol = symbol.into();
        match self.symbols.binary_search(&symbol) {
            Ok(_) => false,
            Err(index) => {
                self.symbols.insert(index, symbol);
                true
            }
        }
    }

    /// Adds every symbol of a comma separated list (e.g., `a, b ,ab`).
    ///
    /// Entries are trimmed and empty entries are skipped. Returns the amount of
    /// symbols that were not yet part of the alphabet.
    pub fn add_list(&mut self, input: &str) -> usize {
        input
            .split(',')
            .map(str::trim)
            .filter(|symbol| !symbol.is_empty())
            .filter(|symbol| self.add(*symbol))
            .count()
    }

    /// Removes the symbol from the alphabet. Returns whether it was present.
    pub fn remove(&mut self, symbol: &str) -> bool {
        match self.position(symbol) {
            Some(index) => {
                self.symbols.remove(index);
                true
            }
            None => false,
        }
    }

    /// Whether the alphabet contains a symbol equal to `symbol`.
    pub fn contains(&self, symbol: &str) -> bool {
        self.position(symbol).is_some()
    }

    /// Returns the alphabet's own copy of `symbol`, if present.
    pub fn get(&self, symbol: &str) -> Option<&AlphabetSymbol> {
        self.position(symbol).map(|index| &self.symbols[index])
    }

    /// Iterates over the symbols in lexicographic order.
    pub fn iter(&self) -> impl Iterator<Item = &AlphabetSymbol> + '_ {
        self.symbols.iter()
    }

    pub fn len(&self) -> usize {
        self.symbols.len()
    }

    pub fn is_empty(&self) -> bool {
        self.symbols.is_empty()
    }

    fn position(&self, symbol: &str) -> Option<usize> {
        self.symbols.iter().position(|s| s.as_str() == symbol)
    }
}

impl<S: Into<AlphabetSymbol>> FromIterator<S> for Alphabet {
    fn from_iter<T: IntoIterator<Item = S>>(iter: T) -> Self {
        let mut alphabet = Self::new();
        for symbol in iter {
            alphabet.add(symbol);
        }
        alphabet
    }
}

/// Formal set notation, e.g. `Σ = {a, b}`.
impl std::fmt::Display for Alphabet {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        if self.symbols.is_empty() {
            return write!(f, "\u{03A3} = {{ \u{2205} }}");
        }

        write!(
            f,
            "\u{03A3} = {{{}}}",
            self.symbols
                .iter()
                .map(AlphabetSymbol::as_str)
                .collect::<Vec<_>>()
                .join(", ")
        )
    }
}
