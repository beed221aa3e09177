pub type LexResult<T> = Result<T, LexError>;

/// No symbol of the alphabet matches the input at byte offset `pos`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, thiserror::Error)]
#[error("[ERROR] ({pos}): the input word contains symbols not in the alphabet")]
pub struct LexError {
    pub pos: usize,
}
