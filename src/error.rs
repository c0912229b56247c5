use thiserror::Error;

#[derive(Debug, Error)]
pub enum SequenceError {
    #[error("Invalid position {0} for sequence of length {1}")]
    InvalidPosition(usize, usize),

    #[error("Cannot create a range between cursors of two different sequences")]
    RangeMismatch,

    #[error("Cannot create a negative length range")]
    NegativeLengthRange,

    #[error("Cannot advance cursor, position would overflow")]
    PositionOverflow,

    #[error("Reached the end of the sequence")]
    Eof,
}
