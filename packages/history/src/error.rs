/// An error returned by the mutating operations of a [`SignaledVec`](crate::SignaledVec).
#[derive(Debug, Clone, Copy, PartialEq, Eq, thiserror::Error)]
pub enum SequenceError {
    /// The index does not point at an element of the sequence.
    #[error("index {index} is out of bounds for a sequence of length {len}")]
    OutOfBounds {
        /// The requested index.
        index: usize,
        /// The length of the sequence at the time of the request.
        len: usize,
    },
}

/// An error returned by [`NavHistory`](crate::NavHistory) operations.
#[derive(Debug, Clone, Copy, PartialEq, Eq, thiserror::Error)]
pub enum HistoryError {
    /// The operation needs a current location, but the history stack is empty.
    #[error("there is no current location to replace, the history stack is empty")]
    NoCurrentLocation,
}
