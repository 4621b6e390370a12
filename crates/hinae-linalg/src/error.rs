use thiserror::Error;

/// Violated preconditions of numeric operations.
///
/// The plain operations (`reciprocal`, [`Matrix4::inverse`], indexing, ...) panic with the
/// [`Display`] text of one of these variants. Their `checked_*` counterparts return it instead.
///
/// [`Matrix4::inverse`]: crate::Matrix4::inverse
/// [`Display`]: std::fmt::Display
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Error)]
pub enum MathError {
    #[error("division by zero")]
    DivisionByZero,
    #[error("index out of range: the len is {len} but the index is {index}")]
    IndexOutOfRange { index: usize, len: usize },
    #[error("attempt to invert a singular matrix")]
    SingularMatrix,
}

impl MathError {
    #[track_caller]
    pub(crate) fn raise(self) -> ! {
        panic!("{self}")
    }
}

/// Panics with [`MathError::IndexOutOfRange`] unless `index < len`.
#[track_caller]
#[inline]
pub(crate) fn check_index(index: usize, len: usize) {
    if index >= len {
        MathError::IndexOutOfRange { index, len }.raise();
    }
}
