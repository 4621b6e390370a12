//! Shared text formatting helpers.

use std::fmt;

/// Writes `elems` as a parenthesized, comma-separated list using their [`fmt::Display`] impls.
///
/// Formatting flags (precision, width, `#`) apply to each element.
pub(crate) fn tuple<T: fmt::Display>(f: &mut fmt::Formatter<'_>, elems: &[T]) -> fmt::Result {
    struct DebugViaDisplay<'a, D>(&'a D);
    impl<D: fmt::Display> fmt::Debug for DebugViaDisplay<'_, D> {
        fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
            self.0.fmt(f)
        }
    }

    let mut tup = f.debug_tuple("");
    for elem in elems {
        tup.field(&DebugViaDisplay(elem));
    }
    tup.finish()
}
