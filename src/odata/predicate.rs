/// Filters items while collecting a list operation.
///
/// Implemented for closures and for the `*OperationPredicate` structs in
/// each service package, whose `None` fields match anything.
pub trait Predicate<T> {
    /// Returns `true` to keep `item`.
    fn matches(&self, item: &T) -> bool;
}

impl<T, F> Predicate<T> for F
where
    F: Fn(&T) -> bool,
{
    fn matches(&self, item: &T) -> bool {
        self(item)
    }
}

/// Returns `true` when `expected` is `None` or equals `actual`.
///
/// The building block of every `*OperationPredicate`.
#[must_use]
pub fn optional_eq<A, E>(expected: Option<&E>, actual: Option<&A>) -> bool
where
    A: PartialEq<E> + ?Sized,
    E: ?Sized,
{
    match expected {
        None => true,
        Some(expected) => actual.is_some_and(|actual| actual == expected),
    }
}
