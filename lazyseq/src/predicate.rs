use std::collections::{BTreeSet, HashSet};
use std::hash::{BuildHasher, Hash};

/// Decides whether an element qualifies.
///
/// Closures taking `&T` are predicates, and so are sets: a set tests
/// membership. Operators accept any `Predicate` and normalize it once,
/// before the first element is tested.
///
/// Closures need their argument type written out (`|x: &i64| *x > 2`) so
/// that they are generic over the reference lifetime.
pub trait Predicate<T> {
    fn test(&mut self, item: &T) -> bool;
}

impl<T, F> Predicate<T> for F
where
    F: FnMut(&T) -> bool,
{
    #[inline]
    fn test(&mut self, item: &T) -> bool {
        self(item)
    }
}

impl<T, S> Predicate<T> for HashSet<T, S>
where
    T: Hash + Eq,
    S: BuildHasher,
{
    #[inline]
    fn test(&mut self, item: &T) -> bool {
        self.contains(item)
    }
}

impl<T> Predicate<T> for BTreeSet<T>
where
    T: Ord,
{
    #[inline]
    fn test(&mut self, item: &T) -> bool {
        self.contains(item)
    }
}

/// A predicate whose shape is only known at runtime: either a function or
/// a set of allowed values.
pub enum Pred<'a, T> {
    Fn(Box<dyn FnMut(&T) -> bool + 'a>),
    Set(ahash::HashSet<T>),
}

impl<'a, T> Pred<'a, T> {
    pub fn new(f: impl FnMut(&T) -> bool + 'a) -> Self {
        Pred::Fn(Box::new(f))
    }

    pub fn set(items: impl IntoIterator<Item = T>) -> Self
    where
        T: Hash + Eq,
    {
        Pred::Set(items.into_iter().collect())
    }
}

impl<T> Predicate<T> for Pred<'_, T>
where
    T: Hash + Eq,
{
    fn test(&mut self, item: &T) -> bool {
        match self {
            Pred::Fn(f) => f(item),
            Pred::Set(set) => set.contains(item),
        }
    }
}

impl<T> std::fmt::Debug for Pred<'_, T>
where
    T: std::fmt::Debug,
{
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Pred::Fn(_) => f.write_str("Pred::Fn(..)"),
            Pred::Set(set) => f.debug_tuple("Pred::Set").field(set).finish(),
        }
    }
}
