//! Element-wise transformations.
use std::hash::Hash;

use ahash::{HashSet, HashSetExt};

use crate::predicate::Predicate;

/// Apply `f` to every element.
pub fn map<I, F, U>(f: F, seq: I) -> std::iter::Map<I::IntoIter, F>
where
    I: IntoIterator,
    F: FnMut(I::Item) -> U,
{
    seq.into_iter().map(f)
}

/// Apply `f` positionally across two sequences, stopping at the shorter.
pub fn map2<A, B, F, U>(mut f: F, a: A, b: B) -> impl Iterator<Item = U>
where
    A: IntoIterator,
    B: IntoIterator,
    F: FnMut(A::Item, B::Item) -> U,
{
    a.into_iter().zip(b).map(move |(a, b)| f(a, b))
}

/// Apply `f` positionally across three sequences, stopping at the shortest.
pub fn map3<A, B, C, F, U>(mut f: F, a: A, b: B, c: C) -> impl Iterator<Item = U>
where
    A: IntoIterator,
    B: IntoIterator,
    C: IntoIterator,
    F: FnMut(A::Item, B::Item, C::Item) -> U,
{
    a.into_iter()
        .zip(b)
        .zip(c)
        .map(move |((a, b), c)| f(a, b, c))
}

/// Apply `f` positionally across any number of sequences of the same
/// element type.
///
/// `f` receives one element from each sequence, in order. Output stops as
/// soon as any sequence runs out; with no sequences there is no output.
pub fn map_n<S, I, F, U>(f: F, seqs: S) -> MapN<I::IntoIter, F>
where
    S: IntoIterator<Item = I>,
    I: IntoIterator,
    F: FnMut(&[I::Item]) -> U,
{
    MapN::new(f, seqs.into_iter().map(IntoIterator::into_iter).collect())
}

pub struct MapN<I, F>
where
    I: Iterator,
{
    iters: Vec<I>,
    f: F,
    args: Vec<I::Item>,
    done: bool,
}

impl<I, F> MapN<I, F>
where
    I: Iterator,
{
    fn new(f: F, iters: Vec<I>) -> Self {
        let done = iters.is_empty();
        MapN {
            args: Vec::with_capacity(iters.len()),
            iters,
            f,
            done,
        }
    }
}

impl<I, F, U> Iterator for MapN<I, F>
where
    I: Iterator,
    F: FnMut(&[I::Item]) -> U,
{
    type Item = U;

    fn next(&mut self) -> Option<U> {
        if self.done {
            return None;
        }
        self.args.clear();
        for iter in &mut self.iters {
            match iter.next() {
                Some(arg) => self.args.push(arg),
                None => {
                    self.done = true;
                    self.args.clear();
                    return None;
                }
            }
        }
        Some((self.f)(&self.args))
    }

    fn size_hint(&self) -> (usize, Option<usize>) {
        if self.done {
            return (0, Some(0));
        }
        self.iters
            .iter()
            .map(Iterator::size_hint)
            .reduce(|(lower_a, upper_a), (lower_b, upper_b)| {
                let upper = match (upper_a, upper_b) {
                    (Some(a), Some(b)) => Some(a.min(b)),
                    (a, b) => a.or(b),
                };
                (lower_a.min(lower_b), upper)
            })
            .unwrap_or((0, Some(0)))
    }
}

/// The elements for which `pred` holds.
pub fn filter<I, P>(pred: P, seq: I) -> Filter<I::IntoIter, P>
where
    I: IntoIterator,
    P: Predicate<I::Item>,
{
    Filter {
        iter: seq.into_iter(),
        pred,
        keep: true,
    }
}

/// The elements for which `pred` does not hold; the complement of `filter`.
pub fn remove<I, P>(pred: P, seq: I) -> Filter<I::IntoIter, P>
where
    I: IntoIterator,
    P: Predicate<I::Item>,
{
    Filter {
        iter: seq.into_iter(),
        pred,
        keep: false,
    }
}

pub struct Filter<I, P> {
    iter: I,
    pred: P,
    keep: bool,
}

impl<I, P> Iterator for Filter<I, P>
where
    I: Iterator,
    P: Predicate<I::Item>,
{
    type Item = I::Item;

    fn next(&mut self) -> Option<I::Item> {
        let keep = self.keep;
        let pred = &mut self.pred;
        self.iter.find(|item| pred.test(item) == keep)
    }

    fn size_hint(&self) -> (usize, Option<usize>) {
        let (_, upper) = self.iter.size_hint();
        (0, upper)
    }
}

/// The present results of `f`.
///
/// Only `None` is dropped: a `Some(false)` result is kept.
pub fn keep<I, F, U>(f: F, seq: I) -> std::iter::FilterMap<I::IntoIter, F>
where
    I: IntoIterator,
    F: FnMut(I::Item) -> Option<U>,
{
    seq.into_iter().filter_map(f)
}

/// The present results of `f(index, element)`, counting from 0.
pub fn keep_indexed<I, F, U>(f: F, seq: I) -> KeepIndexed<I::IntoIter, F>
where
    I: IntoIterator,
    F: FnMut(usize, I::Item) -> Option<U>,
{
    KeepIndexed {
        iter: seq.into_iter(),
        f,
        index: 0,
    }
}

pub struct KeepIndexed<I, F> {
    iter: I,
    f: F,
    index: usize,
}

impl<I, F, U> Iterator for KeepIndexed<I, F>
where
    I: Iterator,
    F: FnMut(usize, I::Item) -> Option<U>,
{
    type Item = U;

    fn next(&mut self) -> Option<U> {
        for item in self.iter.by_ref() {
            let index = self.index;
            self.index += 1;
            if let Some(result) = (self.f)(index, item) {
                return Some(result);
            }
        }
        None
    }

    fn size_hint(&self) -> (usize, Option<usize>) {
        let (_, upper) = self.iter.size_hint();
        (0, upper)
    }
}

/// `f(index, element)` for every element, counting from 0.
pub fn map_indexed<I, F, U>(f: F, seq: I) -> MapIndexed<I::IntoIter, F>
where
    I: IntoIterator,
    F: FnMut(usize, I::Item) -> U,
{
    MapIndexed {
        iter: seq.into_iter(),
        f,
        index: 0,
    }
}

pub struct MapIndexed<I, F> {
    iter: I,
    f: F,
    index: usize,
}

impl<I, F, U> Iterator for MapIndexed<I, F>
where
    I: Iterator,
    F: FnMut(usize, I::Item) -> U,
{
    type Item = U;

    fn next(&mut self) -> Option<U> {
        let item = self.iter.next()?;
        let index = self.index;
        self.index += 1;
        Some((self.f)(index, item))
    }

    fn size_hint(&self) -> (usize, Option<usize>) {
        self.iter.size_hint()
    }
}

/// The elements with every repeat of an earlier element removed.
pub fn distinct<I>(seq: I) -> Distinct<I::IntoIter>
where
    I: IntoIterator,
    I::Item: Hash + Eq + Clone,
{
    Distinct {
        iter: seq.into_iter(),
        seen: HashSet::new(),
    }
}

pub struct Distinct<I>
where
    I: Iterator,
{
    iter: I,
    seen: HashSet<I::Item>,
}

impl<I> Iterator for Distinct<I>
where
    I: Iterator,
    I::Item: Hash + Eq + Clone,
{
    type Item = I::Item;

    fn next(&mut self) -> Option<I::Item> {
        let seen = &mut self.seen;
        self.iter.find(|item| seen.insert(item.clone()))
    }

    fn size_hint(&self) -> (usize, Option<usize>) {
        let (lower, upper) = self.iter.size_hint();
        (lower.min(1), upper)
    }
}

/// The elements with consecutive duplicates collapsed into one.
pub fn dedupe<I>(seq: I) -> Dedupe<I::IntoIter>
where
    I: IntoIterator,
    I::Item: PartialEq + Clone,
{
    Dedupe {
        iter: seq.into_iter(),
        previous: None,
    }
}

pub struct Dedupe<I>
where
    I: Iterator,
{
    iter: I,
    previous: Option<I::Item>,
}

impl<I> Iterator for Dedupe<I>
where
    I: Iterator,
    I::Item: PartialEq + Clone,
{
    type Item = I::Item;

    fn next(&mut self) -> Option<I::Item> {
        for item in self.iter.by_ref() {
            if self.previous.as_ref() != Some(&item) {
                self.previous = Some(item.clone());
                return Some(item);
            }
        }
        None
    }

    fn size_hint(&self) -> (usize, Option<usize>) {
        let (lower, upper) = self.iter.size_hint();
        (lower.min(1), upper)
    }
}

#[cfg(test)]
mod tests {
    use std::cell::Cell;
    use std::collections::HashSet;

    use super::*;

    #[test]
    fn test_map_stops_at_shortest() {
        let v: Vec<_> = map2(|a, b| a + b, vec![1, 2, 3], vec![10, 20]).collect();
        assert_eq!(v, vec![11, 22]);
        let v: Vec<_> = map3(|a, b, c| a * b * c, 1.., vec![2, 2], vec![3, 3, 3]).collect();
        assert_eq!(v, vec![6, 12]);
    }

    #[test]
    fn test_map_n() {
        let seqs = vec![vec![1, 2], vec![10, 20], vec![100]];
        let v: Vec<i32> = map_n(|xs: &[i32]| xs.iter().sum(), seqs).collect();
        assert_eq!(v, vec![111]);
    }

    #[test]
    fn test_map_n_no_sequences() {
        let seqs: Vec<Vec<i32>> = vec![];
        assert_eq!(map_n(|xs: &[i32]| xs.len(), seqs).count(), 0);
    }

    #[test]
    fn test_map_is_lazy() {
        let calls = Cell::new(0);
        let mut m = map(
            |x: i32| {
                calls.set(calls.get() + 1);
                x
            },
            1..,
        );
        assert_eq!(calls.get(), 0);
        m.next();
        assert_eq!(calls.get(), 1);
    }

    #[test]
    fn test_remove() {
        assert_eq!(remove(|_: &i32| true, Vec::<i32>::new()).count(), 0);
        assert_eq!(remove(|_: &i32| true, vec![1, 2, 3, 4]).count(), 0);
        assert_eq!(remove(|_: &i32| false, vec![1, 2, 3]).collect::<Vec<_>>(), vec![1, 2, 3]);
        assert_eq!(remove(|x: &i32| *x == 2, vec![1, 2, 3]).collect::<Vec<_>>(), vec![1, 3]);
    }

    #[test]
    fn test_filter_with_set() {
        let allowed: HashSet<char> = "aeiou".chars().collect();
        let vowels: String = filter(allowed, "lazy sequence".chars()).collect();
        assert_eq!(vowels, "aeuee");
    }

    #[test]
    fn test_keep() {
        assert_eq!(keep(|_: i32| Some(true), vec![]).count(), 0);
        assert_eq!(keep(|_: i32| None::<i32>, vec![1, 2, 3]).count(), 0);
        assert_eq!(keep(|_: i32| Some(false), vec![1, 2]).collect::<Vec<_>>(), vec![false, false]);
        assert_eq!(keep(|x| x, vec![Some(1), None, Some(2)]).collect::<Vec<_>>(), vec![1, 2]);
    }

    #[test]
    fn test_keep_indexed() {
        let v: Vec<_> = keep_indexed(
            |i, e| if i % 2 == 0 { Some(e) } else { None },
            vec!["a", "b", "c", "d"],
        )
        .collect();
        assert_eq!(v, vec!["a", "c"]);
    }

    #[test]
    fn test_map_indexed() {
        assert_eq!(map_indexed(|_, _: i32| 42, vec![]).count(), 0);
        assert_eq!(map_indexed(|i, _| i, vec![5, 3, 1]).collect::<Vec<_>>(), vec![0, 1, 2]);
        assert_eq!(
            map_indexed(|i, e| i as i32 + e, vec![5, 3, 1]).collect::<Vec<_>>(),
            vec![5, 4, 3]
        );
    }

    #[test]
    fn test_distinct() {
        assert_eq!(distinct(Vec::<i32>::new()).count(), 0);
        assert_eq!(distinct(vec![1]).collect::<Vec<_>>(), vec![1]);
        assert_eq!(distinct(vec![1, 2, 3, 4]).collect::<Vec<_>>(), vec![1, 2, 3, 4]);
        assert_eq!(distinct(vec![2, 1, 3, 1, 2, 3]).collect::<Vec<_>>(), vec![2, 1, 3]);
    }

    #[test]
    fn test_distinct_infinite() {
        let v: Vec<_> = distinct((0..).map(|x| x / 3)).take(3).collect();
        assert_eq!(v, vec![0, 1, 2]);
    }

    #[test]
    fn test_dedupe() {
        assert_eq!(dedupe(Vec::<i32>::new()).count(), 0);
        assert_eq!(
            dedupe(vec![1, 1, 2, 2, 2, 1, 3, 3]).collect::<Vec<_>>(),
            vec![1, 2, 1, 3]
        );
    }
}
