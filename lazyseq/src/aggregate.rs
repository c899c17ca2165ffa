use std::hash::Hash;
use std::iter::{Chain, Once, Rev};

use rand::seq::SliceRandom;
use rand::{Rng, SeedableRng};
use rand_xoshiro::Xoshiro256PlusPlus;

use crate::combine::OrderedMap;
use crate::error;
use crate::predicate::Predicate;
use crate::seqable::seq_or_empty;
use crate::window::{rest, DropN};

/// The first element, pulling nothing past it.
pub fn first<I: IntoIterator>(seq: I) -> Option<I::Item> {
    seq.into_iter().next()
}

/// The second element, pulling nothing past it.
pub fn second<I: IntoIterator>(seq: I) -> Option<I::Item> {
    seq.into_iter().nth(1)
}

/// The last element. Consumes the whole sequence.
pub fn last<I: IntoIterator>(seq: I) -> Option<I::Item> {
    seq.into_iter().last()
}

/// `first(first(seq))`.
pub fn ffirst<I>(seq: I) -> Option<<I::Item as IntoIterator>::Item>
where
    I: IntoIterator,
    I::Item: IntoIterator,
{
    first(seq).and_then(first)
}

/// `rest(first(seq))`; empty when `seq` is.
pub fn nfirst<I>(seq: I) -> DropN<std::iter::Flatten<std::option::IntoIter<I::Item>>>
where
    I: IntoIterator,
    I::Item: IntoIterator,
{
    rest(seq_or_empty(first(seq)))
}

/// The element at position `n`.
///
/// Slice and vector iterators jump straight to the position; other sources
/// are scanned. A negative `n` is always out of range. A missing position
/// yields `not_found` when given, else `OutOfRange`.
pub fn nth<I>(seq: I, n: isize, not_found: Option<I::Item>) -> error::Result<I::Item>
where
    I: IntoIterator,
{
    let found = usize::try_from(n)
        .ok()
        .and_then(|index| seq.into_iter().nth(index));
    match (found, not_found) {
        (Some(item), _) => Ok(item),
        (None, Some(not_found)) => Ok(not_found),
        (None, None) => Err(error::Error::out_of_range(n, "sequence")),
    }
}

/// Elements bucketed by `f`.
///
/// Buckets are in the order their key was first seen, and each bucket keeps
/// its elements in input order.
pub fn group_by<I, F, K>(mut f: F, seq: I) -> OrderedMap<K, Vec<I::Item>>
where
    I: IntoIterator,
    F: FnMut(&I::Item) -> K,
    K: Hash + Eq,
{
    let mut groups: OrderedMap<K, Vec<I::Item>> = OrderedMap::default();
    for item in seq {
        groups.entry(f(&item)).or_default().push(item);
    }
    groups
}

/// The first element that satisfies `pred`.
pub fn some<I, P>(mut pred: P, seq: I) -> Option<I::Item>
where
    I: IntoIterator,
    P: Predicate<I::Item>,
{
    seq.into_iter().find(|item| pred.test(item))
}

/// Does every element satisfy `pred`? Stops at the first that does not.
pub fn every<I, P>(mut pred: P, seq: I) -> bool
where
    I: IntoIterator,
    P: Predicate<I::Item>,
{
    seq.into_iter().all(|item| pred.test(&item))
}

pub fn not_every<I, P>(pred: P, seq: I) -> bool
where
    I: IntoIterator,
    P: Predicate<I::Item>,
{
    !every(pred, seq)
}

/// Does no element satisfy `pred`? Stops at the first that does.
pub fn not_any<I, P>(pred: P, seq: I) -> bool
where
    I: IntoIterator,
    P: Predicate<I::Item>,
{
    some(pred, seq).is_none()
}

/// Pull every element for its side effects.
pub fn dorun<I: IntoIterator>(seq: I) {
    for _ in seq {}
}

/// The number of elements. Constant time for sources that know their
/// length; otherwise the sequence is consumed.
pub fn count<I: IntoIterator>(seq: I) -> usize {
    seq.into_iter().count()
}

/// The running results of folding `seq` with `f`, starting with the first
/// element.
///
/// An empty sequence has no first element to start from, so it yields a
/// single `None` in place of a result. Every item is wrapped so that case
/// shares one item type with the rest: a non-empty sequence yields only
/// `Some`, and `.flatten()` recovers the plain values. Use
/// [`reductions_from`] when an initial value exists.
pub fn reductions<I, F>(f: F, seq: I) -> Reductions<I::IntoIter, F>
where
    I: IntoIterator,
    I::Item: Clone,
    F: FnMut(I::Item, I::Item) -> I::Item,
{
    Reductions {
        iter: seq.into_iter(),
        f,
        acc: None,
        started: false,
    }
}

pub struct Reductions<I, F>
where
    I: Iterator,
{
    iter: I,
    f: F,
    acc: Option<I::Item>,
    started: bool,
}

impl<I, F> Iterator for Reductions<I, F>
where
    I: Iterator,
    I::Item: Clone,
    F: FnMut(I::Item, I::Item) -> I::Item,
{
    type Item = Option<I::Item>;

    fn next(&mut self) -> Option<Option<I::Item>> {
        if !self.started {
            self.started = true;
            self.acc = self.iter.next();
            return Some(self.acc.clone());
        }
        let acc = self.acc.take()?;
        let item = self.iter.next()?;
        let acc = (self.f)(acc, item);
        self.acc = Some(acc.clone());
        Some(Some(acc))
    }

    fn size_hint(&self) -> (usize, Option<usize>) {
        let (lower, upper) = self.iter.size_hint();
        if !self.started {
            (lower.max(1), upper.map(|upper| upper.max(1)))
        } else if self.acc.is_none() {
            (0, Some(0))
        } else {
            (lower, upper)
        }
    }
}

/// The running results of folding `seq` with `f` from `init`.
///
/// `init` itself is yielded first, before `f` is ever called, so an empty
/// sequence yields just `init`.
pub fn reductions_from<I, F, A>(f: F, init: A, seq: I) -> ReductionsFrom<I::IntoIter, F, A>
where
    I: IntoIterator,
    F: FnMut(A, I::Item) -> A,
    A: Clone,
{
    ReductionsFrom {
        iter: seq.into_iter(),
        f,
        acc: Some(init),
        started: false,
    }
}

pub struct ReductionsFrom<I, F, A> {
    iter: I,
    f: F,
    acc: Option<A>,
    started: bool,
}

impl<I, F, A> Iterator for ReductionsFrom<I, F, A>
where
    I: Iterator,
    F: FnMut(A, I::Item) -> A,
    A: Clone,
{
    type Item = A;

    fn next(&mut self) -> Option<A> {
        if !self.started {
            self.started = true;
            return self.acc.clone();
        }
        let acc = self.acc.take()?;
        let item = self.iter.next()?;
        let acc = (self.f)(acc, item);
        self.acc = Some(acc.clone());
        Some(acc)
    }

    fn size_hint(&self) -> (usize, Option<usize>) {
        if self.acc.is_none() {
            return (0, Some(0));
        }
        let (lower, upper) = self.iter.size_hint();
        let head = usize::from(!self.started);
        (
            lower.saturating_add(head),
            upper.and_then(|upper| upper.checked_add(head)),
        )
    }
}

/// `None` for an empty sequence, otherwise an equivalent sequence.
///
/// One element is pulled to find out; it leads the returned sequence.
pub fn seq<I>(coll: I) -> Option<Chain<Once<I::Item>, I::IntoIter>>
where
    I: IntoIterator,
{
    let mut iter = coll.into_iter();
    let head = iter.next()?;
    Some(std::iter::once(head).chain(iter))
}

/// The elements in reverse order. Consumes the whole sequence before
/// yielding anything.
pub fn reverse<I: IntoIterator>(seq: I) -> Rev<std::vec::IntoIter<I::Item>> {
    seq.into_iter().collect::<Vec<_>>().into_iter().rev()
}

/// The elements in a random order, from the thread-local generator.
pub fn shuffle<I: IntoIterator>(seq: I) -> Vec<I::Item> {
    shuffle_with(seq, &mut rand::thread_rng())
}

/// The elements in a random order drawn from `rng`.
pub fn shuffle_with<I, R>(seq: I, rng: &mut R) -> Vec<I::Item>
where
    I: IntoIterator,
    R: Rng + ?Sized,
{
    let mut items: Vec<_> = seq.into_iter().collect();
    items.shuffle(rng);
    items
}

/// A reproducible shuffle: the same seed always gives the same order.
pub fn shuffle_seeded<I: IntoIterator>(seq: I, seed: u64) -> Vec<I::Item> {
    shuffle_with(seq, &mut Xoshiro256PlusPlus::seed_from_u64(seed))
}
