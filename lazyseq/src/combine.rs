use std::collections::{BTreeMap, HashMap, VecDeque};
use std::hash::{BuildHasher, Hash};
use std::iter::{Chain, FlatMap, Flatten, Once};

use indexmap::IndexMap;

/// An associative result that remembers insertion order.
pub type OrderedMap<K, V> = IndexMap<K, V, ahash::RandomState>;

/// The elements of each sequence in turn, left to right.
///
/// The outer sequence is itself lazy: the next inner sequence is only
/// obtained once the current one is exhausted.
pub fn concat<S>(seqs: S) -> Flatten<S::IntoIter>
where
    S: IntoIterator,
    S::Item: IntoIterator,
{
    seqs.into_iter().flatten()
}

/// The first element of each sequence, then the second of each, and so on.
///
/// Each round is pulled completely before any of it is yielded, so the
/// round in which a sequence runs out yields nothing. No sequences at all
/// yield nothing.
pub fn interleave<S>(seqs: S) -> Interleave<<S::Item as IntoIterator>::IntoIter>
where
    S: IntoIterator,
    S::Item: IntoIterator,
{
    let iters: Vec<_> = seqs.into_iter().map(IntoIterator::into_iter).collect();
    Interleave {
        done: iters.is_empty(),
        round: VecDeque::with_capacity(iters.len()),
        iters,
    }
}

pub struct Interleave<I>
where
    I: Iterator,
{
    iters: Vec<I>,
    round: VecDeque<I::Item>,
    done: bool,
}

impl<I> Iterator for Interleave<I>
where
    I: Iterator,
{
    type Item = I::Item;

    fn next(&mut self) -> Option<I::Item> {
        if let Some(item) = self.round.pop_front() {
            return Some(item);
        }
        if self.done {
            return None;
        }
        for iter in &mut self.iters {
            match iter.next() {
                Some(item) => self.round.push_back(item),
                None => {
                    self.done = true;
                    self.round.clear();
                    return None;
                }
            }
        }
        self.round.pop_front()
    }

    fn size_hint(&self) -> (usize, Option<usize>) {
        let pending = self.round.len();
        if self.done {
            return (pending, Some(pending));
        }
        let (lower, upper) = self
            .iters
            .iter()
            .map(Iterator::size_hint)
            .fold((usize::MAX, None::<usize>), |(lower, upper), (l, u)| {
                let upper = match (upper, u) {
                    (Some(a), Some(b)) => Some(a.min(b)),
                    (a, b) => a.or(b),
                };
                (lower.min(l), upper)
            });
        let rounds = self.iters.len();
        (
            lower.saturating_mul(rounds).saturating_add(pending),
            upper.and_then(|upper| upper.checked_mul(rounds)?.checked_add(pending)),
        )
    }
}

/// The elements with `sep` between each adjacent pair.
///
/// A separator is only yielded once the element after it has been pulled,
/// so there is never a trailing separator.
pub fn interpose<I>(sep: I::Item, seq: I) -> Interpose<I::IntoIter>
where
    I: IntoIterator,
    I::Item: Clone,
{
    Interpose {
        iter: seq.into_iter(),
        sep,
        pending: None,
        started: false,
    }
}

pub struct Interpose<I>
where
    I: Iterator,
{
    iter: I,
    sep: I::Item,
    pending: Option<I::Item>,
    started: bool,
}

impl<I> Iterator for Interpose<I>
where
    I: Iterator,
    I::Item: Clone,
{
    type Item = I::Item;

    fn next(&mut self) -> Option<I::Item> {
        if let Some(item) = self.pending.take() {
            return Some(item);
        }
        let item = self.iter.next()?;
        if self.started {
            self.pending = Some(item);
            Some(self.sep.clone())
        } else {
            self.started = true;
            Some(item)
        }
    }

    fn size_hint(&self) -> (usize, Option<usize>) {
        let (lower, upper) = self.iter.size_hint();
        let pending = usize::from(self.pending.is_some());
        let stretch = |n: usize| -> Option<usize> {
            let seps = if self.started { n } else { n.saturating_sub(1) };
            n.checked_add(seps)?.checked_add(pending)
        };
        (stretch(lower).unwrap_or(usize::MAX), upper.and_then(stretch))
    }
}

/// `concat` of `map(f, seq)`: `f` returns a sequence for every element.
pub fn mapcat<I, F, C>(f: F, seq: I) -> FlatMap<I::IntoIter, C, F>
where
    I: IntoIterator,
    F: FnMut(I::Item) -> C,
    C: IntoIterator,
{
    seq.into_iter().flat_map(f)
}

/// `mapcat` over two sequences in lockstep, stopping at the shorter.
pub fn mapcat2<A, B, F, C>(mut f: F, a: A, b: B) -> impl Iterator<Item = C::Item>
where
    A: IntoIterator,
    B: IntoIterator,
    F: FnMut(A::Item, B::Item) -> C,
    C: IntoIterator,
{
    a.into_iter().zip(b).flat_map(move |(a, b)| f(a, b))
}

/// `x` followed by the elements of `seq`.
pub fn cons<I>(x: I::Item, seq: I) -> Chain<Once<I::Item>, I::IntoIter>
where
    I: IntoIterator,
{
    std::iter::once(x).chain(seq)
}

/// The elements of `seq` repeated forever.
///
/// The first pass yields elements as they are pulled and keeps a copy of
/// each, so single-pass sources work: later passes replay the copies. An
/// empty input yields nothing.
pub fn cycle<I>(seq: I) -> Cycle<I::IntoIter>
where
    I: IntoIterator,
    I::Item: Clone,
{
    Cycle {
        source: Some(seq.into_iter()),
        buffer: Vec::new(),
        index: 0,
    }
}

pub struct Cycle<I>
where
    I: Iterator,
{
    source: Option<I>,
    buffer: Vec<I::Item>,
    index: usize,
}

impl<I> Iterator for Cycle<I>
where
    I: Iterator,
    I::Item: Clone,
{
    type Item = I::Item;

    fn next(&mut self) -> Option<I::Item> {
        if let Some(source) = &mut self.source {
            match source.next() {
                Some(item) => {
                    self.buffer.push(item.clone());
                    return Some(item);
                }
                None => self.source = None,
            }
        }
        let item = self.buffer.get(self.index)?.clone();
        self.index = (self.index + 1) % self.buffer.len();
        Some(item)
    }

    fn size_hint(&self) -> (usize, Option<usize>) {
        let exhausted = match &self.source {
            Some(source) => source.size_hint().1 == Some(0),
            None => true,
        };
        match (self.buffer.is_empty(), exhausted) {
            (true, true) => (0, Some(0)),
            (true, false) => match &self.source {
                Some(source) if source.size_hint().0 > 0 => (usize::MAX, None),
                _ => (0, None),
            },
            (false, _) => (usize::MAX, None),
        }
    }
}

/// A map from each key to the value at the same position.
///
/// Stops at the shorter of the two; a repeated key keeps its first position
/// and takes the later value.
pub fn zipmap<K, V>(
    keys: impl IntoIterator<Item = K>,
    vals: impl IntoIterator<Item = V>,
) -> OrderedMap<K, V>
where
    K: Hash + Eq,
{
    let mut map = OrderedMap::default();
    for (key, val) in keys.into_iter().zip(vals) {
        map.insert(key, val);
    }
    map
}

/// Lookup used by `replace`.
pub trait Mapping<K, V> {
    fn lookup(&self, key: &K) -> Option<&V>;
}

impl<K, V, S> Mapping<K, V> for HashMap<K, V, S>
where
    K: Hash + Eq,
    S: BuildHasher,
{
    fn lookup(&self, key: &K) -> Option<&V> {
        self.get(key)
    }
}

impl<K, V, S> Mapping<K, V> for IndexMap<K, V, S>
where
    K: Hash + Eq,
    S: BuildHasher,
{
    fn lookup(&self, key: &K) -> Option<&V> {
        self.get(key)
    }
}

impl<K, V> Mapping<K, V> for BTreeMap<K, V>
where
    K: Ord,
{
    fn lookup(&self, key: &K) -> Option<&V> {
        self.get(key)
    }
}

impl<K, V, M> Mapping<K, V> for &M
where
    M: Mapping<K, V> + ?Sized,
{
    fn lookup(&self, key: &K) -> Option<&V> {
        (**self).lookup(key)
    }
}

/// Each element that is a key of `mapping` replaced by its value; other
/// elements pass through.
pub fn replace<I, M>(mapping: M, seq: I) -> Replace<I::IntoIter, M>
where
    I: IntoIterator,
    I::Item: Clone,
    M: Mapping<I::Item, I::Item>,
{
    Replace {
        iter: seq.into_iter(),
        mapping,
    }
}

pub struct Replace<I, M> {
    iter: I,
    mapping: M,
}

impl<I, M> Iterator for Replace<I, M>
where
    I: Iterator,
    I::Item: Clone,
    M: Mapping<I::Item, I::Item>,
{
    type Item = I::Item;

    fn next(&mut self) -> Option<I::Item> {
        let item = self.iter.next()?;
        match self.mapping.lookup(&item) {
            Some(replacement) => Some(replacement.clone()),
            None => Some(item),
        }
    }

    fn size_hint(&self) -> (usize, Option<usize>) {
        self.iter.size_hint()
    }
}

#[cfg(test)]
mod tests {
    use std::cell::Cell;

    use insta::assert_debug_snapshot;

    use super::*;

    #[test]
    fn test_concat() {
        let v: Vec<_> = concat(vec![vec![1], vec![], vec![2, 3]]).collect();
        assert_eq!(v, vec![1, 2, 3]);
        assert_eq!(concat(Vec::<Vec<i32>>::new()).count(), 0);
    }

    #[test]
    fn test_concat_infinite_outer() {
        let v: Vec<_> = concat((0..).map(|n| vec![n; 2])).take(5).collect();
        assert_eq!(v, vec![0, 0, 1, 1, 2]);
    }

    #[test]
    fn test_interleave() {
        let v: Vec<_> = interleave(vec![0..2, 500..1000]).collect();
        assert_eq!(v, vec![0, 500, 1, 501]);
    }

    #[test]
    fn test_interleave_three() {
        let v: Vec<_> = interleave(vec![vec![1, 2], vec![3, 4], vec![5]]).collect();
        assert_eq!(v, vec![1, 3, 5]);
    }

    #[test]
    fn test_interleave_empty() {
        assert_eq!(interleave(Vec::<Vec<i32>>::new()).count(), 0);
        assert_eq!(interleave(vec![vec![1, 2], vec![]]).count(), 0);
    }

    #[test]
    fn test_interleave_infinite() {
        let v: Vec<_> = interleave(vec![0.., 100..]).take(5).collect();
        assert_eq!(v, vec![0, 100, 1, 101, 2]);
    }

    #[test]
    fn test_interpose() {
        let v: Vec<_> = interpose(0, vec![1, 2, 3]).collect();
        assert_eq!(v, vec![1, 0, 2, 0, 3]);
        assert_eq!(interpose(0, vec![1]).collect::<Vec<_>>(), vec![1]);
        assert_eq!(interpose(0, Vec::<i32>::new()).count(), 0);
    }

    #[test]
    fn test_interpose_infinite() {
        let pulled = Cell::new(0);
        let source = (1..).inspect(|_| pulled.set(pulled.get() + 1));
        let v: Vec<_> = interpose(0, source).take(5).collect();
        assert_eq!(v, vec![1, 0, 2, 0, 3]);
        assert_eq!(pulled.get(), 3);
        let mut it = interpose(0, 1..);
        it.next();
        assert_eq!(it.size_hint(), (usize::MAX, None));
    }

    #[test]
    fn test_interpose_size_hint() {
        let mut it = interpose(",", vec!["a", "b", "c"]);
        assert_eq!(it.size_hint(), (5, Some(5)));
        it.next();
        it.next();
        assert_eq!(it.size_hint(), (3, Some(3)));
    }

    #[test]
    fn test_mapcat() {
        let v: Vec<_> = mapcat(|n: i32| vec![n; n as usize], vec![1, 2, 3]).collect();
        assert_eq!(v, vec![1, 2, 2, 3, 3, 3]);
    }

    #[test]
    fn test_mapcat2() {
        let v: Vec<_> = mapcat2(|a, b| [a, b], vec![1, 2, 3], vec![10, 20]).collect();
        assert_eq!(v, vec![1, 10, 2, 20]);
    }

    #[test]
    fn test_cons() {
        assert_eq!(cons(1, vec![2, 3]).collect::<Vec<_>>(), vec![1, 2, 3]);
        assert_eq!(cons(1, vec![]).collect::<Vec<_>>(), vec![1]);
    }

    #[test]
    fn test_cycle() {
        let v: Vec<_> = cycle(vec![1, 2, 3]).take(8).collect();
        assert_eq!(v, vec![1, 2, 3, 1, 2, 3, 1, 2]);
    }

    #[test]
    fn test_cycle_empty() {
        assert_eq!(cycle(Vec::<i32>::new()).next(), None);
        assert_eq!(cycle(Vec::<i32>::new()).size_hint(), (0, Some(0)));
    }

    #[test]
    fn test_cycle_single_pass_source() {
        let pulls = Cell::new(0);
        let source = (1..=2).inspect(|_| pulls.set(pulls.get() + 1));
        let mut it = cycle(source);
        assert_eq!(it.next(), Some(1));
        assert_eq!(pulls.get(), 1);
        let rest: Vec<_> = it.take(5).collect();
        assert_eq!(rest, vec![2, 1, 2, 1, 2]);
        assert_eq!(pulls.get(), 2);
    }

    #[test]
    fn test_zipmap() {
        let map = zipmap(vec!["a", "b", "a"], vec![1, 2, 3, 4]);
        assert_debug_snapshot!(map, @r###"
        {
            "a": 3,
            "b": 2,
        }
        "###);
    }

    #[test]
    fn test_zipmap_shorter_keys() {
        let map = zipmap(vec![1], vec!["x", "y"]);
        assert_eq!(map.len(), 1);
        assert_eq!(map.get(&1), Some(&"x"));
    }

    #[test]
    fn test_replace() {
        let mapping: HashMap<_, _> = [(1, 10), (3, 30)].into_iter().collect();
        let v: Vec<_> = replace(&mapping, vec![1, 2, 3, 1]).collect();
        assert_eq!(v, vec![10, 2, 30, 10]);
        assert_eq!(mapping.len(), 2);
    }

    #[test]
    fn test_replace_btree_map() {
        let mapping = BTreeMap::from([("a", "A")]);
        let v: Vec<_> = replace(mapping, vec!["a", "b"]).collect();
        assert_eq!(v, vec!["A", "b"]);
    }
}
