use std::hash::Hash;

use crate::aggregate::{self, Reductions, ReductionsFrom};
use crate::combine::{self, Cycle, Interpose, Mapping, OrderedMap, Replace};
use crate::error;
use crate::predicate::Predicate;
use crate::seqable::Seqable;
use crate::structure::{self, Flatten};
use crate::transform::{self, Dedupe, Distinct, Filter, KeepIndexed, MapIndexed};
use crate::window::{self, Butlast, DropLast, Partition, PartitionBy, TakeNth};

/// The operators as chainable methods on any iterator.
///
/// Names that would clash with `Iterator`'s own methods are changed:
/// `partition` is `partition_n`, `cycle` is `cycle_buffered` and `flatten`
/// is `flatten_nested`.
pub trait SeqExt: Iterator + Sized {
    fn remove<P>(self, pred: P) -> Filter<Self, P>
    where
        P: Predicate<Self::Item>,
    {
        transform::remove(pred, self)
    }

    fn keep<F, U>(self, f: F) -> std::iter::FilterMap<Self, F>
    where
        F: FnMut(Self::Item) -> Option<U>,
    {
        transform::keep(f, self)
    }

    fn keep_indexed<F, U>(self, f: F) -> KeepIndexed<Self, F>
    where
        F: FnMut(usize, Self::Item) -> Option<U>,
    {
        transform::keep_indexed(f, self)
    }

    fn map_indexed<F, U>(self, f: F) -> MapIndexed<Self, F>
    where
        F: FnMut(usize, Self::Item) -> U,
    {
        transform::map_indexed(f, self)
    }

    fn distinct(self) -> Distinct<Self>
    where
        Self::Item: Hash + Eq + Clone,
    {
        transform::distinct(self)
    }

    fn dedupe(self) -> Dedupe<Self>
    where
        Self::Item: PartialEq + Clone,
    {
        transform::dedupe(self)
    }

    fn take_nth(self, n: isize) -> TakeNth<Self>
    where
        Self::Item: Clone,
    {
        window::take_nth(n, self)
    }

    fn butlast(self) -> Butlast<Self> {
        window::butlast(self)
    }

    fn drop_last(self, n: isize) -> DropLast<Self> {
        window::drop_last(n, self)
    }

    fn partition_n(self, n: isize) -> Partition<Self, std::iter::Empty<Self::Item>> {
        window::partition(self, n)
    }

    fn partition_padded<P>(
        self,
        n: isize,
        pad: P,
    ) -> error::Result<Partition<Self, P::IntoIter>>
    where
        P: IntoIterator<Item = Self::Item>,
    {
        window::partition_with(self, n, None, Some(pad))
    }

    fn partition_by<F, K>(self, f: F) -> PartitionBy<Self, F, K>
    where
        F: FnMut(&Self::Item) -> K,
        K: PartialEq,
    {
        window::partition_by(f, self)
    }

    fn interpose(self, sep: Self::Item) -> Interpose<Self>
    where
        Self::Item: Clone,
    {
        combine::interpose(sep, self)
    }

    fn cycle_buffered(self) -> Cycle<Self>
    where
        Self::Item: Clone,
    {
        combine::cycle(self)
    }

    fn replace<M>(self, mapping: M) -> Replace<Self, M>
    where
        Self::Item: Clone,
        M: Mapping<Self::Item, Self::Item>,
    {
        combine::replace(mapping, self)
    }

    fn flatten_nested(self) -> Flatten<Self>
    where
        Self::Item: Seqable,
    {
        structure::flatten(self)
    }

    fn reductions<F>(self, f: F) -> Reductions<Self, F>
    where
        Self::Item: Clone,
        F: FnMut(Self::Item, Self::Item) -> Self::Item,
    {
        aggregate::reductions(f, self)
    }

    fn reductions_from<F, A>(self, init: A, f: F) -> ReductionsFrom<Self, F, A>
    where
        F: FnMut(A, Self::Item) -> A,
        A: Clone,
    {
        aggregate::reductions_from(f, init, self)
    }

    fn group_by<F, K>(self, f: F) -> OrderedMap<K, Vec<Self::Item>>
    where
        F: FnMut(&Self::Item) -> K,
        K: Hash + Eq,
    {
        aggregate::group_by(f, self)
    }

    fn nth_or(self, n: isize, not_found: Option<Self::Item>) -> error::Result<Self::Item> {
        aggregate::nth(self, n, not_found)
    }

    fn dorun(self) {
        aggregate::dorun(self)
    }
}

impl<I: Iterator> SeqExt for I {}
