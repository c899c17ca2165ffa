//! Lazy, composable sequence operators.
//!
//! Every operator takes anything iterable and, where it can, returns a lazy
//! iterator that pulls from its input only as elements are requested. That
//! makes the operators safe on infinite and side-effecting sources:
//!
//! ```
//! use lazyseq::{cycle, partition, take};
//!
//! let windows: Vec<_> = partition(take(5, cycle(vec![1, 2, 3])), 2).collect();
//! assert_eq!(windows, vec![vec![1, 2], vec![3, 1]]);
//! ```
//!
//! The operators are also available as methods through [`SeqExt`].
//!
//! Nested data of mixed shape can be represented with [`Value`], which knows
//! how to present itself as a sequence to [`flatten`], [`count_seq`] and
//! [`nth_seq`] through the [`Seqable`] trait.

pub mod aggregate;
pub mod combine;
pub mod error;
mod ext;
pub mod fns;
pub mod generate;
mod predicate;
mod seqable;
pub mod structure;
pub mod transform;
mod value;
pub mod window;

pub use crate::aggregate::{
    count, dorun, every, ffirst, first, group_by, last, nfirst, not_any, not_every, nth,
    reductions, reductions_from, reverse, second, seq, shuffle, shuffle_seeded, shuffle_with,
    some,
};
pub use crate::combine::{
    concat, cons, cycle, interleave, interpose, mapcat, mapcat2, replace, zipmap, Mapping,
    OrderedMap,
};
pub use crate::error::{Error, Result};
pub use crate::ext::SeqExt;
pub use crate::generate::{
    iterate, range, range_between, range_step, range_to, repeat, repeatedly, repeatedly_n,
};
pub use crate::predicate::{Pred, Predicate};
pub use crate::seqable::{count_seq, is_seq, nth_seq, seq_or_empty, Seqable};
pub use crate::structure::{flatten, tree_seq};
pub use crate::transform::{
    dedupe, distinct, filter, keep, keep_indexed, map, map2, map3, map_indexed, map_n, remove,
};
pub use crate::value::{LazySeq, Value, ValueIter, ValueKind};
pub use crate::window::{
    butlast, drop, drop_last, drop_while, partition, partition_by, partition_with, rest,
    split_at, split_with, take, take_nth, take_while,
};
