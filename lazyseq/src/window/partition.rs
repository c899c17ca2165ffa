use std::iter::Fuse;

use crate::error;

use super::slice::clamp_count;

/// Non-overlapping windows of `n` elements; a trailing partial window is
/// dropped. `n <= 0` yields nothing.
pub fn partition<I>(seq: I, n: isize) -> Partition<I::IntoIter, std::iter::Empty<I::Item>>
where
    I: IntoIterator,
{
    Partition::new(seq.into_iter(), clamp_count(n), None)
}

/// Windows of `n` elements with an optional step and padding.
///
/// Only `step == n` (or no step) is implemented; any other step is reported
/// as `Unsupported` when the partition is created, not when it is first
/// pulled. `n <= 0` yields nothing and is checked before the step.
///
/// With `pad`, a trailing partial window is completed from `pad`, up to `n`
/// elements; if `pad` runs out first the last window is shorter than `n`.
/// Without `pad` the trailing partial window is dropped.
pub fn partition_with<I, P>(
    seq: I,
    n: isize,
    step: Option<isize>,
    pad: Option<P>,
) -> error::Result<Partition<I::IntoIter, P::IntoIter>>
where
    I: IntoIterator,
    P: IntoIterator<Item = I::Item>,
{
    let size = clamp_count(n);
    if size > 0 && step.is_some_and(|step| step != n) {
        return Err(error::Error::unsupported("partition with step != n"));
    }
    Ok(Partition::new(
        seq.into_iter(),
        size,
        pad.map(IntoIterator::into_iter),
    ))
}

pub struct Partition<I, P> {
    iter: Fuse<I>,
    n: usize,
    pad: Option<P>,
    done: bool,
}

impl<I, P> Partition<I, P>
where
    I: Iterator,
{
    fn new(iter: I, n: usize, pad: Option<P>) -> Self {
        Partition {
            iter: iter.fuse(),
            n,
            pad,
            done: n == 0,
        }
    }
}

impl<I, P> Iterator for Partition<I, P>
where
    I: Iterator,
    P: Iterator<Item = I::Item>,
{
    type Item = Vec<I::Item>;

    fn next(&mut self) -> Option<Vec<I::Item>> {
        if self.done {
            return None;
        }
        let mut window: Vec<_> = self.iter.by_ref().take(self.n).collect();
        if window.len() == self.n {
            return Some(window);
        }
        self.done = true;
        if window.is_empty() {
            return None;
        }
        let missing = self.n - window.len();
        let pad = self.pad.take()?;
        window.extend(pad.take(missing));
        Some(window)
    }

    fn size_hint(&self) -> (usize, Option<usize>) {
        if self.done {
            return (0, Some(0));
        }
        let (lower, upper) = self.iter.size_hint();
        let padded = usize::from(self.pad.is_some());
        (
            lower / self.n,
            upper.and_then(|upper| (upper / self.n).checked_add(padded)),
        )
    }
}

/// Runs of consecutive elements for which `f` returns equal keys.
///
/// A run is emitted as soon as the first element of the next run has been
/// seen, or the input ends.
pub fn partition_by<I, F, K>(f: F, seq: I) -> PartitionBy<I::IntoIter, F, K>
where
    I: IntoIterator,
    F: FnMut(&I::Item) -> K,
    K: PartialEq,
{
    PartitionBy {
        iter: seq.into_iter().fuse(),
        f,
        pending: None,
    }
}

pub struct PartitionBy<I, F, K>
where
    I: Iterator,
{
    iter: Fuse<I>,
    f: F,
    pending: Option<(K, I::Item)>,
}

impl<I, F, K> Iterator for PartitionBy<I, F, K>
where
    I: Iterator,
    F: FnMut(&I::Item) -> K,
    K: PartialEq,
{
    type Item = Vec<I::Item>;

    fn next(&mut self) -> Option<Vec<I::Item>> {
        let (key, first) = match self.pending.take() {
            Some(pending) => pending,
            None => {
                let item = self.iter.next()?;
                ((self.f)(&item), item)
            }
        };
        let mut run = vec![first];
        for item in self.iter.by_ref() {
            let next_key = (self.f)(&item);
            if next_key == key {
                run.push(item);
            } else {
                self.pending = Some((next_key, item));
                break;
            }
        }
        Some(run)
    }
}
