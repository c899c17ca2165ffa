use std::collections::VecDeque;
use std::iter::Fuse;

use crate::predicate::Predicate;

/// Counts below zero mean zero.
pub(crate) fn clamp_count(n: isize) -> usize {
    usize::try_from(n).unwrap_or(0)
}

/// The first `n` elements.
///
/// The element after the `n`th is never pulled, so `take` is safe on
/// infinite and side-effecting sources. `n <= 0` pulls nothing at all.
pub fn take<I>(n: isize, seq: I) -> Take<I::IntoIter>
where
    I: IntoIterator,
{
    Take {
        iter: seq.into_iter(),
        remaining: clamp_count(n),
    }
}

pub struct Take<I> {
    iter: I,
    remaining: usize,
}

impl<I> Iterator for Take<I>
where
    I: Iterator,
{
    type Item = I::Item;

    fn next(&mut self) -> Option<I::Item> {
        if self.remaining == 0 {
            return None;
        }
        match self.iter.next() {
            Some(item) => {
                self.remaining -= 1;
                Some(item)
            }
            None => {
                self.remaining = 0;
                None
            }
        }
    }

    fn size_hint(&self) -> (usize, Option<usize>) {
        if self.remaining == 0 {
            return (0, Some(0));
        }
        let (lower, upper) = self.iter.size_hint();
        let upper = match upper {
            Some(upper) => upper.min(self.remaining),
            None => self.remaining,
        };
        (lower.min(self.remaining), Some(upper))
    }
}

/// Everything after the first `n` elements; `n < 0` counts as 0.
///
/// The skipping happens on the first pull and goes through `Iterator::nth`,
/// which indexable sources answer without walking.
pub fn drop<I>(n: isize, seq: I) -> DropN<I::IntoIter>
where
    I: IntoIterator,
{
    DropN {
        iter: seq.into_iter(),
        skip: clamp_count(n),
    }
}

/// Everything after the first element.
pub fn rest<I>(seq: I) -> DropN<I::IntoIter>
where
    I: IntoIterator,
{
    drop(1, seq)
}

pub struct DropN<I> {
    iter: I,
    skip: usize,
}

impl<I> Iterator for DropN<I>
where
    I: Iterator,
{
    type Item = I::Item;

    fn next(&mut self) -> Option<I::Item> {
        if self.skip > 0 {
            let skip = std::mem::take(&mut self.skip);
            return self.iter.nth(skip);
        }
        self.iter.next()
    }

    fn nth(&mut self, n: usize) -> Option<I::Item> {
        let skip = std::mem::take(&mut self.skip);
        self.iter.nth(skip.saturating_add(n))
    }

    fn size_hint(&self) -> (usize, Option<usize>) {
        let (lower, upper) = self.iter.size_hint();
        (
            lower.saturating_sub(self.skip),
            upper.map(|upper| upper.saturating_sub(self.skip)),
        )
    }
}

/// Elements up to, not including, the first for which `pred` fails.
pub fn take_while<I, P>(pred: P, seq: I) -> TakeWhile<I::IntoIter, P>
where
    I: IntoIterator,
    P: Predicate<I::Item>,
{
    TakeWhile {
        iter: seq.into_iter(),
        pred,
        done: false,
    }
}

pub struct TakeWhile<I, P> {
    iter: I,
    pred: P,
    done: bool,
}

impl<I, P> Iterator for TakeWhile<I, P>
where
    I: Iterator,
    P: Predicate<I::Item>,
{
    type Item = I::Item;

    fn next(&mut self) -> Option<I::Item> {
        if self.done {
            return None;
        }
        match self.iter.next() {
            Some(item) if self.pred.test(&item) => Some(item),
            _ => {
                self.done = true;
                None
            }
        }
    }

    fn size_hint(&self) -> (usize, Option<usize>) {
        if self.done {
            (0, Some(0))
        } else {
            (0, self.iter.size_hint().1)
        }
    }
}

/// Elements starting at the first for which `pred` fails.
pub fn drop_while<I, P>(pred: P, seq: I) -> DropWhile<I::IntoIter, P>
where
    I: IntoIterator,
    P: Predicate<I::Item>,
{
    DropWhile {
        iter: seq.into_iter(),
        pred,
        dropping: true,
    }
}

pub struct DropWhile<I, P> {
    iter: I,
    pred: P,
    dropping: bool,
}

impl<I, P> Iterator for DropWhile<I, P>
where
    I: Iterator,
    P: Predicate<I::Item>,
{
    type Item = I::Item;

    fn next(&mut self) -> Option<I::Item> {
        if self.dropping {
            self.dropping = false;
            let pred = &mut self.pred;
            return self.iter.find(|item| !pred.test(item));
        }
        self.iter.next()
    }

    fn size_hint(&self) -> (usize, Option<usize>) {
        let (lower, upper) = self.iter.size_hint();
        if self.dropping {
            (0, upper)
        } else {
            (lower, upper)
        }
    }
}

/// Every `n`th element, starting with the first.
///
/// For `n <= 0` this yields the first element forever and ignores the rest
/// of the input; an empty input still yields nothing. That degenerate form
/// is kept for compatibility and is not meant to be relied upon.
pub fn take_nth<I>(n: isize, seq: I) -> TakeNth<I::IntoIter>
where
    I: IntoIterator,
    I::Item: Clone,
{
    let mode = match usize::try_from(n) {
        Ok(step) if step > 0 => TakeNthMode::Every { step, started: false },
        _ => TakeNthMode::RepeatFirst(None),
    };
    TakeNth {
        iter: seq.into_iter(),
        mode,
        done: false,
    }
}

pub struct TakeNth<I>
where
    I: Iterator,
{
    iter: I,
    mode: TakeNthMode<I::Item>,
    done: bool,
}

enum TakeNthMode<T> {
    Every { step: usize, started: bool },
    RepeatFirst(Option<T>),
}

impl<I> Iterator for TakeNth<I>
where
    I: Iterator,
    I::Item: Clone,
{
    type Item = I::Item;

    fn next(&mut self) -> Option<I::Item> {
        if self.done {
            return None;
        }
        let next = match &mut self.mode {
            TakeNthMode::Every { step, started } => {
                if *started {
                    self.iter.nth(*step - 1)
                } else {
                    *started = true;
                    self.iter.next()
                }
            }
            TakeNthMode::RepeatFirst(Some(first)) => Some(first.clone()),
            TakeNthMode::RepeatFirst(first) => {
                *first = self.iter.next();
                first.clone()
            }
        };
        if next.is_none() {
            self.done = true;
        }
        next
    }

    fn size_hint(&self) -> (usize, Option<usize>) {
        if self.done {
            return (0, Some(0));
        }
        match &self.mode {
            TakeNthMode::Every { step, started } => {
                let (lower, upper) = self.iter.size_hint();
                let count = |len: usize| {
                    if *started {
                        len / step
                    } else {
                        len.div_ceil(*step)
                    }
                };
                (count(lower), upper.map(count))
            }
            TakeNthMode::RepeatFirst(Some(_)) => (usize::MAX, None),
            TakeNthMode::RepeatFirst(None) => (0, None),
        }
    }
}

/// All but the last element.
///
/// Runs one element behind its input: an element is only released once the
/// element after it has been seen.
pub fn butlast<I>(seq: I) -> Butlast<I::IntoIter>
where
    I: IntoIterator,
{
    Butlast {
        iter: seq.into_iter().fuse(),
        previous: None,
    }
}

pub struct Butlast<I>
where
    I: Iterator,
{
    iter: Fuse<I>,
    previous: Option<I::Item>,
}

impl<I> Iterator for Butlast<I>
where
    I: Iterator,
{
    type Item = I::Item;

    fn next(&mut self) -> Option<I::Item> {
        if self.previous.is_none() {
            self.previous = Some(self.iter.next()?);
        }
        let next = self.iter.next()?;
        self.previous.replace(next)
    }

    fn size_hint(&self) -> (usize, Option<usize>) {
        let held = usize::from(self.previous.is_some());
        let (lower, upper) = self.iter.size_hint();
        (
            lower.saturating_add(held).saturating_sub(1),
            upper
                .and_then(|upper| upper.checked_add(held))
                .map(|upper| upper.saturating_sub(1)),
        )
    }
}

/// All but the last `n` elements, holding at most `n` elements back.
///
/// `n <= 0` passes the input through unchanged; `n == 1` is `butlast`.
pub fn drop_last<I>(n: isize, seq: I) -> DropLast<I::IntoIter>
where
    I: IntoIterator,
{
    let iter = seq.into_iter();
    match clamp_count(n) {
        0 => DropLast::Unchanged(iter),
        1 => DropLast::Butlast(butlast(iter)),
        n => DropLast::Buffered {
            iter: iter.fuse(),
            buffer: VecDeque::new(),
            n,
        },
    }
}

pub enum DropLast<I>
where
    I: Iterator,
{
    Unchanged(I),
    Butlast(Butlast<I>),
    Buffered {
        iter: Fuse<I>,
        buffer: VecDeque<I::Item>,
        n: usize,
    },
}

impl<I> Iterator for DropLast<I>
where
    I: Iterator,
{
    type Item = I::Item;

    fn next(&mut self) -> Option<I::Item> {
        match self {
            DropLast::Unchanged(iter) => iter.next(),
            DropLast::Butlast(butlast) => butlast.next(),
            DropLast::Buffered { iter, buffer, n } => {
                while buffer.len() < *n {
                    buffer.push_back(iter.next()?);
                }
                buffer.push_back(iter.next()?);
                buffer.pop_front()
            }
        }
    }

    fn size_hint(&self) -> (usize, Option<usize>) {
        match self {
            DropLast::Unchanged(iter) => iter.size_hint(),
            DropLast::Butlast(butlast) => butlast.size_hint(),
            DropLast::Buffered { iter, buffer, n } => {
                let (lower, upper) = iter.size_hint();
                let held = buffer.len();
                (
                    lower.saturating_add(held).saturating_sub(*n),
                    upper
                        .and_then(|upper| upper.checked_add(held))
                        .map(|upper| upper.saturating_sub(*n)),
                )
            }
        }
    }
}
