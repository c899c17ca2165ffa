use num_traits::{Bounded, CheckedAdd, CheckedSub, Num, ToPrimitive};

use crate::window::clamp_count;

/// Counting upward from zero, without end.
///
/// The element type usually needs naming: `range::<i64>()`.
pub fn range<T>() -> Range<T>
where
    T: Num + PartialOrd + Copy + CheckedAdd + CheckedSub + ToPrimitive + Bounded,
{
    Range::new(T::zero(), None, T::one())
}

/// `0, 1, ..` up to but excluding `end`.
pub fn range_to<T>(end: T) -> Range<T>
where
    T: Num + PartialOrd + Copy + CheckedAdd + CheckedSub + ToPrimitive + Bounded,
{
    Range::new(T::zero(), Some(end), T::one())
}

/// `start, start + 1, ..` up to but excluding `end`.
pub fn range_between<T>(start: T, end: T) -> Range<T>
where
    T: Num + PartialOrd + Copy + CheckedAdd + CheckedSub + ToPrimitive + Bounded,
{
    Range::new(start, Some(end), T::one())
}

/// `start, start + step, ..` up to but excluding `end`, counting down when
/// `step` is negative.
///
/// A zero step yields `start` forever, unless `start == end`, which yields
/// nothing.
pub fn range_step<T>(start: T, end: T, step: T) -> Range<T>
where
    T: Num + PartialOrd + Copy + CheckedAdd + CheckedSub + ToPrimitive + Bounded,
{
    Range::new(start, Some(end), step)
}

/// An arithmetic progression. Stops early rather than overflow `T`.
#[derive(Debug, Clone)]
pub struct Range<T> {
    next: T,
    end: Option<T>,
    step: T,
    done: bool,
}

impl<T> Range<T>
where
    T: Num + PartialOrd + Copy + CheckedAdd + CheckedSub + ToPrimitive + Bounded,
{
    fn new(start: T, end: Option<T>, step: T) -> Self {
        Range {
            next: start,
            end,
            step,
            done: false,
        }
    }

    fn in_bounds(&self, value: T) -> bool {
        let Some(end) = self.end else {
            return true;
        };
        let zero = T::zero();
        if self.step > zero {
            value < end
        } else if self.step < zero {
            value > end
        } else {
            value != end
        }
    }

    fn remaining(&self) -> Option<usize> {
        if self.done {
            return Some(0);
        }
        let zero = T::zero();
        if !self.in_bounds(self.next) {
            return Some(0);
        }
        let Some(end) = self.end else {
            // without an end the progression stops before passing `T::max_value()`
            if self.step <= zero {
                return None;
            }
            let span = T::max_value().checked_sub(&self.next)?;
            return (span / self.step).to_usize()?.checked_add(1);
        };
        let (span, step) = if self.step > zero {
            (end.checked_sub(&self.next)?, self.step)
        } else if self.step < zero {
            (self.next.checked_sub(&end)?, zero.checked_sub(&self.step)?)
        } else {
            return None;
        };
        let whole = span / step;
        let partial = if (span % step).is_zero() { 0 } else { 1 };
        whole.to_usize()?.checked_add(partial)
    }
}

impl<T> Iterator for Range<T>
where
    T: Num + PartialOrd + Copy + CheckedAdd + CheckedSub + ToPrimitive + Bounded,
{
    type Item = T;

    fn next(&mut self) -> Option<T> {
        if self.done {
            return None;
        }
        let current = self.next;
        if !self.in_bounds(current) {
            self.done = true;
            return None;
        }
        match current.checked_add(&self.step) {
            Some(next) => self.next = next,
            None => self.done = true,
        }
        Some(current)
    }

    fn size_hint(&self) -> (usize, Option<usize>) {
        match self.remaining() {
            Some(n) => (n, Some(n)),
            // an unbounded count that does not fit in `usize`
            None if self.end.is_none() && self.step > T::zero() => (usize::MAX, None),
            None if self.step.is_zero() => (usize::MAX, None),
            None => (0, None),
        }
    }
}

/// `x` forever, or `n` times when `n` is given. A negative `n` yields
/// nothing.
pub fn repeat<T: Clone>(x: T, n: Option<isize>) -> Repeat<T> {
    Repeat {
        item: x,
        remaining: n.map(clamp_count),
    }
}

#[derive(Debug, Clone)]
pub struct Repeat<T> {
    item: T,
    remaining: Option<usize>,
}

impl<T: Clone> Iterator for Repeat<T> {
    type Item = T;

    fn next(&mut self) -> Option<T> {
        if let Some(remaining) = &mut self.remaining {
            *remaining = remaining.checked_sub(1)?;
        }
        Some(self.item.clone())
    }

    fn size_hint(&self) -> (usize, Option<usize>) {
        match self.remaining {
            Some(n) => (n, Some(n)),
            None => (usize::MAX, None),
        }
    }
}

/// The results of calling `f` over and over, forever or `n` times.
///
/// `f` is called once per element pulled, never ahead of time.
pub fn repeatedly<F, T>(f: F, n: Option<isize>) -> Repeatedly<F>
where
    F: FnMut() -> T,
{
    Repeatedly {
        f,
        remaining: n.map(clamp_count),
    }
}

/// `repeatedly` with the count first.
pub fn repeatedly_n<F, T>(n: isize, f: F) -> Repeatedly<F>
where
    F: FnMut() -> T,
{
    repeatedly(f, Some(n))
}

pub struct Repeatedly<F> {
    f: F,
    remaining: Option<usize>,
}

impl<F, T> Iterator for Repeatedly<F>
where
    F: FnMut() -> T,
{
    type Item = T;

    fn next(&mut self) -> Option<T> {
        if let Some(remaining) = &mut self.remaining {
            *remaining = remaining.checked_sub(1)?;
        }
        Some((self.f)())
    }

    fn size_hint(&self) -> (usize, Option<usize>) {
        match self.remaining {
            Some(n) => (n, Some(n)),
            None => (usize::MAX, None),
        }
    }
}

/// `x, f(x), f(f(x)), ..` without end.
///
/// Each application of `f` happens when its result is pulled.
pub fn iterate<T, F>(f: F, x: T) -> Iterate<T, F>
where
    T: Clone,
    F: FnMut(&T) -> T,
{
    Iterate {
        current: x,
        f,
        started: false,
    }
}

pub struct Iterate<T, F> {
    current: T,
    f: F,
    started: bool,
}

impl<T, F> Iterator for Iterate<T, F>
where
    T: Clone,
    F: FnMut(&T) -> T,
{
    type Item = T;

    fn next(&mut self) -> Option<T> {
        if self.started {
            self.current = (self.f)(&self.current);
        } else {
            self.started = true;
        }
        Some(self.current.clone())
    }

    fn size_hint(&self) -> (usize, Option<usize>) {
        (usize::MAX, None)
    }
}
