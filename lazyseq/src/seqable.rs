use crate::error;

/// The sequence capabilities a value may expose.
///
/// Structural operators (`flatten`, `is_seq`, `count_seq`, `nth_seq`) ask a
/// value what it can do through this trait instead of inspecting its type.
/// Only ordered iteration is needed to be walked; a fast length and indexed
/// access are optional and only used as shortcuts.
pub trait Seqable: Sized {
    type Iter: Iterator<Item = Self>;

    /// Ordered iteration over the contained values, or `None` for a scalar.
    fn seq_iter(&self) -> Option<Self::Iter>;

    /// The length, when it is known without iterating.
    ///
    /// A value that reports a length must also answer `seq_get` for every
    /// index below it.
    fn seq_len(&self) -> Option<usize> {
        None
    }

    /// Direct positional access.
    fn seq_get(&self, _index: usize) -> Option<Self> {
        None
    }

    /// Text-like values iterate over their characters but are leaves to
    /// `flatten`.
    fn is_text(&self) -> bool {
        false
    }

    /// The null value, which consuming operators treat as an empty sequence.
    fn is_nil(&self) -> bool {
        false
    }

    /// Name used in error messages.
    fn kind_name(&self) -> &'static str {
        std::any::type_name::<Self>()
    }
}

/// Is `x` an ordered, indexable sequence with a known length?
///
/// Single-pass sources are iterable but not sequences in this sense, and
/// neither are scalars.
pub fn is_seq<T: Seqable>(x: &T) -> bool {
    x.seq_len().is_some() && x.seq_iter().is_some()
}

/// Count the values in `x`, in constant time when it knows its length.
pub fn count_seq<T: Seqable>(x: &T) -> error::Result<usize> {
    if let Some(len) = x.seq_len() {
        return Ok(len);
    }
    if let Some(iter) = x.seq_iter() {
        return Ok(iter.count());
    }
    if x.is_nil() {
        return Ok(0);
    }
    Err(error::Error::NotASequence {
        kind: x.kind_name(),
    })
}

/// The value at `index` in `x`.
///
/// Uses indexed access when `x` has it and scans otherwise. A missing or
/// negative index yields `not_found` when given, else `OutOfRange`.
pub fn nth_seq<T: Seqable>(x: &T, index: isize, not_found: Option<T>) -> error::Result<T> {
    let found = match usize::try_from(index) {
        Err(_) => None,
        Ok(i) => {
            if x.seq_len().is_some() {
                x.seq_get(i)
            } else if let Some(mut iter) = x.seq_iter() {
                iter.nth(i)
            } else if x.is_nil() {
                None
            } else {
                return Err(error::Error::NotASequence {
                    kind: x.kind_name(),
                });
            }
        }
    };
    match (found, not_found) {
        (Some(value), _) => Ok(value),
        (None, Some(not_found)) => Ok(not_found),
        (None, None) => Err(error::Error::out_of_range(index, x.kind_name())),
    }
}

/// Treat a missing sequence as an empty one.
pub fn seq_or_empty<C>(coll: Option<C>) -> std::iter::Flatten<std::option::IntoIter<C>>
where
    C: IntoIterator,
{
    coll.into_iter().flatten()
}
