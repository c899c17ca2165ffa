use std::iter::Chain;

use crate::predicate::Predicate;

use super::slice::clamp_count;

/// The remainder of a split: the element that ended the first part, if any,
/// followed by the rest of the original cursor.
pub type SplitRest<I> = Chain<std::option::IntoIter<<I as Iterator>::Item>, I>;

/// Split after the first `n` elements.
///
/// A single-pass source cannot be branched, so the first part is collected
/// eagerly and the second part resumes the same cursor where the first
/// stopped. Nothing past the `n`th element is pulled until the second part
/// is iterated. The input must not be used again after the split.
pub fn split_at<I>(n: isize, seq: I) -> (Vec<I::Item>, I::IntoIter)
where
    I: IntoIterator,
{
    let mut iter = seq.into_iter();
    let taken = iter.by_ref().take(clamp_count(n)).collect();
    (taken, iter)
}

/// Split at the first element for which `pred` fails.
///
/// The first part is collected eagerly, as with `split_at`. The failing
/// element has already been pulled to find the boundary; it leads the
/// second part.
pub fn split_with<I, P>(mut pred: P, seq: I) -> (Vec<I::Item>, SplitRest<I::IntoIter>)
where
    I: IntoIterator,
    P: Predicate<I::Item>,
{
    let mut iter = seq.into_iter();
    let mut taken = Vec::new();
    let mut boundary = None;
    for item in iter.by_ref() {
        if pred.test(&item) {
            taken.push(item);
        } else {
            boundary = Some(item);
            break;
        }
    }
    (taken, boundary.into_iter().chain(iter))
}
