use std::cell::RefCell;
use std::hash::{Hash, Hasher};
use std::rc::Rc;

use super::Value;

type Cursor = Rc<RefCell<Box<dyn Iterator<Item = Value>>>>;

/// A single-pass sequence of values behind a shared cursor.
///
/// Every clone pulls from the same cursor, so a value taken by one handle is
/// gone for all of them, the way a generator behaves when it is referenced
/// from several places. Pulling from a `LazySeq` from inside its own source
/// iterator panics.
#[derive(Clone)]
pub struct LazySeq {
    cursor: Cursor,
}

impl LazySeq {
    pub fn new<I>(items: I) -> Self
    where
        I: IntoIterator<Item = Value>,
        I::IntoIter: 'static,
    {
        LazySeq {
            cursor: Rc::new(RefCell::new(Box::new(items.into_iter()))),
        }
    }
}

impl Iterator for LazySeq {
    type Item = Value;

    fn next(&mut self) -> Option<Value> {
        self.cursor.borrow_mut().next()
    }
}

impl std::fmt::Debug for LazySeq {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "LazySeq({:p})", Rc::as_ptr(&self.cursor))
    }
}

impl PartialEq for LazySeq {
    fn eq(&self, other: &Self) -> bool {
        Rc::ptr_eq(&self.cursor, &other.cursor)
    }
}

impl Eq for LazySeq {}

impl Hash for LazySeq {
    fn hash<H: Hasher>(&self, state: &mut H) {
        std::ptr::hash(Rc::as_ptr(&self.cursor), state)
    }
}

/// Iteration over the contents of a `Value`.
pub enum ValueIter {
    List { items: Rc<[Value]>, index: usize },
    Chars { text: Rc<str>, offset: usize },
    Lazy(LazySeq),
}

impl ValueIter {
    pub(crate) fn list(items: Rc<[Value]>) -> Self {
        ValueIter::List { items, index: 0 }
    }

    pub(crate) fn chars(text: Rc<str>) -> Self {
        ValueIter::Chars { text, offset: 0 }
    }
}

impl Iterator for ValueIter {
    type Item = Value;

    fn next(&mut self) -> Option<Value> {
        match self {
            ValueIter::List { items, index } => {
                let item = items.get(*index).cloned();
                if item.is_some() {
                    *index += 1;
                }
                item
            }
            ValueIter::Chars { text, offset } => {
                let c = text[*offset..].chars().next()?;
                *offset += c.len_utf8();
                Some(c.into())
            }
            ValueIter::Lazy(seq) => seq.next(),
        }
    }

    fn nth(&mut self, n: usize) -> Option<Value> {
        match self {
            ValueIter::List { items, index } => {
                *index = index.saturating_add(n).min(items.len());
                self.next()
            }
            _ => {
                for _ in 0..n {
                    self.next()?;
                }
                self.next()
            }
        }
    }

    fn size_hint(&self) -> (usize, Option<usize>) {
        match self {
            ValueIter::List { items, index } => {
                let remaining = items.len() - index;
                (remaining, Some(remaining))
            }
            ValueIter::Chars { text, offset } => {
                let bytes = text.len() - offset;
                // every char is between one and four bytes
                (bytes.div_ceil(4), Some(bytes))
            }
            ValueIter::Lazy(_) => (0, None),
        }
    }
}
