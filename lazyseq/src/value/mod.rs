//! A dynamically typed element, for nested data whose shape is only known
//! at runtime.
//!
//! Lists nest to any depth and may hold lazy, possibly infinite, single-pass
//! sequences, so `flatten` and `tree_seq` can walk the mixed structures a
//! dynamically typed host would hand them.
mod conversion;
mod iter;

use std::rc::Rc;

use ordered_float::OrderedFloat;
use strum_macros::{Display, EnumDiscriminants, IntoStaticStr};

use crate::seqable::Seqable;

pub use iter::{LazySeq, ValueIter};

#[derive(Debug, Clone, PartialEq, Eq, Hash, EnumDiscriminants)]
#[strum_discriminants(name(ValueKind), derive(Display, IntoStaticStr, Hash))]
pub enum Value {
    Nil,
    Bool(bool),
    Int(i64),
    Float(OrderedFloat<f64>),
    /// Text. A sequence of characters, but a leaf to `flatten`.
    Str(Rc<str>),
    /// Reiterable, indexable list.
    List(Rc<[Value]>),
    /// Shared single-pass cursor. Clones pull from the same cursor, and
    /// equality is identity.
    Lazy(LazySeq),
}

impl Value {
    pub fn list(items: impl IntoIterator<Item = Value>) -> Self {
        Value::List(items.into_iter().collect::<Vec<_>>().into())
    }

    pub fn lazy<I>(items: I) -> Self
    where
        I: IntoIterator<Item = Value>,
        I::IntoIter: 'static,
    {
        Value::Lazy(LazySeq::new(items))
    }

    pub fn kind(&self) -> ValueKind {
        self.into()
    }

    pub fn is_nil(&self) -> bool {
        matches!(self, Value::Nil)
    }

    /// Everything is true except `Nil` and `false`.
    pub fn truthy(&self) -> bool {
        !matches!(self, Value::Nil | Value::Bool(false))
    }

    pub fn as_int(&self) -> Option<i64> {
        match self {
            Value::Int(i) => Some(*i),
            _ => None,
        }
    }

    pub fn as_str(&self) -> Option<&str> {
        match self {
            Value::Str(s) => Some(s),
            _ => None,
        }
    }

    pub fn as_list(&self) -> Option<&[Value]> {
        match self {
            Value::List(items) => Some(items),
            _ => None,
        }
    }
}

impl Seqable for Value {
    type Iter = ValueIter;

    fn seq_iter(&self) -> Option<ValueIter> {
        match self {
            Value::List(items) => Some(ValueIter::list(items.clone())),
            Value::Str(text) => Some(ValueIter::chars(text.clone())),
            Value::Lazy(seq) => Some(ValueIter::Lazy(seq.clone())),
            _ => None,
        }
    }

    fn seq_len(&self) -> Option<usize> {
        match self {
            Value::List(items) => Some(items.len()),
            Value::Str(text) => Some(text.chars().count()),
            _ => None,
        }
    }

    fn seq_get(&self, index: usize) -> Option<Value> {
        match self {
            Value::List(items) => items.get(index).cloned(),
            Value::Str(text) => text.chars().nth(index).map(Value::from),
            _ => None,
        }
    }

    fn is_text(&self) -> bool {
        matches!(self, Value::Str(_))
    }

    fn is_nil(&self) -> bool {
        Value::is_nil(self)
    }

    fn kind_name(&self) -> &'static str {
        self.kind().into()
    }
}

/// Build a `Value::List`, converting each element with `Value::from`.
///
/// ```
/// use lazyseq::{list, Value};
///
/// let nested = list![1, list!["a", 2.5], list![]];
/// assert_eq!(nested.as_list().map(|l| l.len()), Some(3));
/// ```
#[macro_export]
macro_rules! list {
    () => {
        $crate::Value::List(::std::rc::Rc::from(::std::vec::Vec::<$crate::Value>::new()))
    };
    ($($x:expr),+ $(,)?) => {
        $crate::Value::List(::std::rc::Rc::from(::std::vec![$($crate::Value::from($x)),+]))
    };
}
