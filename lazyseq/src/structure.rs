use crate::seqable::Seqable;

/// Depth-first walk of nested sequences, yielding the leaves in order.
///
/// An element is descended into when it can be iterated (`seq_iter`) and is
/// not text; everything else is yielded as it is. Pending sub-sequences are
/// kept on an explicit stack, so the nesting depth is not bounded by the
/// call stack, and nested sequences are only pulled as far as the leaves
/// requested, so they may be infinite.
pub fn flatten<I>(seq: I) -> Flatten<I::IntoIter>
where
    I: IntoIterator,
    I::Item: Seqable,
{
    Flatten {
        root: seq.into_iter(),
        stack: Vec::new(),
    }
}

pub struct Flatten<I>
where
    I: Iterator,
    I::Item: Seqable,
{
    root: I,
    stack: Vec<<I::Item as Seqable>::Iter>,
}

impl<I> Iterator for Flatten<I>
where
    I: Iterator,
    I::Item: Seqable,
{
    type Item = I::Item;

    fn next(&mut self) -> Option<I::Item> {
        loop {
            let item = match self.stack.last_mut() {
                Some(top) => match top.next() {
                    Some(item) => item,
                    None => {
                        self.stack.pop();
                        continue;
                    }
                },
                None => self.root.next()?,
            };
            if item.is_text() {
                return Some(item);
            }
            match item.seq_iter() {
                Some(children) => self.stack.push(children),
                None => return Some(item),
            }
        }
    }
}

/// Pre-order depth-first walk of a tree.
///
/// `get_children` is only called for nodes where `has_branch` holds, at the
/// moment the node itself is yielded; the children it returns are pulled one
/// at a time as the walk reaches them. Pending child sequences are kept on
/// an explicit stack.
pub fn tree_seq<T, B, G, C>(
    has_branch: B,
    get_children: G,
    root: T,
) -> TreeSeq<T, B, G, C::IntoIter>
where
    B: FnMut(&T) -> bool,
    G: FnMut(&T) -> C,
    C: IntoIterator<Item = T>,
{
    TreeSeq {
        root: Some(root),
        stack: Vec::new(),
        has_branch,
        get_children,
    }
}

pub struct TreeSeq<T, B, G, C> {
    root: Option<T>,
    stack: Vec<C>,
    has_branch: B,
    get_children: G,
}

impl<T, B, G, C, CI> Iterator for TreeSeq<T, B, G, CI>
where
    B: FnMut(&T) -> bool,
    G: FnMut(&T) -> C,
    C: IntoIterator<Item = T, IntoIter = CI>,
    CI: Iterator<Item = T>,
{
    type Item = T;

    fn next(&mut self) -> Option<T> {
        let node = match self.root.take() {
            Some(root) => root,
            None => loop {
                let top = self.stack.last_mut()?;
                match top.next() {
                    Some(node) => break node,
                    None => {
                        self.stack.pop();
                    }
                }
            },
        };
        if (self.has_branch)(&node) {
            self.stack.push((self.get_children)(&node).into_iter());
        }
        Some(node)
    }
}

#[cfg(test)]
mod tests {
    use std::cell::Cell;

    use super::*;
    use crate::{list, Value};

    fn ints(values: impl IntoIterator<Item = Value>) -> Vec<i64> {
        values.into_iter().filter_map(|v| v.as_int()).collect()
    }

    #[test]
    fn test_flatten() {
        let nested = vec![list![], list![1, list![list![list![], list![2, 3]], list![]], 4]];
        let flat: Vec<_> = flatten(nested).collect();
        assert_eq!(ints(flat.clone()), vec![1, 2, 3, 4]);
        assert_eq!(flat.len(), 4);
    }

    #[test]
    fn test_flatten_keeps_text_and_scalars() {
        let nested = vec![list!["ab", list![Value::Nil, true]], Value::from(1.5)];
        let flat: Vec<_> = flatten(nested).collect();
        assert_eq!(
            flat,
            vec![
                Value::from("ab"),
                Value::Nil,
                Value::from(true),
                Value::from(1.5)
            ]
        );
    }

    #[test]
    fn test_flatten_deep() {
        let mut nested = list![7];
        for _ in 0..1000 {
            nested = list![nested];
        }
        let flat: Vec<_> = flatten(vec![nested]).collect();
        assert_eq!(flat, vec![Value::from(7)]);
    }

    #[test]
    fn test_flatten_infinite_nested() {
        let numbers = Value::lazy((0..).map(|n: i64| list![n]));
        let flat: Vec<_> = flatten(vec![list![-1, numbers]]).take(4).collect();
        assert_eq!(ints(flat), vec![-1, 0, 1, 2]);
    }

    #[test]
    fn test_flatten_empty() {
        assert_eq!(flatten(Vec::<Value>::new()).count(), 0);
        assert_eq!(flatten(vec![list![list![]]]).count(), 0);
    }

    #[test]
    fn test_tree_seq_values() {
        let tree = list![1, list![2, list![3]], 4];
        let nodes: Vec<_> = tree_seq(
            |v: &Value| v.as_list().is_some(),
            |v: &Value| v.as_list().map(<[Value]>::to_vec).unwrap_or_default(),
            tree,
        )
        .collect();
        assert_eq!(nodes.len(), 7);
        assert_eq!(ints(nodes), vec![1, 2, 3, 4]);
    }

    #[test]
    fn test_tree_seq_pre_order() {
        let tree: Vec<(&str, Vec<usize>)> = vec![
            ("a", vec![1, 3]),
            ("b", vec![2]),
            ("c", vec![]),
            ("d", vec![]),
        ];
        let names: Vec<_> = tree_seq(
            |i: &usize| !tree[*i].1.is_empty(),
            |i: &usize| tree[*i].1.clone(),
            0,
        )
        .map(|i| tree[i].0)
        .collect();
        assert_eq!(names, vec!["a", "b", "c", "d"]);
    }

    #[test]
    fn test_tree_seq_only_expands_branches() {
        let calls = Cell::new(0);
        let nodes: Vec<_> = tree_seq(
            |n: &u32| *n < 10,
            |n: &u32| {
                calls.set(calls.get() + 1);
                vec![n * 10, n * 10 + 1]
            },
            1,
        )
        .collect();
        assert_eq!(nodes, vec![1, 10, 11]);
        assert_eq!(calls.get(), 1);
    }

    #[test]
    fn test_tree_seq_lazy() {
        let calls = Cell::new(0);
        let mut nodes = tree_seq(
            |_: &u64| true,
            |n: &u64| {
                calls.set(calls.get() + 1);
                let n = *n;
                (0..).map(move |i| n * 2 + i)
            },
            1,
        );
        assert_eq!(nodes.next(), Some(1));
        assert_eq!(nodes.next(), Some(2));
        assert_eq!(nodes.next(), Some(4));
        assert_eq!(calls.get(), 3);
    }
}
