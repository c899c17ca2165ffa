use std::cell::Cell;

use lazyseq::{
    butlast, count_seq, cycle, drop, drop_last, first, flatten, group_by, interleave, interpose,
    list, nth, nth_seq, partition, partition_by, partition_with, range, range_between,
    reductions, reductions_from, seq_or_empty, take, take_nth, tree_seq, Error, Pred, SeqExt,
    Value,
};

#[test]
fn test_take_from_cycle() {
    let v: Vec<_> = take(8, cycle(vec![1, 2, 3])).collect();
    assert_eq!(v, vec![1, 2, 3, 1, 2, 3, 1, 2]);
}

#[test]
fn test_partition_scenarios() {
    let v: Vec<_> = partition(vec![1, 2, 3, 4], 2).collect();
    assert_eq!(v, vec![vec![1, 2], vec![3, 4]]);
    let v: Vec<_> = partition_with(vec![1, 2, 3], 2, None, Some(vec![4]))
        .unwrap()
        .collect();
    assert_eq!(v, vec![vec![1, 2], vec![3, 4]]);
}

#[test]
fn test_interleave_ranges() {
    let ranges = vec![range_between(0i64, 2), range_between(500, 1000)];
    let v: Vec<_> = interleave(ranges).collect();
    assert_eq!(v, vec![0, 500, 1, 501]);
}

#[test]
fn test_flatten_nested_lists() {
    let nested = list![list![], list![1, list![list![list![], list![2, 3]], list![]], 4]];
    let flat: Vec<_> = flatten(nested.as_list().unwrap().to_vec()).collect();
    assert_eq!(
        flat,
        vec![
            Value::from(1),
            Value::from(2),
            Value::from(3),
            Value::from(4)
        ]
    );
}

#[test]
fn test_group_by_last_digit() {
    let groups = group_by(|e: &i32| e % 10, vec![1, 5001, 3]);
    let entries: Vec<_> = groups.into_iter().collect();
    assert_eq!(entries, vec![(1, vec![1, 5001]), (3, vec![3])]);
}

#[test]
fn test_reductions_scenarios() {
    let v: Vec<_> = reductions_from(|a, b| a + b, 5, Vec::<i32>::new()).collect();
    assert_eq!(v, vec![5]);
    let v: Vec<_> = reductions(|a, b| a + b, vec![1, 2, 3]).flatten().collect();
    assert_eq!(v, vec![1, 3, 6]);
}

#[test]
fn test_take_zero_evaluates_nothing() {
    let evaluations = Cell::new(0);
    let source = std::iter::from_fn(|| {
        evaluations.set(evaluations.get() + 1);
        Some(evaluations.get())
    });
    assert_eq!(take(0, source).count(), 0);
    assert_eq!(evaluations.get(), 0);
}

#[test]
fn test_nth_boundaries() {
    assert_eq!(nth(Vec::<i32>::new(), 0, Some(7)), Ok(7));
    let err = nth(vec![1, 2, 3], -1, None).unwrap_err();
    assert_eq!(err.code(), "OutOfRange");
    assert!(matches!(err, Error::OutOfRange { index: -1, .. }));
}

#[test]
fn test_nth_seq_on_values() {
    let v = list![10, 20, 30];
    assert_eq!(nth_seq(&v, 2, None), Ok(Value::from(30)));
    assert_eq!(nth_seq(&v, 3, Some(Value::Nil)), Ok(Value::Nil));
    assert_eq!(nth_seq(&Value::Nil, 0, Some(Value::from(0))), Ok(Value::from(0)));
    assert_eq!(count_seq(&Value::from("héllo")), Ok(5));
    assert!(nth_seq(&Value::from(1), 0, None).is_err());
}

#[test]
fn test_degenerate_counts() {
    assert_eq!(partition(vec![1, 2, 3], 0).count(), 0);
    assert_eq!(drop(-3, vec![1, 2]).collect::<Vec<_>>(), vec![1, 2]);
    let v: Vec<_> = take(4, take_nth(0, vec![9, 8, 7])).collect();
    assert_eq!(v, vec![9, 9, 9, 9]);
    assert_eq!(first(seq_or_empty(None::<Vec<i32>>)), None);
}

#[test]
fn test_runtime_predicate() {
    let allowed = Pred::set(vec![2, 4]);
    assert_eq!(lazyseq::some(allowed, vec![1, 3, 4]), Some(4));
    let v: Vec<_> = (0..6).remove(Pred::new(|x: &i32| *x > 2)).collect();
    assert_eq!(v, vec![0, 1, 2]);
}

#[test]
fn test_pipeline_over_infinite_source() {
    let v: Vec<i64> = range::<i64>()
        .keep(|x: i64| (x % 3 == 0).then_some(x * x))
        .partition_n(2)
        .map(|w| w.iter().sum())
        .take(3)
        .collect();
    assert_eq!(v, vec![9, 117, 369]);
}

#[test]
fn test_tree_seq_over_values() {
    let tree = list![1, list![2, list![3, 4]], 5];
    let leaves: Vec<_> = tree_seq(
        |v: &Value| v.as_list().is_some(),
        |v: &Value| v.as_list().map(<[Value]>::to_vec).unwrap_or_default(),
        tree,
    )
    .filter(|v| v.as_list().is_none())
    .collect();
    let flat: Vec<_> = flatten(vec![list![1, list![2, list![3, 4]], 5]]).collect();
    assert_eq!(leaves, flat);
}

#[test]
fn test_windows_over_infinite_sources() {
    assert_eq!(take(3, butlast(range::<u64>())).collect::<Vec<_>>(), vec![0, 1, 2]);
    assert_eq!(take(3, drop_last(2, 0..)).collect::<Vec<i32>>(), vec![0, 1, 2]);
    assert_eq!(take(4, interpose(-1, 0..)).collect::<Vec<i32>>(), vec![0, -1, 1, -1]);
    let runs: Vec<_> = take(2, partition_by(|x: &i32| *x / 2, 0..)).collect();
    assert_eq!(runs, vec![vec![0, 1], vec![2, 3]]);
    let windows: Vec<_> = take(2, partition_with(0.., 3, None, Some(vec![0])).unwrap()).collect();
    assert_eq!(windows, vec![vec![0, 1, 2], vec![3, 4, 5]]);
}

#[test]
fn test_collect_every_value_of_a_narrow_range() {
    let all: Vec<u8> = range().collect();
    assert_eq!(all.len(), 256);
    let evens: Vec<i8> = range::<i8>().take_nth(2).butlast().collect();
    assert_eq!(evens.len(), 63);
    assert_eq!(evens.last(), Some(&124));
}
