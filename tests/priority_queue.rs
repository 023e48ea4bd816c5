use proptest::prelude::*;
use taskdag::PriorityQueue;

#[test]
fn min_heap_pops_in_ascending_order() {
    let mut heap = PriorityQueue::new(|a: &i32, b: &i32| a < b);

    assert_eq!(heap.pop(), None);

    heap.push(233);
    assert_eq!(heap.pop(), Some(233));
    assert_eq!(heap.pop(), None);

    for x in [1, 3, 2, 5, 4, 0] {
        heap.push(x);
    }

    for expected in 0..=5 {
        assert_eq!(heap.pop(), Some(expected));
    }
    assert_eq!(heap.pop(), None);
}

#[test]
fn documented_sequence_pops_sorted() {
    let mut heap = PriorityQueue::new(|a: &i32, b: &i32| a < b);
    heap.extend([5, 3, 1, 4, 0, 2]);

    let popped: Vec<i32> = std::iter::from_fn(|| heap.pop()).collect();
    assert_eq!(popped, vec![0, 1, 2, 3, 4, 5]);
}

#[test]
fn popping_empty_queue_is_idempotent() {
    let mut heap = PriorityQueue::new(|a: &u8, b: &u8| a > b);
    assert!(heap.is_empty());
    assert_eq!(heap.pop(), None);
    assert_eq!(heap.pop(), None);
    assert!(heap.is_empty());
    assert_eq!(heap.len(), 0);
}

#[test]
fn comparator_on_non_ord_elements() {
    #[derive(Debug, PartialEq)]
    struct Job {
        name: &'static str,
        weight: f64,
    }

    let mut heap = PriorityQueue::new(|a: &Job, b: &Job| a.weight > b.weight);
    heap.push(Job { name: "light", weight: 0.5 });
    heap.push(Job { name: "heavy", weight: 9.5 });
    heap.push(Job { name: "medium", weight: 3.0 });

    assert_eq!(heap.peek().map(|j| j.name), Some("heavy"));
    assert_eq!(heap.len(), 3);

    let names: Vec<&str> = std::iter::from_fn(|| heap.pop()).map(|j| j.name).collect();
    assert_eq!(names, vec!["heavy", "medium", "light"]);
}

#[test]
fn interleaved_push_and_pop() {
    let mut heap = PriorityQueue::new(|a: &i32, b: &i32| a > b);
    heap.push(3);
    heap.push(7);
    assert_eq!(heap.pop(), Some(7));
    heap.push(1);
    heap.push(9);
    heap.push(3);
    assert_eq!(heap.pop(), Some(9));
    assert_eq!(heap.pop(), Some(3));
    assert_eq!(heap.pop(), Some(3));
    assert_eq!(heap.pop(), Some(1));
    assert_eq!(heap.pop(), None);
}

#[derive(Debug, Clone)]
enum Op {
    Push(i32),
    Pop,
}

fn op_strategy() -> impl Strategy<Value = Op> {
    prop_oneof![
        3 => any::<i32>().prop_map(Op::Push),
        2 => Just(Op::Pop),
    ]
}

proptest! {
    #[test]
    fn pop_always_returns_current_minimum(ops in proptest::collection::vec(op_strategy(), 0..200)) {
        let mut heap = PriorityQueue::new(|a: &i32, b: &i32| a < b);
        let mut model: Vec<i32> = Vec::new();

        for op in ops {
            match op {
                Op::Push(x) => {
                    heap.push(x);
                    model.push(x);
                }
                Op::Pop => {
                    let expected = model.iter().copied().min();
                    if let Some(min) = expected {
                        let pos = model.iter().position(|v| *v == min).unwrap();
                        model.swap_remove(pos);
                    }
                    prop_assert_eq!(heap.pop(), expected);
                }
            }
            prop_assert_eq!(heap.len(), model.len());
        }
    }

    #[test]
    fn draining_yields_sorted_output(mut values in proptest::collection::vec(any::<i64>(), 0..100)) {
        let mut heap = PriorityQueue::new(|a: &i64, b: &i64| a > b);
        heap.extend(values.iter().copied());

        let drained: Vec<i64> = std::iter::from_fn(|| heap.pop()).collect();
        values.sort_unstable_by(|a, b| b.cmp(a));
        prop_assert_eq!(drained, values);
    }
}
