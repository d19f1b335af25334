use sorted_linked_list::{sorted_list, Scalar, SortedLinkedList, SortedListError};

fn values(list: &SortedLinkedList) -> Vec<Scalar> {
    list.iter().cloned().collect()
}

fn ints(items: &[i64]) -> Vec<Scalar> {
    items.iter().copied().map(Scalar::from).collect()
}

fn texts(items: &[&str]) -> Vec<Scalar> {
    items.iter().copied().map(Scalar::from).collect()
}

#[test]
fn initializes_empty_list_matrix() {
    let list = SortedLinkedList::new();
    assert!(values(&list).is_empty());
    assert_eq!(list.iter().next(), None);
    assert_eq!(list.dump(), "");
    assert!(list.first().is_none());

    let from_macro = sorted_list![].unwrap();
    assert_eq!(from_macro, list);
    assert_eq!(SortedLinkedList::default(), list);
}

#[test]
fn push_splice_matrix() {
    let mut list = SortedLinkedList::new();
    for v in [5, 4, 3, 1, 2] {
        list.push_splice(v);
    }
    assert_eq!(values(&list), ints(&[1, 2, 3, 4, 5]));
}

#[test]
fn delete_splice_on_empty_list_matrix() {
    let mut list = SortedLinkedList::new();
    list.delete_splice(0);
    assert!(values(&list).is_empty());
    assert!(list.is_empty());
}

#[test]
fn delete_splice_on_single_element_list_matrix() {
    let mut list = sorted_list![1].unwrap();
    list.delete_splice(1);
    assert!(values(&list).is_empty());
    assert!(list.is_empty());
}

#[test]
fn delete_splice_on_multiple_element_list_matrix() {
    let mut list = sorted_list![1, 2, 3, 4, 5].unwrap();
    list.delete_splice(2);
    assert_eq!(values(&list), ints(&[1, 3, 4, 5]));

    list.delete_splice(5);
    list.delete_splice(4);
    assert_eq!(values(&list), ints(&[1, 3]));
}

#[test]
fn is_empty_matrix() {
    let cases = [
        (sorted_list![].unwrap(), true),
        (sorted_list![1].unwrap(), false),
        (sorted_list![1, 2, 3].unwrap(), false),
    ];
    for (list, expected) in cases {
        assert_eq!(list.is_empty(), expected);
        assert_eq!(list.count() == 0, expected);
    }
}

#[test]
fn count_matrix() {
    let cases = [
        (sorted_list![].unwrap(), 0),
        (sorted_list![1].unwrap(), 1),
        (sorted_list![1, 2, 3].unwrap(), 3),
        (sorted_list!["x", "x"].unwrap(), 2),
    ];
    for (list, expected) in cases {
        assert_eq!(list.count(), expected);
    }
}

#[test]
fn first_returns_linked_element_matrix() {
    let mut pushed = SortedLinkedList::new();
    for v in 1..=5 {
        pushed.push_splice(v);
    }
    let built = sorted_list![1, 2, 3, 4, 5].unwrap();

    for list in [&built, &pushed] {
        let mut curr = list.first();
        for expected in 1..=5 {
            let node = curr.expect("node");
            assert_eq!(node.value(), &Scalar::Int(expected));
            curr = node.next();
        }
        assert!(curr.is_none());
    }
}

#[test]
fn add_rebuild_single_value_matrix() {
    let mut list = SortedLinkedList::new();
    list.add_rebuild(1).unwrap();
    assert_eq!(values(&list), ints(&[1]));
}

#[test]
fn initializes_with_constructor_values_matrix() {
    let list = sorted_list![1, 2, 3].unwrap();
    assert_eq!(values(&list), ints(&[1, 2, 3]));

    let unsorted = SortedLinkedList::from_values([3, 1, 2]).unwrap();
    assert_eq!(unsorted, list);

    let converted = SortedLinkedList::try_from(ints(&[2, 3, 1])).unwrap();
    assert_eq!(converted, list);
}

#[test]
fn remove_rebuild_matrix() {
    let mut list = SortedLinkedList::new();
    for v in [1, 2, 2, 3, 3] {
        list.add_rebuild(v).unwrap();
    }
    assert_eq!(values(&list), ints(&[1, 2, 2, 3, 3]));

    list.remove_rebuild(2).unwrap();
    assert_eq!(values(&list), ints(&[1, 3, 3]));

    list.remove_rebuild(1).unwrap();
    assert_eq!(values(&list), ints(&[3, 3]));

    list.remove_rebuild(3).unwrap();
    assert!(list.is_empty());
}

#[test]
fn remove_rebuild_on_empty_list_matrix() {
    let mut list = SortedLinkedList::new();
    list.remove_rebuild(7).unwrap();
    assert!(list.is_empty());
    assert_eq!(list.dump(), "");
}

#[test]
fn add_rebuild_int_values_matrix() {
    let mut list = SortedLinkedList::new();
    for v in [2, 3, 1, 5, 4] {
        list.add_rebuild(v).unwrap();
    }
    assert_eq!(values(&list), ints(&[1, 2, 3, 4, 5]));
}

#[test]
fn add_rebuild_string_values_matrix() {
    let mut list = SortedLinkedList::new();
    for v in ["c", "b", "d", "e", "a"] {
        list.add_rebuild(v).unwrap();
    }
    assert_eq!(values(&list), texts(&["a", "b", "c", "d", "e"]));
}

#[test]
fn mixed_kinds_rejected_matrix() {
    let mut list = SortedLinkedList::new();
    list.add_rebuild(1).unwrap();

    let err = list.add_rebuild("a").unwrap_err();
    assert!(matches!(err, SortedListError::InvalidInput { .. }));
    assert_eq!(
        err.to_string(),
        "\"SortedLinkedList\" expects same type for all values, \"integer, string\" given."
    );
    assert_eq!(values(&list), ints(&[1]));

    assert!(sorted_list![1, "a"].is_err());
    assert!(SortedLinkedList::from_values([Scalar::from("a"), Scalar::from(1)]).is_err());
}

#[test]
fn dump_matrix() {
    let mut list = SortedLinkedList::new();
    for v in [2, 3, 1, 5, 4] {
        list.add_rebuild(v).unwrap();
    }
    assert_eq!(list.dump(), "1 => 2; 2 => 3; 3 => 4; 4 => 5; 5 => NULL ; ");
}

#[test]
fn iteration_is_restartable_matrix() {
    let list = sorted_list![3, 1, 2].unwrap();
    let first: Vec<&Scalar> = list.iter().collect();
    let second: Vec<&Scalar> = (&list).into_iter().collect();
    assert_eq!(first, second);

    let mut seen = Vec::new();
    for v in &list {
        seen.push(v.clone());
    }
    assert_eq!(seen, ints(&[1, 2, 3]));
    assert_eq!(list.count(), 3);
}

#[test]
fn strategies_interleave_matrix() {
    let mut list = sorted_list![10, 30].unwrap();
    list.push_splice(20);
    list.add_rebuild(5).unwrap();
    list.push_splice(20);
    assert_eq!(values(&list), ints(&[5, 10, 20, 20, 30]));

    list.delete_splice(20);
    assert_eq!(values(&list), ints(&[5, 10, 20, 30]));

    list.push_splice(20);
    list.remove_rebuild(20).unwrap();
    assert_eq!(values(&list), ints(&[5, 10, 30]));
    assert_eq!(list.to_vec(), ints(&[5, 10, 30]));
}

#[test]
fn long_list_drops_without_overflow_matrix() {
    let list = SortedLinkedList::from_values(0..500_000).unwrap();
    assert_eq!(list.count(), 500_000);
    assert_eq!(
        format!("{:?}", list.first()),
        "Some(Node { value: Int(0), next: Some(Int(1)) })"
    );
    drop(list);
}
