use rand::rngs::StdRng;
use rand::{Rng, SeedableRng};
use spansort::prelude::*;

#[test]
fn test_sorted_element_matches_full_sort() {
    let mut rng = StdRng::seed_from_u64(31);
    let input: Vec<i32> = (0..200).map(|_| rng.random_range(0..50)).collect();
    let mut expected = input.clone();
    expected.sort();

    for index in 0..input.len() {
        let mut engine = SortEngine::new(input.clone());
        assert_eq!(engine.sorted_element(index).unwrap(), expected[index], "index={index}");
    }
}

#[test]
fn test_duplicate_keys() {
    let mut engine = SortEngine::new(vec![5, 3, 3, 1]);
    engine.set_clonable(true);

    assert_eq!(engine.sorted_element(0).unwrap(), 1);
    assert_eq!(engine.sorted_element(1).unwrap(), 3);
    assert_eq!(engine.sorted_element(2).unwrap(), 3);
    assert_eq!(engine.sorted_element(3).unwrap(), 5);
}

#[test]
fn test_clonable_query_leaves_buffer_untouched() {
    let input = vec![9, 2, 7, 4, 5, 1];
    let mut engine = SortEngine::new(input.clone());
    engine.set_clonable(true);

    assert_eq!(engine.sorted_element(2).unwrap(), 4);
    assert_eq!(engine.data(), &input[..]);
}

#[test]
fn test_query_without_clone_partially_reorders() {
    let input = vec![9, 2, 7, 4, 5, 1];
    let mut engine = SortEngine::new(input.clone());

    let answer = engine.sorted_element(2).unwrap();
    assert_eq!(answer, 4);

    // The answer now sits at its sorted position and the buffer is still a
    // permutation of the input.
    assert_eq!(engine.data()[2], 4);
    let mut remaining = engine.data().to_vec();
    remaining.sort();
    let mut original = input;
    original.sort();
    assert_eq!(remaining, original);
}

#[test]
fn test_sorted_element_in_sub_range() {
    //                       |-- range [2, 6) --|
    let input = vec![50, 40, 8, 6, 2, 4, 30, 20];
    let mut engine = SortEngine::new(input);
    engine.set_clonable(true);

    // Sorted view of the range alone: 2, 4, 6, 8.
    assert_eq!(engine.sorted_element_in(2, 2, 6).unwrap(), 2);
    assert_eq!(engine.sorted_element_in(3, 2, 6).unwrap(), 4);
    assert_eq!(engine.sorted_element_in(5, 2, 6).unwrap(), 8);
}

#[test]
fn test_index_outside_range_errors() {
    let mut engine = SortEngine::new(vec![3, 1, 2, 4]);

    let result = engine.sorted_element_in(0, 1, 3);
    assert!(matches!(result, Err(SortError::IndexOutOfRange { index: 0, start: 1, end: 3 })));

    let result = engine.sorted_element_in(3, 1, 3);
    assert!(matches!(result, Err(SortError::IndexOutOfRange { index: 3, .. })));

    let result = engine.sorted_element(4);
    assert!(matches!(result, Err(SortError::IndexOutOfRange { index: 4, .. })));
}

#[test]
fn test_empty_range_never_holds_an_index() {
    let mut engine = SortEngine::new(vec![3, 1, 2, 4]);

    assert!(matches!(
        engine.sorted_element_in(2, 2, 2),
        Err(SortError::IndexOutOfRange { .. })
    ));
    assert!(matches!(
        engine.sorted_element_in(2, 3, 1),
        Err(SortError::IndexOutOfRange { .. })
    ));
}

#[test]
fn test_range_out_of_bounds_errors() {
    let mut engine = SortEngine::new(vec![3, 1, 2]);

    let result = engine.sorted_element_in(0, 0, 9);
    assert!(matches!(result, Err(SortError::RangeOutOfBounds { start: 0, end: 9, len: 3 })));
}

#[test]
fn test_query_respects_comparator() {
    let mut engine = SortEngine::with_comparator(vec![5, 3, 3, 1], |a: &i32, b: &i32| b.cmp(a));
    engine.set_clonable(true);

    // Under the descending order, index 0 is the maximum.
    assert_eq!(engine.sorted_element(0).unwrap(), 5);
    assert_eq!(engine.sorted_element(3).unwrap(), 1);
}

#[test]
fn test_free_select_functions() {
    let mut data = vec![13, 4, 9, 0, 4, 21, 7];

    assert_eq!(*select_nth(&mut data, 0), 0);
    assert_eq!(*select_nth(&mut data, 6), 21);

    let descending = |a: &i32, b: &i32| b.cmp(a);
    assert_eq!(*select_nth_by(&mut data, 0, &descending), 21);
}
