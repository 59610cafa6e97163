use std::panic::{self, AssertUnwindSafe};
use std::thread;

use rand::rngs::StdRng;
use rand::seq::SliceRandom;
use rand::{Rng, SeedableRng};
use spansort::algorithms;
use spansort::prelude::*;

fn engine_sort<T>(algorithm: Algorithm, input: &[T]) -> Vec<T>
where
    T: Ord + Clone + Send + 'static,
{
    let mut engine = SortEngine::new(input.to_vec());
    engine.set_algorithm(algorithm);
    engine.sort().unwrap();
    engine.into_data()
}

fn patterns(rng: &mut StdRng) -> Vec<(&'static str, Vec<i32>)> {
    let random: Vec<i32> = (0..500).map(|_| rng.random_range(-1000..1000)).collect();
    let mut ascending = random.clone();
    ascending.sort();
    let mut descending = ascending.clone();
    descending.reverse();
    let few_unique: Vec<i32> = (0..500).map(|_| rng.random_range(0..4)).collect();

    vec![
        ("random", random),
        ("ascending", ascending),
        ("descending", descending),
        ("all_equal", vec![7; 500]),
        ("few_unique", few_unique),
        ("empty", Vec::new()),
        ("singleton", vec![42]),
    ]
}

#[test]
fn test_every_algorithm_matches_std_sort() {
    let mut rng = StdRng::seed_from_u64(7);

    for (name, input) in patterns(&mut rng) {
        let mut expected = input.clone();
        expected.sort();

        for algorithm in Algorithm::ALL {
            let actual = engine_sort(algorithm, &input);
            assert_eq!(actual, expected, "{} failed on {} input", algorithm.name(), name);
        }
    }
}

#[test]
fn test_identical_output_on_distinct_keys() {
    let mut rng = StdRng::seed_from_u64(13);
    let mut input: Vec<i32> = (0..400).collect();
    input.shuffle(&mut rng);
    let expected: Vec<i32> = (0..400).collect();

    for algorithm in Algorithm::ALL {
        assert_eq!(engine_sort(algorithm, &input), expected, "{}", algorithm.name());
    }
}

#[test]
fn test_descending_comparator_every_algorithm() {
    let mut rng = StdRng::seed_from_u64(17);
    let input: Vec<i32> = (0..300).map(|_| rng.random_range(-500..500)).collect();
    let mut expected = input.clone();
    expected.sort_by(|a, b| b.cmp(a));

    for algorithm in Algorithm::ALL {
        let mut engine = SortEngine::with_comparator(input.clone(), |a: &i32, b: &i32| b.cmp(a));
        engine.set_algorithm(algorithm);
        engine.sort().unwrap();
        assert_eq!(engine.data(), &expected[..], "{}", algorithm.name());
    }
}

#[test]
fn test_sub_range_leaves_outside_untouched() {
    let mut rng = StdRng::seed_from_u64(5);
    let input: Vec<i32> = (0..200).map(|_| rng.random_range(0..1000)).collect();

    for algorithm in Algorithm::ALL {
        let mut engine = SortEngine::new(input.clone());
        engine.set_algorithm(algorithm);
        engine.sort_range(50, 150).unwrap();

        let data = engine.data();
        assert_eq!(&data[..50], &input[..50], "{} touched the prefix", algorithm.name());
        assert_eq!(&data[150..], &input[150..], "{} touched the suffix", algorithm.name());

        let mut expected = input[50..150].to_vec();
        expected.sort();
        assert_eq!(&data[50..150], &expected[..], "{} missorted the range", algorithm.name());
    }
}

#[test]
fn test_linearithmic_variants_on_larger_input() {
    let mut rng = StdRng::seed_from_u64(29);
    let input: Vec<i64> = (0..20_000).map(|_| rng.random()).collect();
    let mut expected = input.clone();
    expected.sort_unstable();

    for algorithm in [
        Algorithm::QuickSort,
        Algorithm::QuickSortOptimized,
        Algorithm::QuickSortConcurrent,
        Algorithm::MergeSort,
    ] {
        assert_eq!(engine_sort(algorithm, &input), expected, "{}", algorithm.name());
    }
}

#[test]
fn test_insertion_sort_is_stable() {
    let mut rng = StdRng::seed_from_u64(19);
    let input: Vec<(u8, u32)> = (0..300u32).map(|id| (rng.random_range(0..8), id)).collect();
    let mut expected = input.clone();
    expected.sort_by_key(|&(key, _)| key);

    let mut engine =
        SortEngine::with_comparator(input, |a: &(u8, u32), b: &(u8, u32)| a.0.cmp(&b.0));
    engine.set_algorithm(Algorithm::InsertionSort);
    engine.sort().unwrap();

    assert_eq!(engine.data(), &expected[..]);
}

#[test]
fn test_progress_reaches_total_for_every_algorithm() {
    let mut rng = StdRng::seed_from_u64(11);
    let input: Vec<i32> = (0..300).map(|_| rng.random_range(0..100)).collect();

    for algorithm in Algorithm::ALL {
        let mut engine = SortEngine::new(input.clone());
        engine.set_algorithm(algorithm);
        let tracker = engine.progress_tracker();

        engine.sort().unwrap();
        assert_eq!(tracker.sorted(), 300, "{}", algorithm.name());
        assert_eq!(tracker.total(), 300, "{}", algorithm.name());
    }
}

#[test]
fn test_progress_never_decreases_during_concurrent_sort() {
    let mut rng = StdRng::seed_from_u64(43);
    let input: Vec<i64> = (0..300_000).map(|_| rng.random()).collect();

    let mut engine = SortEngine::new(input);
    engine.set_algorithm(Algorithm::QuickSortConcurrent);
    let tracker = engine.progress_tracker();

    let observer = thread::spawn(move || {
        let mut samples = vec![tracker.fraction()];
        loop {
            let sample = tracker.fraction();
            if samples.last() != Some(&sample) {
                samples.push(sample);
            }
            // The engine pins the fraction at 1.0 once the sort returns.
            if sample == 1.0 {
                break;
            }
        }
        samples
    });

    engine.sort().unwrap();
    let samples = observer.join().unwrap();

    assert_eq!(*samples.last().unwrap(), 1.0);
    assert!(
        samples.windows(2).all(|pair| pair[0] <= pair[1]),
        "fraction went backwards: {samples:?}"
    );
}

// The engine normalizes the counter after the algorithm returns, so exact
// accounting is checked through the standalone routines, which have nothing
// running after them.
#[test]
fn test_routines_credit_exactly_the_block_length() {
    let mut rng = StdRng::seed_from_u64(23);
    let input: Vec<i32> = (0..257).map(|_| rng.random_range(0..50)).collect();

    let routines: [(&str, fn(&mut [i32], &SortProgress)); 8] = [
        ("selection", |block, progress| algorithms::selection::sort(block, &i32::cmp, progress)),
        ("insertion", |block, progress| algorithms::insertion::sort(block, &i32::cmp, progress)),
        ("exchange", |block, progress| algorithms::exchange::sort(block, &i32::cmp, progress)),
        ("bubble", |block, progress| algorithms::bubble::sort(block, &i32::cmp, progress)),
        ("cocktail", |block, progress| {
            algorithms::bubble::cocktail_sort(block, &i32::cmp, progress)
        }),
        ("merge", |block, progress| algorithms::merge::sort(block, &i32::cmp, progress)),
        ("quicksort", |block, progress| algorithms::quicksort::sort(block, &i32::cmp, progress)),
        ("quicksort_optimized", |block, progress| {
            algorithms::quicksort::sort_optimized(block, &i32::cmp, progress)
        }),
    ];

    for (name, run) in routines {
        let progress = SortProgress::new();
        progress.reset(input.len());
        let mut block = input.clone();
        run(&mut block, &progress);

        assert_eq!(progress.sorted(), input.len(), "{name} accounting drifted");
        assert!(block.windows(2).all(|pair| pair[0] <= pair[1]), "{name} left block unsorted");
    }

    let progress = SortProgress::new();
    progress.reset(input.len());
    let mut block = input.clone();
    algorithms::concurrent::sort(&mut block, &i32::cmp, &progress).unwrap();

    assert_eq!(progress.sorted(), input.len(), "concurrent accounting drifted");
    assert!(block.windows(2).all(|pair| pair[0] <= pair[1]));
}

// Small lengths hit every combination of child sizes around the pivot.
#[test]
fn test_concurrent_sorts_every_length_with_exact_credit() {
    let mut rng = StdRng::seed_from_u64(37);

    for len in (2usize..=512).chain([1_000, 4_096, 10_000]) {
        let mut block: Vec<i32> = (0..len).map(|_| rng.random_range(-50..50)).collect();
        let progress = SortProgress::new();
        progress.reset(len);
        algorithms::concurrent::sort(&mut block, &i32::cmp, &progress).unwrap();

        assert_eq!(progress.sorted(), len, "credit drifted at length {len}");
        assert!(block.windows(2).all(|pair| pair[0] <= pair[1]), "unsorted at length {len}");
    }
}

#[test]
fn test_concurrent_comparator_panic_resumes_on_caller() {
    let mut rng = StdRng::seed_from_u64(41);
    let mut block: Vec<i32> = (0..2_000).collect();
    block.shuffle(&mut rng);

    let progress = SortProgress::new();
    progress.reset(block.len());
    let outcome = panic::catch_unwind(AssertUnwindSafe(|| {
        algorithms::concurrent::sort(
            &mut block,
            &|a: &i32, b: &i32| {
                if *a == 1_500 || *b == 1_500 {
                    panic!("poisoned comparison");
                }
                a.cmp(b)
            },
            &progress,
        )
    }));

    let payload = outcome.unwrap_err();
    assert_eq!(payload.downcast_ref::<&str>(), Some(&"poisoned comparison"));
}

#[test]
fn test_bubble_early_exit_on_sorted_input_still_completes_progress() {
    let input: Vec<i32> = (0..100).collect();

    let progress = SortProgress::new();
    progress.reset(input.len());
    let mut block = input.clone();
    algorithms::bubble::sort(&mut block, &i32::cmp, &progress);

    assert_eq!(block, input);
    assert_eq!(progress.sorted(), input.len());
}
