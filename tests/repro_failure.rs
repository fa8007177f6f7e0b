use heapsort_kit::algo::{bubble_sort, merge_sort};
use heapsort_kit::prelude::*;
use rand::rngs::StdRng;
use rand::{Rng, SeedableRng};

#[test]
fn test_bubble_small_element_far_right() {
    // A small element at the end has to travel left one slot per pass, while the
    // pass start keeps moving back with it.
    let mut input = vec![2, 3, 4, 5, 6, 7, 8, 1];
    let stats = bubble_sort(&mut input, i32::cmp);
    assert_eq!(input, vec![1, 2, 3, 4, 5, 6, 7, 8]);
    assert_eq!(stats.swaps, 7);
}

#[test]
fn test_bubble_front_swap_then_later_swap() {
    let mut rng = StdRng::seed_from_u64(42);

    for _iter in 0..2_000 {
        let len = rng.random_range(0..12);
        let mut input: Vec<u8> = (0..len).map(|_| rng.random_range(0..6)).collect();

        let mut expected = input.clone();
        expected.sort();

        let snapshot = input.clone();
        bubble_sort(&mut input, u8::cmp);

        if input != expected {
            panic!("Bubble sort failed on {:?}: got {:?}", snapshot, input);
        }
    }
}

#[test]
fn test_merge_odd_split_ties() {
    // Odd lengths put the extra element in the left run; ties must still
    // come out in input order.
    for len in [3usize, 5, 7, 9, 33] {
        let mut input: Vec<(u8, usize)> = (0..len).map(|i| ((i % 2) as u8, i)).collect();
        merge_sort(&mut input, |a: &(u8, usize), b: &(u8, usize)| a.0.cmp(&b.0)).unwrap();

        let zeros: Vec<usize> = input.iter().filter(|p| p.0 == 0).map(|p| p.1).collect();
        let ones: Vec<usize> = input.iter().filter(|p| p.0 == 1).map(|p| p.1).collect();
        assert!(zeros.windows(2).all(|w| w[0] < w[1]));
        assert!(ones.windows(2).all(|w| w[0] < w[1]));
        assert_eq!(zeros.len() + ones.len(), len);
    }
}
