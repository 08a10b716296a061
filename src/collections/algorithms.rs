//! Slice and iterator algorithms: searching, transforming, sorting, binary
//! search bounds, set algebra, heaps, numeric folds and permutations.
//!
//! Run with: cargo run --bin stl_algorithms

use std::collections::{BTreeSet, BinaryHeap};
use std::io::{self, Write};

use itertools::Itertools;
use rand::rngs::StdRng;
use rand::seq::SliceRandom;
use rand::SeedableRng;

use crate::console::{banner, spaced, topic, yes_no};

// =============================================================================
// Helpers
// =============================================================================

/// Index of the first element not less than `target` in a sorted slice.
pub fn lower_bound(sorted: &[i32], target: i32) -> usize {
    sorted.partition_point(|&x| x < target)
}

/// Index of the first element greater than `target` in a sorted slice.
pub fn upper_bound(sorted: &[i32], target: i32) -> usize {
    sorted.partition_point(|&x| x <= target)
}

pub fn equal_range(sorted: &[i32], target: i32) -> (usize, usize) {
    (lower_bound(sorted, target), upper_bound(sorted, target))
}

/// Sort only the `k` smallest values into the front; the rest keep an
/// unspecified order.
pub fn partial_sort(values: &mut [i32], k: usize) {
    if k == 0 || values.is_empty() {
        return;
    }
    let k = k.min(values.len());
    if k < values.len() {
        values.select_nth_unstable(k - 1);
    }
    values[..k].sort_unstable();
}

/// The `n`-th smallest value (zero-based), without fully sorting.
pub fn nth_smallest(values: &[i32], n: usize) -> Option<i32> {
    if n >= values.len() {
        return None;
    }
    let mut scratch = values.to_vec();
    let (_, nth, _) = scratch.select_nth_unstable(n);
    Some(*nth)
}

pub fn set_union(a: &[i32], b: &[i32]) -> Vec<i32> {
    let a: BTreeSet<_> = a.iter().copied().collect();
    let b: BTreeSet<_> = b.iter().copied().collect();
    a.union(&b).copied().collect()
}

pub fn set_intersection(a: &[i32], b: &[i32]) -> Vec<i32> {
    let a: BTreeSet<_> = a.iter().copied().collect();
    let b: BTreeSet<_> = b.iter().copied().collect();
    a.intersection(&b).copied().collect()
}

pub fn set_difference(a: &[i32], b: &[i32]) -> Vec<i32> {
    let a: BTreeSet<_> = a.iter().copied().collect();
    let b: BTreeSet<_> = b.iter().copied().collect();
    a.difference(&b).copied().collect()
}

/// Running totals: `[1, 2, 3]` becomes `[1, 3, 6]`.
pub fn partial_sums(values: &[i32]) -> Vec<i32> {
    values
        .iter()
        .scan(0, |acc, &x| {
            *acc += x;
            Some(*acc)
        })
        .collect()
}

/// First element unchanged, then each element minus its predecessor.
pub fn adjacent_differences(values: &[i32]) -> Vec<i32> {
    values
        .first()
        .copied()
        .into_iter()
        .chain(values.iter().tuple_windows().map(|(a, b)| b - a))
        .collect()
}

pub fn dot_product(a: &[i32], b: &[i32]) -> i32 {
    a.iter().zip(b).map(|(x, y)| x * y).sum()
}

/// Every ordering of `values`, in lexicographic order of positions.
pub fn permutations(values: &[i32]) -> Vec<Vec<i32>> {
    values.iter().copied().permutations(values.len()).collect()
}

/// Deterministic shuffle: the same seed always gives the same order.
pub fn shuffled(values: &[i32], seed: u64) -> Vec<i32> {
    let mut rng = StdRng::seed_from_u64(seed);
    let mut out = values.to_vec();
    out.shuffle(&mut rng);
    out
}

// =============================================================================
// Lesson sections
// =============================================================================

fn non_modifying(out: &mut dyn Write) -> io::Result<()> {
    topic(out, "Non-modifying algorithms")?;
    let numbers: Vec<i32> = (1..=10).collect();

    if let Some(pos) = numbers.iter().position(|&n| n == 5) {
        writeln!(out, "  Found 5 at position: {pos}")?;
    }
    writeln!(out, "  Count of 3: {}", numbers.iter().filter(|&&n| n == 3).count())?;
    writeln!(out, "  Count of even numbers: {}", numbers.iter().filter(|&&n| n % 2 == 0).count())?;
    writeln!(out, "  Doubled numbers: {}", spaced(numbers.iter().map(|n| n * 2)))?;
    writeln!(out, "  All positive: {}", yes_no(numbers.iter().all(|&n| n > 0)))?;
    writeln!(out, "  Any > 5: {}", yes_no(numbers.iter().any(|&n| n > 5)))?;
    writeln!(out, "  None negative: {}", yes_no(!numbers.iter().any(|&n| n < 0)))?;
    writeln!(out, "  Min/max: {:?}", numbers.iter().minmax().into_option())?;
    writeln!(out)
}

fn modifying(out: &mut dyn Write) -> io::Result<()> {
    topic(out, "Modifying algorithms")?;
    let numbers: Vec<i32> = (1..=10).collect();
    let doubled: Vec<i32> = numbers.iter().map(|n| n * 2).collect();
    writeln!(out, "  Original: {}", spaced(&numbers))?;
    writeln!(out, "  Doubled: {}", spaced(&doubled))?;

    let mut replaced = vec![1, 2, 3, 2, 4, 2, 5];
    for n in replaced.iter_mut().filter(|n| **n == 2) {
        *n = 99;
    }
    writeln!(out, "  After replacing 2 with 99: {}", spaced(&replaced))?;

    let mut evens_zeroed = numbers.clone();
    evens_zeroed.iter_mut().filter(|n| **n % 2 == 0).for_each(|n| *n = 0);
    writeln!(out, "  After replacing even numbers with 0: {}", spaced(&evens_zeroed))?;

    let mut reversed = vec![1, 2, 3, 4, 5];
    reversed.reverse();
    writeln!(out, "  Reversed: {}", spaced(&reversed))?;

    let mut rotated = vec![1, 2, 3, 4, 5];
    rotated.rotate_left(2);
    writeln!(out, "  Rotated left by 2: {}", spaced(&rotated))?;

    let mut deduped = vec![1, 1, 2, 3, 3, 3, 4];
    deduped.dedup();
    writeln!(out, "  Deduplicated: {}", spaced(&deduped))?;
    writeln!(out)
}

fn sorting(out: &mut dyn Write) -> io::Result<()> {
    topic(out, "Sorting")?;
    let numbers = vec![64, 34, 25, 12, 22, 11, 90];

    let mut sorted = numbers.clone();
    sorted.sort_unstable();
    writeln!(out, "  Original: {}", spaced(&numbers))?;
    writeln!(out, "  Sorted: {}", spaced(&sorted))?;

    let mut descending = numbers.clone();
    descending.sort_unstable_by(|a, b| b.cmp(a));
    writeln!(out, "  Sorted (descending): {}", spaced(&descending))?;

    let mut partial = numbers.clone();
    partial_sort(&mut partial, 3);
    writeln!(out, "  Partial sort (first 3): {}", spaced(&partial[..3]))?;

    if let Some(third) = nth_smallest(&numbers, 2) {
        writeln!(out, "  Nth element (3rd smallest): {third}")?;
    }

    let mut words = vec!["pear", "fig", "banana", "kiwi"];
    words.sort_by_key(|w| (w.len(), *w));
    writeln!(out, "  Sorted by length: {}", words.join(" "))?;
    writeln!(out)
}

fn binary_search(out: &mut dyn Write) -> io::Result<()> {
    topic(out, "Binary search")?;
    let numbers: Vec<i32> = (1..=10).collect();
    let found = numbers.binary_search(&5).is_ok();
    writeln!(out, "  Binary search for 5: {}", if found { "Found" } else { "Not found" })?;
    writeln!(out, "  Lower bound for 5: position {}", lower_bound(&numbers, 5))?;
    writeln!(out, "  Upper bound for 5: position {}", upper_bound(&numbers, 5))?;
    let (lo, hi) = equal_range(&numbers, 5);
    writeln!(out, "  Equal range for 5: [{lo}, {hi})")?;
    writeln!(out)
}

fn set_algebra(out: &mut dyn Write) -> io::Result<()> {
    topic(out, "Set algorithms")?;
    let set1 = [1, 2, 3, 4, 5];
    let set2 = [3, 4, 5, 6, 7];
    writeln!(out, "  Set 1: {}", spaced(set1))?;
    writeln!(out, "  Set 2: {}", spaced(set2))?;
    writeln!(out, "  Union: {}", spaced(set_union(&set1, &set2)))?;
    writeln!(out, "  Intersection: {}", spaced(set_intersection(&set1, &set2)))?;
    writeln!(out, "  Difference (set1 - set2): {}", spaced(set_difference(&set1, &set2)))?;
    writeln!(out)
}

fn heaps(out: &mut dyn Write) -> io::Result<()> {
    topic(out, "Heap operations")?;
    let mut heap: BinaryHeap<i32> = [3, 1, 4, 1, 5, 9, 2, 6].into_iter().collect();
    if let Some(max) = heap.peek() {
        writeln!(out, "  Heap maximum: {max}")?;
    }
    heap.push(8);
    writeln!(out, "  After push(8), size: {}", heap.len())?;
    if let Some(max) = heap.pop() {
        writeln!(out, "  Popped element: {max}")?;
    }
    writeln!(out, "  Remaining (sorted): {}", spaced(heap.into_sorted_vec()))?;
    writeln!(out)
}

fn numeric(out: &mut dyn Write) -> io::Result<()> {
    topic(out, "Numeric folds")?;
    let numbers = [1, 2, 3, 4, 5];
    writeln!(out, "  Sum: {}", numbers.iter().sum::<i32>())?;
    writeln!(out, "  Product: {}", numbers.iter().product::<i32>())?;
    writeln!(out, "  Partial sums: {}", spaced(partial_sums(&numbers)))?;
    writeln!(out, "  Dot product: {}", dot_product(&[1, 2, 3], &[4, 5, 6]))?;
    writeln!(out, "  Adjacent differences: {}", spaced(adjacent_differences(&numbers)))?;
    writeln!(out)
}

fn permutation(out: &mut dyn Write) -> io::Result<()> {
    topic(out, "Permutations")?;
    writeln!(out, "  All permutations of [1, 2, 3]:")?;
    for perm in permutations(&[1, 2, 3]) {
        writeln!(out, "    {}", spaced(perm))?;
    }
    writeln!(out, "  Shuffled with seed 42: {}", spaced(shuffled(&[1, 2, 3, 4, 5], 42)))?;
    writeln!(out)
}

pub fn run(out: &mut dyn Write) -> io::Result<()> {
    banner(out, "Standard Algorithms")?;
    non_modifying(out)?;
    modifying(out)?;
    sorting(out)?;
    binary_search(out)?;
    set_algebra(out)?;
    heaps(out)?;
    numeric(out)?;
    permutation(out)?;
    banner(out, "End of Algorithms Example")
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn bounds_on_sorted_slice() {
        let numbers: Vec<i32> = (1..=10).collect();
        assert_eq!(lower_bound(&numbers, 5), 4);
        assert_eq!(upper_bound(&numbers, 5), 5);
        assert_eq!(equal_range(&[1, 2, 2, 2, 3], 2), (1, 4));
        assert_eq!(equal_range(&[1, 3], 2), (1, 1));
    }

    #[test]
    fn partial_sort_orders_prefix() {
        let mut values = vec![64, 34, 25, 12, 22, 11, 90];
        partial_sort(&mut values, 3);
        assert_eq!(&values[..3], &[11, 12, 22]);

        let mut short = vec![3, 1];
        partial_sort(&mut short, 10);
        assert_eq!(short, vec![1, 3]);
    }

    #[test]
    fn nth_smallest_value() {
        assert_eq!(nth_smallest(&[64, 34, 25, 12, 22, 11, 90], 2), Some(22));
        assert_eq!(nth_smallest(&[1], 1), None);
    }

    #[test]
    fn set_algebra_on_overlapping_sets() {
        let a = [1, 2, 3, 4, 5];
        let b = [3, 4, 5, 6, 7];
        assert_eq!(set_union(&a, &b), vec![1, 2, 3, 4, 5, 6, 7]);
        assert_eq!(set_intersection(&a, &b), vec![3, 4, 5]);
        assert_eq!(set_difference(&a, &b), vec![1, 2]);
    }

    #[test]
    fn numeric_helpers() {
        assert_eq!(partial_sums(&[1, 2, 3, 4, 5]), vec![1, 3, 6, 10, 15]);
        assert_eq!(adjacent_differences(&[1, 2, 3, 4, 5]), vec![1, 1, 1, 1, 1]);
        assert_eq!(adjacent_differences(&[5, 2, 9]), vec![5, -3, 7]);
        assert!(adjacent_differences(&[]).is_empty());
        assert_eq!(dot_product(&[1, 2, 3], &[4, 5, 6]), 32);
    }

    #[test]
    fn permutations_in_lexicographic_order() {
        assert_eq!(
            permutations(&[1, 2, 3]),
            vec![
                vec![1, 2, 3],
                vec![1, 3, 2],
                vec![2, 1, 3],
                vec![2, 3, 1],
                vec![3, 1, 2],
                vec![3, 2, 1],
            ]
        );
    }

    #[test]
    fn shuffle_is_a_deterministic_permutation() {
        let input = [1, 2, 3, 4, 5];
        let first = shuffled(&input, 7);
        assert_eq!(first, shuffled(&input, 7));

        let mut sorted = first.clone();
        sorted.sort_unstable();
        assert_eq!(sorted, input);
    }

    #[test]
    fn run_output() {
        let mut out = Vec::new();
        run(&mut out).unwrap();
        let text = String::from_utf8(out).unwrap();
        assert!(text.contains("Found 5 at position: 4"));
        assert!(text.contains("Count of even numbers: 5"));
        assert!(text.contains("After replacing 2 with 99: 1 99 3 99 4 99 5"));
        assert!(text.contains("Rotated left by 2: 3 4 5 1 2"));
        assert!(text.contains("Sorted (descending): 90 64 34 25 22 12 11"));
        assert!(text.contains("Nth element (3rd smallest): 22"));
        assert!(text.contains("Equal range for 5: [4, 5)"));
        assert!(text.contains("Popped element: 9"));
        assert!(text.contains("Remaining (sorted): 1 1 2 3 4 5 6 8"));
        assert!(text.contains("Product: 120"));
        assert!(text.contains("    3 2 1"));
    }
}
