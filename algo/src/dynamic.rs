//! Dynamic programming and interval problems

use std::collections::BinaryHeap;

/// Length of the longest common subsequence (by `char`).
///
/// # Test Cases
/// - lcs_length("abcde", "ace") = 3
/// - lcs_length("abc", "def") = 0
pub fn lcs_length(a: &str, b: &str) -> usize {
    let a: Vec<char> = a.chars().collect();
    let b: Vec<char> = b.chars().collect();
    let mut prev = vec![0usize; b.len() + 1];
    let mut curr = vec![0usize; b.len() + 1];

    for i in 1..=a.len() {
        for j in 1..=b.len() {
            curr[j] = if a[i - 1] == b[j - 1] {
                prev[j - 1] + 1
            } else {
                prev[j].max(curr[j - 1])
            };
        }
        std::mem::swap(&mut prev, &mut curr);
    }
    prev[b.len()]
}

/// Levenshtein distance with unit insert, delete and substitute costs.
///
/// # Test Cases
/// - edit_distance("kitten", "sitting") = 3
/// - edit_distance("", "abc") = 3
pub fn edit_distance(a: &str, b: &str) -> usize {
    let a: Vec<char> = a.chars().collect();
    let b: Vec<char> = b.chars().collect();
    let mut prev: Vec<usize> = (0..=b.len()).collect();
    let mut curr = vec![0usize; b.len() + 1];

    for i in 1..=a.len() {
        curr[0] = i;
        for j in 1..=b.len() {
            let substitute = prev[j - 1] + usize::from(a[i - 1] != b[j - 1]);
            curr[j] = substitute.min(prev[j] + 1).min(curr[j - 1] + 1);
        }
        std::mem::swap(&mut prev, &mut curr);
    }
    prev[b.len()]
}

/// Fewest coins summing to `amount`; `None` if it cannot be made.
pub fn coin_change(coins: &[u32], amount: u32) -> Option<u32> {
    let amount = amount as usize;
    let mut best: Vec<Option<u32>> = vec![None; amount + 1];
    best[0] = Some(0);

    for total in 1..=amount {
        for &coin in coins {
            let coin = coin as usize;
            if coin == 0 || coin > total {
                continue;
            }
            if let Some(prev) = best[total - coin] {
                let candidate = prev + 1;
                if best[total].map_or(true, |b| candidate < b) {
                    best[total] = Some(candidate);
                }
            }
        }
    }
    best[amount]
}

/// Length of the longest strictly increasing subsequence (patience sorting).
pub fn longest_increasing_subsequence(nums: &[i64]) -> usize {
    let mut tails: Vec<i64> = Vec::new();
    for &n in nums {
        let pos = tails.partition_point(|&t| t < n);
        if pos == tails.len() {
            tails.push(n);
        } else {
            tails[pos] = n;
        }
    }
    tails.len()
}

/// 0/1 knapsack: best total value within `capacity`.
///
/// Items beyond the shorter of `weights`/`values` are ignored. Totals
/// saturate at `u64::MAX`.
pub fn knapsack_01(weights: &[usize], values: &[u64], capacity: usize) -> u64 {
    let mut best = vec![0u64; capacity + 1];
    for (&w, &v) in weights.iter().zip(values) {
        if w > capacity {
            continue;
        }
        for c in (w..=capacity).rev() {
            best[c] = best[c].max(best[c - w].saturating_add(v));
        }
    }
    best[capacity]
}

/// Kadane's maximum subarray sum; `None` for an empty slice.
///
/// Running sums saturate at the `i64` bounds instead of wrapping.
pub fn max_subarray(nums: &[i64]) -> Option<i64> {
    let (&first, rest) = nums.split_first()?;
    let mut current = first;
    let mut best = first;
    for &n in rest {
        current = n.max(current.saturating_add(n));
        best = best.max(current);
    }
    Some(best)
}

/// Ways to climb `n` stairs taking 1 or 2 steps; `None` on overflow.
pub fn climb_stairs(n: u32) -> Option<u64> {
    let (mut a, mut b) = (1u64, 1u64);
    for _ in 1..n {
        let next = a.checked_add(b)?;
        a = b;
        b = next;
    }
    Some(b)
}

// ============================================================================
// Intervals
// ============================================================================

/// Merge overlapping (or touching) closed intervals. Output is sorted by start.
///
/// Intervals with `start > end` are normalised first.
pub fn merge_intervals(mut intervals: Vec<(i64, i64)>) -> Vec<(i64, i64)> {
    for iv in intervals.iter_mut() {
        if iv.0 > iv.1 {
            *iv = (iv.1, iv.0);
        }
    }
    intervals.sort_unstable();

    let mut merged: Vec<(i64, i64)> = Vec::with_capacity(intervals.len());
    for (start, end) in intervals {
        match merged.last_mut() {
            Some(last) if start <= last.1 => last.1 = last.1.max(end),
            _ => merged.push((start, end)),
        }
    }
    merged
}

/// Skyline key points for `(left, right, height)` buildings.
///
/// Divide and conquer: split the buildings, solve both halves, then merge the
/// two skylines like the merge step of merge sort. Each key point is
/// `(x, height)` where the outline changes height; the last point drops to 0.
///
/// # Test Cases
/// - skyline([(2,9,10),(3,7,15),(5,12,12),(15,20,10),(19,24,8)])
///   = [(2,10),(3,15),(7,12),(12,0),(15,10),(20,8),(24,0)]
pub fn skyline(buildings: &[(i64, i64, i64)]) -> Vec<(i64, i64)> {
    match buildings {
        [] => Vec::new(),
        [(left, right, height)] => {
            if left >= right || *height <= 0 {
                Vec::new()
            } else {
                vec![(*left, *height), (*right, 0)]
            }
        }
        _ => {
            let mid = buildings.len() / 2;
            merge_skylines(&skyline(&buildings[..mid]), &skyline(&buildings[mid..]))
        }
    }
}

fn merge_skylines(a: &[(i64, i64)], b: &[(i64, i64)]) -> Vec<(i64, i64)> {
    let mut out: Vec<(i64, i64)> = Vec::with_capacity(a.len() + b.len());
    let (mut i, mut j) = (0, 0);
    let (mut ha, mut hb) = (0i64, 0i64);

    while i < a.len() || j < b.len() {
        let x = match (a.get(i), b.get(j)) {
            (Some(pa), Some(pb)) => pa.0.min(pb.0),
            (Some(pa), None) => pa.0,
            (None, Some(pb)) => pb.0,
            (None, None) => break,
        };
        if a.get(i).is_some_and(|p| p.0 == x) {
            ha = a[i].1;
            i += 1;
        }
        if b.get(j).is_some_and(|p| p.0 == x) {
            hb = b[j].1;
            j += 1;
        }
        push_key_point(&mut out, x, ha.max(hb));
    }
    out
}

fn push_key_point(out: &mut Vec<(i64, i64)>, x: i64, height: i64) {
    if out.last().is_some_and(|&(_, h)| h == height) {
        return;
    }
    match out.last_mut() {
        Some(last) if last.0 == x => {
            last.1 = height;
            // collapsing may make it equal to the point before
            if out.len() >= 2 && out[out.len() - 2].1 == height {
                out.pop();
            }
        }
        _ => out.push((x, height)),
    }
}

/// Skyline via a sweep line with a max-heap of active heights.
///
/// Produces the same key points as [`skyline`]; kept as the heap-based
/// alternative.
pub fn skyline_sweep(buildings: &[(i64, i64, i64)]) -> Vec<(i64, i64)> {
    let mut xs: Vec<i64> = buildings
        .iter()
        .filter(|b| b.0 < b.1 && b.2 > 0)
        .flat_map(|b| [b.0, b.1])
        .collect();
    xs.sort_unstable();
    xs.dedup();

    let mut sorted: Vec<&(i64, i64, i64)> = buildings
        .iter()
        .filter(|b| b.0 < b.1 && b.2 > 0)
        .collect();
    sorted.sort_by_key(|b| b.0);

    // (height, right edge)
    let mut active: BinaryHeap<(i64, i64)> = BinaryHeap::new();
    let mut out: Vec<(i64, i64)> = Vec::new();
    let mut next = 0;

    for x in xs {
        while next < sorted.len() && sorted[next].0 <= x {
            active.push((sorted[next].2, sorted[next].1));
            next += 1;
        }
        while active.peek().is_some_and(|&(_, right)| right <= x) {
            active.pop();
        }
        let height = active.peek().map_or(0, |&(h, _)| h);
        if out.last().map_or(true, |&(_, h)| h != height) {
            out.push((x, height));
        }
    }
    out
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_lcs_and_edit_distance() {
        assert_eq!(lcs_length("abcde", "ace"), 3);
        assert_eq!(lcs_length("abc", "def"), 0);
        assert_eq!(lcs_length("", "abc"), 0);
        assert_eq!(edit_distance("kitten", "sitting"), 3);
        assert_eq!(edit_distance("", "abc"), 3);
        assert_eq!(edit_distance("same", "same"), 0);
    }

    #[test]
    fn test_coin_change() {
        assert_eq!(coin_change(&[1, 2, 5], 11), Some(3));
        assert_eq!(coin_change(&[2], 3), None);
        assert_eq!(coin_change(&[1], 0), Some(0));
        assert_eq!(coin_change(&[0, 3], 6), Some(2));
    }

    #[test]
    fn test_lis_knapsack_kadane() {
        assert_eq!(longest_increasing_subsequence(&[10, 9, 2, 5, 3, 7, 101, 18]), 4);
        assert_eq!(longest_increasing_subsequence(&[7, 7, 7]), 1);
        assert_eq!(knapsack_01(&[1, 3, 4, 5], &[1, 4, 5, 7], 7), 9);
        assert_eq!(knapsack_01(&[10], &[5], 3), 0);
        assert_eq!(max_subarray(&[-2, 1, -3, 4, -1, 2, 1, -5, 4]), Some(6));
        assert_eq!(max_subarray(&[-3, -1, -2]), Some(-1));
        assert_eq!(max_subarray(&[]), None);
    }

    #[test]
    fn test_sums_saturate_instead_of_overflowing() {
        assert_eq!(max_subarray(&[i64::MAX, 1]), Some(i64::MAX));
        assert_eq!(max_subarray(&[i64::MIN, i64::MIN, 5]), Some(5));
        assert_eq!(knapsack_01(&[1, 1], &[u64::MAX, 1], 2), u64::MAX);
    }

    #[test]
    fn test_climb_stairs() {
        assert_eq!(climb_stairs(0), Some(1));
        assert_eq!(climb_stairs(2), Some(2));
        assert_eq!(climb_stairs(5), Some(8));
    }

    #[test]
    fn test_merge_intervals() {
        assert_eq!(
            merge_intervals(vec![(1, 3), (2, 6), (8, 10), (15, 18)]),
            vec![(1, 6), (8, 10), (15, 18)]
        );
        assert_eq!(merge_intervals(vec![(1, 4), (4, 5)]), vec![(1, 5)]);
        assert_eq!(merge_intervals(vec![(5, 1)]), vec![(1, 5)]);
        assert!(merge_intervals(vec![]).is_empty());
    }

    #[test]
    fn test_skyline() {
        let buildings = [(2, 9, 10), (3, 7, 15), (5, 12, 12), (15, 20, 10), (19, 24, 8)];
        let expected = vec![
            (2, 10),
            (3, 15),
            (7, 12),
            (12, 0),
            (15, 10),
            (20, 8),
            (24, 0),
        ];
        assert_eq!(skyline(&buildings), expected);
        assert_eq!(skyline_sweep(&buildings), expected);
    }

    #[test]
    fn test_skyline_edge_cases() {
        assert!(skyline(&[]).is_empty());
        assert_eq!(skyline(&[(0, 2, 3), (2, 5, 3)]), vec![(0, 3), (5, 0)]);
        assert_eq!(skyline_sweep(&[(0, 2, 3), (2, 5, 3)]), vec![(0, 3), (5, 0)]);
        assert_eq!(skyline(&[(1, 5, 4), (1, 5, 2)]), vec![(1, 4), (5, 0)]);
    }
}
