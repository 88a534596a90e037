//! Searching and order statistics
//!
//! The order-statistic routines keep a bounded heap of size `k`, so they run
//! in O(n log k) without sorting the whole input.

use std::cmp::Reverse;
use std::collections::{BinaryHeap, HashMap};

/// Binary search in a sorted slice.
///
/// Returns the index of *some* element equal to `target`.
///
/// # Test Cases
/// - binary_search([1, 3, 5, 7, 9], 7) = Some(3)
/// - binary_search([1, 3, 5, 7, 9], 4) = None
/// - binary_search([], 1) = None
pub fn binary_search<T: Ord>(arr: &[T], target: &T) -> Option<usize> {
    let (mut lo, mut hi) = (0usize, arr.len());
    while lo < hi {
        let mid = lo + (hi - lo) / 2;
        match arr[mid].cmp(target) {
            std::cmp::Ordering::Equal => return Some(mid),
            std::cmp::Ordering::Less => lo = mid + 1,
            std::cmp::Ordering::Greater => hi = mid,
        }
    }
    None
}

/// First index whose element is not less than `target`.
pub fn lower_bound<T: Ord>(arr: &[T], target: &T) -> usize {
    let (mut lo, mut hi) = (0usize, arr.len());
    while lo < hi {
        let mid = lo + (hi - lo) / 2;
        if arr[mid] < *target {
            lo = mid + 1;
        } else {
            hi = mid;
        }
    }
    lo
}

/// The k-th smallest element (1-based).
///
/// Keeps a max-heap of the k smallest values seen so far.
/// Returns `None` when `k` is 0 or larger than the input.
///
/// # Test Cases
/// - kth_smallest([7, 10, 4, 3, 20, 15], 3) = Some(7)
/// - kth_smallest([1], 1) = Some(1)
/// - kth_smallest([1, 2], 0) = None
pub fn kth_smallest<T: Ord + Clone>(arr: &[T], k: usize) -> Option<T> {
    if k == 0 || k > arr.len() {
        return None;
    }
    let mut heap: BinaryHeap<T> = BinaryHeap::with_capacity(k + 1);
    for item in arr {
        heap.push(item.clone());
        if heap.len() > k {
            heap.pop();
        }
    }
    heap.peek().cloned()
}

/// The k-th largest element (1-based), using a min-heap of size k.
pub fn kth_largest<T: Ord + Clone>(arr: &[T], k: usize) -> Option<T> {
    if k == 0 || k > arr.len() {
        return None;
    }
    let mut heap: BinaryHeap<Reverse<T>> = BinaryHeap::with_capacity(k + 1);
    for item in arr {
        heap.push(Reverse(item.clone()));
        if heap.len() > k {
            heap.pop();
        }
    }
    heap.peek().map(|Reverse(v)| v.clone())
}

/// The `k` most frequent values.
///
/// Ordered by frequency descending, ties broken by value ascending.
pub fn top_k_frequent(nums: &[i64], k: usize) -> Vec<i64> {
    let mut counts: HashMap<i64, usize> = HashMap::new();
    for &n in nums {
        *counts.entry(n).or_insert(0) += 1;
    }

    // Min-heap on (count, Reverse(value)) so the weakest candidate sits on top
    let mut heap: BinaryHeap<Reverse<(usize, Reverse<i64>)>> = BinaryHeap::new();
    for (value, count) in counts {
        heap.push(Reverse((count, Reverse(value))));
        if heap.len() > k {
            heap.pop();
        }
    }

    let mut result: Vec<(usize, i64)> = heap
        .into_iter()
        .map(|Reverse((count, Reverse(value)))| (count, value))
        .collect();
    result.sort_by(|a, b| b.0.cmp(&a.0).then(a.1.cmp(&b.1)));
    result.into_iter().map(|(_, value)| value).collect()
}

/// Streaming median over a sequence of integers.
///
/// `low` is a max-heap holding the smaller half, `high` a min-heap holding the
/// larger half. `low` is never smaller than `high` and at most one larger.
#[derive(Debug, Default, Clone)]
pub struct RunningMedian {
    low: BinaryHeap<i64>,
    high: BinaryHeap<Reverse<i64>>,
}

impl RunningMedian {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn push(&mut self, value: i64) {
        match self.low.peek() {
            Some(&top) if value > top => self.high.push(Reverse(value)),
            _ => self.low.push(value),
        }

        if self.low.len() > self.high.len() + 1 {
            if let Some(v) = self.low.pop() {
                self.high.push(Reverse(v));
            }
        } else if self.high.len() > self.low.len() {
            if let Some(Reverse(v)) = self.high.pop() {
                self.low.push(v);
            }
        }
    }

    pub fn len(&self) -> usize {
        self.low.len() + self.high.len()
    }

    pub fn is_empty(&self) -> bool {
        self.low.is_empty()
    }

    pub fn median(&self) -> Option<f64> {
        let lo = *self.low.peek()?;
        if self.low.len() > self.high.len() {
            Some(lo as f64)
        } else {
            let Reverse(hi) = *self.high.peek()?;
            Some((lo as f64 + hi as f64) / 2.0)
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_binary_search() {
        let v = [1, 3, 5, 7, 9];
        assert_eq!(binary_search(&v, &7), Some(3));
        assert_eq!(binary_search(&v, &1), Some(0));
        assert_eq!(binary_search(&v, &4), None);
        assert_eq!(binary_search::<i32>(&[], &1), None);
    }

    #[test]
    fn test_lower_bound() {
        let v = [1, 2, 2, 2, 5];
        assert_eq!(lower_bound(&v, &2), 1);
        assert_eq!(lower_bound(&v, &3), 4);
        assert_eq!(lower_bound(&v, &9), 5);
        assert_eq!(lower_bound(&v, &0), 0);
    }

    #[test]
    fn test_kth_smallest_and_largest() {
        let v = [7, 10, 4, 3, 20, 15];
        assert_eq!(kth_smallest(&v, 3), Some(7));
        assert_eq!(kth_smallest(&v, 1), Some(3));
        assert_eq!(kth_smallest(&v, 7), None);
        assert_eq!(kth_largest(&v, 1), Some(20));
        assert_eq!(kth_largest(&v, 2), Some(15));
        assert_eq!(kth_largest(&v, 0), None);
    }

    #[test]
    fn test_top_k_frequent() {
        assert_eq!(top_k_frequent(&[1, 1, 1, 2, 2, 3], 2), vec![1, 2]);
        assert_eq!(top_k_frequent(&[4, 5, 6], 2), vec![4, 5]);
        assert!(top_k_frequent(&[], 3).is_empty());
    }

    #[test]
    fn test_running_median() {
        let mut rm = RunningMedian::new();
        assert_eq!(rm.median(), None);
        rm.push(5);
        assert_eq!(rm.median(), Some(5.0));
        rm.push(15);
        assert_eq!(rm.median(), Some(10.0));
        rm.push(1);
        assert_eq!(rm.median(), Some(5.0));
        rm.push(3);
        assert_eq!(rm.median(), Some(4.0));
        assert_eq!(rm.len(), 4);
    }
}
