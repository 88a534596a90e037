//! Sorting algorithms
//!
//! In-place sorts take `&mut [T]`; `merge_sort` returns a new vector because
//! it needs scratch space anyway.

/// Sort a slice in place with heap sort.
///
/// Builds a max-heap bottom-up, then repeatedly swaps the root to the end.
///
/// # Test Cases
/// - heap_sort([5, 2, 9, 1, 5, 6]) = [1, 2, 5, 5, 6, 9]
/// - heap_sort([]) = []
/// - heap_sort([3, -1, -7]) = [-7, -1, 3]
pub fn heap_sort<T: Ord>(arr: &mut [T]) {
    let len = arr.len();
    for i in (0..len / 2).rev() {
        sift_down(arr, len, i);
    }
    for end in (1..len).rev() {
        arr.swap(0, end);
        sift_down(arr, end, 0);
    }
}

fn sift_down<T: Ord>(arr: &mut [T], n: usize, mut root: usize) {
    loop {
        let left = 2 * root + 1;
        let right = left + 1;
        let mut largest = root;

        if left < n && arr[left] > arr[largest] {
            largest = left;
        }
        if right < n && arr[right] > arr[largest] {
            largest = right;
        }
        if largest == root {
            return;
        }
        arr.swap(root, largest);
        root = largest;
    }
}

/// Stable merge sort.
///
/// # Test Cases
/// - merge_sort([38, 27, 43, 3, 9, 82, 10]) = [3, 9, 10, 27, 38, 43, 82]
/// - merge_sort([1]) = [1]
pub fn merge_sort<T: Ord + Clone>(arr: &[T]) -> Vec<T> {
    if arr.len() <= 1 {
        return arr.to_vec();
    }
    let mid = arr.len() / 2;
    let left = merge_sort(&arr[..mid]);
    let right = merge_sort(&arr[mid..]);

    let mut merged = Vec::with_capacity(arr.len());
    let (mut i, mut j) = (0, 0);
    while i < left.len() && j < right.len() {
        // `<=` keeps equal elements in their original order
        if left[i] <= right[j] {
            merged.push(left[i].clone());
            i += 1;
        } else {
            merged.push(right[j].clone());
            j += 1;
        }
    }
    merged.extend_from_slice(&left[i..]);
    merged.extend_from_slice(&right[j..]);
    merged
}

/// Quick sort with a median-of-three pivot and Lomuto partitioning.
pub fn quick_sort<T: Ord>(arr: &mut [T]) {
    if arr.len() <= 1 {
        return;
    }
    let pivot = partition(arr);
    let (left, right) = arr.split_at_mut(pivot);
    quick_sort(left);
    quick_sort(&mut right[1..]);
}

fn partition<T: Ord>(arr: &mut [T]) -> usize {
    let last = arr.len() - 1;
    let mid = last / 2;

    // Order first/mid/last so the median lands at `mid`
    if arr[mid] < arr[0] {
        arr.swap(mid, 0);
    }
    if arr[last] < arr[0] {
        arr.swap(last, 0);
    }
    if arr[last] < arr[mid] {
        arr.swap(last, mid);
    }
    arr.swap(mid, last);

    let mut store = 0;
    for i in 0..last {
        if arr[i] < arr[last] {
            arr.swap(i, store);
            store += 1;
        }
    }
    arr.swap(store, last);
    store
}

/// Insertion sort. Quadratic, but fast on nearly sorted input.
pub fn insertion_sort<T: Ord>(arr: &mut [T]) {
    for i in 1..arr.len() {
        let mut j = i;
        while j > 0 && arr[j - 1] > arr[j] {
            arr.swap(j - 1, j);
            j -= 1;
        }
    }
}

/// Count pairs `i < j` with `arr[i] > arr[j]` using merge sort.
///
/// # Test Cases
/// - count_inversions([2, 4, 1, 3, 5]) = 3
/// - count_inversions([5, 4, 3, 2, 1]) = 10
/// - count_inversions([1, 2, 3]) = 0
pub fn count_inversions<T: Ord + Clone>(arr: &[T]) -> u64 {
    let mut work = arr.to_vec();
    let mut scratch = arr.to_vec();
    count_split(&mut work, &mut scratch)
}

fn count_split<T: Ord + Clone>(arr: &mut [T], scratch: &mut [T]) -> u64 {
    let n = arr.len();
    if n <= 1 {
        return 0;
    }
    let mid = n / 2;
    let mut count = {
        let (left, right) = arr.split_at_mut(mid);
        let (s_left, s_right) = scratch.split_at_mut(mid);
        count_split(left, s_left) + count_split(right, s_right)
    };

    let (mut i, mut j, mut k) = (0, mid, 0);
    while i < mid && j < n {
        if arr[i] <= arr[j] {
            scratch[k] = arr[i].clone();
            i += 1;
        } else {
            // every remaining element on the left is greater than arr[j]
            count += (mid - i) as u64;
            scratch[k] = arr[j].clone();
            j += 1;
        }
        k += 1;
    }
    while i < mid {
        scratch[k] = arr[i].clone();
        i += 1;
        k += 1;
    }
    while j < n {
        scratch[k] = arr[j].clone();
        j += 1;
        k += 1;
    }
    arr.clone_from_slice(&scratch[..n]);
    count
}

/// Dutch national flag partition of values 0, 1 and 2.
///
/// Values greater than 2 are treated as 2.
pub fn sort_colors(colors: &mut [u8]) {
    if colors.is_empty() {
        return;
    }
    let (mut low, mut mid, mut high) = (0usize, 0usize, colors.len() - 1);
    while mid <= high {
        match colors[mid] {
            0 => {
                colors.swap(low, mid);
                low += 1;
                mid += 1;
            }
            1 => mid += 1,
            _ => {
                colors.swap(mid, high);
                if high == 0 {
                    break;
                }
                high -= 1;
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_heap_sort() {
        let mut v = vec![5, 2, 9, 1, 5, 6];
        heap_sort(&mut v);
        assert_eq!(v, vec![1, 2, 5, 5, 6, 9]);

        let mut empty: Vec<i32> = vec![];
        heap_sort(&mut empty);
        assert!(empty.is_empty());
    }

    #[test]
    fn test_merge_sort() {
        assert_eq!(
            merge_sort(&[38, 27, 43, 3, 9, 82, 10]),
            vec![3, 9, 10, 27, 38, 43, 82]
        );
        assert_eq!(merge_sort(&[1]), vec![1]);
        assert_eq!(merge_sort::<u8>(&[]), Vec::<u8>::new());
    }

    #[test]
    fn test_quick_sort() {
        let mut v = vec![10, 7, 8, 9, 1, 5, 5, -3];
        quick_sort(&mut v);
        assert_eq!(v, vec![-3, 1, 5, 5, 7, 8, 9, 10]);

        let mut sorted: Vec<u32> = (0..50).collect();
        quick_sort(&mut sorted);
        assert_eq!(sorted, (0..50).collect::<Vec<_>>());
    }

    #[test]
    fn test_insertion_sort() {
        let mut v = vec!["pear", "apple", "fig"];
        insertion_sort(&mut v);
        assert_eq!(v, vec!["apple", "fig", "pear"]);
    }

    #[test]
    fn test_count_inversions() {
        assert_eq!(count_inversions(&[2, 4, 1, 3, 5]), 3);
        assert_eq!(count_inversions(&[5, 4, 3, 2, 1]), 10);
        assert_eq!(count_inversions(&[1, 2, 3]), 0);
        assert_eq!(count_inversions::<i32>(&[]), 0);
        assert_eq!(count_inversions(&[1, 1, 1]), 0);
    }

    #[test]
    fn test_sort_colors() {
        let mut c = vec![2, 0, 2, 1, 1, 0];
        sort_colors(&mut c);
        assert_eq!(c, vec![0, 0, 1, 1, 2, 2]);

        let mut only_twos = vec![2, 2];
        sort_colors(&mut only_twos);
        assert_eq!(only_twos, vec![2, 2]);
    }
}
