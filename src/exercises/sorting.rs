//! Sorting Exercises
//!
//! Heap, merge, quick and insertion sort plus merge-sort inversion counting.

use super::{case, typed, Category, ExerciseRegistry, RegistryResult};
use katas_algo::sorting;
use serde_json::json;

/// Register all sorting exercises
pub fn register_sorting(registry: &mut ExerciseRegistry) -> RegistryResult<()> {
    // The plain sorts share one set of cases
    let sort_cases = || {
        vec![
            case(json!([5, 2, 9, 1, 5, 6]), json!([1, 2, 5, 5, 6, 9])),
            case(json!([]), json!([])),
            case(json!([42]), json!([42])),
            case(json!([3, -1, -7, 0, 2]), json!([-7, -1, 0, 2, 3])),
            case(json!([9, 8, 7, 6, 5, 4, 3, 2, 1]), json!([1, 2, 3, 4, 5, 6, 7, 8, 9])),
        ]
    };

    registry.register(
        "heap_sort",
        "Sort integers in place with a binary max-heap.",
        Category::Sorting,
        sort_cases(),
        typed(|mut v: Vec<i64>| {
            sorting::heap_sort(&mut v);
            v
        }),
    )?;

    registry.register(
        "merge_sort",
        "Stable top-down merge sort.",
        Category::Sorting,
        sort_cases(),
        typed(|v: Vec<i64>| sorting::merge_sort(&v)),
    )?;

    registry.register(
        "quick_sort",
        "Quick sort with a median-of-three pivot.",
        Category::Sorting,
        sort_cases(),
        typed(|mut v: Vec<i64>| {
            sorting::quick_sort(&mut v);
            v
        }),
    )?;

    registry.register(
        "insertion_sort_words",
        "Insertion sort over words, byte-wise lexicographic order.",
        Category::Sorting,
        vec![
            case(json!(["pear", "apple", "fig"]), json!(["apple", "fig", "pear"])),
            case(json!([]), json!([])),
            case(json!(["b", "B", "a"]), json!(["B", "a", "b"])),
            case(json!(["same", "same"]), json!(["same", "same"])),
            case(json!(["delta", "alpha", "charlie", "bravo"]), json!(["alpha", "bravo", "charlie", "delta"])),
        ],
        typed(|mut v: Vec<String>| {
            sorting::insertion_sort(&mut v);
            v
        }),
    )?;

    registry.register(
        "count_inversions",
        "Count pairs i < j with a[i] > a[j] using merge sort.",
        Category::Sorting,
        vec![
            case(json!([2, 4, 1, 3, 5]), json!(3)),
            case(json!([5, 4, 3, 2, 1]), json!(10)),
            case(json!([1, 2, 3, 4]), json!(0)),
            case(json!([]), json!(0)),
            case(json!([1, 20, 6, 4, 5]), json!(5)),
        ],
        typed(|v: Vec<i64>| sorting::count_inversions(&v)),
    )?;

    registry.register(
        "sort_colors",
        "Dutch national flag: order 0s, 1s and 2s in one pass.",
        Category::Sorting,
        vec![
            case(json!([2, 0, 2, 1, 1, 0]), json!([0, 0, 1, 1, 2, 2])),
            case(json!([2, 0, 1]), json!([0, 1, 2])),
            case(json!([0]), json!([0])),
            case(json!([2, 2]), json!([2, 2])),
            case(json!([]), json!([])),
        ],
        typed(|mut v: Vec<u8>| {
            sorting::sort_colors(&mut v);
            v
        }),
    )?;

    Ok(())
}
