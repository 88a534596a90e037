//! Searching and order-statistic exercises

use super::{case, typed, Category, ExerciseRegistry, RegistryResult};
use katas_algo::searching::{self, RunningMedian};
use serde_json::json;

pub fn register_searching(registry: &mut ExerciseRegistry) -> RegistryResult<()> {
    registry.register(
        "binary_search",
        "Index of the target in a sorted array, or null.",
        Category::Searching,
        vec![
            case(json!([[1, 3, 5, 7, 9], 7]), json!(3)),
            case(json!([[1, 3, 5, 7, 9], 1]), json!(0)),
            case(json!([[1, 3, 5, 7, 9], 4]), json!(null)),
            case(json!([[], 1]), json!(null)),
            case(json!([[-10, -5, 0, 5], -10]), json!(0)),
        ],
        typed(|(arr, target): (Vec<i64>, i64)| searching::binary_search(&arr, &target)),
    )?;

    registry.register(
        "search_insert_position",
        "Where the target would be inserted to keep the array sorted.",
        Category::Searching,
        vec![
            case(json!([[1, 3, 5, 6], 5]), json!(2)),
            case(json!([[1, 3, 5, 6], 2]), json!(1)),
            case(json!([[1, 3, 5, 6], 7]), json!(4)),
            case(json!([[1, 3, 5, 6], 0]), json!(0)),
            case(json!([[], 3]), json!(0)),
        ],
        typed(|(arr, target): (Vec<i64>, i64)| searching::lower_bound(&arr, &target)),
    )?;

    registry.register(
        "kth_smallest",
        "k-th smallest element (1-based) using a bounded max-heap.",
        Category::Searching,
        vec![
            case(json!([[7, 10, 4, 3, 20, 15], 3]), json!(7)),
            case(json!([[7, 10, 4, 3, 20, 15], 4]), json!(10)),
            case(json!([[1], 1]), json!(1)),
            case(json!([[1, 2], 0]), json!(null)),
            case(json!([[5, 5, 5], 2]), json!(5)),
        ],
        typed(|(arr, k): (Vec<i64>, usize)| searching::kth_smallest(&arr, k)),
    )?;

    registry.register(
        "kth_largest",
        "k-th largest element (1-based) using a bounded min-heap.",
        Category::Searching,
        vec![
            case(json!([[3, 2, 1, 5, 6, 4], 2]), json!(5)),
            case(json!([[3, 2, 3, 1, 2, 4, 5, 5, 6], 4]), json!(4)),
            case(json!([[1], 1]), json!(1)),
            case(json!([[1, 2], 3]), json!(null)),
            case(json!([[-1, -2, -3], 1]), json!(-1)),
        ],
        typed(|(arr, k): (Vec<i64>, usize)| searching::kth_largest(&arr, k)),
    )?;

    registry.register(
        "top_k_frequent",
        "The k most frequent values, most frequent first, ties by value.",
        Category::Searching,
        vec![
            case(json!([[1, 1, 1, 2, 2, 3], 2]), json!([1, 2])),
            case(json!([[1], 1]), json!([1])),
            case(json!([[4, 5, 6], 2]), json!([4, 5])),
            case(json!([[3, 3, 2, 2, 1], 3]), json!([2, 3, 1])),
            case(json!([[], 2]), json!([])),
        ],
        typed(|(nums, k): (Vec<i64>, usize)| searching::top_k_frequent(&nums, k)),
    )?;

    registry.register(
        "running_median",
        "Median after each value of a stream, using two heaps.",
        Category::Searching,
        vec![
            case(json!([5, 15, 1, 3]), json!([5.0, 10.0, 5.0, 4.0])),
            case(json!([1]), json!([1.0])),
            case(json!([]), json!([])),
            case(json!([2, 2, 2]), json!([2.0, 2.0, 2.0])),
            case(json!([-1, -2]), json!([-1.0, -1.5])),
        ],
        typed(|stream: Vec<i64>| {
            let mut rm = RunningMedian::new();
            stream
                .into_iter()
                .filter_map(|v| {
                    rm.push(v);
                    rm.median()
                })
                .collect::<Vec<f64>>()
        }),
    )?;

    Ok(())
}
