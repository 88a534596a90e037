//! Dynamic programming and interval exercises

use super::{case, typed, Category, ExerciseRegistry, RegistryResult};
use katas_algo::dynamic;
use serde_json::json;

pub fn register_dynamic(registry: &mut ExerciseRegistry) -> RegistryResult<()> {
    registry.register(
        "longest_common_subsequence",
        "Length of the longest common subsequence.",
        Category::Dynamic,
        vec![
            case(json!(["abcde", "ace"]), json!(3)),
            case(json!(["abc", "abc"]), json!(3)),
            case(json!(["abc", "def"]), json!(0)),
            case(json!(["", "abc"]), json!(0)),
            case(json!(["AGGTAB", "GXTXAYB"]), json!(4)),
        ],
        typed(|(a, b): (String, String)| dynamic::lcs_length(&a, &b)),
    )?;

    registry.register(
        "edit_distance",
        "Levenshtein distance.",
        Category::Dynamic,
        vec![
            case(json!(["kitten", "sitting"]), json!(3)),
            case(json!(["horse", "ros"]), json!(3)),
            case(json!(["", "abc"]), json!(3)),
            case(json!(["same", "same"]), json!(0)),
            case(json!(["intention", "execution"]), json!(5)),
        ],
        typed(|(a, b): (String, String)| dynamic::edit_distance(&a, &b)),
    )?;

    registry.register(
        "coin_change",
        "Fewest coins for an amount, null if impossible.",
        Category::Dynamic,
        vec![
            case(json!([[1, 2, 5], 11]), json!(3)),
            case(json!([[2], 3]), json!(null)),
            case(json!([[1], 0]), json!(0)),
            case(json!([[186, 419, 83, 408], 6249]), json!(20)),
            case(json!([[], 7]), json!(null)),
        ],
        typed(|(coins, amount): (Vec<u32>, u32)| dynamic::coin_change(&coins, amount)),
    )?;

    registry.register(
        "longest_increasing_subsequence",
        "Length of the longest strictly increasing subsequence.",
        Category::Dynamic,
        vec![
            case(json!([10, 9, 2, 5, 3, 7, 101, 18]), json!(4)),
            case(json!([0, 1, 0, 3, 2, 3]), json!(4)),
            case(json!([7, 7, 7, 7]), json!(1)),
            case(json!([]), json!(0)),
            case(json!([1, 2, 3, 4, 5]), json!(5)),
        ],
        typed(|nums: Vec<i64>| dynamic::longest_increasing_subsequence(&nums)),
    )?;

    registry.register(
        "knapsack_01",
        "Best value of a 0/1 knapsack: [weights, values, capacity].",
        Category::Dynamic,
        vec![
            case(json!([[1, 3, 4, 5], [1, 4, 5, 7], 7]), json!(9)),
            case(json!([[10, 20, 30], [60, 100, 120], 50]), json!(220)),
            case(json!([[10], [5], 3]), json!(0)),
            case(json!([[], [], 10]), json!(0)),
            case(json!([[1, 1, 1], [10, 20, 30], 2]), json!(50)),
        ],
        typed(|(w, v, cap): (Vec<usize>, Vec<u64>, usize)| dynamic::knapsack_01(&w, &v, cap)),
    )?;

    registry.register(
        "max_subarray",
        "Kadane's maximum subarray sum, null when empty.",
        Category::Dynamic,
        vec![
            case(json!([-2, 1, -3, 4, -1, 2, 1, -5, 4]), json!(6)),
            case(json!([1]), json!(1)),
            case(json!([5, 4, -1, 7, 8]), json!(23)),
            case(json!([-3, -1, -2]), json!(-1)),
            case(json!([]), json!(null)),
        ],
        typed(|nums: Vec<i64>| dynamic::max_subarray(&nums)),
    )?;

    registry.register(
        "climbing_stairs",
        "Ways to climb n stairs with steps of 1 or 2.",
        Category::Dynamic,
        vec![
            case(json!(0), json!(1)),
            case(json!(1), json!(1)),
            case(json!(2), json!(2)),
            case(json!(5), json!(8)),
            case(json!(45), json!(1_836_311_903u64)),
        ],
        typed(dynamic::climb_stairs),
    )?;

    registry.register(
        "merge_intervals",
        "Merge overlapping closed intervals.",
        Category::Dynamic,
        vec![
            case(json!([[1, 3], [2, 6], [8, 10], [15, 18]]), json!([[1, 6], [8, 10], [15, 18]])),
            case(json!([[1, 4], [4, 5]]), json!([[1, 5]])),
            case(json!([[1, 4], [0, 4]]), json!([[0, 4]])),
            case(json!([]), json!([])),
            case(json!([[1, 10], [2, 3], [4, 5]]), json!([[1, 10]])),
        ],
        typed(dynamic::merge_intervals),
    )?;

    registry.register(
        "skyline",
        "Skyline key points of [left, right, height] buildings, divide and conquer.",
        Category::Dynamic,
        vec![
            case(
                json!([[2, 9, 10], [3, 7, 15], [5, 12, 12], [15, 20, 10], [19, 24, 8]]),
                json!([[2, 10], [3, 15], [7, 12], [12, 0], [15, 10], [20, 8], [24, 0]]),
            ),
            case(json!([[0, 2, 3], [2, 5, 3]]), json!([[0, 3], [5, 0]])),
            case(json!([]), json!([])),
            case(json!([[1, 5, 4], [1, 5, 2]]), json!([[1, 4], [5, 0]])),
            case(json!([[1, 3, 2], [5, 7, 2]]), json!([[1, 2], [3, 0], [5, 2], [7, 0]])),
        ],
        typed(|b: Vec<(i64, i64, i64)>| dynamic::skyline(&b)),
    )?;

    Ok(())
}
