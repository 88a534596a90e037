//! Concurrency puzzle exercises
//!
//! Outputs are normalised where scheduling is allowed to vary: H2O molecules
//! are reported with their atoms sorted, consumed items are sorted.

use super::{case, fallible, Category, ExerciseRegistry, RegistryResult};
use crate::concurrency::{self, ConcurrencyError, FooBar, H2o, PrintInOrder, ZeroEvenOdd};
use serde::Deserialize;
use serde_json::json;

#[derive(Debug, Deserialize)]
struct ProducerConsumerInput {
    items: u64,
    capacity: usize,
    consumers: usize,
}

pub fn register_concurrency(registry: &mut ExerciseRegistry) -> RegistryResult<()> {
    registry.register(
        "zero_even_odd",
        "Three threads print 0 1 0 2 ... 0 n in order.",
        Category::Concurrency,
        vec![
            case(json!(1), json!("01")),
            case(json!(2), json!("0102")),
            case(json!(5), json!("0102030405")),
            case(json!(0), json!("")),
            case(json!(10), json!("010203040506070809010")),
        ],
        fallible(|n: u32| ZeroEvenOdd::new(n).run()),
    )?;

    registry.register(
        "foo_bar",
        "Two threads alternate \"foo\" and \"bar\" n times.",
        Category::Concurrency,
        vec![
            case(json!(1), json!("foobar")),
            case(json!(2), json!("foobarfoobar")),
            case(json!(0), json!("")),
            case(json!(3), json!("foobarfoobarfoobar")),
            case(json!(5), json!("foobarfoobarfoobarfoobarfoobar")),
        ],
        fallible(|n: u32| FooBar::new(n).run()),
    )?;

    registry.register(
        "print_in_order",
        "Threads started in any order still print first, second, third.",
        Category::Concurrency,
        vec![
            case(json!([1, 2, 3]), json!({"Ok": "firstsecondthird"})),
            case(json!([1, 3, 2]), json!({"Ok": "firstsecondthird"})),
            case(json!([3, 2, 1]), json!({"Ok": "firstsecondthird"})),
            case(json!([2, 3, 1]), json!({"Ok": "firstsecondthird"})),
            case(
                json!([1, 1, 3]),
                json!({"Err": "Invalid start order [1, 1, 3]: expected a permutation of 1, 2, 3"}),
            ),
        ],
        typed_result(|order: Vec<u8>| PrintInOrder::run(&order)),
    )?;

    registry.register(
        "building_h2o",
        "One thread per atom; atoms leave in groups of two H and one O.",
        Category::Concurrency,
        vec![
            case(json!("HOH"), json!({"Ok": ["HHO"]})),
            case(json!("OOHHHH"), json!({"Ok": ["HHO", "HHO"]})),
            case(json!(""), json!({"Ok": []})),
            case(json!("HHHO"), json!({"Err": "Cannot form water from 3 hydrogen and 1 oxygen atoms"})),
            case(json!("HXO"), json!({"Err": "Invalid atom 'X': expected 'H' or 'O'"})),
        ],
        typed_result(|water: String| {
            H2o::new().form(&water).map(|molecules| {
                molecules
                    .into_iter()
                    .map(|m| {
                        let mut atoms: Vec<char> = m.chars().collect();
                        atoms.sort_unstable();
                        atoms.into_iter().collect::<String>()
                    })
                    .collect::<Vec<_>>()
            })
        }),
    )?;

    registry.register(
        "producer_consumer",
        "One producer, n consumers, bounded channel; every item consumed once.",
        Category::Concurrency,
        vec![
            case(
                json!({"items": 5, "capacity": 2, "consumers": 2}),
                json!({"Ok": [1, 2, 3, 4, 5]}),
            ),
            case(
                json!({"items": 3, "capacity": 0, "consumers": 1}),
                json!({"Ok": [1, 2, 3]}),
            ),
            case(
                json!({"items": 0, "capacity": 4, "consumers": 3}),
                json!({"Ok": []}),
            ),
            case(
                json!({"items": 8, "capacity": 1, "consumers": 4}),
                json!({"Ok": [1, 2, 3, 4, 5, 6, 7, 8]}),
            ),
            case(
                json!({"items": 5, "capacity": 2, "consumers": 0}),
                json!({"Err": "At least one consumer is required"}),
            ),
        ],
        typed_result(|input: ProducerConsumerInput| {
            concurrency::producer_consumer(input.items, input.capacity, input.consumers)
        }),
    )?;

    registry.register(
        "parallel_sum",
        "Sum [values, workers] across scoped threads; null on overflow.",
        Category::Concurrency,
        vec![
            case(json!([[1, 2, 3, 4, 5], 2]), json!(15)),
            case(json!([[], 4]), json!(0)),
            case(json!([[10, 20, 30], 8]), json!(60)),
            case(json!([[7, 7, 7], 0]), json!(21)),
            case(json!([[18_446_744_073_709_551_615u64, 1], 2]), json!(null)),
        ],
        fallible(|(values, workers): (Vec<u64>, usize)| concurrency::parallel_sum(&values, workers)),
    )?;

    Ok(())
}

/// Puzzles whose expected output includes their setup errors.
fn typed_result<I, O, F>(f: F) -> super::ExerciseFn
where
    I: serde::de::DeserializeOwned,
    O: serde::Serialize,
    F: Fn(I) -> Result<O, ConcurrencyError> + Send + Sync + 'static,
{
    super::typed(move |input: I| f(input).map_err(|e| e.to_string()))
}
