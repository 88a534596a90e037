//! Number theory exercises

use super::{case, typed, Category, ExerciseRegistry, RegistryResult};
use katas_algo::numeric;
use serde_json::json;

pub fn register_numeric(registry: &mut ExerciseRegistry) -> RegistryResult<()> {
    registry.register(
        "gcd",
        "Greatest common divisor by Euclid's algorithm.",
        Category::Numeric,
        vec![
            case(json!([48, 18]), json!(6)),
            case(json!([17, 13]), json!(1)),
            case(json!([0, 5]), json!(5)),
            case(json!([12, 0]), json!(12)),
            case(json!([1071, 462]), json!(21)),
        ],
        typed(|(a, b): (u64, u64)| numeric::gcd(a, b)),
    )?;

    registry.register(
        "lcm",
        "Least common multiple, null on overflow.",
        Category::Numeric,
        vec![
            case(json!([4, 6]), json!(12)),
            case(json!([21, 6]), json!(42)),
            case(json!([0, 9]), json!(0)),
            case(json!([7, 7]), json!(7)),
            case(json!([18446744073709551615u64, 18446744073709551614u64]), json!(null)),
        ],
        typed(|(a, b): (u64, u64)| numeric::lcm(a, b)),
    )?;

    registry.register(
        "is_prime",
        "Primality by trial division over 6k +/- 1.",
        Category::Numeric,
        vec![
            case(json!(0), json!(false)),
            case(json!(2), json!(true)),
            case(json!(91), json!(false)),
            case(json!(97), json!(true)),
            case(json!(1_000_000_007u64), json!(true)),
        ],
        typed(numeric::is_prime),
    )?;

    registry.register(
        "sieve_of_eratosthenes",
        "All primes up to and including the limit.",
        Category::Numeric,
        vec![
            case(json!(30), json!([2, 3, 5, 7, 11, 13, 17, 19, 23, 29])),
            case(json!(1), json!([])),
            case(json!(2), json!([2])),
            case(json!(10), json!([2, 3, 5, 7])),
            case(json!(0), json!([])),
        ],
        typed(numeric::sieve),
    )?;

    registry.register(
        "mod_pow",
        "Modular exponentiation by repeated squaring.",
        Category::Numeric,
        vec![
            case(json!([2, 10, 1000]), json!(24)),
            case(json!([3, 0, 7]), json!(1)),
            case(json!([5, 3, 1]), json!(0)),
            case(json!([5, 3, 0]), json!(null)),
            case(json!([7, 128, 13]), json!(3)),
        ],
        typed(|(base, exp, modulus): (u64, u64, u64)| numeric::mod_pow(base, exp, modulus)),
    )?;

    registry.register(
        "fibonacci",
        "n-th Fibonacci number, null once it overflows u64.",
        Category::Numeric,
        vec![
            case(json!(0), json!(0)),
            case(json!(1), json!(1)),
            case(json!(10), json!(55)),
            case(json!(93), json!(12_200_160_415_121_876_738u64)),
            case(json!(94), json!(null)),
        ],
        typed(numeric::fibonacci),
    )?;

    registry.register(
        "factorial",
        "n!, null once it overflows u64.",
        Category::Numeric,
        vec![
            case(json!(0), json!(1)),
            case(json!(5), json!(120)),
            case(json!(10), json!(3_628_800)),
            case(json!(20), json!(2_432_902_008_176_640_000u64)),
            case(json!(21), json!(null)),
        ],
        typed(numeric::factorial),
    )?;

    registry.register(
        "palindrome_number",
        "Whether an integer reads the same reversed.",
        Category::Numeric,
        vec![
            case(json!(121), json!(true)),
            case(json!(-121), json!(false)),
            case(json!(10), json!(false)),
            case(json!(0), json!(true)),
            case(json!(1_234_321), json!(true)),
        ],
        typed(numeric::is_palindrome_number),
    )?;

    registry.register(
        "digit_sum",
        "Sum of decimal digits.",
        Category::Numeric,
        vec![
            case(json!(9875), json!(29)),
            case(json!(0), json!(0)),
            case(json!(1), json!(1)),
            case(json!(1_000_000), json!(1)),
            case(json!(18_446_744_073_709_551_615u64), json!(87)),
        ],
        typed(numeric::digit_sum),
    )?;

    Ok(())
}
