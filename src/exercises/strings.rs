//! String Exercises
//!
//! Pattern matching (KMP, Rabin-Karp, suffix arrays) and the usual string
//! puzzles.

use super::{case, typed, Category, ExerciseRegistry, RegistryResult};
use katas_algo::strings::{self, SuffixIndex};
use serde_json::json;

pub fn register_strings(registry: &mut ExerciseRegistry) -> RegistryResult<()> {
    register_matching(registry)?;
    register_puzzles(registry)?;
    Ok(())
}

fn register_matching(registry: &mut ExerciseRegistry) -> RegistryResult<()> {
    let search_cases = || {
        vec![
            case(json!(["ababcabcabababd", "ababd"]), json!([10])),
            case(json!(["aaaa", "aa"]), json!([0, 1, 2])),
            case(json!(["hello world", "o"]), json!([4, 7])),
            case(json!(["abc", ""]), json!([])),
            case(json!(["short", "much longer"]), json!([])),
        ]
    };

    registry.register(
        "kmp_search",
        "All match offsets using the Knuth-Morris-Pratt prefix function.",
        Category::Strings,
        search_cases(),
        typed(|(text, pattern): (String, String)| strings::kmp_search(&text, &pattern)),
    )?;

    registry.register(
        "rabin_karp",
        "All match offsets using a rolling hash.",
        Category::Strings,
        search_cases(),
        typed(|(text, pattern): (String, String)| strings::rabin_karp(&text, &pattern)),
    )?;

    registry.register(
        "suffix_array",
        "Suffix array by prefix doubling.",
        Category::Strings,
        vec![
            case(json!("banana"), json!([5, 3, 1, 0, 4, 2])),
            case(json!("aaaa"), json!([3, 2, 1, 0])),
            case(json!(""), json!([])),
            case(json!("abc"), json!([0, 1, 2])),
            case(json!("mississippi"), json!([10, 7, 4, 1, 0, 9, 8, 6, 3, 5, 2])),
        ],
        typed(|text: String| strings::suffix_array(&text)),
    )?;

    registry.register(
        "suffix_array_search",
        "Substring occurrences answered by binary search over a suffix array.",
        Category::Strings,
        vec![
            case(json!(["mississippi", "ssi"]), json!([2, 5])),
            case(json!(["mississippi", "i"]), json!([1, 4, 7, 10])),
            case(json!(["mississippi", "issp"]), json!([])),
            case(json!(["banana", "ana"]), json!([1, 3])),
            case(json!(["banana", "banana!"]), json!([])),
        ],
        typed(|(text, pattern): (String, String)| SuffixIndex::new(&text).occurrences(&pattern)),
    )?;

    Ok(())
}

fn register_puzzles(registry: &mut ExerciseRegistry) -> RegistryResult<()> {
    registry.register(
        "longest_palindrome",
        "Longest palindromic substring, leftmost on ties.",
        Category::Strings,
        vec![
            case(json!("babad"), json!("bab")),
            case(json!("cbbd"), json!("bb")),
            case(json!("a"), json!("a")),
            case(json!(""), json!("")),
            case(json!("forgeeksskeegfor"), json!("geeksskeeg")),
        ],
        typed(|s: String| strings::longest_palindrome(&s).to_string()),
    )?;

    registry.register(
        "is_anagram",
        "Same characters with the same multiplicities.",
        Category::Strings,
        vec![
            case(json!(["listen", "silent"]), json!(true)),
            case(json!(["rat", "car"]), json!(false)),
            case(json!(["", ""]), json!(true)),
            case(json!(["aab", "abb"]), json!(false)),
            case(json!(["Dormitory", "dirtyroom"]), json!(false)),
        ],
        typed(|(a, b): (String, String)| strings::is_anagram(&a, &b)),
    )?;

    registry.register(
        "reverse_words",
        "Reverse word order and collapse whitespace.",
        Category::Strings,
        vec![
            case(json!("the sky is blue"), json!("blue is sky the")),
            case(json!("  hello world  "), json!("world hello")),
            case(json!("a good   example"), json!("example good a")),
            case(json!(""), json!("")),
            case(json!("single"), json!("single")),
        ],
        typed(|s: String| strings::reverse_words(&s)),
    )?;

    registry.register(
        "longest_common_prefix",
        "Longest prefix shared by every word.",
        Category::Strings,
        vec![
            case(json!(["flower", "flow", "flight"]), json!("fl")),
            case(json!(["dog", "racecar", "car"]), json!("")),
            case(json!(["alone"]), json!("alone")),
            case(json!([]), json!("")),
            case(json!(["prefix", "prefixes", "pre"]), json!("pre")),
        ],
        typed(|words: Vec<String>| {
            let refs: Vec<&str> = words.iter().map(String::as_str).collect();
            strings::longest_common_prefix(&refs)
        }),
    )?;

    registry.register(
        "longest_unique_substring",
        "Length of the longest substring without repeating characters.",
        Category::Strings,
        vec![
            case(json!("abcabcbb"), json!(3)),
            case(json!("bbbbb"), json!(1)),
            case(json!("pwwkew"), json!(3)),
            case(json!(""), json!(0)),
            case(json!("dvdf"), json!(3)),
        ],
        typed(|s: String| strings::longest_unique_substring(&s)),
    )?;

    registry.register(
        "valid_parentheses",
        "Balanced (), [] and {}.",
        Category::Strings,
        vec![
            case(json!("()[]{}"), json!(true)),
            case(json!("(]"), json!(false)),
            case(json!("{[()]}"), json!(true)),
            case(json!("(("), json!(false)),
            case(json!(""), json!(true)),
        ],
        typed(|s: String| strings::is_valid_parentheses(&s)),
    )?;

    registry.register(
        "run_length_encoding",
        "Encode as <count><char> runs.",
        Category::Strings,
        vec![
            case(json!("aaabccdddd"), json!("3a1b2c4d")),
            case(json!(""), json!("")),
            case(json!("abc"), json!("1a1b1c")),
            case(json!("zzzzzzzzzzzz"), json!("12z")),
            case(json!("aabbaa"), json!("2a2b2a")),
        ],
        typed(|s: String| strings::run_length_encode(&s)),
    )?;

    registry.register(
        "run_length_decoding",
        "Decode <count><char> runs; null on malformed input.",
        Category::Strings,
        vec![
            case(json!("3a1b2c4d"), json!("aaabccdddd")),
            case(json!("12z"), json!("zzzzzzzzzzzz")),
            case(json!(""), json!("")),
            case(json!("a"), json!(null)),
            case(json!("3"), json!(null)),
        ],
        typed(|s: String| strings::run_length_decode(&s)),
    )?;

    Ok(())
}
