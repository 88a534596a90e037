//! Data structure exercises
//!
//! Stateful structures are driven by an operation script; the output lists
//! the result of every query operation in order.

use super::{case, typed, Category, ExerciseRegistry, RegistryResult};
use katas_algo::collections::{LruCache, MinStack, Trie, UnionFind};
use serde::Deserialize;
use serde_json::json;

#[derive(Debug, Deserialize)]
#[serde(rename_all = "lowercase")]
enum LruOp {
    Put(i64, i64),
    Get(i64),
}

#[derive(Debug, Deserialize)]
struct LruScript {
    capacity: usize,
    ops: Vec<LruOp>,
}

#[derive(Debug, Deserialize)]
#[serde(rename_all = "lowercase")]
enum StackOp {
    Push(i64),
    Pop,
    Top,
    Min,
}

#[derive(Debug, Deserialize)]
struct TrieQuery {
    words: Vec<String>,
    prefix: String,
}

#[derive(Debug, Deserialize)]
struct UnionFindScript {
    n: usize,
    unions: Vec<(usize, usize)>,
    queries: Vec<(usize, usize)>,
}

pub fn register_collections(registry: &mut ExerciseRegistry) -> RegistryResult<()> {
    registry.register(
        "lru_cache",
        "Least-recently-used cache; outputs the result of every get.",
        Category::Collections,
        vec![
            case(
                json!({"capacity": 2, "ops": [
                    {"put": [1, 1]}, {"put": [2, 2]}, {"get": 1}, {"put": [3, 3]},
                    {"get": 2}, {"put": [4, 4]}, {"get": 1}, {"get": 3}, {"get": 4}
                ]}),
                json!([1, null, null, 3, 4]),
            ),
            case(
                json!({"capacity": 1, "ops": [{"put": [1, 10]}, {"put": [1, 20]}, {"get": 1}]}),
                json!([20]),
            ),
            case(
                json!({"capacity": 0, "ops": [{"put": [1, 1]}, {"get": 1}]}),
                json!([null]),
            ),
            case(
                json!({"capacity": 2, "ops": [
                    {"put": [1, 1]}, {"put": [2, 2]}, {"put": [1, 5]}, {"put": [3, 3]},
                    {"get": 1}, {"get": 2}
                ]}),
                json!([5, null]),
            ),
            case(json!({"capacity": 3, "ops": []}), json!([])),
        ],
        typed(|script: LruScript| {
            let mut cache = LruCache::new(script.capacity);
            let mut out = Vec::new();
            for op in script.ops {
                match op {
                    LruOp::Put(k, v) => {
                        cache.put(k, v);
                    }
                    LruOp::Get(k) => out.push(cache.get(&k).copied()),
                }
            }
            out
        }),
    )?;

    registry.register(
        "min_stack",
        "Stack with constant-time minimum; outputs every pop, top and min.",
        Category::Collections,
        vec![
            case(
                json!([{"push": -2}, {"push": 0}, {"push": -3}, "min", "pop", "top", "min"]),
                json!([-3, -3, 0, -2]),
            ),
            case(json!(["pop", "top", "min"]), json!([null, null, null])),
            case(json!([{"push": 5}, "min", {"push": 7}, "min"]), json!([5, 5])),
            case(
                json!([{"push": 2}, {"push": 2}, "pop", "min", "pop", "min"]),
                json!([2, 2, 2, null]),
            ),
            case(json!([]), json!([])),
        ],
        typed(|ops: Vec<StackOp>| {
            let mut stack = MinStack::new();
            let mut out = Vec::new();
            for op in ops {
                match op {
                    StackOp::Push(v) => stack.push(v),
                    StackOp::Pop => out.push(stack.pop()),
                    StackOp::Top => out.push(stack.top()),
                    StackOp::Min => out.push(stack.min()),
                }
            }
            out
        }),
    )?;

    registry.register(
        "trie_autocomplete",
        "Every inserted word starting with the prefix, sorted.",
        Category::Collections,
        vec![
            case(
                json!({"words": ["apple", "app", "apt", "bat"], "prefix": "ap"}),
                json!(["app", "apple", "apt"]),
            ),
            case(json!({"words": ["apple"], "prefix": "b"}), json!([])),
            case(
                json!({"words": ["car", "card", "care", "car"], "prefix": "car"}),
                json!(["car", "card", "care"]),
            ),
            case(json!({"words": ["x", "y"], "prefix": ""}), json!(["x", "y"])),
            case(json!({"words": [], "prefix": "a"}), json!([])),
        ],
        typed(|q: TrieQuery| {
            let mut trie = Trie::new();
            for word in &q.words {
                trie.insert(word);
            }
            trie.words_with_prefix(&q.prefix)
        }),
    )?;

    registry.register(
        "union_find",
        "Answer connectivity queries after a series of unions.",
        Category::Collections,
        vec![
            case(
                json!({"n": 5, "unions": [[0, 1], [3, 4]], "queries": [[0, 1], [1, 3], [4, 3]]}),
                json!([true, false, true]),
            ),
            case(
                json!({"n": 4, "unions": [[0, 1], [1, 2], [2, 3]], "queries": [[0, 3]]}),
                json!([true]),
            ),
            case(json!({"n": 3, "unions": [], "queries": [[0, 0], [0, 2]]}), json!([true, false])),
            case(json!({"n": 2, "unions": [], "queries": []}), json!([])),
            case(
                json!({"n": 6, "unions": [[0, 5], [2, 3], [5, 3]], "queries": [[0, 2], [1, 4]]}),
                json!([true, false]),
            ),
        ],
        typed(|script: UnionFindScript| {
            let mut uf = UnionFind::new(script.n);
            let in_range = |a: usize, b: usize| a < script.n && b < script.n;
            for (a, b) in script.unions {
                if in_range(a, b) {
                    uf.union(a, b);
                }
            }
            script
                .queries
                .into_iter()
                .map(|(a, b)| in_range(a, b) && uf.connected(a, b))
                .collect::<Vec<bool>>()
        }),
    )?;

    Ok(())
}
