//! Katas Algorithm Library
//!
//! Textbook algorithms and small data structures. Every exercise in the
//! `katas` catalog is a thin wrapper around one of these functions.
//!
//! # Design Philosophy
//!
//! 1. **One exercise, one function** - Each function stands alone and can be read
//!    top to bottom without chasing helpers in other modules
//! 2. **Safe Rust only** - Slices, strings and owned collections; no raw pointers
//! 3. **Documented cases** - Doc comments list the literal cases the catalog checks
//!
//! # Modules
//!
//! - `sorting` - heap, merge, quick and insertion sort, inversion counting
//! - `searching` - binary search and heap-based order statistics
//! - `graph` - BFS, DFS, Dijkstra, topological sort, islands
//! - `strings` - KMP, Rabin-Karp, suffix arrays and classic string puzzles
//! - `numeric` - GCD, primes, modular exponentiation, checked sequences
//! - `dynamic` - dynamic programming and interval problems (incl. skyline)
//! - `collections` - LRU cache, min stack, trie, union-find

pub mod collections;
pub mod dynamic;
pub mod graph;
pub mod numeric;
pub mod searching;
pub mod sorting;
pub mod strings;

// Re-export commonly used functions
pub use collections::{LruCache, MinStack, Trie, UnionFind};
pub use graph::Graph;
pub use searching::RunningMedian;
pub use strings::SuffixIndex;
