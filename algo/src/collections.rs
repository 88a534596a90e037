//! Small data structures
//!
//! LRU cache, min-stack, trie and union-find.

use std::collections::{BTreeMap, HashMap};
use std::hash::Hash;

// ============================================================================
// LRU Cache
// ============================================================================

/// Least-recently-used cache.
///
/// Every access stamps the entry with a fresh tick; `order` maps ticks back to
/// keys so the oldest entry is the first key of the `BTreeMap`.
#[derive(Debug, Clone)]
pub struct LruCache<K, V> {
    capacity: usize,
    tick: u64,
    entries: HashMap<K, (V, u64)>,
    order: BTreeMap<u64, K>,
}

impl<K: Eq + Hash + Clone, V> LruCache<K, V> {
    /// A cache holding at most `capacity` entries. Capacity 0 stores nothing.
    pub fn new(capacity: usize) -> Self {
        Self {
            capacity,
            tick: 0,
            entries: HashMap::new(),
            order: BTreeMap::new(),
        }
    }

    fn touch(&mut self, key: &K) {
        if let Some((_, stamp)) = self.entries.get_mut(key) {
            self.order.remove(stamp);
            self.tick += 1;
            *stamp = self.tick;
            self.order.insert(self.tick, key.clone());
        }
    }

    pub fn get(&mut self, key: &K) -> Option<&V> {
        self.touch(key);
        self.entries.get(key).map(|(v, _)| v)
    }

    /// Insert or update. Returns the evicted key, if any.
    pub fn put(&mut self, key: K, value: V) -> Option<K> {
        if self.capacity == 0 {
            return None;
        }
        if let Some(entry) = self.entries.get_mut(&key) {
            entry.0 = value;
            self.touch(&key);
            return None;
        }

        let mut evicted = None;
        if self.entries.len() >= self.capacity {
            if let Some((_, oldest)) = self.order.pop_first() {
                self.entries.remove(&oldest);
                evicted = Some(oldest);
            }
        }
        self.tick += 1;
        self.order.insert(self.tick, key.clone());
        self.entries.insert(key, (value, self.tick));
        evicted
    }

    pub fn contains(&self, key: &K) -> bool {
        self.entries.contains_key(key)
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    pub fn capacity(&self) -> usize {
        self.capacity
    }
}

// ============================================================================
// Min Stack
// ============================================================================

/// Stack with O(1) access to its minimum.
#[derive(Debug, Clone, Default)]
pub struct MinStack {
    items: Vec<(i64, i64)>, // (value, min so far)
}

impl MinStack {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn push(&mut self, value: i64) {
        let min = self.items.last().map_or(value, |&(_, m)| m.min(value));
        self.items.push((value, min));
    }

    pub fn pop(&mut self) -> Option<i64> {
        self.items.pop().map(|(v, _)| v)
    }

    pub fn top(&self) -> Option<i64> {
        self.items.last().map(|&(v, _)| v)
    }

    pub fn min(&self) -> Option<i64> {
        self.items.last().map(|&(_, m)| m)
    }

    pub fn len(&self) -> usize {
        self.items.len()
    }

    pub fn is_empty(&self) -> bool {
        self.items.is_empty()
    }
}

// ============================================================================
// Trie
// ============================================================================

#[derive(Debug, Clone, Default)]
struct TrieNode {
    children: BTreeMap<char, TrieNode>,
    terminal: bool,
}

/// Prefix tree over `char`s. Children are ordered, so listings are sorted.
#[derive(Debug, Clone, Default)]
pub struct Trie {
    root: TrieNode,
    words: usize,
}

impl Trie {
    pub fn new() -> Self {
        Self::default()
    }

    /// Returns false if the word was already present.
    pub fn insert(&mut self, word: &str) -> bool {
        let mut node = &mut self.root;
        for c in word.chars() {
            node = node.children.entry(c).or_default();
        }
        if node.terminal {
            return false;
        }
        node.terminal = true;
        self.words += 1;
        true
    }

    fn walk(&self, prefix: &str) -> Option<&TrieNode> {
        let mut node = &self.root;
        for c in prefix.chars() {
            node = node.children.get(&c)?;
        }
        Some(node)
    }

    pub fn contains(&self, word: &str) -> bool {
        self.walk(word).is_some_and(|n| n.terminal)
    }

    pub fn starts_with(&self, prefix: &str) -> bool {
        self.walk(prefix).is_some()
    }

    /// Every stored word beginning with `prefix`, in lexicographic order.
    pub fn words_with_prefix(&self, prefix: &str) -> Vec<String> {
        let mut out = Vec::new();
        if let Some(node) = self.walk(prefix) {
            let mut buf = prefix.to_string();
            collect(node, &mut buf, &mut out);
        }
        out
    }

    pub fn len(&self) -> usize {
        self.words
    }

    pub fn is_empty(&self) -> bool {
        self.words == 0
    }
}

fn collect(node: &TrieNode, buf: &mut String, out: &mut Vec<String>) {
    if node.terminal {
        out.push(buf.clone());
    }
    for (&c, child) in &node.children {
        buf.push(c);
        collect(child, buf, out);
        buf.pop();
    }
}

// ============================================================================
// Union-Find
// ============================================================================

/// Disjoint sets with path halving and union by size.
#[derive(Debug, Clone)]
pub struct UnionFind {
    parent: Vec<usize>,
    size: Vec<usize>,
    sets: usize,
}

impl UnionFind {
    pub fn new(n: usize) -> Self {
        Self {
            parent: (0..n).collect(),
            size: vec![1; n],
            sets: n,
        }
    }

    pub fn find(&mut self, mut x: usize) -> usize {
        while self.parent[x] != x {
            self.parent[x] = self.parent[self.parent[x]];
            x = self.parent[x];
        }
        x
    }

    /// Merge the sets of `a` and `b`. Returns false if already joined.
    pub fn union(&mut self, a: usize, b: usize) -> bool {
        let (mut ra, mut rb) = (self.find(a), self.find(b));
        if ra == rb {
            return false;
        }
        if self.size[ra] < self.size[rb] {
            std::mem::swap(&mut ra, &mut rb);
        }
        self.parent[rb] = ra;
        self.size[ra] += self.size[rb];
        self.sets -= 1;
        true
    }

    pub fn connected(&mut self, a: usize, b: usize) -> bool {
        self.find(a) == self.find(b)
    }

    /// Number of disjoint sets.
    pub fn count(&self) -> usize {
        self.sets
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_lru_evicts_least_recent() {
        let mut cache = LruCache::new(2);
        cache.put(1, "one");
        cache.put(2, "two");
        assert_eq!(cache.get(&1), Some(&"one"));
        assert_eq!(cache.put(3, "three"), Some(2));
        assert_eq!(cache.get(&2), None);
        assert_eq!(cache.put(4, "four"), Some(1));
        assert_eq!(cache.get(&3), Some(&"three"));
        assert_eq!(cache.len(), 2);
    }

    #[test]
    fn test_lru_update_refreshes() {
        let mut cache = LruCache::new(2);
        cache.put("a", 1);
        cache.put("b", 2);
        assert_eq!(cache.put("a", 10), None);
        assert_eq!(cache.put("c", 3), Some("b"));
        assert_eq!(cache.get(&"a"), Some(&10));
    }

    #[test]
    fn test_lru_zero_capacity() {
        let mut cache = LruCache::new(0);
        assert_eq!(cache.put(1, 1), None);
        assert!(cache.is_empty());
        assert_eq!(cache.get(&1), None);
    }

    #[test]
    fn test_min_stack() {
        let mut s = MinStack::new();
        assert_eq!(s.min(), None);
        s.push(-2);
        s.push(0);
        s.push(-3);
        assert_eq!(s.min(), Some(-3));
        assert_eq!(s.pop(), Some(-3));
        assert_eq!(s.top(), Some(0));
        assert_eq!(s.min(), Some(-2));
    }

    #[test]
    fn test_trie() {
        let mut t = Trie::new();
        assert!(t.insert("apple"));
        assert!(t.insert("app"));
        assert!(t.insert("apt"));
        assert!(!t.insert("app"));
        assert!(t.contains("app"));
        assert!(!t.contains("ap"));
        assert!(t.starts_with("ap"));
        assert!(!t.starts_with("b"));
        assert_eq!(t.words_with_prefix("ap"), vec!["app", "apple", "apt"]);
        assert_eq!(t.len(), 3);
    }

    #[test]
    fn test_union_find() {
        let mut uf = UnionFind::new(5);
        assert!(uf.union(0, 1));
        assert!(uf.union(3, 4));
        assert!(!uf.union(1, 0));
        assert!(uf.connected(0, 1));
        assert!(!uf.connected(1, 3));
        assert_eq!(uf.count(), 3);
    }
}
