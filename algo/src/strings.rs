//! String algorithms
//!
//! Pattern matching works on bytes and reports byte offsets. The classic
//! puzzles (anagrams, palindromes, parentheses) operate on `char`s unless
//! noted otherwise.

use std::collections::HashMap;

// ============================================================================
// Pattern Matching
// ============================================================================

/// Knuth-Morris-Pratt search. Returns the byte offset of every match,
/// overlapping matches included. An empty pattern matches nowhere.
///
/// # Test Cases
/// - kmp_search("ababcabcabababd", "ababd") = [10]
/// - kmp_search("aaaa", "aa") = [0, 1, 2]
/// - kmp_search("abc", "") = []
pub fn kmp_search(text: &str, pattern: &str) -> Vec<usize> {
    let t = text.as_bytes();
    let p = pattern.as_bytes();
    if p.is_empty() || p.len() > t.len() {
        return Vec::new();
    }

    let lps = prefix_function(p);
    let mut matches = Vec::new();
    let mut j = 0;
    for (i, &byte) in t.iter().enumerate() {
        while j > 0 && byte != p[j] {
            j = lps[j - 1];
        }
        if byte == p[j] {
            j += 1;
        }
        if j == p.len() {
            matches.push(i + 1 - j);
            j = lps[j - 1];
        }
    }
    matches
}

/// Longest proper prefix that is also a suffix, for every prefix of `p`.
fn prefix_function(p: &[u8]) -> Vec<usize> {
    let mut lps = vec![0usize; p.len()];
    let mut len = 0;
    for i in 1..p.len() {
        while len > 0 && p[i] != p[len] {
            len = lps[len - 1];
        }
        if p[i] == p[len] {
            len += 1;
        }
        lps[i] = len;
    }
    lps
}

const RK_BASE: u64 = 256;
const RK_MOD: u64 = 1_000_000_007;

/// Rabin-Karp rolling-hash search. Same contract as [`kmp_search`].
///
/// Hash hits are confirmed byte-by-byte so collisions never produce false
/// matches.
pub fn rabin_karp(text: &str, pattern: &str) -> Vec<usize> {
    let t = text.as_bytes();
    let p = pattern.as_bytes();
    let m = p.len();
    if m == 0 || m > t.len() {
        return Vec::new();
    }

    // RK_BASE^(m-1) mod RK_MOD, the weight of the byte leaving the window
    let mut high = 1u64;
    for _ in 1..m {
        high = high * RK_BASE % RK_MOD;
    }

    let hash = |bytes: &[u8]| {
        bytes
            .iter()
            .fold(0u64, |h, &b| (h * RK_BASE + b as u64) % RK_MOD)
    };
    let target = hash(p);
    let mut window = hash(&t[..m]);
    let mut matches = Vec::new();

    for start in 0..=t.len() - m {
        if window == target && &t[start..start + m] == p {
            matches.push(start);
        }
        if start + m < t.len() {
            let leaving = t[start] as u64 * high % RK_MOD;
            window = (window + RK_MOD - leaving) % RK_MOD;
            window = (window * RK_BASE + t[start + m] as u64) % RK_MOD;
        }
    }
    matches
}

// ============================================================================
// Suffix Arrays
// ============================================================================

/// Suffix array by prefix doubling, O(n log^2 n).
///
/// # Test Cases
/// - suffix_array("banana") = [5, 3, 1, 0, 4, 2]
pub fn suffix_array(text: &str) -> Vec<usize> {
    let s = text.as_bytes();
    let n = s.len();
    let mut sa: Vec<usize> = (0..n).collect();
    if n <= 1 {
        return sa;
    }
    let mut rank: Vec<usize> = s.iter().map(|&b| b as usize).collect();
    let mut next_rank = vec![0usize; n];
    let mut k = 1;

    loop {
        // rank pair; suffixes shorter than k+1 sort first via the +1 offset
        let key = |i: usize| (rank[i], if i + k < n { rank[i + k] + 1 } else { 0 });
        sa.sort_by_key(|&i| key(i));

        next_rank[sa[0]] = 0;
        for w in 1..n {
            let bump = usize::from(key(sa[w]) != key(sa[w - 1]));
            next_rank[sa[w]] = next_rank[sa[w - 1]] + bump;
        }
        std::mem::swap(&mut rank, &mut next_rank);

        if rank[sa[n - 1]] == n - 1 {
            break;
        }
        k *= 2;
    }
    sa
}

/// A text together with its suffix array, for repeated substring queries.
#[derive(Debug, Clone)]
pub struct SuffixIndex {
    text: String,
    sa: Vec<usize>,
}

impl SuffixIndex {
    pub fn new(text: &str) -> Self {
        Self {
            text: text.to_string(),
            sa: suffix_array(text),
        }
    }

    pub fn suffixes(&self) -> &[usize] {
        &self.sa
    }

    /// Whether `pattern` occurs anywhere. The empty pattern always occurs.
    pub fn contains(&self, pattern: &str) -> bool {
        pattern.is_empty() || !self.range(pattern.as_bytes()).is_empty()
    }

    /// Start offsets of every occurrence, ascending.
    pub fn occurrences(&self, pattern: &str) -> Vec<usize> {
        if pattern.is_empty() {
            return Vec::new();
        }
        let mut hits: Vec<usize> = self.sa[self.range(pattern.as_bytes())].to_vec();
        hits.sort_unstable();
        hits
    }

    /// The contiguous block of the suffix array whose suffixes start with `p`.
    fn range(&self, p: &[u8]) -> std::ops::Range<usize> {
        let s = self.text.as_bytes();
        let prefix = |i: usize| &s[i..(i + p.len()).min(s.len())];
        let start = self.sa.partition_point(|&i| prefix(i) < p);
        let end = self.sa.partition_point(|&i| prefix(i) <= p);
        start..end
    }
}

// ============================================================================
// Classic Puzzles
// ============================================================================

/// Longest palindromic substring; the leftmost one wins ties.
///
/// # Test Cases
/// - longest_palindrome("babad") = "bab"
/// - longest_palindrome("cbbd") = "bb"
pub fn longest_palindrome(s: &str) -> &str {
    let chars: Vec<(usize, char)> = s.char_indices().collect();
    if chars.is_empty() {
        return "";
    }
    let n = chars.len();
    let (mut best_lo, mut best_hi) = (0usize, 0usize);

    let expand = |mut lo: isize, mut hi: usize| -> (usize, usize) {
        while lo >= 0 && hi < n && chars[lo as usize].1 == chars[hi].1 {
            lo -= 1;
            hi += 1;
        }
        ((lo + 1) as usize, hi - 1)
    };

    for center in 0..n {
        let odd = expand(center as isize, center);
        let even = if center + 1 < n {
            expand(center as isize, center + 1)
        } else {
            (center, center)
        };
        for (lo, hi) in [odd, even] {
            if hi >= lo && hi - lo > best_hi - best_lo {
                best_lo = lo;
                best_hi = hi;
            }
        }
    }

    let start = chars[best_lo].0;
    let end = chars
        .get(best_hi + 1)
        .map(|&(offset, _)| offset)
        .unwrap_or(s.len());
    &s[start..end]
}

/// Whether two strings use the same characters with the same counts.
/// Case-sensitive; whitespace counts.
pub fn is_anagram(a: &str, b: &str) -> bool {
    let mut counts: HashMap<char, i64> = HashMap::new();
    for c in a.chars() {
        *counts.entry(c).or_insert(0) += 1;
    }
    for c in b.chars() {
        *counts.entry(c).or_insert(0) -= 1;
    }
    counts.values().all(|&v| v == 0)
}

/// Reverse word order, collapsing runs of whitespace to single spaces.
pub fn reverse_words(s: &str) -> String {
    s.split_whitespace().rev().collect::<Vec<_>>().join(" ")
}

pub fn longest_common_prefix(words: &[&str]) -> String {
    let Some(first) = words.first() else {
        return String::new();
    };
    let mut end = first.len();
    for word in &words[1..] {
        end = first
            .char_indices()
            .zip(word.chars())
            .take_while(|((_, a), b)| a == b)
            .map(|((i, a), _)| i + a.len_utf8())
            .last()
            .unwrap_or(0)
            .min(end);
    }
    first[..end].to_string()
}

/// Length (in chars) of the longest substring without repeated characters.
pub fn longest_unique_substring(s: &str) -> usize {
    let mut last_seen: HashMap<char, usize> = HashMap::new();
    let mut window_start = 0;
    let mut best = 0;
    for (i, c) in s.chars().enumerate() {
        if let Some(&prev) = last_seen.get(&c) {
            if prev >= window_start {
                window_start = prev + 1;
            }
        }
        last_seen.insert(c, i);
        best = best.max(i + 1 - window_start);
    }
    best
}

/// Balanced `()`, `[]` and `{}`. Other characters are ignored.
pub fn is_valid_parentheses(s: &str) -> bool {
    let mut stack = Vec::new();
    for c in s.chars() {
        match c {
            '(' | '[' | '{' => stack.push(c),
            ')' | ']' | '}' => {
                let open = match c {
                    ')' => '(',
                    ']' => '[',
                    _ => '{',
                };
                if stack.pop() != Some(open) {
                    return false;
                }
            }
            _ => {}
        }
    }
    stack.is_empty()
}

/// Run-length encode as `<count><char>` pairs, e.g. "aaab" -> "3a1b".
///
/// Counts are not escaped, so ASCII digits in `s` cannot be told apart from
/// counts when decoding.
pub fn run_length_encode(s: &str) -> String {
    let mut out = String::new();
    let mut chars = s.chars().peekable();
    while let Some(c) = chars.next() {
        let mut run = 1;
        while chars.peek() == Some(&c) {
            chars.next();
            run += 1;
        }
        out.push_str(&run.to_string());
        out.push(c);
    }
    out
}

/// Inverse of [`run_length_encode`] for text without ASCII digits. Returns
/// `None` on malformed input (a character without a count, or a trailing
/// count); an encoded digit run such as "31" reads as a trailing count.
pub fn run_length_decode(s: &str) -> Option<String> {
    let mut out = String::new();
    let mut count: Option<usize> = None;
    for c in s.chars() {
        if let Some(d) = c.to_digit(10) {
            count = Some(count.unwrap_or(0).checked_mul(10)?.checked_add(d as usize)?);
        } else {
            let run = count.take()?;
            out.extend(std::iter::repeat(c).take(run));
        }
    }
    if count.is_some() {
        return None;
    }
    Some(out)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_kmp_search() {
        assert_eq!(kmp_search("ababcabcabababd", "ababd"), vec![10]);
        assert_eq!(kmp_search("aaaa", "aa"), vec![0, 1, 2]);
        assert!(kmp_search("abc", "").is_empty());
        assert!(kmp_search("ab", "abc").is_empty());
    }

    #[test]
    fn test_rabin_karp_matches_kmp() {
        let cases = [
            ("ababcabcabababd", "ababd"),
            ("aaaa", "aa"),
            ("the quick brown fox", "o"),
            ("mississippi", "issi"),
            ("", "a"),
        ];
        for (text, pattern) in cases {
            assert_eq!(rabin_karp(text, pattern), kmp_search(text, pattern));
        }
    }

    #[test]
    fn test_suffix_array() {
        assert_eq!(suffix_array("banana"), vec![5, 3, 1, 0, 4, 2]);
        assert_eq!(suffix_array("aaaa"), vec![3, 2, 1, 0]);
        assert!(suffix_array("").is_empty());
        assert_eq!(suffix_array("x"), vec![0]);
    }

    #[test]
    fn test_suffix_index() {
        let idx = SuffixIndex::new("mississippi");
        assert!(idx.contains("ssi"));
        assert!(idx.contains(""));
        assert!(!idx.contains("issp"));
        assert_eq!(idx.occurrences("ssi"), vec![2, 5]);
        assert_eq!(idx.occurrences("i"), vec![1, 4, 7, 10]);
        assert!(idx.occurrences("zzz").is_empty());
    }

    #[test]
    fn test_longest_palindrome() {
        assert_eq!(longest_palindrome("babad"), "bab");
        assert_eq!(longest_palindrome("cbbd"), "bb");
        assert_eq!(longest_palindrome("a"), "a");
        assert_eq!(longest_palindrome(""), "");
        assert_eq!(longest_palindrome("forgeeksskeegfor"), "geeksskeeg");
    }

    #[test]
    fn test_small_puzzles() {
        assert!(is_anagram("listen", "silent"));
        assert!(!is_anagram("rat", "car"));
        assert_eq!(reverse_words("  the sky  is blue "), "blue is sky the");
        assert_eq!(longest_common_prefix(&["flower", "flow", "flight"]), "fl");
        assert_eq!(longest_common_prefix(&["dog", "racecar"]), "");
        assert_eq!(longest_common_prefix(&[]), "");
        assert_eq!(longest_unique_substring("abcabcbb"), 3);
        assert_eq!(longest_unique_substring("pwwkew"), 3);
        assert!(is_valid_parentheses("{[()]}"));
        assert!(!is_valid_parentheses("(]"));
        assert!(!is_valid_parentheses("(("));
    }

    #[test]
    fn test_run_length() {
        assert_eq!(run_length_encode("aaabccdddd"), "3a1b2c4d");
        assert_eq!(run_length_encode(""), "");
        assert_eq!(run_length_decode("3a1b2c4d").as_deref(), Some("aaabccdddd"));
        assert_eq!(run_length_decode("12x").as_deref(), Some("xxxxxxxxxxxx"));
        assert_eq!(run_length_decode("a"), None);
        assert_eq!(run_length_decode("3"), None);
    }

    #[test]
    fn test_run_length_round_trip_needs_digit_free_text() {
        for text in ["aaabccdddd", "hello world", "zz!!??"] {
            assert_eq!(run_length_decode(&run_length_encode(text)).as_deref(), Some(text));
        }
        // digit runs are indistinguishable from counts
        assert_eq!(run_length_encode("111"), "31");
        assert_eq!(run_length_decode(&run_length_encode("111")), None);
    }
}
