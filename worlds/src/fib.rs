//! Fibonacci computation strategies.
//!
//! Four renditions of the same function: naive recursion, explicit-cache
//! memoization, two-variable iteration, and an iterator over the whole
//! sequence. Values are `u64`; `fib(93)` is the largest that fits.

use std::collections::HashMap;

/// Naive doubly-recursive Fibonacci. Exponential time; only suitable for
/// small `n` and for benchmarking against the other strategies.
#[must_use]
pub fn fib_recursive(n: u32) -> u64 {
    if n < 2 {
        return u64::from(n);
    }
    fib_recursive(n - 2) + fib_recursive(n - 1)
}

/// Memoized Fibonacci with an owned cache.
///
/// The cache is an explicit object rather than process-global state: callers
/// decide its scope, and independent caches never observe each other.
#[derive(Debug, Clone)]
pub struct FibCache {
    memo: HashMap<u32, u64>,
}

impl FibCache {
    /// Create a cache seeded with the base cases.
    #[must_use]
    pub fn new() -> Self {
        let mut memo = HashMap::new();
        memo.insert(0, 0);
        memo.insert(1, 1);
        Self { memo }
    }

    /// Compute `fib(n)`, filling the cache as needed. Linear in the number
    /// of uncached values; O(1) on a warm cache.
    pub fn fib(&mut self, n: u32) -> u64 {
        if let Some(&value) = self.memo.get(&n) {
            return value;
        }
        let value = self.fib(n - 1) + self.fib(n - 2);
        self.memo.insert(n, value);
        value
    }

    /// Number of cached values (base cases included).
    #[must_use]
    pub fn len(&self) -> usize {
        self.memo.len()
    }

    /// Whether the cache is empty (never true: base cases are seeded).
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.memo.is_empty()
    }
}

impl Default for FibCache {
    fn default() -> Self {
        Self::new()
    }
}

/// Iterative Fibonacci: two variables, one pass.
#[must_use]
pub fn fib_iterative(n: u32) -> u64 {
    if n == 0 {
        return 0;
    }
    let mut last: u64 = 0;
    let mut next: u64 = 1;
    for _ in 1..n {
        let sum = last + next;
        last = next;
        next = sum;
    }
    next
}

/// Iterator over the Fibonacci sequence from 0.
///
/// Yields `0, 1, 1, 2, 3, 5, …` and ends when the next pair no longer fits
/// in `u64`.
#[derive(Debug, Clone)]
pub struct FibSequence {
    current: Option<u64>,
    next: Option<u64>,
}

impl FibSequence {
    #[must_use]
    pub fn new() -> Self {
        Self {
            current: Some(0),
            next: Some(1),
        }
    }
}

impl Default for FibSequence {
    fn default() -> Self {
        Self::new()
    }
}

impl Iterator for FibSequence {
    type Item = u64;

    fn next(&mut self) -> Option<u64> {
        let current = self.current?;
        self.current = self.next;
        self.next = self.next.and_then(|next| current.checked_add(next));
        Some(current)
    }
}
