//! Title similarity scoring
//!
//! Ratcliff/Obershelp matching ratio: find the longest common contiguous
//! block, recurse on the unmatched left and right remainders, and relate
//! the matched character count to the combined length.

/// Similarity of two titles in `[0.0, 1.0]`, ignoring case
///
/// Returns `0.0` when either side is empty.
///
/// # Examples
/// ```
/// use testcase_ai_common::similarity;
///
/// assert_eq!(similarity("Login", "LOGIN"), 1.0);
/// assert!(similarity("Search product", "Search for a product") > 0.8);
/// ```
pub fn similarity(a: &str, b: &str) -> f64 {
    let a: Vec<char> = a.to_lowercase().chars().collect();
    let b: Vec<char> = b.to_lowercase().chars().collect();

    if a.is_empty() || b.is_empty() {
        return 0.0;
    }

    let matched = matching_chars(&a, &b);
    2.0 * matched as f64 / (a.len() + b.len()) as f64
}

/// Total length of all matching blocks between `a` and `b`
fn matching_chars(a: &[char], b: &[char]) -> usize {
    let mut total = 0;
    let mut pending = vec![(0, a.len(), 0, b.len())];

    while let Some((alo, ahi, blo, bhi)) = pending.pop() {
        let (i, j, size) = longest_match(a, b, alo, ahi, blo, bhi);
        if size == 0 {
            continue;
        }
        total += size;

        if alo < i && blo < j {
            pending.push((alo, i, blo, j));
        }
        if i + size < ahi && j + size < bhi {
            pending.push((i + size, ahi, j + size, bhi));
        }
    }

    total
}

/// Longest common block of `a[alo..ahi]` and `b[blo..bhi]`
///
/// Returns `(i, j, size)`. Among equally long blocks the one starting
/// earliest in `a` wins, then earliest in `b`.
fn longest_match(
    a: &[char],
    b: &[char],
    alo: usize,
    ahi: usize,
    blo: usize,
    bhi: usize,
) -> (usize, usize, usize) {
    let width = bhi - blo;
    let mut best = (alo, blo, 0);

    // run[k + 1] = length of the common suffix ending at (i, blo + k)
    let mut prev = vec![0usize; width + 1];
    let mut curr = vec![0usize; width + 1];

    for i in alo..ahi {
        for k in 0..width {
            let j = blo + k;
            curr[k + 1] = if a[i] == b[j] { prev[k] + 1 } else { 0 };

            let size = curr[k + 1];
            if size > best.2 {
                best = (i + 1 - size, j + 1 - size, size);
            }
        }
        std::mem::swap(&mut prev, &mut curr);
    }

    best
}
