//! Character-level matching-blocks ratio.
//!
//! The longest common contiguous block of the two sequences is located first; the procedure
//! then recurses into the unmatched regions to its left and right. Among blocks of equal
//! length the one starting earliest in `a` wins, then earliest in `b`. The ratio is
//! `2 * matched / (len(a) + len(b))`.

use std::collections::HashMap;

/// Similarity ratio of two strings, measured in Unicode scalar values. Two empty strings score `1.0`.
pub fn sequence_ratio(a: &str, b: &str) -> f64 {
    let a: Vec<char> = a.chars().collect();
    let b: Vec<char> = b.chars().collect();

    let total = a.len() + b.len();
    if total == 0 {
        return 1.0;
    }
    2.0 * matching_characters(&a, &b) as f64 / total as f64
}

/// Total size of all matching blocks between `a` and `b`.
pub fn matching_characters<T>(a: &[T], b: &[T]) -> usize
where
    T: Eq + std::hash::Hash,
{
    let mut b_positions: HashMap<&T, Vec<usize>> = HashMap::new();
    for (j, item) in b.iter().enumerate() {
        b_positions.entry(item).or_default().push(j);
    }

    let mut matched = 0;
    let mut pending = vec![(0, a.len(), 0, b.len())];

    while let Some((a_lo, a_hi, b_lo, b_hi)) = pending.pop() {
        let block = longest_match(a, &b_positions, a_lo, a_hi, b_lo, b_hi);
        if block.size == 0 {
            continue;
        }
        matched += block.size;

        if a_lo < block.a && b_lo < block.b {
            pending.push((a_lo, block.a, b_lo, block.b));
        }
        if block.a + block.size < a_hi && block.b + block.size < b_hi {
            pending.push((block.a + block.size, a_hi, block.b + block.size, b_hi));
        }
    }

    matched
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
struct Block {
    a: usize,
    b: usize,
    size: usize,
}

fn longest_match<T>(
    a: &[T],
    b_positions: &HashMap<&T, Vec<usize>>,
    a_lo: usize,
    a_hi: usize,
    b_lo: usize,
    b_hi: usize,
) -> Block
where
    T: Eq + std::hash::Hash,
{
    let mut best = Block {
        a: a_lo,
        b: b_lo,
        size: 0,
    };
    // run_len[j] = length of the match ending at a[i - 1], b[j]
    let mut run_len: HashMap<usize, usize> = HashMap::new();

    for (i, item) in a.iter().enumerate().take(a_hi).skip(a_lo) {
        let mut next_run_len = HashMap::new();
        if let Some(positions) = b_positions.get(item) {
            for &j in positions {
                if j < b_lo {
                    continue;
                }
                if j >= b_hi {
                    break;
                }
                let k = j
                    .checked_sub(1)
                    .and_then(|prev| run_len.get(&prev))
                    .copied()
                    .unwrap_or(0)
                    + 1;
                next_run_len.insert(j, k);
                if k > best.size {
                    best = Block {
                        a: i + 1 - k,
                        b: j + 1 - k,
                        size: k,
                    };
                }
            }
        }
        run_len = next_run_len;
    }

    best
}
