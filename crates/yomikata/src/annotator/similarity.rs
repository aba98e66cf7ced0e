//! Ratcliff/Obershelp string similarity.
//!
//! `similarity(a, b) = 2 * M / (len(a) + len(b))`, where `M` is the total length of the
//! matching blocks: the longest common contiguous block, then recursively the longest
//! blocks of the remainders on its left and right. Lengths are counted in characters.

use std::collections::HashMap;

/// Similarity ratio in `[0.0, 1.0]`; `1.0` when both strings are empty.
pub fn similarity(a: &str, b: &str) -> f64 {
  let a: Vec<char> = a.chars().collect();
  let b: Vec<char> = b.chars().collect();

  let total = a.len() + b.len();
  if total == 0 {
    return 1.0;
  }

  2.0 * matched_len(&a, &b) as f64 / total as f64
}

/// Sum of the lengths of all matching blocks between `a` and `b`.
fn matched_len(a: &[char], b: &[char]) -> usize {
  let mut b_index: HashMap<char, Vec<usize>> = HashMap::new();
  for (j, &c) in b.iter().enumerate() {
    b_index.entry(c).or_default().push(j);
  }

  // explicit stack instead of recursion; block order does not matter for the sum
  let mut pending = vec![(0, a.len(), 0, b.len())];
  let mut matched = 0;

  while let Some((alo, ahi, blo, bhi)) = pending.pop() {
    let (i, j, size) = longest_match(a, &b_index, alo, ahi, blo, bhi);
    if size == 0 {
      continue;
    }
    matched += size;
    if alo < i && blo < j {
      pending.push((alo, i, blo, j));
    }
    if i + size < ahi && j + size < bhi {
      pending.push((i + size, ahi, j + size, bhi));
    }
  }

  matched
}

/// Longest common block of `a[alo..ahi]` and `b[blo..bhi]` as `(i, j, size)`.
///
/// Among blocks of maximal size, the one starting earliest in `a` wins, then the one
/// starting earliest in `b`.
fn longest_match(
  a: &[char],
  b_index: &HashMap<char, Vec<usize>>,
  alo: usize,
  ahi: usize,
  blo: usize,
  bhi: usize,
) -> (usize, usize, usize) {
  let (mut best_i, mut best_j, mut best_size) = (alo, blo, 0);

  // run_len[j] = length of the common block ending at a[i - 1], b[j]
  let mut run_len: HashMap<usize, usize> = HashMap::new();

  for (i, c) in a.iter().enumerate().take(ahi).skip(alo) {
    let mut next_run_len = HashMap::new();
    let positions = b_index.get(c).map(Vec::as_slice).unwrap_or_default();

    for &j in positions {
      if j < blo {
        continue;
      }
      if j >= bhi {
        break;
      }
      let k = j.checked_sub(1).and_then(|prev| run_len.get(&prev)).copied().unwrap_or(0) + 1;
      next_run_len.insert(j, k);
      if k > best_size {
        best_i = i + 1 - k;
        best_j = j + 1 - k;
        best_size = k;
      }
    }

    run_len = next_run_len;
  }

  (best_i, best_j, best_size)
}
