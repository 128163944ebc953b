//! Longest common substring scoring.
//!
//! Same grid shape as [`super::sequence`], but a mismatch resets the cell to
//! zero so only contiguous runs accumulate:
//!
//! ```text
//! cell[i][j] = cell[i-1][j-1] + 1  if a[i-1] == b[j-1]
//!            = 0                   otherwise
//! ```
//!
//! The score is the largest cell seen anywhere, not the final cell.

/// Length of the longest common contiguous run of two strings, by `char`.
///
/// ```
/// use postal_ocr::matching::substring::longest_common_substring_len;
///
/// assert_eq!(longest_common_substring_len("XX123 MAINYY", "123 MAIN ST"), 8);
/// ```
#[must_use]
pub fn longest_common_substring_len(a: &str, b: &str) -> usize {
    let a: Vec<char> = a.chars().collect();
    let b: Vec<char> = b.chars().collect();
    longest_common_substring_len_slices(&a, &b)
}

/// Longest common substring length over arbitrary slices.
#[must_use]
pub fn longest_common_substring_len_slices<T: PartialEq>(a: &[T], b: &[T]) -> usize {
    let (outer, inner) = if a.len() >= b.len() { (a, b) } else { (b, a) };
    if inner.is_empty() {
        return 0;
    }

    let width = inner.len() + 1;
    let mut prev = vec![0usize; width];
    let mut curr = vec![0usize; width];
    let mut best = 0usize;

    for x in outer {
        for (j, y) in inner.iter().enumerate() {
            if x == y {
                let run = prev[j] + 1;
                curr[j + 1] = run;
                best = best.max(run);
            } else {
                curr[j + 1] = 0;
            }
        }
        std::mem::swap(&mut prev, &mut curr);
    }

    best
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::matching::sequence::lcs_len;

    fn substring_full_grid(a: &str, b: &str) -> usize {
        let a: Vec<char> = a.chars().collect();
        let b: Vec<char> = b.chars().collect();
        let mut grid = vec![vec![0usize; b.len() + 1]; a.len() + 1];
        let mut best = 0;
        for i in 1..=a.len() {
            for j in 1..=b.len() {
                if a[i - 1] == b[j - 1] {
                    grid[i][j] = grid[i - 1][j - 1] + 1;
                    best = best.max(grid[i][j]);
                }
            }
        }
        best
    }

    const SAMPLES: &[&str] = &[
        "",
        "Z",
        "123 MAIN ST",
        "123 MAIN STREET",
        "456 OAK AVE",
        "I23 MA1N 5T SPRINGFIELD",
        "FLAT 2 45 HIGH STREETLONDON",
        "45 HIGH STREET LONDON",
        "ABCABCABC",
        "CBACBA",
        "ÉCOLE 7 RUE DU LAC",
    ];

    #[test]
    fn test_known_values() {
        assert_eq!(longest_common_substring_len("ABABC", "BABCA"), 4);
        assert_eq!(longest_common_substring_len("ABC", "XYZ"), 0);
        assert_eq!(longest_common_substring_len("123 MAIN ST", "123 MAIN STREET"), 11);
        assert_eq!(longest_common_substring_len("123 MAIN ST", "456 OAK AVE"), 1);
    }

    #[test]
    fn test_empty_inputs() {
        assert_eq!(longest_common_substring_len("", ""), 0);
        assert_eq!(longest_common_substring_len("", "456 OAK AVE"), 0);
        assert_eq!(longest_common_substring_len("456 OAK AVE", ""), 0);
    }

    #[test]
    fn test_best_run_not_final_cell() {
        // Longest run sits at the start of both strings; the last characters differ
        assert_eq!(longest_common_substring_len("HIGHX", "HIGHY"), 4);
    }

    #[test]
    fn test_identity_is_length() {
        for s in SAMPLES {
            assert_eq!(longest_common_substring_len(s, s), s.chars().count(), "input: {s:?}");
        }
    }

    #[test]
    fn test_symmetric() {
        for a in SAMPLES {
            for b in SAMPLES {
                assert_eq!(
                    longest_common_substring_len(a, b),
                    longest_common_substring_len(b, a),
                    "inputs: {a:?}, {b:?}"
                );
            }
        }
    }

    #[test]
    fn test_matches_full_grid() {
        for a in SAMPLES {
            for b in SAMPLES {
                assert_eq!(
                    longest_common_substring_len(a, b),
                    substring_full_grid(a, b),
                    "inputs: {a:?}, {b:?}"
                );
            }
        }
    }

    #[test]
    fn test_never_exceeds_subsequence() {
        for a in SAMPLES {
            for b in SAMPLES {
                assert!(
                    longest_common_substring_len(a, b) <= lcs_len(a, b),
                    "inputs: {a:?}, {b:?}"
                );
            }
        }
    }
}
