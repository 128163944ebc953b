//! Longest common subsequence scoring.
//!
//! The classic recurrence fills an `(m+1) x (n+1)` grid where row 0 and
//! column 0 are zero and
//!
//! ```text
//! cell[i][j] = cell[i-1][j-1] + 1              if a[i-1] == b[j-1]
//!            = max(cell[i-1][j], cell[i][j-1])  otherwise
//! ```
//!
//! Only the final cell is needed, so two rows sized to the shorter input are
//! kept instead of the whole grid. Time stays `O(m * n)`.

/// Length of the longest common subsequence of two strings, by `char`.
///
/// ```
/// use postal_ocr::matching::sequence::lcs_len;
///
/// assert_eq!(lcs_len("ABCBDAB", "BDCABA"), 4);
/// assert_eq!(lcs_len("", "ANYTHING"), 0);
/// ```
#[must_use]
pub fn lcs_len(a: &str, b: &str) -> usize {
    let a: Vec<char> = a.chars().collect();
    let b: Vec<char> = b.chars().collect();
    lcs_len_slices(&a, &b)
}

/// Longest common subsequence length over arbitrary slices.
#[must_use]
pub fn lcs_len_slices<T: PartialEq>(a: &[T], b: &[T]) -> usize {
    // Recurrence is symmetric: iterate the longer input, store rows of the shorter.
    let (outer, inner) = if a.len() >= b.len() { (a, b) } else { (b, a) };
    if inner.is_empty() {
        return 0;
    }

    let width = inner.len() + 1;
    let mut prev = vec![0usize; width];
    let mut curr = vec![0usize; width];

    for x in outer {
        for (j, y) in inner.iter().enumerate() {
            curr[j + 1] = if x == y {
                prev[j] + 1
            } else {
                prev[j + 1].max(curr[j])
            };
        }
        std::mem::swap(&mut prev, &mut curr);
    }

    prev[inner.len()]
}
