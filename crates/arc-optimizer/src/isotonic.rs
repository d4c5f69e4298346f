//! Projection onto non-decreasing sequences.
//!
//! The unconstrained least-squares solution can assign a higher value to
//! an earlier-unlocking face. A progressive-unlock die must read as
//! "later face, at least as good", so the search projects every candidate
//! onto the nearest non-decreasing sequence (in the least-squares sense)
//! using pool-adjacent-violators: scan left to right, merging any block
//! whose mean falls below its predecessor's, then write each block's mean
//! back over its members. The projection is deterministic for a given
//! input.

/// Project `values` onto the nearest non-decreasing sequence.
pub fn project_non_decreasing(values: &[f64]) -> Vec<f64> {
    // Blocks of (sum, len); each block's members share its mean.
    let mut blocks: Vec<(f64, usize)> = Vec::with_capacity(values.len());
    for &v in values {
        blocks.push((v, 1));
        while blocks.len() > 1 {
            let (s_hi, n_hi) = blocks[blocks.len() - 1];
            let (s_lo, n_lo) = blocks[blocks.len() - 2];
            if s_lo / n_lo as f64 <= s_hi / n_hi as f64 {
                break;
            }
            blocks.pop();
            blocks.pop();
            blocks.push((s_lo + s_hi, n_lo + n_hi));
        }
    }

    let mut out = Vec::with_capacity(values.len());
    for (sum, len) in blocks {
        out.extend(std::iter::repeat_n(sum / len as f64, len));
    }
    out
}
