//! Natural-breaks (Jenks) classification.
//!
//! `Breakpoints::compute` chooses class boundaries that minimize within-class
//! variance over a numeric sample; `classify` maps a value back to a class
//! index. Classification is pure and total: every input, including values far
//! outside the sample range, yields either a valid class or `NoData`.

use serde::{Deserialize, Serialize};
use tracing::debug;

/// Result of classifying one value against a breakpoint sequence.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ClassIndex {
    /// Zero-based class index in `[0, class_count - 1]`.
    Class(usize),
    /// Missing or non-finite value, or no breakpoints available.
    NoData,
}

impl ClassIndex {
    /// The index, if this is a data-bearing class.
    pub fn index(&self) -> Option<usize> {
        match self {
            ClassIndex::Class(i) => Some(*i),
            ClassIndex::NoData => None,
        }
    }

    /// Clamp a data-bearing class to an upper bound. Guards palette and
    /// matrix lookups when the classifier degraded its class count.
    pub fn clamp(self, max_index: usize) -> ClassIndex {
        match self {
            ClassIndex::Class(i) => ClassIndex::Class(i.min(max_index)),
            ClassIndex::NoData => ClassIndex::NoData,
        }
    }
}

/// An ordered, non-decreasing sequence of k+1 boundaries defining k classes.
///
/// Immutable once computed; the first entry is the sample minimum and the
/// last the sample maximum.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Breakpoints(Vec<f64>);

impl Breakpoints {
    /// Compute natural breaks for `k` classes over a sample.
    ///
    /// Non-finite values are ignored. Returns `None` when no finite values
    /// remain. When the sample has fewer values than `k`, the class count
    /// degrades to the sample size; duplicate sample values may produce
    /// repeated boundaries, which `classify` resolves to the lowest class.
    pub fn compute(sample: &[f64], k: usize) -> Option<Breakpoints> {
        let mut values: Vec<f64> = sample.iter().copied().filter(|v| v.is_finite()).collect();
        if values.is_empty() {
            return None;
        }
        values.sort_by(|a, b| a.partial_cmp(b).unwrap_or(std::cmp::Ordering::Equal));

        let k = k.max(1).min(values.len());
        if k == 1 || values.len() == 1 {
            return Some(Breakpoints(vec![values[0], values[values.len() - 1]]));
        }

        let bounds = jenks_breaks(&values, k);
        debug!(classes = k, sample = values.len(), "computed natural breaks");
        Some(Breakpoints(bounds))
    }

    /// Number of classes (one less than the boundary count).
    pub fn class_count(&self) -> usize {
        self.0.len() - 1
    }

    /// The boundary values, length `class_count() + 1`.
    pub fn bounds(&self) -> &[f64] {
        &self.0
    }

    /// Lower and upper bound of one class.
    pub fn class_bounds(&self, class: usize) -> Option<(f64, f64)> {
        if class < self.class_count() {
            Some((self.0[class], self.0[class + 1]))
        } else {
            None
        }
    }

    pub fn min(&self) -> f64 {
        self.0[0]
    }

    pub fn max(&self) -> f64 {
        self.0[self.0.len() - 1]
    }

    /// Classify a value against these breakpoints.
    ///
    /// Scans closed intervals in order, so a value sitting on a shared
    /// boundary belongs to the lower class. Finite values that match no
    /// interval clamp to the last class; missing and non-finite values are
    /// `NoData`.
    pub fn classify(&self, value: Option<f64>) -> ClassIndex {
        let v = match value {
            Some(v) if v.is_finite() => v,
            _ => return ClassIndex::NoData,
        };

        for i in 0..self.class_count() {
            if v >= self.0[i] && v <= self.0[i + 1] {
                return ClassIndex::Class(i);
            }
        }
        ClassIndex::Class(self.class_count() - 1)
    }
}

/// Classify against optional breakpoints: absent breakpoints mean the whole
/// field had no usable sample, so every value is `NoData`.
pub fn classify(breaks: Option<&Breakpoints>, value: Option<f64>) -> ClassIndex {
    match breaks {
        Some(b) => b.classify(value),
        None => ClassIndex::NoData,
    }
}

/// Jenks optimization over sorted values. `k` is in `[2, values.len()]`.
///
/// Standard dynamic program over two matrices: `lower_limits[l][j]` holds the
/// optimal lower class limit (1-based rank) for the first `l` values split
/// into `j` classes, `variance[l][j]` the corresponding goodness-of-fit.
fn jenks_breaks(values: &[f64], k: usize) -> Vec<f64> {
    let n = values.len();
    let mut lower_limits = vec![vec![0usize; k + 1]; n + 1];
    let mut variance = vec![vec![0.0f64; k + 1]; n + 1];

    for j in 1..=k {
        lower_limits[1][j] = 1;
        for l in 2..=n {
            variance[l][j] = f64::INFINITY;
        }
    }

    for l in 2..=n {
        let mut sum = 0.0;
        let mut sum_squares = 0.0;
        let mut w = 0.0;
        let mut within_variance = 0.0;

        for m in 1..=l {
            let lower = l - m + 1;
            let val = values[lower - 1];

            w += 1.0;
            sum += val;
            sum_squares += val * val;
            within_variance = sum_squares - (sum * sum) / w;

            if lower > 1 {
                for j in 2..=k {
                    let candidate = within_variance + variance[lower - 1][j - 1];
                    if variance[l][j] >= candidate {
                        lower_limits[l][j] = lower;
                        variance[l][j] = candidate;
                    }
                }
            }
        }

        lower_limits[l][1] = 1;
        variance[l][1] = within_variance;
    }

    // Walk the lower-limit matrix back from the full sample to recover the
    // class minima; endpoints are the sample extremes.
    let mut bounds = vec![0.0f64; k + 1];
    bounds[0] = values[0];
    bounds[k] = values[n - 1];

    let mut rank = n;
    for j in (2..=k).rev() {
        let lower = lower_limits[rank][j];
        bounds[j - 1] = values[lower - 2];
        rank = lower - 1;
    }

    bounds
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_breaks_cover_sample_range() {
        let sample = [4.0, 1.0, 9.0, 2.5, 7.0, 3.0, 8.5];
        let breaks = Breakpoints::compute(&sample, 3).unwrap();

        assert_eq!(breaks.class_count(), 3);
        assert_eq!(breaks.min(), 1.0);
        assert_eq!(breaks.max(), 9.0);
    }

    #[test]
    fn test_breaks_non_decreasing() {
        let sample = [1.0, 2.0, 2.0, 3.0, 100.0];
        let breaks = Breakpoints::compute(&sample, 5).unwrap();

        assert_eq!(breaks.bounds().len(), 6);
        assert_eq!(breaks.min(), 1.0);
        assert_eq!(breaks.max(), 100.0);
        for pair in breaks.bounds().windows(2) {
            assert!(pair[0] <= pair[1], "bounds must be non-decreasing");
        }
    }

    #[test]
    fn test_clear_clusters() {
        let sample = [1.0, 1.1, 1.2, 10.0, 10.1, 10.2, 50.0, 50.5, 51.0];
        let breaks = Breakpoints::compute(&sample, 3).unwrap();

        // Each cluster lands in its own class.
        assert_eq!(breaks.classify(Some(1.1)), ClassIndex::Class(0));
        assert_eq!(breaks.classify(Some(10.1)), ClassIndex::Class(1));
        assert_eq!(breaks.classify(Some(50.5)), ClassIndex::Class(2));
    }

    #[test]
    fn test_degraded_class_count() {
        let breaks = Breakpoints::compute(&[5.0, 6.0], 5).unwrap();
        assert!(breaks.class_count() <= 2);
        assert_eq!(breaks.min(), 5.0);
        assert_eq!(breaks.max(), 6.0);
    }

    #[test]
    fn test_identical_value_sample() {
        let breaks = Breakpoints::compute(&[7.0, 7.0, 7.0], 5).unwrap();
        assert!(breaks.bounds().len() >= 2);
        assert!(breaks.bounds().iter().all(|&b| b == 7.0));
        assert_eq!(breaks.classify(Some(7.0)), ClassIndex::Class(0));
    }

    #[test]
    fn test_single_value_sample() {
        let breaks = Breakpoints::compute(&[7.0], 5).unwrap();
        assert_eq!(breaks.bounds(), [7.0, 7.0]);
        assert_eq!(breaks.classify(Some(7.0)), ClassIndex::Class(0));
    }

    #[test]
    fn test_empty_and_non_finite_samples() {
        assert!(Breakpoints::compute(&[], 5).is_none());
        assert!(Breakpoints::compute(&[f64::NAN, f64::INFINITY], 5).is_none());
    }

    #[test]
    fn test_classify_containment() {
        let sample = [2.0, 4.0, 8.0, 16.0, 32.0, 64.0];
        let breaks = Breakpoints::compute(&sample, 3).unwrap();

        for &v in &sample {
            match breaks.classify(Some(v)) {
                ClassIndex::Class(i) => {
                    let (lo, hi) = breaks.class_bounds(i).unwrap();
                    assert!(lo <= v && v <= hi, "{v} outside class {i} [{lo}, {hi}]");
                }
                ClassIndex::NoData => panic!("sample value {v} classified as no data"),
            }
        }
    }

    #[test]
    fn test_shared_boundary_belongs_to_lower_class() {
        let breaks = Breakpoints(vec![0.0, 10.0, 20.0, 30.0]);
        assert_eq!(breaks.classify(Some(10.0)), ClassIndex::Class(0));
        assert_eq!(breaks.classify(Some(20.0)), ClassIndex::Class(1));
    }

    #[test]
    fn test_out_of_range_clamps_to_last_class() {
        let breaks = Breakpoints(vec![0.0, 10.0, 20.0]);
        assert_eq!(breaks.classify(Some(1e12)), ClassIndex::Class(1));
        assert_eq!(breaks.classify(Some(-1e12)), ClassIndex::Class(1));
    }

    #[test]
    fn test_missing_values_are_no_data() {
        let breaks = Breakpoints(vec![0.0, 10.0, 20.0]);
        assert_eq!(breaks.classify(None), ClassIndex::NoData);
        assert_eq!(breaks.classify(Some(f64::NAN)), ClassIndex::NoData);
        assert_eq!(classify(None, Some(5.0)), ClassIndex::NoData);
    }

    #[test]
    fn test_classify_is_pure() {
        let breaks = Breakpoints::compute(&[1.0, 5.0, 9.0, 13.0], 2).unwrap();
        let first = breaks.classify(Some(5.0));
        let second = breaks.classify(Some(5.0));
        assert_eq!(first, second);
    }

    #[test]
    fn test_clamp() {
        assert_eq!(ClassIndex::Class(9).clamp(4), ClassIndex::Class(4));
        assert_eq!(ClassIndex::Class(2).clamp(4), ClassIndex::Class(2));
        assert_eq!(ClassIndex::NoData.clamp(4), ClassIndex::NoData);
    }
}
