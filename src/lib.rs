#![doc = include_str!("../README.md")]
#![warn(missing_docs)]

use std::cmp::Ordering;
use std::fmt;

/// Median of a sequence, together with where it came from
///
/// Produced by [`median_with_indices`]. The report pairs the median value
/// with the original position(s) of the element(s) that were averaged to
/// produce it, so the median can be traced back into the input sequence.
///
/// A report is immutable once computed: its fields are private and no
/// method takes `&mut self`, so binding one with a plain `let` guarantees
/// it cannot be overwritten or partially reused afterwards.
#[derive(Debug, Clone, PartialEq)]
pub struct MedianReport {
    /// The median, or `None` when the input was empty
    value: Option<f64>,

    /// Original indices of the central element(s), in selection order
    ///
    /// Holds one index for odd-length input, two for even-length input
    /// (the element ranked higher in the descending order first), and
    /// none for empty input.
    indices: Vec<usize>,
}

impl MedianReport {
    /// The median value, or `None` if the input was empty
    pub fn value(&self) -> Option<f64> {
        self.value
    }

    /// The median value, with the empty case collapsed to [`f64::NAN`]
    ///
    /// Convenient when the caller wants a plain number and treats NaN as
    /// "no data", e.g. for printing.
    pub fn value_or_nan(&self) -> f64 {
        self.value.unwrap_or(f64::NAN)
    }

    /// Original indices of the element(s) the median was computed from
    ///
    /// One index for odd-length input, two for even-length input, none
    /// for empty input. Indexing the input sequence at these positions
    /// and averaging reproduces [`Self::value`] exactly.
    pub fn indices(&self) -> &[usize] {
        &self.indices
    }

    /// Whether a median exists, i.e. whether the input was non-empty
    pub fn is_defined(&self) -> bool {
        self.value.is_some()
    }
}

impl fmt::Display for MedianReport {
    /// Renders the report as a single line in the form
    /// `median_value=0.5 indices=[5, 4]`
    ///
    /// The undefined case renders its NaN sentinel: `median_value=NaN indices=[]`.
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "median_value={} indices=[", self.value_or_nan())?;
        for (nth, index) in self.indices.iter().enumerate() {
            if nth > 0 {
                write!(f, ", ")?;
            }
            write!(f, "{index}")?;
        }
        write!(f, "]")
    }
}

/// Computes the median of `elements` and reports which elements produced it
///
/// The elements are paired with their positions, stable-sorted by value in
/// descending order, and the central position(s) of that order are
/// selected: the single middle element for odd-length input, or the two
/// middle elements (averaged) for even-length input. The report carries
/// the median alongside the original index of each selected element.
///
/// Ties are resolved by sort stability: equal values keep their input
/// order, so when duplicates straddle the middle, the earlier index is the
/// one reported.
///
/// An empty slice yields a defined degenerate report (no value, no
/// indices) rather than an error. NaN values are kept and compare as equal
/// to every neighbor; if any are present a warning is emitted, since a NaN
/// that lands in the middle makes the median NaN as well.
///
/// ```
/// let report = argmedian::median_with_indices(&[3.0, 1.0, 2.0]);
///
/// assert_eq!(report.value(), Some(2.0));
/// assert_eq!(report.indices(), &[2]);
/// ```
pub fn median_with_indices(elements: &[f64]) -> MedianReport {
    if elements.is_empty() {
        // Degenerate case: nothing to average, nothing to point at
        return MedianReport {
            value: None,
            indices: Vec::new(),
        };
    }

    let nan_count = elements.iter().filter(|v| v.is_nan()).count();
    if nan_count > 0 {
        #[cfg(feature = "log")]
        log::warn!(
            "Got {} NaN value(s) in the input. These sort as equal to their neighbors and may surface as the median.",
            nan_count
        );

        #[cfg(not(feature = "log"))]
        eprintln!(
            "Got {} NaN value(s) in the input. These sort as equal to their neighbors and may surface as the median.",
            nan_count
        );
    }

    // Pair every value with its original position, then stable-sort the
    // pairs by value, descending. Stability keeps equal values in input
    // order, which pins down which index gets reported when duplicates
    // straddle the middle.
    let mut ranked: Vec<(usize, f64)> = elements.iter().copied().enumerate().collect();
    ranked.sort_by(|a, b| b.1.partial_cmp(&a.1).unwrap_or(Ordering::Equal));

    let n = ranked.len();
    if n % 2 == 1 {
        // Odd length: the middle of the sorted order is the median
        let (index, value) = ranked[n / 2];

        MedianReport {
            value: Some(value),
            indices: vec![index],
        }
    } else {
        // Even length: average the two middle elements, reporting the
        // higher-ranked one first
        let (upper_index, upper_value) = ranked[n / 2 - 1];
        let (lower_index, lower_value) = ranked[n / 2];

        MedianReport {
            value: Some((upper_value + lower_value) / 2.0),
            indices: vec![upper_index, lower_index],
        }
    }
}

/// Computes just the median of `elements`
///
/// Convenience wrapper around [`median_with_indices`] for callers that do
/// not care which elements the median came from. Returns `None` for an
/// empty slice.
pub fn median(elements: &[f64]) -> Option<f64> {
    median_with_indices(elements).value()
}
