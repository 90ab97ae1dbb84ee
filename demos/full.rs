//! A more fully-fledged example, showcasing every accessor on [`MedianReport`]
//!
//! We compute one report and read it back out in each of the supported
//! shapes, including the degenerate empty-input case

use argmedian::{median, median_with_indices, MedianReport};

/// Some sample data to calculate the median for
///
/// Note that the exact median is 2.0, contributed by the element at
/// position 2
const DATA: [f64; 3] = [3.0, 1.0, 2.0];

fn main() {
    // Bound once, read many times: the report has no mutating methods
    let report: MedianReport = median_with_indices(&DATA);

    // The value comes back as an Option; empty input would give None
    if let Some(value) = report.value() {
        println!("The median is {value}");
    }

    // Or as a plain number, with the empty case collapsed to NaN
    println!("As a sentinel-style number: {}", report.value_or_nan());

    // The indices point back into the original input
    for &index in report.indices() {
        println!("Contributing element: DATA[{index}] = {}", DATA[index]);
    }

    // We can also ask whether a median exists at all
    println!("Median is defined: {}", report.is_defined());

    // The whole report renders as one canonical line
    println!("{report}");

    // Empty input is not an error: it yields a degenerate report with no
    // value and no indices
    let empty = median_with_indices(&[]);
    println!("Empty input renders as: {empty}");
    println!("Empty input is defined: {}", empty.is_defined());

    // When only the value matters, there is a shorthand
    println!("Value-only shorthand: {:?}", median(&DATA));
}
