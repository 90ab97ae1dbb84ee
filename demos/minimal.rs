//! A basic example showing minimal usage
//!
//! We compute the median of a small dataset in one call, and print it
//! along with the positions of the elements it came from

use argmedian::median_with_indices;

/// Some sample data to calculate the median for
///
/// Note that the exact median is 0.5, averaged from the elements at
/// positions 5 and 4
const DATA: [f64; 6] = [1.2, 1.1, -0.1, -0.2, 0.0, 1.0];

fn main() {
    // One call computes the median and records where it came from
    let report = median_with_indices(&DATA);

    // One line per logical printout: the input, then the result
    println!("elements={:?}", DATA);
    println!("{}", report);
}
