//! An example showcasing how the reported indices track element positions
//!
//! Permuting the input never changes the median value, but it does move
//! the contributing elements, and the report follows them

use argmedian::median_with_indices;

/// Some sample data to calculate the median for
///
/// Note that the exact median is 0.5
const DATA: [f64; 6] = [1.2, 1.1, -0.1, -0.2, 0.0, 1.0];

fn main() {
    let original = median_with_indices(&DATA);
    println!("elements={:?}", DATA);
    println!("{}", original);

    // Reverse the same elements and compute again
    let reversed: Vec<f64> = DATA.iter().rev().copied().collect();
    let permuted = median_with_indices(&reversed);
    println!("elements={:?}", reversed);
    println!("{}", permuted);

    // The median itself does not care about ordering
    assert_eq!(original.value(), permuted.value());
    println!(
        "Median agrees across permutations: {}",
        original.value_or_nan()
    );

    // But the indices follow the elements to their new positions
    for &index in permuted.indices() {
        println!(
            "Contributing element now at reversed[{index}] = {}",
            reversed[index]
        );
    }
}
