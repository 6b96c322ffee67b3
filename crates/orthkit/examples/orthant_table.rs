//! Print the orthant numbering for small dimensions and mirror a sample point.
//!
//! Run with `cargo run -p orthkit --example orthant_table`.

use orthkit::prelude::*;

fn main() {
    let points = Points::new();
    for dims in 1..=3 {
        println!("dims = {dims}");
        for (i, sign) in points.catalog().all_orthant_signs(dims).iter().enumerate() {
            println!("  orthant {:>2}: {sign}", i + 1);
        }
    }

    let p = Point::new(vec![1.0, 4.0]);
    let origin = Point::new(vec![2.0, 2.0]);
    for k in 1..=points.catalog().orthant_count(2) {
        println!("{p} -> orthant {k} around {origin}: {}", points.to_orthant(&p, &origin, k));
    }
}
