//! Points, point arithmetic, and orthants.
//!
//! - `Point`: immutable f64 vector with bitwise value equality.
//! - `points`: pure elementwise operations plus the cache-backed `Points`.
//! - `OrthantCatalog`: orthant sign vectors and counts, memoized per instance.

mod orthants;
mod point;
pub mod points;

pub use orthants::OrthantCatalog;
pub use point::Point;
pub use points::Points;
