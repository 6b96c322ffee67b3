//! Orthant enumeration and small point/space utilities.
//!
//! - `combinations`: lazy Cartesian product (`ListCombinations`).
//! - `geometry`: `Point`, elementwise point arithmetic, `OrthantCatalog`.
//! - `cache`: the concurrent memo cache behind the catalog.
//! - `spatial`, `random`: haversine distance and uniform random pick.
//!
//! Caches are owned by the values that use them (`OrthantCatalog`, `Points`);
//! there is no process-wide state.

pub mod cache;
pub mod cfg;
pub mod combinations;
pub mod geometry;
pub mod random;
pub mod spatial;

/// Library version string.
pub const VERSION: &str = env!("CARGO_PKG_VERSION");

pub use combinations::{CombinationError, ListCombinations};
pub use geometry::{OrthantCatalog, Point, Points};

/// Common exports for quick imports in callers.
pub mod prelude {
    pub use crate::cfg::{EARTH_RADIUS_M, MAX_DIMS};
    pub use crate::combinations::{CombinationError, ListCombinations};
    pub use crate::geometry::points::{
        compare, distance, distance_abs, is_dominates, multiply, negate, plus, translate,
        trim_relative,
    };
    pub use crate::geometry::{OrthantCatalog, Point, Points};
    pub use crate::random::{rand_peek, rand_peek_set};
    pub use crate::spatial::haversine_distance;
}
