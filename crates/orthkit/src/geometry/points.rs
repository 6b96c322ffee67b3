//! Elementwise point arithmetic.
//!
//! Every binary operation requires both operands to have the same number of
//! dimensions and panics otherwise. All operations are pure and return a new
//! `Point`.
//!
//! Operations that need memoized data (the zero point, orthant signs) live on
//! [`Points`], which owns those caches.

use std::cmp::Ordering;
use std::sync::Arc;

use super::{OrthantCatalog, Point};
use crate::cache::MemoCache;

#[inline]
fn check_dims(p: &Point, o: &Point) {
    assert_eq!(
        p.dims(),
        o.dims(),
        "dimension mismatch: {} vs {}",
        p.dims(),
        o.dims()
    );
}

/// `p + o`.
pub fn plus(p: &Point, o: &Point) -> Point {
    check_dims(p, o);
    Point::from_vector(p.as_vector() + o.as_vector())
}

/// Coordinate-wise product `p ⊙ o`.
pub fn multiply(p: &Point, o: &Point) -> Point {
    check_dims(p, o);
    Point::from_vector(p.as_vector().component_mul(o.as_vector()))
}

pub fn negate(p: &Point) -> Point {
    Point::from_vector(p.as_vector().map(|x| -x))
}

/// Difference `p - o`. Example: `[1, 3]` from `[2, 0.5]` is `[-1, 2.5]`.
pub fn distance(p: &Point, o: &Point) -> Point {
    check_dims(p, o);
    Point::from_vector(p.as_vector() - o.as_vector())
}

/// Absolute difference `|p - o|`. Example: `[1, 3]` to `[2, 0.5]` is `[1, 2.5]`.
pub fn distance_abs(p: &Point, o: &Point) -> Point {
    check_dims(p, o);
    Point::from_vector((p.as_vector() - o.as_vector()).map(f64::abs))
}

/// Coordinates of `p` in a space whose origin is `origin`.
/// Example: `[5, 8]` against origin `[2, 2]` is `[3, 6]`.
pub fn translate(p: &Point, origin: &Point) -> Point {
    distance(p, origin)
}

/// Lexicographic comparison; the first differing coordinate decides.
pub fn compare(p: &Point, o: &Point) -> Ordering {
    check_dims(p, o);
    p.coords()
        .iter()
        .zip(o.coords())
        .map(|(a, b)| a.total_cmp(b))
        .find(|ord| ord.is_ne())
        .unwrap_or(Ordering::Equal)
}

/// `p` dominates `o` iff `p[d] >= o[d]` for every `d` and `p[d] > o[d]` for some `d`.
pub fn is_dominates(p: &Point, o: &Point) -> bool {
    check_dims(p, o);
    let pairs = || p.coords().iter().zip(o.coords());
    pairs().all(|(a, b)| a >= b) && pairs().any(|(a, b)| a > b)
}

/// Raise every coordinate below `origin` to the origin's value.
/// Example: `[1, 4]` against `[3, 2]` is `[3, 4]`.
pub fn trim_relative(p: &Point, origin: &Point) -> Point {
    check_dims(p, origin);
    Point::from_vector(
        p.as_vector()
            .zip_map(origin.as_vector(), |a, b| if a < b { b } else { a }),
    )
}

/// Point operations backed by memoized zero points and orthant signs.
#[derive(Debug)]
pub struct Points {
    catalog: Arc<OrthantCatalog>,
    zero_cache: MemoCache<usize, Point>,
}

impl Points {
    pub fn new() -> Self {
        Self::with_catalog(Arc::new(OrthantCatalog::new()))
    }

    /// Share an existing catalog (and its warm caches).
    pub fn with_catalog(catalog: Arc<OrthantCatalog>) -> Self {
        Self {
            catalog,
            zero_cache: MemoCache::new(),
        }
    }

    pub fn catalog(&self) -> &Arc<OrthantCatalog> {
        &self.catalog
    }

    /// The origin of a `dims`-dimensional space.
    pub fn zero(&self, dims: usize) -> Point {
        assert!(dims > 0, "dims must be positive");
        self.zero_cache.get_or_insert_with(dims, || Point::zeros(dims))
    }

    /// Clamp negative coordinates to zero. Example: `[-5, 1]` is `[0, 1]`.
    pub fn trim_negative(&self, p: &Point) -> Point {
        trim_relative(p, &self.zero(p.dims()))
    }

    /// Mirror `p` into orthant `orthant` around `origin`:
    /// `origin + |p - origin| ⊙ sign(orthant)`.
    ///
    /// Examples (origin `[2, 2]`): `[1, 4]` to orthant 1 is `[3, 4]`,
    /// to orthant 3 is `[1, 0]`.
    pub fn to_orthant(&self, p: &Point, origin: &Point, orthant: usize) -> Point {
        check_dims(p, origin);
        assert!(orthant > 0, "orthants are numbered from 1");
        let sign = self.catalog.orthant_sign(p.dims(), orthant);
        plus(origin, &multiply(&distance_abs(p, origin), &sign))
    }

    pub fn to_first_orthant(&self, p: &Point, origin: &Point) -> Point {
        self.to_orthant(p, origin, 1)
    }
}

impl Default for Points {
    fn default() -> Self {
        Self::new()
    }
}
