//! Immutable n-dimensional point.

use nalgebra::DVector;
use std::fmt;
use std::hash::{Hash, Hasher};

/// A point in an n-dimensional metric space (`n >= 1`).
///
/// Equality and hashing compare coordinates bitwise with all NaNs treated as
/// one value, so `Point` is usable as a map key: `NaN == NaN` holds (whatever
/// the sign or payload) and `0.0 != -0.0`.
#[derive(Clone)]
pub struct Point {
    v: DVector<f64>,
}

impl Point {
    /// Pre: `coords` is non-empty.
    pub fn new(coords: Vec<f64>) -> Self {
        assert!(!coords.is_empty(), "a point needs at least one coordinate");
        Self {
            v: DVector::from_vec(coords),
        }
    }

    pub fn from_slice(coords: &[f64]) -> Self {
        Self::new(coords.to_vec())
    }

    /// Origin of a `dims`-dimensional space.
    pub fn zeros(dims: usize) -> Self {
        assert!(dims > 0, "a point needs at least one coordinate");
        Self {
            v: DVector::zeros(dims),
        }
    }

    pub(crate) fn from_vector(v: DVector<f64>) -> Self {
        assert!(!v.is_empty(), "a point needs at least one coordinate");
        Self { v }
    }

    #[inline]
    pub fn dims(&self) -> usize {
        self.v.len()
    }

    /// Coordinate on dimension `dim` (first dimension is 0).
    #[inline]
    pub fn coord(&self, dim: usize) -> f64 {
        self.v[dim]
    }

    #[inline]
    pub fn coords(&self) -> &[f64] {
        self.v.as_slice()
    }

    #[inline]
    pub fn as_vector(&self) -> &DVector<f64> {
        &self.v
    }

    pub fn to_vec(&self) -> Vec<f64> {
        self.coords().to_vec()
    }
}

/// Bit pattern used for equality and hashing: every NaN collapses to one value,
/// signed zeros stay distinct.
#[inline]
fn canonical_bits(x: f64) -> u64 {
    if x.is_nan() {
        f64::NAN.to_bits()
    } else {
        x.to_bits()
    }
}

impl PartialEq for Point {
    fn eq(&self, other: &Self) -> bool {
        self.dims() == other.dims()
            && self
                .coords()
                .iter()
                .zip(other.coords())
                .all(|(&a, &b)| canonical_bits(a) == canonical_bits(b))
    }
}

impl Eq for Point {}

impl Hash for Point {
    fn hash<H: Hasher>(&self, state: &mut H) {
        self.dims().hash(state);
        for c in self.coords() {
            canonical_bits(*c).hash(state);
        }
    }
}

impl From<Vec<f64>> for Point {
    fn from(coords: Vec<f64>) -> Self {
        Self::new(coords)
    }
}

impl fmt::Debug for Point {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "Point{:?}", self.coords())
    }
}

impl fmt::Display for Point {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        fmt::Debug::fmt(self, f)
    }
}
