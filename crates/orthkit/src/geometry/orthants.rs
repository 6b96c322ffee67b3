//! Orthant sign vectors and counts, memoized per catalog.
//!
//! Purpose
//! - Map an orthant number `k` in `1..=2^dims` to the sign of each coordinate
//!   inside that orthant. Orthant 1 is all-positive; in 2D the numbering
//!   follows the quadrant convention (`[1,1]`, `[1,-1]`, `[-1,-1]`, `[-1,1]`).
//!
//! Model
//! - The ordering is built from the Cartesian product of `dims` copies of
//!   `[-1, 1]`, sorted lexicographically ascending, then rotated: the sorted
//!   list walked backwards for `2^dims / 2` entries, followed by its first
//!   `2^dims / 2` entries. The rotation fixes the numbering; a plain sort
//!   numbers the orthants differently.
//! - A miss for `(dims, k)` fills every orthant of `dims` at once.
//!
//! Notes
//! - Out-of-range arguments are programming errors and panic.

use super::Point;
use crate::cache::MemoCache;
use crate::cfg::MAX_DIMS;
use crate::combinations::ListCombinations;

/// Memoized orthant signs and counts. Share it behind an `Arc`.
#[derive(Debug, Default)]
pub struct OrthantCatalog {
    sign_cache: MemoCache<(usize, usize), Point>,
    count_cache: MemoCache<usize, usize>,
}

impl OrthantCatalog {
    pub fn new() -> Self {
        Self::default()
    }

    /// Signs of the coordinates in `orthant` (numbered from 1).
    ///
    /// Example (2D): orthant 1 is `[1, 1]`, orthant 3 is `[-1, -1]`.
    pub fn orthant_sign(&self, dims: usize, orthant: usize) -> Point {
        check_dims(dims);
        let count = self.orthant_count(dims);
        assert!(
            (1..=count).contains(&orthant),
            "orthant {orthant} out of range 1..={count} for {dims} dims"
        );
        if let Some(sign) = self.sign_cache.get(&(dims, orthant)) {
            return sign;
        }
        let mut all = self.fill(dims);
        all.swap_remove(orthant - 1)
    }

    /// All sign vectors of `dims`, element `k - 1` being orthant `k`.
    pub fn all_orthant_signs(&self, dims: usize) -> Vec<Point> {
        check_dims(dims);
        let count = self.orthant_count(dims);
        (1..=count)
            .map(|k| self.sign_cache.get(&(dims, k)))
            .collect::<Option<Vec<_>>>()
            .unwrap_or_else(|| self.fill(dims))
    }

    /// Number of orthants in a `dims`-dimensional space, `2^dims`.
    pub fn orthant_count(&self, dims: usize) -> usize {
        assert!(dims <= MAX_DIMS, "dims {dims} exceeds {MAX_DIMS}");
        self.count_cache.get_or_insert_with(dims, || 1usize << dims)
    }

    /// Number of dimensions whose signs are fully cached.
    pub fn cached_dims(&self) -> usize {
        (1..=MAX_DIMS)
            .filter(|&d| {
                self.count_cache
                    .get(&d)
                    .is_some_and(|count| self.sign_cache.contains_key(&(d, count)))
            })
            .count()
    }

    /// Compute the ordering outside any cache lock, then publish every entry.
    /// Entries another caller stored first win; both are equal anyway.
    fn fill(&self, dims: usize) -> Vec<Point> {
        let signs = canonical_signs(dims, self.orthant_count(dims));
        tracing::debug!(dims, orthants = signs.len(), "orthant sign cache fill");
        signs
            .into_iter()
            .enumerate()
            .map(|(i, sign)| self.sign_cache.insert_if_absent((dims, i + 1), sign))
            .collect()
    }
}

#[inline]
fn check_dims(dims: usize) {
    assert!(
        dims > 0 && dims <= MAX_DIMS,
        "dims must be in 1..={MAX_DIMS}, got {dims}"
    );
}

fn canonical_signs(dims: usize, count: usize) -> Vec<Point> {
    let mut signs: Vec<Vec<i8>> = ListCombinations::new(vec![[-1i8, 1]; dims])
        .expect("sign lists are non-empty")
        .collect();
    signs.sort();
    let half = count / 2;
    signs
        .iter()
        .rev()
        .take(half)
        .chain(signs.iter().take(half))
        .map(|s| Point::new(s.iter().map(|&x| f64::from(x)).collect()))
        .collect()
}
