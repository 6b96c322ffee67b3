//! Lazy Cartesian product of several lists.
//!
//! Purpose
//! - Walk every combination that picks one element from each input list,
//!   without materializing the product up front.
//!
//! Model
//! - The state is a mixed-radix counter: one digit per input list, digit `i`
//!   ranging over `0..=len(list_i) - 1`. Each advance adds one with carry,
//!   first list fastest (odometer order).
//! - The order is an implementation detail. Callers may rely only on "every
//!   combination exactly once".
//!
//! Notes
//! - `try_next` takes `&mut self`; an instance is single-owner and is dropped
//!   once exhausted (there is no reset).

use std::fmt;
use std::iter::FusedIterator;

/// Errors raised by [`ListCombinations`].
#[derive(Clone, Debug, PartialEq, Eq)]
pub enum CombinationError {
    /// No input lists were given.
    NoLists,
    /// Input list `index` has no elements.
    EmptyList { index: usize },
    /// The product size does not fit `usize`.
    TooManyCombinations,
    /// `try_next` was called after the last combination.
    Exhausted,
    /// Removal is not supported.
    Unsupported,
}

impl fmt::Display for CombinationError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::NoLists => write!(f, "at least one input list is required"),
            Self::EmptyList { index } => write!(f, "input list {index} is empty"),
            Self::TooManyCombinations => write!(f, "number of combinations overflows usize"),
            Self::Exhausted => write!(f, "no combinations left"),
            Self::Unsupported => write!(f, "removal is not supported"),
        }
    }
}

impl std::error::Error for CombinationError {}

/// Iterator over the Cartesian product of the input lists.
#[derive(Clone, Debug)]
pub struct ListCombinations<T> {
    input: Vec<Vec<T>>,
    /// Largest valid index into each input list.
    index_limits: Vec<usize>,
    /// Current digit per list; empty until the first advance.
    index_current: Vec<usize>,
    has_next_cache: bool,
    remaining: usize,
}

impl<T: Clone> ListCombinations<T> {
    /// Copy the input lists into a fresh generator.
    pub fn new<I, L>(lists: I) -> Result<Self, CombinationError>
    where
        I: IntoIterator<Item = L>,
        L: IntoIterator<Item = T>,
    {
        let mut input = Vec::new();
        let mut index_limits = Vec::new();
        for (index, list) in lists.into_iter().enumerate() {
            let list: Vec<T> = list.into_iter().collect();
            if list.is_empty() {
                return Err(CombinationError::EmptyList { index });
            }
            index_limits.push(list.len() - 1);
            input.push(list);
        }
        if input.is_empty() {
            return Err(CombinationError::NoLists);
        }
        let total = input
            .iter()
            .try_fold(1usize, |acc, list| acc.checked_mul(list.len()))
            .ok_or(CombinationError::TooManyCombinations)?;
        let mut combos = Self {
            input,
            index_limits,
            index_current: Vec::new(),
            has_next_cache: false,
            remaining: total,
        };
        combos.has_next_cache = combos.compute_has_next();
        Ok(combos)
    }

    /// Whether another combination can be produced.
    #[inline]
    pub fn has_next(&self) -> bool {
        self.has_next_cache
    }

    /// Produce the next combination, or `Exhausted` once all were produced.
    pub fn try_next(&mut self) -> Result<Vec<T>, CombinationError> {
        if !self.has_next() {
            return Err(CombinationError::Exhausted);
        }
        self.advance();
        self.has_next_cache = self.compute_has_next();
        self.remaining -= 1;
        Ok(self.current())
    }

    /// Always fails: combinations are read-only.
    pub fn remove(&mut self) -> Result<(), CombinationError> {
        Err(CombinationError::Unsupported)
    }

    /// Size of the full product, independent of progress.
    pub fn len_total(&self) -> usize {
        self.input.iter().map(Vec::len).product()
    }

    /// Add one with carry. The first advance only initializes the counter.
    fn advance(&mut self) {
        if self.index_current.is_empty() {
            self.index_current = vec![0; self.index_limits.len()];
            return;
        }
        let mut carry = 1;
        for (idx, &limit) in self.index_current.iter_mut().zip(&self.index_limits) {
            let next = *idx + carry;
            if next > limit {
                *idx = 0;
                carry = 1;
            } else {
                *idx = next;
                carry = 0;
                break;
            }
        }
    }

    /// More to come unless every digit sits at its limit.
    fn compute_has_next(&self) -> bool {
        self.index_current.is_empty()
            || self
                .index_limits
                .iter()
                .zip(&self.index_current)
                .any(|(limit, current)| limit > current)
    }

    fn current(&self) -> Vec<T> {
        self.index_current
            .iter()
            .zip(&self.input)
            .map(|(&i, list)| list[i].clone())
            .collect()
    }
}

impl<T: Clone> Iterator for ListCombinations<T> {
    type Item = Vec<T>;

    fn next(&mut self) -> Option<Self::Item> {
        self.try_next().ok()
    }

    fn size_hint(&self) -> (usize, Option<usize>) {
        (self.remaining, Some(self.remaining))
    }
}

impl<T: Clone> ExactSizeIterator for ListCombinations<T> {}

impl<T: Clone> FusedIterator for ListCombinations<T> {}

#[cfg(test)]
mod tests {
    use super::*;
    use proptest::prelude::*;
    use std::collections::HashSet;

    #[test]
    fn pairs_cover_product_once() {
        let combos = ListCombinations::new(vec![vec![1, 2], vec![3, 4]]).unwrap();
        assert_eq!(combos.len(), 4);
        let got: Vec<Vec<i32>> = combos.collect();
        let set: HashSet<Vec<i32>> = got.iter().cloned().collect();
        assert_eq!(got.len(), 4);
        let expected: HashSet<Vec<i32>> = [[1, 3], [1, 4], [2, 3], [2, 4]]
            .iter()
            .map(|p| p.to_vec())
            .collect();
        assert_eq!(set, expected);
    }

    #[test]
    fn first_combination_takes_heads_and_first_list_runs_fastest() {
        let mut combos = ListCombinations::new(vec![vec!['a', 'b'], vec!['x', 'y']]).unwrap();
        assert_eq!(combos.try_next().unwrap(), vec!['a', 'x']);
        assert_eq!(combos.try_next().unwrap(), vec!['b', 'x']);
        assert_eq!(combos.try_next().unwrap(), vec!['a', 'y']);
        assert_eq!(combos.try_next().unwrap(), vec!['b', 'y']);
        assert!(!combos.has_next());
    }

    #[test]
    fn exhausted_is_sticky() {
        let mut combos = ListCombinations::new(vec![vec![7]]).unwrap();
        assert!(combos.has_next());
        assert_eq!(combos.try_next().unwrap(), vec![7]);
        assert!(!combos.has_next());
        for _ in 0..3 {
            assert_eq!(combos.try_next(), Err(CombinationError::Exhausted));
        }
        assert_eq!(combos.next(), None);
        assert_eq!(combos.len(), 0);
    }

    #[test]
    fn singleton_lists_yield_one_combination() {
        let combos = ListCombinations::new(vec![vec![1], vec![2], vec![3]]).unwrap();
        let got: Vec<_> = combos.collect();
        assert_eq!(got, vec![vec![1, 2, 3]]);
    }

    #[test]
    fn rejects_empty_inputs() {
        let none: Vec<Vec<u8>> = Vec::new();
        assert_eq!(
            ListCombinations::new(none).unwrap_err(),
            CombinationError::NoLists
        );
        let err = ListCombinations::new(vec![vec![1], vec![], vec![2]]).unwrap_err();
        assert_eq!(err, CombinationError::EmptyList { index: 1 });
        assert_eq!(err.to_string(), "input list 1 is empty");
    }

    #[test]
    fn input_is_copied() {
        let mut src = vec![vec![1, 2], vec![3]];
        let combos = ListCombinations::new(src.clone()).unwrap();
        src[0].push(5);
        src[1].clear();
        assert_eq!(combos.len_total(), 2);
        assert_eq!(combos.count(), 2);
    }

    #[test]
    fn remove_is_unsupported() {
        let mut combos = ListCombinations::new(vec![vec![1, 2]]).unwrap();
        assert_eq!(combos.remove(), Err(CombinationError::Unsupported));
        // state untouched
        assert_eq!(combos.len(), 2);
    }

    #[test]
    fn size_hint_tracks_progress() {
        let mut combos = ListCombinations::new(vec![vec![0, 1, 2], vec![0, 1]]).unwrap();
        assert_eq!(combos.size_hint(), (6, Some(6)));
        combos.next();
        combos.next();
        assert_eq!(combos.size_hint(), (4, Some(4)));
        assert_eq!(combos.len_total(), 6);
    }

    proptest! {
        #[test]
        fn product_is_complete_and_unique(lens in prop::collection::vec(1usize..5, 1..5)) {
            let lists: Vec<Vec<(usize, usize)>> = lens
                .iter()
                .enumerate()
                .map(|(i, &n)| (0..n).map(|j| (i, j)).collect())
                .collect();
            let expected: usize = lens.iter().product();
            let mut combos = ListCombinations::new(lists).unwrap();
            let mut seen = HashSet::new();
            while combos.has_next() {
                let c = combos.try_next().unwrap();
                prop_assert_eq!(c.len(), lens.len());
                for (i, &(list, j)) in c.iter().enumerate() {
                    prop_assert_eq!(list, i);
                    prop_assert!(j < lens[i]);
                }
                prop_assert!(seen.insert(c));
            }
            prop_assert_eq!(seen.len(), expected);
            prop_assert_eq!(combos.try_next(), Err(CombinationError::Exhausted));
        }
    }
}
