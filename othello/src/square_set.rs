use std::fmt::{self, Debug};
use std::iter::FusedIterator;

use serde::{Deserialize, Serialize};

use crate::Square;

/// Macro to help with defining bitset types
macro_rules! bitset_traits {
    ($name:ident) => {
        impl std::ops::BitAnd for $name {
            type Output = Self;

            fn bitand(self, rhs: Self) -> Self::Output {
                Self {
                    bits: self.bits & rhs.bits,
                }
            }
        }

        impl std::ops::BitOr for $name {
            type Output = Self;

            fn bitor(self, rhs: Self) -> Self::Output {
                Self {
                    bits: self.bits | rhs.bits,
                }
            }
        }

        impl std::ops::BitOrAssign for $name {
            fn bitor_assign(&mut self, rhs: Self) {
                self.bits |= rhs.bits;
            }
        }

        impl std::ops::Not for $name {
            type Output = Self;

            fn not(self) -> Self::Output {
                Self { bits: !self.bits }
            }
        }
    };
}

/// A compact set of [`Square`]s, one bit per square.
///
/// Bit `n` stands for the square with row-major index `n`, so iterating
/// yields squares in row-major order.
///
/// This is an immutable type, so its "mutating" methods return a
/// new value instead of really mutating in-place (except for `BitOrAssign`).
#[derive(Clone, Copy, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(transparent)]
pub struct SquareSet {
    bits: u64,
}

bitset_traits!(SquareSet);

impl SquareSet {
    /// Creates a new, empty set.
    pub const fn new() -> Self {
        Self { bits: 0 }
    }

    /// The set containing all 64 squares.
    pub const fn full() -> Self {
        Self { bits: u64::MAX }
    }

    pub fn len(self) -> u32 {
        self.bits.count_ones()
    }

    pub fn is_empty(self) -> bool {
        self.bits == 0
    }

    pub fn contains(self, square: Square) -> bool {
        self.bits & (1u64 << square.index()) != 0
    }

    #[must_use] // Because users might expect this to be a mutating method
    pub fn insert(self, square: Square) -> Self {
        Self {
            bits: self.bits | (1u64 << square.index()),
        }
    }

    #[must_use] // Because users might expect this to be a mutating method
    pub fn remove(self, square: Square) -> Self {
        Self {
            bits: self.bits & !(1u64 << square.index()),
        }
    }

    /// The first square in row-major order.
    pub fn first(self) -> Option<Square> {
        self.into_iter().next()
    }
}

impl FromIterator<Square> for SquareSet {
    fn from_iter<T: IntoIterator<Item = Square>>(iter: T) -> Self {
        iter.into_iter().fold(SquareSet::new(), SquareSet::insert)
    }
}

impl Debug for SquareSet {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        f.debug_set().entries(self.into_iter()).finish()
    }
}

/// Iterator produced by [`SquareSet::into_iter()`].
#[derive(Clone, Copy)]
pub struct SquareSetIter {
    bits: u64,
}

impl IntoIterator for SquareSet {
    type Item = Square;

    type IntoIter = SquareSetIter;

    fn into_iter(self) -> Self::IntoIter {
        SquareSetIter { bits: self.bits }
    }
}

impl Iterator for SquareSetIter {
    type Item = Square;

    fn next(&mut self) -> Option<Self::Item> {
        if self.bits == 0 {
            None
        } else {
            // This cast is safe, as the max value for trailing_zeros is 63 here
            let idx = self.bits.trailing_zeros() as u8;
            // Clear the flag corresponding to this square
            self.bits &= self.bits - 1;
            Some(Square::from_index(idx))
        }
    }

    fn size_hint(&self) -> (usize, Option<usize>) {
        let len = self.bits.count_ones() as usize;
        (len, Some(len))
    }
}

impl ExactSizeIterator for SquareSetIter {}

impl FusedIterator for SquareSetIter {}

#[cfg(test)]
mod tests {
    use quickcheck::quickcheck;

    use super::*;

    quickcheck! {
        fn iteration_is_row_major(bits: u64) -> bool {
            let squares: Vec<Square> = SquareSet { bits }.into_iter().collect();
            squares.len() == bits.count_ones() as usize
                && squares.windows(2).all(|w| w[0].index() < w[1].index())
                && SquareSet::from_iter(squares).bits == bits
        }
    }

    #[test]
    fn insert_and_remove() {
        let a = Square::new(0, 7).unwrap();
        let b = Square::new(6, 1).unwrap();
        let set = SquareSet::new().insert(b).insert(a).insert(a);
        assert_eq!(set.len(), 2);
        assert_eq!(set.first(), Some(a));
        assert!(set.remove(a).contains(b));
        assert!(!set.remove(a).contains(a));
        assert!((set & !set).is_empty());
    }
}
