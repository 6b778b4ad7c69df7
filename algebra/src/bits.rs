//! Bit arithmetic over basis blade ids, with no geometric meaning attached.

use crate::MAX_VSPACE_DIMENSION;

const PASCAL_ROWS: usize = MAX_VSPACE_DIMENSION as usize + 1;

const PASCAL: [[u64; PASCAL_ROWS]; PASCAL_ROWS] = {
    let mut table = [[0u64; PASCAL_ROWS]; PASCAL_ROWS];
    let mut n = 0;
    while n < PASCAL_ROWS {
        table[n][0] = 1;
        let mut k = 1;
        while k <= n {
            table[n][k] = table[n - 1][k - 1] + table[n - 1][k];
            k += 1;
        }
        n += 1;
    }
    table
};

/// Binomial coefficient C(n, k) for `n <= 63`, zero when `k > n`.
pub const fn binomial(n: u32, k: u32) -> u64 {
    if n > MAX_VSPACE_DIMENSION || k > n {
        return 0;
    }
    PASCAL[n as usize][k as usize]
}

/// Mask of the lowest `dim` bits.
pub const fn low_mask(dim: u32) -> u64 {
    if dim >= u64::BITS {
        u64::MAX
    } else {
        !(u64::MAX << dim)
    }
}

/// Returns the id of the blade with rank `index` among the blades of `grade`, using the
/// combinatorial number system.
pub fn index_to_combinadic_pattern(index: u64, grade: u32) -> u64 {
    let mut id = 0;
    let mut rest = index;
    for k in (1..=grade).rev() {
        let mut c = k - 1;
        while c + 1 < MAX_VSPACE_DIMENSION && binomial(c + 1, k) <= rest {
            c += 1;
        }
        id |= 1 << c;
        rest -= binomial(c, k);
    }
    id
}

pub trait BitPattern: Copy {
    fn first_one_bit(self) -> Option<u32>;

    fn last_one_bit(self) -> Option<u32>;

    fn is_sub_pattern_of(self, other: Self) -> bool;

    fn bit_indices(self) -> BitIndices;

    fn sub_patterns(self) -> SubPatterns;

    fn super_patterns(self, dim: u32) -> SuperPatterns;

    /// (lowest single-bit factor, remainder)
    fn split_smallest(self) -> Option<(u64, u64)>;

    /// (highest single-bit factor, remainder)
    fn split_largest(self) -> Option<(u64, u64)>;

    /// Rank of the pattern among all patterns with the same number of set bits.
    fn combinadic_index(self) -> u64;
}

impl BitPattern for u64 {
    fn first_one_bit(self) -> Option<u32> {
        (self != 0).then(|| self.trailing_zeros())
    }

    fn last_one_bit(self) -> Option<u32> {
        (self != 0).then(|| u64::BITS - 1 - self.leading_zeros())
    }

    fn is_sub_pattern_of(self, other: Self) -> bool {
        self & !other == 0
    }

    fn bit_indices(self) -> BitIndices {
        BitIndices(self)
    }

    fn sub_patterns(self) -> SubPatterns {
        SubPatterns {
            mask: self,
            next: Some(0),
        }
    }

    fn super_patterns(self, dim: u32) -> SuperPatterns {
        let mask = low_mask(dim);
        debug_assert!(self.is_sub_pattern_of(mask), "{self:#b} exceeds {dim} dimensions");
        SuperPatterns {
            base: self,
            free: (!self & mask).sub_patterns(),
        }
    }

    fn split_smallest(self) -> Option<(u64, u64)> {
        let i = self.first_one_bit()?;
        let bit = 1 << i;
        Some((bit, self ^ bit))
    }

    fn split_largest(self) -> Option<(u64, u64)> {
        let i = self.last_one_bit()?;
        let bit = 1 << i;
        Some((bit, self ^ bit))
    }

    fn combinadic_index(self) -> u64 {
        self.bit_indices()
            .zip(1..)
            .map(|(c, k)| binomial(c, k))
            .sum()
    }
}

/// Positions of the set bits of a pattern, lowest first.
#[derive(Debug, Clone)]
pub struct BitIndices(u64);

impl Iterator for BitIndices {
    type Item = u32;

    fn next(&mut self) -> Option<Self::Item> {
        let (bit, rest) = self.0.split_smallest()?;
        self.0 = rest;
        Some(bit.trailing_zeros())
    }

    fn size_hint(&self) -> (usize, Option<usize>) {
        let n = self.0.count_ones() as usize;
        (n, Some(n))
    }
}

impl ExactSizeIterator for BitIndices {}

/// Every subset of a mask, in ascending order, starting with 0 and ending with the mask.
#[derive(Debug, Clone)]
pub struct SubPatterns {
    mask: u64,
    next: Option<u64>,
}

impl Iterator for SubPatterns {
    type Item = u64;

    fn next(&mut self) -> Option<Self::Item> {
        let current = self.next?;
        self.next = (current != self.mask).then(|| current.wrapping_sub(self.mask) & self.mask);
        Some(current)
    }
}

/// Every pattern within `dim` bits containing a base pattern, in ascending order.
#[derive(Debug, Clone)]
pub struct SuperPatterns {
    base: u64,
    free: SubPatterns,
}

impl Iterator for SuperPatterns {
    type Item = u64;

    fn next(&mut self) -> Option<Self::Item> {
        self.free.next().map(|free| self.base | free)
    }
}
