//! Packed bit vectors and square bit matrices over GF(2).
//!
//! Addition is XOR and multiplication is AND, so a matrix-vector product is
//! the parity of `row & v` for every row. Bits are packed 64 to a word; bit
//! `i` of a vector lives in word `i / 64` at position `i % 64`. Bits past
//! `len` in the last word are always zero.

use crate::error::{BistError, Result};
use std::fmt;

const WORD_BITS: usize = 64;

#[inline(always)]
fn words_for(len: usize) -> usize {
    (len + WORD_BITS - 1) / WORD_BITS
}

/// A fixed-length vector of GF(2) elements.
#[derive(Clone, PartialEq, Eq, Hash, Default)]
pub struct BitVector {
    len: usize,
    words: Vec<u64>,
}

impl BitVector {
    pub fn zeros(len: usize) -> Self {
        Self {
            len,
            words: vec![0; words_for(len)],
        }
    }

    /// Builds a vector from `0`/`1` values. `what` names the input in errors.
    pub fn from_bits(what: &'static str, bits: &[u8]) -> Result<Self> {
        let mut v = Self::zeros(bits.len());
        for (index, &value) in bits.iter().enumerate() {
            match value {
                0 => {}
                1 => v.set(index, true),
                _ => return Err(BistError::InvalidBit { what, index, value }),
            }
        }
        Ok(v)
    }

    pub fn len(&self) -> usize {
        self.len
    }

    pub fn is_empty(&self) -> bool {
        self.len == 0
    }

    #[inline]
    pub fn get(&self, i: usize) -> bool {
        debug_assert!(i < self.len);
        (self.words[i / WORD_BITS] >> (i % WORD_BITS)) & 1 == 1
    }

    #[inline]
    pub fn set(&mut self, i: usize, bit: bool) {
        debug_assert!(i < self.len);
        let mask = 1u64 << (i % WORD_BITS);
        if bit {
            self.words[i / WORD_BITS] |= mask;
        } else {
            self.words[i / WORD_BITS] &= !mask;
        }
    }

    #[inline]
    pub fn flip(&mut self, i: usize) {
        debug_assert!(i < self.len);
        self.words[i / WORD_BITS] ^= 1u64 << (i % WORD_BITS);
    }

    pub fn count_ones(&self) -> usize {
        self.words.iter().map(|w| w.count_ones() as usize).sum()
    }

    /// Element-wise sum over GF(2).
    pub fn xor(&self, other: &BitVector) -> Result<BitVector> {
        self.check_len("xor operand", other)?;
        let words = self
            .words
            .iter()
            .zip(&other.words)
            .map(|(a, b)| a ^ b)
            .collect();
        Ok(BitVector {
            len: self.len,
            words,
        })
    }

    /// Inner product over GF(2): parity of the bitwise AND.
    pub fn dot(&self, other: &BitVector) -> Result<bool> {
        self.check_len("dot operand", other)?;
        let ones: u32 = self
            .words
            .iter()
            .zip(&other.words)
            .map(|(a, b)| (a & b).count_ones())
            .sum();
        Ok(ones % 2 == 1)
    }

    pub fn iter(&self) -> impl Iterator<Item = bool> + '_ {
        (0..self.len).map(move |i| self.get(i))
    }

    pub fn to_bits(&self) -> Vec<u8> {
        self.iter().map(u8::from).collect()
    }

    fn check_len(&self, what: &'static str, other: &BitVector) -> Result<()> {
        if self.len != other.len {
            return Err(BistError::LengthMismatch {
                what,
                expected: self.len,
                actual: other.len,
            });
        }
        Ok(())
    }
}

/// Renders as space separated digits, e.g. `1 1 0 1 0`.
impl fmt::Display for BitVector {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        for (i, bit) in self.iter().enumerate() {
            if i > 0 {
                f.write_str(" ")?;
            }
            f.write_str(if bit { "1" } else { "0" })?;
        }
        Ok(())
    }
}

impl fmt::Debug for BitVector {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str("BitVector[")?;
        for bit in self.iter() {
            f.write_str(if bit { "1" } else { "0" })?;
        }
        f.write_str("]")
    }
}

/// A square matrix over GF(2), stored as rows.
#[derive(Clone, PartialEq, Eq)]
pub struct BitMatrix {
    rows: Vec<BitVector>,
}

impl BitMatrix {
    pub fn zeros(n: usize) -> Self {
        Self {
            rows: vec![BitVector::zeros(n); n],
        }
    }

    pub fn identity(n: usize) -> Self {
        let mut m = Self::zeros(n);
        for i in 0..n {
            m.set(i, i, true);
        }
        m
    }

    /// Number of rows (and columns).
    pub fn size(&self) -> usize {
        self.rows.len()
    }

    pub fn rows(&self) -> &[BitVector] {
        &self.rows
    }

    #[inline]
    pub fn get(&self, row: usize, col: usize) -> bool {
        self.rows[row].get(col)
    }

    #[inline]
    pub fn set(&mut self, row: usize, col: usize, bit: bool) {
        self.rows[row].set(col, bit);
    }

    /// Computes `self · v` over GF(2).
    pub fn mul_vec(&self, v: &BitVector) -> Result<BitVector> {
        if v.len() != self.size() {
            return Err(BistError::LengthMismatch {
                what: "state vector",
                expected: self.size(),
                actual: v.len(),
            });
        }
        let mut out = BitVector::zeros(self.size());
        for (i, row) in self.rows.iter().enumerate() {
            if row.dot(v)? {
                out.set(i, true);
            }
        }
        Ok(out)
    }

    pub fn transpose(&self) -> Self {
        let n = self.size();
        let mut t = Self::zeros(n);
        for r in 0..n {
            for c in 0..n {
                if self.get(r, c) {
                    t.set(c, r, true);
                }
            }
        }
        t
    }
}

impl fmt::Display for BitMatrix {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        for row in &self.rows {
            writeln!(f, "{}", row)?;
        }
        Ok(())
    }
}

impl fmt::Debug for BitMatrix {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_list().entries(self.rows.iter()).finish()
    }
}
