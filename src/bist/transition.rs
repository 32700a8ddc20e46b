use super::gf2::{BitMatrix, BitVector};
use crate::error::{BistError, Result};
use log::debug;

/// Orientation of the transition matrix.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Default)]
pub enum MatrixMode {
    /// Canonical shift-with-feedback matrix (1-to-many generation, MISR).
    #[default]
    Shift,
    /// Transpose of the canonical matrix (many-to-1 generation).
    External,
}

/// Register width plus the tap vector extended with the implicit leading 1.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct TapConfig {
    width: usize,
    taps: BitVector,
}

impl TapConfig {
    /// `taps` holds the `width - 1` stage taps, without the primary feedback.
    pub fn new(width: usize, taps: &[u8]) -> Result<Self> {
        if width == 0 {
            return Err(BistError::ZeroWidth);
        }
        if taps.len() != width - 1 {
            return Err(BistError::LengthMismatch {
                what: "taps",
                expected: width - 1,
                actual: taps.len(),
            });
        }
        let stage_taps = BitVector::from_bits("taps", taps)?;
        let mut extended = BitVector::zeros(width);
        extended.set(0, true);
        for (i, bit) in stage_taps.iter().enumerate() {
            extended.set(i + 1, bit);
        }
        Ok(Self {
            width,
            taps: extended,
        })
    }

    pub fn width(&self) -> usize {
        self.width
    }

    /// Extended tap vector `t`, with `t[0] == 1`.
    pub fn taps(&self) -> &BitVector {
        &self.taps
    }

    /// Builds the one-cycle transition matrix.
    ///
    /// Row `i` carries `t[i]` in the last column (feedback) and, for `i > 0`,
    /// a 1 at column `i - 1` (shift from the previous stage).
    pub fn matrix(&self, mode: MatrixMode) -> BitMatrix {
        let n = self.width;
        let mut t = BitMatrix::zeros(n);
        for i in 0..n {
            t.set(i, n - 1, self.taps.get(i));
            if i != 0 {
                t.set(i, i - 1, true);
            }
        }
        debug!(
            "transition matrix for {} ({:?}):\n{}",
            self.feedback_polynomial(),
            mode,
            t
        );
        match mode {
            MatrixMode::Shift => t,
            MatrixMode::External => t.transpose(),
        }
    }

    /// Characteristic polynomial of the shift matrix, e.g. `x^5 + x^3 + x + 1`.
    pub fn feedback_polynomial(&self) -> String {
        let mut terms = vec![term(self.width)];
        for i in (0..self.width).rev() {
            if self.taps.get(i) {
                terms.push(term(i));
            }
        }
        terms.join(" + ")
    }
}

fn term(power: usize) -> String {
    match power {
        0 => "1".to_string(),
        1 => "x".to_string(),
        p => format!("x^{}", p),
    }
}

/// Builds the `width × width` transition matrix for `taps` in `mode`.
pub fn build_matrix(width: usize, taps: &[u8], mode: MatrixMode) -> Result<BitMatrix> {
    Ok(TapConfig::new(width, taps)?.matrix(mode))
}
