//! # LFSR / MISR simulation over GF(2)
//!
//! Both primitives share one transition matrix builder. The pattern generator
//! iterates `state = T · state`; the signature register iterates
//! `state = T · state XOR response`. Every run is a pure function of its
//! inputs.

pub mod gf2;
pub mod lfsr;
pub mod misr;
pub mod transition;

pub use gf2::{BitMatrix, BitVector};
pub use lfsr::{generate, LfsrMode};
pub use misr::{compress, signature};
pub use transition::{build_matrix, MatrixMode, TapConfig};

use crate::error::Result;

/// Test-vector generation taking the wiring as a `1-to-m` / `m-to-1` token.
pub fn lfsr(
    n_bit: usize,
    taps: &[u8],
    seed: &[u8],
    n_tv: usize,
    mode: &str,
) -> Result<Vec<BitVector>> {
    let mode: LfsrMode = mode.parse()?;
    generate(n_bit, taps, seed, n_tv, mode)
}

/// Register states while compacting `responses`; the last one is the signature.
pub fn misr<R: AsRef<[u8]>>(
    n_bit: usize,
    taps: &[u8],
    seed: &[u8],
    responses: &[R],
) -> Result<Vec<BitVector>> {
    compress(n_bit, taps, seed, responses)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::error::BistError;

    #[test]
    fn lfsr_token_entry_point() {
        let out = lfsr(5, &[1, 0, 1, 0], &[1, 1, 0, 1, 0], 3, "1-to-m").unwrap();
        assert_eq!(out.len(), 3);
        assert!(matches!(
            lfsr(5, &[1, 0, 1, 0], &[1, 1, 0, 1, 0], 3, "2-to-m"),
            Err(BistError::InvalidMode(_))
        ));
    }

    #[test]
    fn misr_entry_point() {
        let out = misr(2, &[1], &[0, 1], &[[1u8, 1]]).unwrap();
        // T = [[0,1],[1,1]]: T·[0,1] = [1,1], xor [1,1] = [0,0]
        assert_eq!(out[1].to_bits(), vec![0, 0]);
    }
}
