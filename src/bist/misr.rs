//! Response compaction with a multiple-input signature register.

use super::gf2::BitVector;
use super::lfsr::checked_seed;
use super::transition::{MatrixMode, TapConfig};
use crate::error::{BistError, Result};
use log::debug;

/// Compresses `responses` into a signature.
///
/// Each cycle computes `T · state XOR response` over GF(2) with the shift
/// matrix for `taps`. The history holds `responses.len() + 1` states: the seed
/// first and the signature last. All inputs are validated before the first
/// cycle runs.
pub fn compress<R: AsRef<[u8]>>(
    width: usize,
    taps: &[u8],
    seed: &[u8],
    responses: &[R],
) -> Result<Vec<BitVector>> {
    let config = TapConfig::new(width, taps)?;
    let seed = checked_seed(width, seed)?;
    let responses = checked_responses(width, responses)?;

    let t = config.matrix(MatrixMode::Shift);
    let mut history = Vec::with_capacity(responses.len() + 1);
    history.push(seed);
    for (i, response) in responses.iter().enumerate() {
        let next = t.mul_vec(&history[i])?.xor(response)?;
        debug!("misr state {}: {} <- response {}", i + 1, next, response);
        history.push(next);
    }
    Ok(history)
}

/// Final register state after compressing `responses`.
pub fn signature<R: AsRef<[u8]>>(
    width: usize,
    taps: &[u8],
    seed: &[u8],
    responses: &[R],
) -> Result<BitVector> {
    let mut history = compress(width, taps, seed, responses)?;
    // compress always returns at least the seed
    Ok(history.pop().unwrap_or_default())
}

fn checked_responses<R: AsRef<[u8]>>(width: usize, responses: &[R]) -> Result<Vec<BitVector>> {
    responses
        .iter()
        .map(|r| {
            let r = r.as_ref();
            if r.len() != width {
                return Err(BistError::LengthMismatch {
                    what: "response",
                    expected: width,
                    actual: r.len(),
                });
            }
            BitVector::from_bits("response", r)
        })
        .collect()
}
