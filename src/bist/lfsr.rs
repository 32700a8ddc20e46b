//! Test-pattern generation with a linear feedback shift register.

use super::gf2::BitVector;
use super::transition::{MatrixMode, TapConfig};
use crate::error::{BistError, Result};
use log::debug;
use serde::Deserialize;
use std::fmt;
use std::str::FromStr;

/// Register wiring. Parsed from the `1-to-m` / `m-to-1` tokens.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Default, Deserialize)]
#[serde(try_from = "String")]
pub enum LfsrMode {
    /// Internal XOR taps (one feedback line fans out to many stages).
    #[default]
    OneToMany,
    /// External XOR taps (many stages fold into one feedback line).
    ManyToOne,
}

impl LfsrMode {
    pub fn matrix_mode(self) -> MatrixMode {
        match self {
            LfsrMode::OneToMany => MatrixMode::Shift,
            LfsrMode::ManyToOne => MatrixMode::External,
        }
    }

    pub fn token(self) -> &'static str {
        match self {
            LfsrMode::OneToMany => "1-to-m",
            LfsrMode::ManyToOne => "m-to-1",
        }
    }
}

impl FromStr for LfsrMode {
    type Err = BistError;

    fn from_str(s: &str) -> Result<Self> {
        match s {
            "1-to-m" => Ok(LfsrMode::OneToMany),
            "m-to-1" => Ok(LfsrMode::ManyToOne),
            other => Err(BistError::InvalidMode(other.to_string())),
        }
    }
}

impl TryFrom<String> for LfsrMode {
    type Error = BistError;

    fn try_from(s: String) -> Result<Self> {
        s.parse()
    }
}

impl fmt::Display for LfsrMode {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.token())
    }
}

/// Generates `count` test vectors starting with `seed`.
///
/// Each vector is `T · previous` over GF(2), where `T` is the transition
/// matrix for `taps` (transposed for [`LfsrMode::ManyToOne`]). The returned
/// history always starts with the seed; `count == 0` yields an empty history
/// once the inputs have been validated.
pub fn generate(
    width: usize,
    taps: &[u8],
    seed: &[u8],
    count: usize,
    mode: LfsrMode,
) -> Result<Vec<BitVector>> {
    let config = TapConfig::new(width, taps)?;
    let seed = checked_seed(width, seed)?;
    if count == 0 {
        return Ok(Vec::new());
    }

    let t = config.matrix(mode.matrix_mode());
    let mut history = Vec::with_capacity(count);
    history.push(seed);
    for i in 1..count {
        let next = t.mul_vec(&history[i - 1])?;
        debug!("lfsr tv{}: {}", i, next);
        history.push(next);
    }
    Ok(history)
}

/// Seeds must be `width` bits long and contain only 0 or 1.
pub(crate) fn checked_seed(width: usize, seed: &[u8]) -> Result<BitVector> {
    if seed.len() != width {
        return Err(BistError::LengthMismatch {
            what: "seed",
            expected: width,
            actual: seed.len(),
        });
    }
    BitVector::from_bits("seed", seed)
}

#[cfg(test)]
mod tests {
    use super::*;

    fn bits(history: &[BitVector]) -> Vec<Vec<u8>> {
        history.iter().map(BitVector::to_bits).collect()
    }

    #[test]
    fn one_to_many_sequence() {
        let out = generate(5, &[1, 0, 1, 0], &[1, 1, 0, 1, 0], 5, LfsrMode::OneToMany).unwrap();
        assert_eq!(
            bits(&out),
            vec![
                vec![1, 1, 0, 1, 0],
                vec![0, 1, 1, 0, 1],
                vec![1, 1, 1, 0, 0],
                vec![0, 1, 1, 1, 0],
                vec![0, 0, 1, 1, 1],
            ]
        );
    }

    #[test]
    fn many_to_one_first_step() {
        let out = generate(5, &[1, 0, 1, 0], &[1, 1, 0, 1, 0], 2, LfsrMode::ManyToOne).unwrap();
        assert_eq!(out[1].to_bits(), vec![1, 0, 1, 0, 1]);
    }

    #[test]
    fn boundaries() {
        let one = generate(3, &[0, 1], &[1, 0, 0], 1, LfsrMode::OneToMany).unwrap();
        assert_eq!(bits(&one), vec![vec![1, 0, 0]]);
        let none = generate(3, &[0, 1], &[1, 0, 0], 0, LfsrMode::OneToMany).unwrap();
        assert!(none.is_empty());
    }

    #[test]
    fn validates_even_when_count_is_zero() {
        assert!(matches!(
            generate(3, &[0, 1], &[1, 0], 0, LfsrMode::OneToMany),
            Err(BistError::LengthMismatch { what: "seed", .. })
        ));
    }

    #[test]
    fn mode_tokens() {
        assert_eq!("1-to-m".parse::<LfsrMode>().unwrap(), LfsrMode::OneToMany);
        assert_eq!("m-to-1".parse::<LfsrMode>().unwrap(), LfsrMode::ManyToOne);
        assert!(matches!(
            "fibonacci".parse::<LfsrMode>(),
            Err(BistError::InvalidMode(s)) if s == "fibonacci"
        ));
        assert_eq!(LfsrMode::ManyToOne.to_string(), "m-to-1");
    }
}
