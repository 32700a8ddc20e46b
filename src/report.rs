//! Console rendering of register histories.

use crate::bist::BitVector;
use std::fmt::Write;

fn digits(bits: &[u8]) -> String {
    bits.iter()
        .map(|b| b.to_string())
        .collect::<Vec<_>>()
        .join(" ")
}

/// `LFSR test vectors:` followed by one `tv{i}: ...` line per vector.
pub fn lfsr_report(history: &[BitVector]) -> String {
    let mut out = String::from("LFSR test vectors:\n");
    for (i, tv) in history.iter().enumerate() {
        let _ = writeln!(out, "tv{}: {}", i, tv);
    }
    out
}

/// Per-cycle state/response/result blocks, then the signature line.
pub fn misr_report<R: AsRef<[u8]>>(responses: &[R], history: &[BitVector]) -> String {
    let mut out = String::from("MISR status:\n");
    for (i, (response, step)) in responses.iter().zip(history.windows(2)).enumerate() {
        let _ = writeln!(out, "state {}:    {}", i, step[0]);
        let _ = writeln!(out, "response {}: {}", i + 1, digits(response.as_ref()));
        let _ = writeln!(out, "=> {}", step[1]);
        let _ = writeln!(out, "{}", "-".repeat(20));
    }
    if let Some(sig) = history.last() {
        let _ = writeln!(out, "Signature: {}", sig);
    }
    out
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::bist::{compress, generate, LfsrMode};

    #[test]
    fn lfsr_layout() {
        let history = generate(3, &[0, 1], &[1, 0, 0], 2, LfsrMode::OneToMany).unwrap();
        assert_eq!(lfsr_report(&history), "LFSR test vectors:\ntv0: 1 0 0\ntv1: 0 1 0\n");
    }

    #[test]
    fn misr_without_responses_prints_seed_as_signature() {
        let none: Vec<Vec<u8>> = Vec::new();
        let history = compress(2, &[0], &[1, 0], &none).unwrap();
        assert_eq!(
            misr_report(&none, &history),
            "MISR status:\nSignature: 1 0\n"
        );
    }
}
