// bistreg
//
// Simulation of the two shift-register primitives used for built-in
// self-test: an LFSR test-pattern generator and a MISR signature analyzer,
// both over GF(2).

pub mod app_config;
pub mod bist;
pub mod cli;
pub mod error;
pub mod logger;
pub mod report;
pub mod runner;

pub use bist::{lfsr, misr, BitMatrix, BitVector, LfsrMode, MatrixMode};
pub use error::{BistError, Result};
