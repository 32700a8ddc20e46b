use crate::bist::{lfsr::LfsrMode, TapConfig};
use crate::error::{BistError, Result};
use std::collections::HashSet;
use std::path::Path;

/// One pattern-generation run.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct LfsrScenario {
    pub name: String,
    pub width: usize,
    pub taps: Vec<u8>,
    pub seed: Vec<u8>,
    pub count: usize,
    pub mode: LfsrMode,
}

/// One signature-compaction run.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct MisrScenario {
    pub name: String,
    pub width: usize,
    pub taps: Vec<u8>,
    pub seed: Vec<u8>,
    pub responses: Vec<Vec<u8>>,
}

/// Scenario set parsed from a TOML file.
///
/// ```toml
/// [[lfsr]]
/// name = "gen5"
/// width = 5
/// taps = [1, 0, 1, 0]
/// seed = [1, 1, 0, 1, 0]
/// count = 5
/// mode = "1-to-m"
///
/// [[misr]]
/// width = 5
/// taps = [0, 0, 1, 1]
/// seed = [0, 0, 0, 0, 0]
/// responses = [[0, 0, 0, 0, 1], [1, 0, 0, 1, 1]]
/// ```
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct AppConfig {
    pub lfsr: Vec<LfsrScenario>,
    pub misr: Vec<MisrScenario>,
}

impl AppConfig {
    /// Load configuration from a TOML string.
    pub fn from_toml(s: &str) -> Result<Self> {
        #[derive(serde::Deserialize)]
        struct Root {
            lfsr: Option<Vec<LfsrSection>>,
            misr: Option<Vec<MisrSection>>,
        }

        #[derive(serde::Deserialize)]
        struct LfsrSection {
            name: Option<String>,
            width: usize,
            taps: Vec<u8>,
            seed: Vec<u8>,
            count: usize,
            mode: Option<LfsrMode>,
        }

        #[derive(serde::Deserialize)]
        struct MisrSection {
            name: Option<String>,
            width: usize,
            taps: Vec<u8>,
            seed: Vec<u8>,
            responses: Vec<Vec<u8>>,
        }

        let raw: Root = toml::from_str(s)?;
        let lfsr = raw
            .lfsr
            .unwrap_or_default()
            .into_iter()
            .enumerate()
            .map(|(i, sec)| LfsrScenario {
                name: sec.name.unwrap_or_else(|| format!("lfsr-{}", i)),
                width: sec.width,
                taps: sec.taps,
                seed: sec.seed,
                count: sec.count,
                mode: sec.mode.unwrap_or_default(),
            })
            .collect();
        let misr = raw
            .misr
            .unwrap_or_default()
            .into_iter()
            .enumerate()
            .map(|(i, sec)| MisrScenario {
                name: sec.name.unwrap_or_else(|| format!("misr-{}", i)),
                width: sec.width,
                taps: sec.taps,
                seed: sec.seed,
                responses: sec.responses,
            })
            .collect();
        Ok(Self { lfsr, misr })
    }

    /// Load configuration from a file path.
    pub fn from_file(path: &Path) -> Result<Self> {
        let contents = std::fs::read_to_string(path)?;
        Self::from_toml(&contents)
    }

    /// Checks dimensions of every scenario and that names are unique.
    pub fn validate(&self) -> Result<()> {
        let mut names = HashSet::new();
        for sc in &self.lfsr {
            if !names.insert(sc.name.as_str()) {
                return Err(format!("duplicate scenario name `{}`", sc.name).into());
            }
            TapConfig::new(sc.width, &sc.taps)?;
            check_vector("seed", sc.width, &sc.seed)?;
        }
        for sc in &self.misr {
            if !names.insert(sc.name.as_str()) {
                return Err(format!("duplicate scenario name `{}`", sc.name).into());
            }
            TapConfig::new(sc.width, &sc.taps)?;
            check_vector("seed", sc.width, &sc.seed)?;
            for r in &sc.responses {
                check_vector("response", sc.width, r)?;
            }
        }
        Ok(())
    }
}

fn check_vector(what: &'static str, width: usize, bits: &[u8]) -> Result<()> {
    if bits.len() != width {
        return Err(BistError::LengthMismatch {
            what,
            expected: width,
            actual: bits.len(),
        });
    }
    if let Some((index, &value)) = bits.iter().enumerate().find(|&(_, &b)| b > 1) {
        return Err(BistError::InvalidBit { what, index, value });
    }
    Ok(())
}

/// The reference 5-bit generator and signature register.
impl Default for AppConfig {
    fn default() -> Self {
        Self {
            lfsr: vec![LfsrScenario {
                name: "lfsr".to_string(),
                width: 5,
                taps: vec![1, 0, 1, 0],
                seed: vec![1, 1, 0, 1, 0],
                count: 5,
                mode: LfsrMode::OneToMany,
            }],
            misr: vec![MisrScenario {
                name: "misr".to_string(),
                width: 5,
                taps: vec![0, 0, 1, 1],
                seed: vec![0, 0, 0, 0, 0],
                responses: vec![
                    vec![0, 0, 0, 0, 1],
                    vec![1, 0, 0, 1, 1],
                    vec![1, 0, 0, 1, 1],
                ],
            }],
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn parse_scenarios() {
        let cfg_str = r#"
            [[lfsr]]
            name = "gen5"
            width = 5
            taps = [1, 0, 1, 0]
            seed = [1, 1, 0, 1, 0]
            count = 5
            mode = "m-to-1"

            [[lfsr]]
            width = 3
            taps = [0, 1]
            seed = [1, 0, 0]
            count = 7

            [[misr]]
            width = 5
            taps = [0, 0, 1, 1]
            seed = [0, 0, 0, 0, 0]
            responses = [[0, 0, 0, 0, 1], [1, 0, 0, 1, 1]]
        "#;
        let cfg = AppConfig::from_toml(cfg_str).unwrap();
        assert_eq!(cfg.lfsr.len(), 2);
        assert_eq!(cfg.lfsr[0].name, "gen5");
        assert_eq!(cfg.lfsr[0].mode, LfsrMode::ManyToOne);
        assert_eq!(cfg.lfsr[1].name, "lfsr-1");
        assert_eq!(cfg.lfsr[1].mode, LfsrMode::OneToMany);
        assert_eq!(cfg.misr[0].name, "misr-0");
        assert_eq!(cfg.misr[0].responses.len(), 2);
        cfg.validate().unwrap();
    }

    #[test]
    fn unknown_mode_is_rejected() {
        let cfg_str = r#"
            [[lfsr]]
            width = 2
            taps = [1]
            seed = [1, 0]
            count = 3
            mode = "sideways"
        "#;
        assert!(matches!(
            AppConfig::from_toml(cfg_str),
            Err(BistError::Toml(_))
        ));
    }

    #[test]
    fn empty_file_has_no_scenarios() {
        let cfg = AppConfig::from_toml("").unwrap();
        assert!(cfg.lfsr.is_empty());
        assert!(cfg.misr.is_empty());
    }

    #[test]
    fn validate_catches_bad_dimensions() {
        let mut cfg = AppConfig::default();
        cfg.validate().unwrap();
        cfg.misr[0].responses[1] = vec![1, 0, 0];
        assert!(matches!(
            cfg.validate(),
            Err(BistError::LengthMismatch {
                what: "response",
                ..
            })
        ));

        let mut cfg = AppConfig::default();
        cfg.lfsr[0].seed[2] = 3;
        assert!(matches!(
            cfg.validate(),
            Err(BistError::InvalidBit {
                what: "seed",
                index: 2,
                value: 3
            })
        ));
    }

    #[test]
    fn validate_catches_duplicate_names() {
        let mut cfg = AppConfig::default();
        cfg.misr[0].name = "lfsr".to_string();
        assert!(matches!(cfg.validate(), Err(BistError::Config(_))));
    }
}
