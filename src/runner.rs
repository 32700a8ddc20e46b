use crate::app_config::{AppConfig, LfsrScenario, MisrScenario};
use crate::bist::{self, BitVector, TapConfig};
use crate::error::Result;
use crate::report;
use clap::ValueEnum;
use log::info;
use rayon::prelude::*;

/// Which scenario kinds to execute.
#[derive(Copy, Clone, PartialEq, Eq, Default, ValueEnum, Debug)]
pub enum Selection {
    #[default]
    All,
    Lfsr,
    Misr,
}

impl Selection {
    fn lfsr(self) -> bool {
        matches!(self, Selection::All | Selection::Lfsr)
    }

    fn misr(self) -> bool {
        matches!(self, Selection::All | Selection::Misr)
    }
}

/// Result of one scenario run.
#[derive(Clone, Debug, PartialEq, Eq)]
pub enum Outcome {
    Lfsr {
        name: String,
        history: Vec<BitVector>,
    },
    Misr {
        name: String,
        responses: Vec<Vec<u8>>,
        history: Vec<BitVector>,
    },
}

impl Outcome {
    pub fn name(&self) -> &str {
        match self {
            Outcome::Lfsr { name, .. } | Outcome::Misr { name, .. } => name,
        }
    }

    pub fn history(&self) -> &[BitVector] {
        match self {
            Outcome::Lfsr { history, .. } | Outcome::Misr { history, .. } => history,
        }
    }

    /// Console text in the classic layout.
    pub fn render(&self) -> String {
        match self {
            Outcome::Lfsr { history, .. } => report::lfsr_report(history),
            Outcome::Misr {
                responses, history, ..
            } => report::misr_report(responses, history),
        }
    }
}

pub fn run_lfsr(sc: &LfsrScenario) -> Result<Outcome> {
    info!(
        "lfsr `{}`: {} ({}), {} vectors",
        sc.name,
        TapConfig::new(sc.width, &sc.taps)?.feedback_polynomial(),
        sc.mode,
        sc.count
    );
    let history = bist::generate(sc.width, &sc.taps, &sc.seed, sc.count, sc.mode)?;
    Ok(Outcome::Lfsr {
        name: sc.name.clone(),
        history,
    })
}

pub fn run_misr(sc: &MisrScenario) -> Result<Outcome> {
    info!(
        "misr `{}`: {}, {} responses",
        sc.name,
        TapConfig::new(sc.width, &sc.taps)?.feedback_polynomial(),
        sc.responses.len()
    );
    let history = bist::compress(sc.width, &sc.taps, &sc.seed, &sc.responses)?;
    Ok(Outcome::Misr {
        name: sc.name.clone(),
        responses: sc.responses.clone(),
        history,
    })
}

/// Runs the selected scenarios, LFSR runs first, each group in config order.
///
/// The whole config is validated before anything runs. With `parallel` the
/// independent runs are spread over the rayon pool; output order is the same.
pub fn run(config: &AppConfig, selection: Selection, parallel: bool) -> Result<Vec<Outcome>> {
    config.validate()?;
    let lfsr: &[LfsrScenario] = if selection.lfsr() { &config.lfsr } else { &[] };
    let misr: &[MisrScenario] = if selection.misr() { &config.misr } else { &[] };
    info!(
        "running {} lfsr and {} misr scenarios{}",
        lfsr.len(),
        misr.len(),
        if parallel { " in parallel" } else { "" }
    );

    let mut outcomes: Vec<Outcome>;
    if parallel {
        outcomes = lfsr.par_iter().map(run_lfsr).collect::<Result<_>>()?;
        let misr_out: Vec<Outcome> = misr.par_iter().map(run_misr).collect::<Result<_>>()?;
        outcomes.extend(misr_out);
    } else {
        outcomes = lfsr.iter().map(run_lfsr).collect::<Result<_>>()?;
        for sc in misr {
            outcomes.push(run_misr(sc)?);
        }
    }
    Ok(outcomes)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn selection_filters_kinds() {
        let cfg = AppConfig::default();
        let only_misr = run(&cfg, Selection::Misr, false).unwrap();
        assert_eq!(only_misr.len(), 1);
        assert_eq!(only_misr[0].name(), "misr");
        assert_eq!(only_misr[0].history().len(), 4);

        let all = run(&cfg, Selection::All, false).unwrap();
        assert_eq!(all.len(), 2);
        assert_eq!(all[0].name(), "lfsr");
    }

    #[test]
    fn parallel_matches_sequential() {
        let mut cfg = AppConfig::default();
        for i in 0..8 {
            let mut sc = cfg.lfsr[0].clone();
            sc.name = format!("gen{}", i);
            sc.seed = vec![1, (i & 1) as u8, 0, ((i >> 1) & 1) as u8, 1];
            cfg.lfsr.push(sc);
        }
        let seq = run(&cfg, Selection::All, false).unwrap();
        let par = run(&cfg, Selection::All, true).unwrap();
        assert_eq!(seq, par);
    }

    #[test]
    fn invalid_scenario_stops_everything() {
        let mut cfg = AppConfig::default();
        cfg.misr[0].seed.pop();
        assert!(run(&cfg, Selection::Lfsr, false).is_err());
    }
}
