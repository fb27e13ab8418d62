//! Declarative stage descriptors.
//!
//! A descriptor is plain data that names a stage and its fixed parameters.
//! With the `serde` feature enabled, descriptors can be loaded from any serde
//! format; `build` validates them once and produces ready-to-run stages.

#[cfg(feature = "serde")]
use serde::{Deserialize, Serialize};

use crate::{
    control::pid::Pid,
    dsp::{
        biquad::{Biquad, BiquadCoefficients, BiquadKind},
        fir::FirFilter,
        one_pole::{HighPass, LowPass},
        setpoint::Setpoint,
        state_space::StateSpaceFilter,
    },
    error::ConfigError,
    graph::{cascade::Cascade, node::Updater},
};

#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
#[derive(Debug, Clone, PartialEq)]
pub struct ChainDescriptor {
    pub name: String,
    pub description: Option<String>,
    pub stages: Vec<StageDescriptor>,
}

#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
#[derive(Debug, Clone, PartialEq)]
pub enum StageDescriptor {
    Setpoint {
        target: f64,
    },
    LowPass {
        cutoff_hz: f64,
        dt: f64,
    },
    HighPass {
        cutoff_hz: f64,
        dt: f64,
    },
    Biquad(BiquadDescriptor),
    StateSpace {
        a: Vec<Vec<f64>>,
        b: Vec<f64>,
        c: Vec<f64>,
        d: f64,
        #[cfg_attr(feature = "serde", serde(default))]
        initial_state: Option<Vec<f64>>,
    },
    Fir {
        taps: Vec<f64>,
    },
    Pid {
        kp: f64,
        ki: f64,
        kd: f64,
        dt: f64,
        #[cfg_attr(feature = "serde", serde(default))]
        integral_limit: f64,
        #[cfg_attr(feature = "serde", serde(default))]
        setpoint: f64,
    },
}

#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum BiquadDescriptor {
    Coefficients(BiquadCoefficients),
    Design {
        kind: BiquadKind,
        sample_rate: f64,
        frequency: f64,
        q: f64,
        gain_db: f64,
    },
}

impl StageDescriptor {
    pub fn kind_name(&self) -> &'static str {
        match self {
            StageDescriptor::Setpoint { .. } => "setpoint",
            StageDescriptor::LowPass { .. } => "lowpass",
            StageDescriptor::HighPass { .. } => "highpass",
            StageDescriptor::Biquad(_) => "biquad",
            StageDescriptor::StateSpace { .. } => "state-space",
            StageDescriptor::Fir { .. } => "fir",
            StageDescriptor::Pid { .. } => "pid",
        }
    }

    /// Validate the descriptor and build the stage it describes.
    pub fn build(&self) -> Result<Box<dyn Updater>, ConfigError> {
        let stage = self.build_inner();
        match &stage {
            Ok(_) => log::debug!("built {} stage", self.kind_name()),
            Err(err) => log::warn!("rejected {} stage: {}", self.kind_name(), err),
        }
        stage
    }

    fn build_inner(&self) -> Result<Box<dyn Updater>, ConfigError> {
        match self {
            StageDescriptor::Setpoint { target } => Ok(Box::new(Setpoint::new(*target))),
            StageDescriptor::LowPass { cutoff_hz, dt } => {
                check_cutoff(*cutoff_hz)?;
                check_dt(*dt)?;
                Ok(Box::new(LowPass::new(*cutoff_hz, *dt)))
            }
            StageDescriptor::HighPass { cutoff_hz, dt } => {
                check_cutoff(*cutoff_hz)?;
                check_dt(*dt)?;
                Ok(Box::new(HighPass::new(*cutoff_hz, *dt)))
            }
            StageDescriptor::Biquad(biquad) => Ok(Box::new(biquad.build()?)),
            StageDescriptor::StateSpace {
                a,
                b,
                c,
                d,
                initial_state,
            } => {
                let filter = StateSpaceFilter::new(a, b, c, *d)?;
                let filter = match initial_state {
                    Some(x0) => filter.with_initial_state(x0)?,
                    None => filter,
                };
                Ok(Box::new(filter))
            }
            StageDescriptor::Fir { taps } => Ok(Box::new(FirFilter::new(taps)?)),
            StageDescriptor::Pid {
                kp,
                ki,
                kd,
                dt,
                integral_limit,
                setpoint,
            } => {
                // kd · (Δerr / 0) is NaN even with kd == 0
                check_dt(*dt)?;
                let pid = Pid::new(*kp, *ki, *kd, *dt)
                    .with_integral_limit(*integral_limit)
                    .with_setpoint(*setpoint);
                Ok(Box::new(pid))
            }
        }
    }
}

impl BiquadDescriptor {
    pub fn build(&self) -> Result<Biquad, ConfigError> {
        match *self {
            BiquadDescriptor::Coefficients(coeffs) => Ok(Biquad::from(coeffs)),
            BiquadDescriptor::Design {
                kind,
                sample_rate,
                frequency,
                q,
                gain_db,
            } => {
                if !(sample_rate.is_finite() && sample_rate > 0.0) {
                    return Err(ConfigError::InvalidSampleRate(sample_rate));
                }
                let nyquist = sample_rate / 2.0;
                if !(frequency > 0.0 && frequency < nyquist) {
                    return Err(ConfigError::InvalidFrequency {
                        frequency,
                        limit: nyquist,
                    });
                }
                if !(q.is_finite() && q > 0.0) {
                    return Err(ConfigError::InvalidQuality(q));
                }
                Ok(Biquad::design(kind, sample_rate, frequency, q, gain_db))
            }
        }
    }
}

impl ChainDescriptor {
    pub fn new(name: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            description: None,
            stages: Vec::new(),
        }
    }

    pub fn stage(mut self, stage: StageDescriptor) -> Self {
        self.stages.push(stage);
        self
    }

    /// Build every stage in order. Fails on the first invalid stage.
    pub fn build(&self) -> Result<Cascade, ConfigError> {
        let mut chain = Cascade::new();
        for stage in &self.stages {
            chain.push_boxed(stage.build()?);
        }
        log::debug!("built chain '{}' with {} stages", self.name, chain.len());
        Ok(chain)
    }
}

fn check_dt(dt: f64) -> Result<(), ConfigError> {
    if dt.is_finite() && dt > 0.0 {
        Ok(())
    } else {
        Err(ConfigError::InvalidTimeStep(dt))
    }
}

fn check_cutoff(cutoff_hz: f64) -> Result<(), ConfigError> {
    if cutoff_hz.is_finite() && cutoff_hz > 0.0 {
        Ok(())
    } else {
        Err(ConfigError::InvalidFrequency {
            frequency: cutoff_hz,
            limit: f64::INFINITY,
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::graph::node::Updater;

    fn servo_chain() -> ChainDescriptor {
        ChainDescriptor::new("servo")
            .stage(StageDescriptor::Biquad(BiquadDescriptor::Design {
                kind: BiquadKind::LowPass,
                sample_rate: 1000.0,
                frequency: 100.0,
                q: std::f64::consts::FRAC_1_SQRT_2,
                gain_db: 0.0,
            }))
            .stage(StageDescriptor::Pid {
                kp: 0.5,
                ki: 2.0,
                kd: 0.0,
                dt: 1e-3,
                integral_limit: 10.0,
                setpoint: 1.0,
            })
    }

    #[test]
    fn builds_chain_matching_hand_built_stages() {
        let mut chain = servo_chain().build().unwrap();
        assert_eq!(chain.len(), 2);

        let mut bq = Biquad::lowpass(1000.0, 100.0, std::f64::consts::FRAC_1_SQRT_2, 0.0);
        let mut pid = Pid::new(0.5, 2.0, 0.0, 1e-3)
            .with_integral_limit(10.0)
            .with_setpoint(1.0);

        for i in 0..50 {
            let x = (i as f64 * 0.05).sin();
            assert_eq!(chain.update(x), pid.update(bq.update(x)));
        }
    }

    #[test]
    fn rejects_zero_dt_with_integral_gain() {
        let stage = StageDescriptor::Pid {
            kp: 1.0,
            ki: 1.0,
            kd: 0.0,
            dt: 0.0,
            integral_limit: 0.0,
            setpoint: 0.0,
        };
        assert_eq!(stage.build().err(), Some(ConfigError::InvalidTimeStep(0.0)));
    }

    #[test]
    fn rejects_zero_dt_for_p_only() {
        let stage = StageDescriptor::Pid {
            kp: 2.0,
            ki: 0.0,
            kd: 0.0,
            dt: 0.0,
            integral_limit: 0.0,
            setpoint: 0.0,
        };
        assert_eq!(stage.build().err(), Some(ConfigError::InvalidTimeStep(0.0)));
    }

    #[test]
    fn rejects_design_above_nyquist() {
        let stage = BiquadDescriptor::Design {
            kind: BiquadKind::Notch,
            sample_rate: 1000.0,
            frequency: 600.0,
            q: 1.0,
            gain_db: 0.0,
        };
        assert!(matches!(
            stage.build(),
            Err(ConfigError::InvalidFrequency { limit, .. }) if limit == 500.0
        ));
    }

    #[test]
    fn rejects_bad_q_and_sample_rate() {
        let design = |sample_rate, q| BiquadDescriptor::Design {
            kind: BiquadKind::Peak,
            sample_rate,
            frequency: 10.0,
            q,
            gain_db: 3.0,
        };
        assert_eq!(design(1000.0, 0.0).build().err(), Some(ConfigError::InvalidQuality(0.0)));
        assert_eq!(design(-1.0, 1.0).build().err(), Some(ConfigError::InvalidSampleRate(-1.0)));
    }

    #[test]
    fn rejects_bad_single_pole() {
        let stage = StageDescriptor::LowPass {
            cutoff_hz: 0.0,
            dt: 1e-3,
        };
        assert!(matches!(stage.build(), Err(ConfigError::InvalidFrequency { .. })));

        let stage = StageDescriptor::HighPass {
            cutoff_hz: 10.0,
            dt: -1.0,
        };
        assert_eq!(stage.build().err(), Some(ConfigError::InvalidTimeStep(-1.0)));
    }

    #[test]
    fn propagates_stage_construction_errors() {
        let chain = ChainDescriptor::new("broken")
            .stage(StageDescriptor::Setpoint { target: 1.0 })
            .stage(StageDescriptor::Fir { taps: vec![] });
        assert_eq!(chain.build().err(), Some(ConfigError::EmptyTaps));

        let stage = StageDescriptor::StateSpace {
            a: vec![vec![0.5]],
            b: vec![1.0],
            c: vec![1.0],
            d: 0.0,
            initial_state: Some(vec![1.0, 2.0]),
        };
        assert!(matches!(
            stage.build(),
            Err(ConfigError::DimensionMismatch { what: "initial state", .. })
        ));
    }

    #[test]
    fn state_space_initial_state_is_applied() {
        let stage = StageDescriptor::StateSpace {
            a: vec![vec![1.0]],
            b: vec![0.0],
            c: vec![1.0],
            d: 0.0,
            initial_state: Some(vec![4.0]),
        };
        let mut filter = stage.build().unwrap();
        assert_eq!(filter.update(0.0), 4.0);
    }
}
