use std::fmt;
use std::io::Write;

use log::debug;
use serde::{Deserialize, Serialize};

use crate::error::Result;
use crate::format::{real, Block, CfgWriter};
use crate::optim::LrSchedule;

/// Learning rate decay policy tag.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum DecayPolicy {
    /// Multiply the rate by a scale at each scheduled step.
    #[default]
    Steps,
}

impl fmt::Display for DecayPolicy {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            DecayPolicy::Steps => f.write_str("steps"),
        }
    }
}

/// Training hyperparameters written to the `# Optimization Parameters`
/// block.
///
/// `burn_in` is per GPU and `batches_per_class` per class; the rendered
/// `burn_in` and `max_batches` are scaled by `num_gpus` and `num_classes`.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Optimizer {
    pub batch: u32,
    pub subdivisions: u32,
    pub decay: f64,
    pub learning_rate: f64,
    pub momentum: f64,
    pub burn_in: u64,
    pub num_gpus: u64,
    pub batches_per_class: u64,
    pub num_classes: u64,
    pub policy: DecayPolicy,
    pub schedule: LrSchedule,
}

impl Optimizer {
    /// `burn_in` as written: per-GPU burn-in times the GPU count,
    /// saturating at `u64::MAX`.
    pub fn total_burn_in(&self) -> u64 {
        self.burn_in.saturating_mul(self.num_gpus)
    }

    /// `max_batches` as written: batches per class times the class count,
    /// saturating at `u64::MAX`.
    pub fn max_batches(&self) -> u64 {
        self.batches_per_class.saturating_mul(self.num_classes)
    }
}

impl Default for Optimizer {
    fn default() -> Self {
        Optimizer {
            batch: 64,
            subdivisions: 64,
            decay: 0.0005,
            learning_rate: 0.001,
            momentum: 0.9,
            burn_in: 1000,
            num_gpus: 2,
            batches_per_class: 2000,
            num_classes: 80,
            policy: DecayPolicy::Steps,
            schedule: [(400_000, 0.1), (450_000, 0.1)].into_iter().collect(),
        }
    }
}

impl Block for Optimizer {
    fn export<W: Write>(&self, out: &mut CfgWriter<W>) -> Result<()> {
        debug!("optimizer: lr {}, {} scheduled steps", self.learning_rate, self.schedule.len());
        out.open("# Optimization Parameters")?;
        out.field("batch", self.batch)?;
        out.field("subdivisions", self.subdivisions)?;
        out.field("decay", real(self.decay))?;
        out.field("learning_rate", real(self.learning_rate))?;
        out.field("momentum", real(self.momentum))?;
        out.field("burn_in", self.total_burn_in())?;
        out.field("max_batches", self.max_batches())?;
        out.field("policy", self.policy)?;
        out.field("steps", self.schedule.steps())?;
        out.field("scales", self.schedule.scales())?;
        out.blank()?;
        Ok(())
    }
}
