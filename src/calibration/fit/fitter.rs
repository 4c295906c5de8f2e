//! Coordinate-descent LUT fitting against the reference chart.

use rayon::prelude::*;
use tracing::{debug, info, instrument};

use crate::calibration::chart;
use crate::calibration::color::{MAX_COLOR, MIN_COLOR};
use crate::calibration::common::error::{CalibrationError, Result};
use crate::calibration::fit::minimum::find_possible_minimum;
use crate::calibration::image::Image;
use crate::calibration::lut::{ColorMap, Lattice};

#[derive(Debug, Clone, Copy)]
pub struct FitConfig {
    /// Sub-ranges sampled per minimum-search level.
    pub parallelism: u32,
    /// Accepted values move `1/blend_divisor` of the way toward the found
    /// minimum. Each lattice point feeds 8 neighboring interpolation cells,
    /// so snapping a point straight to its 1-D optimum would destabilize
    /// the cells around it.
    pub blend_divisor: i32,
    /// Sweep cap; exceeding it surfaces `DidNotConverge` instead of
    /// looping forever on a pathological objective.
    pub max_sweeps: usize,
}

impl Default for FitConfig {
    fn default() -> Self {
        Self {
            parallelism: 4,
            blend_divisor: 8,
            max_sweeps: 64,
        }
    }
}

#[derive(Debug, Clone, Copy)]
pub struct FitReport {
    /// Sweeps run, including the final zero-movement sweep.
    pub sweeps: usize,
    /// Chart score of the fitted LUT against the reference image.
    pub score: u64,
}

/// Fits a LUT to a reference image by coordinate descent: every lattice
/// channel in turn is moved toward the value minimizing the chart score
/// with all other channels held at their pre-sweep snapshot, until a full
/// sweep produces no movement.
pub struct LutFitter {
    config: FitConfig,
}

impl LutFitter {
    pub fn new(config: FitConfig) -> Self {
        Self { config }
    }

    #[instrument(skip(self, lut, reference), fields(channels = lut.channel_count()))]
    pub fn fit<L>(&self, lut: &mut L, reference: &Image) -> Result<FitReport>
    where
        L: ColorMap + Lattice + Clone + Sync,
    {
        let mut last_diff = 0;
        for sweep in 1..=self.config.max_sweeps {
            let diff = self.sweep(lut, reference);
            let score = chart::score_map(lut, reference);
            info!(sweep, diff, score, "sweep complete");

            if diff == 0 {
                return Ok(FitReport { sweeps: sweep, score });
            }
            last_diff = diff;
        }

        Err(CalibrationError::DidNotConverge {
            sweeps: self.config.max_sweeps,
            diff: last_diff,
        })
    }

    /// One full pass over every lattice channel. Returns the total absolute
    /// movement accepted across the sweep.
    ///
    /// Every channel is fit against the same pre-sweep snapshot, never
    /// against neighbors' in-progress updates, which keeps the per-channel
    /// searches independent and lets them run in parallel. Each trial
    /// evaluation mutates its own copy of the snapshot, so no trial ever
    /// pollutes the lattice under optimization.
    pub fn sweep<L>(&self, lut: &mut L, reference: &Image) -> u64
    where
        L: ColorMap + Lattice + Clone + Sync,
    {
        let snapshot = lut.clone();

        let targets: Vec<(usize, i32)> = (0..snapshot.channel_count())
            .into_par_iter()
            .map(|index| {
                let objective = |value: i32| {
                    let mut trial = snapshot.clone();
                    trial.set_channel(index, value);
                    chart::score_map(&trial, reference)
                };
                let target =
                    find_possible_minimum(MIN_COLOR, MAX_COLOR, self.config.parallelism, objective);
                (index, target)
            })
            .collect();

        let mut diff = 0u64;
        for (index, target) in targets {
            let current = snapshot.channel(index);
            let blended = current + (target - current) / self.config.blend_divisor;
            if blended != current {
                debug!(index, current, target, blended, "channel moved");
            }
            diff += u64::from(blended.abs_diff(current));
            lut.set_channel(index, blended);
        }
        diff
    }
}

impl Default for LutFitter {
    fn default() -> Self {
        Self::new(FitConfig::default())
    }
}
