// Copyright (c) 2022 RBB S.r.l
// opensource@mintlayer.org
// SPDX-License-Identifier: MIT
// Licensed under the MIT License;
// you may not use this file except in compliance with the License.
// You may obtain a copy of the License at
//
// https://github.com/mintlayer/mintlayer-core/blob/master/LICENSE
//
// Unless required by applicable law or agreed to in writing, software
// distributed under the License is distributed on an "AS IS" BASIS,
// WITHOUT WARRANTIES OR CONDITIONS OF ANY KIND, either express or implied.
// See the License for the specific language governing permissions and
// limitations under the License.

//! Sampling of the exponential toy data and the total report.

use std::io::Write;

use histogram::{Histogram, HistogramError};
use logging::log;
use randomness::{
    distr::{Distribution, Exp, ExpError},
    Rng,
};
use utils::ensure;

use crate::render::{RenderError, Renderer};

/// Rate `a` of the exponential distribution; the mean of a draw is `1 / a`.
pub const EXPONENTIAL_RATE: f64 = 2.0;
pub const BINS_COUNT: usize = 5;
pub const RANGE_LOW: f64 = 0.0;
pub const RANGE_HIGH: f64 = 1.0;

pub const TOTAL_LABEL: &str = " total = ";

#[derive(thiserror::Error, Debug)]
pub enum ExperimentError {
    #[error("Invalid exponential rate {0}")]
    InvalidRate(f64),
    #[error("Exponential distribution error: {0}")]
    Distribution(#[from] ExpError),
    #[error("Histogram error: {0}")]
    Histogram(#[from] HistogramError),
    #[error("Render error: {0}")]
    Render(#[from] RenderError),
    #[error("Failed to write the total: {0}")]
    Output(#[from] std::io::Error),
}

/// An empty histogram with the fixed layout: [BINS_COUNT] bins over `[RANGE_LOW, RANGE_HIGH)`.
pub fn make_histogram() -> Result<Histogram, HistogramError> {
    Histogram::new(BINS_COUNT, RANGE_LOW, RANGE_HIGH)
}

/// Draw `sample_count` values from `Exp(rate)` into a fresh histogram.
///
/// Draws at or above [RANGE_HIGH] end up in the overflow and are not part of any bin.
pub fn generate_histogram(
    sample_count: u64,
    rate: f64,
    rng: &mut impl Rng,
) -> Result<Histogram, ExperimentError> {
    ensure!(
        rate.is_finite() && rate > 0.0,
        ExperimentError::InvalidRate(rate)
    );
    let distr = Exp::new(rate)?;
    let mut histogram = make_histogram()?;

    for _ in 0..sample_count {
        histogram.fill(distr.sample(rng));
    }

    log::debug!(
        "Generated {} draws: bins {:?}, underflow {}, overflow {}",
        histogram.entries(),
        histogram.bin_contents(),
        histogram.underflow(),
        histogram.overflow(),
    );

    Ok(histogram)
}

/// Writes the single ` total = <sum>` line.
pub fn write_total(out: &mut impl Write, histogram: &Histogram) -> std::io::Result<()> {
    writeln!(out, "{TOTAL_LABEL}{}", histogram.sum())
}

/// Sample, bin, render and report, with a caller-provided generator.
pub struct Experiment<R> {
    sample_count: u64,
    rate: f64,
    rng: R,
}

impl<R: Rng> Experiment<R> {
    pub fn new(sample_count: u64, rng: R) -> Self {
        Self {
            sample_count,
            rate: EXPONENTIAL_RATE,
            rng,
        }
    }

    pub fn sample_count(&self) -> u64 {
        self.sample_count
    }

    pub fn rate(&self) -> f64 {
        self.rate
    }

    pub fn rng_mut(&mut self) -> &mut R {
        &mut self.rng
    }

    pub fn generate(&mut self) -> Result<Histogram, ExperimentError> {
        generate_histogram(self.sample_count, self.rate, &mut self.rng)
    }

    pub fn run(
        &mut self,
        renderer: &mut dyn Renderer,
        out: &mut impl Write,
    ) -> Result<Histogram, ExperimentError> {
        let histogram = self.generate()?;
        renderer.render(&histogram)?;
        write_total(out, &histogram)?;
        Ok(histogram)
    }
}
