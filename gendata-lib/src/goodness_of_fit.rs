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

//! Saturated likelihood goodness-of-fit test of binned counts against an exponential
//! hypothesis truncated to the histogram range.
//!
//! Each bin count is Poisson with mean `lambda_i`. The test statistic is
//!
//! `-2 ln Lambda = -2 * sum(o_i ln(lambda_i) - lambda_i - o_i ln(o_i) + o_i)`
//!
//! and its distribution under the hypothesis is obtained from toy experiments.

use std::{fmt, io::Write, num::NonZeroU64};

use histogram::Histogram;
use randomness::{
    distr::{Distribution, Poisson, PoissonError},
    Rng,
};
use utils::ensure;

#[derive(thiserror::Error, Debug, Clone, PartialEq)]
pub enum GofError {
    #[error("Invalid exponential rate {0}")]
    InvalidRate(f64),
    #[error("At least two bin edges are needed, got {0}")]
    TooFewEdges(usize),
    #[error("Invalid normalization {0}")]
    InvalidNorm(f64),
    #[error("{observed} observed bins vs {expected} expected ones")]
    LengthMismatch { observed: usize, expected: usize },
    #[error("Invalid expected bin mean {0}")]
    InvalidExpectation(f64),
    #[error("Poisson distribution error: {0}")]
    Poisson(#[from] PoissonError),
}

/// Expected counts per bin for `norm` events distributed as `Exp(rate)` truncated to
/// `[edges[0], edges[last]]`.
pub fn expected_bin_means(edges: &[f64], rate: f64, norm: f64) -> Result<Vec<f64>, GofError> {
    ensure!(rate.is_finite() && rate > 0.0, GofError::InvalidRate(rate));
    ensure!(norm.is_finite() && norm >= 0.0, GofError::InvalidNorm(norm));
    ensure!(edges.len() >= 2, GofError::TooFewEdges(edges.len()));

    let survival = |x: f64| (-rate * x).exp();
    let low = edges[0];
    let high = edges[edges.len() - 1];
    let total = survival(low) - survival(high);

    Ok(edges
        .windows(2)
        .map(|bin| norm * (survival(bin[0]) - survival(bin[1])) / total)
        .collect())
}

// ln(0) is taken as 0; the corresponding terms are multiplied by 0 anyway.
fn mlog(x: f64) -> f64 {
    if x == 0.0 {
        0.0
    } else {
        x.ln()
    }
}

fn check_expectations(expected: &[f64]) -> Result<(), GofError> {
    match expected.iter().find(|l| !l.is_finite() || **l < 0.0) {
        Some(l) => Err(GofError::InvalidExpectation(*l)),
        None => Ok(()),
    }
}

fn statistic(observed: &[f64], expected: &[f64]) -> f64 {
    -2.0 * observed
        .iter()
        .zip(expected)
        .map(|(o, l)| o * mlog(*l) - l - o * mlog(*o) + o)
        .sum::<f64>()
}

pub fn neg2_log_lambda(observed: &[f64], expected: &[f64]) -> Result<f64, GofError> {
    ensure!(
        observed.len() == expected.len(),
        GofError::LengthMismatch {
            observed: observed.len(),
            expected: expected.len(),
        }
    );
    check_expectations(expected)?;

    Ok(statistic(observed, expected))
}

/// Fraction of toy experiments whose statistic is strictly greater than `observed_stat`.
pub fn toy_p_value(
    observed_stat: f64,
    expected: &[f64],
    toys: NonZeroU64,
    rng: &mut impl Rng,
) -> Result<f64, GofError> {
    check_expectations(expected)?;

    // Poisson(0) is always 0, and rand_distr refuses a zero mean.
    let distrs = expected
        .iter()
        .map(|l| (*l > 0.0).then(|| Poisson::new(*l)).transpose())
        .collect::<Result<Vec<_>, _>>()?;

    let mut toy_counts = vec![0.0; expected.len()];
    let mut exceeding = 0u64;

    for _ in 0..toys.get() {
        for (count, distr) in toy_counts.iter_mut().zip(&distrs) {
            *count = match distr {
                Some(distr) => distr.sample(rng),
                None => 0.0,
            };
        }
        if statistic(&toy_counts, expected) > observed_stat {
            exceeding += 1;
        }
    }

    Ok(exceeding as f64 / toys.get() as f64)
}

#[derive(Debug, Clone, PartialEq)]
pub struct GofResult {
    pub expected: Vec<f64>,
    pub statistic: f64,
    pub p_value: f64,
    pub toys: NonZeroU64,
}

impl fmt::Display for GofResult {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            " -2ln Lambda = {}, p-value = {}",
            self.statistic, self.p_value
        )
    }
}

impl GofResult {
    pub fn write(&self, out: &mut impl Write) -> std::io::Result<()> {
        writeln!(out, "{self}")
    }
}

/// Tests the histogram's bins against `Exp(rate)`, normalized to the histogram's sum.
pub fn run_goodness_of_fit(
    histogram: &Histogram,
    rate: f64,
    toys: NonZeroU64,
    rng: &mut impl Rng,
) -> Result<GofResult, GofError> {
    let expected = expected_bin_means(&histogram.bin_edges(), rate, histogram.sum())?;
    let statistic = neg2_log_lambda(histogram.bin_contents(), &expected)?;
    let p_value = toy_p_value(statistic, &expected, toys, rng)?;

    Ok(GofResult {
        expected,
        statistic,
        p_value,
        toys,
    })
}
