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

use std::io::Write;

use anyhow::{Context, Result};
use histogram::Histogram;
use logging::log;

use crate::{
    config_file::GendataConfig,
    experiment::Experiment,
    goodness_of_fit::{run_goodness_of_fit, GofResult},
    options::Options,
    render::{make_renderer, Renderer},
};

#[derive(Debug, Clone)]
pub struct RunSummary {
    pub config: GendataConfig,
    /// The seed actually used, either configured or freshly drawn.
    pub seed: u64,
    pub histogram: Histogram,
    pub gof: Option<GofResult>,
}

/// Resolve the configuration and run with the renderer it selects.
pub fn run(options: Options, out: &mut impl Write) -> Result<RunSummary> {
    let config = GendataConfig::from_options(&options)?;
    let mut renderer = make_renderer(&config);
    run_with_renderer(config, renderer.as_mut(), out)
}

pub fn run_with_renderer(
    config: GendataConfig,
    renderer: &mut dyn Renderer,
    out: &mut impl Write,
) -> Result<RunSummary> {
    log::debug!("Running with {config:?}");

    let seed = config.seed.unwrap_or_else(randomness::make_random_seed);
    log::info!("Using seed {seed} for {} draws", config.sample_count);

    let mut experiment = Experiment::new(config.sample_count, randomness::make_seeded_rng(seed));
    let histogram = experiment.run(renderer, out).context("Experiment failed")?;

    let gof = if config.gof {
        let result = run_goodness_of_fit(
            &histogram,
            experiment.rate(),
            config.gof_toys,
            experiment.rng_mut(),
        )
        .context("Goodness-of-fit test failed")?;
        log::debug!("Expected bin means: {:?}", result.expected);
        result.write(out)?;
        Some(result)
    } else {
        None
    };

    Ok(RunSummary {
        config,
        seed,
        histogram,
        gof,
    })
}

#[cfg(test)]
mod tests {
    use super::*;

    use std::num::NonZeroU64;

    use crate::{options::RendererKind, render::NullRenderer};

    fn config(sample_count: u64, seed: Option<u64>, gof: bool) -> GendataConfig {
        GendataConfig {
            sample_count,
            seed,
            renderer: RendererKind::None,
            output: "unused.svg".into(),
            gof,
            gof_toys: NonZeroU64::new(500).unwrap(),
        }
    }

    fn run_to_string(config: GendataConfig) -> (RunSummary, String) {
        let mut out = Vec::new();
        let summary = run_with_renderer(config, &mut NullRenderer, &mut out).unwrap();
        (summary, String::from_utf8(out).unwrap())
    }

    #[test]
    fn zero_draws() {
        let (summary, output) = run_to_string(config(0, Some(1), false));

        assert_eq!(output, " total = 0\n");
        assert_eq!(summary.histogram.sum(), 0.0);
        assert_eq!(summary.seed, 1);
        assert!(summary.gof.is_none());
    }

    #[test]
    fn seeded_runs_repeat() {
        let (summary1, output1) = run_to_string(config(1000, Some(42), true));
        let (summary2, output2) = run_to_string(config(1000, Some(42), true));

        assert_eq!(output1, output2);
        assert_eq!(summary1.histogram, summary2.histogram);
        assert_eq!(summary1.gof, summary2.gof);

        let lines: Vec<_> = output1.lines().collect();
        assert_eq!(lines.len(), 2);
        assert_eq!(lines[0], format!(" total = {}", summary1.histogram.sum()));
        assert!(lines[1].starts_with(" -2ln Lambda = "));
    }

    #[test]
    fn unseeded_run_reports_its_seed() {
        let (summary, output) = run_to_string(config(100, None, false));
        let (replayed, replayed_output) = run_to_string(config(100, Some(summary.seed), false));

        assert_eq!(summary.histogram, replayed.histogram);
        assert_eq!(output, replayed_output);
    }

    #[test]
    fn run_from_options() {
        let dir = tempfile::TempDir::new().unwrap();
        let config_path = dir.path().join("gendata.toml");
        let svg_path = dir.path().join("hist.svg");
        std::fs::write(
            &config_path,
            format!(
                "sample_count = 50\nrenderer = \"svg\"\noutput = {:?}\n",
                svg_path.to_str().unwrap()
            ),
        )
        .unwrap();

        let options = Options {
            config_file: Some(config_path),
            seed: Some(7),
            ..Default::default()
        };
        let mut out = Vec::new();
        let summary = run(options, &mut out).unwrap();

        assert_eq!(summary.config.sample_count, 50);
        assert_eq!(summary.histogram.entries(), 50);
        assert!(svg_path.exists());
        assert_eq!(
            String::from_utf8(out).unwrap(),
            format!(" total = {}\n", summary.histogram.sum())
        );
    }

    #[test]
    fn missing_explicit_config_fails() {
        let options = Options {
            config_file: Some("/nonexistent/gendata.toml".into()),
            ..Default::default()
        };
        assert!(run(options, &mut Vec::new()).is_err());
    }
}
