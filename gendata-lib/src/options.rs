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

//! The gendata command line options.

use std::{ffi::OsString, num::NonZeroU64, path::PathBuf};

use clap::{Parser, ValueEnum};
use serde::{Deserialize, Serialize};
use utils::clap_utils;

pub const CONFIG_NAME: &str = "gendata.toml";

/// How the generated histogram is displayed.
#[derive(ValueEnum, Serialize, Deserialize, Clone, Copy, Debug, Default, PartialEq, Eq)]
#[serde(rename_all = "lowercase")]
pub enum RendererKind {
    /// A bar chart printed to the terminal.
    #[default]
    Text,
    /// An SVG chart written to the output file.
    Svg,
    /// No rendering.
    None,
}

/// Draw exponentially distributed toy data into a five-bin histogram over [0, 1).
///
/// Every option can also be set with a `GENDATA_<OPTION>` env var,
/// e.g. `GENDATA_SAMPLE_COUNT=500`.
#[derive(Parser, Debug, Clone, Default)]
#[clap(mut_args(clap_utils::env_adder("GENDATA")))]
#[clap(author, version, about)]
pub struct Options {
    /// The path to the config file; `./gendata.toml` is used if present.
    #[clap(long, value_name = "PATH")]
    pub config_file: Option<PathBuf>,

    /// Number of exponential draws.
    #[clap(short = 'n', long, value_name = "COUNT")]
    pub sample_count: Option<u64>,

    /// Seed for the random generator; a fresh one is picked and logged if not set.
    #[clap(short, long)]
    pub seed: Option<u64>,

    /// How to display the histogram.
    #[clap(short, long, value_name = "KIND")]
    pub renderer: Option<RendererKind>,

    /// Output file of the svg renderer.
    #[clap(short, long, value_name = "PATH")]
    pub output: Option<PathBuf>,

    /// Also run the saturated likelihood goodness-of-fit test on the generated bins.
    ///
    /// A bare `--gof` means `--gof true`; `--gof false` turns off a test enabled in the config file.
    #[clap(long, value_name = "BOOL", num_args = 0..=1, default_missing_value = "true")]
    pub gof: Option<bool>,

    /// Number of toy experiments used for the goodness-of-fit p-value.
    #[clap(long, value_name = "COUNT")]
    pub gof_toys: Option<NonZeroU64>,
}

impl Options {
    /// Constructs an instance by parsing the given arguments.
    ///
    /// The first argument is the program name. Exits the process on invalid arguments.
    pub fn from_args<A: Into<OsString> + Clone>(args: impl IntoIterator<Item = A>) -> Self {
        Parser::parse_from(args)
    }

    /// Same as [Options::from_args], but returns the error instead of exiting.
    pub fn try_from_args<A: Into<OsString> + Clone>(
        args: impl IntoIterator<Item = A>,
    ) -> Result<Self, clap::Error> {
        Parser::try_parse_from(args)
    }

    /// The explicitly requested config file, or the default one (which may be absent).
    pub fn config_path(&self) -> (PathBuf, bool) {
        match &self.config_file {
            Some(path) => (path.clone(), true),
            None => (PathBuf::from(CONFIG_NAME), false),
        }
    }
}
