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

//! Generates toy data for the exponential goodness-of-fit exercise: samples an exponential
//! distribution into a five-bin histogram over `[0, 1)`, renders it and reports the total.

pub mod config_file;
pub mod experiment;
pub mod goodness_of_fit;
pub mod options;
pub mod render;
mod runner;

pub use config_file::{GendataConfig, GendataConfigFile};
pub use experiment::{Experiment, ExperimentError};
pub use options::{Options, RendererKind};
pub use runner::{run, RunSummary};
