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

use thiserror::Error;

#[derive(Error, Debug, Clone, Copy, PartialEq)]
pub enum HistogramError {
    #[error("A histogram needs at least one bin")]
    NoBins,
    #[error("Histogram range [{low}, {high}) is not finite")]
    NonFiniteRange { low: f64, high: f64 },
    #[error("Histogram range [{low}, {high}) is empty")]
    EmptyRange { low: f64, high: f64 },
}
