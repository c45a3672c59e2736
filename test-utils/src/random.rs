// Copyright (c) 2022 RBB S.r.l
// opensource@mintlayer.org
// SPDX-License-Identifier: MIT
// Licensed under the MIT License;
// you may not use this file except in compliance with the License.
// You may obtain a copy of the License at
//
// http://spdx.org/licenses/MIT
//
// Unless required by applicable law or agreed to in writing, software
// distributed under the License is distributed on an "AS IS" BASIS,
// WITHOUT WARRANTIES OR CONDITIONS OF ANY KIND, either express or implied.
// See the License for the specific language governing permissions and
// limitations under the License.

use randomness::{Rng, SeededRng};

#[derive(Clone, Copy, Debug)]
pub struct Seed(pub u64);

impl Seed {
    pub fn from_entropy() -> Self {
        Seed(randomness::make_true_rng().gen::<u64>())
    }

    pub fn from_u64(v: u64) -> Self {
        Seed(v)
    }
}

#[must_use]
pub fn make_seedable_rng(seed: Seed) -> SeededRng {
    randomness::make_seeded_rng(seed.0)
}

/// Makes a PRNG for tests: deterministic values from a possibly non-deterministic seed.
///
/// ```
/// use test_utils::{make_seedable_rng, random::*};
/// let mut rng = make_seedable_rng!(Seed::from_entropy());
/// ```
/// The seed is printed to stdout, e.g.
///
/// `gendata-lib/src/experiment.rs:140 Using seed '4862969352335513650' for the PRNG`
///
/// so a failing case can be reproduced with `Seed::from_u64(4862969352335513650)`.
#[macro_export]
macro_rules! make_seedable_rng {
    ($seed:expr) => {{
        let seed = $seed;
        println!("{}:{} Using seed '{}' for the PRNG", file!(), line!(), seed.0);
        make_seedable_rng(seed)
    }};
}
