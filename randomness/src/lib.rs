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

//! All randomness used in the workspace goes through this crate.

pub use rand::{rngs, CryptoRng, Rng, RngCore, SeedableRng};

pub mod distr {
    pub use rand_distr::{Distribution, Exp, ExpError, Poisson, PoissonError};
}

use rand_chacha::ChaChaRng;

/// The generator type used whenever reproducibility matters.
pub type SeededRng = ChaChaRng;

pub fn make_true_rng() -> impl Rng + CryptoRng {
    rngs::StdRng::from_entropy()
}

/// Deterministic generator: the same seed always yields the same stream.
pub fn make_seeded_rng(seed: u64) -> SeededRng {
    ChaChaRng::seed_from_u64(seed)
}

/// A fresh seed from the OS entropy source; log it to be able to reproduce the run.
pub fn make_random_seed() -> u64 {
    make_true_rng().gen()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn same_seed_same_stream() {
        let mut rng1 = make_seeded_rng(123);
        let mut rng2 = make_seeded_rng(123);

        let vals1: Vec<u64> = (0..16).map(|_| rng1.gen()).collect();
        let vals2: Vec<u64> = (0..16).map(|_| rng2.gen()).collect();
        assert_eq!(vals1, vals2);
    }

    #[test]
    fn seeded_stream_is_stable() {
        let mut rng = make_seeded_rng(123);

        let vals: Vec<u64> = (0..3).map(|_| rng.next_u64()).collect();
        assert_eq!(
            vals,
            vec![0xfa21e9becaf4dad6, 0x49bf534b42b2f9f9, 0x06ede413e8d8f1f7]
        );
    }

    #[test]
    fn different_seeds_different_streams() {
        let mut rng1 = make_seeded_rng(1);
        let mut rng2 = make_seeded_rng(2);

        let vals1: Vec<u64> = (0..16).map(|_| rng1.gen()).collect();
        let vals2: Vec<u64> = (0..16).map(|_| rng2.gen()).collect();
        assert_ne!(vals1, vals2);
    }
}
