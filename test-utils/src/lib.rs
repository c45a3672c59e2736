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

pub mod random;

/// Installs the logger once per test binary, so that `RUST_LOG=debug cargo test` shows logs.
#[ctor::ctor]
fn init_test_logging() {
    logging::init_logging_with_style(logging::LogStyle::Text(logging::TextColoring::Auto));
}

/// Assert that two floats differ by no more than `tolerance`.
#[track_caller]
pub fn assert_approx_eq(actual: f64, expected: f64, tolerance: f64) {
    assert!(
        (actual - expected).abs() <= tolerance,
        "{actual} is not within {tolerance} of {expected}"
    );
}

#[macro_export]
macro_rules! assert_matches_return_val {
    ($in:expr, $pattern:pat $(if $guard:expr)?, $out:expr) => {
        {
            let to_match = $in;
            match to_match {
                $pattern $(if $guard)? => $out,
                _ => {
                    panic!(
                        "Assertion failed: expression {:?} doesn't match pattern {}",
                        to_match,
                        stringify!($pattern)
                    )
                }
            }
        }
    };
}

#[macro_export]
macro_rules! assert_matches {
    ($in:expr, $pattern:pat $(if $guard:expr)?) => {
        $crate::assert_matches_return_val!($in, $pattern $(if $guard)?, ())
    };
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::random::{make_seedable_rng, Seed};
    use randomness::Rng;
    use rstest::rstest;

    #[allow(unused)]
    #[derive(Debug)]
    enum TestEnum {
        E1(usize),
        E2,
    }

    #[test]
    fn assert_matches_return_val_success() {
        let val = assert_matches_return_val!(TestEnum::E1(123), TestEnum::E1(x), x);
        assert_eq!(val, 123);
    }

    #[test]
    #[should_panic]
    fn assert_matches_failure() {
        assert_matches!(TestEnum::E1(123), TestEnum::E2);
    }

    #[test]
    #[should_panic]
    fn assert_approx_eq_failure() {
        assert_approx_eq(1.0, 1.5, 0.1);
    }

    #[rstest]
    #[trace]
    #[case(Seed::from_entropy())]
    fn seeded_rngs_repeat(#[case] seed: Seed) {
        let mut rng1 = crate::make_seedable_rng!(seed);
        let mut rng2 = make_seedable_rng(seed);
        assert_eq!(rng1.gen::<u64>(), rng2.gen::<u64>());
    }
}
