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

//! Early exit unless some condition holds.

/// Early exit if given condition is not satisfied.
///
/// * `ensure!(cond)` returns from the enclosing function with [`None`] if `cond` fails
/// * `ensure!(cond, err)` returns from the function with [`Err`]`(err)` if `cond` fails
///
/// ```
/// # use utils::ensure;
/// # #[derive(PartialEq, Eq, Debug)]
/// enum RangeError {
///     Empty,
///     Reversed,
/// }
///
/// fn width(low: u32, high: u32) -> Result<u32, RangeError> {
///     ensure!(low != high, RangeError::Empty);
///     ensure!(low < high, RangeError::Reversed);
///     Ok(high - low)
/// }
///
/// assert_eq!(width(0, 5), Ok(5));
/// assert_eq!(width(3, 3), Err(RangeError::Empty));
/// assert_eq!(width(5, 0), Err(RangeError::Reversed));
/// ```
#[macro_export]
macro_rules! ensure {
    ($cond:expr $(,)?) => {
        $cond.then(|| ())?
    };
    ($cond:expr, $err:expr $(,)?) => {
        $cond.then(|| ()).ok_or_else(|| $err)?
    };
}
