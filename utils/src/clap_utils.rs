// Copyright (c) 2023 RBB S.r.l
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

use clap::Arg;

/// Make every argument also readable from the env var `<PREFIX>_<ARG_ID>`, uppercased.
///
/// Use with `#[clap(mut_args(clap_utils::env_adder("PREFIX")))]`.
pub fn env_adder(prefix: &str) -> impl FnMut(Arg) -> Arg + '_ {
    move |arg| {
        let env = format!("{prefix}_{}", arg.get_id()).replace('-', "_").to_uppercase();
        arg.env(env)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    use clap::Parser;

    #[derive(Parser, Debug)]
    #[clap(mut_args(env_adder("CLAP_UTILS_TEST")))]
    struct TestOptions {
        #[clap(long)]
        sample_size: Option<u32>,
    }

    #[test]
    fn env_names() {
        let cmd = <TestOptions as clap::CommandFactory>::command();
        let arg = cmd
            .get_arguments()
            .find(|arg| arg.get_id() == "sample_size")
            .expect("arg is present");
        assert_eq!(
            arg.get_env().and_then(|env| env.to_str()),
            Some("CLAP_UTILS_TEST_SAMPLE_SIZE")
        );
    }
}
