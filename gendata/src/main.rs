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

pub fn run() -> anyhow::Result<()> {
    logging::init_logging()?;

    let opts = gendata_lib::Options::from_args(std::env::args_os());
    let mut stdout = std::io::stdout().lock();
    let summary = gendata_lib::run(opts, &mut stdout)?;

    logging::log::debug!(
        "Done: seed {}, {} entries, {} overflow",
        summary.seed,
        summary.histogram.entries(),
        summary.histogram.overflow()
    );

    Ok(())
}

fn main() {
    if std::env::var("RUST_LOG").is_err() {
        std::env::set_var("RUST_LOG", "info");
    }

    run().unwrap_or_else(|err| {
        eprintln!("gendata failed: {err:?}");
        std::process::exit(1)
    })
}
