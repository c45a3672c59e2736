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

mod log_style;
mod utils;

use std::io::Write;

use env_logger::{Builder, Env};

pub use log;

pub use log_style::{get_log_style_from_env, LogStyle, LogStyleParseError, TextColoring};
pub use utils::{get_from_env, GetFromEnvError};

/// The env var that selects the log output style, see [LogStyle::parse].
pub const LOG_STYLE_ENV_VAR_NAME: &str = "GENDATA_LOG_STYLE";

static INITIALIZE_LOGGER_ONCE_FLAG: std::sync::Once = std::sync::Once::new();

/// Initialize logging with the style from [LOG_STYLE_ENV_VAR_NAME] (plain text by default).
///
/// Only the first successful call has an effect.
pub fn init_logging() -> Result<(), LogStyleParseError> {
    let style = get_log_style_from_env(LOG_STYLE_ENV_VAR_NAME)?.unwrap_or_default();
    init_logging_with_style(style);
    Ok(())
}

pub fn init_logging_with_style(style: LogStyle) {
    INITIALIZE_LOGGER_ONCE_FLAG.call_once(|| {
        // Another logger may already be installed (e.g. by a test harness); keep it.
        let _ = make_builder(style).try_init();
    });
}

fn make_builder(style: LogStyle) -> Builder {
    let mut builder = Builder::from_env(Env::default());

    match style {
        LogStyle::Text(coloring) => {
            builder.write_style(coloring.into());
        }
        LogStyle::Json => {
            builder.write_style(env_logger::WriteStyle::Never);
            builder.format(|buf, record| {
                let line = serde_json::json!({
                    "timestamp": buf.timestamp().to_string(),
                    "level": record.level().as_str(),
                    "target": record.target(),
                    "message": record.args().to_string(),
                });
                writeln!(buf, "{line}")
            });
        }
    }

    builder
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn initialize_twice() {
        init_logging_with_style(LogStyle::Json);
        init_logging_with_style(LogStyle::Text(TextColoring::Off));
        log::info!("still alive");
    }
}
