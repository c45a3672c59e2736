// Copyright (c) 2021-2023 RBB S.r.l
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

use env_logger::WriteStyle;
use thiserror::Error;

use crate::utils::{get_from_env, GetFromEnvError};

#[derive(Copy, Clone, Debug, PartialEq, Eq)]
pub enum TextColoring {
    On,
    Off,
    Auto,
}

impl From<TextColoring> for WriteStyle {
    fn from(coloring: TextColoring) -> Self {
        match coloring {
            TextColoring::On => WriteStyle::Always,
            TextColoring::Off => WriteStyle::Never,
            TextColoring::Auto => WriteStyle::Auto,
        }
    }
}

#[derive(Copy, Clone, Debug, PartialEq, Eq)]
pub enum LogStyle {
    Text(TextColoring),
    Json,
}

impl Default for LogStyle {
    fn default() -> Self {
        LogStyle::Text(TextColoring::Auto)
    }
}

impl LogStyle {
    pub fn parse(str: &str) -> Result<LogStyle, LogStyleParseError> {
        let str = str.to_lowercase();
        match str.as_str() {
            "json" => Ok(LogStyle::Json),
            "text" => Ok(LogStyle::Text(TextColoring::Auto)),
            "text-colored" => Ok(LogStyle::Text(TextColoring::On)),
            "text-uncolored" => Ok(LogStyle::Text(TextColoring::Off)),
            _ => Err(LogStyleParseError::UnrecognizedFormat(str)),
        }
    }
}

pub fn get_log_style_from_env(env_var_name: &str) -> Result<Option<LogStyle>, LogStyleParseError> {
    get_from_env(env_var_name)?.map(|val| LogStyle::parse(&val)).transpose()
}

#[derive(Debug, Error, PartialEq, Eq)]
pub enum LogStyleParseError {
    #[error("Unrecognized format: {0}")]
    UnrecognizedFormat(String),
    #[error("Env var error: {0:?}")]
    GetFromEnvError(#[from] GetFromEnvError),
}

#[cfg(test)]
mod tests {
    use super::*;

    // Verbose name, so that it doesn't clash with env vars used by other tests.
    static TEST_ENV_VAR: &str = "GENDATA_LOG_STYLE_TEST_ENV_VAR";

    // All checks live in one test because they share the env var.
    #[test]
    fn parse_env_var() {
        let cases = [
            ("text", LogStyle::Text(TextColoring::Auto)),
            ("text-colored", LogStyle::Text(TextColoring::On)),
            ("text-uncolored", LogStyle::Text(TextColoring::Off)),
            ("json", LogStyle::Json),
            ("tEXt", LogStyle::Text(TextColoring::Auto)),
            ("tEXt-coLoRed", LogStyle::Text(TextColoring::On)),
            ("tEXt-uncoLoRed", LogStyle::Text(TextColoring::Off)),
            ("jSoN", LogStyle::Json),
        ];

        for (val, expected) in cases {
            std::env::set_var(TEST_ENV_VAR, val);
            let result = get_log_style_from_env(TEST_ENV_VAR);
            assert_eq!(result, Ok(Some(expected)), "value: {val}");
        }

        // Bad value
        {
            let str = "foo";
            std::env::set_var(TEST_ENV_VAR, str);
            let result = get_log_style_from_env(TEST_ENV_VAR);
            assert_eq!(
                result,
                Err(LogStyleParseError::UnrecognizedFormat(str.to_owned()))
            );
        }

        // Missing value
        {
            std::env::remove_var(TEST_ENV_VAR);
            let result = get_log_style_from_env(TEST_ENV_VAR);
            assert_eq!(result, Ok(None));
        }
    }

    #[test]
    fn coloring_maps_to_write_style() {
        assert_eq!(WriteStyle::from(TextColoring::On), WriteStyle::Always);
        assert_eq!(WriteStyle::from(TextColoring::Off), WriteStyle::Never);
        assert_eq!(WriteStyle::from(TextColoring::Auto), WriteStyle::Auto);
    }
}
