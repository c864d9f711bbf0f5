// Copyright 2025 dentsusoken
//
// Licensed under the Apache License, Version 2.0 (the "License");
// you may not use this file except in compliance with the License.
// You may obtain a copy of the License at
//
//     http://www.apache.org/licenses/LICENSE-2.0
//
// Unless required by applicable law or agreed to in writing, software
// distributed under the License is distributed on an "AS IS" BASIS,
// WITHOUT WARRANTIES OR CONDITIONS OF ANY KIND, either express or implied.
// See the License for the specific language governing permissions and
// limitations under the License.

use crate::error::SemvError;

pub struct ErrorContext<'a> {
    pub error: &'a SemvError,
    pub suggestion: Option<String>,
    pub details: Option<String>,
}

impl<'a> ErrorContext<'a> {
    pub fn new(error: &'a SemvError) -> Self {
        let (suggestion, details) = match error {
            SemvError::MalformedVersion(input) => {
                let suggestion = Some(
                    "Version format should be: 'MAJOR.MINOR.PATCH' or \
                     'MAJOR.MINOR.PATCH-PRERELEASE' (e.g., '1.2.3' or '1.2.3-beta.1')."
                        .to_string(),
                );
                let details = if input.is_empty() {
                    Some("The version string is empty.".to_string())
                } else {
                    Some(
                        "Expected exactly three dot-separated numbers before the first '-'."
                            .to_string(),
                    )
                };
                (suggestion, details)
            }
            SemvError::InvalidVersionNumber { component, .. } => {
                let suggestion = Some(
                    "Each of MAJOR, MINOR and PATCH must be a non-negative integer written \
                     without a sign or leading zeros (e.g., '0', '7', '12')."
                        .to_string(),
                );
                let details = Some(format!(
                    "The {component} component is not a valid number."
                ));
                (suggestion, details)
            }
            SemvError::ConfigError(msg) => {
                let config_path = if cfg!(windows) {
                    "%USERPROFILE%\\.semv\\config.toml"
                } else {
                    "~/.semv/config.toml"
                };
                let suggestion = Some(format!(
                    "Check the configuration file at {config_path} (or under $SEMV_HOME). \
                     Removing it restores the defaults."
                ));
                let details = Some(msg.clone());
                (suggestion, details)
            }
            SemvError::Io(e) => {
                let details = Some(format!("I/O operation failed: {e}"));
                (None, details)
            }
            SemvError::Json(_) => (None, None),
        };

        Self {
            error,
            suggestion,
            details,
        }
    }
}
