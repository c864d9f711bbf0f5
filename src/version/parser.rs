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

use crate::error::{Result, SemvError};
use crate::version::SemVer;

const PRERELEASE_SEPARATOR: char = '-';
const COMPONENT_SEPARATOR: char = '.';

/// Parses `MAJOR.MINOR.PATCH[-PRERELEASE]`.
///
/// Whitespace (including the ASCII information separators U+001C..=U+001F) is
/// removed from anywhere in the input before splitting, so
/// `" 1 . 2 . 3 - rc1 "` parses the same as `"1.2.3-rc1"`. Everything after the
/// first `-` becomes the prerelease verbatim, including further hyphens and the
/// empty string for a trailing `-`.
pub fn parse(input: &str) -> Result<SemVer> {
    let compact = strip_whitespace(input);

    let halves: Vec<&str> = compact.splitn(2, PRERELEASE_SEPARATOR).collect();
    if halves.is_empty() || halves.len() > 2 {
        return Err(SemvError::MalformedVersion(compact));
    }

    let version_part = halves[0];
    let pre = halves.get(1).map(|&s| s.to_string());

    let components: Vec<&str> = version_part.split(COMPONENT_SEPARATOR).collect();
    let [major, minor, patch] = components.as_slice() else {
        return Err(SemvError::MalformedVersion(compact));
    };

    Ok(SemVer::from_parts(
        parse_component("major", major)?,
        parse_component("minor", minor)?,
        parse_component("patch", patch)?,
        pre,
    ))
}

fn strip_whitespace(input: &str) -> String {
    input.chars().filter(|&c| !is_version_whitespace(c)).collect()
}

/// Unicode whitespace plus the ASCII information separators U+001C..=U+001F,
/// which `char::is_whitespace` leaves out.
fn is_version_whitespace(c: char) -> bool {
    c.is_whitespace() || ('\u{1c}'..='\u{1f}').contains(&c)
}

/// Digits only, no sign, no leading zeros other than a lone "0".
fn parse_component(component: &'static str, value: &str) -> Result<u64> {
    let invalid = || SemvError::InvalidVersionNumber {
        component,
        value: value.to_string(),
    };

    if value.is_empty() || !value.bytes().all(|b| b.is_ascii_digit()) {
        return Err(invalid());
    }
    if value.len() > 1 && value.starts_with('0') {
        return Err(invalid());
    }

    value.parse::<u64>().map_err(|_| invalid())
}
