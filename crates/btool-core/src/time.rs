// Dweve BTool - Benchmark Result Tabulation
//
// Copyright (c) 2025 Dweve IP B.V. and individual contributors.
//
// SPDX-License-Identifier: Apache-2.0
//
// Licensed under the Apache License, Version 2.0 (the "License");
// you may not use this file except in compliance with the License.
// You may obtain a copy of the License in the LICENSE file at the
// root of this repository or at: http://www.apache.org/licenses/LICENSE-2.0
//
// Unless required by applicable law or agreed to in writing, software
// distributed under the License is distributed on an "AS IS" BASIS,
// WITHOUT WARRANTIES OR CONDITIONS OF ANY KIND, either express or implied.
// See the License for the specific language governing permissions and
// limitations under the License.

//! Time notation helpers.

use crate::error::{CoreError, Result};

/// Converts `[[h:]m:]s` notation to seconds.
///
/// # Examples
///
/// ```
/// use btool_core::xml_time;
///
/// assert_eq!(xml_time("600").unwrap(), 600);
/// assert_eq!(xml_time("1:30").unwrap(), 90);
/// assert_eq!(xml_time("2:00:05").unwrap(), 7205);
/// assert!(xml_time("1:2:3:4").is_err());
/// ```
pub fn xml_time(value: &str) -> Result<u64> {
    let parts: Vec<&str> = value.trim().split(':').collect();
    if parts.len() > 3 {
        return Err(CoreError::InvalidTime(value.to_string()));
    }
    let mut seconds = 0u64;
    for part in &parts {
        let unit: u64 = part
            .trim()
            .parse()
            .map_err(|_| CoreError::InvalidTime(value.to_string()))?;
        seconds = seconds
            .checked_mul(60)
            .and_then(|s| s.checked_add(unit))
            .ok_or_else(|| CoreError::InvalidTime(value.to_string()))?;
    }
    Ok(seconds)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_seconds_only() {
        assert_eq!(xml_time("0").unwrap(), 0);
        assert_eq!(xml_time(" 42 ").unwrap(), 42);
    }

    #[test]
    fn test_minutes_overflowing_seconds() {
        assert_eq!(xml_time("1:75").unwrap(), 135);
    }

    #[test]
    fn test_rejects_garbage() {
        assert!(xml_time("").is_err());
        assert!(xml_time("abc").is_err());
        assert!(xml_time("1::2").is_err());
    }

    #[test]
    fn test_rejects_out_of_range() {
        assert!(matches!(
            xml_time("999999999999999999:0:0"),
            Err(CoreError::InvalidTime(_))
        ));
        assert!(xml_time("18446744073709551616").is_err());
        assert_eq!(xml_time("18446744073709551615").unwrap(), u64::MAX);
    }
}
