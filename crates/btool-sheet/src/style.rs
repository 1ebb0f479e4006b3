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

//! Best/worst highlighting.

use crate::cell::Style;
use crate::stats::{nan_max, nan_median, nan_min};

/// Which direction of a comparison set is desirable.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Orientation {
    LowerIsBetter,
    HigherIsBetter,
}

/// Tags for one comparison set.
///
/// A value is best when it equals the minimum, lies strictly below the
/// median and the spread `max - min` exceeds `threshold`; worst is the
/// mirror image with the maximum. Sets where the better direction is higher
/// are compared on negated values. Missing values are never tagged.
///
/// # Examples
///
/// ```
/// use btool_sheet::{classify, Orientation, Style};
///
/// let tags = classify(&[7.0, 10.0], 2.0, Orientation::LowerIsBetter);
/// assert_eq!(tags, vec![Style::Best, Style::Worst]);
///
/// let tags = classify(&[7.0, 8.0], 2.0, Orientation::LowerIsBetter);
/// assert_eq!(tags, vec![Style::None, Style::None]);
/// ```
pub fn classify(values: &[f64], threshold: f64, orientation: Orientation) -> Vec<Style> {
    let values: Vec<f64> = match orientation {
        Orientation::LowerIsBetter => values.to_vec(),
        Orientation::HigherIsBetter => values.iter().map(|v| -v).collect(),
    };
    let (min, median, max) = (nan_min(&values), nan_median(&values), nan_max(&values));
    if min.is_nan() || max - min <= threshold {
        return vec![Style::None; values.len()];
    }
    values
        .iter()
        .map(|v| {
            if *v == min && *v < median {
                Style::Best
            } else if *v == max && *v > median {
                Style::Worst
            } else {
                Style::None
            }
        })
        .collect()
}
