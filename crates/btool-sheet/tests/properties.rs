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

//! Property tests for the address codec, kind widening, row statistics
//! and highlighting.

use btool_sheet::{
    classify, column_name, nan_max, nan_median, nan_min, row_summary, ColumnKind, Orientation,
    RowOp, Style,
};
use proptest::prelude::*;

fn kind() -> impl Strategy<Value = ColumnKind> {
    prop_oneof![
        Just(ColumnKind::Empty),
        Just(ColumnKind::Float),
        Just(ColumnKind::Text),
        Just(ColumnKind::Bool),
        Just(ColumnKind::ClassResult),
        Just(ColumnKind::MergedRuns),
    ]
}

fn row() -> impl Strategy<Value = Vec<f64>> {
    prop::collection::vec(
        prop_oneof![Just(f64::NAN), (0u32..50).prop_map(f64::from)],
        1..8,
    )
}

/// Inverse of [`column_name`], for checking it is a bijection.
fn column_index(name: &str) -> usize {
    name.bytes()
        .fold(0, |acc, b| acc * 26 + (b - b'A' + 1) as usize)
        - 1
}

proptest! {
    #[test]
    fn prop_column_name_roundtrips(col in 0usize..200_000) {
        let name = column_name(col);
        prop_assert!(name.bytes().all(|b| b.is_ascii_uppercase()));
        prop_assert_eq!(column_index(&name), col);
    }

    #[test]
    fn prop_column_names_are_ordered(col in 0usize..100_000) {
        let (a, b) = (column_name(col), column_name(col + 1));
        prop_assert!(a.len() < b.len() || (a.len() == b.len() && a < b));
    }

    #[test]
    fn prop_widen_is_commutative(a in kind(), b in kind()) {
        prop_assert_eq!(a.widen(b), b.widen(a));
    }

    #[test]
    fn prop_widen_is_associative(a in kind(), b in kind(), c in kind()) {
        prop_assert_eq!(a.widen(b).widen(c), a.widen(b.widen(c)));
    }

    #[test]
    fn prop_widen_order_independent(kinds in prop::collection::vec(kind(), 0..10)) {
        let forward = kinds.iter().fold(ColumnKind::Empty, |acc, k| acc.widen(*k));
        let backward = kinds.iter().rev().fold(ColumnKind::Empty, |acc, k| acc.widen(*k));
        prop_assert_eq!(forward, backward);
    }

    #[test]
    fn prop_median_between_extremes(values in row()) {
        let (min, median, max) = (nan_min(&values), nan_median(&values), nan_max(&values));
        if values.iter().all(|v| v.is_nan()) {
            prop_assert!(min.is_nan() && median.is_nan() && max.is_nan());
        } else {
            prop_assert!(min <= median && median <= max);
        }
    }

    #[test]
    fn prop_row_summary_only_with_observations(values in row()) {
        let cols: Vec<usize> = (1..=values.len()).collect();
        let summary = row_summary(RowOp::Max, &cols, 2, &values);
        prop_assert_eq!(summary.is_some(), values.iter().any(|v| !v.is_nan()));
    }

    #[test]
    fn prop_classify_marks_extremes(values in row(), threshold in 0u32..4) {
        let styles = classify(&values, f64::from(threshold), Orientation::LowerIsBetter);
        prop_assert_eq!(styles.len(), values.len());
        let (min, max) = (nan_min(&values), nan_max(&values));
        for (value, style) in values.iter().zip(&styles) {
            match style {
                Style::Best => prop_assert_eq!(*value, min),
                Style::Worst => prop_assert_eq!(*value, max),
                Style::None => {}
                Style::Input => prop_assert!(false, "input style on a data cell"),
            }
            if value.is_nan() {
                prop_assert_eq!(*style, Style::None);
            }
        }
        if max - min <= f64::from(threshold) || min.is_nan() {
            prop_assert!(styles.iter().all(|s| *s == Style::None));
        }
    }

    #[test]
    fn prop_orientation_swaps_tags(values in row()) {
        let lower = classify(&values, 0.0, Orientation::LowerIsBetter);
        let higher = classify(&values, 0.0, Orientation::HigherIsBetter);
        for (l, h) in lower.iter().zip(&higher) {
            let swapped = match l {
                Style::Best => Style::Worst,
                Style::Worst => Style::Best,
                other => *other,
            };
            prop_assert_eq!(swapped, *h);
        }
    }
}
