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

//! A1-style cell addresses.

use std::fmt;

/// The fixed set of sheets a report can contain.
///
/// The declaration order is the order sheets appear in the output document.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum SheetKind {
    Instances,
    MergedRuns,
    Classes,
    Helper,
    Charts,
}

impl SheetKind {
    pub const ALL: [SheetKind; 5] = [
        SheetKind::Instances,
        SheetKind::MergedRuns,
        SheetKind::Classes,
        SheetKind::Helper,
        SheetKind::Charts,
    ];

    /// Sheet name as it appears in the document and in cross-sheet references.
    pub fn name(self) -> &'static str {
        match self {
            SheetKind::Instances => "Instances",
            SheetKind::MergedRuns => "Merged_Runs",
            SheetKind::Classes => "Classes",
            SheetKind::Helper => "Helper",
            SheetKind::Charts => "Charts",
        }
    }
}

impl fmt::Display for SheetKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

/// Column letters for a 0-based column index (bijective base 26).
///
/// # Examples
///
/// ```
/// use btool_sheet::column_name;
///
/// assert_eq!(column_name(0), "A");
/// assert_eq!(column_name(25), "Z");
/// assert_eq!(column_name(26), "AA");
/// assert_eq!(column_name(701), "ZZ");
/// assert_eq!(column_name(702), "AAA");
/// ```
pub fn column_name(col: usize) -> String {
    let mut letters = Vec::new();
    let mut rest = col + 1;
    while rest > 0 {
        let rem = (rest - 1) % 26;
        letters.push(b'A' + rem as u8);
        rest = (rest - 1) / 26;
    }
    letters.reverse();
    String::from_utf8_lossy(&letters).into_owned()
}

/// Encodes a 0-based (column, row) pair as an A1 address.
///
/// # Examples
///
/// ```
/// use btool_sheet::encode;
///
/// assert_eq!(encode(1, 2, false, false), "B3");
/// assert_eq!(encode(1, 2, true, false), "$B3");
/// assert_eq!(encode(1, 2, false, true), "B$3");
/// assert_eq!(encode(26, 0, true, true), "$AA$1");
/// ```
pub fn encode(col: usize, row: usize, abs_col: bool, abs_row: bool) -> String {
    format!(
        "{}{}{}{}",
        if abs_col { "$" } else { "" },
        column_name(col),
        if abs_row { "$" } else { "" },
        row + 1
    )
}

/// A single cell address with per-axis absolute markers.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct CellRef {
    pub col: usize,
    pub row: usize,
    pub abs_col: bool,
    pub abs_row: bool,
}

impl CellRef {
    /// Fully relative reference.
    pub fn new(col: usize, row: usize) -> Self {
        Self {
            col,
            row,
            abs_col: false,
            abs_row: false,
        }
    }

    /// Fully absolute reference.
    pub fn absolute(col: usize, row: usize) -> Self {
        Self::new(col, row).fix_col().fix_row()
    }

    pub fn fix_col(mut self) -> Self {
        self.abs_col = true;
        self
    }

    pub fn fix_row(mut self) -> Self {
        self.abs_row = true;
        self
    }
}

impl fmt::Display for CellRef {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&encode(self.col, self.row, self.abs_col, self.abs_row))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_column_boundaries() {
        assert_eq!(column_name(0), "A");
        assert_eq!(column_name(25), "Z");
        assert_eq!(column_name(26), "AA");
        assert_eq!(column_name(51), "AZ");
        assert_eq!(column_name(52), "BA");
        assert_eq!(column_name(701), "ZZ");
        assert_eq!(column_name(16383), "XFD");
    }

    #[test]
    fn test_absolute_markers() {
        assert_eq!(CellRef::new(0, 22).fix_col().to_string(), "$A23");
        assert_eq!(CellRef::new(26, 3).fix_row().to_string(), "AA$4");
        assert_eq!(CellRef::absolute(9, 2).to_string(), "$J$3");
    }

    #[test]
    fn test_sheet_names() {
        assert_eq!(SheetKind::MergedRuns.name(), "Merged_Runs");
        assert_eq!(SheetKind::Instances.to_string(), "Instances");
    }

    #[test]
    fn test_sheet_output_order() {
        let mut kinds = vec![SheetKind::Charts, SheetKind::Classes, SheetKind::Instances];
        kinds.sort();
        assert_eq!(
            kinds,
            vec![SheetKind::Instances, SheetKind::Classes, SheetKind::Charts]
        );
    }
}
