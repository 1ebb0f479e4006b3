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

//! Dense cell grid and its numeric shadow.

use crate::cell::Cell;

static EMPTY: Cell = Cell::Empty;

/// Row-major grid of cells that grows on write.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct Grid {
    rows: Vec<Vec<Cell>>,
    width: usize,
}

impl Grid {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn set(&mut self, row: usize, col: usize, cell: Cell) {
        if self.rows.len() <= row {
            self.rows.resize_with(row + 1, Vec::new);
        }
        let cells = &mut self.rows[row];
        if cells.len() <= col {
            cells.resize_with(col + 1, Cell::default);
        }
        cells[col] = cell;
        self.width = self.width.max(col + 1);
    }

    pub fn get(&self, row: usize, col: usize) -> &Cell {
        self.rows
            .get(row)
            .and_then(|cells| cells.get(col))
            .unwrap_or(&EMPTY)
    }

    /// Removes and returns a cell, leaving it empty.
    pub fn take(&mut self, row: usize, col: usize) -> Cell {
        self.rows
            .get_mut(row)
            .and_then(|cells| cells.get_mut(col))
            .map(std::mem::take)
            .unwrap_or_default()
    }

    pub fn height(&self) -> usize {
        self.rows.len()
    }

    pub fn width(&self) -> usize {
        self.width
    }

    /// Row `row` padded to the grid width.
    pub fn row(&self, row: usize) -> impl Iterator<Item = &Cell> {
        (0..self.width).map(move |col| self.get(row, col))
    }
}

/// Numeric view of a sheet; `NaN` marks cells without a numeric value.
#[derive(Debug, Clone, Default)]
pub struct Shadow {
    rows: Vec<Vec<f64>>,
}

impl Shadow {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn set(&mut self, row: usize, col: usize, value: f64) {
        if self.rows.len() <= row {
            self.rows.resize_with(row + 1, Vec::new);
        }
        let values = &mut self.rows[row];
        if values.len() <= col {
            values.resize(col + 1, f64::NAN);
        }
        values[col] = value;
    }

    pub fn get(&self, row: usize, col: usize) -> f64 {
        self.rows
            .get(row)
            .and_then(|values| values.get(col))
            .copied()
            .unwrap_or(f64::NAN)
    }

    /// Values of `col` over `rows`.
    pub fn column(&self, col: usize, rows: std::ops::Range<usize>) -> Vec<f64> {
        rows.map(|row| self.get(row, col)).collect()
    }

    /// Values of `row` at `cols`.
    pub fn pick(&self, row: usize, cols: &[usize]) -> Vec<f64> {
        cols.iter().map(|col| self.get(row, *col)).collect()
    }
}

impl PartialEq for Shadow {
    /// Two `NaN` cells compare equal.
    fn eq(&self, other: &Self) -> bool {
        let height = self.rows.len().max(other.rows.len());
        (0..height).all(|row| {
            let width = self
                .rows
                .get(row)
                .map_or(0, Vec::len)
                .max(other.rows.get(row).map_or(0, Vec::len));
            (0..width).all(|col| {
                let (a, b) = (self.get(row, col), other.get(row, col));
                (a.is_nan() && b.is_nan()) || a == b
            })
        })
    }
}
