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

//! The Charts control sheet and the Helper sheet feeding it.
//!
//! Charts holds two dropdowns: a merge criterion and the measure to plot.
//! Helper resolves the picked measure to a column through a lookup table and
//! produces, per configuration, the raw values, their ascending order, the
//! running sums and a de-duplicated copy suitable for step plots.

use btool_core::MeasureSelection;
use tracing::info;

use crate::address::{CellRef, SheetKind};
use crate::cell::{Cell, Control};
use crate::formula::{Expr, Formula};
use crate::sheet::{Sheet, HEADER_ROWS};
use crate::stats::nan_sum;

/// Choices of the merge criterion control on the Charts sheet.
pub const CHART_MERGE_CRITERIA: [&str; 5] = ["none", "average", "median", "min", "max"];

/// Merge criterion control on the Charts sheet.
pub const CHART_MERGE_CONTROL: CellRef = CellRef {
    col: 1,
    row: 2,
    abs_col: true,
    abs_row: true,
};

/// Measure control on the Charts sheet.
pub const MEASURE_CONTROL: CellRef = CellRef {
    col: 3,
    row: 2,
    abs_col: true,
    abs_row: true,
};

/// Helper rows above the per-instance rows.
const HELPER_DATA_ROW: usize = 4;

/// Column arrangement of the numeric measures on the Instances sheet.
#[derive(Debug, Clone, PartialEq)]
pub struct ChartLayout {
    /// Numeric measures sorted by name, with their first column.
    measures: Vec<(String, usize)>,
    settings: usize,
    stride: usize,
    default: usize,
}

impl ChartLayout {
    /// Derives the layout from a finalized Instances sheet.
    ///
    /// Returns `None` when there is nothing to plot or when the measures are
    /// not laid out with one shared column stride.
    pub fn from_instances(instances: &Sheet, selection: &MeasureSelection) -> Option<Self> {
        let mut measures = Vec::new();
        let mut settings = None;
        let mut stride = None;
        for (measure, cols) in instances.numeric_measures() {
            let (&first, rest) = cols.split_first()?;
            if *settings.get_or_insert(cols.len()) != cols.len() {
                info!(measure, "measures span different configurations, skipping charts");
                return None;
            }
            for (prev, next) in cols.iter().zip(rest) {
                if *stride.get_or_insert(next - prev) != next - prev {
                    info!(measure, "non-uniform column stride, skipping charts");
                    return None;
                }
            }
            measures.push((measure.to_string(), first));
        }
        let Some(settings) = settings else {
            info!("no numeric measures, skipping charts");
            return None;
        };

        let default = selection
            .iter()
            .find_map(|spec| measures.iter().position(|(name, _)| *name == spec.name))
            .unwrap_or(0);
        Some(Self {
            measures,
            settings,
            stride: stride.unwrap_or(0),
            default,
        })
    }

    pub fn measures(&self) -> impl Iterator<Item = &str> {
        self.measures.iter().map(|(name, _)| name.as_str())
    }

    /// Number of configurations per measure.
    pub fn settings(&self) -> usize {
        self.settings
    }

    /// Distance between the columns of consecutive configurations.
    pub fn stride(&self) -> usize {
        self.stride
    }

    /// Measure preselected in the measure control.
    pub fn default_measure(&self) -> &str {
        self.measures
            .get(self.default)
            .map_or("", |(name, _)| name.as_str())
    }

    fn default_column(&self) -> usize {
        self.measures.get(self.default).map_or(0, |(_, col)| *col)
    }
}

/// Builds the Charts sheet.
pub fn charts_sheet(layout: &ChartLayout) -> Sheet {
    let mut sheet = Sheet::new(SheetKind::Charts);
    sheet.set(1, 1, Cell::text("Merge criteria:"));
    sheet.set(
        CHART_MERGE_CONTROL.row,
        CHART_MERGE_CONTROL.col,
        Cell::Control(Control::new(
            CHART_MERGE_CRITERIA,
            "none",
            "Select merge criteria",
        )),
    );
    sheet.set(1, 3, Cell::text("Measure criteria:"));
    sheet.set(
        MEASURE_CONTROL.row,
        MEASURE_CONTROL.col,
        Cell::Control(Control::new(
            layout.measures(),
            layout.default_measure(),
            "Select measure criteria",
        )),
    );
    sheet
}

/// Builds the Helper sheet over `groups` (Instances, then Merged_Runs).
pub fn helper_sheet(layout: &ChartLayout, groups: &[&Sheet]) -> Sheet {
    let mut sheet = Sheet::new(SheetKind::Helper);

    for (idx, (measure, col)) in layout.measures.iter().enumerate() {
        sheet.set(1 + idx, 0, Cell::text(measure));
        sheet.set(1 + idx, 1, Cell::Float(*col as f64));
        sheet.set_value(1 + idx, 1, *col as f64);
    }
    let lookup = Expr::range(
        CellRef::new(0, 1),
        CellRef::new(1, layout.measures.len()),
    );

    let mut col = 3;
    for group in groups {
        col = write_group(&mut sheet, layout, group, &lookup, col) + 1;
    }
    sheet
}

/// Writes the index column and the per-configuration columns of one group,
/// returning the first column after them.
fn write_group(
    sheet: &mut Sheet,
    layout: &ChartLayout,
    group: &Sheet,
    lookup: &Expr,
    start: usize,
) -> usize {
    let rows = group.data_rows();
    let plot = rows + 6;
    let index = start;

    sheet.set(HELPER_DATA_ROW - 1, index, Cell::text("index"));
    sheet.set(plot, index, Cell::text("pre-plot"));
    for r in 0..rows {
        let ordinal = (r + 1) as f64;
        sheet.set(HELPER_DATA_ROW + r, index, Cell::Float(ordinal));
        sheet.set_value(HELPER_DATA_ROW + r, index, ordinal);
        sheet.set(plot + 1 + r, index, Cell::Float(ordinal));
        sheet.set_value(plot + 1 + r, index, ordinal);
    }

    let first = start + 1;
    let mut col = first;
    for setting in 0..layout.settings {
        let offset = setting * layout.stride;
        let source = layout.default_column() + offset;
        let selector = if setting == 0 {
            Expr::call(
                "VLOOKUP",
                vec![
                    Expr::cell(MEASURE_CONTROL).on(SheetKind::Charts),
                    lookup.clone(),
                    Expr::number(2.0),
                    Expr::Bool(false),
                ],
            )
        } else {
            Expr::cell(CellRef::new(first, 1)) + Expr::number(offset as f64)
        };
        sheet.set(1, col, Cell::Formula(Formula::new(selector)));
        sheet.set_value(1, col, source as f64);
        sheet.set(
            2,
            col,
            Cell::Formula(Formula::new(
                Expr::cell(CellRef::new(1 + offset, 0)).on(group.kind()),
            )),
        );
        sheet.set(HELPER_DATA_ROW - 1, col, Cell::text("values"));
        sheet.set(HELPER_DATA_ROW - 1, col + 1, Cell::text("sorted"));
        sheet.set(HELPER_DATA_ROW - 1, col + 2, Cell::text("aggregated"));

        let values: Vec<f64> = (0..rows)
            .map(|r| group.value(HEADER_ROWS + r, source))
            .collect();
        let mut sorted: Vec<f64> = values.iter().copied().filter(|v| !v.is_nan()).collect();
        sorted.sort_by(f64::total_cmp);
        sorted.resize(rows, f64::NAN);

        for r in 0..rows {
            let row = HELPER_DATA_ROW + r;
            write_instance_row(sheet, group.kind(), index, col, row, rows);
            sheet.set_value(row, col, values[r]);
            sheet.set_value(row, col + 1, sorted[r]);
            sheet.set_value(row, col + 2, nan_sum(&sorted[..=r]));
        }
        write_plot_rows(sheet, col + 1, rows, plot);
        write_plot_rows(sheet, col + 2, rows, plot);

        col += 3;
    }
    col
}

fn write_instance_row(
    sheet: &mut Sheet,
    source: SheetKind,
    index: usize,
    col: usize,
    row: usize,
    rows: usize,
) {
    let last = HELPER_DATA_ROW + rows - 1;
    let fetch = || {
        Expr::call(
            "INDIRECT",
            vec![Expr::call(
                "ADDRESS",
                vec![
                    Expr::cell(CellRef::new(index, row).fix_col()) + Expr::number(2.0),
                    Expr::cell(CellRef::new(col, 1).fix_row()) + Expr::number(1.0),
                    Expr::Omitted,
                    Expr::Omitted,
                    Expr::text(source.name()),
                ],
            )],
        )
    };
    let iferror = |expr: Expr| Expr::call("IFERROR", vec![expr, Expr::text("")]);

    let value = Expr::call(
        "IF",
        vec![fetch().equals(Expr::text("")), Expr::text(""), fetch()],
    );
    let rank = Expr::call("ROW", vec![])
        - Expr::call("ROW", vec![Expr::cell(CellRef::absolute(col + 1, HELPER_DATA_ROW))])
        + Expr::number(1.0);
    let sorted = iferror(Expr::call(
        "SMALL",
        vec![
            Expr::range(
                CellRef::absolute(col, HELPER_DATA_ROW),
                CellRef::absolute(col, last),
            ),
            rank,
        ],
    ));
    let aggregated = iferror(Expr::call(
        "SUM",
        vec![Expr::range(
            CellRef::absolute(col + 1, HELPER_DATA_ROW),
            CellRef::absolute(col + 1, row),
        )],
    ));

    sheet.set(row, col, Cell::Formula(value.into()));
    sheet.set(row, col + 1, Cell::Formula(sorted.into()));
    sheet.set(row, col + 2, Cell::Formula(aggregated.into()));
}

/// Copies `col` below the plot header, blanking repeated values so that
/// plots only show the steps.
fn write_plot_rows(sheet: &mut Sheet, col: usize, rows: usize, plot: usize) {
    for r in 0..rows {
        let row = HELPER_DATA_ROW + r;
        let current = Expr::cell(CellRef::new(col, row));
        let value = sheet.value(row, col);
        let (expr, shown) = if r + 1 == rows {
            (current, value)
        } else {
            let next = sheet.value(row + 1, col);
            let repeated = value == next || (value.is_nan() && next.is_nan());
            (
                Expr::call(
                    "IF",
                    vec![
                        current.clone().equals(Expr::cell(CellRef::new(col, row + 1))),
                        Expr::text(""),
                        current,
                    ],
                ),
                if repeated { f64::NAN } else { value },
            )
        };
        sheet.set(plot + 1 + r, col, Cell::Formula(expr.into()));
        sheet.set_value(plot + 1 + r, col, shown);
    }
}
