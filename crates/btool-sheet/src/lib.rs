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

//! Spreadsheet synthesis for benchmark results.
//!
//! Turns a [`btool_core::Results`] into a [`Report`]: a set of sheets, each
//! a grid of display cells with a parallel numeric shadow. Display cells are
//! literals, dropdown controls or formulas built as [`Expr`] trees that
//! render into either spreadsheet dialect. The shadow holds what every
//! formula evaluates to, so highlighting and exports never need a formula
//! engine.
//!
//! # Sheets
//!
//! - **Instances**: one row per run of every instance, one column group per
//!   configuration, row summaries (min, median, max) and eight column
//!   summaries (SUM through WORST)
//! - **Merged_Runs**: one row per instance, aggregated by a selectable
//!   criterion
//! - **Classes**: one row per benchmark class
//! - **Charts** and **Helper**: a measure picker and the plot data behind it
//!
//! # Example
//!
//! ```
//! use btool_core::{MeasureValue, Results, Run, Runspec};
//! use btool_core::{ClassResult, InstanceResult};
//! use btool_sheet::{Report, ReportConfig, SheetKind};
//! use std::collections::BTreeMap;
//!
//! let mut results = Results::new();
//! let machine = results.add_machine("zuse", "", "");
//! let system = results.add_system("clasp", "3", "", "");
//! let setting = results.add_setting(system, "default", "", None, BTreeMap::new());
//! let bench = results.add_benchmark("b");
//! let class = results.add_class(bench, "c", 0);
//! let instance = results.add_instance(class, "i", 0);
//! let project = results.add_project("p", "j");
//!
//! let mut run = Run::new(1);
//! run.record("time", MeasureValue::Float(7.0));
//! let mut runspec = Runspec::new(machine, setting, bench);
//! runspec.classes.push(ClassResult {
//!     class,
//!     instances: vec![InstanceResult { instance, runs: vec![run] }],
//! });
//! results.project_mut(project).runspecs.push(runspec);
//!
//! let report = Report::build(&results, &ReportConfig::default());
//! let instances = report.sheet(SheetKind::Instances).unwrap();
//! assert_eq!(instances.value(2, 1), 7.0);
//! ```

mod address;
mod block;
mod cell;
mod charts;
mod formula;
mod grid;
mod linker;
mod report;
mod sheet;
mod stats;
mod style;

pub use address::{column_name, encode, CellRef, SheetKind};
pub use block::{BlockColumn, BlockKey, ColumnKind, ConfigBlock, Entry};
pub use cell::{Cell, Control, Style};
pub use charts::{
    charts_sheet, helper_sheet, ChartLayout, CHART_MERGE_CONTROL, CHART_MERGE_CRITERIA,
    MEASURE_CONTROL,
};
pub use formula::{BinOp, Dialect, Expr, Formula};
pub use grid::{Grid, Shadow};
pub use linker::{
    class_aggregate, class_aggregate_value, instance_span, merge_control, merged_runs,
    run_control, run_filter, run_select, COUNTED_MEASURE, MERGE_CONTROL, MERGE_CRITERIA,
};
pub use report::{build_order, dependencies, Report, ReportConfig};
pub use sheet::{ColumnInfo, ColumnRole, NumberFormat, ResultSheet, Sheet, HEADER_ROWS};
pub use stats::{
    column_formulas, column_values, count_observed, nan_max, nan_mean, nan_median, nan_min,
    nan_sum, row_summary, sample_stdev, ColumnStat, Comparison, RowBounds, RowOp, Summary,
    SummaryInputs,
};
pub use style::{classify, Orientation};
