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

//! Formulas that reach into the Instances sheet and the selector controls
//! that drive them.

use crate::address::{CellRef, SheetKind};
use crate::cell::Control;
use crate::formula::{Expr, Formula};
use crate::sheet::HEADER_ROWS;

/// Choices of the merge criterion control, in display order.
pub const MERGE_CRITERIA: [&str; 5] = ["average", "median", "min", "max", "diff"];

/// Position of the merge criterion control on the Merged_Runs sheet.
pub const MERGE_CONTROL: CellRef = CellRef {
    col: 0,
    row: 1,
    abs_col: true,
    abs_row: true,
};

/// Measure whose class aggregate is a count rather than an average.
pub const COUNTED_MEASURE: &str = "timeout";

/// Instance-level rows `[inst_start, inst_end]` of `col` on the Instances sheet.
pub fn instance_span(col: usize, inst_start: usize, inst_end: usize) -> Expr {
    Expr::range(
        CellRef::new(col, inst_start + HEADER_ROWS),
        CellRef::new(col, inst_end + HEADER_ROWS),
    )
    .on(SheetKind::Instances)
}

/// Class-level formula: `SUM` for timeouts, `AVERAGE` for anything else.
///
/// # Examples
///
/// ```
/// use btool_sheet::{class_aggregate, Dialect};
///
/// let f = class_aggregate("time", 1, 0, 1);
/// assert_eq!(f.render(Dialect::Excel), "=AVERAGE(Instances!B3:B4)");
/// let f = class_aggregate("timeout", 2, 0, 1);
/// assert_eq!(f.render(Dialect::OpenFormula), "of:=SUM([Instances.C3:Instances.C4])");
/// ```
pub fn class_aggregate(measure: &str, col: usize, inst_start: usize, inst_end: usize) -> Formula {
    let function = if measure == COUNTED_MEASURE {
        "SUM"
    } else {
        "AVERAGE"
    };
    Formula::new(Expr::call(
        function,
        vec![instance_span(col, inst_start, inst_end)],
    ))
}

/// Value of [`class_aggregate`] given the sum and count of the run values.
pub fn class_aggregate_value(measure: &str, sum: f64, count: usize) -> f64 {
    if measure == COUNTED_MEASURE {
        sum
    } else if count == 0 {
        f64::NAN
    } else {
        sum / count as f64
    }
}

/// The merge criterion selector; defaults to `median`.
pub fn merge_control() -> Control {
    Control::new(MERGE_CRITERIA, "median", "Select merge criteria")
}

/// Merged value of one instance, selected by the merge criterion control.
pub fn merged_runs(col: usize, inst_start: usize, inst_end: usize) -> Formula {
    let span = || instance_span(col, inst_start, inst_end);
    let call = |name: &str| Expr::call(name, vec![span()]);
    Formula::new(Expr::call(
        "SWITCH",
        vec![
            Expr::cell(MERGE_CONTROL),
            Expr::text("average"),
            call("AVERAGE"),
            Expr::text("median"),
            call("MEDIAN"),
            Expr::text("min"),
            call("MIN"),
            Expr::text("max"),
            call("MAX"),
            Expr::text("diff"),
            call("MAX") - call("MIN"),
        ],
    ))
}

/// The run number selector over `1..=runs`; defaults to the first run.
pub fn run_control(runs: usize) -> Control {
    Control::new((1..=runs).map(|run| run.to_string()), "1", "Select run number")
}

/// `CHOOSE(selector, ROW(first run), ROW(second run), ...)` for column `col`.
pub fn run_select(selector: CellRef, runs: usize, col: usize, abs_col: bool) -> Expr {
    let mut args = vec![Expr::cell(selector)];
    args.extend((0..runs).map(|run| {
        let mut cell = CellRef::new(col, HEADER_ROWS + run).fix_row();
        cell.abs_col = abs_col;
        Expr::call("ROW", vec![Expr::cell(cell)])
    }));
    Expr::call("CHOOSE", args)
}

/// Rows of `base` belonging to the run picked by `choose`.
pub fn run_filter(base: Expr, choose: Expr, runs: usize) -> Expr {
    let offset = Expr::call("ROW", vec![base.clone()]) - choose;
    let modulo = Expr::call("MOD", vec![offset, Expr::number(runs as f64)]);
    Expr::call("FILTER", vec![base, modulo.equals(Expr::number(0.0))])
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::formula::Dialect;

    #[test]
    fn test_class_aggregate_values() {
        assert_eq!(class_aggregate_value("time", 17.0, 2), 8.5);
        assert_eq!(class_aggregate_value("timeout", 1.0, 2), 1.0);
        assert!(class_aggregate_value("time", 0.0, 0).is_nan());
    }

    #[test]
    fn test_merged_runs_formula() {
        let f = merged_runs(1, 0, 1);
        assert_eq!(
            f.render(Dialect::Excel),
            "=SWITCH($A$2,\"average\",AVERAGE(Instances!B3:B4),\"median\",MEDIAN(Instances!B3:B4),\
             \"min\",MIN(Instances!B3:B4),\"max\",MAX(Instances!B3:B4),\
             \"diff\",MAX(Instances!B3:B4)-MIN(Instances!B3:B4))"
        );
        assert!(f
            .render(Dialect::OpenFormula)
            .starts_with("of:=SWITCH([.$A$2];\"average\";AVERAGE([Instances.B3:Instances.B4])"));
    }

    #[test]
    fn test_run_filter_formula() {
        let selector = CellRef::absolute(0, 17);
        let base = Expr::range(CellRef::new(1, 2).fix_row(), CellRef::new(1, 5).fix_row());
        let choose = run_select(selector, 2, 1, false);
        let f = Formula::new(Expr::call("SUM", vec![run_filter(base, choose, 2)]));
        assert_eq!(
            f.render(Dialect::Excel),
            "=SUM(FILTER(B$3:B$6,MOD(ROW(B$3:B$6)-CHOOSE($A$18,ROW(B$3),ROW(B$4)),2)=0))"
        );
    }

    #[test]
    fn test_controls() {
        let merge = merge_control();
        assert_eq!(merge.default, "median");
        assert_eq!(merge.options.len(), 5);
        let runs = run_control(3);
        assert_eq!(runs.options, vec!["1", "2", "3"]);
        assert_eq!(runs.message, "Select run number");
    }
}
