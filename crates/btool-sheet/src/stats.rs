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

//! NaN-aware statistics and summary formula synthesis.
//!
//! Every summary is produced as a pair: the formula written to the sheet and
//! the value that formula evaluates to, computed here from the same inputs.

use crate::address::CellRef;
use crate::formula::{Expr, Formula};

/// Smallest non-NaN value, NaN if there is none.
pub fn nan_min(values: &[f64]) -> f64 {
    observed(values).fold(f64::NAN, |acc, v| if acc.is_nan() || v < acc { v } else { acc })
}

/// Largest non-NaN value, NaN if there is none.
pub fn nan_max(values: &[f64]) -> f64 {
    observed(values).fold(f64::NAN, |acc, v| if acc.is_nan() || v > acc { v } else { acc })
}

/// Median of the non-NaN values, NaN if there is none.
pub fn nan_median(values: &[f64]) -> f64 {
    let mut sorted: Vec<f64> = observed(values).collect();
    if sorted.is_empty() {
        return f64::NAN;
    }
    sorted.sort_by(f64::total_cmp);
    let mid = sorted.len() / 2;
    if sorted.len() % 2 == 0 {
        (sorted[mid - 1] + sorted[mid]) / 2.0
    } else {
        sorted[mid]
    }
}

/// Sum of the non-NaN values (0 for none).
pub fn nan_sum(values: &[f64]) -> f64 {
    observed(values).sum()
}

/// Mean of the non-NaN values, NaN if there is none.
pub fn nan_mean(values: &[f64]) -> f64 {
    let count = count_observed(values);
    if count == 0 {
        f64::NAN
    } else {
        nan_sum(values) / count as f64
    }
}

/// Sample standard deviation (one degree of freedom) of the non-NaN values.
///
/// NaN when fewer than two values are observed.
pub fn sample_stdev(values: &[f64]) -> f64 {
    let count = count_observed(values);
    if count < 2 {
        return f64::NAN;
    }
    let mean = nan_mean(values);
    let squares: f64 = observed(values).map(|v| (v - mean).powi(2)).sum();
    (squares / (count - 1) as f64).sqrt()
}

pub fn count_observed(values: &[f64]) -> usize {
    observed(values).count()
}

fn observed(values: &[f64]) -> impl Iterator<Item = f64> + '_ {
    values.iter().copied().filter(|v| !v.is_nan())
}

/// Row aggregates across configurations.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub enum RowOp {
    Min,
    Median,
    Max,
}

impl RowOp {
    pub const ALL: [RowOp; 3] = [RowOp::Min, RowOp::Median, RowOp::Max];

    /// Group header on the sheet.
    pub fn label(self) -> &'static str {
        match self {
            RowOp::Min => "min",
            RowOp::Median => "median",
            RowOp::Max => "max",
        }
    }

    pub fn function(self) -> &'static str {
        match self {
            RowOp::Min => "MIN",
            RowOp::Median => "MEDIAN",
            RowOp::Max => "MAX",
        }
    }

    pub fn apply(self, values: &[f64]) -> f64 {
        match self {
            RowOp::Min => nan_min(values),
            RowOp::Median => nan_median(values),
            RowOp::Max => nan_max(values),
        }
    }
}

/// A synthesized formula with its evaluated value.
#[derive(Debug, Clone, PartialEq)]
pub struct Summary {
    pub formula: Formula,
    pub value: f64,
}

/// Row summary over `cols` at grid row `row`.
///
/// Returns `None` when every contributing value is missing; no formula is
/// written for such rows.
///
/// # Examples
///
/// ```
/// use btool_sheet::{row_summary, Dialect, RowOp};
///
/// let summary = row_summary(RowOp::Median, &[1, 4], 2, &[7.0, 10.0]).unwrap();
/// assert_eq!(summary.value, 8.5);
/// assert_eq!(summary.formula.render(Dialect::Excel), "=MEDIAN($B3,$E3)");
/// assert!(row_summary(RowOp::Min, &[1, 4], 2, &[f64::NAN, f64::NAN]).is_none());
/// ```
pub fn row_summary(op: RowOp, cols: &[usize], row: usize, values: &[f64]) -> Option<Summary> {
    if count_observed(values) == 0 {
        return None;
    }
    let args = cols
        .iter()
        .map(|col| Expr::cell(CellRef::new(*col, row).fix_col()))
        .collect();
    Some(Summary {
        formula: Formula::new(Expr::call(op.function(), args)),
        value: op.apply(values),
    })
}

/// The eight trailing summary rows, in sheet order.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub enum ColumnStat {
    Sum,
    Avg,
    Dev,
    Dst,
    Best,
    Better,
    Worse,
    Worst,
}

impl ColumnStat {
    pub const ALL: [ColumnStat; 8] = [
        ColumnStat::Sum,
        ColumnStat::Avg,
        ColumnStat::Dev,
        ColumnStat::Dst,
        ColumnStat::Best,
        ColumnStat::Better,
        ColumnStat::Worse,
        ColumnStat::Worst,
    ];

    pub fn label(self) -> &'static str {
        match self {
            ColumnStat::Sum => "SUM",
            ColumnStat::Avg => "AVG",
            ColumnStat::Dev => "DEV",
            ColumnStat::Dst => "DST",
            ColumnStat::Best => "BEST",
            ColumnStat::Better => "BETTER",
            ColumnStat::Worse => "WORSE",
            ColumnStat::Worst => "WORST",
        }
    }

    /// Row offset below the last data row (1-based).
    pub fn offset(self) -> usize {
        self as usize + 1
    }

    /// Whether a larger value of this statistic is the better one.
    pub fn higher_is_better(self) -> bool {
        matches!(self, ColumnStat::Best | ColumnStat::Better)
    }

    /// Statistics that compare a column with the row summaries.
    pub fn is_comparison(self) -> bool {
        !matches!(self, ColumnStat::Sum | ColumnStat::Avg | ColumnStat::Dev)
    }
}

/// Formula inputs of a column summary block.
///
/// Each field is an expression yielding the values of one column over the
/// data rows. The comparison fields are `None` for row summary columns.
#[derive(Debug, Clone)]
pub struct SummaryInputs {
    pub values: Expr,
    pub comparison: Option<Comparison>,
}

/// Row min, median and max over the same data rows.
#[derive(Debug, Clone)]
pub struct Comparison {
    pub min: Expr,
    pub median: Expr,
    pub max: Expr,
}

/// Column summary formulas for the given inputs.
///
/// Missing values count towards WORSE and WORST, never towards BEST or
/// BETTER. BETTER and WORSE compare against the row median while BEST and
/// WORST compare against the row extremes.
pub fn column_formulas(inputs: &SummaryInputs) -> Vec<(ColumnStat, Formula)> {
    let values = &inputs.values;
    let mut formulas = vec![
        (ColumnStat::Sum, Expr::call("SUM", vec![values.clone()])),
        (ColumnStat::Avg, Expr::call("AVERAGE", vec![values.clone()])),
        (ColumnStat::Dev, Expr::call("STDEV", vec![values.clone()])),
    ];
    if let Some(cmp) = &inputs.comparison {
        let present = || Expr::call("NOT", vec![Expr::call("ISBLANK", vec![values.clone()])]);
        let blank = || Expr::call("ISBLANK", vec![values.clone()]);
        let distance = Expr::call(
            "SUMPRODUCT",
            vec![(-(-(values.clone() - cmp.min.clone()).group())).pow(Expr::number(2.0))],
        )
        .pow(Expr::number(0.5));
        let best = present() * values.clone().equals(cmp.min.clone()).group();
        let better = present() * values.clone().less_than(cmp.median.clone()).group();
        let worse = (present() * values.clone().greater_than(cmp.median.clone()).group()).group()
            + blank();
        let worst =
            (present() * values.clone().equals(cmp.max.clone()).group()).group() + blank();
        formulas.push((ColumnStat::Dst, distance));
        formulas.push((ColumnStat::Best, Expr::call("SUMPRODUCT", vec![best])));
        formulas.push((ColumnStat::Better, Expr::call("SUMPRODUCT", vec![better])));
        formulas.push((ColumnStat::Worse, Expr::call("SUMPRODUCT", vec![worse])));
        formulas.push((ColumnStat::Worst, Expr::call("SUMPRODUCT", vec![worst])));
    }
    formulas
        .into_iter()
        .map(|(stat, expr)| (stat, Formula::new(expr)))
        .collect()
}

/// Row-wise min, median and max paired with a column.
#[derive(Debug, Clone, Copy)]
pub struct RowBounds<'a> {
    pub min: &'a [f64],
    pub median: &'a [f64],
    pub max: &'a [f64],
}

/// Values of the column summary formulas.
///
/// `bounds` is `None` for row summary columns, which only get SUM, AVG and
/// DEV. Equality comparisons are exact.
pub fn column_values(values: &[f64], bounds: Option<RowBounds<'_>>) -> Vec<(ColumnStat, f64)> {
    let mut stats = vec![
        (ColumnStat::Sum, nan_sum(values)),
        (ColumnStat::Avg, nan_mean(values)),
        (ColumnStat::Dev, sample_stdev(values)),
    ];
    if let Some(bounds) = bounds {
        let missing = (values.len() - count_observed(values)) as f64;
        let count = |reference: &[f64], pred: fn(f64, f64) -> bool| {
            values
                .iter()
                .zip(reference)
                .filter(|(v, r)| !v.is_nan() && !r.is_nan() && pred(**v, **r))
                .count() as f64
        };
        let squares: Vec<f64> = values
            .iter()
            .zip(bounds.min)
            .map(|(v, m)| (v - m).powi(2))
            .collect();
        stats.push((ColumnStat::Dst, nan_sum(&squares).sqrt()));
        stats.push((ColumnStat::Best, count(bounds.min, |v, r| v == r)));
        stats.push((ColumnStat::Better, count(bounds.median, |v, r| v < r)));
        stats.push((ColumnStat::Worse, count(bounds.median, |v, r| v > r) + missing));
        stats.push((ColumnStat::Worst, count(bounds.max, |v, r| v == r) + missing));
    }
    stats
}
