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

//! Result sheets: layout, ingestion and the finalize pipeline.
//!
//! A [`ResultSheet`] is built in two phases. Runspecs are ingested into one
//! [`ConfigBlock`] per configuration; [`ResultSheet::finalize`] then joins
//! the blocks left to right, resolves cross-sheet placeholders, appends the
//! row and column summaries and applies highlighting. The resulting
//! [`Sheet`] is read-only.
//!
//! Row layout of every result sheet:
//!
//! | row                     | content                                  |
//! |-------------------------|------------------------------------------|
//! | 0                       | configuration name per column group      |
//! | 1                       | measure name per column                  |
//! | 2 ..                    | data rows                                |
//! | result_offset + 1..=8   | SUM, AVG, DEV, DST, BEST, BETTER, WORSE, WORST |
//! | result_offset + 10..=19 | run selector block (Instances only)      |

use std::collections::{BTreeMap, BTreeSet};

use btool_core::{
    BenchmarkMerge, MachineId, MeasureMode, MeasureSelection, Results, Runspec,
};
use tracing::{debug, info, warn};

use crate::address::{CellRef, SheetKind};
use crate::block::{BlockKey, ColumnKind, ConfigBlock, Entry};
use crate::cell::{Cell, Style};
use crate::formula::Expr;
use crate::grid::{Grid, Shadow};
use crate::linker;
use crate::stats::{
    column_formulas, column_values, count_observed, nan_median, row_summary, ColumnStat,
    Comparison, RowBounds, RowOp, SummaryInputs,
};
use crate::style::{classify, Orientation};

/// Number of header rows above the data rows.
pub const HEADER_ROWS: usize = 2;

/// Offset of the run selector control below the last data row.
const RUN_SELECTOR_OFFSET: usize = 11;

/// Display format of a numeric column.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum NumberFormat {
    /// Two decimals.
    #[default]
    Decimal,
    /// No decimals; used for timeout-like measures.
    Integer,
}

impl NumberFormat {
    /// Format code understood by both spreadsheet formats.
    pub fn code(self) -> &'static str {
        match self {
            NumberFormat::Decimal => "0.00",
            NumberFormat::Integer => "0",
        }
    }
}

/// What a column holds.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ColumnRole {
    /// Values of one configuration.
    Data,
    /// Row summary across configurations.
    Summary(RowOp),
}

/// Metadata of one sheet column.
#[derive(Debug, Clone, PartialEq)]
pub struct ColumnInfo {
    pub measure: String,
    /// Resolved kind of the measure on this sheet.
    pub kind: ColumnKind,
    pub role: ColumnRole,
    /// Owning configuration of data columns.
    pub key: Option<BlockKey>,
    /// Configuration display name, or the summary label.
    pub configuration: String,
}

/// A finished sheet: display grid plus numeric shadow.
#[derive(Debug, Clone, PartialEq)]
pub struct Sheet {
    kind: SheetKind,
    grid: Grid,
    shadow: Shadow,
    columns: BTreeMap<usize, ColumnInfo>,
    measure_kinds: BTreeMap<String, ColumnKind>,
    numeric: BTreeMap<String, Vec<usize>>,
    degenerate: BTreeSet<usize>,
    data_rows: usize,
    run_selector: Option<usize>,
    formats: BTreeMap<usize, NumberFormat>,
    frozen: Option<(usize, usize)>,
}

impl Sheet {
    pub(crate) fn new(kind: SheetKind) -> Self {
        Self {
            kind,
            grid: Grid::new(),
            shadow: Shadow::new(),
            columns: BTreeMap::new(),
            measure_kinds: BTreeMap::new(),
            numeric: BTreeMap::new(),
            degenerate: BTreeSet::new(),
            data_rows: 0,
            run_selector: None,
            formats: BTreeMap::new(),
            frozen: None,
        }
    }

    pub(crate) fn set(&mut self, row: usize, col: usize, cell: Cell) {
        self.grid.set(row, col, cell);
    }

    pub(crate) fn set_value(&mut self, row: usize, col: usize, value: f64) {
        self.shadow.set(row, col, value);
    }

    pub fn kind(&self) -> SheetKind {
        self.kind
    }

    pub fn name(&self) -> &'static str {
        self.kind.name()
    }

    pub fn grid(&self) -> &Grid {
        &self.grid
    }

    pub fn shadow(&self) -> &Shadow {
        &self.shadow
    }

    pub fn cell(&self, row: usize, col: usize) -> &Cell {
        self.grid.get(row, col)
    }

    /// Shadow value of a cell, `NaN` if it has none.
    pub fn value(&self, row: usize, col: usize) -> f64 {
        self.shadow.get(row, col)
    }

    pub fn data_rows(&self) -> usize {
        self.data_rows
    }

    /// First row after the data rows.
    pub fn result_offset(&self) -> usize {
        HEADER_ROWS + self.data_rows
    }

    pub fn column(&self, col: usize) -> Option<&ColumnInfo> {
        self.columns.get(&col)
    }

    pub fn columns(&self) -> impl Iterator<Item = (usize, &ColumnInfo)> {
        self.columns.iter().map(|(col, info)| (*col, info))
    }

    /// Data column of `measure` in the block of `key`.
    pub fn column_of(&self, key: &BlockKey, measure: &str) -> Option<usize> {
        self.columns
            .iter()
            .find(|(_, info)| info.key.as_ref() == Some(key) && info.measure == measure)
            .map(|(col, _)| *col)
    }

    /// Data column of `measure` for the configuration displayed as `configuration`.
    pub fn find_column(&self, configuration: &str, measure: &str) -> Option<usize> {
        self.columns
            .iter()
            .find(|(_, info)| {
                info.role == ColumnRole::Data
                    && info.configuration == configuration
                    && info.measure == measure
            })
            .map(|(col, _)| *col)
    }

    /// Row summary column of `measure`.
    pub fn summary_column(&self, op: RowOp, measure: &str) -> Option<usize> {
        self.columns
            .iter()
            .find(|(_, info)| info.role == ColumnRole::Summary(op) && info.measure == measure)
            .map(|(col, _)| *col)
    }

    pub fn measure_kind(&self, measure: &str) -> Option<ColumnKind> {
        self.measure_kinds.get(measure).copied()
    }

    /// Numeric data columns of `measure`, degenerate ones included.
    pub fn numeric_columns(&self, measure: &str) -> &[usize] {
        self.numeric.get(measure).map(Vec::as_slice).unwrap_or(&[])
    }

    /// Measures with numeric data columns, sorted by name.
    pub fn numeric_measures(&self) -> impl Iterator<Item = (&str, &[usize])> {
        self.numeric
            .iter()
            .map(|(measure, cols)| (measure.as_str(), cols.as_slice()))
    }

    /// Whether a numeric column has no observation at all.
    pub fn is_degenerate(&self, col: usize) -> bool {
        self.degenerate.contains(&col)
    }

    /// Run count of the run selector, if the sheet has one.
    pub fn run_selector(&self) -> Option<usize> {
        self.run_selector
    }

    pub fn number_format(&self, col: usize) -> NumberFormat {
        self.formats.get(&col).copied().unwrap_or_default()
    }

    /// Frozen (rows, columns), if any.
    pub fn frozen(&self) -> Option<(usize, usize)> {
        self.frozen
    }

    /// Non-degenerate numeric data columns per measure.
    fn active_columns(&self) -> BTreeMap<String, Vec<usize>> {
        self.numeric
            .iter()
            .map(|(measure, cols)| {
                let cols: Vec<usize> = cols
                    .iter()
                    .copied()
                    .filter(|col| !self.degenerate.contains(col))
                    .collect();
                (measure.clone(), cols)
            })
            .filter(|(_, cols)| !cols.is_empty())
            .collect()
    }

    fn style_row(&mut self, row: usize, cols: &[usize], threshold: f64, orientation: Orientation) {
        let values = self.shadow.pick(row, cols);
        for (col, tag) in cols.iter().zip(classify(&values, threshold, orientation)) {
            if tag != Style::None {
                let cell = self.grid.take(row, *col);
                self.grid.set(row, *col, cell.with_style(tag));
            }
        }
    }
}

/// Builder of the Instances, Classes and Merged_Runs sheets.
pub struct ResultSheet<'a> {
    kind: SheetKind,
    results: &'a Results,
    merge: &'a BenchmarkMerge,
    selection: &'a MeasureSelection,
    reference: Option<&'a Sheet>,
    blocks: BTreeMap<BlockKey, ConfigBlock>,
    machines: BTreeSet<MachineId>,
}

impl<'a> ResultSheet<'a> {
    /// One row per run of every instance.
    pub fn instances(
        results: &'a Results,
        merge: &'a BenchmarkMerge,
        selection: &'a MeasureSelection,
    ) -> Self {
        Self::with_kind(SheetKind::Instances, results, merge, selection, None)
    }

    /// One row per class, linked to the finalized Instances sheet.
    pub fn classes(
        results: &'a Results,
        merge: &'a BenchmarkMerge,
        selection: &'a MeasureSelection,
        instances: &'a Sheet,
    ) -> Self {
        Self::with_kind(SheetKind::Classes, results, merge, selection, Some(instances))
    }

    /// One row per instance, merging its runs by a selectable criterion.
    pub fn merged_runs(
        results: &'a Results,
        merge: &'a BenchmarkMerge,
        selection: &'a MeasureSelection,
        instances: &'a Sheet,
    ) -> Self {
        Self::with_kind(SheetKind::MergedRuns, results, merge, selection, Some(instances))
    }

    fn with_kind(
        kind: SheetKind,
        results: &'a Results,
        merge: &'a BenchmarkMerge,
        selection: &'a MeasureSelection,
        reference: Option<&'a Sheet>,
    ) -> Self {
        Self {
            kind,
            results,
            merge,
            selection,
            reference,
            blocks: BTreeMap::new(),
            machines: BTreeSet::new(),
        }
    }

    /// Adds the runs of one runspec to the block of its configuration.
    pub fn add_runspec(&mut self, runspec: &Runspec) {
        let key = BlockKey::new(self.results, runspec.setting, runspec.machine);
        self.machines.insert(runspec.machine);
        let (kind, merge, selection, reference) =
            (self.kind, self.merge, self.selection, self.reference);
        let block = self
            .blocks
            .entry(key.clone())
            .or_insert_with(|| ConfigBlock::new(key));
        match (kind, reference) {
            (SheetKind::Classes, Some(reference)) => {
                ingest_classes(block, runspec, merge, selection, reference)
            }
            (SheetKind::MergedRuns, Some(reference)) => {
                ingest_merged(block, runspec, merge, selection, reference)
            }
            _ => ingest_instances(block, runspec, merge, selection),
        }
    }

    /// Assembles the sheet and derives summaries and highlighting.
    pub fn finalize(self) -> Sheet {
        let mut sheet = Sheet::new(self.kind);
        sheet.frozen = Some((HEADER_ROWS, 1));
        sheet.data_rows = match self.kind {
            SheetKind::Classes => self.merge.classes().len(),
            SheetKind::MergedRuns => self.merge.instances().len(),
            _ => self.merge.instance_rows(),
        };
        if self.kind == SheetKind::Instances {
            sheet.run_selector = self.merge.uniform_runs().filter(|runs| *runs > 1);
        }

        self.write_labels(&mut sheet);
        let summary_start = self.join_blocks(&mut sheet);
        mark_degenerate(&mut sheet);
        let bounds = add_row_summary(&mut sheet, summary_start);
        add_column_summary(&mut sheet, &bounds);
        add_styles(&mut sheet, self.selection);

        debug!(
            sheet = %sheet.kind,
            rows = sheet.grid.height(),
            columns = sheet.grid.width(),
            "finalized sheet"
        );
        sheet
    }

    fn write_labels(&self, sheet: &mut Sheet) {
        match self.kind {
            SheetKind::Classes => {
                for layout in self.merge.classes() {
                    let name = &self.results.class(layout.class).name;
                    sheet.set(HEADER_ROWS + layout.row, 0, Cell::text(name));
                }
            }
            SheetKind::MergedRuns => {
                sheet.set(0, 0, Cell::text("Merge criteria:"));
                sheet.set(1, 0, Cell::Control(linker::merge_control()));
                for layout in self.merge.instances() {
                    let label = self.results.instance_label(layout.instance);
                    sheet.set(HEADER_ROWS + layout.ordinal, 0, Cell::Text(label));
                }
            }
            _ => {
                for layout in self.merge.instances() {
                    let label = self.results.instance_label(layout.instance);
                    sheet.set(HEADER_ROWS + layout.row, 0, Cell::Text(label));
                }
            }
        }

        let offset = sheet.result_offset();
        for stat in ColumnStat::ALL {
            sheet.set(offset + stat.offset(), 0, Cell::text(stat.label()));
        }
        if let Some(runs) = sheet.run_selector {
            sheet.set(offset + RUN_SELECTOR_OFFSET - 1, 0, Cell::text("Select run:"));
            sheet.set(
                offset + RUN_SELECTOR_OFFSET,
                0,
                Cell::Control(linker::run_control(runs)),
            );
            sheet.set_value(offset + RUN_SELECTOR_OFFSET, 0, 1.0);
            for stat in ColumnStat::ALL {
                sheet.set(
                    offset + RUN_SELECTOR_OFFSET + stat.offset(),
                    0,
                    Cell::text(stat.label()),
                );
            }
        }
    }

    /// Writes all blocks and returns the first column after them.
    fn join_blocks(&self, sheet: &mut Sheet) -> usize {
        for block in self.blocks.values() {
            for column in block.columns() {
                let kind = sheet
                    .measure_kinds
                    .get(&column.measure)
                    .map_or(column.kind, |known| known.widen(column.kind));
                sheet.measure_kinds.insert(column.measure.clone(), kind);
            }
        }

        let include_machine = self.machines.len() > 1;
        let mut col = 1;
        for block in self.blocks.values() {
            let configuration = block.gen_name(self.results, include_machine);
            sheet.set(0, col, Cell::text(&configuration));
            for (idx, column) in block.columns().iter().enumerate() {
                let target = col + idx;
                let kind = sheet
                    .measure_kind(&column.measure)
                    .unwrap_or(column.kind);
                sheet.set(1, target, Cell::text(&column.measure));
                sheet.columns.insert(
                    target,
                    ColumnInfo {
                        measure: column.measure.clone(),
                        kind,
                        role: ColumnRole::Data,
                        key: Some(block.key().clone()),
                        configuration: configuration.clone(),
                    },
                );
                for (row, entry) in &column.cells {
                    self.place(sheet, HEADER_ROWS + row, target, &column.measure, block.key(), entry);
                }
                if kind.is_numeric() {
                    sheet
                        .numeric
                        .entry(column.measure.clone())
                        .or_default()
                        .push(target);
                }
            }
            col += block.columns().len();
        }
        col
    }

    fn place(
        &self,
        sheet: &mut Sheet,
        row: usize,
        col: usize,
        measure: &str,
        key: &BlockKey,
        entry: &Entry,
    ) {
        let (cell, value) = match entry {
            Entry::Missing => (Cell::Empty, f64::NAN),
            Entry::Float(value) => (Cell::Float(*value), *value),
            Entry::Text(text) => (Cell::Text(text.clone()), f64::NAN),
            Entry::Bool(flag) => (Cell::Bool(*flag), f64::NAN),
            Entry::ClassAggregate {
                inst_start,
                inst_end,
                value,
            } => match self.link(key, measure) {
                Some(source) => (
                    Cell::Formula(linker::class_aggregate(measure, source, *inst_start, *inst_end)),
                    *value,
                ),
                None => (Cell::Float(*value), *value),
            },
            Entry::MergedRuns {
                inst_start,
                inst_end,
                value,
            } => match self.link(key, measure) {
                Some(source) => (
                    Cell::Formula(linker::merged_runs(source, *inst_start, *inst_end)),
                    *value,
                ),
                None => (Cell::Float(*value), *value),
            },
        };
        sheet.set(row, col, cell);
        sheet.set_value(row, col, value);
    }

    /// Instances column feeding an aggregate of (`key`, `measure`).
    fn link(&self, key: &BlockKey, measure: &str) -> Option<usize> {
        let source = self
            .reference
            .and_then(|reference| reference.column_of(key, measure));
        if source.is_none() {
            warn!(
                sheet = %self.kind,
                measure,
                "no Instances column to link, writing the value instead"
            );
        }
        source
    }
}

fn ingest_instances(
    block: &mut ConfigBlock,
    runspec: &Runspec,
    merge: &BenchmarkMerge,
    selection: &MeasureSelection,
) {
    for result in runspec.instance_results() {
        let Some(layout) = merge.instance(result.instance) else {
            continue;
        };
        for run in &result.runs {
            if run.number == 0 || run.number > layout.height() {
                warn!(run = run.number, runs = layout.height(), "run number outside of the run block");
                continue;
            }
            let row = layout.row + run.number - 1;
            for (name, value) in run.select(selection) {
                block.add_cell(row, name, Entry::from(value));
            }
        }
    }
}

/// Per-measure accumulator in first-seen order.
#[derive(Default)]
struct Tally {
    measures: Vec<(String, Vec<f64>)>,
}

impl Tally {
    fn slot(&mut self, name: &str) -> &mut Vec<f64> {
        let idx = match self.measures.iter().position(|(n, _)| n == name) {
            Some(idx) => idx,
            None => {
                self.measures.push((name.to_string(), Vec::new()));
                self.measures.len() - 1
            }
        };
        &mut self.measures[idx].1
    }

    /// Records every selected measure of `runs`, keeping only values of
    /// measures the reference sheet resolved as floats.
    fn collect<'r>(
        &mut self,
        runs: impl Iterator<Item = &'r btool_core::Run>,
        selection: &MeasureSelection,
        reference: &Sheet,
    ) {
        for run in runs {
            for (name, value) in run.select(selection) {
                let slot = self.slot(name);
                if let Some(number) = value.as_f64() {
                    if reference.measure_kind(name) == Some(ColumnKind::Float) {
                        slot.push(number);
                    }
                }
            }
        }
    }
}

fn ingest_classes(
    block: &mut ConfigBlock,
    runspec: &Runspec,
    merge: &BenchmarkMerge,
    selection: &MeasureSelection,
    reference: &Sheet,
) {
    for class in &runspec.classes {
        let Some(layout) = merge.class(class.class) else {
            continue;
        };
        let mut tally = Tally::default();
        tally.collect(
            class.instances.iter().flat_map(|result| result.runs.iter()),
            selection,
            reference,
        );
        for (name, values) in tally.measures {
            let entry = if values.is_empty() {
                Entry::Missing
            } else {
                Entry::ClassAggregate {
                    inst_start: layout.inst_start,
                    inst_end: layout.inst_end,
                    value: linker::class_aggregate_value(
                        &name,
                        values.iter().sum(),
                        values.len(),
                    ),
                }
            };
            block.add_cell(layout.row, &name, entry);
        }
    }
}

fn ingest_merged(
    block: &mut ConfigBlock,
    runspec: &Runspec,
    merge: &BenchmarkMerge,
    selection: &MeasureSelection,
    reference: &Sheet,
) {
    for result in runspec.instance_results() {
        let Some(layout) = merge.instance(result.instance) else {
            continue;
        };
        let mut tally = Tally::default();
        tally.collect(result.runs.iter(), selection, reference);
        for (name, values) in tally.measures {
            let entry = if values.is_empty() {
                Entry::Missing
            } else {
                Entry::MergedRuns {
                    inst_start: layout.row,
                    inst_end: layout.last_row(),
                    value: nan_median(&values),
                }
            };
            block.add_cell(layout.ordinal, &name, entry);
        }
    }
}

fn mark_degenerate(sheet: &mut Sheet) {
    let rows = HEADER_ROWS..sheet.result_offset();
    let mut degenerate = BTreeSet::new();
    for (measure, cols) in &sheet.numeric {
        for col in cols {
            if count_observed(&sheet.shadow.column(*col, rows.clone())) == 0 {
                info!(
                    sheet = %sheet.kind,
                    measure = measure.as_str(),
                    column = *col,
                    "column has no observations, excluded from summaries"
                );
                degenerate.insert(*col);
            }
        }
    }
    sheet.degenerate = degenerate;
}

/// Row min, median and max columns per measure.
type RowSummaryColumns = BTreeMap<String, [usize; 3]>;

fn add_row_summary(sheet: &mut Sheet, start: usize) -> RowSummaryColumns {
    let active = sheet.active_columns();
    let mut bounds: RowSummaryColumns = BTreeMap::new();
    if active.is_empty() {
        return bounds;
    }

    let mut col = start;
    for (slot, op) in RowOp::ALL.into_iter().enumerate() {
        sheet.set(0, col, Cell::text(op.label()));
        for (measure, cols) in &active {
            sheet.set(1, col, Cell::text(measure));
            sheet.columns.insert(
                col,
                ColumnInfo {
                    measure: measure.clone(),
                    kind: ColumnKind::Float,
                    role: ColumnRole::Summary(op),
                    key: None,
                    configuration: op.label().to_string(),
                },
            );
            for row in HEADER_ROWS..sheet.result_offset() {
                let values = sheet.shadow.pick(row, cols);
                if let Some(summary) = row_summary(op, cols, row, &values) {
                    sheet.set(row, col, Cell::Formula(summary.formula));
                    sheet.set_value(row, col, summary.value);
                }
            }
            bounds.entry(measure.clone()).or_insert([0; 3])[slot] = col;
            col += 1;
        }
    }
    bounds
}

fn add_column_summary(sheet: &mut Sheet, bounds: &RowSummaryColumns) {
    if sheet.data_rows == 0 {
        return;
    }
    let first = HEADER_ROWS;
    let last = sheet.result_offset() - 1;
    let offset = sheet.result_offset();
    let targets: Vec<(usize, ColumnInfo)> = sheet
        .columns
        .iter()
        .filter(|(col, info)| info.kind.is_numeric() && !sheet.degenerate.contains(*col))
        .map(|(col, info)| (*col, info.clone()))
        .collect();

    let range = |col: usize| Expr::range(CellRef::new(col, first).fix_row(), CellRef::new(col, last).fix_row());
    let fixed = |col: usize| Expr::range(CellRef::absolute(col, first), CellRef::absolute(col, last));

    for (col, info) in targets {
        let values = sheet.shadow.column(col, first..last + 1);
        if count_observed(&values) == 0 {
            continue;
        }
        let compared = match info.role {
            ColumnRole::Data => bounds.get(&info.measure).copied(),
            ColumnRole::Summary(_) => None,
        };

        let inputs = SummaryInputs {
            values: range(col),
            comparison: compared.map(|[min, median, max]| Comparison {
                min: fixed(min),
                median: fixed(median),
                max: fixed(max),
            }),
        };
        let rows: Vec<usize> = (first..=last).collect();
        write_column_summary(sheet, col, offset, &inputs, &rows, compared);

        if let Some(runs) = sheet.run_selector {
            let selector = CellRef::absolute(0, offset + RUN_SELECTOR_OFFSET);
            let filtered = |target: usize, abs_col: bool, base: Expr| {
                linker::run_filter(base, linker::run_select(selector, runs, target, abs_col), runs)
            };
            let inputs = SummaryInputs {
                values: filtered(col, false, range(col)),
                comparison: compared.map(|[min, median, max]| Comparison {
                    min: filtered(min, true, fixed(min)),
                    median: filtered(median, true, fixed(median)),
                    max: filtered(max, true, fixed(max)),
                }),
            };
            // the selector preselects the first run
            let rows: Vec<usize> = (first..=last).step_by(runs).collect();
            write_column_summary(sheet, col, offset + RUN_SELECTOR_OFFSET, &inputs, &rows, compared);
        }
    }
}

fn write_column_summary(
    sheet: &mut Sheet,
    col: usize,
    base: usize,
    inputs: &SummaryInputs,
    rows: &[usize],
    compared: Option<[usize; 3]>,
) {
    let pick = |sheet: &Sheet, col: usize| -> Vec<f64> {
        rows.iter().map(|row| sheet.shadow.get(*row, col)).collect()
    };
    let values = pick(sheet, col);
    let bound_values = compared.map(|[min, median, max]| {
        [pick(sheet, min), pick(sheet, median), pick(sheet, max)]
    });
    let stats = column_values(
        &values,
        bound_values.as_ref().map(|[min, median, max]| RowBounds {
            min,
            median,
            max,
        }),
    );
    for ((stat, formula), (_, value)) in column_formulas(inputs).into_iter().zip(stats) {
        sheet.set(base + stat.offset(), col, Cell::Formula(formula));
        sheet.set_value(base + stat.offset(), col, value);
    }
}

fn add_styles(sheet: &mut Sheet, selection: &MeasureSelection) {
    let offset = sheet.result_offset();
    let mut summary_blocks = vec![offset];
    if sheet.run_selector.is_some() {
        summary_blocks.push(offset + RUN_SELECTOR_OFFSET);
    }

    for (measure, cols) in sheet.active_columns() {
        let mode = selection.mode(&measure);
        let Some(threshold) = mode.threshold() else {
            continue;
        };
        if mode == MeasureMode::Timeout {
            for col in &cols {
                sheet.formats.insert(*col, NumberFormat::Integer);
            }
        }
        for row in HEADER_ROWS..offset {
            sheet.style_row(row, &cols, threshold, Orientation::LowerIsBetter);
        }
        for base in &summary_blocks {
            for stat in ColumnStat::ALL {
                let orientation = if stat.higher_is_better() {
                    Orientation::HigherIsBetter
                } else {
                    Orientation::LowerIsBetter
                };
                sheet.style_row(base + stat.offset(), &cols, threshold, orientation);
            }
        }
    }
}
