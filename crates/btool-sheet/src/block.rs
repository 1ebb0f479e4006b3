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

//! Per-configuration column groups.
//!
//! A [`ConfigBlock`] collects the cells of one (setting, machine) pair. It
//! allocates a column the first time a measure shows up and keeps a
//! widened kind per column as more cells arrive.

use std::collections::BTreeMap;

use btool_core::{MachineId, MeasureKind, MeasureValue, Results, SettingId};

/// Column kind, widened as cells are added.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum ColumnKind {
    /// Only placeholders for missing values seen so far.
    Empty,
    Float,
    Text,
    Bool,
    /// Class-level aggregate of instance values.
    ClassResult,
    /// Per-instance aggregate over runs.
    MergedRuns,
}

impl ColumnKind {
    /// Least upper bound of two kinds.
    ///
    /// `Empty` is the identity; equal kinds stay; any conflict widens to
    /// `Text`, which absorbs everything. The operation is commutative and
    /// associative, so the final kind does not depend on ingestion order.
    ///
    /// # Examples
    ///
    /// ```
    /// use btool_sheet::ColumnKind;
    ///
    /// assert_eq!(ColumnKind::Empty.widen(ColumnKind::Float), ColumnKind::Float);
    /// assert_eq!(ColumnKind::Float.widen(ColumnKind::Float), ColumnKind::Float);
    /// assert_eq!(ColumnKind::Float.widen(ColumnKind::Text), ColumnKind::Text);
    /// assert_eq!(ColumnKind::Text.widen(ColumnKind::Float), ColumnKind::Text);
    /// ```
    pub fn widen(self, other: ColumnKind) -> ColumnKind {
        match (self, other) {
            (ColumnKind::Empty, kind) | (kind, ColumnKind::Empty) => kind,
            (a, b) if a == b => a,
            _ => ColumnKind::Text,
        }
    }

    /// Whether the column takes part in row and column summaries.
    pub fn is_numeric(self) -> bool {
        matches!(
            self,
            ColumnKind::Float | ColumnKind::ClassResult | ColumnKind::MergedRuns
        )
    }
}

impl From<MeasureKind> for ColumnKind {
    fn from(kind: MeasureKind) -> Self {
        match kind {
            MeasureKind::Float => ColumnKind::Float,
            MeasureKind::String => ColumnKind::Text,
            MeasureKind::Bool => ColumnKind::Bool,
            MeasureKind::Missing => ColumnKind::Empty,
        }
    }
}

/// A value waiting in a block until the sheet is assembled.
#[derive(Debug, Clone, PartialEq)]
pub enum Entry {
    Missing,
    Float(f64),
    Text(String),
    Bool(bool),
    /// Aggregate over an instance-level row span.
    ClassAggregate {
        inst_start: usize,
        inst_end: usize,
        value: f64,
    },
    /// Criterion-selectable aggregate over one instance's runs.
    MergedRuns {
        inst_start: usize,
        inst_end: usize,
        value: f64,
    },
}

impl Entry {
    pub fn kind(&self) -> ColumnKind {
        match self {
            Entry::Missing => ColumnKind::Empty,
            Entry::Float(_) => ColumnKind::Float,
            Entry::Text(_) => ColumnKind::Text,
            Entry::Bool(_) => ColumnKind::Bool,
            Entry::ClassAggregate { .. } => ColumnKind::ClassResult,
            Entry::MergedRuns { .. } => ColumnKind::MergedRuns,
        }
    }
}

impl From<&MeasureValue> for Entry {
    fn from(value: &MeasureValue) -> Self {
        match value {
            MeasureValue::Float(number) => Entry::Float(*number),
            MeasureValue::Str(text) => Entry::Text(text.clone()),
            MeasureValue::Bool(flag) => Entry::Bool(*flag),
            MeasureValue::Missing => Entry::Missing,
        }
    }
}

/// Sort key of a configuration: system order, setting order, machine name.
#[derive(Debug, Clone, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct BlockKey {
    system_order: usize,
    setting_order: usize,
    machine_name: String,
    setting: SettingId,
    machine: MachineId,
}

impl BlockKey {
    pub fn new(results: &Results, setting: SettingId, machine: MachineId) -> Self {
        let entry = results.setting(setting);
        Self {
            system_order: results.system(entry.system).order,
            setting_order: entry.order,
            machine_name: results.machine(machine).name.clone(),
            setting,
            machine,
        }
    }

    pub fn setting(&self) -> SettingId {
        self.setting
    }

    pub fn machine(&self) -> MachineId {
        self.machine
    }
}

/// One measure column of a block.
#[derive(Debug, Clone, PartialEq)]
pub struct BlockColumn {
    pub measure: String,
    pub kind: ColumnKind,
    /// Entries by data row.
    pub cells: BTreeMap<usize, Entry>,
}

/// Column group of one configuration.
#[derive(Debug, Clone, PartialEq)]
pub struct ConfigBlock {
    key: BlockKey,
    columns: Vec<BlockColumn>,
}

impl ConfigBlock {
    pub fn new(key: BlockKey) -> Self {
        Self {
            key,
            columns: Vec::new(),
        }
    }

    pub fn key(&self) -> &BlockKey {
        &self.key
    }

    /// Places `entry` at data row `row` of the measure's column, allocating
    /// the column on first sight and widening its kind otherwise.
    pub fn add_cell(&mut self, row: usize, measure: &str, entry: Entry) {
        let kind = entry.kind();
        let column = match self.columns.iter().position(|c| c.measure == measure) {
            Some(idx) => {
                let column = &mut self.columns[idx];
                column.kind = column.kind.widen(kind);
                column
            }
            None => {
                self.columns.push(BlockColumn {
                    measure: measure.to_string(),
                    kind,
                    cells: BTreeMap::new(),
                });
                let last = self.columns.len() - 1;
                &mut self.columns[last]
            }
        };
        column.cells.insert(row, entry);
    }

    /// Columns in first-seen order.
    pub fn columns(&self) -> &[BlockColumn] {
        &self.columns
    }

    pub fn kind(&self, measure: &str) -> Option<ColumnKind> {
        self.columns
            .iter()
            .find(|c| c.measure == measure)
            .map(|c| c.kind)
    }

    /// Display name of the configuration.
    pub fn gen_name(&self, results: &Results, include_machine: bool) -> String {
        results.configuration_name(self.key.setting, self.key.machine, include_machine)
    }
}
