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

//! Row layout shared by all result sheets.
//!
//! Merging the selected projects fixes one ordering of benchmark classes and
//! instances (benchmark name, class name, instance name) and assigns every
//! instance a block of rows, one per run, on the instance-level sheet.

use std::collections::{BTreeSet, HashMap};

use crate::model::{BenchmarkId, ClassId, InstanceId, ProjectId, Results};

/// Placement of one instance.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct InstanceLayout {
    pub instance: InstanceId,
    /// Position among all instances (one row per instance).
    pub ordinal: usize,
    /// First data row of the run block (0-based, header rows excluded).
    pub row: usize,
    /// Largest number of runs reported for this instance.
    pub max_runs: usize,
}

impl InstanceLayout {
    /// Height of the run block; instances without runs still get a row.
    pub fn height(&self) -> usize {
        self.max_runs.max(1)
    }

    /// Last data row of the run block.
    pub fn last_row(&self) -> usize {
        self.row + self.height() - 1
    }
}

/// Placement of one benchmark class.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ClassLayout {
    pub class: ClassId,
    /// Row on the class-level sheet (0-based, header rows excluded).
    pub row: usize,
    /// First instance-level data row of the class.
    pub inst_start: usize,
    /// Last instance-level data row of the class.
    pub inst_end: usize,
    /// Indices into [`BenchmarkMerge::instances`].
    pub instances: Vec<usize>,
}

/// Ordered set of benchmark classes and instances of a report.
#[derive(Debug, Clone, Default)]
pub struct BenchmarkMerge {
    classes: Vec<ClassLayout>,
    instances: Vec<InstanceLayout>,
    by_class: HashMap<ClassId, usize>,
    by_instance: HashMap<InstanceId, usize>,
    rows: usize,
}

impl BenchmarkMerge {
    /// Lays out every benchmark referenced by a runspec of `projects`.
    pub fn new(results: &Results, projects: &[ProjectId]) -> Self {
        let mut max_runs: HashMap<InstanceId, usize> = HashMap::new();
        let mut benchmarks: BTreeSet<BenchmarkId> = BTreeSet::new();
        for project in projects {
            for runspec in &results.project(*project).runspecs {
                for result in runspec.instance_results() {
                    let entry = max_runs.entry(result.instance).or_insert(0);
                    *entry = (*entry).max(result.runs.len());
                }
                benchmarks.insert(runspec.benchmark);
            }
        }

        let mut benchmarks: Vec<BenchmarkId> = benchmarks.into_iter().collect();
        benchmarks.sort_by(|a, b| results.benchmark(*a).name.cmp(&results.benchmark(*b).name));

        let mut merge = Self::default();
        for benchmark in benchmarks {
            let mut classes = results.benchmark(benchmark).classes.clone();
            classes.sort_by(|a, b| {
                let (a, b) = (results.class(*a), results.class(*b));
                a.name.cmp(&b.name).then(a.xml_id.cmp(&b.xml_id))
            });
            for class in classes {
                let mut instances = results.class(class).instances.clone();
                instances.sort_by(|a, b| {
                    let (a, b) = (results.instance(*a), results.instance(*b));
                    a.name.cmp(&b.name).then(a.xml_id.cmp(&b.xml_id))
                });

                let inst_start = merge.rows;
                let mut members = Vec::with_capacity(instances.len());
                for instance in instances {
                    let layout = InstanceLayout {
                        instance,
                        ordinal: merge.instances.len(),
                        row: merge.rows,
                        max_runs: max_runs.get(&instance).copied().unwrap_or(0),
                    };
                    merge.rows += layout.height();
                    merge.by_instance.insert(instance, merge.instances.len());
                    members.push(merge.instances.len());
                    merge.instances.push(layout);
                }
                let inst_end = merge.rows.saturating_sub(1).max(inst_start);

                merge.by_class.insert(class, merge.classes.len());
                merge.classes.push(ClassLayout {
                    class,
                    row: merge.classes.len(),
                    inst_start,
                    inst_end,
                    instances: members,
                });
            }
        }
        merge
    }

    pub fn classes(&self) -> &[ClassLayout] {
        &self.classes
    }

    pub fn instances(&self) -> &[InstanceLayout] {
        &self.instances
    }

    pub fn class(&self, id: ClassId) -> Option<&ClassLayout> {
        self.by_class.get(&id).map(|idx| &self.classes[*idx])
    }

    pub fn instance(&self, id: InstanceId) -> Option<&InstanceLayout> {
        self.by_instance.get(&id).map(|idx| &self.instances[*idx])
    }

    /// Number of data rows on the instance-level sheet.
    pub fn instance_rows(&self) -> usize {
        self.rows
    }

    /// Run count shared by every instance, if there is one.
    pub fn uniform_runs(&self) -> Option<usize> {
        let first = self.instances.first()?.max_runs;
        self.instances
            .iter()
            .all(|layout| layout.max_runs == first)
            .then_some(first)
    }
}
