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

//! Report assembly: which sheets exist and in which order they are built.

use std::collections::{BTreeMap, BTreeSet, VecDeque};

use btool_core::{BenchmarkMerge, MeasureSelection, ProjectFilter, Results};
use tracing::{debug, info};

use crate::address::SheetKind;
use crate::charts::{charts_sheet, helper_sheet, ChartLayout};
use crate::sheet::{ResultSheet, Sheet};

/// Report options.
#[derive(Debug, Clone, PartialEq)]
pub struct ReportConfig {
    /// Measures to tabulate, with their highlighting modes.
    pub measures: MeasureSelection,
    /// Projects whose runspecs are included.
    pub projects: ProjectFilter,
    /// Emit the Merged_Runs sheet.
    pub merged_runs: bool,
    /// Emit the Helper and Charts sheets.
    pub charts: bool,
}

impl Default for ReportConfig {
    fn default() -> Self {
        Self {
            measures: MeasureSelection::default(),
            projects: ProjectFilter::all(),
            merged_runs: true,
            charts: true,
        }
    }
}

/// Sheets a sheet reads from while being built.
pub fn dependencies(kind: SheetKind) -> &'static [SheetKind] {
    match kind {
        SheetKind::Instances => &[],
        SheetKind::MergedRuns | SheetKind::Classes | SheetKind::Charts => &[SheetKind::Instances],
        SheetKind::Helper => &[
            SheetKind::Instances,
            SheetKind::MergedRuns,
            SheetKind::Charts,
        ],
    }
}

/// Build order of `enabled`: every sheet comes after the enabled sheets it
/// depends on. Dependencies on disabled sheets are ignored.
pub fn build_order(enabled: &BTreeSet<SheetKind>) -> Vec<SheetKind> {
    let mut pending: BTreeMap<SheetKind, usize> = enabled
        .iter()
        .map(|kind| {
            let count = dependencies(*kind)
                .iter()
                .filter(|dep| enabled.contains(dep))
                .count();
            (*kind, count)
        })
        .collect();
    let mut ready: VecDeque<SheetKind> = pending
        .iter()
        .filter(|(_, count)| **count == 0)
        .map(|(kind, _)| *kind)
        .collect();

    let mut order = Vec::with_capacity(enabled.len());
    while let Some(kind) = ready.pop_front() {
        order.push(kind);
        for (other, count) in pending.iter_mut() {
            if *count > 0 && dependencies(*other).contains(&kind) {
                *count -= 1;
                if *count == 0 {
                    ready.push_back(*other);
                }
            }
        }
    }
    order
}

/// All sheets of one result file.
#[derive(Debug, Clone, PartialEq)]
pub struct Report {
    sheets: BTreeMap<SheetKind, Sheet>,
    job_timeouts: Vec<u64>,
}

impl Report {
    /// Tabulates `results` under `config`.
    pub fn build(results: &Results, config: &ReportConfig) -> Self {
        let projects = config.projects.select(results);
        let merge = BenchmarkMerge::new(results, &projects);
        info!(
            projects = projects.len(),
            instances = merge.instances().len(),
            rows = merge.instance_rows(),
            "building report"
        );

        let mut enabled: BTreeSet<SheetKind> = [SheetKind::Instances, SheetKind::Classes].into();
        if config.merged_runs {
            enabled.insert(SheetKind::MergedRuns);
        }
        if config.charts {
            enabled.insert(SheetKind::Charts);
            enabled.insert(SheetKind::Helper);
        }

        let runspecs: Vec<_> = projects
            .iter()
            .flat_map(|id| results.project(*id).runspecs.iter())
            .collect();
        let mut sheets: BTreeMap<SheetKind, Sheet> = BTreeMap::new();
        let mut layout = None;

        for kind in build_order(&enabled) {
            let sheet = match kind {
                SheetKind::Instances => {
                    let mut builder = ResultSheet::instances(results, &merge, &config.measures);
                    for runspec in &runspecs {
                        builder.add_runspec(runspec);
                    }
                    builder.finalize()
                }
                SheetKind::Classes | SheetKind::MergedRuns => {
                    let Some(instances) = sheets.get(&SheetKind::Instances) else {
                        continue;
                    };
                    let mut builder = if kind == SheetKind::Classes {
                        ResultSheet::classes(results, &merge, &config.measures, instances)
                    } else {
                        ResultSheet::merged_runs(results, &merge, &config.measures, instances)
                    };
                    for runspec in &runspecs {
                        builder.add_runspec(runspec);
                    }
                    builder.finalize()
                }
                SheetKind::Charts => {
                    layout = sheets
                        .get(&SheetKind::Instances)
                        .and_then(|instances| ChartLayout::from_instances(instances, &config.measures));
                    match &layout {
                        Some(layout) => charts_sheet(layout),
                        None => continue,
                    }
                }
                SheetKind::Helper => {
                    let Some(layout) = &layout else {
                        continue;
                    };
                    let groups: Vec<&Sheet> = [SheetKind::Instances, SheetKind::MergedRuns]
                        .iter()
                        .filter_map(|kind| sheets.get(kind))
                        .collect();
                    helper_sheet(layout, &groups)
                }
            };
            debug!(sheet = %kind, "built sheet");
            sheets.insert(kind, sheet);
        }

        Self {
            sheets,
            job_timeouts: results.jobs().iter().map(|job| job.timeout()).collect(),
        }
    }

    /// Sheets in document order.
    pub fn sheets(&self) -> impl Iterator<Item = &Sheet> {
        self.sheets.values()
    }

    pub fn sheet(&self, kind: SheetKind) -> Option<&Sheet> {
        self.sheets.get(&kind)
    }

    pub fn len(&self) -> usize {
        self.sheets.len()
    }

    /// Timeout in seconds of every declared job, in declaration order.
    pub fn job_timeouts(&self) -> &[u64] {
        &self.job_timeouts
    }

    pub fn is_empty(&self) -> bool {
        self.sheets.is_empty()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn position(order: &[SheetKind], kind: SheetKind) -> usize {
        order.iter().position(|k| *k == kind).unwrap()
    }

    #[test]
    fn test_full_build_order() {
        let order = build_order(&SheetKind::ALL.into_iter().collect());
        assert_eq!(order.len(), 5);
        assert_eq!(order[0], SheetKind::Instances);
        for kind in SheetKind::ALL {
            for dep in dependencies(kind) {
                assert!(position(&order, *dep) < position(&order, kind));
            }
        }
    }

    #[test]
    fn test_disabled_dependencies_are_ignored() {
        let enabled: BTreeSet<_> = [SheetKind::Instances, SheetKind::Charts, SheetKind::Helper].into();
        let order = build_order(&enabled);
        assert_eq!(
            order,
            vec![SheetKind::Instances, SheetKind::Charts, SheetKind::Helper]
        );
    }

    #[test]
    fn test_empty_results_still_build() {
        let report = Report::build(&Results::new(), &ReportConfig::default());
        assert!(report.sheet(SheetKind::Instances).is_some());
        assert!(report.sheet(SheetKind::Classes).is_some());
        assert!(report.sheet(SheetKind::Charts).is_none());
        assert!(report.sheet(SheetKind::Helper).is_none());
        assert_eq!(report.sheet(SheetKind::Instances).unwrap().data_rows(), 0);
        assert!(report.job_timeouts().is_empty());
    }
}
