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

//! Fluent builder for [`Results`] fixtures.

use std::collections::BTreeMap;

use btool_core::{
    BenchmarkId, ClassId, ClassResult, InstanceId, InstanceResult, MachineId, MeasureValue,
    ProjectId, Results, Run, Runspec, SettingId,
};

/// Builder for result sets without going through XML.
///
/// Settings and instances are addressed by name; runs are appended to the
/// runspec of the current machine, creating it on first use.
///
/// # Examples
///
/// ```
/// use btool_test::ResultsBuilder;
///
/// let results = ResultsBuilder::new()
///     .setting("clasp", "3.3.0", "default")
///     .setting("clasp", "3.3.0", "trendy")
///     .instance("suite", "queens", "q8.lp")
///     .run("default", "q8.lp", 1, &[("time", 7.0)])
///     .run("trendy", "q8.lp", 1, &[("time", 10.0)])
///     .build();
///
/// assert_eq!(results.projects()[0].runspecs.len(), 2);
/// ```
#[derive(Debug, Clone)]
pub struct ResultsBuilder {
    results: Results,
    machine: MachineId,
    project: ProjectId,
    settings: Vec<(String, SettingId)>,
    instances: Vec<(String, BenchmarkId, ClassId, InstanceId)>,
}

impl Default for ResultsBuilder {
    fn default() -> Self {
        Self::new()
    }
}

impl ResultsBuilder {
    /// Starts with machine `zuse` and project `clasp-big`.
    pub fn new() -> Self {
        let mut results = Results::new();
        let machine = results.add_machine("zuse", "24x8xE5520@2.27GHz", "24GB");
        let project = results.add_project("clasp-big", "seq-gen");
        Self {
            results,
            machine,
            project,
            settings: Vec::new(),
            instances: Vec::new(),
        }
    }

    /// Switches to (declaring if needed) another machine.
    pub fn machine(mut self, name: &str) -> Self {
        self.machine = match self.results.find_machine(name) {
            Some(id) => id,
            None => self.results.add_machine(name, "", ""),
        };
        self
    }

    /// Switches to (declaring if needed) another project.
    pub fn project(mut self, name: &str) -> Self {
        self.project = match self.results.find_project(name) {
            Some(id) => id,
            None => self.results.add_project(name, "seq-gen"),
        };
        self
    }

    /// Declares a setting, and its system on first sight.
    pub fn setting(mut self, system: &str, version: &str, setting: &str) -> Self {
        let system = match self.results.find_system(system, version) {
            Some(id) => id,
            None => self
                .results
                .add_system(system, version, "seq-generic", "clasp"),
        };
        let id = self
            .results
            .add_setting(system, setting, "", None, BTreeMap::new());
        self.settings.push((setting.to_string(), id));
        self
    }

    /// Declares an instance, and its benchmark and class on first sight.
    pub fn instance(mut self, benchmark: &str, class: &str, instance: &str) -> Self {
        let bench = match self.results.find_benchmark(benchmark) {
            Some(id) => id,
            None => self.results.add_benchmark(benchmark),
        };
        let existing = self
            .results
            .benchmark(bench)
            .classes
            .iter()
            .copied()
            .find(|id| self.results.class(*id).name == class);
        let class_id = match existing {
            Some(id) => id,
            None => {
                let xml_id = self.results.benchmark(bench).classes.len() as u64;
                self.results.add_class(bench, class, xml_id)
            }
        };
        let xml_id = self.results.class(class_id).instances.len() as u64;
        let id = self.results.add_instance(class_id, instance, xml_id);
        self.instances
            .push((instance.to_string(), bench, class_id, id));
        self
    }

    /// Adds a run with float measures.
    pub fn run(self, setting: &str, instance: &str, number: usize, measures: &[(&str, f64)]) -> Self {
        let values = measures
            .iter()
            .map(|(name, value)| (*name, MeasureValue::Float(*value)))
            .collect();
        self.run_values(setting, instance, number, values)
    }

    /// Adds a run with arbitrary measure values.
    ///
    /// # Panics
    ///
    /// Panics if the setting or instance was not declared.
    pub fn run_values(
        mut self,
        setting: &str,
        instance: &str,
        number: usize,
        measures: Vec<(&str, MeasureValue)>,
    ) -> Self {
        let setting = self
            .settings
            .iter()
            .find(|(name, _)| name == setting)
            .map(|(_, id)| *id)
            .unwrap_or_else(|| panic!("undeclared setting '{}'", setting));
        let (bench, class, instance) = self
            .instances
            .iter()
            .find(|(name, ..)| name == instance)
            .map(|(_, bench, class, id)| (*bench, *class, *id))
            .unwrap_or_else(|| panic!("undeclared instance '{}'", instance));

        let mut run = Run::new(number);
        for (name, value) in measures {
            run.record(name, value);
        }

        let machine = self.machine;
        let project = self.results.project_mut(self.project);
        let runspec = match project
            .runspecs
            .iter()
            .position(|r| r.machine == machine && r.setting == setting && r.benchmark == bench)
        {
            Some(idx) => &mut project.runspecs[idx],
            None => {
                project.runspecs.push(Runspec::new(machine, setting, bench));
                let last = project.runspecs.len() - 1;
                &mut project.runspecs[last]
            }
        };
        let class_result = match runspec.classes.iter().position(|c| c.class == class) {
            Some(idx) => &mut runspec.classes[idx],
            None => {
                runspec.classes.push(ClassResult {
                    class,
                    instances: Vec::new(),
                });
                let last = runspec.classes.len() - 1;
                &mut runspec.classes[last]
            }
        };
        match class_result
            .instances
            .iter_mut()
            .find(|r| r.instance == instance)
        {
            Some(result) => result.runs.push(run),
            None => class_result.instances.push(InstanceResult {
                instance,
                runs: vec![run],
            }),
        }
        self
    }

    pub fn build(self) -> Results {
        self.results
    }
}
