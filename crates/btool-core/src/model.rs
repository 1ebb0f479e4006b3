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

//! Arena-backed model of a benchmark result file.
//!
//! Declarations (machines, systems, settings, benchmarks) and measured data
//! (projects, runspecs, runs) are stored in flat vectors on [`Results`] and
//! addressed through typed indices, so a run can point back at its setting
//! or instance without shared ownership.

use std::collections::BTreeMap;

use crate::measure::MeasureSelection;

macro_rules! entity_id {
    ($(#[$meta:meta])* $name:ident) => {
        $(#[$meta])*
        #[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
        #[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
        pub struct $name(usize);

        impl $name {
            /// Position of the entity in its arena.
            pub fn index(self) -> usize {
                self.0
            }
        }
    };
}

entity_id!(
    /// Index of a [`Machine`].
    MachineId
);
entity_id!(
    /// Index of a [`System`].
    SystemId
);
entity_id!(
    /// Index of a [`Setting`].
    SettingId
);
entity_id!(
    /// Index of a [`Benchmark`].
    BenchmarkId
);
entity_id!(
    /// Index of a [`BenchClass`].
    ClassId
);
entity_id!(
    /// Index of an [`Instance`].
    InstanceId
);
entity_id!(
    /// Index of a [`Project`].
    ProjectId
);

/// A machine the benchmarks ran on.
#[derive(Debug, Clone, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct Machine {
    pub name: String,
    pub cpu: String,
    pub memory: String,
}

/// A script template configuration.
#[derive(Debug, Clone, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct Config {
    pub name: String,
    pub template: String,
}

/// A solver system in a specific version.
#[derive(Debug, Clone, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct System {
    pub name: String,
    pub version: String,
    pub config: String,
    pub measures: String,
    /// Declaration order in the result file.
    pub order: usize,
    pub settings: Vec<SettingId>,
}

/// One command-line setting of a system.
#[derive(Debug, Clone, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct Setting {
    pub system: SystemId,
    pub name: String,
    pub cmdline: String,
    pub tag: Option<String>,
    /// Declaration order within the owning system.
    pub order: usize,
    /// Attributes not covered by the fields above.
    pub attributes: BTreeMap<String, String>,
}

/// Sequential job parameters.
#[derive(Debug, Clone, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct SeqJob {
    pub name: String,
    /// Timeout in seconds.
    pub timeout: u64,
    pub runs: usize,
    pub parallel: usize,
    pub attributes: BTreeMap<String, String>,
}

/// Cluster job parameters.
#[derive(Debug, Clone, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct DistJob {
    pub name: String,
    /// Timeout in seconds.
    pub timeout: u64,
    pub runs: usize,
    pub script_mode: String,
    pub walltime: String,
    pub partition: Option<String>,
    pub attributes: BTreeMap<String, String>,
}

/// A job declaration.
#[derive(Debug, Clone, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum Job {
    Seq(SeqJob),
    Dist(DistJob),
}

impl Job {
    pub fn name(&self) -> &str {
        match self {
            Job::Seq(job) => &job.name,
            Job::Dist(job) => &job.name,
        }
    }

    /// Timeout in seconds.
    pub fn timeout(&self) -> u64 {
        match self {
            Job::Seq(job) => job.timeout,
            Job::Dist(job) => job.timeout,
        }
    }

    pub fn runs(&self) -> usize {
        match self {
            Job::Seq(job) => job.runs,
            Job::Dist(job) => job.runs,
        }
    }
}

/// A named set of benchmark classes.
#[derive(Debug, Clone, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct Benchmark {
    pub name: String,
    pub classes: Vec<ClassId>,
}

/// A class of instances inside a benchmark.
#[derive(Debug, Clone, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct BenchClass {
    pub benchmark: BenchmarkId,
    pub name: String,
    /// Id unique within the benchmark, used by runspecs.
    pub xml_id: u64,
    pub instances: Vec<InstanceId>,
}

/// A single benchmark instance.
#[derive(Debug, Clone, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct Instance {
    pub class: ClassId,
    pub name: String,
    /// Id unique within the class, used by runspecs.
    pub xml_id: u64,
}

/// Kind of a measured value after normalization.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum MeasureKind {
    Float,
    String,
    Bool,
    /// Placeholder for an absent measurement.
    Missing,
}

/// A measured value.
#[derive(Debug, Clone, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum MeasureValue {
    Float(f64),
    Str(String),
    Bool(bool),
    Missing,
}

static MISSING: MeasureValue = MeasureValue::Missing;

impl MeasureValue {
    /// Builds a value from the `type`/`val` attribute pair of a `<measure>`.
    ///
    /// `int` is unified with `float`; numbers that fail to parse degrade to
    /// strings rather than failing the whole file.
    ///
    /// # Examples
    ///
    /// ```
    /// use btool_core::MeasureValue;
    ///
    /// assert_eq!(MeasureValue::from_typed("int", "3"), MeasureValue::Float(3.0));
    /// assert_eq!(MeasureValue::from_typed("None", "NaN"), MeasureValue::Missing);
    /// assert_eq!(
    ///     MeasureValue::from_typed("string", "SAT"),
    ///     MeasureValue::Str("SAT".to_string())
    /// );
    /// ```
    pub fn from_typed(kind: &str, value: &str) -> Self {
        match kind {
            "float" | "int" => match value.trim().parse::<f64>() {
                Ok(number) if number.is_nan() => MeasureValue::Missing,
                Ok(number) => MeasureValue::Float(number),
                Err(_) => MeasureValue::Str(value.to_string()),
            },
            "None" | "none" | "empty" => MeasureValue::Missing,
            "bool" | "boolean" => match value.trim() {
                "true" | "True" | "1" => MeasureValue::Bool(true),
                "false" | "False" | "0" => MeasureValue::Bool(false),
                _ => MeasureValue::Str(value.to_string()),
            },
            _ => MeasureValue::Str(value.to_string()),
        }
    }

    pub fn kind(&self) -> MeasureKind {
        match self {
            MeasureValue::Float(_) => MeasureKind::Float,
            MeasureValue::Str(_) => MeasureKind::String,
            MeasureValue::Bool(_) => MeasureKind::Bool,
            MeasureValue::Missing => MeasureKind::Missing,
        }
    }

    /// Numeric view of the value, `None` for anything but floats.
    pub fn as_f64(&self) -> Option<f64> {
        match self {
            MeasureValue::Float(value) => Some(*value),
            _ => None,
        }
    }
}

/// A named measurement of one run.
#[derive(Debug, Clone, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct Measurement {
    pub name: String,
    pub value: MeasureValue,
}

/// One execution of an instance under a setting.
#[derive(Debug, Clone, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct Run {
    /// Ordinal number, starting at 1.
    pub number: usize,
    pub measures: Vec<Measurement>,
}

impl Run {
    pub fn new(number: usize) -> Self {
        Self {
            number,
            measures: Vec::new(),
        }
    }

    /// Records a measurement, replacing an earlier one with the same name.
    pub fn record(&mut self, name: impl Into<String>, value: MeasureValue) {
        let name = name.into();
        match self.measures.iter_mut().find(|m| m.name == name) {
            Some(existing) => existing.value = value,
            None => self.measures.push(Measurement { name, value }),
        }
    }

    pub fn measure(&self, name: &str) -> Option<&MeasureValue> {
        self.measures
            .iter()
            .find(|m| m.name == name)
            .map(|m| &m.value)
    }

    /// Measurements visible under `selection`.
    ///
    /// An empty selection yields every recorded measure sorted by name.
    /// Otherwise exactly the selected measures are yielded in selection
    /// order, with [`MeasureValue::Missing`] standing in for absent ones.
    pub fn select<'a>(&'a self, selection: &'a MeasureSelection) -> Vec<(&'a str, &'a MeasureValue)> {
        if selection.is_empty() {
            let mut all: Vec<_> = self
                .measures
                .iter()
                .map(|m| (m.name.as_str(), &m.value))
                .collect();
            all.sort_by(|a, b| a.0.cmp(b.0));
            all
        } else {
            selection
                .iter()
                .map(|spec| {
                    let value = self.measure(&spec.name).unwrap_or(&MISSING);
                    (spec.name.as_str(), value)
                })
                .collect()
        }
    }
}

/// Runs of one instance.
#[derive(Debug, Clone, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct InstanceResult {
    pub instance: InstanceId,
    pub runs: Vec<Run>,
}

/// Instance results of one class.
#[derive(Debug, Clone, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct ClassResult {
    pub class: ClassId,
    pub instances: Vec<InstanceResult>,
}

/// Results of one (setting, machine, benchmark) combination.
#[derive(Debug, Clone, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct Runspec {
    pub machine: MachineId,
    pub setting: SettingId,
    pub benchmark: BenchmarkId,
    pub classes: Vec<ClassResult>,
}

impl Runspec {
    pub fn new(machine: MachineId, setting: SettingId, benchmark: BenchmarkId) -> Self {
        Self {
            machine,
            setting,
            benchmark,
            classes: Vec::new(),
        }
    }

    /// Iterates all instance results of all classes.
    pub fn instance_results(&self) -> impl Iterator<Item = &InstanceResult> {
        self.classes.iter().flat_map(|class| class.instances.iter())
    }
}

/// A project groups runspecs executed by one job.
#[derive(Debug, Clone, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct Project {
    pub name: String,
    pub job: String,
    pub runspecs: Vec<Runspec>,
}

/// Everything read from a result file.
#[derive(Debug, Clone, Default, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct Results {
    machines: Vec<Machine>,
    configs: Vec<Config>,
    systems: Vec<System>,
    settings: Vec<Setting>,
    jobs: Vec<Job>,
    benchmarks: Vec<Benchmark>,
    classes: Vec<BenchClass>,
    instances: Vec<Instance>,
    projects: Vec<Project>,
}

impl Results {
    pub fn new() -> Self {
        Self::default()
    }

    /// Declares a machine; a redeclaration replaces the earlier entry.
    pub fn add_machine(
        &mut self,
        name: impl Into<String>,
        cpu: impl Into<String>,
        memory: impl Into<String>,
    ) -> MachineId {
        let machine = Machine {
            name: name.into(),
            cpu: cpu.into(),
            memory: memory.into(),
        };
        match self.find_machine(&machine.name) {
            Some(id) => {
                self.machines[id.0] = machine;
                id
            }
            None => {
                self.machines.push(machine);
                MachineId(self.machines.len() - 1)
            }
        }
    }

    pub fn add_config(&mut self, name: impl Into<String>, template: impl Into<String>) {
        let config = Config {
            name: name.into(),
            template: template.into(),
        };
        match self.configs.iter_mut().find(|c| c.name == config.name) {
            Some(existing) => *existing = config,
            None => self.configs.push(config),
        }
    }

    /// Declares a system; its order is the number of systems declared before.
    pub fn add_system(
        &mut self,
        name: impl Into<String>,
        version: impl Into<String>,
        config: impl Into<String>,
        measures: impl Into<String>,
    ) -> SystemId {
        let order = self.systems.len();
        self.systems.push(System {
            name: name.into(),
            version: version.into(),
            config: config.into(),
            measures: measures.into(),
            order,
            settings: Vec::new(),
        });
        SystemId(order)
    }

    /// Declares a setting of `system`; its order is local to the system.
    pub fn add_setting(
        &mut self,
        system: SystemId,
        name: impl Into<String>,
        cmdline: impl Into<String>,
        tag: Option<String>,
        attributes: BTreeMap<String, String>,
    ) -> SettingId {
        let id = SettingId(self.settings.len());
        let owner = &mut self.systems[system.0];
        let order = owner.settings.len();
        owner.settings.push(id);
        self.settings.push(Setting {
            system,
            name: name.into(),
            cmdline: cmdline.into(),
            tag,
            order,
            attributes,
        });
        id
    }

    pub fn add_job(&mut self, job: Job) {
        match self.jobs.iter_mut().find(|j| j.name() == job.name()) {
            Some(existing) => *existing = job,
            None => self.jobs.push(job),
        }
    }

    pub fn add_benchmark(&mut self, name: impl Into<String>) -> BenchmarkId {
        self.benchmarks.push(Benchmark {
            name: name.into(),
            classes: Vec::new(),
        });
        BenchmarkId(self.benchmarks.len() - 1)
    }

    pub fn add_class(
        &mut self,
        benchmark: BenchmarkId,
        name: impl Into<String>,
        xml_id: u64,
    ) -> ClassId {
        let id = ClassId(self.classes.len());
        self.classes.push(BenchClass {
            benchmark,
            name: name.into(),
            xml_id,
            instances: Vec::new(),
        });
        self.benchmarks[benchmark.0].classes.push(id);
        id
    }

    pub fn add_instance(&mut self, class: ClassId, name: impl Into<String>, xml_id: u64) -> InstanceId {
        let id = InstanceId(self.instances.len());
        self.instances.push(Instance {
            class,
            name: name.into(),
            xml_id,
        });
        self.classes[class.0].instances.push(id);
        id
    }

    pub fn add_project(&mut self, name: impl Into<String>, job: impl Into<String>) -> ProjectId {
        self.projects.push(Project {
            name: name.into(),
            job: job.into(),
            runspecs: Vec::new(),
        });
        ProjectId(self.projects.len() - 1)
    }

    pub fn project_mut(&mut self, id: ProjectId) -> &mut Project {
        &mut self.projects[id.0]
    }

    pub fn machine(&self, id: MachineId) -> &Machine {
        &self.machines[id.0]
    }

    pub fn system(&self, id: SystemId) -> &System {
        &self.systems[id.0]
    }

    pub fn setting(&self, id: SettingId) -> &Setting {
        &self.settings[id.0]
    }

    pub fn benchmark(&self, id: BenchmarkId) -> &Benchmark {
        &self.benchmarks[id.0]
    }

    pub fn class(&self, id: ClassId) -> &BenchClass {
        &self.classes[id.0]
    }

    pub fn instance(&self, id: InstanceId) -> &Instance {
        &self.instances[id.0]
    }

    pub fn project(&self, id: ProjectId) -> &Project {
        &self.projects[id.0]
    }

    pub fn machines(&self) -> &[Machine] {
        &self.machines
    }

    pub fn configs(&self) -> &[Config] {
        &self.configs
    }

    pub fn systems(&self) -> &[System] {
        &self.systems
    }

    pub fn jobs(&self) -> &[Job] {
        &self.jobs
    }

    pub fn benchmarks(&self) -> &[Benchmark] {
        &self.benchmarks
    }

    pub fn projects(&self) -> &[Project] {
        &self.projects
    }

    pub fn project_ids(&self) -> impl Iterator<Item = ProjectId> {
        (0..self.projects.len()).map(ProjectId)
    }

    pub fn find_machine(&self, name: &str) -> Option<MachineId> {
        self.machines.iter().position(|m| m.name == name).map(MachineId)
    }

    pub fn find_system(&self, name: &str, version: &str) -> Option<SystemId> {
        self.systems
            .iter()
            .position(|s| s.name == name && s.version == version)
            .map(SystemId)
    }

    pub fn find_setting(&self, system: SystemId, name: &str) -> Option<SettingId> {
        self.systems[system.0]
            .settings
            .iter()
            .copied()
            .find(|id| self.settings[id.0].name == name)
    }

    pub fn find_benchmark(&self, name: &str) -> Option<BenchmarkId> {
        self.benchmarks
            .iter()
            .position(|b| b.name == name)
            .map(BenchmarkId)
    }

    pub fn find_class(&self, benchmark: BenchmarkId, xml_id: u64) -> Option<ClassId> {
        self.benchmarks[benchmark.0]
            .classes
            .iter()
            .copied()
            .find(|id| self.classes[id.0].xml_id == xml_id)
    }

    pub fn find_instance(&self, class: ClassId, xml_id: u64) -> Option<InstanceId> {
        self.classes[class.0]
            .instances
            .iter()
            .copied()
            .find(|id| self.instances[id.0].xml_id == xml_id)
    }

    pub fn find_project(&self, name: &str) -> Option<ProjectId> {
        self.projects.iter().position(|p| p.name == name).map(ProjectId)
    }

    /// Display name of a (setting, machine) configuration:
    /// `<system>-<version>/<setting>`, with ` (<machine>)` appended when
    /// `include_machine` is set.
    pub fn configuration_name(
        &self,
        setting: SettingId,
        machine: MachineId,
        include_machine: bool,
    ) -> String {
        let setting = self.setting(setting);
        let system = self.system(setting.system);
        let mut name = format!("{}-{}/{}", system.name, system.version, setting.name);
        if include_machine {
            name.push_str(" (");
            name.push_str(&self.machine(machine).name);
            name.push(')');
        }
        name
    }

    /// Label of an instance row: `<class>/<instance>`.
    pub fn instance_label(&self, instance: InstanceId) -> String {
        let instance = self.instance(instance);
        format!("{}/{}", self.class(instance.class).name, instance.name)
    }
}
