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

//! Streaming reader for XML result files.
//!
//! The file declares machines, configs, systems with their settings, jobs
//! and benchmarks, followed by projects whose runspecs carry the measured
//! runs:
//!
//! ```xml
//! <result>
//!   <machine name="zuse" cpu="24x8xE5520@2.27GHz" memory="24GB"/>
//!   <system name="clasp" version="3.3.0" measures="clasp" config="seq-generic">
//!     <setting name="default" cmdline="--stats" tag="basic"/>
//!   </system>
//!   <seqjob name="seq-gen" timeout="120" runs="1" parallel="8"/>
//!   <benchmark name="seq-suite">
//!     <class name="queens" id="0"><instance name="q8.lp" id="0"/></class>
//!   </benchmark>
//!   <project name="clasp-big" job="seq-gen">
//!     <runspec machine="zuse" system="clasp" version="3.3.0" benchmark="seq-suite" setting="default">
//!       <class id="0"><instance id="0"><run number="1">
//!         <measure name="time" type="float" val="1.2"/>
//!       </run></instance></class>
//!     </runspec>
//!   </project>
//! </result>
//! ```

use std::collections::BTreeMap;

use quick_xml::events::{BytesStart, Event};
use quick_xml::Reader;
use tracing::debug;

use crate::error::{CoreError, Result};
use crate::model::{
    BenchmarkId, ClassId, ClassResult, DistJob, InstanceResult, Job, MeasureValue, ProjectId,
    Results, Run, Runspec, SeqJob, SystemId,
};
use crate::time::xml_time;

/// Parses a result document.
///
/// # Examples
///
/// ```
/// use btool_core::parse_results;
///
/// let results = parse_results(r#"<result><machine name="m" cpu="c" memory="1GB"/></result>"#).unwrap();
/// assert_eq!(results.machines()[0].name, "m");
/// ```
pub fn parse_results(xml: &str) -> Result<Results> {
    let mut reader = Reader::from_str(xml);
    reader.trim_text(true);

    let mut parser = ResultParser::default();
    loop {
        match reader.read_event() {
            Ok(Event::Start(e)) => parser.start(&e)?,
            Ok(Event::Empty(e)) => {
                parser.start(&e)?;
                parser.end(&element_name(&e));
            }
            Ok(Event::End(e)) => {
                let name = String::from_utf8_lossy(e.name().as_ref()).into_owned();
                parser.end(&name);
            }
            Ok(Event::Eof) => break,
            Ok(_) => {}
            Err(err) => {
                return Err(CoreError::Xml {
                    position: reader.buffer_position(),
                    message: err.to_string(),
                })
            }
        }
    }
    Ok(parser.results)
}

fn element_name(e: &BytesStart) -> String {
    String::from_utf8_lossy(e.name().as_ref()).into_owned()
}

/// Attributes of one element, in document order.
struct Attributes {
    element: String,
    values: Vec<(String, String)>,
}

impl Attributes {
    fn read(e: &BytesStart) -> Result<Self> {
        let element = element_name(e);
        let mut values = Vec::new();
        for attr in e.attributes() {
            let attr = attr.map_err(|err| CoreError::Xml {
                position: 0,
                message: format!("<{}>: {}", element, err),
            })?;
            let key = String::from_utf8_lossy(attr.key.as_ref()).into_owned();
            let value = attr
                .unescape_value()
                .map_err(|err| CoreError::invalid(&element, &key, "", err.to_string()))?
                .into_owned();
            values.push((key, value));
        }
        Ok(Self { element, values })
    }

    fn optional(&self, name: &str) -> Option<&str> {
        self.values
            .iter()
            .find(|(key, _)| key == name)
            .map(|(_, value)| value.as_str())
    }

    fn required(&self, name: &str) -> Result<&str> {
        self.optional(name)
            .ok_or_else(|| CoreError::missing(&self.element, name))
    }

    fn integer<T: std::str::FromStr>(&self, name: &str) -> Result<T> {
        let raw = self.required(name)?;
        raw.trim()
            .parse()
            .map_err(|_| CoreError::invalid(&self.element, name, raw, "not an integer"))
    }

    fn time(&self, name: &str) -> Result<u64> {
        let raw = self.required(name)?;
        xml_time(raw).map_err(|err| CoreError::invalid(&self.element, name, raw, err.to_string()))
    }

    /// Attributes other than `known`.
    fn rest(&self, known: &[&str]) -> BTreeMap<String, String> {
        self.values
            .iter()
            .filter(|(key, _)| !known.contains(&key.as_str()))
            .cloned()
            .collect()
    }
}

#[derive(Default)]
struct ResultParser {
    results: Results,
    system: Option<SystemId>,
    benchmark: Option<BenchmarkId>,
    class: Option<ClassId>,
    project: Option<ProjectId>,
    in_runspec: bool,
    in_class_result: bool,
    in_instance_result: bool,
    in_run: bool,
}

impl ResultParser {
    fn start(&mut self, e: &BytesStart) -> Result<()> {
        let attrs = Attributes::read(e)?;
        match attrs.element.as_str() {
            "result" => {}
            "machine" => {
                self.results.add_machine(
                    attrs.required("name")?,
                    attrs.required("cpu")?,
                    attrs.required("memory")?,
                );
            }
            "config" => {
                self.results
                    .add_config(attrs.required("name")?, attrs.required("template")?);
            }
            "system" => {
                self.system = Some(self.results.add_system(
                    attrs.required("name")?,
                    attrs.required("version")?,
                    attrs.required("config")?,
                    attrs.required("measures")?,
                ));
            }
            "setting" => {
                let system = self
                    .system
                    .ok_or_else(|| CoreError::misplaced("setting", "system"))?;
                self.results.add_setting(
                    system,
                    attrs.required("name")?,
                    attrs.required("cmdline")?,
                    attrs.optional("tag").map(str::to_string),
                    attrs.rest(&["name", "cmdline", "tag"]),
                );
            }
            "seqjob" => {
                self.results.add_job(Job::Seq(SeqJob {
                    name: attrs.required("name")?.to_string(),
                    timeout: attrs.time("timeout")?,
                    runs: attrs.integer("runs")?,
                    parallel: attrs.integer("parallel")?,
                    attributes: attrs.rest(&["name", "timeout", "runs", "parallel"]),
                }));
            }
            "distjob" | "pbsjob" => {
                self.results.add_job(Job::Dist(DistJob {
                    name: attrs.required("name")?.to_string(),
                    timeout: attrs.time("timeout")?,
                    runs: attrs.integer("runs")?,
                    script_mode: attrs.required("script_mode")?.to_string(),
                    walltime: attrs.required("walltime")?.to_string(),
                    partition: attrs.optional("partition").map(str::to_string),
                    attributes: attrs.rest(&[
                        "name",
                        "timeout",
                        "runs",
                        "script_mode",
                        "walltime",
                        "partition",
                    ]),
                }));
            }
            "benchmark" => {
                self.benchmark = Some(self.results.add_benchmark(attrs.required("name")?));
            }
            "project" => {
                self.project = Some(
                    self.results
                        .add_project(attrs.required("name")?, attrs.required("job")?),
                );
            }
            "runspec" => self.start_runspec(&attrs)?,
            "class" => self.start_class(&attrs)?,
            "instance" => self.start_instance(&attrs)?,
            "run" => self.start_run(&attrs)?,
            "measure" => {
                if !self.in_run {
                    return Err(CoreError::misplaced("measure", "run"));
                }
                let value = MeasureValue::from_typed(attrs.required("type")?, attrs.required("val")?);
                let name = attrs.required("name")?.to_string();
                if let Some(run) = self.current_run() {
                    run.record(name, value);
                }
            }
            other => debug!(element = other, "ignoring unknown element"),
        }
        Ok(())
    }

    fn end(&mut self, name: &str) {
        match name {
            "system" => self.system = None,
            "benchmark" => {
                self.benchmark = None;
                self.class = None;
            }
            "project" => self.project = None,
            "runspec" => self.in_runspec = false,
            "class" => {
                if self.benchmark.is_some() {
                    self.class = None;
                } else {
                    self.in_class_result = false;
                }
            }
            "instance" => self.in_instance_result = false,
            "run" => self.in_run = false,
            _ => {}
        }
    }

    fn start_runspec(&mut self, attrs: &Attributes) -> Result<()> {
        let project = self
            .project
            .ok_or_else(|| CoreError::misplaced("runspec", "project"))?;
        let machine_name = attrs.required("machine")?;
        let machine = self
            .results
            .find_machine(machine_name)
            .ok_or_else(|| CoreError::unknown("runspec", "machine", machine_name))?;
        let (system_name, version) = (attrs.required("system")?, attrs.required("version")?);
        let system = self
            .results
            .find_system(system_name, version)
            .ok_or_else(|| {
                CoreError::unknown("runspec", "system", format!("{}-{}", system_name, version))
            })?;
        let setting_name = attrs.required("setting")?;
        let setting = self
            .results
            .find_setting(system, setting_name)
            .ok_or_else(|| CoreError::unknown("runspec", "setting", setting_name))?;
        let benchmark_name = attrs.required("benchmark")?;
        let benchmark = self
            .results
            .find_benchmark(benchmark_name)
            .ok_or_else(|| CoreError::unknown("runspec", "benchmark", benchmark_name))?;

        self.results
            .project_mut(project)
            .runspecs
            .push(Runspec::new(machine, setting, benchmark));
        self.in_runspec = true;
        Ok(())
    }

    fn start_class(&mut self, attrs: &Attributes) -> Result<()> {
        let id: u64 = attrs.integer("id")?;
        if let Some(benchmark) = self.benchmark {
            self.class = Some(self.results.add_class(benchmark, attrs.required("name")?, id));
            return Ok(());
        }
        if !self.in_runspec {
            return Err(CoreError::misplaced("class", "benchmark or runspec"));
        }
        let runspec = self.current_runspec_ref()?;
        let benchmark = runspec.benchmark;
        let class = self
            .results
            .find_class(benchmark, id)
            .ok_or_else(|| CoreError::unknown("class", "class id", id.to_string()))?;
        if let Some(runspec) = self.current_runspec() {
            runspec.classes.push(ClassResult {
                class,
                instances: Vec::new(),
            });
        }
        self.in_class_result = true;
        Ok(())
    }

    fn start_instance(&mut self, attrs: &Attributes) -> Result<()> {
        let id: u64 = attrs.integer("id")?;
        if self.benchmark.is_some() {
            let class = self
                .class
                .ok_or_else(|| CoreError::misplaced("instance", "class"))?;
            self.results.add_instance(class, attrs.required("name")?, id);
            return Ok(());
        }
        if !self.in_class_result {
            return Err(CoreError::misplaced("instance", "class"));
        }
        let class = self
            .current_runspec_ref()?
            .classes
            .last()
            .map(|c| c.class)
            .ok_or_else(|| CoreError::misplaced("instance", "class"))?;
        let instance = self
            .results
            .find_instance(class, id)
            .ok_or_else(|| CoreError::unknown("instance", "instance id", id.to_string()))?;
        if let Some(class_result) = self.current_runspec().and_then(|r| r.classes.last_mut()) {
            class_result.instances.push(InstanceResult {
                instance,
                runs: Vec::new(),
            });
        }
        self.in_instance_result = true;
        Ok(())
    }

    fn start_run(&mut self, attrs: &Attributes) -> Result<()> {
        if self.benchmark.is_some() {
            return Ok(());
        }
        if !self.in_instance_result {
            return Err(CoreError::misplaced("run", "instance"));
        }
        let number: usize = attrs.integer("number")?;
        if number == 0 {
            return Err(CoreError::invalid("run", "number", "0", "runs are numbered from 1"));
        }
        if let Some(instance) = self
            .current_runspec()
            .and_then(|r| r.classes.last_mut())
            .and_then(|c| c.instances.last_mut())
        {
            instance.runs.push(Run::new(number));
        }
        self.in_run = true;
        Ok(())
    }

    fn current_runspec_ref(&self) -> Result<&Runspec> {
        self.project
            .and_then(|p| self.results.project(p).runspecs.last())
            .ok_or_else(|| CoreError::misplaced("class", "runspec"))
    }

    fn current_runspec(&mut self) -> Option<&mut Runspec> {
        let project = self.project?;
        self.results.project_mut(project).runspecs.last_mut()
    }

    fn current_run(&mut self) -> Option<&mut Run> {
        self.current_runspec()?
            .classes
            .last_mut()?
            .instances
            .last_mut()?
            .runs
            .last_mut()
    }
}
