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

//! Result data model for btool.
//!
//! This crate holds everything the tabulation engine consumes:
//!
//! - [`Results`]: arena of declared machines, systems, settings, benchmarks
//!   and the measured runs grouped by project and runspec
//! - [`parse_results`]: streaming reader for XML result files
//! - [`MeasureSelection`] and [`ProjectFilter`]: the `-m` and `-p` options
//! - [`BenchmarkMerge`]: the row layout shared by all result sheets
//!
//! # Example
//!
//! ```
//! use btool_core::{parse_results, BenchmarkMerge, ProjectFilter};
//!
//! let xml = r#"<result>
//!   <machine name="m" cpu="c" memory="1GB"/>
//!   <system name="clasp" version="3" measures="clasp" config="c">
//!     <setting name="default" cmdline=""/>
//!   </system>
//!   <benchmark name="b"><class name="c" id="0"><instance name="i" id="0"/></class></benchmark>
//!   <project name="p" job="j">
//!     <runspec machine="m" system="clasp" version="3" benchmark="b" setting="default">
//!       <class id="0"><instance id="0"><run number="1">
//!         <measure name="time" type="float" val="1.0"/>
//!       </run></instance></class>
//!     </runspec>
//!   </project>
//! </result>"#;
//!
//! let results = parse_results(xml).unwrap();
//! let projects = ProjectFilter::all().select(&results);
//! let merge = BenchmarkMerge::new(&results, &projects);
//! assert_eq!(merge.instance_rows(), 1);
//! ```

mod error;
mod measure;
mod merge;
mod model;
mod parser;
mod time;

pub use error::{CoreError, Result};
pub use measure::{MeasureMode, MeasureSelection, MeasureSpec, ProjectFilter};
pub use merge::{BenchmarkMerge, ClassLayout, InstanceLayout};
pub use model::{
    BenchClass, Benchmark, BenchmarkId, ClassId, ClassResult, Config, DistJob, Instance,
    InstanceId, InstanceResult, Job, Machine, MachineId, MeasureKind, MeasureValue, Measurement,
    Project, ProjectId, Results, Run, Runspec, SeqJob, Setting, SettingId, System, SystemId,
};
pub use parser::parse_results;
pub use time::xml_time;
