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

//! btool CLI library for command-line parsing and execution.
//!
//! # Commands
//!
//! - **conv**: tabulate a benchmark result file into an OpenDocument or
//!   Excel spreadsheet, optionally exporting the raw values as CSV
//!
//! # Examples
//!
//! ```no_run
//! use btool_cli::commands::{conv, ConvOptions};
//!
//! # fn main() -> Result<(), btool_cli::error::CliError> {
//! conv(&ConvOptions {
//!     input: Some("results.xml".into()),
//!     output: "report.xlsx".into(),
//!     projects: Default::default(),
//!     measures: Default::default(),
//!     format: None,
//!     export_values: None,
//!     merged_runs: true,
//!     charts: true,
//! })?;
//! # Ok(())
//! # }
//! ```
//!
//! # Security
//!
//! Result files larger than `BTOOL_MAX_FILE_SIZE` bytes (default 1 GB) are
//! rejected before they are read.

pub mod cli;
pub mod commands;
pub mod error;
