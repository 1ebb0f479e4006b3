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

//! CSV export of tabulated benchmark values.
//!
//! # Example
//!
//! ```rust
//! use btool_csv::{export_values, ExportConfig};
//! use btool_sheet::{Report, ReportConfig};
//! use btool_core::Results;
//!
//! let report = Report::build(&Results::new(), &ReportConfig::default());
//! let csv = export_values(&report, &ExportConfig::default()).unwrap();
//! assert_eq!(csv, "instance,_metadata/offset,_metadata/timeout\n");
//! ```

mod error;
mod export;

pub use error::{CsvError, Result};
pub use export::{export_values, export_values_writer, write_values, ExportConfig};
