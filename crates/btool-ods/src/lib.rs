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

//! OpenDocument output for btool reports.
//!
//! Writes a [`Report`](btool_sheet::Report) as an OpenDocument
//! spreadsheet, either packaged (`.ods`, a ZIP archive around
//! `content.xml`) or flat (`.fods`, a single XML document). Both hold every
//! sheet, the highlight styles and the dropdown validations. Formulas use the OpenFormula
//! dialect (`of:=`, `;` separators, `[Sheet.A1]` references) and every
//! formula cell carries its precomputed value.
//!
//! # Example
//!
//! ```rust
//! use btool_ods::{to_ods_string, ToOdsConfig};
//! use btool_sheet::{Report, ReportConfig};
//! use btool_core::Results;
//!
//! let report = Report::build(&Results::new(), &ReportConfig::default());
//! let xml = to_ods_string(&report, &ToOdsConfig::default()).unwrap();
//! assert!(xml.contains(r#"table:name="Instances""#));
//! ```

mod error;
mod to_ods;

pub use error::{OdsError, Result};
pub use to_ods::{render_ods, to_ods_package, to_ods_string, write_ods, ToOdsConfig};
