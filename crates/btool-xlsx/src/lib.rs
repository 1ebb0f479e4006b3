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

//! Excel output for btool reports.
//!
//! Writes a [`Report`](btool_sheet::Report) as an Office Open XML workbook
//! through `rust_xlsxwriter`. Formulas use the Excel dialect and carry their
//! precomputed results, dropdown controls become list validations and the
//! result sheets keep their header rows and label column frozen.
//!
//! # Example
//!
//! ```rust
//! use btool_xlsx::{to_xlsx_buffer, ToXlsxConfig};
//! use btool_sheet::{Report, ReportConfig};
//! use btool_core::Results;
//!
//! let report = Report::build(&Results::new(), &ReportConfig::default());
//! let bytes = to_xlsx_buffer(&report, &ToXlsxConfig::default()).unwrap();
//! assert_eq!(&bytes[..2], b"PK");
//! ```

mod error;
mod to_xlsx;

pub use error::{Result, XlsxExportError};
pub use to_xlsx::{to_xlsx_buffer, write_xlsx, ToXlsxConfig};
