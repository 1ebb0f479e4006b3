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

//! Error types for Excel output.

use thiserror::Error;

/// Errors raised while writing an Excel workbook.
#[derive(Debug, Error)]
pub enum XlsxExportError {
    /// A cell could not be written.
    ///
    /// # Example
    ///
    /// ```text
    /// Failed to write Instances!B3: Row or column exceeds Excel's allowed limits
    /// ```
    #[error("Failed to write {sheet}!{cell}: {message}")]
    Cell {
        sheet: String,
        cell: String,
        message: String,
    },

    /// A sheet-wide setting was rejected.
    #[error("Invalid sheet '{sheet}': {message}")]
    Sheet { sheet: String, message: String },

    /// The workbook could not be assembled or saved.
    #[error("Workbook error: {0}")]
    Workbook(String),

    /// The output file could not be written.
    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),
}

/// Result type for Excel output.
pub type Result<T> = std::result::Result<T, XlsxExportError>;
